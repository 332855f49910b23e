/// Failure of a left action. The action performed no mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// A structure the action needs (menu, shader, pass, cheat list, ...)
    /// does not exist.
    #[error("missing {0}")]
    MissingContext(&'static str),
    /// An external collaborator rejected the request.
    #[error("host error: {0}")]
    Host(String),
}

/// Failure to bind a left action to an entry. The caller should treat the
/// entry as having no left action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no entry classification to bind against")]
    MissingClassification,
}

use super::actions::LeftAction;

/// Outcome of one resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A rule matched - stop resolving.
    Bound(LeftAction),
    /// No rule matched - try the next resolver.
    Declined,
}

impl Resolution {
    pub fn is_bound(self) -> bool {
        matches!(self, Resolution::Bound(_))
    }

    /// Keep this resolution if bound, otherwise run `next`.
    pub fn or_else(self, next: impl FnOnce() -> Resolution) -> Resolution {
        match self {
            Resolution::Bound(_) => self,
            Resolution::Declined => next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_else_short_circuits() {
        let bound = Resolution::Bound(LeftAction::DiskPrev);
        assert_eq!(
            bound.or_else(|| panic!("must not run")),
            Resolution::Bound(LeftAction::DiskPrev)
        );
        assert_eq!(
            Resolution::Declined.or_else(|| Resolution::Bound(LeftAction::ScrollLeft)),
            Resolution::Bound(LeftAction::ScrollLeft)
        );
        assert!(!Resolution::Declined.or_else(|| Resolution::Declined).is_bound());
    }
}

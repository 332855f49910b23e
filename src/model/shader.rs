//! Shader structures edited from the menu.
//!
//! A [`VideoShader`] is an ordered set of passes plus the flattened list of
//! tweakable parameters those passes declare. The menu holds its own preset
//! copy; the video driver exposes the currently running one.

use crate::menu::type_codes::GFX_MAX_PARAMETERS;
use serde::{Deserialize, Serialize};

/// Texture filter for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Unspecified,
    Linear,
    Nearest,
}

impl FilterMode {
    const COUNT: u32 = 3;

    pub fn index(self) -> u32 {
        match self {
            FilterMode::Unspecified => 0,
            FilterMode::Linear => 1,
            FilterMode::Nearest => 2,
        }
    }

    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => FilterMode::Unspecified,
            1 => FilterMode::Linear,
            _ => FilterMode::Nearest,
        }
    }

    /// Previous mode, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
    }
}

/// Framebuffer scale of a pass. Scale 0 means "no explicit scale".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FboScale {
    pub valid: bool,
    pub scale_x: u32,
    pub scale_y: u32,
}

impl FboScale {
    pub const MAX_SCALE: u32 = 5;

    pub fn uniform(scale: u32) -> Self {
        let scale = scale.min(Self::MAX_SCALE);
        Self {
            valid: scale != 0,
            scale_x: scale,
            scale_y: scale,
        }
    }

    /// Step the scale down by one, wrapping 0 back to [`Self::MAX_SCALE`].
    pub fn step_back(&mut self) {
        let modulus = Self::MAX_SCALE + 1;
        let scale = (self.scale_x % modulus + Self::MAX_SCALE) % modulus;
        self.valid = scale != 0;
        self.scale_x = scale;
        self.scale_y = scale;
    }
}

/// A bounded numeric shader parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderParameter {
    pub id: String,
    pub description: String,
    pub current: f32,
    pub minimum: f32,
    pub maximum: f32,
    pub step: f32,
}

impl ShaderParameter {
    pub fn new(id: impl Into<String>, current: f32, minimum: f32, maximum: f32, step: f32) -> Self {
        let id = id.into();
        Self {
            description: id.clone(),
            id,
            current,
            minimum,
            maximum,
            step,
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        value.max(self.minimum).min(self.maximum)
    }

    /// Decrease by one step, clamped to `[minimum, maximum]`.
    pub fn step_down(&mut self) {
        self.current = self.clamp(self.current - self.step);
    }
}

/// One shader pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShaderPass {
    pub source: String,
    pub filter: FilterMode,
    pub fbo: FboScale,
    /// Parameters declared by this pass's source.
    pub parameters: Vec<ShaderParameter>,
}

impl ShaderPass {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, parameter: ShaderParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A multi-pass shader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoShader {
    /// Number of passes in use. Slots past this count keep their settings
    /// so that raising the count again restores them.
    pub passes: usize,
    pub pass: Vec<ShaderPass>,
    /// Parameters of the passes in use, in pass order, deduplicated by id.
    pub parameters: Vec<ShaderParameter>,
}

impl VideoShader {
    pub fn new(pass: Vec<ShaderPass>) -> Self {
        let mut shader = Self {
            passes: pass.len(),
            pass,
            parameters: Vec::new(),
        };
        shader.resolve_parameters();
        shader
    }

    pub fn active_passes(&self) -> &[ShaderPass] {
        &self.pass[..self.passes.min(self.pass.len())]
    }

    pub fn pass_mut(&mut self, index: usize) -> Option<&mut ShaderPass> {
        self.pass.get_mut(index)
    }

    pub fn parameter(&self, index: usize) -> Option<&ShaderParameter> {
        self.parameters.get(index)
    }

    pub fn parameter_mut(&mut self, index: usize) -> Option<&mut ShaderParameter> {
        self.parameters.get_mut(index)
    }

    /// Drop the last pass in use. Returns false when already at zero.
    pub fn decrement_passes(&mut self) -> bool {
        if self.passes == 0 {
            return false;
        }
        self.passes -= 1;
        true
    }

    /// Rebuild [`Self::parameters`] from the passes in use.
    ///
    /// Values the user already tweaked survive the rebuild when the
    /// parameter is still declared, clamped to its (possibly new) bounds.
    pub fn resolve_parameters(&mut self) {
        let previous = std::mem::take(&mut self.parameters);
        let mut resolved: Vec<ShaderParameter> = Vec::new();

        for declared in self.active_passes().iter().flat_map(|p| p.parameters.iter()) {
            if resolved.len() >= GFX_MAX_PARAMETERS as usize {
                tracing::warn!(
                    "Shader declares more than {} parameters, ignoring the rest",
                    GFX_MAX_PARAMETERS
                );
                break;
            }
            if resolved.iter().any(|p| p.id == declared.id) {
                continue;
            }
            let mut parameter = declared.clone();
            if let Some(old) = previous.iter().find(|p| p.id == declared.id) {
                parameter.current = parameter.clamp(old.current);
            }
            resolved.push(parameter);
        }

        self.parameters = resolved;
    }
}

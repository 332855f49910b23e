//! Left actions.
//!
//! Each menu entry gets exactly one [`LeftAction`] when its list is built and
//! runs it on every "left" input until the list is rebuilt. Actions either
//! mutate [`MenuState`](super::MenuState) directly or forward to the
//! [`MenuHost`](super::MenuHost). An action that fails leaves all state as it
//! found it: every lookup happens before the first write.

use super::context::{Command, ListKind, MenuAction, MenuContext};
use super::error::ActionError;
use super::labels::VIDEO_SMOOTH;
use super::type_codes::{SHADER_PASS_FILTER_0, SHADER_PASS_SCALE_0};
use crate::config::ResolutionMode;
use serde::Serialize;

const SHADERS_ENABLED: bool = cfg!(feature = "shaders");

/// Which shader a parameter entry edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderSource {
    /// The shader running in the video driver.
    Active,
    /// The preset held by the menu.
    Preset,
}

/// The arguments every left input carries.
#[derive(Debug, Clone, Copy)]
pub struct LeftRequest<'a> {
    pub type_code: u32,
    pub label: &'a str,
    pub wraparound: bool,
}

impl<'a> LeftRequest<'a> {
    pub fn new(type_code: u32, label: &'a str, wraparound: bool) -> Self {
        Self {
            type_code,
            label,
            wraparound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LeftAction {
    /// Forward to the settings store.
    GenericDelta,
    SaveStateDecrement,
    ShaderScalePass,
    ShaderFilterPass,
    /// Forward to the `video_smooth` setting.
    ShaderDefaultFilter,
    ShaderNumPasses,
    CheatNumPasses,
    CheatToggle { index: usize },
    ShaderParameter { source: ShaderSource, index: usize },
    InputRemapDecrement { user: usize, slot: usize },
    CoreOptionPrev { index: usize },
    DiskPrev,
    VideoResolution { mode: ResolutionMode },
    ScrollLeft,
    MainMenuFallback,
}

impl LeftAction {
    pub fn name(&self) -> &'static str {
        match self {
            LeftAction::GenericDelta => "generic_delta",
            LeftAction::SaveStateDecrement => "save_state_decrement",
            LeftAction::ShaderScalePass => "shader_scale_pass",
            LeftAction::ShaderFilterPass => "shader_filter_pass",
            LeftAction::ShaderDefaultFilter => "shader_default_filter",
            LeftAction::ShaderNumPasses => "shader_num_passes",
            LeftAction::CheatNumPasses => "cheat_num_passes",
            LeftAction::CheatToggle { .. } => "cheat_toggle",
            LeftAction::ShaderParameter { .. } => "shader_parameter",
            LeftAction::InputRemapDecrement { .. } => "input_remap_decrement",
            LeftAction::CoreOptionPrev { .. } => "core_option_prev",
            LeftAction::DiskPrev => "disk_prev",
            LeftAction::VideoResolution { .. } => "video_resolution",
            LeftAction::ScrollLeft => "scroll_left",
            LeftAction::MainMenuFallback => "main_menu_fallback",
        }
    }

    /// Run the action for one left input.
    pub fn invoke(
        self,
        ctx: &mut MenuContext<'_>,
        request: &LeftRequest<'_>,
    ) -> Result<(), ActionError> {
        let result = match self {
            LeftAction::GenericDelta => ctx.host.apply_directional_delta(
                request.type_code,
                request.label,
                MenuAction::Left,
                request.wraparound,
            ),
            LeftAction::SaveStateDecrement => {
                ctx.host.emit(Command::SaveStateDecrement);
                Ok(())
            }
            LeftAction::ShaderScalePass => shader_scale_pass(ctx, request),
            LeftAction::ShaderFilterPass => shader_filter_pass(ctx, request),
            LeftAction::ShaderDefaultFilter => shader_default_filter(ctx, request),
            LeftAction::ShaderNumPasses => shader_num_passes(ctx),
            LeftAction::CheatNumPasses => cheat_num_passes(ctx),
            LeftAction::CheatToggle { index } => cheat_toggle(ctx, index),
            LeftAction::ShaderParameter { source, index } => shader_parameter(ctx, source, index),
            LeftAction::InputRemapDecrement { user, slot } => {
                ctx.state
                    .remaps
                    .decrement(user, slot)
                    .map(|_| ())
                    .ok_or(ActionError::MissingContext("input remap slot"))
            }
            LeftAction::CoreOptionPrev { index } => {
                ctx.host.core_option_prev(index);
                Ok(())
            }
            LeftAction::DiskPrev => {
                ctx.host.emit(Command::DiskPrev);
                Ok(())
            }
            LeftAction::VideoResolution { mode } => {
                video_resolution(ctx, mode);
                Ok(())
            }
            LeftAction::ScrollLeft => {
                scroll_left(ctx);
                Ok(())
            }
            LeftAction::MainMenuFallback => main_menu_fallback(ctx),
        };

        if let Err(e) = &result {
            tracing::warn!(
                "Left action {} failed for type {:#x} ({}): {}",
                self.name(),
                request.type_code,
                request.label,
                e
            );
        }
        result
    }
}

fn shader_scale_pass(ctx: &mut MenuContext<'_>, request: &LeftRequest<'_>) -> Result<(), ActionError> {
    if !SHADERS_ENABLED {
        return Ok(());
    }
    let shader = ctx.state.menu_shader_mut()?;
    let pass = request
        .type_code
        .checked_sub(SHADER_PASS_SCALE_0)
        .and_then(|index| shader.pass_mut(index as usize))
        .ok_or(ActionError::MissingContext("shader pass"))?;
    pass.fbo.step_back();
    Ok(())
}

fn shader_filter_pass(ctx: &mut MenuContext<'_>, request: &LeftRequest<'_>) -> Result<(), ActionError> {
    if !SHADERS_ENABLED {
        return Ok(());
    }
    let shader = ctx.state.menu_shader_mut()?;
    let pass = request
        .type_code
        .checked_sub(SHADER_PASS_FILTER_0)
        .and_then(|index| shader.pass_mut(index as usize))
        .ok_or(ActionError::MissingContext("shader pass"))?;
    pass.filter = pass.filter.previous();
    Ok(())
}

fn shader_default_filter(
    ctx: &mut MenuContext<'_>,
    request: &LeftRequest<'_>,
) -> Result<(), ActionError> {
    if !SHADERS_ENABLED {
        return Ok(());
    }
    ctx.host
        .apply_named_setting(VIDEO_SMOOTH, MenuAction::Left, request.wraparound)
}

fn shader_num_passes(ctx: &mut MenuContext<'_>) -> Result<(), ActionError> {
    if !SHADERS_ENABLED {
        return Ok(());
    }
    let shader = ctx.state.menu_shader_mut()?;
    shader.decrement_passes();
    shader.resolve_parameters();
    ctx.state.request_refresh();
    Ok(())
}

fn cheat_num_passes(ctx: &mut MenuContext<'_>) -> Result<(), ActionError> {
    let cheats = ctx
        .state
        .cheats
        .as_mut()
        .ok_or(ActionError::MissingContext("cheat list"))?;
    let new_size = cheats.len().saturating_sub(1);
    cheats.realloc(new_size);
    ctx.state.request_refresh();
    Ok(())
}

fn cheat_toggle(ctx: &mut MenuContext<'_>, index: usize) -> Result<(), ActionError> {
    let enabled = ctx
        .state
        .cheats
        .as_mut()
        .ok_or(ActionError::MissingContext("cheat list"))?
        .toggle(index)
        .ok_or(ActionError::MissingContext("cheat slot"))?;
    tracing::debug!("Cheat {} is now {}", index, if enabled { "on" } else { "off" });
    Ok(())
}

fn shader_parameter(
    ctx: &mut MenuContext<'_>,
    source: ShaderSource,
    index: usize,
) -> Result<(), ActionError> {
    let shader = match source {
        ShaderSource::Active => ctx
            .state
            .active_shader
            .as_mut()
            .ok_or(ActionError::MissingContext("active shader"))?,
        ShaderSource::Preset => ctx.state.menu_shader_mut()?,
    };
    shader
        .parameter_mut(index)
        .ok_or(ActionError::MissingContext("shader parameter"))?
        .step_down();
    Ok(())
}

fn video_resolution(ctx: &mut MenuContext<'_>, mode: ResolutionMode) {
    match mode {
        ResolutionMode::OutputDriver => ctx.host.select_previous_output(),
        ResolutionMode::ResolutionList => {
            ctx.state.resolutions.step_back();
        }
    }
}

/// Jump the selection back by one fast-scroll step, or to the top of the
/// list when closer than that.
fn scroll_left(ctx: &mut MenuContext<'_>) {
    let nav = &mut ctx.state.navigation;
    let step = nav.fast_scroll_step();
    if nav.selection > step {
        let selection = nav.selection - step;
        nav.set(selection, true);
    } else {
        nav.clear(false);
    }
}

/// Left on a top-level entry switches to the previous horizontal tab when the
/// list is a single placeholder entry, and scrolls otherwise.
fn main_menu_fallback(ctx: &mut MenuContext<'_>) -> Result<(), ActionError> {
    if ctx.state.menu.is_none() {
        return Err(ActionError::MissingContext("menu"));
    }

    match ctx.host.list_size() {
        0 => Ok(()),
        1 => {
            ctx.state.navigation.selection = 0;
            if ctx.host.driver_selection() == 0 {
                return Ok(());
            }
            ctx.host.cache_list(ListKind::Horizontal, MenuAction::Left);
            let offset = ctx.state.navigation.selection;
            ctx.host
                .content_list_switch(offset, "", "", 0)
                .unwrap_or(Ok(()))
        }
        _ => {
            scroll_left(ctx);
            Ok(())
        }
    }
}

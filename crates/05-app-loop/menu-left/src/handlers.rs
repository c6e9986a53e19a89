//! Bodies of the left actions. Each one owns a narrow mutation over a collaborator.

use crate::context::MenuContext;
use crate::playlist::{playlist_basename, PlaylistAssociations, DETECT_CORE};
use log::{trace, warn};
use menu_abi::{
    ActionOutcome, ListKind, MenuAction, Navigation, ShaderParameter, TypeCode, BINDS_PER_USER,
};

/// Global texture smoothing setting driven by the shader default filter entry.
pub const VIDEO_SMOOTH_SETTING: &str = "video_smooth";

/// Number of rows a fast scroll skips for the given acceleration counter.
pub fn fast_scroll_speed(scroll_accel: usize) -> usize {
    let scroll_speed = (scroll_accel.max(2) - 2) / 4 + 1;
    scroll_speed.saturating_mul(4).saturating_add(4)
}

pub(crate) fn generic(
    ctx: &mut MenuContext<'_>,
    type_code: TypeCode,
    label: &str,
    wraparound: bool,
) -> ActionOutcome {
    ctx.settings
        .apply_action(type_code, label, MenuAction::Left, wraparound)
}

pub(crate) fn list_collapse(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    let wraparound = ctx.settings.navigation_wraparound();
    let Some(nav) = ctx.navigation.as_deref_mut() else {
        warn!("list_collapse: no navigation subsystem");
        return ActionOutcome::ExitMenu;
    };

    let info = nav.list_info();
    trace!(
        "list_collapse: size={} selection={} wraparound={wraparound}",
        info.size,
        info.selection
    );
    match info.size {
        0 => scroll(nav),
        1 => {
            nav.set_selection(0);
            if info.selection != 0 || wraparound {
                switch_list(nav)
            } else {
                scroll(nav)
            }
        }
        _ => switch_list(nav),
    }
}

fn switch_list(nav: &mut dyn Navigation) -> ActionOutcome {
    nav.cache_list(ListKind::Horizontal, MenuAction::Left);
    nav.content_list_switch().unwrap_or(ActionOutcome::Handled)
}

pub(crate) fn scroll_page(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    match ctx.navigation.as_deref_mut() {
        Some(nav) => scroll(nav),
        None => ActionOutcome::Handled,
    }
}

fn scroll(nav: &mut dyn Navigation) -> ActionOutcome {
    let Some(accel) = nav.scroll_accel() else {
        trace!("scroll: no acceleration counter");
        return ActionOutcome::Handled;
    };

    let fast = fast_scroll_speed(accel);
    let selection = nav.selection();
    if selection > fast {
        trace!("scroll: selection {selection} -> {}", selection - fast);
        nav.set_selection(selection - fast);
        nav.set_dirty();
    } else {
        nav.clear_pending_refresh();
    }
    ActionOutcome::Handled
}

pub(crate) fn cheat_toggle(
    ctx: &mut MenuContext<'_>,
    type_code: TypeCode,
    wraparound: bool,
) -> ActionOutcome {
    let Some(cheats) = ctx.cheats.as_deref_mut() else {
        return ActionOutcome::ExitMenu;
    };
    match type_code.offset_in(TypeCode::cheat_range()) {
        Some(index) => cheats.toggle(index as usize, MenuAction::Left, wraparound),
        None => {
            warn!("cheat_toggle: type {type_code} outside the cheat range");
            ActionOutcome::Handled
        }
    }
}

fn step_down(param: &mut ShaderParameter) {
    let before = param.current;
    param.current = (param.current - param.step)
        .max(param.minimum)
        .min(param.maximum);
    trace!("shader_parameter: {} {before} -> {}", param.id, param.current);
}

pub(crate) fn shader_parameter(ctx: &mut MenuContext<'_>, type_code: TypeCode) -> ActionOutcome {
    let param = ctx
        .shader
        .as_deref_mut()
        .zip(type_code.offset_in(TypeCode::shader_parameter_range()))
        .and_then(|(shader, index)| shader.parameter_mut(index as usize));
    if let Some(param) = param {
        step_down(param);
    }
    ActionOutcome::Handled
}

pub(crate) fn shader_preset_parameter(
    ctx: &mut MenuContext<'_>,
    type_code: TypeCode,
) -> ActionOutcome {
    let param = ctx
        .shader
        .as_deref_mut()
        .zip(type_code.offset_in(TypeCode::shader_preset_parameter_range()))
        .and_then(|(shader, index)| shader.preset_parameter_mut(index as usize));
    if let Some(param) = param {
        step_down(param);
    }
    ActionOutcome::Handled
}

pub(crate) fn input_remap(ctx: &mut MenuContext<'_>, type_code: TypeCode) -> ActionOutcome {
    let Some(offset) = type_code.offset_in(TypeCode::input_desc_range()) else {
        return ActionOutcome::Handled;
    };
    let user = (offset / BINDS_PER_USER) as usize;
    let button = (offset % BINDS_PER_USER) as usize;

    match ctx.settings.input_remap_id(user, button) {
        Some(id) if id > 0 => {
            trace!("input_remap: user={user} button={button} {id} -> {}", id - 1);
            ctx.settings.set_input_remap_id(user, button, id - 1);
        }
        Some(_) => {}
        None => warn!("input_remap: no remap slot for user={user} button={button}"),
    }
    ActionOutcome::Handled
}

pub(crate) fn playlist_association(
    ctx: &mut MenuContext<'_>,
    label: &str,
    wraparound: bool,
) -> ActionOutcome {
    let Some(catalog) = ctx.cores else {
        return ActionOutcome::ExitMenu;
    };
    let cores = catalog.cores();
    if cores.is_empty() {
        return ActionOutcome::ExitMenu;
    }

    let playlist = playlist_basename(label);
    let mut associations = PlaylistAssociations::load(&*ctx.settings);
    let current = {
        let core_path = associations.core_for(playlist).unwrap_or(DETECT_CORE);
        cores
            .iter()
            .position(|core| core.path == core_path)
            .unwrap_or(0)
    };
    let next = match current.checked_sub(1) {
        Some(next) => next,
        None if wraparound => cores.len() - 1,
        None => 0,
    };

    if let (Some(index), Some(core)) = (associations.position(playlist), cores.get(next)) {
        trace!("playlist_association: {playlist} -> {}", core.path);
        if !associations.set_core(index, &core.path) {
            warn!("playlist_association: cores list has no slot {index} for {playlist}");
        }
    }
    associations.store_cores(&mut *ctx.settings);
    ActionOutcome::Handled
}

pub(crate) fn core_option(ctx: &mut MenuContext<'_>, type_code: TypeCode) -> ActionOutcome {
    let options = ctx.core_options.as_deref_mut();
    if let (Some(options), Some(index)) =
        (options, type_code.offset_from(TypeCode::CORE_OPTION_START))
    {
        options.prev(index as usize);
    }
    ActionOutcome::Handled
}

pub(crate) fn disk_index(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    if let Some(disks) = ctx.disks.as_deref_mut() {
        disks.prev_disk();
    }
    ActionOutcome::Handled
}

pub(crate) fn shader_scale_pass(ctx: &mut MenuContext<'_>, type_code: TypeCode) -> ActionOutcome {
    let pass = ctx
        .shader
        .as_deref_mut()
        .zip(type_code.offset_in(TypeCode::shader_pass_scale_range()))
        .and_then(|(shader, index)| shader.pass_mut(index as usize));
    let Some(pass) = pass else {
        return ActionOutcome::ExitMenu;
    };

    let scale = (pass.fbo.scale_x + 5) % 6;
    trace!("shader_scale_pass: {} -> {scale}", pass.fbo.scale_x);
    pass.fbo.valid = scale != 0;
    pass.fbo.scale_x = scale;
    pass.fbo.scale_y = scale;
    ActionOutcome::Handled
}

pub(crate) fn shader_filter_pass(ctx: &mut MenuContext<'_>, type_code: TypeCode) -> ActionOutcome {
    let pass = ctx
        .shader
        .as_deref_mut()
        .zip(type_code.offset_in(TypeCode::shader_pass_filter_range()))
        .and_then(|(shader, index)| shader.pass_mut(index as usize));
    let Some(pass) = pass else {
        return ActionOutcome::ExitMenu;
    };

    pass.filter = (pass.filter + 2) % 3;
    ActionOutcome::Handled
}

pub(crate) fn shader_default_filter(ctx: &mut MenuContext<'_>, wraparound: bool) -> ActionOutcome {
    if ctx.shader.is_none() {
        return ActionOutcome::Handled;
    }
    ctx.settings
        .apply_named(VIDEO_SMOOTH_SETTING, MenuAction::Left, wraparound)
        .unwrap_or(ActionOutcome::ExitMenu)
}

pub(crate) fn shader_num_passes(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    let Some(shader) = ctx.shader.as_deref_mut().filter(|shader| shader.is_loaded()) else {
        return ActionOutcome::ExitMenu;
    };

    if shader.pass_count() > 0 {
        shader.decrement_pass_count();
    }
    if let Some(nav) = ctx.navigation.as_deref_mut() {
        nav.request_refresh();
        nav.prevent_populate();
    }
    shader.resolve_parameters();
    trace!("shader_num_passes: now {}", shader.pass_count());
    ActionOutcome::Handled
}

pub(crate) fn cheat_num_passes(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    let Some(cheats) = ctx.cheats.as_deref_mut() else {
        return ActionOutcome::ExitMenu;
    };

    let new_size = cheats.len().saturating_sub(1);
    if let Some(nav) = ctx.navigation.as_deref_mut() {
        nav.request_refresh();
        nav.prevent_populate();
    }
    cheats.resize(new_size);
    ActionOutcome::Handled
}

pub(crate) fn video_resolution(ctx: &mut MenuContext<'_>) -> ActionOutcome {
    if let Some(display) = ctx.display.as_deref_mut() {
        display.prev_output();
    }
    ActionOutcome::Handled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_scroll_grows_every_four_ticks() {
        assert_eq!(fast_scroll_speed(0), 8);
        assert_eq!(fast_scroll_speed(2), 8);
        assert_eq!(fast_scroll_speed(5), 8);
        assert_eq!(fast_scroll_speed(6), 12);
        assert_eq!(fast_scroll_speed(10), 16);
        assert_eq!(fast_scroll_speed(usize::MAX), usize::MAX);
    }

    #[test]
    fn parameter_step_clamps_to_minimum() {
        let mut param = ShaderParameter {
            id: "gamma".into(),
            pass: 0,
            current: 0.05,
            minimum: 0.0,
            maximum: 1.0,
            step: 0.1,
        };
        step_down(&mut param);
        assert_eq!(param.current, 0.0);
    }

    #[test]
    fn parameter_step_pulls_out_of_range_values_back() {
        let mut param = ShaderParameter {
            id: "gamma".into(),
            pass: 0,
            current: 4.0,
            minimum: 0.0,
            maximum: 2.0,
            step: 0.5,
        };
        step_down(&mut param);
        assert_eq!(param.current, 2.0);
    }
}

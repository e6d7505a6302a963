//! Core event loop so gestures, store updates, and list reports apply one at a time.

use std::io::Write;

use anyhow::Result;
use crossbeam_channel::{never, select, Receiver};
use shell_settings::render::{
    format_overflow_menu, format_permissions_panel, format_theme_dialog, PanelBody,
};
use shell_settings::{
    AppSnapshot, AppTheme, MenuOutcome, PermissionsList, ScopeSelection, SettingsNotice,
    SettingsViewModel,
};
use tracing::debug;

use crate::echo::{Echo, EchoDispatcher, ThemeApplierFn};
use crate::gesture::{parse_gesture, Gesture, GESTURE_HELP};

pub(crate) type ShellViewModel = SettingsViewModel<EchoDispatcher, ThemeApplierFn>;
pub(crate) type SelectionCallback = Box<dyn FnMut(&ScopeSelection)>;

pub(crate) struct EventLoopState {
    pub(crate) view_model: ShellViewModel,
    pub(crate) permissions: PermissionsList<SelectionCallback>,
    /// Theme most recently applied to the surface (not necessarily persisted yet).
    pub(crate) active_theme: AppTheme,
    pub(crate) width: usize,
}

pub(crate) struct EventLoopChannels {
    pub(crate) input_rx: Receiver<String>,
    pub(crate) snapshot_rx: Receiver<AppSnapshot>,
    pub(crate) selection_rx: Receiver<ScopeSelection>,
    pub(crate) echo_rx: Receiver<Echo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn run_event_loop<W: Write>(
    state: &mut EventLoopState,
    channels: &EventLoopChannels,
    out: &mut W,
) -> Result<()> {
    let mut snapshot_rx = channels.snapshot_rx.clone();
    loop {
        select! {
            recv(channels.input_rx) -> line => {
                let Ok(line) = line else {
                    debug!("input channel closed");
                    break;
                };
                if handle_line(state, channels, &line, out)? == Flow::Quit {
                    break;
                }
            }
            recv(snapshot_rx) -> snapshot => {
                let Ok(snapshot) = snapshot else {
                    debug!("store subscription closed");
                    snapshot_rx = never();
                    continue;
                };
                writeln!(
                    out,
                    "store: authenticated={} theme={} granted={}",
                    snapshot.authenticated, snapshot.app_theme, snapshot.granted_scopes
                )?;
                state.view_model.update_snapshot(snapshot);
            }
        }
        out.flush()?;
    }
    out.flush()?;
    Ok(())
}

pub(crate) fn handle_line<W: Write>(
    state: &mut EventLoopState,
    channels: &EventLoopChannels,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let gesture = match parse_gesture(line) {
        Ok(Some(gesture)) => gesture,
        Ok(None) => return Ok(Flow::Continue),
        Err(err) => {
            writeln!(out, "error: {err}")?;
            return Ok(Flow::Continue);
        }
    };
    debug!(?gesture, "gesture received");
    let flow = apply_gesture(state, gesture, out)?;
    drain_selection_reports(state, channels);
    drain_echoes(state, channels, out)?;
    if flow == Flow::Continue {
        render_open_surfaces(state, out)?;
    }
    Ok(flow)
}

fn apply_gesture<W: Write>(
    state: &mut EventLoopState,
    gesture: Gesture,
    out: &mut W,
) -> Result<Flow> {
    let vm = &mut state.view_model;
    let panel_was_open = vm.permissions_panel_visible();
    let notice = match gesture {
        Gesture::Menu => {
            let items = vm.menu_items();
            writeln!(
                out,
                "{}",
                format_overflow_menu(&items, state.active_theme, state.width)
            )?;
            None
        }
        Gesture::Activate(key) => match vm.activate_key(&key) {
            Some(MenuOutcome::OpenLink(href)) => {
                writeln!(out, "open: {href}")?;
                None
            }
            Some(MenuOutcome::Handled) => None,
            Some(MenuOutcome::Notice(notice)) => Some(notice),
            None => {
                writeln!(out, "error: no menu item {key}")?;
                None
            }
        },
        Gesture::ToggleTheme => {
            vm.toggle_theme_dialog();
            None
        }
        Gesture::DismissTheme => {
            vm.dismiss_theme_dialog();
            None
        }
        Gesture::Theme(theme) if !vm.theme_dialog_visible() => {
            writeln!(out, "error: theme dialog is closed ({theme})")?;
            None
        }
        Gesture::Theme(theme) => vm.select_theme(theme),
        Gesture::Panel => {
            vm.toggle_permissions_panel();
            None
        }
        Gesture::Dismiss => {
            vm.dismiss_permissions_panel();
            None
        }
        Gesture::Check(scope) | Gesture::Uncheck(scope) if !vm.permissions_panel_visible() => {
            writeln!(out, "error: permissions panel is closed ({scope})")?;
            None
        }
        Gesture::Check(scope) => {
            if !state.permissions.set_checked(&scope, true) {
                writeln!(out, "error: cannot check {scope}")?;
            }
            None
        }
        Gesture::Uncheck(scope) => {
            if !state.permissions.set_checked(&scope, false) {
                writeln!(out, "error: cannot uncheck {scope}")?;
            }
            None
        }
        Gesture::Consent => vm.consent(),
        Gesture::Cancel => {
            vm.cancel();
            None
        }
        Gesture::SignOut => vm.sign_out(),
        Gesture::Show => None,
        Gesture::Help => {
            writeln!(out, "{GESTURE_HELP}")?;
            None
        }
        Gesture::Quit => return Ok(Flow::Quit),
    };
    if panel_was_open != state.view_model.permissions_panel_visible() {
        state.permissions.reset();
    }
    if let Some(notice) = notice {
        report_notice(&notice, out)?;
    }
    Ok(Flow::Continue)
}

fn report_notice<W: Write>(notice: &SettingsNotice, out: &mut W) -> Result<()> {
    writeln!(out, "notice: {notice}")?;
    Ok(())
}

fn drain_selection_reports(state: &mut EventLoopState, channels: &EventLoopChannels) {
    for selection in channels.selection_rx.try_iter() {
        state.view_model.set_selected_scopes(selection);
    }
}

fn drain_echoes<W: Write>(
    state: &mut EventLoopState,
    channels: &EventLoopChannels,
    out: &mut W,
) -> Result<()> {
    for echo in channels.echo_rx.try_iter() {
        match echo {
            Echo::Dispatched(command) => writeln!(out, "dispatched: {command}")?,
            Echo::Applied(theme) => {
                state.active_theme = theme;
                writeln!(out, "applied: {theme}")?;
            }
        }
    }
    Ok(())
}

fn render_open_surfaces<W: Write>(state: &EventLoopState, out: &mut W) -> Result<()> {
    let vm = &state.view_model;
    if vm.theme_dialog_visible() {
        writeln!(out, "{}", format_theme_dialog(&vm.theme_dialog(), state.width))?;
    }
    if vm.permissions_panel_visible() {
        let body = PanelBody {
            scopes: state.permissions.scopes(),
            checked: state.permissions.checked(),
        };
        writeln!(
            out,
            "{}",
            format_permissions_panel(
                vm.panel_title(),
                &body,
                &vm.panel_footer(),
                state.active_theme,
                state.width,
            )
        )?;
    }
    Ok(())
}

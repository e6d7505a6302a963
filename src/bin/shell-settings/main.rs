//! Shell settings entrypoint so the menu, dialog, panel, and store run as one session.
//!
//! Reads gestures from stdin (one per line) and prints the surfaces they open.
//!
//! # Architecture
//!
//! - Input thread: reads stdin lines and forwards them to the event loop
//! - Event loop: owns the view-model and permissions list, applies gestures serially
//! - Store thread: drains dispatched commands and publishes new snapshots

mod config;
mod echo;
mod event_loop;
mod gesture;
mod input;

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::{bounded, unbounded};
use shell_settings::telemetry::init_tracing;
use shell_settings::{
    AppStore, ChannelDispatcher, PermissionsList, ScopeSelection, SettingsViewModel,
};
use tracing::info;

use crate::config::AppConfig;
use crate::echo::{echo_theme_applier, EchoDispatcher};
use crate::event_loop::{run_event_loop, EventLoopChannels, EventLoopState, SelectionCallback};
use crate::input::spawn_input_thread;

/// Max pending gesture lines before the input thread blocks.
const INPUT_CHANNEL_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    let trace_path = init_tracing(config.log_flags());
    info!(
        trace_path = ?trace_path,
        authenticated = config.authenticated,
        theme = %config.theme,
        "shell settings starting"
    );

    let messages = config.resolve_messages()?;
    let store = AppStore::new(config.initial_snapshot());
    let snapshot_rx = store.subscribe();
    let (command_tx, command_rx) = bounded(config.command_queue_capacity());
    let store_thread = store.spawn_command_thread(command_rx);

    let (echo_tx, echo_rx) = unbounded();
    let mut view_model = SettingsViewModel::new(
        messages,
        store.snapshot(),
        EchoDispatcher::new(ChannelDispatcher::new(command_tx), echo_tx.clone()),
        echo_theme_applier(echo_tx),
    );
    view_model.initialize();

    let (selection_tx, selection_rx) = unbounded();
    let on_selection: SelectionCallback = Box::new(move |selection: &ScopeSelection| {
        let _ = selection_tx.send(selection.clone());
    });
    let permissions = PermissionsList::new(config.listed_scopes(), true, on_selection);

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_thread = spawn_input_thread(input_tx);

    let mut state = EventLoopState {
        active_theme: store.snapshot().app_theme,
        view_model,
        permissions,
        width: config.render_width(),
    };
    let channels = EventLoopChannels {
        input_rx,
        snapshot_rx,
        selection_rx,
        echo_rx,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_event_loop(&mut state, &channels, &mut out)?;

    // Dropping the view-model drops the last command sender and stops the store thread.
    drop(state);
    store_thread
        .join()
        .map_err(|_| anyhow!("store thread panicked"))?;

    let snapshot = store.snapshot();
    writeln!(
        out,
        "final: authenticated={} theme={} granted={}",
        snapshot.authenticated, snapshot.app_theme, snapshot.granted_scopes
    )?;
    out.flush()?;
    info!("shell settings exiting");
    Ok(())
}

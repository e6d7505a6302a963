//! Shared application store so the settings surface reads snapshots instead of globals.
//!
//! The store owns `authenticated` and the persisted `app_theme`. Commands reduce
//! into a new snapshot which is published to every live subscriber.

use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info};

use crate::dispatch::Command;
use crate::selection::ScopeSelection;
use crate::theme::AppTheme;

/// Read-only view of the store handed to the settings surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    pub authenticated: bool,
    pub app_theme: AppTheme,
    /// Scopes accepted through consent so far.
    pub granted_scopes: ScopeSelection,
}

/// Pure reducer: `snapshot` after applying `command`.
pub fn reduce(snapshot: &AppSnapshot, command: &Command) -> AppSnapshot {
    let mut next = snapshot.clone();
    match command {
        Command::SignOut => {
            next.authenticated = false;
            next.granted_scopes.clear();
        }
        Command::ChangeTheme(theme) => next.app_theme = *theme,
        Command::ConsentToScopes(scopes) => {
            for scope in scopes.iter() {
                next.granted_scopes.insert(scope);
            }
        }
    }
    next
}

#[derive(Default)]
struct StoreInner {
    snapshot: AppSnapshot,
    subscribers: Vec<Sender<AppSnapshot>>,
}

#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl AppStore {
    pub fn new(initial: AppSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                snapshot: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.lock().snapshot.clone()
    }

    /// Receive every snapshot published after this call.
    pub fn subscribe(&self) -> Receiver<AppSnapshot> {
        let (tx, rx) = unbounded();
        self.lock().subscribers.push(tx);
        rx
    }

    /// Reduce one command and publish the result. Returns the new snapshot.
    pub fn apply(&self, command: &Command) -> AppSnapshot {
        let mut inner = self.lock();
        let next = reduce(&inner.snapshot, command);
        if next == inner.snapshot {
            debug!(command = command.name(), "command left store unchanged");
            return next;
        }
        inner.snapshot = next.clone();
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(next.clone()).is_ok());
        next
    }

    /// Drain `commands` on a background thread until every sender is dropped.
    pub fn spawn_command_thread(&self, commands: Receiver<Command>) -> thread::JoinHandle<()> {
        let store = self.clone();
        thread::spawn(move || {
            for command in commands.iter() {
                info!(%command, "store received command");
                store.apply(&command);
            }
            debug!("command channel closed; store thread exiting");
        })
    }
}

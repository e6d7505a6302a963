//! Outbound command bus so the settings surface hands off intents without awaiting them.

use crossbeam_channel::{Sender, TrySendError};
use tracing::debug;

use crate::selection::ScopeSelection;
use crate::theme::AppTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SignOut,
    ChangeTheme(AppTheme),
    ConsentToScopes(ScopeSelection),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignOut => "signOut",
            Self::ChangeTheme(_) => "changeTheme",
            Self::ConsentToScopes(_) => "consentToScopes",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignOut => write!(f, "signOut()"),
            Self::ChangeTheme(theme) => write!(f, "changeTheme({theme})"),
            Self::ConsentToScopes(scopes) => write!(f, "consentToScopes({scopes})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    ChannelFull,
    Disconnected,
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelFull => write!(f, "command queue is full"),
            Self::Disconnected => write!(f, "command store is gone"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Fire-and-forget hand-off to the store. `Ok` means accepted, not applied.
pub trait CommandDispatcher {
    fn dispatch(&self, command: Command) -> Result<(), DispatchError>;
}

/// Dispatcher backed by a bounded channel; never blocks the caller.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: Sender<Command>,
}

impl ChannelDispatcher {
    pub fn new(tx: Sender<Command>) -> Self {
        Self { tx }
    }
}

impl CommandDispatcher for ChannelDispatcher {
    fn dispatch(&self, command: Command) -> Result<(), DispatchError> {
        let name = command.name();
        match self.tx.try_send(command) {
            Ok(()) => {
                debug!(command = name, "command queued");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(DispatchError::ChannelFull),
            Err(TrySendError::Disconnected(_)) => Err(DispatchError::Disconnected),
        }
    }
}

impl<D: CommandDispatcher + ?Sized> CommandDispatcher for &D {
    fn dispatch(&self, command: Command) -> Result<(), DispatchError> {
        (**self).dispatch(command)
    }
}

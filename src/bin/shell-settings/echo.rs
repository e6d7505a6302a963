//! Echo channel so the event loop can report accepted commands and theme applies.

use crossbeam_channel::Sender;
use shell_settings::{AppTheme, ChannelDispatcher, Command, CommandDispatcher, DispatchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Echo {
    Dispatched(Command),
    Applied(AppTheme),
}

/// Forwards to the store queue and, once accepted, echoes the command.
pub(crate) struct EchoDispatcher {
    inner: ChannelDispatcher,
    echo_tx: Sender<Echo>,
}

impl EchoDispatcher {
    pub(crate) fn new(inner: ChannelDispatcher, echo_tx: Sender<Echo>) -> Self {
        Self { inner, echo_tx }
    }
}

impl CommandDispatcher for EchoDispatcher {
    fn dispatch(&self, command: Command) -> Result<(), DispatchError> {
        self.inner.dispatch(command.clone())?;
        let _ = self.echo_tx.send(Echo::Dispatched(command));
        Ok(())
    }
}

pub(crate) type ThemeApplierFn = Box<dyn FnMut(AppTheme)>;

pub(crate) fn echo_theme_applier(echo_tx: Sender<Echo>) -> ThemeApplierFn {
    Box::new(move |theme| {
        let _ = echo_tx.send(Echo::Applied(theme));
    })
}

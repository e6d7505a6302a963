//! Settings view-model so menu, theme dialog, and permissions panel change state in one place.
//!
//! Every gesture lands on a method here. A method either flips one of the
//! local visibility flags or hands a command to the dispatcher; nothing in
//! here waits on the store.

use tracing::{debug, info, warn};

use crate::dispatch::{Command, CommandDispatcher, DispatchError};
use crate::menu::{base_menu_items, compose_menu, MenuAction, MenuItem};
use crate::messages::MessageCatalog;
use crate::selection::ScopeSelection;
use crate::store::AppSnapshot;
use crate::theme::{AppTheme, ThemeApplier, ThemeChoice, THEME_CHOICES};

pub const THEME_DIALOG_LABEL: &str = "Pick one theme";
pub const MENU_TRIGGER_LABEL: &str = "More actions";
pub const MENU_TRIGGER_ICON: &str = "Settings";
pub const PANEL_CLOSE_LABEL: &str = "Close";

/// Local surface state. Lives exactly as long as the mounted view-model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme_dialog_visible: bool,
    pub permissions_panel_visible: bool,
    pub menu_items: Vec<MenuItem>,
    pub selected_scopes: ScopeSelection,
}

/// Optional failure report returned by gestures that dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsNotice {
    DispatchFailed {
        command: &'static str,
        error: DispatchError,
    },
    EmptyConsent,
}

impl std::fmt::Display for SettingsNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DispatchFailed { command, error } => write!(f, "{command} failed: {error}"),
            Self::EmptyConsent => write!(f, "select at least one permission to consent"),
        }
    }
}

/// What activating a menu item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The host should open this link; no local state changed.
    OpenLink(&'static str),
    Handled,
    Notice(SettingsNotice),
}

/// Theme dialog contents derived for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDialogView {
    pub visible: bool,
    pub title: String,
    pub label: &'static str,
    pub options: Vec<(ThemeChoice, String)>,
    pub selected: AppTheme,
}

/// Permissions panel footer derived for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelFooterView {
    pub details: String,
    pub consent_label: String,
    pub consent_enabled: bool,
    pub cancel_label: String,
}

pub struct SettingsViewModel<D, A>
where
    D: CommandDispatcher,
    A: ThemeApplier,
{
    state: ViewState,
    messages: MessageCatalog,
    snapshot: AppSnapshot,
    dispatcher: D,
    applier: A,
}

impl<D, A> SettingsViewModel<D, A>
where
    D: CommandDispatcher,
    A: ThemeApplier,
{
    pub fn new(
        messages: MessageCatalog,
        snapshot: AppSnapshot,
        dispatcher: D,
        applier: A,
    ) -> Self {
        Self {
            state: ViewState::default(),
            messages,
            snapshot,
            dispatcher,
            applier,
        }
    }

    /// Mount step: build the base menu once.
    pub fn initialize(&mut self) {
        if self.is_initialized() {
            return;
        }
        self.state.menu_items = base_menu_items(&self.messages);
        debug!(items = self.state.menu_items.len(), "settings menu initialized");
    }

    pub fn is_initialized(&self) -> bool {
        !self.state.menu_items.is_empty()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }

    /// Accept a store update delivered through a subscription.
    pub fn update_snapshot(&mut self, snapshot: AppSnapshot) {
        if snapshot.authenticated != self.snapshot.authenticated {
            info!(
                authenticated = snapshot.authenticated,
                "authentication status changed"
            );
        }
        self.snapshot = snapshot;
    }

    /// Menu for the current render; base items plus signed-in extras.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        compose_menu(
            &self.state.menu_items,
            self.snapshot.authenticated,
            &self.messages,
        )
    }

    pub fn activate(&mut self, item: &MenuItem) -> MenuOutcome {
        debug!(item = item.key, "menu item activated");
        let Some(action) = item.action else {
            return match item.href {
                Some(href) => MenuOutcome::OpenLink(href),
                None => MenuOutcome::Handled,
            };
        };
        match action {
            MenuAction::ToggleThemeDialog => {
                self.toggle_theme_dialog();
                MenuOutcome::Handled
            }
            MenuAction::TogglePermissionsPanel => {
                self.toggle_permissions_panel();
                MenuOutcome::Handled
            }
            MenuAction::SignOut => match self.sign_out() {
                Some(notice) => MenuOutcome::Notice(notice),
                None => MenuOutcome::Handled,
            },
        }
    }

    /// Activate the rendered item with `key`; `None` when it is not on the menu.
    pub fn activate_key(&mut self, key: &str) -> Option<MenuOutcome> {
        let item = self.menu_items().into_iter().find(|item| item.key == key)?;
        Some(self.activate(&item))
    }

    pub fn theme_dialog_visible(&self) -> bool {
        self.state.theme_dialog_visible
    }

    /// The one transition of the theme dialog: hidden <-> visible.
    pub fn toggle_theme_dialog(&mut self) {
        self.state.theme_dialog_visible = !self.state.theme_dialog_visible;
        debug!(
            visible = self.state.theme_dialog_visible,
            "theme dialog toggled"
        );
    }

    pub fn dismiss_theme_dialog(&mut self) {
        if self.state.theme_dialog_visible {
            self.toggle_theme_dialog();
        }
    }

    pub fn theme_dialog(&self) -> ThemeDialogView {
        ThemeDialogView {
            visible: self.state.theme_dialog_visible,
            title: self.messages.lookup("Change theme").to_string(),
            label: THEME_DIALOG_LABEL,
            options: THEME_CHOICES
                .iter()
                .map(|choice| (*choice, self.messages.lookup(choice.message_key).to_string()))
                .collect(),
            selected: self.snapshot.app_theme,
        }
    }

    /// Persist the theme through the store and apply it right away.
    ///
    /// The dialog stays open. The apply runs even if the dispatch fails.
    pub fn select_theme(&mut self, theme: AppTheme) -> Option<SettingsNotice> {
        info!(%theme, "theme selected");
        let notice = self.send(Command::ChangeTheme(theme));
        self.applier.apply_theme_now(theme);
        notice
    }

    pub fn permissions_panel_visible(&self) -> bool {
        self.state.permissions_panel_visible
    }

    /// Open/close the panel; the selection starts empty after every flip.
    pub fn toggle_permissions_panel(&mut self) {
        self.state.permissions_panel_visible = !self.state.permissions_panel_visible;
        self.state.selected_scopes.clear();
        debug!(
            visible = self.state.permissions_panel_visible,
            "permissions panel toggled"
        );
    }

    pub fn dismiss_permissions_panel(&mut self) {
        if self.state.permissions_panel_visible {
            self.toggle_permissions_panel();
        }
    }

    /// Footer Cancel button.
    pub fn cancel(&mut self) {
        self.dismiss_permissions_panel();
    }

    /// Replace the selection with the full set reported by the permissions list.
    pub fn set_selected_scopes(&mut self, selection: ScopeSelection) {
        if !self.state.permissions_panel_visible {
            debug!("ignoring scope selection while permissions panel is closed");
            return;
        }
        self.state.selected_scopes = selection;
    }

    pub fn selected_scopes(&self) -> &ScopeSelection {
        &self.state.selected_scopes
    }

    pub fn selection_details(&self) -> String {
        self.state.selected_scopes.details()
    }

    pub fn consent_enabled(&self) -> bool {
        !self.state.selected_scopes.is_empty()
    }

    pub fn panel_title(&self) -> &str {
        self.messages.lookup("Permissions")
    }

    pub fn panel_footer(&self) -> PanelFooterView {
        PanelFooterView {
            details: self.selection_details(),
            consent_label: self.messages.lookup("Consent").to_string(),
            consent_enabled: self.consent_enabled(),
            cancel_label: self.messages.lookup("Cancel").to_string(),
        }
    }

    /// Request the selected scopes. Leaves the panel and the selection as they are.
    pub fn consent(&mut self) -> Option<SettingsNotice> {
        if !self.consent_enabled() {
            warn!("consent requested with an empty selection");
            return Some(SettingsNotice::EmptyConsent);
        }
        info!(scopes = self.state.selected_scopes.len(), "consent requested");
        self.send(Command::ConsentToScopes(self.state.selected_scopes.clone()))
    }

    pub fn sign_out(&mut self) -> Option<SettingsNotice> {
        info!("sign out requested");
        self.send(Command::SignOut)
    }

    fn send(&self, command: Command) -> Option<SettingsNotice> {
        let name = command.name();
        match self.dispatcher.dispatch(command) {
            Ok(()) => None,
            Err(error) => {
                warn!(command = name, %error, "command dispatch failed");
                Some(SettingsNotice::DispatchFailed {
                    command: name,
                    error,
                })
            }
        }
    }
}

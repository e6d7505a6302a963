//! Settings surface for an application shell: overflow menu, theme dialog, and
//! permissions consent panel, driven by one view-model.

pub mod dispatch;
pub mod menu;
pub mod messages;
mod overlay_frame;
pub mod render;
pub mod selection;
pub mod store;
pub mod telemetry;
pub mod theme;
pub mod view_model;

pub use dispatch::{ChannelDispatcher, Command, CommandDispatcher, DispatchError};
pub use menu::{MenuAction, MenuItem};
pub use messages::{CatalogError, MessageCatalog};
pub use overlay_frame::{BorderSet, BORDER_HEAVY, BORDER_SINGLE};
pub use selection::{PermissionsList, ScopeSelection};
pub use store::{AppSnapshot, AppStore};
pub use theme::{AppTheme, ThemeApplier, ThemeChoice, THEME_CHOICES};
pub use view_model::{MenuOutcome, SettingsNotice, SettingsViewModel, ViewState};

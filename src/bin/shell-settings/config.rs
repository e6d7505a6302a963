//! CLI flag schema so the demo shell's store seed and catalog source are explicit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shell_settings::telemetry::LogFlags;
use shell_settings::{AppSnapshot, AppTheme, MessageCatalog};
use tracing::{debug, warn};

const CONFIG_DIR_NAME: &str = "shell-settings";
const MESSAGES_FILE: &str = "messages.toml";
const DEFAULT_COMMAND_QUEUE: usize = 64;

pub(crate) const DEFAULT_SCOPES: &[&str] = &[
    "Calendars.Read",
    "Files.Read",
    "Mail.Read",
    "Sites.Read.All",
    "User.Read",
];

#[derive(Debug, Parser, Clone)]
#[command(
    name = "shell-settings",
    about = "Shell settings surface: overflow menu, theme dialog, permissions panel",
    author,
    version
)]
pub(crate) struct AppConfig {
    /// Start signed in (adds permissions and sign-out to the menu)
    #[arg(long = "authenticated", default_value_t = false)]
    pub(crate) authenticated: bool,

    /// Theme held by the store at startup
    #[arg(long = "theme", value_enum, default_value_t = AppTheme::Light)]
    pub(crate) theme: AppTheme,

    /// Message catalog file (.toml or .json); defaults to the config dir, then English
    #[arg(long = "messages", env = "SHELL_SETTINGS_MESSAGES")]
    pub(crate) messages: Option<PathBuf>,

    /// Permission scope listed in the panel (repeatable)
    #[arg(long = "scope")]
    pub(crate) scopes: Vec<String>,

    /// Render width in columns (defaults to the terminal width)
    #[arg(long = "width")]
    pub(crate) width: Option<u16>,

    /// Capacity of the command queue between the surface and the store
    #[arg(long = "command-queue", default_value_t = DEFAULT_COMMAND_QUEUE)]
    pub(crate) command_queue: usize,

    /// Write JSON trace logs (see SHELL_SETTINGS_TRACE_LOG)
    #[arg(long = "logs", default_value_t = false)]
    pub(crate) logs: bool,

    /// Disable trace logs even if --logs is set
    #[arg(long = "no-logs", default_value_t = false)]
    pub(crate) no_logs: bool,
}

impl AppConfig {
    pub(crate) fn log_flags(&self) -> LogFlags {
        LogFlags {
            logs: self.logs,
            no_logs: self.no_logs,
        }
    }

    pub(crate) fn initial_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            authenticated: self.authenticated,
            app_theme: self.theme,
            ..AppSnapshot::default()
        }
    }

    pub(crate) fn listed_scopes(&self) -> Vec<String> {
        if self.scopes.is_empty() {
            DEFAULT_SCOPES.iter().map(|scope| scope.to_string()).collect()
        } else {
            self.scopes.clone()
        }
    }

    pub(crate) fn render_width(&self) -> usize {
        let cols = self
            .width
            .or_else(|| crossterm::terminal::size().ok().map(|(cols, _)| cols))
            .filter(|cols| *cols > 0)
            .unwrap_or(80);
        usize::from(cols)
    }

    pub(crate) fn command_queue_capacity(&self) -> usize {
        self.command_queue.max(1)
    }

    pub(crate) fn resolve_messages(&self) -> Result<MessageCatalog> {
        let catalog = match self.messages.as_ref() {
            Some(path) => MessageCatalog::load(path)
                .with_context(|| format!("failed to load message catalog {}", path.display()))?,
            None => match default_messages_path().filter(|path| path.exists()) {
                Some(path) => MessageCatalog::load(&path).with_context(|| {
                    format!("failed to load message catalog {}", path.display())
                })?,
                None => {
                    debug!("using built-in English message catalog");
                    MessageCatalog::english()
                }
            },
        };
        let missing = catalog.missing_settings_keys();
        if !missing.is_empty() {
            warn!(?missing, "message catalog lacks settings keys; labels will be empty");
        }
        Ok(catalog)
    }
}

fn default_messages_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(MESSAGES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn defaults_seed_signed_out_light_store() {
        let config = AppConfig::parse_from(["shell-settings"]);
        let snapshot = config.initial_snapshot();
        assert!(!snapshot.authenticated);
        assert_eq!(snapshot.app_theme, AppTheme::Light);
        assert_eq!(config.listed_scopes().len(), DEFAULT_SCOPES.len());
        assert_eq!(config.command_queue_capacity(), DEFAULT_COMMAND_QUEUE);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::parse_from([
            "shell-settings",
            "--authenticated",
            "--theme",
            "high-contrast",
            "--scope",
            "Mail.Read",
            "--scope",
            "User.Read",
            "--width",
            "50",
            "--command-queue",
            "0",
        ]);
        assert!(config.initial_snapshot().authenticated);
        assert_eq!(config.theme, AppTheme::HighContrast);
        assert_eq!(config.listed_scopes(), vec!["Mail.Read", "User.Read"]);
        assert_eq!(config.render_width(), 50);
        assert_eq!(config.command_queue_capacity(), 1);
    }

    #[test]
    fn log_flags_follow_cli() {
        let config = AppConfig::parse_from(["shell-settings", "--logs", "--no-logs"]);
        assert_eq!(
            config.log_flags(),
            LogFlags {
                logs: true,
                no_logs: true
            }
        );
    }

    #[test]
    fn explicit_messages_file_is_loaded() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let path = env::temp_dir().join(format!("shell-settings-config-{nanos}.toml"));
        fs::write(&path, "\"Consent\" = \"Accept\"\n").expect("write catalog");
        let config =
            AppConfig::parse_from(["shell-settings", "--messages", path.to_str().expect("utf8")]);
        let catalog = config.resolve_messages().expect("catalog");
        assert_eq!(catalog.lookup("Consent"), "Accept");
        assert_eq!(catalog.lookup("Cancel"), "");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_messages_file_is_an_error() {
        let config =
            AppConfig::parse_from(["shell-settings", "--messages", "/nonexistent/messages.toml"]);
        let err = config.resolve_messages().unwrap_err();
        assert!(format!("{err:#}").contains("failed to load message catalog"));
    }
}

//! Optional JSON trace logging so gestures and dispatches can be inspected after a run.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_subscriber::fmt::time::UtcTime;

const TRACE_LOG_ENV: &str = "SHELL_SETTINGS_TRACE_LOG";

static TRACING_INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Logging switches carried by the CLI config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFlags {
    pub logs: bool,
    pub no_logs: bool,
}

impl LogFlags {
    /// `--no-logs` wins over `--logs`.
    #[inline]
    pub fn enabled(self) -> bool {
        self.logs && !self.no_logs
    }
}

pub fn tracing_log_path() -> PathBuf {
    env::var_os(TRACE_LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("shell_settings_trace.jsonl"))
}

fn open_trace_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn install_json_subscriber(file: File) {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(file)
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Returns the trace file path when JSON traces are being written.
fn init_tracing_once(flags: LogFlags, once: &OnceLock<Option<PathBuf>>) -> Option<PathBuf> {
    if !flags.enabled() {
        return None;
    }
    once.get_or_init(|| {
        let path = tracing_log_path();
        let file = open_trace_file(&path).ok()?;
        install_json_subscriber(file);
        Some(path)
    })
    .clone()
}

pub fn init_tracing(flags: LogFlags) -> Option<PathBuf> {
    init_tracing_once(flags, &TRACING_INIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn unique_trace_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        env::temp_dir().join(format!("shell-settings-trace-{suffix}-{nanos}.jsonl"))
    }

    #[test]
    fn tracing_log_path_prefers_env_override() {
        let _guard = env_lock().lock().expect("env lock");
        let path = unique_trace_path("env");
        unsafe {
            env::set_var(TRACE_LOG_ENV, &path);
        }
        assert_eq!(tracing_log_path(), path);
        unsafe {
            env::remove_var(TRACE_LOG_ENV);
        }
    }

    #[test]
    fn tracing_log_path_defaults_to_temp_dir_when_env_missing() {
        let _guard = env_lock().lock().expect("env lock");
        unsafe {
            env::remove_var(TRACE_LOG_ENV);
        }
        let expected = env::temp_dir().join("shell_settings_trace.jsonl");
        assert_eq!(tracing_log_path(), expected);
    }

    #[test]
    fn no_logs_overrides_logs() {
        assert!(!LogFlags::default().enabled());
        assert!(LogFlags {
            logs: true,
            no_logs: false
        }
        .enabled());
        assert!(!LogFlags {
            logs: true,
            no_logs: true
        }
        .enabled());
    }

    #[test]
    fn init_tracing_once_skips_file_when_disabled() {
        let _guard = env_lock().lock().expect("env lock");
        let disabled_path = unique_trace_path("disabled");
        let _ = fs::remove_file(&disabled_path);
        unsafe {
            env::set_var(TRACE_LOG_ENV, &disabled_path);
        }
        let once = OnceLock::new();
        let installed = init_tracing_once(
            LogFlags {
                logs: false,
                no_logs: true,
            },
            &once,
        );
        assert_eq!(installed, None);
        assert!(
            !disabled_path.exists(),
            "disabled config should not create trace file"
        );
        unsafe {
            env::remove_var(TRACE_LOG_ENV);
        }
    }

    #[test]
    fn init_tracing_once_creates_file_when_enabled() {
        let _guard = env_lock().lock().expect("env lock");
        let enabled_path = unique_trace_path("enabled");
        let _ = fs::remove_file(&enabled_path);
        unsafe {
            env::set_var(TRACE_LOG_ENV, &enabled_path);
        }
        let once = OnceLock::new();
        let installed = init_tracing_once(
            LogFlags {
                logs: true,
                no_logs: false,
            },
            &once,
        );
        assert_eq!(installed.as_deref(), Some(enabled_path.as_path()));
        assert!(
            enabled_path.exists(),
            "enabled config should create trace file"
        );
        unsafe {
            env::remove_var(TRACE_LOG_ENV);
        }
        let _ = fs::remove_file(enabled_path);
    }
}

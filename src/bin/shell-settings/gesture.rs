//! Line-oriented gesture parsing so scripted and typed input share one grammar.

use shell_settings::AppTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Gesture {
    Menu,
    Activate(String),
    ToggleTheme,
    DismissTheme,
    Theme(AppTheme),
    Panel,
    Dismiss,
    Check(String),
    Uncheck(String),
    Consent,
    Cancel,
    SignOut,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GestureError {
    Unknown(String),
    MissingArgument(&'static str),
    UnknownTheme(String),
}

impl std::fmt::Display for GestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown gesture: {word}"),
            Self::MissingArgument(gesture) => write!(f, "{gesture} needs an argument"),
            Self::UnknownTheme(name) => write!(f, "unknown theme: {name}"),
        }
    }
}

impl std::error::Error for GestureError {}

pub(crate) const GESTURE_HELP: &str = "gestures: menu | activate <key> | toggle-theme | \
dismiss-theme | theme <light|dark|high-contrast> | panel | dismiss | check <scope> | \
uncheck <scope> | consent | cancel | sign-out | show | help | quit";

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub(crate) fn parse_gesture(line: &str) -> Result<Option<Gesture>, GestureError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let argument = |gesture: &'static str| {
        if rest.is_empty() {
            Err(GestureError::MissingArgument(gesture))
        } else {
            Ok(rest.to_string())
        }
    };
    let gesture = match word.to_ascii_lowercase().as_str() {
        "menu" => Gesture::Menu,
        "activate" => Gesture::Activate(argument("activate")?),
        "toggle-theme" => Gesture::ToggleTheme,
        "dismiss-theme" => Gesture::DismissTheme,
        "theme" => {
            let name = argument("theme")?;
            let theme = AppTheme::from_name(&name).ok_or(GestureError::UnknownTheme(name))?;
            Gesture::Theme(theme)
        }
        "panel" => Gesture::Panel,
        "dismiss" => Gesture::Dismiss,
        "check" => Gesture::Check(argument("check")?),
        "uncheck" => Gesture::Uncheck(argument("uncheck")?),
        "consent" => Gesture::Consent,
        "cancel" => Gesture::Cancel,
        "sign-out" => Gesture::SignOut,
        "show" => Gesture::Show,
        "help" | "?" => Gesture::Help,
        "quit" | "exit" => Gesture::Quit,
        other => return Err(GestureError::Unknown(other.to_string())),
    };
    Ok(Some(gesture))
}

//! Application theme choices so the dialog, store, and CLI share one closed set.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum AppTheme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// One row of the theme dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChoice {
    pub theme: AppTheme,
    /// Catalog key for the visible label.
    pub message_key: &'static str,
    pub icon: &'static str,
}

/// Theme dialog options in display order.
pub const THEME_CHOICES: &[ThemeChoice] = &[
    ThemeChoice {
        theme: AppTheme::Light,
        message_key: "Light",
        icon: "Light",
    },
    ThemeChoice {
        theme: AppTheme::Dark,
        message_key: "Dark",
        icon: "CircleFill",
    },
    ThemeChoice {
        theme: AppTheme::HighContrast,
        message_key: "High Contrast",
        icon: "Contrast",
    },
];

impl AppTheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "high-contrast" | "highcontrast" | "high_contrast" => Some(Self::HighContrast),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    pub fn choice(self) -> &'static ThemeChoice {
        let idx = THEME_CHOICES
            .iter()
            .position(|choice| choice.theme == self)
            .unwrap_or(0);
        &THEME_CHOICES[idx]
    }
}

impl std::fmt::Display for AppTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Applies a theme to the running surface immediately, outside the store.
pub trait ThemeApplier {
    fn apply_theme_now(&mut self, theme: AppTheme);
}

impl<F> ThemeApplier for F
where
    F: FnMut(AppTheme),
{
    fn apply_theme_now(&mut self, theme: AppTheme) {
        self(theme);
    }
}

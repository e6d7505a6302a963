//! Shared frame helpers so menu, dialog, and panel overlays draw the same borders.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::AppTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub t_left: char,
    pub t_right: char,
}

pub const BORDER_SINGLE: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    t_left: '├',
    t_right: '┤',
};

pub const BORDER_HEAVY: BorderSet = BorderSet {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
    t_left: '┣',
    t_right: '┫',
};

pub fn borders_for_theme(theme: AppTheme) -> &'static BorderSet {
    match theme {
        AppTheme::HighContrast => &BORDER_HEAVY,
        AppTheme::Light | AppTheme::Dark => &BORDER_SINGLE,
    }
}

#[must_use]
pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

#[must_use]
pub(crate) fn truncate_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

fn rule(borders: &BorderSet, left: char, right: char, width: usize) -> String {
    let inner: String = std::iter::repeat_n(borders.horizontal, width.saturating_sub(2)).collect();
    format!("{left}{inner}{right}")
}

#[must_use]
pub(crate) fn frame_top(borders: &BorderSet, width: usize) -> String {
    rule(borders, borders.top_left, borders.top_right, width)
}

#[must_use]
pub(crate) fn frame_bottom(borders: &BorderSet, width: usize) -> String {
    rule(borders, borders.bottom_left, borders.bottom_right, width)
}

#[must_use]
pub(crate) fn frame_separator(borders: &BorderSet, width: usize) -> String {
    rule(borders, borders.t_left, borders.t_right, width)
}

#[must_use]
pub(crate) fn centered_title_line(borders: &BorderSet, title: &str, width: usize) -> String {
    let inner_width = width.saturating_sub(2);
    let title = truncate_display(title, inner_width);
    let padding = inner_width.saturating_sub(display_width(&title));
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    format!(
        "{}{}{}{}{}",
        borders.vertical,
        " ".repeat(left_pad),
        title,
        " ".repeat(right_pad),
        borders.vertical
    )
}

/// Left-aligned row padded to exactly `width` columns including borders.
#[must_use]
pub(crate) fn content_line(borders: &BorderSet, text: &str, width: usize) -> String {
    let inner_width = width.saturating_sub(2);
    let text = truncate_display(text, inner_width);
    let pad = inner_width.saturating_sub(display_width(&text));
    format!(
        "{}{}{}{}",
        borders.vertical,
        text,
        " ".repeat(pad),
        borders.vertical
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_display_respects_wide_chars() {
        assert_eq!(truncate_display("日本語", 4), "日本");
        assert_eq!(truncate_display("abc", 0), "");
    }

    #[test]
    fn frame_rows_share_width() {
        let borders = &BORDER_SINGLE;
        let width = 24;
        for line in [
            frame_top(borders, width),
            frame_separator(borders, width),
            centered_title_line(borders, "Settings", width),
            content_line(borders, "1 selected: Files.Read", width),
            frame_bottom(borders, width),
        ] {
            assert_eq!(display_width(&line), width, "line: {line}");
        }
    }

    #[test]
    fn content_line_clips_long_text() {
        let line = content_line(&BORDER_SINGLE, "abcdefghijklmnop", 8);
        assert_eq!(line, "│abcdef│");
    }

    #[test]
    fn high_contrast_uses_heavy_borders() {
        assert_eq!(borders_for_theme(AppTheme::HighContrast), &BORDER_HEAVY);
        assert_eq!(borders_for_theme(AppTheme::Dark), &BORDER_SINGLE);
    }
}

//! Text rendering of the overflow menu, theme dialog, and permissions panel.
//!
//! Each surface is a framed block of lines; the host decides where to draw it.

use crate::menu::MenuItem;
use crate::overlay_frame::{
    borders_for_theme, centered_title_line, content_line, frame_bottom, frame_separator,
    frame_top,
};
use crate::selection::ScopeSelection;
use crate::theme::AppTheme;
use crate::view_model::{PanelFooterView, ThemeDialogView, MENU_TRIGGER_LABEL, PANEL_CLOSE_LABEL};

pub fn overlay_width_for_terminal(cols: usize) -> usize {
    cols.clamp(32, 64)
}

pub fn format_overflow_menu(items: &[MenuItem], theme: AppTheme, cols: usize) -> String {
    let borders = borders_for_theme(theme);
    let width = overlay_width_for_terminal(cols);
    let mut lines = Vec::new();

    lines.push(frame_top(borders, width));
    lines.push(centered_title_line(borders, MENU_TRIGGER_LABEL, width));
    lines.push(frame_separator(borders, width));
    for (idx, item) in items.iter().enumerate() {
        let row = match item.href {
            Some(href) => format!(" {}. {} -> {href}", idx + 1, item.label),
            None => format!(" {}. {}", idx + 1, item.label),
        };
        lines.push(content_line(borders, &row, width));
    }
    lines.push(frame_bottom(borders, width));

    lines.join("\n")
}

pub fn overflow_menu_height(item_count: usize) -> usize {
    // Top border + title + separator + items + bottom border
    1 + 1 + 1 + item_count + 1
}

pub fn format_theme_dialog(view: &ThemeDialogView, cols: usize) -> String {
    let borders = borders_for_theme(view.selected);
    let width = overlay_width_for_terminal(cols);
    let mut lines = Vec::new();

    lines.push(frame_top(borders, width));
    lines.push(centered_title_line(borders, &view.title, width));
    lines.push(frame_separator(borders, width));
    lines.push(content_line(borders, &format!(" {}", view.label), width));
    for (idx, (choice, label)) in view.options.iter().enumerate() {
        let marker = if choice.theme == view.selected { "*" } else { " " };
        let row = format!(" {marker} {}. {label} ({})", idx + 1, choice.icon);
        lines.push(content_line(borders, &row, width));
    }
    lines.push(frame_bottom(borders, width));

    lines.join("\n")
}

pub fn theme_dialog_height(option_count: usize) -> usize {
    // Top border + title + separator + label + options + bottom border
    1 + 1 + 1 + 1 + option_count + 1
}

/// Panel body rows: the listed scopes with their checked state.
pub struct PanelBody<'a> {
    pub scopes: &'a [String],
    pub checked: &'a ScopeSelection,
}

pub fn format_permissions_panel(
    title: &str,
    body: &PanelBody<'_>,
    footer: &PanelFooterView,
    theme: AppTheme,
    cols: usize,
) -> String {
    let borders = borders_for_theme(theme);
    let width = overlay_width_for_terminal(cols);
    let mut lines = Vec::new();

    lines.push(frame_top(borders, width));
    lines.push(centered_title_line(
        borders,
        &format!("{title}  [{PANEL_CLOSE_LABEL}]"),
        width,
    ));
    lines.push(frame_separator(borders, width));
    for scope in body.scopes {
        let mark = if body.checked.contains(scope) { "x" } else { " " };
        lines.push(content_line(borders, &format!(" [{mark}] {scope}"), width));
    }
    lines.push(frame_separator(borders, width));
    lines.push(content_line(borders, &format!(" {}", footer.details), width));
    let consent = if footer.consent_enabled {
        format!("[{}]", footer.consent_label)
    } else {
        format!("({})", footer.consent_label)
    };
    lines.push(content_line(
        borders,
        &format!(" {consent} [{}]", footer.cancel_label),
        width,
    ));
    lines.push(frame_bottom(borders, width));

    lines.join("\n")
}

pub fn permissions_panel_height(scope_count: usize) -> usize {
    // Top + title + separator + scopes + separator + details + buttons + bottom
    1 + 1 + 1 + scope_count + 1 + 1 + 1 + 1
}

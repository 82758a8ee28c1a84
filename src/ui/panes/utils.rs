//! Shared styling helpers for pane rendering

use crate::frame::BarRole;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Color, Modifier, Style};

/// Border style for a pane, highlighted when focused
pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Fill color for a bar in the given role
pub(super) fn role_color(role: BarRole) -> Color {
    match role {
        BarRole::Idle => DEFAULT_THEME.bar_idle,
        BarRole::Compared => DEFAULT_THEME.bar_compared,
        BarRole::Swapped => DEFAULT_THEME.bar_swapped,
        BarRole::Sorted => DEFAULT_THEME.bar_sorted,
    }
}

/// Clamp a scroll offset so the last page stays full
pub(super) fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    if total_items > visible_height {
        offset.min(total_items - visible_height)
    } else {
        0
    }
}

//! Event log pane rendering

use super::utils::{border_style, clamp_scroll};
use crate::frame::describe;
use crate::trace::{Event, EventKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn kind_style(kind: EventKind) -> Style {
    match kind {
        EventKind::Compare => Style::default().fg(DEFAULT_THEME.bar_compared),
        EventKind::Swap => Style::default().fg(DEFAULT_THEME.bar_swapped),
        EventKind::PassEnd => Style::default().fg(DEFAULT_THEME.primary),
        EventKind::Enter(_) => Style::default().fg(DEFAULT_THEME.comment),
        EventKind::Done => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render the event log pane: every event up to and including `position`
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[Event<u64>],
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Event Log ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if events.is_empty() {
        let paragraph = Paragraph::new("(no events)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let shown = &events[..=position.min(events.len() - 1)];

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = clamp_scroll(*scroll_offset, shown.len(), visible_height);

    let visible_items: Vec<ListItem> = shown
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, event)| {
            let mut style = kind_style(event.kind());
            if idx == position {
                style = style.bg(DEFAULT_THEME.current_line_bg);
            }
            ListItem::new(format!("{:>5}  {}", idx + 1, describe(event))).style(style)
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

//! Array pane: the current snapshot as a bar chart
//!
//! Bar colors come from [`bar_roles`]: compared pairs in gold, swapped pairs
//! in crimson, the settled tail in green.

use super::utils::{border_style, role_color};
use crate::frame::{bar_roles, describe};
use crate::trace::Event;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width of each bar so `count` bars with 1-column gaps fit in `inner_width`
fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let per_bar = (inner_width as usize + 1) / count;
    per_bar.saturating_sub(1).clamp(1, u16::MAX as usize) as u16
}

/// Render the array pane
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    event: Option<&Event<u64>>,
    is_focused: bool,
) {
    let title = match event {
        Some(event) => format!(" Array — {} ", describe(event)),
        None => " Array ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(event) = event.filter(|e| !e.snapshot().is_empty()) else {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let values = event.snapshot();
    let bars: Vec<Bar> = values
        .iter()
        .zip(bar_roles(event))
        .enumerate()
        .map(|(idx, (value, role))| {
            let color = role_color(role);
            Bar::default()
                .value(*value)
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let max = values.iter().copied().max().unwrap_or(1).max(1);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width.saturating_sub(2), values.len()))
        .bar_gap(1)
        .max(max);

    frame.render_widget(chart, area);
}

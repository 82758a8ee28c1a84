//! Plain-text frames for terminals without the full UI
//!
//! Each frame is a caption line followed by one horizontal bar per element,
//! scaled so the largest value spans `width` characters.

use crate::frame::{bar_roles, describe, BarRole};
use crate::trace::Event;

/// Clear-screen sequence printed before each frame
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

fn marker(role: BarRole) -> &'static str {
    match role {
        BarRole::Idle => "",
        BarRole::Compared => "  <- compare",
        BarRole::Swapped => "  <- swap",
        BarRole::Sorted => "",
    }
}

/// Render one event as text
pub fn render_frame(event: &Event<u64>, width: usize) -> String {
    let values = event.snapshot();
    let max = values.iter().copied().max().unwrap_or(1).max(1);

    let mut out = String::new();
    out.push_str(&format!("Action: {}\n", describe(event)));
    for (value, role) in values.iter().zip(bar_roles(event)) {
        let len = (*value as u128 * width as u128 / max as u128) as usize;
        out.push_str(&format!("{:>3} |{}{}\n", value, "#".repeat(len), marker(role)));
    }
    out
}

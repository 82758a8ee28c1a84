//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: Bar chart of the current snapshot, colored by element role
//! - [`source`]: Source listing with the executing line highlighted
//! - [`log`]: Event log up to the playback cursor
//! - [`status`]: Status bar with keybindings, tallies, and playback state
//! - `utils`: Shared styling and scroll helpers
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state; scroll positions are owned by the app and passed in mutably.

mod utils;

pub mod array;
pub mod log;
pub mod source;
pub mod status;

pub use array::render_array_pane;
pub use log::render_log_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};

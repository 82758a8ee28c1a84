//! # Introduction
//!
//! bubbletty runs bubble sort one step at a time, recording a snapshot of the
//! array at every comparison, swap, and pass boundary.  The recorded trace is
//! then played back forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or printed as plain ASCII frames.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Trace generator → Events → TraceHistory → TUI / ASCII
//! ```
//!
//! 1. [`trace`] — the lazy [`trace::Trace`] iterator and the
//!    [`trace::Event`] record it yields.
//! 2. [`snapshot`] — [`snapshot::TraceHistory`], the memory-bounded buffer
//!    that gives renderers random access and running tallies.
//! 3. [`frame`] — renderer-neutral mapping from an event to per-element roles
//!    and a caption.
//! 4. [`ascii`] — plain-text frames.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`logging`] — log filter and the stderr writer the TUI can pause.
//!
//! ## Example
//!
//! ```
//! use bubbletty::trace::{generate_trace, EventKind};
//!
//! let events = generate_trace(&[3, 1, 2]);
//! assert_eq!(events[0].kind(), EventKind::Compare);
//! assert_eq!(events.last().unwrap().snapshot(), &[1, 2, 3]);
//! ```

pub mod ascii;
pub mod errors;
pub mod frame;
pub mod input;
pub mod logging;
pub mod snapshot;
pub mod trace;
pub mod ui;

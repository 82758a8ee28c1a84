//! Bubble sort tracing
//!
//! This module turns a bubble sort run into a replayable event log:
//! - [`generator`]: the lazy [`Trace`] iterator and the eager [`generate_trace`]
//! - [`event`]: the [`Event`] record and its [`EventKind`] tag
//! - [`listing`]: the source listing that events map onto
//!
//! # Event Order
//!
//! For each pass the generator emits a `compare` per adjacent pair, a `swap`
//! right after any compare that found a strict inversion, and a `pass_end`
//! once the pass is over. A pass with no swap ends the run. The last event is
//! always `done`, carrying the sorted array.

pub mod event;
pub mod generator;
pub mod listing;

pub use event::{Checkpoint, Event, EventKind};
pub use generator::{generate_code_trace, generate_trace, Trace, TraceOptions};
pub use listing::SOURCE_LISTING;

//! Trace events
//!
//! An [`Event`] is one discrete step of a bubble sort run. Every event owns a
//! full copy of the array as it stood at that step, so a recorded trace can be
//! replayed, scrubbed, or rendered out of order without re-running the sort.

use super::listing;
use std::fmt;

/// Algorithm checkpoints reported by `enter` events in code-level traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checkpoint {
    /// Function entry, before anything has been read
    FunctionEntry,
    /// Length of the input has been taken
    LengthCheck,
    /// Top of an outer-loop iteration
    PassHeader,
    /// Swap flag reset, inner loop about to start
    InnerLoopHeader,
}

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Enter(Checkpoint),
    Compare,
    Swap,
    PassEnd,
    Done,
}

impl EventKind {
    /// Short lowercase tag (`enter`, `compare`, `swap`, `pass_end`, `done`)
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Enter(_) => "enter",
            EventKind::Compare => "compare",
            EventKind::Swap => "swap",
            EventKind::PassEnd => "pass_end",
            EventKind::Done => "done",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One step of a bubble sort trace
///
/// Events are only built by the trace generator and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    kind: EventKind,
    pass_index: Option<usize>,
    pair: Option<(usize, usize)>,
    snapshot: Vec<T>,
}

impl<T> Event<T> {
    pub(crate) fn new(
        kind: EventKind,
        pass_index: Option<usize>,
        pair: Option<(usize, usize)>,
        snapshot: Vec<T>,
    ) -> Self {
        Event {
            kind,
            pass_index,
            pair,
            snapshot,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Outer-loop iteration this event belongs to, `None` before the first pass
    pub fn pass_index(&self) -> Option<usize> {
        self.pass_index
    }

    /// Index pair of a compare or swap
    pub fn pair(&self) -> Option<(usize, usize)> {
        self.pair
    }

    pub fn left_index(&self) -> Option<usize> {
        self.pair.map(|(left, _)| left)
    }

    pub fn right_index(&self) -> Option<usize> {
        self.pair.map(|(_, right)| right)
    }

    /// Array contents at this step
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Vec<T> {
        self.snapshot
    }

    /// 0-based line of [`listing::SOURCE_LISTING`] this event corresponds to
    pub fn source_line(&self) -> usize {
        match self.kind {
            EventKind::Enter(Checkpoint::FunctionEntry) => listing::LINE_SIGNATURE,
            EventKind::Enter(Checkpoint::LengthCheck) => listing::LINE_LENGTH,
            EventKind::Enter(Checkpoint::PassHeader) => listing::LINE_OUTER_LOOP,
            EventKind::Enter(Checkpoint::InnerLoopHeader) => listing::LINE_INNER_LOOP,
            EventKind::Compare => listing::LINE_COMPARE,
            EventKind::Swap => listing::LINE_SWAP,
            EventKind::PassEnd => listing::LINE_EARLY_EXIT,
            // No pass ran: the short-input return was taken
            EventKind::Done if self.pass_index.is_none() => listing::LINE_TRIVIAL_RETURN,
            EventKind::Done => listing::LINE_END,
        }
    }

    pub fn is_done(&self) -> bool {
        self.kind == EventKind::Done
    }
}

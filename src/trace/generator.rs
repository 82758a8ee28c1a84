//! Bubble sort trace generator
//!
//! [`Trace`] runs bubble sort on a private copy of its input, one step per
//! call to [`Iterator::next`]. The working copy is the only mutable state; each
//! yielded [`Event`] carries its own clone of it.

use super::event::{Checkpoint, Event, EventKind};

/// Options controlling which events a trace reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceOptions {
    /// Also emit `enter` events at function entry and loop headers
    pub checkpoints: bool,
}

/// Where the generator is inside the double loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    FunctionEntry,
    LengthCheck,
    PassHeader,
    InnerLoopHeader,
    Compare,
    Swap,
    PassEnd,
    Done,
    Finished,
}

/// Lazy, finite bubble sort trace
#[derive(Debug, Clone)]
pub struct Trace<T> {
    work: Vec<T>,
    options: TraceOptions,
    phase: Phase,
    pass: usize,
    j: usize,
    made_swap: bool,
    passes_run: bool,
}

impl<T: PartialOrd + Clone> Trace<T> {
    /// Trace the default event set (compare, swap, pass_end, done)
    pub fn new(input: &[T]) -> Self {
        Self::with_options(input, TraceOptions::default())
    }

    pub fn with_options(input: &[T], options: TraceOptions) -> Self {
        Trace {
            work: input.to_vec(),
            options,
            phase: Phase::FunctionEntry,
            pass: 0,
            j: 0,
            made_swap: false,
            passes_run: false,
        }
    }

    fn current_pass(&self) -> Option<usize> {
        self.passes_run.then_some(self.pass)
    }

    fn emit(&self, kind: EventKind, pair: Option<(usize, usize)>) -> Event<T> {
        Event::new(kind, self.current_pass(), pair, self.work.clone())
    }

    /// Last `j` of the current pass (inclusive)
    fn last_inner_index(&self) -> usize {
        self.work.len() - self.pass - 2
    }

    fn advance_inner(&mut self) {
        if self.j >= self.last_inner_index() {
            self.phase = Phase::PassEnd;
        } else {
            self.j += 1;
            self.phase = Phase::Compare;
        }
    }
}

impl<T: PartialOrd + Clone> Iterator for Trace<T> {
    type Item = Event<T>;

    fn next(&mut self) -> Option<Event<T>> {
        loop {
            match self.phase {
                Phase::FunctionEntry => {
                    self.phase = Phase::LengthCheck;
                    if self.options.checkpoints {
                        return Some(self.emit(EventKind::Enter(Checkpoint::FunctionEntry), None));
                    }
                }
                Phase::LengthCheck => {
                    self.phase = if self.work.len() <= 1 {
                        Phase::Done
                    } else {
                        Phase::PassHeader
                    };
                    if self.options.checkpoints {
                        return Some(self.emit(EventKind::Enter(Checkpoint::LengthCheck), None));
                    }
                }
                Phase::PassHeader => {
                    self.passes_run = true;
                    self.phase = Phase::InnerLoopHeader;
                    if self.options.checkpoints {
                        return Some(self.emit(EventKind::Enter(Checkpoint::PassHeader), None));
                    }
                }
                Phase::InnerLoopHeader => {
                    self.made_swap = false;
                    self.j = 0;
                    self.phase = Phase::Compare;
                    if self.options.checkpoints {
                        return Some(
                            self.emit(EventKind::Enter(Checkpoint::InnerLoopHeader), None),
                        );
                    }
                }
                Phase::Compare => {
                    let j = self.j;
                    let event = self.emit(EventKind::Compare, Some((j, j + 1)));
                    if self.work[j] > self.work[j + 1] {
                        self.phase = Phase::Swap;
                    } else {
                        self.advance_inner();
                    }
                    return Some(event);
                }
                Phase::Swap => {
                    let j = self.j;
                    self.work.swap(j, j + 1);
                    self.made_swap = true;
                    let event = self.emit(EventKind::Swap, Some((j, j + 1)));
                    self.advance_inner();
                    return Some(event);
                }
                Phase::PassEnd => {
                    let event = self.emit(EventKind::PassEnd, None);
                    let last_pass = self.pass + 2 >= self.work.len();
                    if !self.made_swap || last_pass {
                        self.phase = Phase::Done;
                    } else {
                        self.pass += 1;
                        self.phase = Phase::PassHeader;
                    }
                    return Some(event);
                }
                Phase::Done => {
                    self.phase = Phase::Finished;
                    return Some(self.emit(EventKind::Done, None));
                }
                Phase::Finished => return None,
            }
        }
    }
}

impl<T: PartialOrd + Clone> std::iter::FusedIterator for Trace<T> {}

/// Run bubble sort over `input` and collect every event
pub fn generate_trace<T: PartialOrd + Clone>(input: &[T]) -> Vec<Event<T>> {
    Trace::new(input).collect()
}

/// Like [`generate_trace`], with `enter` checkpoint events included
pub fn generate_code_trace<T: PartialOrd + Clone>(input: &[T]) -> Vec<Event<T>> {
    Trace::with_options(input, TraceOptions { checkpoints: true }).collect()
}

// Recorded trace history for stepping forward and backward

use crate::errors::{HistoryError, HistoryResult};
use crate::trace::{Event, EventKind};
use std::mem;
use tracing::{debug, warn};

/// Running counts up to a point in the trace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub comparisons: usize,
    pub swaps: usize,
    /// Number of `pass_end` events seen
    pub passes: usize,
}

impl Tally {
    fn after<T>(self, event: &Event<T>) -> Self {
        let mut next = self;
        match event.kind() {
            EventKind::Compare => next.comparisons += 1,
            EventKind::Swap => next.swaps += 1,
            EventKind::PassEnd => next.passes += 1,
            EventKind::Enter(_) | EventKind::Done => {}
        }
        next
    }
}

/// Estimate the memory held by one recorded event, in bytes
pub fn estimated_size<T>(event: &Event<T>) -> usize {
    mem::size_of::<Event<T>>() + event.snapshot().len() * mem::size_of::<T>()
}

/// Fully buffered trace with a playback cursor
///
/// Every event is kept so that playback can seek anywhere. The buffer is
/// bounded by an estimated memory limit since a trace of `n` elements holds
/// O(n²) events of n elements each.
#[derive(Debug)]
pub struct TraceHistory<T> {
    events: Vec<Event<T>>,
    tallies: Vec<Tally>,
    position: usize,
    max_memory: usize,
    current_memory: usize,
}

impl<T> TraceHistory<T> {
    pub fn new(max_memory: usize) -> Self {
        TraceHistory {
            events: Vec::new(),
            tallies: Vec::new(),
            position: 0,
            max_memory,
            current_memory: 0,
        }
    }

    /// Add an event to the end of the history
    pub fn push(&mut self, event: Event<T>) -> HistoryResult<()> {
        let event_size = estimated_size(&event);

        if self.current_memory + event_size > self.max_memory {
            return Err(HistoryError::SnapshotLimitExceeded {
                current: self.current_memory,
                requested: event_size,
                limit: self.max_memory,
            });
        }

        let tally = self.tallies.last().copied().unwrap_or_default().after(&event);
        self.current_memory += event_size;
        self.tallies.push(tally);
        self.events.push(event);
        Ok(())
    }

    /// Drain a trace into the history
    ///
    /// Stops at the first event that does not fit; whatever was pushed before
    /// it stays available for playback.
    pub fn record<I>(&mut self, trace: I) -> HistoryResult<()>
    where
        I: IntoIterator<Item = Event<T>>,
    {
        for event in trace {
            if let Err(e) = self.push(event) {
                warn!(recorded = self.events.len(), "trace truncated: {e}");
                return Err(e);
            }
        }
        debug!(
            events = self.events.len(),
            bytes = self.current_memory,
            "trace recorded"
        );
        Ok(())
    }

    /// Get an event by index
    pub fn get(&self, index: usize) -> Option<&Event<T>> {
        self.events.get(index)
    }

    /// Event under the cursor
    pub fn current(&self) -> Option<&Event<T>> {
        self.events.get(self.position)
    }

    /// All recorded events, oldest first
    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.events.len()
    }

    /// Whether the recorded trace runs all the way to `done`
    pub fn is_complete(&self) -> bool {
        self.events.last().is_some_and(|e| e.is_done())
    }

    /// Counts up to and including the current event
    pub fn tally(&self) -> Tally {
        self.tallies.get(self.position).copied().unwrap_or_default()
    }

    pub fn step_forward(&mut self) -> HistoryResult<()> {
        if self.events.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.is_at_end() {
            return Err(HistoryError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> HistoryResult<()> {
        if self.events.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.position == 0 {
            return Err(HistoryError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Move the cursor to an arbitrary step
    pub fn seek(&mut self, index: usize) -> HistoryResult<()> {
        if index >= self.events.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.events.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) -> HistoryResult<()> {
        if self.events.is_empty() {
            return Err(HistoryError::Empty);
        }
        self.position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> HistoryResult<()> {
        if self.events.is_empty() {
            return Err(HistoryError::Empty);
        }
        self.position = self.events.len() - 1;
        Ok(())
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{generate_trace, Trace};

    const LIMIT: usize = 16 * 1024 * 1024;

    fn recorded(input: &[u64]) -> TraceHistory<u64> {
        let mut history = TraceHistory::new(LIMIT);
        history.record(Trace::new(input)).expect("record failed");
        history
    }

    #[test]
    fn test_record_keeps_every_event() {
        let history = recorded(&[3, 1, 2]);
        assert_eq!(history.events(), generate_trace(&[3u64, 1, 2]).as_slice());
        assert!(history.is_complete());
        assert_eq!(history.position(), 0);
    }

    #[test]
    fn test_stepping_stops_at_both_ends() {
        let mut history = recorded(&[2, 1]);
        assert_eq!(history.step_backward(), Err(HistoryError::AtStart));

        while history.step_forward().is_ok() {}
        assert!(history.is_at_end());
        assert_eq!(history.position(), history.len() - 1);
        assert_eq!(history.step_forward(), Err(HistoryError::AtEnd));

        history.step_backward().unwrap();
        assert_eq!(history.position(), history.len() - 2);
    }

    #[test]
    fn test_seek_and_jumps() {
        let mut history = recorded(&[4, 3, 2, 1]);
        history.seek(3).unwrap();
        assert_eq!(history.position(), 3);

        let len = history.len();
        assert_eq!(
            history.seek(len),
            Err(HistoryError::OutOfRange { index: len, len })
        );
        assert_eq!(history.position(), 3);

        history.jump_to_end().unwrap();
        assert!(history.current().is_some_and(|e| e.is_done()));
        history.rewind_to_start().unwrap();
        assert!(history.is_at_start());
    }

    #[test]
    fn test_tally_follows_cursor() {
        // [3,1,2]: compare swap compare swap pass_end compare pass_end done
        let mut history = recorded(&[3, 1, 2]);
        assert_eq!(
            history.tally(),
            Tally {
                comparisons: 1,
                swaps: 0,
                passes: 0
            }
        );

        history.seek(4).unwrap();
        assert_eq!(
            history.tally(),
            Tally {
                comparisons: 2,
                swaps: 2,
                passes: 1
            }
        );

        history.jump_to_end().unwrap();
        assert_eq!(
            history.tally(),
            Tally {
                comparisons: 3,
                swaps: 2,
                passes: 2
            }
        );
    }

    #[test]
    fn test_memory_limit_truncates_history() {
        let input: Vec<u64> = (0..20).rev().collect();
        let one_event = estimated_size(&generate_trace(&input)[0]);
        let mut history = TraceHistory::new(one_event * 5);

        let result = history.record(Trace::new(&input));
        assert!(matches!(
            result,
            Err(HistoryError::SnapshotLimitExceeded { .. })
        ));
        assert_eq!(history.len(), 5);
        assert!(!history.is_complete());
        assert!(history.memory_usage() <= history.memory_limit());
    }

    #[test]
    fn test_empty_history_navigation() {
        let mut history: TraceHistory<u64> = TraceHistory::new(LIMIT);
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert_eq!(history.step_forward(), Err(HistoryError::Empty));
        assert_eq!(history.rewind_to_start(), Err(HistoryError::Empty));
        assert_eq!(history.tally(), Tally::default());
    }
}

//! Renderer-neutral view of an event
//!
//! Both renderers color or mark elements the same way; the mapping lives here
//! so neither needs to know how bubble sort works.

use crate::trace::{Checkpoint, Event, EventKind};

/// How a single element should be presented at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Idle,
    Compared,
    Swapped,
    /// Element is in its final position
    Sorted,
}

/// First index of the settled tail, if any
fn sorted_from<T>(event: &Event<T>) -> Option<usize> {
    let n = event.snapshot().len();
    let pass = event.pass_index()?;
    match event.kind() {
        // passes 0..pass have each settled one element
        EventKind::Compare
        | EventKind::Swap
        | EventKind::Enter(Checkpoint::PassHeader)
        | EventKind::Enter(Checkpoint::InnerLoopHeader) => Some(n.saturating_sub(pass)),
        EventKind::PassEnd => Some(n.saturating_sub(pass + 1)),
        EventKind::Enter(_) => None,
        EventKind::Done => Some(0),
    }
}

/// One role per element of the event's snapshot
pub fn bar_roles<T>(event: &Event<T>) -> Vec<BarRole> {
    let n = event.snapshot().len();
    let tail = sorted_from(event).unwrap_or(n);
    let mut roles: Vec<BarRole> = (0..n)
        .map(|idx| {
            if idx >= tail || event.is_done() {
                BarRole::Sorted
            } else {
                BarRole::Idle
            }
        })
        .collect();

    if let Some((left, right)) = event.pair() {
        let role = match event.kind() {
            EventKind::Swap => BarRole::Swapped,
            _ => BarRole::Compared,
        };
        for idx in [left, right] {
            if let Some(slot) = roles.get_mut(idx) {
                *slot = role;
            }
        }
    }

    roles
}

/// One-line caption for an event
pub fn describe<T>(event: &Event<T>) -> String {
    let pass = event
        .pass_index()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    match (event.kind(), event.pair()) {
        (EventKind::Compare, Some((i, j))) => format!("compare indices {} ↔ {} (pass {})", i, j, pass),
        (EventKind::Swap, Some((i, j))) => format!("swap indices {} ↔ {} (pass {})", i, j, pass),
        (EventKind::Compare, None) | (EventKind::Swap, None) => event.kind().to_string(),
        (EventKind::PassEnd, _) => format!("pass end (pass {})", pass),
        (EventKind::Enter(Checkpoint::FunctionEntry), _) => "entering bubble_sort".to_string(),
        (EventKind::Enter(Checkpoint::LengthCheck), _) => "reading length".to_string(),
        (EventKind::Enter(Checkpoint::PassHeader), _) => format!("starting pass {}", pass),
        (EventKind::Enter(Checkpoint::InnerLoopHeader), _) => {
            format!("resetting swap flag (pass {})", pass)
        }
        (EventKind::Done, _) => "done — sorted".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{generate_code_trace, generate_trace};

    #[test]
    fn test_compare_and_swap_roles() {
        let events = generate_trace(&[3, 1, 2]);
        use BarRole::*;

        assert_eq!(bar_roles(&events[0]), vec![Compared, Compared, Idle]);
        assert_eq!(bar_roles(&events[1]), vec![Swapped, Swapped, Idle]);
        // pass 0 over: last element settled
        assert_eq!(bar_roles(&events[4]), vec![Idle, Idle, Sorted]);
        // pass 1 compare keeps the settled tail
        assert_eq!(bar_roles(&events[5]), vec![Compared, Compared, Sorted]);
        assert_eq!(bar_roles(events.last().unwrap()), vec![Sorted, Sorted, Sorted]);
    }

    #[test]
    fn test_trivial_done_is_sorted() {
        let events = generate_trace(&[5]);
        assert_eq!(bar_roles(&events[0]), vec![BarRole::Sorted]);
        let empty: Vec<Event<u8>> = generate_trace(&[]);
        assert!(bar_roles(&empty[0]).is_empty());
    }

    #[test]
    fn test_entry_checkpoints_are_idle() {
        let events = generate_code_trace(&[2, 1]);
        assert_eq!(bar_roles(&events[0]), vec![BarRole::Idle, BarRole::Idle]);
        assert_eq!(describe(&events[0]), "entering bubble_sort");
    }

    #[test]
    fn test_describe() {
        let events = generate_trace(&[2, 1]);
        assert_eq!(describe(&events[0]), "compare indices 0 ↔ 1 (pass 0)");
        assert_eq!(describe(&events[1]), "swap indices 0 ↔ 1 (pass 0)");
        assert_eq!(describe(&events[2]), "pass end (pass 0)");
        assert_eq!(describe(&events[3]), "done — sorted");
    }
}

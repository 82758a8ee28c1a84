// Integration tests for recording and replaying traces

use bubbletty::ascii::render_frame;
use bubbletty::errors::HistoryError;
use bubbletty::frame::{bar_roles, BarRole};
use bubbletty::snapshot::TraceHistory;
use bubbletty::trace::{
    generate_code_trace, generate_trace, Checkpoint, EventKind, Trace, TraceOptions, SOURCE_LISTING,
};

const LIMIT: usize = 64 * 1024 * 1024;

#[test]
fn test_replay_reproduces_states() {
    let input = [6u64, 2, 9, 2, 4];
    let mut history = TraceHistory::new(LIMIT);
    history.record(Trace::new(&input)).unwrap();

    // Walk forward, then back, and see the same snapshots both ways
    let mut forward = vec![history.current().unwrap().snapshot().to_vec()];
    while history.step_forward().is_ok() {
        forward.push(history.current().unwrap().snapshot().to_vec());
    }
    let mut backward = vec![history.current().unwrap().snapshot().to_vec()];
    while history.step_backward().is_ok() {
        backward.push(history.current().unwrap().snapshot().to_vec());
    }
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), generate_trace(&input).len());
    assert_eq!(forward.last().unwrap(), &vec![2, 2, 4, 6, 9]);
}

#[test]
fn test_final_tally_matches_event_counts() {
    let input: Vec<u64> = vec![8, 3, 5, 1, 9, 2];
    let events = generate_trace(&input);
    let mut history = TraceHistory::new(LIMIT);
    history.record(events.clone()).unwrap();
    history.jump_to_end().unwrap();

    let tally = history.tally();
    let compares = events.iter().filter(|e| e.kind() == EventKind::Compare).count();
    let swaps = events.iter().filter(|e| e.kind() == EventKind::Swap).count();
    let passes = events.iter().filter(|e| e.kind() == EventKind::PassEnd).count();
    assert_eq!(
        (tally.comparisons, tally.swaps, tally.passes),
        (compares, swaps, passes)
    );
}

#[test]
fn test_seek_out_of_range_keeps_position() {
    let mut history = TraceHistory::new(LIMIT);
    history.record(Trace::new(&[1u64, 2])).unwrap();
    history.seek(1).unwrap();

    assert_eq!(
        history.seek(10),
        Err(HistoryError::OutOfRange { index: 10, len: 3 })
    );
    assert_eq!(history.position(), 1);
}

#[test]
fn test_code_trace_maps_every_event_to_listing() {
    let events = generate_code_trace(&[4u64, 1, 3]);
    assert_eq!(
        events[0].kind(),
        EventKind::Enter(Checkpoint::FunctionEntry)
    );
    for event in &events {
        let line = event.source_line();
        assert!(line < SOURCE_LISTING.len());
        match event.kind() {
            EventKind::Compare => assert!(SOURCE_LISTING[line].contains("if a[j]")),
            EventKind::Swap => assert!(SOURCE_LISTING[line].contains("a.swap")),
            EventKind::PassEnd => assert!(SOURCE_LISTING[line].contains("made_swap")),
            EventKind::Enter(Checkpoint::PassHeader) => {
                assert!(SOURCE_LISTING[line].contains("for pass"))
            }
            _ => {}
        }
    }
    assert_eq!(events.last().unwrap().source_line(), SOURCE_LISTING.len() - 1);
}

#[test]
fn test_checkpoint_history_records_enter_events() {
    let mut history = TraceHistory::new(LIMIT);
    history
        .record(Trace::with_options(
            &[2u64, 1],
            TraceOptions { checkpoints: true },
        ))
        .unwrap();

    let enters = history
        .events()
        .iter()
        .filter(|e| matches!(e.kind(), EventKind::Enter(_)))
        .count();
    // entry, length, one pass header, one inner-loop header
    assert_eq!(enters, 4);
    assert!(history.is_complete());
}

#[test]
fn test_renderers_agree_on_roles() {
    let events = generate_trace(&[3u64, 1]);
    let swap = &events[1];
    assert_eq!(bar_roles(swap), vec![BarRole::Swapped, BarRole::Swapped]);
    assert_eq!(render_frame(swap, 3).matches("<- swap").count(), 2);
}

//! Main TUI application state and logic

use crate::errors::HistoryError;
use crate::snapshot::TraceHistory;
use crate::trace::SOURCE_LISTING;
use crate::ui::panes::{self, SourceScrollState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::trace;

/// Fastest and slowest auto-play intervals
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
pub const MAX_INTERVAL: Duration = Duration::from_secs(4);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Array,
    Log,
    Source,
}

impl FocusedPane {
    /// Move focus to the next pane (array -> log -> source)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Array => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Source,
            FocusedPane::Source => FocusedPane::Array,
        }
    }
}

/// The main application state
pub struct App {
    /// Recorded trace being played back
    pub history: TraceHistory<u64>,

    /// Whether the trace was cut short by the snapshot limit
    pub is_truncated: bool,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Time between steps in auto-play
    pub interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a recorded history
    pub fn new(history: TraceHistory<u64>, interval: Duration) -> Self {
        let is_truncated = !history.is_complete();
        App {
            history,
            is_truncated,
            focused_pane: FocusedPane::Array,
            source_scroll: SourceScrollState::default(),
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: if is_truncated {
                String::from("Trace truncated by snapshot limit")
            } else {
                String::from("Ready!")
            },
            is_playing: false,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.interval {
                self.tick();
            }

            let poll_timeout = self.interval.min(Duration::from_millis(50));
            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one step of auto-play
    fn tick(&mut self) {
        if self.history.step_forward().is_ok() {
            self.status_message = "Playing...".to_string();
            self.log_scroll = usize::MAX;
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = Instant::now();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Event log (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let current = self.history.current();

        panes::render_array_pane(
            frame,
            left_rows[0],
            current,
            self.focused_pane == FocusedPane::Array,
        );

        panes::render_log_pane(
            frame,
            left_rows[1],
            self.history.events(),
            self.history.position(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        panes::render_source_pane(
            frame,
            columns[1],
            SOURCE_LISTING,
            current.map(|e| e.source_line()),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.history.position(),
                total_steps: self.history.len(),
                tally: self.history.tally(),
                is_playing: self.is_playing,
                is_truncated: self.is_truncated,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        trace!(code = ?key.code, "key pressed");
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.history.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.interval = (self.interval / 2).max(MIN_INTERVAL);
                self.status_message = format!("Interval {} ms", self.interval.as_millis());
            }
            KeyCode::Char('-') => {
                self.interval = (self.interval * 2).min(MAX_INTERVAL);
                self.status_message = format!("Interval {} ms", self.interval.as_millis());
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.interval)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                if self.history.jump_to_end().is_ok() {
                    self.status_message = "Jumped to end".to_string();
                }
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                if self.history.rewind_to_start().is_ok() {
                    self.status_message = "Jumped to start".to_string();
                }
                self.log_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        match self.history.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(HistoryError::AtEnd) if self.is_truncated => {
                self.status_message =
                    "Cannot step forward: trace truncated by snapshot limit".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        match self.history.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app_for(input: &[u64]) -> App {
        let mut history = TraceHistory::new(64 * 1024 * 1024);
        history.record(Trace::new(input)).unwrap();
        App::new(history, Duration::from_millis(100))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_arrow_keys_step_through_history() {
        let mut app = app_for(&[3, 1, 2]);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.history.position(), 2);
        assert_eq!(app.status_message, "Stepped forward");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.history.position(), 1);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.history.position(), 0);
        assert!(app.status_message.starts_with("Cannot step backward"));
    }

    #[test]
    fn test_number_keys_and_jump_to_end() {
        let mut app = app_for(&[3, 1, 2]);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.history.position(), 5);
        assert_eq!(app.status_message, "Stepped forward 5 step(s)");

        press(&mut app, KeyCode::Char('9'));
        assert!(app.history.is_at_end());
        assert_eq!(app.status_message, "Stepped forward 2 step(s)");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(app.history.current().is_some_and(|e| e.is_done()));
    }

    #[test]
    fn test_playback_stops_at_end() {
        let mut app = app_for(&[2, 1]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);

        for _ in 0..app.history.len() {
            app.tick();
        }
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Playback complete");
        assert!(app.history.is_at_end());
    }

    #[test]
    fn test_speed_keys_respect_bounds() {
        let mut app = app_for(&[2, 1]);
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.interval, MIN_INTERVAL);
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.interval, MAX_INTERVAL);
    }

    #[test]
    fn test_focus_cycles_and_quit() {
        let mut app = app_for(&[1]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Log);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Array);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_panes_and_status() {
        let mut app = app_for(&[3, 1, 2]);
        let text = screen_text(&mut app);
        assert!(text.contains("Event Log"));
        assert!(text.contains("Source"));
        assert!(text.contains("Step 1/8"));
        assert!(text.contains("compare indices 0 ↔ 1"));
        assert!(text.contains("START"));

        press(&mut app, KeyCode::Enter);
        let text = screen_text(&mut app);
        assert!(text.contains("Step 8/8"));
        assert!(text.contains("END"));
    }

    #[test]
    fn test_truncated_history_is_flagged() {
        let mut history = TraceHistory::new(1);
        let _ = history.record(Trace::new(&[3u64, 2, 1]));
        let mut app = App::new(history, Duration::from_millis(100));
        assert!(app.is_truncated);

        press(&mut app, KeyCode::Right);
        assert!(app.status_message.starts_with("Cannot step forward"));
        let text = screen_text(&mut app);
        assert!(text.contains("Step 0/0"));
    }
}

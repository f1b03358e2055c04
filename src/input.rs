//! Input adapters
//!
//! Translate raw terminal input into navigator transitions: key bindings,
//! clicks on the prev/next controls and horizontal drag gestures. Also holds
//! the one-shot keyboard hint state.

use crate::navigator::Transition;
use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Transition),
    ToggleHelp,
    Quit,
}

/// Map a key press to a command
pub fn key_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(Command::Navigate(Transition::Advance))
        }
        KeyCode::Left | KeyCode::Backspace => Some(Command::Navigate(Transition::Retreat)),
        KeyCode::Home => Some(Command::Navigate(Transition::JumpToStart)),
        KeyCode::End => Some(Command::Navigate(Transition::JumpToEnd)),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Command::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

pub fn control_transition(control: Control) -> Transition {
    match control {
        Control::Prev => Transition::Retreat,
        Control::Next => Transition::Advance,
    }
}

/// Screen areas of the two controls from the most recent draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlAreas {
    pub prev: Rect,
    pub next: Rect,
}

impl ControlAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        if self.prev.contains(position) {
            Some(Control::Prev)
        } else if self.next.contains(position) {
            Some(Control::Next)
        } else {
            None
        }
    }
}

/// Turns a press/release pair into a swipe transition
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    units_per_column: f64,
    start: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64, units_per_column: f64) -> Self {
        Self {
            threshold,
            units_per_column,
            start: None,
        }
    }

    pub fn press(&mut self, column: u16) {
        self.begin(column as f64 * self.units_per_column);
    }

    /// Complete a terminal drag. Returns the transition if it was a swipe.
    pub fn release(&mut self, column: u16) -> Option<Transition> {
        self.end(column as f64 * self.units_per_column)
    }

    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
    }

    pub fn end(&mut self, x: f64) -> Option<Transition> {
        let start = self.start.take()?;
        classify_swipe(start - x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Positive `diff` means the pointer moved left
pub fn classify_swipe(diff: f64, threshold: f64) -> Option<Transition> {
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(Transition::Advance)
    } else {
        Some(Transition::Retreat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Visible,
    Fading,
    Hidden,
}

/// One-shot keyboard hint
#[derive(Debug, Clone)]
pub struct KeyboardHint {
    state: HintState,
}

impl KeyboardHint {
    pub fn new(visible: bool) -> Self {
        let state = if visible {
            HintState::Visible
        } else {
            HintState::Hidden
        };
        Self { state }
    }

    pub fn state(&self) -> HintState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state != HintState::Hidden
    }

    /// Start fading out. Returns true only for the first trigger, in which
    /// case the caller schedules `finish_fade`.
    pub fn dismiss(&mut self) -> bool {
        if self.state == HintState::Visible {
            self.state = HintState::Fading;
            true
        } else {
            false
        }
    }

    pub fn finish_fade(&mut self) {
        if self.state == HintState::Fading {
            self.state = HintState::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_advance_keys() {
        for code in [KeyCode::Right, KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(
                key_command(key(code)),
                Some(Command::Navigate(Transition::Advance))
            );
        }
    }

    #[test]
    fn test_retreat_and_jump_keys() {
        assert_eq!(
            key_command(key(KeyCode::Left)),
            Some(Command::Navigate(Transition::Retreat))
        );
        assert_eq!(
            key_command(key(KeyCode::Backspace)),
            Some(Command::Navigate(Transition::Retreat))
        );
        assert_eq!(
            key_command(key(KeyCode::Home)),
            Some(Command::Navigate(Transition::JumpToStart))
        );
        assert_eq!(
            key_command(key(KeyCode::End)),
            Some(Command::Navigate(Transition::JumpToEnd))
        );
    }

    #[test]
    fn test_unbound_and_quit_keys() {
        assert_eq!(key_command(key(KeyCode::Char('x'))), None);
        assert_eq!(key_command(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            key_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut swipe = SwipeTracker::new(50.0, 1.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(170.0), None);
    }

    #[test]
    fn test_leftward_swipe_advances() {
        let mut swipe = SwipeTracker::new(50.0, 1.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(140.0), Some(Transition::Advance));
        // Release without a new press does nothing
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn test_rightward_swipe_retreats() {
        let mut swipe = SwipeTracker::new(50.0, 1.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(160.0), Some(Transition::Retreat));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify_swipe(50.0, 50.0), None);
        assert_eq!(classify_swipe(-50.0, 50.0), None);
        assert_eq!(classify_swipe(50.5, 50.0), Some(Transition::Advance));
    }

    #[test]
    fn test_column_drag_scaled_to_units() {
        let mut swipe = SwipeTracker::new(50.0, 8.0);
        swipe.press(30);
        assert_eq!(swipe.release(24), None); // 48 units
        swipe.press(30);
        assert_eq!(swipe.release(23), Some(Transition::Advance)); // 56 units
        swipe.press(10);
        swipe.cancel();
        assert_eq!(swipe.release(40), None);
    }

    #[test]
    fn test_control_hit_testing() {
        let areas = ControlAreas {
            prev: Rect::new(0, 10, 8, 1),
            next: Rect::new(30, 10, 8, 1),
        };
        assert_eq!(areas.hit(3, 10), Some(Control::Prev));
        assert_eq!(areas.hit(37, 10), Some(Control::Next));
        assert_eq!(areas.hit(38, 10), None);
        assert_eq!(areas.hit(3, 9), None);
        assert_eq!(control_transition(Control::Prev), Transition::Retreat);
    }

    #[test]
    fn test_hint_dismissed_once() {
        let mut hint = KeyboardHint::new(true);
        assert!(hint.dismiss());
        assert_eq!(hint.state(), HintState::Fading);
        assert!(hint.is_shown());
        assert!(!hint.dismiss());
        hint.finish_fade();
        assert_eq!(hint.state(), HintState::Hidden);
        assert!(!hint.dismiss());
    }

    #[test]
    fn test_hidden_hint_never_dismisses() {
        let mut hint = KeyboardHint::new(false);
        assert!(!hint.is_shown());
        assert!(!hint.dismiss());
    }
}

use crate::error::Result;
use crate::input::{control_transition, ControlAreas, KeyboardHint, SwipeTracker};
use crate::navigator::{Navigator, Transition};
use crate::types::{Config, Control, Deck, Slide, UiMode};
use crate::view::DeckView;

pub struct AppState {
    pub deck: Deck,
    pub navigator: Navigator<DeckView>,
    pub config: Config,
    pub should_quit: bool,

    // Max width can be temporarily overridden by CLI (not persisted)
    pub cli_max_width_override: Option<usize>,

    pub ui_mode: UiMode,

    // Input adapters
    pub hint: KeyboardHint,
    pub swipe: SwipeTracker,
    pub controls: ControlAreas,
    hint_fade_requested: bool,
}

impl AppState {
    pub fn new(deck: Deck, config: Config) -> Result<Self> {
        let total = deck.len();
        let navigator = Navigator::new(total, DeckView::new(total))?;

        Ok(AppState {
            deck,
            navigator,
            hint: KeyboardHint::new(config.show_hint),
            swipe: SwipeTracker::new(config.swipe_threshold, config.swipe_units_per_column),
            config,
            should_quit: false,
            cli_max_width_override: None,
            ui_mode: UiMode::Normal,
            controls: ControlAreas::default(),
            hint_fade_requested: false,
        })
    }

    pub fn navigate(&mut self, transition: Transition) {
        self.navigator.apply(transition);
    }

    /// Primary click on one of the on-screen controls
    pub fn click(&mut self, control: Control) {
        tracing::debug!("Clicked {:?}", control);
        self.dismiss_hint();
        self.navigate(control_transition(control));
    }

    /// Left button pressed at a screen cell
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        match self.controls.hit(column, row) {
            Some(control) => {
                self.swipe.cancel();
                self.click(control);
            }
            None => self.swipe.press(column),
        }
    }

    /// Left button released at a screen column
    pub fn pointer_up(&mut self, column: u16) {
        if let Some(transition) = self.swipe.release(column) {
            tracing::debug!("Swipe recognised: {:?}", transition);
            self.navigate(transition);
        }
    }

    /// Any key press counts as the first interaction for the hint
    pub fn dismiss_hint(&mut self) {
        if self.hint.dismiss() {
            tracing::debug!("Keyboard hint dismissed");
            self.hint_fade_requested = true;
        }
    }

    /// Returns true once per dismissal; the caller starts the fade timer
    pub fn take_hint_fade_request(&mut self) -> bool {
        std::mem::take(&mut self.hint_fade_requested)
    }

    pub fn finish_hint_fade(&mut self) {
        self.hint.finish_fade();
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            UiMode::Normal => UiMode::Help,
        };
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slides.get(self.navigator.cursor())
    }

    /// Get effective max width (CLI override takes precedence over config)
    pub fn effective_max_width(&self) -> Option<usize> {
        self.cli_max_width_override.or(self.config.max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::parse_text_deck;
    use crate::error::DeckError;
    use crate::input::HintState;
    use crate::types::Emphasis;
    use ratatui::layout::Rect;

    fn create_test_app(slides: usize) -> AppState {
        let source = (1..=slides)
            .map(|i| format!("# Slide {}", i))
            .collect::<Vec<_>>()
            .join("\n---\n");
        let mut app = AppState::new(parse_text_deck(&source), Config::default()).unwrap();
        app.controls = ControlAreas {
            prev: Rect::new(0, 20, 8, 1),
            next: Rect::new(70, 20, 8, 1),
        };
        app
    }

    #[test]
    fn test_empty_deck_rejected() {
        let result = AppState::new(parse_text_deck(""), Config::default());
        assert!(matches!(result, Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn test_click_next_and_prev() {
        let mut app = create_test_app(3);
        app.pointer_down(72, 20);
        assert_eq!(app.navigator.cursor(), 1);
        assert_eq!(app.current_slide().unwrap().title.as_deref(), Some("Slide 2"));
        app.pointer_down(2, 20);
        assert_eq!(app.navigator.cursor(), 0);
    }

    #[test]
    fn test_click_at_boundary_is_safe() {
        let mut app = create_test_app(2);
        assert_eq!(
            app.navigator.presenter().emphasis(Control::Prev),
            Emphasis::Dimmed
        );
        app.click(Control::Prev);
        assert_eq!(app.navigator.cursor(), 0);
    }

    #[test]
    fn test_click_dismisses_hint_once() {
        let mut app = create_test_app(3);
        app.click(Control::Next);
        assert_eq!(app.hint.state(), HintState::Fading);
        assert!(app.take_hint_fade_request());
        app.click(Control::Next);
        assert!(!app.take_hint_fade_request());
        app.finish_hint_fade();
        assert_eq!(app.hint.state(), HintState::Hidden);
    }

    #[test]
    fn test_swipe_gestures() {
        let mut app = create_test_app(5);

        // 3 columns * 8 units = 24, below threshold
        app.pointer_down(40, 5);
        app.pointer_up(37);
        assert_eq!(app.navigator.cursor(), 0);

        // 8 columns leftward = 64 units
        app.pointer_down(40, 5);
        app.pointer_up(32);
        assert_eq!(app.navigator.cursor(), 1);

        // rightward drag retreats
        app.pointer_down(10, 5);
        app.pointer_up(30);
        assert_eq!(app.navigator.cursor(), 0);

        // swipes never dismiss the hint
        assert_eq!(app.hint.state(), HintState::Visible);
    }

    #[test]
    fn test_press_on_control_does_not_start_swipe() {
        let mut app = create_test_app(5);
        app.pointer_down(72, 20);
        app.pointer_up(0);
        assert_eq!(app.navigator.cursor(), 1);
    }

    #[test]
    fn test_hint_disabled_by_config() {
        let config = Config {
            show_hint: false,
            ..Config::default()
        };
        let mut app = AppState::new(parse_text_deck("# a\n---\n# b"), config).unwrap();
        app.dismiss_hint();
        assert!(!app.take_hint_fade_request());
        assert!(!app.hint.is_shown());
    }

    #[test]
    fn test_effective_max_width() {
        let mut app = create_test_app(1);
        assert_eq!(app.effective_max_width(), None);
        app.config.max_width = Some(100);
        assert_eq!(app.effective_max_width(), Some(100));
        app.cli_max_width_override = Some(60);
        assert_eq!(app.effective_max_width(), Some(60));
    }
}

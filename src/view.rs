//! Terminal render target for the navigator

use crate::navigator::Presenter;
use crate::types::{Control, Emphasis, SlideState};

/// Last state written by the navigator, read back by the UI when drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DeckView {
    states: Vec<SlideState>,
    counter: String,
    progress: f64,
    prev: Emphasis,
    next: Emphasis,
}

impl DeckView {
    pub fn new(total: usize) -> Self {
        DeckView {
            states: vec![SlideState::After; total],
            counter: String::new(),
            progress: 0.0,
            prev: Emphasis::Normal,
            next: Emphasis::Normal,
        }
    }

    pub fn states(&self) -> &[SlideState] {
        &self.states
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn emphasis(&self, control: Control) -> Emphasis {
        match control {
            Control::Prev => self.prev,
            Control::Next => self.next,
        }
    }
}

impl Presenter for DeckView {
    fn show_slide_state(&mut self, index: usize, state: SlideState) {
        if let Some(slot) = self.states.get_mut(index) {
            *slot = state;
        }
    }

    fn show_counter(&mut self, text: &str) {
        self.counter.clear();
        self.counter.push_str(text);
    }

    fn show_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    fn show_control(&mut self, control: Control, emphasis: Emphasis) {
        match control {
            Control::Prev => self.prev = emphasis,
            Control::Next => self.next = emphasis,
        }
    }
}

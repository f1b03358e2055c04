//! Slide navigation state machine
//!
//! The navigator owns a cursor over a fixed number of slides and exposes four
//! transitions. `advance` and `retreat` saturate at the ends of the deck,
//! `jump_to_start` and `jump_to_end` are absolute. After every transition the
//! full visual state is written to the injected [`Presenter`].

use crate::error::{DeckError, Result};
use crate::types::{Control, Emphasis, SlideState};

/// Render targets the navigator writes to
pub trait Presenter {
    fn show_slide_state(&mut self, index: usize, state: SlideState);
    fn show_counter(&mut self, text: &str);
    /// `fraction` is in `(0.0, 1.0]`
    fn show_progress(&mut self, fraction: f64);
    fn show_control(&mut self, control: Control, emphasis: Emphasis);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Retreat,
    JumpToStart,
    JumpToEnd,
}

/// Values derived from the cursor and slide count
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub counter: String,
    pub progress: f64,
    pub at_start: bool,
    pub at_end: bool,
}

impl Snapshot {
    /// Callers guarantee `cursor < total`
    pub fn compute(cursor: usize, total: usize) -> Self {
        let position = cursor + 1;
        Snapshot {
            counter: format!("{} / {}", position, total),
            progress: position as f64 / total as f64,
            at_start: cursor == 0,
            at_end: position == total,
        }
    }

    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

pub fn slide_state(index: usize, cursor: usize) -> SlideState {
    match index.cmp(&cursor) {
        std::cmp::Ordering::Less => SlideState::Before,
        std::cmp::Ordering::Equal => SlideState::Active,
        std::cmp::Ordering::Greater => SlideState::After,
    }
}

pub struct Navigator<P: Presenter> {
    cursor: usize,
    total: usize,
    presenter: P,
}

impl<P: Presenter> Navigator<P> {
    /// Create a navigator positioned on the first slide and render it
    pub fn new(total: usize, presenter: P) -> Result<Self> {
        if total == 0 {
            return Err(DeckError::EmptyDeck);
        }

        let mut navigator = Navigator {
            cursor: 0,
            total,
            presenter,
        };
        navigator.render();
        Ok(navigator)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::compute(self.cursor, self.total)
    }

    /// Move to the next slide. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.total {
            self.cursor += 1;
            self.render();
            true
        } else {
            false
        }
    }

    /// Move to the previous slide. Returns false when already on the first one.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.render();
            true
        } else {
            false
        }
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.render();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.total - 1;
        self.render();
    }

    pub fn apply(&mut self, transition: Transition) {
        let from = self.cursor;
        match transition {
            Transition::Advance => {
                self.advance();
            }
            Transition::Retreat => {
                self.retreat();
            }
            Transition::JumpToStart => self.jump_to_start(),
            Transition::JumpToEnd => self.jump_to_end(),
        }
        tracing::debug!(
            "{:?}: slide {} -> {} of {} ({:.0}%)",
            transition,
            from + 1,
            self.cursor + 1,
            self.total,
            self.snapshot().percent()
        );
    }

    /// Write every slide state and the snapshot to the presenter
    pub fn render(&mut self) {
        for index in 0..self.total {
            self.presenter
                .show_slide_state(index, slide_state(index, self.cursor));
        }

        let snapshot = self.snapshot();
        self.presenter.show_counter(&snapshot.counter);
        self.presenter.show_progress(snapshot.progress);
        self.presenter.show_control(Control::Prev, emphasis_for(snapshot.at_start));
        self.presenter.show_control(Control::Next, emphasis_for(snapshot.at_end));
    }
}

fn emphasis_for(at_boundary: bool) -> Emphasis {
    if at_boundary {
        Emphasis::Dimmed
    } else {
        Emphasis::Normal
    }
}

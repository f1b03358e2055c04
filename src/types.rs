use crate::constants::{
    DEFAULT_HINT_FADE_MS, DEFAULT_SWIPE_THRESHOLD, DEFAULT_UNITS_PER_COLUMN,
};

#[derive(Debug, Clone)]
pub struct Deck {
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub index: usize,
    pub title: Option<String>,
    pub lines: Vec<SlideLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideLine {
    pub text: String,
    pub style: LineStyle,
}

impl SlideLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        SlideLine {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Normal,
    Heading1,
    Heading2,
    Heading3,
    Bullet,
    Quote,
    Code,
    Blank,
}

/// Visual state of a slide relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_width: Option<usize>,
    pub swipe_threshold: f64,
    pub swipe_units_per_column: f64,
    pub hint_fade_ms: u64,
    pub show_hint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_width: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_units_per_column: DEFAULT_UNITS_PER_COLUMN,
            hint_fade_ms: DEFAULT_HINT_FADE_MS,
            show_hint: true,
        }
    }
}

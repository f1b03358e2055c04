//! Navigation control bar, progress gauge and keyboard hint

use crate::input::{ControlAreas, HintState};
use crate::types::{Control, Emphasis, SlideState};
use crate::view::DeckView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

const PREV_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";
const BUTTON_WIDTH: u16 = 8;

pub const HINT_TEXT: &str = "← → Space navigate · Home/End jump · ? help · q quit";

/// Draw `◀ Prev | strip | counter | Next ▶` and return where the buttons landed
pub fn render_control_bar(f: &mut Frame, area: Rect, view: &DeckView) -> ControlAreas {
    let counter_width = view.counter().chars().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(counter_width),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    f.render_widget(button(PREV_LABEL, view.emphasis(Control::Prev)), chunks[0]);

    if let Some(strip) = slide_strip(view.states(), chunks[1].width as usize) {
        f.render_widget(Paragraph::new(strip).alignment(Alignment::Center), chunks[1]);
    }

    let counter = Paragraph::new(view.counter().to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(counter, chunks[2]);

    f.render_widget(button(NEXT_LABEL, view.emphasis(Control::Next)), chunks[3]);

    ControlAreas {
        prev: chunks[0],
        next: chunks[3],
    }
}

fn button(label: &'static str, emphasis: Emphasis) -> Paragraph<'static> {
    Paragraph::new(label)
        .style(control_style(emphasis))
        .alignment(Alignment::Center)
}

pub fn control_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Normal => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Emphasis::Dimmed => Style::default().fg(Color::DarkGray),
    }
}

/// One marker per slide, or `None` if the strip would not fit
pub fn slide_strip(states: &[SlideState], width: usize) -> Option<Line<'static>> {
    if states.is_empty() || states.len() * 2 > width {
        return None;
    }

    let spans: Vec<Span<'static>> = states
        .iter()
        .map(|state| match state {
            SlideState::Before => Span::styled("• ", Style::default().fg(Color::Gray)),
            SlideState::Active => Span::styled(
                "● ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            SlideState::After => Span::styled("· ", Style::default().fg(Color::DarkGray)),
        })
        .collect();

    Some(Line::from(spans))
}

pub fn render_progress(f: &mut Frame, area: Rect, view: &DeckView) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(40, 40, 50)))
        .ratio(view.progress())
        .label("");
    f.render_widget(gauge, area);
}

pub fn render_hint(f: &mut Frame, area: Rect, state: HintState) {
    let style = match state {
        HintState::Visible => Style::default().fg(Color::Gray),
        HintState::Fading => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        HintState::Hidden => return,
    };
    f.render_widget(
        Paragraph::new(HINT_TEXT)
            .style(style)
            .alignment(Alignment::Center),
        area,
    );
}

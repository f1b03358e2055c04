use crate::app::AppState;
use crate::constants::UI_MARGIN_WIDTH;
use crate::types::UiMode;
use crate::ui::widgets::{controls, popups::help, slide::slide_lines};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let hint_height = if app.hint.is_shown() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Titlebar
            Constraint::Min(0),              // Slide
            Constraint::Length(hint_height), // Keyboard hint
            Constraint::Length(1),           // Controls
            Constraint::Length(1),           // Progress
        ])
        .split(f.area());

    render_titlebar(f, app, chunks[0]);
    render_slide(f, app, chunks[1]);
    controls::render_hint(f, chunks[2], app.hint.state());
    app.controls = controls::render_control_bar(f, chunks[3], app.navigator.presenter());
    controls::render_progress(f, chunks[4], app.navigator.presenter());

    if app.ui_mode == UiMode::Help {
        let area = f.area();
        help::render_help_popup(f, area);
    }
}

fn render_titlebar(f: &mut Frame, app: &AppState, area: Rect) {
    let slide_title = app.current_slide().and_then(|s| s.title.as_deref());
    let title_text = match (app.deck.title.as_deref(), slide_title) {
        (Some(deck), Some(slide)) if deck != slide => format!("{} - {}", deck, slide),
        (Some(deck), _) => deck.to_string(),
        (None, Some(slide)) => slide.to_string(),
        (None, None) => "podium".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn render_slide(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(slide) = app.current_slide() else {
        return;
    };

    let available = (area.width as usize).saturating_sub(UI_MARGIN_WIDTH);
    let width = app
        .effective_max_width()
        .map_or(available, |max| max.min(available));

    let lines = slide_lines(slide, width);

    // Center the text column, and vertically center short slides
    let x_offset = (area.width.saturating_sub(width as u16)) / 2;
    let y_offset = vertical_offset(lines.len(), area.height);
    let column = Rect {
        x: area.x + x_offset,
        y: area.y + y_offset,
        width: width as u16,
        height: area.height - y_offset,
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
    f.render_widget(paragraph, column);
}

/// Top padding that centers `line_count` lines in `height` rows
fn vertical_offset(line_count: usize, height: u16) -> u16 {
    let used_height = u16::try_from(line_count).unwrap_or(u16::MAX).min(height);
    (height - used_height) / 2
}

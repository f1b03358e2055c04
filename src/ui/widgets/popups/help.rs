use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    // Calculate popup size (60% width, 70% height)
    let popup_width = (area.width as f32 * 0.6) as u16;
    let popup_height = (area.height as f32 * 0.7) as u16;

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )])
    };

    let help_text = vec![
        section("NAVIGATION"),
        Line::from(""),
        Line::from("  → / Space / Enter  Next slide"),
        Line::from("  ← / Backspace      Previous slide"),
        Line::from("  Home               First slide"),
        Line::from("  End                Last slide"),
        Line::from(""),
        section("MOUSE"),
        Line::from(""),
        Line::from("  Click ◀ Prev       Previous slide"),
        Line::from("  Click Next ▶       Next slide"),
        Line::from("  Drag left / right  Next / previous slide"),
        Line::from(""),
        section("APPLICATION"),
        Line::from(""),
        Line::from("  ? / F1             Toggle this help"),
        Line::from("  q / Esc / Ctrl-c   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

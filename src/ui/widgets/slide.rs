//! Slide body rendering

use crate::types::{LineStyle, Slide};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Wrap a slide's lines to `width` columns and style them
pub fn slide_lines(slide: &Slide, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for line in &slide.lines {
        match line.style {
            LineStyle::Blank => lines.push(Line::raw("")),
            LineStyle::Heading1 => {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                for part in textwrap::wrap(&line.text.to_uppercase(), width) {
                    lines.push(Line::styled(part.into_owned(), style).alignment(Alignment::Center));
                }
            }
            LineStyle::Heading2 => {
                let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                push_wrapped(&mut lines, &line.text, width, "", "", style);
            }
            LineStyle::Heading3 => {
                let style = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC);
                push_wrapped(&mut lines, &line.text, width, "", "", style);
            }
            LineStyle::Bullet => {
                push_wrapped(&mut lines, &line.text, width, "• ", "  ", Style::default());
            }
            LineStyle::Quote => {
                let style = Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC);
                push_wrapped(&mut lines, &line.text, width, "│ ", "│ ", style);
            }
            // Code keeps its layout; the terminal clips long lines
            LineStyle::Code => lines.push(Line::from(Span::styled(
                line.text.clone(),
                Style::default().fg(Color::Green).bg(Color::Rgb(30, 30, 40)),
            ))),
            LineStyle::Normal => {
                push_wrapped(&mut lines, &line.text, width, "", "", Style::default());
            }
        }
    }

    lines
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    first_indent: &str,
    rest_indent: &str,
    style: Style,
) {
    let options = textwrap::Options::new(width)
        .initial_indent(first_indent)
        .subsequent_indent(rest_indent);
    for part in textwrap::wrap(text, options) {
        lines.push(Line::from(Span::styled(part.into_owned(), style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideLine;

    fn slide(lines: Vec<SlideLine>) -> Slide {
        Slide {
            index: 0,
            title: None,
            lines,
        }
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_bullet_wraps_with_hanging_indent() {
        let s = slide(vec![SlideLine::new(
            "ownership borrowing lifetimes",
            LineStyle::Bullet,
        )]);
        let lines = slide_lines(&s, 14);
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(text, vec!["• ownership", "  borrowing", "  lifetimes"]);
    }

    #[test]
    fn test_heading_centered_and_uppercased() {
        let s = slide(vec![SlideLine::new("Welcome", LineStyle::Heading1)]);
        let lines = slide_lines(&s, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "WELCOME");
        assert_eq!(lines[0].alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_code_not_wrapped() {
        let code = "let total = slides.iter().filter(|s| s.visible).count();";
        let s = slide(vec![SlideLine::new(code, LineStyle::Code)]);
        let lines = slide_lines(&s, 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), code);
    }
}

//! Plain-text decks: slides separated by `---` lines

use crate::types::{Deck, LineStyle, Slide, SlideLine};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"^\s*---+\s*$").unwrap();
    static ref HEADING: Regex = Regex::new(r"^(#{1,3})\s+(.*)$").unwrap();
    static ref BULLET: Regex = Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap();
    static ref FENCE: Regex = Regex::new(r"^\s*```").unwrap();
}

pub fn parse_text_deck(source: &str) -> Deck {
    let mut chunks: Vec<Vec<&str>> = vec![Vec::new()];
    let mut in_code = false;

    for line in source.lines() {
        if FENCE.is_match(line) {
            in_code = !in_code;
        }
        if !in_code && SEPARATOR.is_match(line) {
            chunks.push(Vec::new());
        } else if let Some(current) = chunks.last_mut() {
            current.push(line);
        }
    }

    let slides: Vec<Slide> = chunks
        .iter()
        .map(|chunk| parse_lines(chunk))
        .filter(|lines| lines.iter().any(|l| l.style != LineStyle::Blank))
        .enumerate()
        .map(|(index, lines)| Slide {
            index,
            title: first_heading(&lines),
            lines,
        })
        .collect();

    let title = slides.first().and_then(|s| s.title.clone());
    Deck { title, slides }
}

fn parse_lines(chunk: &[&str]) -> Vec<SlideLine> {
    let mut lines = Vec::new();
    let mut in_code = false;

    for raw in chunk {
        if FENCE.is_match(raw) {
            in_code = !in_code;
            continue;
        }
        if in_code {
            lines.push(SlideLine::new(*raw, LineStyle::Code));
            continue;
        }

        let trimmed = raw.trim_end();
        if trimmed.trim().is_empty() {
            lines.push(SlideLine::new("", LineStyle::Blank));
        } else if let Some(caps) = HEADING.captures(trimmed) {
            let style = match caps[1].len() {
                1 => LineStyle::Heading1,
                2 => LineStyle::Heading2,
                _ => LineStyle::Heading3,
            };
            lines.push(SlideLine::new(caps[2].trim(), style));
        } else if let Some(caps) = BULLET.captures(trimmed) {
            lines.push(SlideLine::new(caps[1].trim(), LineStyle::Bullet));
        } else if let Some(quote) = trimmed.trim_start().strip_prefix('>') {
            lines.push(SlideLine::new(quote.trim(), LineStyle::Quote));
        } else {
            lines.push(SlideLine::new(trimmed.trim(), LineStyle::Normal));
        }
    }

    trim_blank_edges(lines)
}

fn trim_blank_edges(mut lines: Vec<SlideLine>) -> Vec<SlideLine> {
    while lines.last().is_some_and(|l| l.style == LineStyle::Blank) {
        lines.pop();
    }
    let leading = lines
        .iter()
        .take_while(|l| l.style == LineStyle::Blank)
        .count();
    lines.drain(..leading);
    lines
}

pub(crate) fn first_heading(lines: &[SlideLine]) -> Option<String> {
    lines
        .iter()
        .find(|l| {
            matches!(
                l.style,
                LineStyle::Heading1 | LineStyle::Heading2 | LineStyle::Heading3
            )
        })
        .map(|l| l.text.clone())
}

//! HTML decks: one slide per element with class `slide`

use crate::deck::text::first_heading;
use crate::error::{DeckError, Result};
use crate::types::{Deck, LineStyle, Slide, SlideLine};
use scraper::{ElementRef, Html, Selector};

const SLIDE_SELECTOR: &str = ".slide";

/// Tags whose text runs on inside the surrounding paragraph
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "code", "em", "i", "kbd", "mark", "s", "small", "span", "strong", "sub",
    "sup", "u",
];

pub fn parse_html_deck(source: &str) -> Result<Deck> {
    let document = Html::parse_document(source);
    let selector = parse_selector(SLIDE_SELECTOR)?;

    let slides: Vec<Slide> = document
        .select(&selector)
        .enumerate()
        .map(|(index, element)| {
            let mut lines = Vec::new();
            process_children(element, &mut lines);
            while lines.last().is_some_and(|l: &SlideLine| l.style == LineStyle::Blank) {
                lines.pop();
            }
            Slide {
                index,
                title: first_heading(&lines),
                lines,
            }
        })
        .collect();

    let title = parse_selector("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(get_text_content)
        .filter(|t| !t.is_empty())
        .or_else(|| slides.first().and_then(|s| s.title.clone()));

    Ok(Deck { title, slides })
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| DeckError::InvalidSelector(format!("{}: {}", selector, e)))
}

fn process_children(element: ElementRef, lines: &mut Vec<SlideLine>) {
    let mut loose_text = String::new();

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if INLINE_TAGS.contains(&child_element.value().name()) {
                loose_text.extend(child_element.text());
                continue;
            }
            flush_text(&mut loose_text, lines);
            process_element(child_element, lines);
        } else if let Some(text) = child.value().as_text() {
            loose_text.push_str(text);
        }
    }

    flush_text(&mut loose_text, lines);
}

fn process_element(element: ElementRef, lines: &mut Vec<SlideLine>) {
    match element.value().name() {
        "h1" => push_block(lines, get_text_content(element), LineStyle::Heading1),
        "h2" => push_block(lines, get_text_content(element), LineStyle::Heading2),
        "h3" | "h4" | "h5" | "h6" => {
            push_block(lines, get_text_content(element), LineStyle::Heading3)
        }
        "p" => push_block(lines, get_text_content(element), LineStyle::Normal),
        "blockquote" => push_block(lines, get_text_content(element), LineStyle::Quote),
        "li" => {
            let text = get_text_content(element);
            if !text.is_empty() {
                lines.push(SlideLine::new(text, LineStyle::Bullet));
            }
        }
        "ul" | "ol" => {
            process_children(element, lines);
            add_blank_line(lines);
        }
        "pre" => {
            let code: String = element.text().collect();
            for line in code.trim_matches('\n').lines() {
                lines.push(SlideLine::new(line, LineStyle::Code));
            }
            add_blank_line(lines);
        }
        "br" => add_blank_line(lines),
        "script" | "style" | "button" | "nav" => {}
        _ => process_children(element, lines),
    }
}

fn push_block(lines: &mut Vec<SlideLine>, text: String, style: LineStyle) {
    if text.is_empty() {
        return;
    }
    lines.push(SlideLine::new(text, style));
    add_blank_line(lines);
}

fn flush_text(buffer: &mut String, lines: &mut Vec<SlideLine>) {
    let text = collapse_whitespace(buffer);
    buffer.clear();
    if !text.is_empty() {
        push_block(lines, text, LineStyle::Normal);
    }
}

fn add_blank_line(lines: &mut Vec<SlideLine>) {
    if lines.last().is_some_and(|l| l.style != LineStyle::Blank) {
        lines.push(SlideLine::new("", LineStyle::Blank));
    }
}

fn get_text_content(element: ElementRef) -> String {
    let text: String = element.text().collect();
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub mod html;
pub mod text;

use crate::error::{DeckError, Result};
use crate::types::Deck;
use std::fs;
use std::path::Path;

pub use html::parse_html_deck;
pub use text::parse_text_deck;

/// Read a deck from disk, choosing the parser by file extension
pub fn load_deck(path: &Path) -> Result<Deck> {
    if !path.exists() {
        return Err(DeckError::FileNotFound(path.display().to_string()));
    }

    let source = fs::read_to_string(path)?;
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));

    let deck = if is_html {
        tracing::debug!("Parsing HTML deck: {}", path.display());
        parse_html_deck(&source)?
    } else {
        tracing::debug!("Parsing text deck: {}", path.display());
        parse_text_deck(&source)
    };

    tracing::info!("Loaded {} slides from {}", deck.len(), path.display());
    Ok(deck)
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Deck file not found: {0}")]
    FileNotFound(String),

    #[error("Deck has no slides")]
    EmptyDeck,

    #[error("Invalid slide selector: {0}")]
    InvalidSelector(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal too small (minimum 40x12)")]
    TerminalTooSmall,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;

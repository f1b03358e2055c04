//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::constants::{MAX_MAX_WIDTH, MIN_MAX_WIDTH};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(version = "0.0.1")]
#[command(about = "Present your slide decks from the comfort of your terminal", long_about = None)]
pub struct Cli {
    /// Path to the deck (.html with `.slide` elements, or text split on `---`)
    pub file: String,

    /// Maximum slide text width in columns (40-200)
    #[arg(short = 'm', long, value_name = "COLS")]
    pub max_width: Option<usize>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Start with the keyboard hint already hidden
    #[arg(long)]
    pub no_hint: bool,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if max_width is out of bounds (40-200)
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.max_width {
            if width < MIN_MAX_WIDTH {
                return Err(format!("Max width too small (minimum {})", MIN_MAX_WIDTH));
            }
            if width > MAX_MAX_WIDTH {
                return Err(format!("Max width too large (maximum {})", MAX_MAX_WIDTH));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(max_width: Option<usize>) -> Cli {
        Cli {
            file: "talk.md".to_string(),
            max_width,
            log_file: None,
            no_hint: false,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(cli(None).validate().is_ok());
        assert!(cli(Some(40)).validate().is_ok());
        assert!(cli(Some(200)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(cli(Some(39)).validate().is_err());
        assert!(cli(Some(201)).validate().is_err());
    }

    #[test]
    fn test_parse_flags() {
        let parsed = Cli::try_parse_from(["podium", "deck.html", "-m", "80", "--no-hint"]).unwrap();
        assert_eq!(parsed.file, "deck.html");
        assert_eq!(parsed.max_width, Some(80));
        assert!(parsed.no_hint);
        assert!(parsed.log_file.is_none());
    }
}

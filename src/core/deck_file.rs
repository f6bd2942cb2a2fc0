//! # Deck Files
//!
//! Reads a presentation from a TOML file:
//!
//! ```toml
//! [[slides]]
//! title = "Using Memories and Notepad"
//! image = { src = "assets/slide-3a.png", alt = "" }
//! body = ["Memories:", "Store project conventions."]
//!
//! [[slides]]
//! title = "Links"
//! link = { label = "Docs", href = "https://example.com" }
//! columns = 2
//! ```
//!
//! Image paths are kept as written; they are shown, never opened. `columns`
//! lays the intro out as a bulleted grid of that many columns (`0` is off).

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::slide::{Deck, DeckError, Slide};

#[derive(Debug, Default, Deserialize, Serialize)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

/// Parse and validate a deck from TOML text.
pub fn parse_deck(contents: &str) -> Result<Deck, DeckError> {
    let file: DeckFile = toml::from_str(contents).map_err(DeckError::Parse)?;
    Deck::new(file.slides)
}

/// Load a deck from disk.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
    let deck = parse_deck(&contents)?;
    info!("Loaded {} slides from {}", deck.len(), path.display());
    Ok(deck)
}

/// Serialize a deck back to TOML (used to export the built-in deck).
pub fn to_toml(deck: &Deck) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&DeckFile {
        slides: deck.slides().to_vec(),
    })
}

//! # Slides
//!
//! Authored presentation data. A `Deck` is an ordered, non-empty list of
//! `Slide` records and never changes once built.
//!
//! ```text
//! Deck
//! └── slides: Vec<Slide>
//!     ├── title: String               // never blank
//!     ├── body: Option<Vec<String>>   // see core::body
//!     ├── image: Option<Image>
//!     ├── link: Option<Link>
//!     └── columns: Option<u16>        // intro grid width
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::core::body::{self, StructuredBody};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            image: None,
            link: None,
            columns: None,
        }
    }

    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(Image {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(Link {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Body split into intro and sections. Recomputed on every call.
    pub fn structured_body(&self) -> StructuredBody {
        self.body
            .as_deref()
            .map(body::structure)
            .unwrap_or_default()
    }

    /// Number of intro grid columns, or `None` when the intro renders as paragraphs.
    ///
    /// Any positive `columns` turns the intro into a bulleted grid; `0` is off.
    pub fn intro_columns(&self) -> Option<u16> {
        self.columns.filter(|&c| c >= 1)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Empty,
    UntitledSlide(usize),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
            DeckError::Empty => write!(f, "deck has no slides"),
            DeckError::UntitledSlide(i) => write!(f, "slide {} has an empty title", i + 1),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(e) => Some(e),
            DeckError::Parse(e) => Some(e),
            DeckError::Empty | DeckError::UntitledSlide(_) => None,
        }
    }
}

// ============================================================================
// Deck
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck, rejecting empty decks and blank titles.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        if let Some(i) = slides.iter().position(|s| s.title.trim().is_empty()) {
            return Err(DeckError::UntitledSlide(i));
        }
        Ok(Self { slides })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// The presentation shown when no deck file is configured.
    pub fn builtin() -> Self {
        Self {
            slides: vec![
                Slide::new("Important Cursor Features You Should Use").with_body([
                    "Objective: Surface lesser-known Cursor features that improve productivity.",
                    "Coverage:",
                    "Context methods (@, #, drag-and-drop, /commands).",
                    "Persistent knowledge (Memories, Notepad).",
                    "Custom agent modes for repeatable workflows.",
                ]),
                Slide::new("Ways to Add/Remove Context to Composer")
                    .with_link(
                        "@ Symbols Docs",
                        "https://docs.cursor.com/en/context/@-symbols/overview",
                    )
                    .with_image("assets/slide-2a.png", "@ menu in Cursor")
                    .with_columns(2),
                Slide::new("Ways to Add Context to Composer")
                    .with_image("assets/slide-2b.png", "# menu in Cursor"),
                Slide::new("Ways to Add Context to Composer").with_image("assets/slide-2c.png", ""),
                Slide::new("Using Memories and Notepad")
                    .with_image("assets/slide-3a.png", "")
                    .with_body([
                        "Memories:",
                        "Store project conventions, preferred libraries, style guides.",
                        "Find in Settings > Rules & Memories. Applied across chats.",
                    ]),
                Slide::new("Using Memories and Notepad")
                    .with_image("assets/slide-3b.png", "")
                    .with_body([
                        "Notepad:",
                        "Keep prompts, snippets, and project instructions for quick reuse.",
                        "Use as a personal library for repetitive tasks.",
                    ]),
                Slide::new("Create Custom Agent Modes")
                    .with_image("assets/slide-4a.png", "")
                    .with_body([
                        "Define behavior, rules, and scope for specialized tasks.",
                        "Example: Plan Mode — plan first, then code.",
                        "Goal: Generate a high-level plan before implementation.",
                        "Setup: Settings > Custom Modes. Prompt: \"First write a plan… then implement…\"",
                    ]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(vec![]), Err(DeckError::Empty)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Deck::new(vec![Slide::new("ok"), Slide::new("   ")]).unwrap_err();
        assert!(matches!(err, DeckError::UntitledSlide(1)));
        assert_eq!(err.to_string(), "slide 2 has an empty title");
    }

    #[test]
    fn test_builtin_deck_shape() {
        let deck = Deck::builtin();
        assert_eq!(deck.len().get(), 7);
        assert!(Deck::new(deck.slides().to_vec()).is_ok());
        assert_eq!(deck.get(1).and_then(|s| s.intro_columns()), Some(2));
        assert!(deck.get(7).is_none());
    }

    #[test]
    fn test_structured_body_without_body_is_empty() {
        let slide = Slide::new("Title only");
        assert!(slide.structured_body().is_empty());
    }

    #[test]
    fn test_structured_body_uses_body_lines() {
        let slide = Slide::new("t").with_body(["Intro", "Head:", "item"]);
        let body = slide.structured_body();
        assert_eq!(body.intro, vec!["Intro"]);
        assert_eq!(body.sections[0].heading, "Head");
    }

    #[test]
    fn test_any_positive_columns_is_a_grid() {
        assert_eq!(Slide::new("t").with_columns(1).intro_columns(), Some(1));
        assert_eq!(Slide::new("t").with_columns(0).intro_columns(), None);
        assert_eq!(Slide::new("t").intro_columns(), None);
        assert_eq!(Slide::new("t").with_columns(3).intro_columns(), Some(3));
    }
}

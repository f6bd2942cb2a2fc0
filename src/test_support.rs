//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::navigation::Viewport;
use crate::core::slide::{Deck, Slide};
use crate::core::state::App;

/// A viewport that records every `scroll_to` call.
#[derive(Default)]
pub struct RecordingViewport {
    pub snap: usize,
    pub scrolled: Vec<usize>,
}

impl RecordingViewport {
    pub fn at(snap: usize) -> Self {
        Self {
            snap,
            scrolled: Vec::new(),
        }
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&mut self, index: usize) {
        self.snap = index;
        self.scrolled.push(index);
    }

    fn selected_snap(&self) -> usize {
        self.snap
    }
}

/// Three small slides covering title-only, sectioned body and image layouts.
pub fn sample_deck() -> Deck {
    Deck::new(vec![
        Slide::new("Intro").with_body(["Objective: learn.", "Coverage:", "Item A", "Item B"]),
        Slide::new("Picture").with_image("assets/pic.png", "A picture"),
        Slide::new("Grid")
            .with_body(["left", "right", "Notes:", "done"])
            .with_columns(2)
            .with_link("Docs", "https://example.com"),
    ])
    .unwrap()
}

/// Creates a test App over `sample_deck()`.
pub fn test_app() -> App {
    App::new(sample_deck())
}

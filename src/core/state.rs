//! # Application State
//!
//! Core presentation state. Domain logic only; the carousel, animation and
//! layout state live in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck             // fixed slide list
//! └── navigator: Navigator   // current index in [0, total-1]
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::navigation::Navigator;
use crate::core::slide::{Deck, Slide};

pub struct App {
    pub deck: Deck,
    pub navigator: Navigator,
}

impl App {
    pub fn new(deck: Deck) -> Self {
        let navigator = Navigator::new(deck.len());
        Self { deck, navigator }
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides()[self.navigator.index()]
    }
}

//! Deck library exports for the binary and integration tests

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::body::{Section, StructuredBody, structure};
pub use crate::core::navigation::{Move, Navigator, Viewport};
pub use crate::core::slide::{Deck, DeckError, Slide};

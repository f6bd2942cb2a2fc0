//! # Core Application Logic
//!
//! This module contains the presentation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (slide data)    │
//!                    │  • Navigator (index)    │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │  Viewport trait
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`slide`]: `Slide` and `Deck`, the authored data
//! - [`body`]: splits slide bodies into intro and sections
//! - [`navigation`]: `Navigator` and the `Viewport` trait
//! - [`action`]: the `Action` enum and `update()`
//! - [`state`]: the `App` struct
//! - [`config`]: settings resolution
//! - [`deck_file`]: TOML deck loading

pub mod action;
pub mod body;
pub mod config;
pub mod deck_file;
pub mod navigation;
pub mod slide;
pub mod state;

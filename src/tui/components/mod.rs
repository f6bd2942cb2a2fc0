//! # TUI Components
//!
//! All UI components for the terminal presentation.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Header`: position readout and key hint
//! - `Controls`: Prev button, dot indicators, Next button
//! - `SlideView`: one slide (a `Widget`, drawn inside the carousel)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Carousel`: the horizontally scrolling viewport. Its persistent
//!   `CarouselState` implements the core `Viewport` trait and emits
//!   `CarouselEvent::Selected` for user gestures.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state, so each can be rendered against a `TestBackend` in isolation:
//!
//! ```rust,ignore
//! Controls::new(app.navigator.index(), app.navigator.total()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── header.rs       (position readout)
//! ├── controls.rs     (prev / dots / next + hit testing geometry)
//! ├── carousel.rs     (viewport state, gestures, animation)
//! └── slide_view.rs   (single slide renderer)
//! ```

pub mod carousel;
pub mod controls;
mod header;
pub mod slide_view;

pub use carousel::{Carousel, CarouselEvent, CarouselState};
pub use controls::{ControlHit, Controls, controls_layout};
pub use header::Header;

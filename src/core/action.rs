//! # Actions
//!
//! Everything that can happen in a presentation becomes an `Action`.
//! User presses →? That's `Action::Navigate(Move::By(1))`.
//! User swipes the carousel? That's `Action::ViewportSelected(snap)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what to do next. The only outward call it makes is through the
//! `Viewport` trait, so tests drive it with a recording viewport.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::info;

use crate::core::navigation::{Move, Viewport};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keyboard or Prev/Next button.
    Navigate(Move),
    /// Dot indicator click.
    JumpTo(usize),
    /// The viewport settled on a new snap after a user gesture.
    ViewportSelected(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current slide changed to this index.
    Moved(usize),
    Quit,
}

pub fn update(app: &mut App, action: Action, viewport: Option<&mut dyn Viewport>) -> Effect {
    let before = app.navigator.index();
    let after = match action {
        Action::Navigate(request) => app.navigator.apply(request, viewport),
        Action::JumpTo(index) => app.navigator.jump_to(index, viewport),
        Action::ViewportSelected(snap) => app.navigator.on_viewport_select(snap),
        Action::Quit => {
            info!("Quit requested on {}", app.navigator.position_label());
            return Effect::Quit;
        }
    };

    if after == before {
        Effect::None
    } else {
        Effect::Moved(after)
    }
}

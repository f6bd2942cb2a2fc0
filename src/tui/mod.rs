//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (carousel easing toward a slide): ticks and draws every
//!   ~16ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Subscriptions
//!
//! Mouse capture is switched on by `TerminalModeGuard` and off again when it
//! drops, so input capture never outlives the view. The carousel reports user
//! gestures from its event handler, which only runs while the loop does.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Move;
use crate::core::slide::Deck;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CarouselEvent, CarouselState, ControlHit};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub carousel: CarouselState,
}

impl TuiState {
    pub fn new(slide_count: usize, animate: bool) -> Self {
        Self {
            carousel: CarouselState::new(slide_count, animate),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Translate a control click into an action. Disabled buttons do nothing.
fn control_action(hit: ControlHit, app: &App) -> Option<Action> {
    match hit {
        ControlHit::Prev if !app.navigator.is_first() => Some(Action::Navigate(Move::By(-1))),
        ControlHit::Next if !app.navigator.is_last() => Some(Action::Navigate(Move::By(1))),
        ControlHit::Dot(i) => Some(Action::JumpTo(i)),
        ControlHit::Prev | ControlHit::Next => None,
    }
}

/// Apply an action with the carousel bound as the viewport.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action, Some(&mut tui.carousel));
    if let Effect::Moved(index) = effect {
        info!("Showing {} after {:?}", app.navigator.position_label(), action);
        debug!("Current slide {}: {:?}", index, app.current_slide().title);
    }
    effect
}

pub fn run(config: &ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let mut app = App::new(deck);
    let mut tui = TuiState::new(app.navigator.total(), config.animate);

    // The viewport exists from here on: adopt its snap
    app.navigator.bind(&tui.carousel);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Mouse capture unavailable, keyboard only: {}", e);
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.carousel.tick() {
            needs_redraw = true;
        }
        let animating = tui.carousel.is_animating();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => None,
                TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::Navigate(request) => Some(Action::Navigate(request)),
                TuiEvent::MouseDown(col, row) => {
                    let frame_area = terminal.get_frame().area();
                    let navigator = &app.navigator;
                    match ui::hit_test_controls(
                        col,
                        row,
                        frame_area,
                        navigator.total(),
                        navigator.index(),
                    ) {
                        Some(hit) => control_action(hit, &app),
                        None => {
                            tui.carousel.handle_event(&event);
                            None
                        }
                    }
                }
                _ => match tui.carousel.handle_event(&event) {
                    Some(CarouselEvent::Selected(snap)) => Some(Action::ViewportSelected(snap)),
                    None => None,
                },
            };

            if let Some(action) = action
                && dispatch(&mut app, &mut tui, action) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    Ok(())
}

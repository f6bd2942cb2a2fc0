use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, warn};

use crate::core::navigation::Move;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Navigate(Move),

    // TUI-local events (handled directly in TUI)
    Resize,
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    WheelNext,
    WheelPrev,
}

/// Map a key press to a navigation request.
///
/// | Key                      | Request        |
/// |--------------------------|----------------|
/// | Right, PageDown, `d`     | `Move::By(1)`  |
/// | Left, PageUp, `a`        | `Move::By(-1)` |
/// | Home                     | `Move::First`  |
/// | End                      | `Move::Last`   |
///
/// Letters match either case. Repeats and releases are ignored.
pub fn navigation_request(key: &KeyEvent) -> Option<Move> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::PageDown => Some(Move::By(1)),
        KeyCode::Left | KeyCode::PageUp => Some(Move::By(-1)),
        KeyCode::Home => Some(Move::First),
        KeyCode::End => Some(Move::Last),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'd' => Some(Move::By(1)),
            'a' => Some(Move::By(-1)),
            _ => None,
        },
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            (key.modifiers, key.code),
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
                | (_, KeyCode::Esc)
                | (KeyModifiers::NONE, KeyCode::Char('q'))
        )
}

fn translate_mouse(mouse: MouseEvent) -> Option<TuiEvent> {
    let shifted = mouse.modifiers.contains(KeyModifiers::SHIFT);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(mouse.column, mouse.row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(mouse.column, mouse.row)),
        MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(mouse.column, mouse.row)),
        MouseEventKind::ScrollRight => Some(TuiEvent::WheelNext),
        MouseEventKind::ScrollLeft => Some(TuiEvent::WheelPrev),
        // Most terminals report Shift+wheel as a vertical scroll with the modifier set
        MouseEventKind::ScrollDown if shifted => Some(TuiEvent::WheelNext),
        MouseEventKind::ScrollUp if shifted => Some(TuiEvent::WheelPrev),
        _ => None,
    }
}

/// Translate a raw crossterm event into a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            if is_quit(&key_event) {
                return Some(TuiEvent::Quit);
            }
            navigation_request(&key_event).map(TuiEvent::Navigate)
        }
        Event::Mouse(mouse_event) => translate_mouse(mouse_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(event) => translate(event),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

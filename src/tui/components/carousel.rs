//! # Carousel Component
//!
//! Horizontally scrolling viewport that shows one slide at a time.
//!
//! ## Responsibilities
//!
//! - Lay slides side by side and show the one under the current offset
//! - Ease the offset toward the requested snap between frames
//! - Turn wheel and drag gestures into snap changes
//!
//! ## Architecture
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarouselState` lives in `TuiState` and implements `Viewport`, so the
//!   core `Navigator` can tell it where to go.
//! - `Carousel` is created each frame with borrowed state and the slides.
//!
//! Only the slide under the offset and its right-hand neighbour are drawn,
//! into a two-slide-wide `ScrollView`; the rest of the deck never touches a
//! buffer.
//!
//! ```text
//!        offset
//!          │◄──── slide_width ────►│
//!   ┌──────┼──────────┬────────────┼─────┐
//!   │  i   │          │    i + 1   │     │
//!   └──────┼──────────┴────────────┼─────┘
//!          └──── visible window ───┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::navigation::Viewport;
use crate::core::slide::Slide;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::slide_view::SlideView;
use crate::tui::event::TuiEvent;

/// Fraction of the remaining distance covered per animation tick.
const EASE_FACTOR: f32 = 0.15;
/// Distance (in columns) under which the offset snaps onto its target.
const SETTLE_EPSILON: f32 = 0.5;
/// A drag farther than this fraction of a slide always advances one slide.
const SWIPE_THRESHOLD: f32 = 0.2;

/// Events emitted by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A user gesture settled the carousel on a new slide.
    Selected(usize),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_col: u16,
    start_offset: f32,
}

/// Scroll position and gesture state for the carousel.
/// Must be persisted in the parent TuiState.
pub struct CarouselState {
    count: usize,
    /// Snap the carousel is showing or settling on.
    target: usize,
    /// Horizontal offset in columns across the whole strip.
    offset: f32,
    /// Width of one slide at the last render.
    slide_width: u16,
    /// Last rendered area, for gesture hit testing.
    area: Rect,
    animate: bool,
    drag: Option<Drag>,
    scroll_state: ScrollViewState,
}

impl CarouselState {
    pub fn new(count: usize, animate: bool) -> Self {
        Self {
            count: count.max(1),
            target: 0,
            offset: 0.0,
            slide_width: 0,
            area: Rect::default(),
            animate,
            drag: None,
            scroll_state: ScrollViewState::default(),
        }
    }

    fn last(&self) -> usize {
        self.count - 1
    }

    fn snap_offset(&self, snap: usize) -> f32 {
        snap as f32 * f32::from(self.slide_width)
    }

    fn max_offset(&self) -> f32 {
        self.snap_offset(self.last())
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while the offset has not yet reached the target snap.
    pub fn is_animating(&self) -> bool {
        self.drag.is_none() && self.offset != self.snap_offset(self.target)
    }

    /// Advance the easing animation by one frame. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let goal = self.snap_offset(self.target);
        let diff = goal - self.offset;
        if !self.animate || diff.abs() < SETTLE_EPSILON {
            self.offset = goal;
        } else {
            self.offset += diff * EASE_FACTOR;
        }
        true
    }

    /// Record the rendered geometry. A width change re-anchors the offset on the target.
    fn set_area(&mut self, area: Rect) {
        if area.width != self.slide_width {
            self.slide_width = area.width;
            self.offset = self.snap_offset(self.target);
            self.drag = None;
        }
        self.area = area;
    }

    fn select(&mut self, snap: usize) -> Option<CarouselEvent> {
        let snap = snap.min(self.last());
        if !self.animate {
            self.offset = self.snap_offset(snap);
        }
        if snap == self.target {
            return None;
        }
        self.target = snap;
        Some(CarouselEvent::Selected(snap))
    }

    fn nearest_snap(&self) -> usize {
        if self.slide_width == 0 {
            return self.target;
        }
        let snap = (self.offset / f32::from(self.slide_width)).round().max(0.0) as usize;
        snap.min(self.last())
    }

    fn end_drag(&mut self, drag: Drag) -> Option<CarouselEvent> {
        let moved = self.offset - drag.start_offset;
        let threshold = f32::from(self.slide_width) * SWIPE_THRESHOLD;
        let mut snap = self.nearest_snap();
        if snap == self.target {
            if moved > threshold {
                snap = (self.target + 1).min(self.last());
            } else if moved < -threshold {
                snap = self.target.saturating_sub(1);
            }
        }
        self.select(snap)
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(Position { x: col, y: row })
    }
}

impl Viewport for CarouselState {
    fn scroll_to(&mut self, index: usize) {
        self.drag = None;
        self.target = index.min(self.last());
        if !self.animate {
            self.offset = self.snap_offset(self.target);
        }
    }

    fn selected_snap(&self) -> usize {
        self.target
    }
}

impl EventHandler for CarouselState {
    type Event = CarouselEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::WheelNext => self.select(self.target + 1),
            TuiEvent::WheelPrev => self.select(self.target.saturating_sub(1)),
            TuiEvent::MouseDown(col, row) if self.contains(col, row) => {
                self.drag = Some(Drag {
                    start_col: col,
                    start_offset: self.offset,
                });
                None
            }
            TuiEvent::MouseDrag(col, _) => {
                if let Some(drag) = self.drag {
                    let dx = f32::from(col) - f32::from(drag.start_col);
                    self.offset = (drag.start_offset - dx).clamp(0.0, self.max_offset());
                }
                None
            }
            TuiEvent::MouseUp(_, _) => self.drag.take().and_then(|drag| self.end_drag(drag)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the carousel.
pub struct Carousel<'a> {
    state: &'a mut CarouselState,
    slides: &'a [Slide],
}

impl<'a> Carousel<'a> {
    pub fn new(state: &'a mut CarouselState, slides: &'a [Slide]) -> Self {
        Self { state, slides }
    }
}

impl Component for Carousel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_area(area);
        let width = area.width;
        if width == 0 || area.height == 0 || self.slides.is_empty() {
            return;
        }

        let offset = self.state.offset.max(0.0);
        let first = ((offset / f32::from(width)) as usize).min(self.slides.len() - 1);
        let local_x = (offset - self.state.snap_offset(first)).round() as u16;
        let visible = &self.slides[first..(first + 2).min(self.slides.len())];

        let strip_width = width.saturating_mul(visible.len() as u16);
        let mut scroll_view = ScrollView::new(Size::new(strip_width, area.height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, slide) in visible.iter().enumerate() {
            let x = width.saturating_mul(i as u16);
            scroll_view.render_widget(SlideView::new(slide), Rect::new(x, 0, width, area.height));
        }

        let max_local = strip_width.saturating_sub(width);
        self.state.scroll_state.set_offset(Position {
            x: local_x.min(max_local),
            y: 0,
        });
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

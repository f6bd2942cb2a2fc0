//! # Navigation
//!
//! Owns the current slide index and keeps an optional viewport in step with it.
//!
//! ```text
//!   key / button / dot            viewport gesture
//!          │                             │
//!          ▼                             ▼
//!   apply(Move) / jump_to(i)     on_viewport_select(snap)
//!          │                             │
//!          └──────────► index ◄──────────┘
//!                         │
//!                         ▼
//!             viewport.scroll_to(index)   (programmatic changes only)
//! ```
//!
//! Programmatic requests are authoritative for `apply`/`jump_to`; the
//! viewport is authoritative for gestures the user makes on it directly.
//! Both paths converge on the same value, so there is nothing to reconcile.

use log::debug;
use std::num::NonZeroUsize;

/// A scrollable container that snaps to one slide at a time.
pub trait Viewport {
    /// Scroll so that slide `index` is the visible one.
    fn scroll_to(&mut self, index: usize);

    /// The slide the viewport currently shows (or is settling on).
    fn selected_snap(&self) -> usize;
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Relative step; clamps at both ends.
    By(isize),
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    total: NonZeroUsize,
}

impl Navigator {
    pub fn new(total: NonZeroUsize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total.get()
    }

    fn last(&self) -> usize {
        self.total.get() - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last()
    }

    /// Position readout, e.g. `Slide 3 / 7`.
    pub fn position_label(&self) -> String {
        format!("Slide {} / {}", self.index + 1, self.total)
    }

    /// Where `request` would land from the current index.
    pub fn target(&self, request: Move) -> usize {
        match request {
            Move::First => 0,
            Move::Last => self.last(),
            Move::By(delta) => self.index.saturating_add_signed(delta).min(self.last()),
        }
    }

    /// Apply a navigation request, telling the viewport (if bound) to follow.
    pub fn apply(&mut self, request: Move, viewport: Option<&mut dyn Viewport>) -> usize {
        let next = self.target(request);
        debug!("Navigate {:?}: {} -> {}", request, self.index, next);
        self.set(next, viewport)
    }

    /// Jump straight to slide `index` (dot indicator activation).
    ///
    /// `index` must be below `total`.
    pub fn jump_to(&mut self, index: usize, viewport: Option<&mut dyn Viewport>) -> usize {
        debug_assert!(
            index < self.total(),
            "jump_to({index}) out of range for {} slides",
            self.total
        );
        let next = index.min(self.last());
        debug!("Jump: {} -> {}", self.index, next);
        self.set(next, viewport)
    }

    /// Adopt the viewport's current snap when it becomes available.
    pub fn bind(&mut self, viewport: &dyn Viewport) -> usize {
        self.on_viewport_select(viewport.selected_snap())
    }

    /// The viewport reported a new snap from a user gesture.
    pub fn on_viewport_select(&mut self, snap: usize) -> usize {
        debug_assert!(
            snap < self.total(),
            "viewport snap {snap} out of range for {} slides",
            self.total
        );
        debug!("Viewport selected {} (was {})", snap, self.index);
        self.index = snap.min(self.last());
        self.index
    }

    fn set(&mut self, next: usize, viewport: Option<&mut dyn Viewport>) -> usize {
        if let Some(viewport) = viewport {
            viewport.scroll_to(next);
        }
        self.index = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingViewport;

    fn nav(total: usize) -> Navigator {
        Navigator::new(NonZeroUsize::new(total).unwrap())
    }

    #[test]
    fn test_starts_at_zero() {
        let n = nav(7);
        assert_eq!(n.index(), 0);
        assert_eq!(n.total(), 7);
        assert!(n.is_first());
        assert!(!n.is_last());
        assert_eq!(n.position_label(), "Slide 1 / 7");
    }

    #[test]
    fn test_scenario_total_seven() {
        let mut n = nav(7);
        n.apply(Move::By(-1), None);
        assert_eq!(n.index(), 0);
        for _ in 0..3 {
            n.apply(Move::By(1), None);
        }
        assert_eq!(n.index(), 3);
        n.apply(Move::Last, None);
        assert_eq!(n.index(), 6);
        n.apply(Move::By(1), None);
        assert_eq!(n.index(), 6);
        assert!(n.is_last());
    }

    #[test]
    fn test_clamps_instead_of_wrapping() {
        let mut n = nav(3);
        assert_eq!(n.apply(Move::By(-5), None), 0);
        assert_eq!(n.apply(Move::By(100), None), 2);
        assert_eq!(n.apply(Move::By(isize::MAX), None), 2);
        assert_eq!(n.apply(Move::By(isize::MIN), None), 0);
    }

    #[test]
    fn test_sentinels_ignore_start_index() {
        for start in 0..5 {
            let mut n = nav(5);
            n.jump_to(start, None);
            assert_eq!(n.apply(Move::First, None), 0);
            n.jump_to(start, None);
            assert_eq!(n.apply(Move::Last, None), 4);
        }
    }

    #[test]
    fn test_single_slide_deck() {
        let mut n = nav(1);
        assert!(n.is_first() && n.is_last());
        assert_eq!(n.apply(Move::By(1), None), 0);
        assert_eq!(n.apply(Move::Last, None), 0);
    }

    #[test]
    fn test_bound_viewport_follows_every_programmatic_change() {
        let mut n = nav(4);
        let mut vp = RecordingViewport::default();
        n.apply(Move::By(1), Some(&mut vp));
        n.apply(Move::By(1), Some(&mut vp));
        n.apply(Move::Last, Some(&mut vp));
        n.apply(Move::By(1), Some(&mut vp));
        n.jump_to(0, Some(&mut vp));
        assert_eq!(vp.scrolled, vec![1, 2, 3, 3, 0]);
        assert_eq!(vp.selected_snap(), n.index());
    }

    #[test]
    fn test_viewport_select_overwrites_index() {
        let mut n = nav(7);
        n.apply(Move::Last, None);
        assert_eq!(n.on_viewport_select(2), 2);
        assert_eq!(n.index(), 2);
        assert_eq!(n.position_label(), "Slide 3 / 7");
    }

    #[test]
    fn test_bind_adopts_viewport_snap() {
        let mut n = nav(7);
        let vp = RecordingViewport::at(4);
        assert_eq!(n.bind(&vp), 4);
        assert!(vp.scrolled.is_empty());
    }

    #[test]
    fn test_index_stays_in_range_for_move_sequences() {
        let total = 6;
        let mut n = nav(total);
        // Deterministic pseudo-random walk covering large jumps and sentinels
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..2000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let request = match seed % 10 {
                0 => Move::First,
                1 => Move::Last,
                r => Move::By((seed >> 8) as isize % 9 - 4 + r as isize - 5),
            };
            let before = n.index();
            let after = n.apply(request, None);
            assert!(after < total);
            if let Move::By(d) = request {
                let expected = (before as isize + d).clamp(0, total as isize - 1) as usize;
                assert_eq!(after, expected);
            }
        }
    }
}

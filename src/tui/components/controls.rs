//! # Controls Component
//!
//! The row of Prev button, dot indicators and Next button.
//!
//! ```text
//! ◀ Prev            ▬▬ ▬▬ ▬▬ ▬▬ ▬▬ ▬▬ ▬▬            Next ▶
//! ```
//!
//! Geometry comes from [`controls_layout`], which both the renderer and the
//! mouse hit test use, so a click always lands on what was drawn.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const PREV_LABEL: &str = "◀ Prev";
pub const NEXT_LABEL: &str = "Next ▶";

/// What a click on the controls row hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlHit {
    Prev,
    Next,
    Dot(usize),
}

/// Screen rectangles of every control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsLayout {
    pub prev: Rect,
    pub next: Rect,
    /// One rect per visible dot; dots that do not fit are omitted.
    pub dots: Vec<Rect>,
    /// Slide index of `dots[0]`. Non-zero when the dot window is scrolled.
    pub first_dot: usize,
}

impl ControlsLayout {
    pub fn hit(&self, col: u16, row: u16) -> Option<ControlHit> {
        let pos = Position { x: col, y: row };
        if self.prev.contains(pos) {
            return Some(ControlHit::Prev);
        }
        if self.next.contains(pos) {
            return Some(ControlHit::Next);
        }
        self.dots
            .iter()
            .position(|dot| dot.contains(pos))
            .map(|i| ControlHit::Dot(self.first_dot + i))
    }
}

/// Lay out the controls row for `total` slides within `area` (first row only).
///
/// When not every dot fits, the visible window of dots is scrolled so the
/// dot for `index` is always shown.
pub fn controls_layout(area: Rect, total: usize, index: usize) -> ControlsLayout {
    let prev_w = (PREV_LABEL.width() as u16).min(area.width);
    let next_w = (NEXT_LABEL.width() as u16).min(area.width.saturating_sub(prev_w));
    let height = area.height.min(1);

    let prev = Rect::new(area.x, area.y, prev_w, height);
    let next = Rect::new(area.right() - next_w, area.y, next_w, height);

    // Middle region keeps one column of air next to each button
    let middle_x = prev.right().saturating_add(1);
    let middle_w = usize::from(next.x.saturating_sub(1).saturating_sub(middle_x));

    let (dot_w, gap) = if total * 3 <= middle_w + 1 {
        (2, 1)
    } else if total * 2 <= middle_w + 1 {
        (1, 1)
    } else {
        (1, 0)
    };
    let stride = dot_w + gap;
    let capacity = (middle_w + gap) / stride;
    let visible = total.min(capacity);
    let first_dot = if visible < total {
        index.saturating_sub(visible / 2).min(total - visible)
    } else {
        0
    };

    let needed = (visible * stride).saturating_sub(gap);
    let start = usize::from(middle_x) + middle_w.saturating_sub(needed) / 2;

    let dots = (0..visible)
        .map(|i| Rect::new((start + i * stride) as u16, area.y, dot_w as u16, height))
        .collect();

    ControlsLayout {
        prev,
        next,
        dots,
        first_dot,
    }
}

/// Prev / dots / Next row.
///
/// # Props
///
/// - `index`: the current slide
/// - `total`: slide count
pub struct Controls {
    pub index: usize,
    pub total: usize,
}

impl Controls {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    fn button_style(disabled: bool) -> Style {
        if disabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = controls_layout(area, self.total, self.index);
        let last = self.total.saturating_sub(1);

        frame.render_widget(
            Span::styled(PREV_LABEL, Self::button_style(self.index == 0)),
            layout.prev,
        );
        frame.render_widget(
            Span::styled(NEXT_LABEL, Self::button_style(self.index >= last)),
            layout.next,
        );

        for (i, dot) in layout.dots.iter().enumerate() {
            let style = if layout.first_dot + i == self.index {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(Span::styled("▬".repeat(usize::from(dot.width)), style), *dot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_layout_places_buttons_at_edges() {
        let layout = controls_layout(Rect::new(2, 3, 60, 1), 7, 0);
        assert_eq!(layout.prev, Rect::new(2, 3, 6, 1));
        assert_eq!(layout.next, Rect::new(56, 3, 6, 1));
        assert_eq!(layout.dots.len(), 7);
        assert!(layout.dots.iter().all(|d| d.width == 2));
    }

    #[test]
    fn test_dots_are_centred_and_disjoint() {
        let layout = controls_layout(Rect::new(0, 0, 60, 1), 7, 0);
        let first = layout.dots[0];
        let last = layout.dots[6];
        let left_air = first.x - layout.prev.right();
        let right_air = layout.next.x - last.right();
        assert!(left_air.abs_diff(right_air) <= 1);
        for pair in layout.dots.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
    }

    #[test]
    fn test_dots_shrink_when_crowded() {
        let layout = controls_layout(Rect::new(0, 0, 40, 1), 12, 0);
        assert_eq!(layout.dots.len(), 12);
        assert!(layout.dots.iter().all(|d| d.width == 1));
    }

    #[test]
    fn test_dots_that_do_not_fit_are_dropped() {
        let layout = controls_layout(Rect::new(0, 0, 30, 1), 100, 0);
        assert!(layout.dots.len() < 100);
        assert!(layout.dots.iter().all(|d| d.right() < layout.next.x));
    }

    #[test]
    fn test_dot_window_follows_current_slide() {
        let area = Rect::new(0, 0, 30, 1);
        for index in [0, 15, 16, 50, 99] {
            let layout = controls_layout(area, 100, index);
            let shown = layout.first_dot..layout.first_dot + layout.dots.len();
            assert!(shown.contains(&index), "index {index} not in {shown:?}");
            assert!(shown.end <= 100);
        }
        assert_eq!(controls_layout(area, 100, 99).first_dot, 100 - 16);
    }

    #[test]
    fn test_current_dot_highlighted_when_window_scrolled() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut controls = Controls::new(60, 100);
        terminal.draw(|f| controls.render(f, f.area())).unwrap();

        let layout = controls_layout(Rect::new(0, 0, 30, 1), 100, 60);
        let current = layout.dots[60 - layout.first_dot];
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(current.x, 0)].fg, Color::White);
        assert_eq!(buffer[(layout.dots[0].x, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn test_hit_testing() {
        let layout = controls_layout(Rect::new(0, 4, 60, 1), 7, 0);
        assert_eq!(layout.hit(0, 4), Some(ControlHit::Prev));
        assert_eq!(layout.hit(59, 4), Some(ControlHit::Next));
        let dot = layout.dots[3];
        assert_eq!(layout.hit(dot.x + 1, 4), Some(ControlHit::Dot(3)));
        assert_eq!(layout.hit(dot.x, 5), None);
        assert_eq!(layout.hit(layout.prev.right(), 4), None);
    }

    #[test]
    fn test_render_labels_and_dots() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut controls = Controls::new(0, 3);

        terminal.draw(|f| controls.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.starts_with("◀ Prev"));
        assert!(text.ends_with("Next ▶"));
        assert_eq!(text.matches('▬').count(), 6);

        let prev_cell = &buffer[(0, 0)];
        assert_eq!(prev_cell.fg, Color::DarkGray);
        let next_cell = &buffer[(59, 0)];
        assert_eq!(next_cell.fg, Color::White);
    }

    #[test]
    fn test_current_dot_is_highlighted() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut controls = Controls::new(2, 3);
        terminal.draw(|f| controls.render(f, f.area())).unwrap();

        let layout = controls_layout(Rect::new(0, 0, 60, 1), 3, 2);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(layout.dots[2].x, 0)].fg, Color::White);
        assert_eq!(buffer[(layout.dots[0].x, 0)].fg, Color::DarkGray);
        // Last slide: Next is disabled
        assert_eq!(buffer[(59, 0)].fg, Color::DarkGray);
    }
}

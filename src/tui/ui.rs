use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Carousel, ControlHit, Controls, Header, controls_layout};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the presentation grows on large terminals.
const MAX_CONTENT_WIDTH: u16 = 120;
/// Columns kept free on each side of the content.
const SIDE_MARGIN: u16 = 2;

/// Screen regions shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub controls: Rect,
    pub viewport: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};

    let width = area
        .width
        .saturating_sub(SIDE_MARGIN * 2)
        .min(MAX_CONTENT_WIDTH);
    let content = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let [_, header, _, controls, _, viewport] =
        Layout::vertical([Length(1), Length(1), Length(1), Length(1), Length(1), Min(0)])
            .areas(content);

    ScreenLayout {
        header,
        controls,
        viewport,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(frame.area());
    let navigator = &app.navigator;

    Header::new(navigator.position_label()).render(frame, layout.header);
    Controls::new(navigator.index(), navigator.total()).render(frame, layout.controls);
    Carousel::new(&mut tui.carousel, app.deck.slides()).render(frame, layout.viewport);
}

/// Hit test: given a screen position, find which control (if any) is under it.
pub fn hit_test_controls(
    col: u16,
    row: u16,
    frame_area: Rect,
    total: usize,
    index: usize,
) -> Option<ControlHit> {
    let layout = screen_layout(frame_area);
    controls_layout(layout.controls, total, index).hit(col, row)
}

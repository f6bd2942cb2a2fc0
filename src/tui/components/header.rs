//! # Header Component
//!
//! Top line showing the position readout and the key hint.
//!
//! ```text
//! SLIDE 3 / 7                                      Use ← → keys
//! ```
//!
//! ## Stateless Component
//!
//! Header is purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ```rust,ignore
//! let mut header = Header::new(app.navigator.position_label());
//! header.render(frame, area);
//! ```
//!
//! On narrow terminals the hint is dropped before the readout is truncated.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub const KEY_HINT: &str = "Use ← → keys";

/// Top line with the `Slide n / total` readout and a key hint.
pub struct Header {
    /// Position readout, e.g. "Slide 3 / 7"
    pub position_label: String,
}

impl Header {
    pub fn new(position_label: String) -> Self {
        Self { position_label }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = self.position_label.to_uppercase();
        let label_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let hint_width = KEY_HINT.width() as u16;

        // Keep at least two columns between readout and hint
        let needed = label.width() + usize::from(hint_width) + 2;
        let label_area = if usize::from(area.width) >= needed {
            let hint_area = Rect {
                x: area.right() - hint_width,
                width: hint_width,
                ..area
            };
            let hint = Paragraph::new(Line::styled(KEY_HINT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right);
            frame.render_widget(hint, hint_area);
            Rect {
                width: area.width - hint_width,
                ..area
            }
        } else {
            area
        };

        frame.render_widget(Paragraph::new(Line::styled(label, label_style)), label_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(label: &str, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut header = Header::new(label.to_string());
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_readout_and_hint() {
        let text = render("Slide 3 / 7", 60);
        assert!(text.starts_with("SLIDE 3 / 7"));
        assert!(text.ends_with(KEY_HINT));
    }

    #[test]
    fn test_header_drops_hint_when_narrow() {
        let text = render("Slide 3 / 7", 20);
        assert!(text.starts_with("SLIDE 3 / 7"));
        assert!(!text.contains("keys"));
    }

    #[test]
    fn test_header_props_are_mutable() {
        let mut header = Header::new("Slide 1 / 2".to_string());
        header.position_label = "Slide 2 / 2".to_string();
        assert_eq!(header.position_label, "Slide 2 / 2");
    }
}

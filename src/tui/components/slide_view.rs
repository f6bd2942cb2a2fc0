//! # SlideView
//!
//! Draws a single slide: title, image placeholder, text block and link.
//!
//! ```text
//!            Using Memories and Notepad
//!
//!  ╭────────────────────────────────────────────╮
//!  │ ▣ slide-3a.png                             │
//!  │   assets/slide-3a.png                      │
//!  ╰────────────────────────────────────────────╯
//!  ╭────────────────────────────────────────────╮
//!  │  MEMORIES                                  │
//!  │  • Store project conventions, preferred    │
//!  │    libraries, style guides.                │
//!  ╰────────────────────────────────────────────╯
//! ```
//!
//! Implements `Widget` (not `Component`) so the carousel can draw it into a
//! `ScrollView` buffer. The body is structured on every render.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::body::StructuredBody;
use crate::core::slide::{Image, Link, Slide};

/// Columns consumed by each side of the slide margin.
const SIDE_MARGIN: u16 = 2;
/// Border (2) + horizontal padding (4) around the text block content.
const TEXT_BLOCK_H_OVERHEAD: u16 = 6;
/// Border (2) + vertical padding (2) around the text block content.
const TEXT_BLOCK_V_OVERHEAD: u16 = 4;
/// Gap between intro grid columns.
const GRID_GAP: u16 = 4;
const BULLET: &str = "• ";
const HANGING_INDENT: &str = "  ";

fn body_style() -> Style {
    Style::default().fg(Color::White)
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub struct SlideView<'a> {
    slide: &'a Slide,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a Slide) -> Self {
        Self { slide }
    }
}

/// Wrap `text` as a bulleted item with a hanging indent.
pub fn bullet_lines(text: &str, width: u16) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(usize::from(width.max(3)))
        .initial_indent(HANGING_INDENT)
        .subsequent_indent(HANGING_INDENT)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .break_words(true);

    textwrap::wrap(text, options)
        .into_iter()
        .enumerate()
        .map(|(i, wrapped)| {
            let content = wrapped
                .strip_prefix(HANGING_INDENT)
                .unwrap_or(&*wrapped)
                .to_string();
            let marker = if i == 0 { BULLET } else { HANGING_INDENT };
            Line::from(vec![
                Span::styled(marker, dim_style()),
                Span::styled(content, body_style()),
            ])
        })
        .collect()
}

/// Intro as a bulleted grid of `columns` columns, filled row by row.
///
/// Rows are padded to the tallest item so items in one row stay aligned.
pub fn grid_columns(intro: &[String], columns: u16, width: u16) -> Vec<Vec<Line<'static>>> {
    let n = usize::from(columns.max(1));
    let gaps = GRID_GAP.saturating_mul(columns.saturating_sub(1));
    let column_width = width.saturating_sub(gaps) / columns.max(1);
    let mut out: Vec<Vec<Line<'static>>> = vec![Vec::new(); n];

    for row in intro.chunks(n) {
        let cells: Vec<Vec<Line<'static>>> =
            row.iter().map(|item| bullet_lines(item, column_width)).collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);
        for (col, lines) in out.iter_mut().enumerate() {
            let cell = cells.get(col).cloned().unwrap_or_default();
            let pad = height - cell.len();
            lines.extend(cell);
            lines.extend(std::iter::repeat_n(Line::default(), pad));
        }
    }

    out
}

/// Lines for the text block (everything except an intro grid).
pub fn text_lines(body: &StructuredBody, include_intro: bool, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if include_intro {
        for paragraph in &body.intro {
            let options = textwrap::Options::new(usize::from(width.max(1)))
                .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
                .break_words(true);
            lines.extend(
                textwrap::wrap(paragraph, options)
                    .into_iter()
                    .map(|l| Line::styled(l.into_owned(), body_style())),
            );
        }
    }

    for section in &body.sections {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            section.heading.to_uppercase(),
            dim_style().add_modifier(Modifier::BOLD),
        ));
        for item in &section.items {
            lines.extend(bullet_lines(item, width));
        }
    }

    lines
}

fn image_lines(image: &Image) -> Vec<Line<'static>> {
    let label = if image.alt.trim().is_empty() {
        image
            .src
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&image.src)
            .to_string()
    } else {
        image.alt.clone()
    };
    vec![
        Line::from(vec![
            Span::styled("▣ ", dim_style()),
            Span::styled(label, body_style()),
        ]),
        Line::styled(format!("  {}", image.src), dim_style()),
    ]
}

fn link_line(link: &Link) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            link.label.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(format!(" → {}", link.href), dim_style()),
    ])
    .alignment(Alignment::Center)
}

/// Row count as a layout height, saturating at `u16::MAX`.
fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

fn rounded_block() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(dim_style())
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Rect {
            x: area.x + SIDE_MARGIN.min(area.width / 2),
            width: area.width.saturating_sub(SIDE_MARGIN * 2),
            ..area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let slide = self.slide;
        let body = slide.structured_body();
        let grid = slide
            .intro_columns()
            .filter(|_| !body.intro.is_empty());
        let content_width = inner.width.saturating_sub(TEXT_BLOCK_H_OVERHEAD);

        // --- Title ---
        let title = Paragraph::new(Line::styled(
            slide.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        let title_height = rows(title.line_count(inner.width));

        // --- Text block ---
        let grid_lines = grid.map(|columns| grid_columns(&body.intro, columns, content_width));
        let lines = text_lines(&body, grid.is_none(), content_width);
        let grid_height = rows(
            grid_lines
                .as_ref()
                .and_then(|cols| cols.iter().map(Vec::len).max())
                .unwrap_or(0),
        );
        let gap = u16::from(grid_height > 0 && !lines.is_empty());
        let text_height = if slide.body.is_some() {
            grid_height
                .saturating_add(gap)
                .saturating_add(rows(lines.len()))
                .saturating_add(TEXT_BLOCK_V_OVERHEAD)
        } else {
            0
        };

        let image_height = if slide.image.is_some() { 4 } else { 0 };
        let link_height = u16::from(slide.link.is_some());

        let [_, title_area, _, image_area, text_area, link_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(title_height),
            Constraint::Length(1),
            Constraint::Length(image_height),
            Constraint::Length(text_height),
            Constraint::Length(link_height),
        ])
        .areas(inner);

        title.render(title_area, buf);

        if let Some(image) = &slide.image {
            Paragraph::new(image_lines(image))
                .block(rounded_block().padding(Padding::horizontal(1)))
                .render(image_area, buf);
        }

        if slide.body.is_some() {
            let block = rounded_block().padding(Padding::new(2, 2, 1, 1));
            let content = block.inner(text_area);
            block.render(text_area, buf);

            let [grid_area, _, rest_area] = Layout::vertical([
                Constraint::Length(grid_height),
                Constraint::Length(gap),
                Constraint::Min(0),
            ])
            .areas(content);

            if let Some(columns) = grid_lines {
                let constraints = (0..columns.len()).map(|_| Constraint::Fill(1));
                let cells = Layout::horizontal(constraints)
                    .spacing(GRID_GAP)
                    .split(grid_area);
                for (lines, cell) in columns.into_iter().zip(cells.iter()) {
                    Paragraph::new(lines).render(*cell, buf);
                }
            }

            Paragraph::new(lines).render(rest_area, buf);
        }

        if let Some(link) = &slide.link {
            Paragraph::new(link_line(link)).render(link_area, buf);
        }
    }
}

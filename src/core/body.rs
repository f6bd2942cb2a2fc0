//! # Body Structuring
//!
//! Splits a slide's flat list of body lines into an intro block and
//! heading-delimited sections.
//!
//! ```text
//! "Objective: ship it."   ──►  intro
//! "Coverage:"             ──►  Section { heading: "Coverage", items: [...] }
//! "Item A"                ──►    └── item
//! "Item B"                ──►    └── item
//! ```
//!
//! A line is a heading when it ends with `:` once trailing whitespace is
//! ignored. Lines before the first heading form the intro; every other
//! non-heading line belongs to the most recent heading.

/// A heading plus the body lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub items: Vec<String>,
}

/// Result of [`structure`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredBody {
    pub intro: Vec<String>,
    pub sections: Vec<Section>,
}

impl StructuredBody {
    pub fn is_empty(&self) -> bool {
        self.intro.is_empty() && self.sections.is_empty()
    }
}

/// Returns the heading text if `line` is a heading line.
///
/// Trailing whitespace and exactly one trailing `:` are stripped.
pub fn heading_text(line: &str) -> Option<&str> {
    line.trim_end().strip_suffix(':')
}

/// Structure a slide body into intro lines and sections.
///
/// Total over its input: every line lands in exactly one place, headings are
/// consumed, and order is preserved.
pub fn structure<S: AsRef<str>>(lines: &[S]) -> StructuredBody {
    let mut body = StructuredBody::default();

    for line in lines {
        let line = line.as_ref();
        if let Some(heading) = heading_text(line) {
            body.sections.push(Section {
                heading: heading.to_string(),
                items: Vec::new(),
            });
            continue;
        }
        match body.sections.last_mut() {
            Some(current) => current.items.push(line.to_string()),
            None => body.intro.push(line.to_string()),
        }
    }

    body
}

//! Inline source citations.
//!
//! Some cells cite where a value came from: `Helsinki (Smith, Jones)`.
//! Extraction runs in two steps so each edge case can be tested on its own:
//! [`find_last_group`] locates the last top-level parenthesized group, then
//! [`extract_inline_sources`] splits the value from the source labels.

use tracing::{debug, warn};

/// Result of scanning a field for parenthesized groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupScan {
    /// No parentheses at all.
    NoGroup,
    /// The last top-level group; byte offsets of its `(` and `)`.
    Group {
        open: usize,
        close: usize,
        /// The group contains parentheses of its own.
        nested: bool,
    },
    /// A `(` is never closed.
    Unbalanced,
}

/// Find the last balanced top-level `(...)` group in `text`.
///
/// A `)` without a matching `(` is skipped.
pub fn find_last_group(text: &str) -> GroupScan {
    let mut depth = 0usize;
    let mut open = 0usize;
    let mut nested = false;
    let mut last = GroupScan::NoGroup;

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => {
                if depth == 0 {
                    open = idx;
                    nested = false;
                } else {
                    nested = true;
                }
                depth += 1;
            }
            ')' => {
                // stray closer outside any group
                if depth == 0 {
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    last = GroupScan::Group {
                        open,
                        close: idx,
                        nested,
                    };
                }
            }
            _ => {}
        }
    }

    if depth == 0 {
        last
    } else {
        GroupScan::Unbalanced
    }
}

/// A field value with its cited sources split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSources {
    pub value: String,
    pub sources: Option<Vec<String>>,
}

impl InlineSources {
    fn unchanged(text: &str) -> Self {
        Self {
            value: text.to_string(),
            sources: None,
        }
    }
}

/// Split `value (source1, source2)` into the value and its source labels.
///
/// The group must follow the value after whitespace. Text after the closing
/// parenthesis is discarded with a warning. Fields without a usable group
/// come back unchanged.
pub fn extract_inline_sources(text: &str) -> InlineSources {
    let (open, close) = match find_last_group(text) {
        GroupScan::NoGroup => return InlineSources::unchanged(text),
        GroupScan::Unbalanced => {
            warn!(value = text, "unbalanced parentheses, sources not extracted");
            return InlineSources::unchanged(text);
        }
        GroupScan::Group { nested: true, .. } => {
            debug!(value = text, "nested parentheses are not a source list");
            return InlineSources::unchanged(text);
        }
        GroupScan::Group { open, close, .. } => (open, close),
    };

    let before = &text[..open];
    if !before.ends_with(char::is_whitespace) {
        debug!(value = text, "no space before parenthesis, not a source list");
        return InlineSources::unchanged(text);
    }
    let value = before.trim();
    if value.is_empty() {
        return InlineSources::unchanged(text);
    }

    let trailing = text[close + 1..].trim();
    if !trailing.is_empty() {
        warn!(value, trailing, "found content after sources");
    }

    let sources: Vec<String> = text[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|source| !source.is_empty())
        .map(ToString::to_string)
        .collect();
    if !sources.is_empty() {
        debug!(value, sources = ?sources, "found sources");
    }

    InlineSources {
        value: value.to_string(),
        sources: (!sources.is_empty()).then_some(sources),
    }
}

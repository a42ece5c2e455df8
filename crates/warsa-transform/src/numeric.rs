//! Integer conversion.

use tracing::{debug, warn};

/// Placeholder the source uses for "none" in count columns.
pub const DASH: &str = "-";

/// Parses the leading integer of a field.
///
/// `"3"` and `"3 children"` both give 3. A lone dash, an empty field and
/// text without leading digits give `None`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == DASH {
        debug!(value = trimmed, "no integer value");
        return None;
    }
    let digits_end = trimmed
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(trimmed.len(), |(idx, _)| idx);
    if digits_end == 0 {
        warn!(value = trimmed, "invalid value for integer conversion");
        return None;
    }
    match trimmed[..digits_end].parse::<i64>() {
        Ok(number) => Some(number),
        Err(error) => {
            warn!(value = trimmed, %error, "integer out of range");
            None
        }
    }
}

/// Returns the trimmed text unless it is empty or a lone dash.
pub fn strip_dash(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == DASH {
        None
    } else {
        Some(trimmed.to_string())
    }
}

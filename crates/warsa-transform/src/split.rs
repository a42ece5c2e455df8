//! Splitting of multi-valued cells.

/// Split a raw cell on an exact literal separator and trim every piece.
///
/// Without a separator (or with an empty one) the whole trimmed cell is the
/// single piece. Empty pieces are kept; the caller decides what absent means.
pub fn split_values(raw: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(separator) if !separator.is_empty() => raw
            .split(separator)
            .map(|piece| piece.trim().to_string())
            .collect(),
        _ => vec![raw.trim().to_string()],
    }
}

//! Person name decomposition.
//!
//! Source names are written family name first: `Virtanen Matti Akseli`,
//! `Virtanen, Matti Akseli` or `Virtanen (ent. Lahtinen) Matti`. Downstream
//! consumers key on the family and given names separately, so the split
//! must stay stable.

use tracing::debug;

use warsa_model::PersonName;

/// Lowercase particles that belong to the family name that follows them.
const FAMILY_PARTICLES: &[&str] = &["von", "af", "de", "van", "der", "di", "la"];

/// Split a family-name-first name into given names, family name and display form.
///
/// Returns `None` for an empty name.
pub fn decompose_person_name(raw: &str) -> Option<PersonName> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(comma) = top_level_comma(trimmed) {
        let (family, given) = (&trimmed[..comma], &trimmed[comma + 1..]);
        let family = collapse_whitespace(family);
        if family.is_empty() {
            debug!(name = trimmed, "name starts with a comma");
            return decompose_person_name(given);
        }
        return Some(build(family, collapse_whitespace(given)));
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let split = family_group_end(&tokens);
    Some(build(tokens[..split].join(" "), tokens[split..].join(" ")))
}

/// Byte offset of the first comma outside parentheses.
fn top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Index of the first token after the family name group.
fn family_group_end(tokens: &[&str]) -> usize {
    let mut idx = 0;
    while idx + 1 < tokens.len() && FAMILY_PARTICLES.contains(&tokens[idx]) {
        idx += 1;
    }
    // the family name itself
    idx += 1;

    // former name, e.g. "(ent. Lahtinen)"
    if tokens.get(idx).is_some_and(|token| token.starts_with('(')) {
        if let Some(offset) = tokens[idx..].iter().position(|token| token.ends_with(')')) {
            idx += offset + 1;
        }
    }
    idx.min(tokens.len())
}

fn build(family_name: String, given_names: String) -> PersonName {
    if given_names.is_empty() {
        PersonName {
            given_names: None,
            display_name: family_name.clone(),
            family_name,
        }
    } else {
        PersonName {
            display_name: format!("{given_names} {family_name}"),
            given_names: Some(given_names),
            family_name,
        }
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

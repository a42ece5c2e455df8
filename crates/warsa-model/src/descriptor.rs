//! Per-column mapping descriptors.
//!
//! A descriptor tells the row mapper how to turn one source column into
//! statements: which predicate to use, how to split multi-valued cells,
//! whether values carry inline source citations, and which converter
//! produces the typed value.

use std::fmt;

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

/// Closed set of value converters a column can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterKind {
    /// Keep the trimmed text.
    #[default]
    None,
    /// Leading integer; `-` means none.
    Integer,
    /// `D.M.YYYY`, `YYYY-MM-DD` or a bare year.
    Date,
    /// Text, with a lone `-` treated as absent.
    StripDash,
    /// Family-name-first person name, rendered as its display form.
    PersonName,
}

impl ConverterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::StripDash => "strip_dash",
            Self::PersonName => "person_name",
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the human-readable predicate labels written to the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLanguage {
    #[default]
    Fi,
    En,
}

impl LabelLanguage {
    /// BCP 47 tag used on the label literal.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Fi => "fi",
            Self::En => "en",
        }
    }
}

/// Immutable description of how one source column is mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescriptor {
    /// Source column name, as it appears in the normalized table header.
    pub column: String,
    /// Predicate of every statement produced from this column.
    pub predicate: NamedNode,
    /// Literal separator between multiple values in one cell.
    pub separator: Option<String>,
    pub converter: ConverterKind,
    /// Values may end with a parenthesized list of sources.
    pub inline_sources: bool,
    /// Value position is meaningful and is kept as an order number.
    pub ordered: bool,
    pub name_fi: Option<String>,
    pub name_en: Option<String>,
}

impl MappingDescriptor {
    pub fn new(column: impl Into<String>, predicate: NamedNode) -> Self {
        Self {
            column: column.into(),
            predicate,
            separator: None,
            converter: ConverterKind::None,
            inline_sources: false,
            ordered: false,
            name_fi: None,
            name_en: None,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_converter(mut self, converter: ConverterKind) -> Self {
        self.converter = converter;
        self
    }

    #[must_use]
    pub fn with_inline_sources(mut self) -> Self {
        self.inline_sources = true;
        self
    }

    #[must_use]
    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    #[must_use]
    pub fn with_names(mut self, name_fi: impl Into<String>, name_en: impl Into<String>) -> Self {
        self.name_fi = Some(name_fi.into());
        self.name_en = Some(name_en.into());
        self
    }

    /// Label in the requested language, if the descriptor carries one.
    pub fn label(&self, language: LabelLanguage) -> Option<&str> {
        match language {
            LabelLanguage::Fi => self.name_fi.as_deref(),
            LabelLanguage::En => self.name_en.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn builder_sets_optional_parts() {
        let descriptor = MappingDescriptor::new("syntymäaika", vocab::schema("birth_date"))
            .with_separator(" / ")
            .with_converter(ConverterKind::Date)
            .with_inline_sources()
            .with_names("Syntymäaika", "Date of birth");

        assert_eq!(descriptor.separator.as_deref(), Some(" / "));
        assert_eq!(descriptor.converter, ConverterKind::Date);
        assert!(descriptor.inline_sources);
        assert!(!descriptor.ordered);
        assert_eq!(descriptor.label(LabelLanguage::Fi), Some("Syntymäaika"));
        assert_eq!(descriptor.label(LabelLanguage::En), Some("Date of birth"));
    }

    #[test]
    fn bare_descriptor_has_only_a_predicate() {
        let descriptor = MappingDescriptor::new("x", vocab::schema("x"));
        assert_eq!(descriptor.separator, None);
        assert_eq!(descriptor.converter, ConverterKind::None);
        assert_eq!(descriptor.label(LabelLanguage::Fi), None);
    }

    #[test]
    fn converter_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ConverterKind::StripDash).expect("serialize");
        assert_eq!(json, "\"strip_dash\"");
    }
}

//! Typed values produced by the converters.

use chrono::NaiveDate;
use oxrdf::Literal;
use oxrdf::vocab::xsd;

/// A converted field value, ready to become a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    /// A date known only to the year.
    Year(i32),
}

impl FieldValue {
    /// Render the value as an RDF literal with its datatype.
    ///
    /// Text becomes a simple (`xsd:string`) literal.
    pub fn to_literal(&self) -> Literal {
        match self {
            Self::Text(text) => Literal::new_simple_literal(text.as_str()),
            Self::Integer(value) => Literal::new_typed_literal(value.to_string(), xsd::INTEGER),
            Self::Date(date) => {
                Literal::new_typed_literal(date.format("%Y-%m-%d").to_string(), xsd::DATE)
            }
            Self::Year(year) => Literal::new_typed_literal(format!("{year:04}"), xsd::G_YEAR),
        }
    }
}

/// A person name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// Given names in source order; `None` when the source had only a family name.
    pub given_names: Option<String>,
    pub family_name: String,
    /// Given names followed by the family name.
    pub display_name: String,
}

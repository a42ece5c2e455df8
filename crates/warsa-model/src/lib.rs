//! Shared types for converting prisoner-of-war records to RDF.

pub mod descriptor;
pub mod error;
pub mod ids;
pub mod value;
pub mod vocab;

pub use descriptor::{ConverterKind, LabelLanguage, MappingDescriptor};
pub use error::{MappingError, Result};
pub use ids::SubjectId;
pub use value::{FieldValue, PersonName};

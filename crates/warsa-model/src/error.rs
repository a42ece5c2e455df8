use thiserror::Error;

/// Fatal errors raised while mapping table rows to statements.
///
/// Field-level conversion problems are not represented here: they are
/// logged and the value is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The mapping table names columns the loaded table does not have.
    #[error("mapping references columns missing from the input table: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    /// A data row has no usable identity (person name) field.
    #[error("row {row} has no identity field")]
    MissingIdentity { row: usize },
}

pub type Result<T> = std::result::Result<T, MappingError>;

//! Row-to-graph mapping for the prisoners of war register.
//!
//! [`RowMapper`] turns one row into a statement set, [`GraphAssembler`]
//! merges the sets into the data graph and derives the schema graph from
//! the [`MappingTable`].

pub mod assembler;
pub mod config;
pub mod engine;
pub mod table;

pub use assembler::{AssembledGraphs, AssemblyStats, GraphAssembler, build_schema};
pub use config::{AnnotationPolicy, ConversionConfig};
pub use engine::{Annotation, MappedRow, RowMapper};
pub use table::{MappingTable, SEMICOLON, SLASH};

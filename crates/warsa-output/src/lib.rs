//! Output generation for the converted register.
//!
//! Both graphs are written as Turtle with their namespace prefixes bound:
//!
//! - **prisoners.ttl**: one resource per prisoner row
//! - **schema.ttl**: the predicates used by the data

mod common;
mod turtle;

pub use common::{DATA_FILE, SCHEMA_FILE, ensure_output_dir};
pub use turtle::{OutputPaths, write_graph, write_outputs, write_turtle};

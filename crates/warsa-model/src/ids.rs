#![deny(unsafe_code)]

use std::fmt;

use oxrdf::{NamedNode, NamedNodeRef};

use crate::vocab;

/// Identifier of the resource a single row describes.
///
/// Derived from the zero-based row position, so it is unique within a run
/// but changes when the input rows are reordered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectId {
    index: usize,
    node: NamedNode,
}

impl SubjectId {
    pub fn for_row(index: usize) -> Self {
        Self {
            index,
            node: vocab::data(&format!("prisoner_{index}")),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Local part of the IRI, e.g. `prisoner_3`.
    pub fn local_name(&self) -> &str {
        &self.node.as_str()[vocab::DATA_NS.len()..]
    }

    pub fn as_node(&self) -> NamedNodeRef<'_> {
        self.node.as_ref()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node.as_str())
    }
}

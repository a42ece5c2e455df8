//! Conversion configuration.

use oxrdf::NamedNode;
use tracing::Level;

use warsa_model::{LabelLanguage, vocab};

use crate::table::MappingTable;

/// What happens to inline sources and order numbers found while mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnnotationPolicy {
    /// Parse and count them, but write nothing to the data graph.
    #[default]
    Discard,
    /// Write each annotated value as a reified `rdf:Statement`.
    Reify,
}

/// Everything the row mapper and graph assembler need, fixed for one run.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Level the driver initialises logging with.
    pub log_level: Level,
    pub mapping: MappingTable,
    /// Class asserted once for every row.
    pub instance_class: NamedNode,
    pub annotations: AnnotationPolicy,
    /// Language of the predicate labels in the schema graph.
    pub label_language: LabelLanguage,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            mapping: MappingTable::prisoners(),
            instance_class: vocab::prisoner_of_war(),
            annotations: AnnotationPolicy::default(),
            label_language: LabelLanguage::default(),
        }
    }
}

impl ConversionConfig {
    pub fn new(mapping: MappingTable) -> Self {
        Self {
            mapping,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, policy: AnnotationPolicy) -> Self {
        self.annotations = policy;
        self
    }

    #[must_use]
    pub fn with_label_language(mut self, language: LabelLanguage) -> Self {
        self.label_language = language;
        self
    }
}

//! Accumulates mapped rows into the data graph and derives the schema graph.

use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Graph, Literal, NamedNode, Term, Triple};
use serde::Serialize;
use tracing::{debug, info};

use warsa_model::{FieldValue, LabelLanguage, SubjectId, vocab};

use crate::config::{AnnotationPolicy, ConversionConfig};
use crate::engine::{Annotation, MappedRow};
use crate::table::MappingTable;

/// Counters reported once a run is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    pub rows: usize,
    pub data_statements: usize,
    pub schema_statements: usize,
    /// Values that carried inline sources or an order number.
    pub annotations: usize,
    /// Annotations written to the data graph as reified statements.
    pub reified: usize,
}

/// The two finished graphs of a run.
#[derive(Debug, Clone)]
pub struct AssembledGraphs {
    pub data: Graph,
    pub schema: Graph,
    pub stats: AssemblyStats,
}

/// Single writer for the data graph.
///
/// Merging is a set union: merging the same row twice leaves the graph as
/// it was after the first merge.
#[derive(Debug)]
pub struct GraphAssembler<'a> {
    config: &'a ConversionConfig,
    data: Graph,
    stats: AssemblyStats,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            data: Graph::new(),
            stats: AssemblyStats::default(),
        }
    }

    pub fn data(&self) -> &Graph {
        &self.data
    }

    pub fn merge(&mut self, row: MappedRow) {
        let MappedRow {
            subject,
            statements,
            annotations,
        } = row;
        for triple in statements.iter() {
            self.data.insert(triple);
        }
        self.stats.rows += 1;
        self.stats.annotations += annotations.len();

        match self.config.annotations {
            AnnotationPolicy::Discard => {
                if !annotations.is_empty() {
                    debug!(
                        subject = subject.local_name(),
                        count = annotations.len(),
                        "annotations parsed but not persisted"
                    );
                }
            }
            AnnotationPolicy::Reify => {
                for (index, annotation) in annotations.iter().enumerate() {
                    reify(&mut self.data, &subject, index, annotation);
                    self.stats.reified += 1;
                }
            }
        }
    }

    pub fn finish(self) -> AssembledGraphs {
        let schema = build_schema(&self.config.mapping, self.config.label_language);
        let stats = AssemblyStats {
            data_statements: self.data.len(),
            schema_statements: schema.len(),
            ..self.stats
        };
        info!(
            rows = stats.rows,
            data_statements = stats.data_statements,
            schema_statements = stats.schema_statements,
            annotations = stats.annotations,
            "graphs assembled"
        );
        AssembledGraphs {
            data: self.data,
            schema,
            stats,
        }
    }
}

/// Describe every labelled predicate of `table`.
///
/// Emits `rdf:type rdf:Property` and one `skos:prefLabel` per labelled
/// descriptor. Row data never influences the result.
pub fn build_schema(table: &MappingTable, language: LabelLanguage) -> Graph {
    let mut schema = Graph::new();
    for descriptor in table.labelled(language) {
        let Some(label) = descriptor.label(language) else {
            continue;
        };
        schema.insert(&Triple::new(
            descriptor.predicate.clone(),
            rdf::TYPE.into_owned(),
            rdf::PROPERTY.into_owned(),
        ));
        schema.insert(&Triple::new(
            descriptor.predicate.clone(),
            vocab::skos_pref_label(),
            Literal::new_language_tagged_literal_unchecked(label, language.tag()),
        ));
    }
    schema
}

fn reify(data: &mut Graph, subject: &SubjectId, index: usize, annotation: &Annotation) {
    let statement = BlankNode::new_unchecked(format!("{}_a{index}", subject.local_name()));
    let mut add = |predicate: NamedNode, object: Term| {
        data.insert(&Triple::new(statement.clone(), predicate, object));
    };
    add(rdf::TYPE.into_owned(), rdf::STATEMENT.into_owned().into());
    add(rdf::SUBJECT.into_owned(), subject.as_node().into_owned().into());
    add(rdf::PREDICATE.into_owned(), annotation.predicate.clone().into());
    add(rdf::OBJECT.into_owned(), annotation.object.clone().into());
    for source in &annotation.sources {
        add(
            vocab::dc_source(),
            Literal::new_simple_literal(source.as_str()).into(),
        );
    }
    if let Some(order) = annotation.order {
        add(
            vocab::order_number(),
            FieldValue::Integer(order).to_literal().into(),
        );
    }
}

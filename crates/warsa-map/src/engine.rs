//! Row mapper: turns one table row into statements about its subject.

use oxrdf::vocab::rdf;
use oxrdf::{Graph, Literal, NamedNode, Term, Triple};
use tracing::{debug, debug_span};

use warsa_model::{MappingDescriptor, MappingError, Result, SubjectId, vocab};
use warsa_transform::{convert_value, decompose_person_name, extract_inline_sources, split_values};

use crate::config::ConversionConfig;

/// Sources and order number attached to one emitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub predicate: NamedNode,
    pub object: Literal,
    /// Inline sources cited for the value; empty when none were given.
    pub sources: Vec<String>,
    /// Position of the value within an ordered column, in steps of ten.
    pub order: Option<i64>,
}

/// Everything one row produced.
#[derive(Debug, Clone)]
pub struct MappedRow {
    pub subject: SubjectId,
    pub statements: Graph,
    pub annotations: Vec<Annotation>,
}

/// Maps rows of one table. The mapping is resolved against the header once.
#[derive(Debug)]
pub struct RowMapper<'a> {
    config: &'a ConversionConfig,
    /// Header position of each descriptor, in table order.
    positions: Vec<usize>,
}

impl<'a> RowMapper<'a> {
    /// Resolve the configured mapping table against `headers`.
    ///
    /// # Errors
    ///
    /// [`MappingError::MissingColumns`] if any mapped column is absent.
    pub fn new(config: &'a ConversionConfig, headers: &[String]) -> Result<Self> {
        let missing = config.mapping.missing_columns(headers);
        if !missing.is_empty() {
            return Err(MappingError::MissingColumns { columns: missing });
        }
        let positions = config
            .mapping
            .iter()
            .filter_map(|descriptor| headers.iter().position(|h| *h == descriptor.column))
            .collect();
        Ok(Self { config, positions })
    }

    /// Map one row. Depends only on the subject, the row and the mapping.
    ///
    /// # Errors
    ///
    /// [`MappingError::MissingIdentity`] if the first field is missing or blank.
    pub fn map_row(&self, subject: &SubjectId, row: &[String]) -> Result<MappedRow> {
        let _span = debug_span!("row", subject = subject.local_name()).entered();
        let missing_identity = || MappingError::MissingIdentity {
            row: subject.index(),
        };
        let identity = row.first().ok_or_else(missing_identity)?;
        let name = decompose_person_name(identity).ok_or_else(missing_identity)?;

        let node = subject.as_node().into_owned();
        let mut statements = Graph::new();
        let mut annotations = Vec::new();

        if let Some(given) = &name.given_names {
            insert(
                &mut statements,
                &node,
                vocab::foaf_given_name(),
                Literal::new_simple_literal(given.as_str()),
            );
        }
        insert(
            &mut statements,
            &node,
            vocab::foaf_family_name(),
            Literal::new_simple_literal(name.family_name.as_str()),
        );
        insert(
            &mut statements,
            &node,
            vocab::skos_pref_label(),
            Literal::new_simple_literal(name.display_name.as_str()),
        );

        if !self.config.mapping.is_empty() {
            insert(
                &mut statements,
                &node,
                rdf::TYPE.into_owned(),
                self.config.instance_class.clone(),
            );
        }

        for (descriptor, &position) in self.config.mapping.iter().zip(&self.positions) {
            let raw = row.get(position).map_or("", String::as_str);
            map_field(descriptor, raw, &node, &mut statements, &mut annotations);
        }

        debug!(
            statements = statements.len(),
            annotations = annotations.len(),
            "row mapped"
        );
        Ok(MappedRow {
            subject: subject.clone(),
            statements,
            annotations,
        })
    }
}

fn map_field(
    descriptor: &MappingDescriptor,
    raw: &str,
    node: &NamedNode,
    statements: &mut Graph,
    annotations: &mut Vec<Annotation>,
) {
    let mut emitted = 0i64;
    for piece in split_values(raw, descriptor.separator.as_deref()) {
        let (text, sources) = if descriptor.inline_sources {
            let extracted = extract_inline_sources(&piece);
            (extracted.value, extracted.sources.unwrap_or_default())
        } else {
            (piece, Vec::new())
        };

        let Some(value) = convert_value(descriptor.converter, &text) else {
            if !text.is_empty() {
                debug!(column = %descriptor.column, "value dropped by converter");
            }
            continue;
        };

        let object = value.to_literal();
        insert(statements, node, descriptor.predicate.clone(), object.clone());
        emitted += 1;

        let order = descriptor.ordered.then_some(emitted * 10);
        if !sources.is_empty() || order.is_some() {
            annotations.push(Annotation {
                predicate: descriptor.predicate.clone(),
                object,
                sources,
                order,
            });
        }
    }
}

fn insert(graph: &mut Graph, subject: &NamedNode, predicate: NamedNode, object: impl Into<Term>) {
    graph.insert(&Triple::new(subject.clone(), predicate, object));
}

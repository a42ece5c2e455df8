//! Shared helpers for mapping tests.

#![allow(dead_code)]

use oxrdf::vocab::xsd;
use oxrdf::{Graph, SubjectRef, TermRef};

use warsa_map::{ConversionConfig, MappingTable};
use warsa_model::vocab::compact;

fn subject(subject: SubjectRef<'_>) -> String {
    match subject {
        SubjectRef::NamedNode(node) => compact(node.as_str()),
        SubjectRef::BlankNode(node) => format!("_:{}", node.as_str()),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

fn object(term: TermRef<'_>) -> String {
    match term {
        TermRef::NamedNode(node) => compact(node.as_str()),
        TermRef::BlankNode(node) => format!("_:{}", node.as_str()),
        TermRef::Literal(literal) => match literal.language() {
            Some(language) => format!("\"{}\"@{language}", literal.value()),
            None if literal.datatype() == xsd::STRING => format!("\"{}\"", literal.value()),
            None => format!(
                "\"{}\"^^{}",
                literal.value(),
                compact(literal.datatype().as_str())
            ),
        },
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

/// One `subject predicate object` line per statement, sorted.
pub fn render(graph: &Graph) -> Vec<String> {
    let mut lines: Vec<String> = graph
        .iter()
        .map(|triple| {
            format!(
                "{} {} {}",
                subject(triple.subject),
                compact(triple.predicate.as_str()),
                object(triple.object)
            )
        })
        .collect();
    lines.sort();
    lines
}

/// Config restricted to the named columns of the prisoner table.
pub fn config_with_columns(columns: &[&str]) -> ConversionConfig {
    let prisoners = MappingTable::prisoners();
    let descriptors = columns
        .iter()
        .map(|column| prisoners.get(column).cloned().expect("known column"))
        .collect();
    ConversionConfig::new(MappingTable::new(descriptors))
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

//! Namespaces and well-known terms used by the prisoner graphs.
//!
//! The IRIs are shared with the rest of the WarSampo data and must stay
//! byte-for-byte identical.

use oxrdf::NamedNode;

pub const CIDOC: &str = "http://www.cidoc-crm.org/cidoc-crm/";
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const BIOC: &str = "http://ldf.fi/schema/bioc/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Namespace of the per-row subject identifiers.
pub const DATA_NS: &str = "http://ldf.fi/warsa/prisoners/";
/// Namespace of the mapping-owned predicates and classes.
pub const SCHEMA_NS: &str = "http://ldf.fi/schema/warsa/prisoners/";

/// Prefixes bound when serializing the data graph.
pub const DATA_PREFIXES: &[(&str, &str)] = &[
    ("p", DATA_NS),
    ("ps", SCHEMA_NS),
    ("skos", SKOS),
    ("cidoc", CIDOC),
    ("foaf", FOAF),
    ("bioc", BIOC),
    ("dc", DC),
    ("rdf", RDF),
    ("xsd", XSD),
];

/// Prefixes bound when serializing the schema graph.
pub const SCHEMA_PREFIXES: &[(&str, &str)] = &[
    ("ps", SCHEMA_NS),
    ("skos", SKOS),
    ("cidoc", CIDOC),
    ("foaf", FOAF),
    ("bioc", BIOC),
    ("rdf", RDF),
];

fn term(namespace: &str, local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{namespace}{local}"))
}

pub fn data(local: &str) -> NamedNode {
    term(DATA_NS, local)
}

pub fn schema(local: &str) -> NamedNode {
    term(SCHEMA_NS, local)
}

pub fn bioc(local: &str) -> NamedNode {
    term(BIOC, local)
}

pub fn foaf_given_name() -> NamedNode {
    term(FOAF, "givenName")
}

pub fn foaf_family_name() -> NamedNode {
    term(FOAF, "familyName")
}

pub fn skos_pref_label() -> NamedNode {
    term(SKOS, "prefLabel")
}

pub fn dc_source() -> NamedNode {
    term(DC, "source")
}

/// Class asserted for every converted row.
pub fn prisoner_of_war() -> NamedNode {
    schema("PrisonerOfWar")
}

/// Predicate carrying the order number of a reified multi-valued statement.
pub fn order_number() -> NamedNode {
    schema("order")
}

/// Shorten `iri` to `prefix:local` with the data graph prefixes, if one applies.
pub fn compact(iri: &str) -> String {
    DATA_PREFIXES
        .iter()
        .find_map(|&(prefix, namespace)| {
            iri.strip_prefix(namespace)
                .map(|local| format!("{prefix}:{local}"))
        })
        .unwrap_or_else(|| format!("<{iri}>"))
}

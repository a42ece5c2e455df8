//! Turtle serialization of the data and schema graphs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use oxrdf::{Graph, TripleRef};
use oxttl::TurtleSerializer;
use tracing::info;

use warsa_model::vocab::{DATA_PREFIXES, SCHEMA_PREFIXES};

use crate::common::{DATA_FILE, SCHEMA_FILE, ensure_output_dir};

/// Where the two graphs were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub data: PathBuf,
    pub schema: PathBuf,
}

/// Write `data` to `prisoners.ttl` and `schema` to `schema.ttl` under `output_dir`.
pub fn write_outputs(output_dir: &Path, data: &Graph, schema: &Graph) -> Result<OutputPaths> {
    ensure_output_dir(output_dir)?;
    let paths = OutputPaths {
        data: output_dir.join(DATA_FILE),
        schema: output_dir.join(SCHEMA_FILE),
    };
    write_turtle(&paths.data, data, DATA_PREFIXES)?;
    write_turtle(&paths.schema, schema, SCHEMA_PREFIXES)?;
    Ok(paths)
}

/// Write a single graph as a Turtle file.
pub fn write_turtle(path: &Path, graph: &Graph, prefixes: &[(&str, &str)]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = write_graph(BufWriter::new(file), graph, prefixes)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), statements = graph.len(), "turtle written");
    Ok(())
}

/// Serialize `graph` into `writer`, binding `prefixes`.
///
/// Statements are written in sorted order so unchanged input gives a
/// byte-identical file.
pub fn write_graph<W: Write>(writer: W, graph: &Graph, prefixes: &[(&str, &str)]) -> Result<W> {
    let mut serializer = TurtleSerializer::new();
    for (name, iri) in prefixes {
        serializer = serializer
            .with_prefix(*name, *iri)
            .with_context(|| format!("invalid prefix {name}: <{iri}>"))?;
    }
    let mut serializer = serializer.for_writer(writer);

    let mut triples: Vec<TripleRef<'_>> = graph.iter().collect();
    triples.sort_by_cached_key(ToString::to_string);
    for triple in triples {
        serializer.serialize_triple(triple)?;
    }
    Ok(serializer.finish()?)
}

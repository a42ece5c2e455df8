//! Conversion pipeline: load the table, map every row, write both graphs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use warsa_ingest::{IngestOptions, read_csv_table_with_options};
use warsa_map::{ConversionConfig, GraphAssembler, RowMapper};
use warsa_model::SubjectId;
use warsa_output::write_outputs;

use crate::types::RunSummary;

/// Inputs of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub ingest: IngestOptions,
    pub config: ConversionConfig,
}

impl ConvertRequest {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ingest: IngestOptions::default(),
            config: ConversionConfig::default(),
        }
    }
}

/// Run a full conversion.
///
/// Nothing is written unless every row maps.
pub fn run_conversion(request: &ConvertRequest) -> Result<RunSummary> {
    let span = info_span!(
        "convert",
        input = %request.input.display(),
        log_level = %request.config.log_level
    );
    let _guard = span.enter();

    let table = read_csv_table_with_options(&request.input, request.ingest)?;
    let mapper = RowMapper::new(&request.config, &table.headers)
        .with_context(|| format!("validate mapping: {}", request.input.display()))?;

    let mut assembler = GraphAssembler::new(&request.config);
    for (index, row) in table.rows.iter().enumerate() {
        let mapped = mapper.map_row(&SubjectId::for_row(index), row)?;
        assembler.merge(mapped);
    }
    let graphs = assembler.finish();

    let paths = write_outputs(&request.output_dir, &graphs.data, &graphs.schema)?;
    info!(
        data = %paths.data.display(),
        schema = %paths.schema.display(),
        "conversion finished"
    );
    Ok(RunSummary {
        input: request.input.clone(),
        output_dir: request.output_dir.clone(),
        data_file: paths.data,
        schema_file: paths.schema,
        stats: graphs.stats,
    })
}

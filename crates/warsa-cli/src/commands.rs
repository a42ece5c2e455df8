use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::Level;

use warsa_cli::pipeline::{ConvertRequest, run_conversion};
use warsa_cli::types::RunSummary;
use warsa_ingest::IngestOptions;
use warsa_map::{AnnotationPolicy, ConversionConfig, MappingTable};
use warsa_model::{LabelLanguage, vocab};

use crate::cli::{ColumnsArgs, ConvertArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_convert(args: &ConvertArgs, log_level: Level) -> Result<RunSummary> {
    let annotations = if args.reify {
        AnnotationPolicy::Reify
    } else {
        AnnotationPolicy::Discard
    };
    let config = ConversionConfig::default()
        .with_log_level(log_level)
        .with_annotations(annotations)
        .with_label_language(args.label_language.into());
    let request = ConvertRequest {
        ingest: IngestOptions::with_delimiter(args.delimiter)?,
        config,
        ..ConvertRequest::new(&args.input, &args.output_dir)
    };

    let summary = run_conversion(&request)?;
    if let Some(path) = &args.report {
        summary.write_json(path)?;
    }
    Ok(summary)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let language = LabelLanguage::from(args.label_language);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Predicate"),
        header_cell("Converter"),
        header_cell("Separator"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for descriptor in &MappingTable::prisoners() {
        let separator = match &descriptor.separator {
            Some(separator) if descriptor.inline_sources => {
                Cell::new(format!("{:?} + sources", separator.trim()))
            }
            Some(separator) => Cell::new(format!("{:?}", separator.trim())),
            None => dim_cell("-"),
        };
        let label = descriptor
            .label(language)
            .map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![
            Cell::new(&descriptor.column),
            Cell::new(vocab::compact(descriptor.predicate.as_str())),
            Cell::new(descriptor.converter),
            separator,
            label,
        ]);
    }
    println!("{table}");
    Ok(())
}

use std::fs;
use std::path::Path;

use warsa_cli::pipeline::{ConvertRequest, run_conversion};
use warsa_map::{AnnotationPolicy, MappingTable};
use warsa_model::LabelLanguage;

/// Write a register table with every mapped column; each row fills the named columns.
fn write_register(path: &Path, rows: &[(&str, Vec<(&str, &str)>)]) {
    let columns: Vec<String> = MappingTable::prisoners()
        .columns()
        .map(ToString::to_string)
        .collect();
    let mut text = format!("nimi\t{}\n", columns.join("\t"));
    for (name, cells) in rows {
        let values: Vec<&str> = columns
            .iter()
            .map(|column| {
                cells
                    .iter()
                    .find(|(key, _)| *key == column.as_str())
                    .map_or("", |(_, value)| *value)
            })
            .collect();
        text.push_str(&format!("{name}\t{}\n", values.join("\t")));
    }
    fs::write(path, text).expect("write register");
}

#[test]
fn converts_register_to_turtle_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("vangit.tsv");
    write_register(
        &input,
        &[(
            "Meikäläinen Matti",
            vec![("syntymäaika", "1.1.1920"), ("ammatti", "Maanviljelijä")],
        )],
    );
    let output_dir = dir.path().join("out");

    let summary =
        run_conversion(&ConvertRequest::new(&input, &output_dir)).expect("conversion runs");
    assert_eq!(summary.stats.rows, 1);
    assert_eq!(summary.stats.data_statements, 6);
    assert_eq!(summary.stats.schema_statements, 72);
    assert_eq!(summary.data_file, output_dir.join("prisoners.ttl"));

    let data = fs::read_to_string(&summary.data_file).expect("read data");
    assert!(data.contains("p:prisoner_0"), "{data}");
    assert!(data.contains("1920-01-01"), "{data}");
    assert!(data.contains("ps:PrisonerOfWar"), "{data}");

    let schema = fs::read_to_string(&summary.schema_file).expect("read schema");
    assert!(schema.contains("ps:birth_date"), "{schema}");
    assert!(schema.contains("@fi"), "{schema}");
}

#[test]
fn reify_and_english_labels_are_configurable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("vangit.tsv");
    write_register(
        &input,
        &[(
            "Korhonen Eino",
            vec![("syntymäpaikka", "Helsinki (Smith, Jones)")],
        )],
    );
    let mut request = ConvertRequest::new(&input, dir.path().join("out"));
    request.config = request
        .config
        .with_annotations(AnnotationPolicy::Reify)
        .with_label_language(LabelLanguage::En);

    let summary = run_conversion(&request).expect("conversion runs");
    assert_eq!(summary.stats.annotations, 1);
    assert_eq!(summary.stats.reified, 1);
    // name (3), type, birth place, reified statement (6)
    assert_eq!(summary.stats.data_statements, 11);

    let data = fs::read_to_string(&summary.data_file).expect("read data");
    assert!(data.contains("Smith"), "{data}");
    let schema = fs::read_to_string(&summary.schema_file).expect("read schema");
    assert!(schema.contains("@en"), "{schema}");
    assert!(!schema.contains("@fi"), "{schema}");
}

#[test]
fn missing_columns_abort_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("vangit.tsv");
    fs::write(&input, "nimi\tammatti\nKorhonen Eino\tSeppä\n").expect("write register");
    let output_dir = dir.path().join("out");

    let error = run_conversion(&ConvertRequest::new(&input, &output_dir))
        .expect_err("columns are missing");
    let message = format!("{error:#}");
    assert!(message.contains("syntymäaika"), "{message}");
    assert!(!message.contains("ammatti,"), "{message}");
    assert!(!output_dir.exists());
}

#[test]
fn blank_identity_names_the_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("vangit.tsv");
    write_register(
        &input,
        &[
            ("Korhonen Eino", vec![]),
            (" ", vec![("ammatti", "Seppä")]),
        ],
    );
    let output_dir = dir.path().join("out");

    let error = run_conversion(&ConvertRequest::new(&input, &output_dir))
        .expect_err("identity is blank");
    assert!(format!("{error:#}").contains("row 1"));
    assert!(!output_dir.exists());
}

#[test]
fn report_is_written_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("vangit.tsv");
    write_register(&input, &[("Virtanen Matti", vec![])]);

    let summary = run_conversion(&ConvertRequest::new(&input, dir.path().join("out")))
        .expect("conversion runs");
    let report = dir.path().join("report.json");
    summary.write_json(&report).expect("write report");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report"))
            .expect("valid json");
    assert_eq!(json["rows"], 1);
    assert_eq!(json["data_statements"], 4);
    assert!(
        json["data_file"]
            .as_str()
            .is_some_and(|path| path.ends_with("prisoners.ttl"))
    );
}

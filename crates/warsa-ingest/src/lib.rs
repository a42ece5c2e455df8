pub mod csv_table;

pub use csv_table::{CsvTable, IngestOptions, read_csv_table, read_csv_table_with_options};

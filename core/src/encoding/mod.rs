pub mod csv;

pub use csv::{quote_text, to_csv, to_csv_records, CsvRow};

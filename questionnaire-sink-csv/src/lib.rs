//! # questionnaire-sink-csv
//!
//! Append-only CSV file sink for questionnaire records.
//!
//! The file is UTF-8 with a byte order mark so spreadsheet programs pick the
//! right encoding. The header row is written only when the file is absent or
//! empty; every later append adds exactly one row.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::Session;
//! use questionnaire_sink_csv::CsvFileSink;
//!
//! let sink = CsvFileSink::new("datos_encuesta.csv");
//! let record = session.submit(&sink, chrono::Local::now().naive_local())?;
//! ```

mod sink;

pub use sink::{CsvFileSink, UTF8_BOM};

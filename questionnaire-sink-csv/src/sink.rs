use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Context;
use log::{debug, info};
use questionnaire::{NOT_APPLICABLE, Record, RecordSink, SinkError};

/// Byte order mark written at the start of a new file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Appends records to a delimited text file.
///
/// Each row is serialized in memory and written with a single append, and
/// appends through the same sink are serialized, so concurrent sessions never
/// interleave partial rows.
#[derive(Debug)]
pub struct CsvFileSink {
    path: PathBuf,
    not_applicable: String,
    delimiter: u8,
    lock: Mutex<()>,
}

impl CsvFileSink {
    /// Create a sink writing to `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            not_applicable: NOT_APPLICABLE.to_string(),
            delimiter: b',',
            lock: Mutex::new(()),
        }
    }

    /// Set how not-applicable cells are written.
    pub fn with_not_applicable(mut self, marker: impl Into<String>) -> Self {
        self.not_applicable = marker.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize one record, preceded by the BOM and header for a new file.
    fn encode(&self, record: &Record, new_file: bool) -> Result<Vec<u8>, SinkError> {
        let mut buf = Vec::new();
        if new_file {
            buf.extend_from_slice(UTF8_BOM);
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(buf);
        if new_file {
            writer.write_record(record.header()).map_err(SinkError::write)?;
        }
        writer
            .write_record(record.to_row(&self.not_applicable))
            .map_err(SinkError::write)?;
        writer
            .into_inner()
            .map_err(|err| SinkError::write(err.into_error()))
    }
}

impl RecordSink for CsvFileSink {
    fn append(&self, record: &Record) -> Result<(), SinkError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))
            .map_err(SinkError::Unreachable)?;

        let new_file = file
            .metadata()
            .with_context(|| format!("reading metadata of {}", self.path.display()))
            .map_err(SinkError::Write)?
            .len()
            == 0;
        if new_file {
            debug!("Writing header to new file {}", self.path.display());
        }

        let bytes = self.encode(record, new_file)?;
        file.write_all(&bytes)
            .and_then(|()| file.sync_data())
            .with_context(|| format!("appending to {}", self.path.display()))
            .map_err(SinkError::Write)?;

        info!("Appended record to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use questionnaire::{Cell, RecordField};
    use std::fs;

    fn record(victim: &str, hour: Cell) -> Record {
        let at = NaiveDate::from_ymd_opt(2024, 11, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Record::new(
            at,
            vec![
                RecordField {
                    id: "victima_asalto".into(),
                    cell: Cell::value(victim),
                },
                RecordField {
                    id: "hora_asalto".into(),
                    cell: hour,
                },
            ],
        )
    }

    #[test]
    fn first_append_writes_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.csv");
        let sink = CsvFileSink::new(&path);

        sink.append(&record("No", Cell::NotApplicable)).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "timestamp,victima_asalto,hora_asalto\n2024-11-02 08:00:00.000000,No,N/A\n"
        );
    }

    #[test]
    fn later_appends_never_repeat_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.csv");
        let sink = CsvFileSink::new(&path);

        sink.append(&record("No", Cell::NotApplicable)).unwrap();
        sink.append(&record("Sí", Cell::value("14:30, aprox."))).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("timestamp").count(), 1);
        assert_eq!(text.matches('\u{feff}').count(), 1);
        assert!(text.ends_with("Sí,\"14:30, aprox.\"\n"));
    }

    #[test]
    fn existing_file_is_only_appended_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.csv");
        fs::write(&path, "timestamp,victima_asalto,hora_asalto\n").unwrap();

        CsvFileSink::new(&path)
            .append(&record("No", Cell::NotApplicable))
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "timestamp,victima_asalto,hora_asalto\n2024-11-02 08:00:00.000000,No,N/A\n"
        );
    }

    #[test]
    fn custom_marker_and_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.csv");
        let sink = CsvFileSink::new(&path)
            .with_not_applicable("NA")
            .with_delimiter(b';');

        sink.append(&record("No", Cell::NotApplicable)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("2024-11-02 08:00:00.000000;No;NA\n"));
    }

    #[test]
    fn missing_directory_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvFileSink::new(dir.path().join("missing").join("datos.csv"));

        let err = sink.append(&record("No", Cell::NotApplicable)).unwrap_err();
        assert!(matches!(err, SinkError::Unreachable(_)));
    }

    #[test]
    fn concurrent_appends_keep_rows_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.csv");
        let sink = CsvFileSink::new(&path);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        sink.append(&record("Sí", Cell::value("noche"))).unwrap();
                    }
                });
            }
        });

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 81);
        assert!(
            lines[1..]
                .iter()
                .all(|l| *l == "2024-11-02 08:00:00.000000,Sí,noche")
        );
    }
}

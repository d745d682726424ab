use log::info;
use questionnaire::{NOT_APPLICABLE, Record, RecordSink, SinkError};

/// Appends rows to a remote spreadsheet.
pub trait SheetsClient {
    /// Append one row after the last row of the table found at `range`.
    fn append_row(&self, spreadsheet_id: &str, range: &str, row: &[String])
    -> Result<(), SinkError>;
}

/// The A1 range addressing the table of a worksheet, e.g. `'Respuestas'!A1`.
pub fn a1_range(worksheet: &str) -> String {
    format!("'{}'!A1", worksheet.replace('\'', "''"))
}

/// Sink writing one row per record to a fixed spreadsheet and worksheet.
///
/// The worksheet is expected to exist with its header row in place.
#[derive(Debug)]
pub struct SpreadsheetSink<C> {
    client: C,
    spreadsheet_id: String,
    worksheet: String,
    not_applicable: String,
}

impl<C: SheetsClient> SpreadsheetSink<C> {
    pub fn new(client: C, spreadsheet_id: impl Into<String>, worksheet: impl Into<String>) -> Self {
        Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
            worksheet: worksheet.into(),
            not_applicable: NOT_APPLICABLE.to_string(),
        }
    }

    /// Set how not-applicable cells are written.
    pub fn with_not_applicable(mut self, marker: impl Into<String>) -> Self {
        self.not_applicable = marker.into();
        self
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }
}

impl<C: SheetsClient> RecordSink for SpreadsheetSink<C> {
    fn append(&self, record: &Record) -> Result<(), SinkError> {
        let row = record.to_row(&self.not_applicable);
        self.client
            .append_row(&self.spreadsheet_id, &a1_range(&self.worksheet), &row)?;
        info!(
            "Appended record to spreadsheet {} ({})",
            self.spreadsheet_id, self.worksheet
        );
        Ok(())
    }
}

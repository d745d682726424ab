use chrono::NaiveDateTime;

use crate::QuestionId;

/// Name of the leading record column holding the submission time.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// How sinks render the submission time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Default rendering of [`Cell::NotApplicable`].
pub const NOT_APPLICABLE: &str = "N/A";

/// One value of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// The question was asked. The string may be empty (asked, left blank).
    Value(String),

    /// The question was not asked because a reveal condition did not hold.
    NotApplicable,
}

impl Cell {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotApplicable => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    /// Render for a tabular sink, using `marker` for not-applicable cells.
    pub fn render<'a>(&'a self, marker: &'a str) -> &'a str {
        match self {
            Self::Value(v) => v,
            Self::NotApplicable => marker,
        }
    }
}

/// A named cell of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub id: QuestionId,
    pub cell: Cell,
}

/// The fixed-schema output of one submission.
///
/// Holds the submission time followed by exactly one cell per catalog
/// question, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    submitted_at: NaiveDateTime,
    fields: Vec<RecordField>,
}

impl Record {
    pub fn new(submitted_at: NaiveDateTime, fields: Vec<RecordField>) -> Self {
        Self {
            submitted_at,
            fields,
        }
    }

    pub fn submitted_at(&self) -> NaiveDateTime {
        self.submitted_at
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Number of question cells (the timestamp is not counted).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the cell of a question.
    pub fn get(&self, id: &QuestionId) -> Option<&Cell> {
        self.fields.iter().find(|f| &f.id == id).map(|f| &f.cell)
    }

    /// Column names: the timestamp column, then every question id.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(TIMESTAMP_COLUMN.to_string())
            .chain(self.fields.iter().map(|f| f.id.to_string()))
            .collect()
    }

    /// The submission time as written by sinks.
    pub fn timestamp(&self) -> String {
        self.submitted_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The record as one tabular row, not-applicable cells rendered as `marker`.
    pub fn to_row(&self, marker: &str) -> Vec<String> {
        std::iter::once(self.timestamp())
            .chain(self.fields.iter().map(|f| f.cell.render(marker).to_string()))
            .collect()
    }
}

use crate::{Record, SinkError};

/// A persistence destination for records.
///
/// Sinks append one row per call and are not transactional: an error means the
/// record must be treated as not persisted. Sinks take `&self` because several
/// sessions may append to the same destination concurrently; implementations
/// must not corrupt rows that were already written.
pub trait RecordSink {
    /// Append one record.
    fn append(&self, record: &Record) -> Result<(), SinkError>;
}

impl<S: RecordSink + ?Sized> RecordSink for &S {
    fn append(&self, record: &Record) -> Result<(), SinkError> {
        (**self).append(record)
    }
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn append(&self, record: &Record) -> Result<(), SinkError> {
        (**self).append(record)
    }
}

//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Catalog` and `Section` - The immutable, ordered question catalog
//! - `Question`, `QuestionKind` and `RevealCondition` - Individual questions and when they show up
//! - `AnswerSet`, `AnswerValue` and `QuestionId` - Answers collected during a session
//! - `Record` and `Cell` - The flat, fixed-schema output of one submission
//! - `RecordSink` trait - For implementing persistence destinations

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::AnswerSet;

mod reveal;
pub use reveal::RevealCondition;

mod question;
pub use question::{
    ChoiceOption, ChoiceQuestion, Question, QuestionKind, ScalePoint, ScaleQuestion, TextQuestion,
};

mod catalog;
pub use catalog::{Catalog, Questions, Section};

mod record;
pub use record::{Cell, NOT_APPLICABLE, Record, RecordField, TIMESTAMP_COLUMN, TIMESTAMP_FORMAT};

mod error;
pub use error::{
    AnswerError, CatalogError, IncompleteSubmission, SinkError, SubmissionError,
};

mod traits;
pub use traits::RecordSink;

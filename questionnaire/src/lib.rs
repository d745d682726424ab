//! # questionnaire
//!
//! Conditional-reveal questionnaires. Backend-agnostic.
//!
//! A [`Catalog`] describes every question a form can ask. Follow-up questions
//! are only active while their parent's answer satisfies their
//! [`RevealCondition`]. A [`Session`] collects answers for one respondent,
//! drops answers whose questions become hidden, and on submit assembles one
//! flat [`Record`] that is handed to a [`RecordSink`].
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use questionnaire::{
//!     AnswerValue, Catalog, Cell, MemorySink, Question, QuestionId, RevealCondition, Session,
//! };
//!
//! let catalog = Catalog::from_questions(vec![
//!     Question::single_choice("victim", "Were you robbed?", ["Yes", "No"]).with_child(
//!         Question::free_text("when", "When?").revealed_when(RevealCondition::choice_is("Yes")),
//!     ),
//! ]);
//!
//! let mut session = Session::new(&catalog);
//! session.answer("victim", AnswerValue::choice("No")).unwrap();
//!
//! let sink = MemorySink::new();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let record = session.submit(&sink, now).unwrap();
//!
//! assert_eq!(record.get(&QuestionId::new("when")), Some(&Cell::NotApplicable));
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! ## Backends
//!
//! Input surfaces implement [`FormBackend`]; persistence destinations implement
//! [`RecordSink`]:
//! - `questionnaire-wizard-dialoguer` - terminal wizard via dialoguer
//! - `questionnaire-sink-csv` - append-only CSV file
//! - `questionnaire-sink-sheets` - remote spreadsheet

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod resolver;
pub use resolver::{VisibilityMap, active_questions, resolve_visibility};

mod assembler;
pub use assembler::assemble;

mod session;
pub use session::Session;

mod backend;
pub use backend::FormBackend;

mod memory_sink;
pub use memory_sink::MemorySink;

// Test backend for filling sessions without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};

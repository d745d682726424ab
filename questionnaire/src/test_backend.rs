//! Test backend for filling sessions without user interaction.
//!
//! `TestBackend` answers questions from a pre-defined map, walking the catalog
//! the way an interactive backend would: each question, then the follow-ups
//! its answer reveals.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{
//!     AnswerValue, Catalog, FormBackend, Question, QuestionId, RevealCondition, Session, TestBackend,
//! };
//!
//! let catalog = Catalog::from_questions(vec![
//!     Question::single_choice("armed", "Weapons?", ["Yes", "No"]).with_child(
//!         Question::free_text("weapon", "Which?").revealed_when(RevealCondition::choice_is("Yes")),
//!     ),
//! ]);
//!
//! let mut session = Session::new(&catalog);
//! TestBackend::new()
//!     .with_choice("armed", "No")
//!     .with_text("weapon", "ignored: never revealed")
//!     .collect(&mut session)
//!     .unwrap();
//!
//! assert_eq!(session.get(&QuestionId::new("armed")), Some(&AnswerValue::choice("No")));
//! assert!(session.get(&QuestionId::new("weapon")).is_none());
//! ```

use std::collections::HashMap;

use crate::{AnswerError, AnswerValue, FormBackend, Question, QuestionId, Session};

/// A test backend that answers with pre-configured values.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: HashMap<QuestionId, AnswerValue>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing answer for required question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Answer for '{id}' rejected: {source}")]
    Rejected {
        id: QuestionId,
        #[source]
        source: AnswerError,
    },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Add an answer for a question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: AnswerValue) -> Self {
        self.answers.insert(id.into(), value);
        self
    }

    /// Add a choice answer.
    pub fn with_choice(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, AnswerValue::Choice(value.into()))
    }

    /// Add a text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, AnswerValue::Text(value.into()))
    }

    /// Add a scale answer.
    pub fn with_scale(self, id: impl Into<QuestionId>, value: i64) -> Self {
        self.with_answer(id, AnswerValue::Scale(value))
    }

    fn fill(&self, question: &Question, session: &mut Session<'_>) -> Result<(), TestBackendError> {
        let id = question.id();
        match self.answers.get(id) {
            Some(value) => {
                session
                    .answer(id, value.clone())
                    .map_err(|source| TestBackendError::Rejected {
                        id: id.clone(),
                        source,
                    })?;
            }
            None if question.is_required() => {
                return Err(TestBackendError::MissingAnswer(id.clone()));
            }
            None => {}
        }

        for child in question.children() {
            if session.is_active(child.id()) {
                self.fill(child, session)?;
            }
        }
        Ok(())
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(&self, session: &mut Session<'_>) -> Result<(), Self::Error> {
        let catalog = session.catalog();
        for question in catalog.questions() {
            self.fill(question, session)?;
        }
        Ok(())
    }
}

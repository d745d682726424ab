use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::assembler::is_answered;
use crate::{
    AnswerError, AnswerSet, AnswerValue, Catalog, IncompleteSubmission, Question, QuestionId,
    Record, RecordSink, SubmissionError, VisibilityMap, active_questions, assemble,
    resolve_visibility,
};

/// One respondent filling in one form.
///
/// A session owns the answer set for its respondent; nothing is shared
/// between sessions. Every accepted answer re-runs visibility resolution and
/// drops answers of questions that became hidden, so a stale answer never
/// resurfaces when a branch is re-opened. After a successful submit the
/// session is closed and rejects further answers.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    answers: AnswerSet,
    submitted: bool,
}

impl<'c> Session<'c> {
    /// Start an empty session.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            answers: AnswerSet::new(),
            submitted: false,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Get the current answer of a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Active questions in catalog order.
    pub fn active_questions(&self) -> Vec<&'c Question> {
        active_questions(self.catalog, &self.answers)
    }

    pub fn visibility(&self) -> VisibilityMap {
        resolve_visibility(self.catalog, &self.answers)
    }

    pub fn is_active(&self, id: &QuestionId) -> bool {
        self.visibility().is_active(id)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Record an answer.
    ///
    /// Returns the ids whose answers were dropped because this answer hid them.
    pub fn answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: AnswerValue,
    ) -> Result<Vec<QuestionId>, AnswerError> {
        let id = id.into();
        let question = self.answerable(&id)?;
        question.check_answer(&value)?;

        debug!("Answer {id} = {value:?}");
        self.answers.insert(id, value);
        Ok(self.drop_hidden_answers())
    }

    /// Withdraw an answer, which also hides that question's follow-ups.
    pub fn clear(&mut self, id: impl Into<QuestionId>) -> Result<Vec<QuestionId>, AnswerError> {
        let id = id.into();
        self.answerable(&id)?;
        self.answers.remove(&id);
        Ok(self.drop_hidden_answers())
    }

    /// Active required questions that still have no answer.
    pub fn missing(&self) -> Vec<QuestionId> {
        self.active_questions()
            .into_iter()
            .filter(|q| {
                q.is_required()
                    && !self
                        .answers
                        .get(q.id())
                        .is_some_and(|value| is_answered(q, value))
            })
            .map(|q| q.id().clone())
            .collect()
    }

    /// Assemble the record without submitting it.
    pub fn preview(&self, now: NaiveDateTime) -> Result<Record, IncompleteSubmission> {
        assemble(self.catalog, &self.answers, now)
    }

    /// Assemble the record and append it to `sink`.
    ///
    /// The record is fully assembled before the sink is called: an incomplete
    /// session never reaches the sink. On a sink failure the session stays open
    /// so the respondent can submit again.
    pub fn submit<S: RecordSink + ?Sized>(
        &mut self,
        sink: &S,
        now: NaiveDateTime,
    ) -> Result<Record, SubmissionError> {
        if self.submitted {
            return Err(SubmissionError::AlreadySubmitted);
        }

        let record = self.preview(now)?;
        if let Err(err) = sink.append(&record) {
            warn!("Submission not persisted: {err}");
            return Err(err.into());
        }

        info!("Submission persisted at {}", record.timestamp());
        self.submitted = true;
        Ok(record)
    }

    /// Consume the session, keeping its answers.
    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }

    fn answerable(&self, id: &QuestionId) -> Result<&'c Question, AnswerError> {
        if self.submitted {
            return Err(AnswerError::SessionClosed);
        }
        let question = self
            .catalog
            .get(id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.clone()))?;
        if !self.is_active(id) {
            return Err(AnswerError::Inactive(id.clone()));
        }
        Ok(question)
    }

    fn drop_hidden_answers(&mut self) -> Vec<QuestionId> {
        let visibility = resolve_visibility(self.catalog, &self.answers);
        let hidden: Vec<QuestionId> = self
            .catalog
            .iter()
            .map(Question::id)
            .filter(|id| self.answers.contains(id) && !visibility.is_active(id))
            .cloned()
            .collect();
        for id in &hidden {
            debug!("Dropping answer of hidden question {id}");
            self.answers.remove(id);
        }
        hidden
    }
}

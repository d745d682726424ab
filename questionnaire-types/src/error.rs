use crate::QuestionId;

/// A rejected answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question '{0}' is not active")]
    Inactive(QuestionId),

    #[error("'{value}' is not an option of question '{id}'")]
    InvalidOption { id: QuestionId, value: String },

    #[error("{value} is outside the scale of question '{id}' ({min}-{max})")]
    OutOfRange {
        id: QuestionId,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    KindMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("The session was already submitted")]
    SessionClosed,
}

/// A catalog that breaks a build-time invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Question with an empty id")]
    EmptyId,

    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("Question '{0}' has no options")]
    NoOptions(QuestionId),

    #[error("Question '{id}' lists option '{value}' twice")]
    DuplicateOption { id: QuestionId, value: String },

    #[error("Scale of question '{0}' is not strictly ascending")]
    UnorderedScale(QuestionId),

    #[error("Top-level question '{0}' has a reveal condition")]
    TopLevelCondition(QuestionId),

    #[error("Follow-up question '{0}' has no reveal condition")]
    MissingCondition(QuestionId),

    #[error("Question '{id}' is revealed by '{value}', which its parent never produces")]
    UnreachableCondition { id: QuestionId, value: String },

    #[error("Question '{id}' is revealed by a {actual} value, but its parent is answered with {expected}")]
    ConditionKindMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Question '{0}' cannot override its parent")]
    InvalidOverride(QuestionId),
}

/// Required active questions left unanswered at submit time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Incomplete submission, unanswered: {}", .missing.iter().map(QuestionId::as_str).collect::<Vec<_>>().join(", "))]
pub struct IncompleteSubmission {
    pub missing: Vec<QuestionId>,
}

/// Failure to persist a record.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The destination could not be reached.
    #[error("Sink unreachable: {0}")]
    Unreachable(#[source] anyhow::Error),

    /// The destination rejected our credentials.
    #[error("Sink authentication failed: {0}")]
    Auth(#[source] anyhow::Error),

    /// The row could not be written.
    #[error("Failed to write record: {0}")]
    Write(#[source] anyhow::Error),
}

impl SinkError {
    pub fn unreachable(err: impl Into<anyhow::Error>) -> Self {
        Self::Unreachable(err.into())
    }

    pub fn auth(err: impl Into<anyhow::Error>) -> Self {
        Self::Auth(err.into())
    }

    pub fn write(err: impl Into<anyhow::Error>) -> Self {
        Self::Write(err.into())
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Write(err.into())
    }
}

/// Why a submission was not persisted.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Nothing was written; the user must complete the form.
    #[error(transparent)]
    Incomplete(#[from] IncompleteSubmission),

    /// Nothing was persisted; the user may retry.
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("The session was already submitted")]
    AlreadySubmitted,
}

impl SubmissionError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }
}

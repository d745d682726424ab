use std::fmt;

/// A single answer given to a question.
///
/// This is the value stored in `AnswerSet` for each answered question.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnswerValue {
    /// Free text (from FreeText questions). May be empty: asked and left blank.
    Text(String),

    /// The value of the chosen option (from SingleChoice questions).
    Choice(String),

    /// The selected point of a numeric scale (from Scale questions).
    Scale(i64),
}

impl AnswerValue {
    /// Create a choice answer.
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    /// Create a text answer.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a chosen option value.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get this value as a scale point.
    pub fn as_scale(&self) -> Option<i64> {
        match self {
            Self::Scale(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this is an empty text answer.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Get the kind name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Scale(_) => "Scale",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Choice(s) => f.write_str(s),
            Self::Scale(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Scale(n)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        Self::Scale(i64::from(n))
    }
}

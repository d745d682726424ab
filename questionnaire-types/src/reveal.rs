use crate::AnswerValue;

/// Condition on a parent's answer that reveals a follow-up question.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealCondition {
    /// The parent answer equals this value.
    Equals(AnswerValue),

    /// The parent answer equals any of these values.
    AnyOf(Vec<AnswerValue>),

    /// The inner condition does not hold (an answer must still be present).
    Not(Box<RevealCondition>),
}

impl RevealCondition {
    /// Reveal when the parent's chosen option is `value`.
    pub fn choice_is(value: impl Into<String>) -> Self {
        Self::Equals(AnswerValue::choice(value))
    }

    /// Reveal when the parent's chosen option is any of `values`.
    pub fn choice_in<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(values.into_iter().map(AnswerValue::choice).collect())
    }

    /// Reveal when the parent's scale point is any of `points`.
    pub fn scale_in(points: impl IntoIterator<Item = i64>) -> Self {
        Self::AnyOf(points.into_iter().map(AnswerValue::Scale).collect())
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Check the condition against the parent's current answer.
    pub fn matches(&self, answer: &AnswerValue) -> bool {
        match self {
            Self::Equals(expected) => expected == answer,
            Self::AnyOf(expected) => expected.contains(answer),
            Self::Not(inner) => !inner.matches(answer),
        }
    }

    /// Every concrete value this condition mentions.
    pub fn referenced_values(&self) -> Vec<&AnswerValue> {
        match self {
            Self::Equals(value) => vec![value],
            Self::AnyOf(values) => values.iter().collect(),
            Self::Not(inner) => inner.referenced_values(),
        }
    }
}

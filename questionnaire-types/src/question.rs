use crate::{AnswerError, AnswerValue, QuestionId, RevealCondition};

/// A single question in a catalog.
///
/// Questions form a tree: a question owns its follow-up questions, and each
/// follow-up carries the condition on its parent's answer that reveals it.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Stable id, also the record column name.
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of question (determines input type and accepted answers).
    kind: QuestionKind,

    /// Whether an active question must be answered before submitting.
    required: bool,

    /// Condition on the parent's answer. `None` for top-level questions.
    reveal: Option<RevealCondition>,

    /// When active and non-blank, this answer replaces the parent's value in the record.
    overrides_parent: bool,

    /// Follow-up questions, in display order.
    children: Vec<Question>,
}

impl Question {
    /// Create a new question. Choice and scale questions are required, free text is optional.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        let required = !matches!(kind, QuestionKind::FreeText(_));
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            required,
            reveal: None,
            overrides_parent: false,
            children: Vec::new(),
        }
    }

    /// A single-choice question whose option values double as labels.
    pub fn single_choice<I, S>(id: impl Into<QuestionId>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            prompt,
            QuestionKind::SingleChoice(ChoiceQuestion::from_values(options)),
        )
    }

    /// A single-line free-text question.
    pub fn free_text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::FreeText(TextQuestion::single_line()))
    }

    /// A multi-line free-text question.
    pub fn long_text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::FreeText(TextQuestion::multiline()))
    }

    /// A numeric scale question.
    pub fn scale(id: impl Into<QuestionId>, prompt: impl Into<String>, scale: ScaleQuestion) -> Self {
        Self::new(id, prompt, QuestionKind::Scale(scale))
    }

    /// Only show this question when the parent's answer satisfies `condition`.
    pub fn revealed_when(mut self, condition: RevealCondition) -> Self {
        self.reveal = Some(condition);
        self
    }

    /// Add a follow-up question.
    pub fn with_child(mut self, child: Question) -> Self {
        self.children.push(child);
        self
    }

    /// Add several follow-up questions.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Question>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Let this answer replace the parent's value in the record ("specify other").
    pub fn overriding_parent(mut self) -> Self {
        self.overrides_parent = true;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the reveal condition, if this is a follow-up question.
    pub fn reveal_condition(&self) -> Option<&RevealCondition> {
        self.reveal.as_ref()
    }

    pub fn overrides_parent(&self) -> bool {
        self.overrides_parent
    }

    /// Get the follow-up questions.
    pub fn children(&self) -> &[Question] {
        &self.children
    }

    /// Whether this question has follow-ups.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check that `value` is an acceptable answer to this question.
    pub fn check_answer(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match (&self.kind, value) {
            (QuestionKind::SingleChoice(choice), AnswerValue::Choice(v)) => {
                if choice.contains(v) {
                    Ok(())
                } else {
                    Err(AnswerError::InvalidOption {
                        id: self.id.clone(),
                        value: v.clone(),
                    })
                }
            }
            (QuestionKind::Scale(scale), AnswerValue::Scale(n)) => {
                if scale.contains(*n) {
                    Ok(())
                } else {
                    Err(AnswerError::OutOfRange {
                        id: self.id.clone(),
                        value: *n,
                        min: scale.min().unwrap_or_default(),
                        max: scale.max().unwrap_or_default(),
                    })
                }
            }
            (QuestionKind::FreeText(_), AnswerValue::Text(_)) => Ok(()),
            (kind, other) => Err(AnswerError::KindMismatch {
                id: self.id.clone(),
                expected: kind.answer_type_name(),
                actual: other.type_name(),
            }),
        }
    }
}

/// The kind of question, determining input type and accepted answers.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick exactly one option from an ordered set.
    SingleChoice(ChoiceQuestion),

    /// Free text, single- or multi-line.
    FreeText(TextQuestion),

    /// Numeric scale with a label per point.
    Scale(ScaleQuestion),
}

impl QuestionKind {
    /// Short name of the kind, e.g. `"single_choice"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleChoice(_) => "single_choice",
            Self::FreeText(_) => "free_text",
            Self::Scale(_) => "scale",
        }
    }

    /// The `AnswerValue` variant name this kind accepts.
    pub fn answer_type_name(&self) -> &'static str {
        match self {
            Self::SingleChoice(_) => "Choice",
            Self::FreeText(_) => "Text",
            Self::Scale(_) => "Scale",
        }
    }

    /// Every answer this kind can produce, if the set is finite.
    pub fn possible_answers(&self) -> Option<Vec<AnswerValue>> {
        match self {
            Self::SingleChoice(choice) => Some(
                choice
                    .options()
                    .iter()
                    .map(|o| AnswerValue::choice(o.value.clone()))
                    .collect(),
            ),
            Self::Scale(scale) => Some(
                scale
                    .points()
                    .iter()
                    .map(|p| AnswerValue::Scale(p.value))
                    .collect(),
            ),
            Self::FreeText(_) => None,
        }
    }
}

/// One option of a single-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    /// Value stored in answers and records.
    pub value: String,

    /// Label shown to the user.
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Configuration for a single-choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// The available options, in display order.
    pub options: Vec<ChoiceOption>,
}

impl ChoiceQuestion {
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }

    /// Options whose labels are their values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: values.into_iter().map(ChoiceOption::plain).collect(),
        }
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Find an option by value.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    /// Index of the option with the given value.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuestion {
    /// Show a text area / editor instead of a single line.
    pub multiline: bool,
}

impl TextQuestion {
    pub fn single_line() -> Self {
        Self { multiline: false }
    }

    pub fn multiline() -> Self {
        Self { multiline: true }
    }
}

/// One point of a numeric scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePoint {
    pub value: i64,
    pub label: String,
}

/// Configuration for a numeric scale question, e.g. 1 ("Muy Inseguro") to 5 ("Muy Seguro").
///
/// Answers store the bare point; the combined label (`"3 - Neutral"`) is only
/// produced when a record is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleQuestion {
    /// Points in ascending order.
    pub points: Vec<ScalePoint>,
}

impl ScaleQuestion {
    pub fn new(points: Vec<ScalePoint>) -> Self {
        Self { points }
    }

    /// Consecutive points starting at `min`, one per label.
    pub fn from_labels<I, S>(min: i64, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let points = labels
            .into_iter()
            .zip(min..)
            .map(|(label, value)| ScalePoint {
                value,
                label: label.into(),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[ScalePoint] {
        &self.points
    }

    pub fn min(&self) -> Option<i64> {
        self.points.iter().map(|p| p.value).min()
    }

    pub fn max(&self) -> Option<i64> {
        self.points.iter().map(|p| p.value).max()
    }

    /// Find a point by value.
    pub fn point(&self, value: i64) -> Option<&ScalePoint> {
        self.points.iter().find(|p| p.value == value)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.point(value).is_some()
    }

    /// The combined display label, e.g. `"3 - Neutral"`.
    pub fn display_label(&self, value: i64) -> Option<String> {
        self.point(value).map(|p| format!("{} - {}", p.value, p.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security_scale() -> ScaleQuestion {
        ScaleQuestion::from_labels(
            1,
            ["Muy Inseguro", "Inseguro", "Neutral", "Seguro", "Muy Seguro"],
        )
    }

    #[test]
    fn scale_display_label_combines_value_and_label() {
        let scale = security_scale();
        assert_eq!(scale.display_label(3).as_deref(), Some("3 - Neutral"));
        assert_eq!(scale.display_label(6), None);
        assert_eq!(scale.min(), Some(1));
        assert_eq!(scale.max(), Some(5));
    }

    #[test]
    fn free_text_defaults_to_optional() {
        assert!(!Question::free_text("hora_asalto", "¿A qué hora?").is_required());
        assert!(Question::single_choice("uso_armas", "¿Usaron armas?", ["Sí", "No"]).is_required());
        assert!(Question::free_text("x", "?").required().is_required());
    }

    #[test]
    fn check_answer_validates_options() {
        let q = Question::single_choice("uso_armas", "¿Usaron armas?", ["Sí", "No"]);
        assert!(q.check_answer(&AnswerValue::choice("Sí")).is_ok());
        assert!(matches!(
            q.check_answer(&AnswerValue::choice("Tal vez")),
            Err(AnswerError::InvalidOption { .. })
        ));
        assert!(matches!(
            q.check_answer(&AnswerValue::text("Sí")),
            Err(AnswerError::KindMismatch {
                expected: "Choice",
                actual: "Text",
                ..
            })
        ));
    }

    #[test]
    fn check_answer_validates_scale_range() {
        let q = Question::scale("seguridad", "¿Qué tan seguro?", security_scale());
        assert!(q.check_answer(&AnswerValue::Scale(5)).is_ok());
        assert!(matches!(
            q.check_answer(&AnswerValue::Scale(0)),
            Err(AnswerError::OutOfRange { min: 1, max: 5, .. })
        ));
    }

    #[test]
    fn builder_attaches_children() {
        let q = Question::single_choice("tipo_negocio", "Tipo de negocio:", ["Farmacia", "Otro"])
            .with_child(
                Question::free_text("otro_negocio_especificado", "Especifique:")
                    .revealed_when(RevealCondition::choice_is("Otro"))
                    .overriding_parent(),
            );
        assert!(q.has_children());
        let child = &q.children()[0];
        assert!(child.overrides_parent());
        assert_eq!(
            child.reveal_condition(),
            Some(&RevealCondition::choice_is("Otro"))
        );
    }

    #[test]
    fn possible_answers_of_free_text_is_unbounded() {
        assert!(QuestionKind::FreeText(TextQuestion::multiline())
            .possible_answers()
            .is_none());
    }
}

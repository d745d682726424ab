use std::collections::HashMap;

use crate::{AnswerValue, QuestionId};

/// Answers collected during one session.
///
/// Keys are question ids. A missing key means "no answer"; lookups return
/// `Option` and never fall back to a default value. Whether an answer counts
/// is decided by the visibility resolver: answers stored for questions that
/// are currently inactive are ignored when a record is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    values: HashMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, returning the previous one if any.
    pub fn insert(
        &mut self,
        id: impl Into<QuestionId>,
        value: AnswerValue,
    ) -> Option<AnswerValue> {
        self.values.insert(id.into(), value)
    }

    /// Builder-style insert, handy when preparing fixtures.
    pub fn with(mut self, id: impl Into<QuestionId>, value: AnswerValue) -> Self {
        self.insert(id, value);
        self
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check if a question has an answer.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the chosen option value of a choice question.
    pub fn choice(&self, id: &QuestionId) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_choice)
    }

    /// Get the text of a free-text question.
    pub fn text(&self, id: &QuestionId) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    /// Get the selected point of a scale question.
    pub fn scale(&self, id: &QuestionId) -> Option<i64> {
        self.get(id).and_then(AnswerValue::as_scale)
    }
}

impl IntoIterator for AnswerSet {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = AnswerSet::new();
        answers.insert("ubicacion", AnswerValue::choice("Circuito 2"));
        answers.insert("sentimiento_seguridad", AnswerValue::Scale(4));

        assert_eq!(
            answers.choice(&QuestionId::new("ubicacion")),
            Some("Circuito 2")
        );
        assert_eq!(answers.scale(&QuestionId::new("sentimiento_seguridad")), Some(4));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn missing_answer_is_none() {
        let answers = AnswerSet::new();
        assert!(answers.get(&QuestionId::new("hora_asalto")).is_none());
        assert!(answers.text(&QuestionId::new("hora_asalto")).is_none());
    }

    #[test]
    fn typed_accessor_rejects_other_kinds() {
        let answers = AnswerSet::new().with("tipo_negocio", AnswerValue::choice("Farmacia"));
        assert!(answers.text(&QuestionId::new("tipo_negocio")).is_none());
        assert!(answers.scale(&QuestionId::new("tipo_negocio")).is_none());
    }

    #[test]
    fn insert_replaces_previous() {
        let mut answers = AnswerSet::new();
        answers.insert("victima_asalto", AnswerValue::choice("Sí"));
        let previous = answers.insert("victima_asalto", AnswerValue::choice("No"));
        assert_eq!(previous, Some(AnswerValue::choice("Sí")));
        assert_eq!(answers.len(), 1);
    }
}

use std::collections::HashSet;

use crate::{CatalogError, Question, QuestionId, QuestionKind, TIMESTAMP_COLUMN};

/// A titled group of top-level questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The immutable, ordered definition of every question a form can ask.
///
/// A catalog is presentation-agnostic: it can be rendered as a terminal wizard,
/// a web form or a printed sheet. Its depth-first question order is also the
/// column order of every record assembled from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Form title.
    pub title: Option<String>,

    /// Optional message shown before the first section.
    pub prelude: Option<String>,

    /// Sections in display order.
    pub sections: Vec<Section>,

    /// Optional message shown after a successful submission.
    pub epilogue: Option<String>,
}

impl Catalog {
    /// Create a catalog from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            title: None,
            prelude: None,
            sections,
            epilogue: None,
        }
    }

    /// Create a catalog with a single untitled section.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self::new(vec![Section::new("", questions)])
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Top-level questions in order, across sections.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Every question, depth-first: each question is followed by its follow-ups.
    pub fn iter(&self) -> Questions<'_> {
        Questions {
            sections: self.sections.iter(),
            stack: Vec::new(),
        }
    }

    /// Total number of questions, follow-ups included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Find a question anywhere in the tree.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.iter().find(|q| q.id() == id)
    }

    /// Find the parent of a follow-up question.
    pub fn parent_of(&self, id: &QuestionId) -> Option<&Question> {
        self.iter()
            .find(|q| q.children().iter().any(|c| c.id() == id))
    }

    /// Record column names: the timestamp column, then every question id.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(TIMESTAMP_COLUMN.to_string())
            .chain(self.iter().map(|q| q.id().to_string()))
            .collect()
    }

    /// Check the build-time invariants of the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for question in self.questions() {
            if question.reveal_condition().is_some() {
                return Err(CatalogError::TopLevelCondition(question.id().clone()));
            }
            if question.overrides_parent() {
                return Err(CatalogError::InvalidOverride(question.id().clone()));
            }
            validate_question(question, &mut seen)?;
        }
        Ok(())
    }
}

/// Depth-first iterator over every question of a catalog.
pub struct Questions<'a> {
    sections: std::slice::Iter<'a, Section>,
    stack: Vec<std::slice::Iter<'a, Question>>,
}

impl<'a> Iterator for Questions<'a> {
    type Item = &'a Question;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut() {
                Some(level) => match level.next() {
                    Some(question) => {
                        self.stack.push(question.children().iter());
                        return Some(question);
                    }
                    None => {
                        self.stack.pop();
                    }
                },
                None => {
                    let section = self.sections.next()?;
                    self.stack.push(section.questions.iter());
                }
            }
        }
    }
}

fn validate_question<'a>(
    question: &'a Question,
    seen: &mut HashSet<&'a QuestionId>,
) -> Result<(), CatalogError> {
    let id = question.id();
    if id.is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if !seen.insert(id) {
        return Err(CatalogError::DuplicateId(id.clone()));
    }

    match question.kind() {
        QuestionKind::SingleChoice(choice) => {
            if choice.options().is_empty() {
                return Err(CatalogError::NoOptions(id.clone()));
            }
            let mut values = HashSet::new();
            for option in choice.options() {
                if !values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        id: id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }
        QuestionKind::Scale(scale) => {
            if scale.points().is_empty() {
                return Err(CatalogError::NoOptions(id.clone()));
            }
            if scale.points().windows(2).any(|w| w[0].value >= w[1].value) {
                return Err(CatalogError::UnorderedScale(id.clone()));
            }
        }
        QuestionKind::FreeText(_) => {}
    }

    let possible = question.kind().possible_answers();
    for child in question.children() {
        let Some(condition) = child.reveal_condition() else {
            return Err(CatalogError::MissingCondition(child.id().clone()));
        };
        let expected = question.kind().answer_type_name();
        if let Some(value) = condition
            .referenced_values()
            .into_iter()
            .find(|v| v.type_name() != expected)
        {
            return Err(CatalogError::ConditionKindMismatch {
                id: child.id().clone(),
                expected,
                actual: value.type_name(),
            });
        }
        if let Some(possible) = &possible
            && let Some(value) = condition
                .referenced_values()
                .into_iter()
                .find(|v| !possible.contains(v))
        {
            return Err(CatalogError::UnreachableCondition {
                id: child.id().clone(),
                value: value.to_string(),
            });
        }
        if child.overrides_parent() && !matches!(child.kind(), QuestionKind::FreeText(_)) {
            return Err(CatalogError::InvalidOverride(child.id().clone()));
        }
        validate_question(child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerValue, RevealCondition};

    fn sample() -> Catalog {
        Catalog::new(vec![
            Section::new(
                "Comercio",
                vec![
                    Question::single_choice("tipo", "Tipo:", ["Tienda", "Otro"]).with_child(
                        Question::free_text("otro", "Especifique:")
                            .revealed_when(RevealCondition::choice_is("Otro")),
                    ),
                    Question::single_choice("victima", "¿Víctima?", ["Sí", "No"]).with_child(
                        Question::single_choice("armas", "¿Armas?", ["Sí", "No"])
                            .revealed_when(RevealCondition::choice_is("Sí"))
                            .with_child(
                                Question::free_text("arma", "¿Cuál?")
                                    .revealed_when(RevealCondition::choice_is("Sí")),
                            ),
                    ),
                ],
            ),
            Section::new(
                "Sugerencias",
                vec![Question::long_text("sugerencia", "Sugerencia:")],
            ),
        ])
    }

    #[test]
    fn iter_is_depth_first_across_sections() {
        let ids: Vec<_> = sample().iter().map(|q| q.id().to_string()).collect();
        assert_eq!(
            ids,
            vec!["tipo", "otro", "victima", "armas", "arma", "sugerencia"]
        );
    }

    #[test]
    fn questions_only_yields_top_level() {
        let catalog = sample();
        let ids: Vec<_> = catalog.questions().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["tipo", "victima", "sugerencia"]);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn header_starts_with_timestamp() {
        let header = sample().header();
        assert_eq!(header.first().map(String::as_str), Some(TIMESTAMP_COLUMN));
        assert_eq!(header.len(), 7);
    }

    #[test]
    fn get_and_parent_of() {
        let catalog = sample();
        let id = QuestionId::new("arma");
        assert_eq!(catalog.get(&id).map(|q| q.prompt()), Some("¿Cuál?"));
        assert_eq!(
            catalog.parent_of(&id).map(|q| q.id().as_str()),
            Some("armas")
        );
        assert!(catalog.parent_of(&QuestionId::new("tipo")).is_none());
    }

    #[test]
    fn validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let catalog = Catalog::from_questions(vec![
            Question::free_text("a", "A"),
            Question::free_text("a", "A again"),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn validate_rejects_unreachable_condition() {
        let catalog = Catalog::from_questions(vec![
            Question::single_choice("p", "P", ["Sí", "No"]).with_child(
                Question::free_text("c", "C").revealed_when(RevealCondition::choice_is("Si")),
            ),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnreachableCondition { .. })
        ));
    }

    #[test]
    fn validate_rejects_condition_of_wrong_kind() {
        let catalog = Catalog::from_questions(vec![
            Question::free_text("p", "P").with_child(
                Question::free_text("c", "C").revealed_when(RevealCondition::choice_is("Sí")),
            ),
        ]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::ConditionKindMismatch {
                id: QuestionId::new("c"),
                expected: "Text",
                actual: "Choice",
            })
        );

        let catalog = Catalog::from_questions(vec![
            Question::single_choice("p", "P", ["1", "2"]).with_child(
                Question::free_text("c", "C").revealed_when(RevealCondition::scale_in([1])),
            ),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ConditionKindMismatch { actual: "Scale", .. })
        ));
    }

    #[test]
    fn validate_accepts_text_condition_under_text_parent() {
        let catalog = Catalog::from_questions(vec![
            Question::free_text("p", "P").with_child(
                Question::free_text("c", "C")
                    .revealed_when(RevealCondition::Equals(AnswerValue::text("otro"))),
            ),
        ]);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_child_without_condition() {
        let catalog = Catalog::from_questions(vec![
            Question::single_choice("p", "P", ["Sí", "No"]).with_child(Question::free_text("c", "C")),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingCondition(_))
        ));
    }
}

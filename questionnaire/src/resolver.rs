//! Visibility resolution: which questions are currently active.
//!
//! Top-level questions are always active. A follow-up question is active iff
//! its parent is active, the parent has an answer, and that answer satisfies
//! the follow-up's reveal condition. Resolution is pure and total.

use std::collections::HashSet;

use crate::{AnswerSet, AnswerValue, Catalog, Question, QuestionId};

/// The set of active questions for one answer set, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityMap {
    order: Vec<QuestionId>,
    active: HashSet<QuestionId>,
}

impl VisibilityMap {
    pub fn is_active(&self, id: &QuestionId) -> bool {
        self.active.contains(id)
    }

    /// Active question ids in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Whether `child` is revealed by its parent's current answer.
///
/// A follow-up without a condition is shown whenever its parent is.
pub(crate) fn is_revealed(child: &Question, parent_answer: Option<&AnswerValue>) -> bool {
    match child.reveal_condition() {
        Some(condition) => parent_answer.is_some_and(|answer| condition.matches(answer)),
        None => true,
    }
}

/// Every active question, in catalog order.
pub fn active_questions<'c>(catalog: &'c Catalog, answers: &AnswerSet) -> Vec<&'c Question> {
    let mut active = Vec::new();
    for question in catalog.questions() {
        collect_active(question, answers, &mut active);
    }
    active
}

fn collect_active<'c>(question: &'c Question, answers: &AnswerSet, out: &mut Vec<&'c Question>) {
    out.push(question);
    let answer = answers.get(question.id());
    for child in question.children() {
        if is_revealed(child, answer) {
            collect_active(child, answers, out);
        }
    }
}

/// Resolve visibility into a lookup map.
pub fn resolve_visibility(catalog: &Catalog, answers: &AnswerSet) -> VisibilityMap {
    let order: Vec<QuestionId> = active_questions(catalog, answers)
        .into_iter()
        .map(|q| q.id().clone())
        .collect();
    let active = order.iter().cloned().collect();
    VisibilityMap { order, active }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RevealCondition;

    fn catalog() -> Catalog {
        Catalog::from_questions(vec![
            Question::single_choice("victima", "¿Víctima?", ["Sí", "No"]).with_children([
                Question::single_choice("armas", "¿Armas?", ["Sí", "No"])
                    .revealed_when(RevealCondition::choice_is("Sí"))
                    .with_child(
                        Question::free_text("tipo_arma", "¿Qué arma?")
                            .revealed_when(RevealCondition::choice_is("Sí")),
                    ),
                Question::free_text("hora", "¿Hora?").revealed_when(RevealCondition::choice_is("Sí")),
            ]),
            Question::single_choice("vehiculos", "¿Robo de vehículos?", ["Sí", "No"]).with_child(
                Question::long_text("facilita", "¿Qué lo facilita?")
                    .revealed_when(RevealCondition::choice_is("Sí")),
            ),
        ])
    }

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id().to_string()).collect()
    }

    #[test]
    fn empty_answers_activate_only_top_level() {
        let catalog = catalog();
        let active = active_questions(&catalog, &AnswerSet::new());
        assert_eq!(ids(&active), vec!["victima", "vehiculos"]);
    }

    #[test]
    fn qualifying_answer_reveals_children_in_order() {
        let catalog = catalog();
        let answers = AnswerSet::new().with("victima", AnswerValue::choice("Sí"));
        let active = active_questions(&catalog, &answers);
        assert_eq!(ids(&active), vec!["victima", "armas", "hora", "vehiculos"]);
    }

    #[test]
    fn nested_child_needs_every_ancestor_condition() {
        let catalog = catalog();
        let answers = AnswerSet::new()
            .with("victima", AnswerValue::choice("No"))
            .with("armas", AnswerValue::choice("Sí"));
        let visibility = resolve_visibility(&catalog, &answers);
        assert!(!visibility.is_active(&QuestionId::new("armas")));
        assert!(!visibility.is_active(&QuestionId::new("tipo_arma")));

        let answers = answers.with("victima", AnswerValue::choice("Sí"));
        let visibility = resolve_visibility(&catalog, &answers);
        assert!(visibility.is_active(&QuestionId::new("tipo_arma")));
    }

    #[test]
    fn branches_are_independent() {
        let catalog = catalog();
        let answers = AnswerSet::new()
            .with("victima", AnswerValue::choice("No"))
            .with("vehiculos", AnswerValue::choice("Sí"));
        let visibility = resolve_visibility(&catalog, &answers);
        let active: Vec<_> = visibility.iter().map(QuestionId::as_str).collect();
        assert_eq!(active, vec!["victima", "vehiculos", "facilita"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = catalog();
        let answers = AnswerSet::new().with("victima", AnswerValue::choice("Sí"));
        assert_eq!(
            resolve_visibility(&catalog, &answers),
            resolve_visibility(&catalog, &answers)
        );
    }
}

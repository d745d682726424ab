use chrono::NaiveDateTime;
use log::debug;

use crate::resolver::is_revealed;
use crate::{
    AnswerSet, AnswerValue, Catalog, Cell, IncompleteSubmission, Question, QuestionKind, Record,
    RecordField,
};

/// Assemble the record of one submission.
///
/// Emits one cell per catalog question, in catalog order. Inactive questions
/// become [`Cell::NotApplicable`] even if `answers` still holds a value for
/// them. Scale answers are rendered with their combined label. An active
/// follow-up marked as overriding its parent replaces the parent's value when
/// it is not blank.
///
/// Fails if any active required question has no answer; nothing is returned
/// in that case, so no partial record can reach a sink.
pub fn assemble(
    catalog: &Catalog,
    answers: &AnswerSet,
    now: NaiveDateTime,
) -> Result<Record, IncompleteSubmission> {
    let mut assembly = Assembly {
        answers,
        fields: Vec::with_capacity(catalog.len()),
        missing: Vec::new(),
    };
    for question in catalog.questions() {
        assembly.push(question, true, None);
    }

    if !assembly.missing.is_empty() {
        return Err(IncompleteSubmission {
            missing: assembly.missing,
        });
    }
    debug!("Assembled record with {} fields", assembly.fields.len());
    Ok(Record::new(now, assembly.fields))
}

struct Assembly<'a> {
    answers: &'a AnswerSet,
    fields: Vec<RecordField>,
    missing: Vec<crate::QuestionId>,
}

impl Assembly<'_> {
    fn push(&mut self, question: &Question, active: bool, parent: Option<usize>) {
        let answer = if active {
            self.answers
                .get(question.id())
                .filter(|value| is_answered(question, value))
        } else {
            None
        };

        let cell = match (active, answer) {
            (false, _) => Cell::NotApplicable,
            (true, Some(value)) => Cell::Value(render(question.kind(), value)),
            (true, None) => {
                if question.is_required() {
                    self.missing.push(question.id().clone());
                }
                Cell::Value(String::new())
            }
        };

        let index = self.fields.len();
        self.fields.push(RecordField {
            id: question.id().clone(),
            cell,
        });

        if question.overrides_parent()
            && let (Some(parent), Some(value)) = (parent, answer)
            && !value.is_blank()
        {
            self.fields[parent].cell = Cell::Value(render(question.kind(), value));
        }

        for child in question.children() {
            let child_active = active && is_revealed(child, answer);
            self.push(child, child_active, Some(index));
        }
    }
}

/// Whether `value` counts as an answer to `question`.
///
/// Values the question would not accept are ignored, and so is blank text
/// given to a required question.
pub(crate) fn is_answered(question: &Question, value: &AnswerValue) -> bool {
    question.check_answer(value).is_ok() && !(question.is_required() && value.is_blank())
}

fn render(kind: &QuestionKind, value: &AnswerValue) -> String {
    match (kind, value) {
        (QuestionKind::Scale(scale), AnswerValue::Scale(n)) => {
            scale.display_label(*n).unwrap_or_else(|| n.to_string())
        }
        (_, other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionId, RevealCondition, ScaleQuestion};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_questions(vec![
            Question::single_choice("tipo", "Tipo:", ["Farmacia", "Otro"]).with_child(
                Question::free_text("otro", "Especifique:")
                    .revealed_when(RevealCondition::choice_is("Otro"))
                    .overriding_parent(),
            ),
            Question::single_choice("victima", "¿Víctima?", ["Sí", "No"]).with_child(
                Question::single_choice("armas", "¿Armas?", ["Sí", "No"])
                    .revealed_when(RevealCondition::choice_is("Sí"))
                    .with_child(
                        Question::free_text("arma", "¿Cuál?")
                            .revealed_when(RevealCondition::choice_is("Sí")),
                    ),
            ),
            Question::scale(
                "seguridad",
                "Escala:",
                ScaleQuestion::from_labels(1, ["Muy Inseguro", "Inseguro", "Neutral"]),
            ),
            Question::long_text("extra", "¿Algo más?"),
        ])
    }

    fn cells(record: &Record) -> Vec<(&str, Cell)> {
        record
            .fields()
            .iter()
            .map(|f| (f.id.as_str(), f.cell.clone()))
            .collect()
    }

    #[test]
    fn unanswered_branches_are_not_applicable() {
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Farmacia"))
            .with("victima", AnswerValue::choice("No"))
            .with("seguridad", AnswerValue::Scale(2));
        let record = assemble(&catalog(), &answers, now()).unwrap();
        assert_eq!(
            cells(&record),
            vec![
                ("tipo", Cell::value("Farmacia")),
                ("otro", Cell::NotApplicable),
                ("victima", Cell::value("No")),
                ("armas", Cell::NotApplicable),
                ("arma", Cell::NotApplicable),
                ("seguridad", Cell::value("2 - Inseguro")),
                ("extra", Cell::value("")),
            ]
        );
    }

    #[test]
    fn override_replaces_parent_value() {
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Otro"))
            .with("otro", AnswerValue::text("Pet store"))
            .with("victima", AnswerValue::choice("No"))
            .with("seguridad", AnswerValue::Scale(3));
        let record = assemble(&catalog(), &answers, now()).unwrap();
        assert_eq!(
            record.get(&QuestionId::new("tipo")),
            Some(&Cell::value("Pet store"))
        );
        assert_eq!(
            record.get(&QuestionId::new("otro")),
            Some(&Cell::value("Pet store"))
        );
    }

    #[test]
    fn blank_override_keeps_parent_value() {
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Otro"))
            .with("otro", AnswerValue::text("  "))
            .with("victima", AnswerValue::choice("No"))
            .with("seguridad", AnswerValue::Scale(3));
        let record = assemble(&catalog(), &answers, now()).unwrap();
        assert_eq!(record.get(&QuestionId::new("tipo")), Some(&Cell::value("Otro")));
    }

    #[test]
    fn stale_answers_are_scrubbed() {
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Farmacia"))
            .with("otro", AnswerValue::text("left over"))
            .with("victima", AnswerValue::choice("No"))
            .with("armas", AnswerValue::choice("Sí"))
            .with("arma", AnswerValue::text("cuchillo"))
            .with("seguridad", AnswerValue::Scale(1));
        let record = assemble(&catalog(), &answers, now()).unwrap();
        for id in ["otro", "armas", "arma"] {
            assert_eq!(record.get(&QuestionId::new(id)), Some(&Cell::NotApplicable));
        }
        assert_eq!(record.get(&QuestionId::new("tipo")), Some(&Cell::value("Farmacia")));
    }

    #[test]
    fn missing_required_questions_fail() {
        let answers = AnswerSet::new()
            .with("victima", AnswerValue::choice("Sí"))
            .with("seguridad", AnswerValue::Scale(1));
        let err = assemble(&catalog(), &answers, now()).unwrap_err();
        assert_eq!(
            err.missing,
            vec![QuestionId::new("tipo"), QuestionId::new("armas")]
        );
    }

    #[test]
    fn unacceptable_answers_count_as_missing() {
        let catalog = Catalog::from_questions(vec![
            Question::single_choice("tipo", "Tipo:", ["Farmacia", "Otro"]),
            Question::scale(
                "seguridad",
                "Escala:",
                ScaleQuestion::from_labels(1, ["a", "b", "c"]),
            ),
            Question::free_text("nombre", "Nombre:").required(),
        ]);
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Maybe"))
            .with("seguridad", AnswerValue::text("3"))
            .with("nombre", AnswerValue::text("   "));
        let err = assemble(&catalog, &answers, now()).unwrap_err();
        assert_eq!(
            err.missing,
            vec![
                QuestionId::new("tipo"),
                QuestionId::new("seguridad"),
                QuestionId::new("nombre"),
            ]
        );

        let answers = answers
            .with("tipo", AnswerValue::choice("Otro"))
            .with("seguridad", AnswerValue::Scale(3))
            .with("nombre", AnswerValue::text("Ana"));
        let record = assemble(&catalog, &answers, now()).unwrap();
        assert_eq!(
            record.get(&QuestionId::new("seguridad")),
            Some(&Cell::value("3 - c"))
        );
    }

    #[test]
    fn invalid_parent_answer_reveals_nothing() {
        let catalog = Catalog::from_questions(vec![
            Question::single_choice("victima", "¿Víctima?", ["Sí", "No"]).with_child(
                Question::free_text("hora", "¿Hora?")
                    .revealed_when(RevealCondition::choice_in(["Sí", "Tal vez"])),
            ),
        ]);
        let answers = AnswerSet::new()
            .with("victima", AnswerValue::choice("Tal vez"))
            .with("hora", AnswerValue::text("noche"));
        let err = assemble(&catalog, &answers, now()).unwrap_err();
        assert_eq!(err.missing, vec![QuestionId::new("victima")]);
    }

    #[test]
    fn record_width_is_catalog_size() {
        let catalog = catalog();
        let answers = AnswerSet::new()
            .with("tipo", AnswerValue::choice("Otro"))
            .with("victima", AnswerValue::choice("Sí"))
            .with("armas", AnswerValue::choice("Sí"))
            .with("seguridad", AnswerValue::Scale(3));
        let record = assemble(&catalog, &answers, now()).unwrap();
        assert_eq!(record.len(), catalog.len());
        assert_eq!(record.header(), catalog.header());
        assert_eq!(record.submitted_at(), now());
    }
}

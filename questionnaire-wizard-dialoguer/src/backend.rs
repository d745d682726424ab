//! Dialoguer backend implementation for the FormBackend trait.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Editor, Input, Select};
use log::debug;
use questionnaire::{
    AnswerError, AnswerValue, Catalog, ChoiceQuestion, FormBackend, Question, QuestionKind,
    ScaleQuestion, Session, TextQuestion,
};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the form (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The session refused an answer.
    #[error("Answer rejected: {0}")]
    Rejected(#[from] AnswerError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,

    /// Open an external editor for multi-line questions.
    editor: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            editor: false,
        }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            editor: false,
        }
    }

    /// Answer multi-line questions in `$EDITOR` instead of a single prompt line.
    pub fn with_editor(mut self) -> Self {
        self.editor = true;
        self
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Ask a yes/no question, e.g. the final "submit?" step.
    pub fn confirm(&self, prompt: &str) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        Confirm::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(prompt_error)
    }

    fn print_header(&self, catalog: &Catalog) {
        if let Some(title) = &catalog.title {
            println!("{title}");
            println!("{}", "=".repeat(title.chars().count()));
        }
        if let Some(prelude) = &catalog.prelude {
            println!("{prelude}");
        }
        println!();
    }

    /// Ask a question, then the follow-ups its answer reveals.
    fn ask_question(
        &self,
        question: &Question,
        session: &mut Session<'_>,
        depth: usize,
    ) -> Result<(), DialoguerError> {
        let prompt = format!("{}{}", "  ".repeat(depth), question.prompt());
        let current = session.get(question.id()).cloned();

        let value = match question.kind() {
            QuestionKind::SingleChoice(choice) => {
                self.ask_choice(&prompt, choice, current.as_ref())?
            }
            QuestionKind::Scale(scale) => self.ask_scale(&prompt, scale, current.as_ref())?,
            QuestionKind::FreeText(text) => {
                self.ask_text(&prompt, text, question.is_required(), current.as_ref())?
            }
        };

        let dropped = session.answer(question.id(), value)?;
        if !dropped.is_empty() {
            debug!("Answer to {} hid {dropped:?}", question.id());
        }

        for child in question.children() {
            if session.is_active(child.id()) {
                self.ask_question(child, session, depth + 1)?;
            }
        }
        Ok(())
    }

    fn ask_choice(
        &self,
        prompt: &str,
        choice: &ChoiceQuestion,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerError> {
        let items: Vec<&str> = choice.options().iter().map(|o| o.label.as_str()).collect();
        let default = current
            .and_then(AnswerValue::as_choice)
            .and_then(|v| choice.position(v))
            .unwrap_or(0);

        let theme = self.theme();
        let selection = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(&items)
            .default(default)
            .interact()
            .map_err(prompt_error)?;

        Ok(AnswerValue::Choice(choice.options()[selection].value.clone()))
    }

    fn ask_scale(
        &self,
        prompt: &str,
        scale: &ScaleQuestion,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerError> {
        let items: Vec<String> = scale
            .points()
            .iter()
            .map(|p| format!("{} - {}", p.value, p.label))
            .collect();
        let default = current
            .and_then(AnswerValue::as_scale)
            .and_then(|n| scale.points().iter().position(|p| p.value == n))
            .unwrap_or(0);

        let theme = self.theme();
        let selection = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(&items)
            .default(default)
            .interact()
            .map_err(prompt_error)?;

        Ok(AnswerValue::Scale(scale.points()[selection].value))
    }

    fn ask_text(
        &self,
        prompt: &str,
        text: &TextQuestion,
        required: bool,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerError> {
        let default = current.and_then(AnswerValue::as_text).unwrap_or_default();

        if text.multiline && self.editor {
            println!("{prompt}");
            loop {
                match Editor::new().edit(default).map_err(prompt_error)? {
                    Some(value) if !(required && value.trim().is_empty()) => {
                        return Ok(AnswerValue::Text(value.trim_end().to_string()));
                    }
                    None if !required => return Ok(AnswerValue::Text(String::new())),
                    _ => println!("Error: This question requires an answer"),
                }
            }
        }

        let theme = self.theme();
        let mut input = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(!required);
        if !default.is_empty() {
            input = input.with_initial_text(default);
        }
        let value = input.interact_text().map_err(prompt_error)?;
        Ok(AnswerValue::Text(value))
    }
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn collect(&self, session: &mut Session<'_>) -> Result<(), Self::Error> {
        let catalog = session.catalog();
        self.print_header(catalog);

        for section in catalog.sections() {
            if !section.title.is_empty() {
                println!();
                println!("{}", section.title);
                println!("{}", "-".repeat(section.title.chars().count()));
            }
            for question in section.questions() {
                self.ask_question(question, session, 0)?;
            }
        }
        Ok(())
    }
}

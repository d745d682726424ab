//! # questionnaire-wizard-dialoguer
//!
//! Dialoguer wizard backend for questionnaire.
//!
//! Questions are presented step-by-step in a classic CLI wizard style:
//! section by section, each follow-up asked right after the answer that
//! reveals it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::{FormBackend, Session};
//! use questionnaire_wizard_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = pavas_survey::catalog();
//!     let mut session = Session::new(&catalog);
//!     let backend = DialoguerBackend::new();
//!     backend.collect(&mut session)?;
//!     if backend.confirm("Enviar Encuesta")? {
//!         session.submit(&sink, chrono::Local::now().naive_local())?;
//!     }
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};

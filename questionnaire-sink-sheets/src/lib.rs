//! # questionnaire-sink-sheets
//!
//! Remote spreadsheet sink for questionnaire records.
//!
//! [`SpreadsheetSink`] appends one row per record to a fixed, pre-provisioned
//! worksheet through a [`SheetsClient`]. [`HttpSheetsClient`] talks to the
//! Google Sheets v4 REST API; obtaining its access token is left to a
//! [`TokenProvider`] supplied by the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire_sink_sheets::{HttpSheetsClient, SpreadsheetSink, StaticToken};
//!
//! let client = HttpSheetsClient::new(StaticToken::new(token))?;
//! let sink = SpreadsheetSink::new(client, "1AbC...", "Respuestas");
//! session.submit(&sink, chrono::Local::now().naive_local())?;
//! ```

mod client;
mod sink;

pub use client::{DEFAULT_BASE_URL, HttpSheetsClient, StaticToken, TokenProvider, append_url};
pub use sink::{SheetsClient, SpreadsheetSink, a1_range};

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Where submitted surveys are stored.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Append to a local CSV file.
    Csv,
    /// Append a row to a remote spreadsheet.
    Sheets,
}

/// Shopkeeper security survey for the Pavas neighborhood.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Storage backend for the submitted record.
    #[arg(long, value_enum, default_value_t = SinkKind::Csv)]
    pub sink: SinkKind,

    /// (file path) CSV file the record is appended to. Created with a header if absent.
    #[arg(short, long, default_value = "datos_encuesta.csv")]
    pub output: PathBuf,

    /// Text written in the cells of questions that were not asked.
    #[arg(long, default_value = "N/A")]
    pub not_applicable: String,

    /// Id of the remote spreadsheet (required with --sink sheets).
    #[arg(long, env = "PAVAS_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Worksheet of the remote spreadsheet that receives the rows.
    #[arg(long, env = "PAVAS_WORKSHEET", default_value = "Respuestas")]
    pub worksheet: String,

    /// OAuth access token for the spreadsheet service (required with --sink sheets).
    #[arg(long, env = "PAVAS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Disable colours in the prompts.
    #[arg(long)]
    pub plain: bool,

    /// If passed as an argument, will turn on verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

mod args;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use log::{debug, info};
use questionnaire::{Catalog, FormBackend, RecordSink, Session, SubmissionError};
use questionnaire_sink_csv::CsvFileSink;
use questionnaire_sink_sheets::{HttpSheetsClient, SpreadsheetSink, StaticToken};
use questionnaire_wizard_dialoguer::{DialoguerBackend, DialoguerError};

use crate::args::{Args, SinkKind};

const SUBMITTED: &str = "Encuesta enviada.";

/// The one line shown after a successful submission.
fn success_message(catalog: &Catalog) -> &str {
    catalog.epilogue.as_deref().unwrap_or(SUBMITTED)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_sink(args: &Args) -> Result<Box<dyn RecordSink>> {
    match args.sink {
        SinkKind::Csv => {
            debug!("Appending records to {}", args.output.display());
            Ok(Box::new(
                CsvFileSink::new(&args.output).with_not_applicable(&args.not_applicable),
            ))
        }
        SinkKind::Sheets => {
            let Some(spreadsheet_id) = &args.spreadsheet_id else {
                bail!("--spreadsheet-id (or PAVAS_SPREADSHEET_ID) is required with --sink sheets");
            };
            let Some(token) = &args.access_token else {
                bail!("--access-token (or PAVAS_ACCESS_TOKEN) is required with --sink sheets");
            };
            debug!("Appending records to spreadsheet {spreadsheet_id}, worksheet {}", args.worksheet);
            let client = HttpSheetsClient::new(StaticToken::new(token.as_str()))?;
            Ok(Box::new(
                SpreadsheetSink::new(client, spreadsheet_id.as_str(), args.worksheet.as_str())
                    .with_not_applicable(&args.not_applicable),
            ))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = pavas_survey::catalog();
    catalog.validate().context("survey catalog is inconsistent")?;
    let sink = build_sink(&args)?;

    let backend = if args.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };

    let mut session = Session::new(&catalog);
    match backend.collect(&mut session) {
        Ok(()) => {}
        Err(DialoguerError::Cancelled) => {
            println!("Encuesta cancelada.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    loop {
        if !backend.confirm("¿Enviar encuesta?")? {
            println!("La encuesta no fue enviada.");
            return Ok(());
        }

        match session.submit(sink.as_ref(), Local::now().naive_local()) {
            Ok(record) => {
                info!("Submitted record with {} fields", record.len());
                println!();
                println!("{}", success_message(&catalog));
                return Ok(());
            }
            Err(SubmissionError::Sink(err)) => {
                eprintln!("Ocurrió un error al guardar los datos: {err}");
            }
            Err(err) => return Err(err).context("no se pudo enviar la encuesta"),
        }
    }
}

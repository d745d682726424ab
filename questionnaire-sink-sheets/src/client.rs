use std::time::Duration;

use anyhow::{Context, anyhow};
use log::debug;
use questionnaire::SinkError;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::json;

use crate::SheetsClient;

/// Root of the Google Sheets REST API.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Supplies OAuth access tokens. Authentication itself happens elsewhere.
pub trait TokenProvider {
    fn access_token(&self) -> anyhow::Result<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> anyhow::Result<String>,
{
    fn access_token(&self) -> anyhow::Result<String> {
        self()
    }
}

/// A token obtained ahead of time, e.g. from the environment.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

/// The `values:append` endpoint for `range` of `spreadsheet_id`.
pub fn append_url(base_url: &str, spreadsheet_id: &str, range: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url).with_context(|| format!("invalid base URL {base_url}"))?;
    let append = format!("{range}:append");
    url.path_segments_mut()
        .map_err(|()| anyhow!("base URL {base_url} cannot have a path"))?
        .pop_if_empty()
        .extend([
            "v4",
            "spreadsheets",
            spreadsheet_id,
            "values",
            append.as_str(),
        ]);
    url.query_pairs_mut()
        .append_pair("valueInputOption", "USER_ENTERED")
        .append_pair("insertDataOption", "INSERT_ROWS");
    Ok(url)
}

/// Blocking HTTP client for the Sheets v4 API.
#[derive(Debug)]
pub struct HttpSheetsClient<T> {
    http: Client,
    base_url: String,
    tokens: T,
}

impl<T: TokenProvider> HttpSheetsClient<T> {
    pub fn new(tokens: T) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            tokens,
        })
    }

    /// Point the client at another API root (proxies, emulators).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl<T: TokenProvider> SheetsClient for HttpSheetsClient<T> {
    fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<(), SinkError> {
        let url = append_url(&self.base_url, spreadsheet_id, range).map_err(SinkError::Write)?;
        let token = self
            .tokens
            .access_token()
            .context("obtaining access token")
            .map_err(SinkError::Auth)?;

        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "majorDimension": "ROWS", "values": [row] }))
            .send()
            .map_err(|err| {
                if err.is_connect() || err.is_timeout() {
                    SinkError::unreachable(err)
                } else {
                    SinkError::write(err)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        let err = anyhow!("Sheets API returned {status}: {body}");
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SinkError::Auth(err),
            _ => SinkError::Write(err),
        })
    }
}

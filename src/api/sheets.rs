//! [Google Visualization][1] (`gviz`) endpoint of a published Google Sheets document.
//!
//! [1]: https://developers.google.com/chart/interactive/docs/dev/implementing_data_source

use std::{path::Path, time::Duration};

use itertools::Itertools;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    core::table::{Cell, Row, Table},
    prelude::*,
};

/// JSONP wrapper around the JSON payload, preceded by an `/*O_o*/` comment line.
const ENVELOPE_PREFIX: &str = "google.visualization.Query.setResponse(";

pub struct Api {
    client: reqwest::Client,
    sheet_id: String,
}

impl Api {
    pub fn new(sheet_id: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, sheet_id: sheet_id.into() })
    }

    #[instrument(skip_all, fields(range = range))]
    pub async fn get_table(&self, range: &str) -> Result<Table> {
        info!(sheet_id = self.sheet_id.as_str(), "fetching…");
        let body = self
            .client
            .get(format!("https://docs.google.com/spreadsheets/d/{}/gviz/tq", self.sheet_id))
            .query(&[("tqx", "out:json"), ("range", range)])
            .send()
            .await
            .context("failed to call the spreadsheet")?
            .error_for_status()
            .context("spreadsheet request failed")?
            .text()
            .await
            .context("failed to read the spreadsheet response")?;
        decode(&body)
    }
}

/// Read a previously saved `gviz` response.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_table(path: &Path) -> Result<Table> {
    info!("reading…");
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    decode(&body)
}

/// Strip the envelope and decode the table.
pub fn decode(body: &str) -> Result<Table> {
    let response: Response =
        serde_json::from_str(strip_envelope(body)?).context("failed to deserialize the response")?;
    if response.status.as_deref() == Some("error") {
        let reasons = response.errors.iter().map(|error| &error.message).join("; ");
        bail!("the spreadsheet returned an error: {reasons}");
    }
    let table = response.table.context("the response contains no table")?;
    ensure!(!table.rows.is_empty(), "no tariffs found in the spreadsheet");
    debug!(n_rows = table.rows.len(), "decoded");
    Ok(table.into())
}

fn strip_envelope(body: &str) -> Result<&str> {
    let (_, payload) =
        body.split_once(ENVELOPE_PREFIX).context("the response envelope is missing")?;
    let payload = payload.trim_end();
    payload
        .strip_suffix(");")
        .or_else(|| payload.strip_suffix(')'))
        .context("the response envelope is not closed")
}

#[derive(Deserialize)]
struct Response {
    status: Option<String>,

    #[serde(default)]
    errors: Vec<ResponseError>,

    table: Option<ResponseTable>,
}

#[derive(Deserialize)]
struct ResponseError {
    #[serde(default)]
    message: String,
}

#[serde_as]
#[derive(Deserialize)]
struct ResponseTable {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    rows: Vec<ResponseRow>,
}

#[serde_as]
#[derive(Deserialize)]
struct ResponseRow {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "c")]
    cells: Vec<Option<ResponseCell>>,
}

#[derive(Deserialize)]
struct ResponseCell {
    #[serde(default, rename = "v")]
    value: serde_json::Value,
}

impl From<ResponseTable> for Table {
    fn from(table: ResponseTable) -> Self {
        Self {
            rows: table
                .rows
                .into_iter()
                .map(|row| Row(row.cells.into_iter().map(Cell::from).collect()))
                .collect(),
        }
    }
}

impl From<Option<ResponseCell>> for Cell {
    fn from(cell: Option<ResponseCell>) -> Self {
        match cell.map(|cell| cell.value) {
            Some(serde_json::Value::Number(number)) => {
                number.as_f64().map_or(Self::Empty, Self::Number)
            }
            Some(serde_json::Value::String(text)) => Self::Text(text),
            _ => Self::Empty,
        }
    }
}

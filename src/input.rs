//! Loading datasets from files
//!
//! - `.txt` / `.csv` and anything unrecognized: the file is raw input text
//! - `.json`: a dataset document `{ "data": ..., "method": ... }` where
//!   `data` is either input text or a list of values. The legacy keys
//!   `datos` / `config` (with `poblacional` / `muestral`) are accepted too,
//!   and so is a JSON report written by this tool.
//! - `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods`: the first worksheet,
//!   non-empty cells read row by row, one value per cell

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::VarianceMode;
use crate::stats::format_number;
use calamine::{open_workbook_auto, Data, Reader};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// How a dataset file is read, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Text,
    Json,
    Spreadsheet,
}

impl SourceKind {
    fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if ext == "json" {
            SourceKind::Json
        } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            SourceKind::Spreadsheet
        } else {
            SourceKind::Text
        }
    }
}

/// Dataset values as stored in a document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DataField {
    Text(String),
    List(Vec<serde_json::Value>),
}

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(alias = "datos")]
    data: DataField,
    #[serde(default, alias = "config", alias = "variance_mode")]
    method: Option<String>,
}

/// A dataset ready for tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Freeform input text
    pub text: String,
    /// Variance mode stored alongside the data, if any
    pub variance_mode: Option<VarianceMode>,
}

impl Dataset {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variance_mode: None,
        }
    }
}

/// Parse a JSON dataset document
pub fn parse_json_dataset(content: &str) -> AnalysisResult<Dataset> {
    let doc: DatasetDocument = serde_json::from_str(content)
        .map_err(|e| AnalysisError::InvalidInput(format!("invalid dataset JSON: {}", e)))?;

    let text = match doc.data {
        DataField::Text(text) => text,
        DataField::List(values) => values
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let variance_mode = doc
        .method
        .as_deref()
        .map(str::parse::<VarianceMode>)
        .transpose()
        .map_err(AnalysisError::InvalidInput)?;

    Ok(Dataset {
        text,
        variance_mode,
    })
}

/// Load a dataset from a file, choosing the format by extension
pub fn load_dataset(path: &Path) -> AnalysisResult<Dataset> {
    let kind = SourceKind::of(path);
    debug!("Loading dataset from {} ({:?})", path.display(), kind);

    if kind == SourceKind::Spreadsheet {
        return load_spreadsheet(path);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;

    match kind {
        SourceKind::Json => parse_json_dataset(&content),
        _ => Ok(Dataset::from_text(content)),
    }
}

/// Flatten the first worksheet into one value per line
fn load_spreadsheet(path: &Path) -> AnalysisResult<Dataset> {
    let invalid = |e: calamine::Error| {
        AnalysisError::InvalidInput(format!("cannot read workbook {}: {}", path.display(), e))
    };

    let mut workbook = open_workbook_auto(path).map_err(invalid)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AnalysisError::InvalidInput(format!("workbook {} has no sheets", path.display()))
        })?
        .map_err(invalid)?;

    let values: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter().filter_map(cell_text))
        .collect();
    debug!("Read {} cells from the first sheet", values.len());

    Ok(Dataset::from_text(values.join("\n")))
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_number(dt.as_f64()),
    };
    (!text.is_empty()).then_some(text)
}

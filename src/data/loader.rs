use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{AlumniDataset, AlumniRecord, Field};

/// The dataset shipped inside the binary.
const BUNDLED_DATASET: &str = include_str!("../../assets/alumni.json");

/// Structural problems with a dataset file.  I/O and syntax errors are
/// reported through `anyhow` context instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("expected a top-level JSON array of alumni records")]
    NotAnArray,
    #[error("row {0} is not a JSON object")]
    RowNotObject(usize),
    #[error("CSV has no 'Name' column")]
    MissingNameColumn,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an alumni dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "Name": "...", "Course": "...", "Batch": "...", ... }, ...]`
/// * `.csv`  – header row naming the record fields, one alumnus per line
pub fn load_file(path: &Path) -> Result<AlumniDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text).with_context(|| format!("loading {}", path.display()))
        }
        "csv" => {
            let reader = csv::Reader::from_path(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_csv(reader).with_context(|| format!("loading {}", path.display()))
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

/// Parse the dataset compiled into the binary.
pub fn load_bundled() -> Result<AlumniDataset> {
    parse_json(BUNDLED_DATASET).context("parsing bundled alumni dataset")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as exported from the association's spreadsheet:
///
/// ```json
/// [
///   { "Name": "Anna Rao", "Course": "MCA", "Batch": "2018-2021",
///     "Occupation": "Engineer", "LinkedIn": "https://..." },
///   ...
/// ]
/// ```
///
/// Numbers and booleans are kept as text, `null` means absent, unknown keys
/// are ignored.
pub fn parse_json(text: &str) -> Result<AlumniDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(LoadError::RowNotObject(i))?;

        let mut record = AlumniRecord::default();
        for (key, val) in obj {
            if let Some(field) = Field::from_key(key) {
                record.set(field, json_to_text(val));
            }
        }
        records.push(record);
    }

    Ok(AlumniDataset::from_records(records))
}

fn json_to_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row with field names (any case), e.g.
/// `Name,Course,Batch,Occupation,Skill,Image,LinkedIn`.  Columns that are
/// not record fields are skipped; only `Name` is mandatory.
pub fn parse_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<AlumniDataset> {
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut columns: Vec<(usize, Field)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        match Field::from_key(header) {
            Some(field) => columns.push((idx, field)),
            None => log::warn!("Ignoring unknown CSV column '{header}'"),
        }
    }
    if !columns.iter().any(|(_, f)| *f == Field::Name) {
        return Err(LoadError::MissingNameColumn.into());
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut record = AlumniRecord::default();
        for &(idx, field) in &columns {
            record.set(field, row.get(idx).map(str::to_string));
        }
        records.push(record);
    }

    Ok(AlumniDataset::from_records(records))
}

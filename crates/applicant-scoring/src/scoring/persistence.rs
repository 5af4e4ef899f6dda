use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::domain::ApplicantRecord;
use super::engine::ScoreBreakdown;
use super::ranking::RankedApplicant;
use super::weights::WeightTable;

/// Default file name used when a caller does not pick one.
pub const DEFAULT_RESULTS_FILE: &str = "applicant_scores.json";

/// Flat JSON document written after a scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsDocument {
    pub timestamp: DateTime<Local>,
    pub total_applicants: usize,
    pub scoring_weights: WeightTable,
    pub applicants: Vec<ScoredApplicantEntry>,
}

impl ResultsDocument {
    pub fn new(ranked: &[RankedApplicant], weights: &WeightTable) -> Self {
        Self::at(ranked, weights, Local::now())
    }

    pub fn at(ranked: &[RankedApplicant], weights: &WeightTable, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            total_applicants: ranked.len(),
            scoring_weights: *weights,
            applicants: ranked.iter().map(ScoredApplicantEntry::from).collect(),
        }
    }
}

/// Record fields flattened alongside the rank and scores they earned.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredApplicantEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub record: ApplicantRecord,
    pub score: f64,
    pub score_breakdown: ScoreBreakdown,
}

impl From<&RankedApplicant> for ScoredApplicantEntry {
    fn from(value: &RankedApplicant) -> Self {
        Self {
            rank: value.rank,
            record: value.record.clone(),
            score: value.breakdown.total,
            score_breakdown: value.breakdown,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("cannot access '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid applicant data: {reason}")]
    Parse { reason: String },
    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write summary CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl PersistenceError {
    pub(crate) fn file(path: &Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write the ranked view, the weights used, and a timestamp to `path`.
///
/// The document is written to a sibling temporary file first and renamed into
/// place, so a failed save never leaves a truncated file at `path`.
pub fn save(
    ranked: &[RankedApplicant],
    weights: &WeightTable,
    path: impl AsRef<Path>,
) -> Result<ResultsDocument, PersistenceError> {
    let document = ResultsDocument::new(ranked, weights);
    write_document(&document, path.as_ref())?;
    Ok(document)
}

pub fn write_document(document: &ResultsDocument, path: &Path) -> Result<(), PersistenceError> {
    write_atomically(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, document)?;
        writer
            .write_all(b"\n")
            .map_err(|source| PersistenceError::file(path, source))
    })?;

    info!(
        path = %path.display(),
        applicants = document.total_applicants,
        "scoring results saved"
    );
    Ok(())
}

/// Run `write` against a sibling temporary file and rename it over `path` once it
/// has been flushed and synced. On any failure the temporary file is removed and
/// `path` is left as it was.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PersistenceError>,
{
    let staging = staging_path(path);

    if let Err(err) = write_staged(&staging, write) {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }

    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(PersistenceError::file(path, source));
    }
    Ok(())
}

fn write_staged<F>(staging: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PersistenceError>,
{
    let file = File::create(staging).map_err(|source| PersistenceError::file(staging, source))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|source| PersistenceError::file(staging, source))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|source| PersistenceError::file(staging, source))
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_RESULTS_FILE.to_string());
    path.with_file_name(format!(".{file_name}.tmp"))
}

/// Read raw records back from a results document or a plain JSON list.
///
/// Breakdowns stored in the file are ignored; callers rescore after loading.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<ApplicantRecord>, PersistenceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PersistenceError::file(path, source))?;
    let records = parse_records(&content)?;
    info!(path = %path.display(), applicants = records.len(), "applicants loaded");
    Ok(records)
}

pub fn parse_records(content: &str) -> Result<Vec<ApplicantRecord>, PersistenceError> {
    let value: Value = serde_json::from_str(content).map_err(|err| PersistenceError::Parse {
        reason: format!("malformed JSON ({err})"),
    })?;

    let applicants = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("applicants") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PersistenceError::Parse {
                    reason: "expected an 'applicants' list".to_string(),
                })
            }
        },
        _ => {
            return Err(PersistenceError::Parse {
                reason: "expected a list of applicants or an object with 'applicants'".to_string(),
            })
        }
    };

    applicants
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<ApplicantRecord>(item).map_err(|err| PersistenceError::Parse {
                reason: format!("applicant #{} is malformed ({err})", index + 1),
            })
        })
        .collect()
}

use tracing::debug;

use super::domain::{ApplicantRecord, ValidationError};
use super::engine::{ScoreBreakdown, ScoringEngine};
use super::ranking::{rank_scored, RankedApplicant};

/// A stored record and the breakdown computed for it, if it has been scored since its last edit.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredApplicant {
    record: ApplicantRecord,
    breakdown: Option<ScoreBreakdown>,
}

impl StoredApplicant {
    pub fn record(&self) -> &ApplicantRecord {
        &self.record
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        self.breakdown.as_ref()
    }
}

/// Insertion-ordered, in-memory collection of applicant records.
///
/// Insertion order is the tie-break key for rankings. The store is owned by its
/// caller and is not meant to be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ApplicantStore {
    entries: Vec<StoredApplicant>,
}

impl ApplicantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a record, returning its position.
    pub fn add(&mut self, record: ApplicantRecord) -> Result<usize, StoreError> {
        record.validate()?;
        debug!(name = %record.name, "applicant added");
        self.entries.push(StoredApplicant {
            record,
            breakdown: None,
        });
        Ok(self.entries.len() - 1)
    }

    /// Replace the whole collection, e.g. with records read back from a results file.
    pub fn load(&mut self, records: Vec<ApplicantRecord>) {
        debug!(count = records.len(), "applicant store replaced");
        self.entries = records
            .into_iter()
            .map(|record| StoredApplicant {
                record,
                breakdown: None,
            })
            .collect();
    }

    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "applicant store cleared");
        self.entries.clear();
    }

    /// Replace the record at `index`. Its previous breakdown is discarded.
    pub fn update(&mut self, index: usize, record: ApplicantRecord) -> Result<(), StoreError> {
        record.validate()?;
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(StoreError::NotFound { index })?;
        entry.record = record;
        entry.breakdown = None;
        Ok(())
    }

    pub fn all(&self) -> &[StoredApplicant] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &ApplicantRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn get(&self, index: usize) -> Option<&StoredApplicant> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every stored record carries a current breakdown.
    pub fn is_scored(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|entry| entry.breakdown.is_some())
    }

    /// Recompute and attach a breakdown for every record.
    pub fn score_all(&mut self, engine: &ScoringEngine) {
        for entry in &mut self.entries {
            entry.breakdown = Some(engine.score(&entry.record));
        }
    }

    /// Score every record and return them ranked by total, ties in insertion order.
    pub fn rank(&mut self, engine: &ScoringEngine) -> Vec<RankedApplicant> {
        self.score_all(engine);
        let scored = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .breakdown
                    .map(|breakdown| (entry.record.clone(), breakdown))
            })
            .collect();
        rank_scored(scored)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no applicant at position {index}")]
    NotFound { index: usize },
}

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::persistence::{write_atomically, PersistenceError};
use super::ranking::RankedApplicant;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    rank: usize,
    name: &'a str,
    position: &'a str,
    total: String,
    education: String,
    experience: String,
    skills: String,
    certifications: String,
    interview: String,
    references: String,
}

impl<'a> From<&'a RankedApplicant> for SummaryRow<'a> {
    fn from(value: &'a RankedApplicant) -> Self {
        let scores = &value.breakdown;
        Self {
            rank: value.rank,
            name: &value.record.name,
            position: &value.record.position,
            total: two_decimals(scores.total),
            education: two_decimals(scores.education),
            experience: two_decimals(scores.experience),
            skills: two_decimals(scores.skills),
            certifications: two_decimals(scores.certifications),
            interview: two_decimals(scores.interview),
            references: two_decimals(scores.references),
        }
    }
}

fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Write the ranked summary table as CSV, one row per applicant.
pub fn write_summary<W: Write>(ranked: &[RankedApplicant], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for applicant in ranked {
        csv_writer.serialize(SummaryRow::from(applicant))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_summary(
    ranked: &[RankedApplicant],
    path: impl AsRef<Path>,
) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    write_atomically(path, |writer| Ok(write_summary(ranked, writer)?))?;
    info!(path = %path.display(), rows = ranked.len(), "ranking summary exported");
    Ok(())
}

use serde::Serialize;

use super::domain::ApplicantRecord;
use super::engine::{ScoreBreakdown, ScoringEngine};

/// A record paired with its breakdown and 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedApplicant {
    pub rank: usize,
    pub record: ApplicantRecord,
    pub breakdown: ScoreBreakdown,
}

impl RankedApplicant {
    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

/// Score every record and order them by total, highest first.
pub fn rank<'a, I>(records: I, engine: &ScoringEngine) -> Vec<RankedApplicant>
where
    I: IntoIterator<Item = &'a ApplicantRecord>,
{
    let scored = records
        .into_iter()
        .map(|record| (record.clone(), engine.score(record)))
        .collect();
    rank_scored(scored)
}

/// Order pre-scored records by total, highest first.
///
/// The sort is stable, so equal totals keep the order they were supplied in.
pub fn rank_scored(scored: Vec<(ApplicantRecord, ScoreBreakdown)>) -> Vec<RankedApplicant> {
    let mut scored = scored;
    scored.sort_by(|(_, left), (_, right)| right.total.total_cmp(&left.total));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (record, breakdown))| RankedApplicant {
            rank: index + 1,
            record,
            breakdown,
        })
        .collect()
}

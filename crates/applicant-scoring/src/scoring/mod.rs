//! Applicant intake records, the weighted scoring rubric, ranking, and flat-file persistence.
//!
//! Records are collected into an [`ApplicantStore`], scored by a [`ScoringEngine`],
//! ordered by [`rank`], and written out with [`persistence::save`]. Everything here is
//! synchronous and single-threaded; the HTTP router is stateless per request.

pub mod domain;
pub mod engine;
pub mod export;
pub mod persistence;
pub mod ranking;
pub mod router;
pub mod store;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    parse_experience_years, ApplicantRecord, Certification, EducationLevel, Rating,
    ScoreComponent, Skill, SkillLevel, ValidationError,
};
pub use engine::{score, PositionRequirements, ScoreBreakdown, ScoringEngine};
pub use export::{export_summary, write_summary};
pub use persistence::{
    load, parse_records, save, PersistenceError, ResultsDocument, ScoredApplicantEntry,
    DEFAULT_RESULTS_FILE,
};
pub use ranking::{rank, rank_scored, RankedApplicant};
pub use router::scoring_router;
pub use store::{ApplicantStore, StoreError, StoredApplicant};
pub use weights::WeightTable;

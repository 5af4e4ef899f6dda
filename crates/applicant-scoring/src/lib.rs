//! Weighted scoring, ranking, and flat-file persistence for job applicant records.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

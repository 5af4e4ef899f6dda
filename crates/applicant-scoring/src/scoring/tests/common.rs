use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{
    ApplicantRecord, Certification, EducationLevel, Rating, Skill, SkillLevel,
};
use crate::scoring::engine::ScoringEngine;
use crate::scoring::weights::WeightTable;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn default_engine() -> ScoringEngine {
    ScoringEngine::new(WeightTable::default())
}

/// Bachelor's in a relevant field, six years, one advanced skill, good interview, fair references.
pub(super) fn python_developer() -> ApplicantRecord {
    ApplicantRecord {
        name: "Priya Raman".to_string(),
        email: Some("priya@example.com".to_string()),
        position: "Backend Engineer".to_string(),
        education_level: EducationLevel::Bachelor,
        education_relevant: true,
        experience_years: 6.0,
        skills: vec![Skill::new("Python", SkillLevel::Advanced)],
        certifications: Vec::new(),
        interview_performance: Rating::Good,
        reference_quality: Rating::Fair,
        required_skills: Vec::new(),
        required_certifications: Vec::new(),
        date_added: None,
    }
}

pub(super) fn senior_architect() -> ApplicantRecord {
    ApplicantRecord {
        name: "Tomás Ortega".to_string(),
        email: None,
        position: "Staff Engineer".to_string(),
        education_level: EducationLevel::Master,
        education_relevant: true,
        experience_years: 12.0,
        skills: vec![
            Skill::new("Rust", SkillLevel::Expert),
            Skill::new("Kubernetes", SkillLevel::Advanced),
        ],
        certifications: vec![
            Certification::new("CKA", true),
            Certification::new("AWS Solutions Architect", true),
        ],
        interview_performance: Rating::Excellent,
        reference_quality: Rating::VeryGood,
        required_skills: Vec::new(),
        required_certifications: Vec::new(),
        date_added: None,
    }
}

pub(super) fn junior_analyst() -> ApplicantRecord {
    ApplicantRecord {
        name: "Lee Park".to_string(),
        email: None,
        position: "Data Analyst".to_string(),
        education_level: EducationLevel::Associate,
        education_relevant: false,
        experience_years: 0.5,
        skills: vec![Skill::new("Excel", SkillLevel::Intermediate)],
        certifications: vec![Certification::new("Tableau Desktop", false)],
        interview_performance: Rating::Fair,
        reference_quality: Rating::Poor,
        required_skills: Vec::new(),
        required_certifications: Vec::new(),
        date_added: None,
    }
}

/// Weights that make the total equal the interview score.
pub(super) fn interview_only_weights() -> WeightTable {
    WeightTable {
        education: 0.0,
        experience: 0.0,
        skills: 0.0,
        certifications: 0.0,
        interview: 1.0,
        references: 0.0,
    }
}

pub(super) fn rated(name: &str, interview: Rating) -> ApplicantRecord {
    let mut record = ApplicantRecord::new(name, "Support Specialist");
    record.interview_performance = interview;
    record
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

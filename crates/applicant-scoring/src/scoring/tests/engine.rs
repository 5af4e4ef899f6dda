use super::common::*;
use crate::scoring::domain::{Certification, EducationLevel, Rating, Skill, SkillLevel};
use crate::scoring::engine::{score, PositionRequirements, ScoringEngine};
use crate::scoring::weights::WeightTable;

#[test]
fn engine_scores_reference_applicant_with_default_weights() {
    let breakdown = default_engine().score(&python_developer());

    assert_eq!(breakdown.education, 85.0);
    assert_eq!(breakdown.experience, 85.0);
    assert_eq!(breakdown.skills, 85.0);
    assert_eq!(breakdown.certifications, 0.0);
    assert_eq!(breakdown.interview, 70.0);
    assert_eq!(breakdown.references, 50.0);
    assert_close(breakdown.total, 73.25);
}

#[test]
fn engine_weighs_every_component() {
    let senior = default_engine().score(&senior_architect());
    assert_eq!(senior.education, 95.0);
    assert_eq!(senior.skills, 92.5);
    assert_eq!(senior.certifications, 100.0);
    assert_close(senior.total, 96.5);

    let junior = default_engine().score(&junior_analyst());
    assert_eq!(junior.education, 60.0);
    assert_eq!(junior.certifications, 0.0);
    assert_eq!(junior.references, 30.0);
    assert_close(junior.total, 42.5);
}

#[test]
fn scoring_is_idempotent() {
    let engine = default_engine();
    let record = senior_architect();
    assert_eq!(engine.score(&record), engine.score(&record));
    assert_eq!(score(&record, &WeightTable::default()), engine.score(&record));
}

#[test]
fn totals_are_not_clamped_for_oversized_weights() {
    let weights = WeightTable {
        education: 1.0,
        experience: 1.0,
        skills: 1.0,
        certifications: 1.0,
        interview: 1.0,
        references: 1.0,
    };
    let breakdown = score(&senior_architect(), &weights);
    assert_close(breakdown.total, 95.0 + 100.0 + 92.5 + 100.0 + 100.0 + 85.0);
}

#[test]
fn unrecognized_values_score_zero_instead_of_failing() {
    let mut record = python_developer();
    record.education_level = EducationLevel::from("bootcamp");
    record.interview_performance = Rating::from("outstanding");
    record.reference_quality = Rating::from("");
    record.skills = vec![Skill::new("Python", SkillLevel::from("wizard"))];

    let breakdown = default_engine().score(&record);
    assert_eq!(breakdown.education, 0.0);
    assert_eq!(breakdown.skills, 0.0);
    assert_eq!(breakdown.interview, 0.0);
    assert_eq!(breakdown.references, 0.0);
    assert_eq!(breakdown.experience, 85.0);
}

#[test]
fn requirements_grant_coverage_bonuses() {
    let mut record = python_developer();
    record.certifications = vec![
        Certification::new("PCAP", true),
        Certification::new("Scrum Master", false),
    ];
    let requirements = PositionRequirements {
        required_skills: vec!["python".to_string(), "SQL".to_string()],
        required_certifications: vec!["PCAP".to_string()],
    };

    let plain = default_engine().score(&record);
    let engine = ScoringEngine::new(WeightTable::default()).with_requirements(requirements);
    let boosted = engine.score(&record);

    assert_eq!(plain.skills, 85.0);
    assert_eq!(boosted.skills, 95.0);
    assert_eq!(plain.certifications, 50.0);
    assert_eq!(boosted.certifications, 80.0);
    assert!(boosted.total > plain.total);
}

#[test]
fn negative_experience_scores_zero() {
    let mut record = python_developer();
    record.experience_years = -3.0;
    assert_eq!(default_engine().score(&record).experience, 0.0);
}

#[test]
fn record_requirements_override_position_requirements() {
    let mut record = python_developer();
    record.skills = vec![Skill::new("Rust", SkillLevel::Advanced)];
    record.certifications = vec![Certification::new("CKA", true), Certification::new("X", false)];
    record.required_skills = vec!["Rust".to_string()];
    record.required_certifications = vec!["CKA".to_string()];

    let own = default_engine().score(&record);
    assert_eq!(own.skills, 100.0);
    assert_eq!(own.certifications, 80.0);

    let position = PositionRequirements {
        required_skills: vec!["Go".to_string()],
        required_certifications: vec!["PMP".to_string()],
    };
    let engine = ScoringEngine::new(WeightTable::default()).with_requirements(position);
    assert_eq!(engine.score(&record), own);

    record.required_skills.clear();
    record.required_certifications.clear();
    let fallback = engine.score(&record);
    assert_eq!(fallback.skills, 85.0);
    assert_eq!(fallback.certifications, 50.0);
}

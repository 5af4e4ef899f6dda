mod rules;

pub use rules::{
    certifications_score, education_score, experience_score, rating_score, skills_score,
};

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantRecord, ScoreComponent};
use super::weights::WeightTable;

/// Skills and certifications a position asks for; matching names earn a coverage bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionRequirements {
    pub required_skills: Vec<String>,
    pub required_certifications: Vec<String>,
}

impl PositionRequirements {
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty() && self.required_certifications.is_empty()
    }
}

/// Per-component scores in `[0, 100]` plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub certifications: f64,
    pub interview: f64,
    pub references: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn component(&self, component: ScoreComponent) -> f64 {
        match component {
            ScoreComponent::Education => self.education,
            ScoreComponent::Experience => self.experience,
            ScoreComponent::Skills => self.skills,
            ScoreComponent::Certifications => self.certifications,
            ScoreComponent::Interview => self.interview,
            ScoreComponent::References => self.references,
        }
    }
}

/// Stateless evaluator that applies a weight table and position requirements to records.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: WeightTable,
    requirements: PositionRequirements,
}

impl ScoringEngine {
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            requirements: PositionRequirements::default(),
        }
    }

    pub fn with_requirements(mut self, requirements: PositionRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn requirements(&self) -> &PositionRequirements {
        &self.requirements
    }

    pub fn score(&self, record: &ApplicantRecord) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown {
            education: education_score(&record.education_level, record.education_relevant),
            experience: experience_score(record.experience_years),
            skills: skills_score(
                &record.skills,
                effective(&record.required_skills, &self.requirements.required_skills),
            ),
            certifications: certifications_score(
                &record.certifications,
                effective(
                    &record.required_certifications,
                    &self.requirements.required_certifications,
                ),
            ),
            interview: rating_score(&record.interview_performance),
            references: rating_score(&record.reference_quality),
            total: 0.0,
        };

        breakdown.total = ScoreComponent::ALL
            .iter()
            .map(|component| breakdown.component(*component) * self.weights.weight(*component))
            .sum();

        breakdown
    }
}

/// A record's own requirement list wins over the position's when it names anything.
fn effective<'a>(own: &'a [String], position: &'a [String]) -> &'a [String] {
    if own.is_empty() {
        position
    } else {
        own
    }
}

/// Score one record against a weight table with no position requirements.
pub fn score(record: &ApplicantRecord, weights: &WeightTable) -> ScoreBreakdown {
    ScoringEngine::new(*weights).score(record)
}

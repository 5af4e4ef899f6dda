use serde::{Deserialize, Serialize};

use super::domain::ScoreComponent;

const NORMALIZED_TOLERANCE: f64 = 1e-6;

/// Relative importance of each rubric component.
///
/// Weights are not required to sum to 1. Callers who want totals in `[0, 100]`
/// keep them normalized; [`WeightTable::is_normalized`] reports whether they are.
/// Keys missing from a serialized table fall back to the default weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTable {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub certifications: f64,
    pub interview: f64,
    pub references: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            education: 0.25,
            experience: 0.30,
            skills: 0.20,
            certifications: 0.10,
            interview: 0.10,
            references: 0.05,
        }
    }
}

impl WeightTable {
    pub fn weight(&self, component: ScoreComponent) -> f64 {
        match component {
            ScoreComponent::Education => self.education,
            ScoreComponent::Experience => self.experience,
            ScoreComponent::Skills => self.skills,
            ScoreComponent::Certifications => self.certifications,
            ScoreComponent::Interview => self.interview,
            ScoreComponent::References => self.references,
        }
    }

    pub fn set(&mut self, component: ScoreComponent, weight: f64) {
        let slot = match component {
            ScoreComponent::Education => &mut self.education,
            ScoreComponent::Experience => &mut self.experience,
            ScoreComponent::Skills => &mut self.skills,
            ScoreComponent::Certifications => &mut self.certifications,
            ScoreComponent::Interview => &mut self.interview,
            ScoreComponent::References => &mut self.references,
        };
        *slot = weight;
    }

    pub fn sum(&self) -> f64 {
        ScoreComponent::ALL
            .iter()
            .map(|component| self.weight(*component))
            .sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < NORMALIZED_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = WeightTable::default();
        assert!(weights.is_normalized());
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partial_tables_fall_back_to_defaults() {
        let weights: WeightTable =
            serde_json::from_str(r#"{"experience": 0.5}"#).expect("partial table parses");
        assert_eq!(weights.experience, 0.5);
        assert_eq!(weights.education, 0.25);
        assert!(!weights.is_normalized());
    }

    #[test]
    fn set_updates_the_named_component() {
        let mut weights = WeightTable::default();
        weights.set(ScoreComponent::References, 0.0);
        assert_eq!(weights.weight(ScoreComponent::References), 0.0);
        assert!((weights.sum() - 0.95).abs() < 1e-9);
    }
}

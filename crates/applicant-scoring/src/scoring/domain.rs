use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One candidate's submitted qualifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default = "default_true")]
    pub education_relevant: bool,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub interview_performance: Rating,
    #[serde(default)]
    pub reference_quality: Rating,
    /// Per-applicant requirements; when non-empty they replace the engine's position requirements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
}

impl ApplicantRecord {
    /// Minimal record with lenient defaults for everything but the name and position.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            position: position.into(),
            education_level: EducationLevel::default(),
            education_relevant: true,
            experience_years: 0.0,
            skills: Vec::new(),
            certifications: Vec::new(),
            interview_performance: Rating::default(),
            reference_quality: Rating::default(),
            required_skills: Vec::new(),
            required_certifications: Vec::new(),
            date_added: None,
        }
    }

    /// Reject records the scoring rubric cannot meaningfully evaluate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        check_experience_years(self.experience_years)
    }
}

fn default_true() -> bool {
    true
}

/// Parse free-form years-of-experience input collected from a caller.
pub fn parse_experience_years(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let years = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NonNumericExperience(trimmed.to_string()))?;
    check_experience_years(years)?;
    Ok(years)
}

fn check_experience_years(years: f64) -> Result<(), ValidationError> {
    if !years.is_finite() {
        return Err(ValidationError::NonNumericExperience(years.to_string()));
    }
    if years < 0.0 {
        return Err(ValidationError::NegativeExperience(years));
    }
    Ok(())
}

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("applicant name must not be blank")]
    MissingName,
    #[error("years of experience must be a number, got '{0}'")]
    NonNumericExperience(String),
    #[error("years of experience cannot be negative, got {0}")]
    NegativeExperience(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default = "default_true")]
    pub valid: bool,
}

impl Certification {
    pub fn new(name: impl Into<String>, valid: bool) -> Self {
        Self {
            name: name.into(),
            valid,
        }
    }
}

/// Highest completed education. Unknown text is kept verbatim and scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
    Professional,
    Unrecognized(String),
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Phd,
        EducationLevel::Professional,
    ];

    pub fn key(&self) -> &str {
        match self {
            Self::HighSchool => "high_school",
            Self::Associate => "associate",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Phd => "phd",
            Self::Professional => "professional",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::HighSchool => "High School",
            Self::Associate => "Associate Degree",
            Self::Bachelor => "Bachelor's Degree",
            Self::Master => "Master's Degree",
            Self::Phd => "PhD",
            Self::Professional => "Professional Degree",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Default for EducationLevel {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<&str> for EducationLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high_school" => Self::HighSchool,
            "associate" => Self::Associate,
            "bachelor" => Self::Bachelor,
            "master" => Self::Master,
            "phd" => Self::Phd,
            "professional" => Self::Professional,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.key().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Unrecognized(String),
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn key(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SkillLevel> for String {
    fn from(value: SkillLevel) -> Self {
        value.key().to_string()
    }
}

/// Shared scale for interview performance and reference quality.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rating {
    Poor,
    #[default]
    Fair,
    Good,
    VeryGood,
    Excellent,
    Unrecognized(String),
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::Poor,
        Rating::Fair,
        Rating::Good,
        Rating::VeryGood,
        Rating::Excellent,
    ];

    pub fn key(&self) -> &str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::VeryGood => "very_good",
            Self::Excellent => "excellent",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Rating {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "poor" => Self::Poor,
            "fair" => Self::Fair,
            "good" => Self::Good,
            "very_good" => Self::VeryGood,
            "excellent" => Self::Excellent,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Rating {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Rating> for String {
    fn from(value: Rating) -> Self {
        value.key().to_string()
    }
}

/// The six rubric components contributing to a weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponent {
    Education,
    Experience,
    Skills,
    Certifications,
    Interview,
    References,
}

impl ScoreComponent {
    pub const ALL: [ScoreComponent; 6] = [
        ScoreComponent::Education,
        ScoreComponent::Experience,
        ScoreComponent::Skills,
        ScoreComponent::Certifications,
        ScoreComponent::Interview,
        ScoreComponent::References,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Interview => "interview",
            Self::References => "references",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications",
            Self::Interview => "Interview",
            Self::References => "References",
        }
    }
}

impl fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerations_parse_case_insensitively() {
        assert_eq!(EducationLevel::from("Bachelor"), EducationLevel::Bachelor);
        assert_eq!(SkillLevel::from(" EXPERT "), SkillLevel::Expert);
        assert_eq!(Rating::from("Very_Good"), Rating::VeryGood);
    }

    #[test]
    fn unrecognized_values_are_kept_verbatim() {
        let level = EducationLevel::from("bootcamp");
        assert_eq!(level, EducationLevel::Unrecognized("bootcamp".to_string()));
        assert_eq!(String::from(level), "bootcamp");
    }

    #[test]
    fn missing_fields_take_lenient_defaults() {
        let record: ApplicantRecord =
            serde_json::from_str(r#"{"name": "Grace"}"#).expect("minimal record parses");
        assert!(record.education_relevant);
        assert_eq!(record.interview_performance, Rating::Fair);
        assert_eq!(record.reference_quality, Rating::Fair);
        assert_eq!(record.education_level, EducationLevel::default());
        assert_eq!(record.experience_years, 0.0);
    }

    #[test]
    fn skill_and_certification_defaults_follow_intake_rules() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Rust"}"#).expect("skill parses");
        assert_eq!(skill.level, SkillLevel::Beginner);
        let cert: Certification =
            serde_json::from_str(r#"{"name": "CKA"}"#).expect("certification parses");
        assert!(cert.valid);
    }

    #[test]
    fn parse_experience_years_rejects_non_numeric_input() {
        assert_eq!(parse_experience_years(" 2.5 "), Ok(2.5));
        assert_eq!(
            parse_experience_years("five"),
            Err(ValidationError::NonNumericExperience("five".to_string()))
        );
        assert_eq!(
            parse_experience_years("-1"),
            Err(ValidationError::NegativeExperience(-1.0))
        );
        assert!(parse_experience_years("NaN").is_err());
    }

    #[test]
    fn validate_requires_a_name() {
        let record = ApplicantRecord::new("   ", "Engineer");
        assert_eq!(record.validate(), Err(ValidationError::MissingName));
        assert!(ApplicantRecord::new("Ada", "Engineer").validate().is_ok());
    }
}

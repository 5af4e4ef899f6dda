use super::super::domain::{Certification, EducationLevel, Rating, Skill, SkillLevel};

const RELEVANT_FIELD_BONUS: f64 = 5.0;
const SKILL_COVERAGE_BONUS: f64 = 20.0;
const CERTIFICATION_COVERAGE_BONUS: f64 = 30.0;
const MAX_SCORE: f64 = 100.0;

pub(crate) fn education_base(level: &EducationLevel) -> f64 {
    match level {
        EducationLevel::HighSchool => 40.0,
        EducationLevel::Associate => 60.0,
        EducationLevel::Bachelor => 80.0,
        EducationLevel::Master => 90.0,
        EducationLevel::Phd => 100.0,
        EducationLevel::Professional => 95.0,
        EducationLevel::Unrecognized(_) => 0.0,
    }
}

pub fn education_score(level: &EducationLevel, relevant: bool) -> f64 {
    let base = education_base(level);
    if relevant && base > 0.0 {
        (base + RELEVANT_FIELD_BONUS).min(MAX_SCORE)
    } else {
        base
    }
}

pub fn experience_score(years: f64) -> f64 {
    if years.is_nan() || years < 0.0 {
        0.0
    } else if years < 1.0 {
        30.0
    } else if years < 2.0 {
        50.0
    } else if years < 5.0 {
        70.0
    } else if years < 10.0 {
        85.0
    } else {
        100.0
    }
}

pub(crate) fn proficiency_score(level: &SkillLevel) -> f64 {
    match level {
        SkillLevel::Beginner => 30.0,
        SkillLevel::Intermediate => 60.0,
        SkillLevel::Advanced => 85.0,
        SkillLevel::Expert => 100.0,
        SkillLevel::Unrecognized(_) => 0.0,
    }
}

pub fn skills_score(skills: &[Skill], required: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let average =
        skills.iter().map(|skill| proficiency_score(&skill.level)).sum::<f64>() / skills.len() as f64;

    let matched = count_required(skills.iter().map(|skill| skill.name.as_str()), required);
    with_coverage_bonus(average, matched, required.len(), SKILL_COVERAGE_BONUS)
}

pub fn certifications_score(certifications: &[Certification], required: &[String]) -> f64 {
    if certifications.is_empty() {
        return 0.0;
    }

    let valid = certifications.iter().filter(|cert| cert.valid).count();
    let base = valid as f64 / certifications.len() as f64 * 100.0;

    let matched = count_required(
        certifications.iter().map(|cert| cert.name.as_str()),
        required,
    );
    with_coverage_bonus(base, matched, required.len(), CERTIFICATION_COVERAGE_BONUS)
}

pub fn rating_score(rating: &Rating) -> f64 {
    match rating {
        Rating::Poor => 30.0,
        Rating::Fair => 50.0,
        Rating::Good => 70.0,
        Rating::VeryGood => 85.0,
        Rating::Excellent => 100.0,
        Rating::Unrecognized(_) => 0.0,
    }
}

fn count_required<'a>(names: impl Iterator<Item = &'a str>, required: &[String]) -> usize {
    names
        .filter(|name| {
            required
                .iter()
                .any(|wanted| wanted.trim().eq_ignore_ascii_case(name.trim()))
        })
        .count()
}

fn with_coverage_bonus(base: f64, matched: usize, required: usize, bonus: f64) -> f64 {
    if required == 0 || matched == 0 {
        return base;
    }
    (base + matched as f64 / required as f64 * bonus).min(MAX_SCORE)
}

use std::io::{self, Write};

use applicant_scoring::scoring::{RankedApplicant, ScoreComponent, WeightTable};

const TABLE_WIDTH: usize = 100;

pub(crate) fn render_summary<W: Write>(out: &mut W, ranked: &[RankedApplicant]) -> io::Result<()> {
    let heavy = "=".repeat(TABLE_WIDTH);
    let light = "-".repeat(TABLE_WIDTH);

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "APPLICANT SCORING RESULTS")?;
    writeln!(out, "{heavy}")?;

    if ranked.is_empty() {
        writeln!(out, "\n[INFO] No applicants to display.")?;
        return Ok(());
    }

    writeln!(out, "\nTotal Applicants: {}\n", ranked.len())?;
    writeln!(out, "{light}")?;
    writeln!(
        out,
        "{:<6} {:<25} {:<12} {:<12} {:<12} {:<12} {:<20}",
        "Rank", "Name", "Total Score", "Education", "Experience", "Skills", "Position"
    )?;
    writeln!(out, "{light}")?;

    for applicant in ranked {
        let scores = &applicant.breakdown;
        writeln!(
            out,
            "{:<6} {:<25} {:>10.2}  {:>10.2}  {:>10.2}  {:>10.2}  {:<20}",
            applicant.rank,
            applicant.record.name,
            scores.total,
            scores.education,
            scores.experience,
            scores.skills,
            display_or_na(&applicant.record.position)
        )?;
    }

    writeln!(out, "{light}")
}

pub(crate) fn render_detail<W: Write>(
    out: &mut W,
    applicant: &RankedApplicant,
    weights: &WeightTable,
) -> io::Result<()> {
    let heavy = "=".repeat(TABLE_WIDTH);
    let record = &applicant.record;

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "DETAILED APPLICANT INFORMATION: {}", record.name)?;
    writeln!(out, "{heavy}")?;

    writeln!(out, "\nName: {}", record.name)?;
    if let Some(email) = record.email.as_deref().filter(|email| !email.is_empty()) {
        writeln!(out, "Email: {email}")?;
    }
    writeln!(out, "Position: {}", display_or_na(&record.position))?;

    writeln!(out, "\n--- SCORES ---")?;
    writeln!(out, "Total Score: {:.2}/100", applicant.breakdown.total)?;
    for component in ScoreComponent::ALL {
        writeln!(
            out,
            "  {}: {:.2}/100 (Weight: {:.0}%)",
            component.label(),
            applicant.breakdown.component(component),
            weights.weight(component) * 100.0
        )?;
    }

    writeln!(out, "\n--- QUALIFICATIONS ---")?;
    writeln!(
        out,
        "Education Level: {}",
        display_or_na(record.education_level.label())
    )?;
    writeln!(
        out,
        "Education Relevant: {}",
        if record.education_relevant { "Yes" } else { "No" }
    )?;
    writeln!(out, "Experience Years: {}", record.experience_years)?;

    writeln!(out, "\nSkills:")?;
    if record.skills.is_empty() {
        writeln!(out, "  None")?;
    }
    for skill in &record.skills {
        writeln!(out, "  - {}: {}", skill.name, skill.level.label())?;
    }

    writeln!(out, "\nCertifications:")?;
    if record.certifications.is_empty() {
        writeln!(out, "  None")?;
    }
    for cert in &record.certifications {
        let status = if cert.valid { "Valid" } else { "Invalid" };
        writeln!(out, "  - {}: {status}", cert.name)?;
    }

    writeln!(
        out,
        "\nInterview Performance: {}",
        display_or_na(record.interview_performance.label())
    )?;
    writeln!(
        out,
        "Reference Quality: {}",
        display_or_na(record.reference_quality.label())
    )?;
    writeln!(out, "{heavy}")
}

fn display_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

use std::io::{self, Write};
use std::path::PathBuf;

use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use applicant_scoring::scoring::{
    self, export_summary, ApplicantStore, RankedApplicant, ScoringEngine, WeightTable,
};
use clap::Args;
use tracing::info;

use crate::cli::RequirementArgs;
use crate::display::{render_detail, render_summary};

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Applicant file: a JSON list of applicants or a saved results document
    pub(crate) input: PathBuf,
    /// Write the ranked results document here
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
    /// Also write a CSV summary of the ranking
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the detailed breakdown for every applicant
    #[arg(long)]
    pub(crate) details: bool,
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    rank_file(args, config.scoring.weights, &mut out)?;
    Ok(())
}

/// Load, validate, score, and rank one applicant file, then write the requested outputs.
pub(crate) fn rank_file<W: Write>(
    args: RankArgs,
    weights: WeightTable,
    out: &mut W,
) -> Result<Vec<RankedApplicant>, AppError> {
    let RankArgs {
        input,
        output,
        csv,
        details,
        requirements,
    } = args;

    let records = scoring::load(&input)?;
    let mut store = ApplicantStore::new();
    for record in records {
        store.add(record)?;
    }

    let engine = ScoringEngine::new(weights).with_requirements(requirements.into());
    let ranked = store.rank(&engine);
    info!(
        input = %input.display(),
        applicants = ranked.len(),
        "ranked applicant file"
    );

    render_summary(out, &ranked)?;
    if details {
        for applicant in &ranked {
            render_detail(out, applicant, engine.weights())?;
        }
    }

    if let Some(path) = output {
        scoring::save(&ranked, engine.weights(), &path)?;
        writeln!(out, "\n[SAVED] Results saved to {}", path.display())?;
    }
    if let Some(path) = csv {
        export_summary(&ranked, &path)?;
        writeln!(out, "[SAVED] Summary written to {}", path.display())?;
    }

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use applicant_scoring::scoring::StoreError;
    use std::fs;

    const APPLICANTS: &str = r#"[
        {
            "name": "Lee Park",
            "position": "Data Analyst",
            "education_level": "high_school",
            "experience_years": 1,
            "skills": [{"name": "Excel", "level": "intermediate"}],
            "interview_performance": "fair",
            "reference_quality": "poor"
        },
        {
            "name": "Priya Raman",
            "position": "Data Analyst",
            "education_level": "bachelor",
            "experience_years": 6,
            "skills": [{"name": "SQL", "level": "advanced"}],
            "interview_performance": "good",
            "reference_quality": "fair"
        }
    ]"#;

    fn args(input: PathBuf) -> RankArgs {
        RankArgs {
            input,
            output: None,
            csv: None,
            details: false,
            requirements: RequirementArgs::default(),
        }
    }

    #[test]
    fn ranks_file_and_writes_requested_outputs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("applicants.json");
        fs::write(&input, APPLICANTS).expect("fixture");
        let output = dir.path().join("ranked.json");
        let csv = dir.path().join("ranked.csv");

        let mut request = args(input);
        request.output = Some(output.clone());
        request.csv = Some(csv.clone());
        request.details = true;

        let mut out = Vec::new();
        let ranked = rank_file(request, WeightTable::default(), &mut out).expect("ranked");

        assert_eq!(ranked[0].record.name, "Priya Raman");
        assert_eq!(ranked[1].record.name, "Lee Park");
        assert_eq!(scoring::load(&output).expect("results reload").len(), 2);
        let summary = fs::read_to_string(&csv).expect("csv written");
        assert!(summary.starts_with("rank,name,position,total"));

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("DETAILED APPLICANT INFORMATION: Lee Park"));
        assert!(text.contains("[SAVED] Results saved to"));
    }

    #[test]
    fn invalid_applicants_abort_the_run() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("applicants.json");
        fs::write(&input, r#"[{"name": "  ", "position": "Analyst"}]"#).expect("fixture");

        let err = rank_file(args(input), WeightTable::default(), &mut Vec::new())
            .expect_err("blank name rejected");
        assert!(matches!(err, AppError::Store(StoreError::Validation(_))));
    }

    #[test]
    fn requirements_change_the_ordering() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("applicants.json");
        fs::write(&input, APPLICANTS).expect("fixture");

        let mut request = args(input);
        request.requirements.require_skill = vec!["excel".to_string()];

        let ranked =
            rank_file(request, WeightTable::default(), &mut Vec::new()).expect("ranked");
        let lee = ranked
            .iter()
            .find(|applicant| applicant.record.name == "Lee Park")
            .expect("Lee ranked");
        assert!(lee.breakdown.skills > 60.0);
    }
}

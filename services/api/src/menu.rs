use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use applicant_scoring::scoring::{
    self, parse_experience_years, ApplicantRecord, ApplicantStore, Certification, EducationLevel,
    RankedApplicant, Rating, ScoringEngine, Skill, SkillLevel,
};
use chrono::Local;
use clap::Args;
use tracing::{info, warn};

use crate::display::{render_detail, render_summary};
use crate::prompt::Prompter;
use crate::cli::RequirementArgs;

const BANNER_WIDTH: usize = 70;

#[derive(Args, Debug, Default)]
pub(crate) struct MenuArgs {
    /// File used when saving without an explicit name (defaults to SCORING_RESULTS_PATH)
    #[arg(long)]
    pub(crate) results: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
}

pub(crate) fn run(args: MenuArgs, config: &AppConfig) -> Result<(), AppError> {
    let MenuArgs {
        results,
        requirements,
    } = args;

    let engine =
        ScoringEngine::new(config.scoring.weights).with_requirements(requirements.into());
    if !engine.weights().is_normalized() {
        warn!(
            sum = engine.weights().sum(),
            "scoring weights do not sum to 1; totals may leave the 0-100 range"
        );
    }
    let results_path = results.unwrap_or_else(|| config.scoring.results_path.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(stdin.lock(), stdout.lock(), engine, results_path);
    session.run()?;
    Ok(())
}

/// One interactive run: an owned applicant store plus the most recent ranking.
pub(crate) struct MenuSession<R, W> {
    prompter: Prompter<R, W>,
    store: ApplicantStore,
    ranked: Vec<RankedApplicant>,
    engine: ScoringEngine,
    results_path: PathBuf,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub(crate) fn new(input: R, output: W, engine: ScoringEngine, results_path: PathBuf) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            store: ApplicantStore::new(),
            ranked: Vec::new(),
            engine,
            results_path,
        }
    }

    pub(crate) fn run(&mut self) -> io::Result<()> {
        self.welcome()?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.prompter.ask("\nEnter your choice (1-8): ")? else {
                writeln!(self.out(), "\nInput closed. Goodbye!")?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add_applicant()?,
                "2" => self.score_applicants()?,
                "3" => self.show_scores()?,
                "4" => self.show_details()?,
                "5" => self.save_results()?,
                "6" => self.load_applicants()?,
                "7" => self.clear_applicants()?,
                "8" => {
                    self.exit()?;
                    return Ok(());
                }
                _ => writeln!(
                    self.out(),
                    "\n[ERROR] Invalid choice! Please enter a number between 1-8."
                )?,
            }
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompter.out()
    }

    fn welcome(&mut self) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let out = self.out();
        writeln!(out, "\n{banner}")?;
        writeln!(out, "WELCOME TO JOB APPLICANT SCORING SYSTEM")?;
        writeln!(out, "{banner}")?;
        writeln!(
            out,
            "\nThis system evaluates job applicants based on multiple features:"
        )?;
        writeln!(out, "  - Education Level and Relevance")?;
        writeln!(out, "  - Years of Experience")?;
        writeln!(out, "  - Skills and Proficiency Levels")?;
        writeln!(out, "  - Certifications")?;
        writeln!(out, "  - Interview Performance")?;
        writeln!(out, "  - Reference Quality")?;
        writeln!(
            out,
            "\nApplicants are scored using weighted criteria and ranked accordingly."
        )
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let out = self.out();
        writeln!(out, "\n{banner}")?;
        writeln!(out, "        JOB APPLICANT SCORING SYSTEM")?;
        writeln!(out, "{banner}")?;
        writeln!(out, "1. Add Applicant")?;
        writeln!(out, "2. Score All Applicants")?;
        writeln!(out, "3. Display Scores Summary")?;
        writeln!(out, "4. Display Detailed Applicant Information")?;
        writeln!(out, "5. Save Results to File")?;
        writeln!(out, "6. Load Applicants from File")?;
        writeln!(out, "7. Clear All Applicants")?;
        writeln!(out, "8. Exit")?;
        writeln!(out, "{banner}")
    }

    fn add_applicant(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- ADD APPLICANT ---")?;

        let Some(mut record) = self.collect_applicant()? else {
            writeln!(self.out(), "\n[CANCELLED] Applicant entry cancelled.")?;
            return Ok(());
        };
        record.date_added = Some(Local::now().naive_local());
        let name = record.name.clone();

        match self.store.add(record) {
            Ok(_) => {
                self.ranked.clear();
                let total = self.store.len();
                writeln!(self.out(), "\n[OK] Applicant added: {name}")?;
                writeln!(self.out(), "[OK] Total applicants: {total}")
            }
            Err(err) => writeln!(self.out(), "\n[ERROR] Applicant rejected: {err}"),
        }
    }

    fn collect_applicant(&mut self) -> io::Result<Option<ApplicantRecord>> {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(self.out(), "\n{banner}")?;
        writeln!(self.out(), "ENTER APPLICANT INFORMATION")?;
        writeln!(self.out(), "{banner}")?;
        writeln!(self.out(), "(Leave the name blank to cancel)\n")?;

        let name = match self.prompter.ask("Enter applicant name: ")? {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };
        let email = self
            .prompter
            .ask("Enter email (optional): ")?
            .filter(|email| !email.is_empty());
        let position = self
            .prompter
            .ask("Enter position applied for: ")?
            .unwrap_or_default();

        writeln!(self.out(), "\n--- Education Information ---")?;
        let levels = EducationLevel::ALL;
        let education_options: Vec<(&str, EducationLevel)> = levels
            .iter()
            .map(|level| (level.label(), level.clone()))
            .collect();
        let Some(education_level) = self
            .prompter
            .choose("SELECT EDUCATION LEVEL:", &education_options)?
        else {
            return Ok(None);
        };
        let education_relevant = self
            .prompter
            .confirm("Is education in relevant field? (y/n) [default: y]: ", true)?;

        writeln!(self.out(), "\n--- Experience Information ---")?;
        let experience_years = loop {
            let Some(raw) = self.prompter.ask("Enter years of experience: ")? else {
                return Ok(None);
            };
            match parse_experience_years(&raw) {
                Ok(years) => break years,
                Err(err) => writeln!(self.out(), "[ERROR] {err}. Please try again.")?,
            }
        };

        let skills = self.collect_skills()?;
        let certifications = self.collect_certifications()?;

        writeln!(self.out(), "\n--- Interview Performance ---")?;
        let interview_performance = self.choose_rating()?;
        writeln!(self.out(), "\n--- Reference Quality ---")?;
        let reference_quality = self.choose_rating()?;

        Ok(Some(ApplicantRecord {
            name,
            email,
            position,
            education_level,
            education_relevant,
            experience_years,
            skills,
            certifications,
            interview_performance,
            reference_quality,
            required_skills: Vec::new(),
            required_certifications: Vec::new(),
            date_added: None,
        }))
    }

    fn collect_skills(&mut self) -> io::Result<Vec<Skill>> {
        writeln!(self.out(), "\n--- Skills Information ---")?;
        writeln!(
            self.out(),
            "Enter skills (press Enter with empty name to finish)"
        )?;

        let levels = SkillLevel::ALL;
        let options: Vec<(&str, SkillLevel)> = levels
            .iter()
            .map(|level| (level.label(), level.clone()))
            .collect();
        let mut skills = Vec::new();

        loop {
            let name = match self
                .prompter
                .ask("Enter skill name (or press Enter to finish): ")?
            {
                Some(name) if !name.is_empty() => name,
                _ => break,
            };
            let Some(level) = self.prompter.choose("SELECT SKILL LEVEL:", &options)? else {
                continue;
            };
            writeln!(self.out(), "[OK] Added skill: {name} ({})", level.key())?;
            skills.push(Skill::new(name, level));
        }

        Ok(skills)
    }

    fn collect_certifications(&mut self) -> io::Result<Vec<Certification>> {
        writeln!(self.out(), "\n--- Certifications Information ---")?;
        writeln!(
            self.out(),
            "Enter certifications (press Enter with empty name to finish)"
        )?;

        let mut certifications = Vec::new();
        loop {
            let name = match self
                .prompter
                .ask("Enter certification name (or press Enter to finish): ")?
            {
                Some(name) if !name.is_empty() => name,
                _ => break,
            };
            let valid = self
                .prompter
                .confirm("Is this certification valid? (y/n) [default: y]: ", true)?;
            let status = if valid { "valid" } else { "invalid" };
            writeln!(self.out(), "[OK] Added certification: {name} ({status})")?;
            certifications.push(Certification::new(name, valid));
        }

        Ok(certifications)
    }

    /// Rating menu; cancelling keeps the `fair` default.
    fn choose_rating(&mut self) -> io::Result<Rating> {
        let ratings = Rating::ALL;
        let options: Vec<(&str, Rating)> = ratings
            .iter()
            .map(|rating| (rating.label(), rating.clone()))
            .collect();
        Ok(self
            .prompter
            .choose("SELECT PERFORMANCE RATING:", &options)?
            .unwrap_or_default())
    }

    fn rank_all(&mut self) {
        self.ranked = self.store.rank(&self.engine);
        info!(applicants = self.ranked.len(), "applicants ranked");
    }

    fn score_applicants(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- SCORE ALL APPLICANTS ---")?;
        if self.store.is_empty() {
            return writeln!(
                self.out(),
                "[ERROR] No applicants to score. Please add applicants first."
            );
        }

        self.rank_all();
        let count = self.ranked.len();
        writeln!(self.out(), "\n[OK] Scored {count} applicants.")?;
        render_summary(self.prompter.out(), &self.ranked)
    }

    fn show_scores(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- SCORES SUMMARY ---")?;
        if self.ranked.is_empty() {
            return self.report_unscored();
        }
        render_summary(self.prompter.out(), &self.ranked)
    }

    fn show_details(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- DETAILED APPLICANT INFORMATION ---")?;
        if self.ranked.is_empty() {
            return self.report_unscored();
        }
        render_summary(self.prompter.out(), &self.ranked)?;

        let Some(raw) = self
            .prompter
            .ask("\nEnter rank number to view details (or 0 to cancel): ")?
        else {
            return Ok(());
        };

        match raw.parse::<usize>() {
            Ok(0) => Ok(()),
            Ok(rank) if rank <= self.ranked.len() => render_detail(
                self.prompter.out(),
                &self.ranked[rank - 1],
                self.engine.weights(),
            ),
            Ok(_) => {
                let count = self.ranked.len();
                writeln!(
                    self.out(),
                    "[ERROR] Invalid rank. Please enter a number between 1 and {count}."
                )
            }
            Err(_) => writeln!(self.out(), "[ERROR] Invalid input. Please enter a number."),
        }
    }

    fn report_unscored(&mut self) -> io::Result<()> {
        writeln!(
            self.out(),
            "[INFO] No scored applicants. Please score applicants first (option 2)."
        )
    }

    fn save_results(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- SAVE RESULTS ---")?;
        if self.ranked.is_empty() {
            writeln!(
                self.out(),
                "[WARNING] No scored applicants. Scoring applicants first..."
            )?;
            self.rank_all();
        }

        let prompt = format!(
            "Enter filename (default: {}): ",
            self.results_path.display()
        );
        let path = match self.prompter.ask(&prompt)? {
            Some(name) if !name.is_empty() => json_file_name(name),
            _ => self.results_path.clone(),
        };

        self.write_results(path)
    }

    fn write_results(&mut self, path: PathBuf) -> io::Result<()> {
        match scoring::save(&self.ranked, self.engine.weights(), &path) {
            Ok(_) => writeln!(
                self.out(),
                "\n[SAVED] Results saved to {}",
                path.display()
            ),
            Err(err) => writeln!(self.out(), "[ERROR] {err}"),
        }
    }

    fn load_applicants(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- LOAD APPLICANTS FROM FILE ---")?;
        let path = match self.prompter.ask("Enter filename to load: ")? {
            Some(name) if !name.is_empty() => PathBuf::from(name),
            _ => return writeln!(self.out(), "[ERROR] No filename given."),
        };

        match scoring::load(&path) {
            Ok(records) => {
                let count = records.len();
                self.store.load(records);
                self.ranked.clear();
                writeln!(
                    self.out(),
                    "[OK] Loaded {count} applicants from {}.",
                    path.display()
                )
            }
            Err(err) => writeln!(self.out(), "[ERROR] {err}"),
        }
    }

    fn clear_applicants(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- CLEAR ALL APPLICANTS ---")?;
        if self
            .prompter
            .confirm("Are you sure you want to clear all applicants? (y/n): ", false)?
        {
            self.store.clear();
            self.ranked.clear();
            writeln!(self.out(), "[OK] All applicants cleared.")
        } else {
            writeln!(self.out(), "[CANCELLED] Operation cancelled.")
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- EXIT ---")?;
        if !self.store.is_empty()
            && self
                .prompter
                .confirm("Do you want to save results before exiting? (y/n): ", false)?
        {
            if self.ranked.is_empty() {
                self.rank_all();
            }
            let path = self.results_path.clone();
            self.write_results(path)?;
        }

        writeln!(
            self.out(),
            "Thank you for using the Job Applicant Scoring System. Goodbye!"
        )
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (ApplicantStore, Vec<RankedApplicant>, W) {
        (self.store, self.ranked, self.prompter.into_output())
    }
}

fn json_file_name(name: String) -> PathBuf {
    if name.ends_with(".json") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.json"))
    }
}

use crate::batch::{run_rank, RankArgs};
use crate::menu::{self, MenuArgs};
use crate::server;
use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use applicant_scoring::scoring::PositionRequirements;
use applicant_scoring::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Job Applicant Scoring System",
    about = "Score, rank, and persist job applicants from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive applicant menu (default command)
    Menu(MenuArgs),
    /// Score and rank every applicant in a JSON file
    Rank(RankArgs),
    /// Start the HTTP scoring service
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

/// Skills and certifications the position asks for.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RequirementArgs {
    /// Required skill name; repeat for several (matched case-insensitively)
    #[arg(long = "require-skill", value_name = "SKILL")]
    pub(crate) require_skill: Vec<String>,
    /// Required certification name; repeat for several
    #[arg(long = "require-cert", value_name = "CERTIFICATION")]
    pub(crate) require_cert: Vec<String>,
}

impl From<RequirementArgs> for PositionRequirements {
    fn from(args: RequirementArgs) -> Self {
        PositionRequirements {
            required_skills: args.require_skill,
            required_certifications: args.require_cert,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Menu(MenuArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Menu(args) => menu::run(args, &config),
        Command::Rank(args) => run_rank(args, &config),
        Command::Serve(args) => server::run(args, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subcommand_defaults_to_menu() {
        let cli = Cli::try_parse_from(["applicant-scoring"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn rank_collects_repeated_requirements() {
        let cli = Cli::try_parse_from([
            "applicant-scoring",
            "rank",
            "applicants.json",
            "--require-skill",
            "Python",
            "--require-skill",
            "SQL",
            "--require-cert",
            "AWS",
            "--csv",
            "summary.csv",
        ])
        .expect("parses");

        let Some(Command::Rank(args)) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.input, std::path::PathBuf::from("applicants.json"));
        assert!(args.output.is_none());
        let requirements = PositionRequirements::from(args.requirements);
        assert_eq!(requirements.required_skills, vec!["Python", "SQL"]);
        assert_eq!(requirements.required_certifications, vec!["AWS"]);
    }

    #[test]
    fn serve_accepts_binding_overrides() {
        let cli = Cli::try_parse_from(["applicant-scoring", "serve", "--port", "8080"])
            .expect("parses");
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(8080));
        assert!(args.host.is_none());
    }
}

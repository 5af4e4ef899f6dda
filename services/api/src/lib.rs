mod batch;
mod cli;
mod display;
mod infra;
mod menu;
mod prompt;
mod routes;
mod server;

use applicant_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

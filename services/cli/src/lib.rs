mod cli;
mod dashboard;
mod demo;
mod infra;
mod quiz;

use basecamp_quiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

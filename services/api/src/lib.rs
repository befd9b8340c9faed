mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use job_value::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

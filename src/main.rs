//! Profile Form - command line entry point
//!
//! Reads a profile as JSON from the file named on the command line (or from
//! stdin), validates it and submits it through the simulated repository.
//! Field errors or the submission receipt are printed to stdout as JSON.

use anyhow::{Context, Result};
use profile_form_core::{
    validate_profile, Config, ProfileForm, ProfileRepository, SimulatedProfileRepository,
    UuidIdGenerator,
};
use serde_json::Value;
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the JSON result only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = read_input(std::env::args().nth(1))?;
    let candidate: Value = serde_json::from_str(&input).context("Input is not valid JSON")?;

    let profile = match validate_profile(&candidate) {
        Ok(profile) => profile,
        Err(errors) => {
            info!(issues = errors.len(), "Profile failed validation");
            println!("{}", serde_json::to_string_pretty(&errors)?);
            return Ok(ExitCode::FAILURE);
        }
    };

    let repository =
        Arc::new(SimulatedProfileRepository::from_config(&config)) as Arc<dyn ProfileRepository>;
    let form = ProfileForm::new(repository, Arc::new(UuidIdGenerator), &config);
    form.load(&profile)?;

    match form.submit().await {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            Err(e.into())
        }
    }
}

fn read_input(path: Option<String>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

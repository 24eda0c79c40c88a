//! Company Check Entry Point
//!
//! Reads Company JSON (a single object or an array) from the file given as
//! first argument, or from stdin when no argument or `-` is given, and
//! prints one JSON report per company on stdout.
//!
//! Exit status: 0 when every company is valid, 1 when at least one is
//! rejected, 2 when the input or configuration cannot be used.
//!
//! Uses `anyhow` for startup errors; input errors are `kernel::error::AppError`.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use companies::{Company, CompanyConfig, ValidateCompany};
use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Accepted input shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<Company>),
    One(Company),
}

impl Input {
    fn into_companies(self) -> Vec<Company> {
        match self {
            Input::Many(companies) => companies,
            Input::One(company) => vec![company],
        }
    }
}

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, stdout carries the reports)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_check=info,companies=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "company-check failed");
            if let Some(app_err) = e.downcast_ref::<AppError>() {
                eprintln!("{}", app_err.to_problem());
            }
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<bool> {
    let config = CompanyConfig::from_env()?;
    tracing::info!(
        zip_policy = %config.zip_policy,
        log_rejections = config.log_rejections,
        "Configuration loaded"
    );

    let raw = read_input(std::env::args().nth(1).as_deref())?;
    let companies = parse_companies(&raw)?;

    let reports = ValidateCompany::new(config).execute_all(&companies);

    let mut out = io::stdout().lock();
    for report in &reports {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(reports.iter().all(|report| report.valid))
}

fn read_input(path: Option<&str>) -> AppResult<String> {
    match path {
        None | Some("-") => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_app_err(ErrorKind::BadRequest, "Failed to read companies from stdin")?;
            Ok(raw)
        }
        Some(path) => {
            tracing::debug!(path, "Reading companies from file");
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

fn parse_companies(raw: &str) -> AppResult<Vec<Company>> {
    let input: Input = serde_json::from_str(raw)?;
    Ok(input.into_companies())
}

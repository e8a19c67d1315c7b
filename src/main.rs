//! Growthguard: WHO growth-standard assessment
//!
//! Command-line entry point. Loads the reference tables, assesses one
//! measurement and prints the result as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! growthguard <age_months> <male|female> <height_cm> <weight_kg> [--no-trace]
//! ```

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use growthguard::adapters::JsonDirectorySource;
use growthguard::{AssessmentService, Gender, Measurement};

const DEFAULT_REFERENCE_DIR: &str = "data/who";

const USAGE: &str = "usage: growthguard <age_months> <male|female> <height_cm> <weight_kg> [--no-trace]";

struct Args {
    measurement: Measurement,
    include_trace: bool,
}

fn parse_args() -> Result<Args> {
    let mut include_trace = true;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-trace" => include_trace = false,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    let [age, gender, height, weight] = positional.as_slice() else {
        bail!("{USAGE}");
    };

    let age_months: u32 = age
        .parse()
        .with_context(|| format!("Invalid age in months: {age}"))?;
    let gender: Gender = gender.parse()?;
    let height_cm: f64 = height
        .parse()
        .with_context(|| format!("Invalid height: {height}"))?;
    let weight_kg: f64 = weight
        .parse()
        .with_context(|| format!("Invalid weight: {weight}"))?;

    Ok(Args {
        measurement: Measurement::new(age_months, gender, height_cm, weight_kg),
        include_trace,
    })
}

fn main() -> Result<()> {
    // Initialize logging.
    //
    // stdout carries the JSON result, so logs go to stderr unless
    // GROWTHGUARD_LOG_MODE=file.
    let log_mode = std::env::var("GROWTHGUARD_LOG_MODE").unwrap_or_else(|_| "stderr".to_string());

    let (writer, _guard) = if log_mode == "file" {
        let log_file = std::env::var("GROWTHGUARD_LOG_FILE")
            .unwrap_or_else(|_| "growthguard.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            // Best-effort: the open below reports the real failure.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open log file {log_file}"))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stderr())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    let args = parse_args()?;

    let reference_dir = std::env::var("GROWTHGUARD_REFERENCE_DIR")
        .unwrap_or_else(|_| DEFAULT_REFERENCE_DIR.to_string());
    let source = JsonDirectorySource::new(&reference_dir)?;
    let service = AssessmentService::load(&source)?;

    let mut assessment = service.assess(&args.measurement)?;
    if !args.include_trace {
        assessment.trace = None;
    }

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mtxgen::{generate_medium_problems, generate_unit_problems};

/// Generate multiply test problems for the sparse matrix test harness
#[derive(Parser)]
#[command(name = "mtxgen", version, about)]
struct Cli {
    /// Which problems to generate: unit (small, checked in to Git) or
    /// medium (too large for Git)
    #[arg(value_enum, default_value = "medium")]
    set: SetSize,

    /// Root directory for the generated fixture tree
    #[arg(long, default_value = "test/matrices")]
    out: PathBuf,
}

#[derive(ValueEnum, Clone, Copy)]
enum SetSize {
    Unit,
    Medium,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.set {
        SetSize::Unit => generate_unit_problems(&cli.out),
        SetSize::Medium => generate_medium_problems(&cli.out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fixture generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use axisalign::core::Mode;
use axisalign::io::{PlanConfig, PlanReport};
use axisalign::report::render_text;

#[derive(Parser, Debug)]
#[command(name = "axisalign", version, about = "Knee osteotomy planning from radiograph landmarks")]
struct Cli {
    /// Log level for the stderr logger (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze landmarks from a JSON config and write a plan report.
    Plan {
        /// Path to the plan config JSON.
        config: PathBuf,
        /// Report path; overrides `output_path` from the config.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Correction angle in degrees; overrides `correction_deg`.
        #[arg(long, allow_hyphen_values = true)]
        correction: Option<f64>,
        /// Also print the text report to stdout.
        #[arg(long)]
        text: bool,
    },
    /// List supported radiograph modes and their landmarks.
    Modes,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    axisalign::core::init_with_level(cli.log_level)?;
    #[cfg(feature = "tracing")]
    {
        // RUST_LOG drives the subscriber
        let _ = cli.log_level;
        axisalign::core::init_tracing(false);
    }

    match cli.command {
        Command::Plan {
            config,
            out,
            correction,
            text,
        } => run_plan(config, out, correction, text),
        Command::Modes => {
            print_modes();
            Ok(())
        }
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run_plan(
    config_path: PathBuf,
    out: Option<PathBuf>,
    correction: Option<f64>,
    text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = PlanConfig::load_json(&config_path)?;
    if let Some(correction) = correction {
        cfg.correction_deg = correction;
    }
    info!(
        "{}: {} points, correction {:+.2} deg",
        cfg.mode,
        cfg.points.len(),
        cfg.correction_deg
    );

    let mut report = PlanReport::new(&cfg, &config_path);
    let outcome = cfg.build_plan();
    match &outcome {
        Ok(plan) => {
            if text {
                print!("{}", render_text(plan));
            }
            report.set_plan(plan.clone());
        }
        Err(err) => {
            warn!("planning failed: {err}");
            report.set_error(err.clone());
        }
    }

    let out_path = out.unwrap_or_else(|| cfg.output_path());
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    report.write_json(&out_path)?;
    println!("wrote plan report to {}", out_path.display());

    outcome.map(|_| ()).map_err(Into::into)
}

fn print_modes() {
    for mode in Mode::ALL {
        println!(
            "{:<11} {} ({} landmarks)",
            mode.id(),
            mode.display_name(),
            mode.landmark_count()
        );
        for (i, label) in mode.landmark_labels().iter().enumerate() {
            println!("    {i}: {label}");
        }
    }
}

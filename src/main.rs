use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fit_guide_rs::cli::{Cli, Command, OutputFormat, PlanArgs};
use fit_guide_rs::config::{load_profile_draft, ProfileDraft};
use fit_guide_rs::error::Result;
use fit_guide_rs::interface::{
    complete_profile, display_catalog, display_plan, display_report, prompt_yes_no, write_csv,
    write_json,
};
use fit_guide_rs::report::Report;
use fit_guide_rs::sampler::generate_plan;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries the report.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "fit_guide_rs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&args),
        Command::Catalog => {
            display_catalog();
            Ok(())
        }
    }
}

/// Calculate metrics and draw a plan.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let base = match &args.profile {
        Some(path) => load_profile_draft(path)?,
        None => ProfileDraft::default(),
    };
    let draft = base.overlay(args.draft());

    let profile = if args.no_input {
        draft.into_profile()?
    } else {
        complete_profile(draft)?
    };

    let mut rng = match args.seed {
        Some(seed) => {
            debug!(seed, "seeding sampler");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = Report::build(profile, &mut rng)?;

    match args.format {
        OutputFormat::Json => write_json(&report, io::stdout().lock()),
        OutputFormat::Csv => write_csv(&report, io::stdout().lock()),
        OutputFormat::Text => {
            display_report(&report);

            if !args.no_input {
                while prompt_yes_no("Shuffle meals and exercises?", false)? {
                    let plan = generate_plan(
                        report.profile.goal,
                        report.metrics.daily_calories,
                        &mut rng,
                    );
                    display_plan(&plan);
                }
            }

            Ok(())
        }
    }
}

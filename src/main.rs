use crate::config::Config;
use crate::gateway::{DatabaseConfig, SqlGateway};
use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::path::PathBuf;
use tracing::{Level, info};

mod checks;
mod config;
mod demo;
mod display;
mod export;
mod gateway;
mod model;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Use FILE instead of registrar.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not try to connect to the database
    #[arg(short = 'n', long)]
    skip_database: bool,
    /// Write the course enrollment roster to FILE as CSV
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load_or_default(args.config.as_deref())?;
    if args.skip_database {
        info!("skipping database connection check");
    } else {
        let gateway = SqlGateway::new(DatabaseConfig::from_config(&config));
        gateway::check_connection(&gateway).await;
    }

    let mut registry = demo::university();
    let students = registry.students().iter().map(|s| s.id).collect::<Vec<_>>();
    println!("Student Details:");
    display::display_students(&registry, &students);

    let alice = registry
        .find_student("S10001")
        .ok_or_else(|| eyre::eyre!("cannot find student S10001"))?;
    registry
        .student_mut(alice)
        .person
        .update_contact_info("alice.new@uni.com", "555-0123");
    println!("\nAfter contact info update:");
    display::display_students(&registry, &[alice]);

    println!("\nLecturer Info:");
    for l in registry.lecturers() {
        display::display_lecturer(&registry, l.id);
    }

    println!();
    for p in registry.programs() {
        display::display_program(&registry, p.id);
    }

    checks::ensure_lecturer_links(&registry)?;
    checks::check_enrollment_consistency(&registry);

    if let Some(path) = &args.export {
        let file = File::create(path)
            .wrap_err_with(|| format!("cannot create roster file {}", path.display()))?;
        export::write_roster(&registry, file)?;
        info!(path = %path.display(), "roster exported");
    }
    Ok(())
}

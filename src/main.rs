//! CLI entry point for the grade calculator.
//!
//! Runs the interactive session by default, and offers one-shot subcommands
//! for printing a report of given grades or classifying a single average.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_calculator::{
    config::Settings,
    ledger::GradeLedger,
    output::{print_pretty, render_cli_report, render_json},
    session::Session,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calculator")]
#[command(about = "Record grades and compute their average and letter grade", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive grade entry session (the default)
    Interactive {
        /// Disable colored letter grades
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },
    /// Record the given grades and print the resulting report
    Report {
        /// Grades to record; invalid entries are skipped
        #[arg(value_name = "GRADE", allow_negative_numbers = true)]
        grades: Vec<String>,

        /// Print the summary as JSON instead of the text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the letter grade for a numeric average
    Letter {
        #[arg(value_name = "AVERAGE", allow_negative_numbers = true)]
        average: f64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env();

    // Logging setup: stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("grade_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(settings.color)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive { no_color: false }) {
        Commands::Interactive { no_color } => {
            let settings = if no_color {
                settings.with_color(false)
            } else {
                settings
            };
            let stdin = std::io::stdin();
            let mut session = Session::new(stdin.lock(), std::io::stdout(), &settings);
            session.run()?;
        }
        Commands::Report { grades, json } => {
            let mut ledger = GradeLedger::new();
            let outcome = ledger.record_batch(&grades);
            if outcome.rejected > 0 {
                warn!(rejected = outcome.rejected, "Some grades were skipped");
            }
            print_pretty(&ledger);

            let mut stdout = std::io::stdout().lock();
            if json {
                writeln!(stdout, "{}", render_json(&ledger)?)?;
            } else {
                write!(stdout, "{}", render_cli_report(&ledger))?;
            }
        }
        Commands::Letter { average } => {
            let letter = GradeLedger::letter_grade(average);
            info!(average, %letter, "Letter grade computed");
            println!("{}", letter);
        }
    }

    Ok(())
}

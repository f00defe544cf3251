mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use planpdf_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "planpdf",
    version,
    about = "Import training plan workouts from table-based PDFs"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Path to the pdftotext executable (poppler-utils)
    #[arg(long, global = true, env = "PDFTOTEXT_BIN", default_value = "pdftotext")]
    pdftotext: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract scheduled workouts from a training plan PDF
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Start date of the training plan (YYYY-MM-DD)
        #[arg(long, value_parser = commands::parse_date)]
        plan_start_date: NaiveDate,

        /// Reference date for inferring week years (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = commands::parse_date)]
        today: Option<NaiveDate>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted workouts to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the tables decoded from a PDF, without interpreting them
    Tables {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show how a single cell text is read
    Classify {
        /// Cell text, e.g. "4 easy + strides"
        text: String,

        /// Week token the cell belongs to, e.g. "21-Jul" (default: today)
        #[arg(long)]
        week: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let extractor = PdftotextExtractor::with_binary(&cli.pdftotext);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            plan_start_date,
            today,
            output,
            out,
        } => commands::extract::run(
            input_file,
            plan_start_date,
            today,
            &extractor,
            &output,
            out,
        ),
        Commands::Tables { input_file, output } => {
            commands::tables::run(input_file, &extractor, &output)
        }
        Commands::Classify { text, week } => commands::classify::run(&text, week.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

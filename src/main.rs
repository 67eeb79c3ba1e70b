mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::shifts::{OutputFormat, ShiftsArgs};

#[derive(Parser)]
#[command(name = "shiftdoc")]
#[command(about = "Read clinic schedule documents and turn appointment days into shift windows")]
struct Cli {
    /// Log grid reconstruction decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schedule document and show the recovered appointment days
    Parse {
        /// Extracted document text ("-" reads stdin)
        input: PathBuf,

        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,

        /// Fail if the document had any problems
        #[arg(long)]
        strict: bool,
    },
    /// Generate shift windows from a schedule document
    Shifts {
        /// Extracted document text ("-" reads stdin)
        input: PathBuf,

        /// Zone every shift is assigned to
        #[arg(short, long)]
        zone: Option<String>,

        /// Shift type every shift is assigned to
        #[arg(short = 't', long)]
        shift_type: Option<String>,

        /// Shift length (e.g. "2h", "90m", "1h30m")
        #[arg(short, long)]
        duration: Option<String>,

        /// How long before the appointment the shift starts (e.g. "30m")
        #[arg(long)]
        offset: Option<String>,

        /// Fixed title for every shift
        #[arg(long)]
        title: Option<String>,

        /// IANA time zone for .ics output (e.g. "America/New_York")
        #[arg(long)]
        timezone: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if the document had any problems
        #[arg(long)]
        strict: bool,
    },
    /// Show the configuration, or create the default config file
    Config {
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { input, json, strict } => commands::parse::run(&input, json, strict),
        Commands::Shifts {
            input,
            zone,
            shift_type,
            duration,
            offset,
            title,
            timezone,
            format,
            output,
            strict,
        } => commands::shifts::run(ShiftsArgs {
            input,
            zone,
            shift_type,
            duration,
            offset,
            title,
            timezone,
            format,
            output,
            strict,
        }),
        Commands::Config { init } => commands::config::run(init),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "shiftdoc=debug,shiftdoc_core=debug"
    } else {
        "shiftdoc=warn,shiftdoc_core=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

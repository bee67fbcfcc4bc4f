mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routelog",
    version,
    about = "Extract visit records from route-manifest PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a route manifest (PDF, or pre-extracted .txt) into visit records
    Parse {
        /// Path to a PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom facility table (JSON); defaults to the builtin table
        #[arg(short, long, value_name = "FILE")]
        facilities: Option<PathBuf>,

        /// City to assume when a stop has none
        #[arg(long, value_name = "CITY")]
        default_city: Option<String>,
    },
    /// Parse a manifest and write sheet-ready rows (CSV or JSON)
    Export {
        /// Path to a PDF or text file
        input_file: PathBuf,

        /// Output file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,

        /// Export format: csv (default) or json
        #[arg(short = 'f', long, default_value = "csv")]
        format: String,

        /// Custom facility table (JSON); defaults to the builtin table
        #[arg(long, value_name = "FILE")]
        facilities: Option<PathBuf>,

        /// City to assume when a stop has none
        #[arg(long, value_name = "CITY")]
        default_city: Option<String>,
    },
    /// Inspect and validate facility tables
    Facilities {
        #[command(subcommand)]
        action: FacilitiesAction,
    },
}

#[derive(Subcommand)]
enum FacilitiesAction {
    /// List the builtin known-facility table
    List,
    /// Validate a custom facility table file
    Validate {
        /// Path to a JSON facility table
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            facilities,
            default_city,
        } => commands::parse::run(input_file, &output, out, facilities, default_city),
        Commands::Export {
            input_file,
            out,
            format,
            facilities,
            default_city,
        } => commands::export::run(input_file, out, &format, facilities, default_city),
        Commands::Facilities { action } => match action {
            FacilitiesAction::List => commands::facilities::list(),
            FacilitiesAction::Validate { file } => commands::facilities::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

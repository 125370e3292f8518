//! auditdiff - Audit Diff CLI tool
//!
//! Prints the changes between two versions of a document, or between the
//! built-in sample accounts.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use audit_diff::{diff_values, diff_with_options, logging, models, value, Change, DiffOptions};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "auditdiff", version, about = "Audit Diff CLI tool")]
struct Cli {
    /// Log level for this crate when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output location. Use '-' for stdout
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// How to print the changes
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Lines)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Diff the built-in previous and current sample accounts
    Demo,
    /// Diff two YAML/JSON files
    Compare {
        /// The earlier version
        previous: PathBuf,
        /// The later version
        current: PathBuf,
        /// Field that identifies items of a list
        #[arg(long, default_value = audit_diff::diff::DEFAULT_IDENTITY_FIELD)]
        identity_field: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One JSON object per line
    Lines,
    /// A single JSON array
    Json,
    /// A YAML sequence
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Open output
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(&cli.output)
            .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?)
    };

    let changes = match cli.command {
        Command::Demo => demo()?,
        Command::Compare {
            previous,
            current,
            identity_field,
        } => compare(&previous, &current, &identity_field)?,
    };

    print_changes(&changes, cli.format, &mut output)
}

fn demo() -> Result<Vec<Change>, Box<dyn std::error::Error>> {
    let changes = diff_values(&models::previous_account(), &models::current_account())
        .map_err(|e| format!("Diff failed: {}", e))?;
    Ok(changes)
}

fn compare(
    previous_file: &Path,
    current_file: &Path,
    identity_field: &str,
) -> Result<Vec<Change>, Box<dyn std::error::Error>> {
    let previous = read_document(previous_file)?;
    let current = read_document(current_file)?;

    let options = DiffOptions::new().with_identity_field(identity_field);
    let changes = diff_with_options(&previous, &current, &options)
        .map_err(|e| format!("Diff failed: {}", e))?;
    Ok(changes)
}

fn read_document(file: &Path) -> Result<value::Value, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;

    let is_yaml = matches!(
        file.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        value::from_yaml(&content).map_err(|e| e.to_string())
    } else {
        value::from_json(&content).map_err(|e| e.to_string())
    };

    Ok(parsed.map_err(|e| format!("Failed to parse file {:?}: {}", file, e))?)
}

fn print_changes(
    changes: &[Change],
    format: Format,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Lines => {
            for change in changes {
                writeln!(output, "{}", serde_json::to_string(change)?)?;
            }
        }
        Format::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(changes)?)?;
        }
        Format::Yaml => {
            write!(output, "{}", serde_yaml::to_string(changes)?)?;
        }
    }
    Ok(())
}

//! CLI entry point for the tabular encoder.

use anyhow::{Result, anyhow};
use clap::Parser;
use serde_json::json;
use std::path::Path;
use tabular_encode::{Encoder, EncoderConfig, LoaderConfig, TableInfo, TableProfile, load_csv};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Infer column types and encode a delimited table as a numeric matrix",
    long_about = "Reads a delimited text file, classifies every column as missing, integer,\n\
                  real or categorical, and writes a dense numeric encoding.\n\n\
                  EXAMPLES:\n  \
                  # Print per-column statistics\n  \
                  tabular-encode -i data.csv --header --profile\n\n  \
                  # Encode with standardization, write CSV\n  \
                  tabular-encode -i data.csv --standardize -o encoded.csv\n\n  \
                  # Machine-readable output\n  \
                  tabular-encode -i data.csv --json"
)]
struct Args {
    /// Path to the delimited file to read
    #[arg(short, long)]
    input: String,

    /// Treat the first line as column names
    #[arg(long)]
    header: bool,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Standardize numeric, non-binary columns
    #[arg(long)]
    standardize: bool,

    /// Do not emit missing-value indicator columns
    #[arg(long)]
    no_missing_indicators: bool,

    /// Print column statistics instead of encoding
    #[arg(long)]
    profile: bool,

    /// Write the encoded matrix to this CSV file
    #[arg(short, long)]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of a human-readable summary
    ///
    /// Disables all logs; only the JSON document is written.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only carries JSON.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    if !args.delimiter.is_ascii() {
        return Err(anyhow!("Delimiter must be ASCII, got {:?}", args.delimiter));
    }

    let loader = LoaderConfig::builder()
        .delimiter(args.delimiter as u8)
        .has_header(args.header)
        .build()?;

    let table = load_csv(&args.input, &loader)?;
    info!("Table loaded: {} rows x {} columns", table.rows(), table.cols());

    let table_info = TableInfo::new(&table);

    if args.profile {
        let profile = table_info.profile();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        } else {
            print_profile(&args.input, &profile);
        }
        return Ok(());
    }

    let config = EncoderConfig::builder()
        .standardize(args.standardize)
        .missing_indicators(!args.no_missing_indicators)
        .build();

    let encoded = match Encoder::new(config).encode_with_info(&table, &table_info) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!("Encoding failed: {}", e);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "error": e }))?);
            }
            return Err(anyhow!("Encoding failed: {}", e));
        }
    };

    if let Some(ref output) = args.output {
        encoded.write_csv(output)?;
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "input": args.input,
                "config": config,
                "rows": encoded.matrix.rows(),
                "cols": encoded.matrix.cols(),
                "layout": encoded.layout,
                "feature_names": encoded.feature_names,
                "output": args.output,
            }))?
        );
        return Ok(());
    }

    println!();
    println!("{}", "=".repeat(80));
    println!("ENCODING COMPLETE");
    println!("{}", "=".repeat(80));
    println!(
        "Input:  {} ({} rows x {} columns)",
        args.input,
        table.rows(),
        table.cols()
    );
    println!(
        "Matrix: {} rows x {} features",
        encoded.matrix.rows(),
        encoded.matrix.cols()
    );
    if let Some(ref output) = args.output {
        println!("Output: {}", output);
    }
    println!();
    println!("{:<24} {:<12} {:<8} {:<8}", "Column", "Kind", "Offset", "Width");
    println!("{}", "-".repeat(56));
    for block in &encoded.layout {
        let kind = match block.kind {
            tabular_encode::ColumnKind::Numeric { .. } if block.standardized => "numeric*",
            tabular_encode::ColumnKind::Numeric { .. } => "numeric",
            tabular_encode::ColumnKind::Categorical => "one-hot",
        };
        println!(
            "{:<24} {:<12} {:<8} {:<8}",
            truncate_str(table_info.name(block.column), 23),
            kind,
            block.offset,
            block.width
        );
    }
    println!();
    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));

    Ok(())
}

/// Print per-column statistics as a table.
///
/// Uses `println!` on purpose: this is the command's output, not logging.
fn print_profile(input: &str, profile: &TableProfile) {
    println!("\n{}", "=".repeat(80));
    println!("COLUMN PROFILE");
    println!("{}\n", "=".repeat(80));
    println!("  File: {}", input);
    println!("  Rows: {}", profile.rows);
    println!("  Columns: {}", profile.cols);
    println!("  Numeric columns: {}", profile.numeric_columns());
    println!("  Missing cells: {:.1}%", profile.missing_ratio() * 100.0);
    println!();

    println!(
        "{:<20} {:<12} {:<8} {:<8} {:>12} {:>12} {:>12} {:>12}",
        "Column", "Type", "Missing", "Words", "Min", "Max", "Mean", "Stdev"
    );
    println!("{}", "-".repeat(104));

    for col in &profile.columns {
        println!(
            "{:<20} {:<12} {:<8} {:<8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            truncate_str(&col.name, 19),
            col.column_type.as_str(),
            col.missing,
            col.words,
            col.min,
            col.max,
            col.mean,
            col.stdev
        );
    }
    println!();
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

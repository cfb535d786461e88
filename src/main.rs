// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pulanota::exporter::{csv, text};
use pulanota::utils::logging::{
    format_info, format_metric, format_step, format_success, format_warning,
};
use pulanota::{
    Config, ExportOptions, JsonExporter, JsonReport, PipelineOrchestrator, PipelineOutput,
    Validator, XLSX_MIME, XlsxExporter,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "pulanota")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Lists and exports fiscal document numbers missing from reported ranges", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, declared-count statistics and every range found
    Summary {
        /// Report text file
        file: PathBuf,
    },

    /// Print the missing numbers, one per line
    List {
        /// Report text file
        file: PathBuf,

        /// Print each range's end value instead
        #[arg(long)]
        end_values: bool,
    },

    /// Write the export artifacts
    Export {
        /// Report text file
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        /// Add the one-row-per-range summary sheet
        #[arg(long)]
        summary_sheet: bool,

        /// Also write the list of range end values
        #[arg(long)]
        end_values: bool,

        /// Store missing numbers as text cells
        #[arg(long)]
        numbers_as_text: bool,

        #[arg(short, long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Xlsx,
    Csv,
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    pulanota::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Summary { file } => cmd_summary(&config, &file),
        Commands::List { file, end_values } => cmd_list(&config, &file, end_values),
        Commands::Export {
            file,
            output,
            format,
            summary_sheet,
            end_values,
            numbers_as_text,
            pretty,
        } => {
            let mut config = config;
            config.export.include_summary_sheet |= summary_sheet;
            config.export.include_end_values_list |= end_values;
            config.export.numbers_as_text |= numbers_as_text;
            if let Some(output) = output {
                config.export.output_dir = output;
            }
            cmd_export(&config, &file, format, pretty)
        }
    }
}

/// Runs the pipeline over one file. `Ok(None)` means the file held no ranges.
fn load_report(
    config: &Config,
    path: &Path,
    options: ExportOptions,
) -> Result<Option<PipelineOutput>> {
    Validator::validate_file_path(path)?;
    Validator::validate_input_size(path, config.max_input_bytes())?;

    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match PipelineOrchestrator::new(options).run_bytes(bytes) {
        Ok(output) => Ok(Some(output)),
        Err(e) if e.is_no_match() => {
            eprintln!("{}", format_warning(&e.to_string()));
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to process {}", path.display())),
    }
}

fn cmd_summary(config: &Config, path: &Path) -> Result<()> {
    let Some(output) = load_report(config, path, config.export.options())? else {
        return Ok(());
    };
    let aggregates = &output.aggregates;

    println!();
    println!("{}", format_metric("Ranges", output.records.len()));
    println!("{}", format_metric("Total missing", aggregates.total_missing));
    println!("{}", format_metric("Total declared", aggregates.total_declared));

    match &aggregates.declared {
        Some(stats) => {
            println!("{}", format_metric("Min declared", stats.min));
            println!("{}", format_metric("Max declared", stats.max));
            println!("{}", format_metric("Mean declared", format!("{:.2}", stats.mean)));
        }
        None => {
            for label in ["Min declared", "Max declared", "Mean declared"] {
                println!("{}", format_metric(label, "n/a"));
            }
        }
    }

    let cumulative = aggregates
        .cumulative_declared
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", format_metric("Cumulative declared", cumulative));

    if aggregates.inconsistent_records > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} range(s) declare a count that differs from the gap",
                aggregates.inconsistent_records
            ))
        );
    }

    println!("\n{}", "=".repeat(60));
    let total = output.records.len();
    for (idx, record) in output.records.iter().enumerate() {
        println!(
            "\n{}",
            format_step(
                idx + 1,
                total,
                &format!("{} → {}", record.start(), record.end())
            )
        );
        println!(
            "   Declared: {}  Computed: {}",
            record.declared_missing_count(),
            record.computed_missing_count()
        );

        if record.has_gap() {
            let numbers = record
                .missing_numbers()
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("   Missing: {}", numbers);
        } else {
            println!("   {}", format_info("No gap in this range"));
        }
    }
    println!("\n{}", "=".repeat(60));

    Ok(())
}

fn cmd_list(config: &Config, path: &Path, end_values: bool) -> Result<()> {
    let options = ExportOptions {
        include_end_values_list: end_values,
        ..config.export.options()
    };
    let Some(output) = load_report(config, path, options)? else {
        return Ok(());
    };

    let listing = if end_values {
        output.export.end_values_text.unwrap_or_default()
    } else {
        output.export.missing_numbers_text
    };
    println!("{}", listing);

    Ok(())
}

fn cmd_export(config: &Config, path: &Path, format: ExportFormat, pretty: bool) -> Result<()> {
    let Some(output) = load_report(config, path, config.export.options())? else {
        info!("Nothing to export");
        return Ok(());
    };

    let output_dir = &config.export.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let stem = Validator::sanitize_file_stem(&config.export.file_stem);
    let bundle = &output.export;

    let mut written = Vec::new();
    match format {
        ExportFormat::Xlsx => {
            let target = output_dir.join(format!("{stem}.xlsx"));
            XlsxExporter::new(&config.export.detail_sheet, &config.export.summary_sheet)
                .save(bundle, &target)
                .context("Failed to write spreadsheet")?;
            debug!("Spreadsheet content type: {}", XLSX_MIME);
            written.push(target);
        }
        ExportFormat::Csv => {
            let target = output_dir.join(format!("{stem}.csv"));
            csv::save_detail(&target, &bundle.detail_rows).context("Failed to write CSV")?;
            written.push(target);

            if let Some(summary_rows) = &bundle.summary_rows {
                let target = output_dir.join(format!("{stem}_resumo.csv"));
                csv::save_summary(&target, summary_rows)
                    .context("Failed to write CSV summary")?;
                written.push(target);
            }
        }
        ExportFormat::Json => {
            let report = JsonReport::new(Some(path), &output.records, &output.aggregates);
            let target = JsonExporter::new(output_dir)?
                .export(&report, &stem, pretty)
                .context("Failed to write JSON report")?;
            written.push(target);
        }
        ExportFormat::Text => {
            let target = output_dir.join(format!("{stem}.txt"));
            text::write_list(&target, &bundle.missing_numbers_text)?;
            written.push(target);

            if bundle.summary_rows.is_some() {
                warn!("The summary table is only written by the xlsx and csv formats");
            }
        }
    }

    if let Some(end_values) = &bundle.end_values_text {
        let target = output_dir.join(format!("{stem}_fim.txt"));
        text::write_list(&target, end_values)?;
        written.push(target);
    }

    println!(
        "{}",
        format_success(&format!(
            "{} missing numbers from {} ranges exported",
            output.aggregates.total_missing,
            output.records.len()
        ))
    );
    for target in written {
        println!("   {}", target.display());
    }

    Ok(())
}

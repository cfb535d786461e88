// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored console helpers

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_step(step: usize, total: usize, msg: &str) -> String {
    format!("{} {}", format!("[{}/{}]", step, total).cyan().bold(), msg)
}

/// `label: value`, with the value emphasised.
pub fn format_metric(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<28} {}", format!("{label}:"), value.to_string().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric_keeps_label_and_value() {
        colored::control::set_override(false);
        let line = format_metric("Total faltantes", 42);
        assert!(line.starts_with("Total faltantes:"));
        assert!(line.ends_with("42"));
    }
}

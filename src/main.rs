//! zele-report - ZELE phishing campaign analysis report
//!
//! Usage:
//!   zele-report --ci 0.8123 --level HIGH --integration 0.9 --coherence 0.75 --temporal-depth 0.6
//!   zele-report --metrics metrics.json
//!   zele-report --metrics metrics.toml --coherence 0.8 -o report.txt
//!   zele-report --dump-config > zele-report.toml
//!
//! Metric precedence: flags, then the metrics file, then `[metrics]` in the config.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zele_report::config::{OutputFormat, ReportConfig, DEFAULT_CONFIG_PATH};
use zele_report::report::write_report;
use zele_report_core::source::load_metrics;
use zele_report_core::{AttackMetrics, MetricsInput};

#[derive(Parser)]
#[command(
    name = "zele-report",
    about = "Analog computing analysis report for the ZELE phishing campaign",
    version = env!("CARGO_PKG_VERSION"),
    allow_negative_numbers = true
)]
struct Cli {
    /// Consciousness index
    #[arg(long)]
    ci: Option<f64>,

    /// Consciousness level label (e.g. HIGH)
    #[arg(long = "level")]
    consciousness_level: Option<String>,

    /// Integration metric
    #[arg(long)]
    integration: Option<f64>,

    /// Coherence metric
    #[arg(long)]
    coherence: Option<f64>,

    /// Temporal depth metric
    #[arg(long)]
    temporal_depth: Option<f64>,

    /// Metrics file (.json or .toml)
    #[arg(short, long)]
    metrics: Option<PathBuf>,

    /// Path to config file (TOML). Default: ./zele-report.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dump default config as TOML and exit.
    #[arg(long, default_value_t = false)]
    dump_config: bool,

    /// Output file. If omitted, prints to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl Cli {
    fn flag_metrics(&self) -> MetricsInput {
        MetricsInput {
            ci: self.ci,
            consciousness_level: self.consciousness_level.clone(),
            integration: self.integration,
            coherence: self.coherence,
            temporal_depth: self.temporal_depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", ReportConfig::default().to_toml());
        return Ok(());
    }

    init_tracing();

    let config = load_config(&cli)?;

    let metrics = resolve_metrics(&cli, &config)?;
    for (field, value) in metrics.out_of_unit_range() {
        tracing::warn!(field, value, "metric outside [0, 1]");
    }

    let format = cli.format.unwrap_or(config.output.format);
    write_output(output_target(&cli, &config), &metrics, format)
}

/// An explicit `--config` must load; the implicit default may be absent.
fn load_config(cli: &Cli) -> anyhow::Result<ReportConfig> {
    match cli.config {
        Some(ref path) => ReportConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ReportConfig::load(Path::new(DEFAULT_CONFIG_PATH))),
    }
}

/// `-o` wins over `[output] path`; neither means stdout.
fn output_target<'a>(cli: &'a Cli, config: &'a ReportConfig) -> Option<&'a Path> {
    cli.output.as_deref().or(config.output.path.as_deref())
}

fn write_output(
    target: Option<&Path>,
    metrics: &AttackMetrics,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match target {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_report(&mut BufWriter::new(file), metrics, format)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            write_report(&mut io::stdout().lock(), metrics, format)
                .context("failed to write report to stdout")?;
        }
    }
    Ok(())
}

/// Merge config defaults, the metrics file and flags (later wins), then validate.
fn resolve_metrics(cli: &Cli, config: &ReportConfig) -> anyhow::Result<AttackMetrics> {
    let mut input = config.metrics.clone();

    if let Some(ref path) = cli.metrics {
        let from_file = load_metrics(path)
            .with_context(|| format!("failed to load metrics from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded metrics file");
        input = input.merge(from_file);
    }

    input.merge(cli.flag_metrics()).validate().map_err(|e| {
        let what = match e.field() {
            Some(field) => format!("invalid metric {field}"),
            None => "invalid metrics".to_string(),
        };
        anyhow::Error::new(e).context(what)
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zele_report=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

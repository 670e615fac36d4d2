//! estatedist CLI

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use es_core::DistributionRequest;
use es_prob::validate;
use es_viz::{DashboardArtifact, PanelLabels};
use std::path::PathBuf;

use crate::config::DashboardConfig;

#[derive(Parser)]
#[command(name = "estatedist")]
#[command(about = "estatedist - Binomial / Poisson dashboards for real-estate analysts")]
#[command(long_about = "estatedist - Binomial / Poisson dashboards for real-estate analysts

Each panel answers one question about the business:

  binomial   Sales from visits: given how many visits you make and the chance
             that a visit closes a contract, how many contracts should you expect?
  poisson    Contacts per day: given the average number of clients who get in
             touch daily, how likely is a quiet or a busy day?
  discrete   Sales per month: enter how many properties you usually sell and how
             often, and see the expected monthly sales.

Every panel reports the chance of each outcome (the chart) plus the mean,
variance and standard deviation. `run` computes all panels of a dashboard
config at once; without a config it shows the stock three-panel dashboard.")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Plot-friendly JSON artifact
    Json,
    /// Terminal bar chart + KPIs
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Contracts closed out of a number of visits (Binomial)
    Binomial {
        /// Number of visits (trials). Must be a whole number.
        #[arg(long, allow_negative_numbers = true)]
        trials: f64,

        /// Chance of closing per visit, in [0, 1]
        #[arg(long, allow_negative_numbers = true)]
        probability: f64,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Client contacts per day (Poisson)
    Poisson {
        /// Average contacts per day
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        /// Last displayed count. Defaults to ceil(rate + 10*sqrt(rate) + 10).
        #[arg(long, allow_negative_numbers = true)]
        max_k: Option<f64>,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Properties sold per month from a custom probability table
    Discrete {
        /// Comma-separated outcome values, e.g. "0,1,2,3"
        #[arg(long, allow_hyphen_values = true)]
        values: String,

        /// Comma-separated probabilities, e.g. "0.1,0.4,0.3,0.2"
        #[arg(long, allow_hyphen_values = true)]
        probabilities: String,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Compute every panel of a dashboard config (YAML or JSON)
    Run {
        /// Dashboard config. Without it the stock three-panel dashboard is used.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Zero the artifact timestamp (overrides the config when set)
        #[arg(long)]
        deterministic: bool,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Binomial { trials, probability, output, format } => {
            let trials = validate::count_from_f64("trials", trials)?;
            cmd_single(
                "binomial",
                DistributionRequest::Binomial { trials, probability },
                output.as_ref(),
                format,
            )
        }
        Commands::Poisson { rate, max_k, output, format } => {
            let max_k = max_k.map(|k| validate::count_from_f64("max_k", k)).transpose()?;
            cmd_single(
                "poisson",
                DistributionRequest::Poisson { rate, max_k },
                output.as_ref(),
                format,
            )
        }
        Commands::Discrete { values, probabilities, output, format } => {
            let values = es_prob::discrete::parse_values("values", &values)?;
            let probabilities =
                es_prob::discrete::parse_probabilities("probabilities", &probabilities)?;
            cmd_single(
                "discrete",
                DistributionRequest::Discrete { values, probabilities },
                output.as_ref(),
                format,
            )
        }
        Commands::Run { config, deterministic, output, format } => {
            cmd_run(config.as_ref(), deterministic, output.as_ref(), format)
        }
        Commands::Version => {
            println!("estatedist {}", es_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_single(
    id: &str,
    request: DistributionRequest,
    output: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let result = es_prob::compute(&request)?;
    tracing::info!(kind = %result.kind(), mean = result.mean(), variance = result.variance(), "computed");
    let panel = es_viz::panel_artifact(id, &request, &result, None);
    let dashboard = es_viz::dashboard_artifact(vec![panel], false)?;
    emit(&dashboard, output, format)
}

fn cmd_run(
    config: Option<&PathBuf>,
    deterministic: bool,
    output: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let cfg = match config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dashboard config");
            config::read_dashboard_config(path)
                .with_context(|| format!("reading dashboard config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };

    let mut panels = Vec::with_capacity(cfg.panels.len());
    for p in &cfg.panels {
        let result =
            es_prob::compute(&p.request).with_context(|| format!("panel `{}`", p.id))?;
        let labels: PanelLabels = p.labels();
        panels.push(es_viz::panel_artifact(&p.id, &p.request, &result, Some(labels)));
    }
    tracing::info!(panels = panels.len(), "dashboard computed");

    let dashboard = es_viz::dashboard_artifact(panels, deterministic || cfg.deterministic)?;
    emit(&dashboard, output, format)
}

fn emit(dashboard: &DashboardArtifact, output: Option<&PathBuf>, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(dashboard)?,
        OutputFormat::Text => {
            dashboard.panels.iter().map(es_viz::render_text).collect::<Vec<_>>().join("\n")
        }
    };
    write_output(output, &rendered)
}

fn write_output(output: Option<&PathBuf>, rendered: &str) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        tracing::info!(path = %path.display(), "wrote output");
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

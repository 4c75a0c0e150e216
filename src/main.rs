//! dropout-dashboard CLI
//!
//! Renders the student-dropout evaluation dashboard to the terminal or
//! serves it over HTTP.
//!
//! Usage:
//!   dropout-dashboard [OPTIONS]

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dropout_dashboard::{
    DashboardConfig, StudyDataset, build_dashboard, generate_json, generate_report,
    generate_summary, load_config, logging,
    web::{ServerConfig, start_server},
};

/// dropout-dashboard - Evaluation results of the student-dropout classifier
#[derive(Parser, Debug)]
#[command(name = "dropout-dashboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (default: search for .dashboard.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of features on the importance chart (overrides config)
    #[arg(long, value_name = "N")]
    top_k: Option<usize>,

    /// Output file for the report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show summary only (no detailed report)
    #[arg(short, long)]
    summary: bool,

    /// Emit the chart descriptors as JSON
    #[arg(long, conflicts_with = "summary")]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    // === Web options ===
    /// Start web server and show the dashboard in the browser
    #[arg(long)]
    web: bool,

    /// Port for web server (overrides config, default: 8501)
    #[arg(long)]
    port: Option<u16>,

    /// Don't open browser automatically when starting web server
    #[arg(long)]
    no_open: bool,

    /// API endpoint URL for frontend (useful for separate deployments)
    #[arg(long)]
    api_endpoint: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Explicit --config must load; the implicit search falls back to defaults
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match load_config(&cwd) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring dashboard config");
                    DashboardConfig::default()
                }
            }
        }
    };

    // CLI args override config, which overrides defaults
    if let Some(top_k) = args.top_k {
        config.ranking.top_k = top_k;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let study = StudyDataset::student_dropout();
    let dashboard = build_dashboard(&study, &config)?;
    tracing::debug!(
        features = dashboard.feature_importance.entries.len(),
        "dashboard built"
    );

    // Web mode
    if args.web {
        let server_config = ServerConfig {
            port: config.server.port,
            open_browser: !args.no_open,
            api_endpoint: args.api_endpoint.clone(),
        };

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(start_server(dashboard, server_config))
            .map_err(|e| -> Box<dyn std::error::Error> { e })?;

        return Ok(());
    }

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(stdout()),
    };

    if args.json {
        generate_json(&dashboard, &mut writer)?;
    } else if args.summary {
        generate_summary(&dashboard, &mut writer)?;
    } else {
        generate_report(&dashboard, &mut writer)?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Report written to: {}", path.display());
    }

    Ok(())
}

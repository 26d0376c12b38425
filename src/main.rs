//! Command-line front end: optimizes a JSON request file and prints the
//! results as JSON.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use deazl_optimizer::application::error::{ApplicationError, ApplicationResult};
use deazl_optimizer::application::services::{
    OptimizationItem, OptimizationSummary, PriceOptimizationService, summarize,
};
use deazl_optimizer::application::use_cases::ActionResponse;
use deazl_optimizer::domain::entities::{OptimizationResult, PreferencesOverride, UserPreferences};
use deazl_optimizer::domain::value_objects::ItemId;
use deazl_optimizer::{config as settings, telemetry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "deazl-optimizer", version, about = "Pick the best price for every shopping-list item")]
struct Cli {
    /// Configuration file. Defaults to ./deazl.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimize the items of a JSON request file ("-" reads stdin).
    Optimize {
        /// Request file.
        input: PathBuf,
    },
    /// Print the default preferences.
    Defaults,
}

#[derive(Debug, Deserialize)]
struct OptimizeRequest {
    items: Vec<OptimizationItem>,
    #[serde(default)]
    preferences: Option<PreferencesOverride>,
}

#[derive(Debug, Serialize)]
struct OptimizeOutput {
    preferences: UserPreferences,
    results: BTreeMap<ItemId, OptimizationResult>,
    summary: OptimizationSummary,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    telemetry::init(&config.logging);

    match cli.command {
        Command::Defaults => {
            print_json(&PriceOptimizationService::default_preferences(), cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Optimize { input } => {
            let text = read_input(&input)?;
            let request: OptimizeRequest = serde_json::from_str(&text)
                .with_context(|| format!("invalid request in {}", input.display()))?;

            let response = ActionResponse::from_result(optimize(
                request,
                config.optimizer.max_items_per_request,
            ));
            print_json(&response, cli.pretty)?;

            Ok(if response.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn optimize(request: OptimizeRequest, max_items: usize) -> ApplicationResult<OptimizeOutput> {
    if request.items.len() > max_items {
        return Err(ApplicationError::validation(format!(
            "request has {} items, limit is {max_items}",
            request.items.len()
        )));
    }

    let preferences = UserPreferences::resolve(None, request.preferences.as_ref())?;
    let results = PriceOptimizationService::new().optimize_list(&request.items, &preferences)?;
    let summary = summarize(&request.items, &results, &preferences)?;

    Ok(OptimizeOutput {
        preferences,
        results,
        summary,
    })
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        return Ok(text);
    }
    if !path.exists() {
        bail!("request file {} does not exist", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

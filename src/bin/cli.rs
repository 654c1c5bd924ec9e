//! SpaceX Dash CLI
//!
//! Offline access to the dashboard's callbacks:
//! - Render a chart figure as JSON
//! - Summarize the dataset
//! - Print the page layout
//! - Generate a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use spacex_dash::api::dto::LayoutResponse;
use spacex_dash::api::routes::dataset::summarize;
use spacex_dash::config::{generate_default_config, Config};
use spacex_dash::dashboard::{
    payload_scatter_chart, success_pie_chart, CallbackRegistry, DashboardLayout,
};
use spacex_dash::dataset::{Dataset, DatasetLoader, PayloadRange, SiteSelection, ALL_SITES};

#[derive(Parser)]
#[command(name = "spacex-dash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render SpaceX launch dashboard charts from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Launch records file (default: from config)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Success pie chart figure
    Pie {
        /// Launch site, or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
    },

    /// Payload vs. outcome scatter chart figure
    Scatter {
        /// Launch site, or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Record counts and success rates per site
    Summary,

    /// Page layout and callback dependencies
    Layout,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    eprintln!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Pie { site } => {
            let dataset = load_dataset(&cli)?;
            let figure = success_pie_chart(&dataset, &SiteSelection::parse(site));
            print_json(&figure, cli.pretty)?;
        }

        Commands::Scatter { site, low, high } => {
            let dataset = load_dataset(&cli)?;
            let bounds = dataset.bounds();
            let range =
                PayloadRange::new(low.unwrap_or(bounds.min), high.unwrap_or(bounds.max))?;
            let figure = payload_scatter_chart(&dataset, &SiteSelection::parse(site), range);
            print_json(&figure, cli.pretty)?;
        }

        Commands::Summary => {
            let dataset = load_dataset(&cli)?;
            print_json(&summarize(&dataset), cli.pretty)?;
        }

        Commands::Layout => {
            let dataset = load_dataset(&cli)?;
            let layout = DashboardLayout::build(dataset.bounds());
            let dependencies = CallbackRegistry::dashboard().dependencies();
            print_json(
                &LayoutResponse {
                    layout,
                    dependencies,
                },
                cli.pretty,
            )?;
        }
    }

    Ok(())
}

fn load_dataset(cli: &Cli) -> Result<Dataset> {
    let config = Config::load_default().context("loading config")?;
    let path = cli
        .dataset
        .clone()
        .unwrap_or_else(|| config.dataset.path.clone());

    DatasetLoader::new()
        .with_delimiter(config.dataset.delimiter_byte()?)
        .load(&path)
        .with_context(|| format!("loading dataset {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scatter() {
        let cli = Cli::try_parse_from([
            "spacex-dash-cli",
            "scatter",
            "--site",
            "KSC LC-39A",
            "--low",
            "1000",
        ])
        .unwrap();

        match cli.command {
            Commands::Scatter { site, low, high } => {
                assert_eq!(site, "KSC LC-39A");
                assert_eq!(low, Some(1000.0));
                assert_eq!(high, None);
            }
            _ => panic!("expected scatter"),
        }
    }

    #[test]
    fn test_pie_defaults_to_all_sites() {
        let cli = Cli::try_parse_from(["spacex-dash-cli", "pie"]).unwrap();
        assert!(matches!(cli.command, Commands::Pie { ref site } if site == "ALL"));
    }
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{
    CITIES, ConditionFilter, Config, Dashboard, FilterCriteria, TemperatureBand,
    source_from_config,
};
use inquire::Text;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Current weather for world cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show summary statistics, charts and city cards.
    Show {
        /// Case-insensitive part of a city name.
        #[arg(long, default_value = "")]
        search: String,

        /// Temperature band: all, hot (>77°F), warm (59-77°F) or cold (<59°F).
        #[arg(long, default_value_t = TemperatureBand::All)]
        band: TemperatureBand,

        /// Condition: all, sunny, cloudy, rainy, snowy, or any part of a condition name.
        #[arg(long, default_value = "all")]
        condition: ConditionFilter,

        /// Print the summary and the filtered records as JSON instead.
        #[arg(long)]
        json: bool,
    },

    /// Show one city with its metric and comparison charts.
    Detail {
        /// City id as listed by `show`.
        id: u32,
    },

    /// List the tracked cities and their coordinates.
    Cities,

    /// Set the forecast API base URL and log filter.
    Configure,
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        match self.command {
            Command::Show {
                search,
                band,
                condition,
                json,
            } => {
                let dashboard = load(&config).await;
                let Some(snapshot) = dashboard.snapshot() else {
                    return Ok(());
                };

                let criteria = FilterCriteria {
                    search_text: search,
                    temperature_band: band,
                    condition,
                };

                if json {
                    println!("{}", render::json(snapshot, &criteria)?);
                    return Ok(());
                }

                print!("{}", render::dashboard(snapshot, &criteria));
            }
            Command::Detail { id } => {
                let dashboard = load(&config).await;
                let detail = dashboard.snapshot().and_then(|s| s.detail(id));
                match detail {
                    Some(detail) => print!("{}", render::detail(&detail)),
                    None => print!("{}", render::not_found()),
                }
            }
            Command::Cities => {
                print!("{}", render::cities(CITIES));
            }
            Command::Configure => configure(config)?,
        }

        Ok(())
    }
}

async fn load(config: &Config) -> Dashboard {
    eprintln!("Loading weather data...");
    Dashboard::load(source_from_config(config), CITIES).await
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let base_url = Text::new("Forecast API base URL:")
        .with_default(&config.base_url())
        .prompt()
        .context("Failed to read base URL")?;

    let log_filter = Text::new("Log filter (tracing env-filter syntax):")
        .with_default(config.log_filter())
        .prompt()
        .context("Failed to read log filter")?;

    config.base_url = Some(base_url.trim().trim_end_matches('/').to_string());
    config.log_filter = Some(log_filter.trim().to_string());

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

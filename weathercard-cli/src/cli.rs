use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode};
use weathercard_core::{
    Config, WeatherRequest,
    provider::{self, ProviderId},
};

use crate::card;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercard", version, about = "Weather card in your terminal")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "weatherapi".
        provider: String,
    },

    /// Show the weather card for a city.
    Show {
        /// City name, as you would type it into the search field.
        city: String,

        /// Provider to use instead of the configured default.
        #[arg(long)]
        provider: Option<String>,
    },
}

/// Translate `-v` counts into a default tracing filter.
pub const fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show { city, provider } => show(city, provider.as_deref()).await,
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;

    let mut config = Config::load()?;

    let api_key = Password::new(&format!("API key for {id}:"))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("API key entry was cancelled")?;

    config.upsert_provider_api_key(id, api_key);

    // Offer to switch only when some other provider is already the default.
    let is_default = config.default_provider_id().map(|d| d == id).unwrap_or(true);
    if !is_default {
        let make_default = Confirm::new(&format!("Use {id} as the default provider?"))
            .with_default(false)
            .prompt()
            .context("Default provider prompt was cancelled")?;

        if make_default {
            config.set_default_provider(id);
        }
    }

    config.save()?;

    println!("Saved credentials for {id} to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String, provider: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load()?;

    let chosen = match provider {
        Some(name) => provider::provider_from_config(ProviderId::try_from(name)?, &config)?,
        None => provider::default_provider_from_config(&config)?,
    };

    let request = WeatherRequest { city };
    let report = chosen.current(&request).await?;

    print!("{}", card::render(&report, &mut rand::rng()));
    Ok(())
}

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{CityMatches, Config, WeatherSource, fetch_weather, source_from_config};
use inquire::{Password, PasswordDisplayMode};

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Search a city and show its current weather")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// List known cities matching a query; popular cities when empty.
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show current weather for a city.
    Show {
        city: String,

        /// Print the record as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Type-ahead search prompt (the default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let Cli { config, command, .. } = self;
        let config = config.as_deref();

        match command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                let mut cfg = load_config(config)?;
                let key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .prompt()
                    .context("API key prompt aborted")?;

                cfg.set_api_key(key);
                let path = save_config(config, &cfg)?;
                println!("Saved API key to {}", path.display());
            }
            Command::Search { query } => {
                let matches = CityMatches::for_query(&query);
                print!("{}", render::format_matches(&matches));
            }
            Command::Show { city, json } => {
                let cfg = load_config(config)?.with_env_overrides();
                let source = source_from_config(&cfg)?;
                let mut stdout = std::io::stdout().lock();
                return show(source.as_ref(), &city, json, &mut stdout).await;
            }
            Command::Interactive => {
                let cfg = load_config(config)?.with_env_overrides();
                let source = source_from_config(&cfg)?;
                interactive::run(source).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Fetch once and write the card (or JSON) to `out`.
///
/// Any fetch failure writes nothing and yields `ExitCode::FAILURE`; the
/// reason is only logged.
pub async fn show(
    source: &dyn WeatherSource,
    city: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let Some(record) = fetch_weather(source, city).await else {
        return Ok(ExitCode::FAILURE);
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &record)
            .context("Failed to serialize weather record")?;
        writeln!(out)?;
    } else {
        out.write_all(render::format_record(&record, None).as_bytes())?;
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn save_config(path: Option<&Path>, cfg: &Config) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => {
            cfg.save_to(path)?;
            Ok(path.to_path_buf())
        }
        None => {
            cfg.save()?;
            Config::config_file_path()
        }
    }
}

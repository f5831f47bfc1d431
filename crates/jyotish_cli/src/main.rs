use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use jyotish_config::{AppConfig, ConfigLoader};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyotish", version, about = "Vedic astrology calculations")]
struct Cli {
    /// Configuration file (TOML, or JSON by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Narrative language tag; defaults to the configured one
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(clap::Args)]
struct Birth {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    dob: String,
    /// Birth time (HH:MM[:SS]) in the configured zone
    #[arg(long)]
    tob: String,
    #[command(flatten)]
    place: Place,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart, dasha, yogas and gemstone
    Kundali {
        #[arg(long, default_value = "")]
        name: String,
        #[command(flatten)]
        birth: Birth,
        /// Query instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Panchang for a date
    Panchang {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: Place,
        /// Include the following day
        #[arg(long)]
        tomorrow: bool,
    },
    /// Panchang for each date of an inclusive range
    Range {
        start: String,
        end: String,
        #[command(flatten)]
        place: Place,
    },
    /// Sidereal positions of the nine grahas
    Positions {
        /// Instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Sign ingresses of a planet
    Ingresses {
        planet: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// Search backwards from the start date
        #[arg(long)]
        prev: bool,
    },
    /// Sade-Sati status and lifetime cycles
    SadeSati {
        #[command(flatten)]
        birth: Birth,
        /// Query instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Adhik months touching a year
    Adhik { year: i32 },
    /// Ashtakoot matching from sidereal Moon longitudes
    Ashtakoot {
        /// Bride's Moon longitude in degrees
        #[arg(long)]
        bride: f64,
        /// Groom's Moon longitude in degrees
        #[arg(long)]
        groom: f64,
    },
    /// Next occurrence of an observance on or after a date
    Next {
        #[arg(value_enum)]
        event: Event,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        #[command(flatten)]
        place: Place,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Event {
    Ekadashi,
    Pradosh,
    Sankashti,
    Amavasya,
    Purnima,
    Vinayaka,
    Shivratri,
    Holi,
    Sankranti,
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(p) => ConfigLoader::with_file(p).load(),
        None => ConfigLoader::new().load(),
    }
}

fn install_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{text}");
    Ok(())
}

fn next_event(event: Event, from: &str, place: &Place, lang: &str, compact: bool) -> Result<()> {
    let (lat, lon) = (place.lat, place.lon);
    match event {
        Event::Ekadashi => emit(&jyotish_rs::find_next_ekadashi(from, lat, lon, lang)?, compact),
        Event::Pradosh => emit(&jyotish_rs::find_next_pradosh(from, lat, lon, lang)?, compact),
        Event::Sankashti => emit(&jyotish_rs::find_next_sankashti(from, lat, lon, lang)?, compact),
        Event::Amavasya => emit(&jyotish_rs::find_next_amavasya(from, lat, lon, lang)?, compact),
        Event::Purnima => emit(&jyotish_rs::find_next_purnima(from, lat, lon, lang)?, compact),
        Event::Vinayaka => emit(&jyotish_rs::find_next_vinayaka(from, lat, lon, lang)?, compact),
        Event::Shivratri => emit(&jyotish_rs::find_next_shivratri(from, lat, lon, lang)?, compact),
        Event::Holi => emit(&jyotish_rs::find_next_holi(from, lat, lon, lang)?, compact),
        Event::Sankranti => emit(&jyotish_rs::find_next_sankranti(from, lat, lon, lang)?, compact),
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let lang = cli.lang.as_deref().unwrap_or(&config.default_language);
    let compact = cli.compact;
    match cli.command {
        Commands::Kundali { name, birth, now } => {
            let now = now.unwrap_or_else(Utc::now);
            let k = jyotish_rs::calculate_full_kundali(
                &name,
                &birth.dob,
                &birth.tob,
                birth.place.lat,
                birth.place.lon,
                lang,
                now,
            )?;
            emit(&k, compact)
        }
        Commands::Panchang {
            date,
            place,
            tomorrow,
        } => {
            if tomorrow {
                emit(&jyotish_rs::today_and_tomorrow(&date, place.lat, place.lon, lang)?, compact)
            } else {
                emit(&jyotish_rs::panchang(&date, place.lat, place.lon, lang)?, compact)
            }
        }
        Commands::Range { start, end, place } => {
            emit(&jyotish_rs::panchang_range(&start, &end, place.lat, place.lon)?, compact)
        }
        Commands::Positions { now } => {
            emit(&jyotish_rs::current_positions(now.unwrap_or_else(Utc::now))?, compact)
        }
        Commands::Ingresses {
            planet,
            from,
            count,
            prev,
        } => {
            let events = if prev {
                jyotish_rs::prev_ingresses(&planet, count, &from)?
            } else {
                jyotish_rs::next_ingresses(&planet, count, &from)?
            };
            emit(&events, compact)
        }
        Commands::SadeSati { birth, now } => {
            let report = jyotish_rs::sade_sati(
                &birth.dob,
                &birth.tob,
                birth.place.lat,
                birth.place.lon,
                now.unwrap_or_else(Utc::now),
            )?;
            emit(&report, compact)
        }
        Commands::Adhik { year } => emit(&jyotish_rs::adhik_maas(year)?, compact),
        Commands::Ashtakoot { bride, groom } => {
            let bride = jyotish_rs::moon_at(bride)?;
            let groom = jyotish_rs::moon_at(groom)?;
            emit(&jyotish_rs::ashtakoot(&bride, &groom), compact)
        }
        Commands::Next { event, from, place } => next_event(event, &from, &place, lang, compact),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    install_logging(&config);
    let zone = config.zone()?;
    jyotish_rs::init_with_zone(config.engine.clone(), zone).context("initialising the engine")?;
    debug!(language = %config.default_language, "engine ready");
    run(cli, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn western_longitudes_parse() {
        let cli = Cli::try_parse_from([
            "jyotish", "panchang", "2025-01-01", "--lat", "40.7", "--lon", "-74.0",
        ])
        .expect("parse");
        match cli.command {
            Commands::Panchang { place, .. } => assert_eq!(place.lon, -74.0),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn next_takes_an_event_name() {
        let cli = Cli::try_parse_from([
            "jyotish", "next", "shivratri", "--from", "2025-02-20", "--lat", "28.6", "--lon",
            "77.2",
        ])
        .expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Next {
                event: Event::Shivratri,
                ..
            }
        ));
    }

    #[test]
    fn query_instant_is_rfc3339() {
        let cli = Cli::try_parse_from(["jyotish", "positions", "--now", "2025-01-01T00:00:00Z"])
            .expect("parse");
        assert!(matches!(cli.command, Commands::Positions { now: Some(_) }));
        assert!(Cli::try_parse_from(["jyotish", "positions", "--now", "yesterday"]).is_err());
    }
}

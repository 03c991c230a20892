use std::path::PathBuf;

use anyhow::{Context, Result};
use storage::services::TimePrecision;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Scoring table JSON; the built-in table is used when unset
    pub scoring_config: Option<PathBuf>,
    /// Overrides the precision of the loaded table, as 2 or 3 fractional digits
    pub time_precision: Option<TimePrecision>,
    /// Roster loaded into the store at startup
    pub roster_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let time_precision = match std::env::var("TIME_PRECISION") {
            Ok(value) => {
                let digits: u8 = value
                    .trim()
                    .parse()
                    .context("TIME_PRECISION must be a number")?;
                Some(
                    TimePrecision::from_digits(digits)
                        .context("TIME_PRECISION must be 2 or 3")?,
                )
            }
            Err(_) => None,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a number")?,
            scoring_config: std::env::var("SCORING_CONFIG").ok().map(PathBuf::from),
            time_precision,
            roster_file: std::env::var("ROSTER_FILE").ok().map(PathBuf::from),
        })
    }
}

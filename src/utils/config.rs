use std::env;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::args::OutputFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub color: bool,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(lookup).context("Failed to load configuration")
    }

    fn build<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("ORDER_CLI_FORMAT") {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|_| anyhow::anyhow!("ORDER_CLI_FORMAT must be one of text, table, json"))?,
            None => OutputFormat::Table,
        };

        let config = Config {
            // RUST_LOG wins over LOG_LEVEL; both take EnvFilter directives
            log_level: lookup("RUST_LOG")
                .or_else(|| lookup("LOG_LEVEL"))
                .unwrap_or("warn".to_string())
                .to_lowercase(),
            environment: lookup("APP_ENV").unwrap_or("development".to_string()),
            color: lookup("ORDER_CLI_COLOR")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
            format,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        self.env_filter()?;

        if self.environment.trim().is_empty() {
            return Err(anyhow::anyhow!("APP_ENV must not be empty"));
        }

        Ok(())
    }

    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log filter '{}'", self.log_level))
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

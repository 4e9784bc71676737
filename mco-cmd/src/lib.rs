//! Command implementations for the MCO CLI.
//!
//! Every command reads from one data source: the HTTP API by default, or an
//! offline preprocessed bundle with `--bundle`.

use clap::{Args, Subcommand};
use mco_api::client::{ClientConfig, DEFAULT_BASE_URL};
use mco_api::{Year, YearRange};
use std::path::PathBuf;
use std::time::Duration;

pub mod generate;
pub mod source;
pub mod timeseries;

use source::Source;

/// Where data comes from; shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceOptions {
    /// Base URL of the CO data API
    #[arg(long, env = "MCO_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Read from a preprocessed JSON bundle instead of the API
    #[arg(long, global = true)]
    pub bundle: Option<PathBuf>,
}

impl SourceOptions {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a year and write the chart and globe figures as JSON
    Generate {
        /// Year to render
        #[arg(short, long, value_parser = parse_year)]
        year: Year,

        /// Directory receiving chart.json and globe.json
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the monthly averages of a year, optionally saving them as CSV
    Timeseries {
        /// Year to fetch
        #[arg(short, long, value_parser = parse_year)]
        year: Year,

        /// Output path for a month,average CSV (no headers)
        #[arg(long)]
        csv: Option<String>,
    },

    /// List the years available in a preprocessed bundle (requires --bundle)
    Years,
}

/// Parse a year and check it against the MOPITT record.
pub fn parse_year(s: &str) -> Result<Year, String> {
    let year: Year = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    let range = YearRange::default();
    if !range.contains(year) {
        return Err(format!(
            "{} is outside {}..={}",
            year, range.first, range.last
        ));
    }
    Ok(year)
}

pub async fn run(command: Command, options: SourceOptions) -> anyhow::Result<()> {
    match command {
        Command::Generate { year, out_dir } => {
            let source = Source::from_options(&options)?;
            generate::run_generate(source, year, &out_dir).await
        }
        Command::Timeseries { year, csv } => {
            let source = Source::from_options(&options)?;
            timeseries::run_timeseries(&source, year, csv.as_deref()).await
        }
        Command::Years => {
            let Some(bundle) = options.bundle.as_ref() else {
                anyhow::bail!("`years` reads a preprocessed bundle; pass --bundle <path>");
            };
            let bundle = mco_api::bundle::ProcessedBundle::load(bundle)?;
            for year in bundle.years() {
                println!("{}", year);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019"), Ok(Year::new(2019)));
        assert!(parse_year("1999").unwrap_err().contains("outside 2000..=2024"));
        assert!(parse_year("soon").is_err());
    }

    #[test]
    fn test_client_config_timeout() {
        let options = SourceOptions {
            base_url: "https://co.example.org/".to_string(),
            timeout_secs: Some(30),
            bundle: None,
        };
        let config = options.client_config();
        assert_eq!(config.base(), "https://co.example.org");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}

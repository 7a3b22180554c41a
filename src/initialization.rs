use std::fs;
use std::path::PathBuf;
use clap::Parser;
use log::info;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Open-Meteo backed weekly forecast and summary service
#[derive(Parser, Debug)]
#[command(name = "weathersummary", version, about)]
pub struct Args {
    /// Path to the toml configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[derive(Deserialize)]
pub struct WebServerParameters {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct OpenMeteoParameters {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

impl Default for OpenMeteoParameters {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_to_stdout")]
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: default_log_level(),
            log_to_stdout: default_log_to_stdout(),
        }
    }
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServerParameters,
    #[serde(default)]
    pub open_meteo: OpenMeteoParameters,
    #[serde(default)]
    pub general: General,
}

fn default_base_url() -> String { "https://api.open-meteo.com/v1/forecast".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_max_concurrent_requests() -> usize { 7 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_to_stdout() -> bool { true }

/// Loads the configuration file and sets up logging.
///
/// The file is given on the command line as `--config <path>`, otherwise `config.toml`
/// in the working directory is used.
pub fn config() -> Result<Config, ConfigError> {
    let args = Args::parse();

    let toml = fs::read_to_string(&args.config)
        .map_err(|e| ConfigError(format!("failed to read {}: {}", args.config.display(), e)))?;
    let config = parse_config(&toml)?;

    setup_logger(&config.general)?;
    info!("configuration loaded from {}", args.config.display());

    Ok(config)
}

/// Parses configuration from a toml string
///
/// # Arguments
///
/// * 'toml' - the configuration
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    if config.web_server.bind_address.is_empty() {
        return Err(ConfigError::from("web_server.bind_address must not be empty"));
    }

    Ok(config)
}

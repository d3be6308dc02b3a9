use std::time::Duration;

use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    notify::Level,
};

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// API token sent as a bearer credential.
    pub token: String,
    pub timezone: String,
    pub page_size: u64,
    pub state_path: String,
    pub log_level: String,
    pub log_file: String,
    pub notifications: NotificationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/".to_string(),
            token: String::new(),
            timezone: "Europe/Rome".to_string(),
            page_size: 20,
            state_path: "config/tui_state.json".to_string(),
            log_level: "info".to_string(),
            log_file: "fintui.log".to_string(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|err| AppError::Timezone(format!("{}: {err}", self.timezone)))
    }
}

/// Backlog size and per-level display durations of the notification queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub capacity: usize,
    pub info_secs: u64,
    pub warning_secs: u64,
    pub error_secs: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            capacity: 20,
            info_secs: 5,
            warning_secs: 7,
            error_secs: 10,
        }
    }
}

impl NotificationSettings {
    /// Capacity below 1 would make every admission a drop.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }

    pub fn duration_for(&self, level: Level) -> Duration {
        let secs = match level {
            Level::Info => self.info_secs,
            Level::Warning => self.warning_secs,
            Level::Error => self.error_secs,
        };
        Duration::from_secs(secs)
    }
}

#[derive(Debug, Parser)]
#[command(name = "fintui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:8080/api/).
    #[arg(long)]
    base_url: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
}

/// Loads settings from file, then `FINTUI_*` env, then CLI flags.
///
/// The token is never read from the CLI.
pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("FINTUI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}

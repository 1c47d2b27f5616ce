use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

fn default_base_url() -> String {
    "https://testeproject-9a60a-default-rtdb.firebaseio.com/irrigacao".to_string()
}

fn default_polling_ms() -> u64 {
    2000
}

fn default_dry_threshold() -> f64 {
    40.0
}

fn default_dashboard_file() -> String {
    "irrigation-panel.png".to_string()
}

fn default_width() -> u32 {
    420
}

fn default_height() -> u32 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PanelConfig {
    #[serde(default = "default_polling_ms")]
    pub polling_ms: u64,
    #[serde(default = "default_dry_threshold")]
    pub dry_threshold: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_file")]
    pub file: String,
    #[serde(default)]
    pub save_to_file: bool,
    #[serde(default)]
    pub font: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(rename = "STORE", alias = "store", default)]
    pub store: StoreConfig,
    #[serde(rename = "PANEL", alias = "panel", default)]
    pub panel: PanelConfig,
    #[serde(rename = "DASHBOARD", alias = "dashboard", default)]
    pub dashboard: DashboardConfig,
    #[serde(rename = "LOGGING", alias = "logging", default)]
    pub logging: LoggingConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            polling_ms: default_polling_ms(),
            dry_threshold: default_dry_threshold(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            file: default_dashboard_file(),
            save_to_file: false,
            font: String::new(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PanelConfig {
    /// A zero interval is treated as one millisecond.
    pub fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_ms.max(1))
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!("[STORE]\nbase_url = {}\n\n", self.store.base_url));

        config_str.push_str(&format!(
            "[PANEL]\npolling_ms = {}\ndry_threshold = {}\n\n",
            self.panel.polling_ms, self.panel.dry_threshold
        ));

        config_str.push_str(&format!(
            "[DASHBOARD]\nfile = {}\nsave_to_file = {}\nfont = {}\nwidth = {}\nheight = {}\n\n",
            self.dashboard.file,
            self.dashboard.save_to_file,
            self.dashboard.font,
            self.dashboard.width,
            self.dashboard.height
        ));

        config_str.push_str(&format!("[LOGGING]\nlevel = {}\n", self.logging.level));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

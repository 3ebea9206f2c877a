use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::gateway::{aladhan, nominatim, quran};
use crate::models::Language;
use crate::prayer_times::FastingPeriod;

fn default_location_name() -> String {
    "Mecca".to_string()
}
fn default_latitude() -> f64 {
    21.4225
}
fn default_longitude() -> f64 {
    39.8262
}
fn default_method() -> u32 {
    2
}
fn default_fasting_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 18).unwrap_or_default()
}
fn default_fasting_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 20).unwrap_or_default()
}
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
fn default_aladhan() -> String {
    aladhan::DEFAULT_BASE_URL.to_string()
}
fn default_nominatim() -> String {
    nominatim::DEFAULT_BASE_URL.to_string()
}
fn default_quran() -> String {
    quran::DEFAULT_BASE_URL.to_string()
}
fn default_gemini() -> String {
    crate::assistant::client::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerConfig {
    /// Aladhan calculation method id.
    #[serde(default = "default_method")]
    pub method: u32,
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default)]
    pub hijri_offset: i32,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            hijri_offset: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastingConfig {
    #[serde(default = "default_fasting_start")]
    pub start: NaiveDate,
    #[serde(default = "default_fasting_end")]
    pub end: NaiveDate,
}

impl Default for FastingConfig {
    fn default() -> Self {
        Self {
            start: default_fasting_start(),
            end: default_fasting_end(),
        }
    }
}

impl FastingConfig {
    pub fn period(&self) -> FastingPeriod {
        FastingPeriod {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl AssistantConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_aladhan")]
    pub aladhan: String,
    #[serde(default = "default_nominatim")]
    pub nominatim: String,
    #[serde(default = "default_quran")]
    pub quran: String,
    #[serde(default = "default_gemini")]
    pub gemini: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            aladhan: default_aladhan(),
            nominatim: default_nominatim(),
            quran: default_quran(),
            gemini: default_gemini(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub prayer: PrayerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub fasting: FastingConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "nur").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("nur.db"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.location.name, "Mecca");
        assert_eq!(config.prayer.method, 2);
        assert_eq!(config.display.language, Language::En);
        assert_eq!(config.assistant.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.endpoints.aladhan, aladhan::DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[location]\nname = \"Dhaka\"\n\n[display]\nlanguage = \"bn\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.location.name, "Dhaka");
        assert_eq!(config.location.latitude, 21.4225);
        assert_eq!(config.display.language, Language::Bn);
        assert_eq!(config.fasting.start, NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.location.name = "Sylhet".to_string();
        config.location.latitude = 24.8949;
        config.prayer.method = 1;
        config.prayer.hijri_offset = -1;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.location.name, "Sylhet");
        assert_eq!(loaded.location.latitude, 24.8949);
        assert_eq!(loaded.prayer.method, 1);
        assert_eq!(loaded.prayer.hijri_offset, -1);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[prayer\nmethod = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn fasting_period_comes_from_config() {
        let period = FastingConfig::default().period();
        assert!(period.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }
}

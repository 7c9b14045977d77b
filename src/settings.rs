//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub lattice: LatticeSettings,
    pub scoring: ScoringSettings,
    pub markers: MarkerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatticeSettings {
    pub max_token_len: usize,
    pub fallback_cost: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    pub floor_probability: f64,
    pub unknown_rank: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkerSettings {
    pub continuation: String,
    pub word_initial: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.lattice.max_token_len == 0 {
        return Err(SettingsError::InvalidValue {
            field: "lattice.max_token_len".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if !s.lattice.fallback_cost.is_finite() || s.lattice.fallback_cost < 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "lattice.fallback_cost".to_string(),
            reason: "must be a non-negative finite number".to_string(),
        });
    }
    if !(s.scoring.floor_probability > 0.0 && s.scoring.floor_probability <= 1.0) {
        return Err(SettingsError::InvalidValue {
            field: "scoring.floor_probability".to_string(),
            reason: "must be in (0, 1]".to_string(),
        });
    }
    if s.scoring.unknown_rank == 0 {
        return Err(SettingsError::InvalidValue {
            field: "scoring.unknown_rank".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.markers.continuation.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "markers.continuation".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }
    if s.markers.word_initial.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "markers.word_initial".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }
    Ok(())
}

//! Engine configuration

use eco_emissions::{ScoreBands, TransportProfile};
use eco_types::{DEFAULT_COMPLEXITY_FACTOR, DEFAULT_CO2_PER_KG};
use eco_weight::GlobalBounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or validating an [`EngineConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Engine configuration. Every field has a default, so an empty file (or
/// no file at all) yields the built-in engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// CO2 per kg used for materials missing from the catalog
    pub default_co2_per_kg: f64,

    /// Complexity factor for categories missing from the table
    pub default_complexity_factor: f64,

    /// Transport multiplier per mode
    pub transport: TransportProfile,

    /// CO2 → letter grade thresholds
    pub score_bands: ScoreBands,

    /// Global weight limits and fallback weights
    pub weight: GlobalBounds,

    /// Material catalog file (JSON or CSV); built-in table when unset
    pub materials_catalog: Option<PathBuf>,

    /// Complexity table file (JSON or CSV); built-in table when unset
    pub complexity_catalog: Option<PathBuf>,

    /// Classifier predictions below this confidence are discarded
    pub classifier_confidence_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_co2_per_kg: DEFAULT_CO2_PER_KG,
            default_complexity_factor: DEFAULT_COMPLEXITY_FACTOR,
            transport: TransportProfile::default(),
            score_bands: ScoreBands::default(),
            weight: GlobalBounds::default(),
            materials_catalog: None,
            complexity_catalog: None,
            classifier_confidence_floor: 0.5,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&contents)?;
        config.resolve_paths(path.parent().unwrap_or_else(|| Path::new(".")));
        info!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_co2_per_kg.is_finite() && self.default_co2_per_kg > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_co2_per_kg must be positive, got {}",
                self.default_co2_per_kg
            )));
        }
        if !(self.default_complexity_factor.is_finite() && self.default_complexity_factor >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "default_complexity_factor must be >= 1.0, got {}",
                self.default_complexity_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.classifier_confidence_floor) {
            return Err(ConfigError::Invalid(format!(
                "classifier_confidence_floor must be within 0..=1, got {}",
                self.classifier_confidence_floor
            )));
        }
        self.transport
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        ScoreBands::new(self.score_bands.bands().to_vec(), self.score_bands.ceiling())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.weight
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Catalog paths in a config file are relative to that file.
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.materials_catalog, &mut self.complexity_catalog]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_types::TransportMode;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_co2_per_kg, 2.0);
        assert_eq!(config.transport.multiplier(TransportMode::Air), 2.5);
        assert!(config.materials_catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let config = EngineConfig::load("/nonexistent/path/eco.toml").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            default_co2_per_kg = 3.0

            [transport]
            air = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(config.default_co2_per_kg, 3.0);
        assert_eq!(config.transport.air, 3.0);
        assert_eq!(config.transport.land, 1.2);
        assert_eq!(config.classifier_confidence_floor, 0.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(EngineConfig::from_toml_str("default_co2_per_kg = -1.0").is_err());
        assert!(EngineConfig::from_toml_str("classifier_confidence_floor = 1.5").is_err());
        assert!(EngineConfig::from_toml_str("[transport]\nship = 0.5").is_err());
        assert!(matches!(
            EngineConfig::from_toml_str("default_co2_per_kg = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unordered_bands_rejected() {
        let toml = r#"
            [score_bands]
            ceiling = "C"
            bands = [
                { upper_kg = 10.0, score = "A" },
                { upper_kg = 5.0, score = "B" },
            ]
        "#;
        assert!(EngineConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_catalog_paths_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eco.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "materials_catalog = \"materials.csv\"").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.materials_catalog, Some(dir.path().join("materials.csv")));
        assert!(config.complexity_catalog.is_none());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = EngineConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}

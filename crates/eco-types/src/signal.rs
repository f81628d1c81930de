use crate::error::{EcoError, Result};
use crate::normalize::normalize_category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a product travels from manufacturer to customer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Air,
    #[default]
    Ship,
    Land,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [TransportMode::Air, TransportMode::Ship, TransportMode::Land];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Ship => "ship",
            TransportMode::Land => "land",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "air" | "plane" | "flight" => Ok(TransportMode::Air),
            "ship" | "sea" | "boat" => Ok(TransportMode::Ship),
            "land" | "truck" | "road" | "rail" => Ok(TransportMode::Land),
            other => Err(EcoError::UnknownTransportMode(other.to_string())),
        }
    }
}

/// One product as observed by an upstream scraper.
///
/// Only `title` is required. Everything else may be absent or wrong; the
/// inference components degrade confidence instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSignal {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub scraped_weight_kg: Option<f64>,
    #[serde(default)]
    pub scraped_material: Option<String>,
    #[serde(default)]
    pub transport_mode: TransportMode,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Country of origin, when the listing states one.
    #[serde(default)]
    pub origin: Option<String>,
}

impl ProductSignal {
    /// Create a signal from a title and category.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EcoError::InvalidSignal("title is empty".into()));
        }
        Ok(Self {
            title,
            category: category.into(),
            scraped_weight_kg: None,
            scraped_material: None,
            transport_mode: TransportMode::default(),
            description: None,
            brand: None,
            origin: None,
        })
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.scraped_weight_kg = Some(weight_kg);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.scraped_material = Some(material.into());
        self
    }

    pub fn with_transport(mut self, mode: TransportMode) -> Self {
        self.transport_mode = mode;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Check a deserialized signal.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(EcoError::InvalidSignal("title is empty".into()));
        }
        Ok(())
    }

    /// The category in snake_case, as used for table lookups.
    pub fn normalized_category(&self) -> String {
        normalize_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_rejected() {
        assert!(ProductSignal::new("   ", "books").is_err());
        assert!(ProductSignal::new("Paperback Book", "books").is_ok());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let signal = ProductSignal::new("Fiskars Pruning Shears", "Garden & Outdoor")
            .unwrap()
            .with_weight(37.87)
            .with_material("Steel")
            .with_transport(TransportMode::Air);

        assert_eq!(signal.scraped_weight_kg, Some(37.87));
        assert_eq!(signal.scraped_material.as_deref(), Some("Steel"));
        assert_eq!(signal.transport_mode, TransportMode::Air);
        assert_eq!(signal.normalized_category(), "garden_&_outdoor");
    }

    #[test]
    fn transport_defaults_to_ship() {
        let json = r#"{"title": "Glass Jar"}"#;
        let signal: ProductSignal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.transport_mode, TransportMode::Ship);
        assert!(signal.scraped_weight_kg.is_none());
        assert!(signal.validate().is_ok());
    }

    #[test]
    fn transport_mode_parsing() {
        assert_eq!("Air".parse::<TransportMode>().unwrap(), TransportMode::Air);
        assert_eq!("truck".parse::<TransportMode>().unwrap(), TransportMode::Land);
        assert!("teleport".parse::<TransportMode>().is_err());
        assert_eq!(TransportMode::Ship.to_string(), "ship");
    }
}

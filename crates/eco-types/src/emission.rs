use crate::error::EcoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade for a product's estimated footprint. `APlus` is best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EcoScore {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EcoScore {
    pub fn as_str(&self) -> &'static str {
        match self {
            EcoScore::APlus => "A+",
            EcoScore::A => "A",
            EcoScore::B => "B",
            EcoScore::C => "C",
            EcoScore::D => "D",
            EcoScore::E => "E",
            EcoScore::F => "F",
            EcoScore::G => "G",
        }
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcoScore {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A+" => Ok(EcoScore::APlus),
            "A" => Ok(EcoScore::A),
            "B" => Ok(EcoScore::B),
            "C" => Ok(EcoScore::C),
            "D" => Ok(EcoScore::D),
            "E" => Ok(EcoScore::E),
            "F" => Ok(EcoScore::F),
            "G" => Ok(EcoScore::G),
            other => Err(EcoError::UnknownEcoScore(other.to_string())),
        }
    }
}

/// How well-established a complexity factor is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityConfidence {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ComplexityConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityConfidence::VeryLow => "very_low",
            ComplexityConfidence::Low => "low",
            ComplexityConfidence::Medium => "medium",
            ComplexityConfidence::High => "high",
        }
    }
}

impl fmt::Display for ComplexityConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the manufacturing complexity table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexityRecord {
    /// Normalized snake_case category.
    pub category: String,
    /// Multiplier on material emissions; `1.0` means no manufacturing overhead.
    pub complexity_factor: f64,
    pub confidence: ComplexityConfidence,
}

impl ComplexityRecord {
    pub fn new(category: impl Into<String>, complexity_factor: f64, confidence: ComplexityConfidence) -> Self {
        Self {
            category: category.into(),
            complexity_factor,
            confidence,
        }
    }
}

/// Where the CO2 of an estimate comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub materials: f64,
    pub manufacturing: f64,
    pub transport: f64,
}

impl EmissionBreakdown {
    pub fn total(&self) -> f64 {
        self.materials + self.manufacturing + self.transport
    }

    pub fn is_non_negative(&self) -> bool {
        self.materials >= 0.0 && self.manufacturing >= 0.0 && self.transport >= 0.0
    }
}

/// Final footprint estimate for one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionEstimate {
    /// Validated weight the estimate was computed from.
    pub weight_kg: f64,
    pub co2_kg: f64,
    pub eco_score: EcoScore,
    pub breakdown: EmissionBreakdown,
    /// Material plus transport CO2, before manufacturing overhead.
    pub baseline_co2_kg: f64,
    /// Complexity row used for the manufacturing term.
    pub complexity: ComplexityRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eco_score_round_trips_through_text() {
        assert_eq!("a+".parse::<EcoScore>().unwrap(), EcoScore::APlus);
        assert_eq!(" c ".parse::<EcoScore>().unwrap(), EcoScore::C);
        assert!("H".parse::<EcoScore>().is_err());
        assert_eq!(serde_json::to_string(&EcoScore::APlus).unwrap(), "\"A+\"");
    }

    #[test]
    fn eco_score_orders_best_first() {
        assert!(EcoScore::APlus < EcoScore::A);
        assert!(EcoScore::A < EcoScore::F);
    }

    #[test]
    fn complexity_confidence_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComplexityConfidence::VeryLow).unwrap(),
            "\"very_low\""
        );
    }

    #[test]
    fn breakdown_total() {
        let b = EmissionBreakdown {
            materials: 2.0,
            manufacturing: 1.5,
            transport: 0.5,
        };
        assert!((b.total() - 4.0).abs() < 1e-12);
        assert!(b.is_non_negative());
    }
}

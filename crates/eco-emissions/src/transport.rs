use crate::error::{EmissionError, Result};
use eco_types::TransportMode;
use serde::{Deserialize, Serialize};

/// Transport multiplier per mode, applied to material CO2.
///
/// A multiplier of 1.0 adds nothing; values below 1.0 are rejected because
/// they would make the transport share of an estimate negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportProfile {
    pub air: f64,
    pub ship: f64,
    pub land: f64,
}

impl Default for TransportProfile {
    fn default() -> Self {
        Self {
            air: 2.5,
            ship: 1.0,
            land: 1.2,
        }
    }
}

impl TransportProfile {
    pub fn multiplier(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Air => self.air,
            TransportMode::Ship => self.ship,
            TransportMode::Land => self.land,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for mode in TransportMode::ALL {
            let m = self.multiplier(mode);
            if !(m.is_finite() && m >= 1.0) {
                return Err(EmissionError::InvalidTransportMultiplier(m));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let profile = TransportProfile::default();
        assert_eq!(profile.multiplier(TransportMode::Air), 2.5);
        assert_eq!(profile.multiplier(TransportMode::Ship), 1.0);
        assert_eq!(profile.multiplier(TransportMode::Land), 1.2);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn multiplier_below_one_rejected() {
        let profile = TransportProfile {
            ship: 0.8,
            ..TransportProfile::default()
        };
        assert_eq!(
            profile.validate(),
            Err(EmissionError::InvalidTransportMultiplier(0.8))
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let profile: TransportProfile = serde_json::from_str(r#"{"air": 3.0}"#).unwrap();
        assert_eq!(profile.air, 3.0);
        assert_eq!(profile.land, 1.2);
    }
}

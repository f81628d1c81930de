use crate::error::{EmissionError, Result};
use eco_types::EcoScore;
use serde::{Deserialize, Serialize};

/// Values strictly below `upper_kg` earn `score`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub upper_kg: f64,
    pub score: EcoScore,
}

impl ScoreBand {
    pub fn new(upper_kg: f64, score: EcoScore) -> Self {
        Self { upper_kg, score }
    }
}

/// CO2 kg → letter grade.
///
/// One table is used for every estimate a process produces; grades from
/// different tables are not comparable. The default is the recalibrated
/// six-band A–F table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBands {
    bands: Vec<ScoreBand>,
    ceiling: EcoScore,
}

impl ScoreBands {
    /// Bands must have strictly ascending, positive, finite limits and
    /// grades that get strictly worse.
    pub fn new(bands: Vec<ScoreBand>, ceiling: EcoScore) -> Result<Self> {
        if bands.is_empty() {
            return Err(EmissionError::InvalidBands("at least one band is required".into()));
        }
        for band in &bands {
            if !(band.upper_kg.is_finite() && band.upper_kg > 0.0) {
                return Err(EmissionError::InvalidBands(format!(
                    "limit for {} must be positive and finite, got {}",
                    band.score, band.upper_kg
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[1].upper_kg <= pair[0].upper_kg {
                return Err(EmissionError::InvalidBands(format!(
                    "limits must ascend: {} then {}",
                    pair[0].upper_kg, pair[1].upper_kg
                )));
            }
            if pair[1].score <= pair[0].score {
                return Err(EmissionError::InvalidBands(format!(
                    "grades must worsen: {} then {}",
                    pair[0].score, pair[1].score
                )));
            }
        }
        if let Some(last) = bands.last() {
            if ceiling <= last.score {
                return Err(EmissionError::InvalidBands(format!(
                    "ceiling grade {} must be worse than {}",
                    ceiling, last.score
                )));
            }
        }
        Ok(Self { bands, ceiling })
    }

    /// `<5 A, <15 B, <50 C, <150 D, <500 E, else F`.
    pub fn recalibrated() -> Self {
        Self {
            bands: vec![
                ScoreBand::new(5.0, EcoScore::A),
                ScoreBand::new(15.0, EcoScore::B),
                ScoreBand::new(50.0, EcoScore::C),
                ScoreBand::new(150.0, EcoScore::D),
                ScoreBand::new(500.0, EcoScore::E),
            ],
            ceiling: EcoScore::F,
        }
    }

    /// Grade for a CO2 figure. Non-finite values get the ceiling grade.
    pub fn grade(&self, co2_kg: f64) -> EcoScore {
        self.bands
            .iter()
            .find(|band| co2_kg < band.upper_kg)
            .map(|band| band.score)
            .unwrap_or(self.ceiling)
    }

    pub fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    pub fn ceiling(&self) -> EcoScore {
        self.ceiling
    }

    /// Every grade this table can produce, best first.
    pub fn grades(&self) -> Vec<EcoScore> {
        self.bands
            .iter()
            .map(|b| b.score)
            .chain(std::iter::once(self.ceiling))
            .collect()
    }
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self::recalibrated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recalibrated_thresholds() {
        let bands = ScoreBands::recalibrated();
        assert_eq!(bands.grade(0.0), EcoScore::A);
        assert_eq!(bands.grade(4.99), EcoScore::A);
        assert_eq!(bands.grade(5.0), EcoScore::B);
        assert_eq!(bands.grade(14.9), EcoScore::B);
        assert_eq!(bands.grade(15.0), EcoScore::C);
        assert_eq!(bands.grade(49.0), EcoScore::C);
        assert_eq!(bands.grade(149.0), EcoScore::D);
        assert_eq!(bands.grade(499.0), EcoScore::E);
        assert_eq!(bands.grade(500.0), EcoScore::F);
        assert_eq!(bands.grade(f64::NAN), EcoScore::F);
    }

    #[test]
    fn grades_listed_best_first() {
        assert_eq!(
            ScoreBands::default().grades(),
            vec![EcoScore::A, EcoScore::B, EcoScore::C, EcoScore::D, EcoScore::E, EcoScore::F]
        );
    }

    #[test]
    fn custom_bands_validated() {
        let ok = ScoreBands::new(
            vec![ScoreBand::new(1.0, EcoScore::APlus), ScoreBand::new(10.0, EcoScore::A)],
            EcoScore::B,
        )
        .unwrap();
        assert_eq!(ok.grade(0.5), EcoScore::APlus);
        assert_eq!(ok.grade(50.0), EcoScore::B);

        assert!(ScoreBands::new(vec![], EcoScore::F).is_err());
        assert!(ScoreBands::new(
            vec![ScoreBand::new(10.0, EcoScore::A), ScoreBand::new(5.0, EcoScore::B)],
            EcoScore::C
        )
        .is_err());
        assert!(ScoreBands::new(
            vec![ScoreBand::new(5.0, EcoScore::B), ScoreBand::new(10.0, EcoScore::A)],
            EcoScore::C
        )
        .is_err());
        assert!(ScoreBands::new(vec![ScoreBand::new(5.0, EcoScore::B)], EcoScore::A).is_err());
        assert!(ScoreBands::new(vec![ScoreBand::new(-1.0, EcoScore::A)], EcoScore::B).is_err());
    }

    #[test]
    fn bands_deserialize() {
        let json = r#"{"bands": [{"upper_kg": 5.0, "score": "A"}], "ceiling": "B"}"#;
        let bands: ScoreBands = serde_json::from_str(json).unwrap();
        assert_eq!(bands.grade(7.0), EcoScore::B);
    }
}

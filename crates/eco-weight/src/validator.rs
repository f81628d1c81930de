use crate::bounds::{GlobalBounds, WeightBounds, BUILTIN_BOUNDS, BULK_SIGNALS, TINY_SIGNALS};
use crate::error::Result;
use eco_types::KeywordTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of validating one candidate weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightValidation {
    pub weight_kg: f64,
    pub corrected: bool,
    pub reason: String,
    /// Product-type keyword whose bounds were applied, if any.
    pub matched_keyword: Option<String>,
}

/// Checks candidate weights against product-type bounds.
///
/// A missing or non-finite candidate is treated as infinitely heavy, so it
/// takes the clamp-to-maximum path and resolves to the upper bound of the
/// matched product type (or the heavy global default).
#[derive(Clone, Debug)]
pub struct WeightValidator {
    bounds: KeywordTable<WeightBounds>,
    global: GlobalBounds,
    bulk_signals: KeywordTable<()>,
    tiny_signals: KeywordTable<()>,
}

impl WeightValidator {
    /// Validator with no product-type bounds, only the global limits.
    pub fn new(global: GlobalBounds) -> Result<Self> {
        global.validate()?;
        Ok(Self {
            bounds: KeywordTable::new(),
            global,
            bulk_signals: KeywordTable::from_entries(BULK_SIGNALS.iter().map(|s| (*s, ())))?,
            tiny_signals: KeywordTable::from_entries(TINY_SIGNALS.iter().map(|s| (*s, ())))?,
        })
    }

    /// Validator loaded with the built-in product-type bounds.
    pub fn builtin(global: GlobalBounds) -> Result<Self> {
        let mut validator = Self::new(global)?;
        for (keyword, min, max) in BUILTIN_BOUNDS {
            validator.add_bounds(keyword, *min, *max)?;
        }
        Ok(validator)
    }

    /// Add or keep bounds for a product-type keyword.
    pub fn add_bounds(&mut self, keyword: &str, min_kg: f64, max_kg: f64) -> Result<()> {
        let bounds = WeightBounds::new(keyword, min_kg, max_kg)?;
        self.bounds.insert(keyword, bounds)?;
        Ok(())
    }

    pub fn with_bounds(mut self, keyword: &str, min_kg: f64, max_kg: f64) -> Result<Self> {
        self.add_bounds(keyword, min_kg, max_kg)?;
        Ok(self)
    }

    pub fn global(&self) -> &GlobalBounds {
        &self.global
    }

    /// Bounds for a product: longest keyword in the title, else in the category.
    pub fn bounds_for(&self, title: &str, category: &str) -> Option<(&str, WeightBounds)> {
        let category_text = category.replace('_', " ");
        self.bounds
            .longest_match(title)
            .or_else(|| self.bounds.longest_match(&category_text))
            .map(|m| (m.keyword, *m.value))
    }

    /// Validate `candidate_kg` for the product described by `title` / `category`.
    pub fn validate(&self, title: &str, candidate_kg: Option<f64>, category: &str) -> WeightValidation {
        let missing = !candidate_kg.is_some_and(f64::is_finite);
        let candidate = match candidate_kg {
            Some(w) if w.is_finite() => w,
            _ => f64::INFINITY,
        };

        let result = match self.bounds_for(title, category) {
            Some((keyword, bounds)) => Self::apply_bounds(keyword, bounds, candidate, missing),
            None => self.apply_global(title, candidate, missing),
        };

        if result.corrected {
            warn!(
                title,
                candidate = ?candidate_kg,
                corrected_kg = result.weight_kg,
                reason = %result.reason,
                "Weight corrected"
            );
        } else {
            debug!(title, weight_kg = result.weight_kg, "Weight accepted");
        }
        result
    }

    fn apply_bounds(keyword: &str, bounds: WeightBounds, candidate: f64, missing: bool) -> WeightValidation {
        let (weight_kg, corrected, reason) = if bounds.contains(candidate) {
            (
                candidate,
                false,
                format!(
                    "weight within bounds for '{keyword}' ({}-{} kg)",
                    bounds.min_kg, bounds.max_kg
                ),
            )
        } else if candidate < bounds.min_kg {
            (
                bounds.min_kg,
                true,
                format!(
                    "weight {candidate} kg below minimum {} kg for '{keyword}'; clamped",
                    bounds.min_kg
                ),
            )
        } else if missing {
            (
                bounds.max_kg,
                true,
                format!(
                    "weight missing; using upper bound {} kg for '{keyword}'",
                    bounds.max_kg
                ),
            )
        } else {
            (
                bounds.max_kg,
                true,
                format!(
                    "weight {candidate} kg above maximum {} kg for '{keyword}'; clamped",
                    bounds.max_kg
                ),
            )
        };

        WeightValidation {
            weight_kg,
            corrected,
            reason,
            matched_keyword: Some(keyword.to_string()),
        }
    }

    fn apply_global(&self, title: &str, candidate: f64, missing: bool) -> WeightValidation {
        let g = &self.global;
        let (weight_kg, corrected, reason) = if candidate > g.max_plausible_kg {
            let default = if self.bulk_signals.contains_any(title) {
                g.bulk_default_kg
            } else {
                g.standard_default_kg
            };
            let reason = if missing {
                format!("weight missing and no product type matched; using default {default} kg")
            } else {
                format!(
                    "weight {candidate} kg exceeds global maximum {} kg; using default {default} kg",
                    g.max_plausible_kg
                )
            };
            (default, true, reason)
        } else if candidate < g.min_plausible_kg {
            let default = if self.tiny_signals.contains_any(title) {
                g.tiny_default_kg
            } else {
                g.small_default_kg
            };
            (
                default,
                true,
                format!(
                    "weight {candidate} kg below global minimum {} kg; using default {default} kg",
                    g.min_plausible_kg
                ),
            )
        } else {
            (candidate, false, "weight within global bounds".to_string())
        };

        WeightValidation {
            weight_kg,
            corrected,
            reason,
            matched_keyword: None,
        }
    }
}

use crate::error::{Result, WeightError};
use serde::{Deserialize, Serialize};

/// Plausible weight range for one product type, in kg.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightBounds {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl WeightBounds {
    pub fn new(keyword: &str, min_kg: f64, max_kg: f64) -> Result<Self> {
        if !(min_kg.is_finite() && max_kg.is_finite()) || min_kg <= 0.0 || max_kg < min_kg {
            return Err(WeightError::InvalidBounds {
                keyword: keyword.to_string(),
                message: format!("expected 0 < min <= max, got [{min_kg}, {max_kg}]"),
            });
        }
        Ok(Self { min_kg, max_kg })
    }

    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_kg && weight_kg <= self.max_kg
    }
}

/// Coarse limits applied when no product-type keyword matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBounds {
    /// Anything heavier is treated as contaminated.
    pub max_plausible_kg: f64,
    /// Anything lighter is treated as contaminated.
    pub min_plausible_kg: f64,
    /// Replacement for over-heavy weights on bulky listings (sets, kits, furniture).
    pub bulk_default_kg: f64,
    /// Replacement for over-heavy weights otherwise.
    pub standard_default_kg: f64,
    /// Replacement for near-zero weights on tiny items (rings, stickers, cards).
    pub tiny_default_kg: f64,
    /// Replacement for near-zero weights otherwise.
    pub small_default_kg: f64,
}

impl Default for GlobalBounds {
    fn default() -> Self {
        Self {
            max_plausible_kg: 20.0,
            min_plausible_kg: 0.001,
            bulk_default_kg: 5.0,
            standard_default_kg: 2.0,
            tiny_default_kg: 0.01,
            small_default_kg: 0.05,
        }
    }
}

impl GlobalBounds {
    /// Replacement weights must themselves pass the global bounds, otherwise
    /// correcting a weight twice would change it again.
    pub fn validate(&self) -> Result<()> {
        let range = WeightBounds::new("global", self.min_plausible_kg, self.max_plausible_kg)?;
        for (name, value) in [
            ("bulk_default_kg", self.bulk_default_kg),
            ("standard_default_kg", self.standard_default_kg),
            ("tiny_default_kg", self.tiny_default_kg),
            ("small_default_kg", self.small_default_kg),
        ] {
            if !range.contains(value) {
                return Err(WeightError::InvalidBounds {
                    keyword: name.to_string(),
                    message: format!(
                        "{value} kg is outside the global range [{}, {}]",
                        range.min_kg, range.max_kg
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Per-product-type bounds, keyword → (min kg, max kg).
pub(crate) const BUILTIN_BOUNDS: &[(&str, f64, f64)] = &[
    // garden & tools
    ("pruning shears", 0.2, 0.8),
    ("secateurs", 0.2, 0.8),
    ("garden hose", 1.0, 8.0),
    ("lawn mower", 10.0, 45.0),
    ("shovel", 1.0, 3.5),
    ("hammer", 0.3, 1.5),
    ("screwdriver", 0.05, 0.4),
    ("drill", 0.8, 4.0),
    ("wrench", 0.1, 1.5),
    // electronics
    ("smartphone", 0.12, 0.3),
    ("iphone", 0.12, 0.3),
    ("phone case", 0.02, 0.15),
    ("phone", 0.1, 0.35),
    ("tablet", 0.3, 0.8),
    ("ipad", 0.3, 0.8),
    ("laptop", 0.9, 4.0),
    ("macbook", 0.9, 2.5),
    ("monitor", 2.0, 10.0),
    ("television", 5.0, 40.0),
    ("tv", 5.0, 40.0),
    ("headphones", 0.1, 0.5),
    ("earbuds", 0.03, 0.1),
    ("smartwatch", 0.03, 0.1),
    ("keyboard", 0.3, 1.5),
    ("mouse", 0.05, 0.2),
    ("charger", 0.05, 0.4),
    ("usb cable", 0.02, 0.1),
    ("power bank", 0.1, 0.6),
    ("camera", 0.3, 2.0),
    // books & media
    ("paperback", 0.1, 1.0),
    ("hardcover", 0.3, 2.0),
    ("book", 0.1, 2.0),
    ("notebook", 0.1, 0.6),
    // kitchen
    ("water bottle", 0.1, 0.6),
    ("coffee mug", 0.2, 0.6),
    ("mug", 0.2, 0.6),
    ("frying pan", 0.8, 3.0),
    ("saucepan", 0.7, 2.5),
    ("knife set", 1.0, 5.0),
    ("kitchen knife", 0.1, 0.4),
    ("cutting board", 0.3, 2.5),
    ("blender", 1.5, 6.0),
    ("kettle", 0.8, 2.0),
    ("toaster", 1.0, 3.5),
    ("microwave", 10.0, 20.0),
    // clothing
    ("t shirt", 0.1, 0.3),
    ("shirt", 0.15, 0.4),
    ("jeans", 0.4, 1.0),
    ("jacket", 0.4, 2.0),
    ("socks", 0.03, 0.15),
    ("sneakers", 0.5, 1.5),
    ("shoes", 0.5, 1.8),
    ("backpack", 0.3, 2.0),
    // furniture & home
    ("camping chair", 1.0, 5.0),
    ("office chair", 8.0, 25.0),
    ("chair", 2.0, 15.0),
    ("desk", 10.0, 60.0),
    ("sofa", 25.0, 120.0),
    ("mattress", 10.0, 50.0),
    ("lamp", 0.5, 5.0),
    ("pillow", 0.3, 1.5),
    ("blanket", 0.5, 3.0),
    ("candle", 0.1, 1.0),
    // toys, sport, personal
    ("lego", 0.1, 3.0),
    ("puzzle", 0.3, 1.5),
    ("yoga mat", 0.8, 2.5),
    ("dumbbell", 1.0, 25.0),
    ("bicycle", 8.0, 20.0),
    ("tent", 1.5, 10.0),
    ("toothbrush", 0.01, 0.2),
    ("shampoo", 0.2, 1.2),
    ("ring", 0.002, 0.05),
    ("necklace", 0.005, 0.1),
    ("wallet", 0.05, 0.3),
    ("sunglasses", 0.02, 0.1),
];

/// Title words suggesting a bulky listing.
pub(crate) const BULK_SIGNALS: &[&str] = &[
    "set", "kit", "bundle", "pack", "furniture", "cabinet", "bed", "table", "wardrobe",
];

/// Title words suggesting a tiny item.
pub(crate) const TINY_SIGNALS: &[&str] = &[
    "ring", "earring", "sticker", "card", "pin", "button", "seed", "stamp",
];

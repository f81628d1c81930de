//! Product category → manufacturing complexity factor.
//!
//! The factor expresses how much manufacturing adds on top of raw material
//! extraction: `1.0` means nothing, a smartphone's `12.0` means assembly,
//! chips and supply chain dwarf the raw aluminum and glass.
//!
//! Matching order: exact normalized category, then any key sharing a word
//! with the category, then the default (`2.0`, `very_low`).

use crate::error::{CatalogError, Result};
use crate::format;
use eco_types::{
    category_words, normalize_category, ComplexityConfidence, ComplexityRecord,
    DEFAULT_COMPLEXITY_FACTOR,
};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_COMPLEXITY: &[(&str, f64, ComplexityConfidence)] = &[
    ("smartphones", 12.0, ComplexityConfidence::High),
    ("mobile_phones", 12.0, ComplexityConfidence::High),
    ("tablets", 11.0, ComplexityConfidence::High),
    ("laptops", 10.0, ComplexityConfidence::High),
    ("computers", 9.0, ComplexityConfidence::Medium),
    ("electronics", 8.0, ComplexityConfidence::Medium),
    ("cameras", 7.5, ComplexityConfidence::Medium),
    ("headphones", 6.0, ComplexityConfidence::Medium),
    ("appliances", 4.0, ComplexityConfidence::Medium),
    ("automotive", 3.5, ComplexityConfidence::Low),
    ("jewelry", 3.0, ComplexityConfidence::Low),
    ("shoes", 3.0, ComplexityConfidence::Medium),
    ("clothing", 2.5, ComplexityConfidence::Medium),
    ("toys_&_games", 2.2, ComplexityConfidence::Medium),
    ("tools_&_home_improvement", 1.9, ComplexityConfidence::Medium),
    ("furniture", 1.8, ComplexityConfidence::Medium),
    ("sports_&_outdoors", 1.8, ComplexityConfidence::Low),
    ("baby", 1.8, ComplexityConfidence::Low),
    ("home_&_kitchen", 1.6, ComplexityConfidence::Medium),
    ("garden_&_outdoor", 1.5, ComplexityConfidence::Medium),
    ("health_&_personal_care", 1.5, ComplexityConfidence::Low),
    ("pet_supplies", 1.5, ComplexityConfidence::Low),
    ("beauty", 1.4, ComplexityConfidence::Low),
    ("office_products", 1.4, ComplexityConfidence::Low),
    ("grocery", 1.2, ComplexityConfidence::Low),
    ("books", 1.15, ComplexityConfidence::High),
];

/// Read-only complexity table keyed by normalized category.
#[derive(Clone, Debug)]
pub struct ComplexityTable {
    records: HashMap<String, ComplexityRecord>,
    default_factor: f64,
}

impl ComplexityTable {
    /// Build a table, rejecting duplicate categories and factors below 1.0.
    pub fn new(records: impl IntoIterator<Item = ComplexityRecord>) -> Result<Self> {
        let mut map = HashMap::new();
        for mut record in records {
            let key = normalize_category(&record.category);
            if key.is_empty() {
                return Err(CatalogError::InvalidRecord {
                    key: record.category,
                    message: "category is empty".into(),
                });
            }
            if !(record.complexity_factor.is_finite() && record.complexity_factor >= 1.0) {
                return Err(CatalogError::InvalidRecord {
                    key,
                    message: format!(
                        "complexity_factor must be >= 1.0, got {}",
                        record.complexity_factor
                    ),
                });
            }
            record.category = key.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(CatalogError::DuplicateKey(key));
            }
        }
        Ok(Self {
            records: map,
            default_factor: DEFAULT_COMPLEXITY_FACTOR,
        })
    }

    pub fn builtin() -> Self {
        let records = BUILTIN_COMPLEXITY
            .iter()
            .map(|(category, factor, confidence)| {
                (
                    category.to_string(),
                    ComplexityRecord::new(*category, *factor, *confidence),
                )
            })
            .collect();
        Self {
            records,
            default_factor: DEFAULT_COMPLEXITY_FACTOR,
        }
    }

    /// Override the factor returned for unmatched categories.
    pub fn with_default_factor(mut self, factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor >= 1.0) {
            return Err(CatalogError::InvalidRecord {
                key: "default".into(),
                message: format!("default complexity_factor must be >= 1.0, got {factor}"),
            });
        }
        self.default_factor = factor;
        Ok(self)
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::new(format::read_json::<ComplexityRecord>(input)?)
    }

    /// Parse CSV with columns `category,complexity_factor,confidence`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Self::new(format::read_csv::<ComplexityRecord, R>(reader)?)
    }

    /// Load from a `.json` or `.csv` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::new(format::read_path::<ComplexityRecord>(path)?)?;
        info!(path = %path.display(), categories = table.len(), "Complexity table loaded");
        Ok(table)
    }

    /// Resolve a category. Never fails.
    pub fn lookup(&self, category: &str) -> ComplexityRecord {
        let key = normalize_category(category);

        if let Some(record) = self.records.get(&key) {
            return record.clone();
        }

        if let Some(record) = self.partial_match(category) {
            debug!(
                category = %key,
                matched = %record.category,
                factor = record.complexity_factor,
                "Complexity factor from partial category match"
            );
            return record.clone();
        }

        debug!(category = %key, "No complexity entry, using default factor");
        ComplexityRecord::new(key, self.default_factor, ComplexityConfidence::VeryLow)
    }

    /// The entry sharing the most words with `category`; ties go to the
    /// longer key, then the lexically smaller one.
    fn partial_match(&self, category: &str) -> Option<&ComplexityRecord> {
        let wanted: Vec<String> = category_words(category).iter().map(|w| stem(w)).collect();
        if wanted.is_empty() {
            return None;
        }

        self.records
            .iter()
            .filter_map(|(key, record)| {
                let shared = category_words(key)
                    .iter()
                    .filter(|w| wanted.contains(&stem(w)))
                    .count();
                (shared > 0).then_some((shared, key, record))
            })
            .max_by(|a, b| {
                a.0.cmp(&b.0)
                    .then(a.1.len().cmp(&b.1.len()))
                    .then(b.1.cmp(a.1))
            })
            .map(|(_, _, record)| record)
    }

    pub fn default_factor(&self) -> f64 {
        self.default_factor
    }

    /// Normalized categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ComplexityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Crude plural folding so `"phone"` and `"phones"` compare equal.
fn stem(word: &str) -> String {
    word.strip_suffix('s')
        .filter(|w| w.len() > 2)
        .unwrap_or(word)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_after_normalization() {
        let table = ComplexityTable::builtin();
        let record = table.lookup("Garden & Outdoor");
        assert_eq!(record.category, "garden_&_outdoor");
        assert_eq!(record.complexity_factor, 1.5);
        assert_eq!(record.confidence, ComplexityConfidence::Medium);
    }

    #[test]
    fn unknown_category_degrades_to_default() {
        let table = ComplexityTable::builtin();
        let record = table.lookup("totally_unknown_xyz");
        assert_eq!(record.complexity_factor, 2.0);
        assert_eq!(record.confidence, ComplexityConfidence::VeryLow);
    }

    #[test]
    fn empty_category_degrades_to_default() {
        let record = ComplexityTable::builtin().lookup("");
        assert_eq!(record.complexity_factor, 2.0);
        assert_eq!(record.confidence, ComplexityConfidence::VeryLow);
    }

    #[test]
    fn partial_match_on_shared_word() {
        let table = ComplexityTable::builtin();
        let record = table.lookup("Cell Phones");
        assert_eq!(record.category, "mobile_phones");
        assert_eq!(record.complexity_factor, 12.0);

        let record = table.lookup("smartphone");
        assert_eq!(record.category, "smartphones");
    }

    #[test]
    fn partial_match_ignores_filler_words() {
        let table = ComplexityTable::new(vec![ComplexityRecord::new(
            "arts_&_crafts",
            1.3,
            ComplexityConfidence::Low,
        )])
        .unwrap();
        let record = table.lookup("food_&_drink");
        assert_eq!(record.confidence, ComplexityConfidence::VeryLow);
    }

    #[test]
    fn partial_match_prefers_most_shared_words() {
        let table = ComplexityTable::new(vec![
            ComplexityRecord::new("outdoor", 1.3, ComplexityConfidence::Low),
            ComplexityRecord::new("garden_outdoor_furniture", 1.9, ComplexityConfidence::Medium),
        ])
        .unwrap();
        let record = table.lookup("garden_outdoor_lighting");
        assert_eq!(record.category, "garden_outdoor_furniture");
    }

    #[test]
    fn factor_below_one_rejected() {
        let result = ComplexityTable::new(vec![ComplexityRecord::new(
            "magic",
            0.5,
            ComplexityConfidence::Low,
        )]);
        assert!(matches!(result, Err(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn duplicate_categories_rejected() {
        let result = ComplexityTable::new(vec![
            ComplexityRecord::new("Home & Kitchen", 1.6, ComplexityConfidence::Medium),
            ComplexityRecord::new("home_&_kitchen", 1.7, ComplexityConfidence::Medium),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateKey(_))));
    }

    #[test]
    fn custom_default_factor() {
        let table = ComplexityTable::builtin().with_default_factor(3.0).unwrap();
        assert_eq!(table.lookup("nothing like it").complexity_factor, 3.0);
        assert!(ComplexityTable::builtin().with_default_factor(0.9).is_err());
    }

    #[test]
    fn from_csv_and_json() {
        let csv = "category,complexity_factor,confidence\nDrones,9.5,medium\n";
        let table = ComplexityTable::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.lookup("drones").complexity_factor, 9.5);

        let json = r#"[{"category": "Board Games", "complexity_factor": 1.7, "confidence": "low"}]"#;
        let table = ComplexityTable::from_json_str(json).unwrap();
        assert_eq!(table.categories(), vec!["board_games"]);
    }

    #[test]
    fn stem_folds_plurals() {
        assert_eq!(stem("phones"), "phone");
        assert_eq!(stem("gas"), "gas");
        assert_eq!(stem("glass"), "glas");
    }
}

//! Material → CO2 intensity catalog.

use crate::error::{CatalogError, Result};
use crate::format;
use eco_types::{normalize_key, MaterialRecord, RecyclabilityClass, DEFAULT_CO2_PER_KG};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Built-in coefficients, kg CO2 per kg of material.
const BUILTIN_MATERIALS: &[(&str, f64, RecyclabilityClass)] = &[
    ("aluminum", 9.2, RecyclabilityClass::High),
    ("steel", 1.9, RecyclabilityClass::High),
    ("stainless steel", 6.15, RecyclabilityClass::High),
    ("copper", 3.8, RecyclabilityClass::High),
    ("plastic", 2.5, RecyclabilityClass::Low),
    ("polypropylene", 1.9, RecyclabilityClass::Medium),
    ("polyester", 5.5, RecyclabilityClass::Low),
    ("nylon", 7.3, RecyclabilityClass::Low),
    ("cotton", 5.9, RecyclabilityClass::Medium),
    ("organic cotton", 3.8, RecyclabilityClass::Medium),
    ("wool", 10.4, RecyclabilityClass::Medium),
    ("leather", 17.0, RecyclabilityClass::Low),
    ("glass", 0.85, RecyclabilityClass::High),
    ("paper", 1.1, RecyclabilityClass::High),
    ("cardboard", 0.9, RecyclabilityClass::High),
    ("wood", 0.45, RecyclabilityClass::Medium),
    ("bamboo", 0.35, RecyclabilityClass::Medium),
    ("rubber", 2.85, RecyclabilityClass::Low),
    ("silicone", 3.0, RecyclabilityClass::Low),
    ("ceramic", 1.7, RecyclabilityClass::Low),
    ("foam", 3.5, RecyclabilityClass::Low),
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("aluminium", "aluminum"),
    ("stainless", "stainless steel"),
    ("metal", "steel"),
    ("iron", "steel"),
    ("abs", "plastic"),
    ("polycarbonate", "plastic"),
    ("pp", "polypropylene"),
    ("fabric", "cotton"),
    ("timber", "wood"),
    ("paperboard", "cardboard"),
    ("porcelain", "ceramic"),
];

/// Read-only material catalog with case-insensitive keys.
///
/// Unknown names resolve to a default record rather than an error.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    records: HashMap<String, MaterialRecord>,
    aliases: HashMap<String, String>,
    default_record: MaterialRecord,
}

impl MaterialCatalog {
    /// Build a catalog from records, rejecting duplicate or invalid rows.
    pub fn new(records: impl IntoIterator<Item = MaterialRecord>) -> Result<Self> {
        let mut map = HashMap::new();
        for mut record in records {
            let key = normalize_key(&record.name);
            if key.is_empty() {
                return Err(CatalogError::InvalidRecord {
                    key: record.name,
                    message: "material name is empty".into(),
                });
            }
            if !(record.co2_per_kg.is_finite() && record.co2_per_kg > 0.0) {
                return Err(CatalogError::InvalidRecord {
                    key,
                    message: format!("co2_per_kg must be positive, got {}", record.co2_per_kg),
                });
            }
            record.name = key.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(CatalogError::DuplicateKey(key));
            }
        }

        Ok(Self {
            records: map,
            aliases: HashMap::new(),
            default_record: MaterialRecord::new("unknown", DEFAULT_CO2_PER_KG, RecyclabilityClass::Medium),
        })
    }

    /// The built-in catalog with common aliases.
    pub fn builtin() -> Self {
        let records = BUILTIN_MATERIALS
            .iter()
            .map(|(name, co2, class)| (name.to_string(), MaterialRecord::new(*name, *co2, *class)))
            .collect();
        Self {
            records,
            aliases: HashMap::new(),
            default_record: MaterialRecord::new("unknown", DEFAULT_CO2_PER_KG, RecyclabilityClass::Medium),
        }
        .with_builtin_aliases()
    }

    /// Attach the built-in aliases whose targets exist in this catalog.
    pub fn with_builtin_aliases(mut self) -> Self {
        for (alias, canonical) in BUILTIN_ALIASES {
            if self.records.contains_key(*canonical) {
                self.aliases
                    .entry(alias.to_string())
                    .or_insert_with(|| canonical.to_string());
            }
        }
        self
    }

    /// Override the coefficient used for unknown materials.
    pub fn with_default_coefficient(mut self, co2_per_kg: f64) -> Result<Self> {
        if !(co2_per_kg.is_finite() && co2_per_kg > 0.0) {
            return Err(CatalogError::InvalidRecord {
                key: "default".into(),
                message: format!("default co2_per_kg must be positive, got {co2_per_kg}"),
            });
        }
        self.default_record.co2_per_kg = co2_per_kg;
        Ok(self)
    }

    /// Register an alternative spelling for an existing material.
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Result<Self> {
        let canonical = normalize_key(canonical);
        if !self.records.contains_key(&canonical) {
            return Err(CatalogError::InvalidRecord {
                key: alias.to_string(),
                message: format!("alias target '{canonical}' is not in the catalog"),
            });
        }
        self.aliases.insert(normalize_key(alias), canonical);
        Ok(self)
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(Self::new(format::read_json::<MaterialRecord>(input)?)?.with_builtin_aliases())
    }

    /// Parse CSV with columns `name,co2_per_kg,recyclability_class`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(format::read_csv::<MaterialRecord, R>(reader)?)?.with_builtin_aliases())
    }

    /// Load from a `.json` or `.csv` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::new(format::read_path::<MaterialRecord>(path)?)?.with_builtin_aliases();
        info!(path = %path.display(), materials = catalog.len(), "Material catalog loaded");
        Ok(catalog)
    }

    /// Exact lookup (after normalization and alias resolution).
    pub fn get(&self, name: &str) -> Option<&MaterialRecord> {
        let key = normalize_key(name);
        self.records.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|canonical| self.records.get(canonical))
        })
    }

    /// Lookup that never fails: unknown names yield the default record.
    pub fn lookup(&self, name: &str) -> &MaterialRecord {
        match self.get(name) {
            Some(record) => record,
            None => {
                debug!(material = name, "Unknown material, using default coefficient");
                &self.default_record
            }
        }
    }

    /// CO2 coefficient for `name`, defaulted when unknown.
    pub fn coefficient(&self, name: &str) -> f64 {
        self.lookup(name).co2_per_kg
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn default_record(&self) -> &MaterialRecord {
        &self.default_record
    }

    /// Canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Stable index of a material among the sorted canonical names.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let record = self.get(name)?;
        self.names().iter().position(|n| *n == record.name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

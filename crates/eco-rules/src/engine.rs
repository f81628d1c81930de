use crate::product::{builtin_table, ProductClass};
use crate::rule::{PlausibilityInput, PlausibilityRule, RuleViolation};
use eco_types::{normalize_key, KeywordTable};
use tracing::warn;

const HEAVY_METALS: &[&str] = &["steel", "aluminum", "aluminium", "iron", "metal"];
const SOFT_MATERIALS: &[&str] = &["paper", "cardboard", "wood", "cotton", "fabric"];
const HARD_MATERIALS: &[&str] = &["steel", "aluminum", "aluminium", "iron", "metal", "glass"];

/// Upper weight for anything shipped as a single consumer product.
pub const EXTREME_WEIGHT_KG: f64 = 100.0;

/// Evaluates every plausibility rule against a finished estimate.
///
/// Rules are scoped to a [`ProductClass`] inferred once per check from the
/// title. Violations are logged at `warn` and returned; nothing is corrected.
#[derive(Debug)]
pub struct ValidationRuleEngine {
    products: KeywordTable<ProductClass>,
    rules: Vec<PlausibilityRule>,
}

impl ValidationRuleEngine {
    /// Engine with no rules, using the built-in product families.
    pub fn new() -> eco_types::Result<Self> {
        Ok(Self {
            products: builtin_table()?,
            rules: Vec::new(),
        })
    }

    /// Engine with the built-in rule set.
    pub fn builtin() -> eco_types::Result<Self> {
        let mut engine = Self::new()?;
        for rule in builtin_rules() {
            engine.add_rule(rule);
        }
        Ok(engine)
    }

    pub fn add_rule(&mut self, rule: PlausibilityRule) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: PlausibilityRule) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rules(&self) -> &[PlausibilityRule] {
        &self.rules
    }

    /// Product family of a title, if any built-in keyword matches.
    pub fn classify(&self, title: &str) -> Option<ProductClass> {
        self.products.longest_match(title).map(|m| *m.value)
    }

    /// All violations for the triple, in rule order.
    pub fn evaluate(&self, title: &str, weight_kg: f64, material: &str) -> Vec<RuleViolation> {
        let input = PlausibilityInput {
            title,
            weight_kg,
            material: normalize_key(material),
            product: self.classify(title),
        };

        let violations: Vec<RuleViolation> =
            self.rules.iter().filter_map(|rule| rule.evaluate(&input)).collect();

        for v in &violations {
            warn!(
                rule = %v.rule_id,
                title,
                weight_kg,
                material = %input.material,
                "Plausibility violation: {}",
                v.message
            );
        }
        violations
    }

    /// Violation messages for the triple; empty when everything is plausible.
    pub fn check(&self, title: &str, weight_kg: f64, material: &str) -> Vec<String> {
        self.evaluate(title, weight_kg, material)
            .into_iter()
            .map(|v| v.message)
            .collect()
    }
}

fn builtin_rules() -> Vec<PlausibilityRule> {
    vec![
        PlausibilityRule::new(
            "book_metal",
            "Books are not made of structural metals",
            |i| i.is(ProductClass::Book) && i.material_in(HEAVY_METALS),
            |i| format!("Book listed as {}; books are made of paper", i.material),
        ),
        PlausibilityRule::new(
            "book_weight",
            "Books weigh under 5 kg",
            |i| i.is(ProductClass::Book) && i.weight_kg > 5.0,
            |i| format!("Book weighing {:.2} kg is implausible (expected under 5 kg)", i.weight_kg),
        ),
        PlausibilityRule::new(
            "phone_weight",
            "Phones weigh under 1 kg",
            |i| i.is(ProductClass::Phone) && i.weight_kg > 1.0,
            |i| format!("Phone weighing {:.2} kg is implausible (expected under 1 kg)", i.weight_kg),
        ),
        PlausibilityRule::new(
            "phone_material",
            "Phones are not made of paper, wood or textiles",
            |i| i.is(ProductClass::Phone) && i.material_in(SOFT_MATERIALS),
            |i| format!("Phone listed as {}; phones are made of metal, glass or plastic", i.material),
        ),
        PlausibilityRule::new(
            "laptop_weight",
            "Laptops weigh between 0.5 and 5 kg",
            |i| i.is(ProductClass::Laptop) && (i.weight_kg < 0.5 || i.weight_kg > 5.0),
            |i| format!("Laptop weighing {:.2} kg is outside 0.5-5 kg", i.weight_kg),
        ),
        PlausibilityRule::new(
            "accessory_weight",
            "Small accessories weigh under 2 kg",
            |i| i.is(ProductClass::SmallAccessory) && i.weight_kg > 2.0,
            |i| format!("Accessory weighing {:.2} kg is implausible (expected under 2 kg)", i.weight_kg),
        ),
        PlausibilityRule::new(
            "clothing_material",
            "Clothing is not made of metal or glass",
            |i| i.is(ProductClass::Clothing) && i.material_in(HARD_MATERIALS),
            |i| format!("Clothing listed as {}; expected a textile", i.material),
        ),
        PlausibilityRule::new(
            "clothing_weight",
            "Single garments weigh under 5 kg",
            |i| i.is(ProductClass::Clothing) && i.weight_kg > 5.0,
            |i| format!("Garment weighing {:.2} kg is implausible (expected under 5 kg)", i.weight_kg),
        ),
        PlausibilityRule::new(
            "furniture_weight",
            "Furniture weighs at least 1 kg",
            |i| i.is(ProductClass::Furniture) && i.weight_kg < 1.0,
            |i| format!("Furniture weighing {:.2} kg is implausibly light", i.weight_kg),
        ),
        PlausibilityRule::new(
            "extreme_weight",
            "Nothing shipped as one product weighs over 100 kg",
            |i| i.weight_kg > EXTREME_WEIGHT_KG,
            |i| format!("Weight {:.1} kg exceeds {EXTREME_WEIGHT_KG} kg", i.weight_kg),
        ),
    ]
}

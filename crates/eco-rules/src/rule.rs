use crate::product::ProductClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a rule sees: the title, validated weight, normalized material and
/// the product family inferred from the title.
#[derive(Clone, Debug)]
pub struct PlausibilityInput<'a> {
    pub title: &'a str,
    pub weight_kg: f64,
    /// Lowercase, whitespace-collapsed material name.
    pub material: String,
    pub product: Option<ProductClass>,
}

impl PlausibilityInput<'_> {
    pub fn is(&self, class: ProductClass) -> bool {
        self.product == Some(class)
    }

    /// True if any word of the material is in `group`.
    pub fn material_in(&self, group: &[&str]) -> bool {
        self.material
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| group.contains(&word))
    }
}

type Predicate = Box<dyn Fn(&PlausibilityInput<'_>) -> bool + Send + Sync>;
type Message = Box<dyn Fn(&PlausibilityInput<'_>) -> String + Send + Sync>;

/// A named predicate and the message it reports when it holds.
pub struct PlausibilityRule {
    id: String,
    description: String,
    predicate: Predicate,
    message: Message,
}

impl PlausibilityRule {
    pub fn new<P, M>(id: impl Into<String>, description: impl Into<String>, predicate: P, message: M) -> Self
    where
        P: Fn(&PlausibilityInput<'_>) -> bool + Send + Sync + 'static,
        M: Fn(&PlausibilityInput<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            description: description.into(),
            predicate: Box::new(predicate),
            message: Box::new(message),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The violation this rule reports for `input`, if it fires.
    pub fn evaluate(&self, input: &PlausibilityInput<'_>) -> Option<RuleViolation> {
        (self.predicate)(input).then(|| RuleViolation {
            rule_id: self.id.clone(),
            message: (self.message)(input),
        })
    }
}

impl fmt::Debug for PlausibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlausibilityRule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A rule that fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule_id: String,
    pub message: String,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule_id, self.message)
    }
}

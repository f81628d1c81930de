use eco_types::{ProductSignal, StructuredMaterial};

/// Material values that carry no information.
const GENERIC_MATERIALS: &[&str] = &["", "mixed", "other", "unknown", "n/a", "na", "none", "various"];

/// Evidence available for resolving a product's materials.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialRequest<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: &'a str,
    pub brand: Option<&'a str>,
    pub scraped_material: Option<&'a str>,
    pub structured: &'a [StructuredMaterial],
}

impl<'a> MaterialRequest<'a> {
    pub fn new(title: &'a str, category: &'a str) -> Self {
        Self {
            title,
            category,
            ..Self::default()
        }
    }

    pub fn from_signal(signal: &'a ProductSignal, structured: &'a [StructuredMaterial]) -> Self {
        Self {
            title: &signal.title,
            description: signal.description.as_deref(),
            category: &signal.category,
            brand: signal.brand.as_deref(),
            scraped_material: signal.scraped_material.as_deref(),
            structured,
        }
    }

    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_brand(mut self, brand: &'a str) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn with_scraped_material(mut self, material: &'a str) -> Self {
        self.scraped_material = Some(material);
        self
    }

    pub fn with_structured(mut self, structured: &'a [StructuredMaterial]) -> Self {
        self.structured = structured;
        self
    }

    /// The scraped material, unless it is a placeholder such as "Mixed".
    pub fn specific_scraped_material(&self) -> Option<&'a str> {
        self.scraped_material
            .filter(|m| !GENERIC_MATERIALS.contains(&m.trim().to_lowercase().as_str()))
    }

    /// Title and description as one searchable text.
    pub fn listing_text(&self) -> String {
        match self.description {
            Some(d) if !d.trim().is_empty() => format!("{} {}", self.title, d),
            _ => self.title.to_string(),
        }
    }

    /// Category with separators turned into spaces, for keyword scans.
    pub fn category_text(&self) -> String {
        self.category.replace(['_', '-', '/'], " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_scraped_material_ignored() {
        let req = MaterialRequest::new("Tote Bag", "bags").with_scraped_material(" Mixed ");
        assert!(req.specific_scraped_material().is_none());

        let req = MaterialRequest::new("Tote Bag", "bags").with_scraped_material("Canvas");
        assert_eq!(req.specific_scraped_material(), Some("Canvas"));
    }

    #[test]
    fn listing_text_joins_description() {
        let req = MaterialRequest::new("Tote Bag", "bags").with_description("made of jute");
        assert_eq!(req.listing_text(), "Tote Bag made of jute");
        assert_eq!(MaterialRequest::new("Tote Bag", "").listing_text(), "Tote Bag");
    }

    #[test]
    fn from_signal_borrows_fields() {
        let signal = ProductSignal::new("Paperback Book", "books")
            .unwrap()
            .with_material("Paper")
            .with_brand("Penguin");
        let structured = vec![StructuredMaterial::new("paper")];
        let req = MaterialRequest::from_signal(&signal, &structured);
        assert_eq!(req.title, "Paperback Book");
        assert_eq!(req.brand, Some("Penguin"));
        assert_eq!(req.structured.len(), 1);
        assert_eq!(req.category_text(), "books");
    }
}

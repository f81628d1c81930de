//! Weighted CO2 intensity of a material mix.

use eco_catalog::MaterialCatalog;

/// Share of the product attributed to the primary material when the
/// evidence gives no fractions.
pub const PRIMARY_SHARE: f64 = 0.7;

/// Fraction-weighted mean coefficient. Weights need not sum to one;
/// non-finite and non-positive weights are ignored.
pub fn weighted_impact(catalog: &MaterialCatalog, shares: &[(&str, f64)]) -> f64 {
    let usable = || shares.iter().filter(|(_, w)| w.is_finite() && *w > 0.0);

    // scaled by the largest weight so the sum cannot overflow
    let max = usable().map(|(_, w)| *w).fold(0.0, f64::max);
    if max <= 0.0 {
        return catalog.default_record().co2_per_kg;
    }
    let total: f64 = usable().map(|(_, w)| w / max).sum();
    usable()
        .map(|(name, w)| catalog.coefficient(name) * (w / max))
        .sum::<f64>()
        / total
}

/// Impact assuming the primary material is 70 % of the product and the
/// secondaries share the remaining 30 % equally. A lone primary counts 100 %.
pub fn split_impact(catalog: &MaterialCatalog, primary: &str, secondary: &[&str]) -> f64 {
    if secondary.is_empty() {
        return catalog.coefficient(primary);
    }
    let each = (1.0 - PRIMARY_SHARE) / secondary.len() as f64;
    let mut shares = vec![(primary, PRIMARY_SHARE)];
    shares.extend(secondary.iter().map(|name| (*name, each)));
    weighted_impact(catalog, &shares)
}

/// Canonical catalog name for `name`, or its normalized form when unknown.
pub fn canonical_name(catalog: &MaterialCatalog, name: &str) -> String {
    catalog
        .get(name)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| eco_types::normalize_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_normalizes_by_total() {
        let catalog = MaterialCatalog::builtin();
        // 60 % cotton (5.9) + 40 % polyester (5.5)
        let impact = weighted_impact(&catalog, &[("cotton", 0.6), ("polyester", 0.4)]);
        assert!((impact - 5.74).abs() < 1e-9);

        // same mix expressed on a different scale
        let scaled = weighted_impact(&catalog, &[("cotton", 60.0), ("polyester", 40.0)]);
        assert!((impact - scaled).abs() < 1e-9);
    }

    #[test]
    fn huge_weights_stay_finite() {
        let catalog = MaterialCatalog::builtin();
        let impact = weighted_impact(&catalog, &[("aluminum", 1e308), ("glass", 1e308)]);
        assert!(impact.is_finite());
        assert!((impact - (9.2 + 0.85) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn unusable_weights_ignored() {
        let catalog = MaterialCatalog::builtin();
        let impact = weighted_impact(&catalog, &[("paper", 1.0), ("steel", f64::NAN), ("glass", -1.0)]);
        assert_eq!(impact, 1.1);
        assert_eq!(weighted_impact(&catalog, &[("paper", 0.0)]), 2.0);
    }

    #[test]
    fn empty_mix_uses_default() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(weighted_impact(&catalog, &[]), 2.0);
    }

    #[test]
    fn split_seventy_thirty() {
        let catalog = MaterialCatalog::builtin();
        // 0.7 * 9.2 + 0.15 * 0.85 + 0.15 * 2.5
        let impact = split_impact(&catalog, "aluminum", &["glass", "plastic"]);
        assert!((impact - (6.44 + 0.1275 + 0.375)).abs() < 1e-9);
        assert_eq!(split_impact(&catalog, "paper", &[]), 1.1);
    }

    #[test]
    fn canonical_names() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(canonical_name(&catalog, "Aluminium"), "aluminum");
        assert_eq!(canonical_name(&catalog, "  Jute "), "jute");
    }
}

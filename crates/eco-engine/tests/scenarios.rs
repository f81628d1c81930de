//! End-to-end behavior on representative listings.

use eco_engine::{
    BandClassifier, EcoPipeline, EcoScore, MaterialRequest, ProductSignal, ResolutionTier,
    StructuredMaterial, TransportMode,
};

fn pipeline() -> EcoPipeline {
    EcoPipeline::builtin().unwrap()
}

#[test]
fn implausible_scraped_weight_is_clamped() {
    let pipeline = pipeline();
    let result = pipeline.validate_weight("Pruning shears", Some(37.87), "Garden & Outdoor");

    assert!(result.corrected);
    assert!(result.weight_kg <= 0.8);
    assert!(result.weight_kg >= 0.2);
    assert!(!result.reason.is_empty());
}

#[test]
fn paperback_resolves_to_paper() {
    let pipeline = pipeline();
    let res = pipeline.resolve_materials(&MaterialRequest::new("Paperback book", "Books"));

    assert_eq!(res.primary_material, "paper");
    assert!(matches!(
        res.tier,
        ResolutionTier::KeywordMatch | ResolutionTier::CategoryPrediction
    ));
    assert!(res.confidence >= 0.7);
}

#[test]
fn complexity_separates_phones_from_books() {
    let pipeline = pipeline();
    let air = pipeline.transport().multiplier(TransportMode::Air);

    let phone = pipeline.estimate_emissions(0.22, 9.2, air, "smartphones").unwrap();
    let book = pipeline.estimate_emissions(0.22, 9.2, air, "books").unwrap();

    assert!(phone.co2_kg > 5.0 * book.co2_kg);
    assert!((phone.breakdown.total() - phone.co2_kg).abs() < 1e-6);
    assert!((book.breakdown.total() - book.co2_kg).abs() < 1e-6);
}

#[test]
fn impossible_phone_is_flagged() {
    let violations = pipeline().check_plausibility("iPhone 15", 2.5, "Paper");
    assert!(violations.len() >= 2);
    assert!(violations.iter().any(|v| v.contains("kg")));
    assert!(violations.iter().any(|v| v.to_lowercase().contains("paper")));
}

#[test]
fn paper_phone_analysis_keeps_going_with_warnings() {
    let signal = ProductSignal::new("iPhone 15", "Smartphones")
        .unwrap()
        .with_weight(2.5)
        .with_material("Paper")
        .with_transport(TransportMode::Air);

    let analysis = pipeline().analyze(&signal, &[]).unwrap();

    assert!(analysis.weight.corrected);
    assert!(analysis.weight.weight_kg <= 0.3);
    assert_eq!(analysis.materials.primary_material, "paper");
    assert!(!analysis.violations.is_empty());
    assert!(analysis.emissions.co2_kg > 0.0);
}

#[test]
fn structured_percentages_take_precedence() {
    let signal = ProductSignal::new("Leather Sneakers", "Shoes")
        .unwrap()
        .with_weight(0.9)
        .with_material("Leather");
    let structured = vec![
        StructuredMaterial::new("rubber").with_fraction(0.6),
        StructuredMaterial::new("leather").with_fraction(0.4),
    ];

    let analysis = pipeline().analyze(&signal, &structured).unwrap();

    assert_eq!(analysis.materials.tier, ResolutionTier::DetailedWithPercentages);
    assert_eq!(analysis.materials.primary_material, "rubber");
    let pct = analysis.materials.primary_percentage.unwrap();
    assert!((pct - 60.0).abs() < 1e-9);
}

#[test]
fn oversized_fractions_fall_back_to_ranked_materials() {
    let signal = ProductSignal::new("Aluminum Phone Stand", "Electronics")
        .unwrap()
        .with_weight(0.3);
    let structured = vec![
        StructuredMaterial::new("aluminum").with_fraction(1e308),
        StructuredMaterial::new("glass").with_fraction(1e308),
    ];

    let analysis = pipeline().analyze(&signal, &structured).unwrap();

    assert_eq!(analysis.materials.tier, ResolutionTier::DetailedWithoutPercentages);
    assert!(analysis.materials.primary_percentage.is_none());
    assert!(analysis.materials.environmental_impact_score.is_finite());
    assert!(analysis.emissions.co2_kg.is_finite());
}

#[test]
fn percentages_never_exceed_one_hundred() {
    let signal = ProductSignal::new("Cotton Tee", "Clothing").unwrap();
    let structured = vec![
        StructuredMaterial::new("cotton").with_fraction(100.0),
        StructuredMaterial::new("polyester").with_fraction(150.0),
    ];

    let analysis = pipeline().analyze(&signal, &structured).unwrap();

    assert_eq!(analysis.materials.primary_material, "cotton");
    assert_eq!(analysis.materials.primary_percentage, Some(100.0));
    assert!(analysis
        .materials
        .secondary_materials
        .iter()
        .all(|s| s.percentage.map_or(true, |p| (0.0..=100.0).contains(&p))));
}

#[test]
fn unknown_everything_still_produces_an_estimate() {
    let signal = ProductSignal::new("Zorblax Unit", "Interdimensional Widgets").unwrap();

    let analysis = pipeline().analyze(&signal, &[]).unwrap();

    assert_eq!(analysis.materials.tier, ResolutionTier::Fallback);
    assert_eq!(analysis.materials.confidence, 0.1);
    assert_eq!(analysis.emissions.complexity.complexity_factor, 2.0);
    assert!(analysis.emissions.co2_kg > 0.0);
    assert!(analysis.weight.reason.contains("missing"));
}

#[test]
fn air_freight_never_scores_better_than_ship() {
    let pipeline = EcoPipeline::builder()
        .with_classifier(BandClassifier::default())
        .build()
        .unwrap();
    let base = ProductSignal::new("Ceramic Coffee Mug", "Home & Kitchen")
        .unwrap()
        .with_weight(0.4);

    let ship = pipeline
        .analyze(&base.clone().with_transport(TransportMode::Ship), &[])
        .unwrap();
    let air = pipeline
        .analyze(&base.with_transport(TransportMode::Air), &[])
        .unwrap();

    assert!(air.emissions.co2_kg > ship.emissions.co2_kg);
    assert!(air.emissions.eco_score >= ship.emissions.eco_score);
    assert_eq!(ship.emissions.eco_score, EcoScore::A);
}

#[test]
fn empty_title_is_rejected() {
    let signal = ProductSignal {
        title: "   ".to_string(),
        ..ProductSignal::new("placeholder", "").unwrap()
    };
    assert!(pipeline().analyze(&signal, &[]).is_err());
}

//! Full product analysis command

use crate::error::{CliError, CliResult};
use crate::output::{print_output, print_warning, OutputFormat};
use clap::Args;
use eco_engine::{EcoPipeline, ProductAnalysis, ProductSignal, StructuredMaterial, TransportMode};
use serde::Deserialize;
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file with one product or an array of products
    #[arg(short, long, conflicts_with = "title")]
    input: Option<PathBuf>,

    /// Product title
    #[arg(short, long)]
    title: Option<String>,

    /// Product category
    #[arg(short, long, default_value = "")]
    category: String,

    /// Scraped weight in kg
    #[arg(short, long)]
    weight: Option<f64>,

    /// Scraped material field
    #[arg(short, long)]
    material: Option<String>,

    /// Transport mode (air, ship, land)
    #[arg(long, default_value = "ship")]
    transport: TransportMode,

    /// Country of origin
    #[arg(long)]
    origin: Option<String>,

    /// JSON file with structured materials
    #[arg(short, long)]
    structured: Option<PathBuf>,
}

/// One product in an input file: the signal fields plus optional
/// structured materials.
#[derive(Deserialize)]
struct ProductInput {
    #[serde(flatten)]
    signal: ProductSignal,
    #[serde(default)]
    structured: Vec<StructuredMaterial>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Many(Vec<ProductInput>),
    One(Box<ProductInput>),
}

#[derive(Tabled)]
struct AnalysisRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Weight (kg)")]
    weight_kg: String,
    #[tabled(rename = "Material")]
    material: String,
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "CO2 (kg)")]
    co2_kg: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
    #[tabled(rename = "Warnings")]
    warnings: usize,
}

impl From<&ProductAnalysis> for AnalysisRow {
    fn from(a: &ProductAnalysis) -> Self {
        let weight_kg = if a.weight.corrected {
            format!("{:.3}*", a.weight.weight_kg)
        } else {
            format!("{:.3}", a.weight.weight_kg)
        };
        Self {
            title: a.title.clone(),
            weight_kg,
            material: a.materials.primary_material.clone(),
            tier: a.materials.tier.number(),
            co2_kg: format!("{:.2}", a.emissions.co2_kg),
            score: a.emissions.eco_score.to_string(),
            predicted: a
                .prediction
                .as_ref()
                .map(|p| format!("{} ({:.2})", p.eco_score, p.confidence))
                .unwrap_or_else(|| "-".to_string()),
            warnings: a.violations.len(),
        }
    }
}

pub fn execute(args: AnalyzeArgs, pipeline: &EcoPipeline, format: OutputFormat) -> CliResult<()> {
    let products = load_products(args)?;

    let analyses = products
        .iter()
        .map(|p| pipeline.analyze(&p.signal, &p.structured))
        .collect::<Result<Vec<_>, _>>()?;

    print_output(&analyses, format, |a| AnalysisRow::from(a))?;

    if matches!(format, OutputFormat::Table) {
        for analysis in &analyses {
            for violation in &analysis.violations {
                print_warning(&format!("{}: {}", analysis.title, violation));
            }
        }
    }
    Ok(())
}

fn load_products(args: AnalyzeArgs) -> CliResult<Vec<ProductInput>> {
    if let Some(path) = args.input {
        let contents = std::fs::read_to_string(&path)?;
        return Ok(match serde_json::from_str::<InputFile>(&contents)? {
            InputFile::Many(products) => products,
            InputFile::One(product) => vec![*product],
        });
    }

    let title = args
        .title
        .ok_or_else(|| CliError::InvalidArgument("either --input or --title is required".into()))?;

    let mut signal = ProductSignal::new(title, args.category)?.with_transport(args.transport);
    signal.scraped_weight_kg = args.weight;
    signal.scraped_material = args.material;
    signal.origin = args.origin;

    Ok(vec![ProductInput {
        signal,
        structured: super::read_structured(args.structured.as_deref())?,
    }])
}

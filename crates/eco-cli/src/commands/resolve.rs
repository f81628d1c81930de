//! Material resolution command

use crate::error::CliResult;
use crate::output::{opt_number, print_output, OutputFormat};
use clap::Args;
use eco_engine::{EcoPipeline, MaterialRequest, MaterialResolution};
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args)]
pub struct ResolveArgs {
    /// Product title
    #[arg(short, long)]
    title: String,

    /// Product category
    #[arg(short, long, default_value = "")]
    category: String,

    /// Listing description
    #[arg(short, long)]
    description: Option<String>,

    /// Scraped material field
    #[arg(short, long)]
    material: Option<String>,

    /// JSON file with structured materials (`[{"name": .., "fraction": ..}]`)
    #[arg(short, long)]
    structured: Option<PathBuf>,
}

#[derive(Tabled)]
pub(crate) struct MaterialRow {
    #[tabled(rename = "Primary")]
    primary: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Secondary")]
    secondary: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "CO2/kg")]
    impact: String,
    #[tabled(rename = "Method")]
    method: String,
}

impl From<&MaterialResolution> for MaterialRow {
    fn from(r: &MaterialResolution) -> Self {
        Self {
            primary: r.primary_material.clone(),
            percentage: opt_number(r.primary_percentage),
            secondary: r
                .secondary_materials
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            confidence: format!("{:.2}", r.confidence),
            tier: r.tier.number(),
            impact: format!("{:.2}", r.environmental_impact_score),
            method: r.prediction_method.clone().unwrap_or_default(),
        }
    }
}

pub fn execute(args: ResolveArgs, pipeline: &EcoPipeline, format: OutputFormat) -> CliResult<()> {
    let structured = super::read_structured(args.structured.as_deref())?;

    let mut request = MaterialRequest::new(&args.title, &args.category).with_structured(&structured);
    if let Some(description) = args.description.as_deref() {
        request = request.with_description(description);
    }
    if let Some(material) = args.material.as_deref() {
        request = request.with_scraped_material(material);
    }

    let resolution = pipeline.resolve_materials(&request);
    print_output(&[resolution], format, |r| MaterialRow::from(r))
}

//! Emission estimate command

use crate::error::{CliError, CliResult};
use crate::output::{print_output, OutputFormat};
use clap::Args;
use eco_engine::{EcoPipeline, EmissionEstimate, TransportMode};
use tabled::Tabled;

#[derive(Args)]
pub struct EstimateArgs {
    /// Product weight in kg
    #[arg(short, long)]
    weight: f64,

    /// Material CO2 coefficient (kg CO2 per kg)
    #[arg(long, conflicts_with = "material")]
    coefficient: Option<f64>,

    /// Material name, looked up in the catalog
    #[arg(short, long)]
    material: Option<String>,

    /// Transport mode (air, ship, land)
    #[arg(short, long, default_value = "ship")]
    transport: TransportMode,

    /// Product category
    #[arg(short, long, default_value = "")]
    category: String,
}

#[derive(Tabled)]
pub(crate) struct EstimateRow {
    #[tabled(rename = "Weight (kg)")]
    weight_kg: String,
    #[tabled(rename = "CO2 (kg)")]
    co2_kg: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Materials")]
    materials: String,
    #[tabled(rename = "Manufacturing")]
    manufacturing: String,
    #[tabled(rename = "Transport")]
    transport: String,
    #[tabled(rename = "Complexity")]
    complexity: String,
}

impl From<&EmissionEstimate> for EstimateRow {
    fn from(e: &EmissionEstimate) -> Self {
        Self {
            weight_kg: format!("{:.3}", e.weight_kg),
            co2_kg: format!("{:.2}", e.co2_kg),
            score: e.eco_score.to_string(),
            materials: format!("{:.2}", e.breakdown.materials),
            manufacturing: format!("{:.2}", e.breakdown.manufacturing),
            transport: format!("{:.2}", e.breakdown.transport),
            complexity: format!(
                "{} x{} ({})",
                e.complexity.category, e.complexity.complexity_factor, e.complexity.confidence
            ),
        }
    }
}

pub fn execute(args: EstimateArgs, pipeline: &EcoPipeline, format: OutputFormat) -> CliResult<()> {
    let coefficient = match (args.coefficient, args.material.as_deref()) {
        (Some(c), _) => c,
        (None, Some(material)) => pipeline.materials().coefficient(material),
        (None, None) => {
            return Err(CliError::InvalidArgument(
                "either --coefficient or --material is required".into(),
            ))
        }
    };
    let multiplier = pipeline.transport().multiplier(args.transport);

    let estimate = pipeline.estimate_emissions(args.weight, coefficient, multiplier, &args.category)?;
    print_output(&[estimate], format, |e| EstimateRow::from(e))
}

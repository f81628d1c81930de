//! Weight validation command

use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};
use clap::Args;
use eco_engine::{EcoPipeline, WeightValidation};
use tabled::Tabled;

#[derive(Args)]
pub struct WeightArgs {
    /// Product title
    #[arg(short, long)]
    title: String,

    /// Scraped weight in kg; omit when unknown
    #[arg(short, long)]
    weight: Option<f64>,

    /// Product category
    #[arg(short, long, default_value = "")]
    category: String,
}

#[derive(Tabled)]
struct WeightRow {
    #[tabled(rename = "Weight (kg)")]
    weight_kg: String,
    #[tabled(rename = "Corrected")]
    corrected: bool,
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&WeightValidation> for WeightRow {
    fn from(v: &WeightValidation) -> Self {
        Self {
            weight_kg: format!("{:.3}", v.weight_kg),
            corrected: v.corrected,
            keyword: v.matched_keyword.clone().unwrap_or_else(|| "-".to_string()),
            reason: v.reason.clone(),
        }
    }
}

pub fn execute(args: WeightArgs, pipeline: &EcoPipeline, format: OutputFormat) -> CliResult<()> {
    let result = pipeline.validate_weight(&args.title, args.weight, &args.category);
    print_output(&[result], format, |v| WeightRow::from(v))
}

//! Plausibility check command

use crate::error::CliResult;
use crate::output::{print_single, print_success, print_warning, OutputFormat};
use clap::Args;
use eco_engine::EcoPipeline;

#[derive(Args)]
pub struct CheckArgs {
    /// Product title
    #[arg(short, long)]
    title: String,

    /// Weight in kg
    #[arg(short, long)]
    weight: f64,

    /// Material name
    #[arg(short, long)]
    material: String,
}

pub fn execute(args: CheckArgs, pipeline: &EcoPipeline, format: OutputFormat) -> CliResult<()> {
    let violations = pipeline.check_plausibility(&args.title, args.weight, &args.material);

    match format {
        OutputFormat::Table => {
            if violations.is_empty() {
                print_success("No plausibility issues");
            } else {
                for v in &violations {
                    print_warning(v);
                }
            }
            Ok(())
        }
        _ => print_single(&violations, format),
    }
}

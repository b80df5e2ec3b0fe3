// crates/garage-cli/src/cmd/mod.rs

use clap::Args;
use garage_core::GarageConfig;

pub mod run;
pub mod shell;

/// Garage options shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct GarageArgs {
    /// Only decrement a vehicle counter when a release actually removed something
    #[arg(long)]
    pub strict_counts: bool,
}

impl GarageArgs {
    pub fn config(&self) -> GarageConfig {
        if self.strict_counts {
            GarageConfig::strict()
        } else {
            GarageConfig::default()
        }
    }
}

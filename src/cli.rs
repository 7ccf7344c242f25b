mod breakdown;
mod compare;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flurry::{input::Scenario, prelude::*};

use self::{breakdown::BreakdownArgs, compare::CompareArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compare the total cost of ownership of all options.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Show the year-by-year costs of a single option.
    #[clap(name = "breakdown")]
    Breakdown(Box<BreakdownArgs>),
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Scenario file with the global assumptions and the options.
    #[clap(long, short = 's', env = "FLURRY_SCENARIO", default_value = "scenario.toml")]
    pub scenario: PathBuf,
}

impl ScenarioArgs {
    pub fn read(&self) -> Result<Scenario> {
        Scenario::read_from(&self.scenario)
    }
}

use clap::Parser;
use flurry::{
    core::{horizon::Horizon, projector::Projector},
    prelude::*,
    tables::{build_assumptions_table, build_breakdown_table, build_totals_table},
};

use crate::cli::ScenarioArgs;

#[derive(Parser)]
pub struct BreakdownArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,

    /// Option name as listed in the scenario.
    #[clap(long = "option")]
    name: String,

    /// Number of years to project.
    #[clap(
        long,
        default_value = "10",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(Horizon::MAX_YEARS)),
    )]
    years: u32,
}

impl BreakdownArgs {
    #[instrument(skip_all, fields(name = %self.name, years = self.years))]
    pub fn run(&self) -> Result {
        let scenario = self.scenario.read()?;
        let globals = scenario.globals();
        let candidates = scenario.candidates();
        let Some(candidate) = candidates.iter().find(|candidate| candidate.name == self.name)
        else {
            bail!("option `{}` is not in the scenario", self.name);
        };

        let projector = Projector::new(&globals);
        let projection = projector.project(candidate, self.years);
        info!(%candidate, total = %projection.total(), "projected");

        println!("{}", build_assumptions_table(&globals, projector.load()));
        println!("{}", build_breakdown_table(candidate, &projection));
        println!("{}", build_totals_table(&projection));
        Ok(())
    }
}

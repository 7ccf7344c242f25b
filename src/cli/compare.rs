use clap::Parser;
use enumset::EnumSet;
use flurry::{
    core::{
        candidate::Category,
        comparator::{Comparison, compare},
        horizon::Horizon,
    },
    prelude::*,
    tables::{build_assumptions_table, build_ranking_table},
};
use itertools::Itertools;

use crate::cli::ScenarioArgs;

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,

    /// Projection horizons in years.
    #[clap(
        long,
        env = "FLURRY_HORIZONS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "2,5,10",
    )]
    horizons: Vec<Horizon>,

    /// Option categories to include.
    #[clap(
        long,
        env = "FLURRY_CATEGORIES",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "electric,gas,service",
    )]
    categories: Vec<Category>,
}

impl CompareArgs {
    fn categories(&self) -> EnumSet<Category> {
        self.categories.iter().copied().collect()
    }

    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let scenario = self.scenario.read()?;
        let globals = scenario.globals();
        let categories = self.categories();
        let candidates = scenario
            .candidates()
            .into_iter()
            .filter(|candidate| categories.contains(candidate.category()))
            .collect_vec();
        let horizons = self.horizons.iter().copied().unique().collect_vec();
        info!(n_candidates = candidates.len(), ?horizons, "comparing…");

        match compare(&candidates, &globals, &horizons) {
            Comparison::NoOptions => {
                println!("{}", Comparison::NO_OPTIONS_ADVICE);
            }
            Comparison::Ranked(ranking) => {
                println!("{}", build_assumptions_table(&globals, &ranking.load));
                println!("{}", build_ranking_table(&ranking));
            }
        }
        Ok(())
    }
}

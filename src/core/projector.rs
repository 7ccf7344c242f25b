//! Multi-year total cost of ownership projection.

use derive_more::Add;

use crate::{
    core::{
        battery::WearState,
        candidate::{Candidate, Kind},
        globals::Globals,
        model::{CostModel, Year},
        usage::SeasonalLoad,
    },
    prelude::*,
    quantity::currency::Dollars,
};

/// Projects options over a number of years under a fixed set of assumptions.
///
/// Each [`Projector::project`] call is an independent simulation starting from year zero
/// with a fresh battery, so projections never leak state into one another.
#[must_use]
pub struct Projector<'a> {
    globals: &'a Globals,
    load: SeasonalLoad,
}

impl<'a> Projector<'a> {
    pub fn new(globals: &'a Globals) -> Self {
        Self { globals, load: SeasonalLoad::estimate(globals) }
    }

    pub const fn load(&self) -> &SeasonalLoad {
        &self.load
    }

    pub fn project(&self, candidate: &Candidate, years: u32) -> Projection {
        let projection = match &candidate.kind {
            Kind::Electric(electric) => self.run(candidate, electric, years),
            Kind::Gas(gas) => self.run(candidate, gas, years),
            Kind::Service(service) => self.run(candidate, service, years),
        };
        debug!(candidate = %candidate, years, total = %projection.total(), "projected");
        projection
    }

    fn run<M: CostModel>(&self, candidate: &Candidate, model: &M, years: u32) -> Projection {
        let mut wear = M::Wear::default();
        let mut breakdown = Breakdown { initial: candidate.initial_cost, ..Breakdown::ZERO };
        let mut steps = Vec::with_capacity(years as usize);

        for number in 1..=years {
            let inflation_factor = self.globals.inflation_rate.compounding(number);
            let year = Year { number, inflation_factor, globals: self.globals, load: &self.load };
            let maintenance = candidate.annual_maintenance * inflation_factor;
            let cost = model.cost_year(&year, &mut wear);

            let year_breakdown = Breakdown {
                initial: Dollars::ZERO,
                operating: cost.operating,
                maintenance,
                replacement: cost.replacement,
            };
            breakdown = breakdown + year_breakdown;

            steps.push(YearStep {
                number,
                inflation_factor,
                costs: year_breakdown,
                cumulative: breakdown.total(),
                battery_wear: M::battery_wear(&wear),
            });
        }

        Projection { years, breakdown, steps }
    }
}

/// Cost components, nominal.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Add)]
pub struct Breakdown {
    pub initial: Dollars,
    pub operating: Dollars,
    pub maintenance: Dollars,
    pub replacement: Dollars,
}

impl Breakdown {
    pub const ZERO: Self = Self {
        initial: Dollars::ZERO,
        operating: Dollars::ZERO,
        maintenance: Dollars::ZERO,
        replacement: Dollars::ZERO,
    };

    pub fn total(&self) -> Dollars {
        self.initial + (self.operating + self.maintenance + self.replacement)
    }
}

/// Single projected year.
#[must_use]
#[derive(Clone, Debug)]
pub struct YearStep {
    /// 1-based year number.
    pub number: u32,

    pub inflation_factor: f64,

    /// Costs incurred within this year.
    pub costs: Breakdown,

    /// Total cost of ownership by the end of this year, including the initial cost.
    pub cumulative: Dollars,

    /// Battery wear after this year, for electric options.
    pub battery_wear: Option<WearState>,
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Projection {
    pub years: u32,
    pub breakdown: Breakdown,
    pub steps: Vec<YearStep>,
}

impl Projection {
    pub fn total(&self) -> Dollars {
        self.breakdown.total()
    }

    /// Years in which the battery set got replaced.
    pub fn replacement_years(&self) -> impl Iterator<Item = u32> {
        self.steps
            .iter()
            .filter(|step| step.costs.replacement > Dollars::ZERO)
            .map(|step| step.number)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::{
        core::candidate::{Billing, Electric, Gas, Service},
        quantity::{length::Inches, rate::Rate},
    };

    /// Assumptions under which the scale factor is exactly one.
    fn reference_globals() -> Globals {
        Globals::builder().events_per_season(18).total_seasonal_snowfall(Inches(117.0)).build()
    }

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::builder()
                .name("Electric")
                .initial_cost(Dollars(1200.0))
                .annual_maintenance(Dollars(20.0))
                .kind(Electric::default().into())
                .build(),
            Candidate::builder()
                .name("Gas")
                .initial_cost(Dollars(900.0))
                .annual_maintenance(Dollars(80.0))
                .kind(Gas::default().into())
                .build(),
            Candidate::builder()
                .name("Service")
                .kind(
                    Service::builder()
                        .billing(Billing::PerEvent)
                        .base_cost(Dollars(45.0))
                        .build()
                        .into(),
                )
                .build(),
        ]
    }

    #[test]
    fn test_zero_years() {
        let globals = reference_globals();
        let projection = Projector::new(&globals).project(&candidates()[0], 0);
        assert_eq!(projection.total(), Dollars(1200.0));
        assert!(projection.steps.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let globals = Globals::default();
        let projector = Projector::new(&globals);
        for candidate in candidates() {
            let first = projector.project(&candidate, 10);
            let second = projector.project(&candidate, 10);
            assert_eq!(first.total(), second.total());
            assert_eq!(first.breakdown, second.breakdown);
        }
    }

    #[test]
    fn test_monotonic_in_years() {
        let globals = Globals::default();
        let projector = Projector::new(&globals);
        for candidate in candidates() {
            let totals = (0..=15).map(|years| projector.project(&candidate, years).total());
            for (shorter, longer) in totals.tuple_windows() {
                assert!(shorter <= longer, "{candidate}: {shorter} > {longer}");
            }
        }
    }

    #[test]
    fn test_without_inflation() {
        let globals = Globals { inflation_rate: Rate::ZERO, ..reference_globals() };
        let projection = Projector::new(&globals).project(&candidates()[0], 10);

        // Operating cost is a flat 18 × 0.84 kWh × $0.25 a year:
        assert_abs_diff_eq!(projection.breakdown.operating.0, 37.8, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.breakdown.maintenance.0, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.breakdown.replacement.0, 1500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.total().0, 1200.0 + 37.8 + 200.0 + 1500.0, epsilon = 1e-9);
        for step in &projection.steps {
            assert_abs_diff_eq!(step.inflation_factor, 1.0);
        }
    }

    #[test]
    fn test_battery_replacement_years() {
        let globals = reference_globals();
        let projection = Projector::new(&globals).project(&candidates()[0], 10);
        assert_eq!(projection.replacement_years().collect_vec(), [3, 6, 9]);

        for step in &projection.steps {
            let wear = step.battery_wear.unwrap();
            if step.number % 3 == 0 {
                assert_eq!(wear, WearState::FRESH);
            } else {
                assert_eq!(wear.years_since_replacement, step.number % 3);
            }
        }
    }

    #[test]
    fn test_inflated_electric_total() {
        let globals = reference_globals();
        let projection = Projector::new(&globals).project(&candidates()[0], 5);
        let factors = [1.0, 1.05, 1.1025, 1.157_625, 1.215_506_25];
        let sum: f64 = factors.iter().sum();
        assert_abs_diff_eq!(projection.breakdown.operating.0, 3.78 * sum, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.breakdown.maintenance.0, 20.0 * sum, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.breakdown.replacement.0, 500.0 * 1.1025, epsilon = 1e-9);
    }

    #[test]
    fn test_horizons_are_independent() {
        let globals = reference_globals();
        let projector = Projector::new(&globals);
        let candidates = candidates();
        let electric = &candidates[0];

        // A 2-year run must not leave wear behind for the next run:
        let _ = projector.project(electric, 2);
        let projection = projector.project(electric, 3);
        assert_eq!(projection.replacement_years().collect_vec(), [3]);
    }

    #[test]
    fn test_steps_accumulate_to_total() {
        let globals = Globals::default();
        let projection = Projector::new(&globals).project(&candidates()[2], 10);
        let last = projection.steps.last().unwrap();
        assert_abs_diff_eq!(last.cumulative.0, projection.total().0, epsilon = 1e-9);
        assert!(last.battery_wear.is_none());
    }
}

//! Single-year cost models of the option categories.

use crate::{
    core::{
        battery::WearState,
        candidate::{Billing, Electric, Gas, Service},
        globals::Globals,
        usage::SeasonalLoad,
    },
    quantity::{area::SquareFeet, currency::Dollars},
};

/// Area at which service contract prices are quoted.
pub const SERVICE_REFERENCE_AREA: SquareFeet = SquareFeet(2000.0);

const MONTHS_PER_YEAR: f64 = 12.0;

/// Conditions of a single projected year.
#[must_use]
#[derive(Copy, Clone)]
pub struct Year<'a> {
    /// 1-based year number.
    pub number: u32,

    /// General inflation multiplier for this year.
    pub inflation_factor: f64,

    pub globals: &'a Globals,
    pub load: &'a SeasonalLoad,
}

impl Year<'_> {
    fn events_per_season(&self) -> f64 {
        f64::from(self.globals.events_per_season)
    }
}

/// Costs of a single year, already inflated.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct YearCost {
    pub operating: Dollars,
    pub replacement: Dollars,
}

pub trait CostModel {
    /// State carried from one year to the next within a single projection.
    type Wear: Default;

    fn cost_year(&self, year: &Year<'_>, wear: &mut Self::Wear) -> YearCost;

    /// Battery wear to report after a year, if the model tracks any.
    fn battery_wear(_wear: &Self::Wear) -> Option<WearState> {
        None
    }
}

impl CostModel for Electric {
    type Wear = WearState;

    fn cost_year(&self, year: &Year<'_>, wear: &mut Self::Wear) -> YearCost {
        let charges_per_event = self.base_charges_per_event * year.load.scale_factor;
        let energy_per_event = self.pack_capacity() * charges_per_event;
        let operating = energy_per_event
            * year.events_per_season()
            * year.globals.electricity_price
            * year.inflation_factor;

        let season_cycles = year.events_per_season() * charges_per_event;
        let replacement = if wear.age(season_cycles, self.wear_limits()) {
            self.replacement_cost * year.inflation_factor
        } else {
            Dollars::ZERO
        };

        YearCost { operating, replacement }
    }

    fn battery_wear(wear: &Self::Wear) -> Option<WearState> {
        Some(*wear)
    }
}

impl CostModel for Gas {
    type Wear = ();

    fn cost_year(&self, year: &Year<'_>, _wear: &mut Self::Wear) -> YearCost {
        let fuel_per_event = self.base_fuel_per_event * year.load.scale_factor;
        let operating = fuel_per_event
            * year.events_per_season()
            * year.globals.fuel_price
            * year.inflation_factor;
        YearCost { operating, replacement: Dollars::ZERO }
    }
}

impl CostModel for Service {
    type Wear = ();

    /// Service prices do not follow the snow load: they scale with the serviced area instead.
    ///
    /// Both the contractual price increase and general inflation are applied.
    fn cost_year(&self, year: &Year<'_>, _wear: &mut Self::Wear) -> YearCost {
        let season_cost = match self.billing {
            Billing::Monthly => self.base_cost * MONTHS_PER_YEAR,
            Billing::PerEvent => self.base_cost * year.events_per_season(),
        };
        let season_cost = season_cost * (year.globals.area / SERVICE_REFERENCE_AREA);
        let operating = season_cost
            * self.annual_price_increase.compounding(year.number)
            * year.inflation_factor;
        YearCost { operating, replacement: Dollars::ZERO }
    }
}

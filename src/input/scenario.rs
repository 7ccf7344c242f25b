use std::{fmt::Debug, fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    core::{
        candidate::{Billing, Candidate, Category, Electric, Gas, Kind, Service},
        globals::Globals,
    },
    input::raw::{RawValue, count_or, non_negative_or, percent_or, positive_or, text_or},
    prelude::*,
    quantity::{
        area::SquareFeet,
        currency::Dollars,
        energy::{AmpHours, Volts},
        fuel::Gallons,
        length::Inches,
        price::{GallonPrice, KilowattHourPrice},
    },
};

/// Scenario file: global assumptions and the options grouped by category.
#[must_use]
#[derive(Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub globals: RawGlobals,

    #[serde(default)]
    pub electric: Vec<RawOption>,

    #[serde(default)]
    pub gas: Vec<RawOption>,

    #[serde(default)]
    pub service: Vec<RawOption>,
}

impl Scenario {
    #[instrument(skip_all, fields(path = ?path))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the scenario from `{}`", path.display()))?;
        text.parse()
    }

    pub fn globals(&self) -> Globals {
        self.globals.parse()
    }

    /// Options in the listing order: electric, then gas, then service.
    pub fn candidates(&self) -> Vec<Candidate> {
        [
            (Category::Electric, &self.electric),
            (Category::Gas, &self.gas),
            (Category::Service, &self.service),
        ]
        .into_iter()
        .flat_map(|(category, options)| {
            options.iter().enumerate().map(move |(index, option)| option.parse(category, index))
        })
        .collect()
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse the scenario")
    }
}

#[must_use]
#[derive(Default, Deserialize)]
pub struct RawGlobals {
    pub area: Option<RawValue>,
    pub events: Option<RawValue>,
    pub snowfall: Option<RawValue>,
    pub electricity_price: Option<RawValue>,
    pub fuel_price: Option<RawValue>,
    pub inflation_percent: Option<RawValue>,
}

impl RawGlobals {
    pub fn parse(&self) -> Globals {
        Globals {
            area: SquareFeet(positive_or("area", self.area.as_ref(), Globals::DEFAULT_AREA.0)),
            events_per_season: count_or(
                "events",
                self.events.as_ref(),
                Globals::DEFAULT_EVENTS_PER_SEASON,
            ),
            total_seasonal_snowfall: Inches(positive_or(
                "snowfall",
                self.snowfall.as_ref(),
                Globals::DEFAULT_TOTAL_SEASONAL_SNOWFALL.0,
            )),
            electricity_price: KilowattHourPrice(positive_or(
                "electricity_price",
                self.electricity_price.as_ref(),
                Globals::DEFAULT_ELECTRICITY_PRICE.0,
            )),
            fuel_price: GallonPrice(positive_or(
                "fuel_price",
                self.fuel_price.as_ref(),
                Globals::DEFAULT_FUEL_PRICE.0,
            )),
            inflation_rate: percent_or(
                "inflation_percent",
                self.inflation_percent.as_ref(),
                Globals::DEFAULT_INFLATION_RATE,
            ),
        }
    }
}

/// Option entry with every field any category may use.
///
/// Fields irrelevant to the entry's category are ignored.
#[must_use]
#[derive(Default, Deserialize)]
pub struct RawOption {
    pub name: Option<RawValue>,
    pub initial_cost: Option<RawValue>,
    pub annual_maintenance: Option<RawValue>,

    pub battery_capacity_ah: Option<RawValue>,
    pub battery_voltage: Option<RawValue>,
    pub charges_per_event: Option<RawValue>,
    pub max_charge_cycles: Option<RawValue>,
    pub battery_life_years: Option<RawValue>,
    pub battery_replacement_cost: Option<RawValue>,

    pub fuel_per_event: Option<RawValue>,

    pub billing: Option<RawValue>,
    pub cost: Option<RawValue>,
    pub price_increase_percent: Option<RawValue>,
}

impl RawOption {
    /// Parse the entry, `index` being its 0-based position within the category.
    pub fn parse(&self, category: Category, index: usize) -> Candidate {
        let kind: Kind = match category {
            Category::Electric => self.parse_electric().into(),
            Category::Gas => self.parse_gas().into(),
            Category::Service => self.parse_service().into(),
        };
        Candidate::builder()
            .name(text_or("name", self.name.as_ref(), || {
                format!("{} {}", category.title(), index + 1)
            }))
            .initial_cost(Dollars(non_negative_or(
                "initial_cost",
                self.initial_cost.as_ref(),
                0.0,
            )))
            .annual_maintenance(Dollars(non_negative_or(
                "annual_maintenance",
                self.annual_maintenance.as_ref(),
                0.0,
            )))
            .kind(kind)
            .build()
    }

    fn parse_electric(&self) -> Electric {
        Electric {
            battery_capacity: AmpHours(positive_or(
                "battery_capacity_ah",
                self.battery_capacity_ah.as_ref(),
                Electric::DEFAULT_BATTERY_CAPACITY.0,
            )),
            battery_voltage: Volts(positive_or(
                "battery_voltage",
                self.battery_voltage.as_ref(),
                Electric::DEFAULT_BATTERY_VOLTAGE.0,
            )),
            base_charges_per_event: non_negative_or(
                "charges_per_event",
                self.charges_per_event.as_ref(),
                Electric::DEFAULT_BASE_CHARGES_PER_EVENT,
            ),
            max_charge_cycles: count_or(
                "max_charge_cycles",
                self.max_charge_cycles.as_ref(),
                Electric::DEFAULT_MAX_CHARGE_CYCLES,
            ),
            calendar_life_years: count_or(
                "battery_life_years",
                self.battery_life_years.as_ref(),
                Electric::DEFAULT_CALENDAR_LIFE_YEARS,
            ),
            replacement_cost: Dollars(non_negative_or(
                "battery_replacement_cost",
                self.battery_replacement_cost.as_ref(),
                Electric::DEFAULT_REPLACEMENT_COST.0,
            )),
        }
    }

    fn parse_gas(&self) -> Gas {
        Gas {
            base_fuel_per_event: Gallons(non_negative_or(
                "fuel_per_event",
                self.fuel_per_event.as_ref(),
                Gas::DEFAULT_BASE_FUEL_PER_EVENT.0,
            )),
        }
    }

    fn parse_service(&self) -> Service {
        Service {
            billing: self.parse_billing(),
            base_cost: Dollars(non_negative_or("cost", self.cost.as_ref(), 0.0)),
            annual_price_increase: percent_or(
                "price_increase_percent",
                self.price_increase_percent.as_ref(),
                Service::DEFAULT_ANNUAL_PRICE_INCREASE,
            ),
        }
    }

    fn parse_billing(&self) -> Billing {
        let text = text_or("billing", self.billing.as_ref(), String::new).to_lowercase();
        match text.as_str() {
            "monthly" => Billing::Monthly,
            "per-event" | "per_event" | "per event" | "perevent" => Billing::PerEvent,
            _ => {
                if !text.is_empty() {
                    debug!(billing = %text, "unknown billing mode, assuming monthly");
                }
                Billing::default()
            }
        }
    }
}

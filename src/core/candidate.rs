//! Snow-removal options competing for the lowest cost of ownership.

use std::fmt::{Display, Formatter};

use bon::Builder;

use crate::{
    core::battery::WearLimits,
    quantity::{
        currency::Dollars,
        energy::{AmpHours, KilowattHours, Volts},
        fuel::Gallons,
        rate::Rate,
    },
};

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Category {
    /// Battery-electric equipment.
    Electric,

    /// Gas-powered equipment.
    Gas,

    /// Paid snow-removal contract.
    Service,
}

impl Category {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Electric => "Electric",
            Self::Gas => "Gas",
            Self::Service => "Service",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Electric => write!(f, "electric"),
            Self::Gas => write!(f, "gas"),
            Self::Service => write!(f, "service"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Candidate {
    #[builder(into)]
    pub name: String,

    #[builder(default)]
    pub initial_cost: Dollars,

    /// Yearly maintenance before inflation.
    #[builder(default)]
    pub annual_maintenance: Dollars,

    pub kind: Kind,
}

impl Candidate {
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

/// Renders the option the way it is listed in the results,
/// for example `Plow (service - per-event)`.
impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Kind::Service(service) => write!(f, "{} (service - {})", self.name, service.billing),
            kind => write!(f, "{} ({})", self.name, kind.category()),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, derive_more::From)]
pub enum Kind {
    Electric(Electric),
    Gas(Gas),
    Service(Service),
}

impl Kind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Electric(_) => Category::Electric,
            Self::Gas(_) => Category::Gas,
            Self::Service(_) => Category::Service,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Electric {
    /// Charge capacity of a single battery in the two-battery pack.
    #[builder(default = Electric::DEFAULT_BATTERY_CAPACITY)]
    pub battery_capacity: AmpHours,

    #[builder(default = Electric::DEFAULT_BATTERY_VOLTAGE)]
    pub battery_voltage: Volts,

    /// Full pack charges per event at the reference snow depth.
    #[builder(default = Electric::DEFAULT_BASE_CHARGES_PER_EVENT)]
    pub base_charges_per_event: f64,

    #[builder(default = Electric::DEFAULT_MAX_CHARGE_CYCLES)]
    pub max_charge_cycles: u32,

    #[builder(default = Electric::DEFAULT_CALENDAR_LIFE_YEARS)]
    pub calendar_life_years: u32,

    /// Cost of replacing the whole battery set.
    #[builder(default = Electric::DEFAULT_REPLACEMENT_COST)]
    pub replacement_cost: Dollars,
}

impl Electric {
    pub const DEFAULT_BATTERY_CAPACITY: AmpHours = AmpHours(7.5);
    pub const DEFAULT_BATTERY_VOLTAGE: Volts = Volts(56.0);
    pub const DEFAULT_BASE_CHARGES_PER_EVENT: f64 = 1.0;
    pub const DEFAULT_MAX_CHARGE_CYCLES: u32 = 1000;
    pub const DEFAULT_CALENDAR_LIFE_YEARS: u32 = 3;
    pub const DEFAULT_REPLACEMENT_COST: Dollars = Dollars(500.0);

    /// Batteries in a pack.
    const N_BATTERIES: f64 = 2.0;

    /// Energy stored by the full pack.
    pub fn pack_capacity(&self) -> KilowattHours {
        self.battery_capacity.at(self.battery_voltage) * Self::N_BATTERIES
    }

    pub const fn wear_limits(&self) -> WearLimits {
        WearLimits {
            max_charge_cycles: self.max_charge_cycles,
            calendar_life_years: self.calendar_life_years,
        }
    }
}

impl Default for Electric {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Gas {
    /// Fuel burnt per event at the reference snow depth.
    #[builder(default = Gas::DEFAULT_BASE_FUEL_PER_EVENT)]
    pub base_fuel_per_event: Gallons,
}

impl Gas {
    pub const DEFAULT_BASE_FUEL_PER_EVENT: Gallons = Gallons(0.75);
}

impl Default for Gas {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Billing {
    /// Flat monthly fee, unlimited events.
    #[default]
    Monthly,

    /// Fee per snow-removal event.
    PerEvent,
}

impl Display for Billing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::PerEvent => write!(f, "per-event"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Service {
    #[builder(default)]
    pub billing: Billing,

    /// Monthly or per-event fee, depending on [`Service::billing`].
    #[builder(default)]
    pub base_cost: Dollars,

    /// Contractual price increase, compounded separately from general inflation.
    #[builder(default = Service::DEFAULT_ANNUAL_PRICE_INCREASE)]
    pub annual_price_increase: Rate,
}

impl Service {
    pub const DEFAULT_ANNUAL_PRICE_INCREASE: Rate = Rate(0.05);
}

impl Default for Service {
    fn default() -> Self {
        Self::builder().build()
    }
}

use bon::Builder;

use crate::quantity::{
    area::SquareFeet,
    length::Inches,
    price::{GallonPrice, KilowattHourPrice},
    rate::Rate,
};

/// Site and economic assumptions shared by every option in a calculation run.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Globals {
    /// Serviced surface area.
    #[builder(default = Globals::DEFAULT_AREA)]
    pub area: SquareFeet,

    /// Snow-removal events per season.
    #[builder(default = Globals::DEFAULT_EVENTS_PER_SEASON)]
    pub events_per_season: u32,

    /// Cumulative seasonal snow depth.
    #[builder(default = Globals::DEFAULT_TOTAL_SEASONAL_SNOWFALL)]
    pub total_seasonal_snowfall: Inches,

    #[builder(default = Globals::DEFAULT_ELECTRICITY_PRICE)]
    pub electricity_price: KilowattHourPrice,

    #[builder(default = Globals::DEFAULT_FUEL_PRICE)]
    pub fuel_price: GallonPrice,

    /// General inflation, applied uniformly to every cost stream.
    #[builder(default = Globals::DEFAULT_INFLATION_RATE)]
    pub inflation_rate: Rate,
}

impl Globals {
    pub const DEFAULT_AREA: SquareFeet = SquareFeet(2000.0);
    pub const DEFAULT_EVENTS_PER_SEASON: u32 = 18;
    pub const DEFAULT_TOTAL_SEASONAL_SNOWFALL: Inches = Inches(100.0);
    pub const DEFAULT_ELECTRICITY_PRICE: KilowattHourPrice = KilowattHourPrice(0.25);
    pub const DEFAULT_FUEL_PRICE: GallonPrice = GallonPrice(3.53);
    pub const DEFAULT_INFLATION_RATE: Rate = Rate(0.05);

    /// Average snow depth cleared per event, zero when there are no events at all.
    pub fn depth_per_event(&self) -> Inches {
        if self.events_per_season == 0 {
            Inches::ZERO
        } else {
            self.total_seasonal_snowfall / f64::from(self.events_per_season)
        }
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::builder().build()
    }
}

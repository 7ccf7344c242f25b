//! Snowfall-driven usage scaling.
//!
//! Per-event consumption figures (battery charges, fuel) are quoted for a reference storm.
//! The scale factor converts them to the site's actual per-event snow load.

use crate::{
    core::globals::Globals,
    prelude::*,
    quantity::{
        area::SquareFeet,
        length::{Feet, Inches},
        mass::{Pounds, Tons},
    },
};

/// Per-event snow depth at which consumption figures are quoted.
pub const REFERENCE_DEPTH: Inches = Inches(6.5);

/// Fresh snow density, pounds per cubic foot.
const FRESH_SNOW_DENSITY: f64 = 12.0;

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct SeasonalLoad {
    /// Average snow depth cleared per event.
    pub depth_per_event: Inches,

    /// Snow mass moved per event on the site.
    pub tons_per_event: Tons,

    /// Snow mass moved per event at [`REFERENCE_DEPTH`] on the same area.
    pub base_tons_per_event: Tons,

    /// Dimensionless multiplier for per-event consumption, `1.0` at the reference depth.
    pub scale_factor: f64,
}

impl SeasonalLoad {
    pub fn estimate(globals: &Globals) -> Self {
        let depth_per_event = globals.depth_per_event();
        let tons_per_event = snow_mass(globals.area, depth_per_event);
        let base_tons_per_event = snow_mass(globals.area, REFERENCE_DEPTH);

        let scale_factor = if globals.events_per_season == 0 || base_tons_per_event <= Tons::ZERO
        {
            warn!(
                area = %globals.area,
                events_per_season = globals.events_per_season,
                "degenerate baseline, not scaling the usage",
            );
            1.0
        } else {
            tons_per_event / base_tons_per_event
        };

        debug!(%depth_per_event, %tons_per_event, %base_tons_per_event, scale_factor, "estimated");
        Self { depth_per_event, tons_per_event, base_tons_per_event, scale_factor }
    }
}

/// Mass of fresh snow of the given depth covering the given area.
fn snow_mass(area: SquareFeet, depth: Inches) -> Tons {
    let volume = area * Feet::from(depth);
    Pounds(volume.0 * FRESH_SNOW_DENSITY).into()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_snow_mass() {
        // 2000 ft² × 0.5 ft × 12 lb/ft³ = 12000 lb:
        assert_abs_diff_eq!(snow_mass(SquareFeet(2000.0), Inches(6.0)).0, 6.0);
    }

    #[test]
    fn test_reference_conditions_do_not_scale() {
        for area in [1.0, 500.0, 2000.0, 123_456.0] {
            let globals = Globals::builder()
                .area(SquareFeet(area))
                .events_per_season(20)
                .total_seasonal_snowfall(Inches(130.0))
                .build();
            let load = SeasonalLoad::estimate(&globals);
            assert_abs_diff_eq!(load.depth_per_event.0, 6.5);
            assert_abs_diff_eq!(load.scale_factor, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_scale_factor() {
        let load = SeasonalLoad::estimate(&Globals::default());
        assert_abs_diff_eq!(load.depth_per_event.0, 100.0 / 18.0, epsilon = 1e-12);
        assert_abs_diff_eq!(load.scale_factor, 100.0 / 18.0 / 6.5, epsilon = 1e-12);
        assert_abs_diff_eq!(load.base_tons_per_event.0, 6.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_area_falls_back_to_one() {
        let globals = Globals::builder().area(SquareFeet::ZERO).build();
        assert_abs_diff_eq!(SeasonalLoad::estimate(&globals).scale_factor, 1.0);
    }

    #[test]
    fn test_no_events_falls_back_to_one() {
        let globals = Globals::builder().events_per_season(0).build();
        assert_abs_diff_eq!(SeasonalLoad::estimate(&globals).scale_factor, 1.0);
    }

    #[test]
    fn test_heavier_storms_scale_up() {
        let globals = Globals::builder()
            .events_per_season(10)
            .total_seasonal_snowfall(Inches(130.0))
            .build();
        assert_abs_diff_eq!(SeasonalLoad::estimate(&globals).scale_factor, 2.0, epsilon = 1e-12);
    }
}

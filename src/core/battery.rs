//! Battery pack wear tracking.

/// Limits after which the battery set must be replaced, whichever comes first.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct WearLimits {
    pub max_charge_cycles: u32,
    pub calendar_life_years: u32,
}

/// Battery wear accumulated since the last replacement.
///
/// Lives for a single projection run only.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WearState {
    pub cycles: f64,
    pub years_since_replacement: u32,
}

impl WearState {
    pub const FRESH: Self = Self { cycles: 0.0, years_since_replacement: 0 };

    /// Age the battery by one season of `cycles` charge cycles.
    ///
    /// # Returns
    ///
    /// `true` when either limit has been reached.
    /// The set is then replaced and the wear starts over.
    pub fn age(&mut self, cycles: f64, limits: WearLimits) -> bool {
        self.years_since_replacement += 1;
        self.cycles += cycles;
        let is_worn_out = self.years_since_replacement >= limits.calendar_life_years
            || self.cycles >= f64::from(limits.max_charge_cycles);
        if is_worn_out {
            *self = Self::FRESH;
        }
        is_worn_out
    }
}

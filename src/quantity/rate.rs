use std::fmt::{Debug, Display, Formatter};

/// Fractional annual growth rate, for example `0.05` for five percent a year.
#[must_use]
#[derive(Copy, Clone, Default, PartialEq, derive_more::From)]
pub struct Rate(pub f64);

impl Rate {
    pub const ZERO: Self = Self(0.0);

    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Compounding multiplier `(1 + rate)^(year - 1)` for the 1-based `year`.
    ///
    /// The first year is never compounded.
    #[must_use]
    pub fn compounding(self, year: u32) -> f64 {
        (1.0 + self.0).powf(f64::from(year.saturating_sub(1)))
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl Debug for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

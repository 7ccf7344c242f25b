use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::prelude::*;

/// Projection length in years.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Horizon {
    pub years: u32,
}

impl Horizon {
    pub const SHORT: Self = Self { years: 2 };
    pub const MEDIUM: Self = Self { years: 5 };
    pub const LONG: Self = Self { years: 10 };

    pub const STANDARD: [Self; 3] = [Self::SHORT, Self::MEDIUM, Self::LONG];

    /// Longest accepted projection.
    pub const MAX_YEARS: u32 = 100;
}

impl Display for Horizon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::SHORT => write!(f, "Short (2y)"),
            Self::MEDIUM => write!(f, "Medium (5y)"),
            Self::LONG => write!(f, "Long (10y)"),
            Self { years: 1 } => write!(f, "1 year"),
            Self { years } => write!(f, "{years} years"),
        }
    }
}

impl FromStr for Horizon {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let years: u32 =
            text.trim().parse().with_context(|| format!("invalid horizon: `{text}`"))?;
        ensure!(years != 0, "horizon must be at least one year long");
        ensure!(years <= Self::MAX_YEARS, "horizon must not exceed {} years", Self::MAX_YEARS);
        Ok(Self { years })
    }
}

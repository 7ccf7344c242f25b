//! Tolerant reading of form-like input.
//!
//! Blank or non-numeric values never fail: they fall back to per-field defaults.

mod raw;
mod scenario;

pub use self::{
    raw::RawValue,
    scenario::{RawGlobals, RawOption, Scenario},
};

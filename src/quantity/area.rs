use crate::quantity::length::{CubicFeet, Feet};

quantity!(SquareFeet, via: f64, suffix: "ft²", precision: 0);

implement_mul!(SquareFeet, Feet, CubicFeet);

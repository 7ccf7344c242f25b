quantity!(Inches, via: f64, suffix: "in", precision: 1);
quantity!(Feet, via: f64, suffix: "ft", precision: 2);
quantity!(CubicFeet, via: f64, suffix: "ft³", precision: 0);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Self(inches.0 / 12.0)
    }
}

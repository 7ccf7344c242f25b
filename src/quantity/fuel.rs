quantity!(Gallons, via: f64, suffix: "gal", precision: 2);

use crate::quantity::{currency::Dollars, energy::KilowattHours, fuel::Gallons};

quantity!(KilowattHourPrice, via: f64, suffix: "$/kWh", precision: 2);
quantity!(GallonPrice, via: f64, suffix: "$/gal", precision: 2);

implement_mul!(KilowattHours, KilowattHourPrice, Dollars);
implement_mul!(Gallons, GallonPrice, Dollars);

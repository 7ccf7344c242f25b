quantity!(Pounds, via: f64, suffix: "lb", precision: 0);
quantity!(Tons, via: f64, suffix: "t", precision: 2);

impl Tons {
    pub const POUNDS_PER_TON: f64 = 2000.0;
}

impl From<Pounds> for Tons {
    fn from(pounds: Pounds) -> Self {
        Self(pounds.0 / Self::POUNDS_PER_TON)
    }
}

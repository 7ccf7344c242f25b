quantity!(
    /// US dollars, nominal (not discounted to present value).
    Dollars, via: f64, prefix: "$", precision: 2
);

impl Dollars {
    /// Round to whole dollars, the granularity at which options are compared.
    pub fn round_to_whole(self) -> Self {
        Self(self.0.round())
    }
}

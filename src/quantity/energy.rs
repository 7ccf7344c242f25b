quantity!(AmpHours, via: f64, suffix: "Ah", precision: 1);
quantity!(Volts, via: f64, suffix: "V", precision: 0);
quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 3);

impl AmpHours {
    /// Energy stored in a battery of this charge capacity at the nominal voltage.
    pub fn at(self, voltage: Volts) -> KilowattHours {
        KilowattHours(self.0 * voltage.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_at() {
        assert_abs_diff_eq!(AmpHours(7.5).at(Volts(56.0)).0, 0.42);
    }
}

#[macro_use]
mod macros;

pub mod area;
pub mod currency;
pub mod energy;
pub mod fuel;
pub mod length;
pub mod mass;
pub mod price;
pub mod rate;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{
        area::SquareFeet,
        currency::Dollars,
        energy::KilowattHours,
        length::{CubicFeet, Feet, Inches},
        price::KilowattHourPrice,
    };

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(Inches(13.0) / Inches(6.5), 2.0);
        assert_abs_diff_eq!(Dollars(50.0) / Dollars(200.0), 0.25);
    }

    #[test]
    fn test_scalar_operations() {
        assert_eq!(Dollars(500.0) * 1.05, Dollars(525.0));
        assert_eq!(SquareFeet(4000.0) / 2.0, SquareFeet(2000.0));
        assert_eq!(-Dollars(1.5), Dollars(-1.5));
    }

    #[test]
    fn test_products_commute() {
        assert_eq!(SquareFeet(2000.0) * Feet(0.5), CubicFeet(1000.0));
        assert_eq!(Feet(0.5) * SquareFeet(2000.0), CubicFeet(1000.0));
        assert_eq!(KilowattHourPrice(0.25) * KilowattHours(4.0), Dollars(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dollars(1234.5).to_string(), "$1234.50");
        assert_eq!(Inches(6.5).to_string(), "6.5 in");
    }

    #[test]
    fn test_sum() {
        let total: Dollars = [Dollars(1.0), Dollars(2.5)].into_iter().sum();
        assert_eq!(total, Dollars(3.5));
    }
}

//! Numeric value generators.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a random currency amount in the given range (inclusive),
/// rounded to cents.
pub fn generate_currency_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Decimal {
    round_cents(rng.gen_range(min..=max))
}

/// Round a float to two decimal places, midpoint away from zero.
///
/// Non-finite input has no decimal representation and yields zero.
pub fn round_cents(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = generate_int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_generate_currency_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = generate_currency_range(&mut rng, 4.99, 19.99);
            assert!(v >= dec!(4.99) && v <= dec!(19.99));
            assert!(v.scale() <= 2);
        }
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.344), dec!(12.34));
        assert_eq!(round_cents(12.346), dec!(12.35));
        assert_eq!(round_cents(10.0), dec!(10));
        assert_eq!(round_cents(f64::NAN), Decimal::ZERO);
    }
}

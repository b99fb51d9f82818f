//! Rounding policy over whole-cent amounts.

use diot_transform::round_numeric;
use proptest::prelude::*;

proptest! {
    #[test]
    fn cents_up_to_fifty_round_down(units in 0u64..1_000_000, cents in 0u64..=50) {
        let value = units as f64 + cents as f64 / 100.0;
        prop_assert_eq!(round_numeric(value).unwrap(), units.to_string());
    }

    #[test]
    fn cents_from_fifty_one_round_up(units in 0u64..1_000_000, cents in 51u64..=99) {
        let value = units as f64 + cents as f64 / 100.0;
        prop_assert_eq!(round_numeric(value).unwrap(), (units + 1).to_string());
    }

    #[test]
    fn negative_amounts_are_rejected(value in -1_000_000.0f64..-0.001) {
        prop_assert!(round_numeric(value).is_err());
    }
}

#[test]
fn parsed_text_amounts() {
    for (text, expected) in [
        ("10.004", "10"),
        ("10.01", "10"),
        ("10.50", "10"),
        ("10.51", "11"),
        ("10.999", "11"),
        ("7.0", "7"),
        ("0.51", "1"),
    ] {
        let value: f64 = text.parse().unwrap();
        assert_eq!(round_numeric(value).unwrap(), expected, "{text}");
    }
}

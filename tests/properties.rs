#![cfg(all(feature = "std", not(feature = "shuttle"), not(loom)))]

use atomic_update::prelude::*;
use atomic_update::{ArithmeticError, Shared, Word};
use proptest::prelude::*;

proptest! {
    #[test]
    fn min_returns_and_installs_smaller_of_content_and_bound(initial in any::<i64>(), bound in any::<i64>()) {
        let cell: Shared<i64> = Shared::new(initial);
        let result: i64 = cell.min(bound);
        prop_assert_eq!(result, initial.min(bound));
        prop_assert_eq!(cell.load(), initial.min(bound));
        prop_assert!(cell.load() <= initial);
    }

    #[test]
    fn max_returns_and_installs_larger_of_content_and_bound(initial in any::<u32>(), bound in any::<u32>()) {
        let cell: Shared<u32> = Shared::new(initial);
        let result: u32 = cell.max(bound);
        prop_assert_eq!(result, initial.max(bound));
        prop_assert_eq!(cell.load(), initial.max(bound));
        prop_assert!(cell.load() >= initial);
    }

    #[test]
    fn min_with_nan_bound_installs_nan(initial in any::<f64>()) {
        let cell: Shared<f64> = Shared::new(initial);
        prop_assert!(cell.min(f64::NAN).is_nan());
        prop_assert!(cell.load().is_nan());
    }

    #[test]
    fn add_zero_leaves_content_bit_identical(initial in any::<f32>()) {
        let cell: Shared<f32> = Shared::new(initial);
        let before: u32 = cell.load().to_bits();
        // x + 0.0 keeps the bits of every x except -0.0, which becomes +0.0
        prop_assume!(before != (-0.0f32).to_bits());
        let result: f32 = cell.add(0.0);
        if initial.is_nan() {
            prop_assert!(result.is_nan());
        } else {
            prop_assert_eq!(result.to_bits(), before);
            prop_assert_eq!(cell.load().to_bits(), before);
        }
    }

    #[test]
    fn add_zero_is_identity_for_integers(initial in any::<isize>()) {
        let cell: Shared<isize> = Shared::new(initial);
        prop_assert_eq!(cell.add(0), initial);
        prop_assert_eq!(cell.load(), initial);
    }

    #[test]
    fn sequential_updates_match_direct_application(initial in any::<u64>(), steps in 0usize..32, multiplier in any::<u64>(), increment in any::<u64>()) {
        let step = |value: u64| value.wrapping_mul(multiplier).wrapping_add(increment);
        let cell: Shared<u64> = Shared::new(initial);

        let mut expected: u64 = initial;
        for _ in 0..steps {
            cell.update(step);
            expected = step(expected);
        }
        prop_assert_eq!(cell.load(), expected);
    }

    #[test]
    fn division_by_zero_never_changes_the_cell(initial in any::<i32>()) {
        let cell: Shared<i32> = Shared::new(initial);
        prop_assert_eq!(cell.divide(0), Err(ArithmeticError::DivisionByZero));
        prop_assert_eq!(cell.modulo(0), Err(ArithmeticError::DivisionByZero));
        prop_assert_eq!(cell.load(), initial);
    }

    #[test]
    fn division_matches_truncating_division(initial in any::<i64>(), divisor in any::<i64>()) {
        prop_assume!(divisor != 0 && !(initial == i64::MIN && divisor == -1));
        let cell: Shared<i64> = Shared::new(initial);
        prop_assert_eq!(cell.divide(divisor), Ok(initial / divisor));
        let quotient: i64 = initial / divisor;
        prop_assert_eq!(cell.modulo(divisor), Ok(quotient % divisor));
    }

    #[test]
    fn shifts_mask_amount_to_width(initial in any::<u32>(), amount in any::<u32>()) {
        let cell: Shared<u32> = Shared::new(initial);
        prop_assert_eq!(cell.shift_left(amount), initial << (amount % u32::BITS));

        let cell: Shared<i64> = Shared::new(initial as i64 - 1);
        prop_assert_eq!(cell.shift_right(amount), (initial as i64 - 1) >> (amount % i64::BITS));
    }

    #[test]
    fn float_cells_store_exact_bits(initial in any::<f64>(), replacement in any::<f64>()) {
        let cell: Shared<f64> = Shared::new(initial);
        prop_assert!(cell.load().bit_eq(initial));
        prop_assert!(cell.swap(replacement).bit_eq(initial));
        prop_assert!(cell.load().bit_eq(replacement));
    }
}

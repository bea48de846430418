//! Property-based tests for money operations.
//!
//! - Scale: explicit scale fixes the number of fraction digits
//! - Inverse: subtract undoes add at equal scales
//! - Division: quotient * divisor + remainder == amount, HALF_DOWN bound
//! - Multiplication: the exact product is rounded once
//! - Equality: value_eq is scale-insensitive, `==` is not
//! - Round trip: plain text and serde rebuild a strictly equal value

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Currency, MAX_SCALE, Money, RoundingPolicy};

/// Strategy to generate signed amounts with up to 6 fraction digits.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate signed amounts in cents.
fn cents() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate non-zero integer divisors.
fn integer_divisor() -> impl Strategy<Value = i64> {
    prop_oneof![-10_000i64..=-1, 1i64..=10_000]
}

/// Strategy to generate non-zero decimals with up to 15 significant digits
/// and up to `max_scale` fraction digits.
fn long_decimal(max_scale: u32) -> impl Strategy<Value = Decimal> {
    (
        prop_oneof![
            -1_000_000_000_000_000i64..=-1,
            1i64..=1_000_000_000_000_000
        ],
        0u32..=max_scale,
    )
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// `value`'s mantissa re-expressed at a larger `scale`.
fn mantissa_at(value: Decimal, scale: u32) -> i128 {
    value.mantissa() * 10_i128.pow(scale - value.scale())
}

fn policy() -> impl Strategy<Value = RoundingPolicy> {
    prop::sample::select(
        RoundingPolicy::ALL
            .into_iter()
            .filter(|p| *p != RoundingPolicy::Unnecessary)
            .collect::<Vec<_>>(),
    )
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn brl(amount: Decimal, rounding: RoundingPolicy) -> Money {
    Money::builder(amount)
        .scale(2)
        .currency(Currency::Brl)
        .rounding(rounding)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and explicit scale, plain_text() SHALL carry exactly
    /// `scale` fraction digits.
    #[test]
    fn prop_explicit_scale_fixes_fraction_digits(
        value in amount(),
        scale in 0u32..=10,
        rounding in policy(),
    ) {
        let money = Money::builder(value)
            .scale(scale)
            .currency(Currency::Usd)
            .rounding(rounding)
            .build()
            .unwrap();

        let text = money.plain_text();
        let digits = text.split_once('.').map_or(0, |(_, frac)| frac.len());
        prop_assert_eq!(u32::try_from(digits).unwrap(), scale);
        prop_assert_eq!(money.scale(), scale);
    }

    /// *For any* same-currency a, b at the same scale: (a + b) - b equals a.
    ///
    /// With mixed scales the intermediate sum is rounded to the left scale,
    /// so the inverse only holds for equal scales.
    #[test]
    fn prop_subtract_undoes_add(
        a in cents(),
        b in cents(),
        rounding in policy(),
    ) {
        let a = brl(a, rounding);
        let b = brl(b, rounding);

        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert!(back.value_eq(&a).unwrap());
        prop_assert_eq!(back, a);
    }

    /// *For any* amount and non-zero integer divisor, the division identity
    /// holds exactly and the remainder stays within half a unit of the
    /// divisor.
    #[test]
    fn prop_divide_by_integer_identity(
        value in cents(),
        divisor in integer_divisor(),
        rounding in policy(),
    ) {
        let money = brl(value, rounding);
        let division = money.divide_by_integer(divisor).unwrap();
        let divisor = Decimal::from(divisor);

        prop_assert_eq!(
            division.quotient.amount() * divisor + division.remainder.amount(),
            money.amount()
        );
        prop_assert_eq!(division.quotient.scale(), money.scale());
        prop_assert_eq!(division.remainder.scale(), money.scale());

        let unit = Decimal::new(1, money.scale());
        prop_assert!(division.remainder.amount().abs() * Decimal::TWO <= divisor.abs() * unit);
    }

    /// *For any* amount and non-zero decimal divisor with up to 26 fraction
    /// digits, the division identity holds exactly on mantissas.
    #[test]
    fn prop_divide_by_decimal_identity(
        value in cents(),
        divisor in long_decimal(26),
    ) {
        let money = brl(value, RoundingPolicy::HalfEven);
        // Quotients past 10^20 are out of range for this property.
        prop_assume!(
            money
                .amount()
                .checked_div(divisor)
                .is_some_and(|q| q.abs() < Decimal::from_i128_with_scale(10_i128.pow(20), 0))
        );

        let division = money.divide_by_decimal(divisor).unwrap();
        let scale = money.scale() + divisor.normalize().scale();

        prop_assert_eq!(
            division.quotient.amount().mantissa() * divisor.normalize().mantissa()
                + mantissa_at(division.remainder.amount(), scale),
            mantissa_at(money.amount(), scale)
        );
        prop_assert!(division.remainder.scale() >= money.scale());

        // HALF_DOWN leaves at most half a divisor behind.
        prop_assert!(
            mantissa_at(division.remainder.amount(), scale).unsigned_abs() * 2
                <= divisor.normalize().mantissa().unsigned_abs()
        );
    }

    /// *For any* amount, factor with up to 28 fraction digits and policy,
    /// multiply_by_decimal equals the exact product rounded once.
    #[test]
    fn prop_multiply_by_decimal_rounds_once(
        value in cents(),
        factor in long_decimal(28),
        rounding in policy(),
    ) {
        let money = brl(value, rounding);
        let factor = factor.normalize();
        let product = money.multiply_by_decimal(factor).unwrap();

        // The exact product has scale 2 + t. Compare against a reference
        // when that still fits a Decimal.
        let scale = money.scale() + factor.scale();
        if scale <= MAX_SCALE {
            let exact = Decimal::from_i128_with_scale(
                money.amount().mantissa() * factor.mantissa(),
                scale,
            );
            let expected = exact.round_dp_with_strategy(2, rounding.strategy().unwrap());
            prop_assert_eq!(product.amount(), expected);
        }
        prop_assert_eq!(product.scale(), 2);
    }

    /// *For any* amount, the same magnitude at scale 2 and scale 4
    /// value-equals but is not strictly equal.
    #[test]
    fn prop_value_eq_is_scale_insensitive(value in cents()) {
        let narrow = brl(value, RoundingPolicy::HalfDown);
        let wide = Money::builder(value)
            .scale(4)
            .currency(Currency::Brl)
            .rounding(RoundingPolicy::HalfDown)
            .build()
            .unwrap();

        prop_assert!(narrow.value_eq(&wide).unwrap());
        prop_assert!(wide.value_eq(&narrow).unwrap());
        prop_assert_ne!(narrow, wide);
    }

    /// *For any* value, rebuilding from plain_text() with the same currency,
    /// policy and explicit scale yields a strictly equal copy.
    #[test]
    fn prop_plain_text_round_trip(
        value in amount(),
        scale in 0u32..=8,
        currency in currency(),
        rounding in policy(),
    ) {
        let money = Money::builder(value)
            .scale(scale)
            .currency(currency)
            .rounding(rounding)
            .build()
            .unwrap();

        let copy = Money::builder(money.plain_text().as_str())
            .scale(money.scale())
            .currency(money.currency())
            .rounding(money.rounding())
            .build()
            .unwrap();
        prop_assert_eq!(copy, money);
    }

    /// *For any* value, the serde representation rebuilds a strictly equal
    /// copy.
    #[test]
    fn prop_serde_round_trip(
        value in amount(),
        currency in currency(),
        rounding in policy(),
    ) {
        let money = Money::of(value, currency, rounding).unwrap();
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, money);
    }

    /// *For any* value, negating twice is the identity and abs() is never
    /// negative.
    #[test]
    fn prop_negate_and_abs(value in amount(), rounding in policy()) {
        let money = Money::of(value, Currency::Kwd, rounding).unwrap();
        prop_assert_eq!(money.negate().negate(), money);
        prop_assert!(!money.abs().is_negative());
        prop_assert!(money.abs().value_eq(&money.negate().abs()).unwrap());
    }
}

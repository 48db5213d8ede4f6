//! Property-based tests for money values.
//!
//! - Scale invariance of equality
//! - Builder round trip
//! - Hash consistency
//! - Optional-field presence asymmetry

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use fiyat_shared::{Currency, CurrencyRegistry, Iso4217, Rounding};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::value::Money;
use crate::currency::Rate;

type DateMoney = Money<NaiveDate>;

/// Strategy to generate amounts with up to 6 fractional digits (-10,000,000 to 10,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|units| Decimal::new(units, 6))
}

/// Strategy to pick a currency with 0, 2, 3 or 4 fractional digits.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::JPY),
        Just(Currency::KWD),
        Just(Currency::CLF),
        Just(Currency::EUR),
    ]
}

/// Strategy to pick a rounding policy that always succeeds.
fn rounding() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::Up),
        Just(Rounding::Down),
        Just(Rounding::Ceiling),
        Just(Rounding::Floor),
        Just(Rounding::HalfUp),
        Just(Rounding::HalfDown),
        Just(Rounding::HalfEven),
    ]
}

/// Strategy to generate dates in 2020-2029.
fn date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy to generate a positive rate with up to 8 fractional digits.
fn rate() -> impl Strategy<Value = Rate<NaiveDate>> {
    (1i64..10_000_000_000i64, date()).prop_map(|(units, day)| {
        Rate::new(Currency::EUR, Currency::USD, Decimal::new(units, 8), day)
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Padding the input with trailing zeros never changes the value.
    #[test]
    fn prop_equality_is_scale_invariant(
        currency in currency(),
        amount in amount(),
        rounding in rounding(),
        padding in 0u32..6,
    ) {
        let mut padded = amount;
        padded.rescale(amount.scale() + padding);

        let a = DateMoney::of_rounded(currency, amount, rounding).unwrap();
        let b = DateMoney::of_rounded(currency, padded, rounding).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// The stored amount always carries exactly the currency's digits.
    #[test]
    fn prop_amount_has_canonical_scale(
        currency in currency(),
        amount in amount(),
        rounding in rounding(),
    ) {
        let money = DateMoney::of_rounded(currency, amount, rounding).unwrap();
        prop_assert_eq!(money.scale(), Iso4217.fraction_digits(currency).unwrap());
    }

    /// Seeding a builder from a value and building reproduces the value.
    #[test]
    fn prop_builder_round_trip(
        currency in currency(),
        amount in amount(),
        time in proptest::option::of(date()),
        rate in proptest::option::of(rate()),
    ) {
        let mut builder = DateMoney::builder().currency(currency).amount(amount);
        if let Some(time) = time {
            builder = builder.time(time);
        }
        if let Some(rate) = rate {
            builder = builder.rate(rate);
        }
        let money = builder.build().unwrap();

        let rebuilt = money.to_builder().build().unwrap();
        prop_assert_eq!(&rebuilt, &money);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&money));
    }

    /// A value with a time never equals the same value without one.
    #[test]
    fn prop_time_presence_asymmetry(
        currency in currency(),
        amount in amount(),
        time in date(),
    ) {
        let plain = DateMoney::of(currency, amount).unwrap();
        let timed = DateMoney::at(currency, amount, time).unwrap();
        prop_assert_ne!(&plain, &timed);
        prop_assert_ne!(&timed, &plain);
    }

    /// A value with a rate never equals the same value without one.
    #[test]
    fn prop_rate_presence_asymmetry(
        currency in currency(),
        amount in amount(),
        rate in rate(),
    ) {
        let plain = DateMoney::of(currency, amount).unwrap();
        let converted = DateMoney::converted(currency, amount, rate).unwrap();
        prop_assert_ne!(&plain, &converted);
        prop_assert_ne!(&converted, &plain);
    }
}

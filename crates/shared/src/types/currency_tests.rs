use super::*;
use rstest::rstest;

#[test]
fn test_currency_constants() {
    assert_eq!(Currency::USD.code(), "USD");
    assert_eq!(Currency::JPY.code(), "JPY");
    assert_eq!(Currency::KWD.code(), "KWD");
    assert_eq!(Currency::XAU.code(), "XAU");
}

#[test]
fn test_currency_display() {
    assert_eq!(format!("{}", Currency::USD), "USD");
    assert_eq!(format!("{}", Currency::IDR), "IDR");
    assert_eq!(format!("{}", Currency::EUR), "EUR");
    assert_eq!(format!("{:?}", Currency::SGD), "Currency(SGD)");
}

#[rstest]
#[case("USD", Currency::USD)]
#[case("usd", Currency::USD)]
#[case(" eur ", Currency::EUR)]
#[case("jPy", Currency::JPY)]
fn test_currency_from_str(#[case] input: &str, #[case] expected: Currency) {
    assert_eq!(Currency::from_str(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("US")]
#[case("USDX")]
#[case("U1D")]
#[case("€UR")]
fn test_currency_from_str_rejects_malformed(#[case] input: &str) {
    assert_eq!(
        Currency::from_str(input).unwrap_err(),
        CurrencyError::InvalidCode(input.to_string())
    );
}

#[test]
fn test_currency_parse_does_not_consult_registry() {
    // Well-formed but unassigned codes still parse.
    let currency = Currency::new("ABC").unwrap();
    assert_eq!(currency.code(), "ABC");
}

#[test]
fn test_currency_serde_as_code() {
    let json = serde_json::to_string(&Currency::TRY).unwrap();
    assert_eq!(json, "\"TRY\"");

    let parsed: Currency = serde_json::from_str("\"gbp\"").unwrap();
    assert_eq!(parsed, Currency::GBP);

    assert!(serde_json::from_str::<Currency>("\"POUND\"").is_err());
}

#[test]
fn test_currency_ordering_by_code() {
    let mut codes = vec![Currency::USD, Currency::AED, Currency::JPY];
    codes.sort();
    assert_eq!(codes, vec![Currency::AED, Currency::JPY, Currency::USD]);
}

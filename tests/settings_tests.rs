#![cfg(feature = "settings")]

use faktura_vat::core::*;
use faktura_vat::vat::*;
use rust_decimal_macros::dec;

#[test]
fn default_settings_json() {
    let json = Settings::default().to_json().unwrap();
    insta::assert_snapshot!("default_settings_json", json);
}

#[test]
fn json_roundtrip() {
    let mut settings = Settings::default();
    settings
        .country_vat_rates
        .add(CountryVat::new("Francja", dec!(20)))
        .unwrap();
    settings.seller = SellerDetails {
        name: "Moja Firma".into(),
        address: "ul. Krótka 2\n31-000 Kraków".into(),
        tax_id: Some("PL6760000000".into()),
        bank_account: None,
    };

    let json = settings.to_json().unwrap();
    let back = Settings::from_json(&json).unwrap();
    assert_eq!(back, settings);
    assert_eq!(back.country_vat_rates.resolve("Francja"), dec!(20));
}

#[test]
fn legacy_snapshot_with_numeric_rates() {
    // rates stored as JSON numbers, no `protected` flags, only one section
    let json = r#"{
        "countryVatRates": [
            { "name": "Polska", "vatRate": 8 },
            { "name": "Francja", "vatRate": 20 }
        ]
    }"#;
    let settings = Settings::from_json(json).unwrap();
    let rates = &settings.country_vat_rates;

    assert_eq!(rates.resolve(POLAND), dec!(8));
    assert_eq!(rates.resolve("Francja"), dec!(20));
    // missing baseline entries restored
    assert_eq!(rates.resolve(GERMANY), dec!(19));
    assert!(rates.contains(OTHER));
    assert!(rates.get(POLAND).unwrap().protected);
    assert!(!rates.get("Francja").unwrap().protected);
    // other sections defaulted
    assert_eq!(settings.default_product_names, ["Spoiler", "Wysyłka"]);
}

#[test]
fn stored_baseline_entries_still_protected() {
    let json = r#"{ "countryVatRates": [] }"#;
    let mut settings = Settings::from_json(json).unwrap();
    assert_eq!(settings.country_vat_rates.len(), 3);
    assert!(settings.country_vat_rates.remove(GERMANY).is_err());
}

#[test]
fn corrupt_json_is_an_error() {
    let err = Settings::from_json("{ not json").unwrap_err();
    assert!(matches!(err, FakturaError::Settings(_)));
}

#[test]
fn corrupt_json_recovers_to_defaults() {
    assert_eq!(Settings::from_json_or_default("{ not json"), Settings::default());
    assert_eq!(Settings::from_json_or_default(""), Settings::default());
    assert_eq!(
        Settings::from_json_or_default(r#"{ "countryVatRates": "oops" }"#),
        Settings::default()
    );
}

#[test]
fn duplicate_countries_in_storage_collapse() {
    let json = r#"{
        "countryVatRates": [
            { "name": "Czechy", "vatRate": "21" },
            { "name": "Czechy", "vatRate": "15" }
        ]
    }"#;
    let settings = Settings::from_json(json).unwrap();
    assert_eq!(settings.country_vat_rates.resolve("Czechy"), dec!(21));
    assert_eq!(settings.country_vat_rates.len(), 4);
}

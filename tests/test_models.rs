//! Profile defaults, price series ordering, and metric formatting.

mod common;

use common::date;
use stock_dashboard::locale::{Locale, ENGLISH};
use stock_dashboard::{
    CompanyProfile, MetricResult, PricePoint, PriceSeries, ProfileLookup, RawProfile,
    WindowReturn,
};

// ---------------------------------------------------------------------------
// CompanyProfile
// ---------------------------------------------------------------------------

#[test]
fn profile_keeps_provider_values() {
    let profile: CompanyProfile = RawProfile {
        name: Some("Tesla, Inc.".into()),
        sector: Some("Consumer Cyclical".into()),
        description: Some("Tesla designs electric vehicles.".into()),
    }
    .into();
    assert_eq!(profile.name, "Tesla, Inc.");
    assert_eq!(profile.sector, "Consumer Cyclical");
    assert_eq!(profile.description, "Tesla designs electric vehicles.");
}

#[test]
fn profile_missing_fields_get_placeholders() {
    let profile = CompanyProfile::from(RawProfile::default());
    assert_eq!(profile.name, ENGLISH.name_placeholder);
    assert_eq!(profile.sector, ENGLISH.sector_placeholder);
    assert_eq!(profile.description, ENGLISH.description_placeholder);
}

#[test]
fn profile_placeholders_in_spanish() {
    let profile = CompanyProfile::from_raw(
        RawProfile {
            name: Some("Apple Inc.".into()),
            ..RawProfile::default()
        },
        Locale::Spanish.strings(),
    );
    assert_eq!(profile.name, "Apple Inc.");
    assert_eq!(profile.sector, "Sector no disponible");
    assert_eq!(profile.description, "Descripción no disponible.");
}

#[test]
fn profile_blank_fields_count_as_missing() {
    let profile = CompanyProfile::from(RawProfile {
        name: Some("   ".into()),
        sector: Some(String::new()),
        description: Some(" Trimmed. ".into()),
    });
    assert_eq!(profile.name, ENGLISH.name_placeholder);
    assert_eq!(profile.sector, ENGLISH.sector_placeholder);
    assert_eq!(profile.description, "Trimmed.");
}

#[test]
fn with_description_replaces_only_description() {
    let profile = common::apple_profile().with_description("Otro texto".into());
    assert_eq!(profile.name, "Apple Inc.");
    assert_eq!(profile.sector, "Technology");
    assert_eq!(profile.description, "Otro texto");
}

#[test]
fn profile_lookup_is_found() {
    assert!(ProfileLookup::Found(common::apple_profile()).is_found());
    assert!(!ProfileLookup::Unavailable {
        reason: "timeout".into()
    }
    .is_found());
}

// ---------------------------------------------------------------------------
// PriceSeries
// ---------------------------------------------------------------------------

#[test]
fn series_is_sorted_by_date() {
    let s = PriceSeries::new(vec![
        PricePoint::new(date(2024, 1, 3), 3.0),
        PricePoint::new(date(2024, 1, 1), 1.0),
        PricePoint::new(date(2024, 1, 2), 2.0),
    ]);
    assert_eq!(s.closes(), vec![1.0, 2.0, 3.0]);
    assert_eq!(s.first().unwrap().date, date(2024, 1, 1));
    assert_eq!(s.last().unwrap().date, date(2024, 1, 3));
}

#[test]
fn series_collects_from_iterator() {
    let s: PriceSeries = vec![
        PricePoint::new(date(2024, 2, 2), 20.0),
        PricePoint::new(date(2024, 2, 1), 10.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(s.len(), 2);
    assert_eq!(s.first().unwrap().close, 10.0);
}

#[test]
fn empty_series() {
    let s = PriceSeries::empty();
    assert!(s.is_empty());
    assert!(s.first().is_none());
    assert!(s.close_range().is_none());
}

#[test]
fn close_range_finds_extremes() {
    let s = common::series(&[5.0, 2.0, 9.0, 4.0]);
    assert_eq!(s.close_range(), Some((2.0, 9.0)));
}

#[test]
fn series_serializes_as_array() {
    let s = common::series(&[1.5]);
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json, serde_json::json!([{"date": "2020-01-01", "close": 1.5}]));
}

// ---------------------------------------------------------------------------
// MetricResult / WindowReturn
// ---------------------------------------------------------------------------

#[test]
fn metric_display() {
    assert_eq!(MetricResult::Value(10.0).to_string(), "10.00");
    assert_eq!(MetricResult::Value(-3.456).to_string(), "-3.46");
    assert_eq!(MetricResult::Unavailable.to_string(), "N/A");
}

#[test]
fn metric_from_finite() {
    assert_eq!(MetricResult::from_finite(1.25), MetricResult::Value(1.25));
    assert_eq!(MetricResult::from_finite(f64::NAN), MetricResult::Unavailable);
    assert_eq!(
        MetricResult::from_finite(f64::INFINITY),
        MetricResult::Unavailable
    );
}

#[test]
fn metric_serializes_as_number_or_null() {
    assert_eq!(
        serde_json::to_value(MetricResult::Value(15.87)).unwrap(),
        serde_json::json!(15.87)
    );
    assert_eq!(
        serde_json::to_value(MetricResult::Unavailable).unwrap(),
        serde_json::Value::Null
    );
}

#[test]
fn window_labels() {
    let label = |years| {
        WindowReturn {
            years,
            cagr: MetricResult::Unavailable,
        }
        .label()
    };
    assert_eq!(label(1), "1 Year");
    assert_eq!(label(3), "3 Years");
    assert_eq!(label(5), "5 Years");
}

#[test]
fn window_labels_in_spanish() {
    let strings = Locale::Spanish.strings();
    assert_eq!(strings.window_label(1), "1 Año");
    assert_eq!(strings.window_label(3), "3 Años");
    assert_eq!(strings.window_label(5), "5 Años");
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[test]
fn locale_follows_translation_target() {
    assert_eq!(Locale::for_language(Some("es")), Locale::Spanish);
    assert_eq!(Locale::for_language(Some("ES")), Locale::Spanish);
    assert_eq!(Locale::for_language(Some("es-MX")), Locale::Spanish);
    assert_eq!(Locale::for_language(Some("fr")), Locale::English);
    assert_eq!(Locale::for_language(Some("en")), Locale::English);
    assert_eq!(Locale::for_language(None), Locale::English);
    assert_eq!(Locale::Spanish.code(), "es");
}

// File: crates/provider/tests/parse.rs
// Purpose: Decode recorded API responses without touching the network.

use chrono::{TimeZone, Utc};
use luft_provider::{parse_historical, parse_stations, Filter, ProviderError, Station};

const STATIONS: &str = include_str!("fixtures/stations.json");
const HISTORICAL: &str = include_str!("fixtures/historical.json");

#[test]
fn decodes_station_list() {
    let stations = parse_stations(STATIONS).expect("valid fixture");
    assert_eq!(stations.len(), 3);

    let first = &stations[0];
    assert_eq!(first.station, "Hansjordnesbukta");
    assert_eq!(first.area, "Tromsø");
    assert_eq!(first.station_type, "Urban traffic");
    assert_eq!(first.id, Some(7));
    assert_eq!(first.components.as_deref(), Some("NO2, PM10, PM2.5"));
}

#[test]
fn area_filter_is_exact() {
    let stations = parse_stations(STATIONS).unwrap();
    let from = Utc.with_ymd_and_hms(2016, 9, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2016, 12, 4, 0, 0, 0).unwrap();

    let tromso = Filter::new(["Tromsø"], ["PM10"], from, to);
    let names: Vec<&str> = stations
        .iter()
        .filter(|s| tromso.matches_area(s))
        .map(|s| s.station.as_str())
        .collect();
    assert_eq!(names, vec!["Hansjordnesbukta", "Tromsø Rådhus"]);

    let lowercase = Filter::new(["tromsø"], ["PM10"], from, to);
    assert!(!stations.iter().any(|s| lowercase.matches_area(s)));

    let everywhere = Filter::new(Vec::<String>::new(), ["PM10"], from, to);
    assert!(stations.iter().all(|s| everywhere.matches_area(s)));
}

#[test]
fn decodes_historical_results_in_order() {
    let results = parse_historical(HISTORICAL).expect("valid fixture");
    assert_eq!(results.len(), 2);

    let pm10 = &results[0];
    assert_eq!(pm10.station.station, "Hansjordnesbukta");
    assert_eq!(pm10.component, "PM10");
    assert_eq!(pm10.unit, "µg/m³");
    assert_eq!(pm10.measurements.len(), 3);

    let values: Vec<f64> = pm10.measurements.iter().map(|m| m.value).collect();
    assert_eq!(values, vec![12.5, 14.0, -1.2], "values pass through unchecked");
    assert!(!pm10.measurements[2].quality_controlled);

    // 01:00+01:00 is midnight UTC.
    let midnight = Utc.with_ymd_and_hms(2016, 9, 1, 0, 0, 0).unwrap();
    assert_eq!(pm10.measurements[0].epoch_seconds(), midnight.timestamp() as f64);

    assert!(results[1].measurements.is_empty());
    assert_eq!(results[1].station.latitude, Some(69.0));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let err = parse_historical("{\"not\": \"a list\"}").unwrap_err();
    assert!(matches!(err, ProviderError::Decode { .. }));
    assert!(err.to_string().contains("historical measurements"));
}

#[test]
fn named_station_has_empty_metadata() {
    let s = Station::named("A");
    assert_eq!(s.station, "A");
    assert!(s.area.is_empty());
    assert_eq!(s.id, None);
}

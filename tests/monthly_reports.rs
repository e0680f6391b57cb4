// SPDX-License-Identifier: MPL-2.0

//! End-to-end run: raw export lines through the archive into every report.

use metstat::archive::{Sensor, WeatherArchive};
use metstat::report;
use metstat::stats;
use statrs::statistics::Statistics;

/// Builds an export row with real values in the four read fields and filler
/// elsewhere.
fn row(date: &str, time: &str, wind: f64, solar: f64, temperature: f64) -> String {
    let mut fields = vec![String::new(); 18];
    fields[0] = format!("{date} {time}");
    fields[10] = wind.to_string();
    fields[11] = solar.to_string();
    fields[17] = temperature.to_string();
    fields.join(",")
}

#[test]
fn reports_over_an_ingested_log() {
    let march_2015 = [
        (1, 10.0, 3600.0, 21.5),
        (2, 14.0, 5400.0, 23.0),
        (3, 12.0, 7200.0, 22.0),
    ];

    let mut log = String::from("WAST,DP,Dta,Dts,EV,QFE,QFF,QNH,RF,RH,S,SR,ST1,ST2,ST3,ST4,Sx,T\n");
    for (day, wind, solar, temperature) in march_2015 {
        log.push_str(&row(&format!("{day}/3/2015"), "9:00", wind, solar, temperature));
        log.push('\n');
    }
    log.push_str(&row("1/6/2015", "9:00", 5.0, 1800.0, 12.0));
    log.push('\n');
    log.push_str(&row("1/3/2014", "9:00", 8.0, 2700.0, 19.0));
    log.push('\n');

    let mut archive = WeatherArchive::new();
    let stats_counts = archive.ingest(log.as_bytes()).unwrap();
    assert_eq!(stats_counts.ingested, 5);
    assert_eq!(stats_counts.skipped, 1);
    assert_eq!(archive.len(), 5);

    // The per-query tree holds the month's distinct wind samples.
    let wind_tree = archive.monthly_samples(Sensor::WindSpeed, 3, 2015);
    assert_eq!(wind_tree.len(), 3);

    let winds = [10.0, 14.0, 12.0];
    let summary = report::wind_speed_summary(&archive, 3, 2015).unwrap();
    assert!((summary.mean - Statistics::mean(winds.iter())).abs() < 1e-9);
    assert!((summary.std_dev - Statistics::std_dev(winds.iter())).abs() < 1e-9);

    let rendered = report::render_wind_summary(3, 2015, Some(summary));
    assert!(rendered.starts_with("March 2015:"));
    assert!(rendered.contains("km/h"));

    // Temperature rows cover the whole year; only March and June have data.
    let temperature_rows = report::temperature_by_month(&archive, 2015);
    let with_data: Vec<u32> = temperature_rows
        .iter()
        .filter(|(_, summary)| summary.is_some())
        .map(|(month, _)| *month)
        .collect();
    assert_eq!(with_data, [3, 6]);

    // Correlations for March span 2014 and 2015.
    let correlations = report::correlations_for_month(&archive, 3).unwrap();
    for coefficient in [
        correlations.wind_temperature,
        correlations.wind_solar,
        correlations.temperature_solar,
    ] {
        assert!(coefficient.is_finite());
        assert!(coefficient.abs() <= 1.0 + 1e-9);
    }
    assert_eq!(report::correlations_for_month(&archive, 2), None);

    // Solar totals convert the monthly sums to kWh/m².
    let solar_rows = report::solar_by_month(&archive, 2015);
    let march_total = solar_rows[2].1.unwrap();
    assert!((march_total - (3600.0 + 5400.0 + 7200.0) / 3.6).abs() < 1e-9);
    assert_eq!(solar_rows[0].1, None);

    // The year overview renders one CSV line per month under the year.
    let climate = report::climate_by_month(&archive, 2015);
    let mut csv = Vec::new();
    report::write_climate_csv(&mut csv, 2015, &climate).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "2015");
    assert!(lines[3].starts_with("March,"));
    assert_eq!(lines[1], "January,No Data");

    // A re-ingested duplicate timestamp replaces rather than accumulates.
    let replacement = row("1/3/2015", "9:00", 40.0, 3600.0, 21.5);
    archive.ingest(replacement.as_bytes()).unwrap();
    assert_eq!(archive.len(), 5);
    let updated = archive.monthly_samples(Sensor::WindSpeed, 3, 2015);
    let mut largest = f64::MIN;
    updated.in_order(|sample| largest = largest.max(sample.value()));
    assert_eq!(largest, 40.0);
    assert_eq!(stats::total(&updated), 40.0 + 14.0 + 12.0);
}

#![allow(clippy::unwrap_used)]

use chrono::Month;
use rust_decimal_macros::dec;

use super::*;

fn actual(month: i32, category: &str, amount: Decimal) -> ExpenditureRecord {
    ExpenditureRecord::new(month, category, amount)
}

fn forecast(month: i32, category: &str, amount: Decimal) -> ForecastRecord {
    ForecastRecord::new(month, category, amount)
}

fn labels(series: &MonthSeries) -> Vec<String> {
    series.entries().iter().map(|e| e.label().to_string()).collect()
}

// ── MonthLabel ────────────────────────────────────────────────

#[test]
fn test_label_first_and_last_month() {
    assert_eq!(MonthLabel::from_number(1), MonthLabel::Named(Month::January));
    assert_eq!(MonthLabel::from_number(12), MonthLabel::Named(Month::December));
    assert_eq!(MonthLabel::from_number(1).to_string(), "January");
    assert_eq!(MonthLabel::from_number(12).to_string(), "December");
}

#[test]
fn test_label_out_of_range_passes_through() {
    assert_eq!(MonthLabel::from_number(13), MonthLabel::Raw(13));
    assert_eq!(MonthLabel::from_number(0), MonthLabel::Raw(0));
    assert_eq!(MonthLabel::from_number(-1), MonthLabel::Raw(-1));
    assert_eq!(MonthLabel::from_number(300), MonthLabel::Raw(300));
    assert_eq!(MonthLabel::from_number(13).to_string(), "13");
}

#[test]
fn test_label_serializes_name_or_number() {
    assert_eq!(
        serde_json::to_value(MonthLabel::from_number(3)).unwrap(),
        serde_json::json!("March")
    );
    assert_eq!(
        serde_json::to_value(MonthLabel::from_number(13)).unwrap(),
        serde_json::json!(13)
    );
}

// ── MonthSeries::build ────────────────────────────────────────

#[test]
fn test_build_empty() {
    let series = MonthSeries::build(&[], &[]);
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.categories().is_empty());
}

#[test]
fn test_build_reference_example() {
    let actuals = [actual(1, "Food", dec!(100))];
    let forecasts = [forecast(1, "Food", dec!(150)), forecast(2, "Rent", dec!(900))];
    let series = MonthSeries::build(&actuals, &forecasts);

    assert_eq!(
        serde_json::to_value(&series).unwrap(),
        serde_json::json!([
            {"month": "January", "Food": 150.0},
            {"month": "February", "Rent": 900.0},
        ])
    );
}

#[test]
fn test_forecast_overwrites_actual() {
    let actuals = [actual(5, "Travel", dec!(40)), actual(5, "Food", dec!(12.50))];
    let forecasts = [forecast(5, "Travel", dec!(75))];
    let series = MonthSeries::build(&actuals, &forecasts);

    let may = &series.entries()[0];
    assert_eq!(may.get("Travel"), Some(dec!(75)));
    assert_eq!(may.get("Food"), Some(dec!(12.50)));
    // Overwrite keeps the original category position.
    assert_eq!(may.amounts()[0].0, "Travel");
}

#[test]
fn test_forecast_adds_category_without_erasing() {
    let actuals = [actual(3, "Food", dec!(10))];
    let forecasts = [forecast(3, "Rent", dec!(900))];
    let series = MonthSeries::build(&actuals, &forecasts);

    assert_eq!(series.len(), 1);
    let march = &series.entries()[0];
    assert_eq!(march.amounts().len(), 2);
    assert_eq!(march.get("Food"), Some(dec!(10)));
    assert_eq!(march.get("Rent"), Some(dec!(900)));
}

#[test]
fn test_later_actual_overwrites_earlier_actual() {
    let actuals = [actual(4, "Food", dec!(10)), actual(4, "Food", dec!(20))];
    let series = MonthSeries::build(&actuals, &[]);
    assert_eq!(series.entries()[0].get("Food"), Some(dec!(20)));
    assert_eq!(series.entries()[0].amounts().len(), 1);
}

#[test]
fn test_month_order_is_first_seen() {
    let actuals = [
        actual(3, "Food", dec!(1)),
        actual(1, "Food", dec!(1)),
        actual(3, "Rent", dec!(1)),
    ];
    let forecasts = [forecast(12, "Food", dec!(1)), forecast(1, "Rent", dec!(1))];
    let series = MonthSeries::build(&actuals, &forecasts);
    assert_eq!(labels(&series), ["March", "January", "December"]);
}

#[test]
fn test_actual_months_precede_forecast_only_months() {
    let actuals = [actual(6, "Food", dec!(1))];
    let forecasts = [forecast(2, "Food", dec!(1)), forecast(6, "Food", dec!(2))];
    let series = MonthSeries::build(&actuals, &forecasts);
    assert_eq!(labels(&series), ["June", "February"]);
}

#[test]
fn test_out_of_range_months_are_distinct_entries() {
    let actuals = [
        actual(13, "Food", dec!(1)),
        actual(14, "Food", dec!(2)),
        actual(13, "Rent", dec!(3)),
    ];
    let series = MonthSeries::build(&actuals, &[]);
    assert_eq!(labels(&series), ["13", "14"]);
    assert_eq!(series.entries()[0].amounts().len(), 2);
    assert_eq!(
        serde_json::to_value(&series).unwrap()[1],
        serde_json::json!({"month": 14, "Food": 2.0})
    );
}

#[test]
fn test_category_named_month_replaces_label() {
    let actuals = [actual(1, "month", dec!(5)), actual(1, "Food", dec!(2))];
    let series = MonthSeries::build(&actuals, &[]);
    assert_eq!(
        serde_json::to_string(&series).unwrap(),
        r#"[{"month":5.0,"Food":2.0}]"#
    );
    assert_eq!(series.entries()[0].label(), MonthLabel::from_number(1));
}

#[test]
fn test_entry_total() {
    let actuals = [actual(1, "Food", dec!(10.25)), actual(1, "Rent", dec!(900))];
    let forecasts = [forecast(1, "Food", dec!(20))];
    let series = MonthSeries::build(&actuals, &forecasts);
    assert_eq!(series.entries()[0].total(), dec!(920));
}

#[test]
fn test_categories_first_seen_across_months() {
    let actuals = [
        actual(1, "Rent", dec!(1)),
        actual(2, "Food", dec!(1)),
        actual(2, "Rent", dec!(1)),
    ];
    let forecasts = [forecast(3, "Travel", dec!(1))];
    let series = MonthSeries::build(&actuals, &forecasts);
    assert_eq!(series.categories(), ["Rent", "Food", "Travel"]);
}

#[test]
fn test_missing_category_lookup() {
    let series = MonthSeries::build(&[actual(1, "Food", dec!(1))], &[]);
    assert_eq!(series.entries()[0].get("Rent"), None);
}

#![forbid(unsafe_code)]
use semainier::clock::{duration, parse_clock, split_range};
use semainier::EngineError;

#[test]
fn parse_clock_morning_and_afternoon() {
    assert_eq!(parse_clock("8.00 am").unwrap(), 8.0);
    assert_eq!(parse_clock("4.30 pm").unwrap(), 16.5);
}

#[test]
fn parse_clock_noon_and_midnight() {
    assert_eq!(parse_clock("12.00 am").unwrap(), 0.0);
    assert_eq!(parse_clock("12.00 pm").unwrap(), 12.0);
}

#[test]
fn parse_clock_fractional_minutes() {
    // 9h45 = 9.75 en heures fractionnaires
    assert_eq!(parse_clock("9.45 am").unwrap(), 9.75);
}

#[test]
fn parse_clock_rejects_missing_period() {
    assert!(matches!(parse_clock("8.00"), Err(EngineError::Format(_))));
}

#[test]
fn parse_clock_rejects_unknown_period() {
    assert!(matches!(
        parse_clock("8.00 AM"),
        Err(EngineError::Format(_))
    ));
}

#[test]
fn parse_clock_rejects_non_numeric_fields() {
    assert!(matches!(
        parse_clock("huit.00 am"),
        Err(EngineError::Format(_))
    ));
    assert!(matches!(
        parse_clock("8.xx pm"),
        Err(EngineError::Format(_))
    ));
}

#[test]
fn split_range_trims_both_sides() {
    let (start, end) = split_range("8.00 am - 4.00 pm").unwrap();
    assert_eq!(start, "8.00 am");
    assert_eq!(end, "4.00 pm");
}

#[test]
fn split_range_rejects_missing_separator() {
    assert!(matches!(
        split_range("8.00 am 4.00 pm"),
        Err(EngineError::Format(_))
    ));
}

#[test]
fn duration_of_standard_day() {
    assert_eq!(duration("8.00 am - 4.00 pm").unwrap(), 8.0);
}

#[test]
fn overnight_duration_stays_negative() {
    // plage nocturne : restituée telle quelle, pas de normalisation
    let d = duration("10.00 pm - 6.00 am").unwrap();
    assert_eq!(d, -16.0);
}

#![allow(non_snake_case)]

use super::*;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_less_than_warn() {
    assert!(LogLevel::Trace < LogLevel::Warn);
}

#[test]
fn LogLevel___default___is_warn() {
    assert_eq!(LogLevel::default(), LogLevel::Warn);
}

#[test]
fn LogLevel___from_u8___out_of_range_is_off() {
    assert_eq!(LogLevel::from_u8(2), LogLevel::Info);
    assert_eq!(LogLevel::from_u8(200), LogLevel::Off);
}

#[test]
fn LogLevel___raised_by___steps_towards_trace() {
    assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.raised_by(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised_by(2), LogLevel::Debug);
    assert_eq!(LogLevel::Warn.raised_by(9), LogLevel::Trace);
}

#[test]
fn LogLevel___from_str___is_case_insensitive() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn LogLevel___display___matches_from_str() {
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Off,
    ] {
        assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
    }
}

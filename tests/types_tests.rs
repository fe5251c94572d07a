//! Types Module Tests
//!
//! Tests for domain types (Frequency, Volume, Direction, IncrementSelector, etc.)
//! Run with: cargo test --test types_tests

use clock_radio::types::{
    Direction, Frequency, IncrementSelector, Period, RangeError, TimeFormat, Volume,
};

// =============================================================================
// Frequency Tests
// =============================================================================

#[test]
fn test_frequency_from_mhz_valid() {
    assert!(Frequency::from_mhz(88.0).is_ok()); // Min
    assert!(Frequency::from_mhz(108.0).is_ok()); // Max
    assert!(Frequency::from_mhz(107.3).is_ok());
}

#[test]
fn test_frequency_from_mhz_invalid() {
    assert_eq!(Frequency::from_mhz(87.9), Err(RangeError::Frequency(87.9)));
    assert_eq!(Frequency::from_mhz(108.1), Err(RangeError::Frequency(108.1)));
    assert!(Frequency::from_mhz(f32::NAN).is_err());
}

#[test]
fn test_frequency_rounds_to_channel() {
    assert_eq!(Frequency::from_mhz(107.3).unwrap().as_tenths(), 1073);
    assert_eq!(Frequency::from_mhz(99.94).unwrap().as_tenths(), 999);
    assert_eq!(Frequency::from_mhz(99.96).unwrap().as_tenths(), 1000);
}

#[test]
fn test_frequency_from_tenths() {
    assert!(Frequency::from_tenths(880).is_some());
    assert!(Frequency::from_tenths(1080).is_some());
    assert!(Frequency::from_tenths(879).is_none());
    assert!(Frequency::from_tenths(1081).is_none());
}

#[test]
fn test_frequency_as_mhz() {
    let freq = Frequency::from_tenths(1011).unwrap();
    assert!((freq.as_mhz_f32() - 101.1).abs() < 1e-4);
}

#[test]
fn test_frequency_display_is_zero_padded() {
    assert_eq!(Frequency::LOWEST.to_string(), "088.0");
    assert_eq!(Frequency::from_tenths(1073).unwrap().to_string(), "107.3");
}

// =============================================================================
// Volume Tests
// =============================================================================

#[test]
fn test_volume_bounds() {
    assert_eq!(Volume::new(0).map(Volume::level), Some(0));
    assert_eq!(Volume::new(15).map(Volume::level), Some(15));
    assert!(Volume::new(16).is_none());
}

#[test]
fn test_volume_try_from_rejects_out_of_range() {
    assert_eq!(Volume::try_from(-1), Err(RangeError::Volume(-1)));
    assert_eq!(Volume::try_from(16), Err(RangeError::Volume(16)));
    assert_eq!(Volume::try_from(7).unwrap().level(), 7);
}

#[test]
fn test_volume_default_is_silent() {
    assert_eq!(Volume::default().level(), 0);
}

// =============================================================================
// Period / Format Tests
// =============================================================================

#[test]
fn test_period_toggle() {
    assert_eq!(Period::Am.toggle(), Period::Pm);
    assert_eq!(Period::Pm.toggle(), Period::Am);
    assert_eq!(Period::Pm.as_str(), "PM");
}

#[test]
fn test_format_default_is_12h() {
    assert_eq!(TimeFormat::default(), TimeFormat::H12);
}

// =============================================================================
// Direction Tests
// =============================================================================

#[test]
fn test_direction_from_switch() {
    assert_eq!(Direction::from_switch(false), Direction::Increase);
    assert_eq!(Direction::from_switch(true), Direction::Decrease);
}

#[test]
fn test_direction_signed() {
    assert_eq!(Direction::Increase.signed(5), 5);
    assert_eq!(Direction::Decrease.signed(5), -5);
    assert_eq!(Direction::Decrease.sign_char(), '-');
}

// =============================================================================
// Increment Selector Tests
// =============================================================================

#[test]
fn test_increment_starts_at_one() {
    assert_eq!(IncrementSelector::new().value(), 1);
    assert_eq!(IncrementSelector::default(), IncrementSelector::new());
}

#[test]
fn test_increment_cycle_order() {
    let mut inc = IncrementSelector::new();
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(inc.value());
        inc = inc.cycle();
    }
    assert_eq!(seen, vec![1, 2, 5, 10, 30, 1]);
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn test_range_error_display() {
    assert_eq!(
        RangeError::Volume(16).to_string(),
        "volume 16 outside 0..=15"
    );
    assert!(RangeError::Frequency(120.0)
        .to_string()
        .starts_with("frequency 120 MHz"));
}

//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --test config_tests

use clock_radio::config::*;
use clock_radio::types::{Frequency, Volume};

// =============================================================================
// Timing Tests
// =============================================================================

#[test]
fn tick_is_one_second() {
    assert_eq!(TICK_PERIOD_MS, 1_000);
}

#[test]
fn worst_case_retry_fits_in_one_tick() {
    // Backoff doubles after each failed attempt
    let mut total = 0u32;
    let mut backoff = TUNER_RETRY_BACKOFF_MS;
    for _ in 1..TUNER_MAX_ATTEMPTS {
        total += backoff;
        backoff *= 2;
    }
    assert_eq!(total, 35);
    assert!(u64::from(total) < TICK_PERIOD_MS);
}

#[test]
fn debounce_shorter_than_tick() {
    assert!(BUTTON_DEBOUNCE_MS < TICK_PERIOD_MS);
}

// =============================================================================
// Tuner Tests
// =============================================================================

#[test]
fn tuner_address_is_sequential_port() {
    assert_eq!(TUNER_I2C_ADDR, 0x10);
}

#[test]
fn tuner_transfer_sizes() {
    assert_eq!(TUNER_IMAGE_LEN, 8);
    assert_eq!(TUNER_STATUS_LEN, 256);
}

#[test]
fn alarm_volume_is_maximum() {
    assert_eq!(ALARM_VOLUME, Volume::MAX);
}

// =============================================================================
// Boot Defaults
// =============================================================================

#[test]
fn boot_station_is_in_band() {
    let freq = default_frequency().expect("default station out of band");
    assert_eq!(freq.as_tenths(), DEFAULT_FREQUENCY_TENTHS);
    assert!(DEFAULT_FREQUENCY_TENTHS >= Frequency::MIN_TENTHS);
    assert!(DEFAULT_FREQUENCY_TENTHS <= Frequency::MAX_TENTHS);
}

#[test]
fn boot_volume_valid_and_muted() {
    assert!(default_volume().is_some());
    assert!(DEFAULT_MUTED);
}

#[test]
fn boot_time_valid_for_12h() {
    assert!((1..=12).contains(&DEFAULT_HOUR));
    assert!(DEFAULT_MINUTE < 60);
    assert!(DEFAULT_SECOND < 60);
}

// =============================================================================
// Edit Step Tests
// =============================================================================

#[test]
fn increment_steps_ascending_from_one() {
    assert_eq!(INCREMENT_STEPS[0], 1);
    assert!(INCREMENT_STEPS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(INCREMENT_STEPS, [1, 2, 5, 10, 30]);
}

#[test]
fn snooze_bounds() {
    assert_eq!(SNOOZE_MIN_MINUTES, 1);
    assert_eq!(SNOOZE_MAX_MINUTES, 60);
    assert!((SNOOZE_MIN_MINUTES..=SNOOZE_MAX_MINUTES).contains(&DEFAULT_SNOOZE_MINUTES));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn display_geometry() {
    assert_eq!(DISPLAY_WIDTH, 128);
    assert_eq!(DISPLAY_HEIGHT, 64);
    assert_eq!(DISPLAY_I2C_ADDR, 0x3C);
}

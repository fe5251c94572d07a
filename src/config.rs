//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the clock radio.
//! Bus addresses, boot defaults and timing policy are
//! centralized here. Nothing is persisted; every value below is what the
//! appliance returns to after a power cycle.

use crate::types::{Frequency, Period, TimeFormat, Volume};

/// Control loop period (one clock second)
pub const TICK_PERIOD_MS: u64 = 1_000;

/// I2C bus frequency for the FM tuner
pub const TUNER_I2C_FREQUENCY_HZ: u32 = 200_000;

/// FM tuner I2C address (sequential register access)
pub const TUNER_I2C_ADDR: u8 = 0x10;

/// I2C bus frequency for the display
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

/// SSD1306 OLED I2C address
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Length of the configuration image written to the tuner
pub const TUNER_IMAGE_LEN: usize = 8;

/// Length of the status read-back from the tuner
pub const TUNER_STATUS_LEN: usize = 256;

/// Bus attempts per tuner transaction before giving up
pub const TUNER_MAX_ATTEMPTS: u8 = 4;

/// Delay before the first retry; doubles for every further retry
pub const TUNER_RETRY_BACKOFF_MS: u32 = 5;

/// Step sizes the increment selector cycles through
pub const INCREMENT_STEPS: [u8; 5] = [1, 2, 5, 10, 30];

/// Shortest configurable snooze
pub const SNOOZE_MIN_MINUTES: u8 = 1;

/// Longest configurable snooze
pub const SNOOZE_MAX_MINUTES: u8 = 60;

/// Snooze length at boot
pub const DEFAULT_SNOOZE_MINUTES: u8 = 5;

/// Volume the tuner is driven to while the alarm rings
pub const ALARM_VOLUME: u8 = 15;

/// Boot time: hour
pub const DEFAULT_HOUR: u8 = 11;

/// Boot time: minute
pub const DEFAULT_MINUTE: u8 = 22;

/// Boot time: second
pub const DEFAULT_SECOND: u8 = 50;

/// Boot time: period
pub const DEFAULT_PERIOD: Period = Period::Am;

/// Boot display format
pub const DEFAULT_FORMAT: TimeFormat = TimeFormat::H12;

/// Boot station in tenths of a MHz (107.3 MHz)
pub const DEFAULT_FREQUENCY_TENTHS: u16 = 1_073;

/// Boot volume
pub const DEFAULT_VOLUME: u8 = 0;

/// Boot mute state
pub const DEFAULT_MUTED: bool = true;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Build the boot station
#[must_use]
pub const fn default_frequency() -> Option<Frequency> {
    Frequency::from_tenths(DEFAULT_FREQUENCY_TENTHS)
}

/// Build the boot volume
#[must_use]
pub const fn default_volume() -> Option<Volume> {
    Volume::new(DEFAULT_VOLUME)
}

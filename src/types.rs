//! Shared types used across the clock radio firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at construction time and provide type safety throughout the codebase.

use core::fmt;
#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::config::INCREMENT_STEPS;

/// Value rejected by a validated setter
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeError {
    /// Volume outside 0..=15
    Volume(i32),
    /// Frequency outside 88.0..=108.0 MHz (or not a number)
    Frequency(f32),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume(v) => write!(f, "volume {v} outside 0..={}", Volume::MAX),
            Self::Frequency(mhz) => write!(
                f,
                "frequency {mhz} MHz outside {}..={} MHz",
                Frequency::MIN_MHZ,
                Frequency::MAX_MHZ
            ),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RangeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Volume(v) => defmt::write!(f, "Volume({})", v),
            Self::Frequency(mhz) => defmt::write!(f, "Frequency({} MHz)", mhz),
        }
    }
}

/// FM broadcast frequency, stored in tenths of a MHz
///
/// Holding an integer count of 100 kHz channels keeps repeated stepping
/// free of float drift; conversion from MHz rounds to the nearest channel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u16);

impl Frequency {
    /// Lowest tunable frequency in MHz
    pub const MIN_MHZ: f32 = 88.0;

    /// Highest tunable frequency in MHz
    pub const MAX_MHZ: f32 = 108.0;

    /// Lowest tunable frequency in tenths of a MHz
    pub const MIN_TENTHS: u16 = 880;

    /// Highest tunable frequency in tenths of a MHz
    pub const MAX_TENTHS: u16 = 1_080;

    /// Bottom of the band (88.0 MHz)
    pub const LOWEST: Self = Self(Self::MIN_TENTHS);

    /// Create from tenths of a MHz, returns None if out of band
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Option<Self> {
        if tenths >= Self::MIN_TENTHS && tenths <= Self::MAX_TENTHS {
            Some(Self(tenths))
        } else {
            None
        }
    }

    /// Create from MHz
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Frequency`] unless `mhz` lies in 88.0..=108.0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_mhz(mhz: f32) -> Result<Self, RangeError> {
        if !(Self::MIN_MHZ..=Self::MAX_MHZ).contains(&mhz) {
            return Err(RangeError::Frequency(mhz));
        }
        Ok(Self((mhz * 10.0).round() as u16))
    }

    /// Get the frequency in tenths of a MHz
    #[must_use]
    pub const fn as_tenths(self) -> u16 {
        self.0
    }

    /// Get the frequency in MHz as floating point
    #[must_use]
    pub fn as_mhz_f32(self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self} MHz)")
    }
}

/// Zero-padded like the front panel: `088.0`, `107.3`
impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}.{} MHz", self.0 / 10, self.0 % 10);
    }
}

/// Tuner volume (0 = silent, 15 = maximum)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Volume(u8);

impl Volume {
    /// Maximum volume step
    pub const MAX: u8 = 15;

    /// Number of distinct volume steps
    pub const STEPS: i32 = Self::MAX as i32 + 1;

    /// Create a new volume, returns None above [`Volume::MAX`]
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the volume step
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Volume {
    type Error = RangeError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        u8::try_from(level)
            .ok()
            .and_then(Self::new)
            .ok_or(RangeError::Volume(level))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Volume {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "V{}", self.0);
    }
}

/// Half of the day in 12-hour format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Period {
    /// Ante meridiem
    #[default]
    Am,
    /// Post meridiem
    Pm,
}

impl Period {
    /// The other half of the day
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Period {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Hour representation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// 1..=12 with AM/PM
    #[default]
    H12,
    /// 0..=23
    H24,
}

#[cfg(feature = "embedded")]
impl defmt::Format for TimeFormat {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::H12 => defmt::write!(f, "12h"),
            Self::H24 => defmt::write!(f, "24h"),
        }
    }
}

/// Edit direction selected by the panel switch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Switch low
    #[default]
    Increase,
    /// Switch high
    Decrease,
}

impl Direction {
    /// Map the sampled switch level to a direction
    #[must_use]
    pub const fn from_switch(high: bool) -> Self {
        if high {
            Self::Decrease
        } else {
            Self::Increase
        }
    }

    /// Apply the direction to a step size
    #[must_use]
    pub const fn signed(self, amount: i32) -> i32 {
        match self {
            Self::Increase => amount,
            Self::Decrease => -amount,
        }
    }

    /// `+` or `-` for panel labels
    #[must_use]
    pub const fn sign_char(self) -> char {
        match self {
            Self::Increase => '+',
            Self::Decrease => '-',
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Direction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Increase => defmt::write!(f, "+"),
            Self::Decrease => defmt::write!(f, "-"),
        }
    }
}

/// Cyclic step size shared by every numeric edit screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IncrementSelector {
    index: u8,
}

impl IncrementSelector {
    /// Start at the smallest step
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current step size
    #[must_use]
    pub const fn value(self) -> u8 {
        INCREMENT_STEPS[self.index as usize % INCREMENT_STEPS.len()]
    }

    /// Advance to the next step size, wrapping to the first
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cycle(self) -> Self {
        Self {
            index: ((self.index as usize + 1) % INCREMENT_STEPS.len()) as u8,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for IncrementSelector {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Inc:{}", self.value());
    }
}

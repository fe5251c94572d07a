//! Time of Day Arithmetic
//!
//! `ClockTime` carries the hour/minute/period triple shared by the clock and
//! the alarm. All edits are format aware: in 12-hour mode the hour stays in
//! 1..=12 and crossing the 12 boundary flips AM/PM, in 24-hour mode the hour
//! is reduced modulo 24 and the period is ignored.

use crate::config::{DEFAULT_FORMAT, DEFAULT_HOUR, DEFAULT_MINUTE, DEFAULT_PERIOD, DEFAULT_SECOND};
use crate::types::{Direction, Period, TimeFormat};

/// Hour, minute and period of a clock reading or alarm setting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    /// 1..=12 in 12-hour format, 0..=23 in 24-hour format
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// Only meaningful in 12-hour format
    pub period: Period,
}

impl ClockTime {
    /// Create a time of day
    #[must_use]
    pub const fn new(hour: u8, minute: u8, period: Period) -> Self {
        Self {
            hour,
            minute,
            period,
        }
    }

    /// Move the hour by `amount` in `direction` (returns new time)
    ///
    /// In 12-hour format the period flips using the pre-adjustment hour:
    /// increasing flips when the hour goes from below 12 to 12 or above,
    /// decreasing flips when it goes from above 1 to 0 or below, or from 12
    /// or above to 11 or below.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn adjust_hour(self, format: TimeFormat, direction: Direction, amount: u8) -> Self {
        let previous = i32::from(self.hour);
        let raw = previous + direction.signed(i32::from(amount));

        match format {
            TimeFormat::H24 => Self {
                hour: raw.rem_euclid(24) as u8,
                ..self
            },
            TimeFormat::H12 => {
                let crossed = match direction {
                    Direction::Increase => previous < 12 && raw >= 12,
                    Direction::Decrease => {
                        (previous > 1 && raw <= 0) || (previous >= 12 && raw <= 11)
                    }
                };
                let period = if crossed {
                    self.period.toggle()
                } else {
                    self.period
                };
                Self {
                    hour: ((raw - 1).rem_euclid(12) + 1) as u8,
                    period,
                    ..self
                }
            }
        }
    }

    /// Move the minute modulo 60 (returns new time)
    ///
    /// Minute overflow never carries into the hour.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn adjust_minute(self, direction: Direction, amount: u8) -> Self {
        let raw = i32::from(self.minute) + direction.signed(i32::from(amount));
        Self {
            minute: raw.rem_euclid(60) as u8,
            ..self
        }
    }

    /// Re-express the time in another format (returns new time)
    ///
    /// 12h to 24h adds 12 to PM hours. 24h to 12h marks hours above 12 as PM
    /// and subtracts 12, everything else is AM, and hour 0 reads as 12.
    #[must_use]
    pub fn convert(self, from: TimeFormat, to: TimeFormat) -> Self {
        match (from, to) {
            (TimeFormat::H12, TimeFormat::H24) => {
                if self.period == Period::Pm {
                    Self {
                        hour: self.hour + 12,
                        ..self
                    }
                } else {
                    self
                }
            }
            (TimeFormat::H24, TimeFormat::H12) => {
                let (hour, period) = if self.hour > 12 {
                    (self.hour - 12, Period::Pm)
                } else {
                    (self.hour, Period::Am)
                };
                Self {
                    hour: if hour == 0 { 12 } else { hour },
                    period,
                    ..self
                }
            }
            _ => self,
        }
    }

    /// Compare two readings; the period only counts in 12-hour format
    #[must_use]
    pub fn matches(self, other: Self, format: TimeFormat) -> bool {
        self.hour == other.hour
            && self.minute == other.minute
            && (format == TimeFormat::H24 || self.period == other.period)
    }

    /// Advance the hour by one for a minute carry (returns new time)
    ///
    /// The period flips when leaving hour 11 (or the transient hour 24 that
    /// a PM noon conversion produces); the hour then wraps 13 to 1 in 12-hour
    /// format and past 23 to 0 in 24-hour format.
    #[must_use]
    pub(crate) fn carry_hour(self, format: TimeFormat) -> Self {
        let period = if self.hour == 11 || self.hour == 24 {
            self.period.toggle()
        } else {
            self.period
        };
        let hour = self.hour + 1;
        let hour = match format {
            TimeFormat::H12 if hour > 12 => 1,
            TimeFormat::H24 if hour > 23 => 0,
            _ => hour,
        };
        Self {
            hour,
            period,
            ..self
        }
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::new(DEFAULT_HOUR, DEFAULT_MINUTE, DEFAULT_PERIOD)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ClockTime {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}:{} {}", self.hour, self.minute, self.period);
    }
}

/// Wall clock: current time, seconds and display format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockModel {
    time: ClockTime,
    second: u8,
    format: TimeFormat,
}

impl ClockModel {
    /// Create a clock at a given reading
    #[must_use]
    pub const fn new(time: ClockTime, second: u8, format: TimeFormat) -> Self {
        Self {
            time,
            second,
            format,
        }
    }

    /// Current hour, minute and period
    #[must_use]
    pub const fn time(&self) -> ClockTime {
        self.time
    }

    /// Current hour
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.time.hour
    }

    /// Current minute
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.time.minute
    }

    /// Current second
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Current period
    #[must_use]
    pub const fn period(&self) -> Period {
        self.time.period
    }

    /// Display format
    #[must_use]
    pub const fn format(&self) -> TimeFormat {
        self.format
    }

    /// Advance by one second (returns new clock)
    #[must_use]
    pub fn tick(self) -> Self {
        let second = self.second + 1;
        if second < 60 {
            return Self { second, ..self };
        }

        let minute = self.time.minute + 1;
        let time = if minute < 60 {
            ClockTime { minute, ..self.time }
        } else {
            ClockTime {
                minute: 0,
                ..self.time
            }
            .carry_hour(self.format)
        };

        Self {
            time,
            second: 0,
            ..self
        }
    }

    /// Switch display format, converting the hour (returns new clock)
    #[must_use]
    pub fn set_format(self, format: TimeFormat) -> Self {
        Self {
            time: self.time.convert(self.format, format),
            format,
            ..self
        }
    }

    /// Edit the hour (returns new clock)
    #[must_use]
    pub fn adjust_hour(self, direction: Direction, amount: u8) -> Self {
        Self {
            time: self.time.adjust_hour(self.format, direction, amount),
            ..self
        }
    }

    /// Edit the minute without hour carry (returns new clock)
    #[must_use]
    pub fn adjust_minute(self, direction: Direction, amount: u8) -> Self {
        Self {
            time: self.time.adjust_minute(direction, amount),
            ..self
        }
    }
}

impl Default for ClockModel {
    fn default() -> Self {
        Self::new(ClockTime::default(), DEFAULT_SECOND, DEFAULT_FORMAT)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ClockModel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}:{} ({})", self.time, self.second, self.format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_hour_flips_period_leaving_eleven() {
        let t = ClockTime::new(11, 0, Period::Am).carry_hour(TimeFormat::H12);
        assert_eq!(t.hour, 12);
        assert_eq!(t.period, Period::Pm);
    }

    #[test]
    fn carry_hour_wraps_twelve_to_one() {
        let t = ClockTime::new(12, 0, Period::Pm).carry_hour(TimeFormat::H12);
        assert_eq!(t.hour, 1);
        assert_eq!(t.period, Period::Pm);
    }

    #[test]
    fn carry_hour_from_transient_twenty_four() {
        let t = ClockTime::new(24, 0, Period::Pm).carry_hour(TimeFormat::H24);
        assert_eq!(t.hour, 0);
        assert_eq!(t.period, Period::Am);
    }

    #[test]
    fn matches_ignores_period_in_24h() {
        let a = ClockTime::new(7, 0, Period::Am);
        let b = ClockTime::new(7, 0, Period::Pm);
        assert!(a.matches(b, TimeFormat::H24));
        assert!(!a.matches(b, TimeFormat::H12));
    }
}

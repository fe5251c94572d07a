//! Alarm Model and Evaluator
//!
//! The alarm mirrors the clock's hour/minute/period in the clock's active
//! format. Once per tick the evaluator compares the two and decides whether
//! the appliance must switch to the ringing screen.

use crate::clock::time::{ClockModel, ClockTime};
use crate::config::{DEFAULT_SNOOZE_MINUTES, SNOOZE_MAX_MINUTES, SNOOZE_MIN_MINUTES};
use crate::types::{Direction, TimeFormat};
use crate::ui::state::UiState;

/// Alarm setting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlarmModel {
    armed: bool,
    time: ClockTime,
    snooze_minutes: u8,
}

impl AlarmModel {
    /// Create a disarmed alarm at `time`
    #[must_use]
    pub const fn new(time: ClockTime) -> Self {
        Self {
            armed: false,
            time,
            snooze_minutes: DEFAULT_SNOOZE_MINUTES,
        }
    }

    /// Check if the alarm may ring
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Alarm hour, minute and period
    #[must_use]
    pub const fn time(&self) -> ClockTime {
        self.time
    }

    /// Snooze length in minutes (1..=60)
    #[must_use]
    pub const fn snooze_minutes(&self) -> u8 {
        self.snooze_minutes
    }

    /// Arm the alarm (returns new alarm)
    #[must_use]
    pub const fn arm(self) -> Self {
        Self {
            armed: true,
            ..self
        }
    }

    /// Disarm the alarm (returns new alarm)
    #[must_use]
    pub const fn disarm(self) -> Self {
        Self {
            armed: false,
            ..self
        }
    }

    /// Replace the alarm time (returns new alarm)
    #[must_use]
    pub const fn with_time(self, time: ClockTime) -> Self {
        Self { time, ..self }
    }

    /// Edit the alarm hour (returns new alarm)
    #[must_use]
    pub fn adjust_hour(self, format: TimeFormat, direction: Direction, amount: u8) -> Self {
        self.with_time(self.time.adjust_hour(format, direction, amount))
    }

    /// Edit the alarm minute without hour carry (returns new alarm)
    #[must_use]
    pub fn adjust_minute(self, direction: Direction, amount: u8) -> Self {
        self.with_time(self.time.adjust_minute(direction, amount))
    }

    /// Re-express the alarm in another format (returns new alarm)
    #[must_use]
    pub fn convert(self, from: TimeFormat, to: TimeFormat) -> Self {
        self.with_time(self.time.convert(from, to))
    }

    /// Edit the snooze length, wrapping within 1..=60 (returns new alarm)
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn adjust_snooze(self, direction: Direction, amount: u8) -> Self {
        let min = i32::from(SNOOZE_MIN_MINUTES);
        let span = i32::from(SNOOZE_MAX_MINUTES) - min + 1;
        let raw = i32::from(self.snooze_minutes) - min + direction.signed(i32::from(amount));
        Self {
            snooze_minutes: (raw.rem_euclid(span) + min) as u8,
            ..self
        }
    }

    /// Defer the alarm by the snooze length, keeping it armed (returns new alarm)
    ///
    /// Unlike minute editing, the snooze carries into the hour.
    #[must_use]
    pub fn snooze(self, format: TimeFormat) -> Self {
        let minute = self.time.minute + self.snooze_minutes;
        let time = if minute > 59 {
            ClockTime {
                minute: minute - 60,
                ..self.time
            }
            .carry_hour(format)
        } else {
            ClockTime {
                minute,
                ..self.time
            }
        };
        self.with_time(time)
    }

    /// Silence after ringing: disarm (returns new alarm)
    #[must_use]
    pub const fn accept(self) -> Self {
        self.disarm()
    }
}

impl Default for AlarmModel {
    fn default() -> Self {
        Self::new(ClockTime::default())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AlarmModel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Alarm({}, armed={}, snooze={})",
            self.time,
            self.armed,
            self.snooze_minutes
        );
    }
}

/// Result of the per-tick alarm check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlarmOutcome {
    /// Nothing to do
    Quiet,
    /// The alarm just became due: switch to ringing
    Triggered,
    /// Already on the ringing screen
    Ringing,
}

/// Per-tick comparison of clock and alarm
pub struct AlarmEvaluator;

impl AlarmEvaluator {
    /// Check whether the alarm is due
    ///
    /// Due means armed, hour and minute equal to the clock (and the period
    /// too in 12-hour format), and the user is not editing the alarm.
    #[must_use]
    pub fn is_due(state: UiState, clock: &ClockModel, alarm: &AlarmModel) -> bool {
        alarm.is_armed()
            && state != UiState::AlarmEdit
            && alarm.time().matches(clock.time(), clock.format())
    }

    /// Evaluate the alarm for this tick
    #[must_use]
    pub fn evaluate(state: UiState, clock: &ClockModel, alarm: &AlarmModel) -> AlarmOutcome {
        if !Self::is_due(state, clock, alarm) {
            AlarmOutcome::Quiet
        } else if state == UiState::AlarmRinging {
            AlarmOutcome::Ringing
        } else {
            AlarmOutcome::Triggered
        }
    }
}

//! View Model
//!
//! Text content of the current screen. Built from the models and the tuner
//! state without touching hardware; the display driver only lays it out.

use core::fmt::{self, Write};

use heapless::String;

use crate::clock::time::ClockTime;
use crate::tuner::protocol::TunerState;
use crate::types::{Direction, TimeFormat};
use crate::ui::navigation::Model;
use crate::ui::state::UiState;

/// Characters per display row (6 px font on a 128 px panel)
pub const LINE_LEN: usize = 21;

/// One row of text
pub type Line = String<LINE_LEN>;

/// Everything the display shows for one screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    /// Screen being shown
    pub state: UiState,
    /// Heading (empty on the home screen)
    pub title: Line,
    /// Large centre line: a time, the snooze length or the radio summary
    pub headline: Line,
    /// Secondary line under the headline
    pub detail: Line,
    /// `(A)` when the alarm is armed, `( )` otherwise (home screen only)
    pub indicator: Line,
    /// Label for each button, A to D (empty when unassigned)
    pub labels: [Line; 4],
}

impl ViewModel {
    /// Describe `state`
    #[must_use]
    pub fn build(state: UiState, model: &Model, tuner: &TunerState, direction: Direction) -> Self {
        let format = model.clock.format();
        let sign = direction.sign_char();
        let inc = model.increment.value();
        let armed = model.alarm.is_armed();
        let clock = time_line(model.clock.time(), format);
        let alarm = time_line(model.alarm.time(), format);
        let radio = radio_line(tuner);

        let mut view = Self {
            state,
            title: Line::new(),
            headline: Line::new(),
            detail: Line::new(),
            indicator: Line::new(),
            labels: [Line::new(), Line::new(), Line::new(), Line::new()],
        };

        match state {
            UiState::Home => {
                view.headline = clock;
                view.detail = radio;
                view.indicator = text(if armed { "(A)" } else { "( )" });
                view.labels = labels(["Format", "Time", "Alarm", "Radio"]);
            }
            UiState::FormatMenu => {
                view.title = text("Change Format");
                view.headline = clock;
                view.labels = labels(["Back", "12 Hour", "24 Hour", ""]);
            }
            UiState::TimeEdit => {
                view.title = text("Change Time");
                view.headline = clock;
                view.labels = [
                    text("Back"),
                    line(format_args!("{sign}Hour")),
                    line(format_args!("{sign}Min")),
                    line(format_args!("Inc:{inc}")),
                ];
            }
            UiState::AlarmMenu => {
                view.title = text("Alarm Menu");
                view.headline = alarm;
                view.detail = line(format_args!("Snooze:{}", model.alarm.snooze_minutes()));
                view.labels = labels([
                    "Back",
                    if armed { "Edit Alarm" } else { "Add Alarm" },
                    "Snooze",
                    "Delete",
                ]);
            }
            UiState::AlarmEdit => {
                view.title = text(if armed { "Edit Alarm" } else { "Add Alarm" });
                view.headline = alarm;
                view.labels = [
                    text("Confirm"),
                    line(format_args!("{sign}Hour")),
                    line(format_args!("{sign}Min")),
                    line(format_args!("Inc:{inc}")),
                ];
            }
            UiState::SnoozeEdit => {
                view.title = text("Edit Snooze");
                view.headline = line(format_args!("Time: {}", model.alarm.snooze_minutes()));
                view.labels = [
                    text("Back"),
                    text("+Min"),
                    text("-Min"),
                    line(format_args!("Inc:{inc}")),
                ];
            }
            UiState::RadioMenu => {
                view.title = text("Radio Menu");
                view.headline = radio;
                view.labels = labels([
                    "Back",
                    "Station",
                    "Sound",
                    if tuner.muted { "Unmute" } else { "Mute" },
                ]);
            }
            UiState::StationEdit => {
                view.title = text("Radio Station");
                view.headline = radio;
                view.labels = [
                    text("Back"),
                    text("+Freq"),
                    text("-Freq"),
                    line(format_args!("Inc:{inc}")),
                ];
            }
            UiState::VolumeEdit => {
                view.title = text("Radio Sound");
                view.headline = radio;
                view.labels = [
                    text("Back"),
                    text("+Vol"),
                    text("-Vol"),
                    line(format_args!("Inc:{inc}")),
                ];
            }
            UiState::AlarmRinging => {
                view.title = text("ALARM");
                view.headline = clock;
                view.labels = [
                    text("Accept"),
                    line(format_args!("Snooze:{}", model.alarm.snooze_minutes())),
                    Line::new(),
                    Line::new(),
                ];
            }
        }

        view
    }
}

/// `07:05 AM` in 12-hour format, `19:05` in 24-hour format
#[must_use]
pub fn time_line(time: ClockTime, format: TimeFormat) -> Line {
    match format {
        TimeFormat::H12 => line(format_args!(
            "{:02}:{:02} {}",
            time.hour,
            time.minute,
            time.period.as_str()
        )),
        TimeFormat::H24 => line(format_args!("{:02}:{:02}", time.hour, time.minute)),
    }
}

/// `V:05 S:107.3`
#[must_use]
pub fn radio_line(tuner: &TunerState) -> Line {
    line(format_args!(
        "V:{:02} S:{}",
        tuner.volume.level(),
        tuner.frequency
    ))
}

// Overflow drops the rest of the row.
fn line(args: fmt::Arguments<'_>) -> Line {
    let mut out = Line::new();
    let _ = out.write_fmt(args);
    out
}

fn text(s: &str) -> Line {
    let mut out = Line::new();
    let _ = out.push_str(s);
    out
}

fn labels(names: [&str; 4]) -> [Line; 4] {
    names.map(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn twelve_hour_line_shows_period() {
        let t = ClockTime::new(7, 5, Period::Pm);
        assert_eq!(time_line(t, TimeFormat::H12).as_str(), "07:05 PM");
        assert_eq!(time_line(t, TimeFormat::H24).as_str(), "07:05");
    }

    #[test]
    fn radio_line_pads_frequency() {
        assert_eq!(radio_line(&TunerState::default()).as_str(), "V:00 S:107.3");
    }
}

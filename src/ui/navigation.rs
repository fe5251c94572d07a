//! Navigation State Machine
//!
//! One table keyed by `(UiState, Button)`. The function is pure: it takes
//! the current screen, the pressed button, the direction switch and the
//! models, and returns the next screen, the updated models and at most one
//! tuner command for the caller to execute. Combinations not listed are
//! no-ops.

use crate::clock::alarm::AlarmModel;
use crate::clock::time::ClockModel;
use crate::input::Button;
use crate::tuner::controller::TunerCommand;
use crate::tuner::protocol::TunerState;
use crate::types::{Direction, IncrementSelector, TimeFormat, Volume};
use crate::ui::state::UiState;

/// Everything navigation may edit besides the tuner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Model {
    /// Wall clock
    pub clock: ClockModel,
    /// Alarm setting
    pub alarm: AlarmModel,
    /// Step size shared by all edit screens
    pub increment: IncrementSelector,
}

impl Model {
    /// Switch clock and alarm to `format` (no-op if already there)
    #[must_use]
    pub fn with_format(self, format: TimeFormat) -> Self {
        let current = self.clock.format();
        if current == format {
            return self;
        }
        Self {
            clock: self.clock.set_format(format),
            alarm: self.alarm.convert(current, format),
            ..self
        }
    }
}

/// Outcome of one button press
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Next screen
    pub state: UiState,
    /// Updated models
    pub model: Model,
    /// Tuner side effect, if any
    pub command: Option<TunerCommand>,
}

impl Transition {
    const fn to(state: UiState, model: Model) -> Self {
        Self {
            state,
            model,
            command: None,
        }
    }

    const fn with_command(self, command: TunerCommand) -> Self {
        Self {
            command: Some(command),
            ..self
        }
    }
}

/// Apply one button press
#[must_use]
pub fn transition(
    state: UiState,
    button: Button,
    direction: Direction,
    model: Model,
    tuner: &TunerState,
) -> Transition {
    use Button::{A, B, C, D};
    use UiState::{
        AlarmEdit, AlarmMenu, AlarmRinging, FormatMenu, Home, RadioMenu, SnoozeEdit, StationEdit,
        TimeEdit, VolumeEdit,
    };

    let step = model.increment.value();
    let format = model.clock.format();

    match (state, button) {
        (Home, A) => Transition::to(FormatMenu, model),
        (Home, B) => Transition::to(TimeEdit, model),
        (Home, C) => Transition::to(AlarmMenu, model),
        (Home, D) => Transition::to(RadioMenu, model),

        (FormatMenu | TimeEdit | AlarmMenu | RadioMenu, A) => Transition::to(Home, model),
        (FormatMenu, B) => Transition::to(Home, model.with_format(TimeFormat::H12)),
        (FormatMenu, C) => Transition::to(Home, model.with_format(TimeFormat::H24)),

        (state, D) if state.is_numeric_edit() => Transition::to(
            state,
            Model {
                increment: model.increment.cycle(),
                ..model
            },
        ),

        (TimeEdit, B) => Transition::to(
            TimeEdit,
            Model {
                clock: model.clock.adjust_hour(direction, step),
                ..model
            },
        ),
        (TimeEdit, C) => Transition::to(
            TimeEdit,
            Model {
                clock: model.clock.adjust_minute(direction, step),
                ..model
            },
        ),

        (AlarmMenu, B) => Transition::to(AlarmEdit, model),
        (AlarmMenu, C) => Transition::to(SnoozeEdit, model),
        (AlarmMenu, D) => Transition::to(
            Home,
            Model {
                alarm: model.alarm.disarm(),
                ..model
            },
        ),

        (AlarmEdit, A) => Transition::to(
            Home,
            Model {
                alarm: model.alarm.arm(),
                ..model
            },
        ),
        (AlarmEdit, B) => Transition::to(
            AlarmEdit,
            Model {
                alarm: model.alarm.adjust_hour(format, direction, step),
                ..model
            },
        ),
        (AlarmEdit, C) => Transition::to(
            AlarmEdit,
            Model {
                alarm: model.alarm.adjust_minute(direction, step),
                ..model
            },
        ),

        (SnoozeEdit, A) => Transition::to(AlarmMenu, model),
        (SnoozeEdit, B) => Transition::to(
            SnoozeEdit,
            Model {
                alarm: model.alarm.adjust_snooze(Direction::Increase, step),
                ..model
            },
        ),
        (SnoozeEdit, C) => Transition::to(
            SnoozeEdit,
            Model {
                alarm: model.alarm.adjust_snooze(Direction::Decrease, step),
                ..model
            },
        ),

        (RadioMenu, B) => Transition::to(StationEdit, model),
        (RadioMenu, C) => Transition::to(VolumeEdit, model),
        (RadioMenu, D) => {
            Transition::to(RadioMenu, model).with_command(TunerCommand::SetMute(!tuner.muted))
        }

        (StationEdit | VolumeEdit, A) => Transition::to(RadioMenu, model),
        (StationEdit, B) => Transition::to(StationEdit, model)
            .with_command(station_step(tuner, Direction::Increase, step)),
        (StationEdit, C) => Transition::to(StationEdit, model)
            .with_command(station_step(tuner, Direction::Decrease, step)),
        (VolumeEdit, B) => Transition::to(VolumeEdit, model)
            .with_command(volume_step(tuner, Direction::Increase, step)),
        (VolumeEdit, C) => Transition::to(VolumeEdit, model)
            .with_command(volume_step(tuner, Direction::Decrease, step)),

        (AlarmRinging, A) => Transition::to(
            Home,
            Model {
                alarm: model.alarm.accept(),
                ..model
            },
        )
        .with_command(TunerCommand::Silence),
        (AlarmRinging, B) => Transition::to(
            Home,
            Model {
                alarm: model.alarm.snooze(format),
                ..model
            },
        )
        .with_command(TunerCommand::Silence),

        (state, _) => Transition::to(state, model),
    }
}

/// Candidate station one step of 0.1 MHz x `step` away (validated later)
#[allow(clippy::cast_precision_loss)]
fn station_step(tuner: &TunerState, direction: Direction, step: u8) -> TunerCommand {
    let tenths = i32::from(tuner.frequency.as_tenths()) + direction.signed(i32::from(step));
    TunerCommand::SetFrequency(tenths as f32 / 10.0)
}

/// Volume `step` away, wrapping within 0..=15
fn volume_step(tuner: &TunerState, direction: Direction, step: u8) -> TunerCommand {
    let level = i32::from(tuner.volume.level()) + direction.signed(i32::from(step));
    TunerCommand::SetVolume(level.rem_euclid(Volume::STEPS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhandled_pair_is_noop() {
        let model = Model::default();
        let t = transition(
            UiState::FormatMenu,
            Button::D,
            Direction::Increase,
            model,
            &TunerState::default(),
        );
        assert_eq!(t.state, UiState::FormatMenu);
        assert_eq!(t.model, model);
        assert!(t.command.is_none());
    }

    #[test]
    fn selecting_current_format_changes_nothing() {
        let model = Model::default();
        assert_eq!(model.with_format(TimeFormat::H12), model);
    }
}

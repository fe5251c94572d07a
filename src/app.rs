//! Application Context
//!
//! All mutable controller state in one place, advanced once per second by
//! [`ClockRadio::tick`]:
//!
//! 1. advance the clock one second
//! 2. evaluate the alarm and switch to the ringing screen when it fires
//! 3. dispatch the buttons pressed since the last tick, A to D
//! 4. re-program the tuner if an earlier write never reached it
//!
//! Rejected tuner values are logged and dropped. Bus failures are reported
//! to the caller after the whole tick has run, so a dead tuner never stops
//! the clock.

use embedded_hal::delay::DelayNs;

use crate::clock::alarm::{AlarmEvaluator, AlarmModel, AlarmOutcome};
use crate::clock::time::ClockModel;
use crate::input::{Button, PendingButtons};
use crate::tuner::controller::{BusTransport, TunerCommand, TunerController, TunerError};
use crate::tuner::protocol::TunerState;
use crate::types::{Direction, IncrementSelector};
use crate::ui::navigation::{transition, Model};
use crate::ui::state::UiState;
use crate::ui::view::ViewModel;

/// Clock radio controller context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ClockRadio {
    state: UiState,
    model: Model,
}

impl ClockRadio {
    /// Boot context: home screen, default clock and alarm
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from given models
    #[must_use]
    pub const fn with_model(model: Model) -> Self {
        Self {
            state: UiState::Home,
            model,
        }
    }

    /// Current screen
    #[must_use]
    pub const fn state(&self) -> UiState {
        self.state
    }

    /// Clock, alarm and increment selector
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Wall clock
    #[must_use]
    pub const fn clock(&self) -> &ClockModel {
        &self.model.clock
    }

    /// Alarm setting
    #[must_use]
    pub const fn alarm(&self) -> &AlarmModel {
        &self.model.alarm
    }

    /// Shared edit step
    #[must_use]
    pub const fn increment(&self) -> IncrementSelector {
        self.model.increment
    }

    /// Run one control period
    ///
    /// # Errors
    ///
    /// Returns the first [`TunerError::Transport`] hit during the tick. The
    /// clock, alarm and navigation updates are kept regardless.
    pub fn tick<B: BusTransport, D: DelayNs>(
        &mut self,
        pending: PendingButtons,
        direction: Direction,
        tuner: &mut TunerController<B, D>,
    ) -> Result<(), TunerError<B::Error>> {
        self.model.clock = self.model.clock.tick();

        let mut outcome = Ok(());
        let mut commanded = false;

        if AlarmEvaluator::evaluate(self.state, &self.model.clock, &self.model.alarm)
            == AlarmOutcome::Triggered
        {
            info!(
                "alarm {}:{} ringing",
                self.model.clock.hour(),
                self.model.clock.minute()
            );
            self.state = UiState::AlarmRinging;
            commanded = true;
            keep_first_failure(&mut outcome, tuner.apply(TunerCommand::Ring));
        }

        for button in pending.iter() {
            if let Some(result) = self.press(button, direction, tuner) {
                commanded = true;
                keep_first_failure(&mut outcome, result);
            }
        }

        if !commanded && !tuner.is_synced() {
            debug!("tuner out of sync, re-programming");
            keep_first_failure(&mut outcome, tuner.program());
        }

        outcome
    }

    /// Dispatch a single button press
    ///
    /// Returns the tuner result when the press issued a command.
    pub fn press<B: BusTransport, D: DelayNs>(
        &mut self,
        button: Button,
        direction: Direction,
        tuner: &mut TunerController<B, D>,
    ) -> Option<Result<(), TunerError<B::Error>>> {
        let next = transition(self.state, button, direction, self.model, &tuner.state());
        if next.state != self.state {
            debug!(
                "button {}: {} -> {}",
                button.number(),
                self.state.name(),
                next.state.name()
            );
        }
        self.state = next.state;
        self.model = next.model;
        next.command.map(|command| tuner.apply(command))
    }

    /// Snapshot of the current screen
    #[must_use]
    pub fn view(&self, direction: Direction, tuner: &TunerState) -> ViewModel {
        ViewModel::build(self.state, &self.model, tuner, direction)
    }
}

/// Record a transport failure unless one is already recorded; range
/// rejections were logged by the controller and are dropped here
fn keep_first_failure<E>(outcome: &mut Result<(), TunerError<E>>, result: Result<(), TunerError<E>>) {
    match result {
        Ok(()) | Err(TunerError::Range(_)) => {}
        Err(err) => {
            if outcome.is_ok() {
                *outcome = Err(err);
            }
        }
    }
}

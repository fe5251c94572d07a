//! Tuner Controller
//!
//! Owns the desired [`TunerState`] and keeps the hardware in step with it.
//! Every mutation goes through a validated setter; rejected values leave the
//! state untouched. Bus transactions are retried with exponential backoff a
//! bounded number of times so a dead bus can never stall the control loop
//! past one tick.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::config::{
    ALARM_VOLUME, TUNER_I2C_ADDR, TUNER_MAX_ATTEMPTS, TUNER_RETRY_BACKOFF_MS, TUNER_STATUS_LEN,
};
use crate::tuner::protocol::{
    build_image, decode_status, validate_frequency, validate_volume, TunerState, TunerStatus,
};
use crate::types::{RangeError, Volume};

/// Raw register transport to the tuner
///
/// Implemented by [`crate::hal::i2c::I2cBus`] for real hardware and by
/// simulated buses in tests.
pub trait BusTransport {
    /// Transport error
    type Error;

    /// Write `bytes` to the device at `address`
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buffer` from the device at `address`
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Tuner operation error
#[derive(Clone, Debug, PartialEq)]
pub enum TunerError<E> {
    /// Value rejected, state unchanged
    Range(RangeError),
    /// Bus still failing after the last attempt
    Transport {
        /// Attempts made
        attempts: u8,
        /// Error of the final attempt
        source: E,
    },
}

impl<E> From<RangeError> for TunerError<E> {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl<E: fmt::Debug> fmt::Display for TunerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "rejected: {err}"),
            Self::Transport { attempts, source } => {
                write!(f, "tuner bus failed after {attempts} attempts: {source:?}")
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl<E: defmt::Format> defmt::Format for TunerError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Range(err) => defmt::write!(f, "Range({})", err),
            Self::Transport { attempts, source } => {
                defmt::write!(f, "Transport({} attempts: {})", attempts, source);
            }
        }
    }
}

/// Tuner side effect requested by navigation or the alarm
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TunerCommand {
    /// Tune to a frequency in MHz (validated)
    SetFrequency(f32),
    /// Set a volume step (validated)
    SetVolume(i32),
    /// Mute or unmute
    SetMute(bool),
    /// Alarm sound: full volume, unmuted
    Ring,
    /// Alarm dismissed: volume 0, muted
    Silence,
}

#[cfg(feature = "embedded")]
impl defmt::Format for TunerCommand {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::SetFrequency(mhz) => defmt::write!(f, "SetFreq({})", mhz),
            Self::SetVolume(level) => defmt::write!(f, "SetVol({})", level),
            Self::SetMute(muted) => defmt::write!(f, "SetMute({})", muted),
            Self::Ring => defmt::write!(f, "Ring"),
            Self::Silence => defmt::write!(f, "Silence"),
        }
    }
}

/// FM tuner controller
pub struct TunerController<B, D> {
    bus: B,
    delay: D,
    address: u8,
    state: TunerState,
    synced: bool,
}

impl<B: BusTransport, D: DelayNs> TunerController<B, D> {
    /// Create a controller holding the boot configuration
    ///
    /// Nothing is written until [`TunerController::program`] is called.
    #[must_use]
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_state(bus, delay, TunerState::default())
    }

    /// Create a controller holding a given configuration
    #[must_use]
    pub fn with_state(bus: B, delay: D, state: TunerState) -> Self {
        Self {
            bus,
            delay,
            address: TUNER_I2C_ADDR,
            state,
            synced: false,
        }
    }

    /// Desired configuration
    #[must_use]
    pub const fn state(&self) -> TunerState {
        self.state
    }

    /// Check whether the last programming attempt reached the hardware
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        self.synced
    }

    /// Borrow the transport
    #[must_use]
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the transport and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Validated volume setter (no bus traffic)
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Volume`] and leaves the state unchanged unless
    /// `level` is in 0..=15.
    pub fn set_volume(&mut self, level: i32) -> Result<(), RangeError> {
        self.state.volume = validate_volume(level)?;
        Ok(())
    }

    /// Validated frequency setter (no bus traffic)
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Frequency`] and leaves the state unchanged unless
    /// `mhz` is in 88.0..=108.0.
    pub fn set_frequency(&mut self, mhz: f32) -> Result<(), RangeError> {
        self.state.frequency = validate_frequency(mhz)?;
        Ok(())
    }

    /// Mute setter (no bus traffic)
    pub fn set_mute(&mut self, muted: bool) {
        self.state.muted = muted;
    }

    /// Write the configuration image for the current state
    ///
    /// # Errors
    ///
    /// Returns [`TunerError::Transport`] once every attempt has failed; the
    /// controller is then marked out of sync.
    pub fn program(&mut self) -> Result<(), TunerError<B::Error>> {
        let image = build_image(&self.state);
        let address = self.address;
        let result = self.with_retry(|bus| bus.write(address, &image));
        self.synced = result.is_ok();
        result
    }

    /// Apply a command: validate, update state, then program
    ///
    /// # Errors
    ///
    /// [`TunerError::Range`] if the value was rejected (nothing written),
    /// [`TunerError::Transport`] if programming failed.
    pub fn apply(&mut self, command: TunerCommand) -> Result<(), TunerError<B::Error>> {
        match command {
            TunerCommand::SetFrequency(mhz) => self.set_frequency(mhz).map_err(|err| {
                warn!("rejected frequency {} MHz", mhz);
                TunerError::Range(err)
            })?,
            TunerCommand::SetVolume(level) => self.set_volume(level).map_err(|err| {
                warn!("rejected volume {}", level);
                TunerError::Range(err)
            })?,
            TunerCommand::SetMute(muted) => self.set_mute(muted),
            TunerCommand::Ring => {
                self.set_volume(i32::from(ALARM_VOLUME))?;
                self.set_mute(false);
            }
            TunerCommand::Silence => {
                self.state.volume = Volume::default();
                self.set_mute(true);
            }
        }
        debug!(
            "tuner -> {} tenths, vol {}, muted {}",
            self.state.frequency.as_tenths(),
            self.state.volume.level(),
            self.state.muted
        );
        self.program()
    }

    /// Read and decode the 256-byte status block
    ///
    /// # Errors
    ///
    /// Returns [`TunerError::Transport`] once every attempt has failed.
    pub fn read_status(&mut self) -> Result<TunerStatus, TunerError<B::Error>> {
        let mut raw = [0u8; TUNER_STATUS_LEN];
        let address = self.address;
        self.with_retry(|bus| bus.read(address, &mut raw))?;
        Ok(decode_status(&raw))
    }

    /// Run a bus operation up to [`TUNER_MAX_ATTEMPTS`] times
    ///
    /// Waits [`TUNER_RETRY_BACKOFF_MS`] before the first retry and doubles the
    /// wait each time after.
    fn with_retry<T>(
        &mut self,
        mut op: impl FnMut(&mut B) -> Result<T, B::Error>,
    ) -> Result<T, TunerError<B::Error>> {
        let mut attempt: u8 = 1;
        let mut backoff_ms = TUNER_RETRY_BACKOFF_MS;

        loop {
            match op(&mut self.bus) {
                Ok(value) => return Ok(value),
                Err(source) if attempt >= TUNER_MAX_ATTEMPTS => {
                    error!("tuner bus failed after {} attempts", attempt);
                    return Err(TunerError::Transport {
                        attempts: attempt,
                        source,
                    });
                }
                Err(_) => {
                    warn!("tuner bus attempt {} failed, retrying in {} ms", attempt, backoff_ms);
                    self.delay.delay_ms(backoff_ms);
                    backoff_ms = backoff_ms.saturating_mul(2);
                    attempt += 1;
                }
            }
        }
    }
}

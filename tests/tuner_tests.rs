//! Tuner Controller Tests
//!
//! Tests for validated setters, bounded retry and the I2C adapter.
//! Run with: cargo test --test tuner_tests

use clock_radio::hal::i2c::I2cBus;
use clock_radio::tuner::controller::{BusTransport, TunerCommand, TunerController, TunerError};
use clock_radio::tuner::protocol::{build_image, TunerState};
use clock_radio::types::{Frequency, RangeError, Volume};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BusFault;

/// Tuner stand-in: fails the next `failures` transactions, then mirrors
/// whatever image was last written in its status read-back
#[derive(Default)]
struct SimTuner {
    failures: u32,
    writes: Vec<(u8, Vec<u8>)>,
    image: [u8; 8],
    stereo: bool,
}

impl SimTuner {
    fn failing(failures: u32) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    fn fault(&mut self) -> Result<(), BusFault> {
        if self.failures > 0 {
            self.failures -= 1;
            Err(BusFault)
        } else {
            Ok(())
        }
    }
}

impl BusTransport for SimTuner {
    type Error = BusFault;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.fault()?;
        self.writes.push((address, bytes.to_vec()));
        self.image.copy_from_slice(bytes);
        Ok(())
    }

    fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.fault()?;
        let code = (u16::from(self.image[2]) << 2) | u16::from(self.image[3] >> 6);
        buffer.fill(0);
        buffer[0] = ((code >> 8) as u8 & 0x03) | if self.stereo { 0x04 } else { 0x00 };
        buffer[1] = (code & 0xFF) as u8;
        buffer[0xF0..0xF8].copy_from_slice(&self.image);
        Ok(())
    }
}

/// Records every millisecond wait
#[derive(Default)]
struct RecordingDelay {
    waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

fn controller(bus: SimTuner) -> TunerController<SimTuner, RecordingDelay> {
    TunerController::new(bus, RecordingDelay::default())
}

// =============================================================================
// Programming Tests
// =============================================================================

#[test]
fn starts_out_of_sync_with_boot_state() {
    let tuner = controller(SimTuner::default());
    assert!(!tuner.is_synced());
    assert_eq!(tuner.state(), TunerState::default());
    assert!(tuner.bus().writes.is_empty());
}

#[test]
fn program_writes_image_to_tuner_address() {
    let mut tuner = controller(SimTuner::default());
    tuner.program().unwrap();
    assert!(tuner.is_synced());
    let writes = &tuner.bus().writes;
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, 0x10);
    assert_eq!(writes[0].1, build_image(&TunerState::default()).to_vec());
}

#[test]
fn every_command_reprograms() {
    let mut tuner = controller(SimTuner::default());
    tuner.apply(TunerCommand::SetVolume(4)).unwrap();
    tuner.apply(TunerCommand::SetMute(false)).unwrap();
    tuner.apply(TunerCommand::SetFrequency(95.5)).unwrap();
    assert_eq!(tuner.bus().writes.len(), 3);
    assert_eq!(tuner.state().volume.level(), 4);
    assert!(!tuner.state().muted);
    assert_eq!(tuner.state().frequency.as_tenths(), 955);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn rejected_volume_leaves_state_and_bus_untouched() {
    let mut tuner = controller(SimTuner::default());
    let before = tuner.state();
    assert_eq!(
        tuner.apply(TunerCommand::SetVolume(16)),
        Err(TunerError::Range(RangeError::Volume(16)))
    );
    assert_eq!(
        tuner.apply(TunerCommand::SetVolume(-1)),
        Err(TunerError::Range(RangeError::Volume(-1)))
    );
    assert_eq!(tuner.state(), before);
    assert!(tuner.bus().writes.is_empty());
}

#[test]
fn rejected_frequency_leaves_state_and_bus_untouched() {
    let mut tuner = controller(SimTuner::default());
    let before = tuner.state();
    assert!(matches!(
        tuner.apply(TunerCommand::SetFrequency(108.1)),
        Err(TunerError::Range(RangeError::Frequency(_)))
    ));
    assert!(tuner.set_frequency(87.9).is_err());
    assert_eq!(tuner.state(), before);
    assert!(tuner.bus().writes.is_empty());
}

#[test]
fn setters_do_not_touch_the_bus() {
    let mut tuner = controller(SimTuner::default());
    tuner.set_volume(9).unwrap();
    tuner.set_frequency(90.1).unwrap();
    tuner.set_mute(false);
    assert!(tuner.bus().writes.is_empty());
    assert_eq!(
        tuner.state(),
        TunerState::new(
            Frequency::from_tenths(901).unwrap(),
            Volume::new(9).unwrap(),
            false
        )
    );
}

// =============================================================================
// Alarm Commands
// =============================================================================

#[test]
fn ring_is_full_volume_unmuted() {
    let mut tuner = controller(SimTuner::default());
    tuner.apply(TunerCommand::Ring).unwrap();
    assert_eq!(tuner.state().volume.level(), 15);
    assert!(!tuner.state().muted);
    let image = &tuner.bus().writes[0].1;
    assert_eq!(image[0], 0xC0);
    assert_eq!(image[7], 0x8F);
}

#[test]
fn silence_is_zero_volume_muted() {
    let mut tuner = controller(SimTuner::default());
    tuner.apply(TunerCommand::Ring).unwrap();
    tuner.apply(TunerCommand::Silence).unwrap();
    assert_eq!(tuner.state().volume.level(), 0);
    assert!(tuner.state().muted);
}

// =============================================================================
// Retry Tests
// =============================================================================

#[test]
fn transient_failures_are_retried() {
    let mut tuner = controller(SimTuner::failing(2));
    tuner.program().unwrap();
    assert!(tuner.is_synced());
    assert_eq!(tuner.bus().writes.len(), 1);
    let (_, delay) = tuner.release();
    assert_eq!(delay.waits_ms, vec![5, 10]);
}

#[test]
fn gives_up_after_four_attempts() {
    let mut tuner = controller(SimTuner::failing(100));
    assert_eq!(
        tuner.program(),
        Err(TunerError::Transport {
            attempts: 4,
            source: BusFault
        })
    );
    assert!(!tuner.is_synced());
    let (bus, delay) = tuner.release();
    assert_eq!(bus.failures, 96);
    assert!(bus.writes.is_empty());
    assert_eq!(delay.waits_ms, vec![5, 10, 20]);
    assert_eq!(delay.waits_ms.iter().sum::<u32>(), 35);
}

#[test]
fn failed_command_keeps_new_state() {
    let mut tuner = controller(SimTuner::failing(4));
    assert!(tuner.apply(TunerCommand::SetVolume(6)).is_err());
    assert_eq!(tuner.state().volume.level(), 6);
    assert!(!tuner.is_synced());
    tuner.program().unwrap();
    assert!(tuner.is_synced());
}

#[test]
fn transport_error_display() {
    let err: TunerError<BusFault> = TunerError::Transport {
        attempts: 4,
        source: BusFault,
    };
    assert_eq!(err.to_string(), "tuner bus failed after 4 attempts: BusFault");
}

// =============================================================================
// Status Read-back Tests
// =============================================================================

#[test]
fn status_reflects_programmed_state() {
    let mut tuner = controller(SimTuner {
        stereo: true,
        ..SimTuner::default()
    });
    tuner.apply(TunerCommand::SetFrequency(101.1)).unwrap();
    tuner.apply(TunerCommand::SetVolume(7)).unwrap();
    tuner.apply(TunerCommand::SetMute(false)).unwrap();

    let status = tuner.read_status().unwrap();
    assert!(!status.muted);
    assert_eq!(status.volume, 7);
    assert!(status.stereo);
    assert!((status.frequency_mhz - 101.1).abs() < 1e-3);
}

#[test]
fn status_read_is_retried() {
    let mut tuner = controller(SimTuner::failing(1));
    let status = tuner.read_status().unwrap();
    assert!(status.muted);
    let (_, delay) = tuner.release();
    assert_eq!(delay.waits_ms, vec![5]);
}

// =============================================================================
// I2C Adapter Tests
// =============================================================================

#[test]
fn i2c_bus_writes_image() {
    let image = build_image(&TunerState::default());
    let expectations = [I2cTrans::write(0x10, image.to_vec())];
    let mut tuner = TunerController::new(
        I2cBus::new(I2cMock::new(&expectations)),
        RecordingDelay::default(),
    );

    tuner.program().unwrap();

    let (bus, _) = tuner.release();
    bus.release().done();
}

#[test]
fn i2c_bus_error_is_retried() {
    let image = build_image(&TunerState::default());
    let expectations = [
        I2cTrans::write(0x10, image.to_vec()).with_error(ErrorKind::Other),
        I2cTrans::write(0x10, image.to_vec()),
    ];
    let mut tuner = TunerController::new(
        I2cBus::new(I2cMock::new(&expectations)),
        RecordingDelay::default(),
    );

    tuner.program().unwrap();

    let (bus, delay) = tuner.release();
    assert_eq!(delay.waits_ms, vec![5]);
    bus.release().done();
}

#[test]
fn i2c_bus_reads_status_block() {
    let mut block = vec![0u8; 256];
    block[1] = 203;
    block[0xF0] = 0xC0;
    block[0xF7] = 0x85;
    let expectations = [I2cTrans::read(0x10, block)];
    let mut tuner = TunerController::new(
        I2cBus::new(I2cMock::new(&expectations)),
        RecordingDelay::default(),
    );

    let status = tuner.read_status().unwrap();
    assert!(!status.muted);
    assert_eq!(status.volume, 5);
    assert!((status.frequency_mhz - 107.3).abs() < 1e-3);

    let (bus, _) = tuner.release();
    bus.release().done();
}

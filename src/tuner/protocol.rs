//! Tuner Register Protocol
//!
//! The tuner is configured by writing an 8-byte image covering registers
//! 0x02..=0x05 (big-endian, two bytes each) and queried by reading 256 bytes
//! of register space starting at the status register 0x0A. The read wraps
//! around the register file, so the configuration registers reappear at the
//! end of the read-back at offsets 0xF0..=0xF7.

use crate::config::{
    default_frequency, default_volume, DEFAULT_MUTED, TUNER_IMAGE_LEN, TUNER_STATUS_LEN,
};
use crate::types::{Frequency, RangeError, Volume};

/// Bit layout of the configuration image and status read-back
mod reg {
    /// Image byte 0: high-impedance audio output disabled
    pub const OUTPUT_ENABLE: u8 = 0x80;
    /// Image byte 0: audio not muted
    pub const AUDIO_ON: u8 = 0x40;
    /// Image byte 1: power up, new demodulation method, RDS off
    pub const POWER_CONFIG: u8 = 0x0D;
    /// Image byte 3: start tuning to the channel in bytes 2..=3
    pub const TUNE: u8 = 0x10;
    /// Image byte 4: 50 us de-emphasis
    pub const DE_EMPHASIS: u8 = 0x04;
    /// Image byte 5: no GPIO / interrupt config
    pub const GPIO_CONFIG: u8 = 0x00;
    /// Image byte 6: interrupt mode and seek threshold
    pub const SEEK_CONFIG: u8 = 0x84;
    /// Image byte 7: LNA input select, volume in the low nibble
    pub const LNA_PORT: u8 = 0x80;

    /// Read-back offset of the status register high byte
    pub const STATUS_HIGH: usize = 0x00;
    /// Read-back offset of the status register low byte
    pub const STATUS_LOW: usize = 0x01;
    /// Status high byte: stereo indicator
    pub const STEREO: u8 = 0x04;
    /// Status high byte: channel bits 9..8
    pub const CHANNEL_HIGH_MASK: u8 = 0x03;
    /// Read-back offset of the first configuration byte (after wrap-around)
    pub const CONFIG_MUTE: usize = 0xF0;
    /// Read-back offset of the volume byte (after wrap-around)
    pub const CONFIG_VOLUME: usize = 0xF7;
    /// Volume nibble
    pub const VOLUME_MASK: u8 = 0x0F;
}

/// Channel 0 of the status read-back, in tenths of a MHz
const STATUS_BASE_TENTHS: f32 = 870.0;

/// Offset subtracted from the frequency in tenths of a MHz
const CHANNEL_OFFSET: u16 = 870;

/// Desired tuner configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TunerState {
    /// Station
    pub frequency: Frequency,
    /// Output volume
    pub volume: Volume,
    /// Audio muted
    pub muted: bool,
}

impl TunerState {
    /// Create a tuner configuration
    #[must_use]
    pub const fn new(frequency: Frequency, volume: Volume, muted: bool) -> Self {
        Self {
            frequency,
            volume,
            muted,
        }
    }
}

impl Default for TunerState {
    fn default() -> Self {
        Self::new(
            default_frequency().unwrap_or(Frequency::LOWEST),
            default_volume().unwrap_or_default(),
            DEFAULT_MUTED,
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TunerState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Tuner({}, {}, muted={})",
            self.frequency,
            self.volume,
            self.muted
        );
    }
}

/// Decoded status read-back
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunerStatus {
    /// Audio muted
    pub muted: bool,
    /// Volume nibble
    pub volume: u8,
    /// Tuned frequency in MHz
    pub frequency_mhz: f32,
    /// Stereo pilot detected
    pub stereo: bool,
}

/// Validate a requested volume
///
/// # Errors
///
/// Returns [`RangeError::Volume`] unless `level` is in 0..=15.
pub fn validate_volume(level: i32) -> Result<Volume, RangeError> {
    Volume::try_from(level)
}

/// Validate a requested frequency
///
/// # Errors
///
/// Returns [`RangeError::Frequency`] unless `mhz` is in 88.0..=108.0.
pub fn validate_frequency(mhz: f32) -> Result<Frequency, RangeError> {
    Frequency::from_mhz(mhz)
}

/// 10-bit channel code for a frequency: `round(f * 10) - 870`
#[must_use]
pub const fn channel_code(frequency: Frequency) -> u16 {
    frequency.as_tenths() - CHANNEL_OFFSET
}

/// Split the channel code across the channel register bytes
///
/// The upper eight bits go in the first byte, the lower two in bits 7..6 of
/// the second.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_channel(frequency: Frequency) -> [u8; 2] {
    let code = channel_code(frequency);
    [
        ((code >> 2) & 0xFF) as u8,
        (((code & 0x03) << 6) & 0xC0) as u8,
    ]
}

/// Build the configuration image for a tuner state
#[must_use]
pub const fn build_image(state: &TunerState) -> [u8; TUNER_IMAGE_LEN] {
    let channel = encode_channel(state.frequency);
    let audio = if state.muted {
        reg::OUTPUT_ENABLE
    } else {
        reg::OUTPUT_ENABLE | reg::AUDIO_ON
    };

    [
        audio,
        reg::POWER_CONFIG,
        channel[0],
        channel[1] | reg::TUNE,
        reg::DE_EMPHASIS,
        reg::GPIO_CONFIG,
        reg::SEEK_CONFIG,
        reg::LNA_PORT + state.volume.level(),
    ]
}

/// Decode a 256-byte status read-back
#[must_use]
pub fn decode_status(raw: &[u8; TUNER_STATUS_LEN]) -> TunerStatus {
    let high = raw[reg::STATUS_HIGH];
    let channel = (u16::from(high & reg::CHANNEL_HIGH_MASK) << 8) | u16::from(raw[reg::STATUS_LOW]);

    TunerStatus {
        muted: raw[reg::CONFIG_MUTE] & reg::AUDIO_ON == 0,
        volume: raw[reg::CONFIG_VOLUME] & reg::VOLUME_MASK,
        frequency_mhz: (f32::from(channel) + STATUS_BASE_TENTHS) / 10.0,
        stereo: high & reg::STEREO != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_state_is_muted_at_107_3() {
        let state = TunerState::default();
        assert_eq!(state.frequency.as_tenths(), 1073);
        assert_eq!(state.volume.level(), 0);
        assert!(state.muted);
    }

    #[test]
    fn channel_split_keeps_all_ten_bits() {
        let freq = Frequency::from_tenths(1073).unwrap();
        let [hi, lo] = encode_channel(freq);
        let code = (u16::from(hi) << 2) | u16::from(lo >> 6);
        assert_eq!(code, 203);
    }
}

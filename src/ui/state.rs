//! UI screen states

/// UI screen/mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UiState {
    /// Clock face with radio summary
    #[default]
    Home,
    /// Choose 12 or 24 hour display
    FormatMenu,
    /// Set the clock
    TimeEdit,
    /// Add, edit, snooze or delete the alarm
    AlarmMenu,
    /// Set the alarm time
    AlarmEdit,
    /// Set the snooze length
    SnoozeEdit,
    /// Station, volume and mute
    RadioMenu,
    /// Tune the station
    StationEdit,
    /// Set the volume
    VolumeEdit,
    /// Alarm sounding
    AlarmRinging,
}

impl UiState {
    /// Short name for logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::FormatMenu => "FormatMenu",
            Self::TimeEdit => "TimeEdit",
            Self::AlarmMenu => "AlarmMenu",
            Self::AlarmEdit => "AlarmEdit",
            Self::SnoozeEdit => "SnoozeEdit",
            Self::RadioMenu => "RadioMenu",
            Self::StationEdit => "StationEdit",
            Self::VolumeEdit => "VolumeEdit",
            Self::AlarmRinging => "AlarmRinging",
        }
    }

    /// Screens where button D cycles the increment selector
    #[must_use]
    pub const fn is_numeric_edit(self) -> bool {
        matches!(
            self,
            Self::TimeEdit | Self::AlarmEdit | Self::SnoozeEdit | Self::StationEdit | Self::VolumeEdit
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for UiState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.name());
    }
}

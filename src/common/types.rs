// src/common/types.rs

// Enumerated constants of the DY-SVxxx serial command set. Discriminants are
// the raw bytes the module expects on the wire.

/// Storage medium a track path is resolved against.
///
/// This driver always plays from the on-board flash; the other sources exist
/// in the module's command set and are kept for completeness.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum DiskSource {
    Usb = 0x00,
    Sd = 0x01,
    Flash = 0x02,
    /// No medium selected (reported by the module when nothing is inserted).
    None = 0xFF,
}

impl DiskSource {
    /// Tries to convert a raw byte into a DiskSource.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(DiskSource::Usb),
            0x01 => Some(DiskSource::Sd),
            0x02 => Some(DiskSource::Flash),
            0xFF => Some(DiskSource::None),
            _ => None,
        }
    }
}

/// Playback state selector used by the transport-control commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum PlayState {
    Stop = 0x00,
    Start = 0x01,
    Pause = 0x02,
}

impl PlayState {
    /// Tries to convert a raw byte into a PlayState.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(PlayState::Stop),
            0x01 => Some(PlayState::Start),
            0x02 => Some(PlayState::Pause),
            _ => None,
        }
    }
}

/// Loop behavior applied to subsequent playback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum PlayModel {
    /// Loop over every track on the medium.
    AllLoop = 0x00,
    /// Repeat the current track.
    SingleLoop = 0x01,
    /// Play the current track once, then stop.
    SingleStop = 0x02,
}

impl PlayModel {
    /// Tries to convert a raw byte into a PlayModel.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(PlayModel::AllLoop),
            0x01 => Some(PlayModel::SingleLoop),
            0x02 => Some(PlayModel::SingleStop),
            _ => None,
        }
    }
}

impl Default for PlayModel {
    /// The model the driver assumes when none has been selected.
    fn default() -> Self {
        PlayModel::SingleLoop
    }
}

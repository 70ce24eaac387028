//! DY-SVxxx command definitions.
//!
//! One variant per supported command, each encoding into a fixed payload
//! layout behind the shared frame format (start byte, opcode, payload,
//! additive checksum).

use super::error::EncodeError;
use super::frame::{self, FrameBuffer, PayloadBuffer};
use super::path::TrackPath;
use super::types::{DiskSource, PlayModel, PlayState};

/// Loop count the module assumes when none has been set.
pub const DEFAULT_LOOP_COUNT: u16 = 30;

/// Highest volume step the module accepts.
pub const MAX_VOLUME: u8 = 30;

/// Opcode byte identifying which command a frame encodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Opcode {
    Stop = 0x04,
    Play = 0x08,
    SetVolume = 0x13,
    SetPlayModel = 0x18,
    SetLoopCount = 0x19,
}

/// Represents one command in the module's serial command set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Selects the loop behavior for subsequent playback.
    SetPlayModel { model: PlayModel },

    /// Sets how many times a looping track repeats. The full 16-bit range is
    /// accepted and split big-endian on the wire.
    SetLoopCount { count: u16 },

    /// Sets the output volume, 0 to [`MAX_VOLUME`].
    SetVolume { volume: u8 },

    /// Starts playback of a file on the on-board flash.
    Play { path: TrackPath<'a> },

    /// Stops playback.
    Stop,
}

impl<'a> Command<'a> {
    /// Returns the opcode this command carries on the wire.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Command::SetPlayModel { .. } => Opcode::SetPlayModel,
            Command::SetLoopCount { .. } => Opcode::SetLoopCount,
            Command::SetVolume { .. } => Opcode::SetVolume,
            Command::Play { .. } => Opcode::Play,
            Command::Stop => Opcode::Stop,
        }
    }

    /// Appends this command's payload bytes, checking the per-command
    /// preconditions before anything is written.
    fn encode_payload_into(&self, payload: &mut PayloadBuffer) -> Result<(), EncodeError> {
        match self {
            Command::SetPlayModel { model } => {
                payload.push(0x01);
                payload.push(*model as u8);
            }
            Command::SetLoopCount { count } => {
                // Big-endian split; the high byte must be shifted down, not
                // just masked, or any count >= 256 encodes wrong.
                payload.push(0x02);
                payload.push(((*count >> 8) & 0xFF) as u8);
                payload.push((*count & 0xFF) as u8);
            }
            Command::SetVolume { volume } => {
                if *volume > MAX_VOLUME {
                    return Err(EncodeError::VolumeOutOfRange {
                        volume: *volume,
                        max: MAX_VOLUME,
                    });
                }
                payload.push(0x01);
                payload.push(*volume);
            }
            Command::Play { path } => {
                // Declared length counts the encoded path plus the
                // disk-source byte that precedes it.
                payload.push((path.encoded_len() + 1) as u8);
                payload.push(DiskSource::Flash as u8);
                path.encode_into(payload)?;
            }
            Command::Stop => {
                payload.push(PlayState::Stop as u8);
            }
        }
        Ok(())
    }

    /// Encodes this command into a complete, checksum-terminated frame.
    ///
    /// Pure; the returned buffer is ready to hand to a transport byte for
    /// byte. Precondition violations fail here, before any transmission.
    pub fn encode_frame(&self) -> Result<FrameBuffer, EncodeError> {
        let mut payload = PayloadBuffer::new();
        self.encode_payload_into(&mut payload)?;
        frame::build_frame(self.opcode() as u8, &payload)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::SetPlayModel as u8, 0x18);
        assert_eq!(Opcode::SetLoopCount as u8, 0x19);
        assert_eq!(Opcode::SetVolume as u8, 0x13);
        assert_eq!(Opcode::Play as u8, 0x08);
        assert_eq!(Opcode::Stop as u8, 0x04);
    }

    #[test]
    fn test_stop_frame() {
        let frame = Command::Stop.encode_frame().unwrap();
        assert_eq!(frame.as_slice(), &[0xAA, 0x04, 0x00, 0xAE]);
    }

    #[test]
    fn test_set_volume_frame() {
        let frame = Command::SetVolume { volume: 20 }.encode_frame().unwrap();
        assert_eq!(frame.as_slice(), &[0xAA, 0x13, 0x01, 0x14, 0xD2]);
    }

    #[test]
    fn test_set_volume_bounds() {
        assert!(Command::SetVolume { volume: 0 }.encode_frame().is_ok());
        assert!(Command::SetVolume { volume: MAX_VOLUME }.encode_frame().is_ok());
        assert!(matches!(
            Command::SetVolume { volume: MAX_VOLUME + 1 }.encode_frame(),
            Err(EncodeError::VolumeOutOfRange { volume: 31, max: 30 })
        ));
    }

    #[test]
    fn test_set_play_model_frame() {
        let frame = Command::SetPlayModel {
            model: PlayModel::SingleLoop,
        }
        .encode_frame()
        .unwrap();
        assert_eq!(frame.as_slice(), &[0xAA, 0x18, 0x01, 0x01, 0xC4]);
    }

    #[test]
    fn test_set_loop_count_split_is_shifted() {
        let frame = Command::SetLoopCount { count: 300 }.encode_frame().unwrap();
        // 300 = 0x012C; high byte 0x01 only falls out with a real shift
        assert_eq!(frame.as_slice(), &[0xAA, 0x19, 0x02, 0x01, 0x2C, 0xF2]);
    }

    #[test]
    fn test_set_loop_count_extremes() {
        let zero = Command::SetLoopCount { count: 0 }.encode_frame().unwrap();
        assert_eq!(&zero[2..5], &[0x02, 0x00, 0x00]);

        let max = Command::SetLoopCount { count: u16::MAX }.encode_frame().unwrap();
        assert_eq!(&max[2..5], &[0x02, 0xFF, 0xFF]);

        let small = Command::SetLoopCount {
            count: DEFAULT_LOOP_COUNT,
        }
        .encode_frame()
        .unwrap();
        assert_eq!(&small[2..5], &[0x02, 0x00, 30]);
    }

    #[test]
    fn test_play_frame() {
        let path = TrackPath::new("/00001.mp3").unwrap();
        let frame = Command::Play { path }.encode_frame().unwrap();

        // Payload: declared length 11 (10 path bytes + disk byte), flash
        // source, then the transformed path.
        let mut expected = [0u8; 15];
        expected[..4].copy_from_slice(&[0xAA, 0x08, 0x0B, 0x02]);
        expected[4..14].copy_from_slice(b"/00001*MP3");
        expected[14] = 0xD9;
        assert_eq!(frame.as_slice(), &expected);
    }

    #[test]
    fn test_play_frame_checksum_invariant() {
        let path = TrackPath::new("/music/LONG_name.wav").unwrap();
        let frame = Command::Play { path }.encode_frame().unwrap();
        let (body, tail) = frame.split_at(frame.len() - 1);
        assert_eq!(tail[0], crate::common::checksum(body));
        assert_eq!(frame[0], 0xAA);
        assert_eq!(frame[1], 0x08);
        assert_eq!(frame[2], (path.encoded_len() + 1) as u8);
        assert_eq!(frame[3], DiskSource::Flash as u8);
    }

    #[test]
    fn test_play_frame_max_length_path() {
        let raw = [b'a'; 254];
        let raw_str = core::str::from_utf8(&raw).unwrap();
        let path = TrackPath::new(raw_str).unwrap();
        let frame = Command::Play { path }.encode_frame().unwrap();
        assert_eq!(frame[2], 0xFF);
        assert_eq!(frame.len(), crate::common::MAX_FRAME_LEN);
    }
}

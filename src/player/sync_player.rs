// src/player/sync_player.rs

use crate::common::{
    command::Command,
    error::DyPlayerError,
    hal_traits::DyPlayerSerial,
    path::TrackPath,
    types::PlayModel,
};
use core::fmt::Debug;

/// Drives one DY-SVxxx module over an exclusively owned serial transport.
///
/// Every command is a blocking call: the frame is built (pure, non-blocking)
/// and then handed to the transport byte by byte, spinning on `WouldBlock`
/// until the hardware accepts each one. The module processes commands
/// serially, so the player assumes at most one in-flight command; owning the
/// transport exclusively enforces that.
#[derive(Debug)]
pub struct SyncPlayer<IF>
where
    IF: DyPlayerSerial,
    IF::Error: Debug,
{
    interface: IF,
}

impl<IF> SyncPlayer<IF>
where
    IF: DyPlayerSerial,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        SyncPlayer { interface }
    }

    /// Releases the transport handle.
    pub fn into_inner(self) -> IF {
        self.interface
    }

    // --- Public Blocking Commands ---

    /// Selects the loop behavior for subsequent playback.
    pub fn set_play_model(&mut self, model: PlayModel) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetPlayModel { model })
    }

    /// Sets how many times a looping track repeats.
    ///
    /// The module boots assuming [`crate::common::DEFAULT_LOOP_COUNT`].
    pub fn set_loop_count(&mut self, count: u16) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetLoopCount { count })
    }

    /// Sets the output volume, 0 to [`crate::common::MAX_VOLUME`].
    pub fn set_volume(&mut self, volume: u8) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetVolume { volume })
    }

    /// Validates `path` and starts playback from the on-board flash.
    pub fn play(&mut self, path: &str) -> Result<(), DyPlayerError<IF::Error>> {
        let path = TrackPath::new(path).map_err(DyPlayerError::Encode)?;
        self.play_path(path)
    }

    /// Starts playback of an already validated path.
    pub fn play_path(&mut self, path: TrackPath<'_>) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::Play { path })
    }

    /// Stops playback.
    pub fn stop(&mut self) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::Stop)
    }

    // --- Frame Transmission (Private Helpers) ---

    fn send_command(&mut self, command: &Command<'_>) -> Result<(), DyPlayerError<IF::Error>> {
        let frame = command.encode_frame().map_err(DyPlayerError::Encode)?;
        self.send_frame_bytes(&frame)
    }

    fn send_frame_bytes(&mut self, bytes: &[u8]) -> Result<(), DyPlayerError<IF::Error>> {
        for byte in bytes {
            nb::block!(self.interface.write_byte(*byte)).map_err(DyPlayerError::Io)?;
        }
        nb::block!(self.interface.flush()).map_err(DyPlayerError::Io)?;
        Ok(())
    }
}

// src/player/async_player.rs

use crate::common::{
    command::Command,
    error::DyPlayerError,
    hal_traits::DyPlayerSerialAsync,
    path::TrackPath,
    types::PlayModel,
};
use core::fmt::Debug;

/// Asynchronous twin of the synchronous player.
///
/// Frame construction is identical and still pure; only the hand-off to the
/// transport awaits instead of spinning. The one-frame-at-a-time model is
/// unchanged: the transport is owned exclusively and each command completes
/// before the next begins.
#[derive(Debug)]
pub struct AsyncPlayer<IF>
where
    IF: DyPlayerSerialAsync,
    IF::Error: Debug,
{
    interface: IF,
}

impl<IF> AsyncPlayer<IF>
where
    IF: DyPlayerSerialAsync,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        AsyncPlayer { interface }
    }

    /// Releases the transport handle.
    pub fn into_inner(self) -> IF {
        self.interface
    }

    // --- Public Commands ---

    /// Selects the loop behavior for subsequent playback.
    pub async fn set_play_model(
        &mut self,
        model: PlayModel,
    ) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetPlayModel { model }).await
    }

    /// Sets how many times a looping track repeats.
    pub async fn set_loop_count(&mut self, count: u16) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetLoopCount { count }).await
    }

    /// Sets the output volume, 0 to [`crate::common::MAX_VOLUME`].
    pub async fn set_volume(&mut self, volume: u8) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::SetVolume { volume }).await
    }

    /// Validates `path` and starts playback from the on-board flash.
    pub async fn play(&mut self, path: &str) -> Result<(), DyPlayerError<IF::Error>> {
        let path = TrackPath::new(path).map_err(DyPlayerError::Encode)?;
        self.play_path(path).await
    }

    /// Starts playback of an already validated path.
    pub async fn play_path(&mut self, path: TrackPath<'_>) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::Play { path }).await
    }

    /// Stops playback.
    pub async fn stop(&mut self) -> Result<(), DyPlayerError<IF::Error>> {
        self.send_command(&Command::Stop).await
    }

    // --- Frame Transmission (Private Helper) ---

    async fn send_command(&mut self, command: &Command<'_>) -> Result<(), DyPlayerError<IF::Error>> {
        let frame = command.encode_frame().map_err(DyPlayerError::Encode)?;
        for byte in &frame {
            self.interface
                .write_byte(*byte)
                .await
                .map_err(DyPlayerError::Io)?;
        }
        self.interface.flush().await.map_err(DyPlayerError::Io)?;
        Ok(())
    }
}

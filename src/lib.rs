// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod player;

// Re-export key types for convenience
pub use common::{Command, DyPlayerError, DyPlayerSerial, PlayModel, TrackPath};
pub use player::SyncPlayer;

#[cfg(feature = "async")]
pub use player::AsyncPlayer;

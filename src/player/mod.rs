// src/player/mod.rs

// Declare the sub-modules
pub mod sync_player;

// Re-export the public SyncPlayer struct
pub use sync_player::SyncPlayer;

// Asynchronous player (feature-gated)
#[cfg(feature = "async")]
pub mod async_player;

#[cfg(feature = "async")]
pub use async_player::AsyncPlayer;

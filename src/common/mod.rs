// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod command;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod path;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::checksum;

// From command.rs
pub use command::{Command, Opcode, DEFAULT_LOOP_COUNT, MAX_VOLUME};

// From error.rs
pub use error::{DyPlayerError, EncodeError};

// From frame.rs
pub use frame::{
    build_frame, FrameBuffer, PayloadBuffer, MAX_FRAME_LEN, MAX_PAYLOAD_LEN, START_BYTE,
};

// From hal_traits.rs
pub use hal_traits::DyPlayerSerial; // Core sync trait

// From path.rs
pub use path::{TrackPath, MAX_PATH_LEN};

// From timing.rs (constants - users can access via common::timing::*)

// From types.rs
pub use types::{DiskSource, PlayModel, PlayState};

// --- Feature-gated re-exports ---

// Async trait (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::DyPlayerSerialAsync;

// embedded-hal integration (from hal_traits.rs)
#[cfg(feature = "impl-embedded-hal")]
pub use hal_traits::EmbeddedHalAdapter;

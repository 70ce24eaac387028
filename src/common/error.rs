// src/common/error.rs

/// Precondition violation detected while encoding a command.
///
/// Raised before any frame byte is handed to the transport: the module has no
/// feedback channel, so a malformed frame would be undetectable once sent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// Path contains a byte outside the printable ASCII charset.
    #[error("path byte outside printable ASCII: {0:#04x}")]
    InvalidPathByte(u8),

    /// Encoded path would overflow the single-byte length field.
    #[error("path too long: {len} bytes, max {max}")]
    PathTooLong { len: usize, max: usize },

    /// Volume step above the module's accepted range.
    #[error("volume {volume} out of range, max {max}")]
    VolumeOutOfRange { volume: u8, max: u8 },

    /// Payload does not fit the frame buffer.
    #[error("frame buffer overflow")]
    FrameOverflow,
}

#[derive(Debug, thiserror::Error)]
pub enum DyPlayerError<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Io error
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// Command could not be encoded into a valid frame.
    #[error("command encoding failed: {0}")]
    Encode(EncodeError),
}

// Allow mapping from underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for DyPlayerError<E> {
    fn from(e: E) -> Self {
        DyPlayerError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
// `Debug` is the minimum requirement for the format string used here.

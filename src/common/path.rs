// src/common/path.rs

use super::error::EncodeError;
use arrayvec::ArrayVec;
use core::convert::TryFrom;
use core::fmt;

/// Maximum number of encoded path characters in a Play payload.
/// The declared length byte carries the encoded length plus one (for the
/// disk-source byte), so the path itself caps one below the byte maximum.
pub const MAX_PATH_LEN: usize = 254;

/// A track path accepted by the module, e.g. `/00001.mp3`.
///
/// Validation covers the charset (printable ASCII) and the single-byte length
/// field of the Play payload. The on-wire transformation (`.` to `*`,
/// uppercase) happens at encode time; the wrapped string keeps its original
/// spelling.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TrackPath<'a>(&'a str);

impl<'a> TrackPath<'a> {
    /// Creates a new `TrackPath` if the given string is encodable.
    pub fn new(path: &'a str) -> Result<Self, EncodeError> {
        if path.len() > MAX_PATH_LEN {
            return Err(EncodeError::PathTooLong {
                len: path.len(),
                max: MAX_PATH_LEN,
            });
        }
        if let Some(byte) = path.bytes().find(|b| !Self::is_valid_path_byte(*b)) {
            return Err(EncodeError::InvalidPathByte(byte));
        }
        Ok(TrackPath(path))
    }

    /// Wraps a string without validating it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee the string is printable ASCII and at most
    /// [`MAX_PATH_LEN`] bytes, or the encoded payload will be malformed.
    pub const unsafe fn new_unchecked(path: &'a str) -> Self {
        TrackPath(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Number of bytes the encoded path occupies on the wire.
    /// The transformation is byte-for-byte, so this equals the input length.
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_valid_path_byte(b: u8) -> bool {
        matches!(b, 0x20..=0x7E)
    }

    /// Appends the wire form of the path: `.` becomes `*`, letters are
    /// uppercased, each character is its single-byte ASCII code, in original
    /// order. Re-encoding an already encoded path yields the same bytes.
    pub fn encode_into<const CAP: usize>(
        &self,
        out: &mut ArrayVec<u8, CAP>,
    ) -> Result<(), EncodeError> {
        for byte in self.0.bytes() {
            let encoded = match byte {
                b'.' => b'*',
                b => b.to_ascii_uppercase(),
            };
            out.try_push(encoded)
                .map_err(|_| EncodeError::FrameOverflow)?;
        }
        Ok(())
    }
}

impl<'a> TryFrom<&'a str> for TrackPath<'a> {
    type Error = EncodeError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TrackPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

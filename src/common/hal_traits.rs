// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the write side of the serial link to the module.
///
/// The control link is one-directional at this layer: the driver only ever
/// transmits, so no read operation is part of the contract. Line settings are
/// fixed (see [`crate::common::timing`]) and configured by the HAL owner, not
/// through this trait.
pub trait DyPlayerSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Ok(())` if the byte was accepted for transmission, or
    /// `Err(nb::Error::WouldBlock)` if the write buffer is full. Other errors
    /// are returned as `Err(nb::Error::Other(Self::Error))`.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have
    /// been sent.
    ///
    /// Returns `Ok(())` if the flush completed, or `Err(nb::Error::WouldBlock)`
    /// if transmission is still in progress.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;
}

/// Abstraction for asynchronous transmission (requires the 'async' feature).
#[cfg(feature = "async")]
pub trait DyPlayerSerialAsync {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Asynchronously writes a single byte to the serial interface.
    async fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Asynchronously flushes the transmit buffer.
    async fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Adapts any nb-flavored embedded-hal serial writer to [`DyPlayerSerial`].
///
/// Wrap a HAL UART in this to drive a module without writing glue:
/// `SyncPlayer::new(EmbeddedHalAdapter(uart))`.
#[cfg(feature = "impl-embedded-hal")]
#[derive(Debug)]
pub struct EmbeddedHalAdapter<T>(pub T);

#[cfg(feature = "impl-embedded-hal")]
impl<T> EmbeddedHalAdapter<T> {
    /// Releases the wrapped HAL writer.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "impl-embedded-hal")]
impl<T> DyPlayerSerial for EmbeddedHalAdapter<T>
where
    T: embedded_hal_nb::serial::Write<u8>,
{
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        self.0.write(byte)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.0.flush()
    }
}

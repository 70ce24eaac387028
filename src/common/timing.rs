// src/common/timing.rs

use core::time::Duration;

// The module's control UART runs at a fixed rate with 8 data bits, no parity
// and 1 stop bit. There is no configuration command; the HAL owner sets the
// line up once and the constants here exist for transmit-time math on hosts
// that need it.

/// Control link baud rate (module default).
pub const BAUD_RATE: u32 = 9600;

// === Byte Timing at 9600 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte
// Time per bit = 1 / 9600 seconds = 104.17 us
// Time per byte = 10 / 9600 seconds = 1.0417 ms

/// Nominal duration of a single bit at 9600 baud.
pub const BIT_DURATION: Duration = Duration::from_nanos(104_167); // Approx 104.2 us

/// Nominal duration of a single byte (10 bits total) at 9600 baud (8N1 format).
pub const BYTE_DURATION: Duration = Duration::from_micros(1042); // Approx 1.04 ms

//! Low-level bit cursor primitives for the smol codec.
//!
//! This crate provides [`BitCursor`], the resumable LSB-first reader that
//! drives tANS state transitions during decompression. It is designed for
//! bounded, panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All word fetches are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about decode tables,
//!   instruction streams, or pixel data.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::BitCursor;
//!
//! let data = 0x0000_002Du32.to_le_bytes();
//! let mut cursor = BitCursor::new(&data);
//! assert_eq!(cursor.read_renorm(3, 0b111).unwrap(), 0b101);
//! assert_eq!(cursor.read_renorm(3, 0b111).unwrap(), 0b101);
//! ```

mod cursor;
mod error;

pub use cursor::BitCursor;
pub use error::{BitError, BitResult};

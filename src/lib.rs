//! # Game Packet Reader
//!
//! Decoder for the binary packet format of a legacy multiplayer game protocol.
//!
//! Packets are read as a sequence of typed fields: fixed-width integers in four byte
//! orders with optional per-field obfuscation, variable-length "smart" integers,
//! raw or transformed byte arrays, zero-terminated strings, and bit-packed runs.
//! Framing, opcodes, ciphers and transport are left to the caller.
//!
//! ## Modules
//! - [`core`]: the reader, buffer abstraction and wire types
//! - [`config`]: TOML/environment configuration
//! - [`error`]: the crate's error type
//! - [`utils`]: logging setup
//!
//! ## Example
//! ```rust
//! use game_packet_reader::prelude::*;
//!
//! # fn main() -> game_packet_reader::error::Result<()> {
//! let mut buf = GameBuffer::from(&[0x00, 0x2A, b'h', b'i', 0x00, 0xC0][..]);
//! let mut reader = GamePacketReader::new(&mut buf);
//!
//! assert_eq!(reader.get_unsigned(DataType::Short)?, 42);
//! assert_eq!(reader.get_string()?, "hi");
//!
//! reader.switch_to_bit_access();
//! assert_eq!(reader.get_bits(2)?, 0b11);
//! reader.switch_to_byte_access();
//! assert_eq!(reader.readable_bytes()?, 0);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

/// Commonly used types
pub mod prelude {
    pub use crate::core::buffer::{GameBuffer, PacketBuffer};
    pub use crate::core::charset::StringCharset;
    pub use crate::core::reader::GamePacketReader;
    pub use crate::core::types::{AccessMode, DataOrder, DataTransformation, DataType};
    pub use crate::error::{DecodeError, Result};
}

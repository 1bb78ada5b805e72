//! # Error Types
//!
//! Error handling for the packet reader.
//!
//! Every decode call either succeeds completely or fails with one of the variants
//! below before touching the buffer. Callers are expected to abandon the enclosing
//! packet on any error.
//!
//! ## Error Categories
//! - **Mode Errors**: a byte call made in bit mode, or the reverse
//! - **Argument Errors**: illegal order/type/transformation combinations, bad bit counts
//! - **Underflow Errors**: the buffer holds fewer bytes or bits than the field needs
//! - **Configuration Errors**: config files or logging setup that could not be applied
//!
//! ## Example Usage
//! ```rust
//! use game_packet_reader::core::buffer::GameBuffer;
//! use game_packet_reader::core::reader::GamePacketReader;
//! use game_packet_reader::core::types::DataType;
//! use game_packet_reader::error::{DecodeError, Result};
//!
//! fn read_opcode(reader: &mut GamePacketReader<GameBuffer>) -> Result<u64> {
//!     reader.get_unsigned(DataType::Byte)
//! }
//!
//! let mut reader = GamePacketReader::new(GameBuffer::default());
//! assert!(matches!(read_opcode(&mut reader), Err(DecodeError::Underflow { .. })));
//! ```

use crate::core::types::AccessMode;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Middle-endian argument errors
    pub const ERR_MIDDLE_TRANSFORMED: &str = "Middle endian cannot be transformed";
    pub const ERR_MIDDLE_NOT_INT: &str = "Middle endian can only be used with an integer";
    pub const ERR_INVERSED_MIDDLE_TRANSFORMED: &str =
        "Inversed middle endian cannot be transformed";
    pub const ERR_INVERSED_MIDDLE_NOT_INT: &str =
        "Inversed middle endian can only be used with an integer";

    /// Bit access errors
    pub const ERR_BIT_AMOUNT: &str = "Number of bits must be between 1 and 32 inclusive";

    /// Logging setup errors
    pub const ERR_LOGGING_INIT: &str = "Global tracing subscriber already installed";
}

/// DecodeError is the error type for every reader operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("For {expected}-based calls to work, the mode must be {expected} access")]
    InvalidMode { expected: AccessMode },

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Buffer underflow: requested {requested}, available {available}")]
    Underflow { requested: usize, available: usize },

    #[error("String exceeds maximum length of {limit} bytes")]
    StringTooLong { limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using DecodeError
pub type Result<T> = std::result::Result<T, DecodeError>;

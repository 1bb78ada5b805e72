//! # Wire Types
//!
//! Closed enumerations describing how a field is laid out on the wire: its width,
//! the arrangement of its bytes, and the obfuscation applied to its low byte.

use std::fmt;

/// Mask of the low `n` bits, indexed by `n` (0..=32).
pub const BIT_MASK: [u32; 33] = {
    let mut masks = [0u32; 33];
    let mut i = 1;
    while i < 33 {
        masks[i] = if i == 32 { u32::MAX } else { (1 << i) - 1 };
        i += 1;
    }
    masks
};

/// Cursor granularity of a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// The buffer's reader index is authoritative
    #[default]
    Byte,
    /// The reader's bit index is authoritative
    Bit,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Byte => f.write_str("byte"),
            AccessMode::Bit => f.write_str("bit"),
        }
    }
}

/// Width of a fixed-size integer field. Carries no signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Byte,
    Short,
    Medium,
    Int,
    Long,
}

impl DataType {
    /// Number of bytes occupied on the wire
    pub const fn bytes(self) -> usize {
        match self {
            DataType::Byte => 1,
            DataType::Short => 2,
            DataType::Medium => 3,
            DataType::Int => 4,
            DataType::Long => 8,
        }
    }

    /// Largest value representable when the field is read as signed
    pub const fn signed_max(self) -> i64 {
        match self {
            DataType::Long => i64::MAX,
            _ => (1i64 << (self.bytes() * 8 - 1)) - 1,
        }
    }
}

/// Physical arrangement of a multi-byte value's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrder {
    Big,
    Little,
    /// `b0 b1 b2 b3` placed as `(b0 << 8) | b1 | (b2 << 24) | (b3 << 16)`. Int only.
    Middle,
    /// `b0 b1 b2 b3` placed as `(b0 << 16) | (b1 << 24) | b2 | (b3 << 8)`. Int only.
    InversedMiddle,
}

/// Reversible obfuscation applied to the byte holding bits 0-7 of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataTransformation {
    #[default]
    None,
    Add,
    Subtract,
    Negate,
}

impl DataTransformation {
    /// Undo the transformation on a raw wire byte.
    ///
    /// The formulas operate on the byte as a signed value and are masked back
    /// to 0-255, so wrapping arithmetic on `u8` is equivalent.
    #[inline]
    pub const fn apply(self, raw: u8) -> u8 {
        match self {
            DataTransformation::None => raw,
            DataTransformation::Add => raw.wrapping_sub(128),
            DataTransformation::Subtract => 128u8.wrapping_sub(raw),
            DataTransformation::Negate => raw.wrapping_neg(),
        }
    }
}

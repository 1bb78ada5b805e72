//! # Game Packet Reader
//!
//! Decodes typed fields from a [`PacketBuffer`] using the legacy game wire rules.
//!
//! A reader is always in one of two access modes. In byte mode the buffer's reader
//! index is the cursor and fixed-width integers, smart integers, byte arrays and
//! strings can be read. In bit mode the reader's own bit index is the cursor and only
//! [`get_bits`](GamePacketReader::get_bits) is allowed. Switching back to byte mode
//! rounds the cursor up to the next whole byte.
//!
//! ## Field Layouts
//! - **Orders**: big, little, and the two int-only middle-endian layouts
//! - **Transformations**: add/subtract/negate applied to the value's low byte
//! - **Smart integers**: one byte for -64..=63, two bytes for -16384..=16383
//!
//! Every operation validates mode, arguments and available data before consuming
//! anything, so a failed call leaves both cursors where they were.
//!
//! ## Usage
//! ```rust
//! use game_packet_reader::core::buffer::GameBuffer;
//! use game_packet_reader::core::reader::GamePacketReader;
//! use game_packet_reader::core::types::{DataOrder, DataTransformation, DataType};
//!
//! let mut reader = GamePacketReader::new(GameBuffer::from(&[0x01, 0x82, 0b1010_0000][..]));
//! assert_eq!(reader.get_unsigned(DataType::Byte).unwrap(), 1);
//! assert_eq!(
//!     reader
//!         .get_signed_ordered(DataType::Byte, DataOrder::Big, DataTransformation::Add)
//!         .unwrap(),
//!     2
//! );
//!
//! reader.switch_to_bit_access();
//! assert_eq!(reader.get_bits(3).unwrap(), 0b101);
//! ```

use crate::config::DecoderConfig;
use crate::core::buffer::PacketBuffer;
use crate::core::charset::StringCharset;
use crate::core::types::{AccessMode, DataOrder, DataTransformation, DataType, BIT_MASK};
use crate::error::{constants, DecodeError, Result};
use tracing::{debug, trace};

/// Largest bit run a single [`GamePacketReader::get_bits`] call can return
pub const MAX_BITS: u32 = 32;

/// Stateful decoder over a borrowed or owned [`PacketBuffer`]
#[derive(Debug)]
pub struct GamePacketReader<B: PacketBuffer> {
    buffer: B,
    mode: AccessMode,
    bit_index: usize,
    max_string_length: Option<usize>,
    charset: StringCharset,
}

impl<B: PacketBuffer> GamePacketReader<B> {
    /// Create a reader in byte mode with default decoder settings
    pub fn new(buffer: B) -> Self {
        Self::with_config(buffer, &DecoderConfig::default())
    }

    /// Create a reader in byte mode with explicit decoder settings
    pub fn with_config(buffer: B, config: &DecoderConfig) -> Self {
        Self {
            buffer,
            mode: AccessMode::Byte,
            bit_index: 0,
            max_string_length: config.max_string_length,
            charset: config.charset,
        }
    }

    pub fn access_mode(&self) -> AccessMode {
        self.mode
    }

    /// Bit cursor. Only meaningful in bit mode.
    pub fn bit_index(&self) -> usize {
        self.bit_index
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Release the buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }

    // ------------------------------------------------------------------
    // Mode control
    // ------------------------------------------------------------------

    /// Enter bit mode, starting the bit cursor at the current byte position
    pub fn switch_to_bit_access(&mut self) {
        if self.mode == AccessMode::Bit {
            return;
        }

        self.mode = AccessMode::Bit;
        self.bit_index = self.buffer.reader_index() * 8;
        trace!(bit_index = self.bit_index, "Switched to bit access");
    }

    /// Enter byte mode. A partially read byte counts as consumed.
    pub fn switch_to_byte_access(&mut self) {
        if self.mode == AccessMode::Byte {
            return;
        }

        self.mode = AccessMode::Byte;
        self.buffer.set_reader_index(self.bit_index.div_ceil(8));
        trace!(
            reader_index = self.buffer.reader_index(),
            "Switched to byte access"
        );
    }

    fn check_mode(&self, expected: AccessMode) -> Result<()> {
        if self.mode != expected {
            debug!(current = %self.mode, %expected, "Rejected call in wrong access mode");
            return Err(DecodeError::InvalidMode { expected });
        }
        Ok(())
    }

    fn ensure_readable(&self, requested: usize) -> Result<()> {
        let available = self.buffer.readable_bytes();
        if requested > available {
            debug!(requested, available, "Rejected read past end of buffer");
            return Err(DecodeError::Underflow {
                requested,
                available,
            });
        }
        Ok(())
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        self.buffer.read_u8().ok_or(DecodeError::Underflow {
            requested: 1,
            available: 0,
        })
    }

    // ------------------------------------------------------------------
    // Bit access
    // ------------------------------------------------------------------

    pub fn get_bit(&mut self) -> Result<u32> {
        self.get_bits(1)
    }

    /// Read `amount` bits (1..=32), most significant bit first within each byte.
    ///
    /// A 32-bit read keeps the top bit as data.
    pub fn get_bits(&mut self, amount: u32) -> Result<u32> {
        self.check_mode(AccessMode::Bit)?;
        if amount == 0 || amount > MAX_BITS {
            debug!(amount, "Rejected bit amount");
            return Err(DecodeError::InvalidArgument(constants::ERR_BIT_AMOUNT));
        }

        let mut amount = amount as usize;
        let available = (self.buffer.writer_index() * 8).saturating_sub(self.bit_index);
        if amount > available {
            debug!(requested = amount, available, "Rejected bit read past end of buffer");
            return Err(DecodeError::Underflow {
                requested: amount,
                available,
            });
        }

        let mut byte_pos = self.bit_index >> 3;
        let mut bit_offset = 8 - (self.bit_index & 7);
        let mut value = 0u32;
        self.bit_index += amount;

        while amount > bit_offset {
            let byte = u32::from(self.peek_byte(byte_pos)?);
            value |= (byte & BIT_MASK[bit_offset]) << (amount - bit_offset);
            byte_pos += 1;
            amount -= bit_offset;
            bit_offset = 8;
        }

        let byte = u32::from(self.peek_byte(byte_pos)?);
        if amount == bit_offset {
            value |= byte & BIT_MASK[bit_offset];
        } else {
            value |= (byte >> (bit_offset - amount)) & BIT_MASK[amount];
        }
        Ok(value)
    }

    #[inline]
    fn peek_byte(&self, index: usize) -> Result<u8> {
        self.buffer.get_u8(index).ok_or(DecodeError::Underflow {
            requested: 1,
            available: 0,
        })
    }

    // ------------------------------------------------------------------
    // Fixed-width integers
    // ------------------------------------------------------------------

    /// Read a `data_type`-wide value with the given layout, without sign extension.
    ///
    /// The transformation is undone on whichever byte ends up in bits 0-7.
    pub fn read_raw(
        &mut self,
        data_type: DataType,
        order: DataOrder,
        transformation: DataTransformation,
    ) -> Result<u64> {
        self.check_mode(AccessMode::Byte)?;
        validate_layout(data_type, order, transformation)?;
        let length = data_type.bytes();
        self.ensure_readable(length)?;

        let mut value = 0u64;
        match order {
            DataOrder::Big => {
                for i in (0..length).rev() {
                    let byte = self.read_byte()?;
                    value |= if i == 0 {
                        u64::from(transformation.apply(byte))
                    } else {
                        u64::from(byte) << (i * 8)
                    };
                }
            }
            DataOrder::Little => {
                for i in 0..length {
                    let byte = self.read_byte()?;
                    value |= if i == 0 {
                        u64::from(transformation.apply(byte))
                    } else {
                        u64::from(byte) << (i * 8)
                    };
                }
            }
            DataOrder::Middle => {
                let [b0, b1, b2, b3] = self.read_quad()?;
                value = (b0 << 8) | b1 | (b2 << 24) | (b3 << 16);
            }
            DataOrder::InversedMiddle => {
                let [b0, b1, b2, b3] = self.read_quad()?;
                value = (b0 << 16) | (b1 << 24) | b2 | (b3 << 8);
            }
        }
        Ok(value)
    }

    fn read_quad(&mut self) -> Result<[u64; 4]> {
        let mut quad = [0u64; 4];
        for slot in quad.iter_mut() {
            *slot = u64::from(self.read_byte()?);
        }
        Ok(quad)
    }

    /// Big-endian, untransformed unsigned read
    pub fn get_unsigned(&mut self, data_type: DataType) -> Result<u64> {
        self.get_unsigned_ordered(data_type, DataOrder::Big, DataTransformation::None)
    }

    /// Big-endian unsigned read with a transformation
    pub fn get_unsigned_with(
        &mut self,
        data_type: DataType,
        transformation: DataTransformation,
    ) -> Result<u64> {
        self.get_unsigned_ordered(data_type, DataOrder::Big, transformation)
    }

    pub fn get_unsigned_ordered(
        &mut self,
        data_type: DataType,
        order: DataOrder,
        transformation: DataTransformation,
    ) -> Result<u64> {
        self.read_raw(data_type, order, transformation)
    }

    /// Big-endian, untransformed signed read
    pub fn get_signed(&mut self, data_type: DataType) -> Result<i64> {
        self.get_signed_ordered(data_type, DataOrder::Big, DataTransformation::None)
    }

    /// Big-endian signed read with a transformation
    pub fn get_signed_with(
        &mut self,
        data_type: DataType,
        transformation: DataTransformation,
    ) -> Result<i64> {
        self.get_signed_ordered(data_type, DataOrder::Big, transformation)
    }

    /// Signed read. Values narrower than 8 bytes are sign extended from their top bit.
    pub fn get_signed_ordered(
        &mut self,
        data_type: DataType,
        order: DataOrder,
        transformation: DataTransformation,
    ) -> Result<i64> {
        let raw = self.read_raw(data_type, order, transformation)?;
        Ok(sign_extend(raw, data_type))
    }

    // ------------------------------------------------------------------
    // Smart integers
    // ------------------------------------------------------------------

    /// Read a signed smart: one byte biased by 64, or two bytes biased by 49152
    /// when the first byte's top bit is set.
    pub fn get_signed_smart(&mut self) -> Result<i32> {
        self.check_mode(AccessMode::Byte)?;
        let peek = self
            .buffer
            .get_u8(self.buffer.reader_index())
            .ok_or(DecodeError::Underflow {
                requested: 1,
                available: 0,
            })?;

        if peek < 128 {
            Ok(i32::from(self.read_byte()?) - 64)
        } else {
            self.ensure_readable(2)?;
            let high = i32::from(self.read_byte()?);
            let low = i32::from(self.read_byte()?);
            Ok(((high << 8) | low) - 49152)
        }
    }

    // ------------------------------------------------------------------
    // Arrays and strings
    // ------------------------------------------------------------------

    /// Fill `bytes` front to back with raw bytes
    pub fn get_bytes(&mut self, bytes: &mut [u8]) -> Result<()> {
        self.check_mode(AccessMode::Byte)?;
        self.ensure_readable(bytes.len())?;
        for slot in bytes.iter_mut() {
            *slot = self.read_byte()?;
        }
        Ok(())
    }

    /// Fill `bytes` back to front with raw bytes
    pub fn get_bytes_reverse(&mut self, bytes: &mut [u8]) -> Result<()> {
        self.check_mode(AccessMode::Byte)?;
        self.ensure_readable(bytes.len())?;
        for slot in bytes.iter_mut().rev() {
            *slot = self.read_byte()?;
        }
        Ok(())
    }

    /// Fill `bytes` front to back, undoing `transformation` on every byte.
    pub fn get_bytes_transformed_forward(
        &mut self,
        transformation: DataTransformation,
        bytes: &mut [u8],
    ) -> Result<()> {
        if transformation == DataTransformation::None {
            // Untransformed arrays are filled back to front on the wire, even here.
            return self.get_bytes_reverse(bytes);
        }

        self.check_mode(AccessMode::Byte)?;
        self.ensure_readable(bytes.len())?;
        for slot in bytes.iter_mut() {
            *slot = self.get_signed_with(DataType::Byte, transformation)? as u8;
        }
        Ok(())
    }

    /// Fill `bytes` back to front, undoing `transformation` on every byte.
    pub fn get_bytes_transformed_reverse(
        &mut self,
        transformation: DataTransformation,
        bytes: &mut [u8],
    ) -> Result<()> {
        if transformation == DataTransformation::None {
            return self.get_bytes_reverse(bytes);
        }

        self.check_mode(AccessMode::Byte)?;
        self.ensure_readable(bytes.len())?;
        for slot in bytes.iter_mut().rev() {
            *slot = self.get_signed_with(DataType::Byte, transformation)? as u8;
        }
        Ok(())
    }

    /// Read a zero-terminated string. The terminator is consumed but not returned.
    ///
    /// Unbounded unless the reader was configured with a `max_string_length`.
    pub fn get_string(&mut self) -> Result<String> {
        self.check_mode(AccessMode::Byte)?;

        let start = self.buffer.reader_index();
        let end = self.buffer.writer_index();
        let scan_end = match self.max_string_length {
            Some(limit) => end.min(start.saturating_add(limit).saturating_add(1)),
            None => end,
        };

        let terminator = (start..scan_end).find(|&i| self.buffer.get_u8(i) == Some(0));
        let Some(terminator) = terminator else {
            if let Some(limit) = self.max_string_length.filter(|_| scan_end < end) {
                debug!(limit, "Rejected oversized string");
                return Err(DecodeError::StringTooLong { limit });
            }
            let available = end.saturating_sub(start);
            debug!(available, "Rejected unterminated string");
            return Err(DecodeError::Underflow {
                requested: available + 1,
                available,
            });
        };

        let mut bytes = vec![0u8; terminator - start];
        self.get_bytes(&mut bytes)?;
        self.read_byte()?;
        Ok(self.charset.decode(&bytes))
    }

    /// Remaining writable capacity of the buffer.
    ///
    /// This is the legacy length query. Use [`readable_bytes`](Self::readable_bytes)
    /// for the number of bytes still left to decode.
    pub fn get_length(&self) -> Result<usize> {
        self.check_mode(AccessMode::Byte)?;
        Ok(self.buffer.writable_bytes())
    }

    /// Bytes left between the cursor and the end of the written data
    pub fn readable_bytes(&self) -> Result<usize> {
        self.check_mode(AccessMode::Byte)?;
        Ok(self.buffer.readable_bytes())
    }
}

/// Reject layouts the wire format never produces
fn validate_layout(
    data_type: DataType,
    order: DataOrder,
    transformation: DataTransformation,
) -> Result<()> {
    let (transformed, not_int) = match order {
        DataOrder::Big | DataOrder::Little => return Ok(()),
        DataOrder::Middle => (
            constants::ERR_MIDDLE_TRANSFORMED,
            constants::ERR_MIDDLE_NOT_INT,
        ),
        DataOrder::InversedMiddle => (
            constants::ERR_INVERSED_MIDDLE_TRANSFORMED,
            constants::ERR_INVERSED_MIDDLE_NOT_INT,
        ),
    };

    if transformation != DataTransformation::None {
        debug!(?order, ?transformation, "Rejected transformed middle endian read");
        return Err(DecodeError::InvalidArgument(transformed));
    }
    if data_type != DataType::Int {
        debug!(?order, ?data_type, "Rejected non-int middle endian read");
        return Err(DecodeError::InvalidArgument(not_int));
    }
    Ok(())
}

#[inline]
fn sign_extend(raw: u64, data_type: DataType) -> i64 {
    match data_type {
        DataType::Long => raw as i64,
        _ => {
            let max = data_type.signed_max();
            let value = raw as i64;
            if value > max {
                value - ((max + 1) * 2)
            } else {
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::core::buffer::GameBuffer;

    fn reader(bytes: &[u8]) -> GamePacketReader<GameBuffer> {
        GamePacketReader::new(GameBuffer::from(bytes))
    }

    #[test]
    fn test_starts_in_byte_mode() {
        let r = reader(&[]);
        assert_eq!(r.access_mode(), AccessMode::Byte);
        assert_eq!(r.bit_index(), 0);
    }

    #[test]
    fn test_switch_to_bit_access_uses_reader_index() {
        let mut r = reader(&[0x00, 0x00, 0x00]);
        r.get_unsigned(DataType::Short).unwrap();
        r.switch_to_bit_access();
        assert_eq!(r.access_mode(), AccessMode::Bit);
        assert_eq!(r.bit_index(), 16);
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut r = reader(&[0xFF, 0xFF]);
        r.switch_to_bit_access();
        r.get_bits(3).unwrap();
        r.switch_to_bit_access();
        assert_eq!(r.bit_index(), 3);

        r.switch_to_byte_access();
        r.switch_to_byte_access();
        assert_eq!(r.buffer().reader_index(), 1);
    }

    #[test]
    fn test_switch_back_rounds_up() {
        let mut r = reader(&[0xAB, 0xCD, 0xEF]);
        r.switch_to_bit_access();
        r.get_bits(9).unwrap();
        r.switch_to_byte_access();
        assert_eq!(r.buffer().reader_index(), 2);
        assert_eq!(r.get_unsigned(DataType::Byte).unwrap(), 0xEF);
    }

    #[test]
    fn test_switch_back_aligned_does_not_skip() {
        let mut r = reader(&[0xAB, 0xCD]);
        r.switch_to_bit_access();
        r.get_bits(8).unwrap();
        r.switch_to_byte_access();
        assert_eq!(r.get_unsigned(DataType::Byte).unwrap(), 0xCD);
    }

    #[test]
    fn test_get_bits_across_bytes() {
        // 1011_0011 0101_1100
        let mut r = reader(&[0b1011_0011, 0b0101_1100]);
        r.switch_to_bit_access();
        assert_eq!(r.get_bit().unwrap(), 1);
        assert_eq!(r.get_bits(2).unwrap(), 0b01);
        assert_eq!(r.get_bits(7).unwrap(), 0b10011_01);
        assert_eq!(r.get_bits(6).unwrap(), 0b011100);
        assert_eq!(r.bit_index(), 16);
    }

    #[test]
    fn test_get_bits_32_keeps_top_bit() {
        let mut r = reader(&[0xDE, 0xAD, 0xBE, 0xEF]);
        r.switch_to_bit_access();
        assert_eq!(r.get_bits(32).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_get_bits_32_unaligned() {
        let mut r = reader(&[0x0F, 0xFF, 0xFF, 0xFF, 0xF0]);
        r.switch_to_bit_access();
        r.get_bits(4).unwrap();
        assert_eq!(r.get_bits(32).unwrap(), u32::MAX);
        assert_eq!(r.bit_index(), 36);
    }

    #[test]
    fn test_get_bits_rejects_bad_amounts() {
        let mut r = reader(&[0xFF; 8]);
        r.switch_to_bit_access();
        assert!(matches!(r.get_bits(0), Err(DecodeError::InvalidArgument(_))));
        assert!(matches!(r.get_bits(33), Err(DecodeError::InvalidArgument(_))));
        assert_eq!(r.bit_index(), 0);
    }

    #[test]
    fn test_get_bits_underflow_leaves_cursor() {
        let mut r = reader(&[0xFF]);
        r.switch_to_bit_access();
        r.get_bits(5).unwrap();
        assert_eq!(
            r.get_bits(4),
            Err(DecodeError::Underflow {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(r.bit_index(), 5);
    }

    #[test]
    fn test_mode_violations_consume_nothing() {
        let mut r = reader(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            r.get_bits(1),
            Err(DecodeError::InvalidMode {
                expected: AccessMode::Bit
            })
        );

        r.switch_to_bit_access();
        let byte_mode = DecodeError::InvalidMode {
            expected: AccessMode::Byte,
        };
        assert_eq!(r.get_unsigned(DataType::Int), Err(byte_mode.clone()));
        assert_eq!(r.get_signed_smart(), Err(byte_mode.clone()));
        assert_eq!(r.get_bytes(&mut [0u8; 2]), Err(byte_mode.clone()));
        assert_eq!(r.get_string(), Err(byte_mode.clone()));
        assert_eq!(r.get_length(), Err(byte_mode.clone()));
        assert_eq!(r.readable_bytes(), Err(byte_mode));
        assert_eq!(r.buffer().reader_index(), 0);
        assert_eq!(r.bit_index(), 0);
    }

    #[test]
    fn test_byte_signed_and_unsigned() {
        let mut r = reader(&[0xFF, 0xFF]);
        assert_eq!(r.get_signed(DataType::Byte).unwrap(), -1);
        assert_eq!(r.get_unsigned(DataType::Byte).unwrap(), 255);
    }

    #[test]
    fn test_big_and_little_endian() {
        let mut r = reader(&[0x12, 0x34, 0x56, 0x12, 0x34, 0x56]);
        assert_eq!(r.get_unsigned(DataType::Medium).unwrap(), 0x123456);
        assert_eq!(
            r.get_unsigned_ordered(DataType::Medium, DataOrder::Little, DataTransformation::None)
                .unwrap(),
            0x563412
        );
    }

    #[test]
    fn test_big_endian_transform_hits_last_byte() {
        // value 0x1234 encoded with ADD: low byte written as 0x34 + 128
        let mut r = reader(&[0x12, 0xB4]);
        assert_eq!(
            r.get_unsigned_with(DataType::Short, DataTransformation::Add)
                .unwrap(),
            0x1234
        );
    }

    #[test]
    fn test_little_endian_transform_hits_first_byte() {
        // value 0x1234 little endian with NEGATE: low byte written as -0x34
        let mut r = reader(&[0xCC, 0x12]);
        assert_eq!(
            r.get_unsigned_ordered(DataType::Short, DataOrder::Little, DataTransformation::Negate)
                .unwrap(),
            0x1234
        );
    }

    #[test]
    fn test_subtract_transform() {
        // 128 - 0x7B = 5
        let mut r = reader(&[0x7B]);
        assert_eq!(
            r.get_signed_with(DataType::Byte, DataTransformation::Subtract)
                .unwrap(),
            5
        );
    }

    #[test]
    fn test_middle_endian() {
        let mut r = reader(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            r.get_signed_ordered(DataType::Int, DataOrder::Middle, DataTransformation::None)
                .unwrap(),
            0x03040102
        );
    }

    #[test]
    fn test_inversed_middle_endian() {
        let mut r = reader(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            r.get_unsigned_ordered(
                DataType::Int,
                DataOrder::InversedMiddle,
                DataTransformation::None
            )
            .unwrap(),
            0x02010403
        );
    }

    #[test]
    fn test_middle_endian_sign_extends() {
        // b2 lands in the top byte
        let mut r = reader(&[0x00, 0x00, 0x80, 0x00]);
        assert_eq!(
            r.get_signed_ordered(DataType::Int, DataOrder::Middle, DataTransformation::None)
                .unwrap(),
            i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_middle_endian_invalid_combinations() {
        let mut r = reader(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            r.get_signed_ordered(DataType::Short, DataOrder::Middle, DataTransformation::None),
            Err(DecodeError::InvalidArgument(constants::ERR_MIDDLE_NOT_INT))
        );
        assert_eq!(
            r.get_signed_ordered(DataType::Int, DataOrder::Middle, DataTransformation::Add),
            Err(DecodeError::InvalidArgument(
                constants::ERR_MIDDLE_TRANSFORMED
            ))
        );
        assert_eq!(
            r.get_unsigned_ordered(
                DataType::Long,
                DataOrder::InversedMiddle,
                DataTransformation::None
            ),
            Err(DecodeError::InvalidArgument(
                constants::ERR_INVERSED_MIDDLE_NOT_INT
            ))
        );
        assert_eq!(r.readable_bytes().unwrap(), 4);
    }

    #[test]
    fn test_sign_extension_widths() {
        let mut r = reader(&[0x80, 0x00, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF]);
        assert_eq!(r.get_signed(DataType::Short).unwrap(), -32768);
        assert_eq!(r.get_signed(DataType::Medium).unwrap(), -1);
        assert_eq!(r.get_signed(DataType::Int).unwrap(), i64::from(i32::MAX));
    }

    #[test]
    fn test_long_reinterpreted() {
        let mut r = reader(&[0xFF; 16]);
        assert_eq!(r.get_signed(DataType::Long).unwrap(), -1);
        assert_eq!(r.get_unsigned(DataType::Long).unwrap(), u64::MAX);
    }

    #[test]
    fn test_fixed_width_underflow_consumes_nothing() {
        let mut r = reader(&[0x01, 0x02, 0x03]);
        assert_eq!(
            r.get_unsigned(DataType::Int),
            Err(DecodeError::Underflow {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(r.readable_bytes().unwrap(), 3);
    }

    #[test]
    fn test_signed_smart_boundaries() {
        let mut r = reader(&[0x00, 0x7F, 0x80, 0x00, 0xFF, 0xFF]);
        assert_eq!(r.get_signed_smart().unwrap(), -64);
        assert_eq!(r.get_signed_smart().unwrap(), 63);
        assert_eq!(r.get_signed_smart().unwrap(), -16384);
        assert_eq!(r.get_signed_smart().unwrap(), 16383);
        assert!(matches!(
            r.get_signed_smart(),
            Err(DecodeError::Underflow { .. })
        ));
    }

    #[test]
    fn test_signed_smart_truncated_two_byte_form() {
        let mut r = reader(&[0x80]);
        assert!(r.get_signed_smart().is_err());
        assert_eq!(r.readable_bytes().unwrap(), 1);
    }

    #[test]
    fn test_get_bytes_forward_and_reverse() {
        let mut r = reader(&[1, 2, 3, 4, 5, 6]);
        let mut forward = [0u8; 3];
        let mut reverse = [0u8; 3];
        r.get_bytes(&mut forward).unwrap();
        r.get_bytes_reverse(&mut reverse).unwrap();
        assert_eq!(forward, [1, 2, 3]);
        assert_eq!(reverse, [6, 5, 4]);
    }

    #[test]
    fn test_transformed_forward_without_transformation_fills_reverse() {
        let mut r = reader(&[1, 2, 3]);
        let mut out = [0u8; 3];
        r.get_bytes_transformed_forward(DataTransformation::None, &mut out)
            .unwrap();
        assert_eq!(out, [3, 2, 1]);
    }

    #[test]
    fn test_transformed_array_every_byte() {
        let mut r = reader(&[0x81, 0x82, 0x83, 0x81, 0x82, 0x83]);
        let mut forward = [0u8; 3];
        let mut reverse = [0u8; 3];
        r.get_bytes_transformed_forward(DataTransformation::Add, &mut forward)
            .unwrap();
        r.get_bytes_transformed_reverse(DataTransformation::Add, &mut reverse)
            .unwrap();
        assert_eq!(forward, [1, 2, 3]);
        assert_eq!(reverse, [3, 2, 1]);
    }

    #[test]
    fn test_get_bytes_underflow_consumes_nothing() {
        let mut r = reader(&[1, 2]);
        let mut out = [0u8; 3];
        assert!(r
            .get_bytes_transformed_reverse(DataTransformation::Negate, &mut out)
            .is_err());
        assert_eq!(out, [0, 0, 0]);
        assert_eq!(r.readable_bytes().unwrap(), 2);
    }

    #[test]
    fn test_get_string() {
        let mut r = reader(b"hello\0world\0\x2A");
        assert_eq!(r.get_string().unwrap(), "hello");
        assert_eq!(r.get_string().unwrap(), "world");
        assert_eq!(r.get_unsigned(DataType::Byte).unwrap(), 42);
    }

    #[test]
    fn test_get_empty_string() {
        let mut r = reader(&[0x00, 0x01]);
        assert_eq!(r.get_string().unwrap(), "");
        assert_eq!(r.readable_bytes().unwrap(), 1);
    }

    #[test]
    fn test_get_string_cp1252() {
        let mut r = reader(&[b'5', 0x80, 0x00]);
        assert_eq!(r.get_string().unwrap(), "5€");
    }

    #[test]
    fn test_get_string_unterminated() {
        let mut r = reader(b"abc");
        assert_eq!(
            r.get_string(),
            Err(DecodeError::Underflow {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(r.readable_bytes().unwrap(), 3);
    }

    #[test]
    fn test_get_string_limit() {
        let config = DecoderConfig {
            max_string_length: Some(3),
            ..DecoderConfig::default()
        };
        let mut r = GamePacketReader::with_config(GameBuffer::from(&b"abc\0abcd\0"[..]), &config);
        assert_eq!(r.get_string().unwrap(), "abc");
        assert_eq!(
            r.get_string(),
            Err(DecodeError::StringTooLong { limit: 3 })
        );
    }

    #[test]
    fn test_get_string_unbounded_by_default() {
        let mut payload = vec![b'a'; 5001];
        payload.push(0x00);
        let mut r = reader(&payload);
        assert_eq!(r.get_string().unwrap().len(), 5001);
        assert_eq!(r.readable_bytes().unwrap(), 0);
    }

    #[test]
    fn test_get_bits_in_byte_mode_reports_mode_first() {
        let mut r = reader(&[0xFF]);
        for amount in [0, 1, 33] {
            assert_eq!(
                r.get_bits(amount),
                Err(DecodeError::InvalidMode {
                    expected: AccessMode::Bit
                })
            );
        }
        assert_eq!(r.readable_bytes().unwrap(), 1);
    }

    #[test]
    fn test_length_queries() {
        let mut buf = GameBuffer::with_capacity(32);
        buf.extend_from_slice(&[1, 2, 3, 4]);
        let writable = buf.writable_bytes();
        let mut r = GamePacketReader::new(&mut buf);
        r.get_unsigned(DataType::Byte).unwrap();
        assert_eq!(r.readable_bytes().unwrap(), 3);
        assert_eq!(r.get_length().unwrap(), writable);
    }

    #[test]
    fn test_borrowed_buffer_advances_owner() {
        let mut buf = GameBuffer::from(&[0x00, 0x10, 0xFF][..]);
        {
            let mut r = GamePacketReader::new(&mut buf);
            assert_eq!(r.get_unsigned(DataType::Short).unwrap(), 0x10);
        }
        assert_eq!(buf.reader_index(), 2);
    }
}

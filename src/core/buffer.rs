//! # Packet Buffer
//!
//! The byte store a [`GamePacketReader`](crate::core::reader::GamePacketReader) reads from.
//!
//! [`PacketBuffer`] is the seam between the reader and whatever owns the bytes. It
//! models a buffer with a separate reader index: bytes before the index have been
//! consumed, bytes between the index and the written extent are readable, and any
//! spare allocation after the written extent is writable.
//!
//! [`GameBuffer`] is the provided implementation, backed by [`bytes::BytesMut`].
//!
//! ## Usage
//! ```rust
//! use game_packet_reader::core::buffer::{GameBuffer, PacketBuffer};
//!
//! let mut buf = GameBuffer::from(&[0x0A, 0x0B][..]);
//! assert_eq!(buf.get_u8(1), Some(0x0B));
//! assert_eq!(buf.read_u8(), Some(0x0A));
//! assert_eq!(buf.readable_bytes(), 1);
//! ```

use bytes::{Bytes, BytesMut};

/// Byte store with absolute peeks and a sequential reader index
pub trait PacketBuffer {
    /// Byte at an absolute index, ignoring the reader index
    fn get_u8(&self, index: usize) -> Option<u8>;

    /// Consume the byte at the reader index
    fn read_u8(&mut self) -> Option<u8>;

    /// Current reader index
    fn reader_index(&self) -> usize;

    /// Reposition the reader index. Values past the written extent are clamped.
    fn set_reader_index(&mut self, index: usize);

    /// Number of bytes written to the buffer
    fn writer_index(&self) -> usize;

    /// Spare capacity after the written extent
    fn writable_bytes(&self) -> usize;

    /// Bytes between the reader index and the written extent
    fn readable_bytes(&self) -> usize {
        self.writer_index().saturating_sub(self.reader_index())
    }
}

impl<B: PacketBuffer + ?Sized> PacketBuffer for &mut B {
    fn get_u8(&self, index: usize) -> Option<u8> {
        (**self).get_u8(index)
    }

    fn read_u8(&mut self) -> Option<u8> {
        (**self).read_u8()
    }

    fn reader_index(&self) -> usize {
        (**self).reader_index()
    }

    fn set_reader_index(&mut self, index: usize) {
        (**self).set_reader_index(index)
    }

    fn writer_index(&self) -> usize {
        (**self).writer_index()
    }

    fn writable_bytes(&self) -> usize {
        (**self).writable_bytes()
    }
}

/// [`PacketBuffer`] over a `BytesMut`. The written extent is `len()`.
#[derive(Debug, Clone, Default)]
pub struct GameBuffer {
    data: BytesMut,
    reader_index: usize,
}

impl GameBuffer {
    /// Wrap existing bytes with the reader index at zero
    pub fn new(data: BytesMut) -> Self {
        Self {
            data,
            reader_index: 0,
        }
    }

    /// Empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(BytesMut::with_capacity(capacity))
    }

    /// Unconsumed bytes
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.reader_index..]
    }

    /// Append bytes after the written extent
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> BytesMut {
        self.data
    }
}

impl PacketBuffer for GameBuffer {
    #[inline]
    fn get_u8(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    #[inline]
    fn read_u8(&mut self) -> Option<u8> {
        let byte = self.data.get(self.reader_index).copied()?;
        self.reader_index += 1;
        Some(byte)
    }

    fn reader_index(&self) -> usize {
        self.reader_index
    }

    fn set_reader_index(&mut self, index: usize) {
        self.reader_index = index.min(self.data.len());
    }

    fn writer_index(&self) -> usize {
        self.data.len()
    }

    fn writable_bytes(&self) -> usize {
        self.data.capacity() - self.data.len()
    }
}

impl From<BytesMut> for GameBuffer {
    fn from(data: BytesMut) -> Self {
        Self::new(data)
    }
}

impl From<Bytes> for GameBuffer {
    fn from(data: Bytes) -> Self {
        Self::new(BytesMut::from(&data[..]))
    }
}

impl From<Vec<u8>> for GameBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(BytesMut::from(&data[..]))
    }
}

impl From<&[u8]> for GameBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(BytesMut::from(data))
    }
}

use std::borrow::Cow;

use crate::error::ErrorKind;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Storage {
    Heap(Vec<u8>),
    Direct(Box<[u8]>),
}

/// A fixed-capacity byte buffer with a read/write cursor.
///
/// A buffer is either heap-backed, in which case its backing array is exposed through [`ByteBuffer::array`], or
/// direct, in which case the contents can only be obtained by copying. The invariant
/// `0 <= position <= limit <= capacity` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    storage: Storage,
    position: usize,
    limit: usize,
}

impl ByteBuffer {
    /// Allocates a zeroed heap buffer of `capacity` bytes.
    pub fn allocate(capacity: usize) -> Self {
        Self::wrap(vec![0; capacity])
    }

    /// Allocates a zeroed direct buffer of `capacity` bytes.
    pub fn allocate_direct(capacity: usize) -> Self {
        Self::direct_from(vec![0; capacity])
    }

    /// Wraps `bytes` in a heap buffer. The position is zero and the limit is the capacity.
    pub fn wrap(bytes: Vec<u8>) -> Self {
        let limit = bytes.len();
        ByteBuffer {
            storage: Storage::Heap(bytes),
            position: 0,
            limit,
        }
    }

    /// Moves `bytes` into a direct buffer. The position is zero and the limit is the capacity.
    pub fn direct_from(bytes: Vec<u8>) -> Self {
        let limit = bytes.len();
        ByteBuffer {
            storage: Storage::Direct(bytes.into_boxed_slice()),
            position: 0,
            limit,
        }
    }

    pub fn capacity(&self) -> usize {
        self.storage().len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The number of bytes between the position and the limit
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn is_direct(&self) -> bool {
        matches!(self.storage, Storage::Direct(_))
    }

    pub fn has_array(&self) -> bool {
        !self.is_direct()
    }

    /// The backing array of a heap buffer, or `None` for a direct buffer.
    pub fn array(&self) -> Option<&[u8]> {
        match &self.storage {
            Storage::Heap(bytes) => Some(bytes),
            Storage::Direct(_) => None,
        }
    }

    /// The whole underlying storage, `capacity` bytes long.
    pub(crate) fn storage(&self) -> &[u8] {
        match &self.storage {
            Storage::Heap(bytes) => bytes,
            Storage::Direct(bytes) => bytes,
        }
    }

    /// The bytes assigned to a characteristic for this buffer.
    ///
    /// A heap buffer lends its whole backing array. A direct buffer is copied into a new array of `capacity`
    /// bytes. Position and limit are ignored either way.
    pub(crate) fn value_bytes(&self) -> Cow<'_, [u8]> {
        match &self.storage {
            Storage::Heap(bytes) => Cow::Borrowed(bytes),
            Storage::Direct(bytes) => {
                let mut copy = vec![0u8; self.capacity()];
                copy.copy_from_slice(bytes);
                Cow::Owned(copy)
            }
        }
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Heap(bytes) => bytes,
            Storage::Direct(bytes) => bytes,
        }
    }

    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.limit {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                None,
                format!("position {position} exceeds limit {}", self.limit),
            ));
        }
        self.position = position;
        Ok(())
    }

    /// Sets the limit. If the position is past the new limit it is moved back to the limit.
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.capacity() {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                None,
                format!("limit {limit} exceeds capacity {}", self.capacity()),
            ));
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    /// Copies `src` into the buffer at the position and advances the position.
    pub fn put(&mut self, src: &[u8]) -> Result<()> {
        if src.len() > self.remaining() {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                None,
                format!("buffer overflow: {} bytes into {} remaining", src.len(), self.remaining()),
            ));
        }
        let start = self.position;
        self.storage_mut()[start..start + src.len()].copy_from_slice(src);
        self.position += src.len();
        Ok(())
    }

    /// Fills `dst` from the buffer at the position and advances the position.
    pub fn get(&mut self, dst: &mut [u8]) -> Result<()> {
        if dst.len() > self.remaining() {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                None,
                format!("buffer underflow: {} bytes from {} remaining", dst.len(), self.remaining()),
            ));
        }
        let start = self.position;
        dst.copy_from_slice(&self.storage()[start..start + dst.len()]);
        self.position += dst.len();
        Ok(())
    }

    /// Sets the limit to the position and the position to zero.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Resets the position to zero and the limit to the capacity. The contents are left untouched.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        ByteBuffer::wrap(bytes)
    }
}

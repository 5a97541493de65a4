//! Large-object handles: externally stored text or binary blobs.
//!
//! A handle is opened for every drain and the reader it returns is the
//! acquired resource; dropping the reader releases it.

use std::fmt;
use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex};

/// A character large object, read back as UTF-8 bytes.
pub trait TextObject: Send + Sync {
    /// Declared length in bytes. Draining never reads past it.
    fn length(&self) -> io::Result<u64>;

    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// A binary large object.
pub trait BinaryObject: Send + Sync {
    /// Declared length in bytes. Draining never reads past it.
    fn length(&self) -> io::Result<u64>;

    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Shared handle to a [`TextObject`]. Compares by identity.
#[derive(Clone)]
pub struct TextHandle(Arc<dyn TextObject>);

impl TextHandle {
    pub fn new(object: impl TextObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    #[must_use]
    pub fn object(&self) -> &dyn TextObject {
        self.0.as_ref()
    }
}

impl PartialEq for TextHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextHandle").finish_non_exhaustive()
    }
}

/// Shared handle to a [`BinaryObject`]. Compares by identity.
#[derive(Clone)]
pub struct BinaryHandle(Arc<dyn BinaryObject>);

impl BinaryHandle {
    pub fn new(object: impl BinaryObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    #[must_use]
    pub fn object(&self) -> &dyn BinaryObject {
        self.0.as_ref()
    }
}

impl PartialEq for BinaryHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BinaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinaryHandle").finish_non_exhaustive()
    }
}

type SharedReader = Arc<Mutex<Option<Box<dyn Read + Send>>>>;

/// A one-shot binary stream. The first drain takes the reader; later
/// drains fail because the stream is already consumed.
#[derive(Clone)]
pub struct BinaryStream(SharedReader);

impl BinaryStream {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Some(Box::new(reader)))))
    }

    /// Take ownership of the underlying reader.
    pub fn take(&self) -> io::Result<Box<dyn Read + Send>> {
        let mut slot = self
            .0
            .lock()
            .map_err(|_| io::Error::other("binary stream lock poisoned"))?;
        slot.take()
            .ok_or_else(|| io::Error::other("binary stream already consumed"))
    }
}

impl PartialEq for BinaryStream {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BinaryStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinaryStream").finish_non_exhaustive()
    }
}

/// In-memory [`TextObject`].
#[derive(Debug, Clone, Default)]
pub struct MemoryText(String);

impl MemoryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextObject for MemoryText {
    fn length(&self) -> io::Result<u64> {
        Ok(self.0.len() as u64)
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.0.as_bytes())))
    }
}

/// In-memory [`BinaryObject`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBinary(Vec<u8>);

impl MemoryBinary {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl BinaryObject for MemoryBinary {
    fn length(&self) -> io::Result<u64> {
        Ok(self.0.len() as u64)
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.0.as_slice())))
    }
}

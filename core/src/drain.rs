//! Draining large-object handles and one-shot streams into memory.
//!
//! Every drain opens its own reader and drops it before returning, on the
//! success path and on every error path alike.

use std::io::{self, Read};

use recast_types::{BinaryHandle, BinaryStream, TextHandle};

/// Upper bound on the buffer reserved up front from a declared length.
const MAX_PREALLOC: usize = 1 << 20;

fn read_bounded(length: u64, reader: impl Read) -> io::Result<Vec<u8>> {
    let capacity = usize::try_from(length).map_or(MAX_PREALLOC, |len| len.min(MAX_PREALLOC));
    let mut buf = Vec::with_capacity(capacity);
    reader.take(length).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read a text object, never past its declared length.
pub fn text_object(handle: &TextHandle) -> io::Result<String> {
    let object = handle.object();
    let length = object.length()?;
    let bytes = read_bounded(length, object.open()?)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Read a binary object, never past its declared length.
pub fn binary_object(handle: &BinaryHandle) -> io::Result<Vec<u8>> {
    let object = handle.object();
    let length = object.length()?;
    read_bounded(length, object.open()?)
}

/// Read a stream to its end. The stream cannot be drained again.
pub fn stream(stream: &BinaryStream) -> io::Result<Vec<u8>> {
    let mut reader = stream.take()?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

use recast_types::{CastError, Charset, Number, Shape, Value};

use super::{Converter, unsupported};
use crate::drain;

/// Byte sequences from text (encoded in `charset`), fixed-width and
/// big-integer numbers (big-endian), streams and binary objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesConverter {
    pub charset: Charset,
}

impl BytesConverter {
    #[must_use]
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }
}

impl Converter for BytesConverter {
    type Output = Vec<u8>;

    fn convert(&self, value: &Value) -> Result<Option<Vec<u8>>, CastError> {
        let bytes = match value {
            Value::Null => return Ok(None),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Text(text) => self.charset.encode(text).map_err(|e| {
                CastError::new(value.kind(), Shape::ByteSequence).with_cause(e)
            })?,
            Value::Number(n) => encode_number(n)?,
            Value::Stream(stream) => drain::stream(stream).map_err(|e| drain_failed(value, e))?,
            Value::BinaryObject(handle) => {
                drain::binary_object(handle).map_err(|e| drain_failed(value, e))?
            }
            other => return Err(unsupported(other, Shape::ByteSequence)),
        };
        Ok(Some(bytes))
    }
}

fn drain_failed(value: &Value, cause: std::io::Error) -> CastError {
    CastError::new(value.kind(), Shape::ByteSequence)
        .with_message(format!("failed to read the {}", value.kind()))
        .with_cause(cause)
}

fn encode_number(n: &Number) -> Result<Vec<u8>, CastError> {
    match n {
        Number::Byte(v) => Ok(v.to_be_bytes().to_vec()),
        Number::Short(v) => Ok(v.to_be_bytes().to_vec()),
        Number::Int(v) => Ok(v.to_be_bytes().to_vec()),
        Number::Long(v) => Ok(v.to_be_bytes().to_vec()),
        Number::BigInt(v) => Ok(v.to_signed_bytes_be()),
        Number::Float(_) | Number::Double(_) | Number::Decimal(_) => {
            Err(CastError::new(n.width(), Shape::ByteSequence)
                .with_message("no byte encoding is defined for this width"))
        }
    }
}

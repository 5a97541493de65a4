//! Per-shape converters.
//!
//! Each converter checks source shapes in a fixed order and fails with
//! [`CastError`] on a shape it has no rule for. A null source converts to
//! `Ok(None)`. Converters are stateless apart from borrowed options and can
//! be shared across threads.

mod boolean;
mod bytes;
mod character;
mod date;
mod enumeration;
mod number;
mod pattern;
mod text;

pub use boolean::BooleanConverter;
pub use bytes::BytesConverter;
pub use character::CharacterConverter;
pub use date::{DateConverter, instant_of};
pub use enumeration::EnumConverter;
pub use number::NumberConverter;
pub use pattern::{DatePattern, ParsedDate, PatternError};
pub use text::TextConverter;

use recast_types::{CastError, Value};

/// Conversion to a single target shape.
pub trait Converter {
    type Output;

    fn convert(&self, value: &Value) -> Result<Option<Self::Output>, CastError>;
}

/// Conversion to one concrete member of a family of shapes: a numeric width,
/// a date kind or an enum type.
pub trait ConvertTo<Target: ?Sized> {
    type Output;

    fn convert_to(&self, value: &Value, target: &Target)
    -> Result<Option<Self::Output>, CastError>;
}

/// The failure for a source shape the converter has no rule for.
fn unsupported(value: &Value, to: impl std::fmt::Display) -> CastError {
    CastError::new(value.kind(), to)
}

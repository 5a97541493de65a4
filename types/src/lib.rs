//! Core value and shape types for Recast.
//!
//! This crate contains the data model of the conversion engine with no IO,
//! no async, and minimal dependencies: the dynamically typed [`Value`], the
//! closed [`Shape`] union of conversion targets, and the single [`CastError`]
//! failure type.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod enums;
mod error;
mod json;
mod lob;
mod names;
mod options;
mod shape;
mod value;

pub use enums::{CastEnum, EnumType, EnumValue};
pub use error::CastError;
pub use lob::{
    BinaryHandle, BinaryObject, BinaryStream, MemoryBinary, MemoryText, TextHandle, TextObject,
};
pub use names::{Charset, Locale, TimeZoneId, UnmappableChar};
pub use options::{CastOptions, DEFAULT_DATE_PATTERN};
pub use shape::{DateKind, NumericWidth, Shape, ShapeParseError};
pub use value::{Number, Temporal, TemporalKind, Value, ValueKind};

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;

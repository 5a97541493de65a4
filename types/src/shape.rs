//! Target shapes: the closed set of representations a conversion can produce.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::enums::EnumType;
use crate::value::{Number, Temporal, Value};

/// Numeric representations understood by the numeric policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericWidth {
    Byte,
    Short,
    Int32,
    Int64,
    Float32,
    Float64,
    BigInteger,
    BigDecimal,
}

impl NumericWidth {
    pub const ALL: [NumericWidth; 8] = [
        NumericWidth::Byte,
        NumericWidth::Short,
        NumericWidth::Int32,
        NumericWidth::Int64,
        NumericWidth::Float32,
        NumericWidth::Float64,
        NumericWidth::BigInteger,
        NumericWidth::BigDecimal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NumericWidth::Byte => "Byte",
            NumericWidth::Short => "Short",
            NumericWidth::Int32 => "Int32",
            NumericWidth::Int64 => "Int64",
            NumericWidth::Float32 => "Float32",
            NumericWidth::Float64 => "Float64",
            NumericWidth::BigInteger => "BigInteger",
            NumericWidth::BigDecimal => "BigDecimal",
        }
    }

    /// The zero of this width, for widths that have a primitive form.
    #[must_use]
    pub fn zero(self) -> Option<Number> {
        match self {
            NumericWidth::Byte => Some(Number::Byte(0)),
            NumericWidth::Short => Some(Number::Short(0)),
            NumericWidth::Int32 => Some(Number::Int(0)),
            NumericWidth::Int64 => Some(Number::Long(0)),
            NumericWidth::Float32 => Some(Number::Float(0.0)),
            NumericWidth::Float64 => Some(Number::Double(0.0)),
            NumericWidth::BigInteger | NumericWidth::BigDecimal => None,
        }
    }
}

impl fmt::Display for NumericWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar representations a date conversion can be projected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateKind {
    /// An instant.
    #[default]
    Generic,
    DateOnly,
    TimeOnly,
    Timestamp,
}

impl DateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DateKind::Generic => "DateTime",
            DateKind::DateOnly => "Date",
            DateKind::TimeOnly => "Time",
            DateKind::Timestamp => "Timestamp",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The representation a conversion should produce.
///
/// New shapes are added by extending this union and the dispatcher's match
/// arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Boolean,
    Character,
    Text,
    Number(NumericWidth),
    ByteSequence,
    DateTime(DateKind),
    Enum(EnumType),
    Array(Box<Shape>),
}

impl Shape {
    pub const BYTE: Shape = Shape::Number(NumericWidth::Byte);
    pub const SHORT: Shape = Shape::Number(NumericWidth::Short);
    pub const INT32: Shape = Shape::Number(NumericWidth::Int32);
    pub const INT64: Shape = Shape::Number(NumericWidth::Int64);
    pub const FLOAT32: Shape = Shape::Number(NumericWidth::Float32);
    pub const FLOAT64: Shape = Shape::Number(NumericWidth::Float64);
    pub const BIG_INTEGER: Shape = Shape::Number(NumericWidth::BigInteger);
    pub const BIG_DECIMAL: Shape = Shape::Number(NumericWidth::BigDecimal);

    #[must_use]
    pub fn array_of(element: Shape) -> Self {
        Shape::Array(Box::new(element))
    }

    /// Shapes with a zero value: boolean, character and fixed-width numbers.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.zero_value().is_some()
    }

    /// The value an absent source converts to: `false`, `'\0'` or numeric zero
    /// for primitive shapes, nothing for every other shape.
    #[must_use]
    pub fn zero_value(&self) -> Option<Value> {
        match self {
            Shape::Boolean => Some(Value::Bool(false)),
            Shape::Character => Some(Value::Char('\0')),
            Shape::Number(width) => width.zero().map(Value::Number),
            _ => None,
        }
    }

    /// Whether `value` already has this shape and can be returned as is.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Shape::Boolean, Value::Bool(_))
            | (Shape::Character, Value::Char(_))
            | (Shape::Text, Value::Text(_))
            | (Shape::ByteSequence, Value::Bytes(_))
            | (Shape::DateTime(DateKind::Generic), Value::Date(_))
            | (Shape::DateTime(DateKind::DateOnly), Value::Temporal(Temporal::LocalDate(_)))
            | (Shape::DateTime(DateKind::TimeOnly), Value::Temporal(Temporal::LocalTime(_)))
            | (
                Shape::DateTime(DateKind::Timestamp),
                Value::Temporal(Temporal::LocalDateTime(_)),
            ) => true,
            (Shape::Number(width), Value::Number(n)) => n.width() == *width,
            (Shape::Enum(ty), Value::Enum(v)) => v.enum_type() == ty,
            (Shape::Array(element), Value::Array(items)) => items
                .iter()
                .all(|item| (item.is_null() && !element.is_primitive()) || element.accepts(item)),
            _ => false,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Boolean => f.write_str("Boolean"),
            Shape::Character => f.write_str("Character"),
            Shape::Text => f.write_str("Text"),
            Shape::Number(width) => f.write_str(width.as_str()),
            Shape::ByteSequence => f.write_str("ByteSequence"),
            Shape::DateTime(kind) => f.write_str(kind.as_str()),
            Shape::Enum(ty) => write!(f, "Enum<{ty}>"),
            Shape::Array(element) => write!(f, "Array<{element}>"),
        }
    }
}

impl From<NumericWidth> for Shape {
    fn from(width: NumericWidth) -> Self {
        Shape::Number(width)
    }
}

impl From<DateKind> for Shape {
    fn from(kind: DateKind) -> Self {
        Shape::DateTime(kind)
    }
}

impl From<EnumType> for Shape {
    fn from(ty: EnumType) -> Self {
        Shape::Enum(ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeParseError {
    #[error("unspecified target shape")]
    Unspecified,
    #[error("unknown shape: {0}")]
    Unknown(String),
}

/// Parses shape names case-insensitively.
///
/// Accepts the display names plus common aliases (`int`, `i64`, `string`,
/// `decimal`, `date`, ...), arrays as `int[]` or `array<int>`, and anonymous
/// enums as `enum(A,B,C)`.
impl FromStr for Shape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ShapeParseError::Unspecified);
        }
        if let Some(element) = name.strip_suffix("[]") {
            return Ok(Shape::array_of(element.parse()?));
        }
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("array<") && name.ends_with('>') {
            let element = &name["array<".len()..name.len() - 1];
            return Ok(Shape::array_of(element.parse()?));
        }
        if lower.starts_with("enum(") && name.ends_with(')') {
            let variants: Vec<&str> = name["enum(".len()..name.len() - 1]
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();
            if variants.is_empty() {
                return Err(ShapeParseError::Unknown(name.to_string()));
            }
            return Ok(Shape::Enum(EnumType::new("enum", variants)));
        }
        let shape = match lower.as_str() {
            "bool" | "boolean" => Shape::Boolean,
            "char" | "character" => Shape::Character,
            "str" | "string" | "text" => Shape::Text,
            "byte" | "i8" => Shape::BYTE,
            "short" | "i16" => Shape::SHORT,
            "int" | "int32" | "i32" | "integer" => Shape::INT32,
            "long" | "int64" | "i64" => Shape::INT64,
            "float" | "float32" | "f32" => Shape::FLOAT32,
            "double" | "float64" | "f64" => Shape::FLOAT64,
            "bigint" | "biginteger" => Shape::BIG_INTEGER,
            "decimal" | "bigdecimal" => Shape::BIG_DECIMAL,
            "bytes" | "bytesequence" => Shape::ByteSequence,
            "datetime" | "instant" => Shape::DateTime(DateKind::Generic),
            "date" => Shape::DateTime(DateKind::DateOnly),
            "time" => Shape::DateTime(DateKind::TimeOnly),
            "timestamp" => Shape::DateTime(DateKind::Timestamp),
            _ => return Err(ShapeParseError::Unknown(name.to_string())),
        };
        Ok(shape)
    }
}

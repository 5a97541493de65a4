use recast_types::{CastError, EnumValue, Number, NumericWidth, Value, ValueKind};

use super::{ConvertTo, Converter, unsupported};
use crate::numeric;

/// Target name for the width-agnostic conversion.
const GENERIC: &str = "Number";

/// Numbers from numbers, characters, text, booleans and enums.
///
/// The width-agnostic form reads text as a 64-bit float whatever the caller
/// intends to do with it. The width-specific form goes through the numeric
/// policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberConverter;

impl Converter for NumberConverter {
    type Output = Number;

    fn convert(&self, value: &Value) -> Result<Option<Number>, CastError> {
        let number = match value {
            Value::Null => return Ok(None),
            Value::Number(n) => n.clone(),
            Value::Char(c) => char_code(*c),
            Value::Text(text) => parse_double(text)?,
            Value::Enum(variant) => ordinal(variant, GENERIC)?,
            other => return Err(unsupported(other, GENERIC)),
        };
        Ok(Some(number))
    }
}

fn parse_double(text: &str) -> Result<Number, CastError> {
    let not_a_number = || {
        CastError::new(ValueKind::Text, GENERIC)
            .with_message(format!("the value [{text}] is not a number"))
    };
    let literal = text.trim();
    if !numeric::is_float_spelling(literal) {
        return Err(not_a_number());
    }
    literal
        .parse::<f64>()
        .map(Number::Double)
        .map_err(|e| not_a_number().with_cause(e))
}

impl ConvertTo<NumericWidth> for NumberConverter {
    type Output = Number;

    fn convert_to(
        &self,
        value: &Value,
        width: &NumericWidth,
    ) -> Result<Option<Number>, CastError> {
        let width = *width;
        let number = match value {
            Value::Null => return Ok(None),
            Value::Number(n) => numeric::narrow(n, width)?,
            Value::Text(text) => numeric::parse_text(text, width)?,
            Value::Char(c) => numeric::narrow(&char_code(*c), width)?,
            Value::Bool(b) => numeric::narrow(&Number::Int(i32::from(*b)), width)?,
            Value::Enum(variant) => numeric::narrow(&ordinal(variant, width)?, width)?,
            other => return Err(unsupported(other, width)),
        };
        Ok(Some(number))
    }
}

/// The character's code as a `Short`, keeping the low 16 bits.
fn char_code(c: char) -> Number {
    Number::Short(u32::from(c) as u16 as i16)
}

fn ordinal(variant: &EnumValue, to: impl std::fmt::Display) -> Result<Number, CastError> {
    i32::try_from(variant.ordinal()).map(Number::Int).map_err(|e| {
        CastError::new(ValueKind::Enum, to)
            .with_message(format!("ordinal {} is out of range", variant.ordinal()))
            .with_cause(e)
    })
}

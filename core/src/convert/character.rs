use recast_types::{CastError, Shape, Value, ValueKind};

use super::{Converter, unsupported};
use crate::numeric;

/// Characters from single-character text, or from numbers read as a UTF-16
/// code unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterConverter;

impl Converter for CharacterConverter {
    type Output = char;

    fn convert(&self, value: &Value) -> Result<Option<char>, CastError> {
        match value {
            Value::Null => Ok(None),
            Value::Char(c) => Ok(Some(*c)),
            Value::Text(text) => single_char(text).map(Some),
            Value::Number(n) => {
                let code = numeric::short_value(n)? as u16;
                char::from_u32(u32::from(code)).map(Some).ok_or_else(|| {
                    CastError::new(n.width(), Shape::Character)
                        .with_message(format!("{code:#06x} is a surrogate code unit"))
                })
            }
            other => Err(unsupported(other, Shape::Character)),
        }
    }
}

fn single_char(text: &str) -> Result<char, CastError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(CastError::new(ValueKind::Text, Shape::Character)
            .with_message("the string is empty")),
        _ => Err(CastError::new(ValueKind::Text, Shape::Character)
            .with_message(format!("the string [{text}] has more than one character"))),
    }
}

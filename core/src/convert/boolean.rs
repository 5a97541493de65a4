use recast_types::{CastError, Shape, Value, ValueKind};

use super::{Converter, unsupported};

const TRUE_WORDS: [&str; 4] = ["true", "on", "yes", "1"];
const FALSE_WORDS: [&str; 4] = ["false", "off", "no", "0"];

/// Booleans from booleans, or from text and characters spelling one of the
/// accepted words in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanConverter;

impl Converter for BooleanConverter {
    type Output = bool;

    fn convert(&self, value: &Value) -> Result<Option<bool>, CastError> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            Value::Text(text) => parse_word(text, ValueKind::Text).map(Some),
            Value::Char(c) => parse_word(c.encode_utf8(&mut [0; 4]), ValueKind::Char).map(Some),
            other => Err(unsupported(other, Shape::Boolean)),
        }
    }
}

fn parse_word(text: &str, from: ValueKind) -> Result<bool, CastError> {
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        return Ok(true);
    }
    if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        return Ok(false);
    }
    let message = if text.is_empty() {
        "the string is empty".to_string()
    } else {
        format!("the string [{text}] is not a boolean")
    };
    Err(CastError::new(from, Shape::Boolean).with_message(message))
}

use recast_types::{CastError, Shape, Value};

use super::Converter;
use crate::drain;

/// Text from any value. Arrays join their elements with `,`, enums give their
/// declared name, text objects are drained, and everything else uses its
/// default text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextConverter;

impl Converter for TextConverter {
    type Output = String;

    fn convert(&self, value: &Value) -> Result<Option<String>, CastError> {
        let text = match value {
            Value::Null => return Ok(None),
            Value::Text(text) => text.clone(),
            Value::Array(items) => join(items),
            Value::TextObject(handle) => drain::text_object(handle).map_err(|e| {
                CastError::new(value.kind(), Shape::Text)
                    .with_message("failed to read the text object")
                    .with_cause(e)
            })?,
            Value::Enum(variant) => variant.name().to_string(),
            other => other.to_string(),
        };
        Ok(Some(text))
    }
}

/// Skips null elements and elements whose text form is empty.
fn join(items: &[Value]) -> String {
    items
        .iter()
        .filter(|item| !item.is_null())
        .map(ToString::to_string)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

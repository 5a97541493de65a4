use recast_types::{CastError, EnumType, EnumValue, Shape, Value, ValueKind};

use super::{ConvertTo, unsupported};

/// Enum variants from variants of the same type or from their declared name.
///
/// Names match exactly after trimming; there is no case folding and no
/// lookup by ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumConverter;

impl ConvertTo<EnumType> for EnumConverter {
    type Output = EnumValue;

    fn convert_to(&self, value: &Value, ty: &EnumType) -> Result<Option<EnumValue>, CastError> {
        match value {
            Value::Null => Ok(None),
            Value::Enum(variant) if variant.enum_type() == ty => Ok(Some(variant.clone())),
            Value::Text(text) => {
                let name = text.trim();
                if name.is_empty() {
                    return Err(CastError::new(ValueKind::Text, Shape::Enum(ty.clone()))
                        .with_message("the string is empty"));
                }
                ty.variant(name).map(Some).ok_or_else(|| {
                    CastError::new(ValueKind::Text, Shape::Enum(ty.clone()))
                        .with_message(format!("no variant of {ty} is named [{name}]"))
                })
            }
            other => Err(unsupported(other, Shape::Enum(ty.clone()))),
        }
    }
}

//! Runtime enum descriptors.
//!
//! Enum targets are described by an [`EnumType`]: a type name plus the
//! ordered list of declared variant names. Native Rust enums opt in through
//! [`CastEnum`], which maps them onto a descriptor and back.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct Variant {
    name: String,
    label: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
struct EnumTypeInner {
    name: String,
    variants: Vec<Variant>,
}

/// Descriptor for an enum shape: type name and declared variants, in order.
///
/// Cloning is cheap. Two descriptors are equal when they are the same
/// allocation or declare the same name and variants.
#[derive(Debug, Clone)]
pub struct EnumType(Arc<EnumTypeInner>);

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants = variants
            .into_iter()
            .map(|name| Variant {
                name: name.into(),
                label: None,
            })
            .collect();
        Self(Arc::new(EnumTypeInner {
            name: name.into(),
            variants,
        }))
    }

    /// Like [`EnumType::new`], with a display label per variant.
    ///
    /// The label is the variant's display form; conversions to text still
    /// use the declared name.
    pub fn with_labels<I, N, L>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let variants = variants
            .into_iter()
            .map(|(name, label)| Variant {
                name: name.into(),
                label: Some(label.into()),
            })
            .collect();
        Self(Arc::new(EnumTypeInner {
            name: name.into(),
            variants,
        }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.variants.is_empty()
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.0.variants.iter().map(|v| v.name.as_str())
    }

    /// Exact, case-sensitive lookup by declared name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<EnumValue> {
        self.0
            .variants
            .iter()
            .position(|v| v.name == name)
            .map(|ordinal| EnumValue {
                ty: self.clone(),
                ordinal,
            })
    }

    #[must_use]
    pub fn by_ordinal(&self, ordinal: usize) -> Option<EnumValue> {
        (ordinal < self.len()).then(|| EnumValue {
            ty: self.clone(),
            ordinal,
        })
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for EnumType {}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One variant of an [`EnumType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    ty: EnumType,
    ordinal: usize,
}

impl EnumValue {
    #[must_use]
    pub fn enum_type(&self) -> &EnumType {
        &self.ty
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The declared variant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ty.0.variants[self.ordinal].name
    }

    /// The display form: the label if one was declared, else the name.
    #[must_use]
    pub fn label(&self) -> &str {
        let variant = &self.ty.0.variants[self.ordinal];
        variant.label.as_deref().unwrap_or(&variant.name)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A native enum that can be converted through an [`EnumType`] descriptor.
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// enum Level { Low, High }
///
/// impl CastEnum for Level {
///     fn enum_type() -> EnumType { EnumType::new("Level", ["Low", "High"]) }
///     fn from_ordinal(ordinal: usize) -> Option<Self> { [Level::Low, Level::High].get(ordinal).copied() }
///     fn ordinal(self) -> usize { self as usize }
/// }
/// ```
pub trait CastEnum: Sized + Copy {
    fn enum_type() -> EnumType;

    fn from_ordinal(ordinal: usize) -> Option<Self>;

    fn ordinal(self) -> usize;

    fn to_enum_value(self) -> Option<EnumValue> {
        Self::enum_type().by_ordinal(self.ordinal())
    }
}

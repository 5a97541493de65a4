//! Enum entry points.

use insta::assert_snapshot;
use recast_types::{CastEnum, EnumType, Value};

use crate::common::{TestEnum, caster, text};

#[test]
fn variant_by_name() {
    let caster = caster();
    assert_eq!(
        caster.to_variant::<TestEnum>(&text("VALUE1")).unwrap(),
        Some(TestEnum::Value1)
    );
    assert_eq!(
        caster.to_variant::<TestEnum>(&text("  VALUE2 ")).unwrap(),
        Some(TestEnum::Value2)
    );
}

#[test]
fn empty_name_gives_default() {
    let caster = caster();
    assert_eq!(caster.to_variant_or(&text(""), TestEnum::Value2), TestEnum::Value2);
    let err = caster.to_variant::<TestEnum>(&text("")).unwrap_err();
    assert_eq!(err.message(), Some("the string is empty"));
}

#[test]
fn unknown_name_fails() {
    let caster = caster();
    let err = caster.to_variant::<TestEnum>(&text("nope")).unwrap_err();
    assert_snapshot!(err, @"Text cannot cast to Enum<TestEnum>: no variant of TestEnum is named [nope]");
    assert_eq!(caster.to_variant_or(&text("nope"), TestEnum::Value1), TestEnum::Value1);
}

/// Names match case-sensitively.
#[test]
fn lowercase_name_is_unknown() {
    assert!(caster().to_variant::<TestEnum>(&text("value1")).is_err());
}

#[test]
fn same_type_is_identity() {
    let ty = TestEnum::enum_type();
    let variant = TestEnum::Value2.to_enum_value().unwrap();
    let converted = caster().to_enum(&Value::from(variant.clone()), &ty).unwrap();
    assert_eq!(converted, Some(variant));
}

#[test]
fn variants_of_another_type_do_not_convert() {
    let other = EnumType::new("Other", ["VALUE1"]);
    let source = Value::from(other.variant("VALUE1").unwrap());
    let err = caster().to_enum(&source, &TestEnum::enum_type()).unwrap_err();
    assert_snapshot!(err, @"Enum cannot cast to Enum<TestEnum>");
}

#[test]
fn numbers_are_not_names() {
    let err = caster().to_variant::<TestEnum>(&Value::from(0)).unwrap_err();
    assert_snapshot!(err, @"Int32 cannot cast to Enum<TestEnum>");
}

#[test]
fn null_enum() {
    let caster = caster();
    assert_eq!(caster.to_variant::<TestEnum>(&Value::Null).unwrap(), None);
    let ty = TestEnum::enum_type();
    let fallback = ty.variant("VALUE1").unwrap();
    assert_eq!(caster.to_enum_or(&Value::Null, &ty, fallback.clone()), fallback);
}

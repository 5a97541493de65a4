//! Generic dispatch by target shape.

use recast_types::{CastEnum, EnumType, Number, Shape, Value};

use crate::common::{TestEnum, caster, text};

fn shape(name: &str) -> Shape {
    name.parse().unwrap()
}

#[test]
fn routes_by_shape_tag() {
    let caster = caster();
    assert_eq!(
        caster.try_convert(&text("0x10"), &Shape::INT32).unwrap(),
        Some(Value::from(16))
    );
    assert_eq!(
        caster.try_convert(&text("yes"), &Shape::Boolean).unwrap(),
        Some(Value::from(true))
    );
    assert_eq!(
        caster.try_convert(&Value::from(12_i64), &Shape::Text).unwrap(),
        Some(Value::from("12"))
    );
    assert_eq!(
        caster.try_convert(&Value::from(1), &Shape::ByteSequence).unwrap(),
        Some(Value::from(vec![0_u8, 0, 0, 1]))
    );
    let ty = TestEnum::enum_type();
    assert_eq!(
        caster.try_convert(&text("VALUE2"), &Shape::Enum(ty.clone())).unwrap(),
        ty.variant("VALUE2").map(Value::from)
    );
}

#[test]
fn null_source_gives_zero_or_nothing() {
    let caster = caster();
    assert_eq!(caster.convert(&Value::Null, &Shape::SHORT), Some(Value::from(0_i16)));
    assert_eq!(caster.convert(&Value::Null, &Shape::FLOAT64), Some(Value::from(0.0_f64)));
    assert_eq!(caster.convert(&Value::Null, &Shape::Character), Some(Value::from('\0')));
    assert_eq!(caster.convert(&Value::Null, &Shape::BIG_INTEGER), None);
    assert_eq!(caster.convert(&Value::Null, &shape("date")), None);
    assert_eq!(caster.convert(&Value::Null, &shape("int[]")), None);
}

#[test]
fn value_already_in_shape_is_returned_as_is() {
    let caster = caster();
    let value = Value::from(Number::Long(5));
    assert_eq!(caster.try_convert(&value, &Shape::INT64).unwrap(), Some(value));
}

#[test]
fn conversion_is_idempotent() {
    let caster = caster();
    let cases = [
        (text("0x1F"), Shape::INT32),
        (text("on"), Shape::Boolean),
        (Value::from(vec![Value::from(1), Value::Null]), Shape::Text),
        (text("2019-06-01 00:00:00"), shape("timestamp")),
        (text("VALUE1"), Shape::Enum(TestEnum::enum_type())),
        (Value::from(vec![text("1"), Value::Null]), shape("long[]")),
    ];
    for (source, target) in cases {
        let once = caster.convert(&source, &target);
        let twice = once.as_ref().and_then(|v| caster.convert(v, &target));
        assert_eq!(once, twice, "{source} as {target}");
    }
}

#[test]
fn arrays_convert_element_wise() {
    let caster = caster();
    let source = Value::from(serde_json::json!([1, "2", null, "0x03"]));
    assert_eq!(
        caster.try_convert(&source, &shape("int[]")).unwrap(),
        Some(Value::from(vec![
            Value::from(1),
            Value::from(2),
            Value::Null,
            Value::from(3),
        ]))
    );
}

#[test]
fn array_fails_on_first_bad_element() {
    let caster = caster();
    let source = Value::from(vec![text("1"), text("two"), text("x")]);
    let err = caster.try_convert(&source, &shape("int[]")).unwrap_err();
    assert_eq!(err.message(), Some("the value [two] is not a valid Int32 literal"));
    assert_eq!(caster.convert(&source, &shape("int[]")), None);
    assert_eq!(
        caster.to_array_or(&source, &Shape::INT32, vec![Value::Null]),
        vec![Value::Null]
    );
}

#[test]
fn nested_arrays() {
    let caster = caster();
    let source = Value::from(serde_json::json!([["1", "2"], [], null]));
    assert_eq!(
        caster.convert(&source, &shape("int[][]")),
        Some(Value::from(vec![
            Value::from(vec![Value::from(1), Value::from(2)]),
            Value::from(Vec::<Value>::new()),
            Value::Null,
        ]))
    );
}

#[test]
fn unroutable_element_fails_the_array() {
    let caster = caster();
    let source = Value::from(vec![Value::from(vec![Value::from(1)]), Value::from(7)]);
    let err = caster.to_array(&source, &shape("int[]")).unwrap_err();
    assert_eq!(err.source_shape(), "Int32");
    assert_eq!(err.target_shape(), "Array<Int32>");
    assert_eq!(caster.convert(&source, &shape("int[][]")), None);
}

#[test]
fn scalar_into_array_shape_has_no_result() {
    assert_eq!(caster().convert(&text("1"), &shape("int[]")), None);
    assert!(caster().to_array(&text("1"), &Shape::INT32).is_err());
}

#[test]
fn failures_are_none_through_convert() {
    let caster = caster();
    assert!(caster.try_convert(&text("maybe"), &Shape::Boolean).is_err());
    assert_eq!(caster.convert(&text("maybe"), &Shape::Boolean), None);
}

#[test]
fn anonymous_enum_shapes() {
    let caster = caster();
    let target = shape("enum(RED, GREEN)");
    let Shape::Enum(ty) = &target else {
        panic!("expected an enum shape");
    };
    assert_eq!(ty, &EnumType::new("enum", ["RED", "GREEN"]));
    assert_eq!(
        caster.convert(&text("GREEN"), &target),
        ty.variant("GREEN").map(Value::from)
    );
}

//! Numeric entry points: narrowing, literal parsing and the decimal scale rule.

use std::str::FromStr;

use insta::assert_snapshot;
use recast_types::{BigDecimal, BigInt, CastEnum, Number, Value};

use crate::common::{TestEnum, caster, text};

#[test]
fn hex_literals_in_every_spelling() {
    let caster = caster();
    assert_eq!(caster.to_int_or(&text("0x1F"), 0), 31);
    assert_eq!(caster.to_int_or(&text("0X1f"), 0), 31);
    assert_eq!(caster.to_int_or(&text("#1F"), 0), 31);
    assert_eq!(caster.to_int_or(&text("-0x1F"), 0), -31);
    assert_eq!(caster.to_long_or(&text("0x7fffffffffffffff"), 0), i64::MAX);
}

#[test]
fn hex_out_of_range_fails() {
    let caster = caster();
    assert_eq!(caster.to_byte_or(&text("0x80"), 5), 5);
    let err = caster.to_byte(&text("0x80")).unwrap_err();
    assert_snapshot!(err, @"Text cannot cast to Byte: the value [0x80] is out of Byte range");
}

#[test]
fn decimal_literals() {
    let caster = caster();
    assert_eq!(caster.to_int(&text("42")).unwrap(), Some(42));
    assert_eq!(caster.to_short(&text("-7")).unwrap(), Some(-7));
    assert_eq!(caster.to_double(&text(" 2.5 ")).unwrap(), Some(2.5));
    assert_eq!(caster.to_float(&text("1e3")).unwrap(), Some(1000.0));
    assert_eq!(
        caster.to_big_decimal(&text("12.340")).unwrap(),
        Some(BigDecimal::from_str("12.340").unwrap())
    );
}

/// Integral widths do not trim; floating widths do.
#[test]
fn integer_literals_are_not_trimmed() {
    let caster = caster();
    assert_eq!(caster.to_int_or(&text(" 42"), -1), -1);
    let err = caster.to_int(&text("4x2")).unwrap_err();
    assert_snapshot!(err, @"Text cannot cast to Int32: the value [4x2] is not a valid Int32 literal");
}

#[test]
fn big_integer_leading_zero_radix() {
    let caster = caster();
    assert_eq!(
        caster.to_big_integer(&text("010")).unwrap(),
        Some(BigInt::from(9))
    );
    assert_eq!(
        caster.to_big_integer(&text("-010")).unwrap(),
        Some(BigInt::from(-10))
    );
    assert_eq!(
        caster.to_big_integer(&text("+010")).unwrap(),
        Some(BigInt::from(10))
    );
    assert_eq!(caster.to_big_integer(&text("0")).unwrap(), Some(BigInt::from(0)));
    assert!(caster.to_big_integer(&text("09")).is_err());
    assert!(caster.to_big_integer(&text("1_000")).is_err());
}

#[test]
fn narrowing_keeps_low_order_bits() {
    let caster = caster();
    assert_eq!(caster.to_byte(&Value::from(300)).unwrap(), Some(44));
    assert_eq!(caster.to_short(&Value::from(70_000_i64)).unwrap(), Some(4464));
    assert_eq!(caster.to_int(&Value::from(2.9_f64)).unwrap(), Some(2));
    assert_eq!(caster.to_int(&Value::from(-2.9_f64)).unwrap(), Some(-2));
    assert_eq!(
        caster.to_int(&Value::from(1e12_f64)).unwrap(),
        Some(i32::MAX)
    );
}

#[test]
fn decimal_with_ordinary_scale_truncates() {
    let caster = caster();
    let value = Value::from(BigDecimal::from_str("123.987").unwrap());
    assert_eq!(caster.to_int(&value).unwrap(), Some(123));
    assert_eq!(caster.to_long(&value).unwrap(), Some(123));
}

#[test]
fn decimal_with_extreme_scale_must_be_exact() {
    let caster = caster();

    let exact = Value::from(BigDecimal::new(BigInt::from(5) * BigInt::from(10).pow(101), 101));
    assert_eq!(caster.to_int(&exact).unwrap(), Some(5));

    let fractional = Value::from(BigDecimal::new(BigInt::from(5), 101));
    assert_eq!(caster.to_int_or(&fractional, -1), -1);
    let err = caster.to_int(&fractional).unwrap_err();
    assert_snapshot!(err, @"BigDecimal cannot cast to Int32: a value with scale 101 has no exact Int32 representation");

    let huge = Value::from(BigDecimal::new(BigInt::from(1), -101));
    assert!(caster.to_long(&huge).is_err());
}

#[test]
fn booleans_and_enums_as_numbers() {
    let caster = caster();
    assert_eq!(caster.to_int(&Value::from(true)).unwrap(), Some(1));
    assert_eq!(caster.to_long(&Value::from(false)).unwrap(), Some(0));
    let value = Value::from(TestEnum::Value2.to_enum_value().unwrap());
    assert_eq!(caster.to_int(&value).unwrap(), Some(1));
}

#[test]
fn generic_number_from_text_is_double() {
    let caster = caster();
    assert_eq!(
        caster.to_number(&text("3")).unwrap(),
        Some(Number::Double(3.0))
    );
    assert_eq!(
        caster.to_number(&Value::from('A')).unwrap(),
        Some(Number::Short(65))
    );
    let err = caster.to_number(&text("three")).unwrap_err();
    assert_snapshot!(err, @"Text cannot cast to Number: the value [three] is not a number");
}

#[test]
fn null_numbers() {
    let caster = caster();
    assert_eq!(caster.to_int(&Value::Null).unwrap(), None);
    assert_eq!(caster.to_int_value(&Value::Null), 0);
    assert_eq!(caster.to_double_value(&Value::Null), 0.0);
    assert_eq!(caster.to_big_integer(&Value::Null).unwrap(), None);
    assert_eq!(
        caster.to_big_integer_or(&Value::Null, BigInt::from(7)),
        BigInt::from(7)
    );
}

#[test]
fn same_width_is_identity() {
    let caster = caster();
    let value = Value::from(i64::MIN);
    assert_eq!(caster.to_long(&value).unwrap(), Some(i64::MIN));
    let again = Value::from(caster.to_long(&value).unwrap().unwrap());
    assert_eq!(again, value);
}

//! Boolean and character entry points.

use insta::assert_snapshot;
use recast_types::{Value, ValueKind};

use crate::common::{caster, text};

#[test]
fn accepted_words_in_any_case() {
    let caster = caster();
    assert!(caster.to_bool_or(&text("TRUE"), false));
    assert!(caster.to_bool_or(&text("On"), false));
    assert!(caster.to_bool_or(&text("yes"), false));
    assert!(caster.to_bool_or(&text("1"), false));
    assert!(!caster.to_bool_or(&text("no"), true));
    assert!(!caster.to_bool_or(&text("OFF"), true));
    assert!(!caster.to_bool_or(&text("0"), true));
}

/// Words are matched as written; surrounding whitespace is not trimmed.
#[test]
fn padded_word_is_rejected() {
    assert!(caster().to_bool(&text(" true")).is_err());
}

#[test]
fn unknown_word_falls_back_to_default() {
    let caster = caster();
    assert!(caster.to_bool_or(&text("maybe"), true));
    assert!(!caster.to_bool_or(&text("maybe"), false));
    assert!(!caster.to_bool_value(&text("maybe")));

    let err = caster.to_bool(&text("maybe")).unwrap_err();
    assert_eq!(err.source_shape(), ValueKind::Text.as_str());
    assert_eq!(err.target_shape(), "Boolean");
    assert_snapshot!(err, @"Text cannot cast to Boolean: the string [maybe] is not a boolean");
}

#[test]
fn empty_string_has_its_own_message() {
    let err = caster().to_bool(&text("")).unwrap_err();
    assert_eq!(err.message(), Some("the string is empty"));
}

#[test]
fn single_characters_spell_digits() {
    let caster = caster();
    assert_eq!(caster.to_bool(&Value::from('1')).unwrap(), Some(true));
    assert_eq!(caster.to_bool(&Value::from('0')).unwrap(), Some(false));
}

#[test]
fn numbers_are_not_booleans() {
    let err = caster().to_bool(&Value::from(1)).unwrap_err();
    assert_snapshot!(err, @"Int32 cannot cast to Boolean");
}

#[test]
fn null_is_none_or_zero() {
    let caster = caster();
    assert_eq!(caster.to_bool(&Value::Null).unwrap(), None);
    assert!(caster.to_bool_or(&Value::Null, true));
    assert!(!caster.to_bool_value(&Value::Null));
    assert_eq!(caster.to_char_value(&Value::Null), '\0');
}

#[test]
fn characters_from_text_and_code_points() {
    let caster = caster();
    assert_eq!(caster.to_char(&text("a")).unwrap(), Some('a'));
    assert_eq!(caster.to_char(&Value::from(65)).unwrap(), Some('A'));
    assert_eq!(caster.to_char_or(&text("ab"), '?'), '?');

    let err = caster.to_char(&text("ab")).unwrap_err();
    assert_snapshot!(err, @"Text cannot cast to Character: the string [ab] has more than one character");
}

#[test]
fn surrogate_code_units_fail() {
    let err = caster().to_char(&Value::from(0xD800)).unwrap_err();
    assert_eq!(err.message(), Some("0xd800 is a surrogate code unit"));
}

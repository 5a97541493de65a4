//! Byte-sequence entry points.

use std::io::Cursor;

use insta::assert_snapshot;
use recast_core::Caster;
use recast_types::{
    BigInt, BinaryHandle, BinaryStream, CastOptions, Charset, MemoryBinary, Value,
};

use crate::common::{caster, text};

#[test]
fn integers_are_big_endian() {
    let caster = caster();
    assert_eq!(caster.to_bytes(&Value::from(1)).unwrap(), Some(vec![0, 0, 0, 1]));
    assert_eq!(caster.to_bytes(&Value::from(-2_i16)).unwrap(), Some(vec![0xff, 0xfe]));
    assert_eq!(
        caster.to_bytes(&Value::from(BigInt::from(256))).unwrap(),
        Some(vec![0x01, 0x00])
    );
}

#[test]
fn floating_widths_have_no_encoding() {
    let caster = caster();
    assert_eq!(caster.to_bytes_or(&Value::from(1.5_f64), vec![9]), vec![9]);
    let err = caster.to_bytes(&Value::from(1.5_f32)).unwrap_err();
    assert_snapshot!(err, @"Float32 cannot cast to ByteSequence: no byte encoding is defined for this width");
}

#[test]
fn text_uses_configured_charset() {
    assert_eq!(
        caster().to_bytes(&text("é")).unwrap(),
        Some(vec![0xc3, 0xa9])
    );

    let latin1 = Caster::new(CastOptions::new().with_charset(Charset::Iso8859_1));
    assert_eq!(latin1.to_bytes(&text("é")).unwrap(), Some(vec![0xe9]));

    let utf16 = Caster::new(CastOptions::new().with_charset(Charset::Utf16Be));
    assert_eq!(utf16.to_bytes(&text("ab")).unwrap(), Some(vec![0, 0x61, 0, 0x62]));
}

#[test]
fn unmappable_text_fails() {
    let ascii = Caster::new(CastOptions::new().with_charset(Charset::UsAscii));
    assert!(ascii.to_bytes(&text("naïve")).is_err());
    assert_eq!(ascii.to_bytes_or(&text("naïve"), Vec::new()), Vec::<u8>::new());
}

#[test]
fn binary_objects_are_drained() {
    let handle = BinaryHandle::new(MemoryBinary::new(vec![1, 2, 3]));
    assert_eq!(
        caster().to_bytes(&Value::from(handle)).unwrap(),
        Some(vec![1, 2, 3])
    );
}

#[test]
fn streams_drain_once() {
    let value = Value::from(BinaryStream::new(Cursor::new(vec![7, 8])));
    let caster = caster();
    assert_eq!(caster.to_bytes(&value).unwrap(), Some(vec![7, 8]));

    let err = caster.to_bytes(&value).unwrap_err();
    assert_eq!(err.message(), Some("failed to read the BinaryStream"));
    assert!(err.has_cause());
}

#[test]
fn byte_sequences_pass_through() {
    let value = Value::from(vec![0xde_u8, 0xad]);
    assert_eq!(caster().to_bytes(&value).unwrap(), Some(vec![0xde, 0xad]));
    assert_eq!(caster().to_bytes(&Value::Null).unwrap(), None);
}

#[path = "../common/mod.rs"]
mod common;

use hexatom::jet::{decode_atom, decode_sample, encode_atoms, encode_sample};
use hexatom::test_support::{decode_core, encode_core};
use hexatom::{Error, Noun};
use malachite::Natural;

#[test]
fn encode_then_decode_through_cores() -> anyhow::Result<()> {
    common::init_logging();
    let value = common::fixtures::wide_value();
    let text = encode_sample(&encode_core(Natural::from(32u32), value.clone()))?;

    let Noun::Atom(text) = text else {
        panic!("encode produced a cell");
    };
    assert_eq!(decode_atom(&text), Some((32, value)));
    Ok(())
}

#[test]
fn decode_result_shapes() -> anyhow::Result<()> {
    let ok = decode_sample(&decode_core("007f"))?;
    assert_eq!(
        ok,
        Noun::cell(
            Noun::null(),
            Noun::cell(Noun::from(2u64), Noun::from(0x7fu64))
        )
    );
    assert!(decode_sample(&decode_core("12g4"))?.is_null());
    Ok(())
}

#[test]
fn length_that_is_not_a_native_word() {
    let huge = Natural::from(u128::MAX) * Natural::from(u128::MAX);
    let err = encode_atoms(&huge, &Natural::from(1u32)).unwrap_err();
    assert_eq!(err, Error::LengthNotNative);
}

#[test]
fn native_length_that_overflows_when_doubled() {
    let len = Natural::from(usize::MAX as u64);
    let err = encode_atoms(&len, &Natural::from(1u32)).unwrap_err();
    assert!(err.is_size_error());
}

#[test]
fn encode_text_atom_layout() {
    let out = encode_atoms(&Natural::from(1u32), &Natural::from(0xa5u32)).unwrap();
    // "a5": 'a' is byte 0, '5' is byte 1
    assert_eq!(out, common::fixtures::cord("a5"));
    assert_eq!(out, Natural::from(u32::from(b'5') << 8 | u32::from(b'a')));
}

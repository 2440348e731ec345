#[path = "../common/mod.rs"]
mod common;

use hexatom::constants::{CHAR_BITS, PAIR_BITS};
use hexatom::prelude::*;

#[test]
fn fixture_cases_decode_exactly() {
    common::init_logging();
    for (text, bytes) in common::fixtures::decode_cases() {
        let d = decode(text).unwrap_or_else(|| panic!("decode failed for {:?}", text));
        assert_eq!(d.len(), text.len().div_ceil(2), "length for {:?}", text);
        assert_eq!(d.as_le_bytes(), bytes.as_slice(), "bytes for {:?}", text);
    }
}

#[test]
fn invalid_texts_fail_without_output() {
    common::init_logging();
    for text in common::fixtures::invalid_texts() {
        assert_eq!(decode(text), None, "text {:?}", text);
        // same answer on every call
        assert_eq!(decode(text), None, "text {:?}", text);
    }
}

#[test]
fn empty_success_differs_from_failure() {
    let empty = decode("");
    assert!(empty.is_some());
    assert_ne!(empty, decode("z"));
}

#[test]
fn mixed_case_gives_same_bytes() {
    let expected = decode("ab3f").unwrap();
    for text in ["aB3f", "AB3F", "Ab3F"] {
        assert_eq!(decode(text).unwrap(), expected);
    }
}

#[test]
fn value_text_uses_character_count() {
    let cord = common::fixtures::cord("0abc");
    let d = decode_value(&cord).unwrap();
    assert_eq!(d.into_parts(), (2, vec![0xbc, 0x0a]));

    assert_eq!(block_metric(CHAR_BITS, &cord), 4);
    assert_eq!(block_metric(PAIR_BITS, &cord), 2);
}

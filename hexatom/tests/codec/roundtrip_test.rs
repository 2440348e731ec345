#[path = "../common/mod.rs"]
mod common;

use hexatom::prelude::*;
use malachite::Natural;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bytes_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let text = encode(bytes.len(), &bytes).unwrap();
        let d = decode(&text).unwrap();
        prop_assert_eq!(d.len(), bytes.len());
        prop_assert_eq!(d.as_le_bytes(), bytes.as_slice());
        prop_assert_eq!(d.to_hex().unwrap(), text);
    }

    #[test]
    fn value_roundtrip_truncates_or_extends(x in any::<u64>(), len in 0usize..12) {
        let text = encode(len, &x).unwrap();
        let d = decode(&text).unwrap();
        prop_assert_eq!(d.len(), len);
        let expected = if len >= 8 { x } else { x & ((1u64 << (8 * len)) - 1) };
        prop_assert_eq!(d.to_natural(), Natural::from(expected));
    }

    #[test]
    fn uppercase_text_decodes_like_lowercase(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let lower = encode(bytes.len(), &bytes).unwrap();
        let upper = lower.to_ascii_uppercase();
        prop_assert_eq!(decode(&upper), decode(&lower));
    }
}

use std::ffi::{CStr, CString};

use crate::util::{FNV_OFFSET_BASIS, FNV_PRIME, fnv1a, hash, hash_bytes, hash_cstr, lines};

#[test]
fn test_empty() {
    assert_eq!(hash(""), 2166136261);
    assert_eq!(hash(""), FNV_OFFSET_BASIS);
}

#[test]
fn test_single_char() {
    let expected = (2166136261u32 ^ 97).wrapping_mul(16777619);
    assert_eq!(hash("a"), expected);
    assert_eq!(hash("a"), 0xe40c292c);
}

#[test]
fn test_folds_last_to_first() {
    let by_hand = [b'b', b'a']
        .iter()
        .fold(FNV_OFFSET_BASIS, |h, &c| (h ^ c as u32).wrapping_mul(FNV_PRIME));
    assert_eq!(hash("ab"), by_hand);
    assert_ne!(hash("ab"), hash("ba"));
    assert_eq!(hash("raboof"), 0xbf9cf968);
    assert_eq!(fnv1a(b"foobar"), 0xbf9cf968);
}

#[test]
fn test_matches_forward_fnv1a_of_reverse() {
    for s in ["", "x", "hello world", "Lorem ipsum dolor sit amet", "ümlaut ✓"] {
        let mut reversed = s.as_bytes().to_vec();
        reversed.reverse();
        assert_eq!(hash(s), fnv1a(&reversed), "input {:?}", s);
    }
}

#[test]
fn test_deterministic() {
    let a = String::from("deterministic");
    let b = "determin".to_string() + "istic";
    assert_eq!(hash(&a), hash(&b));
    assert_eq!(hash(&a), hash(&a));
}

#[test]
fn test_high_bytes_are_unsigned() {
    assert_eq!(hash_bytes(&[0xff]), (FNV_OFFSET_BASIS ^ 0xff).wrapping_mul(FNV_PRIME));
}

#[test]
fn test_cstr() {
    let s = CString::new("null terminated").unwrap();
    assert_eq!(hash_cstr(&s), hash("null terminated"));
    assert_eq!(hash_cstr(c""), FNV_OFFSET_BASIS);
}

#[test]
fn test_const_eval() {
    const H: u32 = hash_bytes(b"a");
    assert_eq!(H, hash("a"));
}

#[test]
fn test_long_input() {
    let long = "z".repeat(8 << 20);
    let expected = long
        .bytes()
        .fold(FNV_OFFSET_BASIS, |h, c| (h ^ c as u32).wrapping_mul(FNV_PRIME));
    assert_eq!(hash(&long), expected);
}

#[test]
fn test_interior_nul() {
    let c = CStr::from_bytes_until_nul(b"a\0b\0").unwrap();
    assert_eq!(hash_cstr(c), hash("a"));
    assert_eq!(hash("a\0b"), fnv1a(b"b\0a"));
    assert_ne!(hash("a\0b"), hash_cstr(c));
}

#[test]
fn test_lines() {
    let split = |b: &'static [u8]| lines(b).collect::<Vec<_>>();
    assert!(split(b"").is_empty());
    assert_eq!(split(b"\n"), vec![&b""[..]]);
    assert_eq!(split(b"caf\xe9\r\nok\n"), vec![&b"caf\xe9"[..], &b"ok"[..]]);
    assert_eq!(split(b"a\n\nb"), vec![&b"a"[..], &b""[..], &b"b"[..]]);
}

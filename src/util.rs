// hash function

use std::ffi::CStr;

pub const FNV_OFFSET_BASIS: u32 = 2166136261;
pub const FNV_PRIME: u32 = 16777619;

/// 32-bit FNV-1a style hash that folds the string from its last byte to its
/// first. The result equals canonical [`fnv1a`] over the reversed bytes.
///
/// Every byte of `key` is folded, interior NULs included. Use [`hash_cstr`]
/// to stop at the first NUL.
pub fn hash(key: &str) -> u32 {
    hash_bytes(key.as_bytes())
}

/// Same fold as [`hash`], over raw bytes.
pub const fn hash_bytes(bytes: &[u8]) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        h = (h ^ bytes[i] as u32).wrapping_mul(FNV_PRIME);
    }
    h
}

/// Same fold as [`hash`], over a null-terminated string. The terminator is
/// not hashed.
pub fn hash_cstr(key: &CStr) -> u32 {
    hash_bytes(key.to_bytes())
}

/// Canonical FNV-1a 32, first byte to last.
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        h = (h ^ bytes[i] as u32).wrapping_mul(FNV_PRIME);
        i += 1;
    }
    h
}

/// Splits `bytes` into lines the way `str::lines` does: on `\n`, with one
/// trailing `\r` dropped per line and no empty line after a final newline.
pub fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .take(if bytes.is_empty() { 0 } else { usize::MAX })
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

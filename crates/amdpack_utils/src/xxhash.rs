use xxhash_rust::xxh3::xxh3_128;

/// Lowercase, zero-padded hex of the 128-bit xxh3 digest. Always 32 characters.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

#[test]
fn test_xxhash_hex() {
  let hash = xxhash_hex(b"hello");
  assert_eq!(hash.len(), 32);
  assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
  assert_eq!(hash, xxhash_hex(b"hello"));
  assert_ne!(hash, xxhash_hex(b"hello "));
}

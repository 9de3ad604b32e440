//! Name hashing
//!
//! Polynomial accumulation over the name's bytes, `h = h * 31 + byte` with
//! wrapping `u64` arithmetic seeded at 0, reduced modulo the bucket count.
//! Case-sensitive and stable across runs.

const MULTIPLIER: u64 = 31;

pub fn hash_name(name: &str) -> u64 {
    name.bytes().fold(0u64, |hash, byte| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(byte))
    })
}

/// Bucket index for a hash; `bucket_count` must be non-zero
pub fn hash_bucket(hash: u64, bucket_count: usize) -> usize {
    (hash % bucket_count as u64) as usize
}

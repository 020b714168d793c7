//! Hashed maps for per-pointer and per-gesture lookups.
//!
//! Keys are pointer ids, press sequence numbers and gesture kinds, so the
//! default build hashes with Fx. The `std-hash` feature switches to the
//! standard SipHash map.

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;

    /// Empty map using the configured hasher.
    pub fn new<K, V>() -> HashMap<K, V> {
        HashMap::default()
    }
}

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;

    /// Empty map using the configured hasher.
    pub fn new<K, V>() -> HashMap<K, V> {
        HashMap::new()
    }
}

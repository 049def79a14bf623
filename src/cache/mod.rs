//! Local key-value cache for catalog payloads
//!
//! The catalog client persists every successfully decoded payload here and reads
//! it back when the network is unreachable or the upstream answers 304. Entries
//! never expire and are never evicted; the store is a plain last-writer-wins
//! string map keyed by request identity.

pub mod key;
pub mod store;

pub use store::{CacheStore, DiskStore, MemoryStore, StoreError};

//! Hot-path container aliases used by the registry.
//!
//! Name resolution runs for every typed line, so the exact-name index uses `hashbrown`.
//! Keeping the choice here lets the registry swap containers without touching lookup logic.

use hashbrown::HashMap as HbMap;

/// Hot-path hash map used by registry indexes.
pub type HotMap<K, V> = HbMap<K, V>;

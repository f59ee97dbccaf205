use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use rustc_hash::FxHashSet;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// The insertion index doubles as the node key inside a single search
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

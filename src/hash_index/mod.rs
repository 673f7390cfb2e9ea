//! Open-addressing hash table mapping words to their occurrence lists.
//!
//! Collisions are resolved by linear probing with wrap-around. The table
//! grows to `size * 2 + 1` slots whenever an insertion finds it above the
//! configured load factor.

mod iterators;
mod stats;
mod table;

pub use iterators::Iter;
pub use stats::{HashStats, SlotSample};
pub use table::{fnv1a, HashEntry, HashIndex, InsertOutcome};

//! Character trie keyed by accent- and case-folded letters.
//!
//! Every node has 27 children: `a`..=`z` followed by the hyphen. Characters
//! that do not fold onto that alphabet are skipped while walking a word.

mod node;
mod normalize;
mod trie;

pub use node::TrieNode;
pub use normalize::{
    child_index, index_char, normalize, normalize_char, ALPHABET_SIZE, HYPHEN_INDEX,
};
pub use trie::{TrieIndex, TrieWord};

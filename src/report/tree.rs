use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    hash_index::{HashEntry, HashIndex},
    index_builder::cmp_ignore_ascii_case,
    trie_index::{index_char, TrieIndex, TrieNode},
};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Hash index entries as a two-level tree: words, then their positions.
pub struct HashTree<'a>(pub &'a HashIndex);

impl Display for HashTree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let table = self.0;
        writeln!(f, "=== Hash Table Tree ===")?;
        writeln!(
            f,
            "Root [{} entries in {} slots]",
            table.entries(),
            table.size()
        )?;

        let mut entries: Vec<&HashEntry> = table.iter().collect();
        entries.sort_by(|a, b| cmp_ignore_ascii_case(a.word(), b.word()));

        for (i, entry) in entries.iter().enumerate() {
            let last_entry = i + 1 == entries.len();
            let (branch, indent) = if last_entry {
                (LAST_BRANCH, SPACE)
            } else {
                (BRANCH, PIPE)
            };
            writeln!(
                f,
                "{branch}{} ({} occurrences)",
                entry.word(),
                entry.occurrences().len()
            )?;

            for (j, position) in entry.occurrences().iter().enumerate() {
                let branch = if j + 1 == entry.occurrences().len() {
                    LAST_BRANCH
                } else {
                    BRANCH
                };
                writeln!(f, "{indent}{branch}Position: {position}")?;
            }
        }

        Ok(())
    }
}

/// Every trie node labelled with the raw character that created it.
pub struct TrieTree<'a>(pub &'a TrieIndex);

impl Display for TrieTree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "=== Trie Tree ===")?;
        write_node(f, self.0.root(), None, "", true)?;
        writeln!(f, "=================")
    }
}

fn write_node(
    f: &mut Formatter<'_>,
    node: &TrieNode,
    index: Option<usize>,
    prefix: &str,
    is_last: bool,
) -> FmtResult {
    write!(f, "{prefix}{}", if is_last { LAST_BRANCH } else { BRANCH })?;

    match (node.label(), index.and_then(index_char)) {
        (Some(label), _) => write!(f, "{label}")?,
        (None, Some(c)) => write!(f, "{c}")?,
        (None, None) => {}
    }

    if node.is_end_of_word() {
        write!(
            f,
            " -> {} ({} occurrences)",
            node.original_word().unwrap_or_default(),
            node.occurrences().len()
        )?;
    }
    writeln!(f)?;

    let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
    let children: Vec<(usize, &TrieNode)> = node.children().collect();
    for (i, (index, child)) in children.iter().enumerate() {
        write_node(
            f,
            child,
            Some(*index),
            &child_prefix,
            i + 1 == children.len(),
        )?;
    }

    Ok(())
}

//! Prefix-code construction by greedy frequency merging.
//!
//! Every distinct symbol starts as its own group. The two lightest groups
//! are merged repeatedly; members of the first group get a `'1'` prepended
//! to their codeword, members of the second a `'0'`. Ties go to the group
//! that comes first in the current group order, where original symbols are
//! ordered by first appearance and merged groups are appended at the end.
//!
//! ```
//! use oscr_mdl::build_code;
//!
//! let table = build_code(&['a', 'b']);
//! assert_eq!(table.get(&'a'), Some("1"));
//! assert_eq!(table.get(&'b'), Some("0"));
//! assert_eq!(table.code_size(), 2);
//! ```

use ahash::AHashMap as HashMap;
use std::hash::Hash;
use tracing::trace;

/// Codeword assigned when the input has a single distinct symbol.
const SINGLE_SYMBOL_CODEWORD: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CodeEntry<S> {
    symbol: S,
    frequency: usize,
    codeword: String,
}

/// Mapping from symbol to its prefix-free codeword.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    entries: Vec<CodeEntry<S>>,
    index: HashMap<S, usize>,
}

impl<S: Hash + Eq> CodeTable<S> {
    /// Returns the codeword for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        let &slot = self.index.get(symbol)?;
        Some(self.entries[slot].codeword.as_str())
    }

    /// Returns how often `symbol` occurred in the coded stream.
    pub fn frequency(&self, symbol: &S) -> Option<usize> {
        let &slot = self.index.get(symbol)?;
        Some(self.entries[slot].frequency)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(symbol, codeword)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.symbol, entry.codeword.as_str()))
    }

    /// Sum of codeword lengths over distinct symbols, not weighted by
    /// frequency. Describes the size of the table itself.
    pub fn code_size(&self) -> usize {
        self.entries.iter().map(|entry| entry.codeword.len()).sum()
    }

    /// Bit length of the stream coded with this table.
    pub fn encoded_bits(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.frequency * entry.codeword.len())
            .sum()
    }
}

struct Group {
    members: Vec<usize>,
    weight: usize,
}

/// Removes and returns the lightest group, preferring the earliest on ties.
fn take_lightest(groups: &mut Vec<Group>) -> Option<Group> {
    let mut lightest: Option<(usize, usize)> = None;
    for (pos, group) in groups.iter().enumerate() {
        match lightest {
            Some((_, weight)) if group.weight >= weight => {}
            _ => lightest = Some((pos, group.weight)),
        }
    }
    let (pos, _) = lightest?;
    Some(groups.remove(pos))
}

/// Builds a prefix code over the distinct symbols of `symbols`.
///
/// An empty input yields an empty table; a single distinct symbol gets the
/// codeword `"0"`.
pub fn build_code<S: Hash + Eq + Clone>(symbols: &[S]) -> CodeTable<S> {
    let mut index: HashMap<S, usize> = HashMap::default();
    let mut entries: Vec<CodeEntry<S>> = Vec::new();

    for symbol in symbols {
        match index.get(symbol) {
            Some(&slot) => entries[slot].frequency += 1,
            None => {
                index.insert(symbol.clone(), entries.len());
                entries.push(CodeEntry {
                    symbol: symbol.clone(),
                    frequency: 1,
                    codeword: String::new(),
                });
            }
        }
    }

    if entries.len() == 1 {
        entries[0].codeword.push_str(SINGLE_SYMBOL_CODEWORD);
        return CodeTable { entries, index };
    }

    let mut groups: Vec<Group> = entries
        .iter()
        .enumerate()
        .map(|(slot, entry)| Group {
            members: vec![slot],
            weight: entry.frequency,
        })
        .collect();

    // Bits are pushed leaf-to-root and reversed once at the end.
    while groups.len() > 1 {
        let Some(first) = take_lightest(&mut groups) else {
            break;
        };
        let Some(second) = take_lightest(&mut groups) else {
            break;
        };

        for &member in &first.members {
            entries[member].codeword.push('1');
        }
        for &member in &second.members {
            entries[member].codeword.push('0');
        }

        let weight = first.weight + second.weight;
        trace!(
            first = first.weight,
            second = second.weight,
            merged = weight,
            remaining = groups.len() + 1,
            "merged code groups"
        );

        let mut members = first.members;
        members.extend(second.members);
        groups.push(Group { members, weight });
    }

    for entry in &mut entries {
        entry.codeword = entry.codeword.chars().rev().collect();
    }

    CodeTable { entries, index }
}

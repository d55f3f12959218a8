//! The working state of the encoder: an ordered list of segments.
//!
//! Segments live in a SlotMap and are linked as a doubly-linked list, so a
//! replacement can split one literal run into several segments in place
//! without shifting the rest of the stream.

use crate::token::Token;
use slotmap::{DefaultKey, SlotMap};

/// A node in the doubly-linked list of segments.
#[derive(Debug)]
pub(crate) struct SegmentNode<T> {
    pub token: Token<T>,
    pub prev: Option<DefaultKey>,
    pub next: Option<DefaultKey>,
}

impl<T> SegmentNode<T> {
    pub(crate) fn new(token: Token<T>) -> Self {
        Self {
            token,
            prev: None,
            next: None,
        }
    }
}

/// Ordered segments of a partially encoded sequence.
#[derive(Debug)]
pub(crate) struct SegmentList<T> {
    nodes: SlotMap<DefaultKey, SegmentNode<T>>,
    head: Option<DefaultKey>,
    literal_runs: usize,
}

impl<T: PartialEq + Clone> SegmentList<T> {
    /// Creates a list holding the whole input as one literal run.
    pub(crate) fn new(input: Vec<T>) -> Self {
        let mut nodes = SlotMap::new();
        let literal_runs = usize::from(!input.is_empty());
        let head = if input.is_empty() {
            None
        } else {
            Some(nodes.insert(SegmentNode::new(Token::Literal(input))))
        };

        Self {
            nodes,
            head,
            literal_runs,
        }
    }

    /// Number of segments (each literal run counts once).
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn has_literals(&self) -> bool {
        self.literal_runs > 0
    }

    pub(crate) fn iter(&self) -> SegmentIter<'_, T> {
        SegmentIter {
            list: self,
            current: self.head,
        }
    }

    /// Literal runs in stream order.
    pub(crate) fn runs(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.iter().filter_map(Token::as_literal)
    }

    /// Replaces every non-overlapping occurrence of `pattern` inside the
    /// literal runs with `Token::Reference(id)`, scanning each run left to
    /// right. Returns the number of replacements.
    pub(crate) fn replace_all(&mut self, pattern: &[T], id: u32) -> usize {
        debug_assert!(!pattern.is_empty(), "pattern must not be empty");

        let literal_keys: Vec<DefaultKey> = self
            .keys()
            .into_iter()
            .filter(|&key| self.nodes[key].token.is_literal())
            .collect();

        let mut replaced = 0;
        for key in literal_keys {
            let Token::Literal(run) = &self.nodes[key].token else {
                continue;
            };
            let Some((pieces, count)) = split_run(run, pattern, id) else {
                continue;
            };

            replaced += count;
            self.literal_runs -= 1;
            self.literal_runs += pieces.iter().filter(|p| p.is_literal()).count();
            self.splice(key, pieces);
        }

        replaced
    }

    /// Consumes the list, returning its tokens in order.
    pub(crate) fn into_tokens(mut self) -> Vec<Token<T>> {
        let mut tokens = Vec::with_capacity(self.nodes.len());
        let mut current = self.head;
        while let Some(key) = current {
            let Some(node) = self.nodes.remove(key) else {
                break;
            };
            current = node.next;
            tokens.push(node.token);
        }
        tokens
    }

    fn keys(&self) -> Vec<DefaultKey> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut current = self.head;
        while let Some(key) = current {
            keys.push(key);
            current = self.nodes[key].next;
        }
        keys
    }

    /// Replaces the node at `key` with `pieces`, keeping list order.
    fn splice(&mut self, key: DefaultKey, pieces: Vec<Token<T>>) {
        let Some(old) = self.nodes.remove(key) else {
            return;
        };

        let mut prev = old.prev;
        for token in pieces {
            let new_key = self.nodes.insert(SegmentNode::new(token));
            self.nodes[new_key].prev = prev;
            match prev {
                Some(p) => self.nodes[p].next = Some(new_key),
                None => self.head = Some(new_key),
            }
            prev = Some(new_key);
        }

        match (prev, old.next) {
            (Some(last), next) => {
                self.nodes[last].next = next;
                if let Some(n) = next {
                    self.nodes[n].prev = Some(last);
                }
            }
            // No pieces: unlink the old node entirely.
            (None, next) => {
                self.head = next;
                if let Some(n) = next {
                    self.nodes[n].prev = None;
                }
            }
        }
    }
}

/// Splits `run` around the non-overlapping occurrences of `pattern`.
///
/// Returns `None` when the pattern does not occur. Empty literal pieces are
/// never produced.
fn split_run<T: PartialEq + Clone>(
    run: &[T],
    pattern: &[T],
    id: u32,
) -> Option<(Vec<Token<T>>, usize)> {
    let width = pattern.len();
    let mut pieces = Vec::new();
    let mut count = 0;
    let mut literal_start = 0;
    let mut pos = 0;

    while pos + width <= run.len() {
        if run[pos..pos + width] == *pattern {
            if literal_start < pos {
                pieces.push(Token::Literal(run[literal_start..pos].to_vec()));
            }
            pieces.push(Token::Reference(id));
            count += 1;
            pos += width;
            literal_start = pos;
        } else {
            pos += 1;
        }
    }

    if count == 0 {
        return None;
    }
    if literal_start < run.len() {
        pieces.push(Token::Literal(run[literal_start..].to_vec()));
    }
    Some((pieces, count))
}

/// Iterator over the segments of a [`SegmentList`] in order.
pub(crate) struct SegmentIter<'a, T> {
    list: &'a SegmentList<T>,
    current: Option<DefaultKey>,
}

impl<'a, T> Iterator for SegmentIter<'a, T> {
    type Item = &'a Token<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        let node = self.list.nodes.get(key)?;
        self.current = node.next;
        Some(&node.token)
    }
}

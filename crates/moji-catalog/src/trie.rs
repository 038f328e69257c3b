#![forbid(unsafe_code)]

//! Byte-level prefix trie over catalog glyphs.
//!
//! The trie walks UTF-8 bytes one transition at a time, so composed
//! sequences (joiners, selectors, modifiers) never need to be decoded into
//! code points before lookup. Registered sequences are whole strings, so
//! every complete match ends on a `char` boundary.
//!
//! # Example
//! ```
//! use moji_catalog::trie::{EmojiTrie, Matches};
//!
//! let trie = EmojiTrie::build([("ab", 0), ("abc", 1)]);
//! assert_eq!(trie.best_match("abcd", 0).map(|id| id.index()), Some(1));
//! assert_eq!(trie.matches(b"a"), Matches::Possibly);
//! assert_eq!(trie.matches(b"x"), Matches::Impossibly);
//! ```

use smallvec::SmallVec;

use crate::emoji::EmojiId;

/// Verdict for a byte sequence against the registered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matches {
    /// The sequence is registered (it may also prefix longer ones).
    Exactly,
    /// The sequence is a strict prefix of at least one registered sequence.
    Possibly,
    /// No registered sequence starts with it.
    Impossibly,
}

impl Matches {
    #[inline]
    #[must_use]
    pub const fn exact_match(self) -> bool {
        matches!(self, Self::Exactly)
    }

    #[inline]
    #[must_use]
    pub const fn impossible_match(self) -> bool {
        matches!(self, Self::Impossibly)
    }
}

type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    /// Sorted by byte.
    children: SmallVec<[(u8, NodeId); 4]>,
    emoji: Option<EmojiId>,
}

/// Prefix trie mapping glyph byte sequences to catalog ids.
#[derive(Debug, Clone)]
pub struct EmojiTrie {
    nodes: Vec<Node>,
    max_depth: usize,
}

impl Default for EmojiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiTrie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            max_depth: 0,
        }
    }

    /// Build a trie from `(sequence, index)` pairs.
    #[must_use]
    pub fn build<'s>(entries: impl IntoIterator<Item = (&'s str, u32)>) -> Self {
        let mut trie = Self::new();
        for (sequence, index) in entries {
            trie.insert(sequence, EmojiId(index));
        }
        trie
    }

    /// Register `sequence` for `id`. A later insert of the same sequence
    /// replaces the earlier id. Empty sequences are ignored.
    pub(crate) fn insert(&mut self, sequence: &str, id: EmojiId) {
        if sequence.is_empty() {
            return;
        }
        let mut node = ROOT;
        for &byte in sequence.as_bytes() {
            node = match self.child(node, byte) {
                Some(next) => next,
                None => self.push_child(node, byte),
            };
        }
        self.nodes[node as usize].emoji = Some(id);
        self.max_depth = self.max_depth.max(sequence.len());
    }

    fn push_child(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::default());
        let children = &mut self.nodes[parent as usize].children;
        let slot = children.partition_point(|&(b, _)| b < byte);
        children.insert(slot, (byte, id));
        id
    }

    #[inline]
    fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        let children = &self.nodes[node as usize].children;
        children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|slot| children[slot].1)
    }

    fn walk(&self, bytes: &[u8]) -> Option<NodeId> {
        bytes
            .iter()
            .try_fold(ROOT, |node, &byte| self.child(node, byte))
    }

    /// Longest registered sequence starting at byte offset `start` of `text`.
    ///
    /// Greedy: the deepest complete node reached along the walk wins, not
    /// the first.
    #[must_use]
    pub fn best_match(&self, text: &str, start: usize) -> Option<EmojiId> {
        let bytes = text.as_bytes().get(start..)?;
        let mut node = ROOT;
        let mut best = None;
        for &byte in bytes {
            match self.child(node, byte) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(id) = self.nodes[node as usize].emoji {
                best = Some(id);
            }
        }
        best
    }

    /// Classify `bytes` against the registered set.
    #[must_use]
    pub fn matches(&self, bytes: &[u8]) -> Matches {
        match self.walk(bytes) {
            None => Matches::Impossibly,
            Some(node) if self.nodes[node as usize].emoji.is_some() => Matches::Exactly,
            Some(_) => Matches::Possibly,
        }
    }

    /// Exact lookup.
    #[must_use]
    pub fn get(&self, bytes: &[u8]) -> Option<EmojiId> {
        self.walk(bytes)
            .and_then(|node| self.nodes[node as usize].emoji)
    }

    /// Byte length of the longest registered sequence.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of trie nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> EmojiTrie {
        EmojiTrie::build([
            ("\u{1F468}", 0),
            ("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}", 1),
            ("\u{1F466}", 2),
            ("#\u{FE0F}\u{20E3}", 3),
        ])
    }

    #[test]
    fn longest_match_wins() {
        let t = trie();
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        assert_eq!(t.best_match(family, 0), Some(EmojiId(1)));
    }

    #[test]
    fn falls_back_to_shorter_match() {
        let t = trie();
        // Walk goes past the man glyph into the joiner but never completes.
        let text = "\u{1F468}\u{200D}\u{1F469}!";
        assert_eq!(t.best_match(text, 0), Some(EmojiId(0)));
    }

    #[test]
    fn offset_and_miss() {
        let t = trie();
        let text = "hi \u{1F466}";
        assert_eq!(t.best_match(text, 0), None);
        assert_eq!(t.best_match(text, 3), Some(EmojiId(2)));
        assert_eq!(t.best_match(text, text.len()), None);
        assert_eq!(t.best_match(text, 99), None);
    }

    #[test]
    fn ascii_led_sequence() {
        let t = trie();
        assert_eq!(t.best_match("#\u{FE0F}\u{20E3}", 0), Some(EmojiId(3)));
        assert_eq!(t.best_match("#1", 0), None);
    }

    #[test]
    fn classification() {
        let t = trie();
        let man = "\u{1F468}".as_bytes();
        assert_eq!(t.matches(man), Matches::Exactly);
        assert_eq!(t.matches(&man[..2]), Matches::Possibly);
        assert_eq!(t.matches("\u{1F468}\u{200D}".as_bytes()), Matches::Possibly);
        assert_eq!(t.matches(b"z"), Matches::Impossibly);
        assert!(Matches::Exactly.exact_match());
        assert!(Matches::Impossibly.impossible_match());
        assert!(!Matches::Possibly.impossible_match());
    }

    #[test]
    fn exact_lookup_and_depth() {
        let t = trie();
        assert_eq!(t.get("\u{1F466}".as_bytes()), Some(EmojiId(2)));
        assert_eq!(t.get("\u{1F468}\u{200D}".as_bytes()), None);
        assert_eq!(t.max_depth(), "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}".len());
    }

    #[test]
    fn reinsert_replaces_and_empty_is_ignored() {
        let mut t = trie();
        let before = t.node_count();
        t.insert("\u{1F466}", EmojiId(9));
        t.insert("", EmojiId(10));
        assert_eq!(t.get("\u{1F466}".as_bytes()), Some(EmojiId(9)));
        assert_eq!(t.node_count(), before);
        assert_eq!(t.matches(b""), Matches::Possibly);
    }
}

//! Pair, LocalPairs and PairList definitions.
//!
//! A folding recursion works on substrings, and every result it returns
//! is expressed relative to the first position of *its own* input. Those
//! results are `LocalPairs`. They only become a `PairList` (global
//! coordinates, bound to a sequence length) once they were computed on
//! the full sequence. Merging a sub-result into a parent always goes
//! through `LocalPairs::adjust` or `LocalPairs::extend_adjusted`.
//!
//! Indices are **0-based** throughout.
//!

use std::fmt;
use itertools::Itertools;

use crate::NAIDX;
use crate::P1KEY;
use crate::PairTable;


/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << 16) | (self.j as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> 16) as NAIDX;
        let j = (key & 0xFFFF) as NAIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// The same pair, moved `offset` positions downstream.
    pub fn shifted(&self, offset: NAIDX) -> Self {
        Pair::new(self.i + offset, self.j + offset)
    }

    /// True if the two pairs interleave, i.e. form a pseudoknot.
    pub fn crosses(&self, other: &Pair) -> bool {
        (self.i < other.i && other.i < self.j && self.j < other.j)
            || (other.i < self.i && self.i < other.j && other.j < self.j)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// Base pairs relative to the start of the substring they were folded on.
///
/// These are never meaningful on their own: a parent has to shift them
/// by the offset of the substring within its own coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalPairs(Vec<Pair>);

impl LocalPairs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A pairing list holding a single (local) pair.
    pub fn with_pair(pair: Pair) -> Self {
        Self(vec![pair])
    }

    pub fn push(&mut self, pair: Pair) {
        self.0.push(pair);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.0.iter()
    }

    /// Return a new list with `offset` added to every position.
    /// The input stays untouched, so memoized results can be reused
    /// by callers with different offsets.
    pub fn adjust(&self, offset: NAIDX) -> LocalPairs {
        LocalPairs(self.0.iter().map(|p| p.shifted(offset)).collect())
    }

    /// Append the pairs of `other`, shifted by `offset`.
    pub fn extend_adjusted(&mut self, other: &LocalPairs, offset: NAIDX) {
        self.0.extend(other.0.iter().map(|p| p.shifted(offset)));
    }

    /// Promote to global coordinates. Only valid for a result that was
    /// computed on the complete sequence of the given length.
    pub fn into_global(self, length: usize) -> PairList {
        PairList::from_pairs(length, self.0)
    }
}

/// Base pairs in global coordinates of a sequence with known length.
///
/// Pairs are kept sorted by their 5' index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    /// An empty pairing list for a sequence of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            pairs: Vec::new(),
        }
    }

    pub fn from_pairs(length: usize, mut pairs: Vec<Pair>) -> Self {
        debug_assert!(pairs.iter().all(|p| (p.j() as usize) < length));
        pairs.sort_unstable_by_key(|p| p.key());
        Self { length, pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Length of the underlying sequence.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl From<&PairTable> for PairList {
    fn from(pt: &PairTable) -> Self {
        let mut pairs = Vec::new();
        for (i, &j_opt) in pt.iter().enumerate() {
            let i = i as NAIDX;
            if let Some(j) = j_opt {
                if i < j {
                    pairs.push(Pair::new(i, j));
                }
            }
        }
        PairList {
            length: pt.len(),
            pairs,
        }
    }
}

impl fmt::Display for PairList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.pairs.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_roundtrip() {
        let p = Pair::new(1, 42);
        assert_eq!(Pair::from_key(p.key()), p);
    }

    #[test]
    fn test_pair_relations() {
        let outer = Pair::new(0, 20);
        let inner = Pair::new(3, 9);
        let right = Pair::new(10, 19);
        let knot = Pair::new(5, 25);
        assert!(!inner.crosses(&right));
        assert!(inner.crosses(&knot));
        assert!(knot.crosses(&inner));
        assert!(!outer.crosses(&inner));
    }

    #[test]
    fn test_adjust_returns_new_list() {
        let mut local = LocalPairs::with_pair(Pair::new(0, 7));
        local.push(Pair::new(1, 6));

        let moved = local.adjust(3);
        assert_eq!(moved, {
            let mut l = LocalPairs::with_pair(Pair::new(3, 10));
            l.push(Pair::new(4, 9));
            l
        });
        // The source list is left as it was.
        assert_eq!(local.iter().next(), Some(&Pair::new(0, 7)));
        assert_eq!(local.adjust(0), local);
    }

    #[test]
    fn test_extend_adjusted() {
        let mut parent = LocalPairs::with_pair(Pair::new(0, 12));
        let child = LocalPairs::with_pair(Pair::new(0, 5));
        parent.extend_adjusted(&child, 2);
        parent.extend_adjusted(&child, 6);
        let global = parent.into_global(13);
        assert_eq!(global.pairs(), &[Pair::new(0, 12), Pair::new(2, 7), Pair::new(6, 11)]);
    }

    #[test]
    fn test_pair_list_from_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        let pl = PairList::from(&pt);

        assert_eq!(pl.length(), 6);
        assert_eq!(pl.pairs(), &[Pair::new(0, 5), Pair::new(1, 4)]);
    }

    #[test]
    fn test_display() {
        let pl = PairList::from_pairs(10, vec![Pair::new(2, 7), Pair::new(1, 8)]);
        assert_eq!(format!("{}", pl), "[(1,8),(2,7)]");
        assert_eq!(format!("{}", PairList::new(3)), "[]");
    }
}

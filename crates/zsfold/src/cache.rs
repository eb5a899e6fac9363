//! Memoization of sub-folds by substring content.
//!
//! The energy of a fold depends only on the bases, not on where the
//! substring sits in the sequence, so both tables are keyed by an owned
//! copy of the substring. Entries are written once and never replaced.

use std::rc::Rc;
use ahash::AHashMap;
use zs_energy::Base;

use crate::Fold;

type FoldMap = AHashMap<Box<[Base]>, Rc<Fold>>;

#[derive(Debug, Default)]
pub(crate) struct FoldCache {
    exterior: FoldMap,
    enclosed: FoldMap,
    hits: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CacheStats {
    pub exterior: usize,
    pub enclosed: usize,
    pub hits: usize,
}

impl FoldCache {
    pub fn exterior(&mut self, seq: &[Base]) -> Option<Rc<Fold>> {
        let hit = self.exterior.get(seq).cloned();
        self.hits += hit.is_some() as usize;
        hit
    }

    pub fn enclosed(&mut self, seq: &[Base]) -> Option<Rc<Fold>> {
        let hit = self.enclosed.get(seq).cloned();
        self.hits += hit.is_some() as usize;
        hit
    }

    pub fn store_exterior(&mut self, seq: &[Base], fold: Fold) -> Rc<Fold> {
        Rc::clone(self.exterior.entry(seq.into()).or_insert_with(|| Rc::new(fold)))
    }

    pub fn store_enclosed(&mut self, seq: &[Base], fold: Fold) -> Rc<Fold> {
        Rc::clone(self.enclosed.entry(seq.into()).or_insert_with(|| Rc::new(fold)))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            exterior: self.exterior.len(),
            enclosed: self.enclosed.len(),
            hits: self.hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zs_energy::RnaSequence;

    #[test]
    fn test_keys_are_content() {
        let seq = RnaSequence::try_from("GAAAACGAAAAC").unwrap();
        let mut cache = FoldCache::default();
        cache.store_enclosed(&seq[0..6], Fold::new(-1.0, Default::default()));

        // Same content at another position is a hit.
        let hit = cache.enclosed(&seq[6..12]).expect("cached by content");
        assert_eq!(hit.energy(), -1.0);
        assert!(cache.exterior(&seq[6..12]).is_none());
        assert_eq!(cache.stats(), CacheStats { exterior: 0, enclosed: 1, hits: 1 });
    }

    #[test]
    fn test_entries_are_write_once() {
        let seq = RnaSequence::try_from("GAAAAC").unwrap();
        let mut cache = FoldCache::default();
        let first = cache.store_exterior(&seq, Fold::open());
        let second = cache.store_exterior(&seq, Fold::new(-5.0, Default::default()));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.energy(), 0.0);
    }
}

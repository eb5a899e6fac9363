//! Top-level folding of a complete sequence.

use std::fmt;
use std::rc::Rc;
use log::debug;
use zs_energy::Base;
use zs_energy::EnergyModel;
use zs_energy::EnergyTable;
use zs_energy::RnaSequence;
use zs_structure::PairList;
use zs_structure::DotBracketVec;

use crate::Fold;
use crate::FoldError;
use crate::FoldConfig;
use crate::MINPAIRDIST;
use crate::cache::FoldCache;

/// State of one top-level folding request. The memo tables live exactly
/// as long as the request.
pub(crate) struct FoldContext<'a, M: EnergyModel> {
    pub model: &'a M,
    pub min_pair_dist: usize,
    pub cache: FoldCache,
}

/// Minimum free energy structure of a complete sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MfeFold {
    sequence: RnaSequence,
    energy: f64,
    pairs: PairList,
    structure: DotBracketVec,
}

impl MfeFold {
    pub fn sequence(&self) -> &RnaSequence {
        &self.sequence
    }

    /// Free energy in kcal/mol.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// The base pairs, in sequence coordinates.
    pub fn pairs(&self) -> &PairList {
        &self.pairs
    }

    pub fn structure(&self) -> &DotBracketVec {
        &self.structure
    }
}

impl fmt::Display for MfeFold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{} ({:6.2})", self.sequence, self.structure, self.energy)
    }
}

/// Folds sequences with a given energy model.
pub struct Folder<'a, M: EnergyModel = EnergyTable> {
    model: &'a M,
    min_pair_dist: usize,
}

impl<'a, M: EnergyModel> Folder<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            min_pair_dist: MINPAIRDIST,
        }
    }

    pub fn with_config(model: &'a M, config: &FoldConfig) -> Result<Self, FoldError> {
        config.validate()?;
        Ok(Self {
            model,
            min_pair_dist: config.min_pair_dist,
        })
    }

    pub fn min_pair_dist(&self) -> usize {
        self.min_pair_dist
    }

    pub fn fold(&self, seq: &RnaSequence) -> Result<MfeFold, FoldError> {
        let fold = self.fold_exterior(seq)?;
        let energy = fold.energy();
        // Folded on the complete sequence: local coordinates are global.
        let pairs = fold.into_pairs().into_global(seq.len());
        let structure = DotBracketVec::from(&pairs);
        Ok(MfeFold {
            sequence: seq.clone(),
            energy,
            pairs,
            structure,
        })
    }

    /// Validate and fold a sequence given as text.
    pub fn fold_str(&self, seq: &str) -> Result<MfeFold, FoldError> {
        self.fold(&RnaSequence::try_from(seq)?)
    }

    /// Best fold of `seq` with both ends free.
    pub fn fold_exterior(&self, seq: &[Base]) -> Result<Fold, FoldError> {
        self.run(seq, |ctx, s| ctx.exterior(s))
    }

    /// Best fold of the inside of `seq`, whose first and last base are
    /// taken to be paired with each other.
    pub fn fold_enclosed(&self, seq: &[Base]) -> Result<Fold, FoldError> {
        self.run(seq, |ctx, s| ctx.enclosed(s))
    }

    fn run<F>(&self, seq: &[Base], recursion: F) -> Result<Fold, FoldError>
    where
        F: FnOnce(&mut FoldContext<'a, M>, &[Base]) -> Result<Rc<Fold>, FoldError>,
    {
        let mut ctx = FoldContext {
            model: self.model,
            min_pair_dist: self.min_pair_dist,
            cache: FoldCache::default(),
        };
        let fold = recursion(&mut ctx, seq)?;

        let stats = ctx.cache.stats();
        debug!(
            "Folded {} nt: {:.2} kcal/mol with {} pairs (memo: {} exterior, {} enclosed, {} hits).",
            seq.len(), fold.energy(), fold.pairs().len(), stats.exterior, stats.enclosed, stats.hits
        );
        drop(ctx);
        Ok(Rc::unwrap_or_clone(fold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use zs_energy::EnergyError;
    use zs_energy::LoopKey;
    use zs_energy::SequenceError;
    use zs_structure::Pair;
    use zs_structure::PairTable;

    use crate::testutil::*;

    fn random_sequence(rng: &mut StdRng, len: usize) -> String {
        (0..len).map(|_| char::from(Base::ALL[rng.random_range(0..4)])).collect()
    }

    #[test]
    fn test_short_sequence() {
        let table = EnergyTable::default();
        let mfe = Folder::new(&table).fold_str("AUGC").unwrap();
        assert_eq!(mfe.energy(), 0.0);
        assert!(mfe.pairs().is_empty());
        assert_eq!(mfe.structure().to_string(), "....");
    }

    #[test]
    fn test_single_hairpin() {
        let mut table = EnergyTable::default();
        table.insert(hairpin_key('G', 5), -1.0);

        // G and C are the only pairable bases, at maximal distance.
        let mfe = Folder::new(&table).fold_str("GAAAAAC").unwrap();
        assert_eq!(mfe.energy(), -1.0);
        assert_eq!(mfe.pairs().pairs(), &[Pair::new(0, 6)]);
        assert_eq!(mfe.structure().to_string(), "(.....)");
    }

    #[test]
    fn test_stacked_helix() {
        use Base::*;
        let table = EnergyTable::default();
        let mfe = Folder::new(&table).fold_str("GGGGAAAACCCC").unwrap();

        let stack = table.stack((G, C), (G, C)).unwrap();
        let hairpin = table.hairpin(G, 4).unwrap();
        assert_eq!(mfe.energy(), stack + (stack + (stack + hairpin)));
        assert_eq!(mfe.pairs().pairs(), &[
            Pair::new(0, 11), Pair::new(1, 10), Pair::new(2, 9), Pair::new(3, 8),
        ]);
        assert_eq!(mfe.structure().to_string(), "((((....))))");
    }

    #[test]
    fn test_two_branches_beat_one_helix() {
        let table = uniform_table();
        let folder = Folder::new(&table);
        let helix = "GGGGAAAACCCC";
        let s = format!("G{helix}AAAAA{helix}C");

        // Two helices of three stacks and a short hairpin each.
        let reference = 2.0 * (3.0 * STACK + HAIRPIN);
        let mfe = folder.fold_str(&s).unwrap();
        assert_eq!(mfe.energy(), reference);
        // Equal to the open chain, but the enclosing pair is enumerated last.
        assert_eq!(mfe.structure().to_string(), "(((((....)))).....((((....)))))");

        let seq = RnaSequence::try_from(s.as_str()).unwrap();
        let enclosed = folder.fold_enclosed(&seq).unwrap();
        assert_eq!(enclosed.energy(), reference);
        assert_eq!(enclosed.pairs().len(), 8);
    }

    #[test]
    fn test_min_pair_dist_from_config() {
        let mut table = EnergyTable::default();
        table.insert(hairpin_key('G', 3), -1.0);

        let mfe = Folder::new(&table).fold_str("GAAAC").unwrap();
        assert!(mfe.pairs().is_empty());

        let config = FoldConfig { min_pair_dist: 4, ..Default::default() };
        let folder = Folder::with_config(&table, &config).unwrap();
        assert_eq!(folder.min_pair_dist(), 4);
        let mfe = folder.fold_str("GAAAC").unwrap();
        assert_eq!(mfe.energy(), -1.0);
        assert_eq!(mfe.structure().to_string(), "(...)");

        let config = FoldConfig { min_pair_dist: 3, ..Default::default() };
        assert!(matches!(Folder::with_config(&table, &config), Err(FoldError::Config(_))));
    }

    #[test]
    fn test_missing_entry_is_fatal() {
        let table = EnergyTable::from_fn(
            LoopKey::constructible(MINPAIRDIST).into_iter().filter(|k| !matches!(k, LoopKey::Stack(_))),
            |_| 1.0,
        );
        match Folder::new(&table).fold_str("GGGGAAAACCCC") {
            Err(FoldError::Energy(EnergyError::MissingEntry(key))) => assert_eq!(key.len(), 4),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_sequence() {
        let table = EnergyTable::default();
        assert!(matches!(
            Folder::new(&table).fold_str("GGGGAAAATCCC"),
            Err(FoldError::Sequence(SequenceError::InvalidBase { base: 'T', position: 8 }))
        ));
    }

    #[test]
    fn test_random_folds_are_valid_structures() {
        let table = EnergyTable::default();
        let folder = Folder::new(&table);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let len = rng.random_range(0..30);
            let s = random_sequence(&mut rng, len);
            let mfe = folder.fold_str(&s).unwrap();

            assert!(PairTable::try_from(mfe.pairs()).is_ok(), "crossing pairs for {s}");
            for pair in mfe.pairs().iter() {
                let (i, j) = (pair.i() as usize, pair.j() as usize);
                assert!(j - i >= MINPAIRDIST, "{s}: {pair}");
                assert!(mfe.sequence()[i].pairs_with(mfe.sequence()[j]), "{s}: {pair}");
            }
            assert_eq!(mfe.structure().len(), len);
            assert!(mfe.energy() <= 0.0);
        }
    }

    #[test]
    fn test_truncation_never_lowers_energy() {
        let table = EnergyTable::default();
        let folder = Folder::new(&table);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let len = rng.random_range(8..26);
            let s = random_sequence(&mut rng, len);
            let full = folder.fold_str(&s).unwrap().energy();
            let suffix = folder.fold_str(&s[1..]).unwrap().energy();
            let prefix = folder.fold_str(&s[..len - 1]).unwrap().energy();
            assert!(full <= suffix, "{s}");
            assert!(full <= prefix, "{s}");
        }
    }

    #[test]
    fn test_deterministic() {
        let table = EnergyTable::default();
        let mut rng = StdRng::seed_from_u64(1981);
        for _ in 0..10 {
            let s = random_sequence(&mut rng, 24);
            let first = Folder::new(&table).fold_str(&s).unwrap();
            let second = Folder::new(&table).fold_str(&s).unwrap();
            assert_eq!(first.energy().to_bits(), second.energy().to_bits());
            assert_eq!(first, second);
        }
    }
}

//! The energy model seam.
//!
//! The folding engine only ever asks for one of four loop costs. All of
//! them reduce to lookups of a `LoopKey`, so an implementation only has
//! to provide `lookup`.

use crate::Base;
use crate::LoopKey;
use crate::LengthBin;
use crate::PairClass;
use crate::ClosingClass;
use crate::EnergyError;

pub trait EnergyModel {
    /// Energy contribution of a single key. A missing key is an error,
    /// never a default value.
    fn lookup(&self, key: &LoopKey) -> Result<f64, EnergyError>;

    /// Hairpin closed by a pair with 5' base `closing` around
    /// `loop_len` unpaired bases.
    fn hairpin(&self, closing: Base, loop_len: usize) -> Result<f64, EnergyError> {
        self.lookup(&LoopKey::Hairpin(ClosingClass::from(closing), LengthBin::from_len(loop_len)))
    }

    /// Two directly stacked pairs.
    fn stack(&self, outer: (Base, Base), inner: (Base, Base)) -> Result<f64, EnergyError> {
        self.lookup(&LoopKey::stack(outer, inner))
    }

    /// A bulge of `bulge_len` unpaired bases on one side. The two pairs
    /// still contribute their stacking energy.
    fn bulge(
        &self,
        bulge_len: usize,
        outer: (Base, Base),
        inner: (Base, Base),
    ) -> Result<f64, EnergyError> {
        let bulge = self.lookup(&LoopKey::Bulge(LengthBin::from_len(bulge_len)))?;
        Ok(bulge + self.stack(outer, inner)?)
    }

    /// An interior loop with `loop_len` unpaired bases on both sides in
    /// total, classified by the 5' bases of the outer and inner pair.
    fn interior(&self, outer_5: Base, inner_5: Base, loop_len: usize) -> Result<f64, EnergyError> {
        self.lookup(&LoopKey::Interior(PairClass::of(outer_5, inner_5), LengthBin::from_len(loop_len)))
    }
}

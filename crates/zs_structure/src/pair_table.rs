//! A pair table maps every position to its partner (if any).
//!
//! Building a `PairTable` from a `PairList` is the place where pairing
//! lists are checked for conflicts and crossings.

use std::ops::Deref;
use std::ops::DerefMut;

use crate::NAIDX;
use crate::Pair;
use crate::PairList;
use crate::DotBracket;
use crate::DotBracketVec;
use crate::StructureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<NAIDX>>);

impl Deref for PairTable {
    type Target = Vec<Option<NAIDX>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PairTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(dbv: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; dbv.len()];
        for (j, &db) in dbv.iter().enumerate() {
            match db {
                DotBracket::Unpaired => {}
                DotBracket::Open => stack.push(j),
                DotBracket::Close => {
                    let i = stack.pop().ok_or(StructureError::UnmatchedClose(j))?;
                    table[i] = Some(j as NAIDX);
                    table[j] = Some(i as NAIDX);
                }
            }
        }
        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }
        Ok(PairTable(table))
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairTable::try_from(&DotBracketVec::try_from(s)?)
    }
}

impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    /// Fails if a pair is out of range, a position is used twice,
    /// or two pairs cross each other.
    fn try_from(pairs: &PairList) -> Result<Self, Self::Error> {
        let length = pairs.length();
        let mut table: Vec<Option<NAIDX>> = vec![None; length];
        for &pair in pairs.iter() {
            let (i, j) = (pair.i() as usize, pair.j() as usize);
            if j >= length {
                return Err(StructureError::OutOfRange { pair, length });
            }
            for k in [i, j] {
                if table[k].is_some() {
                    return Err(StructureError::Conflict(k));
                }
            }
            table[i] = Some(pair.j());
            table[j] = Some(pair.i());
        }

        // Pairs come sorted by their 5' end. Keep the chain of pairs still
        // open at the current position; a new pair may not cross its top.
        let mut open: Vec<Pair> = Vec::new();
        for &pair in pairs.iter() {
            while open.last().is_some_and(|top| top.j() < pair.i()) {
                open.pop();
            }
            if let Some(&top) = open.last().filter(|top| top.crosses(&pair)) {
                return Err(StructureError::Crossing { first: top, second: pair });
            }
            open.push(pair);
        }
        Ok(PairTable(table))
    }
}

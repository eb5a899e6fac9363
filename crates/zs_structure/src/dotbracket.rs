//! Dot-bracket notation.
//!
//! Rendering never validates: it trusts the pairing list to be
//! non-crossing and in range, which the folding recursion guarantees.
//! Use `PairTable::try_from(&PairList)` for an explicit check.

use std::fmt;
use std::ops::Deref;

use crate::PairList;
use crate::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl TryFrom<char> for DotBracket {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(c),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

/// A secondary structure as a vector of dot-bracket symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl Deref for DotBracketVec {
    type Target = [DotBracket];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&PairList> for DotBracketVec {
    fn from(pairs: &PairList) -> Self {
        let mut dbv = vec![DotBracket::Unpaired; pairs.length()];
        for pair in pairs.iter() {
            dbv[pair.i() as usize] = DotBracket::Open;
            dbv[pair.j() as usize] = DotBracket::Close;
        }
        DotBracketVec(dbv)
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .enumerate()
            .map(|(position, c)| DotBracket::try_from(c)
                .map_err(|token| StructureError::InvalidToken { token, position }))
            .collect::<Result<Vec<_>, _>>()
            .map(DotBracketVec)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|&db| char::from(db)).collect();
        write!(f, "{}", s)
    }
}

//! The RNA alphabet.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::SequenceError;

/// Longest sequence we accept: positions must fit into 16-bit indices.
pub const MAX_SEQUENCE_LENGTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base { A, C, G, U }

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// The Watson–Crick partner.
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::U,
            Base::U => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    /// True for A–U and C–G (in either orientation).
    pub fn pairs_with(self, other: Base) -> bool {
        self.complement() == other
    }

    /// G and C form three hydrogen bonds, A and U only two.
    pub fn is_strong(self) -> bool {
        matches!(self, Base::G | Base::C)
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c.to_ascii_uppercase() {
            'A' => Base::A,
            'C' => Base::C,
            'G' => Base::G,
            'U' => Base::U,
            _ => return Err(c),
        })
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// An immutable, validated RNA sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RnaSequence(Vec<Base>);

impl RnaSequence {
    pub fn bases(&self) -> &[Base] {
        &self.0
    }
}

impl Deref for RnaSequence {
    type Target = [Base];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for RnaSequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bases = s.chars()
            .enumerate()
            .map(|(position, c)| Base::try_from(c)
                .map_err(|base| SequenceError::InvalidBase { base, position }))
            .collect::<Result<Vec<_>, _>>()?;

        if bases.len() > MAX_SEQUENCE_LENGTH {
            return Err(SequenceError::TooLong {
                length: bases.len(),
                max: MAX_SEQUENCE_LENGTH,
            });
        }
        Ok(RnaSequence(bases))
    }
}

impl FromStr for RnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RnaSequence::try_from(s)
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|&b| char::from(b)).collect();
        write!(f, "{}", s)
    }
}

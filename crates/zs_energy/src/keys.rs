//! Typed keys into the energy parameter table.
//!
//! Every key has a string form, which is what parameter files use:
//!
//! | key                                   | string form          |
//! |---------------------------------------|----------------------|
//! | `Hairpin(Strong, Exact(5))`           | `hairpinG5`          |
//! | `Bulge(Saturated)`                    | `bulge30+`           |
//! | `Interior(Mixed, Exact(4))`           | `interiorGA4`        |
//! | `Stack([G, C, A, U])`                 | `GCAU`               |
//!
//! A stack key lists the outer pair (5' base, 3' base) followed by the
//! inner pair (5' base, 3' base).

use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::Base;
use crate::EnergyError;
use crate::LENGTH_CEILING;

/// Loop length, saturating at `LENGTH_CEILING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LengthBin {
    Exact(u8),
    Saturated,
}

impl LengthBin {
    pub fn from_len(len: usize) -> Self {
        if len >= LENGTH_CEILING {
            LengthBin::Saturated
        } else {
            LengthBin::Exact(len as u8)
        }
    }

    /// A representative length: the exact value, or the ceiling.
    pub fn length(&self) -> usize {
        match self {
            LengthBin::Exact(l) => *l as usize,
            LengthBin::Saturated => LENGTH_CEILING,
        }
    }

    /// All bins for lengths `from..`, ending with the saturated bin.
    pub fn starting_at(from: usize) -> impl Iterator<Item = LengthBin> {
        (from..LENGTH_CEILING)
            .map(LengthBin::from_len)
            .chain(iter::once(LengthBin::Saturated))
    }

    /// Only the canonical spelling is accepted, so `05` or `+5` are not
    /// aliases of `5`.
    fn parse(s: &str) -> Option<Self> {
        let bin = if s == format!("{LENGTH_CEILING}+") {
            LengthBin::Saturated
        } else {
            match s.parse::<usize>() {
                Ok(l) if l < LENGTH_CEILING => LengthBin::Exact(l as u8),
                _ => return None,
            }
        };
        (bin.to_string() == s).then_some(bin)
    }
}

impl fmt::Display for LengthBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBin::Exact(l) => write!(f, "{l}"),
            LengthBin::Saturated => write!(f, "{LENGTH_CEILING}+"),
        }
    }
}

/// Hairpin category, from the 5' base of the closing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClosingClass {
    /// Closed by A or U (written `A`).
    Weak,
    /// Closed by G or C (written `G`).
    Strong,
}

impl From<Base> for ClosingClass {
    fn from(b: Base) -> Self {
        if b.is_strong() { ClosingClass::Strong } else { ClosingClass::Weak }
    }
}

impl fmt::Display for ClosingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosingClass::Weak => write!(f, "A"),
            ClosingClass::Strong => write!(f, "G"),
        }
    }
}

/// Interior loop category.
///
/// NOTE: the class is derived from the 5' base of the *outer* closing
/// pair together with the 5' base of the *inner* pair. This is an
/// inherited rule without a clear thermodynamic motivation, and it has not
/// been verified against measured parameters. Parameter files are keyed
/// by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairClass {
    /// Both bases G/C (written `GG`).
    Strong,
    /// Both bases A/U (written `AA`).
    Weak,
    /// One of each (written `GA`).
    Mixed,
}

impl PairClass {
    pub const ALL: [PairClass; 3] = [PairClass::Strong, PairClass::Weak, PairClass::Mixed];

    pub fn of(outer: Base, inner: Base) -> Self {
        match (outer.is_strong(), inner.is_strong()) {
            (true, true) => PairClass::Strong,
            (false, false) => PairClass::Weak,
            _ => PairClass::Mixed,
        }
    }
}

impl fmt::Display for PairClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairClass::Strong => write!(f, "GG"),
            PairClass::Weak => write!(f, "AA"),
            PairClass::Mixed => write!(f, "GA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoopKey {
    Hairpin(ClosingClass, LengthBin),
    Bulge(LengthBin),
    Interior(PairClass, LengthBin),
    Stack([Base; 4]),
}

impl LoopKey {
    /// Stack key for an outer pair (5', 3') and an inner pair (5', 3').
    pub fn stack(outer: (Base, Base), inner: (Base, Base)) -> Self {
        LoopKey::Stack([outer.0, outer.1, inner.0, inner.1])
    }

    /// Every key a fold with the given minimum pair distance can ask for.
    pub fn constructible(min_pair_dist: usize) -> Vec<LoopKey> {
        let mut keys = Vec::new();
        for class in [ClosingClass::Weak, ClosingClass::Strong] {
            keys.extend(LengthBin::starting_at(min_pair_dist.saturating_sub(1))
                .map(|bin| LoopKey::Hairpin(class, bin)));
        }
        keys.extend(LengthBin::starting_at(1).map(LoopKey::Bulge));
        for class in PairClass::ALL {
            keys.extend(LengthBin::starting_at(2).map(|bin| LoopKey::Interior(class, bin)));
        }
        for o5 in Base::ALL {
            for i5 in Base::ALL {
                keys.push(LoopKey::stack((o5, o5.complement()), (i5, i5.complement())));
            }
        }
        keys
    }
}

impl fmt::Display for LoopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopKey::Hairpin(class, bin) => write!(f, "hairpin{class}{bin}"),
            LoopKey::Bulge(bin) => write!(f, "bulge{bin}"),
            LoopKey::Interior(class, bin) => write!(f, "interior{class}{bin}"),
            LoopKey::Stack(bases) => bases.iter().try_for_each(|b| write!(f, "{b}")),
        }
    }
}

impl FromStr for LoopKey {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EnergyError::InvalidKey(s.to_string());

        if let Some(rest) = s.strip_prefix("hairpin") {
            let class = match rest.get(..1) {
                Some("A") => ClosingClass::Weak,
                Some("G") => ClosingClass::Strong,
                _ => return Err(invalid()),
            };
            let bin = LengthBin::parse(&rest[1..]).ok_or_else(invalid)?;
            return Ok(LoopKey::Hairpin(class, bin));
        }
        if let Some(rest) = s.strip_prefix("bulge") {
            return LengthBin::parse(rest).map(LoopKey::Bulge).ok_or_else(invalid);
        }
        if let Some(rest) = s.strip_prefix("interior") {
            let class = match rest.get(..2) {
                Some("GG") => PairClass::Strong,
                Some("AA") => PairClass::Weak,
                Some("GA") => PairClass::Mixed,
                _ => return Err(invalid()),
            };
            let bin = LengthBin::parse(&rest[2..]).ok_or_else(invalid)?;
            return Ok(LoopKey::Interior(class, bin));
        }

        let bases = s.chars()
            .map(Base::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match bases.as_slice() {
            &[a, b, c, d] if s.chars().all(|ch| ch.is_ascii_uppercase()) => {
                Ok(LoopKey::Stack([a, b, c, d]))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bins() {
        assert_eq!(LengthBin::from_len(4), LengthBin::Exact(4));
        assert_eq!(LengthBin::from_len(29), LengthBin::Exact(29));
        assert_eq!(LengthBin::from_len(30), LengthBin::Saturated);
        assert_eq!(LengthBin::from_len(412), LengthBin::Saturated);
        assert_eq!(LengthBin::starting_at(28).collect::<Vec<_>>(), vec![
            LengthBin::Exact(28),
            LengthBin::Exact(29),
            LengthBin::Saturated,
        ]);
    }

    #[test]
    fn test_key_strings() {
        use Base::*;
        assert_eq!(LoopKey::Hairpin(ClosingClass::Strong, LengthBin::Exact(5)).to_string(), "hairpinG5");
        assert_eq!(LoopKey::Hairpin(ClosingClass::from(U), LengthBin::Saturated).to_string(), "hairpinA30+");
        assert_eq!(LoopKey::Bulge(LengthBin::Exact(1)).to_string(), "bulge1");
        assert_eq!(LoopKey::Interior(PairClass::of(A, C), LengthBin::Exact(7)).to_string(), "interiorGA7");
        assert_eq!(LoopKey::stack((G, C), (A, U)).to_string(), "GCAU");
    }

    #[test]
    fn test_parse_keys() {
        use Base::*;
        assert_eq!("interiorAA30+".parse::<LoopKey>().unwrap(), LoopKey::Interior(PairClass::Weak, LengthBin::Saturated));
        assert_eq!("CGUA".parse::<LoopKey>().unwrap(), LoopKey::Stack([C, G, U, A]));
        assert_eq!("hairpinA12".parse::<LoopKey>().unwrap(), LoopKey::Hairpin(ClosingClass::Weak, LengthBin::Exact(12)));

        for bad in ["hairpinX4", "bulge30", "bulge", "interiorGC3", "GCA", "gcau", "GCAT", "loop4",
                    "bulge05", "bulge+7", "hairpinG04", "interiorGG030+"] {
            assert!(matches!(bad.parse::<LoopKey>(), Err(EnergyError::InvalidKey(_))), "{bad}");
        }
    }

    #[test]
    fn test_pair_classes() {
        use Base::*;
        assert_eq!(PairClass::of(G, C), PairClass::Strong);
        assert_eq!(PairClass::of(U, A), PairClass::Weak);
        assert_eq!(PairClass::of(A, G), PairClass::Mixed);
        assert_eq!(PairClass::of(C, U), PairClass::Mixed);
    }

    #[test]
    fn test_constructible_keys() {
        let keys = LoopKey::constructible(5);
        // 2×27 hairpin bins (4..30, 30+), 30 bulge bins, 3×29 interior bins, 16 stacks.
        assert_eq!(keys.len(), 2 * 27 + 30 + 3 * 29 + 16);
        assert!(keys.contains(&LoopKey::Hairpin(ClosingClass::Weak, LengthBin::Exact(4))));
        assert!(!keys.contains(&LoopKey::Hairpin(ClosingClass::Weak, LengthBin::Exact(3))));
        assert!(keys.iter().all(|k| match k {
            LoopKey::Stack([a, b, c, d]) => a.pairs_with(*b) && c.pairs_with(*d),
            _ => true,
        }));
    }
}

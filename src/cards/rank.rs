/// A card's face value, 0-indexed within the deck's rank count.
///
/// Rank 0 is canonically the Ace. Depending on deck policy it can anchor
/// the low end of a straight, stand in for the top rank, both, or neither.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Self = Self(0);
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}

/// u64 injection
/// one bit per rank, the building block of a RankSet mask
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        1 << r.0
    }
}

/// card notation for the standard 13 ranks, raw index beyond them
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "A"),
            n @ 1..=8 => write!(f, "{}", n + 1),
            9 => write!(f, "T"),
            10 => write!(f, "J"),
            11 => write!(f, "Q"),
            12 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// A card's suit, 0-indexed within the deck's suit count.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suit(u8);

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s.0
    }
}

/// card notation for the standard 4 suits, raw index beyond them
impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "c"),
            1 => write!(f, "d"),
            2 => write!(f, "h"),
            3 => write!(f, "s"),
            n => write!(f, "{}", n),
        }
    }
}

/// An immutable (rank, suit) pair, equal and hashed by value.
///
/// The derived rank-major ordering carries no game meaning; the deck,
/// not the card, fixes enumeration order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// raw (rank, suit) indices
impl From<(u8, u8)> for Card {
    fn from((rank, suit): (u8, u8)) -> Self {
        Self {
            rank: Rank::from(rank),
            suit: Suit::from(suit),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter, Result};

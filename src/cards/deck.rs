use super::card::Card;
use crate::Error;

/// Deck configuration: rank count, suit count, and the ace-straight
/// policy. The card universe is the Cartesian product of ranks and
/// suits, derived on demand and never stored or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    ranks: u8,
    suits: u8,
    aces_low: bool,
    aces_high: bool,
}

impl Deck {
    /// Fail-fast validated construction. Rank sets are u64 bitmasks,
    /// hence the 64-rank ceiling.
    pub fn new(ranks: u8, suits: u8, aces_low: bool, aces_high: bool) -> Result<Self, Error> {
        if ranks < 2 {
            Err(Error::TooFewRanks(ranks))
        } else if ranks > 64 {
            Err(Error::TooManyRanks(ranks))
        } else if suits < 1 {
            Err(Error::TooFewSuits(suits))
        } else {
            Ok(Self {
                ranks,
                suits,
                aces_low,
                aces_high,
            })
        }
    }

    /// 13 ranks, 4 suits, aces low and high.
    pub fn standard() -> Self {
        Self::new(13, 4, true, true).expect("standard deck configuration")
    }

    pub fn ranks(&self) -> u8 {
        self.ranks
    }
    pub fn suits(&self) -> u8 {
        self.suits
    }
    pub fn aces_low(&self) -> bool {
        self.aces_low
    }
    pub fn aces_high(&self) -> bool {
        self.aces_high
    }

    pub fn len(&self) -> usize {
        self.ranks as usize * self.suits as usize
    }
    pub fn is_empty(&self) -> bool {
        // ranks >= 2 and suits >= 1 hold by construction
        false
    }

    /// The full card universe in suit-major order: for each suit, every
    /// rank. The order itself carries no meaning but must stay stable so
    /// enumeration is reproducible.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        let ranks = self.ranks;
        (0..self.suits).flat_map(move |suit| (0..ranks).map(move |rank| Card::from((rank, suit))))
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{} deck", self.ranks, self.suits)?;
        match (self.aces_low, self.aces_high) {
            (true, true) => write!(f, " (aces low+high)"),
            (true, false) => write!(f, " (aces low)"),
            (false, true) => write!(f, " (aces high)"),
            (false, false) => write!(f, " (no ace straights)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn universe_has_ranks_times_suits_distinct_cards() {
        for (ranks, suits) in [(13, 4), (2, 2), (20, 6)] {
            let deck = Deck::new(ranks, suits, true, true).unwrap();
            let cards = deck.cards().collect::<HashSet<Card>>();
            assert_eq!(cards.len(), deck.len());
            assert_eq!(cards.len(), ranks as usize * suits as usize);
        }
    }

    #[test]
    fn universe_order_is_stable() {
        let deck = Deck::standard();
        let once = deck.cards().collect::<Vec<Card>>();
        let twice = deck.cards().collect::<Vec<Card>>();
        assert_eq!(once, twice);
        assert_eq!(once[0], Card::from((0, 0)));
        assert_eq!(once[13], Card::from((0, 1)));
    }

    #[test]
    fn rejects_degenerate_configurations() {
        assert_eq!(Deck::new(1, 4, true, true), Err(Error::TooFewRanks(1)));
        assert_eq!(Deck::new(13, 0, true, true), Err(Error::TooFewSuits(0)));
        assert_eq!(Deck::new(65, 4, true, true), Err(Error::TooManyRanks(65)));
        assert!(Deck::new(64, 1, false, false).is_ok());
    }
}

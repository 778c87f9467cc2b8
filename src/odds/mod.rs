pub mod tally;
pub use tally::*;

use crate::Error;
use crate::cards::deck::Deck;
use crate::cards::evaluator::Evaluator;
use crate::cards::hands::HandIterator;
use crate::cards::straights::Straights;

/// Exhaustively enumerate every `hand_size`-combination of the deck's
/// universe and tally the labels each hand qualifies for. Pure and
/// deterministic: identical configuration yields identical counts.
///
/// A hand size past the deck size completes immediately with an
/// all-zero table; a hand size of zero is a configuration error.
pub fn enumerate(deck: &Deck, hand_size: usize) -> Result<Tally, Error> {
    if hand_size < 1 {
        return Err(Error::EmptyHand);
    }
    let straights = Straights::from((deck, hand_size));
    let hands = HandIterator::from((deck, hand_size));
    log::info!(
        "enumerating {} x {}-card hands from {} ({} straight patterns)",
        hands.combinations(),
        hand_size,
        deck,
        straights.len()
    );
    let mut tally = Tally::default();
    for hand in hands {
        let labels = Evaluator::from((hand.as_slice(), &straights)).labels();
        tally.observe(labels);
    }
    log::info!("tallied {} hands", tally.total());
    Ok(tally)
}

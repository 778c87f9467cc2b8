use super::card::Card;
use super::category::Category;
use super::rankset::RankSet;
use super::straights::Straights;
use std::collections::BTreeMap;

/// Classifies one hand against a prebuilt straight table.
///
/// Labels are non-exclusive on purpose: a hand lands in at most one of
/// the straight-flush/flush/straight buckets and, independently, in its
/// set-shape bucket. The flush/straight frequencies and the
/// rank-matching frequencies are separate tallies, not a single ranking.
pub struct Evaluator<'a> {
    hand: &'a [Card],
    straights: &'a Straights,
}

impl<'a> From<(&'a [Card], &'a Straights)> for Evaluator<'a> {
    fn from((hand, straights): (&'a [Card], &'a Straights)) -> Self {
        Self { hand, straights }
    }
}

impl Evaluator<'_> {
    /// true iff every card shares the first card's suit.
    /// vacuously true for single-card and empty hands.
    pub fn is_flush(&self) -> bool {
        match self.hand.split_first() {
            None => true,
            Some((first, rest)) => rest.iter().all(|card| card.suit() == first.suit()),
        }
    }

    /// membership test against the precomputed patterns. duplicate
    /// ranks collapse below the hand size and match nothing.
    pub fn is_straight(&self) -> bool {
        self.straights.contains(RankSet::from(self.hand))
    }

    /// ascending sizes of the same-rank groups with more than one
    /// member: [4] four of a kind, [2, 3] full house, [] no pairs.
    pub fn set_shape(&self) -> Vec<usize> {
        let mut groups = BTreeMap::new();
        for card in self.hand {
            *groups.entry(card.rank()).or_insert(0usize) += 1;
        }
        let mut shape = groups
            .into_values()
            .filter(|&size| size > 1)
            .collect::<Vec<usize>>();
        shape.sort_unstable();
        shape
    }

    /// every label this hand tallies under
    pub fn labels(&self) -> Vec<Category> {
        let mut labels = Vec::new();
        match (self.is_flush(), self.is_straight()) {
            (true, true) => labels.push(Category::StraightFlush),
            (true, false) => labels.push(Category::Flush),
            (false, true) => labels.push(Category::Straight),
            (false, false) => {}
        }
        match self.set_shape() {
            shape if shape.is_empty() => {}
            shape => labels.push(Category::from(shape.as_slice())),
        }
        labels
    }
}

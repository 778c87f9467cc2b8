use super::deck::Deck;
use super::rank::Rank;
use super::rankset::RankSet;
use itertools::Itertools;
use std::collections::HashSet;

/// Every rank-set that forms a straight for one (deck, hand size)
/// pairing.
///
/// Built once per configuration and read-only afterward; per-hand
/// classification is a plain membership test. Keyed by hand size, so a
/// different hand size means a fresh build.
pub struct Straights {
    hand_size: usize,
    runs: HashSet<RankSet>,
}

impl From<(&Deck, usize)> for Straights {
    fn from((deck, hand_size): (&Deck, usize)) -> Self {
        let mut runs = HashSet::new();
        let ranks = deck.ranks() as usize;
        // hand sizes past the rank count admit no straight at all
        if (1..=ranks).contains(&hand_size) {
            // an ace cannot anchor a low run unless aces play low
            let start = if deck.aces_low() { 0 } else { 1 };
            for low in start..=(ranks - hand_size) {
                runs.insert(RankSet::run(low as u8, hand_size));
            }
            if deck.aces_high() {
                // wheel at the top: the highest hand_size - 1 ranks with
                // the ace standing in for rank `ranks`
                let mut wheel = RankSet::run((ranks - hand_size + 1) as u8, hand_size - 1);
                wheel.insert(Rank::ACE);
                runs.insert(wheel);
            }
        }
        Self { hand_size, runs }
    }
}

impl Straights {
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }
    pub fn len(&self) -> usize {
        self.runs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
    pub fn contains(&self, ranks: RankSet) -> bool {
        self.runs.contains(&ranks)
    }
    pub fn iter(&self) -> impl Iterator<Item = &RankSet> {
        self.runs.iter()
    }

    /// Every rank-set one card short of completing a straight: the
    /// (hand_size - 1)-subsets of each full pattern. On-request
    /// precomputation for draw odds; plays no part in the frequency
    /// table.
    pub fn one_away(&self) -> HashSet<RankSet> {
        self.runs
            .iter()
            .flat_map(|&run| {
                run.collect::<Vec<Rank>>()
                    .into_iter()
                    .combinations(self.hand_size.saturating_sub(1))
                    .map(RankSet::from_iter)
            })
            .collect()
    }
}

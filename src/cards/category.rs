use itertools::Itertools;

/// A hand category label.
///
/// Flush/straight labels and set-shape labels are tallied independently,
/// so these are bucket names rather than a mutually-exclusive poker
/// ranking. Display strings are the exact report labels; the reserved
/// total label "all hands" is not a Category and can never collide.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    StraightFlush,
    Flush,
    Straight,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
    /// set shapes with no common name pass through verbatim,
    /// e.g. three pair in a 7-card hand
    Sets(Vec<usize>),
}

/// named lookup over the sorted set shape
impl From<&[usize]> for Category {
    fn from(shape: &[usize]) -> Self {
        match shape {
            [2] => Self::OnePair,
            [3] => Self::ThreeOfAKind,
            [4] => Self::FourOfAKind,
            [5] => Self::FiveOfAKind,
            [2, 2] => Self::TwoPair,
            [2, 3] => Self::FullHouse,
            _ => Self::Sets(shape.to_vec()),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::StraightFlush => write!(f, "straight flush"),
            Self::Flush => write!(f, "flush"),
            Self::Straight => write!(f, "straight"),
            Self::OnePair => write!(f, "one pair"),
            Self::TwoPair => write!(f, "two pair"),
            Self::ThreeOfAKind => write!(f, "three of a kind"),
            Self::FullHouse => write!(f, "full house"),
            Self::FourOfAKind => write!(f, "four of a kind"),
            Self::FiveOfAKind => write!(f, "five of a kind"),
            Self::Sets(shape) => write!(f, "[{}]", shape.iter().join(", ")),
        }
    }
}

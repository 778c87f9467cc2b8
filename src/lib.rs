//! Exact hand-category odds for generalized card decks.
//!
//! A deck is the Cartesian product of a configurable number of ranks and
//! suits. Every fixed-size hand is enumerated exactly once and tallied
//! under each category it qualifies for: straight flush, flush, straight,
//! and the rank-matching set shapes (one pair, full house, ...).

pub mod cards;
pub mod odds;

/// Exact hand counts. Enumeration never leaves the integers.
pub type Count = u64;

/// Rejected deck or enumeration configuration.
///
/// Everything else degrades gracefully: a hand size larger than the deck
/// is a zero-combination enumeration, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: at least 2 ranks required, got {0}")]
    TooFewRanks(u8),
    #[error("invalid configuration: at least 1 suit required, got {0}")]
    TooFewSuits(u8),
    #[error("invalid configuration: at most 64 ranks supported, got {0}")]
    TooManyRanks(u8),
    #[error("invalid configuration: hand size must be at least 1")]
    EmptyHand,
}

/// Initialize terminal logging for the report binary.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

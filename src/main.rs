//! Hand-odds report binary.
//!
//! Enumerates every fixed-size hand of the configured deck and prints
//! the exact frequency table, or the same counts as JSON.

use clap::Parser;
use colored::Colorize;
use deckodds::cards::deck::Deck;
use deckodds::cards::hands::HandIterator;
use deckodds::cards::straights::Straights;
use deckodds::odds;

/// Past this many combinations a full enumeration stops being quick;
/// say so before committing to it.
const WARN_COMBINATIONS: deckodds::Count = 1_000_000_000;

#[derive(Parser)]
#[command(name = "deckodds", version, about = "Calculate hand odds of a card deck")]
struct Args {
    /// Number of different ranks
    #[arg(short, long, default_value_t = 13)]
    ranks: u8,
    /// Number of different suits
    #[arg(short, long, default_value_t = 4)]
    suits: u8,
    /// Number of cards per hand
    #[arg(long, default_value_t = 5)]
    hand_size: usize,
    /// Aces no longer anchor low straights
    #[arg(long)]
    no_aces_low: bool,
    /// Aces no longer complete top straights
    #[arg(long)]
    no_aces_high: bool,
    /// Also report how many rank-sets sit one card short of a straight
    #[arg(long)]
    draws: bool,
    /// Emit the counts as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    deckodds::log();
    let args = Args::parse();
    let deck = Deck::new(
        args.ranks,
        args.suits,
        !args.no_aces_low,
        !args.no_aces_high,
    )?;
    let combinations = HandIterator::from((&deck, args.hand_size)).combinations();
    if combinations > WARN_COMBINATIONS {
        log::warn!("{} combinations ahead, this will take a while", combinations);
    }
    if args.draws {
        let straights = Straights::from((&deck, args.hand_size));
        log::info!(
            "{} straight patterns, {} rank-sets one card away",
            straights.len(),
            straights.one_away().len()
        );
    }
    let tally = odds::enumerate(&deck, args.hand_size)?;
    if args.json {
        println!("{}", tally.json());
    } else {
        println!(
            "{}",
            format!("{} · {}-card hands", deck, args.hand_size).bold()
        );
        println!("{}", tally);
    }
    Ok(())
}

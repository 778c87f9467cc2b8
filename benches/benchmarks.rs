criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_straight_patterns,
        labeling_a_hand,
        enumerating_a_small_deck,
}

use deckodds::cards::deck::Deck;
use deckodds::cards::evaluator::Evaluator;
use deckodds::cards::straights::Straights;
use deckodds::odds;
use rand::seq::IteratorRandom;

fn building_straight_patterns(c: &mut criterion::Criterion) {
    c.bench_function("build 5-card straight patterns", |b| {
        let deck = Deck::standard();
        b.iter(|| Straights::from((&deck, 5)))
    });
}

fn labeling_a_hand(c: &mut criterion::Criterion) {
    c.bench_function("label a random 5-card hand", |b| {
        let deck = Deck::standard();
        let straights = Straights::from((&deck, 5));
        let ref mut rng = rand::rng();
        let hand = deck.cards().choose_multiple(rng, 5);
        b.iter(|| Evaluator::from((hand.as_slice(), &straights)).labels())
    });
}

fn enumerating_a_small_deck(c: &mut criterion::Criterion) {
    c.bench_function("enumerate 5-card hands of a 7x4 deck", |b| {
        let deck = Deck::new(7, 4, true, true).unwrap();
        b.iter(|| odds::enumerate(&deck, 5))
    });
}

use crate::random::RandomSource;

pub const FALLBACK_JOKES: [&str; 2] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "Parallel lines have so much in common... it's a shame they'll never meet.",
];

pub const FALLBACK_FACTS: [&str; 2] = [
    "The Eiffel Tower can be 15 cm taller during summer due to thermal expansion.",
    "Bananas are berries, but strawberries aren't.",
];

pub fn pick_joke(rng: &mut impl RandomSource) -> &'static str {
    pick(&FALLBACK_JOKES, rng)
}

pub fn pick_fact(rng: &mut impl RandomSource) -> &'static str {
    pick(&FALLBACK_FACTS, rng)
}

fn pick(options: &[&'static str; 2], rng: &mut impl RandomSource) -> &'static str {
    // Out-of-range values from a misbehaving source still land on a valid entry.
    let idx = rng.between(0, 1) as usize % options.len();
    options[idx]
}

use rand::SeedableRng;
use rand::rngs::SmallRng;

use swarmsong::music::lsystem::{MAX_OUTPUT_SYMBOLS, MelodyExpander};
use swarmsong::music::tables::{CHORDS, TERMINAL_TOKENS, Token, children_of};

#[test]
fn output_never_exceeds_symbol_cap() {
    let expander = MelodyExpander::new();
    for seed in 0..256u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tokens = expander.expand_tokens(&mut rng);
        assert!(!tokens.is_empty());
        assert!(tokens.len() <= MAX_OUTPUT_SYMBOLS);
        for token in tokens {
            assert!(children_of(token).is_none(), "emitted a branch token");
        }
    }
}

#[test]
fn cyclic_rules_fall_back_to_one_terminal() {
    // A rule set that rewrites forever and never emits: the iteration cap
    // must expire and the fallback must supply exactly one terminal symbol.
    fn endless(_token: Token) -> Option<&'static [Token]> {
        Some(&[0, 0])
    }
    let expander = MelodyExpander::new();
    for seed in 0..32u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tokens = expander.expand_tokens_with(&mut rng, endless);
        assert_eq!(tokens.len(), 1, "fallback must emit exactly one symbol");
        assert!(TERMINAL_TOKENS.contains(&tokens[0]));
    }
}

#[test]
fn melody_maps_into_chord_scale() {
    let expander = MelodyExpander::new();
    for (c, chord) in CHORDS.iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(c as u64);
        let melody = expander.expand(chord, &mut rng);
        assert!(!melody.is_empty());
        for note in melody {
            assert!(chord.notes.contains(&note), "note {note} not in chord {}", chord.name);
        }
    }
}

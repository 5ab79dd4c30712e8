use rand::SeedableRng;
use rand::rngs::SmallRng;

use swarmsong::music::markov::ChordSelector;
use swarmsong::music::tables::CHORDS;

#[test]
fn always_two_distinct_notes() {
    for seed in 0..200u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut selector = ChordSelector::new();
        for _ in 0..20 {
            let [a, b] = selector.next_harmony_notes(&mut rng);
            assert_ne!(a, b, "seed {seed} produced duplicate harmony notes");
        }
    }
}

#[test]
fn notes_come_from_chord_or_filler_range() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut selector = ChordSelector::new();
    for _ in 0..200 {
        let notes = selector.next_harmony_notes(&mut rng);
        let chord = &CHORDS[selector.current_chord()];
        for note in notes {
            let from_chord = chord.notes.contains(&note);
            let from_filler = (48..=72).contains(&note);
            assert!(from_chord || from_filler, "note {note} out of range");
        }
    }
}

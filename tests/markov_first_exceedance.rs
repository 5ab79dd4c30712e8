use rand::SeedableRng;
use rand::rngs::SmallRng;

use swarmsong::music::markov::{ChordSelector, first_exceedance};
use swarmsong::music::tables::{NUM_CHORDS, TRANSITIONS};

#[test]
fn pins_first_row_of_transition_matrix() {
    let row = TRANSITIONS[0];
    // Cumulative sums: 0.00 0.32 0.51 0.56 0.66 0.70 0.96 1.00
    assert_eq!(first_exceedance(&row, 0.0), Some(1));
    assert_eq!(first_exceedance(&row, 0.3), Some(1));
    assert_eq!(first_exceedance(&row, 0.32), Some(1), "tie lands on the reaching column");
    assert_eq!(first_exceedance(&row, 0.33), Some(2));
    assert_eq!(first_exceedance(&row, 0.95), Some(6));
    assert_eq!(first_exceedance(&row, 0.99), Some(7));
}

#[test]
fn zero_probability_columns_are_never_selected() {
    for row in &TRANSITIONS {
        for r in [0.0f32, 0.1, 0.25, 0.5, 0.75, 0.999] {
            if let Some(idx) = first_exceedance(row, r) {
                assert!(row[idx] > 0.0, "selected a zero-probability column");
            }
        }
    }
}

#[test]
fn underflowing_row_returns_none() {
    let row = [0.1f32, 0.2, 0.3];
    assert_eq!(first_exceedance(&row, 0.9), None);
    assert_eq!(first_exceedance(&[], 0.0), None);
}

#[test]
fn chain_only_follows_nonzero_transitions() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let mut selector = ChordSelector::new();
    let mut prev = selector.current_chord();
    for _ in 0..500 {
        let next = selector.pick_next_chord(&mut rng);
        assert!(next < NUM_CHORDS);
        assert!(
            TRANSITIONS[prev][next] > 0.0,
            "took a zero-probability edge {prev} -> {next}"
        );
        prev = next;
    }
}

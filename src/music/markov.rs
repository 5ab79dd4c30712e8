use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::Midi;
use super::tables::{CHORDS, TRANSITIONS};

/// Filler notes drawn when a chord cannot supply two distinct pitches.
const FILLER_LO: Midi = 48;
const FILLER_HI: Midi = 72;

/// Inverse-CDF walk over a discrete distribution row: returns the first
/// index whose cumulative sum reaches `r`, or `None` when floating rounding
/// exhausts the row without reaching it. Zero-probability columns are never
/// selectable, so a draw of exactly 0 lands on the first positive entry.
pub fn first_exceedance(row: &[f32], r: f32) -> Option<usize> {
    let mut sum = 0.0f32;
    for (i, &p) in row.iter().enumerate() {
        sum += p;
        if p > 0.0 && r <= sum {
            return Some(i);
        }
    }
    None
}

/// Markov chord chooser over the fixed transition matrix.
pub struct ChordSelector {
    current: usize,
}

impl Default for ChordSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordSelector {
    /// Starts on chord "i".
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current_chord(&self) -> usize {
        self.current
    }

    pub fn current_chord_name(&self) -> &'static str {
        CHORDS[self.current].name
    }

    /// Advance the chain one step. On the no-exceedance fallback the current
    /// chord is kept unchanged; that is observable behavior, not a defect.
    pub fn pick_next_chord<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let r: f32 = rng.random_range(0.0..1.0);
        let next = first_exceedance(&TRANSITIONS[self.current], r).unwrap_or(self.current);
        self.current = next;
        next
    }

    /// Pick the next chord and derive exactly two distinct notes from it:
    /// the chord's note list shuffled, deduplicated by MIDI value, topped up
    /// with random fillers when the chord is too degenerate.
    pub fn next_harmony_notes<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [Midi; 2] {
        let chord = &CHORDS[self.pick_next_chord(rng)];
        let mut pool = chord.notes;
        pool.shuffle(rng);

        let mut selected: Vec<Midi> = Vec::with_capacity(2);
        for note in pool {
            if !selected.contains(&note) {
                selected.push(note);
            }
            if selected.len() == 2 {
                break;
            }
        }
        while selected.len() < 2 {
            let filler = rng.random_range(FILLER_LO..=FILLER_HI);
            if !selected.contains(&filler) {
                selected.push(filler);
            }
        }

        debug!(chord = chord.name, notes = ?selected, "harmony notes");
        [selected[0], selected[1]]
    }
}

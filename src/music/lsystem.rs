use std::collections::VecDeque;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use super::Midi;
use super::tables::{Chord, ROOT_TOKEN, TERMINAL_TOKENS, Token, children_of};

/// Hard cap on emitted symbols per expansion.
pub const MAX_OUTPUT_SYMBOLS: usize = 10;
/// Hard cap on rewrite iterations, so cyclic rule sets still terminate.
pub const MAX_REWRITE_STEPS: usize = 20;

/// Breadth-first L-system expander over the static rewrite-rule table.
#[derive(Debug, Default)]
pub struct MelodyExpander;

impl MelodyExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand the root token into terminal symbols using the static rule
    /// table. Branch tokens shuffle their children and push them to the back
    /// of the pending queue; terminals are emitted in pop order.
    pub fn expand_tokens<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Token> {
        self.expand_tokens_with(rng, children_of)
    }

    /// Expansion over an arbitrary rule lookup, so pathological rule sets
    /// (cyclic, empty) can be exercised against the same caps and fallback.
    pub fn expand_tokens_with<R, F>(&self, rng: &mut R, rules: F) -> Vec<Token>
    where
        R: Rng + ?Sized,
        F: Fn(Token) -> Option<&'static [Token]>,
    {
        let mut pending: VecDeque<Token> = VecDeque::new();
        pending.push_back(ROOT_TOKEN);

        let mut out: Vec<Token> = Vec::new();
        let mut steps = 0usize;
        while out.len() < MAX_OUTPUT_SYMBOLS && steps < MAX_REWRITE_STEPS {
            let Some(token) = pending.pop_front() else {
                break;
            };
            steps += 1;
            match rules(token) {
                Some(children) => {
                    let mut shuffled = children.to_vec();
                    shuffled.shuffle(rng);
                    pending.extend(shuffled);
                }
                None => out.push(token),
            }
        }

        if out.is_empty() {
            if let Some(&fallback) = TERMINAL_TOKENS.choose(rng) {
                out.push(fallback);
            }
        }
        out
    }

    /// Expand for a chord and map each symbol into the chord's note list
    /// (symbol modulo scale length, tolerating symbol IDs past the scale).
    pub fn expand<R: Rng + ?Sized>(&self, chord: &Chord, rng: &mut R) -> Vec<Midi> {
        let scale = &chord.notes[..];
        if scale.is_empty() {
            return Vec::new();
        }
        let tokens = self.expand_tokens(rng);
        let melody: Vec<Midi> = tokens.iter().map(|&t| scale[t % scale.len()]).collect();
        debug!(chord = chord.name, len = melody.len(), "melody expanded");
        melody
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn expansion_respects_caps() {
        let expander = MelodyExpander::new();
        for seed in 0..64u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let tokens = expander.expand_tokens(&mut rng);
            assert!(!tokens.is_empty());
            assert!(tokens.len() <= MAX_OUTPUT_SYMBOLS);
        }
    }

    #[test]
    fn emitted_tokens_are_terminal() {
        let expander = MelodyExpander::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for token in expander.expand_tokens(&mut rng) {
            assert!(children_of(token).is_none(), "token {token} is a branch");
        }
    }

    #[test]
    fn melody_notes_come_from_chord_scale() {
        let expander = MelodyExpander::new();
        let chord = crate::music::tables::CHORDS[0];
        let mut rng = SmallRng::seed_from_u64(11);
        for note in expander.expand(&chord, &mut rng) {
            assert!(chord.notes.contains(&note));
        }
    }
}

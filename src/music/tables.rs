//! Static harmony data: the chord dictionary, the Markov transition matrix
//! and the L-system rewrite rules. All tables are fixed at compile time.

use super::Midi;

pub const NUM_CHORDS: usize = 8;
pub const NOTES_PER_CHORD: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct Chord {
    pub name: &'static str,
    /// Scale-degree notes across two octaves.
    pub notes: [Midi; NOTES_PER_CHORD],
}

pub const CHORDS: [Chord; NUM_CHORDS] = [
    Chord { name: "i",   notes: [60, 64, 67, 48, 52, 55] },
    Chord { name: "ii",  notes: [62, 66, 69, 50, 54, 57] },
    Chord { name: "iii", notes: [64, 67, 71, 52, 55, 59] },
    Chord { name: "iv",  notes: [66, 69, 72, 54, 57, 60] },
    Chord { name: "v",   notes: [67, 71, 62, 55, 59, 50] },
    Chord { name: "v64", notes: [62, 67, 71, 50, 55, 59] },
    Chord { name: "vi",  notes: [69, 72, 76, 57, 60, 64] },
    Chord { name: "vii", notes: [71, 74, 69, 59, 62, 57] },
];

/// Row-stochastic "next chord given current chord" probabilities.
/// Rows sum to 1 up to floating representation.
pub const TRANSITIONS: [[f32; NUM_CHORDS]; NUM_CHORDS] = [
    [0.00, 0.32, 0.19, 0.05, 0.10, 0.04, 0.26, 0.04],
    [0.25, 0.00, 0.00, 0.00, 0.45, 0.20, 0.00, 0.10],
    [0.00, 0.40, 0.00, 0.00, 0.00, 0.00, 0.60, 0.00],
    [0.15, 0.10, 0.00, 0.00, 0.35, 0.25, 0.00, 0.15],
    [0.70, 0.00, 0.00, 0.00, 0.00, 0.00, 0.30, 0.00],
    [0.10, 0.00, 0.00, 0.00, 0.90, 0.00, 0.00, 0.00],
    [0.00, 0.50, 0.00, 0.00, 0.50, 0.00, 0.00, 0.00],
    [0.50, 0.00, 0.00, 0.00, 0.20, 0.30, 0.00, 0.00],
];

/// Symbolic token fed through the rewrite rules. Terminal tokens index into
/// the current chord's note list modulo its length.
pub type Token = usize;

pub const ROOT_TOKEN: Token = 0;

/// Branch tokens and their child expansions. Tokens absent from this table
/// are terminal. The table may recurse; expansion is bounded by caps in the
/// expander, not by the rule shape.
pub const REWRITE_RULES: &[(Token, &[Token])] = &[
    (0, &[1, 2, 5]),
    (1, &[4, 3, 6]),
    (2, &[7, 1]),
    (3, &[8, 9]),
];

pub const TERMINAL_TOKENS: &[Token] = &[4, 5, 6, 7, 8, 9];

/// Child list for a branch token, or `None` when the token is terminal.
pub fn children_of(token: Token) -> Option<&'static [Token]> {
    REWRITE_RULES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, children)| *children)
        .filter(|children| !children.is_empty())
}

use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::lsystem::MelodyExpander;
use super::markov::ChordSelector;
use super::tables::CHORDS;
use super::{Midi, midi_to_hz};
use crate::voice::{VoiceParam, VoicePool};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HarmonyParams {
    /// Seconds between chord changes.
    #[serde(default = "HarmonyParams::default_trigger_interval")]
    pub trigger_interval: f32,
    /// Seconds each melody note holds before the next one.
    #[serde(default = "HarmonyParams::default_melody_note_duration")]
    pub melody_note_duration: f32,
}

impl HarmonyParams {
    pub const TRIGGER_INTERVAL_RANGE: (f32, f32) = (0.25, 30.0);
    pub const MELODY_NOTE_DURATION_RANGE: (f32, f32) = (0.05, 5.0);

    fn default_trigger_interval() -> f32 {
        2.0
    }
    fn default_melody_note_duration() -> f32 {
        0.25
    }

    /// Clamp every field into its documented range. Out-of-range live writes
    /// are corrected here rather than faulting.
    pub fn sanitize(&mut self) {
        let (lo, hi) = Self::TRIGGER_INTERVAL_RANGE;
        self.trigger_interval = self.trigger_interval.clamp(lo, hi);
        let (lo, hi) = Self::MELODY_NOTE_DURATION_RANGE;
        self.melody_note_duration = self.melody_note_duration.clamp(lo, hi);
    }
}

impl Default for HarmonyParams {
    fn default() -> Self {
        Self {
            trigger_interval: Self::default_trigger_interval(),
            melody_note_duration: Self::default_melody_note_duration(),
        }
    }
}

/// Two independently clocked timers over one chord selector and one melody
/// expander. The harmony timer replaces the melody sequence wholesale and
/// resets playback; the melody timer steps through it cyclically.
pub struct HarmonySequencer {
    selector: ChordSelector,
    expander: MelodyExpander,
    pub params: HarmonyParams,
    harmony_elapsed: f32,
    melody_elapsed: f32,
    held: Option<[Midi; 2]>,
    melody: Vec<Midi>,
    melody_pos: usize,
    sounding: Option<Midi>,
    rng: SmallRng,
}

impl HarmonySequencer {
    pub fn new(params: HarmonyParams, seed: u64) -> Self {
        let mut params = params;
        params.sanitize();
        Self {
            selector: ChordSelector::new(),
            expander: MelodyExpander::new(),
            params,
            harmony_elapsed: 0.0,
            melody_elapsed: 0.0,
            held: None,
            melody: Vec::new(),
            melody_pos: 0,
            sounding: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn current_chord_name(&self) -> &'static str {
        self.selector.current_chord_name()
    }

    pub fn held_notes(&self) -> Option<[Midi; 2]> {
        self.held
    }

    pub fn melody(&self) -> &[Midi] {
        &self.melody
    }

    pub fn melody_pos(&self) -> usize {
        self.melody_pos
    }

    pub fn sounding_melody_note(&self) -> Option<Midi> {
        self.sounding
    }

    /// Advance both timers by `dt` seconds. The harmony timer is serviced
    /// first so a same-tick melody step reads the fresh sequence.
    pub fn tick<V: VoicePool>(&mut self, dt: f32, voices: &mut V) {
        let dt = dt.max(0.0);
        self.params.sanitize();

        self.harmony_elapsed += dt;
        if self.harmony_elapsed >= self.params.trigger_interval {
            self.harmony_elapsed = 0.0;
            self.fire_harmony(voices);
        }

        self.melody_elapsed += dt;
        if self.melody_elapsed >= self.params.melody_note_duration {
            self.melody_elapsed = 0.0;
            self.fire_melody(voices);
        }
    }

    fn fire_harmony<V: VoicePool>(&mut self, voices: &mut V) {
        if let Some(held) = self.held.take() {
            for note in held {
                voices.note_off(note);
            }
        }

        let notes = self.selector.next_harmony_notes(&mut self.rng);
        for &note in &notes {
            voices.set_param(VoiceParam::Frequency, midi_to_hz(note));
            voices.set_param(VoiceParam::Amplitude, self.rng.random_range(0.1..0.6));
            voices.set_param(VoiceParam::AttackTime, self.rng.random_range(0.01..1.0));
            voices.set_param(VoiceParam::ReleaseTime, self.rng.random_range(0.2..2.0));
            voices.set_param(VoiceParam::Sustain, self.rng.random_range(0.4..1.0));
            voices.set_param(VoiceParam::Pan, self.rng.random_range(-1.0..1.0));
            voices.note_on(note);
        }
        self.held = Some(notes);

        let chord = &CHORDS[self.selector.current_chord()];
        self.melody = self.expander.expand(chord, &mut self.rng);
        self.melody_pos = 0;
        info!(chord = chord.name, notes = ?notes, melody_len = self.melody.len(), "chord change");
    }

    fn fire_melody<V: VoicePool>(&mut self, voices: &mut V) {
        if let Some(prev) = self.sounding.take() {
            voices.note_off(prev);
        }
        if self.melody.is_empty() {
            return;
        }
        let note = self.melody[self.melody_pos % self.melody.len()];
        voices.set_param(VoiceParam::Frequency, midi_to_hz(note));
        voices.note_on(note);
        self.sounding = Some(note);
        self.melody_pos = (self.melody_pos + 1) % self.melody.len();
    }
}

pub mod lsystem;
pub mod markov;
pub mod sequencer;
pub mod tables;

/// Integer MIDI pitch identifier.
pub type Midi = u8;

/// Reference pitch for A4. Tuned to 432 Hz rather than the usual 440 Hz.
pub const TUNING_A4_HZ: f32 = 432.0;

/// Equal-tempered MIDI-to-frequency conversion against [`TUNING_A4_HZ`].
pub fn midi_to_hz(note: Midi) -> f32 {
    2.0f32.powf((note as f32 - 69.0) / 12.0) * TUNING_A4_HZ
}

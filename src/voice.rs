//! Capability interface for the external polyphonic voice host. The core
//! never synthesizes samples; it configures the next voice to be triggered
//! and turns notes on and off by MIDI id.

use tracing::debug;

use crate::music::Midi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceParam {
    Frequency,
    Amplitude,
    AttackTime,
    ReleaseTime,
    Sustain,
    Pan,
}

impl VoiceParam {
    pub fn name(&self) -> &'static str {
        match self {
            VoiceParam::Frequency => "frequency",
            VoiceParam::Amplitude => "amplitude",
            VoiceParam::AttackTime => "attackTime",
            VoiceParam::ReleaseTime => "releaseTime",
            VoiceParam::Sustain => "sustain",
            VoiceParam::Pan => "pan",
        }
    }
}

/// Externally supplied voice pool. Parameter writes configure the voice that
/// the next `note_on` will trigger.
pub trait VoicePool {
    fn set_param(&mut self, param: VoiceParam, value: f32);
    fn note_on(&mut self, note: Midi);
    fn note_off(&mut self, note: Midi);
}

/// Voice pool that only logs, for headless runs.
#[derive(Debug, Default)]
pub struct TraceVoices;

impl VoicePool for TraceVoices {
    fn set_param(&mut self, param: VoiceParam, value: f32) {
        debug!(param = param.name(), value, "voice param");
    }

    fn note_on(&mut self, note: Midi) {
        debug!(note, "note on");
    }

    fn note_off(&mut self, note: Midi) {
        debug!(note, "note off");
    }
}

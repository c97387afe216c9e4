use practice_core::model::Language;

/// Speaking rate requested from text-to-speech backends.
pub const SPEECH_RATE: f32 = 0.95;

/// Audio playback collaborator.
///
/// Fire-and-forget: implementations swallow their own failures and the
/// engine never waits on or inspects the result.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str, lang: Language);
}

/// Speaker that does nothing. Used when audio is unavailable or disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str, _lang: Language) {}
}

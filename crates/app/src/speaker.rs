use std::process::{Command, Stdio};

use practice_core::model::Language;
use services::Speaker;
use services::speech::SPEECH_RATE;

/// espeak-ng's default rate in words per minute.
const ESPEAK_BASE_WPM: f32 = 175.0;

/// Speaks through an `espeak-ng` child process. Missing binaries and
/// playback errors are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandSpeaker;

impl Speaker for CommandSpeaker {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn speak(&self, text: &str, lang: Language) {
        let wpm = (ESPEAK_BASE_WPM * SPEECH_RATE).round() as u32;
        let spawned = Command::new("espeak-ng")
            .arg("-v")
            .arg(lang.speech_tag())
            .arg("-s")
            .arg(wpm.to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(err) => tracing::debug!(error = %err, "speech unavailable"),
        }
    }
}

//! Voice announcements for navigation alerts.

use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// A text-to-speech backend.
pub trait VoiceAnnouncer: Send + Sync {
    fn is_available(&self) -> bool;

    fn speak(&self, utterance: &Utterance);
}

/// Speak `text` with the best available capability, or log it.
pub fn announce(announcer: &dyn VoiceAnnouncer, text: &str) {
    if announcer.is_available() {
        announcer.speak(&Utterance::new(text));
    } else {
        info!("Voice alert: {}", text);
    }
}

/// Fallback announcer for hosts without speech synthesis.
#[derive(Debug, Default)]
pub struct LogAnnouncer;

impl VoiceAnnouncer for LogAnnouncer {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, utterance: &Utterance) {
        info!("Voice alert: {}", utterance.text);
    }
}

/// Keeps every utterance instead of speaking it. Useful for tests and for
/// hosts that forward announcements elsewhere.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    spoken: Mutex<Vec<Utterance>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl VoiceAnnouncer for RecordingAnnouncer {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance) {
        self.spoken
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(utterance.clone());
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "Fritz-PlayAI";

const VOICE_LANGUAGE: &str = "en-US";
const VOICE_GENDER: &str = "neutral";

/// Voices offered by the `playai-tts` model.
pub const SUPPORTED_VOICES: [&str; 20] = [
    "Arista-PlayAI",
    "Atlas-PlayAI",
    "Basil-PlayAI",
    "Briggs-PlayAI",
    "Calum-PlayAI",
    "Celeste-PlayAI",
    "Cheyenne-PlayAI",
    "Chip-PlayAI",
    "Cillian-PlayAI",
    "Deedee-PlayAI",
    "Fritz-PlayAI",
    "Gail-PlayAI",
    "Indigo-PlayAI",
    "Mamaw-PlayAI",
    "Mason-PlayAI",
    "Mikail-PlayAI",
    "Mitch-PlayAI",
    "Quinn-PlayAI",
    "Thunder-PlayAI",
    "Aaliyah-PlayAI",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
    pub gender: String,
}

pub fn is_supported(voice_id: &str) -> bool {
    SUPPORTED_VOICES.contains(&voice_id)
}

pub fn catalog() -> Vec<VoiceInfo> {
    SUPPORTED_VOICES
        .iter()
        .map(|id| VoiceInfo {
            id: id.to_string(),
            name: id.to_string(),
            language: VOICE_LANGUAGE.to_string(),
            gender: VOICE_GENDER.to_string(),
        })
        .collect()
}

/// Output encodings the provider is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
}

impl AudioFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "wav" => Some(AudioFormat::Wav),
            "mp3" => Some(AudioFormat::Mp3),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::parse(ext)
    }

    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }
}

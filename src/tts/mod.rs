pub mod groq;
pub mod provider;
pub mod registry;
pub mod voice;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppError;

pub use groq::GroqClient;
pub use provider::SpeechProvider;
pub use registry::TaskRegistry;
pub use voice::{AudioFormat, VoiceInfo};

pub const MAX_TEXT_CHARS: usize = 10_000;

/// A validated synthesis job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub format: AudioFormat,
}

impl SynthesisRequest {
    pub fn validate(
        text: Option<&str>,
        voice: Option<&str>,
        format: Option<&str>,
    ) -> Result<Self, AppError> {
        let text = text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(AppError::Validation("Missing required 'text' field.".into()));
        }

        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::Validation(format!(
                "Text too long (max {} chars)",
                MAX_TEXT_CHARS
            )));
        }

        let voice = voice.unwrap_or(voice::DEFAULT_VOICE);
        if !voice::is_supported(voice) {
            return Err(AppError::UnsupportedVoice(voice.to_string()));
        }

        let format = match format {
            None => AudioFormat::default(),
            Some(f) => {
                AudioFormat::parse(f).ok_or_else(|| AppError::UnsupportedFormat(f.to_string()))?
            }
        };

        Ok(Self {
            text: text.to_string(),
            voice: voice.to_string(),
            format,
        })
    }
}

/// Audio located for a finished task.
#[derive(Debug)]
pub struct StoredAudio {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

pub struct TtsService {
    provider: Arc<dyn SpeechProvider>,
    output_dir: PathBuf,
    registry: TaskRegistry,
}

impl TtsService {
    /// Creates the service, making sure the output directory exists.
    pub fn new(provider: Arc<dyn SpeechProvider>, output_dir: PathBuf) -> Result<Self, AppError> {
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            provider,
            output_dir,
            registry: TaskRegistry::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Runs one synthesis job and returns its task id.
    pub async fn submit(&self, request: &SynthesisRequest) -> Result<String, AppError> {
        let task_id = Uuid::new_v4().simple().to_string();

        let audio = self.provider.synthesize(request).await?;

        let path = self
            .output_dir
            .join(format!("{}.{}", task_id, request.format.extension()));
        write_atomically(&path, &audio).await?;

        self.registry.insert(task_id.clone(), path);

        tracing::info!(
            task_id = %task_id,
            voice = %request.voice,
            bytes = audio.len(),
            "Synthesis complete"
        );

        Ok(task_id)
    }

    /// Returns the audio for a task, or `None` while it is unknown or its file is missing.
    pub async fn fetch(&self, task_id: &str) -> Result<Option<StoredAudio>, AppError> {
        let Some(path) = self.registry.get(task_id) else {
            tracing::debug!(task_id, "Unknown task");
            return Ok(None);
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(task_id, "Audio file missing: {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let content_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(AudioFormat::from_extension)
            .unwrap_or_default()
            .content_type();

        Ok(Some(StoredAudio {
            bytes,
            content_type,
        }))
    }

    pub fn list_voices(&self) -> Vec<VoiceInfo> {
        voice::catalog()
    }
}

/// Writes to a `.part` sibling and renames it into place.
async fn write_atomically(path: &Path, data: &[u8]) -> Result<(), AppError> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let written = async {
        tokio::fs::write(&partial, data).await?;
        tokio::fs::rename(&partial, path).await
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::provider::{ProviderError, SpeechProvider};
    use super::SynthesisRequest;

    /// Provider that echoes the request into a small WAV file.
    #[derive(Default)]
    pub struct FakeProvider {
        pub calls: AtomicUsize,
        pub fail_with: Option<fn() -> ProviderError>,
    }

    impl FakeProvider {
        pub fn failing(make: fn() -> ProviderError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: Some(make),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    pub fn wav_for(text: &str) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 24_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut buffer = Vec::new();
        {
            let mut writer =
                hound::WavWriter::new(std::io::Cursor::new(&mut buffer), spec).unwrap();
            for byte in text.bytes() {
                writer.write_sample(i16::from(byte) * 64).unwrap();
            }
            writer.finalize().unwrap();
        }
        buffer
    }

    #[async_trait]
    impl SpeechProvider for FakeProvider {
        async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(wav_for(&format!("{}|{}", request.voice, request.text))),
            }
        }
    }
}

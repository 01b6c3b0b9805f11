use std::path::PathBuf;

use crate::pipeline::transcribe_error::TranscribeError;
use crate::recognition::domain::decoding_config::DecodingConfig;
use crate::script::domain::target_script::TargetScript;

/// Everything one run needs to know, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub input: PathBuf,
    pub model_size: String,
    pub output: PathBuf,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub script: TargetScript,
}

impl TranscriptionRequest {
    pub fn decoding_config(&self) -> DecodingConfig {
        DecodingConfig::tuned(self.language.as_deref(), self.prompt.as_deref())
    }

    /// Pre-flight check run before any model or engine work.
    pub fn check_input(&self) -> Result<(), TranscribeError> {
        if self.input.exists() {
            Ok(())
        } else {
            Err(TranscribeError::InputNotFound(self.input.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_config_carries_language_and_prompt() {
        let request = TranscriptionRequest {
            input: PathBuf::from("talk.mp4"),
            model_size: "small".to_string(),
            output: PathBuf::from("talk.json"),
            language: Some("ur".to_string()),
            prompt: Some("Interview".to_string()),
            script: TargetScript::Hindi,
        };
        let config = request.decoding_config();
        assert_eq!(config.language.as_deref(), Some("ur"));
        assert_eq!(config.initial_prompt.as_deref(), Some("Interview"));
        assert_eq!(config.beam_width, 5);
    }

    #[test]
    fn test_check_input() {
        let tmp = tempfile::TempDir::new().unwrap();
        let present = tmp.path().join("clip.wav");
        std::fs::write(&present, b"RIFF").unwrap();
        let mut request = TranscriptionRequest {
            input: present,
            model_size: "tiny".to_string(),
            output: tmp.path().join("clip.json"),
            language: None,
            prompt: None,
            script: TargetScript::Auto,
        };
        assert!(request.check_input().is_ok());

        request.input = tmp.path().join("gone.wav");
        let err = request.check_input().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("File not found: {}", request.input.display())
        );
    }
}

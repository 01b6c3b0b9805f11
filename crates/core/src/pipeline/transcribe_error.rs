use std::path::PathBuf;

use thiserror::Error;

/// Fatal outcomes of a run. Each displays as the single message reported to
/// the calling process.
#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// Model load or decode failure, reduced to its message text.
    #[error("{0}")]
    Engine(String),
    #[error("{0}")]
    Output(String),
}

impl TranscribeError {
    pub fn engine(err: Box<dyn std::error::Error>) -> Self {
        TranscribeError::Engine(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = TranscribeError::InputNotFound(PathBuf::from("/data/missing.wav"));
        assert_eq!(err.to_string(), "File not found: /data/missing.wav");
    }

    #[test]
    fn test_engine_error_keeps_message_only() {
        let err = TranscribeError::engine("Invalid data found when processing input".into());
        assert_eq!(err.to_string(), "Invalid data found when processing input");
    }
}

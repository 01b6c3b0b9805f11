use std::path::Path;

use super::transcript_result::TranscriptResult;

/// Domain interface for persisting a finished transcript.
pub trait TranscriptWriter {
    fn write(&self, path: &Path, result: &TranscriptResult)
        -> Result<(), Box<dyn std::error::Error>>;
}

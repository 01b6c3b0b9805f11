use std::io::{BufWriter, Write};
use std::path::Path;

use crate::shared::atomic_file::AtomicFile;
use crate::transcript::domain::transcript_result::TranscriptResult;
use crate::transcript::domain::transcript_writer::TranscriptWriter;

/// Writes the transcript as pretty-printed UTF-8 JSON with a two-space indent.
///
/// Non-ASCII text is written literally. The file appears at its destination
/// only once it is complete.
#[derive(Debug, Default)]
pub struct JsonTranscriptWriter;

impl JsonTranscriptWriter {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptWriter for JsonTranscriptWriter {
    fn write(
        &self,
        path: &Path,
        result: &TranscriptResult,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let file = AtomicFile::create(path)
            .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, result)?;
        writer.flush()?;

        let file = writer
            .into_inner()
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e.error()))?;
        file.commit()
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        Ok(())
    }
}

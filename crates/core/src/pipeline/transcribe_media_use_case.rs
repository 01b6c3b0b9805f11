use std::path::PathBuf;

use crate::hardware::domain::hardware_config::HostCapabilities;
use crate::hardware::domain::hardware_selector::HardwareSelector;
use crate::pipeline::progress_reporter::{progress_percent, ProgressReporter};
use crate::pipeline::transcribe_error::TranscribeError;
use crate::pipeline::transcription_request::TranscriptionRequest;
use crate::recognition::domain::speech_recognizer::RecognizerLoader;
use crate::script::domain::script_normalizer::ScriptNormalizer;
use crate::transcript::domain::transcript_result::TranscriptResult;
use crate::transcript::domain::transcript_writer::TranscriptWriter;

/// Runs one request end to end: hardware selection, engine load and decode,
/// per-segment script normalization and progress, then the transcript write.
pub struct TranscribeMediaUseCase {
    loader: Box<dyn RecognizerLoader>,
    normalizer: ScriptNormalizer,
    writer: Box<dyn TranscriptWriter>,
    reporter: Box<dyn ProgressReporter>,
}

impl TranscribeMediaUseCase {
    pub fn new(
        loader: Box<dyn RecognizerLoader>,
        normalizer: ScriptNormalizer,
        writer: Box<dyn TranscriptWriter>,
        reporter: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            loader,
            normalizer,
            writer,
            reporter,
        }
    }

    /// Returns the path of the written transcript.
    pub fn execute(
        &mut self,
        request: &TranscriptionRequest,
        host: &HostCapabilities,
    ) -> Result<PathBuf, TranscribeError> {
        // 1. Pre-flight: nothing is loaded or written for a missing input
        request.check_input()?;

        // 2. Hardware and engine
        let hardware = HardwareSelector::select(host, &request.model_size);
        let mut recognizer = self
            .loader
            .load(&request.model_size, &hardware)
            .map_err(TranscribeError::engine)?;

        // 3. Decode, consuming segments as the engine produces them
        self.reporter
            .info(&format!("Transcribing: {}", request.input.display()));
        let (info, segments) = recognizer
            .transcribe(&request.input, request.decoding_config())
            .map_err(TranscribeError::engine)?;

        let mut result = TranscriptResult::new(&info);
        for segment in segments {
            let mut segment = segment.map_err(TranscribeError::engine)?;
            self.normalizer.normalize(&mut segment);
            self.reporter
                .progress(progress_percent(segment.end, info.duration));
            result.push(segment);
        }
        // The last segment usually ends short of the media duration.
        self.reporter.progress(100);

        // 4. Persist
        self.writer
            .write(&request.output, &result)
            .map_err(|e| TranscribeError::Output(e.to_string()))?;
        self.reporter.info(&format!(
            "Wrote {} segments to {}",
            result.segments.len(),
            request.output.display()
        ));

        Ok(request.output.clone())
    }
}

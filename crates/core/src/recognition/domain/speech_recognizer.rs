use std::path::Path;

use super::decoding_config::DecodingConfig;
use super::recognition_info::RecognitionInfo;
use super::segment::Segment;
use crate::hardware::domain::hardware_config::HardwareConfig;

/// Forward-only stream of segments, consumed once. Each pull may block while
/// the engine decodes more audio.
pub type SegmentStream = Box<dyn Iterator<Item = Result<Segment, Box<dyn std::error::Error>>>>;

/// A loaded speech-to-text engine.
pub trait SpeechRecognizer {
    /// Start recognizing `path`. Language metadata is available immediately;
    /// segments arrive lazily through the returned stream.
    fn transcribe(
        &mut self,
        path: &Path,
        config: DecodingConfig,
    ) -> Result<(RecognitionInfo, SegmentStream), Box<dyn std::error::Error>>;
}

/// Domain interface for loading an engine for a model size and hardware setup.
pub trait RecognizerLoader {
    fn load(
        &self,
        model_size: &str,
        hardware: &HardwareConfig,
    ) -> Result<Box<dyn SpeechRecognizer>, Box<dyn std::error::Error>>;
}

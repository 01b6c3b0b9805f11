use std::path::Path;

use super::decoded_audio::DecodedAudio;

/// Domain interface for decoding the audio track of a media file.
pub trait AudioReader: Send {
    /// Decode the best audio stream to mono PCM at `target_sample_rate`.
    /// A file without any audio stream is an error.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<DecodedAudio, Box<dyn std::error::Error>>;
}

/// Run-level metadata reported by the engine before any segment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionInfo {
    pub language: String,
    /// Language-detection confidence in [0, 1].
    pub language_probability: f64,
    /// Total media duration in seconds.
    pub duration: f64,
}

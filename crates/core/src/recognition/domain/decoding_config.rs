pub const BEAM_WIDTH: usize = 5;
pub const TEMPERATURE: f32 = 0.0;
pub const REPETITION_PENALTY: f32 = 1.25;
pub const NO_SPEECH_THRESHOLD: f32 = 0.6;
/// Segments whose text compresses better than this are treated as
/// degenerate repetition and rejected.
pub const COMPRESSION_RATIO_THRESHOLD: f32 = 2.2;
pub const LOG_PROB_THRESHOLD: f32 = -1.0;

/// Decoding parameters for one recognition run.
///
/// The tuned values favour stable output on low-resource languages:
/// deterministic beam search, VAD filtering, and no conditioning on the
/// previous window so one bad segment does not poison the next.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodingConfig {
    pub beam_width: usize,
    pub temperature: f32,
    pub vad_filter: bool,
    pub repetition_penalty: f32,
    pub no_speech_threshold: f32,
    pub compression_ratio_threshold: f32,
    pub log_prob_threshold: f32,
    pub language: Option<String>,
    pub initial_prompt: Option<String>,
    pub condition_on_previous_text: bool,
}

impl DecodingConfig {
    /// Tuned defaults with the caller's forced language and prompt, if any.
    /// Blank values are treated as absent.
    pub fn tuned(language: Option<&str>, initial_prompt: Option<&str>) -> Self {
        Self {
            language: non_blank(language),
            initial_prompt: non_blank(initial_prompt),
            ..Self::default()
        }
    }
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            beam_width: BEAM_WIDTH,
            temperature: TEMPERATURE,
            vad_filter: true,
            repetition_penalty: REPETITION_PENALTY,
            no_speech_threshold: NO_SPEECH_THRESHOLD,
            compression_ratio_threshold: COMPRESSION_RATIO_THRESHOLD,
            log_prob_threshold: LOG_PROB_THRESHOLD,
            language: None,
            initial_prompt: None,
            condition_on_previous_text: false,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

use serde::{Deserialize, Serialize};

use crate::recognition::domain::recognition_info::RecognitionInfo;
use crate::recognition::domain::segment::Segment;

/// One segment as persisted: timestamps rounded to centiseconds, text trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub id: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// The transcript written to the output file.
///
/// Segments keep the order in which the engine produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub language: String,
    pub language_probability: f64,
    pub duration: f64,
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptResult {
    pub fn new(info: &RecognitionInfo) -> Self {
        Self {
            language: info.language.clone(),
            language_probability: round_to(info.language_probability.clamp(0.0, 1.0), 3),
            duration: round_to(info.duration, 2),
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(TranscriptSegment {
            id: segment.id,
            start: round_to(segment.start, 2),
            end: round_to(segment.end, 2),
            text: segment.text.trim().to_string(),
        });
    }
}

/// Round to `decimals` places from the exact binary value, ties to even.
///
/// 2.675 is stored as 2.67499... and rounds to 2.67.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// One timed span of recognized speech.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: u32,
    /// Seconds from the start of the media.
    pub start: f64,
    pub end: f64,
    pub text: String,
}

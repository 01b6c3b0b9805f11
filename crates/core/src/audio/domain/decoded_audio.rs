/// Mono PCM audio decoded from a media file, samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct DecodedAudio {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl DecodedAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the audio in seconds. Zero when the sample rate is unknown.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration_from_sample_count() {
        let audio = DecodedAudio::new(vec![0.0; 40000], 16000);
        assert_relative_eq!(audio.duration_secs(), 2.5);
    }

    #[test]
    fn test_zero_sample_rate_has_zero_duration() {
        let audio = DecodedAudio::new(vec![0.0; 100], 0);
        assert_eq!(audio.duration_secs(), 0.0);
    }

    #[test]
    fn test_empty_audio() {
        let audio = DecodedAudio::new(Vec::new(), 16000);
        assert!(audio.is_empty());
        assert_eq!(audio.duration_secs(), 0.0);
    }

    #[test]
    fn test_into_samples_returns_buffer() {
        let audio = DecodedAudio::new(vec![0.25, -0.5], 16000);
        assert_eq!(audio.sample_rate(), 16000);
        assert_eq!(audio.into_samples(), vec![0.25, -0.5]);
    }
}

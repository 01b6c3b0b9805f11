use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hardware::domain::hardware_config::Precision;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported model size: {0}")]
pub struct ParseModelSizeError(pub String);

/// Whisper checkpoints the engine knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSize {
    Tiny,
    TinyEn,
    Base,
    BaseEn,
    Small,
    SmallEn,
    Medium,
    MediumEn,
    LargeV1,
    LargeV2,
    LargeV3,
    LargeV3Turbo,
}

impl ModelSize {
    pub const ALL: &[ModelSize] = &[
        ModelSize::Tiny,
        ModelSize::TinyEn,
        ModelSize::Base,
        ModelSize::BaseEn,
        ModelSize::Small,
        ModelSize::SmallEn,
        ModelSize::Medium,
        ModelSize::MediumEn,
        ModelSize::LargeV1,
        ModelSize::LargeV2,
        ModelSize::LargeV3,
        ModelSize::LargeV3Turbo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::TinyEn => "tiny.en",
            ModelSize::Base => "base",
            ModelSize::BaseEn => "base.en",
            ModelSize::Small => "small",
            ModelSize::SmallEn => "small.en",
            ModelSize::Medium => "medium",
            ModelSize::MediumEn => "medium.en",
            ModelSize::LargeV1 => "large-v1",
            ModelSize::LargeV2 => "large-v2",
            ModelSize::LargeV3 => "large-v3",
            ModelSize::LargeV3Turbo => "large-v3-turbo",
        }
    }

    pub fn is_english_only(&self) -> bool {
        matches!(
            self,
            ModelSize::TinyEn | ModelSize::BaseEn | ModelSize::SmallEn | ModelSize::MediumEn
        )
    }

    /// Quantized weights published for this size, if any.
    ///
    /// `large-v1` ships only as f16 and `large-v3` only down to `q5_0`.
    pub fn quantization(&self) -> Option<&'static str> {
        match self {
            ModelSize::LargeV1 => None,
            ModelSize::LargeV3 => Some("q5_0"),
            _ => Some("q8_0"),
        }
    }

    /// ggml weights file for this size: f16 for half precision, the published
    /// quantization for integer precision.
    pub fn ggml_file_name(&self, precision: Precision) -> String {
        match (precision, self.quantization()) {
            (Precision::Int8, Some(quant)) => format!("ggml-{}-{quant}.bin", self.as_str()),
            _ => format!("ggml-{}.bin", self.as_str()),
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = ParseModelSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ModelSize::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == wanted)
            .ok_or_else(|| ParseModelSizeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tiny", ModelSize::Tiny)]
    #[case("base.en", ModelSize::BaseEn)]
    #[case("Large-V2", ModelSize::LargeV2)]
    #[case(" large-v3-turbo ", ModelSize::LargeV3Turbo)]
    fn test_parse_known_sizes(#[case] input: &str, #[case] expected: ModelSize) {
        assert_eq!(input.parse::<ModelSize>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_size_error_message() {
        let err = "gigantic".parse::<ModelSize>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported model size: gigantic");
    }

    #[test]
    fn test_every_size_parses_from_its_name() {
        for size in ModelSize::ALL {
            assert_eq!(size.as_str().parse::<ModelSize>().unwrap(), *size);
        }
    }

    #[rstest]
    #[case(ModelSize::Tiny, "ggml-tiny.bin", "ggml-tiny-q8_0.bin")]
    #[case(ModelSize::TinyEn, "ggml-tiny.en.bin", "ggml-tiny.en-q8_0.bin")]
    #[case(ModelSize::Base, "ggml-base.bin", "ggml-base-q8_0.bin")]
    #[case(ModelSize::BaseEn, "ggml-base.en.bin", "ggml-base.en-q8_0.bin")]
    #[case(ModelSize::Small, "ggml-small.bin", "ggml-small-q8_0.bin")]
    #[case(ModelSize::SmallEn, "ggml-small.en.bin", "ggml-small.en-q8_0.bin")]
    #[case(ModelSize::Medium, "ggml-medium.bin", "ggml-medium-q8_0.bin")]
    #[case(ModelSize::MediumEn, "ggml-medium.en.bin", "ggml-medium.en-q8_0.bin")]
    #[case(ModelSize::LargeV1, "ggml-large-v1.bin", "ggml-large-v1.bin")]
    #[case(ModelSize::LargeV2, "ggml-large-v2.bin", "ggml-large-v2-q8_0.bin")]
    #[case(ModelSize::LargeV3, "ggml-large-v3.bin", "ggml-large-v3-q5_0.bin")]
    #[case(
        ModelSize::LargeV3Turbo,
        "ggml-large-v3-turbo.bin",
        "ggml-large-v3-turbo-q8_0.bin"
    )]
    fn test_ggml_file_names(
        #[case] size: ModelSize,
        #[case] half_float: &str,
        #[case] int8: &str,
    ) {
        assert_eq!(size.ggml_file_name(Precision::HalfFloat), half_float);
        assert_eq!(size.ggml_file_name(Precision::Int8), int8);
    }

    #[test]
    fn test_english_only_models() {
        assert!(ModelSize::TinyEn.is_english_only());
        assert!(!ModelSize::Tiny.is_english_only());
        assert!(!ModelSize::LargeV3.is_english_only());
    }
}

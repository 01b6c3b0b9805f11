/// Directory name used under the platform cache/data directory.
pub const APP_DIR_NAME: &str = "Transcribe";

pub const WHISPER_MODEL_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const VAD_MODEL_NAME: &str = "ggml-silero-v5.1.2.bin";
pub const VAD_MODEL_URL: &str =
    "https://huggingface.co/ggml-org/whisper-vad/resolve/main/ggml-silero-v5.1.2.bin";

/// Arabic Unicode block, which covers Urdu and Persian letters.
pub const ARABIC_BLOCK_START: char = '\u{0600}';
pub const ARABIC_BLOCK_END: char = '\u{06FF}';

use std::path::Path;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use whisper_rs::{
    FullParams, SamplingStrategy, SegmentCallbackData, WhisperContext, WhisperContextParameters,
    WhisperState,
};

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use crate::hardware::domain::hardware_config::{Device, HardwareConfig, Precision};
use crate::recognition::domain::decoding_config::DecodingConfig;
use crate::recognition::domain::model_size::ModelSize;
use crate::recognition::domain::recognition_info::RecognitionInfo;
use crate::recognition::domain::segment::Segment;
use crate::recognition::domain::speech_recognizer::{
    RecognizerLoader, SegmentStream, SpeechRecognizer,
};
use crate::shared::constants::{
    VAD_MODEL_NAME, VAD_MODEL_URL, WHISPER_MODEL_BASE_URL, WHISPER_SAMPLE_RATE,
};
use crate::shared::model_resolver::ModelStore;

const SEGMENT_CHANNEL_CAPACITY: usize = 16;

/// Messages from the decode worker, in order: `Info`, any number of
/// `Segment`, then `Finished` or `Failed`.
enum EngineEvent {
    Info(RecognitionInfo),
    Segment(Segment),
    Finished,
    Failed(String),
}

/// Loads whisper.cpp models through whisper-rs.
pub struct WhisperLoader {
    store: ModelStore,
    audio_reader: fn() -> Box<dyn AudioReader>,
}

impl WhisperLoader {
    pub fn new(store: ModelStore) -> Self {
        Self {
            store,
            audio_reader: ffmpeg_reader,
        }
    }

    /// Replace the decoder used to turn media files into PCM.
    pub fn with_audio_reader(mut self, audio_reader: fn() -> Box<dyn AudioReader>) -> Self {
        self.audio_reader = audio_reader;
        self
    }
}

impl RecognizerLoader for WhisperLoader {
    fn load(
        &self,
        model_size: &str,
        hardware: &HardwareConfig,
    ) -> Result<Box<dyn SpeechRecognizer>, Box<dyn std::error::Error>> {
        let size: ModelSize = model_size.parse()?;
        log::info!("Loading model: {size}");

        let file_name = model_file_name(&self.store, size, hardware.precision);
        let url = format!("{WHISPER_MODEL_BASE_URL}/{file_name}");
        let model_path = self
            .store
            .resolve(&file_name, &url, Some(Box::new(download_progress)))?;

        let mut ctx_params = WhisperContextParameters::default();
        ctx_params.use_gpu(hardware.device == Device::Accelerated);

        let context = WhisperContext::new_with_params(
            model_path.to_str().ok_or("Invalid model path")?,
            ctx_params,
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        Ok(Box::new(WhisperRecognizer {
            context: Arc::new(context),
            model_size: size,
            threads: hardware.threads.max(1),
            store: self.store.clone(),
            audio_reader: (self.audio_reader)(),
        }))
    }
}

/// Speech recognizer backed by a loaded whisper.cpp context.
///
/// Decoding runs on a worker thread; segments are forwarded as whisper emits
/// them so the caller can report progress while the audio is processed.
pub struct WhisperRecognizer {
    context: Arc<WhisperContext>,
    model_size: ModelSize,
    threads: usize,
    store: ModelStore,
    audio_reader: Box<dyn AudioReader>,
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(
        &mut self,
        path: &Path,
        config: DecodingConfig,
    ) -> Result<(RecognitionInfo, SegmentStream), Box<dyn std::error::Error>> {
        let audio = self.audio_reader.read_audio(path, WHISPER_SAMPLE_RATE)?;
        if audio.is_empty() {
            return Err(format!("No audio decoded from {}", path.display()).into());
        }

        let vad_model = if config.vad_filter {
            let vad_path = self.store.resolve(VAD_MODEL_NAME, VAD_MODEL_URL, None)?;
            Some(
                vad_path
                    .to_str()
                    .ok_or("Invalid VAD model path")?
                    .to_string(),
            )
        } else {
            None
        };

        let job = DecodeJob {
            context: Arc::clone(&self.context),
            duration: audio.duration_secs(),
            samples: audio.into_samples(),
            english_only: self.model_size.is_english_only(),
            threads: self.threads,
            vad_model,
            config,
        };

        let (tx, rx) = crossbeam_channel::bounded(SEGMENT_CHANNEL_CAPACITY);
        thread::Builder::new()
            .name("whisper-decode".to_string())
            .spawn(move || job.run(tx))?;

        match rx.recv() {
            Ok(EngineEvent::Info(info)) => {
                Ok((info, Box::new(ChannelSegments { rx, done: false })))
            }
            Ok(EngineEvent::Failed(message)) => Err(message.into()),
            Ok(_) => Err("Whisper worker produced output before language detection".into()),
            Err(_) => Err("Whisper worker exited unexpectedly".into()),
        }
    }
}

struct DecodeJob {
    context: Arc<WhisperContext>,
    samples: Vec<f32>,
    duration: f64,
    english_only: bool,
    threads: usize,
    vad_model: Option<String>,
    config: DecodingConfig,
}

impl DecodeJob {
    fn run(self, tx: Sender<EngineEvent>) {
        let event = match self.decode(&tx) {
            Ok(()) => EngineEvent::Finished,
            Err(message) => EngineEvent::Failed(message),
        };
        // The receiver is gone if the caller stopped consuming.
        let _ = tx.send(event);
    }

    fn decode(&self, tx: &Sender<EngineEvent>) -> Result<(), String> {
        let mut state = self
            .context
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let (language, language_probability) = self.detect_language(&mut state)?;
        let info = RecognitionInfo {
            language: language.clone(),
            language_probability,
            duration: self.duration,
        };
        if tx.send(EngineEvent::Info(info)).is_err() {
            return Ok(());
        }

        let config = &self.config;
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: config.beam_width as i32,
            patience: -1.0,
        });
        params.set_language(Some(language.as_str()));
        params.set_translate(false);
        params.set_n_threads(self.threads as i32);
        params.set_temperature(config.temperature);
        params.set_temperature_inc(0.0);
        params.set_no_context(!config.condition_on_previous_text);
        params.set_entropy_thold(config.compression_ratio_threshold);
        params.set_logprob_thold(config.log_prob_threshold);
        params.set_no_speech_thold(config.no_speech_threshold);
        params.set_suppress_blank(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        if let Some(prompt) = &config.initial_prompt {
            params.set_initial_prompt(prompt);
        }
        if let Some(vad_model) = &self.vad_model {
            params.enable_vad(true);
            params.set_vad_model_path(Some(vad_model.as_str()));
        }
        // whisper.cpp has no repetition penalty; loops are caught by the
        // entropy threshold instead.
        log::debug!(
            "Repetition penalty {} not applied by whisper.cpp",
            config.repetition_penalty
        );

        let segment_tx = tx.clone();
        params.set_segment_callback_safe_lossy(move |data: SegmentCallbackData| {
            let _ = segment_tx.send(EngineEvent::Segment(segment_from_callback(data)));
        });

        state
            .full(params, &self.samples)
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        Ok(())
    }

    fn detect_language(&self, state: &mut WhisperState) -> Result<(String, f64), String> {
        if let Some(language) = &self.config.language {
            return Ok((language.clone(), 1.0));
        }
        if self.english_only {
            return Ok(("en".to_string(), 1.0));
        }

        state
            .pcm_to_mel(&self.samples, self.threads)
            .map_err(|e| format!("Failed to compute mel spectrogram: {e}"))?;
        let (lang_id, probabilities) = state
            .lang_detect(0, self.threads)
            .map_err(|e| format!("Language detection failed: {e}"))?;

        let code = whisper_rs::get_lang_str(lang_id)
            .ok_or_else(|| format!("Unknown language id: {lang_id}"))?;
        let probability = usize::try_from(lang_id)
            .ok()
            .and_then(|i| probabilities.get(i))
            .copied()
            .unwrap_or(0.0) as f64;

        log::info!("Detected language: {code} ({probability:.3})");
        Ok((code.to_string(), probability.clamp(0.0, 1.0)))
    }
}

/// whisper.cpp timestamps are in centiseconds.
fn segment_from_callback(data: SegmentCallbackData) -> Segment {
    Segment {
        id: data.segment.max(0) as u32,
        start: data.start_timestamp as f64 / 100.0,
        end: data.end_timestamp as f64 / 100.0,
        text: data.text,
    }
}

struct ChannelSegments {
    rx: Receiver<EngineEvent>,
    done: bool,
}

impl Iterator for ChannelSegments {
    type Item = Result<Segment, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.rx.recv() {
                Ok(EngineEvent::Segment(segment)) => return Some(Ok(segment)),
                Ok(EngineEvent::Info(_)) => continue,
                Ok(EngineEvent::Finished) => {
                    self.done = true;
                    return None;
                }
                Ok(EngineEvent::Failed(message)) => {
                    self.done = true;
                    return Some(Err(message.into()));
                }
                Err(_) => {
                    self.done = true;
                    return Some(Err("Whisper worker exited unexpectedly".into()));
                }
            }
        }
    }
}

/// File for `size` at `precision`, or the f16 file when only that one is
/// already on disk.
fn model_file_name(store: &ModelStore, size: ModelSize, precision: Precision) -> String {
    let preferred = size.ggml_file_name(precision);
    if store.find_local(&preferred).is_some() {
        return preferred;
    }
    let full = size.ggml_file_name(Precision::HalfFloat);
    if full != preferred && store.find_local(&full).is_some() {
        log::info!("{preferred} not found locally; using {full}");
        return full;
    }
    preferred
}

fn ffmpeg_reader() -> Box<dyn AudioReader> {
    Box::new(FfmpegAudioReader::new())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = downloaded * 100 / total;
        log::debug!("Downloading model... {pct}%");
    } else {
        log::debug!("Downloading model... {downloaded} bytes");
    }
}

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use transcribe_core::hardware::infrastructure::host_probe::probe_host;
use transcribe_core::pipeline::progress_reporter::StderrProgressReporter;
use transcribe_core::pipeline::status_line::StatusLine;
use transcribe_core::pipeline::transcribe_media_use_case::TranscribeMediaUseCase;
use transcribe_core::pipeline::transcription_request::TranscriptionRequest;
use transcribe_core::recognition::infrastructure::whisper_recognizer::WhisperLoader;
use transcribe_core::script::domain::script_normalizer::ScriptNormalizer;
use transcribe_core::script::domain::target_script::TargetScript;
use transcribe_core::script::infrastructure::transliterator_resolver::resolve_transliterator;
use transcribe_core::shared::model_resolver::ModelStore;
use transcribe_core::transcript::infrastructure::json_transcript_writer::JsonTranscriptWriter;

/// Transcribe a media file to a timestamped JSON transcript.
#[derive(Parser, Debug)]
#[command(name = "transcribe", version)]
struct Cli {
    /// Input audio or video file.
    input: PathBuf,

    /// Whisper model size (tiny, base, small, medium, large-v3, ...).
    model_size: String,

    /// Output JSON file.
    output: PathBuf,

    /// Language code to force instead of auto-detection (e.g. en, ur, hi).
    #[arg(long)]
    language: Option<String>,

    /// Initial prompt to bias vocabulary and spelling.
    #[arg(long)]
    prompt: Option<String>,

    /// Target script: Auto, Hindi, Urdu or Mixed.
    #[arg(long, default_value = "Auto")]
    script: TargetScript,

    /// Directory with pre-downloaded ggml model files.
    #[arg(long)]
    model_dir: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> TranscriptionRequest {
        TranscriptionRequest {
            input: self.input.clone(),
            model_size: self.model_size.clone(),
            output: self.output.clone(),
            language: self.language.clone(),
            prompt: self.prompt.clone(),
            script: self.script,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => fail(&argument_error(&e)),
    };

    match run(&cli) {
        Ok(output) => {
            println!("{}", StatusLine::success(output.display().to_string()).to_json_line());
        }
        Err(e) => fail(&e.to_string()),
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let request = cli.request();
    request.check_input()?;

    let host = probe_host();
    let store = ModelStore::with_default_cache(cli.model_dir.clone())?;
    let normalizer = ScriptNormalizer::new(cli.script, resolve_transliterator());

    let mut use_case = TranscribeMediaUseCase::new(
        Box::new(WhisperLoader::new(store)),
        normalizer,
        Box::new(JsonTranscriptWriter::new()),
        Box::new(StderrProgressReporter::new()),
    );
    Ok(use_case.execute(&request, &host)?)
}

fn fail(message: &str) -> ! {
    log::error!("{message}");
    println!("{}", StatusLine::failure(message).to_json_line());
    process::exit(1);
}

/// First line of a clap error without its `error: ` prefix.
fn argument_error(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

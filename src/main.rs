use anyhow::{bail, Context, Result};
use autosrt::audio;
use autosrt::audio::resample::TRANSCRIBE_SAMPLE_RATE;
use autosrt::config::SlotConfig;
use autosrt::output;
use autosrt::slots;
use autosrt::transcription;
use autosrt::types::{AudioData, Transcript};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// autosrt - fixed-length subtitle slots from speech
///
/// Decodes the input, takes a timestamped transcript, and writes an SRT with
/// one block per slot plus a keyword prompt file with matching block numbers.
#[derive(Parser, Debug)]
#[command(name = "autosrt")]
#[command(version)]
#[command(about = "Fixed-length subtitle slots from a timestamped transcript", long_about = None)]
struct Args {
    /// Input media file (WAV, MP3, FLAC, OGG, MP4/AAC, ...)
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// JSON transcript to use instead of running whisper
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,

    /// Whisper ggml model (defaults to $WHISPER_MODEL_PATH)
    #[arg(long, value_name = "PATH")]
    #[cfg_attr(not(feature = "whisper"), allow(dead_code))]
    model: Option<PathBuf>,

    /// JSON file with slot settings; flags below override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Slot length in seconds
    #[arg(long, value_name = "SECONDS")]
    slot_length: Option<f64>,

    /// Seconds added to each fragment's end before slot overlap is measured
    #[arg(long, value_name = "SECONDS")]
    end_pad: Option<f64>,

    /// Text written for slots without narration
    #[arg(long, value_name = "TEXT")]
    empty_text: Option<String>,

    /// Transcription language, or "auto" to detect
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Directory for the .srt and keyword files (defaults to the input's directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Also write the 16 kHz mono WAV used for transcription
    #[arg(long, value_name = "PATH")]
    dump_wav: Option<PathBuf>,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            bail!("Input file does not exist: {:?}", self.input_file);
        }
        if !self.input_file.is_file() {
            bail!("Input path is not a file: {:?}", self.input_file);
        }
        if let Some(dir) = &self.output_dir {
            if dir.exists() && !dir.is_dir() {
                bail!("Output path must be a directory: {:?}", dir);
            }
        }
        #[cfg(not(feature = "whisper"))]
        if self.transcript.is_none() {
            bail!("Built without whisper support; provide --transcript <PATH>");
        }
        Ok(())
    }

    fn slot_config(&self) -> Result<SlotConfig> {
        let mut config = match &self.config {
            Some(path) => SlotConfig::from_json_file(path)?,
            None => SlotConfig::default(),
        };
        if let Some(slot_length) = self.slot_length {
            config.slot_length = slot_length;
        }
        if let Some(end_pad) = self.end_pad {
            config.end_pad = end_pad;
        }
        if let Some(text) = &self.empty_text {
            config.empty_text = text.clone();
        }
        if let Some(language) = &self.language {
            config.language = (language != "auto").then(|| language.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// `<stem>.srt` and `<stem>_keywords.txt`
    fn output_paths(&self) -> (PathBuf, PathBuf) {
        let stem = self
            .input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .input_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        (
            dir.join(format!("{stem}.srt")),
            dir.join(format!("{stem}_keywords.txt")),
        )
    }

    #[cfg(feature = "whisper")]
    fn model_path(&self) -> PathBuf {
        self.model.clone().unwrap_or_else(|| {
            std::env::var("WHISPER_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./models/ggml-large-v3.bin"))
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;
    let config = args.slot_config().context("Invalid slot settings")?;
    let started = Instant::now();

    println!("autosrt v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:  {:?}", args.input_file);
    println!("Slot length: {:.2}s (fixed)", config.slot_length);
    println!("Segment end pad: {:.2}s", config.end_pad);

    println!("\n1. Decoding input audio...");
    let decoded = audio::decoder::decode_audio(&args.input_file)
        .context("Failed to decode input audio")?;
    let total_duration = decoded.duration_secs();
    println!(
        "   Loaded {:.3}s at {} Hz",
        total_duration, decoded.sample_rate
    );

    let needs_16k = args.dump_wav.is_some()
        || (args.transcript.is_none() && cfg!(feature = "whisper"));
    let speech_audio = if needs_16k {
        Some(to_transcribe_rate(&decoded)?)
    } else {
        None
    };
    if let (Some(path), Some(speech)) = (&args.dump_wav, &speech_audio) {
        audio::encoder::encode_wav(speech, path)
            .with_context(|| format!("Failed to write converted audio to {:?}", path))?;
        println!("   Wrote 16 kHz mono WAV to {:?}", path);
    }

    println!("\n2. Collecting transcript...");
    let transcript = match &args.transcript {
        Some(path) => {
            transcription::load_transcript(path).context("Failed to load transcript")?
        }
        None => run_whisper(&args, speech_audio.as_ref(), &config)?,
    };
    println!("   Found {} fragments", transcript.fragments.len());

    println!("\n3. Building subtitle slots...");
    let slots = slots::assign_fragments(&transcript.fragments, total_duration, &config)
        .context("Failed to assign transcript to slots")?;
    println!(
        "   Slots: {} (covers 0.000s -> {:.3}s)",
        slots.len(),
        total_duration
    );

    println!("\n4. Writing SRT and keyword prompts...");
    let (srt_path, keywords_path) = args.output_paths();
    if let Some(dir) = srt_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {:?}", dir))?;
    }
    let blocks = slots::render_blocks(&slots, &config.empty_text);
    output::write_srt_file(&srt_path, &blocks)?;
    output::write_keywords_file(&keywords_path, &slots)?;
    println!("   Wrote {:?}", srt_path);
    println!("   Wrote {:?}", keywords_path);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        blocks = blocks.len(),
        "run complete"
    );

    println!("\n✓ Done in {}s", started.elapsed().as_secs());
    Ok(())
}

fn to_transcribe_rate(decoded: &AudioData) -> Result<AudioData> {
    let samples = audio::resample::resample(
        &decoded.samples,
        decoded.sample_rate,
        TRANSCRIBE_SAMPLE_RATE,
    )
    .context("Failed to resample audio to 16 kHz")?;
    Ok(AudioData {
        samples,
        sample_rate: TRANSCRIBE_SAMPLE_RATE,
    })
}

#[cfg(feature = "whisper")]
fn run_whisper(
    args: &Args,
    speech: Option<&AudioData>,
    config: &SlotConfig,
) -> Result<Transcript> {
    let speech = speech.context("16 kHz audio was not prepared for transcription")?;
    let model = args.model_path();
    println!("   Transcribing with Whisper model {:?}...", model);
    transcription::transcribe_audio(speech, &model, config.language.as_deref())
        .context("Failed to transcribe audio")
}

#[cfg(not(feature = "whisper"))]
fn run_whisper(
    _args: &Args,
    _speech: Option<&AudioData>,
    _config: &SlotConfig,
) -> Result<Transcript> {
    bail!("Built without whisper support; provide --transcript <PATH>")
}

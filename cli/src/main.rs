use clap::{Parser, Subcommand};
use morsewave_core::{
    morse_to_text, symbol_table, text_to_morse, translate, translate_image, Decoder, Direction,
    ToneEncoder, Translation, DEFAULT_SAMPLE_RATE, DEFAULT_TONE_FREQUENCY, DEFAULT_WPM,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod error;
mod ocr;
mod server;
mod wav;

use ocr::TesseractExtractor;
use server::ServerConfig;

#[derive(Parser)]
#[command(name = "morsewave")]
#[command(about = "Translate between text, Morse code and keyed Morse audio")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_level)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate English text to Morse code
    EncodeText {
        text: String,
    },

    /// Translate Morse code (space between letters, `/` between words) to text
    DecodeText {
        morse: String,
    },

    /// Translate in whichever direction the input looks like
    Translate {
        input: String,
    },

    /// Print the Morse symbol table
    Table,

    /// Render text as keyed Morse audio in a WAV file
    Encode {
        /// Text to key
        text: String,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Keying speed in words per minute
        #[arg(long, default_value_t = DEFAULT_WPM)]
        wpm: f64,

        /// Carrier frequency in Hz
        #[arg(long, default_value_t = DEFAULT_TONE_FREQUENCY)]
        frequency: f32,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// Decode a WAV recording of keyed Morse audio
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Assumed keying speed in words per minute
        #[arg(long, default_value_t = DEFAULT_WPM)]
        wpm: f64,
    },

    /// Recognize text in an image and translate it
    Ocr {
        /// Input image (PNG, JPEG, ...)
        image: PathBuf,

        /// tesseract executable
        #[arg(long, default_value = "tesseract")]
        tesseract: PathBuf,
    },

    /// Serve the translator over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,

        /// Speed assumed for audio requests without one
        #[arg(long, default_value_t = DEFAULT_WPM)]
        wpm: f64,

        /// tesseract executable
        #[arg(long, default_value = "tesseract")]
        tesseract: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if matches!(cli.command, Commands::Serve { .. }) {
        init_tracing(cli.log_level);
    } else {
        env_logger::Builder::new().filter_level(cli.log_level).init();
    }

    match cli.command {
        Commands::EncodeText { text } => println!("{}", text_to_morse(&text)?),
        Commands::DecodeText { morse } => println!("{}", morse_to_text(&morse)?),
        Commands::Translate { input } => print_translation(&translate(&input)?),
        Commands::Table => print_table(),
        Commands::Encode {
            text,
            output,
            wpm,
            frequency,
            sample_rate,
        } => encode_command(&text, &output, wpm, frequency, sample_rate)?,
        Commands::Decode { input, wpm } => decode_command(&input, wpm)?,
        Commands::Ocr { image, tesseract } => ocr_command(&image, tesseract)?,
        Commands::Serve {
            bind,
            wpm,
            tesseract,
        } => serve_command(bind, wpm, tesseract)?,
    }

    Ok(())
}

fn serve_command(
    bind: SocketAddr,
    wpm: f64,
    tesseract: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        default_wpm: wpm,
        tesseract,
    };
    tokio::runtime::Runtime::new()?.block_on(server::serve(bind, config))?;
    Ok(())
}

fn parse_log_level(s: &str) -> Result<log::LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level {:?} (expected off, error, warn, info, debug or trace)", s))
}

fn init_tracing(level: log::LevelFilter) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn encode_command(
    text: &str,
    output_path: &Path,
    wpm: f64,
    frequency: f32,
    sample_rate: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = ToneEncoder::new(wpm, sample_rate, frequency)?;
    let waveform = encoder.encode(text)?;
    println!(
        "Encoded {} chars to {} audio samples ({:.2} s at {} WPM)",
        text.chars().count(),
        waveform.len(),
        waveform.duration_secs(),
        wpm
    );

    wav::write_wav_file(output_path, &waveform)?;
    println!("Wrote {}", output_path.display());
    Ok(())
}

fn decode_command(input_path: &Path, wpm: f64) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = Decoder::new(wpm)?;
    let waveform = wav::read_wav_file(input_path)?;

    // Show the detected symbols even when the lookup fails
    let morse = decoder.decode_symbols(&waveform)?;
    println!("Detected Morse: {}", morse);

    let text = morse_to_text(&morse)?;
    println!("Decoded text: {}", text);
    Ok(())
}

fn ocr_command(image_path: &Path, tesseract: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let image = std::fs::read(image_path)?;
    log::info!("Read {} bytes from {}", image.len(), image_path.display());

    let extractor = TesseractExtractor::new(tesseract);
    let translation = translate_image(&extractor, &image)?;
    println!("Extracted text: {}", translation.input);
    print_translation(&translation);
    Ok(())
}

fn print_translation(translation: &Translation) {
    match translation.direction {
        Direction::MorseToText => println!("Translated text: {}", translation.output),
        Direction::TextToMorse => println!("Morse code: {}", translation.output),
    }
}

fn print_table() {
    for (c, code) in symbol_table() {
        println!("{}  {}", c, code);
    }
}

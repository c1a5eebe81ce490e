//! Morse - Morse code converter and tone generator
//!
//! # Usage
//!
//! ```bash
//! morse encode "Hello World"
//! morse decode ".... . .-.. .-.. ---   .-- --- .-. .-.. -.."
//! morse render --text "SOS" -o sos.wav --unit-ms 80
//! RUST_LOG=debug morse render "... --- ..."
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use morse_core::{
    alphabet::{AlphabetTable, SymbolClass},
    codec::{MorseCodec, WORD_SEPARATOR},
    error::{MorseError, Result},
    render::{self, RenderOptions},
    synth::{AudioSettings, DEFAULT_FREQUENCY_HZ, DEFAULT_UNIT_DURATION_MS, DEFAULT_VOLUME},
    timing::{self, parse_timing},
    wav::Destination,
    DEFAULT_SAMPLE_RATE,
};

/// Morse code converter and tone generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate text into Morse code
    Encode {
        /// Text to translate (read from stdin when omitted)
        text: Option<String>,
    },
    /// Translate Morse code into text
    Decode {
        /// Morse string to translate (read from stdin when omitted)
        morse: Option<String>,
    },
    /// Show the tone/silence events for a Morse string
    Timing {
        /// Morse string (read from stdin when omitted)
        morse: Option<String>,
    },
    /// Write a Morse string (or text) as a WAV file and print its path
    Render(RenderArgs),
    /// Print the alphabet chart
    Chart {
        /// Only show one class (letters, digits, punctuation)
        #[arg(value_name = "CLASS", value_parser = parse_class)]
        class: Option<SymbolClass>,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Morse string to render
    #[arg(value_name = "MORSE", conflicts_with_all = ["text", "input"])]
    morse: Option<String>,

    /// Plain text to encode and render instead of a Morse string
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Read the Morse string from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output WAV path (a temp file is created when omitted)
    #[arg(short, long, value_name = "WAV_FILE")]
    output: Option<PathBuf>,

    /// Tone frequency in Hz (clamped to 200-800)
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY_HZ)]
    frequency: f64,

    /// Unit (dot) length in milliseconds (clamped to 30-180)
    #[arg(short, long, default_value_t = DEFAULT_UNIT_DURATION_MS)]
    unit_ms: u32,

    /// Volume between 0.0 and 1.0
    #[arg(short, long, default_value_t = DEFAULT_VOLUME)]
    volume: f64,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE,
          value_parser = clap::value_parser!(u32).range(1..))]
    sample_rate: u32,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        let settings = AudioSettings::new(self.frequency, self.unit_ms, self.volume);
        RenderOptions::new()
            .with_settings(settings)
            .with_sample_rate(self.sample_rate)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Built once and shared by every command
    let table = AlphabetTable::standard();
    let codec = MorseCodec::new(&table);

    match cli.command {
        Command::Encode { text } => {
            let text = arg_or_stdin(text)?;
            println!("{}", codec.encode(text.trim_end_matches(['\r', '\n']))?);
        }
        Command::Decode { morse } => {
            let morse = arg_or_stdin(morse)?;
            println!("{}", codec.decode(&strip_newlines(&morse))?);
        }
        Command::Timing { morse } => {
            let events = parse_timing(&strip_newlines(&arg_or_stdin(morse)?))?;
            for event in &events {
                println!("{}", event);
            }
            println!("total: {} units", timing::total_units(&events));
        }
        Command::Render(args) => {
            let options = args.options();
            let destination = Destination::from(args.output.clone());
            let path = match (&args.text, &args.input, &args.morse) {
                (Some(text), _, _) => {
                    render::synthesize_text_audio(&table, text, &options, destination)?
                }
                (None, Some(input), _) => {
                    let morse = read_file(input)?;
                    render::synthesize_morse_audio(&strip_newlines(&morse), &options, destination)?
                }
                (None, None, morse) => {
                    let morse = arg_or_stdin(morse.clone())?;
                    render::synthesize_morse_audio(&strip_newlines(&morse), &options, destination)?
                }
            };
            println!("{}", path.display());
        }
        Command::Chart { class } => {
            let classes = match class {
                Some(class) => vec![class],
                None => SymbolClass::ALL.to_vec(),
            };
            for class in classes {
                println!("# {}", class);
                for (symbol, code) in table.entries(class) {
                    if class == SymbolClass::Letter {
                        let upper: String = symbol.to_uppercase().collect();
                        println!("{} {}  {}", upper, symbol, code);
                    } else {
                        println!("{}  {}", symbol, code);
                    }
                }
            }
        }
    }

    Ok(())
}

fn parse_class(name: &str) -> std::result::Result<SymbolClass, String> {
    SymbolClass::from_name(name)
        .ok_or_else(|| format!("unknown class '{}' (letters, digits, punctuation)", name))
}

/// Newlines carry no meaning in Morse input; each line becomes a word.
fn strip_newlines(input: &str) -> String {
    input
        .lines()
        .map(|line| line.trim_matches(' '))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

fn arg_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| MorseError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })?;
    Ok(buffer)
}

fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MorseError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use midir::{Ignore, MidiInput};

use mpkdump_core::{DumpReport, decode_preset_dump, make_report, validate_frame};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MPKDUMP_BUILD_COMMIT"),
    " ",
    env!("MPKDUMP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mpkdump")]
#[command(version = VERSION)]
#[command(
    about = "Decode Akai MPK2 preset-dump SysEx messages into JSON reports.",
    long_about = None,
    after_help = "Examples:\n  mpkdump ports\n  mpkdump decode preset.syx --stdout --pretty\n  mpkdump listen --port 1 -o report.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available MIDI input ports.
    Ports,
    /// Decode a raw SysEx dump file and generate a JSON report.
    #[command(
        after_help = "Examples:\n  mpkdump decode preset.syx -o report.json\n  mpkdump decode preset.syx --stdout --pretty"
    )]
    Decode {
        /// Path to a .syx file holding one complete SysEx message
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Wait on a MIDI input port for a preset dump and decode it.
    #[command(
        after_help = "Examples:\n  mpkdump listen --port 1 --stdout\n  mpkdump listen --port 1 --timeout 30 -o report.json"
    )]
    Listen {
        /// MIDI input port index (see `mpkdump ports`)
        #[arg(short = 'p', long)]
        port: usize,

        /// Seconds to wait before giving up
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ports => cmd_ports(),
        Commands::Decode { input, output } => cmd_decode(input, output),
        Commands::Listen {
            port,
            timeout,
            output,
        } => cmd_listen(port, timeout, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_ports() -> Result<(), CliError> {
    let input = midi_input()?;
    let ports = input.ports();
    if ports.is_empty() {
        println!("no MIDI input ports available");
        return Ok(());
    }
    for (index, port) in ports.iter().enumerate() {
        let name = input
            .port_name(port)
            .unwrap_or_else(|_| "<unknown>".to_string());
        println!("port {:2}: {}", index, name);
    }
    Ok(())
}

fn cmd_decode(input: PathBuf, output: OutputArgs) -> Result<(), CliError> {
    validate_input_file(&input)?;
    let raw = fs::read(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let report = decode_report(&raw)?;
    emit_report(&report, &output)
}

fn cmd_listen(port: usize, timeout: u64, output: OutputArgs) -> Result<(), CliError> {
    let mut input = midi_input()?;
    // SysEx is filtered out by default.
    input.ignore(Ignore::None);

    let ports = input.ports();
    let midi_port = ports.get(port).ok_or_else(|| {
        CliError::new(
            format!("no MIDI input port {}", port),
            Some("run `mpkdump ports` to list available ports".to_string()),
        )
    })?;
    let port_name = input
        .port_name(midi_port)
        .unwrap_or_else(|_| format!("port {}", port));

    let (tx, rx) = mpsc::channel::<Vec<u8>>();
    let _connection = input
        .connect(
            midi_port,
            "mpkdump-listen",
            move |_stamp, message, _| {
                let _ = tx.send(message.to_vec());
            },
            (),
        )
        .map_err(|err| {
            CliError::new(
                format!("failed to open MIDI port '{}': {}", port_name, err.kind()),
                None,
            )
        })?;

    if !output.quiet {
        eprintln!("listening on '{}' for a preset dump...", port_name);
    }

    let deadline = Instant::now() + Duration::from_secs(timeout);
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Err(CliError::new(
                format!("no preset dump received within {} seconds", timeout),
                Some("trigger a SysEx preset dump on the device".to_string()),
            ));
        }
        match rx.recv_timeout(deadline - now) {
            // Channel messages, clocks etc. are not dumps; keep waiting.
            Ok(message) if message.first() == Some(&0xF0) => {
                let report = decode_report(&message)?;
                return emit_report(&report, &output);
            }
            Ok(_) => continue,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(CliError::new("MIDI connection closed", None));
            }
        }
    }
}

fn midi_input() -> Result<MidiInput, CliError> {
    MidiInput::new("mpkdump")
        .map_err(|err| CliError::new(format!("failed to initialize MIDI input: {}", err), None))
}

fn decode_report(raw: &[u8]) -> Result<DumpReport, CliError> {
    let frame = validate_frame(raw)
        .map_err(|err| CliError::new(format!("invalid dump message: {}", err), None))?;
    let preset = decode_preset_dump(&frame)
        .map_err(|err| CliError::new(format!("failed to decode preset dump: {}", err), None))?;
    Ok(make_report(
        frame.device,
        frame.command,
        frame.declared_len,
        preset,
    ))
}

fn emit_report(report: &DumpReport, output: &OutputArgs) -> Result<(), CliError> {
    let json = serialize_report(report, output.pretty, output.compact)?;

    if output.stdout {
        print!("{}", json);
        return Ok(());
    }

    let path = output
        .report
        .clone()
        .ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    if !output.quiet {
        eprintln!("OK: report written -> {}", path.display());
    }
    Ok(())
}

fn serialize_report(report: &DumpReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .syx file holding one raw SysEx message".to_string()),
        ));
    }
    let meta = fs::metadata(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .syx file holding one raw SysEx message".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "syx" && ext != "sysex" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .syx or .sysex file".to_string()),
        ));
    }
    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{debug, info};
use vmwriter::vm::parse_program;
use vmwriter::{VmEmitter, VmWriter};

/// Reads a Hack VM file, validates every command and writes it back out in
/// normalized form
#[derive(Parser, Debug)]
#[command(name = "vmwriter")]
#[command(about = "Validate and normalize Hack VM code")]
#[command(version)]
struct Cli {
    /// Input .vm file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to <input>.out.vm)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Logging filter string (e.g. "vmwriter=trace")
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let filters = match (&cli.log, cli.verbose) {
        (Some(filters), _) => filters.as_str(),
        (None, true) => "debug",
        (None, false) => "info",
    };
    if let Err(e) = init_logger(filters) {
        eprintln!("Failed to initialise logger: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("vmwriter failed: {}", e);
        process::exit(1);
    }
}

fn init_logger(filters: &str) -> Result<(), log::SetLoggerError> {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.parse_filters(filters);
    builder.try_init()
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("out.vm")
}

/// Canonical form of `path`, which need not exist yet as long as its parent
/// directory does
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(path.file_name()?))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| format!("Error reading file '{}': {}", cli.input.display(), e))?;

    let commands = parse_program(&source)
        .map_err(|e| format!("{}: {}", cli.input.display(), e))?;
    debug!("parsed {} commands from {}", commands.len(), cli.input.display());

    let output = cli.output.clone().unwrap_or_else(|| default_output(&cli.input));
    if same_file(&output, &cli.input) {
        return Err(format!("refusing to overwrite input file '{}'", output.display()).into());
    }

    let mut writer = VmWriter::create(&output)
        .map_err(|e| format!("Error creating '{}': {}", output.display(), e))?;
    for command in &commands {
        writer.write_command(command)?;
    }
    info!("{} commands emitted", writer.lines_written());
    writer.close()?;

    Ok(())
}

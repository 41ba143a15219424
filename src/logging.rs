// src/logging.rs
// =============================================================================
// Sets up the structured log (tracing + tracing-subscriber).
//
// The log is separate from what the program prints:
// - the word report goes to stdout
// - short error messages go to stderr with eprintln!
// - the log goes to stderr too by default, or to a file with --log-file
//
// The filter comes from RUST_LOG when it is set, e.g.
//   RUST_LOG=txt_tally=trace txt-tally https://example.com/
// =============================================================================

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

// Quiet on the terminal unless RUST_LOG asks for more
const STDERR_FILTER: &str = "warn";

// A log file is opt-in, so record the program's own info/debug lines there
const FILE_FILTER: &str = "info,txt_tally=debug";

// Writer that is either the log file or stderr (used when cloning the file fails)
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => std::io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => std::io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize logging, appending to `log_file` when one is given.
///
/// If the file cannot be opened, falls back to stderr and says so; logging
/// problems never stop the program.
pub fn init(log_file: Option<&Path>) {
    if let Some(path) = log_file {
        match init_file(path) {
            Ok(()) => return,
            Err(e) => eprintln!(
                "Warning: could not open log file {}: {:#}; logging to stderr",
                path.display(),
                e
            ),
        }
    }
    init_stderr();
}

fn init_file(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("txt-tally logging to {}", path.display());
    Ok(())
}

fn init_stderr() {
    // try_init: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

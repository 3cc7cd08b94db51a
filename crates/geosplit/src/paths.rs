//! Resolution of input and output paths from command-line arguments.

use std::path::{Path, PathBuf};

use crate::config::DefaultsConfig;

/// Output file extension.
const CSV_EXTENSION: &str = "csv";

/// The pair of files a conversion reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// GeoJSON document to read.
    pub input: PathBuf,
    /// CSV file to write.
    pub output: PathBuf,
}

/// Resolve paths relative to the directory holding the running executable.
///
/// - no input: both default file names beside the executable;
/// - input only: output derived from the input name;
/// - both: used verbatim.
#[must_use]
pub fn resolve(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    defaults: &DefaultsConfig,
) -> ResolvedPaths {
    resolve_in(&program_dir(), input, output, defaults)
}

/// Same as [`resolve`] but with an explicit directory for the defaults.
#[must_use]
pub fn resolve_in(
    base_dir: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    defaults: &DefaultsConfig,
) -> ResolvedPaths {
    let (input, derived_output) = match input {
        Some(input) => {
            let derived = derive_output_path(&input, &defaults.split_suffix);
            (input, derived)
        }
        None => (
            base_dir.join(&defaults.input_file),
            base_dir.join(&defaults.output_file),
        ),
    };

    ResolvedPaths {
        input,
        output: output.unwrap_or(derived_output),
    }
}

/// `<dir>/<stem><suffix>.csv` for an input at `<dir>/<stem>.<ext>`.
#[must_use]
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{suffix}.{CSV_EXTENSION}");

    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Directory of the running executable, or the working directory if that
/// cannot be determined.
#[must_use]
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

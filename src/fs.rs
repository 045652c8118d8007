//! Writing translations to disk for `--output`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes a translation to `file_path` through a sibling temp file and a rename.
///
/// The file always ends with a newline, matching what is printed to stdout.
/// An existing file is only replaced once the new content is fully written.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn write_output(file_path: &str, translation: &str) -> Result<()> {
    let path = Path::new(file_path);
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.mixtl.tmp"));

    let mut contents = translation.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }

    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temporary file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to write output file: {file_path}"));
    }

    Ok(())
}

// io.rs: caller-side persistence glue
use std::fs;
use tracing::debug;

use crate::error::ExtractError;

/// Write a computed string to a file, replacing any existing contents.
pub fn write_to_file(contents: &str, filename: &str) -> Result<(), ExtractError> {
    fs::write(filename, contents).map_err(|source| ExtractError::WriteFile {
        path: filename.to_string(),
        source,
    })?;
    debug!(file = filename, bytes = contents.len(), "wrote output file");
    Ok(())
}

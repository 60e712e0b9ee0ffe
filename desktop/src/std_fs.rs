use std::fs;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use embedded_io::ErrorType;
use log::{info, warn};

use crate::error::{Result, ToolError};

/// Reads a whole input file, a missing path is reported as [`ToolError::FileNotFound`].
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => {
            info!("Read {} bytes from {}", data.len(), path.display());
            Ok(data)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ToolError::FileNotFound(path.to_path_buf()))
        }
        Err(err) => Err(ToolError::ReadFailure(path.to_path_buf(), err.kind())),
    }
}

/// Writes `text` verbatim.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|err| ToolError::WriteFailure(path.to_path_buf(), err.kind()))?;
    info!("Wrote {} bytes of text to {}", text.len(), path.display());
    Ok(())
}

/// Buffered output file usable as an [`embedded_io::Write`] sink.
pub struct StdFileWriter {
    file: BufWriter<fs::File>,
    path: PathBuf,
}

impl StdFileWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|err| ToolError::WriteFailure(path.to_path_buf(), err.kind()))?;
        info!("Opened {} for writing", path.display());
        Ok(StdFileWriter {
            file: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Converts an error from this writer into a [`ToolError`] naming the file.
    pub fn write_failure(&self, err: std::io::Error) -> ToolError {
        ToolError::WriteFailure(self.path.clone(), err.kind())
    }
}

/// Creates `path` and hands it to `write`. On failure the file is removed
/// so no truncated output is left behind.
pub fn write_file_with(
    path: &Path,
    write: impl FnOnce(&mut StdFileWriter) -> std::io::Result<()>,
) -> Result<()> {
    let mut out = StdFileWriter::create(path)?;
    match write(&mut out) {
        Ok(()) => Ok(()),
        Err(err) => {
            let failure = out.write_failure(err);
            drop(out);
            if let Err(err) = fs::remove_file(path) {
                warn!("Failed to remove partial output {}: {}", path.display(), err);
            }
            Err(failure)
        }
    }
}

impl ErrorType for StdFileWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}

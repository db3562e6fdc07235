use super::Backend;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "snippets.json";

/// Stores every snippet in one JSON array file.
///
/// The file is opened and closed within each call. Saves truncate the file
/// in place, so a failed save can leave it partially written.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SnipzError {
        SnipzError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn serde_error(&self, source: serde_json::Error) -> SnipzError {
        SnipzError::Serialization {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl Backend for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<Snippet>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let snippets: Vec<Snippet> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                if e.is_io() {
                    self.io_error(e.into())
                } else {
                    self.serde_error(e)
                }
            })?;
        Ok(Some(snippets))
    }

    fn save(&self, snippets: &[Snippet]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, snippets).map_err(|e| self.serde_error(e))?;
        writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

//! Save-file storage.
//!
//! Saved sessions are one TOML snapshot file each inside a dedicated
//! directory. Session names resolve to files by appending the default
//! extension unless the caller already supplied one.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Extension appended to extension-less session names
const SAVE_EXT: &str = "toml";

/// One directory of saved sessions
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// True if at least one saved session exists
    pub fn any_saves(&self) -> bool {
        self.list().map(|names| !names.is_empty()).unwrap_or(false)
    }

    /// Sorted session names, extensions stripped
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(names),
            Err(err) => return Err(err),
        };
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let path = entry.path();
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// True if `name` resolves to an existing save file
    pub fn exists(&self, name: &str) -> bool {
        self.file_path(name).exists()
    }

    /// Read the snapshot saved under `name`
    pub fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.file_path(name))
    }

    /// Write `snapshot` under `name`, creating the directory on first save
    pub fn write(&self, name: &str, snapshot: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.file_path(name), snapshot)
    }

    fn file_path(&self, name: &str) -> PathBuf {
        if name.contains('.') {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{}.{}", name, SAVE_EXT))
        }
    }
}

use super::{format, DataStore};
use crate::directory::Directory;
use crate::error::{Result, YellowPagesError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(YellowPagesError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Directory> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(Directory::new());
        }
        let text = fs::read_to_string(&self.path).map_err(YellowPagesError::Io)?;
        let directory = format::decode(&text)?;
        debug!(path = %self.path.display(), records = directory.len(), "directory loaded");
        Ok(directory)
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, format::encode(directory)).map_err(YellowPagesError::Io)?;
        debug!(path = %self.path.display(), records = directory.len(), "directory saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

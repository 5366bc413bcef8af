use std::path::{Path, PathBuf};

use crate::domain::Album;

pub mod error;
mod fs;

use error::PersistenceError;

impl Album {
    /// Writes the album as flat text into `dir`, overwriting any previous
    /// save of an album with the same name. Returns the written path.
    pub fn save_to_file(&self, dir: &Path) -> Result<PathBuf, PersistenceError> {
        let path = dir.join(fs::album_file_name(self.name()));
        fs::write_text(&path, &self.to_text())?;
        log::info!("saved album '{}' to {}", self.name(), path.to_string_lossy());
        Ok(path)
    }
}

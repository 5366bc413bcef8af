use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {}: {source}", path.to_string_lossy())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

use std::fmt::Display;

use thiserror::Error;

use crate::domain::AlbumError;

/// Which prompt the session was answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AlbumName,
    Artist,
    Year,
    Duration,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::AlbumName => "album name",
            Stage::Artist => "artist",
            Stage::Year => "year of release",
            Stage::Duration => "track duration",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed while waiting for the {0}")]
    InputClosed(Stage),

    #[error("gave up on the {stage} after {attempts} invalid answers")]
    TooManyAttempts { stage: Stage, attempts: u32 },

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Album(#[from] AlbumError),
}

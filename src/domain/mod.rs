pub mod album;
pub mod duration;

pub use album::{Aggregate, Album, AlbumError};
pub use duration::{DurationParseError, TotalDuration};

use std::io::{self, Write};

use thiserror::Error;

use super::duration::{DurationParseError, TotalDuration, parse_duration};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlbumError {
    #[error("album has {tracks} tracks but {durations} durations")]
    MismatchedLengths { tracks: usize, durations: usize },
}

/// Represent a music album.
///
/// Tracks and durations are parallel lists: the duration at index `i`
/// belongs to the track at index `i`. The album cannot be modified once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    name: String,
    artist: String,
    year: i32,
    tracks: Vec<String>,
    durations: Vec<String>,
}

/// Result of summing the durations of an album
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total: TotalDuration,
    /// entries that contributed nothing, with their track index
    pub malformed: Vec<(usize, DurationParseError)>,
}

impl Album {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        tracks: Vec<String>,
        durations: Vec<String>,
    ) -> Result<Self, AlbumError> {
        if tracks.len() != durations.len() {
            return Err(AlbumError::MismatchedLengths {
                tracks: tracks.len(),
                durations: durations.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            artist: artist.into(),
            year,
            tracks,
            durations,
        })
    }

    /// Builds an album from (track, duration) pairs, which keeps both lists
    /// aligned by construction.
    pub fn from_entries<T, D>(
        name: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        entries: impl IntoIterator<Item = (T, D)>,
    ) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        let (tracks, durations) = entries
            .into_iter()
            .map(|(t, d)| (t.into(), d.into()))
            .unzip();

        Self {
            name: name.into(),
            artist: artist.into(),
            year,
            tracks,
            durations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn durations(&self) -> &[String] {
        &self.durations
    }

    /// Pairs of (track, duration) in track order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tracks
            .iter()
            .zip(&self.durations)
            .map(|(t, d)| (t.as_str(), d.as_str()))
    }

    /// Sums all durations. Malformed entries are skipped and collected
    /// instead of aborting the whole sum.
    pub fn aggregate_duration(&self) -> Aggregate {
        let mut aggregate = Aggregate::default();

        for (index, duration) in self.durations.iter().enumerate() {
            match parse_duration(duration) {
                Ok((minutes, seconds)) => aggregate.total.add(minutes, seconds),
                Err(err) => {
                    log::debug!("skipping duration of track {}: {err}", index + 1);
                    aggregate.malformed.push((index, err));
                }
            }
        }

        aggregate
    }

    /// Prints album details and the total duration.
    ///
    /// A malformed duration is reported right below its track.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Album Name: {}", self.name)?;
        writeln!(out, "Artist: {}", self.artist)?;
        writeln!(out, "Year of Release: {}", self.year)?;
        writeln!(out, "Tracks:")?;

        let Aggregate { total, malformed } = self.aggregate_duration();
        let mut malformed = malformed.iter().map(|(index, _)| *index).peekable();

        for (index, (track, duration)) in self.entries().enumerate() {
            writeln!(out, "{}. {} - Duration: {}", index + 1, track, duration)?;

            if malformed.next_if_eq(&index).is_some() {
                writeln!(out, "Invalid duration format. Please use mm:ss.")?;
            }
        }

        writeln!(out, "Total Duration: {total}.")
    }

    /// Flat-text form used when saving the album to a file
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "Album: {}, Artist: {}, Year: {}\n",
            self.name, self.artist, self.year
        );
        for (track, duration) in self.entries() {
            text.push_str(&format!("{track} - {duration}\n"));
        }
        text
    }
}

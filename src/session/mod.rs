//! Interactive session: show the samples, then build, display and
//! optionally save one album typed in by the user.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use crate::domain::{Album, duration::is_valid_duration};

pub mod console;
pub mod error;
mod samples;

pub use console::Console;
pub use error::{SessionError, Stage};
pub use samples::sample_albums;

const INVALID_YEAR: &str = "Invalid input. Please enter a valid year.";
const INVALID_DURATION: &str = "Invalid duration format. Please use mm:ss.";

pub struct Settings<'a> {
    pub output_dir: &'a Path,
    pub show_samples: bool,
}

/// What the session produced
#[derive(Debug)]
pub struct Outcome {
    pub album: Album,
    /// Where the album was written, if the user asked for it and the write succeeded
    pub saved_to: Option<PathBuf>,
}

pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<Outcome, SessionError> {
    if settings.show_samples {
        for album in sample_albums() {
            album.display(console.output())?;
        }
    }

    let album = read_album(console)?;
    album.display(console.output())?;

    let saved_to = if confirm_save(console)? {
        save(console, &album, settings.output_dir)?
    } else {
        None
    };

    // keep the window open until the user presses enter
    console.read_line()?;

    Ok(Outcome { album, saved_to })
}

pub fn read_album<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Album, SessionError> {
    console.say("Let's create your own album!")?;
    let name = console.ask_required("Enter the album name: ", Stage::AlbumName)?;
    let artist = console.ask_required("Enter the artist's name: ", Stage::Artist)?;
    let year = read_year(console)?;
    let tracks = read_tracks(console)?;
    let durations = read_durations(console, &tracks)?;

    Ok(Album::new(name, artist, year, tracks, durations)?)
}

/// Accepts any integer, surrounding whitespace allowed.
pub fn parse_year(input: &str) -> Option<i32> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse().ok()
}

pub fn read_year<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<i32, SessionError> {
    console.ask_until(
        "Enter the year of release: ",
        Stage::Year,
        INVALID_YEAR,
        parse_year,
    )
}

/// Empty input or `done` (any case) ends the track list.
pub fn is_end_of_tracks(input: &str) -> bool {
    input.is_empty() || input.eq_ignore_ascii_case("done")
}

/// Collects track names until the end marker. Closed input also ends the list.
pub fn read_tracks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<String>, SessionError> {
    console.say("Enter song tracks (type 'done' to finish):")?;

    let mut tracks = Vec::new();
    while let Some(track) = console.ask("Enter track name: ")? {
        if is_end_of_tracks(&track) {
            break;
        }
        tracks.push(track);
    }
    Ok(tracks)
}

/// Asks for one valid duration per track, in track order.
pub fn read_durations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tracks: &[String],
) -> Result<Vec<String>, SessionError> {
    console.say("Enter track durations in the format mm:ss:")?;

    tracks
        .iter()
        .map(|track| {
            console.ask_until(
                &format!("Enter duration for track '{track}': "),
                Stage::Duration,
                INVALID_DURATION,
                |answer| is_valid_duration(answer).then(|| answer.to_string()),
            )
        })
        .collect()
}

/// Single-shot question: only `y` (any case) means yes.
pub fn confirm_save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, SessionError> {
    let answer = console.ask("Do you want to save your album to a file? (y/n): ")?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
}

/// Saves the album and tells the user how it went. A failed write is
/// reported, not returned.
fn save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    album: &Album,
    dir: &Path,
) -> Result<Option<PathBuf>, SessionError> {
    match album.save_to_file(dir) {
        Ok(path) => {
            console.say("Album details saved to file.")?;
            Ok(Some(path))
        }
        Err(err) => {
            log::error!("{err:?}");
            console.say(&format!("An error occurred while saving the album: {err}"))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), None)
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn year_validator() {
        assert_eq!(parse_year("2000"), Some(2000));
        assert_eq!(parse_year("-5"), Some(-5));
        assert_eq!(parse_year("0"), Some(0));
        assert_eq!(parse_year(" 1999 "), Some(1999));

        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("   "), None);
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year("19.5"), None);
    }

    #[test]
    fn read_year_reprompts_until_integer() {
        let mut console = console("\nabc\n19.5\n2002\n");

        assert_eq!(read_year(&mut console).unwrap(), 2002);
        assert_eq!(output(console).matches(INVALID_YEAR).count(), 3);
    }

    #[test]
    fn end_of_tracks_marker() {
        assert!(is_end_of_tracks(""));
        assert!(is_end_of_tracks("done"));
        assert!(is_end_of_tracks("DONE"));
        assert!(is_end_of_tracks("Done"));
        assert!(!is_end_of_tracks("done!"));
        assert!(!is_end_of_tracks("Stan"));
    }

    #[test]
    fn read_tracks_stops_at_done() {
        let mut console = console("Stan\nKim\nDoNe\nnot a track\n");

        assert_eq!(read_tracks(&mut console).unwrap(), vec!["Stan", "Kim"]);
    }

    #[test]
    fn read_tracks_stops_at_empty_line() {
        let mut console = console("\nStan\n");

        assert!(read_tracks(&mut console).unwrap().is_empty());
    }

    #[test]
    fn read_tracks_stops_at_closed_input() {
        let mut console = console("Stan");

        assert_eq!(read_tracks(&mut console).unwrap(), vec!["Stan"]);
    }

    #[test]
    fn read_durations_binds_one_valid_duration_per_track() {
        let tracks = vec!["Stan".to_string(), "Kim".to_string()];
        let mut console = console("6:4\n\n6:44\n100:00\n6:30\n");

        let durations = read_durations(&mut console, &tracks).unwrap();

        assert_eq!(durations, vec!["6:44", "6:30"]);
        let output = output(console);
        assert_eq!(output.matches(INVALID_DURATION).count(), 3);
        assert!(output.contains("Enter duration for track 'Stan': "));
        assert!(output.contains("Enter duration for track 'Kim': "));
    }

    #[test]
    fn read_durations_without_tracks_reads_nothing() {
        let mut console = console("4:50\n");

        assert!(read_durations(&mut console, &[]).unwrap().is_empty());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("4:50"));
    }

    #[test]
    fn read_durations_fails_when_input_closes() {
        let tracks = vec!["Stan".to_string()];
        let mut console = console("bad\n");

        let err = read_durations(&mut console, &tracks).unwrap_err();

        assert!(matches!(err, SessionError::InputClosed(Stage::Duration)));
    }

    #[test]
    fn confirm_save_is_single_shot() {
        assert!(confirm_save(&mut console("y\n")).unwrap());
        assert!(confirm_save(&mut console("Y\n")).unwrap());
        assert!(!confirm_save(&mut console("yes\n")).unwrap());
        assert!(!confirm_save(&mut console("n\n")).unwrap());
        assert!(!confirm_save(&mut console("\ny\n")).unwrap());
        assert!(!confirm_save(&mut console("")).unwrap());
    }

    #[test]
    fn read_album_keeps_tracks_and_durations_aligned() {
        let mut console = console(
            "Kamikaze\nEminem\n2018\nThe Ringer\nGreatest\nLucky You\ndone\n5:37\n3:46\n5:04\n",
        );

        let album = read_album(&mut console).unwrap();

        assert_eq!(album.name(), "Kamikaze");
        assert_eq!(album.artist(), "Eminem");
        assert_eq!(album.year(), 2018);
        assert_eq!(
            album.entries().collect::<Vec<_>>(),
            vec![
                ("The Ringer", "5:37"),
                ("Greatest", "3:46"),
                ("Lucky You", "5:04")
            ]
        );
    }

    #[test]
    fn session_accepts_latin1_track_name() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let settings = Settings {
            output_dir: tmp.path(),
            show_samples: false,
        };
        let input = b"Mine\nMe\n2024\nCaf\xE9\ndone\n4:50\nn\n\n".to_vec();
        let mut console = Console::new(Cursor::new(input), Vec::new(), None);

        let outcome = run_session(&mut console, &settings)?;

        assert_eq!(
            outcome.album.entries().collect::<Vec<_>>(),
            vec![("Caf\u{FFFD}", "4:50")]
        );
        Ok(())
    }

    #[test]
    fn read_album_names_the_stage_that_lost_input() {
        let err = read_album(&mut console("")).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed(Stage::AlbumName)));
        assert_eq!(err.to_string(), "input closed while waiting for the album name");

        let err = read_album(&mut console("Mine\nMe\n")).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed(Stage::Year)));
    }

    #[test]
    fn read_album_with_zero_tracks() {
        let mut console = console("Empty\nNobody\n0\ndone\n");

        let album = read_album(&mut console).unwrap();

        assert!(album.tracks().is_empty());
        assert!(album.durations().is_empty());
    }

    #[test]
    fn session_saves_when_confirmed() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let settings = Settings {
            output_dir: tmp.path(),
            show_samples: false,
        };
        let mut console = console("Kamikaze\nEminem\n2018\nVenom\n\n4:29\ny\n\n");

        let outcome = run_session(&mut console, &settings)?;

        let path = outcome.saved_to.expect("album should be saved");
        assert_eq!(path, tmp.path().join("Kamikaze_album.txt"));
        assert_eq!(
            std::fs::read_to_string(path)?,
            "Album: Kamikaze, Artist: Eminem, Year: 2018\nVenom - 4:29\n"
        );

        let output = output(console);
        assert!(output.contains("Total Duration: 4 minutes and 29 seconds."));
        assert!(output.contains("Album details saved to file."));
        Ok(())
    }

    #[test]
    fn session_skips_saving_when_declined() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let settings = Settings {
            output_dir: tmp.path(),
            show_samples: false,
        };
        let mut console = console("Kamikaze\nEminem\n2018\nVenom\n\n4:29\nn\n");

        let outcome = run_session(&mut console, &settings)?;

        assert!(outcome.saved_to.is_none());
        assert_eq!(std::fs::read_dir(tmp.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn session_reports_failed_save_and_continues() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let missing = tmp.path().join("missing");
        let settings = Settings {
            output_dir: &missing,
            show_samples: false,
        };
        let mut console = console("Kamikaze\nEminem\n2018\n\ny\n\n");

        let outcome = run_session(&mut console, &settings)?;

        assert!(outcome.saved_to.is_none());
        assert!(output(console).contains("An error occurred while saving the album: "));
        Ok(())
    }

    #[test]
    fn session_shows_samples_first() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let settings = Settings {
            output_dir: tmp.path(),
            show_samples: true,
        };
        let mut console = console("Mine\nMe\n2024\ndone\nn\n");

        run_session(&mut console, &settings)?;

        let output = output(console);
        let samples_at = output.find("Album Name: The Marshall Mathers LP").unwrap();
        let prompt_at = output.find("Let's create your own album!").unwrap();
        assert!(samples_at < prompt_at);
        assert!(output.contains("Album Name: The Eminem Show"));
        assert!(output.contains("Album Name: Recovery"));
        Ok(())
    }
}

use crate::domain::Album;

/// Albums shown before the user builds their own
pub fn sample_albums() -> Vec<Album> {
    vec![
        Album::from_entries(
            "The Eminem Show",
            "Eminem",
            2002,
            [
                ("Without Me", "4:50"),
                ("Cleanin' Out My Closet", "4:58"),
                ("Superman", "5:46"),
            ],
        ),
        Album::from_entries(
            "Recovery",
            "Eminem",
            2010,
            [
                ("Not Afraid", "4:08"),
                ("Love The Way You Lie", "4:23"),
                ("No Love", "5:09"),
            ],
        ),
        Album::from_entries(
            "The Marshall Mathers LP",
            "Eminem",
            2000,
            [
                ("The Real Slim Shady", "4:44"),
                ("Stan", "6:44"),
                ("Kim", "6:30"),
            ],
        ),
    ]
}

//! Music genres offered by the artist and venue forms.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A music genre from the fixed directory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre in display order.
    pub const ALL: [Genre; 19] = [
        Genre::Alternative,
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::Funk,
        Genre::HipHop,
        Genre::HeavyMetal,
        Genre::Instrumental,
        Genre::Jazz,
        Genre::MusicalTheatre,
        Genre::Pop,
        Genre::Punk,
        Genre::RnB,
        Genre::Reggae,
        Genre::RockNRoll,
        Genre::Soul,
        Genre::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::Folk => "Folk",
            Genre::Funk => "Funk",
            Genre::HipHop => "Hip-Hop",
            Genre::HeavyMetal => "Heavy Metal",
            Genre::Instrumental => "Instrumental",
            Genre::Jazz => "Jazz",
            Genre::MusicalTheatre => "Musical Theatre",
            Genre::Pop => "Pop",
            Genre::Punk => "Punk",
            Genre::RnB => "R&B",
            Genre::Reggae => "Reggae",
            Genre::RockNRoll => "Rock n Roll",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }

    /// Joins genres into the `", "`-separated form stored in the database.
    pub fn join(genres: &[Genre]) -> String {
        genres
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses a stored genre list.
    ///
    /// Entries are split on `,` and trimmed. Unknown names are skipped and
    /// logged, since rows may predate a change to the genre list.
    pub fn parse_list(stored: &str) -> Vec<Genre> {
        stored
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s.parse::<Genre>() {
                Ok(genre) => Some(genre),
                Err(e) => {
                    tracing::warn!("Skipping stored genre: {}", e);
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a genre name is not in the directory list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre '{0}'")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("Jazz".parse::<Genre>(), Ok(Genre::Jazz));
        assert_eq!("Heavy Metal".parse::<Genre>(), Ok(Genre::HeavyMetal));
        assert_eq!("R&B".parse::<Genre>(), Ok(Genre::RnB));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!("Polka".parse::<Genre>().is_err());
        assert!("jazz".parse::<Genre>().is_err());
    }

    #[test]
    fn test_join_and_parse_list_keep_multi_word_names() {
        let genres = vec![Genre::RockNRoll, Genre::HeavyMetal, Genre::Folk];
        let stored = Genre::join(&genres);
        assert_eq!(stored, "Rock n Roll, Heavy Metal, Folk");
        assert_eq!(Genre::parse_list(&stored), genres);
    }

    #[test]
    fn test_parse_list_tolerates_spacing_and_unknowns() {
        let parsed = Genre::parse_list("Jazz,Blues ,  Polka, ,Soul");
        assert_eq!(parsed, vec![Genre::Jazz, Genre::Blues, Genre::Soul]);
    }

    #[test]
    fn test_parse_list_empty() {
        assert!(Genre::parse_list("").is_empty());
    }
}

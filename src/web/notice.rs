//! One-shot status messages passed through a `?notice=` query parameter.

use serde::Deserialize;

/// Query string carrying a notice key.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Notice shown after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Listed,
    Edited,
    ShowListed,
    VenueDeleted,
    ArtistDeleted,
}

impl Notice {
    pub fn as_str(self) -> &'static str {
        match self {
            Notice::Listed => "listed",
            Notice::Edited => "edited",
            Notice::ShowListed => "show_listed",
            Notice::VenueDeleted => "venue_deleted",
            Notice::ArtistDeleted => "artist_deleted",
        }
    }

    /// Parses a notice key; unknown keys are ignored.
    pub fn parse(key: Option<&str>) -> Option<Notice> {
        match key? {
            "listed" => Some(Notice::Listed),
            "edited" => Some(Notice::Edited),
            "show_listed" => Some(Notice::ShowListed),
            "venue_deleted" => Some(Notice::VenueDeleted),
            "artist_deleted" => Some(Notice::ArtistDeleted),
            _ => None,
        }
    }

    /// Message for the home page.
    pub fn home_message(self) -> Option<String> {
        match self {
            Notice::ShowListed => Some("Your show was listed successfully!".to_string()),
            Notice::VenueDeleted => Some("The venue was deleted successfully.".to_string()),
            Notice::ArtistDeleted => Some("The artist was deleted successfully.".to_string()),
            Notice::Listed | Notice::Edited => None,
        }
    }

    /// Message for a detail page, e.g. `"Venue The Musical Hop was listed successfully!"`.
    pub fn detail_message(self, kind: &str, name: &str) -> Option<String> {
        match self {
            Notice::Listed => Some(format!("{} {} was listed successfully!", kind, name)),
            Notice::Edited => Some(format!("{} {} was edited successfully!", kind, name)),
            _ => None,
        }
    }
}

impl NoticeQuery {
    pub fn notice(&self) -> Option<Notice> {
        Notice::parse(self.notice.as_deref())
    }
}

//! Weekly availability profile of an artist.
//!
//! The profile is a 7-bit set indexed by [`chrono::Weekday`] (Monday = bit 0,
//! Sunday = bit 6). It is stored in the `artists.availability` column as a
//! `SMALLINT` in the range `0..=127`.

use chrono::Weekday;
use serde::Serialize;

/// All seven weekdays in Monday → Sunday order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Phrase used when every day is available.
pub const ALL_WEEK_PHRASE: &str = "available all week";

/// Phrase used when no day is available.
pub const UNSPECIFIED_PHRASE: &str =
    "haven't specified their weekly availability yet, please contact them directly";

/// Predicate used in sentences about an artist with no available day.
pub const UNSPECIFIED_PREDICATE: &str =
    "has not specified their weekly availability yet, please contact them directly";

const FULL_MASK: u8 = 0b0111_1111;

/// Set of weekdays on which an artist accepts bookings.
///
/// Every day is always defined: a day is either in the set or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Availability(u8);

impl Availability {
    /// Available on every day of the week.
    pub const ALL: Availability = Availability(FULL_MASK);

    /// Available on no day.
    pub const NONE: Availability = Availability(0);

    /// Builds a profile from a bitmask, ignoring bits above Sunday.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & FULL_MASK)
    }

    /// Builds a profile from seven Monday → Sunday flags.
    pub fn from_flags(flags: [bool; 7]) -> Self {
        flags
            .iter()
            .zip(WEEK)
            .filter(|(available, _)| **available)
            .fold(Self::NONE, |acc, (_, day)| acc.with(day, true))
    }

    /// Returns the profile with `day` switched on or off.
    pub fn with(self, day: Weekday, available: bool) -> Self {
        let bit = 1u8 << day.num_days_from_monday();
        if available {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_available(self, day: Weekday) -> bool {
        self.0 & (1u8 << day.num_days_from_monday()) != 0
    }

    pub fn is_all_week(self) -> bool {
        self.0 == FULL_MASK
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Monday → Sunday flags.
    pub fn flags(self) -> [bool; 7] {
        WEEK.map(|day| self.is_available(day))
    }

    /// Available days in Monday → Sunday order.
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.is_available(*day))
    }

    /// Human-readable description of the profile.
    ///
    /// - every day: `"available all week"`
    /// - no day: [`UNSPECIFIED_PHRASE`]
    /// - otherwise: `"available on Monday, Wednesday and Friday"`
    pub fn summary(self) -> String {
        if self.is_all_week() {
            return ALL_WEEK_PHRASE.to_string();
        }
        if self.is_empty() {
            return UNSPECIFIED_PHRASE.to_string();
        }

        let names: Vec<&str> = self.days().map(weekday_name).collect();
        let listed = match names.split_last() {
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
            None => String::new(),
        };

        format!("available on {listed}")
    }

    /// Full sentence about `subject`, e.g. `"Guns N Petals is available on Monday"`.
    pub fn sentence(self, subject: &str) -> String {
        if self.is_empty() {
            format!("{subject} {UNSPECIFIED_PREDICATE}")
        } else {
            format!("{subject} is {}", self.summary())
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::ALL
    }
}

/// Per-day view used by JSON responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WeekFlags {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl From<Availability> for WeekFlags {
    fn from(availability: Availability) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] =
            availability.flags();
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

/// English name of a weekday, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

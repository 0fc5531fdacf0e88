//! Show admissibility check.
//!
//! Decides whether an artist may be booked at a proposed start time. The
//! checks run in a fixed order and the first failure wins:
//!
//! 1. the start time must not be in the past
//! 2. the artist must not already have a show on the same calendar date
//! 3. the artist must be available on that weekday
//!
//! The conflict check is an optimistic pre-check; the `shows` table carries
//! a unique index on `(artist_id, start_time::date)` that settles races.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

use crate::domain::availability::weekday_name;
use crate::domain::entities::{Artist, Show};

/// Source of the current naive local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the server's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Reason a proposed show was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulingError {
    #[error("Shows cannot be booked in the past ({proposed} is before {now})")]
    PastDate {
        proposed: NaiveDateTime,
        now: NaiveDateTime,
    },

    #[error("{artist} already has a show booked on {date}")]
    DoubleBooked {
        artist: String,
        date: NaiveDate,
        existing_show_id: i64,
    },

    #[error("{artist} is not available on {}; {guidance}", day_name(.weekday))]
    UnavailableDay {
        artist: String,
        weekday: Weekday,
        guidance: String,
    },
}

fn day_name(weekday: &Weekday) -> &'static str {
    weekday_name(*weekday)
}

impl SchedulingError {
    /// Stable identifier of the failed check.
    pub fn kind(&self) -> &'static str {
        match self {
            SchedulingError::PastDate { .. } => "past_date",
            SchedulingError::DoubleBooked { .. } => "double_booked",
            SchedulingError::UnavailableDay { .. } => "unavailable_day",
        }
    }
}

/// Checks whether `artist` may play a show starting at `proposed`.
///
/// `existing` holds the shows already booked for this artist; shows of other
/// artists must not be passed in. `now` is read once by the caller.
///
/// # Errors
///
/// - [`SchedulingError::PastDate`] if `proposed < now`
/// - [`SchedulingError::DoubleBooked`] if an existing show falls on the same date
/// - [`SchedulingError::UnavailableDay`] if the artist is not available on that weekday
pub fn validate(
    artist: &Artist,
    proposed: NaiveDateTime,
    existing: &[Show],
    now: NaiveDateTime,
) -> Result<(), SchedulingError> {
    if proposed < now {
        return Err(SchedulingError::PastDate { proposed, now });
    }

    let date = proposed.date();
    if let Some(conflict) = existing.iter().find(|s| s.start_time.date() == date) {
        return Err(SchedulingError::DoubleBooked {
            artist: artist.name.clone(),
            date,
            existing_show_id: conflict.id,
        });
    }

    let weekday = proposed.weekday();
    if !artist.availability.is_available(weekday) {
        return Err(SchedulingError::UnavailableDay {
            artist: artist.name.clone(),
            weekday,
            guidance: artist.availability_sentence(),
        });
    }

    Ok(())
}

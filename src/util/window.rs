//! Date window resolution for scheduled events.
//!
//! This module turns the free-text start/end strings users type into the
//! `/schedule` command into a validated pair of timezone-aware instants.
//! Inputs are partially specified more often than not: users give one end
//! of the window, or neither, and expect the bot to fill in something
//! sensible. The resolver handles that defaulting, attaches the configured
//! timezone, and enforces ordering before any instant leaves this module.
//!
//! The resolver is a pure function of its inputs. It never reads the system
//! clock; callers pass `now` explicitly, which keeps every resolution
//! deterministic and testable.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

/// Date-time formats accepted for user input, tried in order.
const DATETIME_FORMATS: [&str; 2] = ["%H:%M %d.%m.%Y", "%H:%M %d-%m-%Y"];

/// Date-only formats accepted for user input, tried after the date-time
/// formats. A match implies the default time-of-day below.
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%d.%m.%Y"];

/// Time-of-day implied by a date-only input: end of day (23:59).
///
/// A fixed sentinel is required because the accepted formats allow dates
/// without a time. End of day keeps a bare date usable as an event end
/// ("until the 20th" means through the 20th, not until it starts).
const DATE_ONLY_TIME: (u32, u32) = (23, 59);

/// Time-of-day used when the resolver derives a missing start: 08:00.
const DEFAULT_START_TIME: (u32, u32) = (8, 0);

/// Time-of-day used when the resolver derives a missing end: 23:59.
const DEFAULT_END_TIME: (u32, u32) = (23, 59);

/// Errors produced while resolving a date window.
///
/// Every variant is a plain return value reported synchronously to the
/// caller; nothing is retried internally. The `Display` form of each user
/// input variant is the exact message shown to the Discord user, so the
/// command layer can reply with `err.to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The configured zone identifier does not name a known timezone.
    ///
    /// Raised at resolver construction, never during resolution. Treated
    /// as fatal at startup since every window depends on the zone.
    #[error("Unknown timezone identifier: {0}")]
    InvalidTimeZone(String),

    /// The supplied start text matches none of the accepted formats.
    #[error("Start date is invalid. Use HH:MM DD.MM.YYYY, HH:MM DD-MM-YYYY, DD-MM-YYYY or DD.MM.YYYY.")]
    InvalidStart,

    /// The supplied end text matches none of the accepted formats.
    #[error("End date is invalid. Use HH:MM DD.MM.YYYY, HH:MM DD-MM-YYYY, DD-MM-YYYY or DD.MM.YYYY.")]
    InvalidEnd,

    /// The resolved start is not strictly after `now`.
    #[error("Start time must be in the future.")]
    StartNotFuture,

    /// The resolved end is not strictly after the resolved start.
    #[error("End time must be after start time.")]
    EndBeforeStart,
}

/// A validated event window.
///
/// Only constructed once both endpoints parsed (or were defaulted), the
/// start lies in the future, and the end is strictly after the start. Both
/// instants carry the resolver's timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Resolves optional start/end text into a validated [`ResolvedWindow`].
///
/// The resolver holds no mutable state; its only configuration is the
/// timezone attached to every instant it produces. It is therefore safe to
/// share across concurrent interaction handlers without synchronization.
#[derive(Debug, Clone)]
pub struct DateWindowResolver {
    tz: Tz,
}

impl DateWindowResolver {
    /// Creates a resolver for the given zone identifier.
    ///
    /// # Arguments
    /// - `zone_name` - IANA timezone name, e.g. `Europe/Helsinki`
    ///
    /// # Returns
    /// - `Ok(DateWindowResolver)` - Zone identifier resolved to a known zone
    /// - `Err(ResolutionError::InvalidTimeZone)` - Unknown zone identifier
    pub fn new(zone_name: &str) -> Result<Self, ResolutionError> {
        let tz = zone_name
            .parse::<Tz>()
            .map_err(|_| ResolutionError::InvalidTimeZone(zone_name.to_string()))?;

        Ok(Self { tz })
    }

    /// Returns the configured timezone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Parses user-supplied date text into an instant in the configured zone.
    ///
    /// Each accepted format is tried in order and the first one that consumes
    /// the entire string wins; partial matches and trailing characters fail.
    /// Date-only inputs imply 23:59 as their time-of-day.
    ///
    /// Attaching the zone is a label operation on the parsed wall-clock
    /// value, not a conversion. Wall-clock times that fall inside a
    /// daylight-saving gap do not exist in the zone and are rejected;
    /// ambiguous times from the autumn overlap resolve to the earlier
    /// instant.
    ///
    /// # Arguments
    /// - `text` - Raw date string from the user
    ///
    /// # Returns
    /// - `Some(DateTime<Tz>)` - First format that parsed the full string
    /// - `None` - No accepted format matched
    pub fn parse(&self, text: &str) -> Option<DateTime<Tz>> {
        for format in DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
                return self.attach(parsed);
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return self.instant_at(date, DATE_ONLY_TIME);
            }
        }

        None
    }

    /// Resolves optional start/end text into a validated window.
    ///
    /// Missing endpoints are filled with fixed defaults derived from
    /// calendar-day arithmetic (never fixed 24-hour offsets, which would
    /// drift across daylight-saving transitions):
    ///
    /// - neither supplied: tomorrow 08:00 until the same day 23:59,
    ///   relative to `now`'s calendar date
    /// - only end supplied: start is the previous calendar day at 08:00,
    ///   regardless of the end's own time-of-day
    /// - only start supplied: end is the next calendar day at 23:59
    /// - both supplied: both parsed values are used verbatim
    ///
    /// Validation is uniform across all four cases and reports the first
    /// violated condition: the start must be strictly after `now`, and the
    /// end strictly after the start.
    ///
    /// # Arguments
    /// - `start_text` - Optional raw start string from the user
    /// - `end_text` - Optional raw end string from the user
    /// - `now` - Current instant in the configured zone, injected by the
    ///   caller
    ///
    /// # Returns
    /// - `Ok(ResolvedWindow)` - Both endpoints resolved and validated
    /// - `Err(ResolutionError::InvalidStart)` - Start text matched no format
    /// - `Err(ResolutionError::InvalidEnd)` - End text matched no format
    /// - `Err(ResolutionError::StartNotFuture)` - Resolved start not after `now`
    /// - `Err(ResolutionError::EndBeforeStart)` - Resolved end not after start
    pub fn resolve_window(
        &self,
        start_text: Option<&str>,
        end_text: Option<&str>,
        now: DateTime<Tz>,
    ) -> Result<ResolvedWindow, ResolutionError> {
        let (start, end) = match (start_text, end_text) {
            (Some(start_text), Some(end_text)) => {
                let start = self
                    .parse(start_text)
                    .ok_or(ResolutionError::InvalidStart)?;
                let end = self.parse(end_text).ok_or(ResolutionError::InvalidEnd)?;

                (start, end)
            }
            (Some(start_text), None) => {
                let start = self
                    .parse(start_text)
                    .ok_or(ResolutionError::InvalidStart)?;
                let end = start
                    .date_naive()
                    .checked_add_days(Days::new(1))
                    .and_then(|date| self.instant_at(date, DEFAULT_END_TIME))
                    .ok_or(ResolutionError::InvalidEnd)?;

                (start, end)
            }
            (None, Some(end_text)) => {
                let end = self.parse(end_text).ok_or(ResolutionError::InvalidEnd)?;
                let start = end
                    .date_naive()
                    .checked_sub_days(Days::new(1))
                    .and_then(|date| self.instant_at(date, DEFAULT_START_TIME))
                    .ok_or(ResolutionError::InvalidStart)?;

                (start, end)
            }
            (None, None) => {
                let tomorrow = now
                    .date_naive()
                    .checked_add_days(Days::new(1))
                    .ok_or(ResolutionError::InvalidStart)?;
                let start = self
                    .instant_at(tomorrow, DEFAULT_START_TIME)
                    .ok_or(ResolutionError::InvalidStart)?;
                let end = self
                    .instant_at(tomorrow, DEFAULT_END_TIME)
                    .ok_or(ResolutionError::InvalidEnd)?;

                (start, end)
            }
        };

        if start <= now {
            return Err(ResolutionError::StartNotFuture);
        }
        if end <= start {
            return Err(ResolutionError::EndBeforeStart);
        }

        Ok(ResolvedWindow { start, end })
    }

    /// Builds an instant at the given date and (hour, minute) in the
    /// configured zone. Returns `None` for times inside a DST gap.
    fn instant_at(&self, date: NaiveDate, time: (u32, u32)) -> Option<DateTime<Tz>> {
        let (hour, minute) = time;

        self.attach(date.and_hms_opt(hour, minute, 0)?)
    }

    /// Labels a naive wall-clock value with the configured zone.
    ///
    /// Ambiguous times (autumn overlap) resolve to the earlier instant;
    /// nonexistent times (spring gap) yield `None`.
    fn attach(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        self.tz.from_local_datetime(&naive).earliest()
    }
}

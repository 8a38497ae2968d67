// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier is zero or negative.
    InvalidIdentifier {
        /// The field carrying the identifier.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// Subject code is empty after trimming.
    InvalidSubjectCode(String),
    /// A display name is empty.
    InvalidName {
        /// The field carrying the name.
        field: &'static str,
    },
    /// Management period year is outside 2000..=2100.
    InvalidPeriodYear(u16),
    /// Management period term is not 1 or 2.
    InvalidPeriodTerm(u8),
    /// Management period end date does not follow its start date.
    InvalidPeriodDates {
        /// The start date.
        start_date: time::Date,
        /// The end date.
        end_date: time::Date,
    },
    /// Timeslot end time does not follow its start time.
    InvalidTimeslotRange {
        /// The start time.
        start_time: time::Time,
        /// The end time.
        end_time: time::Time,
    },
    /// An assignment was requested with no slots.
    EmptySlotList,
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a clock time.
    TimeFormatError {
        /// The formatting error message.
        error: String,
    },
    /// Failed to parse a clock time from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Returns the request field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier { field, .. } | Self::InvalidName { field } => field,
            Self::InvalidSubjectCode(_) => "subject_code",
            Self::InvalidPeriodYear(_) => "year",
            Self::InvalidPeriodTerm(_) => "term",
            Self::InvalidPeriodDates { .. } => "end_date",
            Self::InvalidTimeslotRange { .. } => "end_time",
            Self::EmptySlotList => "slots",
            Self::DateParseError { .. } => "date",
            Self::TimeFormatError { .. } | Self::TimeParseError { .. } => "time",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { field, value } => {
                write!(f, "Invalid {field}: identifiers must be positive, got {value}")
            }
            Self::InvalidSubjectCode(msg) => write!(f, "Invalid subject code: {msg}"),
            Self::InvalidName { field } => write!(f, "Invalid {field}: name cannot be empty"),
            Self::InvalidPeriodYear(year) => {
                write!(
                    f,
                    "Management period year must be between 2000 and 2100, got {year}"
                )
            }
            Self::InvalidPeriodTerm(term) => {
                write!(f, "Management period term must be 1 or 2, got {term}")
            }
            Self::InvalidPeriodDates {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Management period end date {end_date} must be after start date {start_date}"
                )
            }
            Self::InvalidTimeslotRange {
                start_time,
                end_time,
            } => {
                write!(
                    f,
                    "Timeslot end time {end_time} must be after start time {start_time}"
                )
            }
            Self::EmptySlotList => write!(f, "At least one slot is required"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeFormatError { error } => write!(f, "Failed to format time: {error}"),
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

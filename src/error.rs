//! Error types for the amlich crate.

use crate::vietnamese::Month;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all fallible operations in the amlich crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested month (with its leap flag) does not exist in that lunar
    /// year, e.g. a leap month asked of a year without one.
    #[error("lunar year {year} has no month {month:?}")]
    UnrepresentableLunarDate {
        /// The lunar year label that was searched.
        year: i32,
        /// The month that could not be found.
        month: Month,
    },

    /// A UTC offset could not be parsed from text.
    #[error("invalid UTC offset: {input:?}")]
    InvalidUtcOffset {
        /// The text that failed to parse.
        input: String,
    },
}

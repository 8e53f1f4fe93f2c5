//! Error types for the schedule domain
//!
//! Parsing and validation never default silently: every failure is reported
//! with the token or line that caused it so hand-edited files stay debuggable.

/// Errors raised by date parsing, priority classification and record parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchError {
    /// The date token has an unsupported length or non-digit characters.
    #[error("invalid date format '{token}' (use YYYYMMDD, MMDD or MDD)")]
    InvalidDateFormat {
        /// The rejected token.
        token: String,
    },

    /// The date is well formed but does not exist on the calendar.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The priority is outside [-20, 20) or is not a known mnemonic.
    #[error("invalid priority '{token}' (use e, h, n, l or an integer p with -20 <= p < 20)")]
    InvalidPriority {
        /// The rejected token.
        token: String,
    },

    /// A stored line could not be split into a record.
    #[error("malformed record '{line}': {reason}")]
    MalformedRecord {
        /// The offending line, without its line terminator.
        line: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl SchError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        SchError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchError>;

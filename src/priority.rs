//! Niceness-style priorities and urgency classification
//!
//! Lower values are more urgent, as with process niceness. Valid values lie
//! in the half-open range [-20, 20) and fall into four tiers, each with its
//! own look-ahead window.

use crate::error::{Result, SchError};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

pub const PRIORITY_RANGE: Range<i32> = -20..20;
pub const PRIORITY_EXTREME_RANGE: Range<i32> = -20..-15;
pub const PRIORITY_HIGH_RANGE: Range<i32> = -15..-5;
pub const PRIORITY_NORMAL_RANGE: Range<i32> = -5..6;
pub const PRIORITY_LOW_RANGE: Range<i32> = 6..20;

/// Mnemonic aliases accepted from user input
pub const PRIORITY_TABLE: [(&str, i32); 4] = [("e", -18), ("h", -10), ("n", 0), ("l", 10)];

/// Urgency tier of a priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityTier {
    Extreme,
    High,
    Normal,
    Low,
}

impl PriorityTier {
    pub fn of(priority: i32) -> Result<Self> {
        if PRIORITY_EXTREME_RANGE.contains(&priority) {
            Ok(PriorityTier::Extreme)
        } else if PRIORITY_HIGH_RANGE.contains(&priority) {
            Ok(PriorityTier::High)
        } else if PRIORITY_NORMAL_RANGE.contains(&priority) {
            Ok(PriorityTier::Normal)
        } else if PRIORITY_LOW_RANGE.contains(&priority) {
            Ok(PriorityTier::Low)
        } else {
            Err(SchError::InvalidPriority {
                token: priority.to_string(),
            })
        }
    }

    /// Days ahead within which a task of this tier is urgent; `None` = always.
    pub fn window_days(self) -> Option<i64> {
        match self {
            PriorityTier::Extreme => None,
            PriorityTier::High => Some(30),
            PriorityTier::Normal => Some(7),
            PriorityTier::Low => Some(3),
        }
    }

    pub fn is_urgent(self, days_until: i64) -> bool {
        self.window_days().is_none_or(|window| days_until <= window)
    }
}

/// A priority value known to lie in [-20, 20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(i32);

impl Priority {
    pub fn new(value: i32) -> Result<Self> {
        PriorityTier::of(value).map(|_| Priority(value))
    }

    /// Parse user input: a mnemonic (`e`, `h`, `n`, `l`, any case) or an integer.
    pub fn from_input(token: &str) -> Result<Self> {
        let lowered = token.trim().to_lowercase();
        if let Some(&(_, value)) = PRIORITY_TABLE.iter().find(|(key, _)| *key == lowered) {
            return Ok(Priority(value));
        }
        token.parse()
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn tier(self) -> PriorityTier {
        match self.0 {
            v if PRIORITY_EXTREME_RANGE.contains(&v) => PriorityTier::Extreme,
            v if PRIORITY_HIGH_RANGE.contains(&v) => PriorityTier::High,
            v if PRIORITY_NORMAL_RANGE.contains(&v) => PriorityTier::Normal,
            _ => PriorityTier::Low,
        }
    }

    pub fn is_urgent(self, days_until: i64) -> bool {
        self.tier().is_urgent(days_until)
    }
}

/// Parses a raw signed integer only; mnemonics are handled by `from_input`.
impl FromStr for Priority {
    type Err = SchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SchError::InvalidPriority {
            token: s.to_string(),
        };
        let value: i32 = s.trim().parse().map_err(|_| invalid())?;
        Priority::new(value).map_err(|_| invalid())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decide whether a task with `priority` due in `days_until` days is urgent.
///
/// `days_until` is negative for overdue tasks. Priorities outside [-20, 20)
/// fail with `InvalidPriority` rather than being clamped to a tier.
pub fn is_urgent(priority: i32, days_until: i64) -> Result<bool> {
    Ok(PriorityTier::of(priority)?.is_urgent(days_until))
}

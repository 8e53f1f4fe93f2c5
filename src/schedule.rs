//! A single schedule entry and its one-line file representation
//!
//! Stored lines look like `0 20140807 -18 アルゴリズム 課題提出`:
//! done flag, date, priority, then the description which may contain spaces.

use crate::error::{Result, SchError};
use crate::ja_date::{DISPLAY_TEMPLATE, JaDate, RECORD_TEMPLATE};
use crate::priority::Priority;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleRecord {
    done: bool,
    date: JaDate,
    priority: Priority,
    description: String,
}

impl ScheduleRecord {
    /// Build a record from already validated parts.
    ///
    /// The description must be non-empty, fit on one line and carry no
    /// trailing whitespace, so that the stored form reads back unchanged.
    pub fn new(
        done: bool,
        date: JaDate,
        priority: Priority,
        description: impl Into<String>,
    ) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(SchError::malformed(&description, "description is empty"));
        }
        if description.contains(['\n', '\r']) {
            return Err(SchError::malformed(
                &description,
                "description contains a line break",
            ));
        }
        if description.ends_with(char::is_whitespace) {
            return Err(SchError::malformed(
                &description,
                "description ends with whitespace",
            ));
        }
        Ok(Self {
            done,
            date,
            priority,
            description,
        })
    }

    /// Parse one line of the schedule file.
    ///
    /// `today` resolves abbreviated dates; stored files normally use the
    /// 8-digit form, which does not depend on it.
    pub fn from_record(line: &str, today: JaDate) -> Result<Self> {
        let line = line.trim_end();
        let mut fields = line.splitn(4, ' ');
        let (Some(done), Some(date), Some(priority), Some(description)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(SchError::malformed(
                line,
                "expected '<0|1> <date> <priority> <description>'",
            ));
        };

        let done = match done {
            "0" => false,
            "1" => true,
            other => {
                return Err(SchError::malformed(
                    line,
                    format!("done flag must be 0 or 1, got '{}'", other),
                ));
            }
        };
        let date = JaDate::parse_flexible(date, today)?;
        let priority: Priority = priority.parse()?;
        Self::new(done, date, priority, description).map_err(|e| match e {
            SchError::MalformedRecord { reason, .. } => SchError::malformed(line, reason),
            other => other,
        })
    }

    /// Create a new, not yet done record from strings typed by the user.
    ///
    /// The priority may be a mnemonic (`e`, `h`, `n`, `l`) or an integer.
    pub fn from_input(date: &str, priority: &str, description: &str, today: JaDate) -> Result<Self> {
        let date = JaDate::parse_flexible(date.trim(), today)?;
        let priority = Priority::from_input(priority)?;
        Self::new(false, date, priority, description.trim())
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn date(&self) -> JaDate {
        self.date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Line written to the schedule file (no terminator)
    pub fn to_record(&self) -> String {
        self.to_string()
    }

    /// Fields shown to the user: date with weekday, priority, description
    pub fn fields(&self) -> [String; 3] {
        [
            self.date.format(DISPLAY_TEMPLATE),
            self.priority.to_string(),
            self.description.clone(),
        ]
    }

    /// Overdue records are always urgent.
    pub fn is_urgent(&self, today: JaDate) -> bool {
        self.priority.is_urgent(self.date.delta(&today))
    }
}

impl fmt::Display for ScheduleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            u8::from(self.done),
            self.date.format(RECORD_TEMPLATE),
            self.priority,
            self.description
        )
    }
}

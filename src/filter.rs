//! Composite record filter
//!
//! A filter is an ordered list of criteria combined with logical AND, plus a
//! whitelist of file positions (0-based) shown regardless of the criteria.

use crate::ja_date::JaDate;
use crate::schedule::ScheduleRecord;

/// A single condition a record must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Dated today or later
    NotPast,
    /// Urgent according to its priority tier
    UrgentOnly,
    /// Not marked done
    NotDone,
}

impl Criterion {
    pub fn matches(self, record: &ScheduleRecord, today: JaDate) -> bool {
        match self {
            Criterion::NotPast => record.date() >= today,
            Criterion::UrgentOnly => record.is_urgent(today),
            Criterion::NotDone => !record.done(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleFilter {
    today: JaDate,
    criteria: Vec<Criterion>,
    whitelist: Vec<usize>,
}

impl ScheduleFilter {
    /// An empty filter that accepts everything
    pub fn new(today: JaDate) -> Self {
        Self {
            today,
            criteria: Vec::new(),
            whitelist: Vec::new(),
        }
    }

    /// Filter used by the listing: upcoming, urgent and undone records,
    /// with the last two criteria switched off by the show-all/show-done flags.
    pub fn for_listing(today: JaDate, show_all: bool, show_done: bool) -> Self {
        let mut filter = Self::new(today).with(Criterion::NotPast);
        if !show_all {
            filter = filter.with(Criterion::UrgentOnly);
        }
        if !show_done {
            filter = filter.with(Criterion::NotDone);
        }
        filter
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Always accept the record at `position` in the file.
    pub fn allow(mut self, position: usize) -> Self {
        self.whitelist.push(position);
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn whitelist(&self) -> &[usize] {
        &self.whitelist
    }

    /// True if `record` satisfies every criterion.
    pub fn matches(&self, record: &ScheduleRecord) -> bool {
        self.criteria.iter().all(|c| c.matches(record, self.today))
    }

    /// True if `record`, found at `position` in the file, is whitelisted or
    /// satisfies every criterion.
    pub fn accepts(&self, position: usize, record: &ScheduleRecord) -> bool {
        self.whitelist.contains(&position) || self.matches(record)
    }
}

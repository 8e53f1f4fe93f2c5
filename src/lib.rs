//! sch - command-line schedule/TODO tracker
//!
//! Tasks are stored one per line in a flat text file with a done flag, a date
//! and a niceness-style priority. Each run filters the tasks down to the ones
//! worth seeing today and prints them as a column-aligned table.
//!
//! # Architecture
//!
//! - **Domain layer**: `ja_date`, `priority`, `schedule`, `filter`, `table` -
//!   date inference, urgency classification and width-aware rendering
//! - **Persistence layer**: `storage` - line-based file with atomic rewrite
//! - **Application layer**: `Scheduler` and the per-command `handlers`
//!
//! # Example
//!
//! ```no_run
//! use sch::{JaDate, ListOptions, Scheduler};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let scheduler = Scheduler::new("schedule-list", JaDate::today())?;
//!     print!("{}", scheduler.handle_show(ListOptions::default()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod ja_date;
pub mod priority;
pub mod schedule;
pub mod storage;
pub mod table;

use anyhow::Result;
use std::path::Path;

pub use config::Config;
pub use error::SchError;
pub use filter::{Criterion, ScheduleFilter};
pub use ja_date::JaDate;
pub use priority::{Priority, PriorityTier, is_urgent};
pub use schedule::ScheduleRecord;
pub use storage::Storage;
pub use table::{FieldTable, make_field_table, str_width};

use table::HEADER_LABELS;

/// Headline printed above the listing
pub const HEADLINE_TEMPLATE: &str = "*** {year}年{month}月{day}日　{weekday}曜日 ***";

/// Which records the listing includes besides upcoming urgent undone ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include records that are not urgent yet
    pub show_all: bool,
    /// Include records already marked done
    pub show_done: bool,
}

/// Schedule loaded from one file, with the date treated as today
///
/// Commands are implemented in the `handlers` module, one file per command.
pub struct Scheduler {
    pub(crate) records: Vec<ScheduleRecord>,
    pub(crate) storage: Storage,
    pub(crate) today: JaDate,
    pub(crate) show_headline: bool,
}

impl Scheduler {
    /// Load the schedule file at `storage_path`
    ///
    /// # Example
    /// ```no_run
    /// # use sch::{JaDate, Scheduler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let scheduler = Scheduler::new("schedule-list", JaDate::today())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: impl AsRef<Path>, today: JaDate) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let records = storage.load(today)?;
        Ok(Self {
            records,
            storage,
            today,
            show_headline: true,
        })
    }

    pub fn with_headline(mut self, show_headline: bool) -> Self {
        self.show_headline = show_headline;
        self
    }

    pub fn records(&self) -> &[ScheduleRecord] {
        &self.records
    }

    pub fn today(&self) -> JaDate {
        self.today
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Save `records` and adopt them only once the file has been replaced.
    fn commit(&mut self, mut records: Vec<ScheduleRecord>) -> Result<()> {
        self.storage.save(&mut records)?;
        self.records = records;
        Ok(())
    }

    /// Render the headline and the records accepted by `filter`, sorted by date.
    ///
    /// Rows start with the record's 1-based position in the file and a mark:
    /// `*` for the record at position `highlight` (0-based), `d` for done records.
    pub(crate) fn render_listing(&self, filter: &ScheduleFilter, highlight: Option<usize>) -> String {
        let mut out = String::new();
        if self.show_headline {
            out.push_str(&self.today.format(HEADLINE_TEMPLATE));
            out.push('\n');
        }

        let mut positioned: Vec<(usize, &ScheduleRecord)> =
            self.records.iter().enumerate().collect();
        positioned.sort_by_key(|(_, r)| r.date());

        let table = make_field_table(
            positioned,
            |&(position, r)| filter.accepts(position, r),
            |(position, r)| {
                let mark = if highlight == Some(position) {
                    "*"
                } else if r.done() {
                    "d"
                } else {
                    ""
                };
                let mut row = vec![(position + 1).to_string(), mark.to_string()];
                row.extend(r.fields());
                row
            },
        );
        out.push_str(&table.render(&HEADER_LABELS));
        out
    }
}

//! Add handler: create a record from user input

use crate::filter::ScheduleFilter;
use crate::schedule::ScheduleRecord;
use crate::{ListOptions, Scheduler};
use anyhow::{Context, Result};
use tracing::info;

impl Scheduler {
    /// Adds a record, saves the file and returns the listing with the new
    /// record marked `*` (shown even if the filter would hide it).
    ///
    /// `date` accepts `YYYYMMDD`, `MMDD` or `MDD`; `priority` accepts
    /// `e`, `h`, `n`, `l` or an integer in [-20, 20).
    pub fn handle_add(
        &mut self,
        date: &str,
        priority: &str,
        todo: &str,
        options: ListOptions,
    ) -> Result<String> {
        let record = ScheduleRecord::from_input(date, priority, todo, self.today)
            .context("Failed to add schedule")?;
        info!(record = %record, "adding schedule");

        let mut records = self.records.clone();
        records.push(record.clone());
        self.commit(records)?;

        // the sort on save is stable, so the new record follows any others on its date
        let position = self
            .records
            .iter()
            .filter(|r| r.date() <= record.date())
            .count()
            .saturating_sub(1);

        let filter = ScheduleFilter::for_listing(self.today, options.show_all, options.show_done)
            .allow(position);
        Ok(self.render_listing(&filter, Some(position)))
    }
}

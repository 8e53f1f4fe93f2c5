//! Done handler: toggle the done flag of numbered records

use crate::{ListOptions, Scheduler};
use anyhow::{Result, bail};
use tracing::info;

impl Scheduler {
    /// Toggles the done flag of the records at the given 1-based positions
    /// (as shown in the first column of the listing), then saves.
    ///
    /// Nothing is changed if any number is out of range.
    pub fn handle_done(&mut self, numbers: &[usize], options: ListOptions) -> Result<String> {
        if numbers.is_empty() {
            bail!("No record numbers given. Specify at least one number from the listing.");
        }

        let mut numbers = numbers.to_vec();
        numbers.sort_unstable();
        numbers.dedup();

        let count = self.records.len();
        if let Some(&bad) = numbers.iter().find(|&&n| n == 0 || n > count) {
            bail!("No schedule numbered {} (valid: 1..={})", bad, count);
        }

        let mut records = self.records.clone();
        for number in numbers {
            let record = &mut records[number - 1];
            record.toggle_done();
            info!(number, done = record.done(), record = %record, "toggled schedule");
        }
        self.commit(records)?;

        Ok(self.handle_show(options))
    }
}

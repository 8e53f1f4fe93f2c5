//! Show handler: the default listing

use crate::filter::ScheduleFilter;
use crate::{ListOptions, Scheduler};
use tracing::debug;

impl Scheduler {
    /// Lists upcoming records, urgent and undone unless `options` widen it.
    pub fn handle_show(&self, options: ListOptions) -> String {
        let filter = ScheduleFilter::for_listing(self.today, options.show_all, options.show_done);
        debug!(criteria = ?filter.criteria(), "showing schedule");
        self.render_listing(&filter, None)
    }
}

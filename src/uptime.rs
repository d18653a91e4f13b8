//! The uptime calculator: merges charger timelines into per-station totals.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::report::{Report, StationId, interval::AvailabilityInterval};

/// Compute the aggregate uptime percentage for every station in the report.
///
/// Chargers without availability entries contribute nothing. Station ids come
/// out in ascending order, ready for printing.
pub fn calculate(report: &Report) -> BTreeMap<StationId, i64> {
    report
        .stations
        .iter()
        .map(|(station_id, charger_ids)| {
            let mut accumulator = UptimeAccumulator::default();
            for charger_id in charger_ids {
                let Some(timeline) = report.availability.get(charger_id) else {
                    continue;
                };
                // Reports may arrive in any order.
                for interval in timeline.iter().copied().sorted_unstable() {
                    accumulator.observe(interval);
                }
            }
            (*station_id, accumulator.percentage())
        })
        .collect()
}

/// One linear time-accounting pass over a station's reports.
///
/// `last_end_time` is carried across the station's chargers, not reset per
/// charger: the silence between the last report of one charger and the first
/// report of the next is charged to the total as unreported time.
/// Compatibility-critical quirk of the aggregate, keep as-is.
#[derive(Copy, Clone, Default)]
struct UptimeAccumulator {
    total_time: i64,
    up_time: i64,
    last_end_time: Option<i64>,
}

impl UptimeAccumulator {
    fn observe(&mut self, interval: AvailabilityInterval) {
        if let Some(last_end_time) = self.last_end_time
            && interval.start > last_end_time
        {
            // The gap counts as elapsed, but not as up.
            self.total_time += interval.start - last_end_time;
        }
        // No clamping: a range that ends before it starts subtracts.
        self.total_time += interval.duration();
        if interval.up {
            self.up_time += interval.duration();
        }
        self.last_end_time = Some(self.last_end_time.unwrap_or(0).max(interval.end));
    }

    /// Integer-truncated percentage, `0` when no time was accounted at all.
    const fn percentage(self) -> i64 {
        if self.total_time > 0 { self.up_time * 100 / self.total_time } else { 0 }
    }
}

use std::fmt::{Debug, Formatter};

/// A single availability report: a time range with an up/down flag.
///
/// Half-open in spirit, but nothing is enforced: ranges may overlap, leave
/// gaps, or even end before they start. The calculator tolerates all of
/// these, so the parser does not validate them either.
///
/// The derived ordering is by `start`, then `end`, then `up`, which is
/// exactly the order the calculator sorts a charger's timeline in.
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
#[must_use]
pub struct AvailabilityInterval {
    /// Inclusive.
    pub start: i64,

    /// Exclusive.
    pub end: i64,

    pub up: bool,
}

impl Debug for AvailabilityInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end, if self.up { "up" } else { "down" })
    }
}

impl AvailabilityInterval {
    pub const fn new(start: i64, end: i64, up: bool) -> Self {
        Self { start, end, up }
    }

    /// Reported duration. Negative when the range ends before it starts —
    /// passed through as-is.
    #[must_use]
    pub const fn duration(self) -> i64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_by_start_first() {
        let mut intervals = vec![
            AvailabilityInterval::new(50, 100, true),
            AvailabilityInterval::new(0, 50, false),
            AvailabilityInterval::new(0, 25, true),
        ];
        intervals.sort_unstable();
        assert_eq!(intervals, [
            AvailabilityInterval::new(0, 25, true),
            AvailabilityInterval::new(0, 50, false),
            AvailabilityInterval::new(50, 100, true),
        ]);
    }

    #[test]
    fn test_negative_duration_is_preserved() {
        assert_eq!(AvailabilityInterval::new(10, 5, true).duration(), -5);
    }
}

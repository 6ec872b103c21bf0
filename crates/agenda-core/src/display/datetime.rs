//! Relative day labels for schedule listings.

use std::fmt;

use jiff::SignedDuration;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// How far a schedule lies from "now", in whole elapsed days.
///
/// # Format
///
/// - `Past(0)` → `today`, `Past(1)` → `yesterday`, `Past(n)` → `n days ago`
/// - `Upcoming(0)` → `today`, `Upcoming(1)` → `tomorrow`,
///   `Upcoming(n)` → `n days later`
///
/// ```rust
/// use agenda_core::display::RelativeDay;
///
/// assert_eq!(RelativeDay::Past(1).to_string(), "yesterday");
/// assert_eq!(RelativeDay::Upcoming(3).to_string(), "3 days later");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Past(i64),
    Upcoming(i64),
}

impl RelativeDay {
    /// Whole days contained in a non-negative gap, rounding down.
    pub fn whole_days(gap: SignedDuration) -> i64 {
        gap.as_secs().div_euclid(SECONDS_PER_DAY)
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RelativeDay::Past(0) | RelativeDay::Upcoming(0) => write!(f, "today"),
            RelativeDay::Past(1) => write!(f, "yesterday"),
            RelativeDay::Upcoming(1) => write!(f, "tomorrow"),
            RelativeDay::Past(days) => write!(f, "{days} days ago"),
            RelativeDay::Upcoming(days) => write!(f, "{days} days later"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_day_labels() {
        assert_eq!(RelativeDay::Past(0).to_string(), "today");
        assert_eq!(RelativeDay::Past(1).to_string(), "yesterday");
        assert_eq!(RelativeDay::Past(29).to_string(), "29 days ago");
        assert_eq!(RelativeDay::Upcoming(0).to_string(), "today");
        assert_eq!(RelativeDay::Upcoming(1).to_string(), "tomorrow");
        assert_eq!(RelativeDay::Upcoming(12).to_string(), "12 days later");
    }

    #[test]
    fn test_whole_days_rounds_down() {
        assert_eq!(RelativeDay::whole_days(SignedDuration::from_hours(23)), 0);
        assert_eq!(RelativeDay::whole_days(SignedDuration::from_hours(24)), 1);
        assert_eq!(RelativeDay::whole_days(SignedDuration::from_hours(47)), 1);
        assert_eq!(RelativeDay::whole_days(SignedDuration::ZERO), 0);
    }
}

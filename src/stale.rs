//! Last-access staleness checks behind the `--useless` flag.
//!
//! A file is considered stale when its last access time predates a cutoff
//! derived from a configurable age threshold. The check plugs into the
//! scanner as a post-filter predicate, after extension filtering and before
//! sorting.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Days, Months, Utc};

/// Age threshold after which an unaccessed file counts as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleAge {
    /// Whole days.
    pub days: u32,

    /// Whole months.
    pub months: u32,

    /// Whole years.
    pub years: u32,
}

impl Default for StaleAge {
    fn default() -> Self {
        Self {
            days: 0,
            months: 1,
            years: 0,
        }
    }
}

impl StaleAge {
    /// The instant before which a last-access time counts as stale:
    /// `now` minus the configured years, months, and days.
    ///
    /// Month subtraction clamps to the end of the target month, so one
    /// month before March 31st is the last day of February.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.years * 12 + self.months))
            .and_then(|shifted| shifted.checked_sub_days(Days::new(u64::from(self.days))))
            .unwrap_or(now)
    }
}

/// Whether the file at `path` was last accessed before the cutoff.
///
/// Files whose metadata or access time cannot be read count as not stale.
#[must_use]
pub fn is_stale(path: &Path, age: &StaleAge, now: DateTime<Utc>) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    let Ok(accessed) = metadata.accessed() else {
        return false;
    };

    DateTime::<Utc>::from(accessed) < age.cutoff(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cutoff_subtracts_months() {
        let age = StaleAge::default();
        assert_eq!(age.cutoff(at(2026, 8, 4)), at(2026, 7, 4));
    }

    #[test]
    fn test_cutoff_clamps_to_month_end() {
        // One month before March 31st lands on the last day of February.
        let age = StaleAge {
            days: 0,
            months: 1,
            years: 0,
        };
        assert_eq!(age.cutoff(at(2024, 3, 31)), at(2024, 2, 29));
    }

    #[test]
    fn test_cutoff_combines_all_fields() {
        let age = StaleAge {
            days: 3,
            months: 2,
            years: 1,
        };
        assert_eq!(age.cutoff(at(2026, 8, 4)), at(2025, 6, 1));
    }

    #[test]
    fn test_fresh_file_is_not_stale() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("fresh.txt");
        std::fs::write(&file, "data").unwrap();

        assert!(!is_stale(&file, &StaleAge::default(), Utc::now()));
    }

    #[test]
    fn test_fresh_file_is_stale_from_the_future() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("fresh.txt");
        std::fs::write(&file, "data").unwrap();

        // Two months from now, a file accessed today is past the one-month
        // threshold.
        let future = Utc::now().checked_add_months(Months::new(2)).unwrap();
        assert!(is_stale(&file, &StaleAge::default(), future));
    }

    #[test]
    fn test_missing_file_is_not_stale() {
        assert!(!is_stale(
            Path::new("/no/such/file"),
            &StaleAge::default(),
            Utc::now()
        ));
    }
}

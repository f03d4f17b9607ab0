//! Timestamp source for flushed histogram blocks.

use crate::utils::config::TIMESTAMP_FORMAT;
use chrono::Local;

/// Produces the timestamp stamped on every row of one flushed block
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Wall clock in the local timezone, formatted `YYYY-MM-DD HH:MM:SS`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl<F> Clock for F
where
    F: Fn() -> String,
{
    fn timestamp(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_local_clock_format() {
        let stamp = LocalClock.timestamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(stamp.len(), "2024-01-01 00:00:00".len());
    }
}

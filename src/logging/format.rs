//! Line formatting for named loggers.

use chrono::{DateTime, Local};

use crate::logging::level::Severity;

/// Timestamp layout: `YYYY/MM/DD HH:MM:SS`, local time, whole seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Fixed-template formatter producing `<timestamp> - <LEVEL> : <message>`.
///
/// The logger name is not part of the template.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl LineFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a record stamped with the current local time.
    pub fn format(&self, severity: Severity, message: &str) -> String {
        self.format_at(Local::now(), severity, message)
    }

    /// Format a record with an explicit timestamp.
    pub fn format_at(&self, at: DateTime<Local>, severity: Severity, message: &str) -> String {
        format!(
            "{} - {} : {}",
            at.format(TIMESTAMP_FORMAT),
            severity.as_str(),
            message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_fixed_time() {
        let at = Local.with_ymd_and_hms(2024, 3, 15, 9, 21, 7).unwrap();
        let line = LineFormatter::new().format_at(at, Severity::Info, "message text");
        assert_eq!(line, "2024/03/15 09:21:07 - INFO : message text");
    }

    #[test]
    fn test_format_level_names() {
        let at = Local.with_ymd_and_hms(2023, 12, 1, 23, 5, 0).unwrap();
        let formatter = LineFormatter::new();

        assert_eq!(
            formatter.format_at(at, Severity::Warning, "disk low"),
            "2023/12/01 23:05:00 - WARNING : disk low"
        );
        assert_eq!(
            formatter.format_at(at, Severity::Critical, ""),
            "2023/12/01 23:05:00 - CRITICAL : "
        );
    }

    #[test]
    fn test_format_now_has_no_subseconds() {
        let line = LineFormatter::new().format(Severity::Debug, "x");
        // "YYYY/MM/DD HH:MM:SS" is 19 characters
        assert_eq!(&line[19..], " - DEBUG : x");
    }
}

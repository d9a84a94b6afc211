use chrono::{DateTime, Datelike, Utc};

/// RFC 3339 timestamp captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Formats a build timestamp for display, e.g. `Oct 19 2026`.
///
/// Falls back to the raw string so a bad value still shows something.
pub fn display_build_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %e %Y").to_string(),
        Err(e) => {
            log::warn!("unparseable build time {raw:?}: {e}");
            raw.to_string()
        }
    }
}

pub fn build_date() -> String {
    display_build_date(BUILD_TIME)
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_build_date() {
        assert_eq!(display_build_date("2026-10-19T08:30:00+00:00"), "Oct 19 2026");
        assert_eq!(display_build_date("2025-03-04T23:30:00-02:00"), "Mar  5 2025");
        assert_eq!(display_build_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_embedded_build_time() {
        assert!(DateTime::parse_from_rfc3339(BUILD_TIME).is_ok());
        assert!(current_year() >= 2024);
    }
}

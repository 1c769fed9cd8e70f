//! Relative timestamps for activity log entries.

use chrono::{DateTime, FixedOffset, Utc};

/// Renders a note timestamp relative to `now`, in the display offset:
/// `Today at 03:05 PM`, `Yesterday at 03:05 PM`, or
/// `Oct 19, 2026, 03:05 PM` for anything else.
pub fn format_activity_time(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> String {
    let local = created_at.with_timezone(&offset);
    let day = local.date_naive();
    let today = now.with_timezone(&offset).date_naive();

    if day == today {
        format!("Today at {}", local.format("%I:%M %p"))
    } else if today.pred_opt() == Some(day) {
        format!("Yesterday at {}", local.format("%I:%M %p"))
    } else {
        local.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_today() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        assert_eq!(format_activity_time(at, now(), utc()), "Today at 09:05 AM");
    }

    #[test]
    fn test_today_just_after_midnight() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        assert_eq!(format_activity_time(at, now(), utc()), "Today at 12:00 AM");
    }

    #[test]
    fn test_yesterday() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 0).unwrap();
        assert_eq!(
            format_activity_time(at, now(), utc()),
            "Yesterday at 11:59 PM"
        );
    }

    #[test]
    fn test_older_dates_render_full_date() {
        let at = now() - Duration::days(2);
        assert_eq!(
            format_activity_time(at, now(), utc()),
            "Oct 17, 2026, 03:30 PM"
        );

        let at = Utc.with_ymd_and_hms(2025, 1, 3, 13, 7, 0).unwrap();
        assert_eq!(
            format_activity_time(at, now(), utc()),
            "Jan 3, 2025, 01:07 PM"
        );
    }

    #[test]
    fn test_future_timestamp_renders_full_date() {
        let at = now() + Duration::days(1);
        assert_eq!(
            format_activity_time(at, now(), utc()),
            "Oct 20, 2026, 03:30 PM"
        );
    }

    #[test]
    fn test_day_boundary_follows_display_offset() {
        // 20:00 UTC on the 18th is 01:30 on the 19th in IST.
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
        let ist = FixedOffset::east_opt(330 * 60).unwrap();

        assert_eq!(format_activity_time(at, now(), ist), "Today at 01:30 AM");
        assert_eq!(
            format_activity_time(at, now(), utc()),
            "Yesterday at 08:00 PM"
        );
    }
}

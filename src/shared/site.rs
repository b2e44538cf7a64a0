use chrono::{Duration, FixedOffset, Offset, Utc};

/// City shown in the status header and queried for weather.
pub const SITE_CITY: &str = "Delhi";

/// The site runs on IST, which has no daylight saving.
pub const SITE_UTC_OFFSET_MINUTES: i32 = 330;

pub fn site_offset() -> FixedOffset {
    FixedOffset::east_opt(SITE_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

/// Shift applied to "now" before splitting the price series into past and future.
pub fn price_reference_shift() -> Duration {
    Duration::minutes(SITE_UTC_OFFSET_MINUTES as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_offset_is_ist() {
        assert_eq!(site_offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(price_reference_shift(), Duration::minutes(330));
    }
}

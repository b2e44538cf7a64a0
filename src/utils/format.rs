use chrono::{DateTime, FixedOffset, Utc};

use crate::shared::site::site_offset;

pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

fn at_site(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&site_offset())
}

/// 12-hour clock in the browser's local zone, e.g. `03:07 PM`.
#[cfg(feature = "web")]
pub fn format_local_time(ts: DateTime<Utc>) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(ts.timestamp_millis() as f64));
    if d.get_time().is_nan() {
        return twelve_hour(at_site(ts).time());
    }
    match chrono::NaiveTime::from_hms_opt(d.get_hours(), d.get_minutes(), 0) {
        Some(t) => twelve_hour(t),
        None => twelve_hour(at_site(ts).time()),
    }
}

// Outside the browser the local zone is the server's, so use the site's instead.
#[cfg(not(feature = "web"))]
pub fn format_local_time(ts: DateTime<Utc>) -> String {
    twelve_hour(at_site(ts).time())
}

fn twelve_hour(t: chrono::NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// `HH` at the site, used for the price chart axis.
pub fn site_hour_label(ts: DateTime<Utc>) -> String {
    at_site(ts).format("%H").to_string()
}

/// `5 Apr, 14:00` at the site, used for the price chart tooltip.
pub fn site_day_time_label(ts: DateTime<Utc>) -> String {
    at_site(ts).format("%-d %b, %H:%M").to_string()
}

/// `Saturday, 5 Apr 2025` at the site.
pub fn site_date_long(ts: DateTime<Utc>) -> String {
    at_site(ts).format("%A, %-d %b %Y").to_string()
}

/// `14:03:09` at the site.
pub fn site_clock(ts: DateTime<Utc>) -> String {
    at_site(ts).format("%H:%M:%S").to_string()
}

/// `14:03` at the site.
pub fn site_hour_minute(ts: DateTime<Utc>) -> String {
    at_site(ts).format("%H:%M").to_string()
}

/// `07:00` for an hour of the day.
pub fn hour_label(hour: u32) -> String {
    format!("{}:00", pad2(hour as i32))
}

/// Whole prices print without decimals: `€35`, `€35.5`.
pub fn format_euro(v: f64) -> String {
    format!("€{}", trim_number(v))
}

/// Thousands separators, rounded to the unit: `12345.6` -> `12,346`.
pub fn group_thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

pub fn format_watts(v: f64) -> String {
    format!("{} W", group_thousands(v))
}

/// Share of `value` in `total` as a percentage with two decimals; `0.00` for an empty total.
pub fn percent_share(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.00".into();
    }
    format!("{:.2}", value / total * 100.0)
}

/// Drops a trailing `.0` so `124.0` shows as `124`.
pub fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 5, 8, 33, 9).unwrap()
    }

    #[test]
    fn site_labels_are_ist() {
        assert_eq!(site_hour_label(ts()), "14");
        assert_eq!(site_day_time_label(ts()), "5 Apr, 14:03");
        assert_eq!(site_date_long(ts()), "Saturday, 5 Apr 2025");
        assert_eq!(site_clock(ts()), "14:03:09");
        assert_eq!(site_hour_minute(ts()), "14:03");
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn local_time_without_browser_uses_site_zone() {
        assert_eq!(format_local_time(ts()), "02:03 PM");
    }

    #[test]
    fn numbers() {
        assert_eq!(pad2(7), "07");
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(format_euro(35.0), "€35");
        assert_eq!(format_euro(35.5), "€35.5");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(-1234567.0), "-1,234,567");
        assert_eq!(format_watts(2880.0), "2,880 W");
        assert_eq!(trim_number(124.0), "124");
        assert_eq!(trim_number(38.6), "38.6");
    }

    #[test]
    fn shares() {
        assert_eq!(percent_share(124.0, 265.0), "46.79");
        assert_eq!(percent_share(1.0, 0.0), "0.00");
    }
}

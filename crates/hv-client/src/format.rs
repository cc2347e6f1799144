//! Date encodings used on the wire.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Plain dates in query strings: `yyyyMMdd`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// "Updated since" timestamps: `yyyy-MM-dd hh:mm`.
///
/// 12-hour clock with no AM/PM marker, exactly as the service has always
/// been sent it. 14:30 and 02:30 encode the same.
pub const UPDATED_SINCE_FORMAT: &str = "%Y-%m-%d %I:%M";

/// Payment `paid-at` values: ISO-8601 with a numeric offset (`+0100`).
pub const PAID_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Format a plain date (`20151208`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an "updated since" timestamp (`2015-12-08 02:17`).
pub fn format_updated_since(timestamp: NaiveDateTime) -> String {
    timestamp.format(UPDATED_SINCE_FORMAT).to_string()
}

/// Format a payment timestamp (`2015-12-08T14:17:35-0800`).
pub fn format_paid_at(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.format(PAID_AT_FORMAT).to_string()
}

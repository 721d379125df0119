//! RFC 1123 dates for `Last-Modified` / `If-Modified-Since`.

use chrono::{DateTime, Utc};

/// Format used for HTTP dates, always in GMT.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp as an HTTP date, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`.
///
/// Sub-second precision is dropped; HTTP dates only carry whole seconds.
pub fn to_http_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an HTTP date into a UTC timestamp.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

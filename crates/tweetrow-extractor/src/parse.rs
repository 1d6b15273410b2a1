//! Timestamp, client-label and string helpers

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use chrono::DateTime;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static APP_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]*)<").expect("app source pattern compiles"));

/// Replace every NUL character, borrowing when there is nothing to replace
pub fn sanitize<'a>(text: &'a str, replacement: &str) -> Cow<'a, str> {
    if text.contains('\0') {
        Cow::Owned(text.replace('\0', replacement))
    } else {
        Cow::Borrowed(text)
    }
}

/// Owned, sanitized copy of an optional string
pub(crate) fn sanitize_opt(text: Option<&str>, replacement: &str) -> Option<String> {
    text.map(|t| sanitize(t, replacement).into_owned())
}

/// Client label from the `source` markup
///
/// Takes the text between the first `>` and the next `<`, e.g.
/// `<a href="...">Twitter Web App</a>` gives `Twitter Web App`. A source
/// without that shape is returned unchanged.
pub fn app_source(source: &str) -> &str {
    APP_SOURCE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map_or(source, |m| m.as_str())
}

/// Normalize a source timestamp
///
/// The offset is kept as written; `Wed Oct 10 20:19:24 +0000 2018` becomes
/// `2018-10-10 20:19:24` with the default formats.
pub fn parse_timestamp(raw: &str, config: &ExtractorConfig) -> Result<String> {
    DateTime::parse_from_str(raw, &config.source_timestamp_format)
        .map(|dt| dt.format(&config.output_timestamp_format).to_string())
        .map_err(|e| ExtractorError::MalformedTimestamp {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

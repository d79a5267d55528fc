use crate::constants::header;
use std::borrow::Cow;

/// Ensure a `Vary` value lists `Sec-Fetch-Site` exactly once.
///
/// Returns the input untouched when the token is already present, so calling
/// it again on its own output is a no-op.
pub fn annotate_vary(existing: Option<&str>) -> Cow<'_, str> {
    let Some(existing) = existing else {
        return Cow::Borrowed(header::SEC_FETCH_SITE);
    };

    let present = existing
        .split(',')
        .map(str::trim)
        .any(|token| token.eq_ignore_ascii_case(header::SEC_FETCH_SITE));
    if present {
        return Cow::Borrowed(existing);
    }

    // Drop dangling separators so the appended entry stays a clean list item.
    let head = existing.trim_end_matches([',', ' ', '\t']);
    if head.trim().is_empty() {
        return Cow::Borrowed(header::SEC_FETCH_SITE);
    }

    let mut value = String::with_capacity(head.len() + header::SEC_FETCH_SITE.len() + 2);
    value.push_str(head);
    value.push_str(", ");
    value.push_str(header::SEC_FETCH_SITE);
    Cow::Owned(value)
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;

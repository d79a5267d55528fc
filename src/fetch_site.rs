use crate::constants::fetch_site;

/// Parsed value of the `Sec-Fetch-Site` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSite {
    SameOrigin,
    SameSite,
    CrossSite,
    /// `none`: the user started the request directly (address bar, bookmark).
    UserInitiated,
    /// Header was not sent, e.g. by a browser without Fetch Metadata support.
    Missing,
    /// Header was sent with a value outside the known vocabulary.
    Unrecognized,
}

impl FetchSite {
    /// Classify a raw header value. Matching is exact and case-sensitive.
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            None => FetchSite::Missing,
            Some(fetch_site::SAME_ORIGIN) => FetchSite::SameOrigin,
            Some(fetch_site::SAME_SITE) => FetchSite::SameSite,
            Some(fetch_site::CROSS_SITE) => FetchSite::CrossSite,
            Some(fetch_site::NONE) => FetchSite::UserInitiated,
            Some(_) => FetchSite::Unrecognized,
        }
    }

    /// Wire token for the variant, if it has one.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            FetchSite::SameOrigin => Some(fetch_site::SAME_ORIGIN),
            FetchSite::SameSite => Some(fetch_site::SAME_SITE),
            FetchSite::CrossSite => Some(fetch_site::CROSS_SITE),
            FetchSite::UserInitiated => Some(fetch_site::NONE),
            FetchSite::Missing | FetchSite::Unrecognized => None,
        }
    }
}

impl From<Option<&str>> for FetchSite {
    fn from(value: Option<&str>) -> Self {
        Self::from_header(value)
    }
}

#[cfg(test)]
#[path = "fetch_site_test.rs"]
mod fetch_site_test;

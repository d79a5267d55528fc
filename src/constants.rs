pub mod header {
    pub const SEC_FETCH_SITE: &str = "Sec-Fetch-Site";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods that never reach the header checks.
    pub const SAFE: [&str; 3] = [GET, HEAD, OPTIONS];
}

pub mod fetch_site {
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const SAME_SITE: &str = "same-site";
    pub const CROSS_SITE: &str = "cross-site";
    pub const NONE: &str = "none";
}

pub mod rejection {
    pub const STATUS: u16 = 403;
    pub const BODY: &str = "Forbidden: Cross-Site Request Blocked";
}

/// Upper bound for a single origin value; longer values are never trusted.
pub const MAX_ORIGIN_LENGTH: usize = 4_096;

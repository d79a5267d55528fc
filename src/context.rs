/// Borrowed view of the request signals the policy reads.
///
/// Adapters fill this straight from the raw request: `method` exactly as
/// transmitted, and `None` for any header the client did not send.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub sec_fetch_site: Option<&'a str>,
    pub origin: Option<&'a str>,
}

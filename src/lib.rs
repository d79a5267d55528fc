pub mod constants;
mod context;
mod fetch_site;
mod options;
mod policy;
mod result;
mod trusted_origins;
mod vary;

pub use context::RequestContext;
pub use fetch_site::FetchSite;
pub use options::{CsrfOptions, ValidationError};
pub use policy::{CsrfPolicy, evaluate};
pub use result::{AllowReason, CsrfDecision, DenyReason, Rejection};
pub use trusted_origins::TrustedOrigins;
pub use vary::annotate_vary;

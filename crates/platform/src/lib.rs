//! # platform
//!
//! Knowledge about the engines whose text inputs misreport edits.
//!
//! - [`PlatformDescriptor`]: which engine/version is running, detected once
//!   from the user agent or set explicitly via [`PlatformConfig`].
//! - [`QuirkTable`]: the compensations that descriptor calls for, resolved
//!   from a static rule table and handed to the input interceptors as data.

mod config;
mod descriptor;
mod quirks;
mod user_agent;

pub use config::{ConfigError, PlatformConfig};
pub use descriptor::PlatformDescriptor;
pub use quirks::{KeyupInput, QuirkTable};

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for identity option validation.
pub const TRACING_TARGET_OPTIONS: &str = "identa_claims::options";

mod claim;
mod error;
mod identity;
mod options;
mod principal;

pub mod accessor;
pub mod prelude;

pub use crate::accessor::{ClaimsExt, PrincipalExt};
pub use crate::claim::{Claim, ClaimSource, claim_types};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::identity::{ClaimsIdentity, Identity};
pub use crate::options::{ClaimsIdentityOptions, IdentityOptions};
pub use crate::principal::{ClaimsPrincipal, Principal};

//! Convenient re-exports for common use.

pub use crate::accessor::{ClaimsExt, PrincipalExt};
pub use crate::claim::{Claim, ClaimSource, claim_types};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::identity::{ClaimsIdentity, Identity};
pub use crate::options::{ClaimsIdentityOptions, IdentityOptions};
pub use crate::principal::{ClaimsPrincipal, Principal};

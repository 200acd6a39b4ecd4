//! Claims and the lookup capability shared by identities and principals.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Canonical claim type URIs.
pub mod claim_types {
    /// Claim type carrying the user name.
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";

    /// Claim type carrying the unique user identifier.
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";

    /// Claim type carrying a role name.
    pub const ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

    /// Claim type carrying an e-mail address.
    pub const EMAIL: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";

    /// Claim type carrying the user's security stamp.
    pub const SECURITY_STAMP: &str = "Identity.SecurityStamp";
}

/// An immutable `(type, value)` pair asserting a fact about an authenticated entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{claim_type}: {value}")]
pub struct Claim {
    #[serde(rename = "type")]
    claim_type: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
}

impl Claim {
    /// Creates a new claim without an issuer.
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            issuer: None,
        }
    }

    /// Sets the issuer of this claim.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Returns the claim type.
    #[inline]
    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    /// Returns the claim value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the issuer, if one was recorded.
    #[inline]
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// Returns `true` if this claim has the given type.
    ///
    /// Claim types compare ordinally and case-sensitively.
    #[inline]
    pub fn is_type(&self, claim_type: &str) -> bool {
        self.claim_type == claim_type
    }
}

/// Anything that can look up the first claim of a given type.
///
/// Lookup is total: every claim type, known or not, yields either the first
/// matching claim in iteration order or `None`.
pub trait ClaimSource {
    /// Argument name reported when a receiver of this type is absent.
    const ARGUMENT: &'static str;

    /// Returns the first claim with the given type.
    fn find_first(&self, claim_type: &str) -> Option<&Claim>;
}

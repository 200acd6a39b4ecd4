//! Claims-bearing identities.
//!
//! An identity is the representation of a single authenticated entity. The
//! [`Identity`] trait is the capability accessors depend on; [`ClaimsIdentity`]
//! is the in-memory implementation hosts usually build from a decoded token
//! or cookie.

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimSource, claim_types};

/// A single authenticated entity exposing claims and an authentication scheme.
///
/// Types holding a lesser capability (no claims lookup) cannot be passed to
/// the accessors; convert them into a claims-bearing identity first.
pub trait Identity: ClaimSource {
    /// Returns the label of the scheme that authenticated this identity.
    fn authentication_type(&self) -> Option<&str>;
}

/// Ordered, mutable collection of claims issued under one authentication scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authentication_type: Option<String>,
    #[serde(default = "default_name_claim_type")]
    name_claim_type: String,
    #[serde(default)]
    claims: Vec<Claim>,
}

fn default_name_claim_type() -> String {
    claim_types::NAME.to_owned()
}

impl Default for ClaimsIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl ClaimsIdentity {
    /// Creates an empty identity authenticated by `authentication_type`.
    pub fn new(authentication_type: impl Into<String>) -> Self {
        Self {
            authentication_type: Some(authentication_type.into()),
            ..Self::anonymous()
        }
    }

    /// Creates an empty identity without an authentication scheme.
    pub fn anonymous() -> Self {
        Self {
            authentication_type: None,
            name_claim_type: default_name_claim_type(),
            claims: Vec::new(),
        }
    }

    /// Overrides the claim type used by [`Self::name`].
    #[must_use]
    pub fn with_name_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.name_claim_type = claim_type.into();
        self
    }

    /// Appends a claim.
    #[must_use]
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Appends every claim from `claims`, preserving their order.
    #[must_use]
    pub fn with_claims(mut self, claims: impl IntoIterator<Item = Claim>) -> Self {
        self.claims.extend(claims);
        self
    }

    /// Appends a claim.
    pub fn add_claim(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    /// Removes every claim of `claim_type` and returns how many were removed.
    pub fn remove_claims(&mut self, claim_type: &str) -> usize {
        let before = self.claims.len();
        self.claims.retain(|claim| !claim.is_type(claim_type));
        before - self.claims.len()
    }

    /// Returns all claims in insertion order.
    #[inline]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Returns every claim of the given type in insertion order.
    pub fn find_all<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> + 'a {
        self.claims.iter().filter(move |claim| claim.is_type(claim_type))
    }

    /// Returns `true` if a claim with exactly this type and value exists.
    pub fn has_claim(&self, claim_type: &str, value: &str) -> bool {
        self.find_all(claim_type).any(|claim| claim.value() == value)
    }

    /// Returns the claim type used by [`Self::name`].
    #[inline]
    pub fn name_claim_type(&self) -> &str {
        &self.name_claim_type
    }

    /// Returns the value of the first name claim.
    pub fn name(&self) -> Option<&str> {
        self.find_first(&self.name_claim_type).map(Claim::value)
    }

    /// Returns `true` if an authentication scheme is recorded and non-empty.
    pub fn is_authenticated(&self) -> bool {
        self.authentication_type
            .as_deref()
            .is_some_and(|scheme| !scheme.is_empty())
    }
}

impl ClaimSource for ClaimsIdentity {
    const ARGUMENT: &'static str = "identity";

    fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.is_type(claim_type))
    }
}

impl Identity for ClaimsIdentity {
    fn authentication_type(&self) -> Option<&str> {
        self.authentication_type.as_deref()
    }
}

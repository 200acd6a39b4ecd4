//! Principals aggregating one or more identities.

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimSource};
use crate::identity::{ClaimsIdentity, Identity};

/// The acting security context of a request.
///
/// The identities collection may be absent altogether, which accessors treat
/// the same as an empty collection.
pub trait Principal: ClaimSource {
    /// Identity type aggregated by this principal.
    type Identity: Identity;

    /// Returns the identities, or `None` if the collection is absent.
    fn identities(&self) -> Option<&[Self::Identity]>;
}

/// In-memory principal over [`ClaimsIdentity`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsPrincipal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identities: Option<Vec<ClaimsIdentity>>,
}

impl ClaimsPrincipal {
    /// Creates a principal over the given identities.
    pub fn new(identities: impl IntoIterator<Item = ClaimsIdentity>) -> Self {
        Self {
            identities: Some(identities.into_iter().collect()),
        }
    }

    /// Creates a principal whose identities collection is absent.
    pub const fn without_identities() -> Self {
        Self { identities: None }
    }

    /// Appends an identity, creating the collection if it is absent.
    pub fn add_identity(&mut self, identity: ClaimsIdentity) {
        self.identities.get_or_insert_with(Vec::new).push(identity);
    }

    /// Returns the first identity, if any.
    pub fn identity(&self) -> Option<&ClaimsIdentity> {
        self.identities.as_deref().and_then(<[_]>::first)
    }

    /// Returns every claim across all identities, identity by identity.
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.identities
            .iter()
            .flatten()
            .flat_map(|identity| identity.claims())
    }
}

impl From<ClaimsIdentity> for ClaimsPrincipal {
    fn from(identity: ClaimsIdentity) -> Self {
        Self::new([identity])
    }
}

impl FromIterator<ClaimsIdentity> for ClaimsPrincipal {
    fn from_iter<T: IntoIterator<Item = ClaimsIdentity>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl ClaimSource for ClaimsPrincipal {
    const ARGUMENT: &'static str = "principal";

    fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.identities()?
            .iter()
            .find_map(|identity| identity.find_first(claim_type))
    }
}

impl Principal for ClaimsPrincipal {
    type Identity = ClaimsIdentity;

    fn identities(&self) -> Option<&[ClaimsIdentity]> {
        self.identities.as_deref()
    }
}

//! User name, user id and login-state accessors.
//!
//! The free functions take `Option<&T>` receivers so hosts holding an optional
//! identity (for example an optional request extension) get an
//! [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) instead
//! of a silent `None` when the receiver is missing. Claims that are simply not
//! present are never an error.
//!
//! The extension traits [`ClaimsExt`] and [`PrincipalExt`] offer the same
//! lookups on plain references, where absence cannot occur.
//!
//! ```rust,ignore
//! use identa_claims::accessor;
//!
//! let user_id = accessor::get_user_id(request.extensions().get::<ClaimsPrincipal>())?;
//! ```
//!
//! Nothing is cached: every call reads the claim collection as it is now.

use std::str::FromStr;

use crate::claim::{Claim, ClaimSource, claim_types};
use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::options::{ClaimsIdentityOptions, IdentityOptions};
use crate::principal::Principal;

#[inline]
fn require<S: ClaimSource>(source: Option<&S>) -> Result<&S> {
    source.ok_or(Error::invalid_argument(S::ARGUMENT))
}

/// Returns the value of the first claim of `claim_type`.
///
/// Identities and principals behave identically for equivalent claim sets.
///
/// # Errors
///
/// Returns `InvalidArgument` if `source` is absent.
pub fn find_first_value<'a, S: ClaimSource>(
    source: Option<&'a S>,
    claim_type: &str,
) -> Result<Option<&'a str>> {
    Ok(require(source)?.find_first_value(claim_type))
}

/// Returns the value of the first canonical name claim.
///
/// # Errors
///
/// Returns `InvalidArgument` if `source` is absent.
pub fn get_user_name<S: ClaimSource>(source: Option<&S>) -> Result<Option<&str>> {
    find_first_value(source, claim_types::NAME)
}

/// Returns the value of the first canonical name-identifier claim.
///
/// Accepts identities and principals alike.
///
/// # Errors
///
/// Returns `InvalidArgument` if `source` is absent.
pub fn get_user_id<S: ClaimSource>(source: Option<&S>) -> Result<Option<&str>> {
    find_first_value(source, claim_types::NAME_IDENTIFIER)
}

/// Returns the user name using the configured claim type.
///
/// # Errors
///
/// Returns `InvalidArgument` if `source` is absent.
pub fn get_user_name_with<'a, S: ClaimSource>(
    source: Option<&'a S>,
    options: &ClaimsIdentityOptions,
) -> Result<Option<&'a str>> {
    find_first_value(source, &options.user_name_claim_type)
}

/// Returns the user id using the configured claim type.
///
/// # Errors
///
/// Returns `InvalidArgument` if `source` is absent.
pub fn get_user_id_with<'a, S: ClaimSource>(
    source: Option<&'a S>,
    options: &ClaimsIdentityOptions,
) -> Result<Option<&'a str>> {
    find_first_value(source, &options.user_id_claim_type)
}

/// Returns `true` if any identity was authenticated under the configured
/// application cookie scheme.
///
/// An absent identities collection and an empty one both yield `false`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `principal` is absent.
pub fn is_logged_in<P: Principal>(principal: Option<&P>, options: &IdentityOptions) -> Result<bool> {
    Ok(require(principal)?.is_logged_in_with_scheme(&options.application_cookie_scheme))
}

/// Claim lookups on any present claim source.
pub trait ClaimsExt: ClaimSource {
    /// Returns the value of the first claim of `claim_type`.
    fn find_first_value(&self, claim_type: &str) -> Option<&str> {
        self.find_first(claim_type).map(Claim::value)
    }

    /// Parses the value of the first claim of `claim_type`.
    ///
    /// Returns `None` if the claim is absent and `Some(Err(_))` if its value
    /// does not parse.
    fn find_first_value_as<V: FromStr>(&self, claim_type: &str) -> Option<Result<V, V::Err>> {
        self.find_first_value(claim_type).map(str::parse)
    }

    /// Returns the value of the first canonical name claim.
    fn user_name(&self) -> Option<&str> {
        self.find_first_value(claim_types::NAME)
    }

    /// Returns the value of the first canonical name-identifier claim.
    fn user_id(&self) -> Option<&str> {
        self.find_first_value(claim_types::NAME_IDENTIFIER)
    }

    /// Parses the user id into `V`, e.g. a UUID.
    fn user_id_as<V: FromStr>(&self) -> Option<Result<V, V::Err>> {
        self.find_first_value_as(claim_types::NAME_IDENTIFIER)
    }
}

impl<S: ClaimSource> ClaimsExt for S {}

/// Login-state checks on a present principal.
pub trait PrincipalExt: Principal {
    /// Returns `true` if any identity was authenticated under the configured
    /// application cookie scheme.
    fn is_logged_in(&self, options: &IdentityOptions) -> bool {
        self.is_logged_in_with_scheme(&options.application_cookie_scheme)
    }

    /// Returns `true` if any identity was authenticated under `scheme`.
    fn is_logged_in_with_scheme(&self, scheme: &str) -> bool {
        self.identities().is_some_and(|identities| {
            identities
                .iter()
                .any(|identity| identity.authentication_type() == Some(scheme))
        })
    }
}

impl<P: Principal> PrincipalExt for P {}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::ErrorKind;
    use crate::identity::ClaimsIdentity;
    use crate::principal::ClaimsPrincipal;

    const APPLICATION_COOKIE: &str = "ApplicationCookie";

    fn options() -> IdentityOptions {
        IdentityOptions::default().with_application_cookie_scheme(APPLICATION_COOKIE)
    }

    fn alice() -> ClaimsIdentity {
        ClaimsIdentity::new(APPLICATION_COOKIE)
            .with_claim(Claim::new(claim_types::NAME, "alice"))
            .with_claim(Claim::new(claim_types::NAME_IDENTIFIER, "u-1"))
    }

    #[test]
    fn missing_claim_is_none() {
        let identity = ClaimsIdentity::new("Bearer");
        assert_eq!(find_first_value(Some(&identity), "tenant"), Ok(None));
        assert_eq!(get_user_name(Some(&identity)), Ok(None));
        assert_eq!(get_user_id(Some(&identity)), Ok(None));
    }

    #[test]
    fn single_claim_is_returned() {
        let identity = alice();
        assert_eq!(get_user_name(Some(&identity)), Ok(Some("alice")));
        assert_eq!(get_user_id(Some(&identity)), Ok(Some("u-1")));
    }

    #[test]
    fn first_of_duplicate_claims_wins() {
        let identity = ClaimsIdentity::new("Bearer")
            .with_claim(Claim::new("tenant", "v1"))
            .with_claim(Claim::new("tenant", "v2"));
        assert_eq!(find_first_value(Some(&identity), "tenant"), Ok(Some("v1")));
    }

    #[test]
    fn absent_receivers_are_invalid_arguments() {
        let error = get_user_name::<ClaimsIdentity>(None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.argument, "identity");

        let error = get_user_id::<ClaimsPrincipal>(None).unwrap_err();
        assert_eq!(error.argument, "principal");

        let error = find_first_value::<ClaimsIdentity>(None, "tenant").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        let error = is_logged_in::<ClaimsPrincipal>(None, &options()).unwrap_err();
        assert_eq!(error.argument, "principal");
    }

    #[test]
    fn identity_and_principal_lookups_agree() {
        let identity = alice();
        let principal = ClaimsPrincipal::from(identity.clone());

        for claim_type in [claim_types::NAME, claim_types::NAME_IDENTIFIER, "unknown"] {
            assert_eq!(
                find_first_value(Some(&identity), claim_type),
                find_first_value(Some(&principal), claim_type),
            );
        }
        assert_eq!(get_user_id(Some(&principal)), Ok(Some("u-1")));
    }

    #[test]
    fn configured_claim_types_are_used() {
        let identity = ClaimsIdentity::new("Bearer")
            .with_claim(Claim::new("preferred_username", "al"))
            .with_claim(Claim::new("sub", "u-9"));
        let claims_identity = ClaimsIdentityOptions {
            user_name_claim_type: "preferred_username".to_owned(),
            user_id_claim_type: "sub".to_owned(),
            ..Default::default()
        };

        assert_eq!(get_user_name_with(Some(&identity), &claims_identity), Ok(Some("al")));
        assert_eq!(get_user_id_with(Some(&identity), &claims_identity), Ok(Some("u-9")));
        assert_eq!(get_user_name(Some(&identity)), Ok(None));
    }

    #[test]
    fn logged_in_with_matching_scheme() {
        let principal = ClaimsPrincipal::new([alice(), ClaimsIdentity::new("Bearer")]);
        assert_eq!(is_logged_in(Some(&principal), &options()), Ok(true));
        assert!(principal.is_logged_in(&options()));
    }

    #[test]
    fn not_logged_in_without_matching_scheme() {
        let options = options();

        let absent = ClaimsPrincipal::without_identities();
        assert_eq!(is_logged_in(Some(&absent), &options), Ok(false));

        let empty = ClaimsPrincipal::new(Vec::<ClaimsIdentity>::new());
        assert_eq!(is_logged_in(Some(&empty), &options), Ok(false));

        let bearer_only = ClaimsPrincipal::new([
            ClaimsIdentity::new("Bearer"),
            ClaimsIdentity::anonymous(),
        ]);
        assert_eq!(is_logged_in(Some(&bearer_only), &options), Ok(false));
    }

    #[test]
    fn default_scheme_is_identity_application() {
        let principal = ClaimsPrincipal::from(ClaimsIdentity::new("Identity.Application"));
        assert!(principal.is_logged_in(&IdentityOptions::default()));
        assert!(!principal.is_logged_in_with_scheme(APPLICATION_COOKIE));
    }

    #[test]
    fn lookups_follow_mutation() {
        let mut identity = ClaimsIdentity::new("Bearer");
        assert_eq!(identity.user_name(), None);

        identity.add_claim(Claim::new(claim_types::NAME, "bob"));
        assert_eq!(identity.user_name(), Some("bob"));

        identity.remove_claims(claim_types::NAME);
        assert_eq!(identity.user_name(), None);
    }

    #[test]
    fn typed_user_id() {
        let id = Uuid::new_v4();
        let principal = ClaimsPrincipal::from(
            ClaimsIdentity::new("Bearer")
                .with_claim(Claim::new(claim_types::NAME_IDENTIFIER, id.to_string())),
        );
        assert_eq!(principal.user_id_as::<Uuid>().transpose().unwrap(), Some(id));

        let malformed = ClaimsIdentity::new("Bearer")
            .with_claim(Claim::new(claim_types::NAME_IDENTIFIER, "not-a-uuid"));
        assert!(matches!(malformed.user_id_as::<Uuid>(), Some(Err(_))));
        assert!(ClaimsIdentity::new("Bearer").user_id_as::<Uuid>().is_none());
    }
}

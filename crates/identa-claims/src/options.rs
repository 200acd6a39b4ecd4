//! Identity configuration.
//!
//! Options name the claim types accessors read and the authentication scheme
//! labels hosts issue cookies under. They deserialize from configuration files
//! and, with the `config` feature, parse from command-line arguments and
//! environment variables.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_OPTIONS;
use crate::claim::claim_types;
use crate::error::{Error, Result};

/// Claim types used when building and reading identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(default)]
pub struct ClaimsIdentityOptions {
    /// Claim type carrying role names.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_ROLE_CLAIM_TYPE", default_value = claim_types::ROLE)
    )]
    pub role_claim_type: String,

    /// Claim type carrying the user name.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_USER_NAME_CLAIM_TYPE", default_value = claim_types::NAME)
    )]
    pub user_name_claim_type: String,

    /// Claim type carrying the user id.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_USER_ID_CLAIM_TYPE", default_value = claim_types::NAME_IDENTIFIER)
    )]
    pub user_id_claim_type: String,

    /// Claim type carrying the security stamp.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_SECURITY_STAMP_CLAIM_TYPE", default_value = claim_types::SECURITY_STAMP)
    )]
    pub security_stamp_claim_type: String,
}

impl Default for ClaimsIdentityOptions {
    fn default() -> Self {
        Self {
            role_claim_type: claim_types::ROLE.to_owned(),
            user_name_claim_type: claim_types::NAME.to_owned(),
            user_id_claim_type: claim_types::NAME_IDENTIFIER.to_owned(),
            security_stamp_claim_type: claim_types::SECURITY_STAMP.to_owned(),
        }
    }
}

impl ClaimsIdentityOptions {
    /// Validates that no claim type is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("role_claim_type", &self.role_claim_type)?;
        require_non_empty("user_name_claim_type", &self.user_name_claim_type)?;
        require_non_empty("user_id_claim_type", &self.user_id_claim_type)?;
        require_non_empty("security_stamp_claim_type", &self.security_stamp_claim_type)
    }
}

/// Identity options shared by accessors and sign-in hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct IdentityOptions {
    /// Claim types used for identities.
    #[cfg_attr(feature = "config", command(flatten))]
    pub claims_identity: ClaimsIdentityOptions,

    /// Scheme label of the application cookie.
    ///
    /// A principal counts as logged in when one of its identities was
    /// authenticated under this scheme.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_APPLICATION_COOKIE_SCHEME", default_value = IdentityOptions::APPLICATION_COOKIE_SCHEME)
    )]
    pub application_cookie_scheme: String,

    /// Scheme label of the cookie holding external login information.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_EXTERNAL_COOKIE_SCHEME", default_value = IdentityOptions::EXTERNAL_COOKIE_SCHEME)
    )]
    pub external_cookie_scheme: String,

    /// Scheme label of the cookie remembering a two-factor browser.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_TWO_FACTOR_REMEMBER_ME_SCHEME", default_value = IdentityOptions::TWO_FACTOR_REMEMBER_ME_SCHEME)
    )]
    pub two_factor_remember_me_scheme: String,

    /// Scheme label of the cookie carrying the pending two-factor user id.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "IDENTA_TWO_FACTOR_USER_ID_SCHEME", default_value = IdentityOptions::TWO_FACTOR_USER_ID_SCHEME)
    )]
    pub two_factor_user_id_scheme: String,
}

impl IdentityOptions {
    /// Default application cookie scheme label.
    pub const APPLICATION_COOKIE_SCHEME: &'static str = "Identity.Application";
    /// Default external cookie scheme label.
    pub const EXTERNAL_COOKIE_SCHEME: &'static str = "Identity.External";
    /// Default two-factor remember-me scheme label.
    pub const TWO_FACTOR_REMEMBER_ME_SCHEME: &'static str = "Identity.TwoFactorRememberMe";
    /// Default two-factor user id scheme label.
    pub const TWO_FACTOR_USER_ID_SCHEME: &'static str = "Identity.TwoFactorUserId";

    /// Replaces the application cookie scheme label.
    pub fn with_application_cookie_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.application_cookie_scheme = scheme.into();
        self
    }

    /// Replaces the claim type options.
    pub fn with_claims_identity(mut self, claims_identity: ClaimsIdentityOptions) -> Self {
        self.claims_identity = claims_identity;
        self
    }

    /// Validates every scheme label and claim type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        self.claims_identity.validate()?;
        require_non_empty("application_cookie_scheme", &self.application_cookie_scheme)?;
        require_non_empty("external_cookie_scheme", &self.external_cookie_scheme)?;
        require_non_empty(
            "two_factor_remember_me_scheme",
            &self.two_factor_remember_me_scheme,
        )?;
        require_non_empty("two_factor_user_id_scheme", &self.two_factor_user_id_scheme)?;

        tracing::debug!(
            target: TRACING_TARGET_OPTIONS,
            application_cookie_scheme = %self.application_cookie_scheme,
            user_id_claim_type = %self.claims_identity.user_id_claim_type,
            "identity options validated"
        );

        Ok(())
    }
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self {
            claims_identity: ClaimsIdentityOptions::default(),
            application_cookie_scheme: Self::APPLICATION_COOKIE_SCHEME.to_owned(),
            external_cookie_scheme: Self::EXTERNAL_COOKIE_SCHEME.to_owned(),
            two_factor_remember_me_scheme: Self::TWO_FACTOR_REMEMBER_ME_SCHEME.to_owned(),
            two_factor_user_id_scheme: Self::TWO_FACTOR_USER_ID_SCHEME.to_owned(),
        }
    }
}

fn require_non_empty(argument: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(argument).with_message("value must not be empty"));
    }

    Ok(())
}

//! Outcomes of sign-in and identity operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// An operation outcome with a severity to log it at.
pub trait LoggableResult {
    /// Returns the severity this outcome is logged at.
    fn log_level(&self) -> LogLevel;
}

impl LoggableResult for bool {
    fn log_level(&self) -> LogLevel {
        if *self {
            LogLevel::Verbose
        } else {
            LogLevel::Warning
        }
    }
}

/// Outcome of a sign-in attempt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResult {
    succeeded: bool,
    is_locked_out: bool,
    is_not_allowed: bool,
    requires_two_factor: bool,
}

impl SignInResult {
    /// The sign-in succeeded.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            succeeded: true,
            is_locked_out: false,
            is_not_allowed: false,
            requires_two_factor: false,
        }
    }

    /// The sign-in failed, for example because of a wrong password.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            succeeded: false,
            is_locked_out: false,
            is_not_allowed: false,
            requires_two_factor: false,
        }
    }

    /// The account is locked out.
    #[must_use]
    pub const fn locked_out() -> Self {
        Self {
            is_locked_out: true,
            ..Self::failed()
        }
    }

    /// The account may not sign in, for example before e-mail confirmation.
    #[must_use]
    pub const fn not_allowed() -> Self {
        Self {
            is_not_allowed: true,
            ..Self::failed()
        }
    }

    /// The password was accepted but a second factor is still required.
    #[must_use]
    pub const fn two_factor_required() -> Self {
        Self {
            requires_two_factor: true,
            ..Self::failed()
        }
    }

    #[inline]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    #[inline]
    pub const fn is_locked_out(&self) -> bool {
        self.is_locked_out
    }

    #[inline]
    pub const fn is_not_allowed(&self) -> bool {
        self.is_not_allowed
    }

    #[inline]
    pub const fn requires_two_factor(&self) -> bool {
        self.requires_two_factor
    }
}

impl LoggableResult for SignInResult {
    fn log_level(&self) -> LogLevel {
        if self.succeeded || self.requires_two_factor {
            LogLevel::Verbose
        } else {
            LogLevel::Warning
        }
    }
}

impl fmt::Display for SignInResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_locked_out {
            "Lockedout"
        } else if self.is_not_allowed {
            "NotAllowed"
        } else if self.requires_two_factor {
            "RequiresTwoFactor"
        } else if self.succeeded {
            "Succeeded"
        } else {
            "Failed"
        };

        f.write_str(outcome)
    }
}

/// A single failure reported by an identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityError {
    /// Machine-readable error code, e.g. `DuplicateUserName`.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

impl IdentityError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Outcome of an identity operation such as creating a user or adding a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResult {
    succeeded: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<IdentityError>,
}

impl IdentityResult {
    /// The operation succeeded.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            succeeded: true,
            errors: Vec::new(),
        }
    }

    /// The operation failed with the given errors, kept in order.
    #[must_use]
    pub fn failed(errors: impl IntoIterator<Item = IdentityError>) -> Self {
        Self {
            succeeded: false,
            errors: errors.into_iter().collect(),
        }
    }

    #[inline]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Returns the reported errors; empty on success.
    #[inline]
    pub fn errors(&self) -> &[IdentityError] {
        &self.errors
    }
}

impl LoggableResult for IdentityResult {
    fn log_level(&self) -> LogLevel {
        self.succeeded.log_level()
    }
}

impl fmt::Display for IdentityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            return f.write_str("Succeeded");
        }

        f.write_str("Failed : ")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(&error.code)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_display_prefers_lockout() {
        assert_eq!(SignInResult::success().to_string(), "Succeeded");
        assert_eq!(SignInResult::failed().to_string(), "Failed");
        assert_eq!(SignInResult::locked_out().to_string(), "Lockedout");
        assert_eq!(SignInResult::not_allowed().to_string(), "NotAllowed");
        assert_eq!(
            SignInResult::two_factor_required().to_string(),
            "RequiresTwoFactor"
        );
    }

    #[test]
    fn sign_in_levels() {
        assert_eq!(SignInResult::success().log_level(), LogLevel::Verbose);
        assert_eq!(
            SignInResult::two_factor_required().log_level(),
            LogLevel::Verbose
        );
        assert_eq!(SignInResult::failed().log_level(), LogLevel::Warning);
        assert_eq!(SignInResult::locked_out().log_level(), LogLevel::Warning);
        assert_eq!(SignInResult::not_allowed().log_level(), LogLevel::Warning);
    }

    #[test]
    fn identity_display_lists_codes() {
        assert_eq!(IdentityResult::success().to_string(), "Succeeded");

        let result = IdentityResult::failed([
            IdentityError::new("DuplicateUserName", "User name 'alice' is already taken."),
            IdentityError::new("PasswordTooShort", "Passwords must be at least 6 characters."),
        ]);
        assert_eq!(
            result.to_string(),
            "Failed : DuplicateUserName,PasswordTooShort"
        );
        assert_eq!(result.errors().len(), 2);
        assert_eq!(IdentityResult::failed(Vec::new()).to_string(), "Failed : ");
    }

    #[test]
    fn identity_and_bool_levels() {
        assert_eq!(IdentityResult::success().log_level(), LogLevel::Verbose);
        assert_eq!(IdentityResult::failed(Vec::new()).log_level(), LogLevel::Warning);
        assert_eq!(true.log_level(), LogLevel::Verbose);
        assert_eq!(false.log_level(), LogLevel::Warning);
    }
}

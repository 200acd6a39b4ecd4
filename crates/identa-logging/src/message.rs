//! Message templates for logged results.
//!
//! Both templates render `"<method> : Result : <result>"`. An absent method
//! name renders as an empty string.

use std::fmt::Display;

use crate::result::SignInResult;

/// Formats the message logged for a sign-in result.
pub fn sign_in_result(method: Option<&str>, result: &SignInResult) -> String {
    format!("{} : Result : {result}", method.unwrap_or_default())
}

/// Formats the message logged for an identity operation result.
pub fn identity_result(method: Option<&str>, result: impl Display) -> String {
    format!("{} : Result : {result}", method.unwrap_or_default())
}

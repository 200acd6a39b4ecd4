//! Log severities and event identifiers.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Severity gating whether a message is emitted.
///
/// Levels are ordered from most to least verbose.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(AsRefStr, IntoStaticStr, EnumString, EnumIter, strum::Display)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail useful only while debugging.
    #[default]
    Debug,
    /// Routine outcomes, such as a successful sign-in.
    Verbose,
    /// Notable but expected events.
    Information,
    /// Failed or rejected operations.
    Warning,
    /// Operations that failed unexpectedly.
    Error,
    /// Failures requiring immediate attention.
    Critical,
}

impl LogLevel {
    /// Returns the `tracing` level this severity is emitted at.
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::TRACE,
            Self::Verbose => tracing::Level::DEBUG,
            Self::Information => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Critical => tracing::Level::ERROR,
        }
    }
}

/// Numeric identifier attached to a log event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[derive(Serialize, Deserialize)]
pub struct EventId(pub i32);

impl EventId {
    /// Event id used when no specific id applies.
    pub const NONE: Self = Self(0);
}

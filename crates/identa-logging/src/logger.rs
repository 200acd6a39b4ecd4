//! Level-gated logging of operation results.
//!
//! [`ResultLogger`] resolves the severity of a result first and only builds
//! the message when the sink reports that severity as enabled, so disabled
//! levels cost a single `is_enabled` check. Every operation hands its input
//! back unchanged and can wrap an expression inline:
//!
//! ```rust,ignore
//! let result = logger.log_identity_result(store.create(user)?, Some("create"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::level::{EventId, LogLevel};
use crate::message;
use crate::result::{IdentityResult, LoggableResult, SignInResult};
use crate::sink::LogSink;

/// Logs operation results through a [`LogSink`].
///
/// Implementors provide the sink; every logging operation has a default
/// implementation and may be overridden individually.
pub trait ResultLogger {
    /// Returns the sink messages are written to.
    fn sink(&self) -> &dyn LogSink;

    /// Logs `result` at the level chosen by `get_level` and returns it.
    ///
    /// `message` runs at most once, and only when the sink has the resolved
    /// level enabled. No error object is attached.
    fn log_result<T, L, M>(&self, result: T, get_level: L, message: M) -> T
    where
        L: FnOnce(&T) -> LogLevel,
        M: FnOnce() -> String,
    {
        self.log_result_with(result, get_level, |_| message())
    }

    /// Like [`Self::log_result`], but the message builder borrows the result.
    fn log_result_with<T, L, M>(&self, result: T, get_level: L, message: M) -> T
    where
        L: FnOnce(&T) -> LogLevel,
        M: FnOnce(&T) -> String,
    {
        let level = get_level(&result);
        let sink = self.sink();

        if sink.is_enabled(level) {
            sink.log(level, EventId::NONE, &message(&result), None);
        }

        result
    }

    /// Logs a sign-in result at its own severity.
    fn log_sign_in_result(&self, result: SignInResult, method: Option<&str>) -> SignInResult {
        self.log_result_with(result, SignInResult::log_level, |result| {
            message::sign_in_result(method, result)
        })
    }

    /// Logs an identity operation result at its own severity.
    fn log_identity_result(&self, result: IdentityResult, method: Option<&str>) -> IdentityResult {
        self.log_result_with(result, IdentityResult::log_level, |result| {
            message::identity_result(method, result)
        })
    }

    /// Logs a boolean outcome: `Verbose` when `true`, `Warning` when `false`.
    fn log_bool_result(&self, result: bool, method: Option<&str>) -> bool {
        self.log_result(result, bool::log_level, || {
            message::identity_result(method, result)
        })
    }
}

/// [`ResultLogger`] over a shared, replaceable sink.
#[derive(Clone)]
pub struct IdentityLogger {
    sink: Arc<dyn LogSink>,
}

impl IdentityLogger {
    /// Creates a logger writing to `sink`.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Creates a logger writing to an already shared sink.
    pub fn from_shared(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Returns the shared sink handle.
    pub fn shared_sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Replaces the sink; later calls write to the new one.
    pub fn set_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sink = sink;
    }
}

impl ResultLogger for IdentityLogger {
    fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }
}

impl fmt::Debug for IdentityLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityLogger").finish_non_exhaustive()
    }
}

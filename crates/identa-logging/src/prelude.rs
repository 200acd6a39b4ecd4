//! Convenient re-exports for common use.

pub use crate::level::{EventId, LogLevel};
pub use crate::logger::{IdentityLogger, ResultLogger};
pub use crate::result::{IdentityError, IdentityResult, LoggableResult, SignInResult};
pub use crate::sink::{LogSink, NullSink, TracingSink, TracingSinkConfig};

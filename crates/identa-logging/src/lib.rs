#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for logged operation results.
pub const TRACING_TARGET_RESULTS: &str = "identa_logging::results";

mod level;
mod logger;
mod result;
mod sink;

pub mod message;
pub mod prelude;

pub use crate::level::{EventId, LogLevel};
pub use crate::logger::{IdentityLogger, ResultLogger};
pub use crate::result::{IdentityError, IdentityResult, LoggableResult, SignInResult};
pub use crate::sink::{LogSink, NullSink, TracingSink, TracingSinkConfig};

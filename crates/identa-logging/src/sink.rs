//! Log sinks receiving formatted result messages.

use std::error::Error as StdError;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::TRACING_TARGET_RESULTS;
use crate::level::{EventId, LogLevel};

/// Destination for result log messages.
///
/// Write failures are the sink's own concern; callers never observe them.
pub trait LogSink: Send + Sync {
    /// Returns `true` if messages at `level` would be recorded.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Records a message.
    fn log(
        &self,
        level: LogLevel,
        event_id: EventId,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
    );
}

/// Sink that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _: LogLevel, _: EventId, _: &str, _: Option<&(dyn StdError + 'static)>) {}
}

/// Configuration for [`TracingSink`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(default)]
pub struct TracingSinkConfig {
    /// Least severe level forwarded to `tracing`.
    ///
    /// Levels below this floor are reported as disabled even when the active
    /// subscriber would accept them.
    #[cfg_attr(
        feature = "config",
        arg(long = "result-log-level", env = "IDENTA_RESULT_LOG_LEVEL", default_value = "debug")
    )]
    pub min_level: LogLevel,
}

/// Sink forwarding messages to the active `tracing` subscriber.
///
/// Events are emitted under [`TRACING_TARGET_RESULTS`] at the level given by
/// [`LogLevel::as_tracing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink {
    config: TracingSinkConfig,
}

impl TracingSink {
    /// Creates a sink with the given configuration.
    pub const fn new(config: TracingSinkConfig) -> Self {
        Self { config }
    }

    /// Returns the sink configuration.
    pub const fn config(&self) -> &TracingSinkConfig {
        &self.config
    }
}

// Callsite levels must be constant, so each level gets its own arm.
macro_rules! emit {
    (@event $level:expr, $event_id:expr, $message:expr, $error:expr) => {
        tracing::event!(
            target: TRACING_TARGET_RESULTS,
            $level,
            event_id = %$event_id,
            error = $error.map(tracing::field::display),
            "{}",
            $message
        )
    };
    ($level:expr, $event_id:expr, $message:expr, $error:expr) => {
        match $level {
            LogLevel::Debug => emit!(@event Level::TRACE, $event_id, $message, $error),
            LogLevel::Verbose => emit!(@event Level::DEBUG, $event_id, $message, $error),
            LogLevel::Information => emit!(@event Level::INFO, $event_id, $message, $error),
            LogLevel::Warning => emit!(@event Level::WARN, $event_id, $message, $error),
            LogLevel::Error | LogLevel::Critical => {
                emit!(@event Level::ERROR, $event_id, $message, $error)
            }
        }
    };
}

impl LogSink for TracingSink {
    fn is_enabled(&self, level: LogLevel) -> bool {
        if level < self.config.min_level {
            return false;
        }

        match level {
            LogLevel::Debug => tracing::enabled!(target: TRACING_TARGET_RESULTS, Level::TRACE),
            LogLevel::Verbose => tracing::enabled!(target: TRACING_TARGET_RESULTS, Level::DEBUG),
            LogLevel::Information => {
                tracing::enabled!(target: TRACING_TARGET_RESULTS, Level::INFO)
            }
            LogLevel::Warning => tracing::enabled!(target: TRACING_TARGET_RESULTS, Level::WARN),
            LogLevel::Error | LogLevel::Critical => {
                tracing::enabled!(target: TRACING_TARGET_RESULTS, Level::ERROR)
            }
        }
    }

    fn log(
        &self,
        level: LogLevel,
        event_id: EventId,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        if level < self.config.min_level {
            return;
        }

        emit!(level, event_id, message, error);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_warn_subscriber(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(capture.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn null_sink_is_always_disabled() {
        let sink = NullSink;
        assert!(!sink.is_enabled(LogLevel::Critical));
        sink.log(LogLevel::Critical, EventId::NONE, "ignored", None);
    }

    #[test]
    fn tracing_sink_follows_subscriber_filter() {
        let sink = TracingSink::default();

        let output = with_warn_subscriber(|| {
            assert!(sink.is_enabled(LogLevel::Warning));
            assert!(sink.is_enabled(LogLevel::Critical));
            assert!(!sink.is_enabled(LogLevel::Verbose));

            sink.log(LogLevel::Warning, EventId::from(3), "sign in rejected", None);
            sink.log(LogLevel::Verbose, EventId::NONE, "sign in accepted", None);
        });

        assert!(output.contains("WARN"));
        assert!(output.contains("sign in rejected"));
        assert!(output.contains("event_id=3"));
        assert!(!output.contains("sign in accepted"));
    }

    #[test]
    fn tracing_sink_applies_level_floor() {
        let sink = TracingSink::new(TracingSinkConfig {
            min_level: LogLevel::Error,
        });

        let output = with_warn_subscriber(|| {
            assert!(!sink.is_enabled(LogLevel::Warning));
            assert!(sink.is_enabled(LogLevel::Error));

            sink.log(LogLevel::Warning, EventId::NONE, "below floor", None);
            let error = io::Error::other("store unavailable");
            sink.log(LogLevel::Error, EventId::NONE, "update failed", Some(&error));
        });

        assert!(!output.contains("below floor"));
        assert!(output.contains("update failed"));
        assert!(output.contains("store unavailable"));
    }

    #[test]
    fn config_deserializes_level_names() {
        let config: TracingSinkConfig =
            serde_json::from_str(r#"{ "min_level": "warning" }"#).unwrap();
        assert_eq!(config.min_level, LogLevel::Warning);

        let config: TracingSinkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.min_level, LogLevel::Debug);
    }
}

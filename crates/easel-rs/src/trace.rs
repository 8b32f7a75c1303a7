//! Tracing capture for interactive frontends.
//!
//! [`LogCaptureLayer`] is a `tracing_subscriber` layer that writes every
//! event into a shared [`LogBuffer`] instead of stdout, which a TUI would
//! be drawing over. The frontend drains the buffer once per frame and
//! renders the lines in its own log pane.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;

/// Maximum log lines kept in the buffer between drains.
pub const MAX_LOG_LINES: usize = 500;
/// Trim to this many when the cap is exceeded.
pub const LOG_TRIM_TO: usize = 300;

/// A single log line captured from tracing.
#[derive(Clone, Debug)]
pub struct LogLine {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log severity level (mirrors tracing levels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short fixed-width label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

/// A shared buffer of pending log lines.
///
/// The tracing layer pushes into this buffer; the frontend drains it once
/// per frame. The buffer has its own mutex, so emitting a log line never
/// contends with rendering.
#[derive(Clone)]
pub struct LogBuffer(Arc<Mutex<Vec<LogLine>>>);

impl LogBuffer {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::with_capacity(128))))
    }

    /// Drain all pending log lines from the buffer, returning them.
    pub fn drain(&self) -> Vec<LogLine> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buf)
    }

    /// Drain pending log lines into a frontend's log pane.
    ///
    /// The pane is capped like the buffer itself: past [`MAX_LOG_LINES`]
    /// it is trimmed back to [`LOG_TRIM_TO`], oldest lines first.
    pub fn drain_into(&self, pane: &mut Vec<LogLine>) {
        let lines = self.drain();
        if lines.is_empty() {
            return;
        }
        pane.extend(lines);
        if pane.len() > MAX_LOG_LINES {
            let excess = pane.len() - LOG_TRIM_TO;
            pane.drain(..excess);
        }
    }
}

/// A [`tracing_subscriber::Layer`] that captures log events into a
/// [`LogBuffer`] so a frontend can render them.
pub struct LogCaptureLayer {
    buffer: LogBuffer,
}

impl LogCaptureLayer {
    /// Create a new capture layer and its associated [`LogBuffer`].
    pub fn new() -> (Self, LogBuffer) {
        let buffer = LogBuffer::new();
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for LogCaptureLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = match *event.metadata().level() {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        };

        let mut message = visitor.message;
        if !visitor.fields.is_empty() {
            let extras: Vec<String> = visitor
                .fields
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            if message.is_empty() {
                message = extras.join(" ");
            } else {
                message = format!("{message} {{{}}}", extras.join(", "));
            }
        }

        let line = LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message,
        };

        if let Ok(mut buf) = self.buffer.0.lock() {
            buf.push(line);
            // Bound the buffer between drains.
            if buf.len() > MAX_LOG_LINES {
                let trim_to = buf.len() - LOG_TRIM_TO;
                buf.drain(..trim_to);
            }
        }
    }
}

/// Pulls the `message` field and any extra key-value fields out of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            // Debug formatting wraps strings in quotes; unwrap them.
            let raw = format!("{value:?}");
            self.message = match raw
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
            {
                Some(inner) => inner.to_string(),
                None => raw,
            };
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn events_land_in_the_buffer() {
        let (layer, buffer) = LogCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hello");
            tracing::warn!(code = 7, "uh oh");
        });

        let lines = buffer.drain();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].message, "hello");
        assert_eq!(lines[1].level, LogLevel::Warn);
        assert_eq!(lines[1].message, "uh oh {code=7}");
        assert!(buffer.drain().is_empty(), "drain should empty the buffer");
    }

    #[test]
    fn buffer_trims_when_over_the_cap() {
        let (layer, buffer) = LogCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            for i in 0..(MAX_LOG_LINES + 10) {
                tracing::info!("line {i}");
            }
        });

        let lines = buffer.drain();
        assert!(lines.len() <= MAX_LOG_LINES);
        let last = lines.last().unwrap();
        assert_eq!(last.message, format!("line {}", MAX_LOG_LINES + 9));
    }

    #[test]
    fn drain_into_caps_the_pane() {
        let (layer, buffer) = LogCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        // A pane already sitting at the cap from earlier frames.
        let mut pane: Vec<LogLine> = (0..MAX_LOG_LINES)
            .map(|i| LogLine {
                time: String::new(),
                level: LogLevel::Info,
                message: format!("old {i}"),
            })
            .collect();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("fresh");
        });
        buffer.drain_into(&mut pane);

        assert_eq!(pane.len(), LOG_TRIM_TO);
        assert_eq!(pane.last().unwrap().message, "fresh");
        assert_eq!(
            pane.first().unwrap().message,
            format!("old {}", MAX_LOG_LINES - LOG_TRIM_TO + 1),
            "oldest lines go first"
        );
    }

    #[test]
    fn drain_into_leaves_a_quiet_pane_alone() {
        let (_layer, buffer) = LogCaptureLayer::new();
        let mut pane = vec![LogLine {
            time: String::new(),
            level: LogLevel::Info,
            message: "kept".into(),
        }];

        buffer.drain_into(&mut pane);

        assert_eq!(pane.len(), 1);
        assert_eq!(pane[0].message, "kept");
    }

    #[test]
    fn level_labels_are_fixed_width() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.label().len(), 5);
        }
    }
}

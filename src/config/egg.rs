//! HTTP server bootstrap and request-scoped log line format.

use chrono::Utc;
use serde::Serialize;

/// Port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 6001;

/// Rendered in place of a context field the request never set.
const UNDEFINED: &str = "undefined";

/// Formats one log line from a request-scoped record.
pub type ContextLoggerFormat = fn(&LogRecord) -> String;

/// Server settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EggConfig {
    #[serde(skip)]
    pub context_logger_format: ContextLoggerFormat,
    pub port: u16,
}

impl Default for EggConfig {
    fn default() -> Self {
        Self {
            context_logger_format: format_context_line,
            port: DEFAULT_PORT,
        }
    }
}

/// One log record emitted while serving a request.
#[derive(Debug, Clone, Default)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: String,
    pub pid: u32,
    pub ctx: RequestContext,
    pub message: String,
}

/// Per-request state visible to the logger.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub req_id: Option<String>,
    pub user_id: Option<String>,
    /// Request start, unix epoch milliseconds.
    pub start_time: Option<i64>,
    pub method: Option<String>,
    pub url: Option<String>,
}

/// Formats `record` using the current time for the elapsed column.
pub fn format_context_line(record: &LogRecord) -> String {
    format_context_line_at(record, Utc::now().timestamp_millis())
}

/// Formats `record` as
/// `<timestamp> <LEVEL> <pid> [<reqId> <userId> - <elapsed>ms <method> <url>] <message>`.
///
/// Elapsed time is `now_ms` minus the request start, so it reflects when the
/// line was emitted rather than when the response completed.
pub fn format_context_line_at(record: &LogRecord, now_ms: i64) -> String {
    let ctx = &record.ctx;
    let elapsed = match ctx.start_time {
        Some(start) => now_ms.saturating_sub(start).to_string(),
        None => "NaN".to_string(),
    };

    format!(
        "{} {} {} [{} {} - {}ms {} {}] {}",
        record.timestamp,
        record.level,
        record.pid,
        or_undefined(&ctx.req_id),
        or_undefined(&ctx.user_id),
        elapsed,
        or_undefined(&ctx.method),
        or_undefined(&ctx.url),
        record.message
    )
}

fn or_undefined(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNDEFINED)
}

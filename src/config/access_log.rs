//! Access log filtering.

use regex::Regex;
use serde::{Serialize, Serializer};

/// Default ignore pattern: the API-doc UI and its assets.
const SWAGGER_UI_PATTERN: &str = r"/swagger-u.*";

/// Access log middleware settings.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogConfig {
    /// Paths matching any of these patterns are not logged.
    #[serde(serialize_with = "serialize_patterns")]
    pub ignore: Vec<Regex>,
}

impl AccessLogConfig {
    /// Returns true if requests to `path` are excluded from the access log.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore.iter().any(|re| re.is_match(path))
    }
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            // Literal pattern, compiled once at boot.
            ignore: vec![Regex::new(SWAGGER_UI_PATTERN).expect("valid swagger-ui pattern")],
        }
    }
}

fn serialize_patterns<S>(patterns: &[Regex], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(patterns.iter().map(Regex::as_str))
}

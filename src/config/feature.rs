//! Framework feature switches.

use serde::Serialize;

/// Which logger implementation backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerBackend {
    Midway,
    Egg,
}

/// Feature switches read by the framework at boot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidwayFeature {
    /// true selects the midway logger, false keeps egg-logger.
    pub replace_egg_logger: bool,
}

impl MidwayFeature {
    pub fn logger_backend(&self) -> LoggerBackend {
        if self.replace_egg_logger {
            LoggerBackend::Midway
        } else {
            LoggerBackend::Egg
        }
    }
}

impl Default for MidwayFeature {
    fn default() -> Self {
        Self {
            replace_egg_logger: true,
        }
    }
}

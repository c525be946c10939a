//! Startup configuration for the web application.
//!
//! `AppConfig::from_app_info` derives the complete record from application
//! metadata. The record is built once at boot and only read afterwards.

mod access_log;
mod app;
mod egg;
mod error;
mod feature;
mod middleware;
mod security;
mod sequelize;
mod task;

pub use access_log::AccessLogConfig;
pub use app::AppInfo;
pub use egg::{
    ContextLoggerFormat, DEFAULT_PORT, EggConfig, LogRecord, RequestContext, format_context_line,
    format_context_line_at,
};
pub use error::ConfigError;
pub use feature::{LoggerBackend, MidwayFeature};
pub use middleware::{Middleware, MiddlewarePipeline};
pub use security::{CsrfConfig, SecurityConfig};
pub use sequelize::{
    DefineOptions, Dialect, DialectOptions, Engine, PoolOptions, QueryLogger,
    SLOW_QUERY_THRESHOLD_MS, SequelizeConfig, SequelizeOptions, log_slow_query,
    slow_query_message,
};
pub use task::{JobOptions, RepeatOptions, TASK_KEY_PREFIX, TaskConfig};

use serde::Serialize;

/// Appended to the app name to form the cookie signing key.
pub const KEYS_SUFFIX: &str = "_1640593084642_6476";

/// Root configuration record consumed by the framework at boot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Cookie/session signing key. Sensitive.
    pub keys: String,
    /// Paths excluded from the access log.
    pub access_log_config: AccessLogConfig,
    /// Middleware in execution order.
    pub middleware: MiddlewarePipeline,
    pub midway_feature: MidwayFeature,
    pub security: SecurityConfig,
    /// Task queue key prefix and scheduling defaults.
    pub task: TaskConfig,
    /// Database connection and dialect policy.
    pub sequelize: SequelizeConfig,
    /// Server port and context log format.
    pub egg: EggConfig,
}

impl AppConfig {
    /// Builds the configuration for the given application.
    pub fn from_app_info(info: &AppInfo) -> Self {
        Self {
            keys: format!("{}{}", info.name, KEYS_SUFFIX),
            access_log_config: AccessLogConfig::default(),
            middleware: MiddlewarePipeline::default(),
            midway_feature: MidwayFeature::default(),
            security: SecurityConfig::default(),
            task: TaskConfig::default(),
            sequelize: SequelizeConfig::default(),
            egg: EggConfig::default(),
        }
    }

    /// Renders the record as YAML with the framework's key names.
    ///
    /// Callbacks are omitted and the signing key is masked.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        let mut redacted = self.clone();
        redacted.keys = "******".to_string();
        Ok(serde_yaml::to_string(&redacted)?)
    }
}

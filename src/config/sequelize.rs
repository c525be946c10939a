//! Relational database connection and dialect policy.
//!
//! The values mirror what the ORM connector expects. `pool_options` and
//! `connect_options` translate the policy onto sqlx's MySQL driver.

use log::LevelFilter;
use serde::Serialize;
use sqlx::ConnectOptions;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use super::ConfigError;

/// Statements running longer than this are logged at WARN.
pub const SLOW_QUERY_THRESHOLD_MS: f64 = 5000.0;

/// Hook invoked once per executed statement with its text and elapsed
/// milliseconds. Elapsed time is only passed when `benchmark` is on.
pub type QueryLogger = fn(&str, Option<f64>);

/// ORM settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SequelizeConfig {
    pub options: SequelizeOptions,
    /// Create tables from models at boot. Off outside local experiments.
    pub sync: bool,
}

/// Relational engine family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Mysql,
}

/// Table storage engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Innodb,
}

/// Connection and dialect options handed to the ORM connector.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequelizeOptions {
    pub encrypt: bool,
    pub dialect: Dialect,
    pub define: DefineOptions,
    /// Session timezone, independent of the host.
    pub timezone: String,
    /// Pass elapsed time to `logging`.
    pub benchmark: bool,
    #[serde(skip)]
    pub logging: QueryLogger,
    pub pool: PoolOptions,
    pub dialect_options: DialectOptions,
}

impl SequelizeOptions {
    /// Pool bounds as sqlx pool options.
    pub fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.pool.max)
            .min_connections(self.pool.min)
            .acquire_timeout(Duration::from_millis(self.pool.acquire))
            .idle_timeout(Duration::from_millis(self.pool.idle))
    }

    /// Connect options for `url` with the session timezone applied.
    ///
    /// With `benchmark` on, sqlx's own slow statement log is enabled at WARN for
    /// statements strictly over the threshold. It approximates `logging`: the
    /// line is sqlx's format, and a custom `logging` fn is not consulted there.
    /// Call `report` to run the hook itself.
    pub fn connect_options(&self, url: &str) -> Result<MySqlConnectOptions, ConfigError> {
        let options = MySqlConnectOptions::from_str(url)?.timezone(Some(self.timezone.clone()));

        if !self.benchmark {
            return Ok(options);
        }

        // sqlx logs at elapsed >= threshold; one nanosecond more makes it strict.
        let threshold = Duration::from_secs_f64(SLOW_QUERY_THRESHOLD_MS / 1000.0)
            + Duration::from_nanos(1);
        Ok(options.log_slow_statements(LevelFilter::Warn, threshold))
    }

    /// Passes one executed statement to the `logging` hook.
    pub fn report(&self, sql: &str, elapsed: Duration) {
        let timing = self.benchmark.then(|| elapsed.as_secs_f64() * 1000.0);
        (self.logging)(sql, timing);
    }
}

impl Default for SequelizeOptions {
    fn default() -> Self {
        Self {
            encrypt: false,
            dialect: Dialect::Mysql,
            define: DefineOptions::default(),
            timezone: "+08:00".to_string(),
            benchmark: true,
            logging: log_slow_query,
            pool: PoolOptions::default(),
            dialect_options: DialectOptions::default(),
        }
    }
}

/// Model definition defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefineOptions {
    /// Add createdAt/updatedAt columns.
    pub timestamps: bool,
    /// Soft delete through a deletedAt column.
    pub paranoid: bool,
    /// Snake_case column names.
    pub underscored: bool,
    /// Use the model name as the table name, no pluralization.
    pub freeze_table_name: bool,
    pub engine: Engine,
}

impl Default for DefineOptions {
    fn default() -> Self {
        Self {
            timestamps: false,
            paranoid: false,
            underscored: false,
            freeze_table_name: true,
            engine: Engine::Innodb,
        }
    }
}

/// Connection pool bounds. Times are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolOptions {
    pub max: u32,
    pub min: u32,
    pub acquire: u64,
    pub idle: u64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max: 10,
            min: 5,
            acquire: 60000,
            idle: 30000,
        }
    }
}

/// Options passed straight to the database driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialectOptions {
    /// Connect timeout in milliseconds.
    pub connect_timeout: u64,
    /// Return DATETIME values as local strings, not UTC.
    pub date_strings: bool,
    pub type_cast: bool,
    /// Return BIGINT and DECIMAL as strings.
    pub big_number_strings: bool,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            connect_timeout: 30000,
            date_strings: true,
            type_cast: true,
            big_number_strings: true,
        }
    }
}

/// Builds the warning line for a slow statement, or None below the threshold.
pub fn slow_query_message(sql: &str, timing_ms: Option<f64>) -> Option<String> {
    match timing_ms {
        Some(ms) if ms > SLOW_QUERY_THRESHOLD_MS => Some(format!("[sequelize]({} ms) {}", ms, sql)),
        _ => None,
    }
}

/// Default `logging` hook: warns about statements slower than the threshold.
pub fn log_slow_query(sql: &str, timing_ms: Option<f64>) {
    if let Some(message) = slow_query_message(sql, timing_ms) {
        warn!("{}", message);
    }
}

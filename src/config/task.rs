//! Background task queue configuration.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Prefix of every key the task queue writes to the shared store.
pub const TASK_KEY_PREFIX: &str = "midway-task";

/// Task queue settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Namespace for persisted queue keys, keeps them apart from unrelated keys.
    pub prefix: String,
    pub default_job_options: JobOptions,
}

impl TaskConfig {
    /// Builds the store key for a job of `queue`.
    pub fn queue_key(&self, queue: &str, id: &str) -> String {
        format!("{}:{}:{}", self.prefix, queue, id)
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            prefix: TASK_KEY_PREFIX.to_string(),
            default_job_options: JobOptions::default(),
        }
    }
}

/// Options applied to every job unless overridden.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobOptions {
    pub repeat: RepeatOptions,
}

/// Repeat (cron) schedule settings.
#[derive(Debug, Clone, Serialize)]
pub struct RepeatOptions {
    /// Cron expressions are evaluated in this zone, not the host's.
    pub tz: Tz,
}

impl RepeatOptions {
    /// Converts an instant into the schedule's wall-clock time.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            tz: Tz::Asia__Shanghai,
        }
    }
}

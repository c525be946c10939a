//! Middleware pipeline ordering.

use serde::{Serialize, Serializer};
use std::fmt;

use super::ConfigError;

/// A named unit of the request-handling pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Middleware {
    /// Tags each request with an id that later units reference.
    RequestId,
    /// Wraps handler results into the response envelope.
    Format,
    /// Writes one access log line per request.
    AccessLog,
    /// Turns failures from every earlier unit into error responses.
    ErrorHandler,
}

impl Middleware {
    /// Identifier the framework's middleware loader resolves.
    pub fn name(&self) -> &'static str {
        match self {
            Middleware::RequestId => "requestIdMiddleware",
            Middleware::Format => "formatMiddleware",
            Middleware::AccessLog => "accessLogMiddleware",
            Middleware::ErrorHandler => "errorHandlerMiddleware",
        }
    }
}

impl fmt::Display for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Middleware {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Ordered middleware sequence, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MiddlewarePipeline(Vec<Middleware>);

impl MiddlewarePipeline {
    pub fn new(units: Vec<Middleware>) -> Self {
        Self(units)
    }

    pub fn units(&self) -> &[Middleware] {
        &self.0
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(Middleware::name).collect()
    }

    /// Checks the ordering the rest of the pipeline relies on.
    ///
    /// Request-ID tagging must run first and the error handler must run last;
    /// every unit may appear at most once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.0.first() != Some(&Middleware::RequestId) {
            return Err(ConfigError::Validation(format!(
                "middleware: {} must run first",
                Middleware::RequestId
            )));
        }

        if self.0.last() != Some(&Middleware::ErrorHandler) {
            return Err(ConfigError::Validation(format!(
                "middleware: {} must run last",
                Middleware::ErrorHandler
            )));
        }

        for (i, unit) in self.0.iter().enumerate() {
            if self.0[..i].contains(unit) {
                return Err(ConfigError::Validation(format!(
                    "middleware: {} listed more than once",
                    unit
                )));
            }
        }

        Ok(())
    }
}

impl Default for MiddlewarePipeline {
    fn default() -> Self {
        Self(vec![
            Middleware::RequestId,
            Middleware::Format,
            Middleware::AccessLog,
            Middleware::ErrorHandler,
        ])
    }
}

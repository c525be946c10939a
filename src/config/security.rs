//! Security configuration.

use serde::Serialize;

/// Security middleware settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecurityConfig {
    pub csrf: CsrfConfig,
}

/// CSRF protection settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CsrfConfig {
    pub enable: bool,
}

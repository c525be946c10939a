//! Startup configuration for a convention-driven web application.

pub mod config;

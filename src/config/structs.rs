//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Host-facing construction options (`nanami_address`).
pub mod gate_config;

/// HTTP gate service configuration.
pub mod http_server_config;

/// Authority address, refresh, batching and extraction settings.
pub mod nanami_config;

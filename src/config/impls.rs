//! Implementation blocks for configuration loading, saving and validation.

/// Configuration: defaults, TOML load/save, validation.
pub mod configuration;

/// ConfigurationError: Display and Error.
pub mod configuration_error;

/// GateConfig: host options parsing.
pub mod gate_config;

/// NanamiConfig: defaults, validation, durations.
pub mod nanami_config;

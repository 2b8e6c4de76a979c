//! Configuration management module.
//!
//! The binary reads `config.toml`:
//!
//! ```toml
//! log_level = "info"
//! log_console_interval = 60
//!
//! [nanami]
//! nanami_address = "http://127.0.0.1:8000/"
//! refresh_interval = 300
//! batch_size = 50
//!
//! [http_server]
//! enabled = true
//! bind_address = "0.0.0.0:6970"
//! threads = 4
//! keep_alive = 60
//! request_timeout = 15
//! ```
//!
//! A host embedding the gate only needs a [`GateConfig`](structs::gate_config::GateConfig)
//! with the nanami address; everything else falls back to the defaults of
//! [`NanamiConfig`](structs::nanami_config::NanamiConfig).

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

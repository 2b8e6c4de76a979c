//! # nanami-gate
//!
//! Admission control for a BitTorrent tracker, backed by the nanami
//! authority service.
//!
//! ## Overview
//!
//! Before a tracker serves an announce it asks the gate whether the user,
//! the torrent and the client software are approved. The answer comes from
//! an in-memory allow-list snapshot that is refreshed from nanami in the
//! background, so a decision never waits on the network. Every allowed
//! announce is queued and pushed back to nanami in batches as telemetry.
//!
//! ## Features
//!
//! - **Non-blocking decisions**: snapshot reads are a pointer clone
//! - **Background refresh**: one fetch at start, then on a fixed interval,
//!   stale data kept on failure
//! - **Batched telemetry**: bounded queue, flush on size or timer, final
//!   flush on shutdown
//! - **Pluggable user tokens**: path segment or query parameter
//! - **HTTP adapter**: actix-web sidecar answering with bencoded verdicts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nanami_gate::config::structs::nanami_config::NanamiConfig;
//! use nanami_gate::gate::structs::approval_gate::ApprovalGate;
//!
//! let gate = ApprovalGate::start(NanamiConfig::new("http://127.0.0.1:8000/")).await?;
//! if let Err(reason) = gate.decide_announce(&request) {
//!     // reply with a tracker failure carrying reason.to_string()
//! }
//! gate.shutdown().await;
//! ```
//!
//! ## Modules
//!
//! - [`approval`] - allow-list snapshot and refreshing cache
//! - [`batcher`] - announce telemetry queue and consumer
//! - [`common`] - query parsing, logging setup, error wrapper
//! - [`config`] - TOML configuration and validation
//! - [`gate`] - the approval gate and user token strategies
//! - [`http`] - actix-web adapter
//! - [`nanami`] - authority client
//! - [`stats`] - gate counters
//! - [`structs`] - CLI arguments
//! - [`tracker`] - BitTorrent identifiers and request shapes

/// Allow-list snapshot and the cache refreshing it.
pub mod approval;

/// Announce telemetry batching.
pub mod batcher;

/// Common utilities and shared functionality.
///
/// Contains the query string parser, hex formatting, logging setup and the
/// generic error wrapper used by the binary.
pub mod common;

/// Configuration management module.
///
/// Loads, validates and writes the TOML configuration, and provides the
/// host-facing `GateConfig`.
pub mod config;

/// The approval gate.
pub mod gate;

/// HTTP adapter for the gate.
pub mod http;

/// Client for the nanami authority service.
pub mod nanami;

/// Statistics counters.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// BitTorrent primitives.
pub mod tracker;

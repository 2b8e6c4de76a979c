//! Request-time approval gate.
//!
//! `ApprovalGate` is what a tracker calls for every announce and scrape. An
//! announce is checked against the current allow-list snapshot in a fixed
//! order, user first, then torrent, then client, and the first failing
//! check is the verdict. Nothing on this path waits on nanami: the snapshot
//! read is a pointer clone and telemetry goes through a non-blocking queue.
//!
//! Scrapes only expose aggregate swarm numbers and are always allowed.
//!
//! # Example
//!
//! ```rust,ignore
//! use nanami_gate::config::structs::gate_config::GateConfig;
//! use nanami_gate::gate::structs::approval_gate::ApprovalGate;
//!
//! let gate = ApprovalGate::from_gate_config(GateConfig { nanami_address: "http://nanami/".into() }).await?;
//! match gate.decide_announce(&request) {
//!     Ok(()) => { /* continue with the announce */ }
//!     Err(reason) => { /* fail the tracker response with reason.to_string() */ }
//! }
//! gate.shutdown().await;
//! ```

/// Deny reasons.
pub mod enums;

/// Implementation blocks for the gate and extractors.
pub mod impls;

/// Gate and extractor structs.
pub mod structs;

/// Host hook and user token extraction traits.
pub mod traits;

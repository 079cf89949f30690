//! junos-exporter — Prometheus exporter for Juniper device interface counters
//!
//! The exporter polls a static list of targets over SNMP on every scrape of
//! its `/metrics` endpoint, walks the interface name/description tables and
//! six counter tables of the standard interface MIB, and republishes the
//! rows as labeled gauges. One gauge per target (`junos_up`) reports whether
//! the poll completed without a fatal error.
//!
//! ## Modules
//!
//! * `config` — Configuration structures, loading, validation, and defaults.
//!   Supports TOML configuration files with validation via the `validator` crate.
//!
//! * `core` — The collection engine:
//!   - Per-target SNMP table walks and sticky error tracking
//!   - Row-index label correlation
//!   - Raw counter unit conversion
//!   - Concurrent fan-out across all configured targets
//!
//! * `logger` — Centralized logging initialization using `tracing`.
//!   Supports console output in multiple formats (compact, pretty, JSON)
//!   and optional systemd journald integration.
//!
//! * `snmp` — The SNMP transport boundary: connector/session traits, typed
//!   value decoding, and the `snmp2`-backed production implementation.
//!
//! * `web` — The axum HTTP surface exposing `/metrics` and `/health`.

pub mod config;
pub mod core;
pub mod logger;
pub mod snmp;
pub mod web;

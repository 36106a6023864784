//! Tracing subscriber setup.
//!
//! Every module logs through `tracing` macros and spans. This module installs
//! the subscriber that turns them into lines on stderr, so log output never
//! mixes with the listing printed on stdout.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option or `--trace-level` flag
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use docfinder::observability::init_tracing;
//! use docfinder::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("driver started");
//! ```

mod init;

pub use init::init_tracing;

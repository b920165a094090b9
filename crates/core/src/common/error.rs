//! Error definitions for configuration and trace-token parsing.
//!
//! Only conditions that prevent a run from being set up are Rust errors.
//! Simulated conditions — illegal references and logical-clock overflow —
//! are counters and warning events; the simulation continues through them.

use thiserror::Error;

/// Rejected simulator configuration.
///
/// Raised once at construction time; a running simulation never produces
/// these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero page size makes page/offset arithmetic undefined.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// An empty page table leaves no legal virtual address.
    #[error("page count must be greater than zero")]
    ZeroPageCount,

    /// At least one frame is required so every fault can be resolved.
    #[error("frame count must be greater than zero")]
    ZeroFrameCount,

    /// Unrecognized replacement-policy name.
    #[error("unknown replacement policy {0:?} (expected \"fifo\" or \"lru\")")]
    UnknownPolicy(String),
}

/// An access tag in a trace that is neither a read nor a write.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown access kind {0:?} (expected R or W)")]
pub struct ParseAccessError(pub String);

//! Configuration for the paging simulator.
//!
//! This module defines the structures that parameterize a run. It provides:
//! 1. **Defaults:** Baseline table geometry (page size, page count, frame count).
//! 2. **Structures:** The root [`SimConfig`] with serde defaults per field.
//! 3. **Enums:** The replacement-policy selector, fixed for the whole run.
//!
//! Configuration is supplied via JSON or built in code; invalid combinations
//! are a [`ConfigError`] at construction time, never a simulated fault.

use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline table geometry when not explicitly
/// overridden.
mod defaults {
    /// Default page size in bytes (4 KiB).
    pub const PAGE_SIZE: u32 = 4096;

    /// Default number of virtual pages (64 pages, 256 KiB address space).
    pub const PAGE_COUNT: usize = 64;

    /// Default number of physical frames (8 frames, 32 KiB of memory).
    pub const FRAME_COUNT: usize = 8;
}

/// Page-replacement policy algorithms.
///
/// Specifies how a victim page is chosen when a fault arrives and no free
/// frame exists. The policy is selected once at configuration time and is
/// fixed for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First-In First-Out replacement policy.
    ///
    /// Evicts the page that has been resident longest, independent of
    /// access pattern. O(1) victim selection via a circular occupied list.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,

    /// Least Recently Used replacement policy, timestamp variant.
    ///
    /// Evicts the page with the oldest logical-clock stamp. O(page count)
    /// victim selection by scanning the page table.
    #[serde(alias = "Lru")]
    Lru,
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    /// Parses a policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Root configuration structure for a simulated run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let config = SimConfig::default();
/// assert_eq!(config.page_size, 4096);
/// assert_eq!(config.policy, PolicyKind::Fifo);
/// assert!(config.validate().is_ok());
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let json = r#"{
///     "page_size": 256,
///     "page_count": 16,
///     "frame_count": 4,
///     "policy": "LRU"
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.page_count, 16);
/// assert_eq!(config.policy, PolicyKind::Lru);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Page size in bytes.
    #[serde(default = "SimConfig::default_page_size")]
    pub page_size: u32,

    /// Number of entries in the page table.
    #[serde(default = "SimConfig::default_page_count")]
    pub page_count: usize,

    /// Number of entries in the frame table.
    #[serde(default = "SimConfig::default_frame_count")]
    pub frame_count: usize,

    /// Replacement policy used when no free frame exists.
    #[serde(default)]
    pub policy: PolicyKind,
}

impl SimConfig {
    /// Returns the default page size in bytes.
    const fn default_page_size() -> u32 {
        defaults::PAGE_SIZE
    }

    /// Returns the default page count.
    const fn default_page_count() -> usize {
        defaults::PAGE_COUNT
    }

    /// Returns the default frame count.
    const fn default_frame_count() -> usize {
        defaults::FRAME_COUNT
    }

    /// Checks the configuration for combinations the simulator cannot run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the page size, page count, or frame
    /// count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.page_count == 0 {
            return Err(ConfigError::ZeroPageCount);
        }
        if self.frame_count == 0 {
            return Err(ConfigError::ZeroFrameCount);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            page_count: defaults::PAGE_COUNT,
            frame_count: defaults::FRAME_COUNT,
            policy: PolicyKind::default(),
        }
    }
}

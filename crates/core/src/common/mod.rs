//! Common types and constants shared across the simulator.

/// Physical and virtual address types.
pub mod addr;
/// Configuration and parse error definitions.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use error::{ConfigError, ParseAccessError};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of memory reference being simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKind {
    /// Read reference; counts the access.
    Read,
    /// Write reference; counts the access and marks the page modified.
    Write,
}

impl AccessKind {
    /// One-letter tag used in traces and detailed output.
    pub const fn tag(self) -> char {
        match self {
            Self::Read => 'R',
            Self::Write => 'W',
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for AccessKind {
    type Err = ParseAccessError;

    /// Parses a trace tag: `R`/`r` for reads, `W`/`w` for writes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "r" => Ok(Self::Read),
            "W" | "w" => Ok(Self::Write),
            other => Err(ParseAccessError(other.to_string())),
        }
    }
}

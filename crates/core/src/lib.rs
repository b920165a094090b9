//! Virtual-memory paging simulator library.
//!
//! This crate implements a deterministic simulation of a virtual-memory manager:
//! 1. **Translation:** Virtual-to-physical address translation with page/offset arithmetic.
//! 2. **Faulting:** Page-fault handling backed by a circular free-frame list.
//! 3. **Replacement:** Pluggable FIFO and LRU(t) victim-selection policies.
//! 4. **Accounting:** Read, write, fault, write-back, and illegal-reference counters.
//! 5. **Reporting:** Read-only table snapshots and textual reports over final state.
//!
//! The simulator is single-threaded and fully synchronous: one reference is
//! processed to completion before the next is accepted. Given the same
//! configuration, policy, and trace, the final tables and counters are
//! bit-for-bit reproducible.

/// Common types (addresses, access kinds, error definitions).
pub mod common;
/// Simulator configuration (defaults, policy selection, validation).
pub mod config;
/// Memory-management unit: page/frame tables, fault handling, replacement policies.
pub mod mmu;
/// Textual reports rendered from table snapshots.
pub mod report;
/// Reference and fault accounting.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::{PolicyKind, SimConfig};
/// The simulated MMU; construct with `Mmu::new`.
pub use crate::mmu::Mmu;
/// Counters collected over a simulated run.
pub use crate::stats::SimStats;

//! Page-replacement policies.
//!
//! Implements victim selection for page faults that arrive when no free
//! frame exists.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out — O(1) selection via a circular occupied-frame list.
//! - `Lru`: Least Recently Used (timestamp) — O(page count) selection by table scan.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used (timestamp) replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::config::PolicyKind;

use super::frame_table::FrameTable;
use super::page_table::PageTable;

/// Trait for page-replacement policies.
///
/// The fault handler owns the eviction contract itself — clearing the
/// victim, accounting the write-back, installing the new page — and calls
/// back into the policy for ordering state only.
pub trait ReplacementPolicy {
    /// Selects the page to evict.
    ///
    /// Called only when no free frame exists. Returns `None` only when no
    /// page is resident, which a positive frame count makes unreachable.
    fn select_victim(&self, pages: &PageTable, frames: &FrameTable) -> Option<usize>;

    /// Records that `frame` just received a freshly installed page.
    ///
    /// `replaced` is true when the install reused an occupied frame after
    /// an eviction rather than taking a frame off the free list.
    fn record_install(&mut self, frames: &mut FrameTable, frame: usize, replaced: bool);

    /// Records a reference to a resident page.
    fn record_reference(&mut self, pages: &mut PageTable, page: usize);

    /// Position of `frame` in the eviction queue, where 1 is the next
    /// victim. `None` for policies without an explicit queue.
    fn queue_position(&self, _frames: &FrameTable, _frame: usize) -> Option<usize> {
        None
    }

    /// Timestamp written when a page is installed over an evicted one.
    fn install_stamp(&self) -> u32 {
        0
    }

    /// Current logical-clock value, for policies that keep one.
    fn clock(&self) -> Option<u32> {
        None
    }

    /// True once the logical clock has wrapped during this run.
    fn clock_wrapped(&self) -> bool {
        false
    }

    /// Policy name for reports.
    fn name(&self) -> &'static str;
}

/// Constructs the policy selected by the configuration.
pub fn build(kind: PolicyKind) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy::new()),
        PolicyKind::Lru => Box::new(LruPolicy::new()),
    }
}

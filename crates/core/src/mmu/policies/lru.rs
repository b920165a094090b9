//! Least Recently Used (LRU) replacement policy, timestamp variant.
//!
//! Every reference stamps the page with the current value of a logical
//! clock; eviction scans the page table and picks the present page with the
//! minimum stamp, breaking ties toward the lowest page index (the scan runs
//! in ascending order). Keeping no per-install bookkeeping trades FIFO's
//! O(1) ordering structure for an O(page count) scan per fault — a
//! deliberate simplicity/performance trade-off.
//!
//! The clock is a wrapping `u32`. After a wrap, ordering among pages
//! stamped before it is unreliable until they are referenced again; the
//! wrap is surfaced as a warning and the run continues.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `select_victim()`: O(page count)
//!   - `record_reference()`: O(1)
//! - **Space Complexity:** O(1) — stamps live in the page table.

use tracing::warn;

use super::ReplacementPolicy;
use crate::mmu::frame_table::FrameTable;
use crate::mmu::page_table::PageTable;

/// LRU policy state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy {
    /// Logical reference clock; incremented after every recorded reference.
    clock: u32,
    /// Sticky flag set when the clock wraps past `u32::MAX`.
    wrapped: bool,
}

impl LruPolicy {
    /// Creates an LRU policy with the clock at zero.
    pub const fn new() -> Self {
        Self::with_clock(0)
    }

    /// Creates an LRU policy with the clock preset.
    ///
    /// Exists so overflow behaviour can be exercised without simulating
    /// four billion references.
    pub const fn with_clock(clock: u32) -> Self {
        Self {
            clock,
            wrapped: false,
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Linear scan for the present page with the minimum timestamp.
    fn select_victim(&self, pages: &PageTable, _frames: &FrameTable) -> Option<usize> {
        let mut victim = None;
        let mut min_stamp = u32::MAX;

        for (page, entry) in pages.iter() {
            if entry.present && (victim.is_none() || entry.timestamp < min_stamp) {
                min_stamp = entry.timestamp;
                victim = Some(page);
            }
        }
        victim
    }

    /// LRU recovers ordering from timestamps; no install bookkeeping.
    fn record_install(&mut self, _frames: &mut FrameTable, _frame: usize, _replaced: bool) {}

    /// Stamps the page with the current clock, then advances the clock.
    fn record_reference(&mut self, pages: &mut PageTable, page: usize) {
        pages[page].timestamp = self.clock;
        self.clock = self.clock.wrapping_add(1);

        if self.clock == 0 {
            self.wrapped = true;
            warn!("logical clock wrapped; LRU ordering is degraded until resident pages are re-referenced");
        }
    }

    fn install_stamp(&self) -> u32 {
        self.clock
    }

    fn clock(&self) -> Option<u32> {
        Some(self.clock)
    }

    fn clock_wrapped(&self) -> bool {
        self.wrapped
    }

    fn name(&self) -> &'static str {
        "LRU"
    }
}

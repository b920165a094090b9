//! First-In, First-Out (FIFO) replacement policy.
//!
//! Evicts the page that has been resident longest, regardless of how
//! recently it was accessed. Occupied frames form a circular list threaded
//! through the frame table's `next` links; the tail marks the newest
//! member, so the oldest — the next victim — is always `tail.next`.
//! Insertion order is never re-sorted on access.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `select_victim()`: O(1)
//!   - `record_install()`: O(1)
//!   - `queue_position()`: O(frame count), used only by snapshots.
//! - **Space Complexity:** O(1) — a single tail index; links live in the frame table.
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot pages).

use super::ReplacementPolicy;
use crate::mmu::frame_table::FrameTable;
use crate::mmu::page_table::PageTable;

/// FIFO policy state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoPolicy {
    /// Newest member of the circular occupied list; the oldest is its
    /// `next`. `None` until the first frame is occupied.
    occupied_tail: Option<usize>,
}

impl FifoPolicy {
    /// Creates a FIFO policy with an empty occupied list.
    pub const fn new() -> Self {
        Self {
            occupied_tail: None,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Returns the page loaded in the oldest occupied frame.
    fn select_victim(&self, _pages: &PageTable, frames: &FrameTable) -> Option<usize> {
        let tail = self.occupied_tail?;
        frames.page_of(frames.next(tail))
    }

    /// Links a newly filled frame into the occupied list and makes it the
    /// tail.
    ///
    /// On replacement the frame was already the oldest member (`tail.next`),
    /// so moving the tail onto it alone preserves insertion order.
    fn record_install(&mut self, frames: &mut FrameTable, frame: usize, replaced: bool) {
        if !replaced {
            match self.occupied_tail {
                // First occupied frame closes the ring on itself.
                None => frames.set_next(frame, frame),
                Some(tail) => {
                    let head = frames.next(tail);
                    frames.set_next(frame, head);
                    frames.set_next(tail, frame);
                }
            }
        }

        self.occupied_tail = Some(frame);
    }

    /// FIFO keeps no per-reference state.
    fn record_reference(&mut self, _pages: &mut PageTable, _page: usize) {}

    /// Walks the occupied ring from the oldest member, counting hops.
    ///
    /// Returns `None` for frames still on the free list; the walk is
    /// bounded by the frame count so disjoint rings cannot loop forever.
    fn queue_position(&self, frames: &FrameTable, frame: usize) -> Option<usize> {
        let tail = self.occupied_tail?;
        let mut cursor = frames.next(tail);

        for position in 1..=frames.frame_count() {
            if cursor == frame {
                return Some(position);
            }
            cursor = frames.next(cursor);
        }
        None
    }

    fn name(&self) -> &'static str {
        "FIFO"
    }
}

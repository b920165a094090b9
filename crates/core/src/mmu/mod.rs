//! Memory Management Unit (MMU) simulation.
//!
//! The single entry point is [`Mmu::translate`]: it validates the virtual
//! address, services a page fault if the page is absent, computes the
//! physical address, and records the reference. Faults are resolved from
//! the circular free-frame list while frames remain, then by the configured
//! replacement policy.

/// Frame table and circular free-frame list.
pub mod frame_table;
/// Page table.
pub mod page_table;
/// Replacement policies (FIFO, LRU).
pub mod policies;

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::common::{AccessKind, ConfigError, PhysAddr, VirtAddr};
use crate::config::SimConfig;
use crate::stats::SimStats;

use self::frame_table::FrameTable;
use self::page_table::PageTable;
use self::policies::ReplacementPolicy;

/// Read-only view of one page-table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    /// Page index.
    pub page: usize,
    /// Page is resident.
    pub present: bool,
    /// Frame holding the page, if resident.
    pub frame: Option<usize>,
    /// Page has been written since installation.
    pub modified: bool,
    /// Logical-clock stamp of the most recent reference (meaningful under
    /// LRU).
    pub timestamp: u32,
}

/// Read-only view of one frame-table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    /// Frame index.
    pub frame: usize,
    /// Occupying page, if any.
    pub page: Option<usize>,
    /// Eviction-queue position under FIFO, where 1 is the next victim.
    pub queue_position: Option<usize>,
}

/// The simulated MMU: tables, replacement policy, and counters.
///
/// Owns all mutable state of a run; there is exactly one mutator and no
/// shared globals, so a `&mut Mmu` is the whole concurrency story.
pub struct Mmu {
    page_size: u32,
    pages: PageTable,
    frames: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
}

impl fmt::Debug for Mmu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mmu")
            .field("page_size", &self.page_size)
            .field("pages", &self.pages.len())
            .field("frames", &self.frames.frame_count())
            .field("policy", &self.policy.name())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Mmu {
    /// Builds the tables to the configured sizes and selects the policy.
    ///
    /// Tables are allocated once here and never grow.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            page_size: config.page_size,
            pages: PageTable::new(config.page_count),
            frames: FrameTable::new(config.frame_count),
            policy: policies::build(config.policy),
            stats: SimStats::default(),
        })
    }

    /// Translates a virtual address, servicing a page fault if needed.
    ///
    /// An address whose page index falls outside the configured range
    /// increments the illegal-reference counter and returns
    /// [`PhysAddr::INVALID`] without touching any table. Every in-range
    /// reference resolves: the fault path always leaves the page resident.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesim_core::common::{AccessKind, VirtAddr};
    /// use pagesim_core::{Mmu, SimConfig};
    ///
    /// let config = SimConfig {
    ///     page_size: 100,
    ///     page_count: 4,
    ///     frame_count: 2,
    ///     ..SimConfig::default()
    /// };
    /// let mut mmu = Mmu::new(&config).unwrap();
    ///
    /// // Page 2, offset 5 faults into the first free frame (frame 0).
    /// let paddr = mmu.translate(VirtAddr::new(205), AccessKind::Read);
    /// assert_eq!(paddr.val(), 5);
    /// assert_eq!(mmu.stats().faults, 1);
    /// ```
    pub fn translate(&mut self, vaddr: VirtAddr, access: AccessKind) -> PhysAddr {
        let page = (vaddr.val() / self.page_size) as usize;
        let offset = vaddr.val() % self.page_size;

        if page >= self.pages.len() {
            self.stats.illegal_refs += 1;
            debug!(addr = vaddr.val(), page, "illegal reference");
            return PhysAddr::INVALID;
        }

        if !self.pages[page].present {
            self.handle_fault(page);
        }

        let Some(frame) = self.pages[page].frame else {
            // Unreachable: the fault path installs the page before returning.
            return PhysAddr::INVALID;
        };
        let paddr = PhysAddr::new(frame as u32 * self.page_size + offset);

        self.record_reference(page, access);
        trace!(
            op = %access,
            addr = vaddr.val(),
            page,
            frame,
            offset,
            "translated"
        );

        paddr
    }

    /// Page-fault service: allocate a free frame, or evict a victim.
    fn handle_fault(&mut self, page: usize) {
        self.stats.faults += 1;
        debug!(page, "page fault");

        if let Some(frame) = self.frames.allocate() {
            self.install(page, frame, false);
            debug!(page, frame, "lodged in free frame");
        } else if let Some(victim) = self.policy.select_victim(&self.pages, &self.frames) {
            self.replace(victim, page);
        }
    }

    /// Eviction contract, identical for every policy: account the
    /// write-back, reset the victim's entry to the absent state, and
    /// install the new page in the freed frame.
    fn replace(&mut self, victim: usize, page: usize) {
        let Some(frame) = self.pages[victim].frame else {
            // Unreachable: a selected victim is always resident.
            return;
        };

        if self.pages[victim].modified {
            self.stats.write_backs += 1;
            debug!(victim, "writing back modified page");
        }

        let entry = &mut self.pages[victim];
        entry.present = false;
        entry.frame = None;
        entry.modified = false;

        debug!(victim, page, frame, "replacing victim");
        self.install(page, frame, true);
    }

    /// Installs `page` into `frame` and updates policy bookkeeping.
    fn install(&mut self, page: usize, frame: usize, replaced: bool) {
        let stamp = if replaced { self.policy.install_stamp() } else { 0 };

        let entry = &mut self.pages[page];
        entry.present = true;
        entry.frame = Some(frame);
        entry.modified = false;
        entry.referenced = false;
        entry.timestamp = stamp;

        self.frames.set_page(frame, page);
        self.policy.record_install(&mut self.frames, frame, replaced);
    }

    /// Reference recorder: counters, the dirty flag, and policy clocking.
    fn record_reference(&mut self, page: usize, access: AccessKind) {
        match access {
            AccessKind::Read => self.stats.reads += 1,
            AccessKind::Write => {
                self.stats.writes += 1;
                self.pages[page].modified = true;
            }
        }

        self.policy.record_reference(&mut self.pages, page);
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Configured page size in bytes.
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Configured page count.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Configured frame count.
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Number of frames still on the free list.
    pub const fn free_frames(&self) -> usize {
        self.frames.free_frames()
    }

    /// Number of frames holding a page.
    pub fn occupied_frames(&self) -> usize {
        self.frames.occupied_frames()
    }

    /// Active replacement-policy name.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Logical-clock value, when the active policy keeps one (LRU).
    pub fn clock(&self) -> Option<u32> {
        self.policy.clock()
    }

    /// True once the logical clock has wrapped during this run.
    pub fn clock_wrapped(&self) -> bool {
        self.policy.clock_wrapped()
    }

    /// Direct read access to the page table.
    pub const fn page_table(&self) -> &PageTable {
        &self.pages
    }

    /// Direct read access to the frame table.
    pub const fn frame_table(&self) -> &FrameTable {
        &self.frames
    }

    /// Per-page snapshot of the page table.
    pub fn page_snapshots(&self) -> Vec<PageSnapshot> {
        self.pages
            .iter()
            .map(|(page, entry)| PageSnapshot {
                page,
                present: entry.present,
                frame: entry.frame,
                modified: entry.modified,
                timestamp: entry.timestamp,
            })
            .collect()
    }

    /// Per-frame snapshot of the frame table, with FIFO queue positions
    /// where the active policy keeps a queue.
    pub fn frame_snapshots(&self) -> Vec<FrameSnapshot> {
        self.frames
            .iter()
            .map(|(frame, entry)| FrameSnapshot {
                frame,
                page: entry.page,
                queue_position: if entry.page.is_some() {
                    self.policy.queue_position(&self.frames, frame)
                } else {
                    None
                },
            })
            .collect()
    }
}

//! Page table: per-page residency, dirty state, and reference timestamps.
//!
//! One entry per virtual page, allocated once at construction and mutated in
//! place for the life of the run. Entries are written only by the fault
//! handler (installation/eviction) and the reference recorder.

use std::ops::{Index, IndexMut};

/// A single page-table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Page is currently loaded in a frame.
    pub present: bool,
    /// Frame holding the page, if resident.
    pub frame: Option<usize>,
    /// Page has been written since it was installed; a modified victim
    /// costs a write-back on eviction.
    pub modified: bool,
    /// Reserved for FIFO second chance; unused by the base policies.
    pub referenced: bool,
    /// Logical-clock value of the most recent reference (LRU only).
    pub timestamp: u32,
}

/// Fixed-size page table.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Allocates a table of `page_count` absent pages.
    pub fn new(page_count: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::default(); page_count],
        }
    }

    /// Number of entries (the configured page count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pages currently resident.
    pub fn resident_pages(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    /// Iterates entries with their page indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PageTableEntry)> {
        self.entries.iter().enumerate()
    }
}

impl Index<usize> for PageTable {
    type Output = PageTableEntry;

    fn index(&self, page: usize) -> &PageTableEntry {
        &self.entries[page]
    }
}

impl IndexMut<usize> for PageTable {
    fn index_mut(&mut self, page: usize) -> &mut PageTableEntry {
        &mut self.entries[page]
    }
}

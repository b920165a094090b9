//! Frame table and the circular free-frame list.
//!
//! Frames are linked by index through each entry's `next` field. A frame
//! belongs to exactly one circular list at any time: the free list owned
//! here, or — under FIFO — the occupied list threaded through the same
//! links by the policy. The two partitions are disjoint and their sizes sum
//! to the configured frame count.
//!
//! Frames leave the free list on first allocation and never return: there
//! is no unmap operation in this model, so occupied frames are only ever
//! repurposed by eviction.

/// A single frame-table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTableEntry {
    /// Page currently loaded in this frame, if any.
    pub page: Option<usize>,
    /// Index link to the next frame in whichever circular list this frame
    /// is on.
    pub next: usize,
}

/// Fixed-size frame table with an O(1) free-frame allocator.
#[derive(Clone, Debug)]
pub struct FrameTable {
    entries: Vec<FrameTableEntry>,
    /// Most recently freed frame; the allocation head is its `next`.
    /// `None` once every frame has been handed out.
    free_tail: Option<usize>,
    free_frames: usize,
}

impl FrameTable {
    /// Builds the table with every frame on the circular free list.
    ///
    /// The tail points at the highest-numbered frame, so frames are handed
    /// out in ascending index order.
    pub fn new(frame_count: usize) -> Self {
        let entries = (0..frame_count)
            .map(|i| FrameTableEntry {
                page: None,
                next: (i + 1) % frame_count.max(1),
            })
            .collect();

        Self {
            entries,
            free_tail: frame_count.checked_sub(1),
            free_frames: frame_count,
        }
    }

    /// Removes and returns the head of the free list.
    ///
    /// Returns `None` once every frame is occupied. O(1): the head is
    /// `tail.next`; removing it relinks the tail to the following frame, or
    /// empties the list when the head was the sole member.
    pub fn allocate(&mut self) -> Option<usize> {
        let tail = self.free_tail?;
        let head = self.entries[tail].next;

        if head == tail {
            self.free_tail = None;
        } else {
            self.entries[tail].next = self.entries[head].next;
        }

        self.free_frames -= 1;
        Some(head)
    }

    /// True while at least one frame remains on the free list.
    pub const fn has_free(&self) -> bool {
        self.free_tail.is_some()
    }

    /// Number of frames still on the free list.
    pub const fn free_frames(&self) -> usize {
        self.free_frames
    }

    /// Number of frames holding a page.
    pub fn occupied_frames(&self) -> usize {
        self.entries.len() - self.free_frames
    }

    /// Total number of frames (the configured frame count).
    pub fn frame_count(&self) -> usize {
        self.entries.len()
    }

    /// Page loaded in `frame`, if any.
    pub fn page_of(&self, frame: usize) -> Option<usize> {
        self.entries[frame].page
    }

    /// Records that `frame` now holds `page`.
    pub fn set_page(&mut self, frame: usize, page: usize) {
        self.entries[frame].page = Some(page);
    }

    /// Follows the circular link out of `frame`.
    pub fn next(&self, frame: usize) -> usize {
        self.entries[frame].next
    }

    /// Relinks `frame` to point at `next` in its circular list.
    pub fn set_next(&mut self, frame: usize, next: usize) {
        self.entries[frame].next = next;
    }

    /// Iterates entries with their frame indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FrameTableEntry)> {
        self.entries.iter().enumerate()
    }
}

//! Frame-table and free-list unit tests.
//!
//! Exercises the circular free list directly: allocation order, exhaustion,
//! and the free/occupied partition accounting.

use pagesim_core::mmu::frame_table::FrameTable;

#[test]
fn frames_allocate_in_ascending_order() {
    let mut frames = FrameTable::new(3);

    assert_eq!(frames.allocate(), Some(0));
    assert_eq!(frames.allocate(), Some(1));
    assert_eq!(frames.allocate(), Some(2));
    assert_eq!(frames.allocate(), None);
}

#[test]
fn exhausted_list_stays_empty() {
    let mut frames = FrameTable::new(2);
    let _ = frames.allocate();
    let _ = frames.allocate();

    assert!(!frames.has_free());
    assert_eq!(frames.allocate(), None);
    assert_eq!(frames.free_frames(), 0);
    assert_eq!(frames.occupied_frames(), 2);
}

#[test]
fn single_frame_list_empties_on_first_allocation() {
    let mut frames = FrameTable::new(1);

    assert!(frames.has_free());
    assert_eq!(frames.allocate(), Some(0));
    assert!(!frames.has_free());
    assert_eq!(frames.allocate(), None);
}

#[test]
fn partition_sums_to_frame_count() {
    let mut frames = FrameTable::new(5);

    for allocated in 1..=5 {
        let _ = frames.allocate();
        assert_eq!(frames.free_frames() + frames.occupied_frames(), 5);
        assert_eq!(frames.free_frames(), 5 - allocated);
        assert_eq!(frames.occupied_frames(), allocated);
    }
}

#[test]
fn new_table_holds_no_pages() {
    let frames = FrameTable::new(4);

    assert_eq!(frames.frame_count(), 4);
    assert_eq!(frames.free_frames(), 4);
    assert!(frames.iter().all(|(_, e)| e.page.is_none()));
}

#[test]
fn set_page_records_occupancy() {
    let mut frames = FrameTable::new(2);
    let frame = frames.allocate().expect("free frame");

    frames.set_page(frame, 7);
    assert_eq!(frames.page_of(frame), Some(7));
}

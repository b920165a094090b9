//! Replacement-policy unit tests.
//!
//! Covers the FIFO and LRU eviction scenarios, write-back accounting, the
//! uniform post-eviction state, tie-breaking, and clock-wrap behaviour.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pagesim_core::PolicyKind;
use pagesim_core::mmu::frame_table::FrameTable;
use pagesim_core::mmu::page_table::PageTable;
use pagesim_core::mmu::policies::{LruPolicy, ReplacementPolicy};

use crate::common;

#[test]
fn fifo_evicts_the_oldest_page() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);

    common::touch_pages(&mut mmu, &[0, 1, 2]);

    assert_eq!(mmu.stats().faults, 3);
    assert!(!mmu.page_table()[0].present);
    assert!(mmu.page_table()[1].present);
    assert!(mmu.page_table()[2].present);

    let resident: Vec<Option<usize>> = mmu.frame_snapshots().iter().map(|f| f.page).collect();
    assert_eq!(resident, vec![Some(2), Some(1)]);
}

#[test]
fn fifo_queue_positions_track_insertion_order() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);

    common::touch_pages(&mut mmu, &[0, 1, 2]);

    // Page 1 (frame 1) went in before page 2 (frame 0, just replaced), so
    // frame 1 is the next victim.
    let snapshots = mmu.frame_snapshots();
    assert_eq!(snapshots[1].queue_position, Some(1));
    assert_eq!(snapshots[0].queue_position, Some(2));
}

#[test]
fn fifo_ignores_re_references() {
    let mut mmu = common::mmu(100, 8, 3, PolicyKind::Fifo);

    // Re-referencing page 0 must not refresh its position in the queue.
    common::touch_pages(&mut mmu, &[0, 1, 2, 0, 3]);

    assert_eq!(mmu.stats().faults, 4);
    assert!(!mmu.page_table()[0].present);
    assert!(mmu.page_table()[3].present);

    // Next eviction takes page 1, the second insertion.
    common::touch_pages(&mut mmu, &[4]);
    assert!(!mmu.page_table()[1].present);
}

#[test]
fn lru_evicts_the_least_recently_used_page() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Lru);

    let _ = common::read(&mut mmu, 0); // page 0, stamp 0
    let _ = common::read(&mut mmu, 100); // page 1, stamp 1
    let _ = common::write(&mut mmu, 0); // page 0, stamp 2
    let _ = common::read(&mut mmu, 200); // page 2 evicts page 1

    assert_eq!(mmu.stats().faults, 3);
    assert_eq!(mmu.stats().write_backs, 0);
    assert!(mmu.page_table()[0].present);
    assert!(!mmu.page_table()[1].present);
    assert!(mmu.page_table()[2].present);
}

#[test]
fn lru_timestamps_follow_the_clock() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Lru);

    let _ = common::read(&mut mmu, 0);
    let _ = common::read(&mut mmu, 100);
    let _ = common::write(&mut mmu, 0);

    assert_eq!(mmu.clock(), Some(3));
    assert_eq!(mmu.page_table()[0].timestamp, 2);
    assert_eq!(mmu.page_table()[1].timestamp, 1);
}

#[test]
fn lru_write_back_counts_modified_victims() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Lru);

    let _ = common::read(&mut mmu, 0);
    let _ = common::write(&mut mmu, 100); // page 1 is dirty
    let _ = common::write(&mut mmu, 0);
    let _ = common::read(&mut mmu, 200); // evicts dirty page 1

    assert_eq!(mmu.stats().faults, 3);
    assert_eq!(mmu.stats().write_backs, 1);
    assert!(!mmu.page_table()[1].present);
}

#[test]
fn lru_breaks_timestamp_ties_toward_the_lowest_page() {
    let mut pages = PageTable::new(4);
    pages[1].present = true;
    pages[1].timestamp = 5;
    pages[3].present = true;
    pages[3].timestamp = 5;
    let frames = FrameTable::new(2);

    let policy = LruPolicy::new();
    assert_eq!(policy.select_victim(&pages, &frames), Some(1));
}

#[test]
fn lru_clock_wrap_warns_and_continues() {
    let mut pages = PageTable::new(2);
    pages[0].present = true;
    pages[1].present = true;

    let mut policy = LruPolicy::with_clock(u32::MAX);
    assert!(!policy.clock_wrapped());

    policy.record_reference(&mut pages, 0);
    assert_eq!(pages[0].timestamp, u32::MAX);
    assert!(policy.clock_wrapped());
    assert_eq!(policy.clock(), Some(0));

    // The run keeps going; later references stamp post-wrap values.
    policy.record_reference(&mut pages, 1);
    assert_eq!(pages[1].timestamp, 0);
    assert!(policy.clock_wrapped());
}

#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::Lru)]
fn eviction_resets_the_victim_entry(#[case] policy: PolicyKind) {
    let mut mmu = common::mmu(100, 4, 1, policy);

    let _ = common::write(&mut mmu, 0);
    let _ = common::read(&mut mmu, 100); // evicts dirty page 0

    let victim = mmu.page_table()[0];
    assert!(!victim.present);
    assert_eq!(victim.frame, None);
    assert!(!victim.modified);
    assert_eq!(mmu.stats().write_backs, 1);
}

#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::Lru)]
fn installed_pages_start_clean(#[case] policy: PolicyKind) {
    let mut mmu = common::mmu(100, 4, 1, policy);

    let _ = common::write(&mut mmu, 0);
    assert!(mmu.page_table()[0].modified);

    // Replacing the dirty page installs the newcomer clean.
    let _ = common::read(&mut mmu, 100);
    assert!(!mmu.page_table()[1].modified);
}

#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::Lru)]
fn frames_are_repurposed_never_freed(#[case] policy: PolicyKind) {
    let mut mmu = common::mmu(100, 8, 2, policy);

    common::touch_pages(&mut mmu, &[0, 1, 2, 3, 4]);

    assert_eq!(mmu.free_frames(), 0);
    assert_eq!(mmu.occupied_frames(), 2);
    assert_eq!(mmu.stats().faults, 5);
}

//! Address-translation unit tests.
//!
//! Verifies page/offset arithmetic, the illegal-reference path, the
//! invalid-address sentinel, and translation idempotence.

use pagesim_core::PolicyKind;
use pagesim_core::common::PhysAddr;

use crate::common;

#[test]
fn translation_splits_page_and_offset() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);

    // Page 2, offset 5 faults into the first free frame (frame 0).
    let paddr = common::read(&mut mmu, 205);
    assert_eq!(paddr.val(), 5);

    // Page 0, offset 99 faults into frame 1.
    let paddr = common::read(&mut mmu, 99);
    assert_eq!(paddr.val(), 199);

    assert_eq!(mmu.stats().faults, 2);
}

#[test]
fn illegal_reference_counts_and_returns_sentinel() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);

    // Page index 5 is outside [0, 4).
    let paddr = common::read(&mut mmu, 500);
    assert!(paddr.is_invalid());
    assert_eq!(paddr, PhysAddr::INVALID);
    assert_eq!(mmu.stats().illegal_refs, 1);

    // No table was touched: no faults, no recorded references, every frame
    // still free, every page still absent.
    assert_eq!(mmu.stats().faults, 0);
    assert_eq!(mmu.stats().reads, 0);
    assert_eq!(mmu.free_frames(), 2);
    assert!(mmu.page_snapshots().iter().all(|p| !p.present));
}

#[test]
fn illegal_reference_does_not_disturb_resident_pages() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Lru);
    let _ = common::read(&mut mmu, 0);
    let before = mmu.page_snapshots();

    let _ = common::write(&mut mmu, 999);
    assert_eq!(mmu.stats().illegal_refs, 1);
    assert_eq!(mmu.page_snapshots(), before);
    assert_eq!(mmu.stats().writes, 0);
}

#[test]
fn sentinel_has_all_address_bits_set() {
    assert_eq!(PhysAddr::INVALID.val(), u32::MAX);
    assert!(PhysAddr::INVALID.is_invalid());
    assert!(!PhysAddr::new(0).is_invalid());
}

#[test]
fn repeated_translation_is_idempotent() {
    let mut mmu = common::mmu(256, 8, 2, PolicyKind::Lru);

    let first = common::read(&mut mmu, 300);
    assert_eq!(mmu.stats().faults, 1);

    let second = common::read(&mut mmu, 300);
    assert_eq!(first, second);
    assert_eq!(mmu.stats().faults, 1);
    assert_eq!(mmu.stats().reads, 2);
}

#[test]
fn offsets_within_one_page_share_a_frame() {
    let mut mmu = common::mmu(256, 8, 2, PolicyKind::Fifo);

    let base = common::read(&mut mmu, 512);
    let later = common::read(&mut mmu, 512 + 17);
    assert_eq!(later.val(), base.val() + 17);
    assert_eq!(mmu.stats().faults, 1);
}

#[test]
fn run_continues_after_illegal_reference() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);

    let _ = common::read(&mut mmu, 500);
    let paddr = common::read(&mut mmu, 150);
    assert!(!paddr.is_invalid());
    assert_eq!(mmu.stats().illegal_refs, 1);
    assert_eq!(mmu.stats().reads, 1);
    assert_eq!(mmu.stats().faults, 1);
}

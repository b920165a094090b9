//! Statistics unit tests.
//!
//! Verifies default initialization, counter accumulation over a trace, and
//! JSON serialization of the counters.

use pagesim_core::{PolicyKind, SimStats};

use crate::common;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();

    assert_eq!(stats.reads, 0);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.faults, 0);
    assert_eq!(stats.write_backs, 0);
    assert_eq!(stats.illegal_refs, 0);
    assert_eq!(stats.total_references(), 0);
}

#[test]
fn counters_accumulate_over_a_trace() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Lru);

    let _ = common::read(&mut mmu, 0);
    let _ = common::write(&mut mmu, 100);
    let _ = common::write(&mut mmu, 0);
    let _ = common::read(&mut mmu, 200); // evicts dirty page 1
    let _ = common::read(&mut mmu, 500); // illegal

    let stats = mmu.stats();
    assert_eq!(stats.reads, 2);
    assert_eq!(stats.writes, 2);
    assert_eq!(stats.faults, 3);
    assert_eq!(stats.write_backs, 1);
    assert_eq!(stats.illegal_refs, 1);
    assert_eq!(stats.total_references(), 4);
}

#[test]
fn stats_serialize_to_json() {
    let mut mmu = common::mmu(100, 4, 2, PolicyKind::Fifo);
    common::touch_pages(&mut mmu, &[0, 1, 2]);

    let json = serde_json::to_value(mmu.stats()).expect("serializable stats");
    assert_eq!(json["reads"], 3);
    assert_eq!(json["faults"], 3);
    assert_eq!(json["write_backs"], 0);
}

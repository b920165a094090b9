//! Reference and fault accounting.
//!
//! Tracks the counters a run accumulates: reads, writes, page faults,
//! write-backs, and illegal references. Counters only ever increase; the
//! structure carries no policy-specific state.

use serde::Serialize;

/// Counters collected over a simulated run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of read references recorded.
    pub reads: u64,
    /// Number of write references recorded.
    pub writes: u64,
    /// Number of page faults taken.
    pub faults: u64,
    /// Number of modified pages that would be written back on eviction.
    pub write_backs: u64,
    /// Number of references to pages outside the configured range.
    pub illegal_refs: u64,
}

impl SimStats {
    /// Total recorded references (reads plus writes).
    ///
    /// Illegal references are excluded; they never reach the recorder.
    pub const fn total_references(&self) -> u64 {
        self.reads + self.writes
    }

    /// Prints all counters to stdout.
    pub fn print(&self) {
        let total = if self.total_references() == 0 {
            1
        } else {
            self.total_references()
        };
        let fault_rate = (self.faults as f64 / total as f64) * 100.0;

        println!("==========================================================");
        println!("PAGING SIMULATION STATISTICS");
        println!("==========================================================");
        println!("refs.read                {}", self.reads);
        println!("refs.write               {}", self.writes);
        println!("refs.illegal             {}", self.illegal_refs);
        println!("page_faults              {}", self.faults);
        println!("write_backs              {}", self.write_backs);
        println!("fault_rate               {fault_rate:.2}%");
        println!("==========================================================");
    }
}

//! Textual reports over final simulator state.
//!
//! Pure read-only views: every renderer works from the snapshot API and
//! leaves simulated state untouched. Renderers return `String`s so tests
//! and drivers can do what they like with them; `print_*` wrappers dump to
//! stdout.

use std::fmt::Write as _;

use crate::mmu::Mmu;

/// Renders the page table: presence, frame, dirty flag, and — under LRU —
/// the reference timestamp.
pub fn render_page_table(mmu: &Mmu) -> String {
    let lru = mmu.clock().is_some();
    let mut out = String::new();

    let _ = writeln!(out, "---------- PAGE TABLE ----------");
    if lru {
        let _ = writeln!(out, "PAGE  Present  Frame  Modified  Timestamp");
    } else {
        let _ = writeln!(out, "PAGE  Present  Frame  Modified");
    }

    for snap in mmu.page_snapshots() {
        let present = u8::from(snap.present);
        let frame = snap.frame.map_or_else(|| "-".to_string(), |f| f.to_string());
        let modified = if snap.present {
            u8::from(snap.modified).to_string()
        } else {
            "-".to_string()
        };

        if lru {
            let timestamp = if snap.present {
                snap.timestamp.to_string()
            } else {
                "-".to_string()
            };
            let _ = writeln!(
                out,
                "{:>4}  {present:>7}  {frame:>5}  {modified:>8}  {timestamp:>9}",
                snap.page
            );
        } else {
            let _ = writeln!(
                out,
                "{:>4}  {present:>7}  {frame:>5}  {modified:>8}",
                snap.page
            );
        }
    }

    let _ = writeln!(out, "--------------------------------");
    out
}

/// Renders the frame table: occupying page, dirty flag, and — under FIFO —
/// the eviction-queue position (1 = next victim).
pub fn render_frame_table(mmu: &Mmu) -> String {
    let snapshots = mmu.frame_snapshots();
    let fifo = snapshots.iter().any(|s| s.queue_position.is_some());
    let mut out = String::new();

    let _ = writeln!(out, "---------- FRAME TABLE ----------");
    if fifo {
        let _ = writeln!(out, "FRAME  Page  Modified  Queue");
    } else {
        let _ = writeln!(out, "FRAME  Page  Modified");
    }

    for snap in snapshots {
        let (page, modified) = snap.page.map_or_else(
            || ("-".to_string(), "-".to_string()),
            |p| {
                (
                    p.to_string(),
                    u8::from(mmu.page_table()[p].modified).to_string(),
                )
            },
        );

        if fifo {
            let queue = snap
                .queue_position
                .map_or_else(|| "-".to_string(), |q| q.to_string());
            let _ = writeln!(
                out,
                "{:>5}  {page:>4}  {modified:>8}  {queue:>5}",
                snap.frame
            );
        } else {
            let _ = writeln!(out, "{:>5}  {page:>4}  {modified:>8}", snap.frame);
        }
    }

    let _ = writeln!(out, "---------------------------------");
    out
}

/// Renders the replacement report for the active policy.
///
/// FIFO lists the occupied frames oldest-first with the next victim marked;
/// LRU reports the clock and the timestamp range across resident pages.
pub fn render_replacement_report(mmu: &Mmu) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--------- REPLACEMENT REPORT ---------");
    let _ = writeln!(out, "{} replacement policy", mmu.policy_name());

    if let Some(clock) = mmu.clock() {
        let _ = writeln!(out, "Current clock value: {clock}");
        if mmu.clock_wrapped() {
            let _ = writeln!(
                out,
                "WARNING: the clock wrapped this run; ordering may be degraded"
            );
        }

        let resident: Vec<u32> = mmu
            .page_snapshots()
            .iter()
            .filter(|s| s.present)
            .map(|s| s.timestamp)
            .collect();
        if let (Some(min), Some(max)) = (resident.iter().min(), resident.iter().max()) {
            let _ = writeln!(out, "Min timestamp in memory: {min}");
            let _ = writeln!(out, "Max timestamp in memory: {max}");
        }
    } else {
        let mut occupied: Vec<_> = mmu
            .frame_snapshots()
            .into_iter()
            .filter(|s| s.queue_position.is_some())
            .collect();
        occupied.sort_by_key(|s| s.queue_position);

        if !occupied.is_empty() {
            let _ = writeln!(out, "Occupied frames (oldest first):");
        }
        for snap in occupied {
            let page = snap.page.map_or_else(|| "-".to_string(), |p| p.to_string());
            let marker = if snap.queue_position == Some(1) {
                " (next victim)"
            } else {
                ""
            };
            let _ = writeln!(out, "  F {} -> P {page}{marker}", snap.frame);
        }
    }

    let _ = writeln!(out, "--------------------------------------");
    let _ = writeln!(out, "PAGE FAULTS: --->> {} <<---", mmu.stats().faults);
    out
}

/// Prints the page table to stdout.
pub fn print_page_table(mmu: &Mmu) {
    print!("{}", render_page_table(mmu));
}

/// Prints the frame table to stdout.
pub fn print_frame_table(mmu: &Mmu) {
    print!("{}", render_frame_table(mmu));
}

/// Prints the replacement report to stdout.
pub fn print_replacement_report(mmu: &Mmu) {
    print!("{}", render_replacement_report(mmu));
}

//! Paging simulator CLI.
//!
//! This binary is the driver around `pagesim-core`. It performs:
//! 1. **Configuration:** Table geometry and policy from flags or a JSON config file.
//! 2. **Trace input:** One reference per line, `R <addr>` or `W <addr>`, from a file or stdin.
//! 3. **Reporting:** Summary counters plus page-table, frame-table, and replacement
//!    reports — or a single JSON document with `--json`.
//!
//! `--detailed` raises the log level so the core emits one line per
//! translation and per fault/eviction event; it has no effect on simulated
//! state.

use std::fs;
use std::io::Read as _;
use std::process;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use pagesim_core::common::{AccessKind, ParseAccessError, VirtAddr};
use pagesim_core::mmu::{FrameSnapshot, PageSnapshot};
use pagesim_core::{Mmu, PolicyKind, SimConfig, SimStats, report};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Virtual-memory paging simulator",
    long_about = "Simulate address translation and page replacement over a reference trace.\n\nTrace format: one reference per line, `R <addr>` or `W <addr>` (decimal virtual address).\nBlank lines and lines starting with `#` are ignored.\n\nExamples:\n  pagesim trace.txt --pages 16 --page-size 256 --frames 4 --policy lru\n  pagesim trace.txt --policy fifo --detailed\n  cat trace.txt | pagesim --json"
)]
struct Cli {
    /// Trace file to simulate; reads stdin when omitted.
    trace: Option<String>,

    /// Page size in bytes.
    #[arg(long, default_value_t = 4096)]
    page_size: u32,

    /// Number of virtual pages.
    #[arg(long = "pages", default_value_t = 64)]
    page_count: usize,

    /// Number of physical frames.
    #[arg(long = "frames", default_value_t = 8)]
    frame_count: usize,

    /// Replacement policy (fifo or lru).
    #[arg(long, default_value = "fifo")]
    policy: PolicyKind,

    /// JSON config file; overrides the geometry and policy flags.
    #[arg(long)]
    config: Option<String>,

    /// Show step-by-step translation and fault events (on stderr).
    #[arg(long)]
    detailed: bool,

    /// Emit the final state as a single JSON document instead of reports.
    #[arg(long)]
    json: bool,
}

/// A malformed line in the reference trace.
#[derive(Debug, Error)]
enum TraceError {
    /// Line did not split into an access tag and an address.
    #[error("line {line}: expected `<R|W> <address>`, got {text:?}")]
    Malformed { line: usize, text: String },

    /// Access tag was neither a read nor a write.
    #[error("line {line}: {source}")]
    BadAccess {
        line: usize,
        #[source]
        source: ParseAccessError,
    },

    /// Address was not a decimal 32-bit value.
    #[error("line {line}: bad address {text:?}")]
    BadAddress { line: usize, text: String },
}

/// Everything `--json` emits after a run.
#[derive(Debug, Serialize)]
struct RunOutput {
    policy: &'static str,
    stats: SimStats,
    clock: Option<u32>,
    clock_wrapped: bool,
    pages: Vec<PageSnapshot>,
    frames: Vec<FrameSnapshot>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.detailed);

    let config = load_config(&cli);
    let mut mmu = Mmu::new(&config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let input = read_trace_input(cli.trace.as_deref());
    let refs = parse_trace(&input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    for (access, vaddr) in refs {
        let _ = mmu.translate(vaddr, access);
    }

    if cli.json {
        print_json(&mmu);
    } else {
        report::print_page_table(&mmu);
        report::print_frame_table(&mmu);
        report::print_replacement_report(&mmu);
        mmu.stats().print();
    }
}

/// Builds the run configuration from the JSON file if given, else the flags.
fn load_config(cli: &Cli) -> SimConfig {
    cli.config.as_ref().map_or_else(
        || SimConfig {
            page_size: cli.page_size,
            page_count: cli.page_count,
            frame_count: cli.frame_count,
            policy: cli.policy,
        },
        |path| {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {path}: {e}");
                process::exit(1);
            })
        },
    )
}

/// Reads the whole trace from the given file, or stdin when `None`.
fn read_trace_input(path: Option<&str>) -> String {
    match path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading trace {path}: {e}");
            process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading stdin: {e}");
                process::exit(1);
            }
            buf
        }
    }
}

/// Parses the trace: one `R <addr>` / `W <addr>` reference per line.
///
/// Blank lines and `#` comments are skipped. Line numbers in errors are
/// one-based.
fn parse_trace(input: &str) -> Result<Vec<(AccessKind, VirtAddr)>, TraceError> {
    let mut refs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut tokens = text.split_whitespace();
        let (Some(tag), Some(addr), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(TraceError::Malformed {
                line,
                text: text.to_string(),
            });
        };

        let access: AccessKind = tag
            .parse()
            .map_err(|source| TraceError::BadAccess { line, source })?;
        let addr: u32 = addr.parse().map_err(|_| TraceError::BadAddress {
            line,
            text: addr.to_string(),
        })?;

        refs.push((access, VirtAddr::new(addr)));
    }

    Ok(refs)
}

/// Serializes the final state to stdout as one JSON document.
fn print_json(mmu: &Mmu) {
    let out = RunOutput {
        policy: mmu.policy_name(),
        stats: *mmu.stats(),
        clock: mmu.clock(),
        clock_wrapped: mmu.clock_wrapped(),
        pages: mmu.page_snapshots(),
        frames: mmu.frame_snapshots(),
    };

    match serde_json::to_string_pretty(&out) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing results: {e}");
            process::exit(1);
        }
    }
}

/// Installs the log subscriber; `--detailed` raises the core to trace level.
fn init_tracing(detailed: bool) {
    let default = if detailed { "pagesim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

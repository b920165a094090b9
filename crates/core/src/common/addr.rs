//! Simulated virtual and physical address types.
//!
//! Strong types keep the two address spaces from being mixed by accident.
//! Addresses are 32-bit unsigned values, matching the simulated machine's
//! word size; page and offset arithmetic lives in the MMU because both
//! depend on the configured page size.

use serde::Serialize;

/// A virtual address in the simulated address space.
///
/// Virtual addresses are what the trace refers to; they must be translated
/// through the simulated MMU before they name a memory location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct VirtAddr(pub u32);

/// A physical address in the simulated address space.
///
/// Produced by translation: `frame * page_size + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PhysAddr(pub u32);

impl VirtAddr {
    /// Creates a virtual address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }
}

impl PhysAddr {
    /// The invalid-address sentinel returned for illegal references.
    ///
    /// All address bits set.
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates a physical address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// True if this is the illegal-reference sentinel.
    #[inline(always)]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

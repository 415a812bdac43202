//! Traits abstracting the hardware and kernel services this crate
//! consumes but does not own: physical RAM discovery, the hardware TLB,
//! the scheduler's notion of "current thread", a randomness byte source,
//! and the kernel's direct-map window. A real kernel supplies the impls;
//! this crate's tests supply mocks.

use crate::consts::PAGE_FRAME_MASK;

/// A page-aligned physical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct PhysAddr(pub u32);

/// A virtual address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct VirtAddr(pub u32);

impl PhysAddr {
    pub const fn is_aligned(self) -> bool {
        self.0 & !PAGE_FRAME_MASK == 0
    }
}

impl VirtAddr {
    pub const fn is_aligned(self) -> bool {
        self.0 & !PAGE_FRAME_MASK == 0
    }
}

bitflags::bitflags! {
    /// Control bits carried in a TLB entry's low word, alongside the PA.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TlbFlags: u32 {
        /// Entry is a live translation.
        const VALID = 1 << 0;
        /// Entry is writable (MIPS calls this "dirty").
        const DIRTY = 1 << 1;
    }
}

/// One fault kind the hardware can raise on a TLB miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultType {
    ReadOnly,
    Read,
    Write,
}

/// Free-physical-extent discovery and the pre-init bump allocator.
pub trait Machine {
    /// Returns the page-aligned free extent `[lo, hi)` available after boot.
    fn ram_getsize(&self) -> (PhysAddr, PhysAddr);

    /// Returns `n` contiguous pages while the PFA is uninitialized.
    /// Monotonically shrinks the free extent reported by `ram_getsize`.
    fn ram_stealmem(&mut self, n: u32) -> PhysAddr;
}

/// The fully-associative hardware TLB.
pub trait Tlb {
    /// Number of slots.
    const NUM_TLB: usize;

    fn read(&self, index: usize) -> (u32, u32);
    fn write(&mut self, index: usize, ehi: u32, elo: u32);
}

/// A handle to an address space, opaque to this crate's callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsHandle(pub usize);

/// The scheduler's view of "what address space is running right now".
pub trait CurrentThread {
    fn address_space(&self) -> Option<AsHandle>;
}

/// An opaque byte source, opened once at bootstrap and read serially.
pub trait RandomSource {
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

/// The kernel's direct-map window: a total bijection between RAM
/// physical addresses and a reserved kernel virtual range.
pub trait DirectMap {
    fn p_to_k(&self, pa: PhysAddr) -> VirtAddr;
    fn k_to_p(&self, va: VirtAddr) -> PhysAddr;

    /// Bytewise-copies `len` bytes from `src` to `dst` through the
    /// direct-map window. The caller (here, `as_copy`) treats the map
    /// as an exclusive borrow for the duration of the copy: the
    /// scheduler must not activate either address space while it runs,
    /// which holds because `copy` executes in the cloning thread's
    /// context before the new AS is installed.
    ///
    /// # Safety
    /// `src` and `dst` must each be valid, owned, non-overlapping
    /// physical extents of at least `len` bytes.
    unsafe fn copy_phys(&self, src: PhysAddr, dst: PhysAddr, len: usize);
}

/// Architecture-specific means of disabling and restoring interrupts,
/// used by [`crate::ipl`] to implement the scoped IPL raise.
pub trait InterruptController: 'static {
    type InterruptState: Copy;

    fn disable_interrupts();
    fn restore_interrupts(state: Self::InterruptState);
    fn fetch_interrupts() -> Self::InterruptState;
}

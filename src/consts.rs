//! Machine geometry and contract constants.

/// Bytes per page on the target machine.
pub const PAGE_SIZE: u32 = 4096;

/// `log2(PAGE_SIZE)`, used for the page-offset mask.
pub const PAGE_SHIFT: u32 = 12;

/// Pages reserved for a user stack.
pub const STACKPAGES: u32 = 12;

/// Low bound of the stack-base randomization window.
pub const STACK_RAND_BASE: u32 = 0x005c_0000;

/// Modulus applied to the four random bytes before adding [`STACK_RAND_BASE`].
pub const STACK_RAND_MODULUS: u32 = 0x7fa4_0000;

/// Mask that isolates the page offset within an address.
pub const PAGE_OFFSET_MASK: u32 = PAGE_SIZE - 1;

/// Mask that isolates the page frame (clears the offset bits).
pub const PAGE_FRAME_MASK: u32 = !PAGE_OFFSET_MASK;

/// Rounds `addr` down to the nearest page boundary.
#[inline]
pub const fn page_floor(addr: u32) -> u32 {
    addr & PAGE_FRAME_MASK
}

/// Rounds `sz` up to the nearest whole number of pages, in bytes.
#[inline]
pub const fn page_ceil(sz: u32) -> u32 {
    (sz + PAGE_OFFSET_MASK) & PAGE_FRAME_MASK
}

/// True iff `addr` is page-aligned.
#[inline]
pub const fn is_page_aligned(addr: u32) -> bool {
    addr & PAGE_OFFSET_MASK == 0
}

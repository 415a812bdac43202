//! Chooses a randomized user stack base from a bounded read of an
//! external randomness source. The randomness source is an opaque byte
//! stream; no cryptographic guarantees are claimed.

use crate::consts::{page_floor, STACK_RAND_BASE, STACK_RAND_MODULUS};
use crate::machine::{RandomSource, VirtAddr};

/// Reads four bytes from `rng`, reduces modulo [`STACK_RAND_MODULUS`],
/// offsets by [`STACK_RAND_BASE`], and truncates to a page boundary.
///
/// The fixed base is the top of the statically reserved user code/data
/// window (1 MiB code + stack headroom); the modulus bounds the stack
/// top below the kernel window at `0x80000000`.
pub fn pick_stack_base(rng: &mut impl RandomSource) -> VirtAddr {
    let mut buf = [0u8; 4];
    rng.read(&mut buf);
    let r = u32::from_le_bytes(buf);
    let base = STACK_RAND_BASE.wrapping_add(r % STACK_RAND_MODULUS);
    VirtAddr(page_floor(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRandom(u32);

    impl RandomSource for FixedRandom {
        fn read(&mut self, buf: &mut [u8]) -> usize {
            let n = buf.len().min(4);
            buf[..n].copy_from_slice(&self.0.to_le_bytes()[..n]);
            n
        }
    }

    #[test]
    fn scenario6_bounds_hold_for_extreme_values() {
        for r in [0u32, 1, u32::MAX / 2, u32::MAX] {
            let mut rng = FixedRandom(r);
            let base = pick_stack_base(&mut rng);
            assert!(base.0 >= STACK_RAND_BASE);
            assert!(base.0 < STACK_RAND_BASE + STACK_RAND_MODULUS);
            assert!(base.is_aligned());
            assert!(base.0.checked_add(0x8000_0000).is_some());
        }
    }

    #[test]
    fn result_is_deterministic_for_a_given_byte_stream() {
        let mut a = FixedRandom(0x1234_5678);
        let mut b = FixedRandom(0x1234_5678);
        assert_eq!(pick_stack_base(&mut a), pick_stack_base(&mut b));
    }
}

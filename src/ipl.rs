//! Interrupt discipline: the sole mutual-exclusion primitive the core
//! uses. Every allocator mutation, every TLB read/write, the fault
//! handler's entire body, and `as_activate` run inside a scoped raise
//! of the interrupt priority level to the maximum, with guaranteed
//! restoration on every exit path — including an early return or an
//! unwinding panic, since restoration lives in `Drop`.
//!
//! Nested raises are idempotent: each guard captures the interrupt
//! state present when it was created and restores exactly that state
//! on drop, so an inner raise taken while already at high IPL leaves
//! the machine at high IPL until the outer guard itself drops.

use core::marker::PhantomData;

use crate::machine::InterruptController;

/// A scoped raise of the interrupt priority level.
///
/// Dropping the guard restores interrupts to whatever state was in
/// effect when the guard was created. Construction and destruction
/// order must nest (standard `Drop` / stack-discipline), matching the
/// "stack-saved prior level" semantics.
pub struct IplGuard<C: InterruptController> {
    state: C::InterruptState,
    _controller: PhantomData<C>,
}

impl<C: InterruptController> IplGuard<C> {
    /// Raises IPL to the maximum level, returning a guard that restores
    /// the prior level on drop.
    #[must_use = "the IPL raise is only in effect while this guard is alive"]
    pub fn raise() -> Self {
        let state = C::fetch_interrupts();
        C::disable_interrupts();
        IplGuard {
            state,
            _controller: PhantomData,
        }
    }
}

impl<C: InterruptController> Drop for IplGuard<C> {
    fn drop(&mut self) {
        C::restore_interrupts(self.state);
    }
}

/// Convenience free function mirroring the "raise IPL for this block"
/// idiom used throughout the core: `let _g = raise_ipl::<Arch>();`.
#[must_use = "the IPL raise is only in effect while the returned guard is alive"]
pub fn raise_ipl<C: InterruptController>() -> IplGuard<C> {
    IplGuard::raise()
}

//! Software TLB refill: resolves a faulting virtual address through the
//! current thread's address space and installs a mapping into the
//! fully-associative hardware TLB. Runs entirely under a single IPL
//! raise, so {read AS, decide mapping, write TLB} is atomic with
//! respect to any other handler, context switch, or allocator
//! operation on this uniprocessor.

use alloc::string::String;

use crate::addrspace::AddressSpace;
use crate::consts::page_floor;
use crate::diag;
use crate::error::{VmError, VmResult};
use crate::ipl::raise_ipl;
use crate::machine::{FaultType, InterruptController, Tlb, TlbFlags, VirtAddr};
use crate::pfa::PageFrameAllocator;

/// Resolves `faultaddress` against `current_as` and installs a TLB
/// entry. Never allocates or evicts: a miss that cannot be resolved
/// from existing AS metadata is surfaced to the caller, which typically
/// kills the process.
pub fn vm_fault<C: InterruptController, T: Tlb>(
    tlb: &mut T,
    pfa: &PageFrameAllocator,
    current_as: Option<&AddressSpace>,
    fault_type: FaultType,
    fault_address: VirtAddr,
) -> VmResult<()> {
    let _g = raise_ipl::<C>();

    let fault_address = VirtAddr(page_floor(fault_address.0));

    if fault_type == FaultType::ReadOnly {
        panic!("vm_fault: READONLY fault is impossible — all pages are installed dirty");
    }

    let current_as = current_as.ok_or(VmError::BadAddress)?;
    current_as.assert_structural_invariants();

    let paddr = match current_as.translate(fault_address) {
        Some(pa) => pa,
        None => {
            log::error!("vm_fault: {:#x} is outside any region", fault_address.0);
            let mut dump = String::new();
            let _ = diag::dump_buddy_list(pfa.entries(), &mut dump);
            log::error!("{}", dump);
            return Err(VmError::BadAddress);
        }
    };
    debug_assert!(paddr.is_aligned());

    let slot = (0..T::NUM_TLB).find(|&i| {
        let (_, elo) = tlb.read(i);
        elo & TlbFlags::VALID.bits() == 0
    });

    match slot {
        Some(i) => {
            let elo = paddr.0 | TlbFlags::DIRTY.bits() | TlbFlags::VALID.bits();
            tlb.write(i, fault_address.0, elo);
            Ok(())
        }
        None => {
            log::warn!("vm_fault: no free TLB slot, refill policy does not evict");
            Err(VmError::BadAddress)
        }
    }
}

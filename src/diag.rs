//! Human-readable dumps of TLB and allocator state, used from the fault
//! handler on translation failure. Dumps render through
//! `core::fmt::Write` rather than printing directly, so the same
//! rendering logic is exercised by tests (formatting into a `String`)
//! and by a real kernel's console sink.

use core::fmt::{self, Write};

use crate::machine::Tlb;
use crate::pfa::BuddyEntry;

/// Renders one line per TLB slot: index, `ehi`, `elo`.
pub fn dump_tlb<T: Tlb>(tlb: &T, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "idx  ehi         elo")?;
    for i in 0..T::NUM_TLB {
        let (ehi, elo) = tlb.read(i);
        writeln!(out, "{:3}  {:#010x}  {:#010x}", i, ehi, elo)?;
    }
    Ok(())
}

/// Renders one line per buddy entry: index, base, pages, in-use.
pub fn dump_buddy_list(entries: &[BuddyEntry], out: &mut impl Write) -> fmt::Result {
    writeln!(out, "idx  base        pages  inuse")?;
    for (i, e) in entries.iter().enumerate() {
        writeln!(out, "{:3}  {:#010x}  {:5}  {}", i, e.paddr.0, e.pages, e.inuse)?;
    }
    Ok(())
}

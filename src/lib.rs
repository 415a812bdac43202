//! Virtual memory core for a small MIPS-class teaching kernel.
//!
//! Three tightly coupled pieces live here: a split-only buddy allocator
//! over physical RAM ([`pfa`]), an address-space manager tying virtual
//! regions to allocator-owned extents ([`addrspace`]), and a
//! software-refilled TLB fault handler ([`fault`]). [`ipl`] provides the
//! single mutual-exclusion primitive the other three rely on. External
//! collaborators (real hardware, the scheduler, a randomness device) are
//! abstracted as traits in [`machine`]; this crate never talks to
//! hardware directly.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod consts;
pub mod error;
pub mod machine;
pub mod ipl;
pub mod pfa;
pub mod addrspace;
pub mod fault;
pub mod stackrand;
pub mod diag;

pub use error::VmError;

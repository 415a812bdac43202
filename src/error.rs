//! Recoverable error kinds.
//!
//! Impossible-state conditions (a `READONLY` fault, a violated structural
//! invariant, bootstrap metadata exhaustion) are not represented here —
//! those are `panic!`/`debug_assert!` sites, since they signal a broken
//! invariant rather than a condition a caller can react to.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VmError {
    #[error("out of memory")]
    OutOfMemory,
    #[error("address outside any mapped region")]
    BadAddress,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("address space already has two user regions")]
    TooManyRegions,
}

pub type VmResult<T> = Result<T, VmError>;

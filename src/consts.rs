//! Compile-time tuning constants (spec.md §6).

/// Inputs of at most this length bypass the analyzer and dispatch straight
/// to the matching fixed-size network.
pub const SMALL_THRESHOLD: usize = 16;

/// Inputs at or below this length (and not near-sorted) use [`crate::shell::sort`].
pub const SHELL_THRESHOLD: usize = 64;

/// Minimum length for radix sort to be considered, when the value range is
/// narrow enough relative to `n`.
pub const RADIX_THRESHOLD: usize = 256;

/// Block length used by the dual-core parallel coordinator.
pub const BLOCK_SIZE: usize = 4096;

/// Presortedness score (out of 255) at or above which an input is treated
/// as near-sorted and routed to the sentinel insertion sort. `242 ≈ 0.95 * 255`.
pub const PRESORT_THRESHOLD: u8 = 242;

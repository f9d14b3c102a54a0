//! Performance profile (spec.md §3, §6).

/// Caller-selected performance profile.
///
/// Currently informational: [`crate::strategy::select`] resolves every
/// variant to the same thresholds. The parameter is threaded through the
/// public API so a future build can bias selection per profile without
/// breaking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Maximum speed, damn the power.
    UltraFast,
    /// Good speed, reasonable power.
    Balanced,
    /// Minimum energy consumption.
    LowPower,
}

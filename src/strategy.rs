//! Strategy selection (spec.md §4.9).

use crate::consts::{BLOCK_SIZE, PRESORT_THRESHOLD, RADIX_THRESHOLD, SHELL_THRESHOLD};
use crate::features::Features;
use crate::primitives::log2;
use crate::profile::Profile;

/// Closed set of algorithm kernels [`select`] can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Network4,
    Network8,
    Network16,
    InsertionSentinel,
    ShellCiura,
    Radix256,
    Introsort,
    CountingU8,
    CountingU16,
}

/// The dispatcher's decision: an algorithm plus parallel-execution flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub algorithm: Algorithm,
    pub use_partitioning: bool,
    pub use_parallel: bool,
    pub block_size: usize,
}

/// Select a strategy from a feature vector, evaluating spec.md §4.9's
/// rules in order (first match wins).
///
/// `profile` is accepted for forward compatibility; every variant
/// currently resolves to identical thresholds (see DESIGN.md, Open
/// Question (i)).
pub fn select(f: &Features, _profile: Profile) -> Strategy {
    let n = f.n;

    let base = |algorithm| Strategy {
        algorithm,
        use_partitioning: false,
        use_parallel: false,
        block_size: 0,
    };

    if n <= 4 {
        return base(Algorithm::Network4);
    }
    if n <= 8 {
        return base(Algorithm::Network8);
    }
    if n <= 16 {
        return base(Algorithm::Network16);
    }
    if f.presort >= PRESORT_THRESHOLD {
        return base(Algorithm::InsertionSentinel);
    }
    if n <= SHELL_THRESHOLD {
        return base(Algorithm::ShellCiura);
    }
    if f.range_log2 <= log2(n as u32) + 3 && n >= RADIX_THRESHOLD {
        return base(Algorithm::Radix256);
    }
    if n > BLOCK_SIZE {
        return Strategy {
            algorithm: Algorithm::Introsort,
            use_partitioning: true,
            use_parallel: true,
            block_size: BLOCK_SIZE,
        };
    }

    base(Algorithm::Introsort)
}

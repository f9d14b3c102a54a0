//! Feature analyzer (spec.md §3, §4.9): a single `O(n)` pass collecting
//! the statistics [`crate::strategy::select`] dispatches on.

use crate::primitives::log2;

/// Per-call feature vector produced by [`analyze`].
#[derive(Debug, Clone, Copy)]
pub struct Features {
    /// Element count.
    pub n: usize,
    /// Observed minimum value.
    pub min_val: i32,
    /// Observed maximum value.
    pub max_val: i32,
    /// `floor(log2(max - min))` when `max > min`, else `0`.
    pub range_log2: u32,
    /// Count of ascending runs: `1` plus the number of positions `i` with
    /// `arr[i] < arr[i - 1]`.
    pub runs: usize,
    /// Presortedness score on `[0, 255]`. `255` means perfectly ascending,
    /// `0` means maximally anti-sorted.
    pub presort: u8,
}

/// Analyze `arr` in one pass. `n <= 1` short-circuits to `presort == 255`
/// with all other fields zeroed, matching spec.md §3's definition.
pub fn analyze(arr: &[i32]) -> Features {
    let n = arr.len();

    if n <= 1 {
        return Features {
            n,
            min_val: 0,
            max_val: 0,
            range_log2: 0,
            runs: 1,
            presort: 255,
        };
    }

    let mut min_val = arr[0];
    let mut max_val = arr[0];
    let mut runs = 1usize;

    for i in 1..n {
        if arr[i] < arr[i - 1] {
            runs += 1;
        }
        if arr[i] < min_val {
            min_val = arr[i];
        }
        if arr[i] > max_val {
            max_val = arr[i];
        }
    }

    let presort = 255 - ((255u64 * (runs - 1) as u64) / (n - 1) as u64) as u8;

    let range = (max_val as i64 - min_val as i64) as u64;
    let range_log2 = if range > 0 { log2(range as u32) } else { 0 };

    Features {
        n,
        min_val,
        max_val,
        range_log2,
        runs,
        presort,
    }
}

//! Insertion sort kernels (spec.md §4.3).

/// Sentinel-based insertion sort. Requires `arr.len() >= 2`.
///
/// Locates the minimum in one pass and swaps it to index 0; that element
/// then acts as a lower guard for the inner shift loop, so the loop never
/// needs a bounds check against index 0. No memory outside `arr` is
/// touched — unlike the merge kernels in [`crate::merge`], this kernel
/// does not need a caller-reserved slot past the end of the slice.
pub fn sentinel(arr: &mut [i32]) {
    let n = arr.len();
    debug_assert!(n >= 2, "insertion::sentinel requires n >= 2");

    let mut min_idx = 0;
    for i in 1..n {
        if arr[i] < arr[min_idx] {
            min_idx = i;
        }
    }
    arr.swap(0, min_idx);

    for i in 2..n {
        let key = arr[i];
        let mut j = i;

        while arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

/// Insertion sort with the inner shift loop unrolled up to 4 manual shifts
/// before a guarded residual loop. Used as the introsort leaf for `n <= 16`.
pub fn small(arr: &mut [i32]) {
    let n = arr.len();

    for i in 1..n {
        let key = arr[i];
        let mut j = i;

        if j >= 1 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        if j >= 1 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        if j >= 1 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        if j >= 1 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }

        while j >= 1 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

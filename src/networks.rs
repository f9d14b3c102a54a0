//! Fixed-size sorting networks (spec.md §4.2).
//!
//! Each network is a predetermined sequence of compare-exchanges with no
//! data-dependent control flow. Correctness follows from the 0/1 principle;
//! see the unit tests below for an exhaustive check on `{0, 1}` inputs.

use crate::primitives::minmax;

/// Sort exactly 4 elements. 5 comparators: `(0,1)(2,3)(0,2)(1,3)(1,2)`.
pub fn sort4(arr: &mut [i32; 4]) {
    let (mut r0, mut r1, mut r2, mut r3) = (arr[0], arr[1], arr[2], arr[3]);

    (r0, r1) = minmax(r0, r1);
    (r2, r3) = minmax(r2, r3);
    (r0, r2) = minmax(r0, r2);
    (r1, r3) = minmax(r1, r3);
    (r1, r2) = minmax(r1, r2);

    *arr = [r0, r1, r2, r3];
}

/// Sort exactly 8 elements using Batcher's odd-even mergesort network (19
/// comparators).
pub fn sort8(arr: &mut [i32; 8]) {
    let mut r = *arr;

    const STAGES: [(usize, usize); 19] = [
        (0, 1),
        (2, 3),
        (4, 5),
        (6, 7),
        (0, 2),
        (1, 3),
        (4, 6),
        (5, 7),
        (1, 2),
        (5, 6),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
        (2, 4),
        (3, 5),
        (1, 2),
        (3, 4),
        (5, 6),
    ];

    for &(i, j) in STAGES.iter() {
        let (lo, hi) = minmax(r[i], r[j]);
        r[i] = lo;
        r[j] = hi;
    }

    *arr = r;
}

/// Sort exactly 16 elements: sort each half with [`sort8`], then apply the
/// canonical Batcher odd-even *merge* network for two runs of 8 (25
/// compare-exchanges derived from the textbook recursive definition — see
/// DESIGN.md).
pub fn sort16(arr: &mut [i32; 16]) {
    let mut lo: [i32; 8] = arr[0..8].try_into().unwrap();
    let mut hi: [i32; 8] = arr[8..16].try_into().unwrap();
    sort8(&mut lo);
    sort8(&mut hi);

    let mut r = [0i32; 16];
    r[..8].copy_from_slice(&lo);
    r[8..].copy_from_slice(&hi);

    // Merge network for two sorted runs of length 8, grouped the same way
    // Batcher's recursive oddEvenMerge(0, 16, 1) expands: the even-indexed
    // virtual subsequence, the odd-indexed virtual subsequence (both
    // independent of each other), then a final adjacent-pair cleanup pass.
    const EVENS: [(usize, usize); 9] = [
        (0, 8),
        (4, 12),
        (4, 8),
        (2, 10),
        (6, 14),
        (6, 10),
        (2, 4),
        (6, 8),
        (10, 12),
    ];
    const ODDS: [(usize, usize); 9] = [
        (1, 9),
        (5, 13),
        (5, 9),
        (3, 11),
        (7, 15),
        (7, 11),
        (3, 5),
        (7, 9),
        (11, 13),
    ];
    const FINAL: [(usize, usize); 7] = [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)];

    for &(i, j) in EVENS.iter().chain(ODDS.iter()).chain(FINAL.iter()) {
        let (a, b) = minmax(r[i], r[j]);
        r[i] = a;
        r[j] = b;
    }

    *arr = r;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(arr: &[i32]) -> bool {
        arr.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn sort4_zero_one_principle() {
        for mask in 0u32..16 {
            let mut arr = [0i32; 4];
            for i in 0..4 {
                arr[i] = ((mask >> i) & 1) as i32;
            }
            sort4(&mut arr);
            assert!(is_sorted(&arr), "{arr:?}");
            assert_eq!(arr.iter().sum::<i32>(), mask.count_ones() as i32);
        }
    }

    #[test]
    fn sort8_zero_one_principle() {
        for mask in 0u32..256 {
            let mut arr = [0i32; 8];
            for i in 0..8 {
                arr[i] = ((mask >> i) & 1) as i32;
            }
            sort8(&mut arr);
            assert!(is_sorted(&arr), "{arr:?}");
            assert_eq!(arr.iter().sum::<i32>(), mask.count_ones() as i32);
        }
    }

    #[test]
    fn sort16_zero_one_principle() {
        for mask in 0u32..(1 << 16) {
            let mut arr = [0i32; 16];
            for i in 0..16 {
                arr[i] = ((mask >> i) & 1) as i32;
            }
            sort16(&mut arr);
            assert!(is_sorted(&arr), "{arr:?}");
            assert_eq!(arr.iter().sum::<i32>(), mask.count_ones() as i32);
        }
    }

    #[test]
    fn sort4_concrete() {
        let mut arr = [4, 2, 3, 1];
        sort4(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4]);
    }

    #[test]
    fn sort8_concrete() {
        let mut arr = [8, 4, 7, 2, 5, 1, 6, 3];
        sort8(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn sort16_concrete() {
        let mut arr = [16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        sort16(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    }
}

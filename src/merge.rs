//! Merge primitives (spec.md §4.8) and the parallel coordinator's cascade
//! merge (spec.md §9, "Unfinished merge cascade").
//!
//! `two_sentinel`/`four_sentinel` mirror `hydra_merge`/`hydra_merge4`,
//! which the reference C exposes as public API functions rather than
//! internal helpers — callers there are expected to lay out their own
//! buffers with a slack slot past each run. This crate does the same:
//! both are re-exported from the crate root (see `lib.rs`) as merge
//! primitives for callers who control their own buffer layout.
//! `merge::cascade`, by contrast, merges *contiguous* blocks with no
//! slack between them, so it cannot use either sentinel kernel directly
//! and instead uses the bounds-checked merge below.

/// Two-way merge of `a[..na]` and `b[..nb]` into `out[..na + nb]`.
///
/// Sentinel-tailed: `a[na]` and `b[nb]` are set to `i32::MAX` before the
/// merge loop runs, so the loop can consume exactly `na + nb` elements
/// without a per-step bounds check. The caller must reserve one slot past
/// the end of *each* input run (spec.md §9, "Sentinel writes past array
/// end") — `a.len() >= na + 1` and `b.len() >= nb + 1`.
pub fn two_sentinel(a: &mut [i32], na: usize, b: &mut [i32], nb: usize, out: &mut [i32]) {
    debug_assert!(a.len() > na && b.len() > nb && out.len() >= na + nb);

    a[na] = i32::MAX;
    b[nb] = i32::MAX;

    let mut i = 0;
    let mut j = 0;
    let total = na + nb;

    for slot in out.iter_mut().take(total) {
        if a[i] <= b[j] {
            *slot = a[i];
            i += 1;
        } else {
            *slot = b[j];
            j += 1;
        }
    }
}

/// Four-way merge using a two-level tournament (`min(a,b)`, `min(c,d)`,
/// then the overall min) for fewer merge passes than repeated two-way
/// merges. Same sentinel contract as [`two_sentinel`], one extra slot per
/// input run.
#[allow(clippy::too_many_arguments)]
pub fn four_sentinel(
    a: &mut [i32],
    na: usize,
    b: &mut [i32],
    nb: usize,
    c: &mut [i32],
    nc: usize,
    d: &mut [i32],
    nd: usize,
    out: &mut [i32],
) {
    debug_assert!(a.len() > na && b.len() > nb && c.len() > nc && d.len() > nd);
    debug_assert!(out.len() >= na + nb + nc + nd);

    a[na] = i32::MAX;
    b[nb] = i32::MAX;
    c[nc] = i32::MAX;
    d[nd] = i32::MAX;

    let (mut i, mut j, mut k, mut l) = (0usize, 0usize, 0usize, 0usize);
    let total = na + nb + nc + nd;

    for slot in out.iter_mut().take(total) {
        let (min_ab, from_a) = if a[i] <= b[j] { (a[i], true) } else { (b[j], false) };
        let (min_cd, from_c) = if c[k] <= d[l] { (c[k], true) } else { (d[l], false) };

        if min_ab <= min_cd {
            *slot = min_ab;
            if from_a {
                i += 1;
            } else {
                j += 1;
            }
        } else {
            *slot = min_cd;
            if from_c {
                k += 1;
            } else {
                l += 1;
            }
        }
    }
}

/// Merge `ceil(n / block_size)` pre-sorted, contiguous blocks of `arr`
/// (each of length `block_size`, except possibly the last) into a single
/// sorted sequence, using `aux` as scratch space.
///
/// This completes the parallel coordinator's block sort (spec.md §4.10):
/// the reference C sorts each block and leaves the cascade merge as a
/// `// TODO`. Adjacent blocks are merged pairwise per level, bottom-up,
/// ping-ponging between `arr` and `aux` the same way [`crate::radix`]
/// ping-pongs across its four passes; the result is copied back into `arr`
/// if the final level left it in `aux`. This is a classic bounds-checked
/// merge (two index counters per pair), not [`two_sentinel`] — blocks are
/// contiguous with no padding between them, so writing a sentinel at one
/// block's tail would clobber the next block's head.
pub fn cascade(arr: &mut [i32], aux: &mut [i32], block_size: usize) {
    let n = arr.len();
    debug_assert!(aux.len() >= n);
    if n <= block_size {
        return;
    }

    let mut src: &mut [i32] = arr;
    let mut dst: &mut [i32] = aux;
    let mut run = block_size;
    let mut in_arr = true;

    while run < n {
        let mut lo = 0;
        while lo < n {
            let mid = core::cmp::min(lo + run, n);
            let hi = core::cmp::min(lo + 2 * run, n);

            if mid >= hi {
                dst[lo..hi].copy_from_slice(&src[lo..hi]);
            } else {
                merge_bounds_checked(&src[lo..mid], &src[mid..hi], &mut dst[lo..hi]);
            }
            lo += 2 * run;
        }

        core::mem::swap(&mut src, &mut dst);
        in_arr = !in_arr;
        run *= 2;
    }

    if !in_arr {
        // `src` now points at `aux`'s contents holding the final sorted
        // sequence (an odd number of levels ran); copy back into `arr`.
        dst.copy_from_slice(&src[..n]);
    }
}

fn merge_bounds_checked(a: &[i32], b: &[i32], out: &mut [i32]) {
    let (mut i, mut j, mut k) = (0usize, 0usize, 0usize);

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            out[k] = a[i];
            i += 1;
        } else {
            out[k] = b[j];
            j += 1;
        }
        k += 1;
    }
    if i < a.len() {
        out[k..].copy_from_slice(&a[i..]);
    }
    if j < b.len() {
        out[k..].copy_from_slice(&b[j..]);
    }
}

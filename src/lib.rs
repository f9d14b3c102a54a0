#![cfg_attr(not(test), no_std)]

//! Adaptive in-place integer sort for resource-constrained dual-core
//! microcontrollers: fixed sorting networks for tiny inputs, sentinel
//! insertion sort for near-sorted data, Ciura-gap Shell sort for small
//! arrays, LSD radix-256 and counting sort for narrow-range keys, and
//! introsort with an iterative heapsort fallback otherwise — dispatched
//! by a single-pass feature analyzer, optionally split across two cores
//! above the block-sort threshold.

mod consts;
mod counting;
mod features;
mod insertion;
mod introsort;
mod merge;
mod networks;
mod parallel;
mod primitives;
mod profile;
mod radix;
mod shell;
mod strategy;

pub use merge::{four_sentinel, two_sentinel};
pub use parallel::Platform;
pub use profile::Profile;
pub use strategy::{Algorithm, Strategy};

use strategy::Algorithm as Alg;

/// Sort `arr` in place, using `aux` as scratch space.
///
/// `aux` must be at least as long as `arr`; callers that only ever pass
/// `n <= 16` may pass an empty `aux`, since the network bypass below
/// never touches it. Any caller that might exercise the radix, counting,
/// or parallel paths must size `aux` to at least `arr.len()`.
///
/// `n <= 1` returns immediately. `n <= 16` bypasses the feature analyzer
/// entirely and dispatches straight to a sorting network, matching
/// spec.md §4.9. A network always sorts its whole fixed-size buffer, so
/// an `n` that isn't exactly 4/8/16 is padded with `i32::MAX` out to the
/// network's width before sorting and `buf[..n]` is taken afterward:
/// since every padding element is `>=` any real element, the padding
/// always sorts to the tail and the leading `n` slots hold exactly the
/// original elements in order. (Padding with `0` would corrupt the
/// result whenever a real element is greater than `0`.) Everything else
/// is analyzed once and routed through [`strategy::select`].
pub fn sort(arr: &mut [i32], aux: &mut [i32], profile: Profile) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    if n <= 4 {
        let mut buf = [i32::MAX; 4];
        buf[..n].copy_from_slice(arr);
        networks::sort4(&mut buf);
        arr.copy_from_slice(&buf[..n]);
        return;
    }
    if n <= 8 {
        let mut buf = [i32::MAX; 8];
        buf[..n].copy_from_slice(arr);
        networks::sort8(&mut buf);
        arr.copy_from_slice(&buf[..n]);
        return;
    }
    if n <= consts::SMALL_THRESHOLD {
        let mut buf = [i32::MAX; 16];
        buf[..n].copy_from_slice(arr);
        networks::sort16(&mut buf);
        arr.copy_from_slice(&buf[..n]);
        return;
    }

    let f = features::analyze(arr);
    let s = strategy::select(&f, profile);

    if s.use_parallel {
        struct NoopPlatform;
        impl Platform for NoopPlatform {
            fn launch_worker(&self, f: &(dyn Fn() + Sync)) {
                f();
            }
            fn fifo_pop_blocking(&self) -> u32 {
                0
            }
            fn fifo_push_blocking(&self, _value: u32) {}
        }
        parallel::sort_blocks(&NoopPlatform, arr, aux, s.block_size);
        return;
    }

    dispatch(arr, aux, s.algorithm);
}

/// Like [`sort`], but drives the dual-core coordinator through a caller
/// supplied [`Platform`] instead of running the worker half inline. Use
/// this entry point on a real dual-core target; [`sort`] runs single
/// threaded (including its own parallel-eligible path) when no platform
/// is available.
pub fn sort_with_platform<P: Platform>(platform: &P, arr: &mut [i32], aux: &mut [i32], profile: Profile) {
    let n = arr.len();
    if n <= consts::SMALL_THRESHOLD {
        sort(arr, aux, profile);
        return;
    }

    let f = features::analyze(arr);
    let s = strategy::select(&f, profile);

    if s.use_parallel {
        parallel::sort_blocks(platform, arr, aux, s.block_size);
        return;
    }

    dispatch(arr, aux, s.algorithm);
}

fn dispatch(arr: &mut [i32], aux: &mut [i32], algorithm: Alg) {
    match algorithm {
        Alg::Network4 | Alg::Network8 | Alg::Network16 => {
            unreachable!("networks are handled by the n <= 16 bypass")
        }
        Alg::InsertionSentinel => insertion::sentinel(arr),
        Alg::ShellCiura => shell::sort(arr),
        Alg::Radix256 => radix::sort_i32_biased(arr, aux),
        Alg::Introsort => introsort::sort(arr),
        Alg::CountingU8 | Alg::CountingU16 => {
            unreachable!("counting sort is only reached via sort_u8/sort_u16")
        }
    }
}

/// Sort a fixed 4-element array with a 5-comparator sorting network.
pub fn sort4(arr: &mut [i32; 4]) {
    networks::sort4(arr);
}

/// Sort a fixed 8-element array with a 19-comparator Batcher network.
pub fn sort8(arr: &mut [i32; 8]) {
    networks::sort8(arr);
}

/// Sort a fixed 16-element array via two 8-element networks merged with
/// a Batcher odd-even merge network.
pub fn sort16(arr: &mut [i32; 16]) {
    networks::sort16(arr);
}

/// Sort a byte array by counting occurrences of each of the 256 values.
pub fn sort_u8(arr: &mut [u8]) {
    counting::sort_u8(arr);
}

/// Sort a `u16` array with a two-pass LSD counting sort. `aux` must be at
/// least as long as `arr`.
pub fn sort_u16(arr: &mut [u16], aux: &mut [u16]) {
    counting::sort_u16(arr, aux);
}

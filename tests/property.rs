//! Property-based tests (spec.md §10): sortedness, permutation, bounds,
//! idempotence, reverse-inverse, and extremes-closure, checked over
//! random inputs via `quickcheck`.

use hydra_sort::{sort, Profile};
use quickcheck_macros::quickcheck;

fn run(mut arr: Vec<i32>) -> Vec<i32> {
    let mut aux = vec![0i32; arr.len()];
    sort(&mut arr, &mut aux, Profile::Balanced);
    arr
}

fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

fn is_permutation(before: &[i32], after: &[i32]) -> bool {
    if before.len() != after.len() {
        return false;
    }
    let mut a = before.to_vec();
    let mut b = after.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[quickcheck]
fn result_is_sorted(arr: Vec<i32>) -> bool {
    is_sorted(&run(arr))
}

#[quickcheck]
fn result_is_a_permutation(arr: Vec<i32>) -> bool {
    let before = arr.clone();
    let after = run(arr);
    is_permutation(&before, &after)
}

#[quickcheck]
fn result_stays_within_original_bounds(arr: Vec<i32>) -> bool {
    if arr.is_empty() {
        return true;
    }
    let min = *arr.iter().min().unwrap();
    let max = *arr.iter().max().unwrap();
    let after = run(arr);
    after.iter().all(|&x| x >= min && x <= max)
}

#[quickcheck]
fn sorting_twice_is_idempotent(arr: Vec<i32>) -> bool {
    let once = run(arr);
    let twice = run(once.clone());
    once == twice
}

#[quickcheck]
fn reversing_then_sorting_undoes_the_reversal(arr: Vec<i32>) -> bool {
    let mut reversed = arr.clone();
    reversed.reverse();
    let sorted_original = run(arr);
    let sorted_reversed = run(reversed);
    sorted_original == sorted_reversed
}

#[quickcheck]
fn extremes_are_closed_under_sort(mut arr: Vec<i32>) -> bool {
    arr.push(i32::MIN);
    arr.push(i32::MAX);
    let after = run(arr);
    after.first() == Some(&i32::MIN) && after.last() == Some(&i32::MAX)
}

#[quickcheck]
fn small_arrays_match_std_sort(arr: Vec<i32>) -> bool {
    let mut expected = arr.clone();
    expected.sort_unstable();
    run(arr) == expected
}

//! Shell sort with Ciura gaps (spec.md §4.4).

/// Ciura's empirically-optimal gap sequence, largest first.
pub const CIURA_GAPS: [usize; 9] = [1750, 701, 301, 132, 57, 23, 10, 4, 1];

/// Shell sort using [`CIURA_GAPS`]. Gaps `>= n` are skipped.
pub fn sort(arr: &mut [i32]) {
    let n = arr.len();

    for &gap in CIURA_GAPS.iter() {
        if gap >= n {
            continue;
        }

        for i in gap..n {
            let temp = arr[i];
            let mut j = i;

            while j >= gap && arr[j - gap] > temp {
                arr[j] = arr[j - gap];
                j -= gap;
            }
            arr[j] = temp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(arr: &[i32]) -> bool {
        arr.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn sorts_mid_size_random() {
        let mut arr: Vec<i32> = (0..64).map(|i| (i * 37 + 11) % 97).collect();
        sort(&mut arr);
        assert!(is_sorted(&arr));
    }

    #[test]
    fn sorts_reverse() {
        let mut arr: Vec<i32> = (0..50).rev().collect();
        sort(&mut arr);
        let expected: Vec<i32> = (0..50).collect();
        assert_eq!(arr, expected);
    }

    #[test]
    fn handles_tiny_inputs() {
        let mut arr = [3, 1, 2];
        sort(&mut arr);
        assert_eq!(arr, [1, 2, 3]);

        let mut empty: [i32; 0] = [];
        sort(&mut empty);
    }
}

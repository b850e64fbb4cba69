use crate::merge::merge;
use crate::Sorter;

/// Recursive quicksort, Hoare partition around the middle element
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort(&self, data: &mut [i32]) {
        quicksort(data);
    }
}

pub fn quicksort(data: &mut [i32]) {
    if data.len() <= 1 {
        return;
    }

    let split = partition(data);
    let (left, right) = data.split_at_mut(split + 1);
    quicksort(left);
    quicksort(right);
}

/// Hoare partition; returns `j` such that `data[..=j] <= pivot <= data[j + 1..]`.
///
/// Taking the lower middle as pivot keeps `j < len - 1`, so both halves are
/// non-empty and the recursion always shrinks.
#[inline]
fn partition(data: &mut [i32]) -> usize {
    let pivot = data[(data.len() - 1) / 2];
    let mut i = 0;
    let mut j = data.len() - 1;

    loop {
        while data[i] < pivot {
            i += 1;
        }
        while data[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Top-down mergesort built on [`merge`]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "mergesort"
    }

    fn sort(&self, data: &mut [i32]) {
        let sorted = merge_sort(data);
        data.copy_from_slice(&sorted);
    }
}

/// Left half gets `len / 2` elements, right half the rest.
pub fn merge_sort(data: &[i32]) -> Vec<i32> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let (left, right) = data.split_at(data.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Classic O(n²) bubble sort
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort(&self, data: &mut [i32]) {
        bubble_sort(data);
    }
}

/// Always makes exactly `n - 1` passes; no early exit.
pub fn bubble_sort(data: &mut [i32]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

use crate::rng::RandomSource;
use rand::RngCore;

/// Durstenfeld's in-place Fisher-Yates shuffle.
///
/// Index `i` is swapped with a uniform pick from `[i, len - 1]`, so every
/// permutation is equally likely. Slices of length 0 or 1 are left alone and
/// draw nothing from `rng`.
pub fn shuffle<T, R: RngCore>(data: &mut [T], rng: &mut RandomSource<R>) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let j = rng.rand_int(i, n - 1);
        data.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_copy(data: &[i32]) -> Vec<i32> {
        let mut v = data.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = RandomSource::seed_from_u64(1);
        let mut data: Vec<i32> = vec![];
        shuffle(&mut data, &mut rng);
        assert!(data.is_empty());
    }

    #[test]
    fn test_shuffle_single_element() {
        let mut rng = RandomSource::seed_from_u64(1);
        let mut data = vec![42];
        shuffle(&mut data, &mut rng);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_shuffle_short_input_consumes_no_randomness() {
        let mut used = RandomSource::seed_from_u64(3);
        let mut fresh = RandomSource::seed_from_u64(3);
        shuffle(&mut [7], &mut used);
        assert_eq!(used.rand_int(0, 1_000_000), fresh.rand_int(0, 1_000_000));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = RandomSource::seed_from_u64(12345);
        let original = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut data = original.clone();
        shuffle(&mut data, &mut rng);
        assert_eq!(sorted_copy(&data), sorted_copy(&original));
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a: Vec<i32> = (0..100).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut RandomSource::seed_from_u64(42));
        shuffle(&mut b, &mut RandomSource::seed_from_u64(42));
        assert_eq!(a, b);
        assert_ne!(a, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        // 3 elements -> 6 permutations, each should show up
        let mut rng = RandomSource::seed_from_u64(2024);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..6000 {
            let mut data = [1, 2, 3];
            shuffle(&mut data, &mut rng);
            *counts.entry(data).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        // Loose uniformity check: expected 1000 each
        assert!(counts.values().all(|&c| (800..1200).contains(&c)));
    }
}

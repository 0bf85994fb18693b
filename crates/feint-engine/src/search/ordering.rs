//! Move ordering: a uniform shuffle so ties are not broken by generation order.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle `items` in place with a uniform Fisher-Yates permutation.
///
/// Empty and single-element slices are left untouched.
#[inline]
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::shuffle;

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        assert_eq!(items.len(), 50);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(9));
        shuffle(&mut b, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn every_position_gets_visited() {
        // Over many shuffles of [0, 1, 2], each value should land first at least once.
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_first = [false; 3];
        for _ in 0..200 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut items, &mut rng);
            seen_first[items[0]] = true;
        }
        assert_eq!(seen_first, [true; 3]);
    }
}

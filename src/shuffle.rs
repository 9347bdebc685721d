use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Fisher-Yates: walks `i` from the last index down to 1 and swaps it with a `j`
/// drawn uniformly from `0..=i`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gen_seed, RandGen, Seeder};
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn test_empty_and_single() {
        let mut rng: RandGen = Seeder::from("empty").make_rng();

        let empty: [&str; 0] = [];
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&["Ann"], &mut rng), vec!["Ann"]);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec!["Ann", "Bo", "Cy", "Di", "Ed"];
        let copy = input.clone();
        let mut rng: RandGen = Seeder::from(gen_seed()).make_rng();
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_is_permutation() {
        let input: Vec<_> = (0..100).map(|i| format!("member {}", i % 37)).collect();

        // Execute a bunch of times to test against different seeds
        for _ in 0..50 {
            let mut rng: RandGen = Seeder::from(gen_seed()).make_rng();
            let mut output = shuffled(&input, &mut rng);
            assert_eq!(output.len(), input.len());

            let mut sorted_input = input.clone();
            sorted_input.sort();
            output.sort();
            assert_eq!(output, sorted_input);
        }
    }

    #[test]
    fn test_fixed_source() {
        // A source that always yields zero draws j = 0 at every step, which
        // rotates the first element to the end.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(shuffled(&[1, 2, 3, 4], &mut rng), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_reproducibility() {
        let input: Vec<_> = (0..20).collect();
        let seed = gen_seed();
        let mut rng: RandGen = Seeder::from(seed).make_rng();
        let first = shuffled(&input, &mut rng);

        for _ in 0..10 {
            let mut rng: RandGen = Seeder::from(seed).make_rng();
            assert_eq!(shuffled(&input, &mut rng), first);
        }
    }

    #[test]
    fn test_all_permutations_reachable() {
        let input = [1, 2, 3];
        let mut rng: RandGen = Seeder::from("permutations").make_rng();
        let seen: HashSet<_> = (0..600).map(|_| shuffled(&input, &mut rng)).collect();
        assert_eq!(seen.len(), 6);
    }
}

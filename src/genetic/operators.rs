//! Binary-vector genetic operators.
//!
//! Operators act on `&[bool]` gene vectors and know nothing about graphs.
//!
//! # Initialization
//!
//! - [`random_bernoulli`]: each gene independently set with probability `p`
//! - [`random_fixed_cardinality`]: uniform subset of exactly `k` genes
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: cut at `[1, n-1]`, exchange tails
//!
//! # Mutation and Repair
//!
//! - [`bit_flip_mutation`]: flip each gene with probability `rate` — O(n)
//! - [`swap_mutation`]: move one camera to an empty position — O(n)
//! - [`repair_cardinality`]: clear or set random genes until exactly `k` — O(n)

use rand::seq::IndexedRandom;
use rand::Rng;

/// Random gene vector of length `n`, each gene `true` with probability `p`.
///
/// # Panics
/// Panics if `p` is outside `[0, 1]`.
pub fn random_bernoulli<R: Rng>(n: usize, p: f64, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(p)).collect()
}

/// Random gene vector of length `n` with exactly `k` genes set.
///
/// # Panics
/// Panics if `k > n`.
pub fn random_fixed_cardinality<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<bool> {
    let mut genes = vec![false; n];
    for i in rand::seq::index::sample(rng, n, k) {
        genes[i] = true;
    }
    genes
}

/// Single-point crossover.
///
/// Draws a cut `c` uniformly from `[1, n-1]` and returns
/// `(p1[..c] ++ p2[c..], p2[..c] ++ p1[c..])`. With fewer than two genes
/// there is no valid cut and the parents are copied.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);
    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Flips each gene independently with probability `rate`.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
        }
    }
}

/// Swaps one random set gene with one random unset gene.
///
/// Preserves the number of set genes. No-op when all genes are equal.
pub fn swap_mutation<R: Rng>(genes: &mut [bool], rng: &mut R) {
    let (ones, zeros) = split_positions(genes);
    if let (Some(&on), Some(&off)) = (ones.choose(rng), zeros.choose(rng)) {
        genes.swap(on, off);
    }
}

/// Forces exactly `k` set genes by clearing random excess ones or setting
/// random zeros.
///
/// # Panics
/// Panics if `k > genes.len()`.
pub fn repair_cardinality<R: Rng>(genes: &mut [bool], k: usize, rng: &mut R) {
    assert!(k <= genes.len(), "cardinality exceeds gene count");

    let (ones, zeros) = split_positions(genes);
    if ones.len() > k {
        for i in ones.choose_multiple(rng, ones.len() - k) {
            genes[*i] = false;
        }
    } else if ones.len() < k {
        for i in zeros.choose_multiple(rng, k - ones.len()) {
            genes[*i] = true;
        }
    }
}

fn split_positions(genes: &[bool]) -> (Vec<usize>, Vec<usize>) {
    (0..genes.len()).partition(|&i| genes[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn count(genes: &[bool]) -> usize {
        genes.iter().filter(|&&g| g).count()
    }

    #[test]
    fn test_fixed_cardinality() {
        let mut rng = create_rng(42);
        for k in 0..=10 {
            let genes = random_fixed_cardinality(10, k, &mut rng);
            assert_eq!(genes.len(), 10);
            assert_eq!(count(&genes), k);
        }
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = create_rng(42);
        assert_eq!(count(&random_bernoulli(20, 0.0, &mut rng)), 0);
        assert_eq!(count(&random_bernoulli(20, 1.0, &mut rng)), 20);
    }

    #[test]
    fn test_crossover_exchanges_tails() {
        let mut rng = create_rng(42);
        let p1 = vec![true; 8];
        let p2 = vec![false; 8];

        for _ in 0..100 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            let cut = count(&c1);
            assert!((1..8).contains(&cut), "cut {cut} outside [1, n-1]");
            assert!(c1[..cut].iter().all(|&g| g));
            assert!(c1[cut..].iter().all(|&g| !g));
            assert_eq!(count(&c2), 8 - cut);
            assert!(c2[cut..].iter().all(|&g| g));
        }
    }

    #[test]
    fn test_crossover_short_parents() {
        let mut rng = create_rng(42);
        let (c1, c2) = single_point_crossover(&[true], &[false], &mut rng);
        assert_eq!((c1, c2), (vec![true], vec![false]));

        let (c1, c2) = single_point_crossover(&[], &[], &mut rng);
        assert!(c1.is_empty() && c2.is_empty());
    }

    #[test]
    fn test_bit_flip_rates() {
        let mut rng = create_rng(42);
        let mut genes = vec![false; 16];
        bit_flip_mutation(&mut genes, 0.0, &mut rng);
        assert_eq!(count(&genes), 0);
        bit_flip_mutation(&mut genes, 1.0, &mut rng);
        assert_eq!(count(&genes), 16);
    }

    #[test]
    fn test_swap_preserves_cardinality() {
        let mut rng = create_rng(42);
        let mut genes = random_fixed_cardinality(12, 5, &mut rng);
        for _ in 0..100 {
            let before = genes.clone();
            swap_mutation(&mut genes, &mut rng);
            assert_eq!(count(&genes), 5);
            let changed = before.iter().zip(&genes).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_swap_noop_when_uniform() {
        let mut rng = create_rng(42);
        let mut genes = vec![true; 4];
        swap_mutation(&mut genes, &mut rng);
        assert_eq!(genes, vec![true; 4]);

        let mut genes = vec![false; 4];
        swap_mutation(&mut genes, &mut rng);
        assert_eq!(genes, vec![false; 4]);
    }

    #[test]
    fn test_repair_down_and_up() {
        let mut rng = create_rng(42);

        let mut genes = vec![true; 10];
        repair_cardinality(&mut genes, 3, &mut rng);
        assert_eq!(count(&genes), 3);

        let mut genes = vec![false; 10];
        repair_cardinality(&mut genes, 7, &mut rng);
        assert_eq!(count(&genes), 7);

        let mut genes = vec![true, false, true, false];
        repair_cardinality(&mut genes, 2, &mut rng);
        assert_eq!(genes, vec![true, false, true, false]);
    }

    #[test]
    fn test_repair_keeps_subset_when_clearing() {
        let mut rng = create_rng(7);
        let original = vec![true, false, true, true, false, true];
        let mut genes = original.clone();
        repair_cardinality(&mut genes, 2, &mut rng);
        for (g, o) in genes.iter().zip(&original) {
            assert!(!*g || *o, "repair must only clear genes when reducing");
        }
    }
}

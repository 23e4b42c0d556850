//! Bit-level initialization and mutation operators.
//!
//! These functions operate on raw `&[u8]` genomes whose entries are 0 or 1.
//! [`Chromosome`](super::Chromosome) validates its arguments and then
//! delegates here.

use rand::Rng;

/// Draws `n` genes, each independently and uniformly from {0, 1}.
pub fn random_genes<R: Rng>(n: usize, rng: &mut R) -> Vec<u8> {
    (0..n).map(|_| u8::from(rng.random_bool(0.5))).collect()
}

/// Bit-flip mutation: flips each gene independently with probability `p`.
///
/// `p = 0.0` leaves the genome untouched and `p = 1.0` complements every
/// gene; neither consumes any randomness beyond what `random_bool` decides.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `p` is not within `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [u8], p: f64, rng: &mut R) {
    assert!((0.0..=1.0).contains(&p), "mutation probability must be in [0, 1]");
    for gene in genes.iter_mut() {
        if rng.random_bool(p) {
            *gene = 1 - *gene;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_genes_are_binary() {
        let mut rng = create_rng(42);
        let genes = random_genes(1000, &mut rng);
        assert_eq!(genes.len(), 1000);
        assert!(genes.iter().all(|&g| g <= 1));
    }

    #[test]
    fn test_random_genes_roughly_balanced() {
        let mut rng = create_rng(42);
        let genes = random_genes(10_000, &mut rng);
        let ones = genes.iter().filter(|&&g| g == 1).count();
        assert!(
            (4500..5500).contains(&ones),
            "expected about half ones, got {ones}/10000"
        );
    }

    #[test]
    fn test_random_genes_empty() {
        let mut rng = create_rng(42);
        assert!(random_genes(0, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_probability_keeps_genome() {
        let mut rng = create_rng(42);
        let original = vec![1, 0, 0, 1, 1, 0];
        let mut genes = original.clone();
        bit_flip_mutation(&mut genes, 0.0, &mut rng);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_full_probability_complements() {
        let mut rng = create_rng(42);
        let mut genes = vec![1, 0, 0, 1, 1, 0];
        bit_flip_mutation(&mut genes, 1.0, &mut rng);
        assert_eq!(genes, vec![0, 1, 1, 0, 0, 1]);
    }

    #[test]
    fn test_half_probability_flips_some() {
        let mut rng = create_rng(42);
        let mut genes = vec![0u8; 1000];
        bit_flip_mutation(&mut genes, 0.5, &mut rng);
        let flipped = genes.iter().filter(|&&g| g == 1).count();
        assert!(
            (400..600).contains(&flipped),
            "expected about half flipped, got {flipped}/1000"
        );
        assert!(genes.iter().all(|&g| g <= 1));
    }

    #[test]
    #[should_panic(expected = "mutation probability must be in [0, 1]")]
    fn test_invalid_probability_panics() {
        let mut rng = create_rng(42);
        let mut genes = vec![0, 1];
        bit_flip_mutation(&mut genes, 1.5, &mut rng);
    }
}

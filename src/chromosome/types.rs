//! Capability traits injected into chromosomes.
//!
//! A chromosome does not know what it encodes. Its quality and its phenotype
//! are supplied from outside through [`FitnessFunction`] and [`Decoder`],
//! both of which are blanket-implemented for closures, so plain
//! `|c: &Chromosome| ...` expressions can be used directly.

use super::individual::Chromosome;
use std::sync::Arc;

/// Scores a chromosome.
///
/// One fitness function is shared by every chromosome of a run. It must be
/// `Send + Sync` so that a caller may evaluate distinct chromosomes from
/// several threads.
///
/// The score direction (maximize or minimize) is a decision of the outer
/// algorithm; this crate only stores the value.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_bitga::chromosome::{Chromosome, SharedFitness};
///
/// // OneMax: count the set bits.
/// let onemax: SharedFitness = Arc::new(|c: &Chromosome| c.ones() as f64);
/// let mut c = Chromosome::from_genes(onemax, vec![1, 0, 1, 1]).unwrap();
/// assert_eq!(c.compute_fitness(), 3.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Returns the fitness of `chromosome`'s current genome.
    fn evaluate(&self, chromosome: &Chromosome) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Chromosome) -> f64 + Send + Sync,
{
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        self(chromosome)
    }
}

/// Maps a chromosome to a phenotype value, distinct from its fitness.
///
/// Assigned after construction with
/// [`Chromosome::set_decoder`](Chromosome::set_decoder).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_bitga::chromosome::{Chromosome, SharedFitness};
///
/// let zero: SharedFitness = Arc::new(|_: &Chromosome| 0.0);
/// let mut c = Chromosome::from_genes(zero, vec![1, 0, 1]).unwrap();
///
/// // Read the genome as an unsigned binary number, most significant bit first.
/// c.set_decoder(|c: &Chromosome| {
///     c.genes().iter().fold(0.0, |acc, &g| acc * 2.0 + g as f64)
/// });
/// assert_eq!(c.decode().unwrap(), 5.0);
/// ```
pub trait Decoder: Send + Sync {
    /// Decodes `chromosome`'s current genome.
    fn decode(&self, chromosome: &Chromosome) -> f64;
}

impl<F> Decoder for F
where
    F: Fn(&Chromosome) -> f64 + Send + Sync,
{
    fn decode(&self, chromosome: &Chromosome) -> f64 {
        self(chromosome)
    }
}

/// Fitness function handle shared by a whole population.
pub type SharedFitness = Arc<dyn FitnessFunction>;

/// Decoder handle; cloning a chromosome shares it.
pub type SharedDecoder = Arc<dyn Decoder>;

/// Wraps a fitness function into a [`SharedFitness`] handle.
pub fn shared_fitness<F>(f: F) -> SharedFitness
where
    F: FitnessFunction + 'static,
{
    Arc::new(f)
}

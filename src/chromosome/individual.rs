//! The [`Chromosome`] entity.

use log::{debug, trace, warn};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

use super::crossover::{
    masked_uniform_crossover, one_point_crossover, two_point_crossover, uniform_crossover,
    CrossoverOutcome, CrossoverStrategy,
};
use super::error::{ChromosomeError, Result};
use super::mutation::{bit_flip_mutation, random_genes};
use super::types::{Decoder, FitnessFunction, SharedDecoder, SharedFitness};

/// A candidate solution encoded as a fixed-length bit string.
///
/// Every gene is 0 or 1 and the genome length never changes after
/// construction. Besides the genome a chromosome carries:
///
/// - the fitness function shared with the rest of its population,
/// - an optional decoder,
/// - the cached fitness from the last [`compute_fitness`](Self::compute_fitness),
/// - a roulette weight and a crossover mask, both set by the outer algorithm.
///
/// Fitness is never recomputed implicitly. Offspring from
/// [`create_mutant`](Self::create_mutant) and the crossover operators start
/// without a fitness, and [`mutate`](Self::mutate) clears it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_bitga::chromosome::{Chromosome, SharedFitness};
/// use u_bitga::random::create_rng;
///
/// let onemax: SharedFitness = Arc::new(|c: &Chromosome| c.ones() as f64);
/// let mut rng = create_rng(42);
///
/// let mut population = Chromosome::generate_population(10, 16, onemax, &mut rng);
/// for c in &mut population {
///     c.compute_fitness();
/// }
///
/// let (a, b) = population[0]
///     .crossover(&population[1], "two-point", &mut rng)
///     .unwrap()
///     .into_pair();
/// assert_eq!(a.size(), 16);
/// assert!(b.fitness().is_none());
/// ```
#[derive(Clone)]
pub struct Chromosome {
    genes: Vec<u8>,
    fitness_fn: SharedFitness,
    decoder: Option<SharedDecoder>,
    fitness: Option<f64>,
    roulette_value: Option<f64>,
    mask: Option<Vec<bool>>,
}

impl Chromosome {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Creates a chromosome of `size` genes, each drawn uniformly from {0, 1}.
    pub fn random<R: Rng>(size: usize, fitness_fn: SharedFitness, rng: &mut R) -> Self {
        Self::from_valid(fitness_fn, random_genes(size, rng))
    }

    /// Creates a chromosome whose genome is the concatenation of `fragments`.
    ///
    /// This is how offspring are assembled. The fragments are not checked
    /// against any parent size; the resulting size is simply their total
    /// length. An empty fragment list yields an empty chromosome.
    ///
    /// # Errors
    /// [`ChromosomeError::InvalidGene`] if any gene is not 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use u_bitga::chromosome::{Chromosome, SharedFitness};
    ///
    /// let f: SharedFitness = Arc::new(|_: &Chromosome| 0.0);
    /// let c = Chromosome::from_fragments(f, [&[1u8, 0][..], &[1, 1, 0][..]]).unwrap();
    /// assert_eq!(c.genes(), &[1, 0, 1, 1, 0]);
    /// assert_eq!(c.size(), 5);
    /// ```
    pub fn from_fragments<I, S>(fitness_fn: SharedFitness, fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut genes = Vec::new();
        for fragment in fragments {
            genes.extend_from_slice(fragment.as_ref());
        }
        validate_genes(&genes)?;
        Ok(Self::from_valid(fitness_fn, genes))
    }

    /// Creates a chromosome from a single gene vector.
    ///
    /// # Errors
    /// [`ChromosomeError::InvalidGene`] if any gene is not 0 or 1.
    pub fn from_genes(fitness_fn: SharedFitness, genes: Vec<u8>) -> Result<Self> {
        validate_genes(&genes)?;
        Ok(Self::from_valid(fitness_fn, genes))
    }

    fn from_valid(fitness_fn: SharedFitness, genes: Vec<u8>) -> Self {
        Self {
            genes,
            fitness_fn,
            decoder: None,
            fitness: None,
            roulette_value: None,
            mask: None,
        }
    }

    /// Creates `population_size` random chromosomes of `chromosome_size`
    /// genes, all sharing `fitness_fn`.
    ///
    /// Chromosomes are returned in creation order. No fitness is computed.
    pub fn generate_population<R: Rng>(
        population_size: usize,
        chromosome_size: usize,
        fitness_fn: SharedFitness,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        debug!(
            "generating population: {} chromosomes of {} genes",
            population_size, chromosome_size
        );
        (0..population_size)
            .map(|_| Self::random(chromosome_size, Arc::clone(&fitness_fn), rng))
            .collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The genome.
    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    /// Number of genes.
    pub fn size(&self) -> usize {
        self.genes.len()
    }

    /// Number of genes set to 1.
    pub fn ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g == 1).count()
    }

    /// The fitness function shared with the rest of the population.
    pub fn fitness_fn(&self) -> &SharedFitness {
        &self.fitness_fn
    }

    /// Fitness cached by the last [`compute_fitness`](Self::compute_fitness),
    /// or `None` if it was never computed for this genome.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Selection weight stored by the outer algorithm.
    pub fn roulette_value(&self) -> Option<f64> {
        self.roulette_value
    }

    /// Stores a selection weight. Not computed or read by this crate.
    pub fn set_roulette_value(&mut self, value: f64) {
        self.roulette_value = Some(value);
    }

    /// The crossover mask, if one was set.
    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    /// Sets the mask used by masked-uniform crossover.
    ///
    /// # Errors
    /// [`ChromosomeError::MaskLengthMismatch`] if `mask.len() != self.size()`;
    /// the previous mask is kept.
    pub fn set_mask(&mut self, mask: Vec<bool>) -> Result<()> {
        if mask.len() != self.size() {
            return Err(ChromosomeError::MaskLengthMismatch {
                expected: self.size(),
                actual: mask.len(),
            });
        }
        self.mask = Some(mask);
        Ok(())
    }

    /// Removes the crossover mask.
    pub fn clear_mask(&mut self) {
        self.mask = None;
    }

    // ------------------------------------------------------------------
    // Fitness & decoding
    // ------------------------------------------------------------------

    /// Evaluates the fitness function on the current genome, caches the
    /// result and returns it.
    ///
    /// Each call overwrites the cached value. A panic inside the fitness
    /// function propagates to the caller.
    pub fn compute_fitness(&mut self) -> f64 {
        let value = self.fitness_fn.evaluate(self);
        self.fitness = Some(value);
        value
    }

    /// Assigns the decoder used by [`decode`](Self::decode).
    pub fn set_decoder<D>(&mut self, decoder: D)
    where
        D: Decoder + 'static,
    {
        self.decoder = Some(Arc::new(decoder));
    }

    /// Assigns an already shared decoder.
    pub fn set_shared_decoder(&mut self, decoder: SharedDecoder) {
        self.decoder = Some(decoder);
    }

    /// Returns `true` if a decoder has been assigned.
    pub fn has_decoder(&self) -> bool {
        self.decoder.is_some()
    }

    /// Runs the decoder on the current genome. The result is not cached.
    ///
    /// # Errors
    /// [`ChromosomeError::DecoderNotSet`] if no decoder was assigned.
    pub fn decode(&self) -> Result<f64> {
        let decoder = self.decoder.as_ref().ok_or(ChromosomeError::DecoderNotSet)?;
        Ok(decoder.decode(self))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Returns a copy of this chromosome with every gene flipped
    /// independently with probability `p_mutation`.
    ///
    /// The receiver is left untouched. The mutant shares the fitness
    /// function and has no fitness, decoder, mask or roulette value.
    ///
    /// # Errors
    /// [`ChromosomeError::InvalidProbability`] if `p_mutation` is outside
    /// `[0, 1]` or NaN.
    pub fn create_mutant<R: Rng>(&self, p_mutation: f64, rng: &mut R) -> Result<Chromosome> {
        validate_probability(p_mutation)?;

        let mut genes = self.genes.clone();
        bit_flip_mutation(&mut genes, p_mutation, rng);
        trace!(
            "mutant: {} of {} genes flipped (p = {})",
            genes.iter().zip(&self.genes).filter(|(a, b)| a != b).count(),
            genes.len(),
            p_mutation
        );

        Ok(Self::from_valid(Arc::clone(&self.fitness_fn), genes))
    }

    /// Replaces this chromosome's genome with a mutant's genome.
    ///
    /// The fitness function, decoder, mask and roulette value are kept; the
    /// cached fitness is cleared, so call
    /// [`compute_fitness`](Self::compute_fitness) again if needed. On error
    /// nothing changes.
    pub fn mutate<R: Rng>(&mut self, p_mutation: f64, rng: &mut R) -> Result<()> {
        let mutant = self.create_mutant(p_mutation, rng)?;
        self.genes = mutant.genes;
        self.fitness = None;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Crossover
    // ------------------------------------------------------------------

    /// Recombines `self` with `other` using the strategy called `strategy`
    /// (`"one-point"`, `"two-point"`, `"uniform"` or `"masked-uniform"`).
    ///
    /// An unrecognized name is not an error: both parents are returned
    /// unchanged as [`CrossoverOutcome::Unchanged`] and a warning is logged.
    ///
    /// # Errors
    /// See [`crossover_with`](Self::crossover_with).
    pub fn crossover<R: Rng>(
        &self,
        other: &Chromosome,
        strategy: &str,
        rng: &mut R,
    ) -> Result<CrossoverOutcome> {
        match CrossoverStrategy::from_name(strategy) {
            Some(s) => {
                let (a, b) = self.crossover_with(other, s, rng)?;
                Ok(CrossoverOutcome::Offspring(a, b))
            }
            None => {
                warn!(
                    "unknown crossover strategy {:?}: returning parents unchanged",
                    strategy
                );
                Ok(CrossoverOutcome::Unchanged(self.clone(), other.clone()))
            }
        }
    }

    /// Recombines `self` with `other` using `strategy`.
    ///
    /// Both offspring share `self`'s fitness function and start with no
    /// fitness, decoder, mask or roulette value. Masked-uniform crossover
    /// reads the mask set on `self`.
    ///
    /// # Errors
    /// - [`ChromosomeError::SizeMismatch`] if the parents differ in size.
    /// - [`ChromosomeError::MaskNotSet`] for masked-uniform without a mask.
    /// - [`ChromosomeError::MaskLengthMismatch`] if the mask does not cover
    ///   the genome.
    pub fn crossover_with<R: Rng>(
        &self,
        other: &Chromosome,
        strategy: CrossoverStrategy,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome)> {
        if self.size() != other.size() {
            return Err(ChromosomeError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }

        let (g1, g2) = match strategy {
            CrossoverStrategy::OnePoint => one_point_crossover(&self.genes, &other.genes),
            CrossoverStrategy::TwoPoint => two_point_crossover(&self.genes, &other.genes),
            CrossoverStrategy::Uniform => uniform_crossover(&self.genes, &other.genes, rng),
            CrossoverStrategy::MaskedUniform => {
                let mask = self.mask.as_deref().ok_or(ChromosomeError::MaskNotSet)?;
                if mask.len() != self.size() {
                    return Err(ChromosomeError::MaskLengthMismatch {
                        expected: self.size(),
                        actual: mask.len(),
                    });
                }
                masked_uniform_crossover(&self.genes, &other.genes, mask)
            }
        };
        trace!("{} crossover on {} genes", strategy, self.size());

        Ok((
            Self::from_valid(Arc::clone(&self.fitness_fn), g1),
            Self::from_valid(Arc::clone(&self.fitness_fn), g2),
        ))
    }
}

/// Compares genome, cached fitness, roulette value and mask. The fitness
/// function and decoder are not compared.
impl PartialEq for Chromosome {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
            && self.fitness == other.fitness
            && self.roulette_value == other.roulette_value
            && self.mask == other.mask
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genes", &self.to_string())
            .field("fitness", &self.fitness)
            .field("roulette_value", &self.roulette_value)
            .field("mask", &self.mask)
            .field("has_decoder", &self.decoder.is_some())
            .finish()
    }
}

/// Renders the genome as a bit string, e.g. `01101`.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

fn validate_genes(genes: &[u8]) -> Result<()> {
    match genes.iter().position(|&g| g > 1) {
        Some(index) => Err(ChromosomeError::InvalidGene {
            index,
            value: genes[index],
        }),
        None => Ok(()),
    }
}

fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ChromosomeError::InvalidProbability(p))
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Operator configuration.
//!
//! [`ChromosomeConfig`] bundles the parameters an outer loop needs to drive
//! the chromosome operators: population shape, mutation probability,
//! crossover strategy and seed.

use rand::rngs::StdRng;

use super::crossover::CrossoverStrategy;
use super::error::{ChromosomeError, Result};
use super::individual::Chromosome;
use super::types::SharedFitness;
use crate::random::{create_os_rng, create_rng};

/// Configuration for binary chromosome operators.
///
/// # Examples
///
/// ```
/// use u_bitga::chromosome::{ChromosomeConfig, CrossoverStrategy};
///
/// let config = ChromosomeConfig::new(64)
///     .with_population_size(200)
///     .with_crossover(CrossoverStrategy::Uniform)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert!((config.mutation_probability - 1.0 / 64.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromosomeConfig {
    /// Number of chromosomes per population.
    pub population_size: usize,

    /// Number of genes per chromosome.
    pub chromosome_size: usize,

    /// Per-gene flip probability (0.0–1.0).
    ///
    /// `1 / chromosome_size` flips one gene per chromosome on average.
    pub mutation_probability: f64,

    /// Crossover strategy.
    pub crossover: CrossoverStrategy,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ChromosomeConfig {
    fn default() -> Self {
        Self::new(32)
    }
}

impl ChromosomeConfig {
    /// Creates a configuration for chromosomes of `chromosome_size` genes.
    ///
    /// The mutation probability defaults to `1 / chromosome_size`.
    pub fn new(chromosome_size: usize) -> Self {
        Self {
            population_size: 100,
            chromosome_size,
            mutation_probability: 1.0 / chromosome_size.max(1) as f64,
            crossover: CrossoverStrategy::default(),
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome size. The mutation probability is left as is.
    pub fn with_chromosome_size(mut self, n: usize) -> Self {
        self.chromosome_size = n;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, strategy: CrossoverStrategy) -> Self {
        self.crossover = strategy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`ChromosomeError::InvalidConfig`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ChromosomeError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.chromosome_size == 0 {
            return Err(ChromosomeError::InvalidConfig(
                "chromosome_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ChromosomeError::InvalidConfig(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }

    /// Builds the random generator described by [`seed`](Self::seed).
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => create_os_rng(),
        }
    }

    /// Validates the configuration and generates a population with `rng`.
    ///
    /// # Errors
    /// See [`validate`](Self::validate).
    pub fn generate_population<R: rand::Rng>(
        &self,
        fitness_fn: SharedFitness,
        rng: &mut R,
    ) -> Result<Vec<Chromosome>> {
        self.validate()?;
        Ok(Chromosome::generate_population(
            self.population_size,
            self.chromosome_size,
            fitness_fn,
            rng,
        ))
    }

    /// Crosses the parents with [`crossover`](Self::crossover), then
    /// mutates both offspring with
    /// [`mutation_probability`](Self::mutation_probability).
    ///
    /// Neither offspring has a fitness yet.
    ///
    /// # Errors
    /// Any error from [`Chromosome::crossover_with`] or
    /// [`Chromosome::mutate`].
    pub fn breed<R: rand::Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome)> {
        let (mut a, mut b) = parent1.crossover_with(parent2, self.crossover, rng)?;
        a.mutate(self.mutation_probability, rng)?;
        b.mutate(self.mutation_probability, rng)?;
        Ok((a, b))
    }
}

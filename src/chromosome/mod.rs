//! Binary chromosome and its genetic operators.
//!
//! A [`Chromosome`] is a fixed-length bit string paired with a shared
//! [`FitnessFunction`]. The outer evolutionary loop (selection, replacement,
//! termination) lives outside this module and drives chromosomes through
//! their public operations.
//!
//! # Operations
//!
//! - Population generation: [`Chromosome::generate_population`]
//! - Fitness and decoding: [`Chromosome::compute_fitness`], [`Chromosome::decode`]
//! - Mutation: [`Chromosome::create_mutant`], [`Chromosome::mutate`]
//! - Crossover: [`Chromosome::crossover`] (by name) and
//!   [`Chromosome::crossover_with`] (typed)
//!
//! # Submodules
//!
//! - [`crossover`]: one-point, two-point, uniform and masked-uniform
//!   crossover on raw `&[u8]` genomes
//! - [`mutation`]: random initialization and bit-flip mutation on raw genomes
//!
//! Randomized operations take the generator as an argument; see
//! [`crate::random`] for seeded construction.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod crossover;
mod error;
mod individual;
pub mod mutation;
mod types;

pub use config::ChromosomeConfig;
pub use crossover::{CrossoverOutcome, CrossoverStrategy, UnknownStrategy};
pub use error::{ChromosomeError, Result};
pub use individual::Chromosome;
pub use types::{shared_fitness, Decoder, FitnessFunction, SharedDecoder, SharedFitness};

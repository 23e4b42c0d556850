//! Binary-encoded genetic algorithm core.
//!
//! Provides the [`Chromosome`](chromosome::Chromosome) entity, a fixed-length
//! bit string carrying a shared fitness function, together with the
//! operators that drive evolutionary search:
//!
//! - **Population generation**: uniform random bit strings
//! - **Fitness & decoding**: injected [`FitnessFunction`](chromosome::FitnessFunction)
//!   and [`Decoder`](chromosome::Decoder) capabilities
//! - **Mutation**: independent per-bit flips
//! - **Crossover**: one-point, two-point, uniform and masked-uniform
//!
//! # Architecture
//!
//! The generational loop (selection pressure, replacement policy,
//! termination) is left to the consumer. Every randomized operator takes
//! its random generator as an argument, so runs are reproducible with
//! [`random::create_rng`].
//!
//! # Logging
//!
//! Diagnostic events go through the [`log`] facade. An unrecognized
//! crossover strategy name is reported at `warn` level.

pub mod chromosome;
pub mod random;

//! Binary crossover operators.
//!
//! Each operator takes two equal-length parent genomes and returns two
//! offspring genomes. At every position the two offspring hold the two
//! parents' genes, one each, so no genetic material is lost or duplicated.
//!
//! # Operators
//!
//! - [`one_point_crossover`]: cut at `n / 2`
//! - [`two_point_crossover`]: cuts at `n / 3` and `2n / 3`
//! - [`uniform_crossover`]: fair coin per position
//! - [`masked_uniform_crossover`]: caller-supplied mask per position
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use super::individual::Chromosome;

/// Crossover strategy, addressed by name in [`Chromosome::crossover`].
///
/// | Variant | Name |
/// |---------|------|
/// | `OnePoint` | `"one-point"` |
/// | `TwoPoint` | `"two-point"` |
/// | `Uniform` | `"uniform"` |
/// | `MaskedUniform` | `"masked-uniform"` |
///
/// # Examples
///
/// ```
/// use u_bitga::chromosome::CrossoverStrategy;
///
/// let s: CrossoverStrategy = "two-point".parse().unwrap();
/// assert_eq!(s, CrossoverStrategy::TwoPoint);
/// assert_eq!(s.to_string(), "two-point");
/// assert!("bogus".parse::<CrossoverStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CrossoverStrategy {
    /// Single cut at the midpoint.
    #[default]
    OnePoint,

    /// Two cuts splitting the genome into thirds.
    TwoPoint,

    /// Independent fair coin per position.
    Uniform,

    /// Per-position decision read from the invoking chromosome's mask.
    MaskedUniform,
}

impl CrossoverStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [CrossoverStrategy; 4] = [
        CrossoverStrategy::OnePoint,
        CrossoverStrategy::TwoPoint,
        CrossoverStrategy::Uniform,
        CrossoverStrategy::MaskedUniform,
    ];

    /// The name this strategy is addressed by.
    pub fn name(&self) -> &'static str {
        match self {
            CrossoverStrategy::OnePoint => "one-point",
            CrossoverStrategy::TwoPoint => "two-point",
            CrossoverStrategy::Uniform => "uniform",
            CrossoverStrategy::MaskedUniform => "masked-uniform",
        }
    }

    /// Looks up a strategy by name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for CrossoverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `CrossoverStrategy::from_str` for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown crossover strategy: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for CrossoverStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Result of a crossover request.
///
/// `Unchanged` is produced when the strategy name was not recognized: the
/// two parents come back as they went in and no recombination happened.
/// Use [`is_unchanged`](Self::is_unchanged) to tell the two apart, or
/// [`into_pair`](Self::into_pair) to ignore the distinction.
#[derive(Debug, Clone)]
#[must_use]
pub enum CrossoverOutcome {
    /// Two newly built offspring.
    Offspring(Chromosome, Chromosome),

    /// The parents, untouched, because no strategy matched.
    Unchanged(Chromosome, Chromosome),
}

impl CrossoverOutcome {
    /// Returns `true` if no strategy matched and the parents were returned.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, CrossoverOutcome::Unchanged(..))
    }

    /// Returns the two chromosomes, offspring or parents.
    pub fn into_pair(self) -> (Chromosome, Chromosome) {
        match self {
            CrossoverOutcome::Offspring(a, b) | CrossoverOutcome::Unchanged(a, b) => (a, b),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover with the cut at `n / 2`.
///
/// ```text
/// parent1: a0 a1 | a2 a3        child1: a0 a1 b2 b3
/// parent2: b0 b1 | b2 b3   ->   child2: b0 b1 a2 a3
/// ```
///
/// # Panics
/// Panics if parents have different lengths.
pub fn one_point_crossover(parent1: &[u8], parent2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let h = n / 2;
    let child1 = [&parent1[..h], &parent2[h..]].concat();
    let child2 = [&parent2[..h], &parent1[h..]].concat();
    (child1, child2)
}

/// Two-point crossover with cuts at `n / 3` and `2n / 3`.
///
/// The middle segment is exchanged; the outer segments stay in place.
/// When `n < 3` the first cut is 0, so the leading segment is empty.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover(parent1: &[u8], parent2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let (a, b) = (n / 3, 2 * n / 3);
    let child1 = [&parent1[..a], &parent2[a..b], &parent1[b..]].concat();
    let child2 = [&parent2[..a], &parent1[a..b], &parent2[b..]].concat();
    (child1, child2)
}

/// Uniform crossover: a fair coin per position decides which parent feeds
/// which child.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[u8],
    parent2: &[u8],
    rng: &mut R,
) -> (Vec<u8>, Vec<u8>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    recombine(parent1, parent2, |_| rng.random_bool(0.5))
}

/// Masked uniform crossover: `mask[i] == true` gives child1 `parent1[i]`
/// and child2 `parent2[i]`; `false` swaps them.
///
/// # Panics
/// Panics if parents have different lengths or the mask does not match them.
pub fn masked_uniform_crossover(
    parent1: &[u8],
    parent2: &[u8],
    mask: &[bool],
) -> (Vec<u8>, Vec<u8>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert_eq!(parent1.len(), mask.len(), "mask must match parent length");
    recombine(parent1, parent2, |i| mask[i])
}

/// Builds both children position by position; `keep(i)` decides whether
/// child1 takes `parent1[i]` (true) or `parent2[i]` (false).
fn recombine<F>(parent1: &[u8], parent2: &[u8], mut keep: F) -> (Vec<u8>, Vec<u8>)
where
    F: FnMut(usize) -> bool,
{
    let n = parent1.len();
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    for (i, (&x, &y)) in parent1.iter().zip(parent2).enumerate() {
        if keep(i) {
            child1.push(x);
            child2.push(y);
        } else {
            child1.push(y);
            child2.push(x);
        }
    }

    (child1, child2)
}

// ============================================================================
// Tests
// ============================================================================

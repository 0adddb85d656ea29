//! Random number provider.
//!
//! An [`RngContext`] owns one seeded generator plus the selected normal
//! algorithm. Vectorized calls check the generator out with
//! [`RngContext::acquire`], which hands back a [`RandomNumberProvider`];
//! the generator is checked back in when the provider is dropped. The
//! exclusive borrow makes the check-out non-reentrant: one vectorized call
//! holds the generator at a time.
//!
//! # Reproducibility
//!
//! The generator is `StdRng` seeded with [`RngConfig::seed`]; draws are
//! deterministic for a given seed and `rand` version.

use rand::distr::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, StandardNormal};
use tracing::trace;

use crate::special::normal_quantile;

/// Resolution used to combine two uniforms for inversion sampling (2^27).
const BIG: f64 = 134_217_728.0;

/// Algorithm used for standard normal draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormKind {
    /// Inversion of the normal CDF at a uniform built from two draws.
    #[default]
    Inversion,
    /// Box-Muller transform; the second variate of each pair is kept for the next draw.
    BoxMuller,
    /// Ziggurat sampling from `rand_distr`.
    Ziggurat,
}

/// Construction parameters of an [`RngContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RngConfig {
    pub seed: u64,
    pub norm_kind: NormKind,
}

impl Default for RngConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            norm_kind: NormKind::default(),
        }
    }
}

/// Mutable generator state shared by all vectorized calls of one context.
#[derive(Clone, Debug)]
struct GeneratorState {
    rng: StdRng,
    box_muller_saved: Option<f64>,
}

/// Owner of the random generator for one logical execution context.
///
/// Not meant to be shared across threads; wrap it in a mutex if it must be.
#[derive(Clone, Debug)]
pub struct RngContext {
    state: GeneratorState,
    norm_kind: NormKind,
}

impl Default for RngContext {
    fn default() -> Self {
        Self::new(RngConfig::default())
    }
}

impl RngContext {
    pub fn new(config: RngConfig) -> Self {
        Self {
            state: GeneratorState {
                rng: StdRng::seed_from_u64(config.seed),
                box_muller_saved: None,
            },
            norm_kind: config.norm_kind,
        }
    }

    /// Creates a context with the default normal algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use statorder::rng::RngContext;
    ///
    /// let mut a = RngContext::from_seed(7);
    /// let mut b = RngContext::from_seed(7);
    /// assert_eq!(a.acquire().unif_rand(), b.acquire().unif_rand());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngConfig {
            seed,
            ..RngConfig::default()
        })
    }

    /// Reseeds the generator and drops any cached normal variate.
    pub fn set_seed(&mut self, seed: u64) {
        self.state.rng = StdRng::seed_from_u64(seed);
        self.state.box_muller_saved = None;
    }

    pub fn norm_kind(&self) -> NormKind {
        self.norm_kind
    }

    /// Switches the normal algorithm. A cached Box-Muller variate is discarded.
    pub fn set_norm_kind(&mut self, norm_kind: NormKind) {
        self.norm_kind = norm_kind;
        self.state.box_muller_saved = None;
    }

    /// Checks the generator out until the returned provider is dropped.
    pub fn acquire(&mut self) -> RandomNumberProvider<'_> {
        trace!(norm_kind = ?self.norm_kind, "rng state acquired");
        RandomNumberProvider {
            state: &mut self.state,
            norm_kind: self.norm_kind,
        }
    }
}

/// Checked-out generator exposing the three primitive draws.
///
/// Distribution formulas take it by `&mut` reference.
#[derive(Debug)]
pub struct RandomNumberProvider<'a> {
    state: &'a mut GeneratorState,
    norm_kind: NormKind,
}

impl RandomNumberProvider<'_> {
    /// Uniform draw on the open interval (0, 1).
    #[inline]
    pub fn unif_rand(&mut self) -> f64 {
        self.state.rng.sample(Open01)
    }

    /// Standard normal draw using the context's [`NormKind`].
    pub fn norm_rand(&mut self) -> f64 {
        match self.norm_kind {
            NormKind::Inversion => {
                let u = self.unif_rand();
                let u = (BIG * u).trunc() + self.unif_rand();
                normal_quantile(u / BIG)
            }
            NormKind::BoxMuller => {
                if let Some(saved) = self.state.box_muller_saved.take() {
                    return saved;
                }
                let theta = 2.0 * std::f64::consts::PI * self.unif_rand();
                let r = (-2.0 * self.unif_rand().ln()).sqrt() + 10.0 * f64::MIN_POSITIVE;
                self.state.box_muller_saved = Some(r * theta.sin());
                r * theta.cos()
            }
            NormKind::Ziggurat => StandardNormal.sample(&mut self.state.rng),
        }
    }

    /// Standard exponential draw (rate 1).
    #[inline]
    pub fn exp_rand(&mut self) -> f64 {
        Exp1.sample(&mut self.state.rng)
    }

    /// Draws from any `rand_distr` distribution on the checked-out generator.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: D) -> T {
        distribution.sample(&mut self.state.rng)
    }

    pub fn norm_kind(&self) -> NormKind {
        self.norm_kind
    }
}

impl Drop for RandomNumberProvider<'_> {
    fn drop(&mut self) {
        trace!("rng state released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_open_interval() {
        let mut ctx = RngContext::from_seed(1);
        let mut rand = ctx.acquire();
        for _ in 0..10_000 {
            let u = rand.unif_rand();
            assert!(u > 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_state_persists_across_checkouts() {
        let mut split = RngContext::from_seed(9);
        let first = split.acquire().unif_rand();
        let second = split.acquire().unif_rand();

        let mut joined = RngContext::from_seed(9);
        let mut rand = joined.acquire();
        assert_eq!(rand.unif_rand(), first);
        assert_eq!(rand.unif_rand(), second);
    }

    #[test]
    fn test_box_muller_pairs() {
        let mut ctx = RngContext::new(RngConfig {
            seed: 3,
            norm_kind: NormKind::BoxMuller,
        });
        let (a, b) = {
            let mut rand = ctx.acquire();
            (rand.norm_rand(), rand.norm_rand())
        };
        assert!(a.is_finite() && b.is_finite());

        // The cached second variate is dropped on reseed.
        ctx.set_seed(3);
        assert_eq!(ctx.acquire().norm_rand(), a);
    }

    #[test]
    fn test_norm_kinds_are_standard() {
        for kind in [NormKind::Inversion, NormKind::BoxMuller, NormKind::Ziggurat] {
            let mut ctx = RngContext::new(RngConfig {
                seed: 11,
                norm_kind: kind,
            });
            let mut rand = ctx.acquire();
            let n = 20_000;
            let draws: Vec<f64> = (0..n).map(|_| rand.norm_rand()).collect();
            let mean = draws.iter().sum::<f64>() / n as f64;
            let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            assert!(mean.abs() < 0.05, "{kind:?} mean {mean}");
            assert!((var - 1.0).abs() < 0.05, "{kind:?} variance {var}");
        }
    }
}

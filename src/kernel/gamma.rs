//! Gamma cluster kernel over x in (0, ∞).
//!
//! The kernel density is Gamma in shape/rate form,
//!
//! ```math
//!             β^α
//! f(x|α, β) = ----  x^(α-1) e^(-βx)
//!             Γ(α)
//! ```
//!
//! with prior G0: `u ~ Beta(a0, b0)`, `shape = -scale·ln(u)`, and
//! independently `rate ~ Gamma(c0, d0)`. The rate prior is conjugate;
//! the shape prior is not, so posterior draws run a hybrid
//! Gibbs/Metropolis inner chain.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use special::Gamma as SGamma;
use std::fmt;

use crate::data::GammaSuffStat;
use crate::misc::clamp_unit;
use crate::traits::{Conjugacy, DrawError, MixtureComponent};

mod posterior;

const DEFAULT_CHAIN_ITERS: usize = 500;
const DEFAULT_CHAIN_BURNIN: usize = 300;
const DEFAULT_STEP_SIZE: f64 = 0.1;
const DEFAULT_PREDICTIVE_SAMPLES: usize = 1000;

/// Hyperparameters of the Gamma kernel prior, G0.
///
/// All five entries must be strictly positive and finite. The
/// positional order used by [`from_slice`](Self::from_slice) and
/// `TryFrom<[f64; 5]>` is `[a0, b0, c0, d0, scale]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GammaHyper {
    /// First Beta parameter of the shape transform
    a0: f64,
    /// Second Beta parameter of the shape transform
    b0: f64,
    /// Shape of the Gamma prior on the rate
    c0: f64,
    /// Rate of the Gamma prior on the rate
    d0: f64,
    /// Scale of the `-scale·ln(u)` shape transform
    scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GammaHyperError {
    /// A hyperparameter is less than or equal to zero
    TooLow { param: &'static str, value: f64 },
    /// A hyperparameter is infinite or NaN
    NotFinite { param: &'static str, value: f64 },
    /// A positional parameter vector has the wrong number of entries
    WrongLength { n: usize },
}

impl GammaHyper {
    /// Create a new `GammaHyper` from its five entries.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dpmix::kernel::GammaHyper;
    /// let hyper = GammaHyper::new(2.0, 2.0, 2.0, 0.5, 5.0).unwrap();
    /// assert_eq!(hyper.scale(), 5.0);
    ///
    /// assert!(GammaHyper::new(2.0, 0.0, 2.0, 0.5, 5.0).is_err());
    /// assert!(GammaHyper::new(2.0, 2.0, -1.0, 0.5, 5.0).is_err());
    /// ```
    pub fn new(
        a0: f64,
        b0: f64,
        c0: f64,
        d0: f64,
        scale: f64,
    ) -> Result<Self, GammaHyperError> {
        for (param, value) in [
            ("a0", a0),
            ("b0", b0),
            ("c0", c0),
            ("d0", d0),
            ("scale", scale),
        ] {
            if value <= 0.0 {
                return Err(GammaHyperError::TooLow { param, value });
            } else if !value.is_finite() {
                return Err(GammaHyperError::NotFinite { param, value });
            }
        }
        Ok(GammaHyper::new_unchecked(a0, b0, c0, d0, scale))
    }

    /// Creates a new `GammaHyper` without checking whether the
    /// parameters are valid.
    #[inline]
    pub fn new_unchecked(a0: f64, b0: f64, c0: f64, d0: f64, scale: f64) -> Self {
        GammaHyper { a0, b0, c0, d0, scale }
    }

    /// Create from the positional form `[a0, b0, c0, d0, scale]`.
    pub fn from_slice(params: &[f64]) -> Result<Self, GammaHyperError> {
        match params {
            [a0, b0, c0, d0, scale] => {
                GammaHyper::new(*a0, *b0, *c0, *d0, *scale)
            }
            _ => Err(GammaHyperError::WrongLength { n: params.len() }),
        }
    }

    /// First Beta parameter of the shape transform
    #[inline]
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Second Beta parameter of the shape transform
    #[inline]
    pub fn b0(&self) -> f64 {
        self.b0
    }

    /// Shape of the Gamma prior on the rate
    #[inline]
    pub fn c0(&self) -> f64 {
        self.c0
    }

    /// Rate of the Gamma prior on the rate
    #[inline]
    pub fn d0(&self) -> f64 {
        self.d0
    }

    /// Scale of the shape transform
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl TryFrom<[f64; 5]> for GammaHyper {
    type Error = GammaHyperError;

    fn try_from(params: [f64; 5]) -> Result<Self, Self::Error> {
        GammaHyper::from_slice(&params)
    }
}

/// Tuning for the inner posterior chain.
///
/// `n_iters` total iterations per requested draw, of which the first
/// `n_burnin` are warm-up; `step_size` is the standard deviation of
/// the log-space random walk on the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ChainConfig {
    n_iters: usize,
    n_burnin: usize,
    step_size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChainConfigError {
    /// Zero chain iterations requested
    NoIterations,
    /// Burn-in does not leave any post-warm-up iterations
    BurnInTooLong { n_iters: usize, n_burnin: usize },
    /// Proposal step size is less than or equal to zero
    StepSizeTooLow { step_size: f64 },
    /// Proposal step size is infinite or NaN
    StepSizeNotFinite { step_size: f64 },
}

impl ChainConfig {
    /// Create a new `ChainConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dpmix::kernel::ChainConfig;
    /// let cfg = ChainConfig::new(1_000, 200, 0.25).unwrap();
    /// assert_eq!(cfg.n_iters(), 1_000);
    ///
    /// assert!(ChainConfig::new(0, 0, 0.25).is_err());
    /// assert!(ChainConfig::new(100, 100, 0.25).is_err());
    /// assert!(ChainConfig::new(100, 10, -0.1).is_err());
    /// ```
    pub fn new(
        n_iters: usize,
        n_burnin: usize,
        step_size: f64,
    ) -> Result<Self, ChainConfigError> {
        if n_iters == 0 {
            Err(ChainConfigError::NoIterations)
        } else if n_burnin >= n_iters {
            Err(ChainConfigError::BurnInTooLong { n_iters, n_burnin })
        } else if step_size <= 0.0 {
            Err(ChainConfigError::StepSizeTooLow { step_size })
        } else if !step_size.is_finite() {
            Err(ChainConfigError::StepSizeNotFinite { step_size })
        } else {
            Ok(ChainConfig {
                n_iters,
                n_burnin,
                step_size,
            })
        }
    }

    /// Total iterations per inner chain
    #[inline]
    pub fn n_iters(&self) -> usize {
        self.n_iters
    }

    /// Warm-up iterations discarded before states count as draws
    #[inline]
    pub fn n_burnin(&self) -> usize {
        self.n_burnin
    }

    /// Standard deviation of the log-space shape proposal
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            n_iters: DEFAULT_CHAIN_ITERS,
            n_burnin: DEFAULT_CHAIN_BURNIN,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

/// Shape and rate of one cluster.
///
/// Both entries are positive for every value produced by
/// `prior_draw`/`posterior_draw`; the shape transform and the Gamma
/// rate draw guarantee it by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ShapeRate {
    pub shape: f64,
    pub rate: f64,
}

impl ShapeRate {
    /// Split a draw batch into matched shape and rate sequences.
    ///
    /// The two sequences have the same length and are aligned by draw
    /// index.
    pub fn unzip(draws: &[ShapeRate]) -> (Vec<f64>, Vec<f64>) {
        draws.iter().map(|theta| (theta.shape, theta.rate)).unzip()
    }
}

/// Post-burn-in states of one inner posterior chain.
///
/// Exposed so callers that track convergence can see the retained
/// states (in iteration order) and the shape-proposal acceptance rate;
/// the kernel itself never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainTrace {
    /// Retained `(shape, rate)` states, oldest first
    pub draws: Vec<ShapeRate>,
    /// Fraction of shape proposals accepted over the whole chain
    pub acceptance: f64,
}

/// Gamma cluster kernel with a conjugate rate and a non-conjugate
/// shape.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use dpmix::kernel::{GammaHyper, GammaKernel};
/// use dpmix::traits::{Conjugacy, MixtureComponent};
///
/// let kernel =
///     GammaKernel::new(GammaHyper::new(2.0, 2.0, 2.0, 0.5, 5.0).unwrap());
/// assert_eq!(kernel.conjugacy(), Conjugacy::NonConjugate);
///
/// let mut rng = SmallRng::seed_from_u64(0x6A);
/// let pairs = kernel.prior_draw(10, &mut rng).unwrap();
/// assert!(pairs.iter().all(|p| p.shape > 0.0 && p.rate > 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GammaKernel {
    hyper: GammaHyper,
    chain: ChainConfig,
    predictive_samples: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GammaKernelError {
    /// Zero Monte Carlo samples requested for the predictive estimator
    PredictiveSamplesZero,
}

impl GammaKernel {
    /// Create a kernel with the default chain tuning and predictive
    /// sample count.
    pub fn new(hyper: GammaHyper) -> Self {
        GammaKernel {
            hyper,
            chain: ChainConfig::default(),
            predictive_samples: DEFAULT_PREDICTIVE_SAMPLES,
        }
    }

    /// The prior hyperparameters
    #[inline]
    pub fn hyper(&self) -> &GammaHyper {
        &self.hyper
    }

    /// The inner-chain tuning
    #[inline]
    pub fn chain_config(&self) -> &ChainConfig {
        &self.chain
    }

    /// Replace the inner-chain tuning
    #[inline]
    pub fn set_chain_config(&mut self, chain: ChainConfig) {
        self.chain = chain;
    }

    /// Monte Carlo sample count of the predictive estimator
    #[inline]
    pub fn predictive_samples(&self) -> usize {
        self.predictive_samples
    }

    /// Set the Monte Carlo sample count of the predictive estimator
    pub fn set_predictive_samples(
        &mut self,
        m: usize,
    ) -> Result<(), GammaKernelError> {
        if m == 0 {
            Err(GammaKernelError::PredictiveSamplesZero)
        } else {
            self.predictive_samples = m;
            Ok(())
        }
    }

    /// Post-burn-in states of a single fresh inner chain conditioned
    /// on `xs`, for callers that track convergence.
    pub fn posterior_trace<R: Rng>(
        &self,
        xs: &[f64],
        rng: &mut R,
    ) -> Result<ChainTrace, DrawError> {
        if xs.is_empty() {
            return Err(DrawError::NoObservations);
        }
        let stat = GammaSuffStat::from(xs);
        Ok(posterior::ShapeRateChain::new(&self.hyper, &self.chain, &stat)
            .run_trace(rng))
    }

    fn draw_prior<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<ShapeRate> {
        let u_dist =
            rand_distr::Beta::new(self.hyper.a0, self.hyper.b0).unwrap();
        let rate_dist =
            rand_distr::Gamma::new(self.hyper.c0, self.hyper.d0.recip())
                .unwrap();

        (0..n)
            .map(|_| {
                let u = clamp_unit(rng.sample(u_dist));
                ShapeRate {
                    shape: -self.hyper.scale * u.ln(),
                    rate: rng.sample(rate_dist),
                }
            })
            .collect()
    }
}

impl MixtureComponent for GammaKernel {
    type Params = ShapeRate;

    #[inline]
    fn conjugacy(&self) -> Conjugacy {
        Conjugacy::NonConjugate
    }

    fn ln_likelihood(&self, x: f64, theta: &ShapeRate) -> f64 {
        if x <= 0.0 || !x.is_finite() {
            return f64::NEG_INFINITY;
        }
        theta
            .shape
            .mul_add(theta.rate.ln(), -theta.shape.ln_gamma().0)
            + (theta.shape - 1.0).mul_add(x.ln(), -(theta.rate * x))
    }

    fn prior_draw<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<ShapeRate>, DrawError> {
        if n == 0 {
            return Err(DrawError::NoDrawsRequested);
        }
        Ok(self.draw_prior(n, rng))
    }

    fn posterior_draw<R: Rng>(
        &self,
        xs: &[f64],
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<ShapeRate>, DrawError> {
        if n == 0 {
            return Err(DrawError::NoDrawsRequested);
        }
        if xs.is_empty() {
            return Err(DrawError::NoObservations);
        }
        let stat = GammaSuffStat::from(xs);
        Ok(posterior::draw_batch(&self.hyper, &self.chain, &stat, n, rng))
    }

    fn predictive<R: Rng>(&self, ys: &[f64], rng: &mut R) -> Vec<f64> {
        // every query is off the support; the rng is never advanced
        if !ys.iter().any(|&y| y > 0.0) {
            return vec![0.0; ys.len()];
        }

        // one set of prior pairs shared across the whole query grid
        let pairs = self.draw_prior(self.predictive_samples, rng);
        let mf = self.predictive_samples as f64;

        ys.iter()
            .map(|&y| {
                if y > 0.0 {
                    pairs
                        .iter()
                        .map(|theta| self.likelihood(y, theta))
                        .sum::<f64>()
                        / mf
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl std::error::Error for GammaHyperError {}

impl fmt::Display for GammaHyperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow { param, value } => {
                write!(f, "{} ({}) must be greater than zero", param, value)
            }
            Self::NotFinite { param, value } => {
                write!(f, "non-finite {}: {}", param, value)
            }
            Self::WrongLength { n } => {
                write!(f, "expected 5 hyperparameters, got {}", n)
            }
        }
    }
}

impl std::error::Error for ChainConfigError {}

impl fmt::Display for ChainConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIterations => {
                write!(f, "chain must run at least one iteration")
            }
            Self::BurnInTooLong { n_iters, n_burnin } => write!(
                f,
                "burn-in ({}) must be shorter than the chain ({})",
                n_burnin, n_iters
            ),
            Self::StepSizeTooLow { step_size } => write!(
                f,
                "step size ({}) must be greater than zero",
                step_size
            ),
            Self::StepSizeNotFinite { step_size } => {
                write!(f, "non-finite step size: {}", step_size)
            }
        }
    }
}

impl std::error::Error for GammaKernelError {}

impl fmt::Display for GammaKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PredictiveSamplesZero => write!(
                f,
                "predictive estimator needs at least one Monte Carlo sample"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TOL: f64 = 1E-12;

    fn default_kernel() -> GammaKernel {
        GammaKernel::new(GammaHyper::new(2.0, 2.0, 2.0, 0.5, 5.0).unwrap())
    }

    #[test]
    fn hyper_rejects_nonpositive_entries() {
        assert!(GammaHyper::new(0.0, 2.0, 2.0, 0.5, 5.0).is_err());
        assert!(GammaHyper::new(2.0, -2.0, 2.0, 0.5, 5.0).is_err());
        assert!(GammaHyper::new(2.0, 2.0, 2.0, 0.0, 5.0).is_err());
        assert!(GammaHyper::new(2.0, 2.0, 2.0, 0.5, 0.0).is_err());
    }

    #[test]
    fn hyper_rejects_nonfinite_entries() {
        assert_eq!(
            GammaHyper::new(2.0, 2.0, f64::INFINITY, 0.5, 5.0),
            Err(GammaHyperError::NotFinite {
                param: "c0",
                value: f64::INFINITY
            })
        );
        assert!(GammaHyper::new(f64::NAN, 2.0, 2.0, 0.5, 5.0).is_err());
    }

    #[test]
    fn hyper_from_slice_is_positional() {
        let hyper = GammaHyper::from_slice(&[2.0, 3.0, 4.0, 0.5, 5.0]).unwrap();
        assert::close(hyper.a0(), 2.0, TOL);
        assert::close(hyper.b0(), 3.0, TOL);
        assert::close(hyper.c0(), 4.0, TOL);
        assert::close(hyper.d0(), 0.5, TOL);
        assert::close(hyper.scale(), 5.0, TOL);

        assert_eq!(
            GammaHyper::from_slice(&[1.0, 2.0]),
            Err(GammaHyperError::WrongLength { n: 2 })
        );
    }

    #[test]
    fn hyper_try_from_array() {
        let hyper = GammaHyper::try_from([2.0, 2.0, 2.0, 0.5, 5.0]).unwrap();
        assert_eq!(hyper, GammaHyper::new(2.0, 2.0, 2.0, 0.5, 5.0).unwrap());
    }

    #[test]
    fn chain_config_defaults() {
        let cfg = ChainConfig::default();
        assert_eq!(cfg.n_iters(), 500);
        assert_eq!(cfg.n_burnin(), 300);
        assert::close(cfg.step_size(), 0.1, TOL);
    }

    #[test]
    fn chain_config_validation() {
        assert_eq!(
            ChainConfig::new(0, 0, 0.1),
            Err(ChainConfigError::NoIterations)
        );
        assert_eq!(
            ChainConfig::new(100, 100, 0.1),
            Err(ChainConfigError::BurnInTooLong {
                n_iters: 100,
                n_burnin: 100
            })
        );
        assert!(ChainConfig::new(100, 10, 0.0).is_err());
        assert!(ChainConfig::new(100, 10, f64::NAN).is_err());
        assert!(ChainConfig::new(100, 10, 0.5).is_ok());
    }

    #[test]
    fn ln_likelihood_known_value() {
        let kernel = default_kernel();
        let theta = ShapeRate {
            shape: 1.2,
            rate: 3.4,
        };
        assert::close(
            kernel.ln_likelihood(0.1, &theta),
            0.753_387_589_351_045_6,
            TOL,
        );
    }

    #[test]
    fn likelihood_zero_off_support() {
        let kernel = default_kernel();
        let theta = ShapeRate {
            shape: 2.0,
            rate: 1.0,
        };
        assert_eq!(kernel.likelihood(0.0, &theta), 0.0);
        assert_eq!(kernel.likelihood(-1.5, &theta), 0.0);
        assert_eq!(kernel.likelihood(f64::NAN, &theta), 0.0);
        assert_eq!(kernel.ln_likelihood(-1.5, &theta), f64::NEG_INFINITY);
    }

    #[test]
    fn prior_draw_batch_sizes_and_positivity() {
        let kernel = default_kernel();
        let mut rng = SmallRng::seed_from_u64(0x1234);
        for n in [1_usize, 5, 100] {
            let pairs = kernel.prior_draw(n, &mut rng).unwrap();
            assert_eq!(pairs.len(), n);
            assert!(pairs.iter().all(|p| {
                p.shape > 0.0
                    && p.rate > 0.0
                    && p.shape.is_finite()
                    && p.rate.is_finite()
            }));
        }
    }

    #[test]
    fn prior_draw_rejects_zero_draws() {
        let kernel = default_kernel();
        let mut rng = SmallRng::seed_from_u64(0x1234);
        assert_eq!(
            kernel.prior_draw(0, &mut rng),
            Err(DrawError::NoDrawsRequested)
        );
    }

    #[test]
    fn prior_draw_deterministic_under_seed() {
        let kernel_a = default_kernel();
        let kernel_b = default_kernel();
        let mut rng_a = SmallRng::seed_from_u64(0xFACE);
        let mut rng_b = SmallRng::seed_from_u64(0xFACE);

        let pairs_a = kernel_a.prior_draw(25, &mut rng_a).unwrap();
        let pairs_b = kernel_b.prior_draw(25, &mut rng_b).unwrap();
        assert_eq!(pairs_a, pairs_b);
    }

    #[test]
    fn unzip_is_aligned() {
        let kernel = default_kernel();
        let mut rng = SmallRng::seed_from_u64(0xD0E);
        let pairs = kernel.prior_draw(7, &mut rng).unwrap();
        let (shapes, rates) = ShapeRate::unzip(&pairs);

        assert_eq!(shapes.len(), 7);
        assert_eq!(rates.len(), 7);
        for (i, pair) in pairs.iter().enumerate() {
            assert::close(shapes[i], pair.shape, TOL);
            assert::close(rates[i], pair.rate, TOL);
        }
    }

    #[test]
    fn predictive_zero_for_nonpositive_queries() {
        let kernel = default_kernel();
        let mut rng = SmallRng::seed_from_u64(0x99);
        let fs = kernel.predictive(&[-1.0, 0.0, 2.0], &mut rng);
        assert_eq!(fs.len(), 3);
        assert_eq!(fs[0], 0.0);
        assert_eq!(fs[1], 0.0);
        assert!(fs[2] > 0.0 && fs[2].is_finite());
    }

    #[test]
    fn predictive_all_nonpositive_skips_sampling() {
        let kernel = default_kernel();
        let mut rng_a = SmallRng::seed_from_u64(0xC0);
        let mut rng_b = SmallRng::seed_from_u64(0xC0);

        assert_eq!(
            kernel.predictive(&[-2.0, 0.0], &mut rng_a),
            vec![0.0, 0.0]
        );
        // the rng was not advanced
        assert_eq!(rng_a.gen::<u64>(), rng_b.gen::<u64>());
    }

    #[test]
    fn predictive_estimates_tighten_with_more_samples() {
        let spread = |m: usize, seed: u64| {
            let mut kernel = default_kernel();
            kernel.set_predictive_samples(m).unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);
            let fs: Vec<f64> =
                (0..20).map(|_| kernel.predictive_at(2.0, &mut rng)).collect();
            let mean = fs.iter().sum::<f64>() / fs.len() as f64;
            fs.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
                / fs.len() as f64
        };

        assert!(spread(10_000, 0x3E) < spread(50, 0x3E));
    }

    #[test]
    fn set_predictive_samples_rejects_zero() {
        let mut kernel = default_kernel();
        assert_eq!(
            kernel.set_predictive_samples(0),
            Err(GammaKernelError::PredictiveSamplesZero)
        );
        assert!(kernel.set_predictive_samples(250).is_ok());
        assert_eq!(kernel.predictive_samples(), 250);
    }

    #[test]
    fn posterior_draw_input_validation() {
        let kernel = default_kernel();
        let mut rng = SmallRng::seed_from_u64(0x11);
        assert_eq!(
            kernel.posterior_draw(&[1.0, 2.0], 0, &mut rng),
            Err(DrawError::NoDrawsRequested)
        );
        assert_eq!(
            kernel.posterior_draw(&[], 1, &mut rng),
            Err(DrawError::NoObservations)
        );
    }
}

//! Conjugate Gaussian cluster kernel.
//!
//! Normal likelihood with a Normal-Gamma prior on (mean, precision):
//! `ρ ~ Gamma(v0/2, s0/2)` and `mean | ρ ~ N(m0, 1/(r0·ρ))`. Fully
//! conjugate, so posterior draws are exact and the predictive is
//! closed-form — the counterpart to the Gamma kernel's inner-chain
//! approximation.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use special::Gamma as SGamma;
use std::f64::consts::LN_2;
use std::fmt;

use crate::consts::{HALF_LN_2PI, HALF_LN_PI};
use crate::data::GaussianSuffStat;
use crate::traits::{Conjugacy, DrawError, MixtureComponent, SuffStat};

/// Hyperparameters of the Normal-Gamma prior.
///
/// `m0` is the prior mean, `r0` scales the prior precision of the
/// mean, and `s0`/`v0` parameterize the Gamma prior on the precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GaussianHyper {
    m0: f64,
    r0: f64,
    s0: f64,
    v0: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GaussianHyperError {
    /// A hyperparameter is less than or equal to zero
    TooLow { param: &'static str, value: f64 },
    /// A hyperparameter is infinite or NaN
    NotFinite { param: &'static str, value: f64 },
}

impl GaussianHyper {
    /// Create a new `GaussianHyper`.
    ///
    /// `m0` may be any finite real; `r0`, `s0`, and `v0` must be
    /// strictly positive and finite.
    pub fn new(
        m0: f64,
        r0: f64,
        s0: f64,
        v0: f64,
    ) -> Result<Self, GaussianHyperError> {
        if !m0.is_finite() {
            return Err(GaussianHyperError::NotFinite {
                param: "m0",
                value: m0,
            });
        }
        for (param, value) in [("r0", r0), ("s0", s0), ("v0", v0)] {
            if value <= 0.0 {
                return Err(GaussianHyperError::TooLow { param, value });
            } else if !value.is_finite() {
                return Err(GaussianHyperError::NotFinite { param, value });
            }
        }
        Ok(GaussianHyper::new_unchecked(m0, r0, s0, v0))
    }

    /// Creates a new `GaussianHyper` without checking whether the
    /// parameters are valid.
    #[inline]
    pub fn new_unchecked(m0: f64, r0: f64, s0: f64, v0: f64) -> Self {
        GaussianHyper { m0, r0, s0, v0 }
    }

    /// Prior mean
    #[inline]
    pub fn m0(&self) -> f64 {
        self.m0
    }

    /// Prior precision scale of the mean
    #[inline]
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Scale of the Gamma prior on the precision
    #[inline]
    pub fn s0(&self) -> f64 {
        self.s0
    }

    /// Degrees of freedom of the Gamma prior on the precision
    #[inline]
    pub fn v0(&self) -> f64 {
        self.v0
    }
}

/// Mean and precision of one cluster
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct MeanPrec {
    pub mean: f64,
    pub prec: f64,
}

/// Ln of the Normal-Gamma normalizer
fn ln_z(r: f64, s: f64, v: f64) -> f64 {
    (v + 1.0) / 2.0 * LN_2 + HALF_LN_PI - 0.5 * r.ln() - (v / 2.0) * s.ln()
        + (v / 2.0).ln_gamma().0
}

fn posterior_from_stat(
    hyper: &GaussianHyper,
    stat: &GaussianSuffStat,
) -> GaussianHyper {
    let nf = stat.n() as f64;
    let r = hyper.r0 + nf;
    let v = hyper.v0 + nf;
    let m = hyper.m0.mul_add(hyper.r0, stat.sum_x()) / r;
    let s = hyper.s0 + stat.sum_x_sq() + hyper.r0 * hyper.m0 * hyper.m0
        - r * m * m;
    GaussianHyper::new_unchecked(m, r, s, v)
}

fn draw_params<R: Rng>(
    hyper: &GaussianHyper,
    n: usize,
    rng: &mut R,
) -> Vec<MeanPrec> {
    let prec_dist =
        rand_distr::Gamma::new(hyper.v0 / 2.0, (hyper.s0 / 2.0).recip())
            .unwrap();

    (0..n)
        .map(|_| {
            let prec: f64 = rng.sample(prec_dist);
            let sd = (hyper.r0 * prec).sqrt().recip();
            let mean =
                rng.sample(rand_distr::Normal::new(hyper.m0, sd).unwrap());
            MeanPrec { mean, prec }
        })
        .collect()
}

/// Gaussian cluster kernel with a Normal-Gamma prior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GaussianKernel {
    hyper: GaussianHyper,
}

impl GaussianKernel {
    pub fn new(hyper: GaussianHyper) -> Self {
        GaussianKernel { hyper }
    }

    /// The prior hyperparameters
    #[inline]
    pub fn hyper(&self) -> &GaussianHyper {
        &self.hyper
    }
}

impl MixtureComponent for GaussianKernel {
    type Params = MeanPrec;

    #[inline]
    fn conjugacy(&self) -> Conjugacy {
        Conjugacy::Conjugate
    }

    fn ln_likelihood(&self, x: f64, theta: &MeanPrec) -> f64 {
        if !x.is_finite() {
            return f64::NEG_INFINITY;
        }
        let err = x - theta.mean;
        0.5_f64.mul_add(
            theta.prec.ln(),
            -(0.5 * theta.prec * err * err + HALF_LN_2PI),
        )
    }

    fn prior_draw<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<MeanPrec>, DrawError> {
        if n == 0 {
            return Err(DrawError::NoDrawsRequested);
        }
        Ok(draw_params(&self.hyper, n, rng))
    }

    fn posterior_draw<R: Rng>(
        &self,
        xs: &[f64],
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<MeanPrec>, DrawError> {
        if n == 0 {
            return Err(DrawError::NoDrawsRequested);
        }
        if xs.is_empty() {
            return Err(DrawError::NoObservations);
        }
        let post = posterior_from_stat(&self.hyper, &GaussianSuffStat::from(xs));
        Ok(draw_params(&post, n, rng))
    }

    fn predictive<R: Rng>(&self, ys: &[f64], _rng: &mut R) -> Vec<f64> {
        // closed form, the rng never enters
        let ln_z0 = ln_z(self.hyper.r0, self.hyper.s0, self.hyper.v0);

        ys.iter()
            .map(|&y| {
                if !y.is_finite() {
                    return 0.0;
                }
                let mut stat = GaussianSuffStat::new();
                stat.observe(&y);
                let post = posterior_from_stat(&self.hyper, &stat);
                let ln_z1 = ln_z(post.r0, post.s0, post.v0);
                (ln_z1 - ln_z0 - HALF_LN_2PI).exp()
            })
            .collect()
    }
}

impl std::error::Error for GaussianHyperError {}

impl fmt::Display for GaussianHyperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow { param, value } => {
                write!(f, "{} ({}) must be greater than zero", param, value)
            }
            Self::NotFinite { param, value } => {
                write!(f, "non-finite {}: {}", param, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TOL: f64 = 1E-12;

    #[test]
    fn hyper_validation() {
        assert!(GaussianHyper::new(-3.0, 1.0, 1.0, 1.0).is_ok());
        assert!(GaussianHyper::new(f64::NAN, 1.0, 1.0, 1.0).is_err());
        assert_eq!(
            GaussianHyper::new(0.0, 0.0, 1.0, 1.0),
            Err(GaussianHyperError::TooLow {
                param: "r0",
                value: 0.0
            })
        );
        assert!(GaussianHyper::new(0.0, 1.0, -1.0, 1.0).is_err());
        assert!(GaussianHyper::new(0.0, 1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn ln_z_known_values() {
        assert::close(ln_z(1.0, 1.0, 1.0), 1.837_877_066_409_35, 1e-12);
        assert::close(ln_z(1.2, 0.4, 5.2), 5.369_728_190_685_34, 1e-12);
    }

    #[test]
    fn posterior_recurrences() {
        let hyper = GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap();
        let stat = GaussianSuffStat::from(&[1.0, 2.0][..]);
        let post = posterior_from_stat(&hyper, &stat);

        assert::close(post.r0(), 3.0, TOL);
        assert::close(post.v0(), 3.0, TOL);
        assert::close(post.m0(), 1.0, TOL);
        assert::close(post.s0(), 3.0, TOL);
    }

    #[test]
    fn ln_likelihood_standard_normal_at_zero() {
        let kernel =
            GaussianKernel::new(GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap());
        let theta = MeanPrec {
            mean: 0.0,
            prec: 1.0,
        };
        assert::close(
            kernel.likelihood(0.0, &theta),
            0.398_942_280_401_432_7,
            1e-12,
        );
        assert_eq!(kernel.likelihood(f64::NAN, &theta), 0.0);
    }

    #[test]
    fn predictive_known_value() {
        // with (m0, r0, s0, v0) = (0, 1, 1, 1) the prior predictive is
        // Student-t with one degree of freedom (Cauchy) at scale √2
        let kernel =
            GaussianKernel::new(GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap());
        let mut rng = SmallRng::seed_from_u64(0);
        let fs = kernel.predictive(&[0.0], &mut rng);
        assert::close(fs[0], 0.225_079_079_039_276_5, 1e-10);
    }

    #[test]
    fn draws_are_finite_and_precision_positive() {
        let kernel =
            GaussianKernel::new(GaussianHyper::new(2.0, 0.5, 3.0, 4.0).unwrap());
        let mut rng = SmallRng::seed_from_u64(0x6A55);

        let prior = kernel.prior_draw(100, &mut rng).unwrap();
        assert_eq!(prior.len(), 100);
        assert!(prior
            .iter()
            .all(|p| p.mean.is_finite() && p.prec > 0.0));

        let post = kernel
            .posterior_draw(&[1.9, 2.1, 2.4, 1.7], 100, &mut rng)
            .unwrap();
        assert_eq!(post.len(), 100);
        assert!(post.iter().all(|p| p.mean.is_finite() && p.prec > 0.0));
    }

    #[test]
    fn posterior_concentrates_near_data_mean() {
        let kernel =
            GaussianKernel::new(GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap());
        let mut rng = SmallRng::seed_from_u64(0xF00);
        let xs = [4.8, 5.0, 5.2, 4.9, 5.1, 5.0];

        let draws = kernel.posterior_draw(&xs, 1_000, &mut rng).unwrap();
        let mean =
            draws.iter().map(|p| p.mean).sum::<f64>() / draws.len() as f64;
        // prior at 0 shrinks the posterior mean slightly below 5
        assert::close(mean, 30.0 / 7.0, 0.25);
    }

    #[test]
    fn conjugacy_flag() {
        let kernel =
            GaussianKernel::new(GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap());
        assert_eq!(kernel.conjugacy(), Conjugacy::Conjugate);
    }

    #[test]
    fn posterior_draw_input_validation() {
        let kernel =
            GaussianKernel::new(GaussianHyper::new(0.0, 1.0, 1.0, 1.0).unwrap());
        let mut rng = SmallRng::seed_from_u64(0x0);
        assert_eq!(
            kernel.posterior_draw(&[], 1, &mut rng),
            Err(DrawError::NoObservations)
        );
        assert_eq!(
            kernel.prior_draw(0, &mut rng),
            Err(DrawError::NoDrawsRequested)
        );
    }
}

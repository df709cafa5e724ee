//! The capability contract between cluster kernels and the inference
//! engine.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

/// Whether a kernel family admits an exact conjugate posterior update.
///
/// The engine may use this to choose between analytic bookkeeping and
/// paths that tolerate MCMC-approximate draws.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Conjugacy {
    /// `posterior_draw` samples the exact conditional posterior
    Conjugate,
    /// `posterior_draw` approximates the posterior with an internal
    /// Markov chain
    NonConjugate,
}

/// Call-time validation failure from `prior_draw`/`posterior_draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// Zero draws were requested
    NoDrawsRequested,
    /// `posterior_draw` was called with an empty observation set
    NoObservations,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDrawsRequested => {
                write!(f, "requested zero draws (n must be >= 1)")
            }
            Self::NoObservations => {
                write!(f, "posterior draw requested for an empty cluster")
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// A cluster kernel pluggable into Dirichlet process mixture inference.
///
/// The engine holds an assignment of observations to clusters and one
/// `Params` value per active cluster. Each sweep it scores observations
/// against clusters with [`likelihood`](Self::likelihood) (CRP label
/// resampling), seeds new clusters with
/// [`prior_draw`](Self::prior_draw), refreshes occupied clusters with
/// [`posterior_draw`](Self::posterior_draw), and after the chain builds
/// density estimates over a query grid with
/// [`predictive`](Self::predictive).
///
/// All sampling operations are generic over the caller's [`Rng`];
/// identical kernels driven by identically seeded rngs produce
/// identical draw sequences.
pub trait MixtureComponent {
    /// Cluster-level parameters of this kernel family
    type Params: Clone + fmt::Debug + Send + Sync;

    /// Whether `posterior_draw` is exact or MCMC-approximate
    fn conjugacy(&self) -> Conjugacy;

    /// Log density of `x` under one cluster's parameters.
    ///
    /// Returns `f64::NEG_INFINITY` for `x` outside the kernel's
    /// support; never errors.
    fn ln_likelihood(&self, x: f64, theta: &Self::Params) -> f64;

    /// Density of `x` under one cluster's parameters.
    ///
    /// Zero outside the kernel's support.
    fn likelihood(&self, x: f64, theta: &Self::Params) -> f64 {
        self.ln_likelihood(x, theta).exp()
    }

    /// Draw `n` independent parameter values from the prior, G0.
    ///
    /// Used whenever the engine instantiates a currently-empty cluster.
    /// Errors if `n == 0`.
    fn prior_draw<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Params>, DrawError>;

    /// Draw `n` parameter values conditioned on the observations
    /// currently assigned to a cluster.
    ///
    /// The engine never refreshes an empty cluster; an empty `xs` is
    /// reported as [`DrawError::NoObservations`] rather than silently
    /// coerced. Errors if `n == 0`.
    fn posterior_draw<R: Rng>(
        &self,
        xs: &[f64],
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Params>, DrawError>;

    /// Prior-predictive (marginal) density at each query point,
    /// cluster parameters integrated out under G0.
    ///
    /// The output has the same length as `ys`; out-of-support query
    /// points map to density 0.
    fn predictive<R: Rng>(&self, ys: &[f64], rng: &mut R) -> Vec<f64>;

    /// Prior-predictive density at a single point
    fn predictive_at<R: Rng>(&self, y: f64, rng: &mut R) -> f64 {
        self.predictive(&[y], rng)[0]
    }
}

/// An incrementally updatable summary of the observations assigned to
/// one cluster.
pub trait SuffStat<X> {
    /// Number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x`
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate all data in `xs`
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Remove all data in `xs` from the statistic
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_error_display() {
        let err = DrawError::NoDrawsRequested;
        assert!(err.to_string().contains("zero draws"));
        let err = DrawError::NoObservations;
        assert!(err.to_string().contains("empty cluster"));
    }

    #[test]
    fn conjugacy_is_copy_eq() {
        let c = Conjugacy::NonConjugate;
        let d = c;
        assert_eq!(c, d);
        assert!(c != Conjugacy::Conjugate);
    }
}

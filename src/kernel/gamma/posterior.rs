//! Hybrid Gibbs/Metropolis posterior chain for the Gamma kernel.
//!
//! Given the observations assigned to one cluster, the rate has an
//! exact conjugate conditional `Gamma(c0 + n·α, d0 + Σx)` for any
//! fixed shape α. The shape conditional is not of closed form — the
//! `x^(α-1)` and `Γ(α)` likelihood terms meet the transformed-Beta
//! prior — so each iteration interleaves an exact rate draw with one
//! log-space random-walk Metropolis shape step. Requested draws are
//! independent chains; multi-draw batches fan out across worker
//! threads on per-draw seeded rngs.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use rayon::prelude::*;
use special::Gamma as SGamma;

use super::{ChainConfig, ChainTrace, GammaHyper, ShapeRate};
use crate::data::GammaSuffStat;
use crate::mh::ln_rw_step;
use crate::misc::ln1mexp;

/// Every inner chain starts from this shape value
const SHAPE_INIT: f64 = 1.0;

/// Ln-density of the shape under G0, up to a constant.
///
/// With `u ~ Beta(a0, b0)` and `shape = -scale·ln(u)`, the change of
/// variables `u = e^(-shape/scale)`,
/// `|du/dshape| = e^(-shape/scale) / scale`, gives
///
/// ```math
/// ln p(shape) = -(a0/scale)·shape
///               + (b0 - 1)·ln(1 - e^(-shape/scale)) + const
/// ```
pub(super) fn ln_shape_prior(hyper: &GammaHyper, shape: f64) -> f64 {
    let t = shape / hyper.scale();
    (hyper.b0() - 1.0).mul_add(ln1mexp(t), -(hyper.a0() * t))
}

/// Exact conjugate conditional for the rate given the shape
pub(super) fn rate_conditional(
    hyper: &GammaHyper,
    stat: &GammaSuffStat,
    shape: f64,
) -> rand_distr::Gamma<f64> {
    let post_shape = (stat.n() as f64).mul_add(shape, hyper.c0());
    let post_rate = hyper.d0() + stat.sum_x();
    rand_distr::Gamma::new(post_shape, post_rate.recip()).unwrap()
}

pub(super) struct ShapeRateChain<'a> {
    hyper: &'a GammaHyper,
    cfg: &'a ChainConfig,
    stat: &'a GammaSuffStat,
    shape: f64,
    rate: f64,
    n_steps: usize,
    n_accepted: usize,
}

impl<'a> ShapeRateChain<'a> {
    pub(super) fn new(
        hyper: &'a GammaHyper,
        cfg: &'a ChainConfig,
        stat: &'a GammaSuffStat,
    ) -> Self {
        ShapeRateChain {
            hyper,
            cfg,
            stat,
            shape: SHAPE_INIT,
            // overwritten by the first rate update
            rate: 1.0,
            n_steps: 0,
            n_accepted: 0,
        }
    }

    /// Shape conditional ln-density given the current rate, up to a
    /// constant
    fn ln_cond_shape(&self, shape: f64, ln_rate: f64) -> f64 {
        let nf = self.stat.n() as f64;
        let ln_lik = shape.mul_add(
            nf.mul_add(ln_rate, self.stat.sum_ln_x()),
            -(nf * shape.ln_gamma().0),
        );
        ln_lik + ln_shape_prior(self.hyper, shape)
    }

    /// One sweep: exact rate draw, then one Metropolis shape step
    fn step<R: Rng>(&mut self, rng: &mut R) {
        self.rate =
            rng.sample(rate_conditional(self.hyper, self.stat, self.shape));
        let ln_rate = self.rate.ln();

        let mh = ln_rw_step(
            self.shape,
            self.cfg.step_size(),
            |a| self.ln_cond_shape(a, ln_rate),
            rng,
        );
        self.shape = mh.x;
        self.n_steps += 1;
        if mh.accepted {
            self.n_accepted += 1;
        }
    }

    /// Run the configured number of iterations; the state after the
    /// final iteration is the draw.
    pub(super) fn run<R: Rng>(&mut self, rng: &mut R) -> ShapeRate {
        for _ in 0..self.cfg.n_iters() {
            self.step(rng);
        }
        ShapeRate {
            shape: self.shape,
            rate: self.rate,
        }
    }

    /// Run the chain and keep every post-burn-in state
    pub(super) fn run_trace<R: Rng>(&mut self, rng: &mut R) -> ChainTrace {
        let mut draws =
            Vec::with_capacity(self.cfg.n_iters() - self.cfg.n_burnin());
        for i in 0..self.cfg.n_iters() {
            self.step(rng);
            if i >= self.cfg.n_burnin() {
                draws.push(ShapeRate {
                    shape: self.shape,
                    rate: self.rate,
                });
            }
        }
        ChainTrace {
            draws,
            acceptance: self.n_accepted as f64 / self.n_steps as f64,
        }
    }
}

/// Draw `n` posterior pairs, one independent inner chain per pair.
///
/// A single-draw request runs on the caller's rng. Larger batches take
/// one seed per draw from the caller's rng, then run the chains in
/// parallel on per-draw `Xoshiro256Plus` streams, so results are
/// deterministic in the caller's seed and independent of worker
/// scheduling.
pub(super) fn draw_batch<R: Rng>(
    hyper: &GammaHyper,
    cfg: &ChainConfig,
    stat: &GammaSuffStat,
    n: usize,
    rng: &mut R,
) -> Vec<ShapeRate> {
    if n == 1 {
        return vec![ShapeRateChain::new(hyper, cfg, stat).run(rng)];
    }

    let seeds: Vec<u64> = (0..n).map(|_| rng.gen()).collect();
    seeds
        .par_iter()
        .map(|&seed| {
            let mut trng = Xoshiro256Plus::seed_from_u64(seed);
            ShapeRateChain::new(hyper, cfg, stat).run(&mut trng)
        })
        .collect()
}

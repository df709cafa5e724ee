//! Random-walk Metropolis building blocks

use rand::Rng;
use rand_distr::StandardNormal;

/// Outcome of one Metropolis step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MhStep {
    /// The retained value: the proposal if accepted, the input
    /// otherwise
    pub x: f64,
    /// Score of the retained value
    pub score_x: f64,
    /// Whether the proposal was accepted
    pub accepted: bool,
}

/// One random-walk Metropolis step over a positive value, proposing in
/// log space.
///
/// The walk `ln y = ln x + step_size * Normal(0, 1)` is symmetric in
/// `ln x`, so no proposal correction appears in the acceptance ratio;
/// the `ln x` terms below re-express `score_fn` — the target
/// ln-density over the original positive domain, up to a constant —
/// as a density over the log-transformed chain. The proposal is
/// positive by construction.
///
/// A `NaN` acceptance ratio is treated as a rejection.
pub fn ln_rw_step<F, R>(
    x: f64,
    step_size: f64,
    score_fn: F,
    rng: &mut R,
) -> MhStep
where
    F: Fn(f64) -> f64,
    R: Rng,
{
    let z: f64 = rng.sample(StandardNormal);
    let y = step_size.mul_add(z, x.ln()).exp();

    let fx = score_fn(x);
    let fy = score_fn(y);
    let ln_ratio = (fy + y.ln()) - (fx + x.ln());

    if !ln_ratio.is_nan() && rng.gen::<f64>().ln() < ln_ratio {
        MhStep {
            x: y,
            score_x: fy,
            accepted: true,
        }
    } else {
        MhStep {
            x,
            score_x: fx,
            accepted: false,
        }
    }
}

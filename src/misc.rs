//! Numeric guards and helpers

/// Clamp a unit-interval draw away from exactly 0 and 1.
///
/// Beta samplers can return the endpoints in extreme parameter
/// regimes, which would send the `-scale * ln(u)` shape transform to
/// infinity or zero.
///
/// # Example
///
/// ```rust
/// # use dpmix::misc::clamp_unit;
/// assert!(clamp_unit(0.0) > 0.0);
/// assert!(clamp_unit(1.0) < 1.0);
/// assert_eq!(clamp_unit(0.5), 0.5);
/// ```
#[inline]
pub fn clamp_unit(u: f64) -> f64 {
    u.clamp(f64::EPSILON, 1.0 - f64::EPSILON)
}

/// Compute `ln(1 - e^(-t))` for `t > 0` without catastrophic
/// cancellation; `-inf` for `t <= 0`.
///
/// Splits at `ln 2`: below it `exp_m1` keeps precision when
/// `e^(-t)` is close to 1, above it `ln_1p` keeps precision when
/// `e^(-t)` is close to 0.
///
/// # Example
///
/// ```rust
/// # use dpmix::misc::ln1mexp;
/// let naive = (1.0 - (-2.0_f64).exp()).ln();
/// assert!((ln1mexp(2.0) - naive).abs() < 1e-12);
/// assert!(ln1mexp(0.0).is_infinite());
/// ```
pub fn ln1mexp(t: f64) -> f64 {
    if t <= 0.0 {
        f64::NEG_INFINITY
    } else if t > std::f64::consts::LN_2 {
        (-(-t).exp()).ln_1p()
    } else {
        (-(-t).exp_m1()).ln()
    }
}

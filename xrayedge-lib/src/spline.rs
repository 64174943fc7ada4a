/// Cubic spline interpolation using pre-computed second derivatives (Elam method).
///
/// `xin` must be strictly increasing and at least two points long; `yspl`
/// holds the second derivatives of `yin` at each knot. Points outside the
/// table are extrapolated from the first or last interval.
pub fn elam_spline_at(xin: &[f64], yin: &[f64], yspl: &[f64], x: f64) -> f64 {
    let hi = xin.partition_point(|&v| v < x).clamp(1, xin.len() - 1);
    let lo = hi - 1;

    let diff = xin[hi] - xin[lo];
    debug_assert!(diff > 0.0, "xin must be strictly increasing");

    let a = (xin[hi] - x) / diff;
    let b = (x - xin[lo]) / diff;

    a * yin[lo]
        + b * yin[hi]
        + (diff * diff / 6.0) * ((a * a - 1.0) * a * yspl[lo] + (b * b - 1.0) * b * yspl[hi])
}

/// Vectorized [`elam_spline_at`].
pub fn elam_spline(xin: &[f64], yin: &[f64], yspl: &[f64], xout: &[f64]) -> Vec<f64> {
    xout.iter()
        .map(|&x| elam_spline_at(xin, yin, yspl, x))
        .collect()
}

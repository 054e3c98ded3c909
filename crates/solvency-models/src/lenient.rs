//! Lenient comparison policy for the quality score.
//!
//! A comparison with an unavailable operand counts as a missed signal, not
//! as unknown: partial data lowers the score instead of voiding it.

pub(crate) fn positive(v: Option<f64>) -> bool {
    v.map_or(false, |v| v > 0.0)
}

pub(crate) fn gt(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

pub(crate) fn le(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a <= b,
        _ => false,
    }
}

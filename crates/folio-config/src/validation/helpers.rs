//! Shared range helpers used by all domain validators.
//!
//! Each helper records an error for an out-of-range value and pulls it back
//! into `[min, max]`, so a config that failed validation is still safe to use.

/// Integer range check; clamps `value` into `[min, max]`.
pub(crate) fn check_range(errors: &mut Vec<String>, name: &str, value: &mut u32, min: u32, max: u32) {
    let v = *value;
    if v < min || v > max {
        errors.push(format!("{name} = {v} is out of range [{min}, {max}]"));
        *value = v.clamp(min, max);
    }
}

/// Float range check; clamps `value` into `[min, max]`. NaN is rejected and
/// replaced by `min`.
pub(crate) fn check_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: &mut f64,
    min: f64,
    max: f64,
) {
    let v = *value;
    if !(min..=max).contains(&v) {
        errors.push(format!("{name} = {v} is out of range [{min}, {max}]"));
        *value = if v.is_nan() { min } else { v.clamp(min, max) };
    }
}

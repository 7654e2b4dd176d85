use crate::spline::splineerror::SplineError;

/// Reports `value` if it is NaN or Infinity, under the given field label
/// and index.
pub fn check_finite_value(value: f64, label: &str, index: usize) -> Result<(), SplineError> {
    if value.is_nan() {
        return Err(SplineError::NanDetected {
            label: label.to_owned(),
            index,
        });
    }
    if value.is_infinite() {
        return Err(SplineError::InfinityDetected {
            label: label.to_owned(),
            index,
        });
    }
    Ok(())
}

/// Scans `values` and reports the first NaN or Infinity together with the
/// offending index and the field label it belongs to.
pub fn check_finite(values: &[f64], label: &str) -> Result<(), SplineError> {
    for (index, &v) in values.iter().enumerate() {
        check_finite_value(v, label, index)?;
    }
    Ok(())
}

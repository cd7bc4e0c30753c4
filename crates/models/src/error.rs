use thiserror::Error;

/// Errors that can occur when constructing a model.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    #[error("{0} must be finite and positive")]
    NotPositive(&'static str),
}

/// Checks that a model constant is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::NotPositive(name))
    }
}

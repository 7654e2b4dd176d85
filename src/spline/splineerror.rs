use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplineError {
    #[error("non monotone insert at point {index}: last x = {prev}, new x = {next}")]
    NonMonotoneInsertion { index: usize, prev: f64, next: f64 },

    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("x values not monotone at index {index}: {prev} followed by {next}")]
    NonMonotoneInput { index: usize, prev: f64, next: f64 },

    #[error("found NaN at {label}[{index}]")]
    NanDetected { label: String, index: usize },

    #[error("found Infinity at {label}[{index}]")]
    InfinityDetected { label: String, index: usize },

    #[error("x = {x} out of range [{x_min}, {x_max}]")]
    OutOfDomain { x: f64, x_min: f64, x_max: f64 },

    #[error("spline '{name}' has no points")]
    EmptyDomain { name: String },

    #[error("spline '{name}' has a single point, no interval to locate")]
    DegenerateDomain { name: String },

    #[error("bad range [{x_min}, {x_max}]: upper bound must exceed lower bound")]
    InvalidRange { x_min: f64, x_max: f64 },

    #[error("spline '{name}' domain has zero width, cannot rescale")]
    DegenerateSpline { name: String },

    #[error("duplicate spline name '{name}'")]
    DuplicateName { name: String },

    #[error("spline '{name}' not found")]
    NameNotFound { name: String },

    #[error("spline index {index} out of range, set holds {count} splines")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("missing `{field}` field")]
    MissingField { field: &'static str },

    #[error("unknown spline type '{value}'")]
    UnknownSplineType { value: String },

    #[error("spline '{name}': coefficient system is singular")]
    SingularSystem { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// Input rejected before it reaches the store or the engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a multiple of {step}, got {value}")]
    NotOnStep {
        field: &'static str,
        value: f64,
        step: f64,
    },

    #[error("'{value}' is not a valid choice for {field}")]
    UnrecognizedChoice { field: &'static str, value: String },
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_nan() || value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn check_half_step(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (value * 2.0).fract() != 0.0 {
        return Err(ValidationError::NotOnStep {
            field,
            value,
            step: 0.5,
        });
    }
    Ok(())
}

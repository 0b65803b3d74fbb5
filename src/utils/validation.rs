use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Binary search assumes its input is sorted; the suite checks it up front.
pub fn validate_non_decreasing<T: PartialOrd + std::fmt::Debug>(
    field_name: &str,
    values: &[T],
) -> Result<()> {
    if let Some(pos) = values.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", values),
            reason: format!(
                "Values must be non-decreasing, but {:?} at index {} is followed by {:?}",
                values[pos],
                pos,
                values[pos + 1]
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(KataError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

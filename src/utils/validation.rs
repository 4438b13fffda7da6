use crate::utils::error::{LottoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(LottoError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LottoError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses one line of operator input as a non-negative count.
///
/// Surrounding whitespace (including the trailing newline) is ignored.
/// Anything else that is not a whole number in `0..=u32::MAX` is reported
/// as a [`LottoError::ValidationError`] naming `field_name`.
pub fn parse_count(field_name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| LottoError::ValidationError {
        field: field_name.to_string(),
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("Value cannot be empty"));
    }

    let parsed: i64 = trimmed
        .parse()
        .map_err(|_| invalid("Value must be a whole number"))?;

    if parsed < 0 {
        return Err(invalid("Value cannot be negative"));
    }

    u32::try_from(parsed).map_err(|_| invalid("Value is too large"))
}

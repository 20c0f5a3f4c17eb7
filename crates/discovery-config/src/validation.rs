//! The `Validate` trait and the checks config sections share

use crate::error::{ConfigError, Result};

/// How far a weight row may drift from summing to one
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Largest accepted field boost
pub const MAX_BOOST: f64 = 100.0;

/// Semantic checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A weight row: every weight in `[0, 1]` and the row summing to one
pub fn check_weight_row(field: &str, weights: &[(&str, f64)]) -> Result<()> {
    for (name, weight) in weights {
        check_range(format!("{}.{}", field, name), *weight, 0.0, 1.0)?;
    }

    let sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        let listing = weights
            .iter()
            .map(|(name, w)| format!("{} = {:.2}", name, w))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ConfigError::InvalidWeightSum {
            field: field.to_string(),
            expected: 1.0,
            actual: sum,
            hint: format!("Rebalance {}", listing),
        });
    }

    Ok(())
}

/// A field boost: positive and at most [`MAX_BOOST`]
pub fn check_boost(field: &str, boost: f32) -> Result<()> {
    let boost = f64::from(boost);
    check_range(field, boost, 0.0, MAX_BOOST)?;
    if boost == 0.0 {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: "a zero boost would drop the field from relevance".to_string(),
        });
    }
    Ok(())
}

/// `value` within `[min, max]`; NaN never is
pub fn check_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        })
    }
}

/// `value` strictly greater than `floor`
pub fn check_above(field: &str, value: usize, floor: usize) -> Result<()> {
    if value > floor {
        Ok(())
    } else {
        Err(ConfigError::InvalidInteger {
            field: field.to_string(),
            value,
            min: floor,
        })
    }
}

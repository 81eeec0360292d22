//! # Stock Rule
//!
//! Quantity arithmetic with a floor at zero.
//!
//! ```text
//!   current + delta  ──►  < 0 ?  ──► InsufficientStock (nothing written)
//!                          │
//!                          └── ≥ 0 ──► new quantity
//! ```

use crate::error::{CoreError, CoreResult};

/// Returns the quantity after applying `delta` to `current`.
///
/// ## Errors
/// - [`CoreError::InsufficientStock`] when the result would be negative
/// - [`CoreError::QuantityOverflow`] when the result does not fit in an i64
///
/// ```rust
/// use stockroom_core::stock::apply_delta;
///
/// assert_eq!(apply_delta("SKU1", 10, -10).unwrap(), 0);
/// assert!(apply_delta("SKU1", 10, -11).is_err());
/// ```
pub fn apply_delta(identifier: &str, current: i64, delta: i64) -> CoreResult<i64> {
    let next = current
        .checked_add(delta)
        .ok_or_else(|| CoreError::QuantityOverflow {
            identifier: identifier.to_string(),
        })?;

    if next < 0 {
        return Err(CoreError::InsufficientStock {
            identifier: identifier.to_string(),
            available: current,
            delta,
        });
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_accepts_non_negative_results() {
        assert_eq!(apply_delta("SKU1", 10, -5).unwrap(), 5);
        assert_eq!(apply_delta("SKU1", 5, -5).unwrap(), 0);
        assert_eq!(apply_delta("SKU1", 0, 3).unwrap(), 3);
        assert_eq!(apply_delta("SKU1", 7, 0).unwrap(), 7);
    }

    #[test]
    fn test_apply_delta_rejects_negative_results() {
        let err = apply_delta("SKU1", 5, -100).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                identifier,
                available,
                delta,
            } => {
                assert_eq!(identifier, "SKU1");
                assert_eq!(available, 5);
                assert_eq!(delta, -100);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_apply_delta_overflow() {
        assert!(matches!(
            apply_delta("SKU1", i64::MAX, 1).unwrap_err(),
            CoreError::QuantityOverflow { .. }
        ));
    }
}

//! Quantity validation contract.
//!
//! Every count the inventory stores passes through here: it must be an
//! integer, it must not be negative, and it must not exceed an optional upper
//! bound. These functions only decide; whether a failure aborts construction or
//! is swallowed by a mutation is up to the caller.

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};

/// Validate an integer quantity against an optional inclusive upper bound.
///
/// Returns the value as an unsigned count on success.
pub fn validate(n: i64, upper_bound: Option<u64>) -> ValidationResult<u64> {
    let n = u64::try_from(n).map_err(|_| ValidationError::Negative(n))?;
    if let Some(bound) = upper_bound {
        if n > bound {
            return Err(ValidationError::ExceedsBound { value: n, bound });
        }
    }
    Ok(n)
}

/// Validate a dynamically-typed value.
///
/// Only JSON integers pass the type check; `7200.0`, `"7200"`, `true` and
/// `null` are all rejected as [`ValidationError::NotAnInteger`].
pub fn validate_value(value: &Value, upper_bound: Option<u64>) -> ValidationResult<u64> {
    let Value::Number(num) = value else {
        return Err(ValidationError::not_an_integer(value.to_string()));
    };

    if let Some(n) = num.as_i64() {
        return validate(n, upper_bound);
    }

    // Integers above i64::MAX are still integers.
    match num.as_u64() {
        Some(n) => match upper_bound {
            Some(bound) if n > bound => Err(ValidationError::ExceedsBound { value: n, bound }),
            _ => Ok(n),
        },
        None => Err(ValidationError::not_an_integer(num.to_string())),
    }
}

/// Validate at construction time: failures are logged and propagated.
pub fn require(field: &'static str, n: i64) -> ValidationResult<u64> {
    validate(n, None).inspect_err(|err| {
        tracing::warn!(field, n, error = %err, "rejected value at construction");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn accepts_zero_and_positive_values() {
        assert_eq!(validate(0, None), Ok(0));
        assert_eq!(validate(42, None), Ok(42));
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(validate(-1, None), Err(ValidationError::Negative(-1)));
        assert_eq!(validate(-1, Some(10)), Err(ValidationError::Negative(-1)));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(validate(50, Some(50)), Ok(50));
        assert_eq!(
            validate(51, Some(50)),
            Err(ValidationError::ExceedsBound { value: 51, bound: 50 })
        );
    }

    #[test]
    fn zero_upper_bound_is_enforced() {
        assert_eq!(validate(0, Some(0)), Ok(0));
        assert!(matches!(
            validate(1, Some(0)),
            Err(ValidationError::ExceedsBound { value: 1, bound: 0 })
        ));
    }

    #[test]
    fn non_integer_values_fail_the_type_check() {
        for value in [json!(7200.0), json!("7200"), json!(true), json!(null), json!([1])] {
            let err = validate_value(&value, None).unwrap_err();
            assert!(err.is_type_error(), "expected type error for {value}");
        }
    }

    #[test]
    fn integer_values_follow_the_value_checks() {
        assert_eq!(validate_value(&json!(7200), None), Ok(7200));
        assert_eq!(validate_value(&json!(-5), None), Err(ValidationError::Negative(-5)));
        assert_eq!(validate_value(&json!(u64::MAX), None), Ok(u64::MAX));
        assert!(matches!(
            validate_value(&json!(u64::MAX), Some(10)),
            Err(ValidationError::ExceedsBound { .. })
        ));
    }

    #[test]
    fn require_propagates_failures() {
        assert_eq!(require("cores", 8), Ok(8));
        assert_eq!(require("cores", -8), Err(ValidationError::Negative(-8)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a value passes iff it is non-negative and within the bound.
        #[test]
        fn validate_matches_range_definition(n in any::<i64>(), bound in proptest::option::of(any::<u64>())) {
            let ok = n >= 0 && bound.is_none_or(|b| (n as u64) <= b);
            prop_assert_eq!(validate(n, bound).is_ok(), ok);
        }
    }
}

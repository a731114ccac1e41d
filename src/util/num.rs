use dashu::base::BitTest;
use dashu::integer::IBig;

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Largest bit length `^` may produce, about five million decimal digits.
pub const MAX_RESULT_BITS: usize = 1 << 24;

/// Checks that `base ^ exponent` stays within [`MAX_RESULT_BITS`].
///
/// The size is estimated as `bit_len(base) * exponent`, an upper bound of the
/// real bit length. Bases `0`, `1` and `-1` never grow and always pass.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the estimate exceeds the cap.
///
/// ## Example
/// ```
/// use bigcalc::{error::RuntimeError, util::num::check_power_size};
/// use dashu::integer::IBig;
///
/// assert!(check_power_size(&IBig::from(2), 100).is_ok());
/// assert!(check_power_size(&IBig::from(-1), u32::MAX).is_ok());
/// assert_eq!(check_power_size(&IBig::from(7), 400_000_000).unwrap_err(),
///            RuntimeError::Overflow);
/// ```
pub fn check_power_size(base: &IBig, exponent: u32) -> EvalResult<()> {
    let bits = base.bit_len();
    if bits <= 1 {
        return Ok(());
    }

    let exponent = u32_to_usize_checked(exponent)?;
    match bits.checked_mul(exponent) {
        Some(estimate) if estimate <= MAX_RESULT_BITS => Ok(()),
        _ => Err(RuntimeError::Overflow),
    }
}

/// Converts an exponent to a `u32` if and only if it is non-negative and fits.
///
/// ## Errors
/// - `RuntimeError::NegativeExponent` if the value is below zero.
/// - `RuntimeError::ExponentTooLarge` if the value exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use bigcalc::{error::RuntimeError, util::num::exponent_to_u32_checked};
/// use dashu::integer::IBig;
///
/// assert_eq!(exponent_to_u32_checked(&IBig::from(10)).unwrap(), 10);
///
/// let err = exponent_to_u32_checked(&IBig::from(-1)).unwrap_err();
/// assert_eq!(err, RuntimeError::NegativeExponent);
///
/// let err = exponent_to_u32_checked(&IBig::from(u64::MAX)).unwrap_err();
/// assert_eq!(err, RuntimeError::ExponentTooLarge);
/// ```
pub fn exponent_to_u32_checked(value: &IBig) -> EvalResult<u32> {
    if *value < IBig::ZERO {
        return Err(RuntimeError::NegativeExponent);
    }

    u32::try_from(value.clone()).map_err(|_| RuntimeError::ExponentTooLarge)
}

/// Widens a `u32` exponent to the `usize` expected by `IBig::pow`.
///
/// ## Errors
/// Returns `RuntimeError::ExponentTooLarge` on targets where `usize` is
/// narrower than 32 bits.
pub fn u32_to_usize_checked(value: u32) -> EvalResult<usize> {
    usize::try_from(value).map_err(|_| RuntimeError::ExponentTooLarge)
}

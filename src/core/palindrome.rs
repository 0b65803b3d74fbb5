//! Integer palindrome check by numeric digit reversal (no string conversion).

use crate::utils::error::{KataError, Result};

/// Reverses the decimal digits of a non-negative `value`.
///
/// Fails with [`KataError::DigitOverflow`] when the reversed number does not fit
/// in an `i32` (e.g. `1_000_000_009`).
pub fn reverse_digits(value: i32) -> Result<i32> {
    if value < 0 {
        return Err(KataError::InvalidInput {
            message: format!("cannot reverse the digits of negative value {}", value),
        });
    }

    let mut remaining = value;
    let mut reversed: i32 = 0;

    while remaining != 0 {
        let last_digit = remaining % 10;
        reversed = reversed
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(last_digit))
            .ok_or_else(|| KataError::DigitOverflow { value })?;
        remaining /= 10;
        tracing::trace!(remaining, last_digit, reversed, "digit step");
    }

    Ok(reversed)
}

/// `true` if `value` reads the same forwards and backwards in base 10.
///
/// Negative numbers are never palindromes. A value whose reversal overflows
/// cannot equal itself, so that case is `false` as well.
pub fn is_palindrome(value: i32) -> bool {
    if value < 0 {
        return false;
    }
    if value == 0 {
        return true;
    }

    match reverse_digits(value) {
        Ok(reversed) => reversed == value,
        Err(e) => {
            tracing::debug!("{}", e);
            false
        }
    }
}

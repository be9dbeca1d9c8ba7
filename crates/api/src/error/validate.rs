//! Validation utilities shared by the bn128 crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that an operand of an inversion is nonzero
#[inline(always)]
pub fn nonzero(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::division_by_zero(context));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_validation() {
        assert!(parameter(true, "modulus", "must be odd").is_ok());
        assert_eq!(
            parameter(false, "modulus", "must be odd"),
            Err(Error::param("modulus", "must be odd"))
        );
    }

    #[test]
    fn test_nonzero_validation() {
        assert!(nonzero(false, "Fp inverse").is_ok());
        assert!(nonzero(true, "Fp inverse").unwrap_err().is_division_by_zero());
    }
}

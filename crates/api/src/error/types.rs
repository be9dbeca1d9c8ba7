//! Error type definitions for field, curve and pairing operations

use std::borrow::Cow;

use thiserror::Error;

/// Primary error type for bn128 operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Inversion or division by the additive identity
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Invalid construction-time parameter
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Malformed integer literal
    #[error("cannot parse {context} from {input:?}")]
    Parse {
        /// What was being parsed
        context: &'static str,
        /// The offending input
        input: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a DivisionByZero error
    pub fn division_by_zero(context: &'static str) -> Self {
        Error::DivisionByZero { context }
    }

    /// Shorthand to create a Parse error
    pub fn parse(context: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            context,
            input: input.into(),
        }
    }

    /// Returns true for the domain error raised by inverting zero
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero { .. })
    }
}

/// Result type for bn128 operations
pub type Result<T> = core::result::Result<T, Error>;

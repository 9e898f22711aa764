//! Presence checks for optional values, and the typestate transition
//! from `Claim<Option<T>>` to `Claim<T>`.
//!
//! The failure kind of a raised presence check depends on which side
//! actually triggered: raising over an absent value is `NullArgument`,
//! raising over a present value is `InvalidArgument`.

use crate::claim::{Claim, check};
use crate::error::CheckError;

fn absence_failure<T>(claim: &Claim<Option<T>>, message: Option<String>) -> CheckError {
    match claim.value() {
        None => CheckError::NullArgument {
            name: claim.name().to_string(),
            message,
        },
        Some(_) => CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        },
    }
}

/// Presence checks over `Claim<Option<T>>`.
pub trait OptionChecks: Sized {
    type Inner;

    /// Assert that the value is absent.
    fn is_none(self) -> Result<Self, CheckError>;

    /// Assert that the value is present.
    fn is_some(self) -> Result<Self, CheckError>;

    /// Unwrap to a claim over the inner value, raising `InvalidState` if
    /// it is absent.
    ///
    /// This is a state invariant, not a validated condition: it fires
    /// regardless of a pending negation toggle, and both one-shot flags
    /// carry over to the claim it produces.
    fn some(self) -> Result<Claim<Self::Inner>, CheckError>;
}

impl<T> OptionChecks for Claim<Option<T>> {
    type Inner = T;

    fn is_none(self) -> Result<Self, CheckError> {
        let holds = self.value().is_none();
        self.judge(holds, absence_failure)
    }

    fn is_some(self) -> Result<Self, CheckError> {
        let holds = self.value().is_some();
        self.judge(holds, absence_failure)
    }

    fn some(self) -> Result<Claim<T>, CheckError> {
        let Claim {
            value,
            name,
            negated,
            message,
        } = self;
        match value {
            Some(inner) => {
                let mut claim = check(inner, name);
                claim.negated = negated;
                claim.message = message;
                Ok(claim)
            }
            None => Err(CheckError::InvalidState { name, message }),
        }
    }
}

//! Checks applicable to any value: caller predicates, default-equality,
//! and equatable comparisons with an optional custom equality.

use crate::claim::Claim;
use crate::error::CheckError;

/// Checks with no bound on the value type.
pub trait GeneralChecks<T>: Sized {
    /// Assert that a caller-supplied predicate holds for the value.
    fn satisfies<F>(self, predicate: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T) -> bool;

    /// Assert equality under a caller-supplied equality function.
    fn is_equal_to_by<F>(self, other: &T, eq: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> bool;
}

impl<T> GeneralChecks<T> for Claim<T> {
    fn satisfies<F>(self, predicate: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T) -> bool,
    {
        let holds = predicate(self.value());
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }

    fn is_equal_to_by<F>(self, other: &T, eq: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> bool,
    {
        let holds = eq(self.value(), other);
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

/// Equality against another value of the same type.
pub trait EquatableChecks<T>: Sized {
    /// Assert that the value equals `other` under its natural equality.
    fn is_equal_to(self, other: &T) -> Result<Self, CheckError>;
}

impl<T: PartialEq> EquatableChecks<T> for Claim<T> {
    fn is_equal_to(self, other: &T) -> Result<Self, CheckError> {
        let holds = self.value() == other;
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

/// Comparison against the type's default value.
pub trait DefaultChecks: Sized {
    /// Assert that the value equals its type's default.
    fn is_default(self) -> Result<Self, CheckError>;
}

impl<T: Default + PartialEq> DefaultChecks for Claim<T> {
    fn is_default(self) -> Result<Self, CheckError> {
        let holds = *self.value() == T::default();
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::check;
    use crate::error::FailureKind;

    #[test]
    fn satisfies_runs_the_caller_predicate() {
        assert!(check(4, "n").satisfies(|v| v % 2 == 0).is_ok());
        let err = check(3, "n").satisfies(|v| v % 2 == 0).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
        assert_eq!(err.parameter(), "n");
    }

    #[test]
    fn satisfies_negated() {
        assert!(check(3, "n").not().satisfies(|v| v % 2 == 0).is_ok());
        assert!(check(4, "n").not().satisfies(|v| v % 2 == 0).is_err());
    }

    #[test]
    fn equality_natural_and_custom() {
        assert!(check("ab", "s").is_equal_to(&"ab").is_ok());
        assert!(check("ab", "s").is_equal_to(&"cd").is_err());

        let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert!(check("AB", "s").is_equal_to_by(&"ab", case_insensitive).is_ok());
        assert!(check("AB", "s").not().is_equal_to_by(&"ab", case_insensitive).is_err());
    }

    #[test]
    fn default_check() {
        assert!(check(0u32, "n").is_default().is_ok());
        assert!(check(1u32, "n").is_default().is_err());
        assert!(check(1u32, "n").not().is_default().is_ok());
    }

    #[test]
    fn message_rides_on_the_failure() {
        let err = check(3, "n")
            .or_explain("must be even")
            .satisfies(|v| v % 2 == 0)
            .unwrap_err();
        assert_eq!(err.message(), Some("must be even"));
    }
}

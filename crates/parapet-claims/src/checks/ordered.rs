//! Ordering checks over the value's natural order or a caller comparer.
//!
//! Boundary semantics are exact and load-bearing: `is_greater_than` is
//! strict (`Ordering::Greater` only), `is_at_least` admits equality, and
//! symmetrically for the less-than family. Callers rely on these to
//! express inclusive/exclusive range bounds. Incomparable values (a
//! `partial_cmp` of `None`) never satisfy an ordering predicate.

use std::cmp::Ordering;
use std::fmt;

use crate::claim::Claim;
use crate::error::CheckError;

fn out_of_range<T: fmt::Debug>(claim: &Claim<T>, message: Option<String>) -> CheckError {
    CheckError::OutOfRange {
        name: claim.name().to_string(),
        value: format!("{:?}", claim.value()),
        message,
    }
}

/// Ordering checks for values with a natural partial order.
pub trait OrderedChecks<T>: Sized {
    /// Assert `value > limit` (strict).
    fn is_greater_than(self, limit: &T) -> Result<Self, CheckError>;

    /// Assert `value >= limit`.
    fn is_at_least(self, limit: &T) -> Result<Self, CheckError>;

    /// Assert `value < limit` (strict).
    fn is_less_than(self, limit: &T) -> Result<Self, CheckError>;

    /// Assert `value <= limit`.
    fn is_at_most(self, limit: &T) -> Result<Self, CheckError>;

    /// Assert that comparing the value to `other` yields `expected`.
    fn compares_as(self, expected: Ordering, other: &T) -> Result<Self, CheckError>;

    /// `is_greater_than` under a caller-supplied comparer.
    fn is_greater_than_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering;

    /// `is_at_least` under a caller-supplied comparer.
    fn is_at_least_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering;

    /// `is_less_than` under a caller-supplied comparer.
    fn is_less_than_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering;

    /// `is_at_most` under a caller-supplied comparer.
    fn is_at_most_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering;

    /// `compares_as` under a caller-supplied comparer.
    fn compares_as_by<F>(self, expected: Ordering, other: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering;
}

impl<T: PartialOrd + fmt::Debug> OrderedChecks<T> for Claim<T> {
    fn is_greater_than(self, limit: &T) -> Result<Self, CheckError> {
        let holds = matches!(self.value().partial_cmp(limit), Some(Ordering::Greater));
        self.judge(holds, out_of_range)
    }

    fn is_at_least(self, limit: &T) -> Result<Self, CheckError> {
        let holds = matches!(
            self.value().partial_cmp(limit),
            Some(Ordering::Greater | Ordering::Equal)
        );
        self.judge(holds, out_of_range)
    }

    fn is_less_than(self, limit: &T) -> Result<Self, CheckError> {
        let holds = matches!(self.value().partial_cmp(limit), Some(Ordering::Less));
        self.judge(holds, out_of_range)
    }

    fn is_at_most(self, limit: &T) -> Result<Self, CheckError> {
        let holds = matches!(
            self.value().partial_cmp(limit),
            Some(Ordering::Less | Ordering::Equal)
        );
        self.judge(holds, out_of_range)
    }

    fn compares_as(self, expected: Ordering, other: &T) -> Result<Self, CheckError> {
        let holds = self.value().partial_cmp(other) == Some(expected);
        self.judge(holds, out_of_range)
    }

    fn is_greater_than_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        let holds = cmp(self.value(), limit) == Ordering::Greater;
        self.judge(holds, out_of_range)
    }

    fn is_at_least_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        let holds = cmp(self.value(), limit) != Ordering::Less;
        self.judge(holds, out_of_range)
    }

    fn is_less_than_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        let holds = cmp(self.value(), limit) == Ordering::Less;
        self.judge(holds, out_of_range)
    }

    fn is_at_most_by<F>(self, limit: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        let holds = cmp(self.value(), limit) != Ordering::Greater;
        self.judge(holds, out_of_range)
    }

    fn compares_as_by<F>(self, expected: Ordering, other: &T, cmp: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        let holds = cmp(self.value(), other) == expected;
        self.judge(holds, out_of_range)
    }
}

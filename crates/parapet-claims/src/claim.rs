//! The claim carrier and its one-shot chain protocol.
//!
//! A [`Claim`] is the transient unit threaded through a validation chain:
//! the value under validation, the parameter name used for reporting, and
//! two one-shot flags (negation, caller message) that apply to exactly the
//! next validator call.
//!
//! Chain state is deliberately immutable-by-consumption: every validator
//! takes the claim by value and returns a fresh claim whose flags are
//! cleared. Nothing about a previous call can leak into the next one, and
//! a claim that failed no longer exists. Claims are single-threaded,
//! single-use values; they are never stored or shared.

use crate::error::CheckError;

/// Begin a check chain for `value` under the reporting name `name`.
///
/// The explicit-name constructor. Names recovered by a resolver are
/// non-empty by construction; a literal name may be any string, including
/// empty — it is used only for failure reporting.
pub fn check<T>(value: T, name: impl Into<String>) -> Claim<T> {
    Claim {
        value,
        name: name.into(),
        negated: false,
        message: None,
    }
}

/// The carrier of a value, its parameter name, and the pending one-shot
/// flags through a validation chain.
#[derive(Debug)]
pub struct Claim<T> {
    pub(crate) value: T,
    pub(crate) name: String,
    pub(crate) negated: bool,
    pub(crate) message: Option<String>,
}

impl<T> Claim<T> {
    /// Toggle assert/assert-not semantics for exactly the next check.
    ///
    /// Calling `not` twice cancels itself; it flips, it does not latch.
    /// The flag is consumed by the next validator call whether that call
    /// passes or raises.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Attach a caller-supplied explanation to exactly the next check.
    ///
    /// The text is opaque to this crate and is carried verbatim on the
    /// failure if that check raises. Same one-shot protocol as [`not`].
    ///
    /// [`not`]: Claim::not
    pub fn or_explain(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The value under validation.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The parameter name used for failure reporting.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the claim and recover the validated value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Begin validating a second, unrelated parameter within the same
    /// fluent statement, after this claim's checks have all passed.
    pub fn and<U>(self, value: U, name: impl Into<String>) -> Claim<U> {
        check(value, name)
    }

    /// Apply the negation-aware outcome rule to an evaluated predicate.
    ///
    /// - predicate holds, positive  → pass
    /// - predicate holds, negated   → raise
    /// - predicate fails, positive  → raise
    /// - predicate fails, negated   → pass
    ///
    /// Both one-shot flags are consumed in every case, so a toggle or a
    /// message affects exactly one validator call. On raise, the violation
    /// closure receives the claim (for name and value access) and the
    /// pending caller message.
    pub(crate) fn judge<F>(mut self, holds: bool, violation: F) -> Result<Self, CheckError>
    where
        F: FnOnce(&Claim<T>, Option<String>) -> CheckError,
    {
        let negated = self.negated;
        self.negated = false;
        let message = self.message.take();
        if holds != negated {
            Ok(self)
        } else {
            Err(violation(&self, message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn fail_invalid<T>(claim: &Claim<T>, message: Option<String>) -> CheckError {
        CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        }
    }

    #[test]
    fn positive_pass_and_raise() {
        assert!(check(1, "n").judge(true, fail_invalid).is_ok());
        assert!(check(1, "n").judge(false, fail_invalid).is_err());
    }

    #[test]
    fn negated_inverts_exactly_once() {
        assert!(check(1, "n").not().judge(false, fail_invalid).is_ok());
        assert!(check(1, "n").not().judge(true, fail_invalid).is_err());

        // The flag is cleared by the first call, passing or raising.
        let claim = check(1, "n").not().judge(false, fail_invalid).unwrap();
        assert!(!claim.negated);
        assert!(claim.judge(false, fail_invalid).is_err());
    }

    #[test]
    fn double_toggle_cancels() {
        assert!(check(1, "n").not().not().judge(true, fail_invalid).is_ok());
    }

    #[test]
    fn message_is_one_shot() {
        let err = check(1, "n")
            .or_explain("first")
            .judge(false, fail_invalid)
            .unwrap_err();
        assert_eq!(err.message(), Some("first"));

        let claim = check(1, "n")
            .or_explain("first")
            .judge(true, fail_invalid)
            .unwrap();
        let err = claim.judge(false, fail_invalid).unwrap_err();
        assert_eq!(err.message(), None);
    }

    #[test]
    fn and_starts_a_fresh_claim() {
        let next = check(1, "a").not().and("x", "b");
        assert!(!next.negated);
        assert_eq!(next.name(), "b");
        assert_eq!(*next.value(), "x");
    }

    #[test]
    fn failure_names_the_parameter() {
        let err = check(7, "retries").judge(false, fail_invalid).unwrap_err();
        assert_eq!(err.parameter(), "retries");
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }
}

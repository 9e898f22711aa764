//! Identifier checks for UUID values.

use uuid::Uuid;

use crate::claim::Claim;
use crate::error::CheckError;

/// Checks over claims holding a [`Uuid`].
pub trait IdentChecks: Sized {
    /// Assert that the identifier is the all-zero (nil) UUID.
    fn is_nil(self) -> Result<Self, CheckError>;

    /// Assert that the identifier is not the all-zero (nil) UUID.
    fn is_not_nil(self) -> Result<Self, CheckError>;
}

impl IdentChecks for Claim<Uuid> {
    fn is_nil(self) -> Result<Self, CheckError> {
        let holds = self.value().is_nil();
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }

    fn is_not_nil(self) -> Result<Self, CheckError> {
        let holds = !self.value().is_nil();
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
    fn nil_identifier_is_rejected() {
        let err = check(Uuid::nil(), "id").is_not_nil().unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
        assert_eq!(err.parameter(), "id");
    }

    #[test]
    fn fresh_identifier_passes() {
        assert!(check(Uuid::new_v4(), "id").is_not_nil().is_ok());
        assert!(check(Uuid::new_v4(), "id").not().is_nil().is_ok());
    }

    #[test]
    fn is_nil_positive_form() {
        assert!(check(Uuid::nil(), "id").is_nil().is_ok());
        assert!(check(Uuid::new_v4(), "id").is_nil().is_err());
    }
}

//! Runtime-type checks over type-erased values.
//!
//! Rust has no subtype relation between concrete types, so the original
//! "assignable from / subclass of" pair collapses to concrete-type
//! identity against an erased `&dyn Any`.

use std::any::{Any, TypeId};

use crate::claim::Claim;
use crate::error::CheckError;

/// Checks over claims holding a type-erased reference.
pub trait TypeChecks: Sized {
    /// Assert that the erased value is a `U`.
    fn is_instance_of<U: Any>(self) -> Result<Self, CheckError>;

    /// Assert that the erased value's type is exactly `type_id`.
    fn is_exactly(self, type_id: TypeId) -> Result<Self, CheckError>;
}

impl TypeChecks for Claim<&dyn Any> {
    fn is_instance_of<U: Any>(self) -> Result<Self, CheckError> {
        let holds = self.value().is::<U>();
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }

    fn is_exactly(self, type_id: TypeId) -> Result<Self, CheckError> {
        let holds = (*self.value()).type_id() == type_id;
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

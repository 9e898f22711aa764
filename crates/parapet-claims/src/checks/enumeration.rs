//! Enumeration checks: declared-member validation and bit-flag tests.
//!
//! The [`Enumerated`] bound makes "enum-only validator over a non-enum
//! type" unrepresentable; the remaining runtime misuse — a flag check
//! against an enumeration that declares no flag semantics — is a
//! programmer error and panics rather than returning a `CheckError`.

use std::any::type_name;
use std::fmt;

use crate::claim::Claim;
use crate::error::{CheckError, invalid_operation};

/// Capability of enumeration values: a stable discriminant and the set
/// of declared members.
///
/// Set `FLAGS` to `true` for enumerations whose members are independent
/// bits meant to be combined; only those support the flag checks.
pub trait Enumerated: Copy + fmt::Debug + 'static {
    const FLAGS: bool = false;

    /// The underlying discriminant of this value.
    fn discriminant(self) -> u64;

    /// All declared members, in declaration order.
    fn variants() -> &'static [Self];

    /// Whether this value's discriminant matches a declared member.
    fn is_declared(self) -> bool {
        Self::variants()
            .iter()
            .any(|v| v.discriminant() == self.discriminant())
    }
}

/// Checks over claims holding an [`Enumerated`] value.
pub trait EnumChecks: Sized {
    type Value: Enumerated;

    /// Assert that the value is a declared member of its enumeration.
    fn is_defined(self) -> Result<Self, CheckError>;

    /// Assert that every bit of `flag` is set in the value.
    ///
    /// # Panics
    ///
    /// If the enumeration does not declare flag semantics
    /// (`Enumerated::FLAGS` is `false`). That is API misuse, not a
    /// validation outcome.
    fn has_flag(self, flag: Self::Value) -> Result<Self, CheckError>;

    /// Assert that every listed flag is set in the value.
    ///
    /// # Panics
    ///
    /// Same misuse contract as [`has_flag`](EnumChecks::has_flag).
    fn has_flags(self, flags: &[Self::Value]) -> Result<Self, CheckError>;
}

fn require_flag_semantics<E: Enumerated>() {
    if !E::FLAGS {
        invalid_operation(format!(
            "flag check requires a flags enumeration, `{}` declares none",
            type_name::<E>()
        ));
    }
}

impl<E: Enumerated> EnumChecks for Claim<E> {
    type Value = E;

    fn is_defined(self) -> Result<Self, CheckError> {
        let holds = self.value().is_declared();
        self.judge(holds, |claim, message| CheckError::InvalidEnumValue {
            name: claim.name().to_string(),
            value: format!("{:?}", claim.value()),
            message,
        })
    }

    fn has_flag(self, flag: E) -> Result<Self, CheckError> {
        require_flag_semantics::<E>();
        let wanted = flag.discriminant();
        let holds = self.value().discriminant() & wanted == wanted;
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }

    fn has_flags(self, flags: &[E]) -> Result<Self, CheckError> {
        require_flag_semantics::<E>();
        let combined = flags.iter().fold(0u64, |acc, f| acc | f.discriminant());
        let holds = self.value().discriminant() & combined == combined;
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

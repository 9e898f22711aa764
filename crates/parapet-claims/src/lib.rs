//! # Parapet Claims
//!
//! Defensive-programming checks for function parameters: a function
//! validates its own arguments with a compact, chainable syntax and gets
//! precise, typed failures instead of ad-hoc conditionals.
//!
//! ## Architecture
//!
//! ```text
//! check(value, name)       ← construct a Claim<T>, the chain carrier
//!     │
//! Claim<T>                 ← value + parameter name + one-shot flags
//!     │
//! not() / or_explain()     ← toggle negation / attach a caller message
//!     │                      (each applies to exactly the next check)
//! checks::*                ← one capability trait per value family
//!     │
//! CheckError               ← structured failure naming the parameter
//! ```
//!
//! Every validator consumes the claim by value and returns a fresh claim
//! with the one-shot flags cleared, so a chain is a plain sequence of
//! fallible calls joined with `?`:
//!
//! ```
//! use parapet_claims::prelude::*;
//!
//! fn connect(port: u16, host: &str) -> Result<(), CheckError> {
//!     check(port, "port").is_greater_than(&0)?;
//!     check(host, "host").not().is_empty()?;
//!     Ok(())
//! }
//! ```
//!
//! The first violated predicate terminates the chain; there is no
//! aggregation of multiple violations.

pub mod checks;
pub mod claim;
pub mod error;

pub use claim::{Claim, check};
pub use error::{CheckError, FailureKind, FailureReport};

/// Everything needed to write a check chain: the constructor, the claim
/// type, the failure types, and all validator family traits.
pub mod prelude {
    pub use crate::checks::container::{Container, ContainerChecks};
    pub use crate::checks::enumeration::{EnumChecks, Enumerated};
    pub use crate::checks::general::{DefaultChecks, EquatableChecks, GeneralChecks};
    pub use crate::checks::ident::IdentChecks;
    pub use crate::checks::option::OptionChecks;
    pub use crate::checks::ordered::OrderedChecks;
    pub use crate::checks::text::{OptionTextChecks, TextChecks, TextCompare};
    pub use crate::checks::typed::TypeChecks;
    pub use crate::claim::{Claim, check};
    pub use crate::error::{CheckError, FailureKind, FailureReport};
}

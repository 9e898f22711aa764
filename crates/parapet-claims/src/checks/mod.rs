//! Validator families, one capability trait per value category.
//!
//! Dispatch is static: each family trait is implemented for [`Claim`]
//! under the narrowest bound that supports its predicates, so a claim
//! over a `String` offers the text checks, a claim over a `Vec` offers
//! the container checks, and so on. Import [`crate::prelude`] to bring
//! every family into scope.
//!
//! Every validator follows the same shape: evaluate the family-specific
//! predicate, apply the negation-aware outcome rule, clear the one-shot
//! flags, and return the claim for chaining.
//!
//! [`Claim`]: crate::Claim

pub mod container;
pub mod enumeration;
pub mod general;
pub mod ident;
pub mod option;
pub mod ordered;
pub mod text;
pub mod typed;

//! Parameter-identity resolution for check chains.
//!
//! `parapet-claims` reports failures under a parameter name. This crate
//! recovers that name from a captured reference to the parameter instead
//! of a string literal, so call sites cannot drift out of sync with the
//! names they report. Two strategies, tried in this order of preference:
//!
//! ```text
//!   selector_of! / claim_of!          thunk_of!
//!            |                            |
//!            v                            v
//!     SelectorExpr tree            compiled Thunk body
//!            |                            |
//!      tree walker                 bytecode scanner
//!       (expr.rs)              (bytecode/, metadata.rs)
//!            \                           /
//!             +-----> (value, name) ----+
//!                          |
//!                          v
//!                 parapet_claims::check
//! ```
//!
//! The walker is exact and cheap. The scanner is a best-effort heuristic
//! over the compiled instruction stream; anything it cannot decode with
//! certainty is an error, never a guessed name.
//!
//! ```
//! use parapet_claims::prelude::*;
//! use parapet_resolve::claim_of;
//!
//! struct Config {
//!     retries: u32,
//! }
//!
//! fn apply(config: &Config) -> Result<(), CheckError> {
//!     claim_of!(config.retries)
//!         .expect("field selector")
//!         .is_at_most(&10u32)?;
//!     Ok(())
//! }
//!
//! let err = apply(&Config { retries: 50 }).unwrap_err();
//! assert_eq!(err.parameter(), "retries");
//! ```

pub mod bytecode;
pub mod error;
pub mod expr;
pub mod metadata;
pub mod thunk;

use parapet_claims::{Claim, check};

pub use crate::error::ResolveError;
pub use crate::expr::{CaptureSource, CompiledSelector, FieldCapture, SelectorExpr};
pub use crate::metadata::{FieldHandle, FieldToken, Module, TypeDescriptor, TypeRef};
pub use crate::thunk::Thunk;

/// Resolve a selector tree and begin a check chain under the recovered
/// name.
///
/// The selector must be present, must have the canonical field-access
/// shape, and the captured field must be of type `T`.
pub fn check_selector<T: 'static>(
    selector: Option<&SelectorExpr>,
) -> Result<Claim<T>, ResolveError> {
    let expr = selector.ok_or(ResolveError::NullSelector)?;
    let (value, name) = expr.resolve()?;
    let value = value
        .downcast::<T>()
        .map_err(|_| ResolveError::TypeMismatch { field: name })?;
    Ok(check(*value, name))
}

/// Like [`check_selector`], but the value is obtained by compiling the
/// selector and invoking it. The recovered name and value are identical
/// to the direct walk; this variant exists so the compiled path stays
/// exercised.
pub fn check_compiled<T: 'static>(
    selector: Option<&SelectorExpr>,
) -> Result<Claim<T>, ResolveError> {
    let expr = selector.ok_or(ResolveError::NullSelector)?;
    let compiled = expr.compile()?;
    let value = compiled.invoke().ok_or(ResolveError::InvalidSelector)?;
    let name = compiled.name();
    let value: Box<T> = value
        .downcast()
        .map_err(|_| ResolveError::TypeMismatch { field: name })?;
    Ok(check(*value, name))
}

/// Resolve a captured thunk by scanning its compiled body and begin a
/// check chain under the recovered name.
///
/// The thunk must carry a body, the body must contain a field reference,
/// and the reference must resolve against the thunk's module in the
/// generic-argument context collected from its target descriptor chain.
pub fn check_thunk<T>(thunk: &Thunk<'_, T>) -> Result<Claim<T>, ResolveError> {
    let body = thunk.body().ok_or(ResolveError::UnresolvableMethodBody)?;
    let token = bytecode::scan::find_field_token(body)?;
    if token.is_none() {
        return Err(ResolveError::NoFieldReference);
    }
    let type_args = metadata::collect_type_args(thunk.target());
    let handle = thunk
        .module()
        .resolve_field(token, &type_args, thunk.method_type_args())?;
    Ok(check(thunk.invoke(), handle.name))
}

/// Capture `owner.field` as a selector expression tree.
///
/// Materializes the single-field capture record a compiler would emit
/// for the closure `|| owner.field`. The field's value is cloned into
/// the record at capture time.
#[macro_export]
macro_rules! selector_of {
    ($owner:ident . $field:ident) => {
        $crate::SelectorExpr::field_of(
            $crate::FieldCapture::new(stringify!($field), $owner.$field.clone()),
            stringify!($field),
        )
    };
}

/// Capture `owner.field` and begin a check chain under the field's name,
/// via the tree-walker path.
#[macro_export]
macro_rules! claim_of {
    ($owner:ident . $field:ident) => {{
        let selector = $crate::selector_of!($owner.$field);
        $crate::check_selector(Some(&selector))
    }};
}

/// Capture `owner.field` as a compiled thunk, for the scanner path.
///
/// Assembles the canonical field-read body and a one-row module, so the
/// scanner recovers the same name the walker would.
#[macro_export]
macro_rules! thunk_of {
    ($owner:ident . $field:ident) => {{
        let value = $owner.$field.clone();
        $crate::Thunk::for_field(
            stringify!($field),
            ::std::any::type_name_of_val(&$owner.$field),
            move || value.clone(),
        )
    }};
}

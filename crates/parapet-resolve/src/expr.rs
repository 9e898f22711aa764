//! Selector expression trees and the tree-walking resolver.
//!
//! A selector is the captured form of "read field F of the capture
//! record": a `FieldAccess` node over a `Constant` node holding the
//! record. The walker checks exactly that shape, takes the name from the
//! access node, and reads the value with a single field lookup — no
//! iteration, no instruction decoding. This is the primary, portable
//! resolution strategy; the bytecode scanner exists for captures that
//! carry no tree.
//!
//! The [`selector_of!`](crate::selector_of) macro plays the role a
//! compiler plays elsewhere: it materializes the single-field capture
//! record and the tree from `owner.field` syntax.

use std::any::Any;

use crate::error::ResolveError;

/// Runtime lookup surface of a capture record.
pub trait CaptureSource {
    /// Read a captured field's value by declared name, cloned and erased.
    fn read_field(&self, name: &str) -> Option<Box<dyn Any>>;
}

/// A capture record holding exactly one field, the common case for a
/// parameter check.
pub struct FieldCapture<T: Clone + 'static> {
    name: &'static str,
    value: T,
}

impl<T: Clone + 'static> FieldCapture<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }
}

impl<T: Clone + 'static> CaptureSource for FieldCapture<T> {
    fn read_field(&self, name: &str) -> Option<Box<dyn Any>> {
        (name == self.name).then(|| Box::new(self.value.clone()) as Box<dyn Any>)
    }
}

/// A captured selector expression.
pub enum SelectorExpr {
    /// A compile-time-constant reference to the capture record.
    Constant(Box<dyn CaptureSource>),

    /// Read the named field of the target expression.
    FieldAccess {
        target: Box<SelectorExpr>,
        field: &'static str,
    },

    /// A literal value. Not a valid selector shape; it exists so that
    /// malformed trees are representable and rejected, not unconstructible.
    Literal(Box<dyn Any>),
}

impl SelectorExpr {
    /// The canonical selector: read `field` of `capture`.
    pub fn field_of(capture: impl CaptureSource + 'static, field: &'static str) -> Self {
        SelectorExpr::FieldAccess {
            target: Box::new(SelectorExpr::Constant(Box::new(capture))),
            field,
        }
    }

    /// Walk the tree and produce the `(value, name)` pair.
    ///
    /// The root must be a field access and its target must be the
    /// constant capture record; any other shape does not select a
    /// parameter.
    pub fn resolve(&self) -> Result<(Box<dyn Any>, &'static str), ResolveError> {
        let SelectorExpr::FieldAccess { target, field } = self else {
            return Err(ResolveError::InvalidSelector);
        };
        let SelectorExpr::Constant(capture) = target.as_ref() else {
            return Err(ResolveError::InvalidSelector);
        };
        let value = capture
            .read_field(field)
            .ok_or(ResolveError::InvalidSelector)?;
        Ok((value, field))
    }

    /// Compile the selector into an invokable form.
    ///
    /// Shape-checked exactly like [`resolve`](SelectorExpr::resolve), but
    /// the value is obtained by invoking the compiled selector. Used by
    /// the correctness-validation variant; the default path reads the
    /// field directly.
    pub fn compile(&self) -> Result<CompiledSelector<'_>, ResolveError> {
        let SelectorExpr::FieldAccess { target, field } = self else {
            return Err(ResolveError::InvalidSelector);
        };
        let SelectorExpr::Constant(capture) = target.as_ref() else {
            return Err(ResolveError::InvalidSelector);
        };
        Ok(CompiledSelector {
            name: field,
            invoke: Box::new(move || capture.read_field(field)),
        })
    }
}

/// An executable selector produced by [`SelectorExpr::compile`].
pub struct CompiledSelector<'a> {
    name: &'static str,
    invoke: Box<dyn Fn() -> Option<Box<dyn Any>> + 'a>,
}

impl CompiledSelector<'_> {
    /// The selected field's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the selector, producing the field's value.
    pub fn invoke(&self) -> Option<Box<dyn Any>> {
        (self.invoke)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_canonical_shape() {
        let expr = SelectorExpr::field_of(FieldCapture::new("timeout", 250u64), "timeout");
        let (value, name) = expr.resolve().unwrap();
        assert_eq!(name, "timeout");
        assert_eq!(*value.downcast::<u64>().unwrap(), 250);
    }

    #[test]
    fn rejects_a_bare_constant() {
        let expr = SelectorExpr::Constant(Box::new(FieldCapture::new("x", 1)));
        assert_eq!(expr.resolve().unwrap_err(), ResolveError::InvalidSelector);
    }

    #[test]
    fn rejects_a_literal_root() {
        let expr = SelectorExpr::Literal(Box::new(42));
        assert_eq!(expr.resolve().unwrap_err(), ResolveError::InvalidSelector);
    }

    #[test]
    fn rejects_field_access_on_a_non_constant_target() {
        let expr = SelectorExpr::FieldAccess {
            target: Box::new(SelectorExpr::Literal(Box::new(42))),
            field: "x",
        };
        assert_eq!(expr.resolve().unwrap_err(), ResolveError::InvalidSelector);
    }

    #[test]
    fn rejects_a_name_the_capture_does_not_declare() {
        let expr = SelectorExpr::FieldAccess {
            target: Box::new(SelectorExpr::Constant(Box::new(FieldCapture::new("x", 1)))),
            field: "y",
        };
        assert_eq!(expr.resolve().unwrap_err(), ResolveError::InvalidSelector);
    }

    #[test]
    fn compiled_variant_agrees_with_the_direct_read() {
        let expr = SelectorExpr::field_of(FieldCapture::new("limit", 9i32), "limit");

        let (direct, name) = expr.resolve().unwrap();
        let compiled = expr.compile().unwrap();
        assert_eq!(compiled.name(), name);

        let invoked = compiled.invoke().unwrap();
        assert_eq!(
            *direct.downcast::<i32>().unwrap(),
            *invoked.downcast::<i32>().unwrap()
        );
    }
}

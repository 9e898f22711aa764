//! Captured zero-argument thunks and their canonical compiled form.
//!
//! A [`Thunk`] is what a caller hands the scanner when no selector tree
//! is available: an invokable getter plus the metadata the scanner needs
//! to recover the field's declared name — the compiled instruction
//! stream, the defining module, and the capture's runtime type
//! descriptor (whose ancestry supplies the generic-argument context).
//!
//! The [`thunk_of!`](crate::thunk_of) macro assembles the canonical body
//! for `owner.field` syntax; [`Thunk::opaque`] models a capture the
//! runtime provides no body for.

use crate::bytecode::opcode::op;
use crate::metadata::{FieldToken, Module, TypeDescriptor, TypeRef};

/// A captured zero-argument function returning the value to validate.
pub struct Thunk<'a, T> {
    get: Box<dyn Fn() -> T + 'a>,
    body: Option<Vec<u8>>,
    module: Module,
    target: TypeDescriptor,
    method_type_args: Vec<TypeRef>,
}

impl<'a, T> Thunk<'a, T> {
    /// Build the canonical single-field capture: a one-row module, a
    /// capture descriptor whose sole generic argument is the field's
    /// type, and the compiled body reading that field.
    pub fn for_field(field: &str, type_name: &'static str, get: impl Fn() -> T + 'a) -> Self {
        let mut module = Module::new();
        let token = module.define_field(field, TypeRef::Var(0));
        let target = TypeDescriptor::new("<capture>", vec![TypeRef::Named(type_name)]);
        Self {
            get: Box::new(get),
            body: Some(assemble_field_read(token)),
            module,
            target,
            method_type_args: Vec::new(),
        }
    }

    /// A capture with no recoverable instruction stream, as the runtime
    /// produces for intrinsics. Scanning it fails; only invocation works.
    pub fn opaque(get: impl Fn() -> T + 'a) -> Self {
        Self {
            get: Box::new(get),
            body: None,
            module: Module::new(),
            target: TypeDescriptor::new("<capture>", Vec::new()),
            method_type_args: Vec::new(),
        }
    }

    /// Replace the compiled body. Test and bench surface.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace the defining module. Test and bench surface.
    pub fn with_module(mut self, module: Module) -> Self {
        self.module = module;
        self
    }

    /// Replace the capture's type descriptor. Test and bench surface.
    pub fn with_target(mut self, target: TypeDescriptor) -> Self {
        self.target = target;
        self
    }

    /// Set the capturing function's own generic arguments.
    pub fn with_method_type_args(mut self, args: Vec<TypeRef>) -> Self {
        self.method_type_args = args;
        self
    }

    /// The compiled instruction stream, if the runtime provides one.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// The module field tokens resolve against.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// The capture record's runtime type.
    pub fn target(&self) -> &TypeDescriptor {
        &self.target
    }

    /// The capturing function's own generic arguments.
    pub fn method_type_args(&self) -> &[TypeRef] {
        &self.method_type_args
    }

    /// Invoke the captured function, producing the value to validate.
    pub fn invoke(&self) -> T {
        (self.get)()
    }
}

/// The canonical compiled form of "read field F of the capture object":
/// load the capture reference, load the field, return.
pub fn assemble_field_read(token: FieldToken) -> Vec<u8> {
    let mut body = vec![op::NOP, op::LDARG_0, op::LDFLD];
    body.extend_from_slice(&token.to_le_bytes());
    body.push(op::RET);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::scan::find_field_token;

    #[test]
    fn canonical_body_scans_back_to_its_token() {
        let token = FieldToken::field(5);
        let body = assemble_field_read(token);
        assert_eq!(find_field_token(&body).unwrap(), token);
    }

    #[test]
    fn for_field_wires_module_body_and_descriptor_together() {
        let thunk = Thunk::for_field("retries", "u32", || 3u32);
        assert_eq!(thunk.invoke(), 3);

        let token = find_field_token(thunk.body().unwrap()).unwrap();
        let handle = thunk
            .module()
            .resolve_field(token, &thunk.target().type_args, &[])
            .unwrap();
        assert_eq!(handle.name, "retries");
        assert_eq!(handle.type_name, "u32");
    }

    #[test]
    fn opaque_thunks_have_no_body() {
        let thunk = Thunk::opaque(|| 1);
        assert!(thunk.body().is_none());
        assert_eq!(thunk.invoke(), 1);
    }
}

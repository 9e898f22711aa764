//! Field-token metadata: modules, tokens, type descriptors, and the
//! generic-argument context used to resolve a token to a field handle.
//!
//! A token is a 32-bit metadata reference embedded in an instruction
//! operand: the high byte tags the defining table, the low three bytes are
//! a 1-based row index. `0` denotes "no field". Field signatures may refer
//! to generic variables, which resolve against an argument context
//! collected from the capture's type descriptor chain (most-derived type
//! first) and from the capturing function's own generic arguments.

use crate::error::ResolveError;

/// Table tag for field definitions (high byte of a token).
pub const FIELD_TABLE: u8 = 0x04;

/// A 32-bit metadata reference to a field of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldToken(pub i32);

impl FieldToken {
    /// The "not found" token.
    pub const NONE: FieldToken = FieldToken(0);

    /// Build a field-table token from a 1-based row index.
    pub fn field(index: u32) -> Self {
        FieldToken((((FIELD_TABLE as u32) << 24) | (index & 0x00FF_FFFF)) as i32)
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The table tag in the high byte.
    pub fn table(self) -> u8 {
        ((self.0 as u32) >> 24) as u8
    }

    /// The 1-based row index in the low three bytes.
    pub fn index(self) -> u32 {
        (self.0 as u32) & 0x00FF_FFFF
    }

    /// The operand encoding: four little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// A type reference as it appears in a field signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A concrete type name.
    Named(&'static str),

    /// A class-level generic variable: an index into the argument context
    /// collected from the type descriptor chain.
    Var(usize),

    /// A method-level generic variable: an index into the capturing
    /// function's own generic arguments.
    MethodVar(usize),
}

/// A field row in a module's metadata.
#[derive(Debug, Clone)]
pub struct FieldMetadata {
    pub name: String,
    pub signature: TypeRef,
}

/// The defining module: the table a field token resolves against.
#[derive(Debug, Clone, Default)]
pub struct Module {
    fields: Vec<FieldMetadata>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field row and return its token.
    pub fn define_field(&mut self, name: impl Into<String>, signature: TypeRef) -> FieldToken {
        self.fields.push(FieldMetadata {
            name: name.into(),
            signature,
        });
        FieldToken::field(self.fields.len() as u32)
    }

    /// Resolve a token to a field handle, materializing any generic
    /// variables in its signature against the supplied argument contexts.
    pub fn resolve_field(
        &self,
        token: FieldToken,
        type_args: &[TypeRef],
        method_args: &[TypeRef],
    ) -> Result<FieldHandle, ResolveError> {
        if token.table() != FIELD_TABLE || token.index() == 0 {
            return Err(ResolveError::UnknownToken { token: token.0 });
        }
        let row = self
            .fields
            .get(token.index() as usize - 1)
            .ok_or(ResolveError::UnknownToken { token: token.0 })?;

        let type_name = materialize(&row.signature, type_args, method_args)?;
        Ok(FieldHandle {
            name: row.name.clone(),
            type_name,
        })
    }
}

/// Substitute generic variables until a concrete name remains.
///
/// An acyclic forwarding chain visits each context entry at most once,
/// so any longer walk must have looped back on itself.
fn materialize(
    signature: &TypeRef,
    type_args: &[TypeRef],
    method_args: &[TypeRef],
) -> Result<&'static str, ResolveError> {
    let budget = type_args.len() + method_args.len();
    let mut current = signature;
    for _ in 0..=budget {
        match current {
            TypeRef::Named(name) => return Ok(name),
            TypeRef::Var(index) => {
                current = type_args.get(*index).ok_or(ResolveError::GenericArgOutOfRange {
                    index: *index,
                    available: type_args.len(),
                })?;
            }
            TypeRef::MethodVar(index) => {
                current = method_args
                    .get(*index)
                    .ok_or(ResolveError::GenericArgOutOfRange {
                        index: *index,
                        available: method_args.len(),
                    })?;
            }
        }
    }
    Err(ResolveError::CyclicGenericContext)
}

/// A resolved field identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHandle {
    /// The field's declared name.
    pub name: String,

    /// The concrete name of the field's type after substitution.
    pub type_name: &'static str,
}

/// The runtime type of a capture record, with its ancestry.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: String,
    pub type_args: Vec<TypeRef>,
    pub base: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, type_args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            type_args,
            base: None,
        }
    }

    pub fn with_base(mut self, base: TypeDescriptor) -> Self {
        self.base = Some(Box::new(base));
        self
    }
}

/// Collect the ordered generic-argument context for a descriptor: the
/// descriptor's own arguments first, then each ancestor's in turn
/// (most-derived first).
pub fn collect_type_args(descriptor: &TypeDescriptor) -> Vec<TypeRef> {
    let mut args = Vec::new();
    let mut current = Some(descriptor);
    while let Some(d) = current {
        args.extend(d.type_args.iter().cloned());
        current = d.base.as_deref();
    }
    args
}

//! Resolution failures.
//!
//! These are caller-facing and recoverable in exactly one sense: a caller
//! that cannot resolve a name must fall back to an explicit one. The
//! resolver never falls back silently.

/// Why a captured reference could not be resolved to a `(value, name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The selector expression itself was absent.
    #[error("selector expression is absent")]
    NullSelector,

    /// The selector's shape is not "read one field of the captured record".
    #[error("selector must select a parameter (a field access on the captured record)")]
    InvalidSelector,

    /// The captured field exists but is not of the requested type.
    #[error("captured field `{field}` is not of the requested type")]
    TypeMismatch { field: &'static str },

    /// The captured function carries no compiled instruction stream.
    /// Callers must fall back to explicit naming.
    #[error("no method body is available for the captured function")]
    UnresolvableMethodBody,

    /// The instruction stream was scanned to exhaustion without a field
    /// reference.
    #[error("no field reference found in the instruction stream")]
    NoFieldReference,

    /// An opcode outside the set a capture thunk can contain. The scanner
    /// is a best-effort heuristic and refuses to guess.
    #[error("unsupported instruction 0x{opcode:04x} at offset {offset}")]
    UnsupportedInstruction { opcode: u16, offset: usize },

    /// The stream ended in the middle of an instruction or its operand.
    #[error("instruction stream truncated at offset {offset}")]
    TruncatedStream { offset: usize },

    /// The field token does not name a field of the defining module.
    #[error("token 0x{token:08x} does not resolve to a field in this module")]
    UnknownToken { token: i32 },

    /// A generic-variable index in a field signature exceeds the collected
    /// type-argument context.
    #[error("generic argument index {index} out of range ({available} available)")]
    GenericArgOutOfRange { index: usize, available: usize },

    /// Generic-variable forwarding in the argument context loops back on
    /// itself, so substitution can never reach a concrete name.
    #[error("generic argument context is cyclic, substitution does not terminate")]
    CyclicGenericContext,
}

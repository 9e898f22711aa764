//! Best-effort recovery of a captured field's identity from a compiled
//! instruction stream.
//!
//! This is the fallback resolution strategy for captures that carry no
//! selector expression. It is heuristic by design: it assumes the
//! canonical "load capture, load field, return" shape and reports
//! anything outside the supported instruction set as unsupported instead
//! of miscomputing a name.

pub mod opcode;
pub mod scan;

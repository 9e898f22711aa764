//! Instruction-set metadata for the thunk scanner.
//!
//! The instruction stream uses single-byte opcodes plus a prefix byte
//! that selects a second opcode page, modeled on the ECMA-335 layout.
//! The scanner only needs each opcode's operand category, so this table
//! records nothing else; coverage is the instruction families a capture
//! thunk can plausibly contain, not a 1:1 port of the full set. Anything
//! outside it is reported as unsupported rather than guessed at.
//!
//! The table is process-wide immutable metadata, built once behind an
//! idempotent lazy-init guard and shared read-only thereafter.

use std::sync::OnceLock;

/// The prefix byte selecting the extended opcode page.
pub const PREFIX: u8 = 0xFE;

/// Operand categories, each with a fixed byte width except switch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand.
    None,
    /// 1-byte branch displacement.
    ShortBranch,
    /// 1-byte immediate.
    ShortImmediate,
    /// 1-byte local/argument slot.
    ShortSlot,
    /// 2-byte local/argument slot.
    Slot,
    /// 4-byte field reference. The one the scanner is after.
    Field,
    /// 4-byte method reference.
    Method,
    /// 4-byte type reference.
    Type,
    /// 4-byte standalone metadata token.
    Token,
    /// 4-byte string reference.
    String,
    /// 4-byte branch displacement.
    Branch,
    /// 4-byte immediate.
    Immediate4,
    /// 4-byte float.
    Float4,
    /// 8-byte immediate.
    Immediate8,
    /// 8-byte float.
    Float8,
    /// Variable-width jump table. Never produced by capture thunks;
    /// the scanner refuses it rather than guessing a width.
    Switch,
}

impl OperandKind {
    /// Fixed operand width in bytes; `None` for the variable-width switch.
    pub fn width(self) -> Option<usize> {
        match self {
            OperandKind::None => Some(0),
            OperandKind::ShortBranch | OperandKind::ShortImmediate | OperandKind::ShortSlot => {
                Some(1)
            }
            OperandKind::Slot => Some(2),
            OperandKind::Field
            | OperandKind::Method
            | OperandKind::Type
            | OperandKind::Token
            | OperandKind::String
            | OperandKind::Branch
            | OperandKind::Immediate4
            | OperandKind::Float4 => Some(4),
            OperandKind::Immediate8 | OperandKind::Float8 => Some(8),
            OperandKind::Switch => None,
        }
    }
}

/// Which opcode page a byte was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Primary,
    Extended,
}

/// Mnemonics for the opcodes the assembler and tests spell out.
pub mod op {
    pub const NOP: u8 = 0x00;
    pub const LDARG_0: u8 = 0x02;
    pub const LDC_I4_S: u8 = 0x1F;
    pub const LDC_I4: u8 = 0x20;
    pub const LDC_I8: u8 = 0x21;
    pub const DUP: u8 = 0x25;
    pub const CALL: u8 = 0x28;
    pub const RET: u8 = 0x2A;
    pub const BR_S: u8 = 0x2B;
    pub const BR: u8 = 0x38;
    pub const SWITCH: u8 = 0x45;
    pub const LDSTR: u8 = 0x72;
    pub const LDFLD: u8 = 0x7B;
    pub const LDFLDA: u8 = 0x7C;
    pub const STFLD: u8 = 0x7D;
    pub const LDSFLD: u8 = 0x7E;
    pub const LDTOKEN: u8 = 0xD0;
}

struct OpcodeTables {
    primary: [Option<OperandKind>; 256],
    extended: [Option<OperandKind>; 256],
}

static TABLES: OnceLock<OpcodeTables> = OnceLock::new();

/// Look up the operand category of an opcode, `None` if the opcode is
/// outside the supported set.
pub fn operand_kind(page: Page, opcode: u8) -> Option<OperandKind> {
    let tables = TABLES.get_or_init(build_tables);
    match page {
        Page::Primary => tables.primary[opcode as usize],
        Page::Extended => tables.extended[opcode as usize],
    }
}

fn fill(
    table: &mut [Option<OperandKind>; 256],
    range: std::ops::RangeInclusive<u8>,
    kind: OperandKind,
) {
    for opcode in range {
        table[opcode as usize] = Some(kind);
    }
}

fn build_tables() -> OpcodeTables {
    let mut primary = [None; 256];
    let mut extended = [None; 256];
    let p = &mut primary;

    // Stack shuffles, constant loads, arithmetic: no operand.
    fill(p, 0x00..=0x0D, OperandKind::None); // nop .. stloc.3
    fill(p, 0x0E..=0x13, OperandKind::ShortSlot); // ldarg.s .. stloc.s
    fill(p, 0x14..=0x1E, OperandKind::None); // ldnull, ldc.i4.m1 .. ldc.i4.8
    p[0x1F] = Some(OperandKind::ShortImmediate); // ldc.i4.s
    p[0x20] = Some(OperandKind::Immediate4); // ldc.i4
    p[0x21] = Some(OperandKind::Immediate8); // ldc.i8
    p[0x22] = Some(OperandKind::Float4); // ldc.r4
    p[0x23] = Some(OperandKind::Float8); // ldc.r8
    fill(p, 0x25..=0x26, OperandKind::None); // dup, pop

    // Calls and returns.
    fill(p, 0x27..=0x28, OperandKind::Method); // jmp, call
    p[0x29] = Some(OperandKind::Token); // indirect call signature
    p[0x2A] = Some(OperandKind::None); // ret

    // Branches, then the jump table.
    fill(p, 0x2B..=0x37, OperandKind::ShortBranch);
    fill(p, 0x38..=0x44, OperandKind::Branch);
    p[0x45] = Some(OperandKind::Switch);

    // Indirect loads/stores, arithmetic, conversions.
    fill(p, 0x46..=0x6E, OperandKind::None);

    p[0x6F] = Some(OperandKind::Method); // virtual call
    fill(p, 0x70..=0x71, OperandKind::Type); // cpobj, ldobj
    p[0x72] = Some(OperandKind::String); // ldstr
    p[0x73] = Some(OperandKind::Method); // newobj
    fill(p, 0x74..=0x75, OperandKind::Type); // castclass, isinst
    p[0x76] = Some(OperandKind::None);
    p[0x79] = Some(OperandKind::Type); // unbox
    p[0x7A] = Some(OperandKind::None); // throw

    // Field accesses: the family the scanner is looking for.
    fill(p, 0x7B..=0x80, OperandKind::Field); // ldfld .. stsfld

    p[0x81] = Some(OperandKind::Type); // stobj
    fill(p, 0x82..=0x8B, OperandKind::None); // checked conversions
    p[0x8C] = Some(OperandKind::Type); // box
    p[0x8D] = Some(OperandKind::Type); // newarr
    p[0x8E] = Some(OperandKind::None); // ldlen
    p[0x8F] = Some(OperandKind::Type); // ldelema
    fill(p, 0x90..=0xA2, OperandKind::None); // element loads/stores
    fill(p, 0xA3..=0xA5, OperandKind::Type); // ldelem, stelem, unbox.any
    fill(p, 0xB3..=0xBA, OperandKind::None); // checked conversions
    p[0xC2] = Some(OperandKind::Type); // refanyval
    p[0xC3] = Some(OperandKind::None); // ckfinite
    p[0xC6] = Some(OperandKind::Type); // mkrefany
    p[0xD0] = Some(OperandKind::Token); // ldtoken
    fill(p, 0xD1..=0xDC, OperandKind::None); // conversions, checked arith, endfinally
    p[0xDD] = Some(OperandKind::Branch); // leave
    p[0xDE] = Some(OperandKind::ShortBranch); // leave.s
    fill(p, 0xDF..=0xE0, OperandKind::None); // stind.i, conv.u

    let x = &mut extended;
    fill(x, 0x00..=0x05, OperandKind::None); // arglist, comparisons
    fill(x, 0x06..=0x07, OperandKind::Method); // ldftn, ldvirtftn
    fill(x, 0x09..=0x0E, OperandKind::Slot); // wide ldarg .. stloc
    x[0x0F] = Some(OperandKind::None); // localloc
    x[0x11] = Some(OperandKind::None); // endfilter
    x[0x12] = Some(OperandKind::ShortImmediate); // unaligned.
    fill(x, 0x13..=0x14, OperandKind::None); // volatile., tail.
    fill(x, 0x15..=0x16, OperandKind::Type); // initobj, constrained.
    fill(x, 0x17..=0x18, OperandKind::None); // cpblk, initblk
    x[0x19] = Some(OperandKind::ShortImmediate); // no.
    x[0x1A] = Some(OperandKind::None); // rethrow
    x[0x1C] = Some(OperandKind::Type); // sizeof
    fill(x, 0x1D..=0x1E, OperandKind::None); // refanytype, readonly.

    OpcodeTables { primary, extended }
}

//! Linear scan of a compiled thunk body for its first field reference.
//!
//! A capture compiled as "read this field" is a short, predictable
//! sequence ending in a single field load, so finding the first
//! field-reference operand is sufficient; a full decoder is not needed.
//! The scan decodes just enough of each instruction to step over its
//! operand, and stops at the first operand in the field category.

use crate::bytecode::opcode::{self, OperandKind, Page};
use crate::error::ResolveError;
use crate::metadata::FieldToken;

/// Scan `body` from offset 0 and return the first field token, or
/// [`FieldToken::NONE`] if the stream is exhausted without one.
pub fn find_field_token(body: &[u8]) -> Result<FieldToken, ResolveError> {
    let mut offset = 0usize;
    while offset < body.len() {
        let start = offset;

        let (page, byte) = if body[offset] == opcode::PREFIX {
            offset += 1;
            let second = *body
                .get(offset)
                .ok_or(ResolveError::TruncatedStream { offset: start })?;
            (Page::Extended, second)
        } else {
            (Page::Primary, body[offset])
        };
        offset += 1;

        let raw = match page {
            Page::Primary => byte as u16,
            Page::Extended => 0xFE00 | byte as u16,
        };
        let kind = opcode::operand_kind(page, byte).ok_or(ResolveError::UnsupportedInstruction {
            opcode: raw,
            offset: start,
        })?;

        // Variable-width jump tables are outside the sequences a capture
        // can compile to; refuse rather than guess.
        let width = kind.width().ok_or(ResolveError::UnsupportedInstruction {
            opcode: raw,
            offset: start,
        })?;

        if offset + width > body.len() {
            return Err(ResolveError::TruncatedStream { offset: start });
        }

        if kind == OperandKind::Field {
            let bytes: [u8; 4] = body[offset..offset + 4]
                .try_into()
                .expect("field operand width is 4");
            return Ok(FieldToken(i32::from_le_bytes(bytes)));
        }

        offset += width;
    }
    Ok(FieldToken::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcode::op;

    fn with_token(prefix: &[u8], load: u8, token: FieldToken, suffix: &[u8]) -> Vec<u8> {
        let mut body = prefix.to_vec();
        body.push(load);
        body.extend_from_slice(&token.to_le_bytes());
        body.extend_from_slice(suffix);
        body
    }

    #[test]
    fn finds_the_canonical_capture_sequence() {
        let token = FieldToken::field(1);
        let body = with_token(&[op::NOP, op::LDARG_0], op::LDFLD, token, &[op::RET]);
        assert_eq!(find_field_token(&body).unwrap(), token);
    }

    #[test]
    fn steps_over_mixed_width_operands() {
        let token = FieldToken::field(7);
        // ldc.i4.s 5; ldc.i8 <8 bytes>; br.s +0; then the field load.
        let mut body = vec![op::LDC_I4_S, 0x05, op::LDC_I8];
        body.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
        body.extend_from_slice(&[op::BR_S, 0x00]);
        body.push(op::LDFLD);
        body.extend_from_slice(&token.to_le_bytes());
        body.push(op::RET);
        assert_eq!(find_field_token(&body).unwrap(), token);
    }

    #[test]
    fn ignores_token_bytes_inside_other_operands() {
        // A 4-byte immediate whose bytes spell a plausible field token
        // must not be mistaken for one.
        let decoy = FieldToken::field(1);
        let mut body = vec![op::LDC_I4];
        body.extend_from_slice(&decoy.to_le_bytes());
        body.push(op::RET);
        assert_eq!(find_field_token(&body).unwrap(), FieldToken::NONE);
    }

    #[test]
    fn first_field_reference_wins() {
        let first = FieldToken::field(1);
        let second = FieldToken::field(2);
        let mut body = with_token(&[op::LDARG_0], op::LDFLD, first, &[]);
        body.push(op::STFLD);
        body.extend_from_slice(&second.to_le_bytes());
        body.push(op::RET);
        assert_eq!(find_field_token(&body).unwrap(), first);
    }

    #[test]
    fn extended_page_operands_are_stepped_over() {
        let token = FieldToken::field(2);
        // Wide ldarg (2-byte slot), then the field load.
        let mut body = vec![opcode::PREFIX, 0x09, 0x00, 0x00];
        body.push(op::LDFLD);
        body.extend_from_slice(&token.to_le_bytes());
        body.push(op::RET);
        assert_eq!(find_field_token(&body).unwrap(), token);
    }

    #[test]
    fn exhausted_stream_yields_no_field() {
        assert_eq!(
            find_field_token(&[op::NOP, op::LDARG_0, op::RET]).unwrap(),
            FieldToken::NONE
        );
        assert_eq!(find_field_token(&[]).unwrap(), FieldToken::NONE);
    }

    #[test]
    fn switch_is_refused_not_guessed() {
        let err = find_field_token(&[op::NOP, op::SWITCH, 0x01, 0x00]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedInstruction {
                opcode: op::SWITCH as u16,
                offset: 1
            }
        );
    }

    #[test]
    fn unknown_opcode_is_refused() {
        let err = find_field_token(&[0xF7]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedInstruction {
                opcode: 0xF7,
                offset: 0
            }
        );
    }

    #[test]
    fn truncation_is_detected() {
        // ldfld with only two of its four operand bytes.
        let err = find_field_token(&[op::LDFLD, 0x01, 0x00]).unwrap_err();
        assert_eq!(err, ResolveError::TruncatedStream { offset: 0 });

        // A dangling prefix byte.
        let err = find_field_token(&[opcode::PREFIX]).unwrap_err();
        assert_eq!(err, ResolveError::TruncatedStream { offset: 0 });
    }
}

// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! UTF-8 and its conversion with EUC-JP.
//!
//! The JIS X 0213 repertoire is wide and sparse when viewed from Unicode,
//! so the UTF-8 direction does not decode to a scalar value first: the
//! hierarchical tables in `jconv_index_jisx0213::ucs_to_eucj` are keyed
//! directly by the UTF-8 bytes. The opposite direction goes through the
//! plane tables in `eucj_to_ucs`, whose entries are either a scalar value
//! or a packed base-plus-combining-mark pair.
//!
//! The pair entries make this direction asymmetric: one EUC-JP character
//! can expand into two Unicode characters (e.g. 1-4-87 becomes U+304B
//! U+309A), and converting that output back yields the two characters'
//! individual mappings rather than the original. This is a known
//! limitation carried over from the table design.

use super::{emit, need, EUCJ_SUBST, UTF8_SUBST};
use crate::types::{ConvError, ConvResult, Converted};
use jconv_index_jisx0213::{eucj_to_ucs, ucs_to_eucj};

/// Converts one UTF-8 character to EUC-JP.
///
/// The width declared by the lead byte is checked before anything else, so
/// a truncated sequence reports `InputNotEnough` even for the 5- and
/// 6-byte lead forms that can never carry a mapped character.
pub fn utf8_to_eucj(input: &[u8], output: &mut [u8]) -> ConvResult {
    need(input, 1)?;
    let u0 = input[0];
    match u0 {
        0x00..=0x7f => emit(&[u0], 1, output),
        // no valid UTF-8 sequence starts with a continuation byte
        0x80..=0xbf => Err(ConvError::IllegalSequence),
        0xc0..=0xdf => {
            need(input, 2)?;
            let u1 = continuation(input[1])?;
            match (u0, u1) {
                // sole entries of their lead pages, not worth a table
                (0xc6, 0x93) => emit_euc(0xaba9, 2, output), // U+0193
                (0xcd, 0xa1) => emit_euc(0xabd2, 2, output), // U+0361
                _ => emit_euc(ucs_to_eucj::two_byte(u0, u1), 2, output),
            }
        }
        0xe0..=0xef => {
            need(input, 3)?;
            let u1 = continuation(input[1])?;
            let u2 = continuation(input[2])?;
            emit_euc(ucs_to_eucj::three_byte(u0, u1, u2), 3, output)
        }
        0xf0..=0xf7 => {
            need(input, 4)?;
            let u1 = continuation(input[1])?;
            let u2 = continuation(input[2])?;
            let u3 = continuation(input[3])?;
            let entry = if u0 == 0xf0 {
                ucs_to_eucj::four_byte(u1, (u2 as u16) << 8 | u3 as u16)
            } else {
                0 // beyond U+3FFFF, nothing is mapped
            };
            emit_euc(entry, 4, output)
        }
        // 5- and 6-byte lead forms carry no valid scalar value; consume
        // them whole and substitute
        0xf8..=0xfb => {
            need(input, 5)?;
            emit(&EUCJ_SUBST, 5, output)
        }
        0xfc..=0xfd => {
            need(input, 6)?;
            emit(&EUCJ_SUBST, 6, output)
        }
        _ => Err(ConvError::IllegalSequence), // FE, FF
    }
}

/// Converts one EUC-JP character to UTF-8.
pub fn eucj_to_utf8(input: &[u8], output: &mut [u8]) -> ConvResult {
    need(input, 1)?;
    let e0 = input[0];
    match e0 {
        0x00..=0x7f => emit(&[e0], 1, output),
        0x8e => {
            // JIS X 0201 kana, a fixed offset into the U+FF61 range
            need(input, 2)?;
            let e1 = input[1];
            if !matches!(e1, 0xa1..=0xdf) {
                return Err(ConvError::IllegalSequence);
            }
            emit_ucs(0xff61 + (e1 - 0xa1) as u32, 2, output)
        }
        0x8f => {
            need(input, 3)?;
            let (e1, e2) = (input[1], input[2]);
            if !matches!(e1, 0xa1..=0xfe) || !matches!(e2, 0xa1..=0xfe) {
                return Err(ConvError::IllegalSequence);
            }
            emit_entry(eucj_to_ucs::plane2(e1, e2), 3, output)
        }
        0xa1..=0xfe => {
            need(input, 2)?;
            let e1 = input[1];
            if !matches!(e1, 0xa1..=0xfe) {
                return Err(ConvError::IllegalSequence);
            }
            emit_entry(eucj_to_ucs::plane1(e0, e1), 2, output)
        }
        // C1 range other than 8E/8F keeps its scalar value
        0x80..=0x9f => emit_ucs(e0 as u32, 1, output),
        _ => Err(ConvError::IllegalSequence), // A0, FF
    }
}

/// Validates a continuation byte, passing it through.
fn continuation(b: u8) -> Result<u8, ConvError> {
    if matches!(b, 0x80..=0xbf) {
        Ok(b)
    } else {
        Err(ConvError::IllegalSequence)
    }
}

/// Emits the EUC-JP form of a `ucs_to_eucj` table entry: 0 substitutes,
/// entries below 0x8000 are plane-2 characters behind the `8F` lead, and
/// the rest hold the two raw EUC-JP bytes.
fn emit_euc(entry: u16, consumed: usize, output: &mut [u8]) -> ConvResult {
    if entry == 0 {
        emit(&EUCJ_SUBST, consumed, output)
    } else if entry < 0x8000 {
        emit(&[0x8f, (entry >> 8) as u8 + 0x80, entry as u8], consumed, output)
    } else {
        emit(&[(entry >> 8) as u8, entry as u8], consumed, output)
    }
}

/// Emits the UTF-8 form of an `eucj_to_ucs` table entry, which is either a
/// scalar value or a packed pair of them (base character then combining
/// mark, written as two consecutive sequences or not at all).
fn emit_entry(entry: u32, consumed: usize, output: &mut [u8]) -> ConvResult {
    if entry < 0x110000 {
        emit_ucs(entry, consumed, output)
    } else {
        match (char::from_u32(entry >> 16), char::from_u32(entry & 0xffff)) {
            (Some(base), Some(mark)) => {
                let total = base.len_utf8() + mark.len_utf8();
                if output.len() < total {
                    return Err(ConvError::OutputNotEnough);
                }
                let split = base.encode_utf8(output).len();
                mark.encode_utf8(&mut output[split..]);
                Ok(Converted { consumed, written: total })
            }
            _ => emit(&UTF8_SUBST, consumed, output),
        }
    }
}

/// Emits one Unicode scalar value as UTF-8; 0 marks an unmapped table cell
/// and substitutes.
fn emit_ucs(ucs: u32, consumed: usize, output: &mut [u8]) -> ConvResult {
    if ucs == 0 {
        return emit(&UTF8_SUBST, consumed, output);
    }
    match char::from_u32(ucs) {
        Some(ch) => {
            let width = ch.len_utf8();
            if output.len() < width {
                return Err(ConvError::OutputNotEnough);
            }
            ch.encode_utf8(output);
            Ok(Converted { consumed, written: width })
        }
        None => emit(&UTF8_SUBST, consumed, output),
    }
}

#[cfg(test)]
mod tests {
    use super::{eucj_to_utf8, utf8_to_eucj};
    use crate::types::{ConvError, Converted};

    fn ok(consumed: usize, written: usize) -> Result<Converted, ConvError> {
        Ok(Converted { consumed, written })
    }

    #[test]
    fn test_ascii_passthrough() {
        let mut out = [0u8; 4];
        for b in 0x00..=0x7fu8 {
            assert_eq!(utf8_to_eucj(&[b], &mut out), ok(1, 1));
            assert_eq!(out[0], b);
            assert_eq!(eucj_to_utf8(&[b], &mut out), ok(1, 1));
            assert_eq!(out[0], b);
        }
    }

    #[test]
    fn test_utf8_to_eucj_plane1() {
        let mut out = [0u8; 4];
        // U+3042
        assert_eq!(utf8_to_eucj(&[0xe3, 0x81, 0x82], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0xa4, 0xa2]);
        // U+00A7
        assert_eq!(utf8_to_eucj(&[0xc2, 0xa7], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa1, 0xf8]);
        // U+FF61 maps to the kana lead
        assert_eq!(utf8_to_eucj(&[0xef, 0xbd, 0xa1], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0x8e, 0xa1]);
    }

    #[test]
    fn test_utf8_to_eucj_plane2() {
        let mut out = [0u8; 4];
        // U+20089, plane 2 character 2-1-1
        assert_eq!(utf8_to_eucj(&[0xf0, 0xa0, 0x82, 0x89], &mut out), ok(4, 3));
        assert_eq!(&out[..3], &[0x8f, 0xa1, 0xa1]);
    }

    #[test]
    fn test_utf8_to_eucj_hardcoded_codepoints() {
        let mut out = [0u8; 4];
        // U+0193
        assert_eq!(utf8_to_eucj(&[0xc6, 0x93], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xab, 0xa9]);
        // U+0361
        assert_eq!(utf8_to_eucj(&[0xcd, 0xa1], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xab, 0xd2]);
        // their neighbors are unmapped and substitute
        assert_eq!(utf8_to_eucj(&[0xc6, 0x94], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
    }

    #[test]
    fn test_utf8_to_eucj_unmapped_substitutes() {
        let mut out = [0u8; 4];
        // U+0800, a mapped lead page is not even present
        assert_eq!(utf8_to_eucj(&[0xe0, 0xa0, 0x80], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
        // U+10000, outside the mapped 4-byte region
        assert_eq!(utf8_to_eucj(&[0xf0, 0x90, 0x80, 0x80], &mut out), ok(4, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
        // 5- and 6-byte forms always substitute, consuming the whole width
        assert_eq!(utf8_to_eucj(&[0xf8, 0x80, 0x80, 0x80, 0x80], &mut out), ok(5, 2));
        assert_eq!(utf8_to_eucj(&[0xfc, 0x80, 0x80, 0x80, 0x80, 0x80], &mut out), ok(6, 2));
    }

    #[test]
    fn test_utf8_illegal_sequences() {
        let mut out = [0u8; 4];
        // a continuation byte cannot lead
        assert_eq!(utf8_to_eucj(&[0x80], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(utf8_to_eucj(&[0xbf, 0x41], &mut out), Err(ConvError::IllegalSequence));
        // FE and FF lead nothing
        assert_eq!(utf8_to_eucj(&[0xfe, 0x80], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(utf8_to_eucj(&[0xff], &mut out), Err(ConvError::IllegalSequence));
        // a non-continuation trail is malformed once the width is available
        assert_eq!(utf8_to_eucj(&[0xe3, 0x41, 0x82], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(utf8_to_eucj(&[0xc2, 0xc0], &mut out), Err(ConvError::IllegalSequence));
    }

    #[test]
    fn test_utf8_starved_before_illegal() {
        let mut out = [0u8; 4];
        assert_eq!(utf8_to_eucj(&[0xe3], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(utf8_to_eucj(&[0xe3, 0x81], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(utf8_to_eucj(&[0xf0, 0xa0, 0x82], &mut out), Err(ConvError::InputNotEnough));
        // the truncated trail would be malformed, but starvation wins
        assert_eq!(utf8_to_eucj(&[0xe3, 0x41], &mut out), Err(ConvError::InputNotEnough));
        // even for the widths that never carry a character
        assert_eq!(utf8_to_eucj(&[0xf8, 0x80], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(utf8_to_eucj(&[0xfc], &mut out), Err(ConvError::InputNotEnough));
    }

    #[test]
    fn test_eucj_to_utf8_plane1() {
        let mut out = [0u8; 8];
        assert_eq!(eucj_to_utf8(&[0xa4, 0xa2], &mut out), ok(2, 3));
        assert_eq!(&out[..3], "\u{3042}".as_bytes());
        assert_eq!(eucj_to_utf8(&[0xa1, 0xf8], &mut out), ok(2, 2));
        assert_eq!(&out[..2], "\u{a7}".as_bytes());
    }

    #[test]
    fn test_eucj_to_utf8_kana() {
        let mut out = [0u8; 8];
        assert_eq!(eucj_to_utf8(&[0x8e, 0xa1], &mut out), ok(2, 3));
        assert_eq!(&out[..3], "\u{ff61}".as_bytes());
        assert_eq!(eucj_to_utf8(&[0x8e, 0xdf], &mut out), ok(2, 3));
        assert_eq!(&out[..3], "\u{ff9f}".as_bytes());
        assert_eq!(eucj_to_utf8(&[0x8e, 0x41], &mut out), Err(ConvError::IllegalSequence));
    }

    #[test]
    fn test_eucj_to_utf8_plane2() {
        let mut out = [0u8; 8];
        assert_eq!(eucj_to_utf8(&[0x8f, 0xa1, 0xa1], &mut out), ok(3, 4));
        assert_eq!(&out[..4], "\u{20089}".as_bytes());
        // JIS X 0212-only rows substitute rather than error
        assert_eq!(eucj_to_utf8(&[0x8f, 0xa2, 0xa1], &mut out), ok(3, 3));
        assert_eq!(&out[..3], "\u{3013}".as_bytes());
    }

    #[test]
    fn test_eucj_to_utf8_combining_pair() {
        let mut out = [0u8; 8];
        // 1-4-87 expands into base plus combining mark
        assert_eq!(eucj_to_utf8(&[0xa4, 0xf7], &mut out), ok(2, 6));
        assert_eq!(&out[..6], "\u{304b}\u{309a}".as_bytes());
        // and nothing is written when the pair does not fit whole
        let mut small = [0u8; 5];
        assert_eq!(eucj_to_utf8(&[0xa4, 0xf7], &mut small), Err(ConvError::OutputNotEnough));
        assert_eq!(small, [0u8; 5]);
    }

    #[test]
    fn test_eucj_to_utf8_c1_passthrough() {
        let mut out = [0u8; 8];
        assert_eq!(eucj_to_utf8(&[0x80], &mut out), ok(1, 2));
        assert_eq!(&out[..2], "\u{80}".as_bytes());
        assert_eq!(eucj_to_utf8(&[0x9f], &mut out), ok(1, 2));
        assert_eq!(&out[..2], "\u{9f}".as_bytes());
    }

    #[test]
    fn test_eucj_to_utf8_illegal_and_starved() {
        let mut out = [0u8; 8];
        assert_eq!(eucj_to_utf8(&[0xa0], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(eucj_to_utf8(&[0xff], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(eucj_to_utf8(&[0xa4, 0x41], &mut out), Err(ConvError::IllegalSequence));
        assert_eq!(eucj_to_utf8(&[0xa4], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(eucj_to_utf8(&[0x8f, 0xa1], &mut out), Err(ConvError::InputNotEnough));
    }

    #[test]
    fn test_starved_output_writes_nothing() {
        let mut small = [0u8; 1];
        assert_eq!(utf8_to_eucj(&[0xe3, 0x81, 0x82], &mut small), Err(ConvError::OutputNotEnough));
        assert_eq!(small[0], 0);
        assert_eq!(eucj_to_utf8(&[0xa4, 0xa2], &mut small), Err(ConvError::OutputNotEnough));
        assert_eq!(small[0], 0);
    }
}

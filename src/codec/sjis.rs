// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! Shift-JIS (Shift_JISX0213) and its conversion with EUC-JP.
//!
//! Both encodings carry the same JIS X 0213 repertoire, so the conversion
//! is purely arithmetic over the plane/row/cell coordinates; no mapping
//! table is needed beyond two small correction arrays for the irregular
//! plane-2 leads.
//!
//! The Shift-JIS layout:
//!
//! - `00-7F`: ASCII. The Shift_JISX0213 chart maps `5C` to U+00A5 and `7E`
//!   to U+203E, but doing so breaks program text, so both stay ASCII.
//! - `81-9F`, `E0-EF`: lead of a plane-1 double-byte character.
//! - `A1-DF`: JIS X 0201 half-width katakana.
//! - `F0-FC`: lead of a plane-2 double-byte character.
//! - `FD`, `FE`, `FF`: vendor extensions for the copyright sign, the trade
//!   mark sign and the horizontal ellipsis; mapped one-directionally since
//!   their EUC-JP forms convert back to regular double-byte characters.
//! - `80`, `A0`: reserved, substituted.
//!
//! A double-byte trail must be in `[40-7E]` or `[80-FC]`. The trail also
//! selects which of the lead's two rows the character sits in: `40-9E` is
//! the first (odd) row, `9F-FC` the second (even) row.

use super::{emit, need, EUCJ_SUBST, SJIS_SUBST, SUBST1};
use crate::types::ConvResult;

/// Plane-2 rows carried by the irregular Shift-JIS leads `F0-F4`, as
/// (first row, second row). Leads `F5-FC` carry rows 79-94 linearly.
const PLANE2_ROWS: [(u8, u8); 5] = [(1, 8), (3, 4), (5, 12), (13, 14), (15, 78)];

/// Shift-JIS leads for plane-2 rows 1-15; 0 marks a row that exists only
/// in JIS X 0212 and has no Shift-JIS form.
const PLANE2_LEADS: [u8; 15] =
    [0xf0, 0, 0xf1, 0xf1, 0xf2, 0, 0, 0xf0, 0, 0, 0, 0xf2, 0xf3, 0xf3, 0xf4];

/// Converts one Shift-JIS character to EUC-JP.
pub fn sjis_to_eucj(input: &[u8], output: &mut [u8]) -> ConvResult {
    need(input, 1)?;
    let s1 = input[0];
    match s1 {
        0x00..=0x7f => emit(&[s1], 1, output),
        0x81..=0x9f | 0xe0..=0xfc => {
            need(input, 2)?;
            let s2 = input[1];
            if !matches!(s2, 0x40..=0x7e | 0x80..=0xfc) {
                return emit(&EUCJ_SUBST, 2, output);
            }
            let second = s2 >= 0x9f;
            let cell = if second {
                s2 - 0x9e
            } else if s2 >= 0x80 {
                s2 - 0x40
            } else {
                s2 - 0x3f
            };
            let e2 = 0xa0 + cell;
            if s1 <= 0xef {
                // plane 1: leads 81-9F carry rows 1-62, E0-EF rows 63-94
                let pair = s1 - if s1 <= 0x9f { 0x80 } else { 0xc0 };
                let e1 = 0xa0 + pair * 2 - if second { 0 } else { 1 };
                emit(&[e1, e2], 2, output)
            } else {
                let row = if s1 >= 0xf5 {
                    (2 * s1 as u16 - 0x19b + second as u16) as u8
                } else {
                    let (first_row, second_row) = PLANE2_ROWS[(s1 - 0xf0) as usize];
                    if second { second_row } else { first_row }
                };
                emit(&[0x8f, 0xa0 + row, e2], 2, output)
            }
        }
        0xa1..=0xdf => emit(&[0x8e, s1], 1, output), // JIS X 0201 kana
        0xfd => emit(&[0xa9, 0xa6], 1, output),       // copyright sign
        0xfe => emit(&[0x8f, 0xa2, 0xef], 1, output), // trade mark sign (JIS X 0212)
        0xff => emit(&[0xa1, 0xc4], 1, output),       // horizontal ellipsis
        _ => emit(&[SUBST1], 1, output),              // 80, A0: reserved
    }
}

/// Converts one EUC-JP character to Shift-JIS.
///
/// The C1 region (other than the `8E`/`8F` leads) and the reserved byte
/// `FF` have no Shift-JIS form and substitute; JIS X 0212-only rows behind
/// the `8F` lead substitute as well.
pub fn eucj_to_sjis(input: &[u8], output: &mut [u8]) -> ConvResult {
    need(input, 1)?;
    let e0 = input[0];
    match e0 {
        0x00..=0x7f => emit(&[e0], 1, output),
        0x8e => {
            need(input, 2)?;
            let e1 = input[1];
            if matches!(e1, 0xa1..=0xdf) {
                // Shift-JIS keeps JIS X 0201 kana at the same byte values
                emit(&[e1], 2, output)
            } else {
                emit(&[SUBST1], 2, output)
            }
        }
        0x8f => {
            need(input, 3)?;
            let (e1, e2) = (input[1], input[2]);
            if !matches!(e1, 0xa1..=0xfe) || !matches!(e2, 0xa1..=0xfe) {
                return emit(&SJIS_SUBST, 3, output);
            }
            let row = e1 - 0xa0;
            let s1 = if row >= 78 {
                ((e1 as u16 - 0xa0 + 0x19b) / 2) as u8
            } else if row > 15 {
                return emit(&SJIS_SUBST, 3, output);
            } else {
                match PLANE2_LEADS[(row - 1) as usize] {
                    0 => return emit(&SJIS_SUBST, 3, output),
                    lead => lead,
                }
            };
            emit(&[s1, sjis_trail(row, e2)], 3, output)
        }
        0xa1..=0xfe => {
            need(input, 2)?;
            let e1 = input[1];
            if !matches!(e1, 0xa1..=0xfe) {
                return emit(&SJIS_SUBST, 2, output);
            }
            let s1 = if e0 <= 0xde {
                ((e0 as u16 - 0xa0 + 0x101) / 2) as u8
            } else {
                ((e0 as u16 - 0xa0 + 0x181) / 2) as u8
            };
            emit(&[s1, sjis_trail(e0 - 0xa0, e1)], 2, output)
        }
        _ => emit(&[SUBST1], 1, output), // C1 region, A0, FF
    }
}

/// Inverse of the cell arithmetic: odd rows land in the `40-7E`/`80-9E`
/// trail halves (split at EUC cell byte `DF`), even rows in `9F-FC`.
fn sjis_trail(row: u8, cell: u8) -> u8 {
    if row % 2 == 1 {
        if cell <= 0xdf {
            cell - 0xa0 + 0x3f
        } else {
            cell - 0xa0 + 0x40
        }
    } else {
        cell - 0xa0 + 0x9e
    }
}

#[cfg(test)]
mod tests {
    use super::{eucj_to_sjis, sjis_to_eucj};
    use crate::types::{ConvError, Converted};

    fn ok(consumed: usize, written: usize) -> Result<Converted, ConvError> {
        Ok(Converted { consumed, written })
    }

    #[test]
    fn test_ascii_passthrough() {
        let mut out = [0u8; 4];
        for b in 0x00..=0x7fu8 {
            assert_eq!(sjis_to_eucj(&[b], &mut out), ok(1, 1));
            assert_eq!(out[0], b);
            assert_eq!(eucj_to_sjis(&[b], &mut out), ok(1, 1));
            assert_eq!(out[0], b);
        }
    }

    #[test]
    fn test_sjis_to_eucj_plane1() {
        let mut out = [0u8; 4];
        assert_eq!(sjis_to_eucj(&[0x81, 0x40], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa1, 0xa1]);
        // U+3042, 1-4-2
        assert_eq!(sjis_to_eucj(&[0x82, 0xa0], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa4, 0xa2]);
        // U+65E5, 1-38-92
        assert_eq!(sjis_to_eucj(&[0x93, 0xfa], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xc6, 0xfc]);
    }

    #[test]
    fn test_sjis_to_eucj_plane2() {
        let mut out = [0u8; 4];
        // irregular lead F0 carries rows 1 and 8
        assert_eq!(sjis_to_eucj(&[0xf0, 0x40], &mut out), ok(2, 3));
        assert_eq!(&out[..3], &[0x8f, 0xa1, 0xa1]);
        assert_eq!(sjis_to_eucj(&[0xf0, 0x9f], &mut out), ok(2, 3));
        assert_eq!(&out[..3], &[0x8f, 0xa8, 0xa1]);
        // linear leads carry rows 79-94
        assert_eq!(sjis_to_eucj(&[0xf5, 0x40], &mut out), ok(2, 3));
        assert_eq!(&out[..3], &[0x8f, 0xef, 0xa1]);
        assert_eq!(sjis_to_eucj(&[0xfc, 0xfc], &mut out), ok(2, 3));
        assert_eq!(&out[..3], &[0x8f, 0xfe, 0xfe]);
    }

    #[test]
    fn test_sjis_to_eucj_kana() {
        let mut out = [0u8; 4];
        assert_eq!(sjis_to_eucj(&[0xa1], &mut out), ok(1, 2));
        assert_eq!(&out[..2], &[0x8e, 0xa1]);
        assert_eq!(sjis_to_eucj(&[0xdf], &mut out), ok(1, 2));
        assert_eq!(&out[..2], &[0x8e, 0xdf]);
    }

    #[test]
    fn test_sjis_to_eucj_vendor_bytes() {
        let mut out = [0u8; 4];
        assert_eq!(sjis_to_eucj(&[0xfd], &mut out), ok(1, 2));
        assert_eq!(&out[..2], &[0xa9, 0xa6]);
        assert_eq!(sjis_to_eucj(&[0xfe], &mut out), ok(1, 3));
        assert_eq!(&out[..3], &[0x8f, 0xa2, 0xef]);
        assert_eq!(sjis_to_eucj(&[0xff], &mut out), ok(1, 2));
        assert_eq!(&out[..2], &[0xa1, 0xc4]);
    }

    #[test]
    fn test_sjis_to_eucj_reserved_and_bad_trail() {
        let mut out = [0u8; 4];
        // reserved leads substitute with '?'
        assert_eq!(sjis_to_eucj(&[0x80], &mut out), ok(1, 1));
        assert_eq!(out[0], b'?');
        assert_eq!(sjis_to_eucj(&[0xa0], &mut out), ok(1, 1));
        assert_eq!(out[0], b'?');
        // invalid trails substitute with the geta mark, consuming both bytes
        assert_eq!(sjis_to_eucj(&[0x81, 0x3f], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
        assert_eq!(sjis_to_eucj(&[0x81, 0x7f], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
        assert_eq!(sjis_to_eucj(&[0x81, 0xfd], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0xa2, 0xae]);
    }

    #[test]
    fn test_sjis_starved_input_before_classification() {
        let mut out = [0u8; 4];
        // a lone lead is starved, not malformed, even with a bad trail coming
        assert_eq!(sjis_to_eucj(&[0x81], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(sjis_to_eucj(&[0xf0], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(sjis_to_eucj(&[], &mut out), Err(ConvError::InputNotEnough));
    }

    #[test]
    fn test_sjis_starved_output() {
        let mut small = [0u8; 1];
        assert_eq!(sjis_to_eucj(&[0x82, 0xa0], &mut small), Err(ConvError::OutputNotEnough));
        assert_eq!(small[0], 0);
        assert_eq!(sjis_to_eucj(&[0x41], &mut []), Err(ConvError::OutputNotEnough));
    }

    #[test]
    fn test_eucj_to_sjis_plane1() {
        let mut out = [0u8; 4];
        assert_eq!(eucj_to_sjis(&[0xa1, 0xa1], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0x81, 0x40]);
        assert_eq!(eucj_to_sjis(&[0xa4, 0xa2], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0x82, 0xa0]);
        assert_eq!(eucj_to_sjis(&[0xc6, 0xfc], &mut out), ok(2, 2));
        assert_eq!(&out[..2], &[0x93, 0xfa]);
    }

    #[test]
    fn test_eucj_to_sjis_kana() {
        let mut out = [0u8; 4];
        assert_eq!(eucj_to_sjis(&[0x8e, 0xa1], &mut out), ok(2, 1));
        assert_eq!(out[0], 0xa1);
        assert_eq!(eucj_to_sjis(&[0x8e, 0xdf], &mut out), ok(2, 1));
        assert_eq!(out[0], 0xdf);
        // out-of-range kana trail substitutes but still consumes both bytes
        assert_eq!(eucj_to_sjis(&[0x8e, 0x41], &mut out), ok(2, 1));
        assert_eq!(out[0], b'?');
    }

    #[test]
    fn test_eucj_to_sjis_plane2() {
        let mut out = [0u8; 4];
        assert_eq!(eucj_to_sjis(&[0x8f, 0xa1, 0xa1], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0xf0, 0x40]);
        assert_eq!(eucj_to_sjis(&[0x8f, 0xfe, 0xfe], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0xfc, 0xfc]);
        // JIS X 0212-only rows have no Shift-JIS form
        assert_eq!(eucj_to_sjis(&[0x8f, 0xa2, 0xa1], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0x81, 0xac]);
        assert_eq!(eucj_to_sjis(&[0x8f, 0xb0, 0xa1], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0x81, 0xac]);
        // bad trail bytes substitute, consuming all three source bytes
        assert_eq!(eucj_to_sjis(&[0x8f, 0xa1, 0x20], &mut out), ok(3, 2));
        assert_eq!(&out[..2], &[0x81, 0xac]);
    }

    #[test]
    fn test_eucj_to_sjis_c1_and_reserved() {
        let mut out = [0u8; 4];
        for b in [0x80u8, 0x8d, 0x90, 0x9f, 0xa0, 0xff] {
            assert_eq!(eucj_to_sjis(&[b], &mut out), ok(1, 1));
            assert_eq!(out[0], b'?');
        }
    }

    #[test]
    fn test_eucj_starved_input() {
        let mut out = [0u8; 4];
        assert_eq!(eucj_to_sjis(&[0xa4], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(eucj_to_sjis(&[0x8e], &mut out), Err(ConvError::InputNotEnough));
        assert_eq!(eucj_to_sjis(&[0x8f, 0xa1], &mut out), Err(ConvError::InputNotEnough));
    }

    #[test]
    fn test_plane1_round_trip() {
        // every plane-1 double-byte pair survives the round trip; vendor
        // leads FD-FF are one-directional and excluded by the lead ranges
        let mut euc = [0u8; 4];
        let mut sjis = [0u8; 4];
        for s1 in (0x81..=0x9fu8).chain(0xe0..=0xef) {
            for s2 in (0x40..=0x7eu8).chain(0x80..=0xfc) {
                let fwd = sjis_to_eucj(&[s1, s2], &mut euc).unwrap();
                assert_eq!((fwd.consumed, fwd.written), (2, 2), "{s1:02x} {s2:02x}");
                let back = eucj_to_sjis(&euc[..2], &mut sjis).unwrap();
                assert_eq!((back.consumed, back.written), (2, 2), "{s1:02x} {s2:02x}");
                assert_eq!(&sjis[..2], &[s1, s2], "{s1:02x} {s2:02x}");
            }
        }
    }

    #[test]
    fn test_plane2_round_trip() {
        let mut euc = [0u8; 4];
        let mut sjis = [0u8; 4];
        for s1 in 0xf0..=0xfcu8 {
            for s2 in (0x40..=0x7eu8).chain(0x80..=0xfc) {
                let fwd = sjis_to_eucj(&[s1, s2], &mut euc).unwrap();
                assert_eq!((fwd.consumed, fwd.written), (2, 3), "{s1:02x} {s2:02x}");
                assert_eq!(euc[0], 0x8f);
                let back = eucj_to_sjis(&euc[..3], &mut sjis).unwrap();
                assert_eq!((back.consumed, back.written), (3, 2), "{s1:02x} {s2:02x}");
                assert_eq!(&sjis[..2], &[s1, s2], "{s1:02x} {s2:02x}");
            }
        }
    }
}

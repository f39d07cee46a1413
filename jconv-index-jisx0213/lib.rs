// This is a part of jconv.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! JIS X 0213 index tables for jconv.
//!
//! The tables are generated from the JIS X 0213:2004 / Unicode
//! correspondence by `gen_index.py` and never mutated after process start;
//! the accessors are `O(1)` reads of `static` data and safe to call from
//! any number of threads.

/// EUC-JP (JIS X 0213 planes 1 and 2) to Unicode.
pub mod eucj_to_ucs;

/// UTF-8 byte sequences to EUC-JP, keyed directly by the UTF-8 bytes so
/// no intermediate scalar decoding is needed.
pub mod ucs_to_eucj;

#[cfg(test)]
mod tests {
    use super::{eucj_to_ucs, ucs_to_eucj};

    #[test]
    fn test_plane1_forward() {
        assert_eq!(eucj_to_ucs::plane1(0xa1, 0xa1), 0x3000); // ideographic space
        assert_eq!(eucj_to_ucs::plane1(0xa1, 0xc4), 0x2026); // horizontal ellipsis
        assert_eq!(eucj_to_ucs::plane1(0xa4, 0xa2), 0x3042); // hiragana a
        assert_eq!(eucj_to_ucs::plane1(0xa2, 0xae), 0x3013); // geta mark
        assert_eq!(eucj_to_ucs::plane1(0xc6, 0xfc), 0x65e5); // kanji "day"
    }

    #[test]
    fn test_plane1_packed_pair() {
        // 1-4-87, hiragana ka with semi-voiced sound mark; only exists in
        // Unicode as a base character plus a combining mark.
        assert_eq!(eucj_to_ucs::plane1(0xa4, 0xf7), 0x304b_309a);
    }

    #[test]
    fn test_plane2_forward() {
        assert_eq!(eucj_to_ucs::plane2(0xa1, 0xa1), 0x20089);
        // row 2 belongs to JIS X 0212, not JIS X 0213 plane 2
        assert_eq!(eucj_to_ucs::plane2(0xa2, 0xa1), 0);
    }

    #[test]
    fn test_two_byte() {
        assert_eq!(ucs_to_eucj::two_byte(0xc2, 0xa7), 0xa1f8); // U+00A7 section sign
        assert_eq!(ucs_to_eucj::two_byte(0xc2, 0x80), 0); // U+0080 unmapped
    }

    #[test]
    fn test_three_byte() {
        assert_eq!(ucs_to_eucj::three_byte(0xe3, 0x81, 0x82), 0xa4a2); // U+3042
        assert_eq!(ucs_to_eucj::three_byte(0xef, 0xbd, 0xa1), 0x8ea1); // U+FF61
        assert_eq!(ucs_to_eucj::three_byte(0xe0, 0xa0, 0x80), 0); // U+0800 unmapped
    }

    #[test]
    fn test_four_byte() {
        // U+20089 is plane 2 character 2-1-1, so the entry is below 0x8000
        assert_eq!(ucs_to_eucj::four_byte(0xa0, 0x8289), 0x21a1);
        assert_eq!(ucs_to_eucj::four_byte(0xbf, 0x8080), 0);
    }
}

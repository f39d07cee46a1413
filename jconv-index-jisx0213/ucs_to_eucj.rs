// This is a part of jconv.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/
//
// AUTOGENERATED from the JIS X 0213:2004 / Unicode correspondence
// by gen_index.py. Do not edit directly.


/// Looks up the EUC-JP mapping for a 2-byte UTF-8 sequence.
///
/// Returns 0 when unmapped, an entry `>= 0x8000` holding the two raw EUC-JP
/// bytes, or an entry `< 0x8000` holding a plane-2 character to be emitted as
/// `8F (hi + 0x80) lo`. The trail byte must be a continuation byte.
#[inline]
pub fn two_byte(lead: u8, trail: u8) -> u16 {
    let t = (trail - 0x80) as usize;
    match lead {
        0xc2 => TWO_C2[t],
        0xc3 => TWO_C3[t],
        0xc4 => TWO_C4[t],
        0xc5 => TWO_C5[t],
        0xc7 => TWO_C7[t],
        0xc9 => TWO_C9[t],
        0xca => TWO_CA[t],
        0xcb => TWO_CB[t],
        0xcc => TWO_CC[t],
        0xce => TWO_CE[t],
        0xcf => TWO_CF[t],
        0xd0 => TWO_D0[t],
        0xd1 => TWO_D1[t],
        _ => 0,
    }
}

/// Looks up the EUC-JP mapping for a 3-byte UTF-8 sequence.
/// Entry values are as in [`two_byte`].
#[inline]
pub fn three_byte(lead: u8, second: u8, third: u8) -> u16 {
    let s = (second - 0x80) as usize;
    let t = (third - 0x80) as usize;
    let (rows, pages): (&[u8; 64], &[[u16; 64]]) = match lead {
        0xe1 => (&THREE_E1_ROW, &THREE_E1),
        0xe2 => (&THREE_E2_ROW, &THREE_E2),
        0xe3 => (&THREE_E3_ROW, &THREE_E3),
        0xe4 => (&THREE_E4_ROW, &THREE_E4),
        0xe5 => (&THREE_E5_ROW, &THREE_E5),
        0xe6 => (&THREE_E6_ROW, &THREE_E6),
        0xe7 => (&THREE_E7_ROW, &THREE_E7),
        0xe8 => (&THREE_E8_ROW, &THREE_E8),
        0xe9 => (&THREE_E9_ROW, &THREE_E9),
        0xef => (&THREE_EF_ROW, &THREE_EF),
        _ => return 0,
    };
    match rows[s] {
        0 => 0,
        i => pages[(i - 1) as usize][t],
    }
}

/// Looks up the EUC-JP mapping for a 4-byte UTF-8 sequence with lead `F0`,
/// keyed by the packed third and fourth bytes `(u2 << 8) | u3`.
/// Entry values are as in [`two_byte`].
#[inline]
pub fn four_byte(second: u8, pair: u16) -> u16 {
    let table: &[(u16, u16)] = match second {
        0xa0 => &FOUR_A0,
        0xa1 => &FOUR_A1,
        0xa2 => &FOUR_A2,
        0xa3 => &FOUR_A3,
        0xa4 => &FOUR_A4,
        0xa5 => &FOUR_A5,
        0xa6 => &FOUR_A6,
        0xa7 => &FOUR_A7,
        0xa8 => &FOUR_A8,
        0xa9 => &FOUR_A9,
        0xaa => &FOUR_AA,
        _ => return 0,
    };
    match table.binary_search_by_key(&pair, |&(key, _)| key) {
        Ok(i) => table[i].1,
        Err(_) => 0,
    }
}

static TWO_C2: [u16; 64] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xa9a2, 0xa9a3, 0xa1f1, 0xa1f2, 0xa9a4, 0x0000, 0xa9a5, 0xa1f8,
    0xa1af, 0xa9a6, 0xa9a7, 0xa9a8, 0xa2cc, 0xa9a9, 0xa9aa, 0xa9ab,
    0xa1eb, 0xa1de, 0xa9ac, 0xa9ad, 0xa1ad, 0x0000, 0xa2f9, 0xa9ae,
    0xa9af, 0xa9b0, 0xa9b1, 0xa9b2, 0xa9b3, 0xa9b4, 0xa9b5, 0xa9b6,
];

static TWO_C3: [u16; 64] = [
    0xa9b7, 0xa9b8, 0xa9b9, 0xa9ba, 0xa9bb, 0xa9bc, 0xa9bd, 0xa9be,
    0xa9bf, 0xa9c0, 0xa9c1, 0xa9c2, 0xa9c3, 0xa9c4, 0xa9c5, 0xa9c6,
    0xa9c7, 0xa9c8, 0xa9c9, 0xa9ca, 0xa9cb, 0xa9cc, 0xa9cd, 0xa1df,
    0xa9ce, 0xa9cf, 0xa9d0, 0xa9d1, 0xa9d2, 0xa9d3, 0xa9d4, 0xa9d5,
    0xa9d6, 0xa9d7, 0xa9d8, 0xa9d9, 0xa9da, 0xa9db, 0xa9dc, 0xa9dd,
    0xa9de, 0xa9df, 0xa9e0, 0xa9e1, 0xa9e2, 0xa9e3, 0xa9e4, 0xa9e5,
    0xa9e6, 0xa9e7, 0xa9e8, 0xa9e9, 0xa9ea, 0xa9eb, 0xa9ec, 0xa1e0,
    0xa9ed, 0xa9ee, 0xa9ef, 0xa9f0, 0xa9f1, 0xa9f2, 0xa9f3, 0xa9f4,
];

static TWO_C4: [u16; 64] = [
    0xa9f5, 0xa9fa, 0xaaba, 0xaac9, 0xaaa1, 0xaaac, 0xaabc, 0xaacb,
    0xaad9, 0xaadf, 0x0000, 0x0000, 0xaabd, 0xaacc, 0xaac0, 0xaacf,
    0x0000, 0xaad0, 0xa9f8, 0xa9fd, 0x0000, 0x0000, 0x0000, 0x0000,
    0xaabe, 0xaacd, 0xaabf, 0xaace, 0xaada, 0xaae0, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0xaadb, 0xaae1, 0x0000, 0xaafd,
    0x0000, 0x0000, 0xa9f6, 0xa9fb, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0xaadc, 0xaae2, 0x0000, 0x0000,
    0x0000, 0xaabb, 0xaaca, 0x0000, 0x0000, 0xaaa4, 0xaaaf, 0x0000,
];

static TWO_C5: [u16; 64] = [
    0x0000, 0xaaa3, 0xaaae, 0xaac1, 0xaad1, 0x0000, 0x0000, 0xaac2,
    0xaad2, 0x0000, 0x0000, 0xaafa, 0xa9f9, 0xa9fe, 0x0000, 0x0000,
    0xaac3, 0xaad3, 0xabab, 0xabaa, 0xaab9, 0xaac8, 0x0000, 0x0000,
    0xaac4, 0xaad4, 0xaaa5, 0xaab0, 0xaadd, 0xaae3, 0xaaa7, 0xaab3,
    0xaaa6, 0xaab2, 0xaac7, 0xaad7, 0xaaa8, 0xaab4, 0x0000, 0x0000,
    0x0000, 0x0000, 0xa9f7, 0xa9fc, 0xaade, 0xaae4, 0xaac5, 0xaad5,
    0xaac6, 0xaad6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0xaaa9, 0xaab5, 0xaaab, 0xaab8, 0xaaaa, 0xaab7, 0x0000,
];

static TWO_C7: [u16; 64] = [
    0x0000, 0x0000, 0xaba4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa8ef, 0xa8f0, 0x0000,
    0xa8f1, 0xa8f6, 0xa8f7, 0x0000, 0xa8f8, 0x0000, 0xa8f9, 0x0000,
    0xa8fa, 0x0000, 0xa8fb, 0x0000, 0xa8fc, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xa8f4, 0xa8f5, 0x0000, 0x0000, 0x0000, 0xabc5, 0x0000, 0x0000,
];

static TWO_C9: [u16; 64] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xabb3, 0xabb9, 0xabba, 0xaba5, 0xabb8, 0xabbf, 0xaaee, 0xaba6,
    0xabae, 0xabb0, 0xabc3, 0x0000, 0xabb1, 0x0000, 0xabb2, 0xaaf5,
    0xaba8, 0xaaf9, 0x0000, 0x0000, 0xabb6, 0xabbc, 0xaba2, 0xabc2,
    0xabac, 0x0000, 0x0000, 0x0000, 0xaaea, 0xaaf4, 0xaaeb, 0xabb4,
    0xaafb, 0xaae5, 0xaaf6, 0xaaef, 0x0000, 0xabaf, 0x0000, 0x0000,
    0x0000, 0xaaec, 0xabc1, 0xaaf3, 0x0000, 0xaaf0, 0xaae7, 0x0000,
];

static TWO_CA: [u16; 64] = [
    0x0000, 0xaafc, 0xaaf1, 0xaae8, 0xaba7, 0x0000, 0x0000, 0x0000,
    0xaaed, 0xabad, 0xabb5, 0xaae6, 0xabb7, 0xabbb, 0xaaf8, 0x0000,
    0xaaf2, 0xabc0, 0xaae9, 0x0000, 0xaba1, 0xaafe, 0x0000, 0x0000,
    0xaba3, 0x0000, 0x0000, 0x0000, 0x0000, 0xaaf7, 0x0000, 0x0000,
    0x0000, 0xabbe, 0xabbd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

static TWO_CB: [u16; 64] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xaab1,
    0xabd3, 0x0000, 0x0000, 0x0000, 0xabd4, 0x0000, 0x0000, 0x0000,
    0xabd5, 0xabd6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xaaa2, 0xaad8, 0x0000, 0xaaad, 0x0000, 0xaab6, 0xabf1, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xabe0, 0xabe1, 0xabe2,
    0xabe3, 0xabe4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

static TWO_CC: [u16; 64] = [
    0xabdc, 0xabda, 0xabdf, 0xabfd, 0xabdb, 0x0000, 0xabd7, 0x0000,
    0xabed, 0x0000, 0x0000, 0xabd9, 0xabde, 0x0000, 0x0000, 0xabdd,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xabf8, 0xabf9, 0xabfe, 0x0000, 0xabea, 0xabf6, 0xabf7, 0xabeb,
    0xabec, 0x0000, 0x0000, 0x0000, 0xabf2, 0xabe7, 0x0000, 0x0000,
    0x0000, 0xabef, 0xabfa, 0x0000, 0xabe8, 0x0000, 0x0000, 0xabf0,
    0xabf3, 0x0000, 0x0000, 0x0000, 0xabf5, 0x0000, 0x0000, 0x0000,
    0x0000, 0xabe9, 0xabfb, 0xabfc, 0xabf4, 0xabee, 0x0000, 0x0000,
];

static TWO_CE: [u16; 64] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0xa6a1, 0xa6a2, 0xa6a3, 0xa6a4, 0xa6a5, 0xa6a6, 0xa6a7,
    0xa6a8, 0xa6a9, 0xa6aa, 0xa6ab, 0xa6ac, 0xa6ad, 0xa6ae, 0xa6af,
    0xa6b0, 0xa6b1, 0x0000, 0xa6b2, 0xa6b3, 0xa6b4, 0xa6b5, 0xa6b6,
    0xa6b7, 0xa6b8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0xa6c1, 0xa6c2, 0xa6c3, 0xa6c4, 0xa6c5, 0xa6c6, 0xa6c7,
    0xa6c8, 0xa6c9, 0xa6ca, 0xa6cb, 0xa6cc, 0xa6cd, 0xa6ce, 0xa6cf,
];

static TWO_CF: [u16; 64] = [
    0xa6d0, 0xa6d1, 0xa6d9, 0xa6d2, 0xa6d3, 0xa6d4, 0xa6d5, 0xa6d6,
    0xa6d7, 0xa6d8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

static TWO_D0: [u16; 64] = [
    0x0000, 0xa7a7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xa7a1, 0xa7a2, 0xa7a3, 0xa7a4, 0xa7a5, 0xa7a6, 0xa7a8, 0xa7a9,
    0xa7aa, 0xa7ab, 0xa7ac, 0xa7ad, 0xa7ae, 0xa7af, 0xa7b0, 0xa7b1,
    0xa7b2, 0xa7b3, 0xa7b4, 0xa7b5, 0xa7b6, 0xa7b7, 0xa7b8, 0xa7b9,
    0xa7ba, 0xa7bb, 0xa7bc, 0xa7bd, 0xa7be, 0xa7bf, 0xa7c0, 0xa7c1,
    0xa7d1, 0xa7d2, 0xa7d3, 0xa7d4, 0xa7d5, 0xa7d6, 0xa7d8, 0xa7d9,
    0xa7da, 0xa7db, 0xa7dc, 0xa7dd, 0xa7de, 0xa7df, 0xa7e0, 0xa7e1,
];

static TWO_D1: [u16; 64] = [
    0xa7e2, 0xa7e3, 0xa7e4, 0xa7e5, 0xa7e6, 0xa7e7, 0xa7e8, 0xa7e9,
    0xa7ea, 0xa7eb, 0xa7ec, 0xa7ed, 0xa7ee, 0xa7ef, 0xa7f0, 0xa7f1,
    0x0000, 0xa7d7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

static THREE_E1_ROW: [u8; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0,
];

static THREE_E1: [[u16; 64]; 2] = [
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa8f2, 0xa8f3,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xabc6, 0xabc7, 0xabd0, 0xabd1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

static THREE_E2_ROW: [u8; 64] = [
    1, 2, 3, 0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0, 13, 14,
    15, 16, 0, 17, 18, 19, 20, 21, 22, 23, 0, 0, 24, 25, 0, 0,
    0, 0, 0, 0, 26, 0, 27, 28, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static THREE_E2: [[u16; 64]; 28] = [
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa1be, 0x0000, 0x0000, 0xa3fc, 0x0000, 0xa1bd, 0xa1c2, 0x0000,
        0xa1c6, 0xa1c7, 0x0000, 0x0000, 0xa1c8, 0xa1c9, 0x0000, 0x0000,
        0xa2f7, 0xa2f8, 0xa3c0, 0x0000, 0x0000, 0xa1c5, 0xa1c4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa2f3, 0x0000, 0xa1ec, 0xa1ed, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa2a8, 0xa8eb, 0x0000, 0x0000, 0xabd8,
    ],
    [
        0x0000, 0x0000, 0xacfe, 0x0000, 0x0000, 0x0000, 0x0000, 0xa8ec,
        0xa8ed, 0xa8ee, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xacfd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xa9a1, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xa1ee, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3dd,
        0x0000, 0x0000, 0x0000, 0xa3df, 0x0000, 0x0000, 0xade2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xade4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3e0,
        0x0000, 0x0000, 0x0000, 0xa2f2, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3dc, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa7f8, 0xa7f9, 0xa7fa, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xadb5, 0xadb6, 0xadb7, 0xadb8, 0xadb9, 0xadba, 0xadbb, 0xadbc,
        0xadbd, 0xadbe, 0xadbf, 0xadd7, 0x0000, 0x0000, 0x0000, 0x0000,
        0xacb5, 0xacb6, 0xacb7, 0xacb8, 0xacb9, 0xacba, 0xacbb, 0xacbc,
        0xacbd, 0xacbe, 0xacbf, 0xacc0, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa2ab, 0xa2ac, 0xa2aa, 0xa2ad, 0xa2f1, 0x0000, 0xa3a7, 0xa3a5,
        0xa3a6, 0xa3a8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xa3a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa2cd, 0x0000, 0xa2ce, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3ab, 0xa3ac,
        0xa3aa, 0xa3ad, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xa2cf, 0x0000, 0xa2df, 0xa2d0, 0x0000, 0xa2c7, 0x0000, 0xa2e0,
        0xa2ba, 0xa2c6, 0x0000, 0xa2bb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa1dd, 0xa3db, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa2e5, 0x0000, 0x0000, 0xa2e7, 0xa1e7, 0xadf8,
        0xa2dc, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2d4, 0xa2d5, 0xa2ca,
        0xa2cb, 0xa2c1, 0xa2c0, 0xa2e9, 0xa2ea, 0x0000, 0xadf3, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xa1e8, 0xa2e8, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2e6, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xa2ec, 0x0000, 0xa2ed, 0x0000, 0x0000,
        0xa2ee, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa2e2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa1e2, 0xa2e1, 0xa2eb, 0x0000, 0x0000, 0x0000, 0xa1e5, 0xa1e6,
        0x0000, 0x0000, 0xa2e3, 0xa2e4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2ef, 0xa2f0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xa2be, 0xa2bf, 0xa2c2, 0xa2c3, 0xa2bc, 0xa2bd,
        0x0000, 0x0000, 0xa2c4, 0xa2c5, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2d1, 0xa2d2, 0xa2d3,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2dd, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadf9,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa7f6, 0xa7f7, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2c8, 0xa2c9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa2de, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa7fc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa7c2, 0xa7c3,
    ],
    [
        0xa7c4, 0xa7c5, 0xa7c6, 0xa7c7, 0xa7c8, 0xa7c9, 0xa7ca, 0xa7cb,
        0xa7cc, 0xa7cd, 0xa7ce, 0xa7cf, 0xa7d0, 0x0000, 0xa7fe, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa7fd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xada1, 0xada2, 0xada3, 0xada4, 0xada5, 0xada6, 0xada7, 0xada8,
        0xada9, 0xadaa, 0xadab, 0xadac, 0xadad, 0xadae, 0xadaf, 0xadb0,
        0xadb1, 0xadb2, 0xadb3, 0xadb4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xacc1, 0xacc2, 0xacc3, 0xacc4, 0xacc5, 0xacc6, 0xacc7, 0xacc8,
        0xacc9, 0xacca, 0xaccb, 0xaccc, 0xaccd, 0xacce, 0xaccf, 0xacd0,
        0xacd1, 0xacd2, 0xacd3, 0xacd4, 0xacd5, 0xacd6, 0xacd7, 0xacd8,
        0xacd9, 0xacda, 0x0000, 0xacab, 0xacac, 0xacad, 0xacae, 0xacaf,
        0xacb0, 0xacb1, 0xacb2, 0xacb3, 0xacb4, 0xa6da, 0xa6db, 0xa6dc,
        0xa6dd, 0xa6de, 0xa6df, 0xa6e0, 0xa6e1, 0xa6e2, 0xa6e3, 0x0000,
    ],
    [
        0xa8a1, 0xa8ac, 0xa8a2, 0xa8ad, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xa8a3, 0x0000, 0x0000, 0xa8ae,
        0xa8a4, 0x0000, 0x0000, 0xa8af, 0xa8a6, 0x0000, 0x0000, 0xa8b1,
        0xa8a5, 0x0000, 0x0000, 0xa8b0, 0xa8a7, 0xa8bc, 0x0000, 0x0000,
        0xa8b7, 0x0000, 0x0000, 0xa8b2, 0xa8a9, 0xa8be, 0x0000, 0x0000,
        0xa8b9, 0x0000, 0x0000, 0xa8b4, 0xa8a8, 0x0000, 0x0000, 0xa8b8,
        0xa8bd, 0x0000, 0x0000, 0xa8b3, 0xa8aa, 0x0000, 0x0000, 0xa8ba,
        0xa8bf, 0x0000, 0x0000, 0xa8b5, 0xa8ab, 0x0000, 0x0000, 0xa8bb,
    ],
    [
        0x0000, 0x0000, 0xa8c0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa8b6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa2a3, 0xa2a2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xa6ed, 0xa2a5, 0xa2a4, 0x0000, 0x0000, 0xa3a2, 0xa3a1,
        0x0000, 0x0000, 0x0000, 0x0000, 0xa2a7, 0xa2a6, 0x0000, 0x0000,
    ],
    [
        0xa3a4, 0xa3a3, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2a1, 0xa1fe,
        0x0000, 0xa3bb, 0x0000, 0xa1fb, 0x0000, 0x0000, 0xa1fd, 0xa1fc,
        0xa8e7, 0xa8e8, 0xa8e9, 0xa8ea, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3bf, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2fe,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xa6e8, 0xa6e9, 0xa6ea, 0xa6eb, 0x0000, 0xa1fa, 0xa1f9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa6e7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa6e4, 0xa6e5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadfe, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xa1ea, 0x0000, 0xa1e9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa6ba, 0xa6bd, 0xa6bb, 0xa6c0, 0xa6b9, 0xa6be, 0xa6bc, 0xa6bf,
        0xa6ec, 0xa2fd, 0xa2f6, 0xa2fb, 0xa2fc, 0xa2f5, 0xa2fa, 0xa2f4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa7fb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadfd, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xaca1, 0xaca2,
        0xaca3, 0xaca4, 0xaca5, 0xaca6, 0xaca7, 0xaca8, 0xaca9, 0xacaa,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xa3ae, 0xa3af, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa2d6, 0xa2d7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3ba,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xa3fd, 0xa3fe, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

static THREE_E3_ROW: [u8; 64] = [
    1, 2, 3, 4, 0, 0, 0, 5, 6, 7, 8, 9, 10, 11, 12, 13,
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 0, 26, 27, 28,
    29, 30, 0, 31, 32, 33, 0, 0, 0, 34, 0, 35, 36, 37, 38, 39,
    40, 0, 0, 41, 42, 43, 44, 45, 46, 47, 48, 0, 0, 49, 50, 51,
];

static THREE_E3: [[u16; 64]; 51] = [
    [
        0xa1a1, 0xa1a2, 0xa1a3, 0xa1b7, 0x0000, 0xa1b9, 0xa1ba, 0xa1bb,
        0xa1d2, 0xa1d3, 0xa1d4, 0xa1d5, 0xa1d6, 0xa1d7, 0xa1d8, 0xa1d9,
        0xa1da, 0xa1db, 0xa2a9, 0xa2ae, 0xa1cc, 0xa1cd, 0xa2da, 0xa2db,
        0xa2d8, 0xa2d9, 0x0000, 0x0000, 0xa1c1, 0xade0, 0x0000, 0xade1,
        0xa6e6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa2b3, 0xa2b4, 0xa2b5, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa2b6, 0xa2b7, 0xa3bc, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xa4a1, 0xa4a2, 0xa4a3, 0xa4a4, 0xa4a5, 0xa4a6, 0xa4a7,
        0xa4a8, 0xa4a9, 0xa4aa, 0xa4ab, 0xa4ac, 0xa4ad, 0xa4ae, 0xa4af,
        0xa4b0, 0xa4b1, 0xa4b2, 0xa4b3, 0xa4b4, 0xa4b5, 0xa4b6, 0xa4b7,
        0xa4b8, 0xa4b9, 0xa4ba, 0xa4bb, 0xa4bc, 0xa4bd, 0xa4be, 0xa4bf,
        0xa4c0, 0xa4c1, 0xa4c2, 0xa4c3, 0xa4c4, 0xa4c5, 0xa4c6, 0xa4c7,
        0xa4c8, 0xa4c9, 0xa4ca, 0xa4cb, 0xa4cc, 0xa4cd, 0xa4ce, 0xa4cf,
        0xa4d0, 0xa4d1, 0xa4d2, 0xa4d3, 0xa4d4, 0xa4d5, 0xa4d6, 0xa4d7,
        0xa4d8, 0xa4d9, 0xa4da, 0xa4db, 0xa4dc, 0xa4dd, 0xa4de, 0xa4df,
    ],
    [
        0xa4e0, 0xa4e1, 0xa4e2, 0xa4e3, 0xa4e4, 0xa4e5, 0xa4e6, 0xa4e7,
        0xa4e8, 0xa4e9, 0xa4ea, 0xa4eb, 0xa4ec, 0xa4ed, 0xa4ee, 0xa4ef,
        0xa4f0, 0xa4f1, 0xa4f2, 0xa4f3, 0xa4f4, 0xa4f5, 0xa4f6, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa1ab, 0xa1ac, 0xa1b5, 0xa1b6, 0xa2b9,
        0xa3fb, 0xa5a1, 0xa5a2, 0xa5a3, 0xa5a4, 0xa5a5, 0xa5a6, 0xa5a7,
        0xa5a8, 0xa5a9, 0xa5aa, 0xa5ab, 0xa5ac, 0xa5ad, 0xa5ae, 0xa5af,
        0xa5b0, 0xa5b1, 0xa5b2, 0xa5b3, 0xa5b4, 0xa5b5, 0xa5b6, 0xa5b7,
        0xa5b8, 0xa5b9, 0xa5ba, 0xa5bb, 0xa5bc, 0xa5bd, 0xa5be, 0xa5bf,
    ],
    [
        0xa5c0, 0xa5c1, 0xa5c2, 0xa5c3, 0xa5c4, 0xa5c5, 0xa5c6, 0xa5c7,
        0xa5c8, 0xa5c9, 0xa5ca, 0xa5cb, 0xa5cc, 0xa5cd, 0xa5ce, 0xa5cf,
        0xa5d0, 0xa5d1, 0xa5d2, 0xa5d3, 0xa5d4, 0xa5d5, 0xa5d6, 0xa5d7,
        0xa5d8, 0xa5d9, 0xa5da, 0xa5db, 0xa5dc, 0xa5dd, 0xa5de, 0xa5df,
        0xa5e0, 0xa5e1, 0xa5e2, 0xa5e3, 0xa5e4, 0xa5e5, 0xa5e6, 0xa5e7,
        0xa5e8, 0xa5e9, 0xa5ea, 0xa5eb, 0xa5ec, 0xa5ed, 0xa5ee, 0xa5ef,
        0xa5f0, 0xa5f1, 0xa5f2, 0xa5f3, 0xa5f4, 0xa5f5, 0xa5f6, 0xa7f2,
        0xa7f3, 0xa7f4, 0xa7f5, 0xa1a6, 0xa1bc, 0xa1b3, 0xa1b4, 0xa2b8,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xa6ee, 0xa6ef, 0xa6f0, 0xa6f1, 0xa6f2, 0xa6f3, 0xa6f4, 0xa6f5,
        0xa6f6, 0xa6f7, 0xa6f9, 0xa6fa, 0xa6fb, 0xa6fc, 0xa6fd, 0xa6fe,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xadea, 0xadeb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xadec, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xa8c1, 0xa8c2, 0xa8c3, 0xa8c4, 0xa8c5, 0xa8c6, 0xa8c7,
        0xa8c8, 0xa8c9, 0xa8ca, 0xa8cb, 0xa8cc, 0xa8cd, 0xa8ce, 0xa8cf,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xade5, 0xade6, 0xade7, 0xade8,
        0xade9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xa8d0, 0xa8d1, 0xa8d2, 0xa8d3, 0xa8d4, 0xa8d5, 0xa8d6,
        0xa8d7, 0xa8d8, 0xa8d9, 0xa8da, 0xa8db, 0xa8dc, 0xa8dd, 0xa8de,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xacdb, 0xacdc, 0xacdd, 0xacde, 0xacdf, 0xace0, 0xace1, 0xace2,
        0xace3, 0xace4, 0xace5, 0xace6, 0xace7, 0xace8, 0xace9, 0xacea,
        0xaceb, 0xacec, 0xaced, 0xacee, 0x0000, 0xacf1, 0x0000, 0x0000,
        0x0000, 0xacf0, 0x0000, 0x0000, 0xacf3, 0xacf2, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xacef, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xadc6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadca, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xadc1, 0x0000, 0x0000, 0x0000,
        0xadc4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xadc2, 0xadcc, 0x0000, 0x0000, 0xadcb, 0xadc5,
        0x0000, 0x0000, 0x0000, 0xadcd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadc7, 0x0000,
        0x0000, 0x0000, 0x0000, 0xadcf, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xadc0, 0xadce, 0x0000, 0x0000, 0xadc3, 0x0000, 0x0000,
        0x0000, 0xadc8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadc9,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xaddf, 0xadef, 0xadee, 0xaded, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xadd3, 0xadd4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xadd0, 0xadd1, 0xadd2, 0x0000,
        0x0000, 0xadd6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xadd5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa3de, 0x0000, 0xade3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xaea3, 0x0000, 0x0000, 0x0000, 0x21ad, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x21b2, 0x0000, 0x21b3, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x21de, 0x0000, 0x21d6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x21fe, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xaed3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x23ab, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x74e8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x23af,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xaedb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x23c8,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x23dd, 0x23de, 0x0000,
        0x0000, 0x0000, 0x0000, 0x23e1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x23e7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x24a3, 0x0000,
        0x24a6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x24af, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x24b8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x24c2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x24ca, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x24f9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x25bf, 0x0000, 0x0000, 0x0000, 0x0000, 0x25c3, 0x0000,
        0x0000, 0x25c1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x25d7,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x28a3, 0x28a5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x28a9, 0x28a8, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x28ac, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcfdf, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x28be, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcfef, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x28d6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x28d9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x28dc, 0x0000, 0x0000,
    ],
    [
        0x28de, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x28ef,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x28f1, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x28f4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x28f9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x28fb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x2cbb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2cc6,
        0x0000, 0x0000, 0x2cca, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ce0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ddb, 0x0000,
        0x0000, 0x0000, 0x0000, 0x2ddf, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2df1, 0x2eb6,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x2dfc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2eae, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x2eb2, 0x0000, 0x2eb4, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf5c9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2eed, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ee5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2fa8,
        0x2fa9, 0x0000, 0x0000, 0x0000, 0x0000, 0x2fac, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x2fb4, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf5fe, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xf6a1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2fc8, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x2fdd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf6ba,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ff7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x6ebb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x6ec2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x6ef1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6efe, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x6fc0, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x6fd4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x6ff0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x6ff7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x70a8, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7e6,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x70bf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x70c1, 0x0000,
        0x70c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x70c9, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x70d0, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x71b4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf8cd, 0x0000, 0x0000, 0x71c6, 0x0000, 0x71c8,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x71dc, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x71e7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x71ec,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

static THREE_E4_ROW: [u8; 64] = [
    1, 2, 3, 0, 4, 5, 6, 7, 8, 9, 0, 10, 11, 12, 0, 13,
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 0, 25, 26, 0, 27,
    28, 29, 30, 0, 0, 0, 31, 32, 33, 0, 34, 0, 35, 0, 0, 36,
    37, 0, 0, 38, 39, 40, 0, 0, 41, 42, 43, 44, 45, 46, 47, 48,
];

static THREE_E4: [[u16; 64]; 48] = [
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x72a2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x72ad, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x72b9, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x72e4, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x72f4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x72f7,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x72fd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x73b3, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73b7,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73c7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73cb, 0x0000,
        0x0000, 0x0000, 0x0000, 0x73c8, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73d3,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73d7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf9ed, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x74ab, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x74b6, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x74bb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x74ce, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x74dd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x74e1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75be, 0x0000,
        0x75c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x75c8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75ca,
        0x0000, 0x0000, 0x0000, 0x0000, 0x75cc, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x75cf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfad9, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfada, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75ec, 0x0000,
        0x0000, 0x0000, 0x75ee, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x75f7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x76b5, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x76b2, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x76b4, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x76d9, 0x0000, 0x0000, 0x0000, 0x0000, 0x76d4, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x76ed, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x76ee, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfbd1, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x77cf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77ec, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfbe0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x78a4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x78ba, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x78c3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x78ce, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x78d3,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x78eb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x79a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x79bf, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x79c9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xfccb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x79dc, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7aa7, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfdd8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7bea,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7bf0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x7bf5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7bf8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x7cb7, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7cd5, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x7da6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7da8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7daa, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x7db1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfebe,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x7dbf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x7eaa, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7ead, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ecb,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ee0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xb0ec, 0xc3fa, 0x21a2, 0xbcb7, 0x0000, 0x0000, 0x0000, 0xcbfc,
        0xbee6, 0xbbb0, 0xbee5, 0xb2bc, 0x0000, 0xc9d4, 0xcdbf, 0x21a3,
        0xd0a2, 0xb1af, 0x21a4, 0x0000, 0xb3ee, 0xd0a3, 0xc0a4, 0xd2c2,
        0xb5d6, 0xcaba, 0x0000, 0x0000, 0x0000, 0x0000, 0xbee7, 0x0000,
        0x0000, 0xcebe, 0x0000, 0x0000, 0x0000, 0x0000, 0xcac2, 0x0000,
        0xaea4, 0x21a5, 0xd0a4, 0x21a6, 0x70ae, 0xc3e6, 0x21a7, 0xaea5,
        0xaea6, 0xd0a5, 0xb6fa, 0x0000, 0x0000, 0x0000, 0xd0a6, 0x0000,
        0xb4dd, 0xc3b0, 0x0000, 0xbce7, 0xd0a7, 0x0000, 0x0000, 0xd0a8,
    ],
    [
        0x21a8, 0x0000, 0xd0a9, 0xc7b5, 0x0000, 0xb5d7, 0x0000, 0x21a9,
        0x21aa, 0x0000, 0x0000, 0xc7b7, 0x0000, 0xc6e3, 0xb8c3, 0xcbb3,
        0x0000, 0x21ac, 0x0000, 0x0000, 0x0000, 0xe9c9, 0xd0aa, 0xbee8,
        0xd0ab, 0xb2b5, 0x21af, 0x0000, 0x0000, 0xb6e5, 0xb8f0, 0xcce9,
        0x0000, 0x0000, 0xd6a6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x21b0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcdf0, 0x0000, 0xc6fd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb4a5, 0x0000,
    ],
    [
        0xb5b5, 0x0000, 0xd0ac, 0x0000, 0x0000, 0xd0ad, 0xcebb, 0x0000,
        0xcdbd, 0xc1e8, 0xd0af, 0xbbf6, 0xc6f3, 0xaea7, 0xd0b2, 0x0000,
        0x0000, 0xb1be, 0xb8df, 0x0000, 0xb8de, 0xb0e6, 0x0000, 0x0000,
        0xcfcb, 0xcfca, 0x0000, 0xbab3, 0xb0a1, 0x21b1, 0xd0b3, 0xd0b4,
        0xd0b5, 0xcbb4, 0xd0b6, 0x0000, 0xb8f2, 0xb0e7, 0xcbf2, 0x0000,
        0xb5fc, 0x0000, 0x0000, 0xb5fd, 0xb5fe, 0xc4e2, 0xcebc, 0x0000,
        0xd0b7, 0x0000, 0x0000, 0xd0b8, 0x0000, 0x0000, 0xd0b9, 0x0000,
        0x0000, 0x21b4, 0xbfcd, 0x21b5, 0x21b7, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xbdba, 0xbfce, 0xd0be, 0x21b8, 0xd0bc, 0x0000, 0xd0bd, 0xb5d8,
        0x21b9, 0x0000, 0xbaa3, 0xb2f0, 0x0000, 0xd0bb, 0xd0ba, 0xcaa9,
        0x21ba, 0x0000, 0x0000, 0x0000, 0xbbc6, 0xbbc5, 0xc2be, 0xd0bf,
        0xc9d5, 0xc0e7, 0x21bc, 0x0000, 0x0000, 0xa1b8, 0xd0c0, 0xd0c2,
        0x0000, 0xaea8, 0x0000, 0xc2e5, 0xcee1, 0xb0ca, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x21bb, 0x0000, 0xd0c1, 0xb2be, 0x0000,
        0xb6c4, 0x21bd, 0xc3e7, 0x0000, 0x0000, 0x21be, 0xb7ef, 0xd0c3,
        0x0000, 0x0000, 0x0000, 0xc7a4, 0x0000, 0xaea9, 0x0000, 0xaeaa,
    ],
    [
        0x21bf, 0xb4eb, 0x0000, 0xaeab, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd0c4, 0xb0cb, 0xaeac, 0x0000, 0xb8e0, 0xb4ec, 0xc9fa,
        0xc8b2, 0xb5d9, 0x0000, 0x0000, 0x0000, 0x0000, 0x21c0, 0x0000,
        0x0000, 0x0000, 0xb2f1, 0x0000, 0xd0e7, 0xc5c1, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc7ec,
        0xd0c6, 0x0000, 0x0000, 0x0000, 0xc8bc, 0x0000, 0xcee2, 0x21c2,
        0xbfad, 0x0000, 0xbbc7, 0x0000, 0xbbf7, 0xb2c0, 0x21c3, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xc4d1, 0x0000, 0x0000, 0xc3a2, 0xd0ca,
        0xaeae, 0xaeaf, 0x0000, 0x0000, 0x0000, 0xb0cc, 0xc4e3, 0xbdbb,
        0xbab4, 0xcda4, 0x0000, 0xc2ce, 0x21c4, 0xb2bf, 0xaeb0, 0xd0c9,
        0x21c5, 0xcdbe, 0xd0c5, 0xd0c7, 0xbaee, 0xd0c8, 0xd5a4, 0xaeb1,
        0xaead, 0x0000, 0x0000, 0x0000, 0x21c1, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd0d0, 0xaeb2, 0x0000, 0xaeb3, 0x0000, 0x0000, 0xd0d3,
        0xd0d1, 0x0000, 0x0000, 0xb2c2, 0x0000, 0xcabb, 0xd0cb, 0x21c7,
        0x21c8, 0x0000, 0x21c9, 0xd0cf, 0xb8f3, 0x21ca, 0xaeb4, 0xbbc8,
    ],
    [
        0x0000, 0x0000, 0x21cb, 0xb4a6, 0x0000, 0x21cc, 0xd0d4, 0x0000,
        0xd0cc, 0x0000, 0xaeb5, 0xcee3, 0x0000, 0xbbf8, 0x0000, 0xd0cd,
        0x0000, 0xd0d2, 0x21cd, 0x0000, 0xaeb6, 0x0000, 0xd0d5, 0xaeb7,
        0xd0ce, 0x0000, 0x21ce, 0xb6a1, 0x0000, 0xb0cd, 0x0000, 0x0000,
        0xb6a2, 0xb2c1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd5a5, 0x0000, 0xcbf9, 0xc9ee, 0xb8f4,
        0x0000, 0x0000, 0x21d0, 0x0000, 0x0000, 0xbfaf, 0xceb7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x21d1, 0xcad8,
    ],
    [
        0x0000, 0x0000, 0xb7b8, 0xc2a5, 0xb2e4, 0x21d2, 0x0000, 0x0000,
        0x0000, 0xaeb9, 0xbdd3, 0x21d3, 0x0000, 0x0000, 0xd0d9, 0x21d4,
        0xd0de, 0xd0dc, 0x21d5, 0x0000, 0xd0d7, 0x0000, 0x0000, 0xc2af,
        0xd0da, 0x0000, 0xd0dd, 0xd0db, 0x0000, 0xcadd, 0x0000, 0xd0d8,
        0xaeba, 0xbfae, 0x0000, 0xcbf3, 0xd0df, 0xd0e0, 0x21cf, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbda4, 0xd0ed,
        0x0000, 0xaea1, 0x21d7, 0xc7d0, 0x0000, 0xc9b6, 0xd0e8, 0x0000,
        0xcaf0, 0x0000, 0xb2b6, 0x0000, 0x0000, 0x0000, 0xd0ec, 0x0000,
    ],
];

static THREE_E5_ROW: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
];

static THREE_E5: [[u16; 64]; 64] = [
    [
        0x21d8, 0xaebb, 0xaebc, 0x0000, 0x0000, 0xd0e6, 0xd0ef, 0x0000,
        0x0000, 0xc1d2, 0x0000, 0xb8c4, 0x0000, 0xc7dc, 0xaebd, 0xe0c7,
        0x21d9, 0xd0ee, 0xc5dd, 0x21da, 0xd0e3, 0x0000, 0xb8f6, 0x0000,
        0xaebe, 0xb8f5, 0xd0e1, 0x0000, 0x21db, 0x0000, 0x21dc, 0xbcda,
        0x0000, 0xd0e9, 0x21dd, 0xcaef, 0xc3cd, 0xd0e5, 0xb7f1, 0xaebf,
        0xd0e2, 0xd0ea, 0xd0e4, 0xced1, 0xd0eb, 0xcfc1, 0xaec0, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb6e6, 0x0000,
        0x0000, 0xb7f0, 0x0000, 0xaec2, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xaec1, 0xaec3, 0x21df, 0xd0f0, 0x0000, 0x0000, 0x21e0, 0xd0f1,
        0xd0f5, 0xb0ce, 0x0000, 0x0000, 0x0000, 0x0000, 0x21e1, 0xcad0,
        0xd0f4, 0x0000, 0x0000, 0x21e2, 0x0000, 0xd0f3, 0xd0f7, 0x21e3,
        0x0000, 0x0000, 0xd0f6, 0x0000, 0xc4e4, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x21e4, 0x0000, 0xb7f2, 0x21e5, 0x0000,
        0x0000, 0x0000, 0x21e6, 0x0000, 0xd0f8, 0x0000, 0x0000, 0x0000,
        0x21e7, 0x0000, 0xbcc5, 0x0000, 0xc2a6, 0xc4e5, 0xb6f6, 0x0000,
        0xd0f9, 0x0000, 0x0000, 0x0000, 0x0000, 0xb5b6, 0x0000, 0x0000,
    ],
    [
        0xd0fa, 0x0000, 0x0000, 0x0000, 0x0000, 0xd0fc, 0x0000, 0x0000,
        0x21e9, 0x0000, 0x0000, 0x0000, 0x0000, 0xcbb5, 0x0000, 0x0000,
        0x0000, 0xb7e6, 0x21ea, 0x21eb, 0xaec4, 0x21ec, 0x21ed, 0x0000,
        0xbbb1, 0xc8f7, 0xd0fb, 0x0000, 0x21ee, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x21e8, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x21ef, 0x0000, 0xbac5, 0xcdc3, 0x0000, 0x0000,
        0x0000, 0x21f1, 0xd0fe, 0xd1a3, 0xd0fd, 0xbac4, 0x0000, 0xbdfd,
        0x0000, 0x0000, 0x21f2, 0x21f3, 0x0000, 0x0000, 0xb7b9, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xd1a4, 0x0000, 0x21f4, 0xb6cf, 0x0000, 0x21f5,
        0x0000, 0xd1a1, 0xd1a2, 0x0000, 0xaec5, 0xc6af, 0x21f8, 0xc1fc,
        0xaec7, 0xb6a3, 0x0000, 0x0000, 0x21fa, 0xcbcd, 0xd1a5, 0x0000,
        0x0000, 0x21fb, 0xcebd, 0x0000, 0x0000, 0x0000, 0xd1a6, 0x0000,
        0x0000, 0x21fc, 0x0000, 0xd1a9, 0x0000, 0xd1a7, 0xaec8, 0xc1ce,
        0x0000, 0x21fd, 0x0000, 0x0000, 0x0000, 0xd1a8, 0xd1aa, 0x0000,
        0x0000, 0x0000, 0xaec6, 0x21f6, 0x0000, 0xd1ac, 0x0000, 0x0000,
        0x0000, 0xd1ab, 0x0000, 0xcac8, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xb5b7, 0xd1ae, 0xd1af, 0xaecb, 0xb2af, 0x0000, 0xaeca, 0x0000,
        0x23a1, 0xd1ad, 0x0000, 0xaecc, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xbcf4, 0x0000, 0xd1b2, 0xd1b1, 0xd1b0, 0x23a3,
        0xd0d6, 0x0000, 0xd1b3, 0x23a4, 0x0000, 0x0000, 0xaecd, 0xbdfe,
        0x0000, 0xd1b4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcda5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xccd9, 0x0000, 0x0000, 0xaece, 0x0000, 0xd1b6,
        0x0000, 0x0000, 0xd1b5, 0xd1b8, 0xd1b7, 0x0000, 0x0000, 0xd1b9,
    ],
    [
        0xd1ba, 0xb0f4, 0x0000, 0xb8b5, 0xb7bb, 0xbdbc, 0xc3fb, 0xb6a4,
        0xc0e8, 0xb8f7, 0xaecf, 0xb9ee, 0xd1bc, 0xccc8, 0xc5c6, 0x0000,
        0xbbf9, 0x0000, 0xd1bb, 0x0000, 0xd1bd, 0xaed1, 0x0000, 0xaed2,
        0x0000, 0x0000, 0xc5de, 0x0000, 0xb3f5, 0x0000, 0x0000, 0x0000,
        0x23a6, 0x0000, 0xd1be, 0x0000, 0x0000, 0xc6fe, 0x0000, 0x0000,
        0xc1b4, 0xd1c0, 0xd1c1, 0xc8ac, 0xb8f8, 0xcfbb, 0xd1c2, 0x0000,
        0x0000, 0xb6a6, 0x0000, 0x23a8, 0x0000, 0xcabc, 0xc2b6, 0xb6f1,
        0xc5b5, 0x0000, 0x0000, 0x74f4, 0xb7f3, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd1c3, 0x0000, 0xd1c4, 0x23a9, 0x0000, 0xc6e2, 0xb1df, 0x0000,
        0x0000, 0xd1c7, 0xbafd, 0x23aa, 0xd1c6, 0xbac6, 0x0000, 0xd1c8,
        0xe6ee, 0xd1c9, 0xcbc1, 0xd1ca, 0x0000, 0xd1cb, 0xd1cc, 0xbee9,
        0x23ac, 0xbccc, 0x0000, 0x0000, 0x0000, 0xaed4, 0x0000, 0x0000,
        0xb4a7, 0x0000, 0xd1cf, 0x23ad, 0xd1cd, 0xccbd, 0xd1ce, 0x0000,
        0xc9da, 0xd1d0, 0xd1d1, 0xd1d2, 0xc5df, 0x23ae, 0x0000, 0x0000,
        0xd1d6, 0xd1d4, 0xd1d5, 0xd1d3, 0xbae3, 0xd1d7, 0xccea, 0xcee4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x23b0, 0xd1d8, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xaed5, 0xc0a8, 0xd1d9, 0xbdda, 0x0000,
        0x0000, 0xd1da, 0xaed6, 0xc3fc, 0xcebf, 0xc5e0, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd2c5, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd1db, 0xf4a5, 0xb6c5, 0xaed7, 0x0000,
        0xd1dc, 0xcbde, 0xaed8, 0x0000, 0x0000, 0x0000, 0xbde8, 0xc2fc,
        0x0000, 0xd1de, 0xc6e4, 0x0000, 0x0000, 0xd1df, 0xaed9, 0x0000,
        0xd1e0, 0xb3ae, 0x0000, 0x23b3, 0x23b4, 0xd1e1, 0xb6a7, 0x0000,
        0xc6cc, 0xb1fa, 0xbdd0, 0x0000, 0x0000, 0xc8a1, 0xd1e2, 0x0000,
    ],
    [
        0xc5e1, 0xaeda, 0x23b5, 0xbfcf, 0xd1e3, 0x0000, 0xcaac, 0xc0da,
        0xb4a2, 0x0000, 0xb4a9, 0xd1e4, 0x0000, 0x0000, 0xd1e6, 0x0000,
        0x0000, 0xb7ba, 0x23b6, 0xaedc, 0xd1e5, 0xaedd, 0x23b7, 0xcef3,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbde9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc8bd, 0xcacc, 0x0000, 0xd1e7,
        0x0000, 0xcdf8, 0xd1e8, 0x0000, 0x0000, 0x0000, 0xd1e9, 0x0000,
        0xc5fe, 0x0000, 0x0000, 0xd1ea, 0x0000, 0x0000, 0xc0a9, 0xbafe,
        0xb7f4, 0xd1eb, 0xbbc9, 0xb9ef, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xc4e6, 0xd1ed, 0x0000, 0x0000, 0xc2a7,
        0x0000, 0xaede, 0xbaef, 0xd1ee, 0xd1ef, 0xc1b0, 0x0000, 0xd1ec,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd1f1, 0x23b9, 0xcbb6, 0xaedf,
        0x0000, 0x0000, 0x0000, 0xb9e4, 0x23ba, 0xaffe, 0xd1f0, 0x0000,
        0x0000, 0xaee0, 0x0000, 0xb7f5, 0xbade, 0xc7ed, 0x0000, 0x0000,
        0x0000, 0xd1f4, 0xd1f2, 0x0000, 0x23bb, 0x0000, 0x0000, 0xc9fb,
        0xbeea, 0xd1fb, 0xb3e4, 0xd1f5, 0xd1f3, 0xc1cf, 0x0000, 0x23bc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd1f7, 0x0000, 0xd1f6,
    ],
    [
        0x0000, 0x0000, 0x23be, 0xb3c4, 0x23bd, 0x0000, 0x0000, 0xb7e0,
        0xd1fc, 0xcead, 0x0000, 0x0000, 0x0000, 0xd1f8, 0x0000, 0x0000,
        0x0000, 0xd1fd, 0xd1fa, 0xaee1, 0xd1f9, 0x0000, 0x0000, 0x0000,
        0x23c0, 0x0000, 0x0000, 0xcecf, 0x0000, 0x0000, 0x0000, 0xb8f9,
        0xb2c3, 0x0000, 0x0000, 0xcef4, 0x23c2, 0x0000, 0x23c3, 0x0000,
        0x0000, 0xbdf5, 0xc5d8, 0xb9e5, 0xd2a2, 0xd2a3, 0x0000, 0x23c4,
        0x0000, 0xcee5, 0x0000, 0x0000, 0xcfab, 0xd2a5, 0x0000, 0x0000,
        0x0000, 0xb8fa, 0x23c5, 0x23c6, 0xd2a4, 0x0000, 0xb3af, 0x0000,
    ],
    [
        0x0000, 0xd2a6, 0x0000, 0xcbd6, 0x0000, 0xc4bc, 0x0000, 0xcda6,
        0xaee2, 0xcad9, 0x23c7, 0x0000, 0xaee4, 0xd2a7, 0x0000, 0x0000,
        0xaee5, 0x23c9, 0xf0d5, 0x0000, 0x0000, 0xc6b0, 0xaee6, 0xd2a8,
        0xb4aa, 0xccb3, 0x0000, 0xaee7, 0x0000, 0xbea1, 0xd2a9, 0xcae7,
        0xd2ad, 0x0000, 0xc0aa, 0xd2aa, 0xb6d0, 0x0000, 0xd2ab, 0xb4ab,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xaee9, 0x0000, 0xb7ae, 0xd2ae, 0x0000, 0xd2af, 0x0000, 0x23cb,
        0xd2b0, 0xd2b1, 0xbcdb, 0xaeea, 0x0000, 0x0000, 0xb8fb, 0xccde,
    ],
    [
        0xaeeb, 0xcce8, 0xc6f7, 0x0000, 0x0000, 0xcaf1, 0xd2b2, 0xaeec,
        0xd2b3, 0x0000, 0x23cc, 0x23cd, 0x0000, 0xd2b5, 0x0000, 0xd2b7,
        0xd2b6, 0x0000, 0x0000, 0x0000, 0x0000, 0xd2b8, 0xb2bd, 0xcbcc,
        0x0000, 0xbafc, 0xd2b9, 0x0000, 0xaeed, 0xc1d9, 0x0000, 0x0000,
        0xbea2, 0xb6a9, 0x0000, 0xd2ba, 0x23ce, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc8db, 0x0000, 0x0000, 0x0000, 0x0000, 0xd2bb,
        0x0000, 0xd2bc, 0x0000, 0xd2bd, 0x0000, 0x23cf, 0x0000, 0x0000,
        0xd2be, 0xc9a4, 0xb6e8, 0xb0e5, 0x0000, 0x0000, 0x23d0, 0xc6bf,
    ],
    [
        0xd2bf, 0xbdbd, 0x23d1, 0xc0e9, 0x0000, 0xd2c1, 0xd2c0, 0xbea3,
        0xb8e1, 0xd2c3, 0xc8be, 0x0000, 0x0000, 0xd2c4, 0x0000, 0x0000,
        0x0000, 0xc8dc, 0xc2b4, 0xc2ee, 0xb6a8, 0x0000, 0x0000, 0xc6ee,
        0xc3b1, 0x0000, 0xc7ee, 0x0000, 0xcbce, 0x0000, 0xd2c6, 0x0000,
        0xc0ea, 0xaeef, 0x0000, 0xaef0, 0x0000, 0x0000, 0xb7b5, 0x23d4,
        0x0000, 0xd2c7, 0x0000, 0x0000, 0x23d5, 0x0000, 0xd2c8, 0xb1ac,
        0xb0f5, 0xb4ed, 0x0000, 0xc2a8, 0xb5d1, 0xcdf1, 0x0000, 0xd2cb,
        0xb2b7, 0x0000, 0x23d6, 0xd2ca, 0x0000, 0xaef1, 0x0000, 0xb6aa,
    ],
    [
        0x0000, 0x0000, 0xd2cc, 0x0000, 0xccf1, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xaef2, 0x0000, 0x0000, 0xd2cd, 0x0000,
        0xced2, 0x0000, 0xb8fc, 0x0000, 0x0000, 0xaef3, 0x0000, 0xb8b6,
        0xd2ce, 0x0000, 0x0000, 0x0000, 0x23d7, 0xd2d0, 0xd2cf, 0x0000,
        0xbfdf, 0xb1b9, 0x0000, 0x0000, 0x0000, 0xb1de, 0xd2d1, 0x0000,
        0xd2d2, 0x0000, 0xaef4, 0xb8b7, 0x23d8, 0x0000, 0xd2d3, 0x23da,
        0x0000, 0x0000, 0x0000, 0xb5ee, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x23db, 0x0000, 0xbbb2, 0xd2d4, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcbf4, 0xbab5, 0xb5da, 0xcda7, 0xc1d0, 0xc8bf, 0xbcfd, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xbdc7, 0x23df, 0xbce8, 0xbcf5,
        0x0000, 0xbdf6, 0x23e0, 0xc8c0, 0x0000, 0x0000, 0x0000, 0xd2d7,
        0x0000, 0xb1c3, 0xc1d1, 0xb8fd, 0xb8c5, 0xb6e7, 0x0000, 0x0000,
        0xd2db, 0xc3a1, 0xc2fe, 0xb6ab, 0xbea4, 0xd2dc, 0xd2da, 0xb2c4,
        0xc2e6, 0xbcb8, 0xbbcb, 0xb1a6, 0x23e2, 0x23e3, 0xb3f0, 0xb9e6,
        0xbbca, 0x0000, 0xd2dd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xd2de, 0x0000, 0xb5c9, 0xb3c6, 0x0000, 0x0000, 0x0000,
        0xb9e7, 0xb5c8, 0xc4df, 0xb1a5, 0xc6b1, 0xccbe, 0xb9a1, 0xcdf9,
        0xc5c7, 0xb8fe, 0xaef5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb7af, 0x0000, 0xd2e7, 0xcffe, 0xb6e3,
        0xcbca, 0x0000, 0x0000, 0x0000, 0x23e5, 0x0000, 0xc8dd, 0xaef6,
        0x23e6, 0xd2e6, 0x0000, 0xb4de, 0xd2e1, 0xd2e2, 0xd2e4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd2e5, 0x0000,
        0xb5db, 0xbfe1, 0x0000, 0xcaad, 0xd2e3, 0xd2df, 0xb8e3, 0x0000,
    ],
    [
        0xd2e0, 0x0000, 0xcfa4, 0x23e8, 0x0000, 0x0000, 0xcaf2, 0x0000,
        0xc4e8, 0xb8e2, 0xb9f0, 0x0000, 0x0000, 0xaef7, 0xd2e8, 0x0000,
        0x0000, 0xc6dd, 0x0000, 0x0000, 0x0000, 0x23e4, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd2ec,
        0x0000, 0x0000, 0x23e9, 0x0000, 0x0000, 0x0000, 0x23ea, 0x0000,
        0xbcfe, 0x0000, 0xbcf6, 0xaef9, 0x23eb, 0x0000, 0x0000, 0x0000,
        0xd2ef, 0xd2ed, 0x0000, 0xcca3, 0xaefa, 0xd2ea, 0xd2f3, 0xd2ee,
        0x0000, 0x0000, 0x0000, 0xd2f1, 0xb8c6, 0xccbf, 0x0000, 0xaefb,
    ],
    [
        0xd2f2, 0x0000, 0x0000, 0x0000, 0xd2f4, 0x0000, 0xd2f6, 0x0000,
        0xaefc, 0x0000, 0x23ec, 0xbaf0, 0xcfc2, 0x23ed, 0xd2eb, 0xd2e9,
        0xd2f5, 0x0000, 0xd2f0, 0x0000, 0x0000, 0x23ee, 0xaefd, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xaef8, 0x0000, 0x0000, 0x0000,
        0x23ef, 0xaefe, 0xd2f8, 0x0000, 0xd3a3, 0xd2fa, 0x23f0, 0x0000,
        0xd2fe, 0xafa1, 0x0000, 0xd3a1, 0xd2fb, 0x23f1, 0x23f2, 0xd3be,
        0x0000, 0x0000, 0xbae9, 0xb3b1, 0x0000, 0x0000, 0x0000, 0x23f3,
        0xd2f9, 0x0000, 0x23f4, 0x0000, 0xd3a5, 0xb0f6, 0xd3a4, 0x23f5,
    ],
    [
        0xb0a5, 0xc9ca, 0xd3a2, 0x23f6, 0xd2fc, 0x0000, 0xafa2, 0xd2f7,
        0xd2fd, 0xbac8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd3a6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb0f7, 0xd3af, 0x0000, 0x0000, 0xd3a7, 0xd3a8, 0x0000,
        0xbea5, 0xcbe9, 0x0000, 0x0000, 0x23f8, 0xd3ad, 0xd3ac, 0x23f9,
        0x0000, 0x23fa, 0xc5af, 0x23fb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd3ae, 0x0000, 0x0000, 0xd3ab, 0x0000, 0xafa3,
    ],
    [
        0x23fc, 0x23fd, 0x0000, 0x0000, 0xb1b4, 0x0000, 0xbab6, 0xbfb0,
        0x0000, 0x23fe, 0x0000, 0x0000, 0x0000, 0x0000, 0xafa4, 0xd3a9,
        0xc5e2, 0x0000, 0x0000, 0x0000, 0xd3aa, 0x0000, 0xb0a2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xafa5, 0x0000, 0x0000, 0xd3b4, 0xcda3,
        0x0000, 0xbea7, 0x0000, 0xd3ba, 0x0000, 0xafa6, 0x0000, 0x0000,
        0xd3b9, 0xd3b0, 0x0000, 0x0000, 0x24a1, 0x0000, 0xc2c3, 0x0000,
    ],
    [
        0xd3b1, 0x24a2, 0x0000, 0x0000, 0xc2ef, 0xd3b6, 0xbea6, 0x24a4,
        0x0000, 0x0000, 0x24a5, 0x0000, 0xd3b3, 0x0000, 0x0000, 0xcce4,
        0xafa7, 0x0000, 0x0000, 0xb7bc, 0x0000, 0x0000, 0xd3b7, 0xd3b8,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd3b5, 0xd3bb, 0xafa8, 0x0000,
        0x24a7, 0x24a8, 0x0000, 0xd3b2, 0x24a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd3c1, 0xd3c6, 0x24ab, 0xd3c2, 0x0000,
    ],
    [
        0xd3bd, 0xafa9, 0x24ac, 0xd3c7, 0xc1b1, 0x0000, 0xafaa, 0xd3c9,
        0x24ad, 0xb9a2, 0xd3bf, 0xc3fd, 0x0000, 0x0000, 0xafab, 0x0000,
        0x0000, 0x24ae, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd3c3, 0xd3bc, 0xb4ad, 0x0000, 0xb4ee, 0xb3e5, 0xd3c4, 0xd3c0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb7f6,
        0xd3ca, 0xd3c8, 0xc1d3, 0xb5ca, 0xb6ac, 0xafad, 0xd3c5, 0x0000,
        0xb6f4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb1c4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x24b3,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xd3ce, 0xd3cc, 0x0000, 0xd4a7,
        0x0000, 0x24b4, 0x0000, 0x0000, 0x24b5, 0x0000, 0xafae, 0x0000,
        0x0000, 0x24b6, 0x24b0, 0x0000, 0xd3d1, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd3cb, 0x0000, 0xd3cf, 0x24b7, 0x0000, 0xd3cd,
        0x0000, 0x0000, 0x24b9, 0xbbcc, 0xd3d0, 0x0000, 0x0000, 0x0000,
        0x0000, 0x24bb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd3d3,
        0x0000, 0xd3d8, 0x0000, 0x0000, 0x0000, 0xd3d6, 0xd3d5, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc3b2, 0x24be,
        0xafb0, 0xb2c5, 0x0000, 0x0000, 0x0000, 0x0000, 0xafb1, 0x0000,
        0x24bf, 0x0000, 0x0000, 0x0000, 0xd3d2, 0x0000, 0xd3d4, 0xbea8,
        0xb1b3, 0x0000, 0x0000, 0xd3d7, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x24bc, 0xb2de, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd3e2,
        0x24c0, 0xbefc, 0xd3de, 0x0000, 0xd3dc, 0x0000, 0xd3dd, 0x24c1,
        0xd3df, 0x0000, 0x0000, 0xafb2, 0x0000, 0x24c3, 0x0000, 0x24c4,
    ],
    [
        0x24c5, 0x0000, 0xb1bd, 0x0000, 0x0000, 0x0000, 0x0000, 0x24c6,
        0x0000, 0xafb3, 0x0000, 0x0000, 0xc1b9, 0x0000, 0xd3d9, 0x0000,
        0xd3da, 0x0000, 0x0000, 0xf4a7, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb3fa, 0x0000, 0x0000, 0x24c7, 0x0000,
        0x24c8, 0x0000, 0x0000, 0x0000, 0xd3e1, 0x0000, 0xafb5, 0x0000,
        0xb4ef, 0x0000, 0xd3e4, 0xd3e0, 0xd3e3, 0x24c9, 0x0000, 0xafb7,
        0x0000, 0xafb8, 0xafb9, 0x0000, 0xcaae, 0x0000, 0xafb4, 0x0000,
        0xc6d5, 0x0000, 0xc8b8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd3e6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd3e5, 0xb3c5,
        0x24cb, 0x0000, 0xd3e7, 0x0000, 0x24cc, 0x0000, 0x0000, 0xd3ea,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd3e9, 0x24cd, 0x0000, 0x0000,
        0x0000, 0xafba, 0x24ce, 0x0000, 0x0000, 0x24cf, 0xafbb, 0x0000,
        0xd3e8, 0x0000, 0xc7b9, 0x0000, 0x0000, 0xd3eb, 0x0000, 0x0000,
        0x24d0, 0xafbc, 0x0000, 0x0000, 0xafbd, 0x24d1, 0xd3ec, 0x0000,
        0x0000, 0x0000, 0x24d2, 0xafbe, 0xd3ee, 0x0000, 0xd3ed, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd3f0, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd3f3, 0xd3f1, 0xd3ef, 0xd3f2, 0x0000, 0x24d3, 0x0000, 0x0000,
        0xd3f4, 0xafbf, 0xafc0, 0x0000, 0x0000, 0x24d4, 0xd3f5, 0x0000,
        0x0000, 0xd3f6, 0x0000, 0xd3f7, 0x0000, 0x0000, 0x0000, 0xd3f8,
        0xd1c5, 0x0000, 0xbcfc, 0xbbcd, 0x0000, 0x0000, 0xb2f3, 0x24d5,
        0xb0f8, 0x0000, 0x0000, 0xc3c4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x24d6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd3f9, 0x0000,
        0xbaa4, 0x0000, 0xb0cf, 0xbfde, 0x0000, 0x0000, 0x24d7, 0x24d8,
        0x0000, 0xd3fa, 0xb8c7, 0x0000, 0x0000, 0xb9f1, 0x0000, 0xd3fc,
    ],
    [
        0xd3fb, 0x0000, 0x0000, 0xcae0, 0xd3fd, 0x0000, 0x0000, 0x0000,
        0xd4a1, 0xd3fe, 0xafc1, 0xd4a2, 0x0000, 0xd4a3, 0x0000, 0xb7f7,
        0x0000, 0x0000, 0xb1e0, 0xd4a4, 0x0000, 0x24da, 0xd4a6, 0x0000,
        0xd4a5, 0x0000, 0x0000, 0x0000, 0xd4a8, 0x0000, 0x0000, 0xc5da,
        0x0000, 0xafc3, 0x0000, 0x24db, 0x0000, 0x0000, 0xd4a9, 0xb0b5,
        0xbadf, 0x24dd, 0x0000, 0x0000, 0x0000, 0xb7bd, 0x0000, 0xafc4,
        0xc3cf, 0x0000, 0x0000, 0xafc5, 0xafc6, 0x0000, 0x0000, 0xd4aa,
        0xd4ab, 0x0000, 0x0000, 0xd4ad, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd4ae, 0x0000, 0xbae4, 0x0000, 0x0000, 0x24df, 0x24e0, 0xb6d1,
        0x0000, 0x0000, 0xcbb7, 0x0000, 0x24e1, 0x24e2, 0xd4ac, 0xd4af,
        0xbac1, 0xb9a3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd4b3, 0x0000, 0x0000, 0xbaa5, 0x0000, 0xc3b3, 0x0000,
        0x24e4, 0xd4b0, 0xc4da, 0x0000, 0x0000, 0x0000, 0x0000, 0x24e5,
        0xafc7, 0x0000, 0x0000, 0x24e6, 0x24e7, 0x24e8, 0x0000, 0xafc8,
        0x0000, 0x0000, 0x0000, 0x24e9, 0xafc9, 0x0000, 0x0000, 0xd4b4,
    ],
    [
        0x0000, 0x0000, 0xbfe2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd4b2, 0xd4b5, 0x0000, 0xb7bf, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd4b6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x24ed, 0x0000, 0xafca, 0x24ee, 0x24ef, 0x0000,
        0xd4b7, 0x0000, 0xb9a4, 0xb3c0, 0xd4b9, 0x0000, 0x0000, 0x0000,
        0x24f0, 0x0000, 0xd4ba, 0x0000, 0x24ec, 0x0000, 0x0000, 0x0000,
        0xd4bb, 0x0000, 0x0000, 0xd4b8, 0x0000, 0x0000, 0x0000, 0x0000,
        0xafcd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd4b1, 0x0000, 0x0000, 0xd4bc, 0x0000, 0x0000, 0xd4bd, 0xafce,
        0xafcf, 0x0000, 0x0000, 0xcbe4, 0x24f3, 0x0000, 0xbeeb, 0xafd0,
        0x0000, 0x0000, 0xd4bf, 0xd4c0, 0xd4be, 0x0000, 0xd4c2, 0x24f1,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc7b8, 0x0000, 0x24f6, 0xb0e8,
        0xc9d6, 0x0000, 0x0000, 0xd4c3, 0xafd1, 0x0000, 0x24f7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xafd2, 0x0000, 0x0000,
        0x24f8, 0x0000, 0x0000, 0x0000, 0xbefd, 0xafd3, 0xafd4, 0xbcb9,
        0x24fa, 0xc7dd, 0xb4f0, 0x24fb, 0xbaeb, 0x24fc, 0x0000, 0xafd5,
    ],
    [
        0xcbd9, 0x0000, 0xc6b2, 0x0000, 0x24fd, 0xb7f8, 0xc2cf, 0x0000,
        0x0000, 0xafd6, 0xd4c1, 0xd4c4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc2c4, 0x0000, 0x0000,
        0x0000, 0xd4c5, 0x0000, 0x0000, 0x0000, 0xd4c6, 0x24fe, 0x0000,
        0x25a1, 0xd4c8, 0x0000, 0x0000, 0xc4e9, 0x0000, 0x0000, 0x25a2,
        0x0000, 0x0000, 0xb4ae, 0x0000, 0x0000, 0x0000, 0x0000, 0xf4a1,
        0xb1e1, 0xcaf3, 0x25a3, 0x0000, 0xbeec, 0xc5c8, 0x0000, 0x0000,
        0x0000, 0x25a4, 0xbae6, 0x0000, 0x0000, 0xd4ce, 0x0000, 0x0000,
    ],
    [
        0xcabd, 0xcedd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x25a6, 0xb2f4, 0xd4ca, 0x25a7, 0x0000, 0x0000, 0x0000,
        0x0000, 0xc1ba, 0xd4cd, 0x0000, 0xc5e3, 0x0000, 0x0000, 0xc5c9,
        0xc5e4, 0xc8b9, 0xc4cd, 0x0000, 0x0000, 0x0000, 0xbac9, 0x0000,
        0x0000, 0xafd8, 0xd4c9, 0x0000, 0xafd9, 0x0000, 0x0000, 0x25a8,
        0x0000, 0xb1f6, 0x0000, 0xc5b6, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd4cb, 0x0000, 0xd4c7, 0x0000, 0x0000, 0xbfd0, 0x0000, 0x0000,
        0x0000, 0xd4cf, 0x0000, 0x0000, 0xafdb, 0x0000, 0xbdce, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xb6ad, 0x0000, 0xd4d0, 0x0000, 0x0000,
        0x0000, 0xafdc, 0x25a9, 0x25aa, 0x0000, 0x25ab, 0x0000, 0x25ac,
        0x25ad, 0x0000, 0x0000, 0xcae8, 0x25ae, 0x0000, 0x0000, 0xc1fd,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc4c6, 0x25af, 0xafdd, 0xd4d2,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcbcf, 0xafdf, 0x25b0, 0xd4d3, 0x0000, 0x0000, 0xd4d8, 0x0000,
        0x0000, 0x25b1, 0x0000, 0xcaaf, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd4d7, 0xd4d1, 0xd4d4, 0xd4d6, 0x0000, 0x0000, 0xbaa6, 0x0000,
    ],
    [
        0x0000, 0xcac9, 0x0000, 0x25b3, 0x0000, 0xd4d9, 0x0000, 0xc3c5,
        0x0000, 0x0000, 0xb2f5, 0x0000, 0xbeed, 0x25b4, 0xafe2, 0x0000,
        0x0000, 0xd4db, 0xafe1, 0xd4da, 0xafe3, 0xb9e8, 0x0000, 0xd4dc,
        0xd4de, 0xd4dd, 0xafe4, 0x0000, 0xd4e0, 0x0000, 0xd4d5, 0xd4e2,
        0xafe5, 0x0000, 0x25b5, 0x0000, 0xd4e1, 0xd4df, 0x0000, 0x0000,
        0x0000, 0xafe6, 0x0000, 0xbbce, 0xbfd1, 0x0000, 0xc1d4, 0xd4e3,
        0xc0bc, 0xb0ed, 0xc7e4, 0x25b6, 0x25b7, 0x0000, 0x0000, 0xc4db,
        0x0000, 0xd4e5, 0xd4e4, 0xd4e6, 0xd4e7, 0xd4e8, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xd4e9, 0x0000, 0x0000, 0x25b8, 0x25b9, 0x0000,
        0x0000, 0xcad1, 0xd4ea, 0x25ba, 0xafe7, 0x25bb, 0x0000, 0xb2c6,
        0xd4eb, 0x0000, 0x0000, 0x0000, 0x25bc, 0xcdbc, 0xb3b0, 0x0000,
        0xd2c9, 0xbdc8, 0xc2bf, 0xd4ec, 0xcceb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xccb4, 0x0000, 0x25bd, 0xd4ee, 0x0000, 0xc2e7,
        0x0000, 0xc5b7, 0xc2c0, 0xc9d7, 0xd4ef, 0xd4f0, 0xb1fb, 0x0000,
        0x0000, 0xbcba, 0xd4f1, 0x0000, 0x0000, 0x0000, 0x0000, 0xb0d0,
        0xd4f2, 0x0000, 0x0000, 0x0000, 0x0000, 0x25c0, 0xd4f3, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xb1e2, 0x0000, 0x25c2, 0xb4f1,
        0xc6e0, 0xcaf4, 0x0000, 0x0000, 0x0000, 0x0000, 0xd4f7, 0xc1d5,
        0xd4f6, 0xb7c0, 0x0000, 0x0000, 0xcbdb, 0xd4f5, 0x0000, 0xc5e5,
        0xd4f9, 0x0000, 0xd4f8, 0x25c5, 0x0000, 0xafe9, 0x0000, 0x25c6,
        0xd4fb, 0x0000, 0xd4fa, 0x0000, 0x0000, 0xb1fc, 0x0000, 0xd4fc,
        0xbea9, 0xd4fe, 0xc3a5, 0x0000, 0xd4fd, 0xafea, 0xcab3, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbdf7, 0xc5db, 0x25c8, 0x25c9, 0x0000,
        0xd5a1, 0x0000, 0x0000, 0x0000, 0x25ca, 0xb9a5, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xd5a2, 0xc7a1, 0xc8de, 0xccd1, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc7a5, 0xafeb, 0x0000, 0xd5ab, 0x0000, 0x0000,
        0x0000, 0x0000, 0xafec, 0xb5b8, 0x0000, 0x0000, 0xcdc5, 0x0000,
        0x0000, 0xccaf, 0x0000, 0xd6ac, 0x0000, 0xd5a3, 0x0000, 0x25cb,
        0x0000, 0x0000, 0x0000, 0xd5a6, 0xafed, 0xc2c5, 0x0000, 0x0000,
        0xcbb8, 0x0000, 0x0000, 0x0000, 0xc5ca, 0x0000, 0x25cc, 0x0000,
        0x0000, 0x0000, 0xd5a7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcbe5, 0x0000, 0xbaca, 0x25cd, 0x0000, 0xbeaa, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xafee, 0x0000, 0x0000, 0xd5a8, 0x0000,
        0x25ce, 0xbbd0, 0x0000, 0xbbcf, 0x0000, 0x25cf, 0x0000, 0x0000,
        0xb0b9, 0xb8c8, 0xafef, 0xc0ab, 0xb0d1, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd5ac, 0xd5ad, 0x0000, 0xd5aa, 0xaff0, 0x25d0, 0x0000,
        0x0000, 0x0000, 0x0000, 0x25d1, 0x25d2, 0xb1b8, 0xb4af, 0x25d3,
        0xd5a9, 0x0000, 0xccc5, 0xc9b1, 0x0000, 0x0000, 0x25d4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb0a8, 0x0000,
        0xfefa, 0x0000, 0x0000, 0xb0f9, 0x0000, 0x0000, 0x0000, 0xbbd1,
    ],
    [
        0x0000, 0xb0d2, 0x0000, 0xb0a3, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd5b2, 0x0000, 0x0000, 0x25d8, 0x25d9, 0x0000, 0x0000,
        0x0000, 0xd5b0, 0x0000, 0xaff1, 0x0000, 0x0000, 0x0000, 0x25da,
        0xccbc, 0x0000, 0xd5b3, 0x0000, 0xd5b1, 0x0000, 0x0000, 0xd5af,
        0xbfb1, 0x0000, 0x0000, 0xaff2, 0x0000, 0xd5ae, 0x0000, 0x25db,
        0x0000, 0xcada, 0x0000, 0x0000, 0x0000, 0x25dc, 0x0000, 0xb8e4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd5b7, 0xd5b8, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xbeab, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd5b4, 0xcfac, 0x0000, 0x0000, 0x0000, 0x0000, 0xc7cc, 0x0000,
        0x0000, 0xd5b6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x25dd, 0x0000, 0x0000,
        0x0000, 0x0000, 0xbaa7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd5b9, 0x0000, 0x0000, 0x25de, 0xc9d8, 0xaff3,
        0x0000, 0x0000, 0xd5ba, 0x0000, 0xd5b5, 0xaff4, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xaff5,
        0x0000, 0x0000, 0x25df, 0x0000, 0x0000, 0x0000, 0xaff6, 0xccbb,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xaff7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x25e0, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc7de, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd5bb, 0xc9b2, 0x25e1, 0x0000, 0xaff8, 0x25e2,
        0x25e3, 0x0000, 0x25e4, 0x0000, 0x0000, 0x0000, 0x0000, 0xaff9,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x25e5, 0x0000, 0x25e6, 0x0000, 0x25e7, 0x0000, 0x0000,
        0x0000, 0x0000, 0x25e8, 0x0000, 0xd5bc, 0xd5c0, 0xd5bd, 0x25e9,
    ],
    [
        0x0000, 0xb2c7, 0xd5bf, 0x0000, 0xaffa, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbcbb, 0x0000, 0xd5be, 0xb7f9, 0x0000, 0x0000, 0x0000,
        0xd5cc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd5c5, 0xd5c2,
        0x0000, 0x0000, 0x25ea, 0x0000, 0x25eb, 0x0000, 0x0000, 0x0000,
        0x25ec, 0xc3e4, 0x0000, 0xd5c1, 0x0000, 0x25ed, 0xd5c3, 0x0000,
        0x0000, 0xd5c4, 0x0000, 0x0000, 0x0000, 0x0000, 0x25ef, 0x0000,
        0x25ee, 0x0000, 0x0000, 0x0000, 0x0000, 0x25f0, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd5c6, 0xd5c7, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x25f1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x25f2, 0xb4f2, 0x0000, 0xd5c9, 0xd5c8, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd5ca, 0x25f3,
        0x0000, 0xaffc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xbeee, 0x0000, 0x0000, 0xaffd, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd5cd, 0x0000, 0xc4dc, 0x25f5, 0x0000, 0x0000,
        0xb1c5, 0x0000, 0xd5cb, 0x0000, 0x25f4, 0x0000, 0xd5ce, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd5cf, 0x0000,
    ],
    [
        0xd5d2, 0xcfd5, 0x0000, 0xd5d0, 0x0000, 0xd5d1, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x25f6, 0x0000, 0x0000, 0x0000,
        0xbbd2, 0xd5d3, 0x25f7, 0x0000, 0xb9a6, 0xd5d4, 0xcfd6, 0xbbfa,
        0xc2b8, 0x0000, 0xd5d5, 0xd5d6, 0xbbda, 0xb9a7, 0x0000, 0xccd2,
        0x0000, 0x0000, 0x0000, 0xb5a8, 0xb8c9, 0xd5d7, 0xb3d8, 0x0000,
        0x25f8, 0xd5d8, 0x0000, 0xc2b9, 0x0000, 0x0000, 0x0000, 0x25f9,
        0xd5d9, 0xd6a3, 0x0000, 0xd5da, 0x0000, 0xd5db, 0x0000, 0x0000,
        0xd5dc, 0x0000, 0xd5de, 0x0000, 0x25fa, 0xcfd7, 0x0000, 0x25fb,
    ],
    [
        0xd5df, 0x25fc, 0x0000, 0xd5e0, 0x25fd, 0xc2f0, 0x0000, 0xb1a7,
        0xbce9, 0xb0c2, 0x0000, 0xc1d7, 0xb4b0, 0xbcb5, 0x0000, 0xb9a8,
        0x0000, 0x0000, 0x0000, 0xcfd8, 0x0000, 0xc5e6, 0x28a1, 0xbda1,
        0xb4b1, 0xc3e8, 0xc4ea, 0xb0b8, 0xb5b9, 0xcaf5, 0x0000, 0xbcc2,
        0x0000, 0x0000, 0xb5d2, 0xc0eb, 0xbcbc, 0xcda8, 0xd5e1, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x28a2, 0x0000, 0xb5dc, 0x0000,
        0xbacb, 0x0000, 0x0000, 0xb3b2, 0xb1e3, 0xbeac, 0xb2c8, 0x0000,
        0xd5e2, 0xcdc6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbdc9,
    ],
    [
        0x28a4, 0x0000, 0xbce4, 0xd5e3, 0xb4f3, 0xc6d2, 0xcca9, 0xd5e4,
        0x0000, 0xd5e5, 0x0000, 0x0000, 0xc9d9, 0x0000, 0x28a6, 0x0000,
        0xd5e7, 0x0000, 0xb4a8, 0xb6f7, 0xd5e6, 0x0000, 0x28a7, 0x0000,
        0xcfd9, 0x0000, 0x0000, 0xb4b2, 0x0000, 0xbfb2, 0xd5eb, 0xbba1,
        0x0000, 0xb2c9, 0xd5ea, 0x0000, 0xd5e8, 0xd5ec, 0xd5e9, 0xc7ab,
        0xdccd, 0xbfb3, 0x0000, 0xd5ed, 0xcfda, 0x0000, 0xcec0, 0x0000,
        0xd5ee, 0x28aa, 0x0000, 0xd5f0, 0x0000, 0xc3fe, 0xd5ef, 0x0000,
        0xc0a3, 0x0000, 0xbbfb, 0x0000, 0x0000, 0x28ab, 0xc2d0, 0xbcf7,
    ],
    [
        0x0000, 0xc9f5, 0xc0ec, 0x28ad, 0xbccd, 0xd5f1, 0xbead, 0xd5f2,
        0xd5f3, 0xb0d3, 0xc2ba, 0xbfd2, 0x0000, 0xd5f4, 0xc6b3, 0xbeae,
        0x0000, 0xbeaf, 0xcfdb, 0xd5f5, 0x0000, 0x0000, 0xc0ed, 0x0000,
        0x0000, 0x0000, 0xbeb0, 0x0000, 0x0000, 0x0000, 0xcfdc, 0x0000,
        0xd5f6, 0x0000, 0xd5f7, 0xcfdd, 0xcce0, 0x0000, 0x0000, 0x0000,
        0xd5f8, 0x28ae, 0x0000, 0xcfde, 0x0000, 0xb6c6, 0x0000, 0x0000,
        0x28af, 0xbda2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd5f9, 0xd5fa, 0xbcdc, 0xbfac, 0xc6f4, 0xbfd4, 0xc8f8, 0xc7a2,
    ],
    [
        0xb6c9, 0xd5fb, 0x0000, 0x0000, 0x0000, 0xb5ef, 0xd5fc, 0x0000,
        0xb6fe, 0x0000, 0xc6cf, 0xb2b0, 0x0000, 0xbbd3, 0xd5fd, 0xd6a2,
        0xd6a1, 0xb6fd, 0x0000, 0xd5fe, 0x0000, 0xc5b8, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfefb, 0x0000, 0x0000, 0xc2b0, 0x28b1,
        0xc5cb, 0xbcc8, 0xcfe0, 0x28b2, 0xc1d8, 0xcdfa, 0x0000, 0x28b3,
        0x28b4, 0x28b5, 0x0000, 0x0000, 0xd6a4, 0x0000, 0xd6a5, 0xc6d6,
        0x28b6, 0xbbb3, 0x0000, 0x0000, 0x0000, 0x0000, 0xd6a7, 0x0000,
        0x0000, 0xd6a8, 0xcfe4, 0x0000, 0x28b9, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x28bc, 0x0000, 0x28bd, 0x0000, 0xd6a9, 0x0000, 0x0000, 0xcfe5,
        0xb4f4, 0xd6aa, 0x0000, 0x0000, 0xd6ab, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcfe6,
        0x28c1, 0xb2ac, 0x28c2, 0xcfe7, 0x0000, 0x0000, 0x28c3, 0x28c4,
        0xc1bb, 0xb4e4, 0xcfe8, 0xd6ad, 0xcca8, 0x28c6, 0x0000, 0x0000,
        0x0000, 0xc2d2, 0x0000, 0xb3d9, 0x0000, 0x28c7, 0xd6af, 0xd6b1,
        0xb4df, 0x0000, 0xcfe9, 0xd6ae, 0xd6b0, 0x0000, 0xd6b3, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd6b2, 0x0000, 0xd6b4,
        0x0000, 0x28c9, 0x0000, 0xcfea, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcfeb, 0x0000, 0xcfec, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd6b5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc6bd, 0xb6ae, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb2e5, 0xd6b6, 0xd6bb, 0x0000, 0x0000, 0xd6b9, 0x0000, 0xcaf7,
        0xcaf6, 0x0000, 0x0000, 0x0000, 0xcfed, 0x0000, 0xc5e7, 0x0000,
        0x0000, 0x0000, 0xd6b8, 0xbdd4, 0x0000, 0xd6b7, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x28cc, 0xbff2,
        0x0000, 0x0000, 0x0000, 0xd6bc, 0x0000, 0xcff0, 0xbaea, 0x0000,
        0x28cd, 0xd6c2, 0x0000, 0x0000, 0xd6c3, 0xd6bd, 0xb3b3, 0xd6be,
        0xd6c7, 0xd6c6, 0xd6c5, 0xd6c1, 0x0000, 0x28cf, 0x0000, 0xd6c0,
        0x28d0, 0x0000, 0xd6c4, 0x0000, 0x28d1, 0x0000, 0x28d2, 0xcff1,
        0x0000, 0xcaf8, 0x0000, 0x28ce, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x28d3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x28d4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x28d5, 0x0000, 0x0000, 0x0000, 0xcff3, 0xcff4,
        0x0000, 0x0000, 0xcff6, 0xd6cb, 0xd6c8, 0x0000, 0xd6ca, 0x0000,
        0xcdf2, 0x0000, 0xd6c9, 0xcff5, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd6bf, 0x0000, 0x0000, 0x0000,
        0x0000, 0x28d7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbff3, 0x28d8, 0x0000, 0xd6cc, 0xcff7, 0x0000, 0xbab7,
        0x28da, 0x0000, 0x0000, 0xd6cd, 0x0000, 0x0000, 0xd6ce, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xcff8, 0xd6d1, 0x0000, 0xd6d0, 0x0000, 0x0000, 0xd6cf,
        0x28dd, 0x0000, 0x0000, 0xc5e8, 0xd6ba, 0x0000, 0x0000, 0x0000,
        0xd6d7, 0x0000, 0x28df, 0x0000, 0x28e0, 0x0000, 0x0000, 0x28e1,
        0x0000, 0x28e2, 0x0000, 0x0000, 0x0000, 0xd6d3, 0x0000, 0x0000,
        0xcff9, 0x0000, 0xd6d2, 0x0000, 0xcffa, 0x0000, 0x0000, 0xcffb,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd6d4, 0x0000, 0xd6d5, 0x0000,
        0x28e3, 0x0000, 0x28e4, 0x0000, 0x28e5, 0x0000, 0x0000, 0xd6d8,
        0xcffc, 0x28e7, 0xcee6, 0x0000, 0xd6d9, 0xd6d6, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd6da, 0x0000, 0xcffd, 0xb4e0, 0xd6db, 0x0000, 0x0000,
        0x0000, 0x28e8, 0xd6dd, 0xd6dc, 0x0000, 0x0000, 0xd6de, 0x28e9,
        0x28ea, 0x0000, 0x0000, 0xd6df, 0x0000, 0xc0ee, 0xbda3, 0x0000,
        0x28eb, 0xbde4, 0xf4a8, 0xc1e3, 0x28ed, 0xb9a9, 0xbab8, 0xb9aa,
        0xb5f0, 0x28ee, 0x0000, 0xd6e0, 0x0000, 0x0000, 0xbab9, 0x0000,
        0x0000, 0xb8ca, 0xd6e1, 0xcca6, 0xc7c3, 0xd6e2, 0x0000, 0xb9ab,
        0x0000, 0x0000, 0x0000, 0xb4ac, 0x0000, 0xc3a7, 0xb6d2, 0x0000,
    ],
    [
        0x28f0, 0x0000, 0xbbd4, 0xc9db, 0x0000, 0x0000, 0xc8c1, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd6e3, 0xb4f5, 0x0000, 0x0000, 0x0000,
        0x0000, 0xd6e6, 0x28f2, 0x0000, 0xf4a9, 0x28f3, 0xc4a1, 0x0000,
        0xf4aa, 0xd6e5, 0xd6e4, 0xd6e7, 0x0000, 0xc4eb, 0x0000, 0x28f5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbfe3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbbd5, 0x0000, 0xc0ca, 0x28f6, 0xc2d3,
        0xb5a2, 0x0000, 0x0000, 0xc4a2, 0x0000, 0x0000, 0xd6e8, 0xd6e9,
        0xbeef, 0x0000, 0x0000, 0x0000, 0x0000, 0xcbb9, 0x28f7, 0x0000,
    ],
    [
        0xd6ec, 0x0000, 0x0000, 0xd6eb, 0xd6ea, 0xc9fd, 0x0000, 0xd6f3,
        0x0000, 0x28f8, 0x0000, 0x0000, 0xcbda, 0x0000, 0xd6ed, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd6ef, 0xcbeb, 0x28fa, 0xd6ee,
        0xf4ab, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf4ac, 0xd6f0,
        0x0000, 0xc8a8, 0xd6f1, 0xcabe, 0xd6f2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x28fc, 0x28fd, 0x28fe, 0x2ca1, 0x0000,
        0x0000, 0x0000, 0xb4b3, 0xcabf, 0xc7af, 0xd6f4, 0xd6f5, 0xfefc,
        0xb9ac, 0xb4b4, 0xd6f6, 0xb8b8, 0xcdc4, 0xcda9, 0xb4f6, 0xd6f8,
    ],
    [
        0x0000, 0xc4a3, 0x0000, 0xb9ad, 0xbeb1, 0x0000, 0x0000, 0xc8df,
        0x0000, 0x0000, 0xbeb2, 0x0000, 0x0000, 0x0000, 0x0000, 0xbdf8,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc4ec, 0xcaf9, 0xc5b9,
        0x0000, 0x0000, 0xb9ae, 0x0000, 0xc9dc, 0x0000, 0x0000, 0x0000,
        0xd6f9, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ca3, 0xc5d9, 0xbac2,
        0x0000, 0x0000, 0x2ca4, 0xb8cb, 0x2ca5, 0xc4ed, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb0c3, 0xbdee, 0xb9af,
        0xcdc7, 0x2ca6, 0x0000, 0x0000, 0x0000, 0x0000, 0xf4ad, 0x2ca7,
    ],
    [
        0x0000, 0xd6fa, 0xd6fb, 0xc7d1, 0x0000, 0x0000, 0x2ca8, 0x0000,
        0xd6fc, 0xcef7, 0xcfad, 0xf4af, 0x0000, 0x0000, 0x0000, 0xd6fe,
        0xd6fd, 0x0000, 0x2ca9, 0xb3c7, 0x0000, 0x0000, 0xd7a1, 0x0000,
        0x0000, 0x2caa, 0xd7a4, 0xd7a5, 0x0000, 0xd7a3, 0x0000, 0xc9c0,
        0xbeb3, 0xd7a7, 0xd7a6, 0xd7a2, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd7a8, 0xd7a9, 0x0000, 0x0000, 0xd7aa, 0x0000, 0x0000, 0x0000,
        0xd7ad, 0xd7ab, 0x0000, 0xd7ac, 0xd7ae, 0x0000, 0xb1e4, 0xc4ee,
        0xd7af, 0xf4b0, 0xb7fa, 0xb2f6, 0xc7b6, 0x2cac, 0xd7b0, 0xc6fb,
    ],
    [
        0xf4b1, 0xcadb, 0xf4b2, 0xd7b1, 0xcfae, 0x0000, 0x0000, 0xf4b3,
        0x2cad, 0xd7b2, 0xcac0, 0xd7b5, 0xd0a1, 0xd0b1, 0x2cae, 0xbcb0,
        0xc6f5, 0xd7b6, 0x0000, 0xb5dd, 0xc4a4, 0xb0fa, 0xd7b7, 0xcaa6,
        0xb9b0, 0x0000, 0x0000, 0xc3d0, 0x2caf, 0xf4b4, 0x2cb1, 0xc4ef,
        0x0000, 0x0000, 0x0000, 0xf4b5, 0x0000, 0xccef, 0xb8b9, 0xb8cc,
        0x0000, 0xd7b8, 0x0000, 0x0000, 0x0000, 0xd7b9, 0x0000, 0xd7bf,
        0x0000, 0xbce5, 0x0000, 0x0000, 0xf4b6, 0xc4a5, 0xf4b7, 0xb6af,
        0xd7ba, 0x0000, 0x0000, 0x0000, 0xc9ab, 0xf4b8, 0xc3c6, 0x0000,
    ],
    [
        0xf4b9, 0xd7bb, 0x0000, 0x0000, 0x0000, 0xf4ba, 0x0000, 0x2cb2,
        0xd7bc, 0x0000, 0xb6b0, 0x0000, 0xd7bd, 0x0000, 0xd7be, 0x0000,
        0x0000, 0xd7c0, 0x0000, 0xc5f6, 0xf4bb, 0x0000, 0xd7c1, 0xd7c2,
        0xf4bc, 0xd7c3, 0x0000, 0x0000, 0xd7b4, 0xd7b3, 0x0000, 0x0000,
        0x0000, 0xd7c4, 0xb7c1, 0x2cb3, 0xf4bd, 0x0000, 0xc9a7, 0xf4be,
        0x0000, 0xbacc, 0xc9b7, 0xc4a6, 0xc9cb, 0xd7c5, 0x0000, 0x0000,
        0xbeb4, 0xb1c6, 0x2cb4, 0xd7c6, 0x0000, 0x0000, 0x0000, 0xd7c7,
        0x0000, 0xccf2, 0x0000, 0x0000, 0xc8e0, 0xf4bf, 0x2cb5, 0xd7ca,
    ],
    [
        0xb1fd, 0xc0ac, 0xd7c9, 0xd7c8, 0xb7c2, 0xc2d4, 0x0000, 0xd7ce,
        0xd7cc, 0xf4c0, 0xd7cb, 0xcea7, 0xb8e5, 0x0000, 0x0000, 0x2cb6,
        0xbdf9, 0xd7cd, 0xc5cc, 0xbdbe, 0x0000, 0x0000, 0x0000, 0xc6c0,
        0xd7d1, 0xd7d0, 0x0000, 0x0000, 0xf4c1, 0x0000, 0xd7cf, 0x0000,
        0xd7d2, 0xb8e6, 0x2cb7, 0x0000, 0x2cb8, 0x0000, 0x0000, 0xf4c2,
        0xd7d3, 0xc9fc, 0xbddb, 0x0000, 0x0000, 0xd7d4, 0xc8f9, 0xf4c3,
        0x0000, 0x0000, 0x0000, 0xc6c1, 0xc4a7, 0xf4c4, 0x0000, 0xf4c5,
        0x2cb9, 0xc5b0, 0x0000, 0x0000, 0xd7d5, 0xb5ab, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xbfb4, 0x2cba, 0xc9ac, 0x0000, 0x2cbc,
        0x0000, 0xf4c6, 0x0000, 0x2cbd, 0xb4f7, 0xc7a6, 0x0000, 0x0000,
        0x0000, 0x0000, 0x2cbe, 0x2cbf, 0x2cc0, 0x0000, 0xd7d6, 0xbbd6,
        0xcbba, 0xcbbb, 0x0000, 0x0000, 0xb1fe, 0xd7db, 0xf4c7, 0x0000,
        0xc3e9, 0xf4c8, 0x2cc1, 0x0000, 0xd7d8, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf4c9, 0x0000, 0xb2f7, 0x0000, 0x0000, 0x2cc2, 0x2cc3,
        0xd8ad, 0xd7da, 0x0000, 0x2cc4, 0x0000, 0xc7b0, 0x0000, 0x0000,
        0xd7d9, 0x0000, 0x0000, 0xd7d7, 0x2cc5, 0xb9fa, 0x0000, 0xd7dd,
    ],
];

static THREE_E6_ROW: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
];

static THREE_E6: [[u16; 64]; 64] = [
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf4ca, 0xd7e3, 0xd7e9,
        0xd7e1, 0x0000, 0xc5dc, 0x0000, 0xf4cb, 0xd7e6, 0xc9dd, 0x2cc7,
        0xf4cc, 0xd7e0, 0x0000, 0xd7e5, 0xcee7, 0xbbd7, 0x0000, 0x0000,
        0xc2d5, 0xd7de, 0x2cc8, 0x0000, 0x2cc9, 0xb5de, 0xd7e8, 0xc0ad,
        0xb1e5, 0xd7e2, 0xb2f8, 0xd7e7, 0x0000, 0x0000, 0x0000, 0xb6b1,
        0x0000, 0xd7e4, 0x0000, 0xf4cd, 0x0000, 0xf4ce, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd7ea, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xd7ec, 0xd7f6, 0xd7f4, 0x0000, 0x0000, 0xd7f1, 0xf4cf,
        0x0000, 0x0000, 0xd7f0, 0xcef8, 0x2ccb, 0xd7f2, 0x0000, 0x0000,
        0xb6b2, 0x0000, 0xb9b1, 0x0000, 0x0000, 0xbdfa, 0x0000, 0x0000,
        0x0000, 0xd7f9, 0xd7eb, 0x0000, 0x0000, 0x0000, 0x0000, 0xd7ef,
        0xd7df, 0x0000, 0xb2fa, 0xd7f3, 0xd7f5, 0xc3d1, 0x0000, 0x0000,
        0xbaa8, 0xb2b8, 0xd7ed, 0xd7f8, 0xd7f7, 0xb6b3, 0x0000, 0xc2a9,
        0xb3e6, 0x0000, 0x0000, 0x0000, 0x0000, 0xb7c3, 0x0000, 0xd7ee,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ccc,
    ],
    [
        0x0000, 0xd7fa, 0x0000, 0xd7fd, 0xd8a1, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbcbd, 0x2ccd, 0xd8a7, 0xc4f0, 0xd7fb, 0x0000, 0x0000,
        0x0000, 0x0000, 0xd8a5, 0x0000, 0xb2f9, 0x2cce, 0xd8a3, 0xd8a4,
        0x0000, 0x0000, 0xd7fe, 0xd8a2, 0x0000, 0xf4d1, 0xf4d2, 0xb8e7,
        0xcdaa, 0x0000, 0x0000, 0xb4b5, 0x0000, 0x0000, 0xb1d9, 0xd8a6,
        0x2ccf, 0xc7ba, 0xb0ad, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x2cd1, 0x2cd2, 0xc8e1, 0xd7dc, 0xd8ac, 0xd8b0, 0xcce5, 0x0000,
        0xd8a9, 0x0000, 0x0000, 0x0000, 0xc5e9, 0xd8ae, 0x2cd3, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbef0, 0xd8af, 0xc6d7,
        0x2cd4, 0x0000, 0x0000, 0xf4d3, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcfc7, 0x0000, 0xd8ab, 0xf4d4, 0xf4d5, 0x0000, 0x0000,
        0xd8b1, 0x2cd5, 0xb9fb, 0x2cd6, 0xc0cb, 0xf4d6, 0x0000, 0xb0d4,
        0xd8aa, 0xd8a8, 0x0000, 0xc1da, 0x0000, 0x0000, 0x0000, 0xd7fc,
        0xbbb4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2cd7, 0x0000,
        0xc2c6, 0xd8bd, 0x2cd8, 0xc1db, 0xd8b8, 0x2cd9, 0xd8b5, 0xd8b6,
        0xf4d7, 0xbce6, 0xd8b9, 0xd8bc, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd8b7, 0xbda5, 0x0000, 0xd8ba, 0x0000, 0x0000, 0xd8b4, 0x0000,
        0xccfc, 0xccfb, 0x0000, 0x0000, 0x0000, 0xd8be, 0xd8bf, 0xb0d5,
        0x2cda, 0x0000, 0x2cdb, 0x2cdc, 0x0000, 0xd8b3, 0x0000, 0x0000,
        0x0000, 0x2cdd, 0xb6f2, 0xb0a6, 0xf4d8, 0x0000, 0x2cde, 0xb4b6,
        0x0000, 0xd8bb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd8c3,
        0xd8c2, 0x0000, 0x0000, 0xf4d9, 0xd8c7, 0x0000, 0x0000, 0x0000,
        0xf4da, 0x0000, 0x0000, 0x0000, 0xd8c8, 0x0000, 0x0000, 0xf4db,
        0x0000, 0x0000, 0x2cdf, 0x0000, 0xd8c6, 0xd8c9, 0xd8c1, 0xd8c5,
    ],
    [
        0x0000, 0x2ce1, 0xd8ca, 0x0000, 0xd8cb, 0x0000, 0x2ce2, 0xd8c0,
        0xbbfc, 0x0000, 0xd8c4, 0xc2d6, 0xb9b2, 0xd8b2, 0xbfb5, 0x0000,
        0x0000, 0x0000, 0x0000, 0xd8d8, 0x0000, 0xcae9, 0x0000, 0x0000,
        0xd8ce, 0xd8cf, 0xd8d0, 0x0000, 0x0000, 0xd8d7, 0x0000, 0xd8d6,
        0x2ce3, 0x0000, 0xcbfd, 0xb4b7, 0x0000, 0xd8d4, 0x0000, 0xb7c5,
        0xb3b4, 0x0000, 0x0000, 0xd8d1, 0x0000, 0x0000, 0xceb8, 0xd8d3,
        0xb0d6, 0xd8d5, 0x0000, 0xd8cc, 0xd8d2, 0xd8d9, 0xb7c4, 0xd8cd,
        0x0000, 0x0000, 0x0000, 0x0000, 0x2ce4, 0x0000, 0xcddd, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xcdab, 0x0000, 0x0000, 0x0000, 0x0000, 0xd8dc,
        0x0000, 0x0000, 0xd8e0, 0x0000, 0x0000, 0xf4dd, 0xc1fe, 0x0000,
        0xcef9, 0xd8e1, 0x2ce6, 0x2ce7, 0xd8de, 0x0000, 0xd8db, 0x2ce8,
        0x2ce9, 0xd8da, 0xd8df, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xcab0, 0x2cea, 0x0000, 0xc6b4,
        0x2ceb, 0xb7c6, 0x0000, 0xd8e2, 0xd8dd, 0x2cec, 0xd8e3, 0x0000,
        0x0000, 0x0000, 0xb7fb, 0x0000, 0x0000, 0x0000, 0xb2b1, 0x0000,
        0x0000, 0xf4e0, 0xd8eb, 0x0000, 0xf4df, 0x0000, 0xb4b8, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xd8e9, 0x0000, 0x0000, 0xd8ea, 0xbaa9,
        0xd8e8, 0xd8e6, 0xd8e5, 0xd8ec, 0xd8e4, 0xd8ee, 0x0000, 0x0000,
        0xb2fb, 0x0000, 0x0000, 0x0000, 0x0000, 0x2cee, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2cef, 0x0000, 0x2cf0,
        0x0000, 0x0000, 0x0000, 0xd8f0, 0x0000, 0x0000, 0xd8ef, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc4a8, 0x0000, 0xd8f3, 0x2cf1, 0xd8f1, 0xd8e7,
        0xb7fc, 0x0000, 0xd8f2, 0x0000, 0xd8f6, 0xd8f5, 0xd8f7, 0xd8f4,
    ],
    [
        0xd8f8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xd8f9, 0xd8fa, 0xcaea, 0x0000, 0xd8fc, 0xd8fb, 0xbdbf, 0x0000,
        0xc0ae, 0xb2e6, 0xb2fc, 0x0000, 0xd8fd, 0x2cf3, 0xb0bf, 0x0000,
        0x0000, 0x0000, 0xc0cc, 0xd8fe, 0x0000, 0xecc3, 0xd9a1, 0xb7e1,
        0x0000, 0xd9a2, 0xf4e2, 0x2cf4, 0x0000, 0x0000, 0xc0ef, 0x0000,
        0x0000, 0x2cf5, 0xd9a3, 0x0000, 0x0000, 0x0000, 0xd9a4, 0xb5ba,
        0xd9a5, 0x0000, 0xd9a6, 0xd9a7, 0xc2d7, 0x0000, 0x0000, 0x0000,
        0xb8cd, 0x0000, 0x0000, 0xcce1, 0x0000, 0x0000, 0xf4e3, 0xcbbc,
    ],
    [
        0xbdea, 0xd9a8, 0x0000, 0xf4e4, 0x0000, 0x0000, 0x2cf6, 0xc0f0,
        0xeebd, 0xc8e2, 0x0000, 0xbcea, 0x2cf7, 0xbacd, 0xd9a9, 0x0000,
        0x0000, 0x2cf8, 0x2cf9, 0xc2c7, 0x0000, 0xcaa7, 0xf4e5, 0x0000,
        0xc2f1, 0x0000, 0xf4e6, 0xd9ac, 0x0000, 0x0000, 0xd9aa, 0x0000,
        0xd9ad, 0x2cfa, 0x0000, 0xd9ab, 0x2cfb, 0x0000, 0x0000, 0x0000,
        0xd9ae, 0x0000, 0x0000, 0x0000, 0x0000, 0x2cfd, 0xcab1, 0xf4e7,
        0x0000, 0xb0b7, 0x0000, 0x2cfe, 0x0000, 0x0000, 0xc9de, 0x0000,
        0x0000, 0xc8e3, 0x0000, 0x2cfc, 0xd9af, 0x0000, 0xd9b2, 0xbeb5,
    ],
    [
        0xb5bb, 0x0000, 0xd9b0, 0xd9b7, 0xbeb6, 0xf4e8, 0x0000, 0x0000,
        0x0000, 0xd9b1, 0xc7c4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcdde, 0xd9b3, 0xd9b4, 0xd9b8, 0xc5ea, 0xd9b5, 0xb9b3,
        0xc0de, 0x2da1, 0x0000, 0xd9c6, 0xc8b4, 0x0000, 0xc2f2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2da2, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc8e4, 0xdaad, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcafa, 0x0000, 0x0000, 0x0000, 0xc4f1, 0x0000, 0x0000,
        0x0000, 0xcbf5, 0x0000, 0xd9bb, 0xb2a1, 0xc3ea, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xd9c4, 0x0000, 0xf4e9, 0xc3b4, 0xd9be, 0xd9c5,
        0xd9c0, 0xd9c7, 0xd9c3, 0x0000, 0xd9c2, 0xc7ef, 0x0000, 0xd9bc,
        0xb2fd, 0xd9ba, 0xb5f1, 0xc2f3, 0xd9b6, 0x2da3, 0xf4ea, 0xd9b9,
        0xb9b4, 0xc0db, 0x0000, 0xbeb7, 0xd9c1, 0xc7d2, 0x0000, 0x0000,
        0xb5f2, 0xb3c8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xb3e7, 0xbfa1, 0xd9c9, 0xd9ce,
        0x0000, 0xd9ca, 0x0000, 0xb7fd, 0x0000, 0xd9cf, 0xbba2, 0xb9e9,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf4eb, 0x2da5, 0xbda6, 0xd9bd,
    ],
    [
        0x0000, 0xbbfd, 0xd9cc, 0x2da6, 0x0000, 0x0000, 0x0000, 0xbbd8,
        0xd9cd, 0xb0c4, 0xf4ec, 0x0000, 0xd9c8, 0x2da7, 0x0000, 0x0000,
        0x2da8, 0xc4a9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf4ed, 0xb5f3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb6b4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd9cb,
        0xb0a7, 0x0000, 0x0000, 0xbac3, 0x0000, 0x0000, 0x0000, 0xbfb6,
        0x0000, 0x0000, 0x2dab, 0x0000, 0x0000, 0x2dac, 0x0000, 0x0000,
        0x0000, 0xf4ee, 0xc4f2, 0x2dad, 0x2dae, 0xc8d4, 0xd9d1, 0xc1de,
    ],
    [
        0x0000, 0x2daf, 0x0000, 0xf4ef, 0x2db0, 0x0000, 0x0000, 0x0000,
        0x0000, 0xc2aa, 0x0000, 0x0000, 0xbbab, 0xd9d2, 0x2db1, 0xd9d4,
        0xd9d0, 0x0000, 0x0000, 0x0000, 0x0000, 0xcae1, 0x0000, 0xc4bd,
        0x0000, 0x2db3, 0x0000, 0x0000, 0xc1dc, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf4f0, 0x0000, 0xcafb,
        0xbcce, 0xd9e0, 0x0000, 0xd9df, 0x2db6, 0x0000, 0xbff8, 0x0000,
        0x0000, 0x0000, 0xb7fe, 0x0000, 0x0000, 0x0000, 0xd9d9, 0xbeb9,
        0x0000, 0x0000, 0xc6e8, 0xc7b1, 0xf4f1, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xd9d7, 0x0000, 0x0000, 0xc1dd, 0x2db7, 0x0000, 0x0000, 0x0000,
        0xbcf8, 0xd9dc, 0x0000, 0x0000, 0xbeb8, 0x0000, 0xd9d6, 0xd9db,
        0x0000, 0x0000, 0xc7d3, 0x0000, 0x2dba, 0x0000, 0xd9d5, 0x0000,
        0xb7a1, 0x2db8, 0x0000, 0xb3dd, 0x0000, 0x0000, 0x0000, 0xd9dd,
        0xceab, 0xbace, 0xc3b5, 0xd9da, 0x0000, 0xc0dc, 0x0000, 0xb9b5,
        0xbfe4, 0xb1e6, 0xc1bc, 0xd9d8, 0xb5c5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xb7c7, 0x0000, 0xc4cf, 0xd9de, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc1df, 0x0000, 0x2dbb, 0xd9e1, 0x0000,
    ],
    [
        0xd9e3, 0x0000, 0x0000, 0xc2b7, 0xd9e9, 0x0000, 0xd9e4, 0x0000,
        0x0000, 0xd9e6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc9c1,
        0xc4f3, 0x0000, 0xd9e7, 0x0000, 0x2dbd, 0x2dbe, 0xcdac, 0x0000,
        0x0000, 0x0000, 0xcdc8, 0xb4b9, 0x2dbf, 0x0000, 0x0000, 0x0000,
        0x2dc0, 0xb0ae, 0x0000, 0xd9e5, 0x0000, 0xf4f2, 0x0000, 0x0000,
        0x0000, 0xd9e2, 0x0000, 0x2dc1, 0x2dc2, 0xf4f3, 0xb4f8, 0x0000,
        0x0000, 0x0000, 0x2dc3, 0x0000, 0xb1e7, 0xf4f4, 0xd9e8, 0x2dbc,
        0x0000, 0x0000, 0xcdc9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd9ec, 0x0000,
        0x0000, 0x2dc4, 0x0000, 0x0000, 0x0000, 0xc2bb, 0x0000, 0xd9f3,
        0xf4f5, 0x0000, 0x0000, 0xd9ed, 0xf4f6, 0x0000, 0xd9ea, 0xd9f1,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd9d3, 0x0000, 0x2dc5, 0x0000,
        0x0000, 0x0000, 0xf4f7, 0x0000, 0x0000, 0x2dc6, 0xd9ee, 0x0000,
        0xd9f2, 0x2dc7, 0x0000, 0x0000, 0xc8c2, 0xc5eb, 0x0000, 0x2dc8,
        0x0000, 0x0000, 0x0000, 0x0000, 0xd9eb, 0x0000, 0xd9ef, 0x0000,
        0x0000, 0x0000, 0xb7c8, 0x0000, 0x0000, 0x0000, 0xbaf1, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xc0dd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd9f7, 0x0000,
        0x0000, 0xf4f9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc5a6, 0x0000, 0x2dc9, 0x2dca, 0x0000, 0x2dcb, 0x0000, 0x0000,
        0xf4fa, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xd9f4,
        0x0000, 0xcbe0, 0x0000, 0x0000, 0x0000, 0xf4fb, 0x0000, 0xd9f5,
        0x0000, 0x0000, 0x0000, 0x2dcc, 0x0000, 0x0000, 0xd9f6, 0x0000,
        0xccce, 0xf4f8, 0xc0a2, 0x0000, 0x0000, 0x2dcd, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xb7e2, 0x0000, 0x0000, 0x0000, 0x2dce,
        0xd9fd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x2dcf, 0xbbb5, 0xd9fa, 0x0000, 0xd9f9, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc7b2, 0x0000, 0x0000, 0x2dd0, 0xc6b5, 0x2dd1,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc5b1, 0xd9fb, 0x0000, 0x0000,
        0x0000, 0xd9fc, 0x0000, 0xc9ef, 0x0000, 0xc7c5, 0xbba3, 0x0000,
        0xc0f1, 0x0000, 0xcbd0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb3c9, 0x0000, 0xdaa5, 0xd9fe, 0x0000, 0xf4fd, 0xf4fe,
    ],
    [
        0x0000, 0xcdca, 0xdaa7, 0x0000, 0xf5a1, 0xdaa3, 0x0000, 0xdaa4,
        0x0000, 0x0000, 0xf5a2, 0x2dd2, 0x2dd3, 0xc1e0, 0xf4fc, 0x0000,
        0xf5a3, 0x0000, 0xdaa2, 0x0000, 0xd9bf, 0x2dd4, 0x0000, 0x2dd5,
        0xdaa6, 0x0000, 0xdaa1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdaab, 0xdaac, 0xc5a7, 0xdaae, 0x2dd7, 0x2dd8, 0xbba4, 0xdaa9,
        0x0000, 0x0000, 0x0000, 0x0000, 0xb5bc, 0x0000, 0x0000, 0xdaaf,
        0x0000, 0xdaa8, 0xdab3, 0x0000, 0xdab2, 0x0000, 0xdab1, 0xf5a4,
        0x0000, 0x0000, 0xdab4, 0xf5a5, 0x0000, 0xdab6, 0xbef1, 0x2dd9,
    ],
    [
        0xdab5, 0x0000, 0x0000, 0x0000, 0x2dda, 0xdab9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2ddc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x2ddd, 0x0000, 0x2dde, 0x0000,
        0xdab7, 0x0000, 0x0000, 0x0000, 0xdab8, 0xd9f0, 0x2de0, 0x0000,
        0x0000, 0x0000, 0xf5a6, 0xdabb, 0xdaba, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf5a7, 0xd9f8, 0xdabc, 0xdab0, 0x0000, 0x0000, 0xbbd9,
        0x0000, 0x0000, 0x2de1, 0x0000, 0xdabd, 0xdabe, 0xdac0, 0xdabf,
        0xdac1, 0xb2fe, 0x0000, 0xb9b6, 0x0000, 0x0000, 0xcafc, 0xc0af,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x2de2, 0xb8ce, 0x0000, 0x0000,
        0xdac3, 0x0000, 0x0000, 0x0000, 0x0000, 0xdac6, 0x0000, 0xc9d2,
        0x0000, 0xb5df, 0x0000, 0x0000, 0x2de3, 0xdac5, 0xdac4, 0xc7d4,
        0xdac7, 0xb6b5, 0x0000, 0x0000, 0x0000, 0xdac9, 0xdac8, 0x0000,
        0x0000, 0x0000, 0xb4ba, 0xbbb6, 0x0000, 0x0000, 0xc6d8, 0xf5a9,
        0x0000, 0x0000, 0x0000, 0x2de4, 0xb7c9, 0x0000, 0x0000, 0x0000,
        0xbff4, 0x0000, 0xdaca, 0x0000, 0xc0b0, 0xc5a8, 0x0000, 0xc9df,
        0xdacb, 0x0000, 0x2de5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x2de6, 0xdacc, 0xdacd, 0x2de7, 0x2de8, 0x0000, 0xcab8,
        0xd5dd, 0xc0c6, 0x2de9, 0x0000, 0xc9cc, 0x0000, 0xbad8, 0x0000,
        0xc8e5, 0xc8c3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5cd,
        0x0000, 0xcec1, 0x0000, 0xdacf, 0xbcd0, 0xf5aa, 0x0000, 0xdad0,
        0x0000, 0xb0b6, 0x0000, 0x0000, 0xb6d4, 0xc0cd, 0x0000, 0xc9e0,
        0x0000, 0x0000, 0x0000, 0xdad1, 0xbbc2, 0xc3c7, 0x0000, 0xbbdb,
        0xbfb7, 0x0000, 0x2dea, 0x0000, 0x0000, 0x2deb, 0x0000, 0xdad2,
        0x2dec, 0xcafd, 0x0000, 0x0000, 0xb1f7, 0xbbdc, 0x0000, 0x2ded,
    ],
    [
        0x0000, 0xdad5, 0x2dee, 0xdad3, 0xdad6, 0xceb9, 0xdad4, 0x0000,
        0x0000, 0x2def, 0x0000, 0xc0fb, 0xdad7, 0x0000, 0x0000, 0xc2b2,
        0x0000, 0x0000, 0xdad8, 0x0000, 0x2df0, 0x0000, 0x0000, 0xb4fa,
        0x0000, 0xdada, 0x0000, 0xdad9, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdadb, 0xdadc, 0xb4fb, 0x0000, 0x0000, 0xc6fc, 0xc3b6, 0xb5ec,
        0xbbdd, 0xc1e1, 0x0000, 0x0000, 0xbddc, 0xb0b0, 0x0000, 0x0000,
        0x0000, 0xdadd, 0x2df2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x2df3, 0xb2a2, 0xdae1, 0x2df4, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xf5ac, 0x0000, 0xb9b7, 0xdae0, 0x2df5, 0x0000, 0xbaab, 0xbeba,
        0x2df6, 0xf5ad, 0xdadf, 0x0000, 0xbebb, 0x0000, 0xccc0, 0xbaaa,
        0x0000, 0x0000, 0x0000, 0xb0d7, 0xc0ce, 0xf5ae, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xdae6, 0x0000, 0xf5af, 0xc0b1,
        0xb1c7, 0x2df7, 0xf5b1, 0x0000, 0xf5b2, 0xbdd5, 0x0000, 0xcbe6,
        0xbaf2, 0x0000, 0x2df8, 0xf5b3, 0x0000, 0xbebc, 0x0000, 0xc0a7,
        0xf5b4, 0xf5b5, 0x0000, 0xf5b6, 0xdae5, 0xdae3, 0xdae4, 0x0000,
        0x0000, 0x0000, 0xf5b0, 0x0000, 0xc3eb, 0x0000, 0x0000, 0xdba6,
    ],
    [
        0x0000, 0xdaea, 0xbbfe, 0xb9b8, 0xdae8, 0x2df9, 0x0000, 0x0000,
        0xf5b8, 0xdae9, 0x0000, 0xbfb8, 0xf5b9, 0x0000, 0x2dfb, 0xdae7,
        0x0000, 0x2dfa, 0xbbaf, 0x0000, 0x0000, 0x0000, 0x0000, 0x2dfe,
        0x0000, 0xf5bb, 0xf5bc, 0x2ea1, 0x0000, 0xdaec, 0xdaeb, 0xdaf0,
        0x0000, 0xf5bd, 0xdaf1, 0x2ea2, 0xdaed, 0xf5be, 0xb3a2, 0xdaee,
        0xdaef, 0xc8d5, 0x2ea5, 0x2ea6, 0x2ea7, 0x2ea8, 0xc9e1, 0xb7ca,
        0xdaf2, 0x0000, 0x0000, 0xf5bf, 0xc0b2, 0x0000, 0xbebd, 0xf5c0,
        0xf5c1, 0x0000, 0xc3d2, 0x2ea9, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x2eaa, 0xb6c7, 0x0000, 0xdaf3, 0xdaf7, 0x0000, 0x0000, 0xb2cb,
        0xdaf4, 0xdaf6, 0x0000, 0x0000, 0x0000, 0xf5c2, 0xdaf5, 0x0000,
        0x2eab, 0xbdeb, 0x2eac, 0x0000, 0x0000, 0x0000, 0xc3c8, 0xb0c5,
        0xdaf8, 0x2ead, 0x0000, 0x0000, 0x0000, 0xdaf9, 0x0000, 0x0000,
        0xf5c4, 0x0000, 0xc4aa, 0x0000, 0x0000, 0x0000, 0xcef1, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbbc3, 0x0000, 0x2eaf, 0xcaeb, 0x0000,
        0x0000, 0x2eb0, 0xf5c5, 0x0000, 0xcbbd, 0x2eb1, 0x0000, 0x0000,
        0xdba2, 0xdafb, 0x0000, 0xf5c6, 0xdafe, 0x0000, 0xdafd, 0x2eb3,
    ],
    [
        0x0000, 0xdafa, 0x0000, 0x0000, 0xdba1, 0x0000, 0xf5c7, 0xc6de,
        0xf5c8, 0xdafc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xdba3, 0x0000,
        0x0000, 0xbdec, 0xdba4, 0xf5ca, 0xcdcb, 0xc7f8, 0x0000, 0x0000,
        0xdba5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xdba7, 0x0000,
        0xf5cb, 0xdba8, 0x0000, 0x0000, 0x2eb5, 0x0000, 0x0000, 0x0000,
        0xdba9, 0x0000, 0xb6ca, 0xb1c8, 0xb9b9, 0xdbaa, 0x0000, 0xdbab,
        0xbdf1, 0xc1e2, 0xf5cc, 0xf5b7, 0xd2d8, 0xc1be, 0xc1bd, 0xc2d8,
    ],
    [
        0xbac7, 0x2eb7, 0x0000, 0xd0f2, 0x0000, 0x2eb8, 0x0000, 0x0000,
        0xb7ee, 0xcdad, 0x0000, 0xcafe, 0x0000, 0xc9fe, 0x0000, 0xdbac,
        0x0000, 0x0000, 0x2eb9, 0xf5cd, 0xbaf3, 0xc4bf, 0xdbad, 0xcfaf,
        0x0000, 0x2ebb, 0x0000, 0xcbbe, 0x0000, 0xc4ab, 0xdbae, 0xb4fc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xdbaf, 0xdbb0,
        0xccda, 0x0000, 0xcca4, 0xcbf6, 0xcbdc, 0xbba5, 0xdbb2, 0x0000,
        0x0000, 0xbceb, 0x0000, 0xf5cf, 0xcbd1, 0x0000, 0xdbb4, 0xdbb7,
        0xdbb6, 0x0000, 0xb4f9, 0x0000, 0x0000, 0xb5e0, 0x0000, 0xdbb3,
    ],
    [
        0x0000, 0xdbb5, 0x0000, 0x0000, 0x0000, 0x0000, 0xdbb8, 0xf5d1,
        0xf5d2, 0xbff9, 0x0000, 0x0000, 0x2ebe, 0x2ebf, 0xcdfb, 0xb0c9,
        0xbae0, 0xc2bc, 0x0000, 0xbcdd, 0x2ec0, 0x0000, 0xbef3, 0x0000,
        0x0000, 0xdbbb, 0x0000, 0x0000, 0xc5ce, 0x2ec1, 0xdbb9, 0xc2ab,
        0xdbba, 0xbef2, 0xccdd, 0xdbbc, 0xdbbd, 0xcde8, 0xf5d0, 0x0000,
        0x0000, 0x0000, 0xdbc2, 0x0000, 0x0000, 0xb9ba, 0x0000, 0xc7d5,
        0xdbbf, 0xc5ec, 0xdade, 0xdae2, 0x2ec5, 0xb5cf, 0x2ec6, 0xc7c7,
        0x0000, 0x0000, 0x0000, 0xf5d3, 0xdbc1, 0x0000, 0xbebe, 0xc8c4,
    ],
    [
        0x0000, 0xf5d4, 0x0000, 0x0000, 0x0000, 0xdbc7, 0x0000, 0xc8fa,
        0x0000, 0xdbbe, 0x0000, 0xdbc4, 0xdbc3, 0x0000, 0x0000, 0x0000,
        0xc0cf, 0x0000, 0x2ec8, 0xf5d5, 0x0000, 0xcbed, 0x0000, 0xced3,
        0xf5d6, 0x0000, 0xcbe7, 0xf5d7, 0xb2cc, 0xbbde, 0x0000, 0x0000,
        0xcfc8, 0xdbc6, 0xbff5, 0x0000, 0x0000, 0x0000, 0xdbc5, 0x0000,
        0x0000, 0xdbc0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb8cf,
        0x2ecc, 0x0000, 0x2ecd, 0xdbcc, 0xdbca, 0x0000, 0xb2cd, 0xdbc8,
        0xdbce, 0xdbd4, 0x0000, 0xf5d8, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xf5da, 0xc2c8, 0x0000, 0x2ece, 0xcac1, 0x0000, 0xdbd6, 0x0000,
        0x2ecf, 0x0000, 0xc9a2, 0x0000, 0x0000, 0x0000, 0xdbd5, 0xc7f0,
        0xcbbf, 0xb4bb, 0x2ed0, 0xc0f7, 0xbdc0, 0x0000, 0x0000, 0xf5db,
        0xc4d3, 0x2ed1, 0xcdae, 0x2ed2, 0x0000, 0xdbd1, 0xdbd0, 0x0000,
        0x0000, 0x0000, 0xdbd2, 0x0000, 0xdbcf, 0x0000, 0x0000, 0xdbd7,
        0x0000, 0xdbcd, 0x0000, 0x0000, 0xdbcb, 0x0000, 0xdbd3, 0xdbc9,
        0x2ed3, 0xc3ec, 0x0000, 0xccf8, 0xbcc6, 0xbaf4, 0x0000, 0x2ed4,
        0x0000, 0xf5d9, 0x0000, 0xbaba, 0xf5dc, 0x0000, 0xcbef, 0xb3c1,
    ],
    [
        0x0000, 0xf5dd, 0xc4ce, 0xc6ca, 0xb1c9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x2ecb, 0x0000, 0x0000, 0xc0f2, 0x0000, 0x0000, 0xc0b4, 0xb7aa,
        0x2ed8, 0x0000, 0x0000, 0x0000, 0x0000, 0xf5df, 0xdbd9, 0x2ed9,
        0x0000, 0xb9bb, 0xb3fc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xdbdb, 0xb3f4, 0xdbe1, 0xf5e0, 0x2eda, 0x0000, 0x0000,
        0x0000, 0xf5e1, 0xdbde, 0x2edc, 0xc0f3, 0x0000, 0x0000, 0x0000,
        0xb3cb, 0xbaac, 0x0000, 0x2edd, 0xb3ca, 0xbacf, 0x2ede, 0x0000,
    ],
    [
        0xdbdc, 0xb7e5, 0xb7cb, 0xc5ed, 0x2edf, 0x2ee0, 0xdbda, 0x0000,
        0xb0c6, 0x2ee1, 0x0000, 0x0000, 0x2ee2, 0xdbdd, 0xdbdf, 0x0000,
        0xb6cd, 0xb7ac, 0xf5de, 0xb4bc, 0xb5cb, 0x2ee3, 0x0000, 0x2ee4,
        0x0000, 0xdbe2, 0x0000, 0xf5e2, 0xbaf9, 0xcbf1, 0x0000, 0xbbb7,
        0x0000, 0x0000, 0x0000, 0xdbe3, 0x0000, 0x0000, 0x0000, 0xc9b0,
        0x0000, 0x0000, 0x0000, 0x2ee6, 0x0000, 0x0000, 0x2ee7, 0x0000,
        0x0000, 0x0000, 0xf5e3, 0x0000, 0xdbef, 0xf5e4, 0xb2b3, 0xdbe4,
        0x0000, 0x0000, 0x2ee8, 0x0000, 0x2ee9, 0x0000, 0xdbf5, 0xdbe5,
    ],
    [
        0x0000, 0xcec2, 0x2eea, 0xdbec, 0x0000, 0xc7df, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xdbf4, 0x0000, 0xdbe7,
        0x2eeb, 0x0000, 0x0000, 0xb0b4, 0xdbe9, 0x0000, 0x2eec, 0xb9bc,
        0x2eee, 0x2eef, 0x2ef0, 0xdbeb, 0x2ef1, 0xdbea, 0x0000, 0xdbe6,
        0xdbf1, 0x0000, 0xbebf, 0xf5e6, 0x0000, 0xf5e7, 0xd4ed, 0xb8e8,
        0xcdfc, 0x0000, 0x2ef2, 0x2ef3, 0x0000, 0xdbe8, 0x0000, 0xc4f4,
        0xb3a3, 0xbaad, 0xf5e8, 0xdbe0, 0x2ef4, 0xdbf0, 0xb3e1, 0x0000,
        0x0000, 0xdbee, 0xdbf2, 0x2ef5, 0xc5ee, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x2efa, 0xb4fe, 0x2efb, 0xdcb2, 0x0000,
        0xf5e9, 0xccc9, 0xdbf7, 0xb4fd, 0x2efc, 0xdbfe, 0x0000, 0x2efd,
        0xf5ea, 0x0000, 0xcbc0, 0x0000, 0xdca1, 0xdca3, 0x2efe, 0xdca7,
        0xdbf9, 0x2fa1, 0xc3aa, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5ef,
        0xdcab, 0xdbfc, 0x0000, 0xdca8, 0x2fa2, 0x2fa3, 0x0000, 0xdca2,
        0xf5eb, 0x0000, 0x0000, 0x0000, 0x2fa4, 0xf5ec, 0xbfb9, 0xdcac,
        0xf5ed, 0xf5ee, 0xc0b3, 0x0000, 0x0000, 0x0000, 0x0000, 0x2fa5,
        0x0000, 0xdcaa, 0xb4bd, 0x2ef6, 0xf5ef, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xcfd0, 0xdbf6, 0x0000, 0x2fa6, 0xdca6, 0xb0d8, 0x0000, 0x2fa7,
        0xdbf8, 0x0000, 0xf5f0, 0xccba, 0xdbfd, 0xbfa2, 0xc4c7, 0xdbf3,
        0x0000, 0x0000, 0xdca5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbffa, 0xdcaf, 0xb3f1, 0xb8a1, 0x0000, 0x0000, 0x0000,
        0x0000, 0xdcb1, 0xdbfa, 0xdcb0, 0x0000, 0xdca9, 0xdbfb, 0x0000,
        0xdcad, 0x0000, 0xdcae, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdcbf, 0x0000, 0x0000, 0x0000, 0xc6ce, 0xf5f3, 0xdca4, 0x0000,
        0x0000, 0xdcbb, 0x0000, 0x2fab, 0x0000, 0xdcbd, 0x0000, 0xc4d8,
    ],
    [
        0x0000, 0x0000, 0xf5f4, 0x0000, 0x0000, 0x0000, 0x2fad, 0x0000,
        0x0000, 0xf5f1, 0xcdcc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc9f6, 0xdcb8, 0xc2ca, 0x0000, 0xf5f5,
        0x0000, 0xdcbe, 0xc1bf, 0x0000, 0xdcb5, 0xdcc2, 0xdcc1, 0x0000,
        0xc6ef, 0xdcc0, 0xc6ea, 0xf5f6, 0xf5f7, 0x0000, 0x0000, 0x0000,
        0xf5f8, 0x2fae, 0xdcc4, 0xdcb7, 0x2faf, 0xb6c8, 0xdcba, 0xbddd,
        0x0000, 0x0000, 0x2fb0, 0xc7e0, 0xdcbc, 0xb6cb, 0x0000, 0xdcb4,
        0xdcb6, 0xdcb3, 0x2fb1, 0x0000, 0xcfb0, 0xb3da, 0xdcb9, 0x2fb2,
    ],
    [
        0xf5f9, 0xdcc3, 0xb3b5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xbae7, 0x0000, 0x0000, 0x0000, 0xb1dd, 0x0000,
        0x0000, 0xdcd4, 0x2fb3, 0x0000, 0xcfb1, 0xdcd7, 0x2fb5, 0x0000,
        0x2fb6, 0x0000, 0x0000, 0xbfba, 0xdcd6, 0x0000, 0x0000, 0x0000,
        0xdcd5, 0x0000, 0x0000, 0x0000, 0x0000, 0xf5fb, 0x2fb7, 0xdcd2,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf5fc, 0xdcc6, 0x0000,
        0x2fb8, 0xdce3, 0xdcc5, 0x0000, 0xdcd8, 0x0000, 0x0000, 0x2fb9,
        0x0000, 0x0000, 0x2fba, 0xdcd0, 0x2fbb, 0x0000, 0xdccb, 0xdcc8,
    ],
    [
        0x2fbc, 0xdcc9, 0x0000, 0xdcd1, 0x0000, 0x0000, 0x0000, 0xf4a2,
        0x0000, 0x0000, 0xdcce, 0xb9bd, 0xc4c8, 0xc1e4, 0xdccc, 0xf5fd,
        0xdcc7, 0x2fbd, 0x0000, 0xdcca, 0x0000, 0x0000, 0x2fbe, 0x0000,
        0xcdcd, 0xcbea, 0x0000, 0x0000, 0x0000, 0xdccf, 0xdcd9, 0x0000,
        0x0000, 0x0000, 0xf6a2, 0x2fc4, 0x0000, 0x0000, 0x0000, 0xdce1,
        0xdcda, 0xf6a3, 0xf6a4, 0xdce7, 0x0000, 0xdce5, 0x2fc5, 0x2fc6,
        0x0000, 0x0000, 0xdce0, 0x2fc7, 0x2fc9, 0xf6a5, 0xf6a6, 0x0000,
        0x0000, 0xdcdf, 0x0000, 0xc4d0, 0x0000, 0xc1e5, 0x2fca, 0xdcdd,
    ],
    [
        0x0000, 0x0000, 0xdcdb, 0x0000, 0x0000, 0xdce2, 0x0000, 0x0000,
        0x0000, 0x0000, 0xdce8, 0xc8f5, 0xdcee, 0x0000, 0x0000, 0xf6a7,
        0x0000, 0x2fcb, 0xdce9, 0xdcec, 0xdce6, 0xf6a8, 0x0000, 0xc3f4,
        0x0000, 0xc9b8, 0x2fcc, 0xdcdc, 0x0000, 0x2fcd, 0xdce4, 0xbec0,
        0x0000, 0xcccf, 0xdcf8, 0xdceb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb8a2, 0xb2a3, 0xb3df, 0x0000, 0x0000, 0xdcd3, 0x0000,
        0x2fc1, 0x0000, 0x2fcf, 0x2fd0, 0x2fd1, 0xbec1, 0xdcf0, 0x0000,
        0xdcf7, 0xbcf9, 0xb3f2, 0xf6aa, 0x0000, 0xc3ae, 0xf6ab, 0x2fd2,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xdced, 0xf6ac, 0x2fd3, 0xdcf2,
        0xdcf6, 0x2fd4, 0x0000, 0xb6b6, 0x0000, 0x0000, 0x2fd6, 0x0000,
        0xf6ad, 0x0000, 0x2fd7, 0x0000, 0x0000, 0x0000, 0xf6ae, 0x0000,
        0xb5cc, 0xdcf4, 0x0000, 0xf6af, 0x0000, 0x0000, 0x0000, 0xb5a1,
        0x0000, 0xc6cb, 0xdcf3, 0x0000, 0x2fd8, 0x0000, 0xdcf5, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf6b0, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xdcef, 0xf6b1, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdcf1, 0x0000, 0x2fd5, 0x0000, 0x0000, 0x0000, 0x2fda, 0xb3e0,
    ],
    [
        0xc3c9, 0x0000, 0x0000, 0x2fdb, 0xdcfc, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf6b3, 0x0000, 0x2fdc, 0x0000, 0xdcfa, 0xb8e9, 0x0000,
        0xdcf9, 0x2fde, 0x0000, 0x0000, 0xf6b4, 0x0000, 0x0000, 0xdda1,
        0x0000, 0x0000, 0x0000, 0x0000, 0xdbd8, 0xf6b5, 0xf6b6, 0x2fdf,
        0xdcfb, 0x2fe0, 0xdcfd, 0xdcfe, 0x0000, 0xf6b7, 0x0000, 0x0000,
        0x0000, 0x0000, 0xddac, 0x2fe2, 0xdda8, 0x0000, 0xdbed, 0x0000,
        0x0000, 0x0000, 0x0000, 0xdda7, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdda6, 0x0000, 0x0000, 0xdda3, 0x0000, 0x2fe3, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xdcea, 0xdda5, 0xdda4, 0x0000, 0x0000, 0x2fe4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x2fe6, 0xddaa, 0x0000, 0xcfa6, 0x2fe5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xddad, 0xb6fb, 0x2fe7, 0x2fe8, 0xdda9, 0xddab,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf6b8, 0x0000, 0x0000, 0xf6b9,
        0xc8a7, 0x0000, 0xddae, 0x0000, 0x2feb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x2fec, 0x2fed, 0x2fee, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xddb2, 0xddaf, 0x0000, 0x2fef, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xcdf3, 0xddb0, 0x0000, 0x0000,
        0x0000, 0x0000, 0xdcde, 0x2ff1, 0x0000, 0x0000, 0x0000, 0x2ff2,
        0x2ff3, 0x2ff4, 0xddb3, 0x0000, 0x0000, 0x0000, 0xddb4, 0x2ff6,
        0x0000, 0x0000, 0x0000, 0xf6bc, 0x0000, 0xb1b5, 0xf6bd, 0xddb6,
        0xb7e7, 0xbca1, 0x0000, 0xb6d5, 0x0000, 0x0000, 0x0000, 0xb2a4,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf6be, 0x0000, 0x0000, 0x2ff8,
        0x0000, 0x0000, 0xcddf, 0x0000, 0x0000, 0xf6bf, 0x0000, 0xddb8,
        0xddb7, 0xddba, 0xb5bd, 0x0000, 0x0000, 0xb6d6, 0xb4be, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xddbd, 0x0000, 0x0000, 0xf6c0, 0xddbc,
        0x0000, 0xddbe, 0x2ff9, 0x0000, 0xb2ce, 0x0000, 0xc3b7, 0x0000,
        0xddbf, 0x0000, 0x0000, 0xb4bf, 0xddc1, 0x0000, 0xf6c1, 0x0000,
        0x2ffa, 0xddc0, 0x0000, 0xddc2, 0x0000, 0x0000, 0x0000, 0xddc3,
        0xf6c2, 0xddc4, 0xbbdf, 0xc0b5, 0xbaa1, 0xf6c3, 0xc9f0, 0xf6c4,
        0x0000, 0xcae2, 0xcfc4, 0x0000, 0x2ffb, 0x0000, 0x0000, 0xbbf5,
        0x0000, 0x0000, 0x0000, 0xbad0, 0xcef2, 0x2ffc, 0x0000, 0xf6c5,
        0xddc5, 0xddc6, 0x2ffd, 0xbbe0, 0x0000, 0x0000, 0x0000, 0xddc7,
    ],
    [
        0xddc8, 0x2ffe, 0xf6c6, 0xddca, 0xddc9, 0x0000, 0xcbd8, 0x0000,
        0x0000, 0xbdde, 0xbcec, 0xbbc4, 0x0000, 0xddcb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xddcd, 0xbfa3, 0x0000,
        0xddcc, 0x0000, 0x0000, 0x6ea1, 0x0000, 0x0000, 0xddce, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xddcf, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf6c7, 0xddd0, 0xddd1, 0x0000, 0xf6c8, 0x6ea2, 0xddd2,
        0x0000, 0xddd4, 0xddd3, 0xddd5, 0xb2a5, 0xc3ca, 0x0000, 0xddd6,
        0x0000, 0x0000, 0xbba6, 0xb3cc, 0xddd7, 0x6ea4, 0x6ea5, 0xc5c2,
    ],
    [
        0xd4cc, 0x0000, 0x0000, 0x0000, 0x0000, 0xb5a3, 0xddd8, 0x6ea6,
        0x6ea7, 0x6ea8, 0x0000, 0xddd9, 0x0000, 0xcaec, 0xcbe8, 0xf6ca,
        0x0000, 0x0000, 0xc6c7, 0xddda, 0xc8e6, 0x0000, 0xf6cb, 0xf6cc,
        0xc8fb, 0x0000, 0x6ea9, 0xccd3, 0x0000, 0x0000, 0x0000, 0xdddb,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6eaa, 0x6eab,
        0x0000, 0x0000, 0x0000, 0xdddd, 0xdddc, 0x0000, 0x6eac, 0xdddf,
        0x0000, 0x6ead, 0x0000, 0xddde, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf6cd,
    ],
    [
        0x0000, 0x0000, 0x6eae, 0x0000, 0x0000, 0xf6ce, 0x0000, 0x0000,
        0xdde1, 0x0000, 0x6eaf, 0x0000, 0x0000, 0x0000, 0x6eb0, 0xbbe1,
        0xf6cf, 0xccb1, 0x0000, 0xdde2, 0xdde3, 0x0000, 0x0000, 0xb5a4,
        0x0000, 0x0000, 0x0000, 0xdde4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xdde6, 0xdde5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf6d0, 0xbfe5, 0x6eb1, 0x6eb2, 0xc9b9,
        0xb1ca, 0x0000, 0x6eb3, 0x0000, 0x0000, 0x0000, 0xc8c5, 0x6eb5,
    ],
    [
        0xc4f5, 0xbdc1, 0xb5e1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6eb6, 0xc8c6, 0x0000,
        0xbcae, 0x0000, 0x0000, 0x0000, 0x0000, 0xdde8, 0x0000, 0xb4c0,
        0x0000, 0xf6d1, 0xb1f8, 0x6eb7, 0xf6d2, 0xc6f2, 0xdde7, 0xb9be,
        0xc3d3, 0x0000, 0xdde9, 0x0000, 0x0000, 0x0000, 0x0000, 0x6ecf,
        0xddf1, 0x0000, 0xddea, 0x0000, 0x0000, 0x6eb8, 0x0000, 0x0000,
        0xc2c1, 0x0000, 0xb5e2, 0xddf2, 0xf6d4, 0x0000, 0xf6d5, 0x0000,
        0x0000, 0x0000, 0xb7e8, 0x0000, 0x0000, 0xb5a5, 0xddf0, 0x0000,
    ],
    [
        0x0000, 0xddee, 0xddeb, 0xcde0, 0x6eb9, 0xf6d6, 0xf6d7, 0x0000,
        0xc4c0, 0x6eba, 0x0000, 0x0000, 0xc6d9, 0xddec, 0x0000, 0x0000,
        0xddf4, 0x0000, 0xddf3, 0xb7a3, 0x6ebc, 0x6ebd, 0xb2ad, 0x6ebe,
        0xf6d8, 0xbabb, 0xdded, 0xddef, 0xf6d9, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcbd7, 0xc2f4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf6d3, 0xcbf7, 0x0000, 0x6ebf, 0xddfc, 0x0000,
        0x0000, 0xddfd, 0x0000, 0xb2cf, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcaa8, 0xccfd, 0xdea1, 0xbca3, 0xbec2, 0xddf8, 0xddfe, 0xb1e8,
    ],
    [
        0x0000, 0xb6b7, 0x6ec0, 0x0000, 0xddf5, 0xddfa, 0xf6db, 0x0000,
        0x0000, 0xc0f4, 0xc7f1, 0x0000, 0xc8e7, 0x0000, 0x0000, 0x0000,
        0x6ec1, 0x0000, 0x0000, 0xddf7, 0xf6dc, 0xcba1, 0x6ec3, 0xddf9,
        0x0000, 0xdea4, 0x6ec4, 0xdea2, 0x6ec5, 0xddfb, 0x0000, 0x0000,
        0xf6dd, 0xcba2, 0xc7c8, 0xb5e3, 0x0000, 0xc5a5, 0x0000, 0x0000,
        0xc3ed, 0x6ec6, 0xdea5, 0xf6de, 0x6ec7, 0x6ec8, 0xf6df, 0xdea3,
        0xc2d9, 0xddf6, 0x0000, 0xb1cb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf6da, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x6eca, 0x0000, 0x0000, 0x0000, 0xf6e1, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x6ecb, 0xcdce, 0xdeb0, 0x0000, 0xf6e2, 0x0000,
        0x0000, 0x0000, 0xdeaf, 0x0000, 0x0000, 0x0000, 0x0000, 0xc0f6,
        0x0000, 0xdeac, 0x0000, 0xcdec, 0x0000, 0x0000, 0xc6b6, 0xdea6,
        0x0000, 0x0000, 0x0000, 0x0000, 0x6ecc, 0xc4c5, 0x6ecd, 0x6ece,
        0x0000, 0xb1cc, 0xb9bf, 0xdea9, 0x0000, 0x0000, 0xf6e3, 0x6ed0,
        0x0000, 0xf6e4, 0xbda7, 0xdeae, 0x6ee5, 0xdead, 0xdea8, 0x0000,
        0xdeab, 0xf6e5, 0x0000, 0xb3e8, 0x6ed1, 0xdeaa, 0xc7c9, 0xf6e6,
    ],
    [
        0x0000, 0xceae, 0x0000, 0x0000, 0xbef4, 0xc0f5, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf6e7, 0xdeb6, 0xdeb4, 0x6ed2, 0xc9cd, 0x0000, 0x6ed3, 0x0000,
        0x6ed4, 0x0000, 0x0000, 0xdeb1, 0xdeb3, 0xf6e8, 0xb1ba, 0x0000,
        0x0000, 0xb9c0, 0xcfb2, 0x0000, 0xb3bd, 0x0000, 0xc9e2, 0x0000,
        0x6ed5, 0x0000, 0x0000, 0x0000, 0xcde1, 0x0000, 0x0000, 0xb3a4,
        0xbfbb, 0xdeb5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x6ed6, 0x6ed7, 0xf6ea, 0x0000, 0x0000, 0xdeba, 0x0000, 0xf6eb,
        0xbec3, 0xf6ec, 0x6ed8, 0x0000, 0xcdb0, 0x6ed9, 0xdeb7, 0x0000,
        0x0000, 0x6eda, 0x0000, 0xdeb2, 0xf6ed, 0xdeb8, 0x0000, 0x0000,
        0x6edb, 0xcede, 0x0000, 0xc5f3, 0xc6c2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf6ee, 0x6ee1, 0xf6ef, 0x0000, 0x6ee2, 0xb3b6,
        0x0000, 0x0000, 0xb1d5, 0x0000, 0x6ee3, 0xdebe, 0x0000, 0x0000,
        0xdec1, 0x0000, 0x0000, 0x0000, 0xcec3, 0x0000, 0x0000, 0xf6f0,
    ],
    [
        0xcde4, 0x0000, 0x6ee4, 0x0000, 0xf6f1, 0xdec8, 0xdec2, 0xdebf,
        0x6ee6, 0x0000, 0x0000, 0xced4, 0xdec5, 0x0000, 0x6ee7, 0x6ee8,
        0x6ee9, 0xbdca, 0xdec7, 0x0000, 0x0000, 0xdecc, 0xf6f2, 0x0000,
        0xc5f1, 0xdeca, 0xf6f3, 0xf6f4, 0x0000, 0xf6f5, 0xdec4, 0x6eea,
        0x0000, 0xc3b8, 0x0000, 0x0000, 0xdecb, 0x0000, 0xdec0, 0x0000,
        0xdec6, 0x6eeb, 0xdecd, 0xb0fc, 0xdec3, 0x0000, 0xdece, 0x0000,
        0x0000, 0xbfbc, 0x0000, 0xbddf, 0x0000, 0xcaa5, 0x6eec, 0xbaae,
        0x0000, 0xdebb, 0xdec9, 0xc5ba, 0xf6f6, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc0b6, 0x0000, 0xb3e9,
        0xbad1, 0xbec4, 0xdebd, 0xbdc2, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb7cc, 0x0000, 0xdebc, 0x0000, 0x6edd,
        0x0000, 0xded2, 0xbded, 0xb8ba, 0x0000, 0xdee1, 0x6eee, 0xdedb,
        0xb5f4, 0xc5cf, 0x6eef, 0xded6, 0xdedf, 0xb0af, 0xb1b2, 0x6ef0,
        0x0000, 0xb2b9, 0x0000, 0xded8, 0xc2ac, 0xdecf, 0xded1, 0xb9c1,
        0x0000, 0x0000, 0x6ef2, 0x0000, 0xf6f8, 0x0000, 0x6eed, 0x0000,
        0xdee2, 0x0000, 0xdedd, 0x0000, 0x6ef3, 0x0000, 0xded5, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xdedc, 0xf6f9, 0x0000, 0x0000, 0x0000,
        0x6ef4, 0x6ef5, 0xccab, 0x6ef6, 0x6ef7, 0xdeda, 0xdede, 0x6ef8,
        0x0000, 0x6ef9, 0x0000, 0x6efa, 0x6efb, 0x0000, 0xb8d0, 0x6efc,
        0xbec5, 0x0000, 0x0000, 0xc3b9, 0xf6fa, 0x0000, 0xf6fb, 0xded4,
        0x0000, 0x0000, 0x0000, 0x6efd, 0x0000, 0x0000, 0x0000, 0xcdaf,
        0x0000, 0x0000, 0x0000, 0xded7, 0x0000, 0x0000, 0xded0, 0xc5f2,
        0x0000, 0x0000, 0xded3, 0x0000, 0x0000, 0x0000, 0xded9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcfd1, 0xbcbe,
    ],
    [
        0xcbfe, 0x0000, 0xdee3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc8ae, 0x0000, 0x0000, 0xdeef,
        0xb8bb, 0x0000, 0x0000, 0x6fa1, 0x0000, 0x0000, 0xbde0, 0x0000,
        0xdee5, 0x0000, 0x0000, 0x0000, 0xceaf, 0xb9c2, 0x0000, 0xdef2,
        0x0000, 0x0000, 0xb0ee, 0x0000, 0x0000, 0xdef0, 0x0000, 0x6fa2,
        0x0000, 0x0000, 0xdee4, 0xf6fc, 0x0000, 0x0000, 0x0000, 0xdeea,
        0x0000, 0xf6fd, 0xdeec, 0x0000, 0x6fa3, 0x0000, 0xcdcf, 0xdee7,
        0x0000, 0x0000, 0xc5ae, 0x0000, 0x0000, 0xdee9, 0x0000, 0x6fa4,
    ],
    [
        0x0000, 0xf6fe, 0xdef1, 0x6fa5, 0xdeeb, 0xccc7, 0x0000, 0xf7a1,
        0x0000, 0xdee6, 0x6fa6, 0xbca2, 0xdefe, 0x0000, 0xf7a2, 0x0000,
        0x0000, 0xb3ea, 0x0000, 0xdee8, 0xdeed, 0xdeee, 0x0000, 0x0000,
        0x0000, 0x6fa7, 0x0000, 0x0000, 0x0000, 0xc2ec, 0xc2da, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x6fa9, 0xdef6, 0x0000, 0x0000, 0xdefc,
        0x0000, 0x0000, 0xdefa, 0x0000, 0xc5a9, 0x0000, 0x0000, 0xdfa3,
        0xdef7, 0x6faa, 0x0000, 0x6fab, 0x0000, 0x0000, 0xdef8, 0xdee0,
    ],
    [
        0x0000, 0xb5f9, 0xc9ba, 0x0000, 0x0000, 0x0000, 0xbcbf, 0x0000,
        0x0000, 0xb9f7, 0x6fac, 0x0000, 0x6fad, 0x0000, 0x0000, 0xcfb3,
        0xf7a3, 0xdef4, 0x0000, 0xdfa2, 0xb1e9, 0xc1e6, 0x0000, 0x0000,
        0x6fae, 0x0000, 0xf7a4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc7f9, 0x0000, 0xb4c1, 0xcefa, 0x0000, 0x6faf, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf7a6, 0xcca1, 0xc4d2, 0x0000, 0x0000, 0xf7a7,
        0x0000, 0xdefb, 0xdefd, 0xf7a8, 0x0000, 0x6fa8, 0x6fb0, 0x0000,
        0xc1b2, 0x0000, 0x0000, 0x0000, 0x6fb1, 0x0000, 0xdfa1, 0xdef9,
    ],
    [
        0x0000, 0xdef3, 0x0000, 0x0000, 0x0000, 0xb4c3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf7a9, 0x6fb3, 0x0000, 0xb7e9, 0x0000, 0x0000, 0x6fb4,
        0xdfaf, 0xf7aa, 0x6fb5, 0xdfaa, 0xc0f8, 0x0000, 0xf7ab, 0xb3e3,
        0x6fb6, 0xf7ac, 0xf7ad, 0x0000, 0xbde1, 0x0000, 0xdfb3, 0x0000,
        0x6fb7, 0x0000, 0x0000, 0x0000, 0x0000, 0xdfac, 0xc4ac, 0xdfa9,
        0xc4d9, 0x0000, 0x0000, 0x0000, 0xdfcc, 0x0000, 0x0000, 0x0000,
        0xdfa6, 0x0000, 0xdfa5, 0x0000, 0xdfae, 0x6fb9, 0xf7ae, 0x0000,
    ],
    [
        0xdfa8, 0xdfa7, 0xdfad, 0x0000, 0xc0a1, 0x0000, 0xdfa4, 0x0000,
        0xf7af, 0x0000, 0x0000, 0x0000, 0xf7b0, 0xf7b1, 0xdfb0, 0x0000,
        0x6fba, 0xdfb1, 0x0000, 0x0000, 0xf7b2, 0x0000, 0x6fbb, 0xb4c2,
        0x6fb8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6fbd,
        0xf7b3, 0xdfb6, 0x0000, 0xdfb5, 0xdfb7, 0x6fbe, 0x0000, 0xf7b4,
        0x0000, 0x0000, 0xdfba, 0x0000, 0x0000, 0x0000, 0x0000, 0x6fbf,
        0x0000, 0xc5c3, 0x0000, 0xdfb4, 0x0000, 0x6fc1, 0xf7b5, 0x0000,
        0x0000, 0xdfb8, 0x0000, 0x0000, 0xf7b6, 0x0000, 0x6fbc, 0x0000,
    ],
    [
        0xb7e3, 0xc2f9, 0xdfb2, 0xc7bb, 0x0000, 0x0000, 0xdfb9, 0xf7b7,
        0x6fc2, 0x6fc3, 0xf7b8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xdfbe, 0xdfbc, 0x0000, 0x0000,
        0xdfbf, 0x0000, 0x6fc4, 0xdfc2, 0x0000, 0x0000, 0x6fc5, 0xdfbb,
        0xb9ea, 0xc7a8, 0x0000, 0x0000, 0xdeb9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x6fc6, 0x0000, 0xcdf4, 0xdfbd, 0x0000, 0xdfc1, 0xc2f5,
        0xf7ba, 0xdfc0, 0x0000, 0xdfab, 0x0000, 0xf7bb, 0xefe9, 0x0000,
        0x0000, 0xf7b9, 0xdfc5, 0x0000, 0x6fc8, 0x0000, 0xdfc9, 0x0000,
    ],
];

static THREE_E7_ROW: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 0, 60, 61, 62, 63,
];

static THREE_E7: [[u16; 64]; 63] = [
    [
        0x6fc9, 0xdfc7, 0x0000, 0x0000, 0x0000, 0xf7bc, 0xf7bd, 0x6fca,
        0x0000, 0xdfc3, 0x6fcb, 0xdfc4, 0x0000, 0x0000, 0x0000, 0xdfc8,
        0x0000, 0xdfc6, 0x0000, 0x0000, 0x0000, 0xc9ce, 0x0000, 0x0000,
        0xdfce, 0x0000, 0xdfcb, 0xdfca, 0x0000, 0xdfcd, 0xc6d4, 0xdfcf,
        0x0000, 0x0000, 0x0000, 0x6fcc, 0x0000, 0x0000, 0xc3f5, 0xc2ed,
        0xf7be, 0x0000, 0x0000, 0x0000, 0xc0a5, 0x0000, 0x0000, 0x0000,
        0xdfd0, 0x0000, 0xdfd2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x6fce, 0x6fcf, 0x0000, 0x6fd0, 0x0000, 0xdfd1, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x6fd1, 0x0000, 0x0000, 0x0000, 0x6fd2,
        0x0000, 0x0000, 0xf7bf, 0x6fd3, 0xdef5, 0x0000, 0xf7c2, 0x0000,
        0x0000, 0xdfd3, 0x0000, 0x0000, 0x6fd5, 0x0000, 0x0000, 0x0000,
        0xc6e7, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7c0, 0xf7c1, 0x0000,
        0x0000, 0x0000, 0x0000, 0xdfd4, 0xf7c3, 0x6fd6, 0x0000, 0x0000,
        0x0000, 0x6fd7, 0x0000, 0xb2d0, 0x6fd8, 0x0000, 0x6fd9, 0xc5f4,
        0xb3a5, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7c4, 0x6fda, 0x0000,
        0xb5e4, 0x0000, 0x0000, 0x0000, 0xbcde, 0xbad2, 0x6fdb, 0x0000,
    ],
    [
        0x0000, 0x6fdc, 0x0000, 0x0000, 0x0000, 0xf7c5, 0x6fdd, 0x0000,
        0x0000, 0xcfa7, 0xbfe6, 0x0000, 0x0000, 0x0000, 0xb1ea, 0x0000,
        0x0000, 0x0000, 0xdfd6, 0x0000, 0x0000, 0x6fde, 0x0000, 0x6fdf,
        0x0000, 0xdfd5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6fe2,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf7c6, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf7c7, 0xdfd9, 0xc3ba, 0xdfdc, 0xdfd7,
        0x0000, 0x6fe3, 0x0000, 0xdfdb, 0x0000, 0x0000, 0x0000, 0xf7c8,
        0xdfda, 0xc5c0, 0xb0d9, 0x6fe0, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcef5, 0x0000, 0x6fe6, 0xdfde, 0x0000, 0x0000, 0x0000, 0xb1a8,
        0x0000, 0x6fe7, 0x0000, 0x6fe8, 0xf7c9, 0x0000, 0x0000, 0x0000,
        0xf7ca, 0xdfe0, 0x0000, 0x0000, 0x6fe9, 0xdfdf, 0x0000, 0xdfdd,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf7cb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x6fe5, 0x0000, 0x0000, 0x0000,
        0x0000, 0xdfd8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcba3, 0x0000, 0x0000, 0x0000, 0xdfe2, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x6fea, 0x6feb, 0x0000, 0x6fec, 0x6fed,
        0x6fee, 0xdfe1, 0x0000, 0x0000, 0x6fef, 0x0000, 0x0000, 0xf7cc,
        0x0000, 0x0000, 0x0000, 0x0000, 0xb1eb, 0x0000, 0x0000, 0x0000,
        0x0000, 0xdfe4, 0xcab2, 0x0000, 0xdfe3, 0x0000, 0xf7ce, 0x0000,
        0xf7cf, 0xccb5, 0x0000, 0x0000, 0x0000, 0x0000, 0xbec7, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf7cd, 0x0000, 0x0000, 0xf7d0, 0x6ff1,
        0xf7d1, 0x6ff2, 0x0000, 0x0000, 0x0000, 0x0000, 0xc1b3, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xbec6, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7d2, 0xf7d3,
        0x0000, 0xcefb, 0x6ff4, 0x0000, 0xdfea, 0x0000, 0xc0f9, 0x0000,
        0x6ff3, 0xf7d4, 0xf7d6, 0x6ff5, 0x0000, 0xdfe6, 0xdfeb, 0x0000,
        0x0000, 0xb1ec, 0x0000, 0x0000, 0xf7d7, 0x0000, 0x6ff6, 0x0000,
        0xf7d8, 0x0000, 0xdfe9, 0x0000, 0xc7e1, 0xdfe5, 0xdfe8, 0xbec8,
        0xf7d9, 0xc8d1, 0x0000, 0x0000, 0xdfec, 0x0000, 0xbcd1, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc0fa, 0x0000, 0x0000,
    ],
    [
        0x6ff9, 0x0000, 0x0000, 0x0000, 0xdfef, 0xf7db, 0x0000, 0xf7dc,
        0xdfe7, 0x0000, 0xb7a7, 0x0000, 0x0000, 0x0000, 0x0000, 0xdfed,
        0x0000, 0x0000, 0xf7dd, 0x0000, 0xcdd0, 0xdff0, 0x6ff8, 0x0000,
        0x0000, 0xf4a6, 0x0000, 0x6ffa, 0x0000, 0x0000, 0x0000, 0xbdcf,
        0x6ffb, 0x0000, 0x6ffc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xdff1, 0x0000, 0x0000, 0x0000, 0xdff2, 0x0000, 0x6ffd, 0x6ffe,
        0x0000, 0xc7ae, 0x0000, 0x70a1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xdff4, 0xf7df, 0x0000, 0x0000, 0x0000, 0xdff5, 0x0000,
    ],
    [
        0x0000, 0xf7de, 0x0000, 0xc7b3, 0xf7e0, 0x0000, 0x0000, 0x0000,
        0xc5f5, 0xdff7, 0x0000, 0x70a3, 0x0000, 0x0000, 0xdff9, 0x0000,
        0xced5, 0x0000, 0xdff6, 0x70a4, 0xdff8, 0xb1ed, 0x0000, 0xdff3,
        0x0000, 0x70a5, 0x0000, 0x0000, 0x70a6, 0x0000, 0x0000, 0xd3db,
        0xdffa, 0x0000, 0x0000, 0x0000, 0x0000, 0xc1e7, 0xbbb8, 0xdffc,
        0x0000, 0x0000, 0x0000, 0x0000, 0xdffb, 0xbfa4, 0xd2d9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xdffd, 0x0000, 0x0000,
        0x0000, 0xe0a1, 0x0000, 0xdfee, 0xdffe, 0x0000, 0xf7e1, 0xe0a2,
    ],
    [
        0xf7e2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc7fa, 0x70a7,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0a3, 0x0000, 0x0000,
        0xe0a4, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7e3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe0a5, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe0a6, 0x0000, 0xc4de, 0x70aa, 0xe0a8, 0xe0a7, 0x0000, 0x0000,
        0xe0a9, 0x0000, 0xe0aa, 0x0000, 0x70ab, 0xbcdf, 0xc9e3, 0x0000,
        0x70ac, 0x70ad, 0xccec, 0xe0ab, 0xe0ac, 0xc1d6, 0xbca4, 0xe0ad,
    ],
    [
        0xe0ae, 0x0000, 0x70af, 0x0000, 0x0000, 0x0000, 0xe0af, 0xcad2,
        0xc8c7, 0x0000, 0x0000, 0xe0b0, 0xc7d7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc4ad, 0x70b0, 0x0000, 0xf7e4, 0xf7e5, 0x70b1,
        0xe0b1, 0xb2e7, 0x0000, 0xb5ed, 0x0000, 0xccc6, 0x0000, 0xccb6,
        0x0000, 0xb2b4, 0xcfb4, 0x70b2, 0x0000, 0x0000, 0x0000, 0xcbd2,
        0x0000, 0xcaaa, 0x0000, 0x0000, 0x0000, 0x0000, 0x70b4, 0x70b5,
        0x0000, 0x0000, 0xc0b7, 0x0000, 0xe0b2, 0x0000, 0x0000, 0x0000,
        0x70b6, 0xc6c3, 0x0000, 0x0000, 0x0000, 0xb8a3, 0xe0b3, 0x70b7,
    ],
    [
        0xbad4, 0xe0b5, 0xe0b4, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0b6,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7e7, 0x70b8, 0x0000,
        0x0000, 0x0000, 0xe0b7, 0x0000, 0x0000, 0x0000, 0xe0b8, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf7e8, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb5be, 0x0000, 0xe0b9, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0ba,
        0x0000, 0x0000, 0x0000, 0x0000, 0xb8a4, 0x70ba, 0x70bb, 0xc8c8,
        0x70bc, 0x70bd, 0xe0bc, 0x0000, 0x0000, 0x0000, 0xbef5, 0x0000,
        0x0000, 0xe0bb, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7e9, 0x0000,
    ],
    [
        0xf7ea, 0x70be, 0xb6b8, 0xe0bd, 0xe0bf, 0x0000, 0xe0be, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x70c0, 0x0000, 0xe0c0, 0x0000,
        0xb8d1, 0x0000, 0xe0c1, 0x0000, 0x0000, 0x0000, 0x0000, 0xb6e9,
        0x0000, 0xc1c0, 0x0000, 0xb9fd, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe0c3, 0xe0c4, 0xe0c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbced, 0x0000, 0x0000, 0xc6c8, 0xb6b9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x70c3, 0x0000, 0x0000, 0x0000, 0xe0c6,
        0xc3ac, 0xe0c5, 0x70c4, 0xf7eb, 0xcfb5, 0xc7e2, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x70c5,
        0x0000, 0x0000, 0xe0c9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x70c6, 0x0000, 0x0000, 0x0000, 0xe0cb, 0xe0c8,
        0x70c7, 0x70c8, 0x0000, 0xccd4, 0xe0ca, 0xe0cc, 0x0000, 0xcec4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0d0, 0x0000, 0xf7ed,
        0xf7ee, 0xe0cf, 0xc3f6, 0xc7ad, 0x70cb, 0x0000, 0xb8a5, 0xe0ce,
        0x0000, 0x70cc, 0x0000, 0x70cd, 0xe0cd, 0x0000, 0xcdb1, 0xcdb2,
        0x0000, 0x70ca, 0x0000, 0x0000, 0x0000, 0x70ce, 0xe0d1, 0xb1ee,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xb9f6, 0xbbe2, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0d2, 0xe0d3,
        0xf7f0, 0x0000, 0x70cf, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0d5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbdc3, 0x0000, 0x0000, 0xf7f1, 0x0000,
        0xe0d7, 0x0000, 0xe0d6, 0x70d1, 0x70d2, 0x0000, 0x70d4, 0x70d5,
        0xe0d8, 0x70d6, 0xb3cd, 0x0000, 0x0000, 0xe0da, 0x0000, 0x70d7,
        0xe0d9, 0x0000, 0xe0dc, 0xe0db, 0xf7f2, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x70d8, 0x0000, 0x0000, 0xb8bc, 0x70d9, 0x0000, 0xcea8,
        0x0000, 0xb6cc, 0x70da, 0xb2a6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x70db, 0xf7f3, 0xb6ea, 0x0000,
        0x70dc, 0x0000, 0x0000, 0x0000, 0x70dd, 0x0000, 0x70de, 0xf7f4,
        0xf7f5, 0x0000, 0xf7f6, 0x0000, 0x0000, 0x70df, 0xf7f7, 0x0000,
        0x70e0, 0xb4e1, 0x0000, 0xf7f8, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcee8, 0xe0de, 0x0000, 0x70e1, 0x0000, 0x70e2,
        0x0000, 0x70e3, 0x0000, 0xe0e0, 0x70e4, 0x0000, 0x0000, 0x70e5,
    ],
    [
        0xe0e1, 0x0000, 0xb2d1, 0x0000, 0x0000, 0x70e6, 0x0000, 0x0000,
        0xe0dd, 0xf7f9, 0xbbb9, 0x70e7, 0x0000, 0xc4c1, 0xe0df, 0xf7fa,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf7fb, 0x0000,
        0x0000, 0xf7fc, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0e4, 0x0000,
        0xbcee, 0x70e8, 0x0000, 0xf7fd, 0x0000, 0xe0e2, 0x0000, 0x70e9,
        0x0000, 0xf7fe, 0xb7be, 0x0000, 0x0000, 0xc8c9, 0xe0e3, 0x0000,
        0x0000, 0xe0fe, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe0e9, 0x70ea, 0x70ec, 0x0000, 0x0000, 0x0000, 0xb8bd, 0x0000,
    ],
    [
        0x0000, 0x70ed, 0x0000, 0xb5e5, 0x0000, 0xe0e6, 0xcdfd, 0xf8a1,
        0x0000, 0xceb0, 0xf8a2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x70eb, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xf8a3, 0xf8a4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc2f6, 0x0000, 0x70ee, 0xe0e8, 0xf8a6, 0x0000,
        0xf8a7, 0x0000, 0xf8a8, 0xf8a9, 0xf8aa, 0x0000, 0xf8ab, 0xf8ac,
        0xf8ad, 0x70ef, 0xe0ea, 0xced6, 0xb6d7, 0xc8fc, 0xc7ca, 0x0000,
        0x0000, 0x70f0, 0xe0eb, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0ed,
    ],
    [
        0x70f2, 0xe0f0, 0x0000, 0x70f3, 0xf8ae, 0x0000, 0xf8af, 0xf8b0,
        0x0000, 0x0000, 0x0000, 0xf8b1, 0x0000, 0x70f4, 0x0000, 0x0000,
        0x0000, 0x0000, 0x70f5, 0x70f1, 0x0000, 0xe0ec, 0x0000, 0xf8b2,
        0x0000, 0xe0ef, 0xb8ea, 0xb1cd, 0xe0f1, 0x70f6, 0xbff0, 0xe0ee,
        0xcedc, 0x0000, 0xf8b3, 0xe0f4, 0xf4a4, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe0f2, 0xe0f5, 0xf8b4, 0x0000, 0xf8b5, 0x0000, 0xe0e7,
        0xe0f3, 0x70f7, 0x0000, 0xbabc, 0x0000, 0x0000, 0xe0f6, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0f7, 0x0000,
    ],
    [
        0x0000, 0x70f8, 0x0000, 0xcdfe, 0x0000, 0x70f9, 0xf8b6, 0xf8b7,
        0x70fa, 0xf8b8, 0x0000, 0xe0f8, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf8bd, 0x0000, 0x70fc, 0x0000, 0x0000, 0x0000, 0x0000, 0x70fd,
        0xf8b9, 0x70fe, 0x0000, 0x0000, 0xf8ba, 0x0000, 0xe0f9, 0xf8bb,
        0x71a1, 0x71a2, 0xe0e5, 0xf8bc, 0x0000, 0x71a3, 0xf8be, 0xe0fa,
        0xf8bf, 0xf8c0, 0x71a4, 0x71a5, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb4c4, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8c1, 0x0000, 0x0000,
        0x0000, 0x71a6, 0x71a8, 0x71a7, 0x0000, 0xbca5, 0x0000, 0xf8c2,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf8c3, 0xf8c4, 0xe0fb, 0x0000, 0x0000, 0x0000, 0x0000, 0xe0fc,
        0x0000, 0x0000, 0x0000, 0x0000, 0xe0fd, 0x0000, 0x71a9, 0x0000,
        0x71aa, 0x0000, 0xf8c5, 0x0000, 0xb1bb, 0x0000, 0x71ab, 0x0000,
        0xe1a1, 0x0000, 0xc9bb, 0xe1a2, 0x0000, 0x0000, 0xb4a4, 0xe1a3,
        0x0000, 0xe1a4, 0x0000, 0x71ad, 0x0000, 0x0000, 0xe1a5, 0x71ac,
        0xe1a7, 0xe1a8, 0xe1a6, 0x0000, 0x0000, 0x0000, 0xc9d3, 0xe1aa,
        0xe1a9, 0x0000, 0x71af, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8c6,
    ],
    [
        0x0000, 0xf8c7, 0x0000, 0xe1ac, 0xe1ab, 0xe1ad, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xe1ae, 0xe1b0, 0xe1af, 0x0000,
        0x0000, 0xb9f9, 0x0000, 0xe1b2, 0x0000, 0xe1b1, 0x0000, 0xf8c8,
        0xb4c5, 0x0000, 0xbfd3, 0x0000, 0xc5bc, 0x0000, 0xe1b3, 0xc0b8,
        0x71b1, 0x0000, 0x0000, 0xbbba, 0x71b2, 0xb1f9, 0xe1b4, 0x0000,
        0xcdd1, 0x0000, 0x71b3, 0xcae3, 0xe1b5, 0x0000, 0x0000, 0xf8c9,
        0xc5c4, 0xcdb3, 0xb9c3, 0xbfbd, 0x0000, 0x0000, 0x0000, 0xc3cb,
        0xd2b4, 0x0000, 0xc4ae, 0xb2e8, 0xe1b6, 0x71b6, 0x71b7, 0x0000,
    ],
    [
        0x71b8, 0x0000, 0x0000, 0x0000, 0xe1b7, 0x0000, 0xe1bc, 0x0000,
        0x71b9, 0xe1ba, 0xe1b9, 0xdac2, 0xb3a6, 0xe1b8, 0x71ba, 0xb0da,
        0x71bb, 0xc8aa, 0x71bc, 0x0000, 0xc8ca, 0x0000, 0x0000, 0x0000,
        0x0000, 0xceb1, 0xe1bd, 0xe1bb, 0xc3dc, 0xc0a6, 0x0000, 0x0000,
        0xc8ab, 0x0000, 0xc9ad, 0x0000, 0xe1bf, 0xceac, 0xb7cd, 0xe1c0,
        0x0000, 0xe1be, 0xc8d6, 0xe1c1, 0x71bd, 0xe1c2, 0x0000, 0xf8ca,
        0xb0db, 0x71bf, 0x71be, 0xbef6, 0xe1c7, 0x0000, 0xe1c4, 0xc6ed,
        0xe1c3, 0xf8cb, 0x71c0, 0x0000, 0x0000, 0x71c1, 0x71c2, 0xb5a6,
    ],
    [
        0x0000, 0x71c3, 0xe1ca, 0x0000, 0x0000, 0x0000, 0xe1c5, 0xe1c6,
        0x0000, 0xe1c9, 0xe1c8, 0xc9a5, 0x71c5, 0x0000, 0xc1c2, 0xc1c1,
        0x0000, 0xb5bf, 0xf8cc, 0x0000, 0xe1cb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe1cc, 0x0000, 0x0000, 0xe1cd, 0x0000, 0x0000,
        0x0000, 0x0000, 0x71c7, 0xe1cf, 0x0000, 0xe1ce, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb1d6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x71c9, 0xe1d7, 0xc8e8, 0xe1d1, 0x0000, 0xe1d3, 0x0000, 0x71ca,
        0xe1d5, 0xbfbe, 0x0000, 0x0000, 0xe1d6, 0xe1d4, 0xbcc0, 0x71cb,
    ],
    [
        0x71cc, 0x0000, 0xe1d0, 0xe1d2, 0x0000, 0xc9c2, 0x71cd, 0xbec9,
        0x0000, 0x0000, 0xe1d9, 0x0000, 0x0000, 0xe1d8, 0xf8ce, 0x71ce,
        0x0000, 0x0000, 0xe1da, 0x71cf, 0xbca6, 0xbaaf, 0x0000, 0x0000,
        0xc5f7, 0xe1db, 0x0000, 0xc4cb, 0x0000, 0x71d0, 0xe1dd, 0x71d1,
        0x71d2, 0x0000, 0xcea1, 0xe1dc, 0xf8cf, 0x0000, 0x0000, 0x71d3,
        0x0000, 0xc1e9, 0x0000, 0x0000, 0x71d4, 0x0000, 0x71d5, 0x0000,
        0xe1e2, 0x71d6, 0xe1e4, 0xe1e5, 0xc3d4, 0x0000, 0x0000, 0x0000,
        0x0000, 0x71d7, 0xe1e3, 0x0000, 0xe1e0, 0x0000, 0xe1de, 0xe1df,
    ],
    [
        0xf8d0, 0xe1e1, 0xf8d1, 0x71d8, 0x0000, 0x0000, 0x0000, 0x71da,
        0xf8d2, 0xe1e8, 0x0000, 0xe1e6, 0x0000, 0xe1e7, 0x0000, 0x71db,
        0x0000, 0x0000, 0x0000, 0x71de, 0x0000, 0xf8d3, 0xf8d4, 0x0000,
        0x71d9, 0xf8d5, 0x0000, 0x71df, 0x71e0, 0x0000, 0xf8d6, 0xe1e9,
        0xe1eb, 0xe1ec, 0xe1ed, 0x0000, 0xe1ee, 0x71e2, 0xfefd, 0xe1ea,
        0x71e3, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8d7, 0x0000, 0x0000,
        0xe1f0, 0x0000, 0x0000, 0x71e5, 0xe1ef, 0xf8d8, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe1f1, 0x71e4, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x71e8, 0xcec5, 0xf8d9, 0x0000, 0x0000, 0xe1f4, 0xe1f2,
        0xe1f3, 0x71ea, 0x0000, 0xf8da, 0xb4e2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xccfe, 0x0000, 0x0000, 0x71eb, 0xcaca, 0x0000,
        0xe1f6, 0x0000, 0x0000, 0x0000, 0xe1f5, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe1f7, 0xe1f8, 0x0000, 0xf8db, 0xf8dc, 0x0000, 0xe1fc,
        0xe1f9, 0xe1fa, 0xe1fb, 0x0000, 0xe1fd, 0xf8dd, 0x71ed, 0xf8de,
        0xe1fe, 0xf8df, 0xe2a1, 0x0000, 0x0000, 0x0000, 0xe2a2, 0x0000,
        0xe2a3, 0x0000, 0xc8af, 0xc5d0, 0xe2a4, 0xc7f2, 0xc9b4, 0x0000,
    ],
    [
        0xe2a5, 0xf8e0, 0x0000, 0xe2a6, 0xc5aa, 0x0000, 0xb3a7, 0xb9c4,
        0xe2a7, 0x0000, 0x0000, 0xe2a8, 0x0000, 0x0000, 0xe2a9, 0x0000,
        0xbba9, 0x0000, 0x0000, 0xe2ab, 0x0000, 0x71ee, 0xe2aa, 0x0000,
        0x0000, 0xe2ac, 0xe2ad, 0xf8e1, 0x71ef, 0xf8e2, 0xf8e3, 0x0000,
        0x71f1, 0x71f0, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8e4, 0x71f2,
        0x71f3, 0x0000, 0xf8e5, 0x0000, 0x0000, 0x0000, 0xc8e9, 0x71f4,
        0xe2ae, 0x0000, 0x0000, 0x0000, 0xe2af, 0x0000, 0xf8e6, 0xf3e9,
        0xe2b0, 0xe2b1, 0xe2b2, 0x0000, 0x0000, 0x0000, 0x0000, 0xbbae,
    ],
    [
        0x0000, 0x0000, 0xe2b3, 0xc7d6, 0x0000, 0xf8e7, 0xcbdf, 0x0000,
        0xb1ce, 0x71f6, 0xb1d7, 0x0000, 0xf8e8, 0xe2b4, 0xf8e9, 0x0000,
        0x0000, 0x0000, 0xe2b6, 0x0000, 0xf8ea, 0x0000, 0xe2b5, 0xc5f0,
        0x0000, 0x0000, 0x0000, 0xc0b9, 0xddb9, 0x0000, 0xe2b7, 0xccc1,
        0x0000, 0xe2b8, 0x0000, 0xb4c6, 0xc8d7, 0xe2b9, 0xf8eb, 0xe2ba,
        0x71f8, 0x0000, 0xe2bb, 0x0000, 0x71f9, 0x0000, 0xccdc, 0x0000,
        0x0000, 0xf8ec, 0xccd5, 0x0000, 0xc4be, 0x0000, 0x0000, 0x0000,
        0xc1ea, 0x0000, 0x0000, 0xe2bd, 0xf8ed, 0x0000, 0xbde2, 0x0000,
    ],
    [
        0x0000, 0xbeca, 0x0000, 0x0000, 0xe2c0, 0x0000, 0x0000, 0xe2bf,
        0xe2be, 0xc8fd, 0xf8ee, 0xb4c7, 0xb8a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x71fb,
        0x0000, 0xf8ef, 0x71fc, 0xe2c6, 0x0000, 0x0000, 0xe2c3, 0xbfbf,
        0xccb2, 0x0000, 0x0000, 0x0000, 0xe2c2, 0xe2c4, 0xe2c5, 0x0000,
        0x0000, 0xe2c1, 0x0000, 0x0000, 0x0000, 0x71fd, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf8f0, 0x71fe, 0xf8f1, 0xe2c7,
        0xe2c8, 0x0000, 0xc4af, 0x0000, 0xb4e3, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xc3e5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8f2, 0xe2c9,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf8f3, 0xf8f4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x72a5, 0x0000, 0xe2ca, 0xe2cd, 0xf8f5, 0x0000, 0x0000, 0xf8f6,
        0x72a6, 0xbfe7, 0xf8f7, 0xc6c4, 0x0000, 0xe2ce, 0xcbd3, 0x0000,
        0xe2cb, 0x0000, 0x72a7, 0xe2cc, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x72a9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe2d1, 0xf8f8, 0x0000, 0x72aa, 0x72ab, 0xe2d0, 0xe2cf,
    ],
    [
        0xf8f9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe2d3, 0x0000, 0x0000, 0xe2d2, 0x0000,
        0x0000, 0xe2d4, 0x0000, 0x0000, 0xf8fa, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x72ae, 0x0000, 0x0000, 0x0000, 0xe2d6, 0x72af,
        0xe2d5, 0x0000, 0x72b0, 0x0000, 0x72b1, 0xcacd, 0x0000, 0x0000,
        0x0000, 0x72b2, 0xf8fb, 0x0000, 0xbdd6, 0xcec6, 0x0000, 0x0000,
        0xe2d7, 0x0000, 0x0000, 0xc6b7, 0x0000, 0x0000, 0xe2d8, 0x0000,
        0x0000, 0xe2d9, 0x0000, 0xe2dd, 0xe2db, 0xe2dc, 0x0000, 0xe2da,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe2de,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe2df, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe2e0,
        0x0000, 0x0000, 0xe2e1, 0xccb7, 0xe2e2, 0x0000, 0x72b3, 0x72b4,
        0xf8fc, 0x0000, 0xccf0, 0xe2e3, 0x72b5, 0xc3ce, 0x72b6, 0xc7ea,
        0x0000, 0xb6eb, 0x72b7, 0x0000, 0x72b8, 0xc3bb, 0xe2e4, 0xb6ba,
        0x72ba, 0x0000, 0x0000, 0xc0d0, 0x72bb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x72bc, 0xe2e5, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xbabd, 0x0000, 0x0000, 0x72be, 0x72bf, 0x0000,
        0x0000, 0x72c0, 0x0000, 0x0000, 0xe2e6, 0x72c1, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe2e7, 0x0000, 0xb8a6, 0xbad5, 0x0000, 0x0000,
        0x0000, 0x72c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe2e9, 0x72c3, 0x0000, 0x0000, 0x0000, 0xc5d6, 0xbad6, 0xb5ce,
        0x0000, 0x0000, 0x0000, 0x0000, 0x72c4, 0xf8fd, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcba4, 0x0000, 0xc7cb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc5d7, 0x0000, 0x0000, 0x0000, 0x0000, 0xb9dc,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xf9a1, 0x0000, 0xe2eb, 0x0000, 0x72c5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf9a2, 0xf9a3,
        0x0000, 0xf9a4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbecb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x72c6, 0x0000, 0x0000, 0x0000,
        0xf9a5, 0x0000, 0x72c7, 0xceb2, 0xb9c5, 0x0000, 0xf9a6, 0xb8a7,
        0x0000, 0x0000, 0xc8a3, 0x0000, 0xe2ed, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xe2ef, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xb8eb, 0x0000, 0x0000, 0x0000, 0x0000, 0xe2ee, 0xc4f6,
        0x0000, 0x0000, 0x72c9, 0x0000, 0xe2f1, 0xb3b7, 0xe2ec, 0x0000,
        0x0000, 0xc8ea, 0x0000, 0xb1b0, 0x72ca, 0xbaec, 0x0000, 0xcfd2,
        0x0000, 0x0000, 0xe2f0, 0x0000, 0x0000, 0x72cc, 0x72cd, 0x72ce,
        0x0000, 0x0000, 0x0000, 0xe2f2, 0x72cb, 0x0000, 0x0000, 0xcacb,
        0x0000, 0xc0d9, 0xe2f4, 0x0000, 0x0000, 0xf9aa, 0x0000, 0xe2f5,
        0xf9a8, 0x0000, 0x0000, 0x0000, 0x0000, 0xe2f3, 0x0000, 0x0000,
        0x0000, 0x0000, 0xb3ce, 0x72cf, 0xe2fb, 0x0000, 0xe2fa, 0x0000,
    ],
    [
        0x0000, 0xbca7, 0x0000, 0x0000, 0x0000, 0xe2fc, 0xe2f7, 0x0000,
        0x72d0, 0x0000, 0xe2fd, 0xe2f8, 0x72d1, 0x0000, 0x72d2, 0x0000,
        0xc8d8, 0xe2f6, 0x0000, 0x0000, 0xe2f9, 0x72d3, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe3a2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x72d4, 0x72d5, 0x0000, 0x0000, 0xf9ab, 0x0000, 0x72d6, 0xe3a1,
        0xcbe1, 0x0000, 0x0000, 0x0000, 0xe2fe, 0x0000, 0x0000, 0xb0eb,
        0x0000, 0x0000, 0xf9ac, 0x0000, 0xe3a4, 0x0000, 0x0000, 0xf9ae,
        0x0000, 0x72d7, 0x72d8, 0x72d9, 0x0000, 0xe3a3, 0x72da, 0x0000,
    ],
    [
        0xf9ad, 0xbecc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe3a5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc1c3, 0x0000,
        0x72dc, 0xe3a7, 0xe3a6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe3a8, 0x0000, 0x72dd, 0xf9af, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x72df, 0xe2e8, 0x0000,
        0x0000, 0x0000, 0xe2ea, 0xe3aa, 0xe3a9, 0x0000, 0xf9b0, 0x0000,
        0x72de, 0xf9b1, 0x0000, 0x0000, 0xf9b2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xbca8, 0x72e0, 0xcee9, 0x0000, 0xbcd2, 0x0000,
    ],
    [
        0xe3ab, 0xb7b7, 0x0000, 0x0000, 0x0000, 0xf9b5, 0xf9b6, 0xb5c0,
        0xb5a7, 0xbbe3, 0x72e1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xcdb4, 0x0000, 0x0000, 0xe3b1, 0x0000, 0xe3b0, 0xc1c4, 0xe3ad,
        0x72e2, 0x0000, 0xe3af, 0x72e3, 0xf9ba, 0xbdcb, 0xbfc0, 0xe3ae,
        0xe3ac, 0x0000, 0xc7aa, 0x0000, 0x0000, 0xbecd, 0x0000, 0x72e5,
        0xc9bc, 0x0000, 0x0000, 0x0000, 0x0000, 0xbad7, 0x0000, 0x0000,
        0x0000, 0x0000, 0x72e6, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5f8,
        0x0000, 0xf9be, 0xe3b2, 0x0000, 0x0000, 0x0000, 0x0000, 0xe3b3,
    ],
    [
        0xe3c9, 0xb6d8, 0x0000, 0x0000, 0xcfbd, 0xc1b5, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe3b4, 0x0000, 0x0000, 0xb2d2, 0xc4f7, 0xcaa1,
        0x0000, 0x0000, 0x0000, 0x0000, 0x72e7, 0x72e8, 0x72e9, 0x0000,
        0xf9c2, 0x0000, 0x0000, 0x72ea, 0x0000, 0xe3b5, 0x0000, 0x0000,
        0x0000, 0x72eb, 0x0000, 0x0000, 0x0000, 0x0000, 0xb5fa, 0xe3b6,
        0x0000, 0x72ec, 0xe3b8, 0x0000, 0x0000, 0x0000, 0xe3b9, 0x0000,
        0xc7a9, 0xf9c3, 0x0000, 0xe3ba, 0x72ed, 0x0000, 0x0000, 0x0000,
        0xf9c4, 0xe3bb, 0xe3bc, 0x72ee, 0x0000, 0xb6d9, 0xb2d3, 0xc6c5,
    ],
    [
        0xbda8, 0xbbe4, 0x72ef, 0x0000, 0x0000, 0x0000, 0x0000, 0x72f0,
        0xf9c5, 0xe3bd, 0xf9c6, 0xbda9, 0x72f1, 0x72f2, 0x0000, 0x0000,
        0x0000, 0xb2ca, 0xc9c3, 0x0000, 0xf9c8, 0xe3be, 0x72f3, 0x0000,
        0xc8eb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf9c9, 0xc1c5,
        0x0000, 0xe3c1, 0x0000, 0xe3c2, 0xc7e9, 0x0000, 0xbfc1, 0xe3bf,
        0x0000, 0xc3e1, 0x0000, 0xf9ca, 0xe3c0, 0xf9cb, 0x0000, 0x0000,
        0xbece, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb0dc, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xb5a9, 0x0000, 0x0000, 0xf9cc, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe3c3, 0x0000, 0x72f8, 0xc4f8, 0x0000, 0xe3c4, 0xc0c7, 0x0000,
        0x0000, 0x72f9, 0x0000, 0x0000, 0xccad, 0x72fa, 0x0000, 0xc9a3,
        0xe3c5, 0xe3c6, 0xc3d5, 0x72fb, 0xcec7, 0x0000, 0x72fc, 0xe3c8,
        0xe3c7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x72fe, 0xbcef, 0x0000,
        0x0000, 0xe3ca, 0xb0f0, 0x0000, 0x0000, 0x0000, 0x0000, 0xe3cd,
        0x73a1, 0xf9ce, 0x0000, 0xe3cb, 0xb2d4, 0xb7ce, 0xe3cc, 0xb9c6,
    ],
    [
        0xb9f2, 0x0000, 0xcae6, 0xe3ce, 0x0000, 0x0000, 0xcbd4, 0x73a2,
        0x0000, 0xe3d0, 0x0000, 0x0000, 0x73a3, 0xc0d1, 0xb1cf, 0xb2ba,
        0xb0ac, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x73a4, 0xe3cf,
        0x0000, 0x73a5, 0x0000, 0x0000, 0x73a6, 0xf9cf, 0x0000, 0x73a7,
        0x73a8, 0xe3d1, 0xe3d2, 0xbef7, 0x0000, 0x0000, 0x0000, 0x73a9,
        0x0000, 0xe3d3, 0x73aa, 0xb3cf, 0x0000, 0xf9d0, 0x0000, 0x0000,
        0xe3d5, 0x0000, 0x0000, 0x0000, 0xb7ea, 0x73ab, 0xb5e6, 0x0000,
        0x73ac, 0xe3d6, 0xb6f5, 0x0000, 0x0000, 0xe3d7, 0x0000, 0xc0fc,
    ],
    [
        0x0000, 0xc6cd, 0x73ad, 0xc0e0, 0xbaf5, 0xf9d2, 0x0000, 0x0000,
        0xe3d8, 0x0000, 0x73ae, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x73af, 0x0000, 0xc3e2, 0xc1eb, 0x0000, 0xe3da, 0xe3dc, 0xe3d9,
        0xe3db, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb7a2,
        0xf9d3, 0x0000, 0x0000, 0x73b0, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe3dd, 0xb7a6, 0x0000, 0x73b1, 0x0000, 0xb5e7, 0xcdd2,
        0xe3df, 0x0000, 0x0000, 0xf9d5, 0x0000, 0x0000, 0xe3e0, 0x0000,
        0x0000, 0x73b4, 0xb1ae, 0xf9d6, 0x73b5, 0x0000, 0x73b6, 0xe3e3,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xb3f6, 0xe3e2, 0xe3e1, 0x0000, 0xe3e5,
        0xe3de, 0x0000, 0xe3e6, 0xcea9, 0x73b8, 0xe3e7, 0xf9d7, 0xe3e8,
        0x0000, 0x73b9, 0xd4f4, 0xe3ea, 0x0000, 0xe3e9, 0x0000, 0x0000,
        0x0000, 0xe3eb, 0xe3ec, 0x0000, 0xceb5, 0xe3ed, 0x0000, 0xf0ef,
        0xbecf, 0xe3ee, 0xe3ef, 0xbdd7, 0x0000, 0xc6b8, 0xe3f0, 0x73ba,
        0x73bb, 0x0000, 0xc3a8, 0xf9d8, 0x0000, 0xe3f1, 0x0000, 0xc3bc,
        0xe3f2, 0x0000, 0x0000, 0x0000, 0x73bc, 0x0000, 0xb6a5, 0x0000,
        0xd1bf, 0xc3dd, 0xbcb3, 0x0000, 0x0000, 0xf9d9, 0x0000, 0xb4c8,
    ],
    [
        0x0000, 0x0000, 0xe3f3, 0x0000, 0xe4a2, 0x0000, 0xe3f6, 0x73bf,
        0xb5e8, 0x0000, 0xe3f5, 0xe4a4, 0x0000, 0x0000, 0x0000, 0xe3f4,
        0x0000, 0xbed0, 0xf9da, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe3f8, 0xe3f9, 0x0000, 0xc5ab, 0x0000, 0x0000, 0xe3fa, 0x0000,
        0xb3de, 0x0000, 0x0000, 0x0000, 0x0000, 0xbfda, 0xc9e4, 0x73c2,
        0xe3fc, 0x0000, 0x73c3, 0x0000, 0xc2e8, 0xf9db, 0x73c4, 0x73c5,
        0x0000, 0x73c6, 0x0000, 0xe3f7, 0x0000, 0xe3fb, 0xe3fd, 0x0000,
        0x0000, 0xbafb, 0x0000, 0xf9dc, 0x0000, 0x73c1, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x73ca, 0x0000, 0x0000, 0x0000, 0xe4a6, 0xc9ae, 0xf9dd,
        0xc8a6, 0xc5f9, 0x0000, 0xb6da, 0xe4a5, 0xe4a3, 0xf9de, 0xc8b5,
        0xe3fe, 0xc3de, 0xc5fb, 0x0000, 0xc5fa, 0x73cc, 0xbaf6, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe4b8, 0x0000, 0x0000,
        0xf9df, 0x0000, 0x0000, 0x0000, 0x73ce, 0xe4a8, 0x73cf, 0xe4aa,
        0x0000, 0x73d0, 0x0000, 0x0000, 0xe4ad, 0xf9e0, 0xe4ae, 0xf9e1,
        0xe4ab, 0xe4ac, 0xf9e2, 0x73d1, 0xe4a9, 0xe4a7, 0x0000, 0x0000,
        0x0000, 0x73cd, 0xe4a1, 0x0000, 0x0000, 0x0000, 0x0000, 0x73c9,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcacf, 0xb2d5,
        0x0000, 0x0000, 0x0000, 0xe4b5, 0x0000, 0xe4b2, 0x0000, 0xe4b7,
        0x73d4, 0x73d5, 0xe4b6, 0x0000, 0xc7f3, 0xcca7, 0x0000, 0xbbbb,
        0xe4b0, 0xe4b9, 0xe4b4, 0x73d6, 0xe4b3, 0xe4af, 0xf9e3, 0xe4b1,
        0x0000, 0xb4c9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc3bd, 0x0000, 0x0000, 0xc0fd, 0x0000, 0x73d8,
        0x0000, 0xc8a2, 0x0000, 0x0000, 0xe4be, 0x73d9, 0x0000, 0x0000,
        0xc8a4, 0x0000, 0x0000, 0x0000, 0x73da, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xc0e1, 0xe4bb, 0x0000, 0x0000, 0xc8cf, 0x73db, 0xe4bf, 0xcad3,
        0x0000, 0xc3db, 0x73dc, 0xe4ba, 0xe4bc, 0x0000, 0x0000, 0xe4bd,
        0x0000, 0x0000, 0x0000, 0x0000, 0x73df, 0x0000, 0x73e0, 0xf9e5,
        0x0000, 0xf9e6, 0x73e1, 0x0000, 0x0000, 0xe4c0, 0x0000, 0x0000,
        0xbcc4, 0x0000, 0x0000, 0x0000, 0xc6c6, 0xe4c5, 0xe4c4, 0x0000,
        0x0000, 0xe4c1, 0x73e2, 0x0000, 0x0000, 0xcfb6, 0x0000, 0x0000,
        0x73e3, 0x0000, 0x0000, 0xe4ca, 0x0000, 0x0000, 0xe4ce, 0xe4cb,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xe4c7, 0xf9e7, 0x0000, 0x73e4, 0x0000, 0x0000, 0x0000, 0xe4c8,
        0x0000, 0x0000, 0x0000, 0x73e5, 0x0000, 0xe4cd, 0x73e6, 0x73e7,
        0x0000, 0xe4c2, 0xd2d5, 0xe4c9, 0xe4c3, 0x0000, 0x0000, 0xe4cc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf9e9, 0xe4d2,
        0xf9ea, 0xb4ca, 0x0000, 0xe4cf, 0x0000, 0x0000, 0x73e8, 0xe4d0,
        0x0000, 0x0000, 0xe4d1, 0xe4d4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf9e8, 0x0000, 0xf9eb, 0x0000, 0x0000, 0xf9ec, 0xe4d3,
        0xc8f6, 0x0000, 0x0000, 0x0000, 0x0000, 0xe4d5, 0xcefc, 0xcaed,
    ],
    [
        0xe4da, 0x0000, 0x0000, 0xe4d7, 0x0000, 0x73e9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x73ea, 0x0000, 0xe4d6, 0xc0d2, 0x0000, 0xe4d9,
        0xe4db, 0x73eb, 0x0000, 0x0000, 0xe4d8, 0x0000, 0xe4df, 0x73ec,
        0xe4dc, 0xf9ef, 0x0000, 0x0000, 0x0000, 0x0000, 0x73ed, 0xe4dd,
        0xe4c6, 0x73ee, 0x0000, 0x0000, 0xe4de, 0xe4e0, 0x0000, 0x0000,
        0x0000, 0x73ef, 0x0000, 0x0000, 0xe4e1, 0xf9f0, 0x73f0, 0x73f1,
        0x73f2, 0x0000, 0x0000, 0xcac6, 0x0000, 0xe4e2, 0x0000, 0x0000,
        0x0000, 0xf9f1, 0x0000, 0x0000, 0x0000, 0x0000, 0xcce2, 0x0000,
    ],
    [
        0x0000, 0xb6ce, 0xb7a9, 0xe4e3, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcab4, 0x0000, 0xbfe8, 0x0000, 0xccb0, 0x0000, 0xf9f2,
        0xe4e4, 0x0000, 0xceb3, 0x0000, 0xf9f3, 0xc7f4, 0x0000, 0xc1c6,
        0xc7b4, 0x0000, 0x0000, 0xbdcd, 0x0000, 0x0000, 0x0000, 0xb0c0,
        0xf9f4, 0xe4e9, 0xe4e7, 0x0000, 0xe4e5, 0xb4a1, 0x73f6, 0xbed1,
        0xe4ea, 0x0000, 0x0000, 0xe4e8, 0x0000, 0xe4e6, 0xe4ee, 0x0000,
        0x0000, 0xe4ed, 0xe4ec, 0xe4eb, 0x0000, 0x0000, 0x73f8, 0x73f9,
        0x0000, 0xe4ef, 0x0000, 0x0000, 0xf9f5, 0xe4f0, 0xc0ba, 0x73fa,
    ],
    [
        0xe4f1, 0x0000, 0xe4f3, 0x0000, 0x73fc, 0xe4f2, 0x0000, 0x0000,
        0x73fe, 0x0000, 0xb8d2, 0x0000, 0x0000, 0x74a1, 0xc1b8, 0x0000,
        0x0000, 0x0000, 0xe4f5, 0x0000, 0x0000, 0xf9f6, 0xc5fc, 0x74a3,
        0xe4f4, 0xf9f7, 0x0000, 0x0000, 0xe4f6, 0xf9f8, 0xcab5, 0xc1ec,
        0xb9c7, 0x0000, 0xe4f7, 0x0000, 0x0000, 0x0000, 0x74a5, 0xcec8,
        0x0000, 0x0000, 0x0000, 0x74a6, 0x0000, 0x0000, 0x0000, 0xe4f9,
        0x0000, 0x0000, 0xe4fa, 0x0000, 0xe4fb, 0x74a8, 0xe4fc, 0x0000,
        0xbbe5, 0x0000, 0xe4fd, 0xb7cf, 0x0000, 0x0000, 0xb5ea, 0x0000,
    ],
    [
        0xb5aa, 0x0000, 0xe5a1, 0x74a9, 0xccf3, 0xb9c8, 0xe4fe, 0xf9f9,
        0xf9fa, 0x74aa, 0xe5a4, 0xcce6, 0x0000, 0xc7bc, 0x0000, 0x0000,
        0xc9b3, 0x0000, 0x74ac, 0xf9fb, 0xbde3, 0xe5a3, 0x0000, 0xbcd3,
        0xb9c9, 0xbbe6, 0xb5e9, 0xcab6, 0xe5a2, 0xf9fc, 0x74ad, 0x0000,
        0xc1c7, 0xcbc2, 0xbaf7, 0xf9fd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbbe7, 0xc4dd, 0x0000, 0xe5a7, 0xcedf,
        0xbad9, 0xf9fe, 0xe5a8, 0xbfc2, 0x0000, 0xe5aa, 0x0000, 0x0000,
        0x0000, 0xbed2, 0xbab0, 0x0000, 0x0000, 0x74b0, 0x74b1, 0xe5a9,
    ],
    [
        0x74b2, 0xfaa1, 0xbdaa, 0xb8be, 0xc1c8, 0xe5a5, 0xe5ab, 0x74b3,
        0xfaa2, 0x0000, 0x0000, 0xe5a6, 0xb7d0, 0x0000, 0xe5ae, 0xe5b2,
        0xb7eb, 0x0000, 0x0000, 0xfaa3, 0x0000, 0x0000, 0xe5ad, 0x0000,
        0x0000, 0x74b7, 0x74b8, 0xe5b6, 0xfaa4, 0x0000, 0xb9ca, 0x0000,
        0x0000, 0xcded, 0xb0bc, 0xe5b3, 0x0000, 0x0000, 0xb5eb, 0x0000,
        0xe5b0, 0x0000, 0x74b9, 0x0000, 0x0000, 0x0000, 0xe5b1, 0x0000,
        0x74ba, 0xc5fd, 0xe5af, 0xe5ac, 0x0000, 0xb3a8, 0xc0e4, 0x0000,
        0x0000, 0xb8a8, 0xfaa5, 0x0000, 0x0000, 0xe5b8, 0x0000, 0x74bc,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xfaa6, 0x0000, 0x0000, 0x74be, 0x0000,
        0x74bf, 0xe5b5, 0x0000, 0xfaa7, 0x74c0, 0x0000, 0x0000, 0xe5b7,
        0x0000, 0x0000, 0x0000, 0xe5b4, 0x0000, 0x0000, 0x0000, 0x74c1,
        0x0000, 0xb7d1, 0xc2b3, 0xe5b9, 0xc1ee, 0x74c3, 0x0000, 0xe5c6,
        0xfaa8, 0x0000, 0xe5c2, 0xe5bc, 0x0000, 0x0000, 0xfaa9, 0x74c4,
        0x0000, 0x0000, 0x74c5, 0xe5c0, 0xbcfa, 0xb0dd, 0xe5bb, 0xe5c3,
        0xe5c7, 0xb9cb, 0xccd6, 0x0000, 0xc4d6, 0xe5bd, 0x74c6, 0x74c7,
        0xe5c5, 0x0000, 0xe5ba, 0xc3be, 0x0000, 0xe5bf, 0xb0bd, 0xccca,
    ],
    [
        0x74c8, 0x0000, 0xfaaa, 0x0000, 0x0000, 0x0000, 0x0000, 0xe5be,
        0x0000, 0x0000, 0xb6db, 0xc8ec, 0xfaab, 0x0000, 0x0000, 0xc1ed,
        0x0000, 0xced0, 0xbdef, 0x0000, 0x0000, 0xe5ee, 0xfaac, 0x74c9,
        0xe5c8, 0x74ca, 0xc0fe, 0x0000, 0xe5c4, 0xe5c9, 0xe5cb, 0x0000,
        0xc4f9, 0xe5ce, 0x0000, 0xfaad, 0xe5ca, 0x0000, 0x74cb, 0x0000,
        0xcad4, 0xb4cb, 0x0000, 0x0000, 0xcccb, 0x0000, 0x0000, 0xb0de,
        0x0000, 0x74cc, 0xe5cd, 0x0000, 0xcefd, 0x0000, 0x0000, 0x0000,
        0x0000, 0x74cd, 0x0000, 0xe5cc, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xb1ef, 0x0000, 0x0000, 0xc6ec, 0xe5cf, 0x0000, 0x0000,
        0xfab0, 0xe5d6, 0xe5d0, 0xe5d7, 0x0000, 0x0000, 0x0000, 0x0000,
        0x74d1, 0xfab1, 0xe5d3, 0x0000, 0x0000, 0xfab2, 0x0000, 0x74d2,
        0x0000, 0x0000, 0x0000, 0xc7fb, 0x0000, 0x74d3, 0xbcca, 0xe5d5,
        0x74d4, 0xe5d2, 0xe5d8, 0xe5d1, 0x0000, 0x0000, 0xbdc4, 0x74d5,
        0xfaaf, 0x0000, 0x0000, 0xcba5, 0x74d6, 0x0000, 0xbdcc, 0x0000,
        0x0000, 0xe5d4, 0xe5e0, 0x0000, 0x0000, 0xe5dc, 0x0000, 0xe5df,
        0x0000, 0xe5dd, 0xe5e1, 0xe5db, 0x0000, 0xe5c1, 0xc0d3, 0x0000,
    ],
    [
        0x0000, 0xc8cb, 0x0000, 0xe5de, 0x0000, 0x74d7, 0xe5d9, 0xfab4,
        0x0000, 0x0000, 0xc1a1, 0xb7d2, 0x0000, 0xbdab, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfab5, 0x0000, 0xbfa5, 0xc1b6, 0xe5e4, 0x0000,
        0x0000, 0xe5e6, 0xe5e7, 0x0000, 0x0000, 0xe5e3, 0xe5e5, 0x0000,
        0x0000, 0xfab6, 0x0000, 0x0000, 0x0000, 0x0000, 0xe5da, 0xe5e2,
        0x0000, 0xe5ea, 0xe5e9, 0xfefe, 0x0000, 0xcbfa, 0x0000, 0x0000,
        0xb7ab, 0x0000, 0x0000, 0x74d8, 0x0000, 0x74d9, 0x0000, 0x0000,
        0x0000, 0xe5e8, 0x0000, 0xe5ec, 0xe5eb, 0xe5ef, 0x74da, 0xe5f1,
    ],
    [
        0x0000, 0x0000, 0xbbbc, 0xe5ed, 0x0000, 0x0000, 0x74db, 0x74dc,
        0xe5f2, 0xe5f3, 0xfab7, 0x0000, 0xe5f4, 0xfab8, 0xe5fa, 0xc5bb,
        0xe5f6, 0x74de, 0xe5f5, 0xe5f7, 0xe5f8, 0x0000, 0xe5f9, 0x0000,
        0x74df, 0x0000, 0x74e0, 0xe5fb, 0xe5fc, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb4cc, 0x0000,
        0xe5fd, 0x0000, 0xe5fe, 0x74e3, 0x74e2, 0x0000, 0x74e4, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x74e5, 0x74e6, 0xe6a1, 0x0000, 0xfab9,
        0x0000, 0x0000, 0x0000, 0x0000, 0xe6a2, 0xe6a3, 0xe6a4, 0x74e7,
        0xe6a5, 0xe6a6, 0x74ea, 0x0000, 0xe6a8, 0xe6a7, 0x0000, 0x0000,
        0xe6a9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe6aa,
        0xe6ab, 0x74ec, 0x0000, 0x74ed, 0x74ee, 0x0000, 0x0000, 0xe6ae,
        0xe6ac, 0xe6ad, 0xbae1, 0xb7d3, 0x0000, 0x74ef, 0xc3d6, 0x0000,
        0xc8b3, 0x0000, 0xbdf0, 0x0000, 0x0000, 0xc7cd, 0x0000, 0xc8ed,
        0xe6af, 0xd8ed, 0x0000, 0x0000, 0x0000, 0x74f0, 0x74f1, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xe6b0, 0xe6b2, 0x0000, 0xcde5, 0xe6b1, 0xe6b4,
        0xe6b3, 0x0000, 0xcdd3, 0x0000, 0xe6b5, 0x0000, 0xc8fe, 0x0000,
        0x74f3, 0xfabb, 0x0000, 0x0000, 0xe6b6, 0x0000, 0x74f6, 0xfabc,
        0x0000, 0x0000, 0xe6b9, 0x0000, 0x74f7, 0xe6b8, 0xe6b7, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe6ba, 0xb7b2, 0x0000, 0x0000, 0x0000,
        0xc1a2, 0xb5c1, 0x0000, 0x0000, 0x0000, 0x74f8, 0xe6be, 0xe6bb,
        0x0000, 0x0000, 0xe6bc, 0x0000, 0x0000, 0x0000, 0xe6bf, 0x0000,
        0xe6c0, 0xe6bd, 0x0000, 0x0000, 0x0000, 0xb1a9, 0x0000, 0xfabd,
    ],
    [
        0x0000, 0xb2a7, 0x0000, 0x74fa, 0x0000, 0xe6c2, 0xe6c3, 0x0000,
        0x0000, 0x0000, 0xe6c4, 0x0000, 0xcde2, 0x0000, 0xfabe, 0x74fb,
        0x0000, 0x0000, 0xbdac, 0x0000, 0xe6c6, 0xe6c5, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfabf, 0x0000, 0x0000, 0x0000, 0xfac0,
        0xbfe9, 0xe6c7, 0x0000, 0x74fc, 0x0000, 0x74fd, 0xe6c8, 0x0000,
        0x0000, 0xe6c9, 0x0000, 0xb4e5, 0xfac1, 0x0000, 0xfac2, 0x74fe,
        0xb4cd, 0x0000, 0x75a1, 0xe6ca, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe6cb, 0xfac3, 0xcbdd, 0xcde3, 0x0000, 0x0000, 0x0000,
    ],
];

static THREE_E8_ROW: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 0,
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63,
];

static THREE_E8: [[u16; 64]; 63] = [
    [
        0xcdd4, 0xcfb7, 0x75a2, 0xb9cd, 0xe6ce, 0xbcd4, 0xe6cd, 0x0000,
        0x75a4, 0x0000, 0x75a3, 0xe6cf, 0xbca9, 0x0000, 0x75a5, 0x0000,
        0xc2d1, 0x75a6, 0xe6d0, 0x0000, 0xfac5, 0xb9cc, 0x75a7, 0xccd7,
        0xe6d1, 0xe6d2, 0x0000, 0x0000, 0xe6d3, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe6d4, 0x0000, 0x0000, 0x75a8, 0x0000, 0xfac6, 0x0000,
        0xe6d5, 0x0000, 0x0000, 0x0000, 0x75a9, 0x0000, 0x0000, 0x0000,
        0x75aa, 0x0000, 0x0000, 0xbcaa, 0x0000, 0xfac7, 0xcced, 0xfac8,
        0x0000, 0x0000, 0x0000, 0xe6d7, 0xfac9, 0xc3bf, 0x0000, 0xe6d6,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x75ab, 0x0000, 0x0000, 0xe6d9, 0x0000,
        0x0000, 0x0000, 0xe6d8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe6da, 0x0000, 0x0000, 0x0000, 0xc0bb, 0x0000,
        0xe6db, 0x0000, 0xe6dc, 0x0000, 0x0000, 0x0000, 0xcab9, 0xe6dd,
        0x0000, 0xc1ef, 0xe6de, 0x0000, 0x0000, 0x0000, 0x75ac, 0x0000,
        0xe6df, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcefe,
        0xe6e2, 0x75ad, 0xe6e1, 0xe6e0, 0xc4b0, 0x75ae, 0xe6e3, 0xbfa6,
        0x0000, 0xe6e4, 0x0000, 0x75af, 0x0000, 0xe6e5, 0xcfb8, 0xe6e6,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xe6e7, 0xe6e9, 0xe6e8, 0xc8a5,
        0x0000, 0xc6f9, 0x0000, 0xcfbe, 0xc8a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe6eb, 0x0000, 0x0000, 0xbed3, 0x0000,
        0xc9aa, 0x75b0, 0xe6ec, 0xe6ea, 0x75b1, 0xb4ce, 0x0000, 0x0000,
        0x0000, 0xb8d4, 0xbbe8, 0x0000, 0x75b2, 0xc8ee, 0x0000, 0x75b3,
        0x0000, 0xb8aa, 0xcbc3, 0x0000, 0xe6ef, 0xe6ed, 0x0000, 0xb9ce,
        0x0000, 0xb9cf, 0xb0e9, 0x0000, 0xbae8, 0x0000, 0x0000, 0x0000,
        0x75b4, 0x0000, 0xc7d9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xb0df, 0xe6f4, 0x75b6, 0xc3c0, 0x0000,
        0x0000, 0x0000, 0xfaca, 0x0000, 0xc7d8, 0x0000, 0xc2db, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75b7, 0xe6f6, 0xfacb,
        0x75b8, 0xe6f2, 0xe6f5, 0xe6f0, 0x0000, 0xe6f3, 0xcba6, 0x0000,
        0xfacc, 0xb8d5, 0x0000, 0x0000, 0xb0fd, 0xe6f1, 0x75b9, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe6f8,
        0x0000, 0xe6f9, 0x0000, 0xfacd, 0xc6b9, 0x75bc, 0x0000, 0x0000,
        0xb6bb, 0x0000, 0x0000, 0x75bd, 0xe7a6, 0xc7bd, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xbbe9, 0x0000, 0x0000, 0xb6bc, 0xc0c8, 0xcfc6,
        0xccae, 0xe6f7, 0xc0d4, 0x0000, 0x0000, 0x75bb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75c0, 0x0000,
        0xface, 0x0000, 0xb5d3, 0xe6fa, 0x0000, 0x0000, 0x75c1, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe6fc, 0x75c3, 0x0000, 0x0000, 0x75c4,
        0x0000, 0xe6fb, 0x0000, 0x0000, 0x75c5, 0x0000, 0x0000, 0xe6fd,
        0x0000, 0xc3a6, 0x0000, 0xc7be, 0x0000, 0x75bf, 0x0000, 0x0000,
        0x0000, 0xc4b1, 0x0000, 0x0000, 0x0000, 0x75c7, 0xe7a3, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe7a2, 0x0000,
        0x0000, 0x0000, 0xfacf, 0xe6fe, 0x0000, 0x0000, 0xbfd5, 0x0000,
        0xc9e5, 0xe7a5, 0x0000, 0xe7a4, 0xb9d0, 0xcfd3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe7b5,
        0xfad0, 0x0000, 0x0000, 0x0000, 0x0000, 0xe7a9, 0xe7aa, 0xfad1,
        0xfad2, 0x75c9, 0x0000, 0xbcf0, 0x0000, 0xfad3, 0xe7a8, 0x0000,
        0xb9f8, 0xe7a7, 0x0000, 0x0000, 0xe7ab, 0x0000, 0x0000, 0x0000,
        0xc4b2, 0xcaa2, 0xc1a3, 0x0000, 0x0000, 0x0000, 0x0000, 0xc2dc,
    ],
    [
        0xe7af, 0x75cb, 0xe7b0, 0xe7ac, 0x75cd, 0x75ce, 0x0000, 0x0000,
        0xe7ad, 0x0000, 0xe7ae, 0x0000, 0x0000, 0x0000, 0x0000, 0xb9d1,
        0x0000, 0x0000, 0x0000, 0xe7b6, 0x0000, 0xe7b2, 0x0000, 0x0000,
        0x75d0, 0x0000, 0xc9e6, 0x0000, 0xcbec, 0xc9a8, 0x0000, 0x0000,
        0xe7b1, 0x0000, 0x0000, 0xe7b4, 0xe7b3, 0x0000, 0x0000, 0x0000,
        0xcbc4, 0xe7b7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe7b8, 0x0000, 0x75d1, 0xc1b7, 0x0000, 0xe7b9, 0x0000, 0x0000,
        0xe7bb, 0x0000, 0xe7bf, 0xfad4, 0x0000, 0xe7bc, 0xe7ba, 0xc7bf,
    ],
    [
        0xe7bd, 0x75d2, 0xe7be, 0x75d3, 0x0000, 0x0000, 0xb2b2, 0x0000,
        0xe7c5, 0xe7c0, 0xfad5, 0x0000, 0x0000, 0xe7c1, 0x0000, 0xfad6,
        0x0000, 0xe7c2, 0x0000, 0xc2a1, 0x0000, 0x0000, 0x75d4, 0xfad7,
        0xe7c4, 0xe7c3, 0xe7c6, 0x75d5, 0x0000, 0x0000, 0x0000, 0xe7c7,
        0xe7c8, 0x0000, 0x0000, 0xbfc3, 0x75d7, 0xb2e9, 0x0000, 0xe7c9,
        0xced7, 0x0000, 0xbcab, 0x0000, 0x75d9, 0xbdad, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbbea, 0xc3d7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xe7ca, 0xe7cb, 0xb1b1, 0x75db, 0xe7cc, 0x75dc,
    ],
    [
        0x0000, 0xe7cd, 0xe7ce, 0x0000, 0x75de, 0xe7cf, 0x0000, 0xe7d0,
        0xb6bd, 0xdaaa, 0xe7d1, 0x0000, 0xc0e5, 0xe7d2, 0xbccb, 0x0000,
        0xe7d3, 0x0000, 0xd0b0, 0x0000, 0x0000, 0x0000, 0xe7d4, 0xcade,
        0xb4dc, 0x75e0, 0x0000, 0xc1a4, 0xbdd8, 0x0000, 0xc9f1, 0xbdae,
        0x0000, 0x75e1, 0x75e2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xe7d5, 0xb9d2, 0xe7d6, 0xc8cc, 0x0000, 0xe7e4, 0x0000,
        0x0000, 0x0000, 0x75e4, 0xe7d8, 0x75e5, 0xc2c9, 0xc7f5, 0xb8bf,
        0xe7d7, 0xc1a5, 0x0000, 0x0000, 0x75e6, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xe7d9, 0x0000, 0x0000, 0x0000, 0x0000, 0x75e9, 0x75e7, 0xc4fa,
        0x0000, 0x75e8, 0x0000, 0x75eb, 0x0000, 0x0000, 0x0000, 0x75ed,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x75ef,
        0xe7db, 0xe7da, 0xe7dd, 0x0000, 0x75f1, 0xe7dc, 0x0000, 0xe7de,
        0xfadb, 0x0000, 0xe7e0, 0x75f2, 0xe7df, 0x0000, 0xb4cf, 0x0000,
        0xe7e1, 0x0000, 0xe7e2, 0xe7e3, 0x0000, 0x0000, 0xbab1, 0xcec9,
        0x0000, 0xe7e5, 0xbfa7, 0x0000, 0xfadc, 0x0000, 0xb1f0, 0xe7e6,
        0xe7e7, 0x75f6, 0x0000, 0x0000, 0x0000, 0x75f8, 0xe7e8, 0x75f9,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x75fa, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x75fb, 0xb0f2, 0x0000, 0xe7e9, 0xfade, 0x0000,
        0x0000, 0x0000, 0xe7ea, 0x75fc, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xc9e7, 0x0000, 0x0000, 0x0000, 0xbcc7, 0x0000, 0xe7ec,
        0x0000, 0xfadf, 0x0000, 0xfae0, 0xfae1, 0xb3a9, 0xb0b2, 0x75fd,
        0x75fe, 0xfae2, 0x0000, 0xe7eb, 0xe7ee, 0xc7ce, 0xfae3, 0xbfc4,
        0x0000, 0xb2d6, 0x76a1, 0xcba7, 0x76a2, 0x0000, 0x0000, 0xfae4,
        0xb7dd, 0xb6dc, 0x76a3, 0xe7ed, 0x76a4, 0xb2ea, 0xfae5, 0xfae6,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb4a3, 0xfae7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb1f1, 0xe7f2, 0xceea, 0xc2dd, 0xfae8, 0x0000, 0xc9c4,
        0x0000, 0xe7fe, 0x0000, 0xb2d7, 0xe7fc, 0x0000, 0xe7fa, 0xe7f1,
        0x0000, 0xe7ef, 0x76a5, 0xe7f0, 0x0000, 0xbce3, 0xb6ec, 0xc3f7,
        0x76a6, 0x0000, 0x0000, 0xc6d1, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb1d1, 0x0000, 0xe7f4, 0xe7f3, 0x0000, 0x0000, 0x76a7,
        0x0000, 0xe7f9, 0xe7f5, 0xe7f8, 0x0000, 0xfae9, 0xfaea, 0x0000,
    ],
    [
        0xfaeb, 0xfaec, 0xccd0, 0xe7f7, 0xb2d8, 0xb3fd, 0xe7fb, 0x76a8,
        0x76a9, 0xe7fd, 0x0000, 0x0000, 0x76aa, 0x0000, 0xb7d4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8a3, 0xe8ac,
        0xe8ad, 0x0000, 0x0000, 0x76ac, 0xb0ab, 0x76ad, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfaee, 0xe8b4, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb0f1, 0x0000, 0x0000, 0xe8ab, 0x0000, 0xfaef, 0x0000, 0xe8aa,
        0x76ae, 0xe8a5, 0xe8a4, 0x0000, 0xe8a2, 0xe8a1, 0xc3e3, 0x0000,
        0xc2fb, 0xe8a7, 0xfaf0, 0x0000, 0x76af, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xe8a6, 0x0000, 0x0000, 0xfaf1, 0x76b0, 0xe8a9, 0x0000, 0xfaf2,
        0x0000, 0xc1f0, 0xb7d5, 0x0000, 0x0000, 0x0000, 0x0000, 0xb1c1,
        0xe8a8, 0xfaf3, 0xb9d3, 0x0000, 0x76ab, 0xfaf4, 0x0000, 0x76b1,
        0xc1f1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfaed, 0x2eca, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe8ba, 0x0000, 0xe8bb, 0x0000, 0xb2d9,
        0x0000, 0x0000, 0x0000, 0xb2ae, 0xe8b8, 0xfaf5, 0x0000, 0x76b3,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8ae, 0xfaf6, 0xe8b6,
        0x0000, 0xe8bd, 0xe8b7, 0x0000, 0x0000, 0x76b6, 0xe8b5, 0x0000,
        0x0000, 0x0000, 0xfaf7, 0xe7f6, 0x76b7, 0x76b8, 0xe8b3, 0x0000,
        0xfaf8, 0x0000, 0xe8af, 0x76b9, 0x0000, 0x76ba, 0xb4d0, 0xe8b1,
        0xe8bc, 0x0000, 0xe8b2, 0x0000, 0x0000, 0x0000, 0x0000, 0xfaf9,
        0xe8be, 0xfafa, 0xe8b0, 0xc7fc, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcde9, 0x0000, 0x0000, 0x0000, 0xe8b9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8cf, 0x0000, 0xfafb,
    ],
    [
        0xfafc, 0xe8c7, 0x0000, 0x0000, 0x0000, 0xbffb, 0x0000, 0xfafd,
        0x0000, 0x76bb, 0xb5c6, 0x0000, 0xb6dd, 0x0000, 0xe8c2, 0xfafe,
        0x76bc, 0xfba1, 0x0000, 0xb2db, 0x76bd, 0x0000, 0xbed4, 0x0000,
        0xe8c5, 0x0000, 0x0000, 0x0000, 0xbada, 0x76be, 0x0000, 0xc5d1,
        0xe8ca, 0xfba2, 0x0000, 0x0000, 0x0000, 0x76bf, 0x0000, 0x0000,
        0x0000, 0xcaee, 0xfba3, 0xe8c1, 0x0000, 0x0000, 0x0000, 0xb2da,
        0xb8d6, 0xc9a9, 0xe8cb, 0x0000, 0xe8bf, 0x0000, 0x0000, 0xe8c8,
        0x0000, 0x76c0, 0x0000, 0xe8d2, 0x0000, 0xe8c3, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xfba4, 0x0000, 0xe8c4, 0xc6ba, 0x0000, 0xfba5, 0xe8c9,
        0x0000, 0x0000, 0xfba6, 0xe8c6, 0xcba8, 0xe8cc, 0xb0e0, 0x76c1,
        0x0000, 0x76c2, 0x0000, 0xe8c0, 0x0000, 0x76c3, 0x0000, 0x76c5,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe8ce, 0x0000, 0xe8cd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xc7eb, 0xe8d4, 0x0000, 0xe8df, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb3fe, 0x0000, 0x0000, 0x0000, 0xe8e2, 0x0000, 0x0000,
        0xe8d0, 0x76c6, 0x0000, 0x0000, 0xe8d5, 0xcdee, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8de, 0x0000,
        0xfba8, 0xcdd5, 0x76c7, 0x0000, 0x0000, 0x0000, 0xceaa, 0x76c8,
        0x0000, 0x76c9, 0x76ca, 0x0000, 0x0000, 0x0000, 0x0000, 0xc3f8,
        0x0000, 0x76cb, 0x76cc, 0xb3eb, 0x76cd, 0x0000, 0x0000, 0xfba9,
        0x0000, 0xc9f2, 0xe8e4, 0xc6a1, 0x0000, 0x76cf, 0xb0b1, 0x0000,
        0x0000, 0xe8dd, 0x0000, 0xe8d9, 0xc1f2, 0xe8d3, 0xe8db, 0xe8e0,
        0xfbaa, 0xc7ac, 0x0000, 0xfbab, 0x0000, 0xb0aa, 0x76d0, 0xe8d8,
        0x76d1, 0xe8e1, 0xc9f8, 0x0000, 0x76d2, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x76d3, 0xe8dc, 0x0000, 0xe8d7, 0xfbac, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbed5, 0x0000, 0x0000, 0x0000, 0x0000,
        0xbdaf, 0x0000, 0x0000, 0x0000, 0xbcac, 0x0000, 0x0000, 0x76d6,
        0x0000, 0xccd8, 0x0000, 0x0000, 0xc9c7, 0x0000, 0xfbad, 0xe8e7,
        0x0000, 0xe8f0, 0x0000, 0x0000, 0x0000, 0x0000, 0x76d7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8da, 0x0000, 0xfbae,
        0x0000, 0x0000, 0xb3f7, 0x0000, 0xfbaf, 0x0000, 0x0000, 0x0000,
        0xbef8, 0xe8e5, 0xfbb0, 0xe8ea, 0xc1f3, 0x0000, 0x76d8, 0xe8e6,
    ],
    [
        0xfbb1, 0xe8ed, 0xfbb2, 0x0000, 0xc3df, 0x0000, 0xe8ee, 0x0000,
        0x0000, 0xcdd6, 0xe8e3, 0xb3b8, 0x0000, 0xe8e9, 0x76da, 0x76db,
        0xe8ec, 0xccac, 0x0000, 0x76dc, 0x0000, 0x0000, 0xe8ef, 0x0000,
        0x0000, 0xe8e8, 0xe8eb, 0x0000, 0x76d5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x76de,
        0x0000, 0x0000, 0x76df, 0x0000, 0xcba9, 0x0000, 0xcfa1, 0x76e0,
        0x76e1, 0x76e2, 0x0000, 0x0000, 0xe8f3, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x76e3, 0x0000, 0xe8fa, 0x76e4, 0x0000, 0xe8f2,
    ],
    [
        0xbcc3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe8d1, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x76e5, 0x0000, 0x0000, 0x0000,
        0x0000, 0xcace, 0x0000, 0xcca2, 0xe8f9, 0xe8f8, 0x0000, 0xe8f4,
        0xe8f5, 0x0000, 0xb1b6, 0x76e6, 0x0000, 0x0000, 0xfbb5, 0xe8f7,
        0x0000, 0xe8f1, 0x0000, 0xfbb6, 0x76e7, 0x76e8, 0xc4d5, 0x0000,
        0x0000, 0x0000, 0x0000, 0x76e9, 0xe8f6, 0xb0fe, 0x0000, 0xfbb7,
        0x0000, 0x0000, 0xfbb4, 0x0000, 0x76ea, 0xc2a2, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xcac3, 0x76ef, 0x0000,
    ],
    [
        0xe8fb, 0xe9a1, 0x0000, 0xc8d9, 0x0000, 0x0000, 0x0000, 0x0000,
        0xe8fe, 0xbed6, 0xbcc9, 0xe9a3, 0x0000, 0x0000, 0xb6be, 0x76eb,
        0x0000, 0x76f0, 0x0000, 0x76f1, 0x0000, 0xe9a4, 0x0000, 0xc9f9,
        0xe8fd, 0xfbb8, 0xe8d6, 0x0000, 0x0000, 0x0000, 0x76f2, 0x0000,
        0x0000, 0x76f3, 0x76f4, 0xe8fc, 0xfbb9, 0x0000, 0x0000, 0x0000,
        0xcfcf, 0xc6a2, 0xc9f3, 0x0000, 0x0000, 0xe9ab, 0x0000, 0x76ec,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe9b1,
        0x0000, 0x0000, 0xfbbc, 0x76f6, 0x0000, 0x76f7, 0xe9b2, 0x76f8,
    ],
    [
        0xe9a5, 0x76f9, 0x0000, 0x0000, 0xc7f6, 0x0000, 0x76fa, 0xe9af,
        0xe9a7, 0x0000, 0xe9a9, 0x0000, 0xfbbd, 0x0000, 0x0000, 0xfbbe,
        0xe9b3, 0xe9a8, 0x0000, 0x76fb, 0xe9ac, 0x0000, 0x0000, 0xb1f2,
        0x0000, 0xc6e5, 0x0000, 0xe9ad, 0xe9b0, 0x76fc, 0x0000, 0x76fd,
        0x0000, 0x0000, 0xfbbf, 0x0000, 0xe9a6, 0x0000, 0xc1a6, 0x0000,
        0xe9aa, 0xbba7, 0xbfc5, 0xb7b0, 0xccf4, 0xfbbb, 0xccf9, 0xbdf2,
        0xfbc0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77a3,
        0x0000, 0xe9b7, 0xe9b5, 0x0000, 0x77a4, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xcfce, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77a5,
        0x0000, 0xe9b4, 0x77a6, 0xfbc1, 0x0000, 0xcdf5, 0xfbc2, 0xe9b6,
        0xe9b8, 0x0000, 0x0000, 0x0000, 0x0000, 0xe9b9, 0x0000, 0x0000,
        0x77a7, 0x77a8, 0x0000, 0x0000, 0xe9bc, 0xe9ba, 0x0000, 0x77a9,
        0x0000, 0x77aa, 0x0000, 0x0000, 0xc6a3, 0xe9bb, 0x77ab, 0x0000,
        0x0000, 0xc8cd, 0xe9ae, 0x0000, 0x0000, 0xfbc3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77ac, 0xbdf3,
        0x0000, 0xe9bd, 0xe9c2, 0xc1f4, 0x0000, 0x0000, 0xe9c1, 0xfbc5,
    ],
    [
        0x77ad, 0x0000, 0xe9a2, 0x0000, 0xfbc6, 0xfbc7, 0xe9c3, 0xc1c9,
        0x0000, 0x0000, 0xe9be, 0xe9c0, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfbc8, 0x77ae, 0xfbc4, 0xe9bf, 0x0000, 0x0000, 0xddb1, 0xdda2,
        0xfbca, 0x0000, 0xe9c5, 0x0000, 0x0000, 0x0000, 0x77af, 0x0000,
        0x0000, 0x77b0, 0xe9c4, 0x0000, 0x77b1, 0x0000, 0x0000, 0x77b2,
        0x0000, 0xfbcb, 0x0000, 0x0000, 0x0000, 0xcdf6, 0x0000, 0xe2bc,
        0xe9c6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfbcc, 0x77b4, 0x0000, 0x0000, 0x77b5, 0x0000, 0x0000, 0xe9c7,
    ],
    [
        0x77b7, 0xafe8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe9c8, 0xb8d7, 0x0000,
        0xb5d4, 0x0000, 0x0000, 0x77b9, 0xe9ca, 0xd1dd, 0x77ba, 0xfbcd,
        0x0000, 0x0000, 0xb5f5, 0xfbce, 0xceba, 0x0000, 0xb6f3, 0xe9cb,
        0x0000, 0x0000, 0xfbd0, 0x0000, 0x0000, 0x0000, 0x0000, 0xe9cc,
        0x0000, 0x0000, 0x0000, 0xc3ee, 0xfbd2, 0x0000, 0x0000, 0x77bb,
        0x0000, 0xe9cd, 0x0000, 0x0000, 0x0000, 0xfbd3, 0x0000, 0x77bc,
        0x0000, 0xc6fa, 0x77bd, 0xb0ba, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77be,
        0x0000, 0x77bf, 0xb2e3, 0xe9d2, 0xe9d3, 0x77c0, 0x0000, 0x0000,
        0x0000, 0x77c1, 0x0000, 0xe9ce, 0x0000, 0xbbbd, 0x0000, 0x0000,
        0xfbd4, 0x0000, 0x0000, 0x0000, 0x77c2, 0x77c3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe9cf, 0xc7c2, 0x0000, 0x0000, 0x0000,
        0x77c4, 0xe9d0, 0xe9d1, 0xe9db, 0x0000, 0x0000, 0x0000, 0xe9d5,
        0xe9d8, 0x77c6, 0x0000, 0x77c7, 0x0000, 0x0000, 0xe9d4, 0x0000,
        0xfbd5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x77c8, 0x0000, 0x77c9, 0xe9d6, 0x0000, 0xe9d7, 0xbcd8,
        0x0000, 0xe9d9, 0x0000, 0xc3c1, 0x0000, 0xb7d6, 0xb3c2, 0x0000,
        0x0000, 0x77ca, 0x0000, 0x0000, 0xe9dc, 0x77cb, 0x0000, 0x77cc,
        0x0000, 0xb3bf, 0x0000, 0xe9e1, 0x0000, 0x0000, 0xe9dd, 0xe9e0,
        0x0000, 0x0000, 0x0000, 0x77cd, 0xc8ba, 0x0000, 0x77ce, 0x0000,
        0x0000, 0xe9de, 0x0000, 0x0000, 0xe9df, 0xc9c8, 0xc8da, 0xe9e2,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc2fd, 0xe9ec, 0xfbd6, 0xe9e8, 0xfbd7, 0xfbd8, 0xb2eb, 0x0000,
    ],
    [
        0xe9e6, 0x0000, 0xcbaa, 0xe9e7, 0x0000, 0x77d0, 0xe9e4, 0x77d1,
        0xe9e5, 0xe9ea, 0xe9ed, 0xfbd9, 0x0000, 0xe9eb, 0x77d2, 0x0000,
        0x77d3, 0xe9e9, 0xe9e3, 0x77d4, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc3d8, 0x77d5, 0xe9f4, 0x0000, 0xccaa, 0x0000, 0x0000, 0x77d6,
        0x0000, 0x77d7, 0x0000, 0x77d8, 0x0000, 0xe9f2, 0x0000, 0x0000,
        0x0000, 0xe9f3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x77d9, 0x0000, 0x0000, 0xe9ee, 0x0000, 0x0000, 0xe9f0,
        0x0000, 0x0000, 0x77da, 0xe9f1, 0x0000, 0x0000, 0x77db, 0xe9ef,
    ],
    [
        0x77dc, 0x0000, 0x0000, 0x77dd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xc0e6, 0x0000, 0xcfb9, 0xe9f8, 0x0000, 0xe9f9, 0x0000,
        0x0000, 0x77de, 0x0000, 0xeaa1, 0x0000, 0xbfaa, 0x0000, 0xe9fb,
        0x77df, 0xe9fe, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xe9f6,
        0xe9f5, 0x0000, 0x0000, 0xeaa2, 0x77e0, 0x77e1, 0xb2dc, 0x0000,
        0xe9fc, 0x0000, 0xeaa3, 0x0000, 0x0000, 0x0000, 0xe9fd, 0x0000,
        0x0000, 0xfbda, 0x77e2, 0x0000, 0xe9fa, 0x0000, 0xc4b3, 0x0000,
        0xe9f7, 0x0000, 0x0000, 0x0000, 0x77e3, 0x0000, 0x0000, 0xc7e8,
    ],
    [
        0x0000, 0x0000, 0xeaa7, 0x0000, 0x0000, 0x0000, 0x0000, 0xfbdb,
        0xfbdc, 0x77e7, 0x0000, 0x77e8, 0x0000, 0xcdbb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x77e9, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeaa6,
        0x77ea, 0x0000, 0xeaa5, 0x0000, 0x0000, 0x0000, 0x0000, 0x77e6,
        0x0000, 0x0000, 0x0000, 0xeaae, 0xfbdd, 0xfbde, 0x0000, 0xeaa8,
        0x0000, 0x0000, 0x0000, 0xeab0, 0x0000, 0xfbdf, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcde6, 0xeab3, 0x0000, 0xeaaa, 0x77ed, 0x0000,
    ],
    [
        0xeaab, 0x77ef, 0x0000, 0x0000, 0xeaaf, 0x0000, 0xeab2, 0xeab1,
        0x0000, 0x0000, 0x0000, 0xeaa9, 0x0000, 0x0000, 0x77f0, 0x0000,
        0xeaac, 0x0000, 0xeabd, 0x0000, 0x0000, 0x0000, 0xfbe1, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x77f2,
        0xeab6, 0x0000, 0x0000, 0x77f4, 0x0000, 0x77f5, 0x77f6, 0x0000,
        0x0000, 0x0000, 0x77f7, 0x77f8, 0xfbe2, 0x77f9, 0x0000, 0xeab4,
        0x0000, 0x0000, 0xeab5, 0x0000, 0x0000, 0x77f1, 0xeaba, 0xeabb,
        0x0000, 0xb3aa, 0x0000, 0xb5c2, 0x0000, 0x0000, 0xeab9, 0x0000,
    ],
    [
        0x0000, 0x77fa, 0x0000, 0x77fb, 0x0000, 0xeaa4, 0xfbe3, 0x0000,
        0x0000, 0x0000, 0xfbe4, 0x77fc, 0x0000, 0xeab8, 0xeabc, 0xeab7,
        0xfbe5, 0xeabe, 0x0000, 0x77fd, 0xfbe6, 0xeac0, 0xeabf, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfbe7,
        0x0000, 0xeac2, 0xeac1, 0xe9da, 0x0000, 0x0000, 0x0000, 0xeac6,
        0x77fe, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x78a1, 0x0000,
        0x0000, 0xeac3, 0x78a2, 0x0000, 0x0000, 0x0000, 0xeac4, 0x0000,
        0x0000, 0xeac5, 0x0000, 0xeac7, 0x78a3, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xb7ec, 0x0000, 0xeac9, 0x0000, 0xeac8, 0x0000, 0xbdb0, 0x0000,
        0x0000, 0x0000, 0x78a5, 0x0000, 0xb9d4, 0xdea7, 0x0000, 0x0000,
        0x0000, 0x0000, 0xeaca, 0xbdd1, 0x0000, 0x0000, 0x0000, 0xb3b9,
        0x78a6, 0xeacb, 0x0000, 0xb1d2, 0x0000, 0xbed7, 0xeacc, 0x78a7,
        0x0000, 0xb9d5, 0xeacd, 0xb0e1, 0x78a8, 0x0000, 0x0000, 0x0000,
        0xc9bd, 0x78ab, 0x0000, 0xeace, 0x0000, 0x0000, 0x0000, 0x78ad,
        0xbfea, 0x0000, 0xead5, 0x0000, 0x0000, 0xead2, 0x0000, 0xc3ef,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xead3, 0xead0, 0xb6de,
    ],
    [
        0x0000, 0xeacf, 0xead6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb7b6, 0x0000, 0x0000, 0xc2de, 0x0000, 0xeadc, 0x0000, 0x0000,
        0x0000, 0x0000, 0xead8, 0x0000, 0x0000, 0x0000, 0xc2b5, 0xead7,
        0xfbe8, 0xeada, 0x0000, 0x0000, 0x0000, 0x0000, 0xead1, 0x0000,
        0x78ae, 0x0000, 0xeadb, 0x0000, 0xeadd, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfbe9, 0xc8ef, 0x0000, 0x0000, 0xead9, 0x0000,
        0xeade, 0xeae0, 0x0000, 0x0000, 0xb8d3, 0xead4, 0x0000, 0xb0c1,
        0x0000, 0x0000, 0x0000, 0x0000, 0x78af, 0x78b0, 0x78b1, 0xeadf,
    ],
    [
        0x78b2, 0xbadb, 0xcef6, 0xeae1, 0xeae2, 0xc1f5, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfbea, 0x0000, 0x0000, 0x0000, 0xfbeb, 0xcea2,
        0x0000, 0x78b5, 0x78b3, 0x78b6, 0xeae3, 0xcdb5, 0x0000, 0x0000,
        0xeae4, 0xeae5, 0x0000, 0x78b7, 0xcae4, 0xeae6, 0x0000, 0xbac0,
        0x0000, 0xcea3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xeaeb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x78b8, 0x78b9, 0xeaec, 0xbed8, 0xeaea, 0xfbed, 0x0000, 0x0000,
        0xcde7, 0xeae7, 0x0000, 0x0000, 0xeae9, 0xc0bd, 0xbffe, 0x0000,
    ],
    [
        0x0000, 0x78bb, 0xeae8, 0x0000, 0xeaed, 0x0000, 0x0000, 0xcaa3,
        0x0000, 0x0000, 0xeaef, 0x0000, 0xeaee, 0x0000, 0x0000, 0x0000,
        0xb3ec, 0x0000, 0xcbab, 0xeaf0, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfbf0, 0xfbf1, 0xfbf2, 0x0000, 0xfbee, 0xeafc, 0xeaf2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeaf3, 0x0000, 0xfbf3,
        0x0000, 0x0000, 0xeaf4, 0xeaf5, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfbf4, 0x0000, 0xfbf5, 0x0000, 0x0000, 0x0000, 0xeaf9, 0x78bd,
        0xeafa, 0xfbf6, 0x0000, 0xeaf8, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xfbf7, 0xeaf6, 0x78bf, 0xeaf1, 0xeaf7, 0x78c0, 0x0000, 0x0000,
        0x0000, 0x78c1, 0x0000, 0x0000, 0xeafb, 0xf0b7, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb2a8, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeafe, 0xb6df,
        0xeafd, 0x0000, 0x78c4, 0x0000, 0xeba2, 0x0000, 0xeba1, 0x0000,
        0x0000, 0x0000, 0xeba4, 0x0000, 0x0000, 0xeba3, 0x0000, 0xeba5,
        0x0000, 0x0000, 0xbdb1, 0x0000, 0xeba6, 0x0000, 0x0000, 0xeba7,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeba8, 0xc0be,
    ],
    [
        0x78c5, 0xcdd7, 0x0000, 0xeba9, 0x0000, 0x0000, 0xcaa4, 0xc7c6,
        0xebaa, 0x78c6, 0xebab, 0xb8ab, 0x0000, 0x0000, 0x0000, 0xb5ac,
        0x78c7, 0x0000, 0x0000, 0xebac, 0xfbf8, 0x0000, 0xbbeb, 0xc7c1,
        0xebad, 0x0000, 0xb3d0, 0x0000, 0x0000, 0x0000, 0x0000, 0x78c8,
        0x0000, 0xebae, 0x0000, 0x0000, 0x0000, 0x0000, 0xebb0, 0xcdf7,
        0x0000, 0xebaf, 0xbfc6, 0x0000, 0xebb1, 0x0000, 0x0000, 0xebb2,
        0x78c9, 0x0000, 0xebb3, 0xb4d1, 0x0000, 0x0000, 0x0000, 0x78ca,
        0x0000, 0x0000, 0xebb4, 0x0000, 0x0000, 0xebb5, 0x0000, 0xebb6,
    ],
    [
        0xebb7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xb3d1, 0x0000, 0xfbfa, 0x0000, 0x78cb, 0x0000,
        0x78cc, 0x0000, 0xebb8, 0x0000, 0xebb9, 0xebba, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb2f2, 0x0000, 0xfbfb, 0xbfa8, 0xebbb,
        0x0000, 0x0000, 0x0000, 0x78cd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x78cf, 0x0000, 0x78d0, 0xebbc, 0x0000, 0xfbfc, 0x0000,
        0xebbd, 0x0000, 0x0000, 0x0000, 0x0000, 0x78d1, 0x0000, 0x78d2,
    ],
    [
        0xb8c0, 0x0000, 0xc4fb, 0xebbe, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb7d7, 0x0000, 0xbfd6, 0x0000, 0xebc1, 0x0000, 0xc6a4, 0x0000,
        0xebc0, 0x78d4, 0xfbfd, 0xb7b1, 0x78d5, 0xfbfe, 0xebbf, 0xc2f7,
        0xb5ad, 0x0000, 0x0000, 0xebc2, 0x0000, 0xebc3, 0x0000, 0xbed9,
        0x0000, 0x78d7, 0xfca1, 0xb7ed, 0x0000, 0xebc4, 0x0000, 0x0000,
        0x0000, 0x0000, 0xcbac, 0x0000, 0x0000, 0xc0df, 0x0000, 0x0000,
        0x0000, 0xb5f6, 0x0000, 0xccf5, 0xc1ca, 0x78d8, 0xebc5, 0xfca2,
        0x0000, 0x0000, 0xbfc7, 0xc3f0, 0xbeda, 0x0000, 0x78d9, 0x0000,
    ],
    [
        0x0000, 0xebc6, 0x0000, 0x0000, 0x0000, 0x78da, 0xebc9, 0xfca3,
        0xebca, 0x0000, 0x0000, 0x0000, 0x0000, 0x78db, 0xfca4, 0x0000,
        0xbabe, 0xc2c2, 0xebc8, 0x0000, 0xbedb, 0xc9be, 0x0000, 0x0000,
        0x78dc, 0x0000, 0x0000, 0xebc7, 0x0000, 0xfca5, 0xbbec, 0x0000,
        0xb1d3, 0xfca6, 0xebce, 0xb7d8, 0x0000, 0x0000, 0xbbee, 0x0000,
        0x0000, 0xbbed, 0x0000, 0xcfcd, 0xebcd, 0xebcc, 0xc1a7, 0x0000,
        0xb5cd, 0xcfc3, 0xb3ba, 0xbedc, 0x0000, 0xfca7, 0x0000, 0x0000,
        0x0000, 0xfca8, 0x0000, 0x0000, 0xebcb, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xebd0, 0x0000, 0xebd1, 0xebcf, 0x0000, 0xb8d8,
        0x0000, 0xcdc0, 0x0000, 0x0000, 0xbbef, 0xc7a7, 0x0000, 0x0000,
        0x78de, 0xebd4, 0x0000, 0xc0c0, 0x0000, 0xc3c2, 0x0000, 0x0000,
        0xcdb6, 0x0000, 0xebd7, 0x0000, 0x0000, 0x0000, 0xb8ec, 0x0000,
        0xc0bf, 0xebd3, 0x0000, 0xebd8, 0xb8ed, 0xebd5, 0xebd6, 0xfca9,
        0xebd2, 0x0000, 0x0000, 0x0000, 0xc0e2, 0xc6c9, 0x78dd, 0x0000,
        0xc3af, 0x0000, 0xb2dd, 0x0000, 0x0000, 0x0000, 0x0000, 0x78df,
        0x0000, 0xc8f0, 0x0000, 0x0000, 0xb5c3, 0x0000, 0x78e0, 0xc4b4,
    ],
    [
        0x0000, 0x0000, 0xebdb, 0x0000, 0xebd9, 0x0000, 0x0000, 0xc3cc,
        0x0000, 0x0000, 0x0000, 0xc0c1, 0xb4d2, 0xebda, 0x0000, 0xbfdb,
        0xfcaa, 0x0000, 0xceca, 0x0000, 0x0000, 0x0000, 0xcfc0, 0x78e1,
        0x0000, 0x0000, 0xebdc, 0xebe7, 0xc4b5, 0x0000, 0xebe6, 0xfcab,
        0xebe3, 0xebeb, 0xebe4, 0x0000, 0xebe0, 0x0000, 0xc4fc, 0xebdf,
        0x0000, 0x0000, 0x0000, 0xebdd, 0x0000, 0xcda1, 0xbbf0, 0x0000,
        0x0000, 0xebe1, 0x0000, 0xebde, 0xfcac, 0x0000, 0xfcad, 0xebe5,
        0xbdf4, 0x0000, 0xb8c1, 0x0000, 0x78e2, 0x0000, 0xc2fa, 0x0000,
    ],
    [
        0xcbc5, 0xb1da, 0xb0e2, 0x0000, 0xc6a5, 0x78e5, 0x0000, 0xebe9,
        0x0000, 0x0000, 0x78e4, 0x0000, 0xebe8, 0x78e6, 0xc6e6, 0x0000,
        0xebed, 0x0000, 0x0000, 0x0000, 0xebe2, 0x0000, 0xebec, 0xebee,
        0x0000, 0xb8ac, 0xebea, 0xb9d6, 0x78e7, 0xbcd5, 0x0000, 0x78e8,
        0xebef, 0xcdd8, 0x0000, 0x0000, 0x0000, 0x0000, 0xebf2, 0x0000,
        0xebf5, 0x0000, 0x0000, 0xebf3, 0xc9b5, 0x78e9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xebf0, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb6e0, 0x0000, 0x0000, 0x0000, 0x0000, 0xebf4, 0x0000,
    ],
    [
        0x0000, 0xebf6, 0x0000, 0x78ea, 0x0000, 0x0000, 0xfcb1, 0x0000,
        0x0000, 0xebfa, 0x0000, 0x0000, 0xebf7, 0x0000, 0xebf9, 0xebf8,
        0x0000, 0x78ec, 0x0000, 0x0000, 0xfcb2, 0x0000, 0xebfb, 0x0000,
        0xbcb1, 0xfcb3, 0xebfd, 0xebfc, 0xc9e8, 0x0000, 0x78ed, 0xeca1,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xb7d9, 0x0000,
        0x0000, 0xfcb4, 0x0000, 0xebfe, 0xeca2, 0x0000, 0x0000, 0xeca3,
        0xb5c4, 0xe6c1, 0xbef9, 0x0000, 0xeca4, 0x0000, 0x78ee, 0xb8ee,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeca5, 0x0000, 0x78ef,
    ],
    [
        0xeca6, 0x78f0, 0x0000, 0xbbbe, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xdace, 0x78f1, 0xeca7, 0x0000, 0xeca8, 0x0000,
        0xbdb2, 0x0000, 0xeca9, 0xecaa, 0x78f2, 0x78f3, 0xecab, 0x0000,
        0x0000, 0xecac, 0xecad, 0x0000, 0x78f4, 0xfcb5, 0x78f5, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc3ab,
        0x0000, 0x78f6, 0xecae, 0x0000, 0x0000, 0x78f8, 0x0000, 0xecb0,
    ],
    [
        0x0000, 0xecaf, 0x0000, 0x0000, 0x0000, 0x78fb, 0xc6a6, 0x78fc,
        0xecb1, 0xfcb6, 0xcbad, 0x0000, 0xecb2, 0x0000, 0xecb3, 0x78fd,
        0xecb4, 0x0000, 0x0000, 0x0000, 0x78fe, 0xecb5, 0x0000, 0x79a1,
        0x0000, 0x0000, 0xc6da, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xbedd, 0xecb6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfcb7, 0x79a2, 0xb9eb, 0xd0ae, 0xecb7, 0x79a3, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x79a4, 0x0000, 0x0000, 0x0000, 0x0000,
        0xecb8, 0xc9bf, 0xecb9, 0x0000, 0xecc1, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xecba, 0x0000, 0x0000, 0xecbc, 0x0000, 0x0000,
        0x0000, 0xecbb, 0xecbd, 0x0000, 0xcbc6, 0xecbe, 0xecbf, 0x0000,
        0x0000, 0x0000, 0x79a7, 0x79a6, 0xecc0, 0x0000, 0x0000, 0x0000,
        0xecc2, 0x79a8, 0x0000, 0x79aa, 0x0000, 0xb3ad, 0xc4e7, 0x0000,
        0xc9e9, 0xbae2, 0xb9d7, 0x0000, 0x79ab, 0x0000, 0x0000, 0xc9cf,
        0xb2df, 0xc8ce, 0xecc5, 0xb4d3, 0xc0d5, 0xecc4, 0xecc9, 0xc3f9,
        0xcce3, 0x0000, 0xecc7, 0xecc8, 0xb5ae, 0x0000, 0xecca, 0xc7e3,
        0xc2df, 0x0000, 0x0000, 0xc8f1, 0xc5bd, 0xecc6, 0x0000, 0xcbc7,
    ],
    [
        0xb2ec, 0xeccc, 0xcfa8, 0xc4c2, 0xcfc5, 0x0000, 0x0000, 0xbbf1,
        0xeccb, 0x0000, 0xc2b1, 0x0000, 0x0000, 0xecdc, 0xc1a8, 0x0000,
        0x0000, 0xc6f8, 0x0000, 0xc9d0, 0x0000, 0x79ad, 0x79ac, 0x0000,
        0x0000, 0x79ae, 0xeccf, 0xbbbf, 0xbbf2, 0x0000, 0xbede, 0x0000,
        0xc7e5, 0xfcb9, 0xb8ad, 0xecce, 0xeccd, 0x0000, 0xc9ea, 0x0000,
        0x0000, 0x0000, 0xbcc1, 0x0000, 0x0000, 0xc5d2, 0x0000, 0x0000,
        0x79b0, 0x79b1, 0x0000, 0x0000, 0xfcba, 0x0000, 0x0000, 0x0000,
        0xfcbb, 0x0000, 0xecd1, 0xecd2, 0xb9d8, 0xecd0, 0xfcbc, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xecd3, 0xecd4, 0x0000, 0xecd6,
        0xc2a3, 0x79b3, 0xecd5, 0xb4e6, 0x0000, 0xecd8, 0x79b4, 0xecd7,
        0xecd9, 0x0000, 0xfcbe, 0xecdb, 0xecdd, 0x0000, 0xecde, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfcbf, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc0d6, 0x0000, 0xbccf, 0xecdf,
        0x0000, 0x0000, 0x0000, 0xb3d2, 0x79b5, 0xece0, 0x0000, 0x0000,
        0xc1f6, 0xece1, 0x0000, 0xece2, 0xc9eb, 0x0000, 0x0000, 0xb5af,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xece3, 0x0000, 0x0000, 0x79b6, 0xc4b6, 0x0000, 0x0000,
        0x0000, 0x0000, 0xb1db, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x79b7, 0x0000, 0x0000,
        0x0000, 0xece4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbcf1, 0x0000, 0x0000, 0x79b8, 0x0000,
        0xbff6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfcc0,
        0x0000, 0x0000, 0x0000, 0xc2ad, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xece7, 0x0000, 0x0000, 0x0000, 0xece6, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xece5, 0x0000, 0x0000, 0x0000, 0x79ba, 0x0000,
        0x79bb, 0x0000, 0x0000, 0xeced, 0xeceb, 0x0000, 0xfcc1, 0xece8,
        0x0000, 0xfcc2, 0x0000, 0x0000, 0x0000, 0x0000, 0xecea, 0xfcc3,
        0x0000, 0x79bc, 0xece9, 0xecec, 0x0000, 0xb5f7, 0x0000, 0xecf0,
        0x0000, 0xc0d7, 0x0000, 0xecf1, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb8d9, 0x0000, 0xecee, 0xecef, 0x79bd, 0x0000, 0x0000, 0xcfa9,
        0x0000, 0x0000, 0x0000, 0xc4b7, 0x0000, 0xc1a9, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xecf2, 0x79c0, 0x0000, 0xecf5,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x79c1, 0x0000,
        0xecf3, 0xecf4, 0xcdd9, 0x0000, 0x79be, 0x0000, 0x0000, 0xc6a7,
        0xecf8, 0x0000, 0x0000, 0x0000, 0x79c3, 0x0000, 0x79c4, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xecf6, 0xecf7, 0xecf9,
        0xfcc4, 0x79c5, 0x79c6, 0xfcc5, 0x0000, 0x0000, 0x0000, 0x79c7,
        0x0000, 0x0000, 0xeda9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xecfc, 0x0000, 0x0000, 0x0000, 0xecfd, 0xecfb, 0x79ca, 0x0000,
        0x0000, 0x79cb, 0x0000, 0x0000, 0x0000, 0xfcc6, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xecfa, 0x0000, 0xc4fd, 0x0000, 0x0000, 0xeda1,
        0xeda5, 0xeda2, 0xecfe, 0x79cc, 0xeda3, 0x0000, 0x0000, 0x0000,
        0xeda4, 0x0000, 0x0000, 0x0000, 0x79cd, 0xedab, 0x0000, 0x0000,
        0x0000, 0xeda6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc0d8,
        0xeda8, 0x0000, 0x79ce, 0xedaa, 0xeda7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x79cf, 0x79d0, 0x0000, 0x79d1,
        0xfcc7, 0x0000, 0xedad, 0x0000, 0xbdb3, 0x0000, 0xedac, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfcc8, 0xedae, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xedaf, 0x0000, 0x0000, 0xedb2, 0xedb1, 0x0000, 0xedb0,
        0x0000, 0x0000, 0xedb4, 0xedb3, 0x0000, 0xccf6, 0x0000, 0x0000,
        0x0000, 0xedb6, 0x0000, 0xedb5, 0xedb7, 0x0000, 0x0000, 0x0000,
        0x79d2, 0xedb8, 0x0000, 0x0000, 0x0000, 0x0000, 0x79d3, 0x0000,
        0x0000, 0xedba, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xedb9, 0xbfc8, 0xedbb, 0x0000, 0x79d4, 0xb6ed,
        0xedbc, 0xedbe, 0x0000, 0x79d5, 0x0000, 0x79d6, 0x79d7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x79d8, 0x0000, 0x0000, 0xedbf, 0x0000,
    ],
    [
        0xfcca, 0x0000, 0x0000, 0x0000, 0x0000, 0xedc0, 0xedbd, 0x0000,
        0xedc1, 0x0000, 0xbcd6, 0xedc2, 0xb5b0, 0xb7b3, 0x0000, 0x0000,
        0x0000, 0x79da, 0xb8ae, 0x0000, 0x79db, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xedc3, 0x0000, 0x0000, 0x0000, 0xc6f0,
        0x0000, 0x0000, 0xc5be, 0xedc4, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xedc7, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xbcb4, 0x79dd, 0xfccc, 0xedc6, 0xedc5, 0xb7da, 0xedc8, 0x0000,
    ],
    [
        0x79df, 0x0000, 0x0000, 0xb3d3, 0x0000, 0xedca, 0x0000, 0x0000,
        0x79e0, 0xbadc, 0xedc9, 0x0000, 0xedd2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xedcc, 0xedce, 0xcae5, 0xedcb, 0x0000, 0x79e1,
        0x0000, 0xedcd, 0x0000, 0xedd1, 0xedcf, 0xb5b1, 0xfccd, 0xedd0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xedd3, 0x0000,
        0x0000, 0xc7da, 0xced8, 0x79e2, 0x0000, 0xfcce, 0x0000, 0xbdb4,
        0x0000, 0x0000, 0x0000, 0xedd4, 0x0000, 0x0000, 0xfccf, 0x0000,
        0xcda2, 0xedd6, 0x0000, 0xedd5, 0x0000, 0x0000, 0xedd9, 0xcdc1,
    ],
    [
        0x79e3, 0x0000, 0xedd8, 0x0000, 0xb3ed, 0xedd7, 0xeddc, 0x0000,
        0x0000, 0xeddb, 0x79e4, 0x0000, 0xedda, 0xc5b2, 0xeddd, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xfcd0, 0x0000, 0x0000, 0xedde,
        0x79e5, 0x0000, 0x0000, 0x0000, 0xeddf, 0x0000, 0x0000, 0xb9ec,
        0x0000, 0xb7a5, 0xede0, 0xede1, 0xede2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xbfc9, 0xede3, 0x0000, 0xbcad, 0xede4,
        0x0000, 0x0000, 0x0000, 0xede5, 0x79e7, 0x0000, 0xfcd2, 0xd2a1,
        0xd1fe, 0x0000, 0x0000, 0x0000, 0x0000, 0xede6, 0xe5f0, 0xede7,
        0xc3a4, 0xbfab, 0xc7c0, 0x0000, 0x79e8, 0xfcd3, 0x79ea, 0xede8,
        0x0000, 0x0000, 0xcad5, 0xc4d4, 0xb9fe, 0x0000, 0x0000, 0xc3a9,
    ],
    [
        0x0000, 0x79ec, 0xb1aa, 0x0000, 0xcbf8, 0xbfd7, 0x79ed, 0x0000,
        0x0000, 0x0000, 0x79ef, 0x0000, 0x0000, 0x79f0, 0xb7de, 0x0000,
        0x0000, 0xb6e1, 0x0000, 0x79f1, 0xcad6, 0x79f2, 0x0000, 0x0000,
        0x0000, 0x0000, 0xede9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x79f3, 0x0000, 0xedeb, 0x0000, 0xfcd4, 0xedea, 0xb2e0, 0x0000,
        0xfcd5, 0xc6f6, 0xedec, 0xc7f7, 0x0000, 0xc5b3, 0xfcd6, 0xeded,
        0xbdd2, 0x79f4, 0x0000, 0x0000, 0xedef, 0x79f5, 0x0000, 0xccc2,
        0xedfe, 0xedf1, 0xedf2, 0x79f6, 0x0000, 0xc4c9, 0x0000, 0x0000,
    ],
];

static THREE_E9_ROW: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 0, 0, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 0, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 0,
];

static THREE_E9: [[u16; 64]; 60] = [
    [
        0xc2e0, 0xc1f7, 0x79f7, 0xc6a8, 0x0000, 0xedf0, 0xb5d5, 0x0000,
        0xfcd7, 0x0000, 0x0000, 0xedf9, 0x79f8, 0xedf6, 0xeea5, 0xc6a9,
        0xc3e0, 0xedf3, 0x0000, 0xc4fe, 0xc5d3, 0xedf4, 0xedf8, 0xbfe0,
        0x0000, 0xc7e7, 0xc4cc, 0x0000, 0x0000, 0xc0c2, 0xedf7, 0xc2ae,
        0xc2a4, 0xedf5, 0xb0a9, 0xcfa2, 0x0000, 0x0000, 0x0000, 0xedfa,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfcd8, 0xc2e1, 0x0000,
        0x0000, 0xbdb5, 0xbfca, 0x0000, 0x0000, 0xedfc, 0xedfb, 0x79f9,
        0xb0ef, 0xedfd, 0x0000, 0x0000, 0xc9af, 0x0000, 0xeea7, 0x0000,
    ],
    [
        0x0000, 0xc6db, 0xbfeb, 0x79fb, 0x79fc, 0xc3d9, 0x0000, 0xb6f8,
        0x0000, 0xeea6, 0xcdb7, 0xb1bf, 0x0000, 0xcad7, 0xb2e1, 0xeea1,
        0xeea2, 0xeea3, 0xeea4, 0xc6bb, 0xc3a3, 0xb0e3, 0xeea8, 0x0000,
        0xeea9, 0xf4a3, 0x0000, 0x0000, 0xc2bd, 0x79fd, 0xeeaa, 0x0000,
        0xb1f3, 0xc1cc, 0x0000, 0xb8af, 0x0000, 0xcdda, 0x0000, 0x0000,
        0xeeab, 0xc5ac, 0x0000, 0x0000, 0x0000, 0xc1f8, 0xbcd7, 0xeeac,
        0x0000, 0x0000, 0xeeaf, 0x0000, 0x0000, 0xbde5, 0xeead, 0xc1ab,
        0xc1aa, 0x0000, 0xb0e4, 0x0000, 0xcecb, 0xeeb1, 0x0000, 0xc8f2,
    ],
    [
        0xeeb3, 0xeeb2, 0xeeb0, 0xe3e4, 0xb4d4, 0x7aa2, 0x0000, 0xedee,
        0xfcda, 0xeeb5, 0xeeb4, 0x0000, 0x7aa3, 0x0000, 0x0000, 0xeeb6,
        0x7aa4, 0xcdb8, 0x0000, 0x0000, 0x0000, 0xfcdb, 0x0000, 0xfcdc,
        0x0000, 0xfcdd, 0x0000, 0xfcde, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7aa6, 0xfcdf, 0xc6e1, 0x0000, 0x0000, 0xcbae, 0x0000,
        0xeeb7, 0x0000, 0xbcd9, 0x0000, 0x0000, 0x0000, 0x0000, 0xeeb8,
        0x7aa8, 0xeeb9, 0x0000, 0xfce0, 0x0000, 0xeeba, 0x7aa9, 0x0000,
        0xc5a1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfce1, 0x0000,
    ],
    [
        0x0000, 0xb0ea, 0x0000, 0x7aaa, 0xfce2, 0xfce3, 0x0000, 0xfce4,
        0x7aab, 0x0000, 0xb9d9, 0x0000, 0x0000, 0x0000, 0xcfba, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfce5,
        0x0000, 0x0000, 0x0000, 0xeebe, 0x7aad, 0xfce6, 0xfce7, 0x7aae,
        0x0000, 0xb7b4, 0xeebb, 0x0000, 0xeebc, 0x0000, 0x0000, 0x0000,
        0xc9f4, 0x0000, 0x0000, 0x7ab3, 0x0000, 0xb3d4, 0x0000, 0xfce8,
        0x0000, 0x0000, 0x7ab1, 0x0000, 0xfce9, 0xcdb9, 0x7ab0, 0xb6bf,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5d4, 0x7ab4, 0x7ab5,
    ],
    [
        0x7ab2, 0x0000, 0xeebf, 0x0000, 0x7ab6, 0x0000, 0x7ab7, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xeec0, 0x0000, 0xfceb, 0xfcec, 0xfced, 0x0000,
        0x7ab8, 0xeec1, 0x0000, 0x0000, 0x7ab9, 0x0000, 0x7aba, 0x0000,
        0x0000, 0x0000, 0xfcee, 0xfcef, 0x0000, 0x0000, 0x0000, 0xfcf0,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5a2, 0x0000, 0xfcf1,
        0xeec3, 0xfcf2, 0xeec2, 0x0000, 0xfcf3, 0x0000, 0x0000, 0x7abb,
        0x0000, 0x7abc, 0x7abd, 0x0000, 0x0000, 0xfcf4, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7abe, 0x7abf,
        0xfcf5, 0xc6d3, 0xeec4, 0xbdb6, 0xbce0, 0xc7db, 0xc3f1, 0x0000,
        0x0000, 0x0000, 0xbcf2, 0x0000, 0xbfec, 0x0000, 0xeec5, 0x7ac0,
        0xeec6, 0x7ac1, 0x0000, 0xfcf6, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7ac2, 0xbfdd, 0xeec7, 0x7ac3, 0xeec8, 0x0000, 0x0000,
        0x0000, 0xeec9, 0xcdef, 0x0000, 0xbdb7, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xeecb, 0xeeca, 0x7ac4, 0xb9da, 0x0000, 0xb9f3,
        0xbbc0, 0x7ac5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xeece, 0xfcf7, 0x0000, 0x7ac6, 0x0000, 0xbde6,
        0x0000, 0xeecd, 0x0000, 0xeecc, 0x0000, 0xc2e9, 0x7ac7, 0x0000,
        0xb8ef, 0x0000, 0xc0c3, 0x0000, 0x0000, 0x0000, 0x0000, 0xc8b0,
        0x0000, 0x0000, 0x0000, 0x0000, 0xbdb9, 0x0000, 0xfcf8, 0x0000,
        0x0000, 0x0000, 0xeecf, 0x0000, 0xbedf, 0x0000, 0x0000, 0x0000,
        0x7ac8, 0x0000, 0xeed2, 0xeed0, 0xfcf9, 0x0000, 0x7ac9, 0xeed1,
        0x0000, 0xfcfa, 0x0000, 0x7aca, 0xeed4, 0xeed3, 0x7acb, 0x0000,
        0xbefa, 0x0000, 0xeed5, 0x0000, 0xfcfb, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xeed6, 0xeed7, 0x0000, 0x7acc, 0x7acd, 0x0000, 0xc8d0, 0xbad3,
        0xbce1, 0xeed8, 0x0000, 0xeed9, 0xcea4, 0xbdc5, 0xccee, 0xcecc,
        0xeeda, 0xb6e2, 0x0000, 0x0000, 0x0000, 0x0000, 0xeedb, 0xfcfc,
        0xc5a3, 0x0000, 0x7ace, 0xeede, 0xb3f8, 0xbfcb, 0x0000, 0xeedc,
        0x0000, 0xeedd, 0x0000, 0xc4e0, 0xfcfe, 0xfda1, 0xcbd5, 0xb6fc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x7ad1, 0xfda2, 0x7ad2, 0x0000,
        0x0000, 0xfda3, 0x0000, 0x0000, 0x0000, 0xeee0, 0xeee1, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfcfd, 0xeedf, 0x0000, 0x0000, 0xeee3,
    ],
    [
        0x0000, 0x7ad3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfda4,
        0x0000, 0x0000, 0x7ad4, 0x0000, 0x0000, 0xc6df, 0xb3c3, 0x0000,
        0xfda5, 0xeee7, 0x0000, 0x0000, 0xeee4, 0xeee6, 0x7ad5, 0x7ad6,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xeee2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xefcf, 0x0000, 0x0000, 0xeee5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7ad8, 0xceeb, 0x0000, 0x0000, 0xb8da,
        0xfda6, 0xfda7, 0xfda8, 0x0000, 0xfda9, 0x0000, 0x0000, 0xeeef,
    ],
    [
        0xfdaa, 0x0000, 0x7ad9, 0xfdab, 0xc5b4, 0xeeea, 0x0000, 0x7ada,
        0xeeed, 0xeeeb, 0x7adb, 0xeef0, 0x0000, 0x0000, 0x7adc, 0xfdac,
        0xeef1, 0x7add, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ade, 0xeee9,
        0x0000, 0x7adf, 0xeef6, 0xb1f4, 0x0000, 0x0000, 0xeee8, 0x0000,
        0x7ae0, 0x7ae1, 0xc8ad, 0x0000, 0xeeec, 0x7ae2, 0xbee0, 0x7ae3,
        0x7ae4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb9db, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfdad, 0x0000, 0x0000, 0x0000, 0x7ae7, 0x7ae8, 0xcbc8, 0x7ae9,
    ],
    [
        0xb6e4, 0x0000, 0x0000, 0xbdc6, 0x0000, 0xc6bc, 0x0000, 0x0000,
        0xfdae, 0x7aea, 0x0000, 0x0000, 0x0000, 0x7aeb, 0x0000, 0x0000,
        0x0000, 0xc1ad, 0x0000, 0xeef4, 0x0000, 0xeeee, 0xeef3, 0x7aec,
        0xccc3, 0x7aed, 0xc4b8, 0xeef5, 0xeef2, 0x0000, 0x0000, 0x7aee,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7aef,
        0x0000, 0x0000, 0x0000, 0x7af0, 0x0000, 0xc1ac, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7af3, 0x0000, 0x0000, 0x0000, 0x0000, 0xeef9,
        0x0000, 0xeef8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7af4,
    ],
    [
        0x7af5, 0x0000, 0xfdaf, 0x0000, 0x0000, 0x0000, 0x7af6, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfdb0, 0xfdb1, 0x0000, 0x7af7, 0xeef7,
        0x7af8, 0x0000, 0xcbaf, 0xfdb2, 0x0000, 0x0000, 0x0000, 0x7af9,
        0x0000, 0x7afa, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfdb3, 0x0000, 0x0000, 0x0000, 0xbdfb, 0x7afb, 0x0000, 0x7afc,
        0x0000, 0xeefa, 0xcadf, 0x0000, 0x0000, 0xb1d4, 0x0000, 0x0000,
        0x0000, 0x0000, 0xc9c6, 0xc3f2, 0x0000, 0x0000, 0x0000, 0x7ba2,
        0xb5f8, 0x7ba3, 0xeefc, 0x7ba4, 0xb9dd, 0x0000, 0x0000, 0xfdb4,
    ],
    [
        0x0000, 0x0000, 0x7ba5, 0x0000, 0xfdb5, 0x0000, 0xbbac, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ba6, 0x0000, 0xeefb,
        0xbfed, 0x7afd, 0x0000, 0x0000, 0x0000, 0x7ba7, 0x0000, 0x0000,
        0xbfee, 0xefa1, 0xefa3, 0x0000, 0x0000, 0x7ba8, 0x7ba9, 0xfdb6,
        0xbefb, 0xfdb7, 0xefa2, 0xefa4, 0x0000, 0xfdb8, 0xb6d3, 0x7baa,
        0xc9c5, 0x7bab, 0x0000, 0xbce2, 0xcfa3, 0x0000, 0xeefe, 0xbaf8,
        0x0000, 0x0000, 0xcfbf, 0x0000, 0x0000, 0xefa6, 0x0000, 0x0000,
        0x0000, 0x0000, 0xefa5, 0xefa7, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0xeefd, 0x0000, 0x0000, 0x7bae,
        0xfdb9, 0xfdba, 0xfdbb, 0xc6e9, 0x0000, 0xc5d5, 0x0000, 0x0000,
        0x0000, 0x7baf, 0x0000, 0x0000, 0xc4d7, 0x0000, 0xefac, 0x7bb0,
        0x0000, 0x0000, 0x7bb1, 0xc3c3, 0xefa8, 0x0000, 0x0000, 0x0000,
        0xefa9, 0x0000, 0x0000, 0x0000, 0xfdbc, 0xfdbd, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfdbe, 0x7bb2, 0xb7ad, 0x0000, 0xefab, 0x0000,
        0xfdbf, 0x7bb3, 0x0000, 0x7bb4, 0x0000, 0xb8b0, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xefaa, 0x0000, 0xbee1, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x7bb8, 0x0000, 0x0000, 0x7bb9, 0xb3f9, 0x0000, 0x0000, 0x7bba,
        0x0000, 0x0000, 0x0000, 0x0000, 0xefb0, 0x0000, 0xbabf, 0xc1f9,
        0x0000, 0x0000, 0xc4ca, 0xfdc0, 0x0000, 0x0000, 0x7bbb, 0x0000,
        0x0000, 0x7bb5, 0x0000, 0xfdc1, 0x0000, 0x0000, 0x0000, 0xb3bb,
        0x0000, 0x0000, 0x0000, 0x0000, 0xefae, 0xefaf, 0xc4c3, 0x0000,
        0xefad, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xefb1, 0xfdc2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x7bc0, 0x0000, 0xefb7, 0x0000, 0x0000, 0xfdc3, 0x7bc1,
        0xefba, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xefb9, 0xc5ad, 0x0000, 0x0000, 0x0000, 0x0000, 0xefb2, 0xefb3,
        0xefb6, 0x0000, 0x0000, 0x0000, 0x7bc2, 0xefb8, 0xfdc4, 0xfdc5,
        0x0000, 0xb6c0, 0x7bc3, 0x0000, 0xefbb, 0xefb5, 0x0000, 0x7bc4,
        0xefb4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7bbf, 0x0000, 0x0000, 0x0000, 0x7bbc, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7bc9, 0x0000, 0xfdc7, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xefbf, 0xfdc6, 0x0000, 0x0000, 0xefc0,
        0x0000, 0x7bc5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7bc6,
        0xefc1, 0x0000, 0x0000, 0xefbe, 0xefbd, 0x0000, 0x7bc7, 0x7bc8,
        0xbee2, 0xc6aa, 0xefbc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xefc5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xefc3, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7bca, 0xfdc8, 0x7bcb, 0xefc4, 0xefc2, 0x0000,
        0xc2f8, 0x0000, 0xefc6, 0x7bcc, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xefc7, 0x0000, 0x0000, 0xefc9, 0x7bcd, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfdc9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xb4d5, 0xefc8, 0xccfa, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xefd4, 0xefca, 0x0000, 0x0000, 0xefcd, 0x0000,
        0xefcb, 0x0000, 0xefcc, 0xfdca, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xefce, 0xfdcb, 0x0000, 0x7bd0, 0x0000, 0x7bd1,
        0xefd0, 0xfdcc, 0xfdcd, 0x0000, 0x0000, 0xefd1, 0x0000, 0xefd2,
        0x0000, 0x0000, 0x0000, 0x0000, 0xefd5, 0xefd3, 0xefd6, 0xefd8,
    ],
    [
        0x0000, 0xefd7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc4b9,
        0x7bd2, 0x7bd3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xcce7, 0x0000, 0xefd9, 0xc1ae, 0x0000, 0x0000, 0x7bd4, 0xefda,
        0x0000, 0xcac4, 0xefdb, 0xb3ab, 0x7bd5, 0x7bd6, 0xfdce, 0xb1bc,
        0x0000, 0xb4d7, 0x0000, 0xb4d6, 0xefdc, 0x0000, 0xefdd, 0x0000,
        0xefde, 0xefdf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfdcf,
        0xefe0, 0x0000, 0xb4d8, 0xb3d5, 0xb9de, 0xc8b6, 0xfdd0, 0xefe2,
        0xefe1, 0xfdd1, 0x0000, 0x7bd8, 0xfdd2, 0xefe3, 0x0000, 0x0000,
        0x0000, 0x0000, 0xb1dc, 0x0000, 0x7bd9, 0x0000, 0xfdd3, 0x0000,
        0x0000, 0xefe6, 0x0000, 0xefe5, 0xefe4, 0xfdd4, 0xefe7, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xefea, 0x0000, 0x0000, 0x0000, 0xb0c7,
        0x7bdb, 0x0000, 0xefe8, 0xfdd5, 0xefec, 0xefeb, 0x0000, 0x0000,
        0xfdd6, 0x0000, 0x0000, 0xfdd7, 0xefee, 0xefed, 0xefef, 0x0000,
        0xc6ae, 0x0000, 0xfdd9, 0x0000, 0xeff0, 0x0000, 0xfdda, 0x0000,
        0x0000, 0xeff1, 0xeff3, 0x0000, 0x0000, 0xeff2, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xc9ec, 0x7aa5, 0x0000, 0x0000,
        0x0000, 0xeff4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xeff5, 0x0000, 0xbae5, 0x0000, 0x7bde, 0x0000, 0xeff6, 0xeff7,
        0x0000, 0x0000, 0xcbc9, 0x7bdf, 0x7be0, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc1cb, 0x7be2, 0x0000, 0x0000, 0xb0a4,
    ],
    [
        0xc2cb, 0x7be3, 0xeff8, 0x0000, 0xc9ed, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xeffb, 0xeff9, 0xb9df, 0x0000, 0xeffa,
        0xb8c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfddb, 0x0000, 0x0000, 0xcac5, 0xeffd, 0xf0a1, 0xeffe, 0xf0a2,
        0x0000, 0x7be4, 0xb1a1, 0xbfd8, 0xbdfc, 0xb4d9, 0xf0a3, 0x0000,
        0x0000, 0x0000, 0xc7e6, 0x0000, 0xf0a5, 0x0000, 0x0000, 0x0000,
        0xb1a2, 0x0000, 0xf0a4, 0xc4c4, 0x0000, 0xcecd, 0xc6ab, 0xeffc,
        0xcea6, 0x0000, 0xb8b1, 0x0000, 0x0000, 0xcddb, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x7be6, 0x0000, 0xfddc, 0xb6f9, 0xceb4, 0x0000,
        0xb7a8, 0x0000, 0xc2e2, 0xe7a1, 0x0000, 0xf0a6, 0xb3ac, 0xbfef,
        0x0000, 0x0000, 0x0000, 0x0000, 0xb3d6, 0xf0a8, 0x0000, 0xf0a9,
        0xf0a7, 0xb7e4, 0x7be8, 0xbadd, 0xbee3, 0xfdde, 0x0000, 0x0000,
        0xb1a3, 0x0000, 0x0000, 0xced9, 0xfddf, 0xfde0, 0x0000, 0xf0ab,
        0xeeae, 0x7beb, 0xf0aa, 0x0000, 0x0000, 0x0000, 0x0000, 0x7bec,
        0xf0ae, 0xf0ac, 0xf0ad, 0x7bed, 0xf0af, 0x0000, 0xf0b0, 0xceec,
        0xf0b1, 0xf0b2, 0x7bee, 0xc0c9, 0xc8bb, 0x7bef, 0x0000, 0x0000,
    ],
    [
        0xbffd, 0xb4e7, 0x0000, 0x0000, 0xcdba, 0xb2ed, 0xbdb8, 0xb8db,
        0x0000, 0xf0b5, 0x0000, 0xf0b4, 0xbbf3, 0xf0b6, 0xf0b3, 0x0000,
        0x0000, 0xbba8, 0xfde1, 0x0000, 0x0000, 0xf0ba, 0xeaad, 0x0000,
        0x7bf2, 0xd2d6, 0x7bf3, 0xbff7, 0xf0b8, 0x7bf4, 0xfde2, 0x0000,
        0x0000, 0x0000, 0xcea5, 0xc6f1, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb1ab, 0xfde4, 0xc0e3, 0xbcb6, 0x0000, 0x0000, 0x0000, 0xfde5,
        0xcab7, 0x0000, 0xb1c0, 0x0000, 0x0000, 0x0000, 0xceed, 0xcdeb,
        0x0000, 0xf0bb, 0x0000, 0xc5c5, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xbcfb, 0x0000, 0x0000, 0x0000, 0xf0bc, 0x0000, 0xf0bd, 0xbfcc,
        0xf0be, 0x0000, 0xceee, 0x0000, 0x0000, 0xf0b9, 0xf0c0, 0xf0c2,
        0x0000, 0xf0c1, 0x0000, 0xf0bf, 0x7bf6, 0x0000, 0xf0c3, 0x0000,
        0x0000, 0xf0c4, 0x0000, 0x0000, 0xc1fa, 0x0000, 0xb2e2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7bf7, 0xf0c5, 0x0000, 0x0000, 0xccb8,
        0x0000, 0x0000, 0xf0c6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf0c7, 0x0000, 0xcfaa, 0xfde6, 0x0000, 0x0000, 0x7bf9, 0x0000,
        0xdbb1, 0xf0c8, 0x0000, 0xfde7, 0x0000, 0xf0c9, 0xf0ca, 0x0000,
    ],
    [
        0x0000, 0x7bfa, 0xf0ce, 0x0000, 0xf0cb, 0x0000, 0xf0cc, 0x7bfb,
        0xf0cd, 0xf0cf, 0x0000, 0x0000, 0x0000, 0xfde8, 0xfde9, 0xfdea,
        0x0000, 0x0000, 0xc0c4, 0x0000, 0x0000, 0x7bfc, 0xccf7, 0x7bfd,
        0x0000, 0xc0c5, 0xfdeb, 0x7bfe, 0xf0d0, 0x0000, 0xc8f3, 0x0000,
        0xf0d1, 0xf3d3, 0xcccc, 0x0000, 0xf0d2, 0x0000, 0xf0d3, 0x0000,
        0xf0d4, 0xb3d7, 0x7ca1, 0xf0d6, 0x0000, 0xbfd9, 0xfdec, 0x0000,
        0x0000, 0xf0d7, 0x0000, 0xfded, 0xb7a4, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf0d8, 0xf0dc, 0x0000, 0xf0da, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xf0db, 0x0000, 0x0000, 0xb3f3, 0xf0d9, 0xf0dd, 0x0000,
        0x0000, 0x0000, 0x0000, 0xf0de, 0x0000, 0xb0c8, 0x0000, 0xf0df,
        0xf0e0, 0x0000, 0x0000, 0x0000, 0x0000, 0xfdee, 0x7ca4, 0x0000,
        0xbee4, 0x0000, 0x7ca5, 0x0000, 0xf0e1, 0x0000, 0x7ca6, 0x0000,
        0xb5c7, 0x0000, 0x7ca7, 0xf0e4, 0x0000, 0x0000, 0xf0e3, 0x0000,
        0xf0e2, 0x0000, 0x0000, 0xebf1, 0x0000, 0xcadc, 0xfdef, 0x0000,
        0x0000, 0x7ca8, 0x7ca9, 0xf0e5, 0xf0e6, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfdf0, 0x0000, 0x0000, 0x0000, 0x7caa, 0x0000,
    ],
    [
        0x0000, 0xfdf1, 0x0000, 0xf0e7, 0x0000, 0x0000, 0xf0e8, 0x0000,
        0xf0e9, 0xfdf2, 0x0000, 0xf0ea, 0x7cab, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7cac, 0x0000, 0xb4da, 0x7cad, 0x0000, 0x0000, 0x0000,
        0x7cae, 0x7caf, 0x0000, 0xfdf4, 0xf0eb, 0x0000, 0xfdf3, 0x0000,
        0x0000, 0x7cb0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf0ec, 0xc7a3, 0x0000,
        0x0000, 0x7cb1, 0xf0ee, 0xb2bb, 0xfdf5, 0xf0f1, 0xf0f0, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb1a4, 0x0000, 0x0000, 0x0000, 0xb6c1,
    ],
    [
        0x0000, 0xcac7, 0xc4ba, 0xbaa2, 0x7cb2, 0xb9e0, 0xbde7, 0x0000,
        0xbfdc, 0x0000, 0xfdf7, 0x0000, 0xf0f3, 0x7cb3, 0x7cb4, 0xf0f2,
        0xcdc2, 0xb4e8, 0xc8d2, 0xc6dc, 0x7cb5, 0x0000, 0x7cb6, 0xbffc,
        0xcece, 0x0000, 0xb7db, 0x0000, 0x0000, 0x0000, 0xfdf8, 0x0000,
        0x0000, 0xf0f6, 0x0000, 0x7cb9, 0xf0f5, 0x7cbc, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xfdf9, 0xcbcb, 0xc6ac, 0x0000, 0x0000,
        0xfdfa, 0x0000, 0x7cba, 0x7cbb, 0xb1d0, 0x0000, 0x0000, 0xf0f7,
        0xf0f4, 0x0000, 0x0000, 0xc9d1, 0xcdea, 0xf0f8, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf0f9, 0x7cbd,
        0x0000, 0x0000, 0x0000, 0xf0fb, 0xc2ea, 0xb3db, 0xb3dc, 0xf0fa,
        0x0000, 0x0000, 0xfdfc, 0xfdfd, 0xb4e9, 0xb8b2, 0xfdfe, 0xfea1,
        0xb4ea, 0xfea2, 0xfea3, 0xc5bf, 0x0000, 0x0000, 0xcee0, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfea5, 0x7cbe, 0xb8dc,
        0x0000, 0x0000, 0x0000, 0xf0fc, 0xfea6, 0x0000, 0x0000, 0xf0fd,
        0xf0fe, 0xf1a1, 0x0000, 0xf1a3, 0xf1a2, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc9f7, 0x0000, 0xf1a4, 0x7cbf, 0x0000, 0x7cc0, 0x0000, 0xf1a5,
        0x7cc1, 0xf1a6, 0x0000, 0x0000, 0x0000, 0x0000, 0xf1a7, 0x7cc3,
        0x7cc4, 0x0000, 0xfea7, 0x7cc5, 0x7cc6, 0x0000, 0x0000, 0x7cc7,
    ],
    [
        0x0000, 0x0000, 0x7cc8, 0xf1a9, 0xf1a8, 0x0000, 0xf1aa, 0x7cc9,
        0xfea8, 0x0000, 0x0000, 0x7cca, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc8f4, 0xe6cc, 0x0000, 0x0000, 0xbfa9,
        0x7ccb, 0x7ccd, 0xb5b2, 0x7cce, 0x0000, 0x7ccf, 0x0000, 0xfea9,
        0x0000, 0xf1ab, 0x7cd0, 0xf1ac, 0x0000, 0xd2ac, 0xddbb, 0xc8d3,
        0x7cd1, 0x7cd2, 0xb0fb, 0x7cd3, 0xb0bb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xbbf4, 0xcbb0, 0xbefe, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xf1ad, 0x0000, 0xccdf, 0x0000, 0x0000,
        0x7cd4, 0xf1ae, 0xcddc, 0x0000, 0xb1c2, 0x0000, 0x0000, 0x0000,
        0xbbc1, 0x0000, 0xf1af, 0xb2ee, 0xf1b0, 0x0000, 0x7cd7, 0x7cd8,
        0xf1b1, 0x0000, 0x7cda, 0x7cdb, 0x7cdc, 0xf1b3, 0xf1b4, 0x0000,
        0xf1b6, 0xf1b2, 0x0000, 0x0000, 0xf1b5, 0x0000, 0x0000, 0x0000,
        0xb4db, 0x0000, 0x0000, 0x0000, 0xf1b7, 0x0000, 0xf1b8, 0x0000,
        0x0000, 0x7cde, 0x7cdf, 0x7ce0, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7ce1, 0x7ce2, 0x7ce3, 0xf1b9, 0xf1ba, 0x0000,
    ],
    [
        0x7ce4, 0x7ce5, 0xf1bb, 0x0000, 0x0000, 0xf1bd, 0x7ce6, 0x0000,
        0x0000, 0xf1bc, 0x0000, 0xf1bf, 0xf1c2, 0x7ce7, 0x7ce8, 0x0000,
        0xf1be, 0xf1c0, 0xf1c1, 0x0000, 0x0000, 0xf1c3, 0x0000, 0xb6c2,
        0xfeaa, 0x0000, 0x0000, 0x0000, 0x7ce9, 0x0000, 0x0000, 0x7cea,
        0x7ceb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xbcf3, 0xf1c4,
        0xf1c5, 0xb9e1, 0x0000, 0x0000, 0x0000, 0x0000, 0xfeab, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7cec, 0x0000, 0xf1c6, 0x7ced, 0x0000,
        0xb3be, 0x0000, 0x0000, 0x0000, 0xc7cf, 0xf1c7, 0xf1c8, 0x0000,
        0x0000, 0x0000, 0x0000, 0xc3da, 0xc6eb, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7cee, 0x0000, 0x0000, 0xf1c9, 0x7cef, 0x0000, 0x7cf0,
    ],
    [
        0x0000, 0xc7fd, 0x0000, 0x7cf1, 0xc2cc, 0xb1d8, 0xb6ee, 0x0000,
        0xb6ef, 0x7cf2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc3f3, 0xf1ce, 0xb6f0, 0x0000, 0x7cf3, 0xb2ef, 0x0000, 0x0000,
        0xf1cd, 0x7cf4, 0x0000, 0xf1cb, 0x0000, 0xf1cc, 0x7cf5, 0xf1ca,
        0x0000, 0x0000, 0xf1d8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf1cf, 0xf1d0, 0x0000,
        0x7cf7, 0xf1d1, 0xf1d2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf1d4, 0x7cf8, 0x0000, 0xf1d3, 0x7cf9, 0x0000, 0x0000, 0xbdd9,
    ],
    [
        0x0000, 0xf1d5, 0xfeac, 0xfead, 0x0000, 0xf1d7, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7cfa, 0x0000, 0x0000, 0x0000, 0xb5b3, 0xf1d6,
        0x0000, 0x7cfb, 0xc1fb, 0xb8b3, 0x0000, 0x0000, 0x7cfc, 0x0000,
        0x0000, 0xf1d9, 0x7cfd, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x7cfe, 0x0000, 0x0000, 0x0000, 0xfeae, 0x0000, 0x0000, 0x0000,
        0xc2cd, 0x0000, 0x0000, 0xf1da, 0x0000, 0xfeaf, 0xfeb0, 0x0000,
        0xc6ad, 0x7da1, 0x0000, 0x0000, 0x0000, 0x0000, 0x7da2, 0xf1db,
        0xfeb1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf1e0, 0x0000,
    ],
    [
        0xf1de, 0x0000, 0xf1dd, 0xf1df, 0x7da3, 0xf1dc, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfeb2, 0x0000, 0x7da4, 0xf1e2, 0xfeb3, 0x0000,
        0x0000, 0x0000, 0xfeb4, 0x0000, 0x0000, 0xf1e1, 0x0000, 0xf1e4,
        0x7da5, 0x0000, 0xb6c3, 0xf1e3, 0x0000, 0x0000, 0x0000, 0xf1e5,
        0x0000, 0x0000, 0xf1e6, 0x0000, 0xf1e8, 0xf1e7, 0x0000, 0x0000,
        0x0000, 0xf1e9, 0xf1eb, 0xf1ea, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xb9fc, 0x0000, 0x0000, 0x0000, 0x0000, 0xf1ec, 0x0000, 0x7da7,
        0xf1ed, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfeb5, 0x7da9,
        0xb3bc, 0x7dab, 0x0000, 0x0000, 0xf1ee, 0x0000, 0x0000, 0x0000,
    ],
    [
        0xf1ef, 0xfeb6, 0x0000, 0xfeb7, 0xbff1, 0x0000, 0x7dad, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfeb8, 0xf1f0,
        0x7dae, 0xf1f1, 0x7daf, 0xf1f2, 0xf1f3, 0x7db0, 0xfeb9, 0x0000,
        0xb9e2, 0x0000, 0x0000, 0x0000, 0x7db2, 0x0000, 0xf1f4, 0xf1f5,
        0x7db3, 0x0000, 0xf1f6, 0xf1f7, 0x0000, 0x7db4, 0xf1f8, 0x0000,
        0x0000, 0x7db5, 0xc8b1, 0xf1fa, 0x0000, 0xc9a6, 0xf1fb, 0xf1f9,
        0x0000, 0xf1fd, 0x0000, 0x0000, 0xf1fc, 0x0000, 0x0000, 0xf1fe,
        0x0000, 0xfeba, 0x0000, 0xf2a1, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0xfebb, 0x7db6, 0x0000, 0x0000, 0xf2a2, 0x0000,
        0xfebc, 0x0000, 0x0000, 0x0000, 0x7db7, 0x0000, 0x0000, 0x0000,
        0x7db8, 0x0000, 0x7db9, 0x0000, 0x0000, 0x0000, 0x7dba, 0x0000,
        0xf2a3, 0x0000, 0xf2a4, 0x0000, 0x7dbb, 0x0000, 0x0000, 0xf2a5,
        0xfebd, 0x0000, 0xf2a6, 0xf2a7, 0x0000, 0xf2a8, 0x0000, 0xf2a9,
        0xf2aa, 0xf2ab, 0xf2ac, 0x7dbc, 0x0000, 0xfebf, 0xf2ad, 0xf2ae,
        0x0000, 0xddb5, 0xf2af, 0x7dbd, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xe4f8, 0xb5b4, 0x7dbe, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xb3a1, 0xbab2, 0xf2b1, 0xf2b0, 0xcca5, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7dc0, 0x0000, 0xf2b3, 0xf2b4, 0xf2b2,
        0x0000, 0xf2b5, 0x0000, 0x0000, 0xcbe2, 0x0000, 0x0000, 0x0000,
        0xf2b6, 0x0000, 0xb5fb, 0x0000, 0x0000, 0x0000, 0xfec0, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7dc1, 0x0000, 0x7dc2, 0xfec2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x7dc3, 0x7dc4, 0x0000, 0x0000, 0xcfa5,
        0x0000, 0x0000, 0xfec3, 0x7dc5, 0xf2b7, 0xfec4, 0x7dc6, 0x7dc7,
        0x0000, 0xfec1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xf2b9, 0xfec5, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0xfec6, 0x0000, 0x0000, 0x0000, 0xb0be, 0xfec7,
        0x0000, 0xf2ba, 0xcaab, 0xf2b8, 0x0000, 0x0000, 0xf2bb, 0xf2bc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfec8, 0xf2bd,
        0xf2be, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7dc8, 0xfec9,
        0xf2bf, 0x0000, 0xcbee, 0xbbad, 0x7dc9, 0xbafa, 0xc1af, 0x0000,
        0x0000, 0x7dca, 0x7dcd, 0x0000, 0xf2c0, 0x0000, 0x0000, 0x0000,
        0x7dce, 0xf2c3, 0x0000, 0x0000, 0x0000, 0x0000, 0x7dcf, 0x0000,
    ],
    [
        0xf2c1, 0xfeca, 0x0000, 0x0000, 0x0000, 0x0000, 0xf2c4, 0x7dd0,
        0x0000, 0xb8f1, 0xf2c2, 0x0000, 0x0000, 0x0000, 0xfecb, 0xf2c5,
        0x0000, 0xf2c6, 0xf2c7, 0x0000, 0xf2cb, 0x0000, 0xbbaa, 0x0000,
        0x7dd2, 0x0000, 0x0000, 0xc2e4, 0x0000, 0x7dd3, 0x0000, 0x0000,
        0x0000, 0xf2cc, 0xf2c9, 0xf2c8, 0xf2ca, 0xfecc, 0x0000, 0x7dd4,
        0xb7df, 0x0000, 0x7dd5, 0x7dd6, 0x0000, 0x0000, 0x7dd8, 0x7dd7,
        0xf2d0, 0xf2cf, 0xf2ce, 0x7dd1, 0x0000, 0xb0b3, 0x0000, 0x7ddc,
        0xfecd, 0x0000, 0x7dda, 0x0000, 0x0000, 0xfece, 0x0000, 0x0000,
    ],
    [
        0xfecf, 0x0000, 0x0000, 0x0000, 0xf2da, 0x0000, 0xf2d6, 0x0000,
        0xf2d7, 0xf2d3, 0xf2d9, 0x0000, 0xf2d5, 0xb3e2, 0x0000, 0x0000,
        0xcfcc, 0x0000, 0xf2d8, 0xf2d4, 0xf2d2, 0xf2d1, 0x7dde, 0x0000,
        0x7ddf, 0x7de0, 0x7de1, 0xf2dc, 0x0000, 0x7de2, 0x0000, 0x0000,
        0x0000, 0xf2df, 0x7de3, 0xfed0, 0xf2de, 0xf2dd, 0x0000, 0x7de4,
        0x0000, 0x7de5, 0x7de6, 0x0000, 0x0000, 0xc9c9, 0xf2db, 0xb0f3,
        0xf2e0, 0x7de8, 0xf2e2, 0x0000, 0x0000, 0x0000, 0x7de9, 0x7dea,
        0x0000, 0xb3ef, 0xf2cd, 0xb1b7, 0x0000, 0x0000, 0xf2e4, 0x0000,
    ],
    [
        0x0000, 0xfed1, 0x0000, 0x0000, 0x0000, 0x7deb, 0xf2e3, 0xf2e1,
        0xc3ad, 0x7dee, 0x7def, 0x0000, 0x0000, 0x0000, 0x0000, 0xfed2,
        0xfed3, 0x0000, 0xcbf0, 0xfed4, 0x7df1, 0x0000, 0x0000, 0xceda,
        0x7df2, 0x0000, 0xf2e5, 0x7df3, 0x7dec, 0x7df4, 0x0000, 0x7df5,
        0xf2e6, 0x0000, 0x0000, 0xfed5, 0x0000, 0xfed6, 0x0000, 0xf2e7,
        0x0000, 0x7df6, 0x7df7, 0x7df8, 0x0000, 0x7df9, 0x7dfa, 0x0000,
        0x7dfb, 0x0000, 0x7dfc, 0x0000, 0x0000, 0x7dfd, 0xf2e8, 0xfed7,
        0xf2e9, 0x0000, 0x7dfe, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc4bb, 0x7ea1, 0xf2ea,
        0x0000, 0xc8b7, 0x0000, 0xf2ef, 0xf2eb, 0x0000, 0x0000, 0x0000,
        0xf2ec, 0x0000, 0x7ea2, 0xcbb1, 0xccc4, 0x0000, 0xc6d0, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x7ea4, 0xf2f0, 0x0000, 0x0000, 0xf2f1, 0xc6be,
        0xf2ee, 0xf2ed, 0x0000, 0x7ea3, 0x0000, 0x0000, 0xb2aa, 0x0000,
        0x0000, 0x7ea6, 0xf2f9, 0x0000, 0x0000, 0xf2f8, 0x0000, 0x7ea7,
        0x7ea8, 0x0000, 0x0000, 0xb1f5, 0x0000, 0xfed8, 0xfed9, 0xf2f6,
        0x0000, 0x0000, 0x0000, 0xf2f5, 0x0000, 0x0000, 0xf2f3, 0x0000,
        0xb3fb, 0x0000, 0xf2f2, 0xbcb2, 0xb2a9, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x7eac, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xb9e3, 0x0000, 0x0000, 0xf2fc, 0xf2fb,
    ],
    [
        0x0000, 0xf2fa, 0x7eae, 0xfeda, 0xf2f7, 0x0000, 0xf2fd, 0xfedb,
        0xf2fe, 0x0000, 0x7eaf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf3a5, 0xf3a4, 0xfedc, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf3a6, 0x0000, 0x0000, 0xb1ad, 0xf3a1, 0xf3a2, 0x7eb0,
        0xb9f4, 0xccb9, 0x7eb1, 0xfedd, 0xf3a3, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7eb3, 0x0000, 0x7eb4, 0xcbb2, 0x0000, 0x0000, 0xf3ab,
        0xfede, 0x0000, 0xf3a7, 0x7eb6, 0x0000, 0x0000, 0x7eb7, 0x7eb8,
        0x0000, 0x0000, 0xf3ac, 0x0000, 0xfedf, 0x0000, 0x7eb9, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x7eba, 0x0000, 0x0000, 0xf3a9,
        0x0000, 0xf3a8, 0xfee0, 0x0000, 0x0000, 0x7ebb, 0x0000, 0xb7dc,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfee1, 0x0000,
        0x0000, 0x7ebc, 0xf3ad, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x7ebd, 0x0000, 0x0000, 0xf3ae, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf3af, 0x0000, 0xf3aa, 0xfee3, 0x0000, 0x0000, 0xf2f4,
        0x0000, 0x0000, 0xf3b0, 0x0000, 0xc4e1, 0x7ebf, 0x0000, 0x0000,
        0xf3b4, 0x7ec0, 0xf3b5, 0xf3b3, 0xfee4, 0x7ec1, 0x0000, 0x7ebe,
    ],
    [
        0xfee2, 0xf3b2, 0xf3b8, 0x7ec2, 0xf3b1, 0x0000, 0xf3b6, 0x7ec3,
        0x0000, 0x7ec4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf3b7,
        0x0000, 0x0000, 0x0000, 0xf3ba, 0x0000, 0x0000, 0x7ec5, 0xfee5,
        0x0000, 0xf3b9, 0x7ec6, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ec7,
        0x7ec8, 0x0000, 0x0000, 0x7ec9, 0x0000, 0x0000, 0xf3bc, 0xfee7,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf3bd, 0x0000, 0xf3be,
        0x0000, 0x0000, 0xcfc9, 0x0000, 0x7eca, 0x0000, 0x0000, 0x0000,
        0xf3bb, 0xc2eb, 0xbaed, 0x0000, 0x0000, 0xf3bf, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x7ecd, 0x0000, 0x0000, 0x0000, 0x0000, 0xfee8,
        0x0000, 0x0000, 0x7ecc, 0x0000, 0x0000, 0x7ece, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfee9, 0x0000, 0x0000,
        0x0000, 0x7ecf, 0xf3c0, 0xf3c1, 0x7ed0, 0x7ed1, 0xf3c2, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf3c3, 0x0000, 0x0000,
        0xb8b4, 0xf3c4, 0x0000, 0x7ed2, 0xfeea, 0xf3c5, 0x0000, 0xbcaf,
    ],
    [
        0x7ed4, 0xf3c6, 0x0000, 0x0000, 0x0000, 0x7ed5, 0x0000, 0x0000,
        0xf3c7, 0x0000, 0x0000, 0xf3c8, 0xf3c9, 0x0000, 0x0000, 0x0000,
        0x0000, 0xf3cc, 0xf3ca, 0xcfbc, 0x0000, 0xf3cb, 0x0000, 0xceef,
        0x0000, 0x0000, 0x0000, 0x7ed6, 0x0000, 0xf3cd, 0xfeeb, 0xcedb,
        0x0000, 0x0000, 0x0000, 0x0000, 0xfeec, 0xf3ce, 0xc7fe, 0x0000,
        0x7ed7, 0xf3cf, 0xf3d1, 0x0000, 0xfeed, 0xf3d2, 0x0000, 0xfeee,
        0x0000, 0x0000, 0x0000, 0x0000, 0xfeef, 0xfef0, 0x0000, 0x0000,
        0xf3d0, 0xb9ed, 0xcccd, 0xcbe3, 0xd6f7, 0x7ed9, 0xdde0, 0xcbfb,
    ],
    [
        0x0000, 0x0000, 0x0000, 0xfef1, 0xb2ab, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf3d4, 0xb5d0, 0xf3d5, 0xf3d6,
        0xf3d7, 0xfef2, 0xb9f5, 0x0000, 0xf3d8, 0x0000, 0x0000, 0x0000,
        0xe0d4, 0xccdb, 0x0000, 0xc2e3, 0xf3d9, 0xf3db, 0xf3da, 0x7edb,
        0xf3dc, 0x0000, 0x0000, 0x0000, 0x0000, 0xf3dd, 0x0000, 0x7edc,
        0xf3de, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7edd, 0xf3df,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf3e0, 0x0000, 0xf3e1, 0xf3e2,
        0x0000, 0xf3e3, 0x0000, 0xf3e4, 0xf3e5, 0xf3e6, 0x0000, 0x7ede,
    ],
    [
        0x0000, 0x0000, 0x7edf, 0x7ee1, 0x0000, 0x0000, 0x0000, 0xf3e7,
        0xf3e8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xc5a4, 0x0000,
        0xfef3, 0x0000, 0x0000, 0xb8dd, 0x0000, 0xf3ea, 0x0000, 0x7ee2,
        0x0000, 0x7ee3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xc1cd, 0xf3eb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf3ec, 0x0000, 0x0000, 0x7ee4,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7ee5,
        0x0000, 0xfef4, 0x7ee6, 0xc9a1, 0x0000, 0x7ee7, 0xf3ed, 0x0000,
    ],
    [
        0x0000, 0x7ee8, 0x0000, 0x0000, 0x0000, 0x7ee9, 0x7eea, 0x0000,
        0x0000, 0x0000, 0xf3ee, 0xe3b7, 0x0000, 0x0000, 0xecda, 0xf0ed,
        0x0000, 0x0000, 0xf3ef, 0x7eeb, 0xf3f0, 0x7eec, 0x0000, 0xfef5,
        0x7eed, 0x0000, 0x0000, 0x0000, 0x0000, 0x7eef, 0x0000, 0xf3f2,
        0xf3f3, 0xf3f4, 0xcef0, 0xf3f1, 0x0000, 0x0000, 0xf3f5, 0xf3f6,
        0x0000, 0x7ef1, 0xf3f8, 0x0000, 0xf3f7, 0x7ef3, 0x0000, 0x0000,
        0x7ef4, 0x0000, 0xf3fa, 0x0000, 0x0000, 0x7ef5, 0xf3fb, 0xf3f9,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xceb6, 0x0000, 0x0000,
        0xfef6, 0x0000, 0x0000, 0x0000, 0xfef7, 0xf3fc, 0x0000, 0xfef8,
        0x0000, 0x0000, 0x0000, 0x0000, 0xf3fd, 0xe3d4, 0x0000, 0x0000,
        0xf3fe, 0x0000, 0xfef9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

static THREE_EF_ROW: [u8; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 2, 0, 3, 4, 5, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 7, 8, 9, 10,
];

static THREE_EF: [[u16; 64]; 10] = [
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xf6bb, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf4ae, 0xf5ce, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xfbcf, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xf6c9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xfea4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0xfddd, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xafcb,
        0xafd7, 0xcff2, 0x0000, 0x2ef9, 0xf5fa, 0xf7da, 0xf7ef, 0x0000,
        0x0000, 0xf9bc, 0xf9bd, 0xf9c1, 0x0000, 0x0000, 0x0000, 0xfbba,
        0x77b8, 0x77c5, 0xfcae, 0x0000, 0x79ee, 0x0000, 0xfcea, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0xaeb8, 0xaec9, 0xaed0, 0xaee3, 0xaee8, 0xaeee, 0xafac, 0xafaf,
        0xafb6, 0xafda, 0xafde, 0xcfe1, 0xcfe2, 0xf4d0, 0xf4dc, 0xf4de,
    ],
    [
        0xf4e1, 0xf5a8, 0xf5ab, 0xf5c3, 0xf5e5, 0xf6e9, 0xf6f7, 0xf7a5,
        0xf7d5, 0x70a9, 0xf8a5, 0xf9a7, 0xf9b3, 0xf9b4, 0xf9b7, 0xf9b8,
        0xf9b9, 0xf9bb, 0xf9bf, 0xf9c0, 0xf9cd, 0xf9d1, 0xf9e4, 0xfaae,
        0x74d0, 0xfab3, 0xfaba, 0xfac4, 0xfad8, 0x75f4, 0x75f5, 0xfba7,
        0xfbef, 0xfbf9, 0xfcaf, 0xfcb0, 0xfcb8, 0xfcbd, 0x79e9, 0xfcd9,
        0xfde3, 0xfdf6, 0xfdfb, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xa3be, 0xa3bd, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0xa1aa, 0xa2b0, 0xa1f4, 0xa1f0, 0xa1f3, 0xa1f5, 0xa2af,
        0xa1ca, 0xa1cb, 0xa1f6, 0xa1dc, 0xa1a4, 0xa2b1, 0xa1a5, 0xa1bf,
        0xa3b0, 0xa3b1, 0xa3b2, 0xa3b3, 0xa3b4, 0xa3b5, 0xa3b6, 0xa3b7,
        0xa3b8, 0xa3b9, 0xa1a7, 0xa1a8, 0xa1e3, 0xa1e1, 0xa1e4, 0xa1a9,
        0xa1f7, 0xa3c1, 0xa3c2, 0xa3c3, 0xa3c4, 0xa3c5, 0xa3c6, 0xa3c7,
        0xa3c8, 0xa3c9, 0xa3ca, 0xa3cb, 0xa3cc, 0xa3cd, 0xa3ce, 0xa3cf,
        0xa3d0, 0xa3d1, 0xa3d2, 0xa3d3, 0xa3d4, 0xa3d5, 0xa3d6, 0xa3d7,
        0xa3d8, 0xa3d9, 0xa3da, 0xa1ce, 0xa1c0, 0xa1cf, 0xa1b0, 0xa1b2,
    ],
    [
        0xa1ae, 0xa3e1, 0xa3e2, 0xa3e3, 0xa3e4, 0xa3e5, 0xa3e6, 0xa3e7,
        0xa3e8, 0xa3e9, 0xa3ea, 0xa3eb, 0xa3ec, 0xa3ed, 0xa3ee, 0xa3ef,
        0xa3f0, 0xa3f1, 0xa3f2, 0xa3f3, 0xa3f4, 0xa3f5, 0xa3f6, 0xa3f7,
        0xa3f8, 0xa3f9, 0xa3fa, 0xa1d0, 0xa1c3, 0xa1d1, 0xa2b2, 0x0000,
        0x0000, 0x8ea1, 0x8ea2, 0x8ea3, 0x8ea4, 0x8ea5, 0x8ea6, 0x8ea7,
        0x8ea8, 0x8ea9, 0x8eaa, 0x8eab, 0x8eac, 0x8ead, 0x8eae, 0x8eaf,
        0x8eb0, 0x8eb1, 0x8eb2, 0x8eb3, 0x8eb4, 0x8eb5, 0x8eb6, 0x8eb7,
        0x8eb8, 0x8eb9, 0x8eba, 0x8ebb, 0x8ebc, 0x8ebd, 0x8ebe, 0x8ebf,
    ],
    [
        0x8ec0, 0x8ec1, 0x8ec2, 0x8ec3, 0x8ec4, 0x8ec5, 0x8ec6, 0x8ec7,
        0x8ec8, 0x8ec9, 0x8eca, 0x8ecb, 0x8ecc, 0x8ecd, 0x8ece, 0x8ecf,
        0x8ed0, 0x8ed1, 0x8ed2, 0x8ed3, 0x8ed4, 0x8ed5, 0x8ed6, 0x8ed7,
        0x8ed8, 0x8ed9, 0x8eda, 0x8edb, 0x8edc, 0x8edd, 0x8ede, 0x8edf,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0xa1b1, 0x0000, 0xa1ef, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

static FOUR_A0: [(u16, u16); 29] = [
    (0x808b, 0xaea2), (0x8289, 0x21a1), (0x82a2, 0x21ab), (0x82a4, 0x21ae),
    (0x86a2, 0x21b6), (0x8893, 0x21c6), (0x8cab, 0x21f0), (0x8db1, 0x21f9),
    (0x8e81, 0x21f7), (0x8fb9, 0x23a2), (0x918a, 0x23a5), (0x9489, 0x23a7),
    (0x9796, 0x23b1), (0x98a8, 0x23b2), (0x9d8f, 0x23b8), (0xa087, 0x23bf),
    (0xa0ba, 0x23c1), (0xa2b9, 0x23ca), (0xa5bc, 0x23d2), (0xa69d, 0x23d3),
    (0xab93, 0x23d9), (0xac9d, 0x23dc), (0xae9f, 0xcfd4), (0xb585, 0x23f7),
    (0xb7a1, 0x24aa), (0xb9a4, 0x24ba), (0xb9ad, 0x24b2), (0xba95, 0x24b1),
    (0xbd9f, 0x24bd),
];

static FOUR_A1: [(u16, u16); 36] = [
    (0x8881, 0x24d9), (0x88bd, 0xafc2), (0x8995, 0x24dc), (0x89b4, 0x24e3),
    (0x89bb, 0x24de), (0x8b97, 0x24eb), (0x8ba4, 0x24ea), (0x8bbd, 0x24f2),
    (0x8c9b, 0xafcc), (0x8cb6, 0x24f4), (0x8d84, 0x24f5), (0x8f84, 0x25a5),
    (0x91ad, 0x25b2), (0x91ae, 0xafe0), (0x9797, 0x25be), (0x9987, 0x25c7),
    (0x9ab4, 0xcfe3), (0x9c86, 0x25d5), (0x9d82, 0x25d6), (0xa2bd, 0xaffb),
    (0xa783, 0x25fe), (0xb196, 0x28b0), (0xb4ad, 0x28b7), (0xb585, 0x28b8),
    (0xb5a2, 0x28bb), (0xb5b8, 0x28ba), (0xb692, 0x28c5), (0xb69c, 0x28c0),
    (0xb6a1, 0x28bf), (0xb6b7, 0x28c8), (0xb7a0, 0x28ca), (0xb8b3, 0x28cb),
    (0xb8b4, 0xcfee), (0xbc9e, 0x28db), (0xbdb6, 0x28e6), (0xbfba, 0x28ec),
];

static FOUR_A2: [(u16, u16); 16] = [
    (0x85bb, 0x2ca2), (0x8898, 0x7ed3), (0x8c9e, 0x2cab), (0x8ead, 0x2cb0),
    (0x9bb3, 0x2cd0), (0xa19b, 0x2ce5), (0xa2ab, 0x2ced), (0xa68f, 0x2cf2),
    (0xaab8, 0x2da4), (0xad86, 0x2db2), (0xad8f, 0x2da9), (0xad90, 0x2daa),
    (0xaea6, 0x2db5), (0xb09d, 0x2db4), (0xb0a4, 0x2db9), (0xb7a1, 0x2dd6),
];

static FOUR_A3: [(u16, u16); 43] = [
    (0x86b6, 0x2ea4), (0x8783, 0x2dfd), (0x8784, 0xf5ba), (0x87b5, 0x2ea3),
    (0x8db2, 0x2eba), (0x8f90, 0x2ec2), (0x8f92, 0x2ebd), (0x8f93, 0x2ebc),
    (0x8f95, 0x2ec4), (0x8f9a, 0x2ec7), (0x8f9f, 0x2ec9), (0x8fa4, 0x2ec3),
    (0x918a, 0x2ed5), (0x918b, 0x2ed7), (0x9191, 0x2ed6), (0x91a5, 0x2edb),
    (0x93a4, 0x2ef7), (0x959a, 0x2ef8), (0x9694, 0x2faa), (0x9784, 0xf5f2),
    (0x98b8, 0x2fc2), (0x98b9, 0x2fbf), (0x98ba, 0x2fc3), (0x9987, 0x2fc0),
    (0x9c8c, 0x2fd9), (0x9c9c, 0x2fce), (0x9cbf, 0xf6a9), (0x9da3, 0xf6b2),
    (0x9da4, 0x2fe1), (0x9fa7, 0x2fea), (0x9fbf, 0x2fe9), (0xa0a4, 0x2ff0),
    (0xa0bd, 0x2ff5), (0xaa98, 0x6ea3), (0xb1bf, 0x6eb4), (0xb3be, 0xf6e0),
    (0xb480, 0x6ec9), (0xb48e, 0x74f5), (0xb580, 0x6edc), (0xb793, 0x6ee0),
    (0xb7b9, 0x6edf), (0xb7ba, 0x6ede), (0xbdbe, 0x6fb2),
];

static FOUR_A4: [(u16, u16); 18] = [
    (0x8296, 0x6fc7), (0x8483, 0x6fcd), (0x8786, 0x6fe1), (0x87be, 0x6fe4),
    (0x8ebc, 0x70a2), (0x98a9, 0x70b3), (0x9aa5, 0x70b9), (0x9fb1, 0xf7ec),
    (0xa296, 0x70d3), (0xa98d, 0x70fb), (0xad96, 0x71ae), (0xadaf, 0x71b0),
    (0xb096, 0x71b5), (0xb494, 0x71c4), (0xb88e, 0x71dd), (0xb8b7, 0x71e1),
    (0xb9aa, 0x71e6), (0xba8b, 0x71e9),
];

static FOUR_A5: [(u16, u16); 37] = [
    (0x818a, 0x71f5), (0x8195, 0x71f7), (0x84a2, 0x71fa), (0x86a9, 0x72a1),
    (0x878d, 0x72a4), (0x87a5, 0x72a3), (0x889e, 0x72a8), (0x898c, 0x72ac),
    (0x90ae, 0x72bd), (0x928e, 0xf8fe), (0x9399, 0x72c8), (0x948e, 0xf9a9),
    (0x96a7, 0x72db), (0x9db1, 0xf9c7), (0x9ea9, 0x72f5), (0x9eb4, 0x72f6),
    (0xa784, 0xf9d4), (0xa794, 0x73b2), (0xaba3, 0x73be), (0xaba4, 0x73bd),
    (0xabb1, 0x73c0), (0xaeb2, 0x73d2), (0xb18b, 0x73dd), (0xb1a4, 0x73de),
    (0xb6a1, 0xf9ee), (0xb8ae, 0x73f3), (0xb996, 0x73f4), (0xb9a2, 0x73f7),
    (0xb9a5, 0x73f5), (0xbb82, 0x73fd), (0xbb98, 0x73fb), (0xbba8, 0x74a2),
    (0xbca3, 0x74a4), (0xbd9c, 0x74a7), (0xbf94, 0x74af), (0xbfa0, 0x74ae),
    (0xbfbb, 0x74b5),
];

static FOUR_A6: [(u16, u16); 30] = [
    (0x808c, 0x74b4), (0x8097, 0x74bd), (0x81a0, 0x74c2), (0x83ad, 0x74cf),
    (0x89b0, 0x74e9), (0x8a86, 0x74eb), (0x8d8c, 0x74f2), (0x9082, 0x74f9),
    (0x99be, 0x75b5), (0x9ab0, 0x75ba), (0x9c9d, 0x75c6), (0xa39d, 0x75d6),
    (0xa3aa, 0x75d8), (0xa591, 0x75da), (0xa5af, 0x75dd), (0xa79d, 0x75df),
    (0xa89e, 0x75e3), (0xa998, 0x75ea), (0xaa8c, 0x75f0), (0xaab7, 0x75f3),
    (0xabbf, 0xfadd), (0xb0a9, 0x25c4), (0xb1b3, 0x76c4), (0xb39d, 0x76ce),
    (0xb980, 0xfbb3), (0xb9a5, 0x76dd), (0xbe94, 0x76f5), (0xbfb6, 0x77a1),
    (0xbfb7, 0x77a2), (0xbfb8, 0x76fe),
];

static FOUR_A7: [(u16, u16); 25] = [
    (0x83b4, 0xfbc9), (0x848d, 0x77b3), (0x84b9, 0x77b6), (0x8f9a, 0x77e5),
    (0x8f9b, 0x77e4), (0x8fbe, 0x77eb), (0x9090, 0x77ee), (0x9189, 0x77f3),
    (0x9894, 0x78aa), (0x9895, 0x78a9), (0x98b1, 0x78ac), (0x9a84, 0xfbec),
    (0x9a93, 0x78b4), (0x9c8e, 0x78bc), (0x9ca3, 0x78be), (0x9d92, 0x78c2),
    (0xa685, 0x78d6), (0xaa84, 0x78e3), (0xaeb3, 0x78f7), (0xaebe, 0x78f9),
    (0xaf87, 0x78fa), (0xb2b8, 0x79a5), (0xb6a0, 0x79af), (0xb890, 0x79b2),
    (0xbeb7, 0x79b9),
];

static FOUR_A8: [(u16, u16); 39] = [
    (0x828a, 0x79c2), (0x82bb, 0x79c8), (0x89b7, 0xfcc9), (0x8a82, 0x79d9),
    (0x8bb3, 0x79de), (0x8f8d, 0xfcd1), (0x908c, 0x79e6), (0x9195, 0x79eb),
    (0x95ab, 0x79fa), (0x9788, 0x79fe), (0x9789, 0x7aa1), (0x9b97, 0x7aac),
    (0x9bba, 0x7aaf), (0xa586, 0x7ad0), (0xa589, 0x7acf), (0xa5ab, 0x7ad7),
    (0xa687, 0x7ae5), (0xa688, 0x7ae6), (0xa6ba, 0x7af1), (0xa6bb, 0x7af2),
    (0xa89e, 0x7afe), (0xa8a9, 0x7ba1), (0xa983, 0x7bad), (0xa9b1, 0x7bac),
    (0xaa99, 0x7bb6), (0xab8d, 0x7bb7), (0xab9d, 0x7bbe), (0xaba4, 0x7bbd),
    (0xaf81, 0x7bce), (0xafaf, 0x7bcf), (0xb490, 0x7bd7), (0xb5b1, 0x7bda),
    (0xb7bb, 0x7bdc), (0xb89f, 0x7bdd), (0xb8b6, 0x7be1), (0xba89, 0x7be5),
    (0xbbab, 0x7be7), (0xbcb2, 0x7be9), (0xbfb8, 0x7bf1),
];

static FOUR_A9: [(u16, u16); 19] = [
    (0x8aa0, 0x7ca2), (0x8ab1, 0x7ca3), (0x9290, 0x7cb8), (0x978f, 0x7cc2),
    (0x99bf, 0x7ccc), (0x9bb0, 0x7cd6), (0x9c99, 0x7cd9), (0x9d90, 0x7cdd),
    (0xa386, 0x7cf6), (0xa9b2, 0x7dac), (0xb79b, 0x7dcb), (0xb895, 0x7dd9),
    (0xb8bd, 0x7dcc), (0xb989, 0x7ddd), (0xba8a, 0x7ddb), (0xbb84, 0x7de7),
    (0xbb9b, 0x7df0), (0xbba9, 0x7ded), (0xbf8e, 0x7ea5),
];

static FOUR_AA: [(u16, u16); 11] = [
    (0x809a, 0x7eab), (0x80af, 0x7ea9), (0x8282, 0x7eb5), (0x83b9, 0x7eb2),
    (0x8690, 0xfee6), (0x8e8c, 0x7ed8), (0x90b7, 0x7eda), (0x97b1, 0x7eee),
    (0x9882, 0x7ef0), (0x989a, 0x7ef2), (0x9ab2, 0x7ef6),
];


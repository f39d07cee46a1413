// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! End-to-end conversion tests driving the public handle interface the
//! way a streaming caller would.

use jconv::{ConvError, ConvHandle, Converted};

/// Runs a whole buffer through `conv`, growing the output as needed.
fn convert_all(conv: &mut ConvHandle, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = [0u8; 8];
    let mut pos = 0;
    while pos < input.len() {
        let (done, err) = conv.convert(&input[pos..], &mut buf);
        pos += done.consumed;
        out.extend_from_slice(&buf[..done.written]);
        match err {
            None | Some(ConvError::OutputNotEnough) => {}
            Some(e) => panic!("conversion failed at offset {}: {}", pos, e),
        }
    }
    out
}

fn recode(to: &str, from: &str, input: &[u8]) -> Vec<u8> {
    let mut conv = ConvHandle::open(to, from).unwrap();
    convert_all(&mut conv, input)
}

#[test]
fn test_utf8_to_shift_jis() {
    assert_eq!(recode("shift_jis", "utf-8", "日本語".as_bytes()),
               [0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea]);
    assert_eq!(recode("shift_jis", "utf-8", "abc ABC".as_bytes()), b"abc ABC");
    // halfwidth kana land in the single-byte range
    assert_eq!(recode("shift_jis", "utf-8", "ｱｲｳ".as_bytes()), [0xb1, 0xb2, 0xb3]);
}

#[test]
fn test_shift_jis_to_utf8() {
    assert_eq!(recode("utf-8", "shift_jis", &[0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea]),
               "日本語".as_bytes());
    assert_eq!(recode("utf-8", "sjis", &[0xb1, 0xb2, 0xb3]), "ｱｲｳ".as_bytes());
}

#[test]
fn test_euc_jp_both_ways() {
    assert_eq!(recode("euc-jp", "utf-8", "あいう".as_bytes()),
               [0xa4, 0xa2, 0xa4, 0xa4, 0xa4, 0xa6]);
    assert_eq!(recode("utf-8", "euc-jp", &[0xa4, 0xa2, 0xa4, 0xa4, 0xa4, 0xa6]),
               "あいう".as_bytes());
    assert_eq!(recode("shift_jis", "euc-jp", &[0xa4, 0xa2]), [0x82, 0xa0]);
    assert_eq!(recode("euc-jp", "shift_jis", &[0x82, 0xa0]), [0xa4, 0xa2]);
}

#[test]
fn test_plane2_end_to_end() {
    // U+20089, in plane 2 of JIS X 0213
    assert_eq!(recode("euc-jp", "utf-8", "\u{20089}".as_bytes()), [0x8f, 0xa1, 0xa1]);
    assert_eq!(recode("utf-8", "euc-jp", &[0x8f, 0xa1, 0xa1]), "\u{20089}".as_bytes());
    assert_eq!(recode("shift_jis", "utf-8", "\u{20089}".as_bytes()), [0xf0, 0x40]);
    assert_eq!(recode("utf-8", "shift_jis", &[0xf0, 0x40]), "\u{20089}".as_bytes());
}

#[test]
fn test_substitution_per_target() {
    // U+0800 has no JIS X 0213 mapping
    assert_eq!(recode("euc-jp", "utf-8", "\u{800}".as_bytes()), [0xa2, 0xae]);
    assert_eq!(recode("shift_jis", "utf-8", "\u{800}".as_bytes()), [0x81, 0xac]);
    // a JIS X 0212-only character substitutes toward UTF-8 as well
    assert_eq!(recode("utf-8", "euc-jp", &[0x8f, 0xa2, 0xa1]), "\u{3013}".as_bytes());
}

#[test]
fn test_mixed_text_round_trip() {
    let text = "Hello, 世界! ｶﾀｶﾅ and あいう... \u{20089}";
    let sjis = recode("shift_jis", "utf-8", text.as_bytes());
    let eucj = recode("euc-jp", "shift_jis", &sjis);
    let back = recode("utf-8", "euc-jp", &eucj);
    assert_eq!(back, text.as_bytes());
}

#[test]
fn test_streaming_split_input() {
    // feed a three-character UTF-8 string one byte at a time, carrying
    // unconsumed bytes forward as a streaming caller must
    let input = "日本語".as_bytes();
    let mut conv = ConvHandle::open("euc-jp", "utf-8").unwrap();
    let mut out = Vec::new();
    let mut carry = Vec::new();
    for &b in input {
        carry.push(b);
        let mut buf = [0u8; 8];
        let (done, err) = conv.convert(&carry, &mut buf);
        out.extend_from_slice(&buf[..done.written]);
        carry.drain(..done.consumed);
        assert!(matches!(err, None | Some(ConvError::InputNotEnough)));
    }
    assert!(carry.is_empty());
    assert_eq!(out, [0xc6, 0xfc, 0xcb, 0xdc, 0xb8, 0xec]);
}

#[test]
fn test_streaming_tiny_output() {
    // a one-byte output buffer forces repeated OutputNotEnough stops,
    // but the conversion still makes progress each round
    let input = "日本語".as_bytes();
    let mut conv = ConvHandle::open("shift_jis", "utf-8").unwrap();
    let mut out = Vec::new();
    let mut pos = 0;
    let mut stalls = 0;
    while pos < input.len() {
        let mut buf = [0u8; 2];
        let (done, err) = conv.convert(&input[pos..], &mut buf);
        pos += done.consumed;
        out.extend_from_slice(&buf[..done.written]);
        match err {
            None => {}
            Some(ConvError::OutputNotEnough) => stalls += 1,
            Some(e) => panic!("unexpected error: {}", e),
        }
        assert!(stalls < 100, "no progress");
    }
    assert_eq!(out, [0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea]);
}

#[test]
fn test_illegal_sequence_reports_position() {
    let mut conv = ConvHandle::open("utf-8", "euc-jp").unwrap();
    let mut buf = [0u8; 16];
    // A4 A0 is a malformed EUC-JP pair after one good character
    let (done, err) = conv.convert(&[0xa4, 0xa2, 0xa4, 0xa0], &mut buf);
    assert_eq!(err, Some(ConvError::IllegalSequence));
    assert_eq!(done, Converted { consumed: 2, written: 3 });
    assert_eq!(&buf[..3], "あ".as_bytes());
    // the handle survives the error and converts what follows
    let (done, err) = conv.convert(&[0xa4, 0xa4], &mut buf);
    assert_eq!(err, None);
    assert_eq!(&buf[..done.written], "い".as_bytes());
}

#[test]
fn test_alias_labels_open_the_same_conversion() {
    for label in ["euc-jp", "EUC-JP", "eucJP", " euc_jp ", "euc-jisx0213"] {
        assert_eq!(recode("utf-8", label, &[0xa4, 0xa2]), "あ".as_bytes());
    }
    for label in ["shift_jis", "Shift-JIS", "SJIS", "shiftjis"] {
        assert_eq!(recode("utf-8", label, &[0x82, 0xa0]), "あ".as_bytes());
    }
}

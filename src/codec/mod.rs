// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! Directional converters among the native encodings, with EUC-JP as the
//! pivot representation.
//!
//! Each converter consumes exactly one source character per call and obeys
//! a uniform contract: `Ok` reports the consumed and written byte counts
//! (substitutions included), `Err` reports one of the three sentinels with
//! nothing consumed and nothing written.

pub use self::sjis::{eucj_to_sjis, sjis_to_eucj};
pub use self::utf8::{eucj_to_utf8, utf8_to_eucj};

pub mod sjis;
pub mod utf8;

use crate::types::{ConvError, ConvResult, Converted};

/// Substitution character for single-byte contexts, common to all
/// encodings.
pub const SUBST1: u8 = b'?';

/// The geta mark in EUC-JP, substituted for unmappable multi-byte
/// characters.
pub const EUCJ_SUBST: [u8; 2] = [0xa2, 0xae];

/// The geta mark in Shift-JIS.
pub const SJIS_SUBST: [u8; 2] = [0x81, 0xac];

/// The geta mark (U+3013) in UTF-8.
pub const UTF8_SUBST: [u8; 3] = [0xe3, 0x80, 0x93];

/// Writes a fixed byte sequence after checking the output room.
pub(crate) fn emit(seq: &[u8], consumed: usize, output: &mut [u8]) -> ConvResult {
    if output.len() < seq.len() {
        return Err(ConvError::OutputNotEnough);
    }
    output[..seq.len()].copy_from_slice(seq);
    Ok(Converted { consumed, written: seq.len() })
}

/// Returns `InputNotEnough` unless `width` bytes are available. Called
/// before any classification of the trailing bytes, so starvation takes
/// precedence over malformedness.
pub(crate) fn need(input: &[u8], width: usize) -> Result<(), ConvError> {
    if input.len() < width {
        Err(ConvError::InputNotEnough)
    } else {
        Ok(())
    }
}

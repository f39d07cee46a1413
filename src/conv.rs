// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! Conversion handles.
//!
//! A `ConvHandle` is opened for a (target, source) pair of encoding labels
//! and then fed byte slices. Whenever both labels name an encoding known
//! to this crate the handle converts natively, dispatching on the two
//! encoding families; pairs that do not share EUC-JP as one endpoint are
//! chained through an EUC-JP pivot character by character. Unknown labels
//! can be served by a caller-supplied delegate instead.

use crate::codec::{eucj_to_sjis, eucj_to_utf8, sjis_to_eucj, utf8_to_eucj};
use crate::label::{family_from_label, Family};
use crate::types::{ConvError, ConvResult, Converted};

/// An external converter serving encoding pairs this crate has no native
/// support for.
pub trait Delegate {
    /// Converts a prefix of `input` into `output`, with the same contract
    /// as [`ConvHandle::convert`].
    fn convert(&mut self, input: &[u8], output: &mut [u8]) -> (Converted, Option<ConvError>);

    /// Releases any resources held by the converter.
    fn close(&mut self);
}

enum Engine {
    Native { from: Family, to: Family },
    Delegate(Box<dyn Delegate>),
    Closed,
}

/// An open conversion from one named encoding to another.
pub struct ConvHandle {
    engine: Engine,
    to: String,
    from: String,
}

impl ConvHandle {
    /// Opens a conversion from the encoding labelled `from` to the one
    /// labelled `to`, or returns `None` when either label is unknown.
    pub fn open(to: &str, from: &str) -> Option<ConvHandle> {
        ConvHandle::open_with(to, from, |_, _| None)
    }

    /// Opens a conversion, consulting `fallback` for label pairs without
    /// native support. The fallback receives the `to` and `from` labels
    /// and may return a delegate converter to serve them.
    pub fn open_with<F>(to: &str, from: &str, fallback: F) -> Option<ConvHandle>
    where
        F: FnOnce(&str, &str) -> Option<Box<dyn Delegate>>,
    {
        let engine = match (family_from_label(from), family_from_label(to)) {
            (Some(from), Some(to)) => Engine::Native { from, to },
            _ => Engine::Delegate(fallback(to, from)?),
        };
        Some(ConvHandle { engine, to: to.to_owned(), from: from.to_owned() })
    }

    /// The `(to, from)` labels this handle was opened with.
    pub fn names(&self) -> (&str, &str) {
        (&self.to, &self.from)
    }

    /// Converts as much of `input` into `output` as fits, returning the
    /// byte counts together with the error that stopped the conversion,
    /// if any. Progress made before the stopping point is kept: on
    /// `OutputNotEnough` the caller can drain `output` and call again
    /// with the unconsumed remainder, and on `InputNotEnough` with the
    /// remainder plus more data.
    pub fn convert(&mut self, input: &[u8], output: &mut [u8]) -> (Converted, Option<ConvError>) {
        let (from, to) = match self.engine {
            Engine::Native { from, to } => (from, to),
            Engine::Delegate(ref mut d) => return d.convert(input, output),
            Engine::Closed => {
                return (Converted { consumed: 0, written: 0 }, Some(ConvError::IllegalSequence))
            }
        };

        let mut consumed = 0;
        let mut written = 0;
        while consumed < input.len() {
            match step(from, to, &input[consumed..], &mut output[written..]) {
                Ok(one) => {
                    consumed += one.consumed;
                    written += one.written;
                }
                Err(err) => return (Converted { consumed, written }, Some(err)),
            }
        }
        (Converted { consumed, written }, None)
    }

    /// Closes the handle, shutting down the delegate if one is in use.
    /// Closing twice is harmless, and any later `convert` call fails.
    pub fn close(&mut self) {
        if let Engine::Delegate(ref mut d) = self.engine {
            d.close();
            self.engine = Engine::Closed;
        } else if let Engine::Native { .. } = self.engine {
            self.engine = Engine::Closed;
        }
    }
}

impl Drop for ConvHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Converts exactly one character for the given family pair.
fn step(from: Family, to: Family, input: &[u8], output: &mut [u8]) -> ConvResult {
    match (from, to) {
        (Family::ShiftJis, Family::EucJp) => sjis_to_eucj(input, output),
        (Family::EucJp, Family::ShiftJis) => eucj_to_sjis(input, output),
        (Family::Utf8, Family::EucJp) => utf8_to_eucj(input, output),
        (Family::EucJp, Family::Utf8) => eucj_to_utf8(input, output),
        (Family::ShiftJis, Family::Utf8) => via_pivot(sjis_to_eucj, eucj_to_utf8, input, output),
        (Family::Utf8, Family::ShiftJis) => via_pivot(utf8_to_eucj, eucj_to_sjis, input, output),
        (Family::EucJp, Family::EucJp)
        | (Family::ShiftJis, Family::ShiftJis)
        | (Family::Utf8, Family::Utf8) => copy_through(input, output),
    }
}

/// Chains two converters through an EUC-JP pivot. One character of any
/// supported encoding pivots through at most a handful of EUC-JP bytes,
/// so a small stack buffer suffices.
fn via_pivot(
    first: fn(&[u8], &mut [u8]) -> ConvResult,
    second: fn(&[u8], &mut [u8]) -> ConvResult,
    input: &[u8],
    output: &mut [u8],
) -> ConvResult {
    let mut pivot = [0u8; 8];
    let head = first(input, &mut pivot)?;
    let tail = second(&pivot[..head.written], output)?;
    Ok(Converted { consumed: head.consumed, written: tail.written })
}

/// The identity conversion, copied without validation.
fn copy_through(input: &[u8], output: &mut [u8]) -> ConvResult {
    if input.is_empty() {
        return Err(ConvError::InputNotEnough);
    }
    if output.is_empty() {
        return Err(ConvError::OutputNotEnough);
    }
    let n = input.len().min(output.len());
    output[..n].copy_from_slice(&input[..n]);
    Ok(Converted { consumed: n, written: n })
}

#[cfg(test)]
mod tests {
    use super::{ConvHandle, Delegate};
    use crate::types::{ConvError, Converted};

    #[test]
    fn test_open_known_pairs() {
        assert!(ConvHandle::open("utf-8", "euc-jp").is_some());
        assert!(ConvHandle::open("Shift_JIS", "UTF8").is_some());
        assert!(ConvHandle::open("eucjp", "eucjp").is_some());
        assert!(ConvHandle::open("utf-8", "iso-2022-jp").is_none());
        assert!(ConvHandle::open("latin1", "utf-8").is_none());
    }

    #[test]
    fn test_names() {
        let h = ConvHandle::open("utf-8", "euc-jp").unwrap();
        assert_eq!(h.names(), ("utf-8", "euc-jp"));
    }

    #[test]
    fn test_convert_direct() {
        let mut h = ConvHandle::open("euc-jp", "shift_jis").unwrap();
        let mut out = [0u8; 16];
        let (conv, err) = h.convert(&[0x93, 0xfa, 0x96, 0x7b], &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 4, written: 4 });
        assert_eq!(&out[..4], &[0xc6, 0xfc, 0xcb, 0xdc]);
    }

    #[test]
    fn test_convert_via_pivot() {
        // Shift_JIS "nihon" through the pivot to UTF-8
        let mut h = ConvHandle::open("utf-8", "shift_jis").unwrap();
        let mut out = [0u8; 16];
        let (conv, err) = h.convert(&[0x93, 0xfa, 0x96, 0x7b], &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 4, written: 6 });
        assert_eq!(&out[..6], "\u{65e5}\u{672c}".as_bytes());

        // and back
        let mut h = ConvHandle::open("sjis", "utf-8").unwrap();
        let (conv, err) = h.convert("\u{65e5}\u{672c}".as_bytes(), &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 6, written: 4 });
        assert_eq!(&out[..4], &[0x93, 0xfa, 0x96, 0x7b]);
    }

    #[test]
    fn test_convert_identity_pair() {
        let mut h = ConvHandle::open("utf-8", "utf-8").unwrap();
        let mut out = [0u8; 8];
        let (conv, err) = h.convert(&[0xff, 0x00, 0x41], &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 3, written: 3 });
        assert_eq!(&out[..3], &[0xff, 0x00, 0x41]);
    }

    #[test]
    fn test_convert_keeps_progress_on_error() {
        let mut h = ConvHandle::open("euc-jp", "utf-8").unwrap();
        let mut out = [0u8; 16];
        // one full character, then a truncated one
        let (conv, err) = h.convert(&[0xe3, 0x81, 0x82, 0xe3, 0x81], &mut out);
        assert_eq!(err, Some(ConvError::InputNotEnough));
        assert_eq!(conv, Converted { consumed: 3, written: 2 });
        assert_eq!(&out[..2], &[0xa4, 0xa2]);

        // output space for only the first of two characters
        let mut small = [0u8; 3];
        let (conv, err) = h.convert(&[0xe3, 0x81, 0x82, 0xe3, 0x81, 0x84], &mut small);
        assert_eq!(err, Some(ConvError::OutputNotEnough));
        assert_eq!(conv, Converted { consumed: 3, written: 2 });
    }

    #[test]
    fn test_convert_stops_at_illegal_sequence() {
        let mut h = ConvHandle::open("euc-jp", "utf-8").unwrap();
        let mut out = [0u8; 16];
        let (conv, err) = h.convert(&[0x41, 0x80, 0x42], &mut out);
        assert_eq!(err, Some(ConvError::IllegalSequence));
        assert_eq!(conv, Converted { consumed: 1, written: 1 });
        assert_eq!(out[0], 0x41);
    }

    struct Upcase {
        closed: bool,
    }

    impl Delegate for Upcase {
        fn convert(&mut self, input: &[u8], output: &mut [u8]) -> (Converted, Option<ConvError>) {
            let n = input.len().min(output.len());
            for (o, i) in output[..n].iter_mut().zip(&input[..n]) {
                *o = i.to_ascii_uppercase();
            }
            (Converted { consumed: n, written: n }, None)
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn test_delegate_fallback() {
        let mut h = ConvHandle::open_with("ascii-upper", "ascii", |to, from| {
            assert_eq!((to, from), ("ascii-upper", "ascii"));
            Some(Box::new(Upcase { closed: false }))
        })
        .unwrap();
        let mut out = [0u8; 8];
        let (conv, err) = h.convert(b"abc", &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 3, written: 3 });
        assert_eq!(&out[..3], b"ABC");
    }

    #[test]
    fn test_native_pairs_skip_fallback() {
        let mut called = false;
        let h = ConvHandle::open_with("utf-8", "euc-jp", |_, _| {
            called = true;
            None
        });
        assert!(h.is_some());
        assert!(!called);
    }

    #[test]
    fn test_close_idempotent() {
        let mut h = ConvHandle::open_with("x", "y", |_, _| {
            Some(Box::new(Upcase { closed: false }) as Box<dyn Delegate>)
        })
        .unwrap();
        h.close();
        h.close();
        let mut out = [0u8; 4];
        let (conv, err) = h.convert(b"a", &mut out);
        assert_eq!(conv, Converted { consumed: 0, written: 0 });
        assert_eq!(err, Some(ConvError::IllegalSequence));
    }

    #[test]
    fn test_empty_input_is_complete() {
        let mut h = ConvHandle::open("utf-8", "shift_jis").unwrap();
        let mut out = [0u8; 4];
        let (conv, err) = h.convert(&[], &mut out);
        assert_eq!(err, None);
        assert_eq!(conv, Converted { consumed: 0, written: 0 });
    }
}

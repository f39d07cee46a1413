// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! Character encoding conversion among the Japanese encodings, with
//! EUC-JP (in its JIS X 0213 extent) as the pivot.
//!
//! # Usage
//!
//! Open a [`ConvHandle`] for a pair of encoding labels and feed it bytes:
//!
//! ```rust
//! use jconv::ConvHandle;
//!
//! let mut conv = ConvHandle::open("utf-8", "shift_jis").unwrap();
//! let mut buf = [0u8; 64];
//! let (done, err) = conv.convert(&[0x93, 0xfa, 0x96, 0x7b], &mut buf);
//! assert!(err.is_none());
//! assert_eq!(&buf[..done.written], "\u{65e5}\u{672c}".as_bytes());
//! ```
//!
//! The handle reports how far it got together with the error that
//! stopped it, so a caller streaming through fixed buffers can top up
//! the input on [`ConvError::InputNotEnough`] and drain the output on
//! [`ConvError::OutputNotEnough`]. Unmapped but well-formed characters
//! never stop the conversion; they are replaced with `?` or a geta mark
//! depending on the target encoding.
//!
//! The per-character converters in [`codec`] are public as well, for
//! callers that manage their own cursors:
//!
//! ```rust
//! use jconv::codec::sjis_to_eucj;
//!
//! let mut buf = [0u8; 4];
//! let done = sjis_to_eucj(&[0x82, 0xa0], &mut buf).unwrap();
//! assert_eq!((done.consumed, &buf[..done.written]), (2, &[0xa4, 0xa2][..]));
//! ```

pub use crate::conv::{ConvHandle, Delegate};
pub use crate::label::{family_from_label, Family};
pub use crate::types::{ConvError, ConvResult, Converted};

pub mod codec;
pub mod conv;
pub mod label;
pub mod types;

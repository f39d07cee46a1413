// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! Common types for the conversion interface.

use std::error::Error;
use std::fmt;

/// An error sentinel from a directional converter or a conversion handle.
///
/// Unmappable characters are never surfaced through this type: they are
/// resolved by the substitution policy and reported as success, consuming
/// the full declared width of the source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvError {
    /// The input cannot begin any valid character in the source encoding.
    /// Nothing is consumed; the caller decides how to resynchronize,
    /// commonly by skipping one byte and retrying.
    IllegalSequence,
    /// The width declared by the lead byte exceeds the available input.
    /// Transient; the caller refills the input and retries at the same
    /// offset. This takes precedence over `IllegalSequence`, so a truncated
    /// sequence is never misreported as malformed.
    InputNotEnough,
    /// The destination needs more room than the output has. Transient; the
    /// caller drains the output and retries. No partial bytes are written.
    OutputNotEnough,
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConvError::IllegalSequence => write!(f, "illegal byte sequence"),
            ConvError::InputNotEnough => write!(f, "incomplete character at the end of input"),
            ConvError::OutputNotEnough => write!(f, "no room left in the output buffer"),
        }
    }
}

impl Error for ConvError {}

/// Byte counts reported by a successful conversion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    /// Source bytes consumed.
    pub consumed: usize,
    /// Destination bytes written.
    pub written: usize,
}

/// The outcome of converting source bytes: counts on success, a sentinel
/// otherwise.
pub type ConvResult = Result<Converted, ConvError>;
